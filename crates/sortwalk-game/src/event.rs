//! Transitions reported by the games.

/// What happened during a call to [`SortGame::confirm`] or [`SortGame::tick`].
///
/// Events are informational; the game has already applied the transition when
/// one is returned.
///
/// [`SortGame::confirm`]: crate::SortGame::confirm
/// [`SortGame::tick`]: crate::SortGame::tick
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameEvent {
    /// A new array was laid out and the game is waiting to start.
    #[display("reset (seed {})", seed.map_or_else(|| "-".to_owned(), |s| s.to_string()))]
    Reset {
        /// Seed the array was generated from, if it was generated.
        seed: Option<u64>,
    },
    /// The player started sorting.
    #[display("started")]
    Started,
    /// Two neighbors were compared (gnome sort).
    #[display("compared {value} at {index} with {left} at {}: {}", index - 1, if *in_order { "in order" } else { "out of order" })]
    Compared {
        /// Cursor position.
        index: usize,
        /// Value at the cursor.
        value: u32,
        /// Value left of the cursor.
        left: u32,
        /// Whether `left <= value`.
        in_order: bool,
    },
    /// Two slots exchanged values.
    #[display("swapped {a} and {b}")]
    Swapped {
        /// First slot.
        a: usize,
        /// Second slot.
        b: usize,
    },
    /// The gnome sort cursor moved right.
    #[display("advanced to {index}")]
    Advanced {
        /// New cursor position.
        index: usize,
    },
    /// A selection sort pass found the minimum of the unsorted suffix.
    #[display("pass {pass_index}: minimum {min_value} at {min_index}")]
    PassStarted {
        /// First slot of the unsorted suffix.
        pass_index: usize,
        /// Slot holding the minimum.
        min_index: usize,
        /// The minimum value.
        min_value: u32,
    },
    /// The avatar picked up an element.
    #[display("picked up {value} at {index}")]
    PickedUp {
        /// Slot the element was picked up from.
        index: usize,
        /// Value now carried.
        value: u32,
    },
    /// The array is sorted.
    #[display("finished")]
    Finished,
}
