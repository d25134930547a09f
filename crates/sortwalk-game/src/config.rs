//! Per-game constants.

use std::{ops::Range, time::Duration};

use sortwalk_core::{MovementPolicy, Playfield};
use sortwalk_generator::{ArrayGenerator, GenerateError};

/// Tunables of a game.
///
/// The two games share the playfield but differ in avatar size, speed and in
/// how close the avatar must get to an element.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Logical screen the game is played on.
    pub playfield: Playfield,
    /// Collision radius of the avatar.
    pub avatar_radius: f32,
    /// Distance the avatar moves per tick along each held axis.
    pub avatar_speed: f32,
    /// Collision radius of an element.
    pub target_radius: f32,
    /// How long game logic is suspended after a completed swap.
    pub pause_after_swap: Duration,
    /// How diagonal movement is scaled.
    pub movement: MovementPolicy,
    /// Number of elements in a generated array.
    pub array_len: usize,
    /// Range the values of a generated array are drawn from.
    pub value_range: Range<u32>,
}

impl GameConfig {
    /// Logic ticks per second.
    pub const TICK_RATE: u32 = 60;

    /// Duration of a single logic tick.
    pub const TICK: Duration = Duration::from_nanos(1_000_000_000 / Self::TICK_RATE as u64);

    /// Gnome Sorter: a small gnome walking between flower pots.
    pub const GNOME: Self = Self {
        playfield: Playfield::DEFAULT,
        avatar_radius: 20.0,
        avatar_speed: 4.0,
        target_radius: 35.0,
        pause_after_swap: Duration::ZERO,
        movement: MovementPolicy::Unnormalized,
        array_len: sortwalk_generator::DEFAULT_LEN,
        value_range: sortwalk_generator::DEFAULT_RANGE,
    };

    /// Selection Sorter: a round sorter carrying 80x80 data blocks.
    pub const SELECTION: Self = Self {
        playfield: Playfield::DEFAULT,
        avatar_radius: 25.0,
        avatar_speed: 4.5,
        target_radius: 40.0,
        pause_after_swap: Duration::from_millis(1000),
        movement: MovementPolicy::Unnormalized,
        array_len: sortwalk_generator::DEFAULT_LEN,
        value_range: sortwalk_generator::DEFAULT_RANGE,
    };

    /// Builds the generator for this game's arrays.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RangeTooSmall`] if `value_range` cannot
    /// supply `array_len` distinct values.
    pub fn generator(&self) -> Result<ArrayGenerator, GenerateError> {
        ArrayGenerator::new(self.array_len, self.value_range.clone())
    }
}
