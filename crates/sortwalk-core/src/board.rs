//! The array being sorted and its on-screen slots.

use std::ops::Index;

use crate::{Playfield, Point};

/// A single slot of the board.
///
/// The slot's position is fixed by its index; sorting moves values between
/// slots, never the slots themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    value: u32,
    index: usize,
    position: Point,
    hidden: bool,
}

impl Element {
    /// Returns the value currently held by this slot.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Returns the slot's logical index in the array.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the slot's center on the playfield.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns `true` if the element has been picked up and should not be drawn.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// The array being sorted, laid out as evenly spaced slots.
///
/// The board is the single owner of the values, so the logical array returned
/// by [`Board::values`] always agrees with the elements that are drawn.
///
/// # Examples
///
/// ```
/// use sortwalk_core::{Board, Playfield};
///
/// let mut board = Board::new(&[42, 17, 93], &Playfield::DEFAULT);
/// let left = board[0].position();
///
/// board.swap(0, 1);
/// assert_eq!(board.values(), vec![17, 42, 93]);
/// assert_eq!(board[0].value(), 17);
/// assert_eq!(board[0].position(), left); // slots stay put
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    elements: Vec<Element>,
}

impl Board {
    /// Lays out `values` across the playfield, one slot per value.
    #[must_use]
    pub fn new(values: &[u32], playfield: &Playfield) -> Self {
        let count = values.len();
        let elements = values
            .iter()
            .enumerate()
            .map(|(index, &value)| Element {
                value,
                index,
                position: playfield.slot_position(index, count),
                hidden: false,
            })
            .collect();
        Self { elements }
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the board has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the slot at `index`, if it exists.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Returns all slots in index order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns the logical array.
    #[must_use]
    pub fn values(&self) -> Vec<u32> {
        self.elements.iter().map(Element::value).collect()
    }

    /// Returns the index of the smallest value in `start..len`.
    ///
    /// Ties resolve to the earliest index. Returns `None` if the range is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortwalk_core::{Board, Playfield};
    ///
    /// let board = Board::new(&[5, 3, 9, 3], &Playfield::DEFAULT);
    /// assert_eq!(board.min_index_from(0), Some(1));
    /// assert_eq!(board.min_index_from(2), Some(3));
    /// assert_eq!(board.min_index_from(4), None);
    /// ```
    #[must_use]
    pub fn min_index_from(&self, start: usize) -> Option<usize> {
        let mut elements = self.elements.get(start..)?.iter();
        let first = elements.next()?;
        let mut min = first;
        for element in elements {
            if element.value < min.value {
                min = element;
            }
        }
        Some(min.index)
    }

    /// Exchanges the values held by two slots.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) {
        let value_a = self.elements[a].value;
        self.elements[a].value = self.elements[b].value;
        self.elements[b].value = value_a;
    }

    /// Marks the slot at `index` as hidden or visible.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_hidden(&mut self, index: usize, hidden: bool) {
        self.elements[index].hidden = hidden;
    }

    /// Returns `true` if the values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.elements.is_sorted_by_key(Element::value)
    }
}

impl Index<usize> for Board {
    type Output = Element;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_lays_out_slots() {
        let playfield = Playfield::DEFAULT;
        let board = Board::new(&[42, 17, 93, 8, 55, 61, 29, 74], &playfield);
        assert_eq!(board.len(), 8);
        for (i, element) in board.elements().iter().enumerate() {
            assert_eq!(element.index(), i);
            assert_eq!(element.position(), playfield.slot_position(i, 8));
            assert!(!element.is_hidden());
        }
        assert_eq!(board.values(), vec![42, 17, 93, 8, 55, 61, 29, 74]);
    }

    #[test]
    fn test_swap_keeps_positions() {
        let mut board = Board::new(&[1, 2, 3], &Playfield::DEFAULT);
        let positions: Vec<_> = board.elements().iter().map(Element::position).collect();
        board.swap(0, 2);
        assert_eq!(board.values(), vec![3, 2, 1]);
        board.swap(1, 1);
        assert_eq!(board.values(), vec![3, 2, 1]);
        let after: Vec<_> = board.elements().iter().map(Element::position).collect();
        assert_eq!(positions, after);
    }

    #[test]
    fn test_hidden() {
        let mut board = Board::new(&[1, 2, 3], &Playfield::DEFAULT);
        board.set_hidden(1, true);
        assert!(board[1].is_hidden());
        board.swap(1, 2);
        assert!(board[1].is_hidden());
        board.set_hidden(1, false);
        assert!(board.elements().iter().all(|e| !e.is_hidden()));
    }

    #[test]
    fn test_is_sorted() {
        let playfield = Playfield::DEFAULT;
        assert!(Board::new(&[], &playfield).is_sorted());
        assert!(Board::new(&[7], &playfield).is_sorted());
        assert!(Board::new(&[1, 1, 2], &playfield).is_sorted());
        assert!(!Board::new(&[2, 1], &playfield).is_sorted());
    }

    proptest! {
        #[test]
        fn prop_min_index_is_first_minimum(
            values in prop::collection::vec(0u32..20, 1..12),
            start in 0usize..12,
        ) {
            let board = Board::new(&values, &Playfield::DEFAULT);
            let expected = values
                .get(start..)
                .and_then(|rest| rest.iter().min().map(|min| (min, rest)))
                .and_then(|(min, rest)| rest.iter().position(|v| v == min))
                .map(|offset| start + offset);
            prop_assert_eq!(board.min_index_from(start), expected);
        }
    }
}
