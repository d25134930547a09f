//! The logical screen the games are played on.

use crate::Point;

/// Logical playfield dimensions and slot layout.
///
/// All game logic runs in playfield units; the renderer scales the playfield
/// to whatever window size is available.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    width: f32,
    height: f32,
}

impl Playfield {
    /// The 1200 x 700 playfield both games use.
    pub const DEFAULT: Self = Self::new(1200.0, 700.0);

    /// Distance between the avatar spawn point and the bottom edge.
    const SPAWN_BOTTOM_OFFSET: f32 = 150.0;

    /// Creates a playfield of the given size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the playfield width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Returns the playfield height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Returns the horizontal distance between neighboring slots when `count`
    /// slots are laid out across the playfield.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_spacing(&self, count: usize) -> f32 {
        self.width / (count + 1) as f32
    }

    /// Returns the center of slot `index` out of `count` slots.
    ///
    /// Slots are evenly spaced along the horizontal center line, with one
    /// spacing of margin on either side. Coordinates are truncated to whole
    /// units.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortwalk_core::{Playfield, Point};
    ///
    /// let playfield = Playfield::new(900.0, 600.0);
    /// assert_eq!(playfield.slot_position(0, 8), Point::new(100.0, 300.0));
    /// assert_eq!(playfield.slot_position(7, 8), Point::new(800.0, 300.0));
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_position(&self, index: usize, count: usize) -> Point {
        let x = (self.slot_spacing(count) * (index + 1) as f32).floor();
        let y = (self.height / 2.0).floor();
        Point::new(x, y)
    }

    /// Returns the x coordinate separating the first `boundary` slots from the
    /// rest, halfway between slot `boundary - 1` and slot `boundary`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn slot_boundary_x(&self, boundary: usize, count: usize) -> f32 {
        self.slot_spacing(count) * (boundary as f32 + 0.5)
    }

    /// Returns where the avatar starts: centered horizontally, near the bottom.
    #[must_use]
    pub fn avatar_spawn(&self) -> Point {
        Point::new(
            (self.width / 2.0).floor(),
            self.height - Self::SPAWN_BOTTOM_OFFSET,
        )
    }

    /// Clamps `point` so that a circle of `radius` around it stays inside the
    /// playfield.
    #[must_use]
    pub fn clamp(&self, point: Point, radius: f32) -> Point {
        Point::new(
            radius.max(point.x.min(self.width - radius)),
            radius.max(point.y.min(self.height - radius)),
        )
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slot_layout() {
        let playfield = Playfield::DEFAULT;
        let first = playfield.slot_position(0, 8);
        let last = playfield.slot_position(7, 8);
        assert_eq!(first, Point::new(133.0, 350.0));
        assert_eq!(last, Point::new(1066.0, 350.0));
        for i in 1..8 {
            assert!(playfield.slot_position(i, 8).x > playfield.slot_position(i - 1, 8).x);
        }
    }

    #[test]
    fn test_avatar_spawn() {
        assert_eq!(Playfield::DEFAULT.avatar_spawn(), Point::new(600.0, 550.0));
    }

    #[test]
    fn test_clamp() {
        let playfield = Playfield::DEFAULT;
        assert_eq!(
            playfield.clamp(Point::new(-10.0, 900.0), 20.0),
            Point::new(20.0, 680.0)
        );
        assert_eq!(
            playfield.clamp(Point::new(1300.0, 5.0), 25.0),
            Point::new(1175.0, 25.0)
        );
        let inside = Point::new(300.0, 300.0);
        assert_eq!(playfield.clamp(inside, 20.0), inside);
    }

    #[test]
    fn test_slot_boundary() {
        let playfield = Playfield::new(900.0, 600.0);
        assert_eq!(playfield.slot_boundary_x(1, 8), 150.0);
        assert_eq!(playfield.slot_boundary_x(3, 8), 350.0);
    }
}
