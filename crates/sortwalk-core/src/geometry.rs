//! Points and distances in playfield units.

use std::ops::{Add, Sub};

/// A point on the playfield.
///
/// Coordinates are logical units with the origin at the top-left corner and
/// `y` growing downwards, independent of the window's pixel size.
#[derive(Debug, Clone, Copy, PartialEq, Default, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the Euclidean distance between two points.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortwalk_core::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// let b = Point::new(3.0, 4.0);
    /// assert_eq!(a.distance(b), 5.0);
    /// assert_eq!(b.distance(a), 5.0);
    /// ```
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Returns `true` if two circles overlap.
///
/// Touching circles (distance exactly equal to the sum of the radii) do not
/// overlap.
#[must_use]
pub fn circles_overlap(a: Point, a_radius: f32, b: Point, b_radius: f32) -> bool {
    a.distance(b) < a_radius + b_radius
}
