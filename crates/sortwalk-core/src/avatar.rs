//! The player-controlled avatar.

use std::f32::consts::FRAC_1_SQRT_2;

use crate::{Playfield, Point, geometry};

bitflags::bitflags! {
    /// Set of held movement directions.
    ///
    /// Any combination is allowed; opposite directions cancel each other out.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Directions: u8 {
        /// Towards the top edge.
        const UP = 0b0001;
        /// Towards the bottom edge.
        const DOWN = 0b0010;
        /// Towards the left edge.
        const LEFT = 0b0100;
        /// Towards the right edge.
        const RIGHT = 0b1000;
    }
}

impl Directions {
    /// Returns the unit steps along each axis, each in `-1.0..=1.0`.
    #[must_use]
    pub fn axes(self) -> (f32, f32) {
        let axis = |neg: Self, pos: Self| -> f32 {
            match (self.contains(neg), self.contains(pos)) {
                (true, false) => -1.0,
                (false, true) => 1.0,
                _ => 0.0,
            }
        };
        (axis(Self::LEFT, Self::RIGHT), axis(Self::UP, Self::DOWN))
    }
}

/// How diagonal movement is scaled.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MovementPolicy {
    /// Each held axis moves by the full speed, so diagonal movement is
    /// `sqrt(2)` times faster than straight movement.
    #[default]
    Unnormalized,
    /// Diagonal movement is scaled down to the same speed as straight movement.
    Normalized,
}

/// The character the player walks around the playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Avatar {
    position: Point,
    radius: f32,
    speed: f32,
    carrying: Option<u32>,
}

impl Avatar {
    /// Creates an avatar at `position` that is not carrying anything.
    #[must_use]
    pub fn new(position: Point, radius: f32, speed: f32) -> Self {
        Self {
            position,
            radius,
            speed,
            carrying: None,
        }
    }

    /// Returns the avatar's center.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Teleports the avatar, ignoring playfield bounds.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Returns the avatar's collision radius.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the distance moved per tick along a single axis.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Returns the value being carried, if any.
    #[must_use]
    pub fn carrying(&self) -> Option<u32> {
        self.carrying
    }

    /// Starts carrying `value`, replacing anything carried before.
    pub fn pick_up(&mut self, value: u32) {
        self.carrying = Some(value);
    }

    /// Stops carrying and returns the value that was carried.
    pub fn put_down(&mut self) -> Option<u32> {
        self.carrying.take()
    }

    /// Moves one tick in the held directions, then clamps to the playfield.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortwalk_core::{Avatar, Directions, MovementPolicy, Playfield, Point};
    ///
    /// let playfield = Playfield::DEFAULT;
    /// let mut avatar = Avatar::new(Point::new(100.0, 100.0), 20.0, 4.0);
    /// avatar.step(Directions::UP | Directions::LEFT, &playfield, MovementPolicy::Unnormalized);
    /// assert_eq!(avatar.position(), Point::new(96.0, 96.0));
    /// ```
    pub fn step(&mut self, directions: Directions, playfield: &Playfield, policy: MovementPolicy) {
        let (dx, dy) = directions.axes();
        let scale = match policy {
            MovementPolicy::Normalized if dx != 0.0 && dy != 0.0 => FRAC_1_SQRT_2,
            MovementPolicy::Normalized | MovementPolicy::Unnormalized => 1.0,
        };
        let delta = Point::new(dx * self.speed * scale, dy * self.speed * scale);
        self.position = playfield.clamp(self.position + delta, self.radius);
    }

    /// Returns `true` if the avatar overlaps a target circle.
    ///
    /// The test is strict: an avatar exactly `radius + target_radius` away is
    /// not near.
    #[must_use]
    pub fn is_near(&self, target: Point, target_radius: f32) -> bool {
        geometry::circles_overlap(self.position, self.radius, target, target_radius)
    }
}
