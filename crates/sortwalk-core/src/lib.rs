//! Core data structures for the sortwalk games.
//!
//! This crate holds everything the games share that is independent of a
//! particular sorting algorithm or of rendering.
//!
//! # Overview
//!
//! 1. **Geometry** - [`Point`] and distance arithmetic in playfield units.
//! 2. **Playfield** - [`Playfield`] describes the logical screen: its size,
//!    where element slots sit and where the avatar spawns.
//! 3. **Avatar** - [`Avatar`] is the player-controlled character. It moves by
//!    a fixed step per tick in the held [`Directions`], is clamped to the
//!    playfield, and exposes the proximity test that gates state transitions.
//! 4. **Board** - [`Board`] is the array being sorted. Each slot is an
//!    [`Element`] whose screen position is derived from its index, so the
//!    logical array and the visual elements can never drift apart.
//!
//! # Examples
//!
//! ```
//! use sortwalk_core::{Avatar, Board, Directions, MovementPolicy, Playfield};
//!
//! let playfield = Playfield::DEFAULT;
//! let board = Board::new(&[42, 17, 93], &playfield);
//! let mut avatar = Avatar::new(board[1].position(), 20.0, 4.0);
//!
//! assert!(avatar.is_near(board[1].position(), 35.0));
//! assert!(!avatar.is_near(board[2].position(), 35.0));
//!
//! avatar.step(Directions::RIGHT, &playfield, MovementPolicy::Unnormalized);
//! assert_eq!(avatar.position().x, board[1].position().x + 4.0);
//! ```

pub mod avatar;
pub mod board;
pub mod geometry;
pub mod playfield;

pub use self::{
    avatar::{Avatar, Directions, MovementPolicy},
    board::{Board, Element},
    geometry::Point,
    playfield::Playfield,
};
