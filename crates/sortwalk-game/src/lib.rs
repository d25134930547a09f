//! Sorting-algorithm games driven by a walking avatar.
//!
//! Each game is a finite-state machine that owns the array being sorted, the
//! avatar and the algorithm cursors. The player advances the algorithm by
//! walking the avatar to the element the algorithm needs next (a proximity
//! trigger) and by confirming prompts.
//!
//! - [`GnomeSortGame`]: compare the pot at the cursor with its left neighbor,
//!   then confirm a swap or an advance.
//! - [`SelectionSortGame`]: pick up the minimum of the unsorted suffix and
//!   carry it to the front of the suffix.
//!
//! Both implement [`SortGame`], which is all a frontend needs: feed it held
//! [`Directions`] once per fixed tick, forward confirm and reset commands,
//! and read back the board, the avatar and the HUD text.
//!
//! [`Directions`]: sortwalk_core::Directions
//!
//! # Examples
//!
//! ```
//! use sortwalk_game::{Autopilot, GameConfig, GnomeSortGame, SortGame};
//!
//! let mut game = GnomeSortGame::with_values(GameConfig::GNOME, &[42, 17, 93, 8, 55, 61, 29, 74])?;
//! assert!(game.is_ready());
//!
//! let transcript = Autopilot::default().run(&mut game)?;
//! assert!(game.is_finished());
//! assert_eq!(game.board().values(), vec![8, 17, 29, 42, 55, 61, 74, 93]);
//! assert!(transcript.ticks > 0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod autopilot;
pub mod config;
pub mod event;
pub mod game;
pub mod gnome;
pub mod selection;
mod stage;

pub use self::{
    autopilot::{AutoplayError, Autopilot, Transcript},
    config::GameConfig,
    event::GameEvent,
    game::{ElementRole, GameKind, SortGame},
    gnome::{GnomeSortGame, GnomeState},
    selection::{SelectionSortGame, SelectionState},
};
pub use sortwalk_generator::GenerateError;
