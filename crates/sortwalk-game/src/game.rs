//! The interface shared by both games.

use std::{fmt, time::Duration};

use sortwalk_core::{Avatar, Board, Directions, MovementPolicy};
use sortwalk_generator::GenerateError;

use crate::{GameConfig, GameEvent, GnomeSortGame, SelectionSortGame};

/// Which game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum GameKind {
    /// Gnome Sorter.
    Gnome,
    /// Selection Sorter.
    Selection,
}

impl GameKind {
    /// Returns the heading shown above the playfield.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            GameKind::Gnome => "Gnome Sorter: The Garden Gauntlet",
            GameKind::Selection => "Selection Sorter",
        }
    }

    /// Returns the window title.
    #[must_use]
    pub fn window_title(self) -> &'static str {
        match self {
            GameKind::Gnome => "Gnome Sorter Game",
            GameKind::Selection => "Selection Sorter Game",
        }
    }

    /// Returns the default configuration of this game.
    #[must_use]
    pub fn config(self) -> GameConfig {
        match self {
            GameKind::Gnome => GameConfig::GNOME,
            GameKind::Selection => GameConfig::SELECTION,
        }
    }

    /// Starts a game of this kind with a randomly generated array.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` describes arrays that cannot be generated.
    pub fn new_game(self, config: GameConfig) -> Result<Box<dyn SortGame>, GenerateError> {
        let game: Box<dyn SortGame> = match self {
            GameKind::Gnome => Box::new(GnomeSortGame::new(config)?),
            GameKind::Selection => Box::new(SelectionSortGame::new(config)?),
        };
        Ok(game)
    }

    /// Starts a game of this kind with the given array.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` describes arrays that cannot be generated.
    pub fn new_game_with_values(
        self,
        config: GameConfig,
        values: &[u32],
    ) -> Result<Box<dyn SortGame>, GenerateError> {
        let game: Box<dyn SortGame> = match self {
            GameKind::Gnome => Box::new(GnomeSortGame::with_values(config, values)?),
            GameKind::Selection => Box::new(SelectionSortGame::with_values(config, values)?),
        };
        Ok(game)
    }
}

/// How an element should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum ElementRole {
    /// Gnome sort: the element at the cursor.
    Current,
    /// Gnome sort: the left neighbor the current element is compared with.
    Compare,
    /// Selection sort: the minimum to pick up.
    Minimum,
    /// Selection sort: the slot the minimum is carried to.
    SwapTarget,
}

/// A sorting game driven one fixed tick at a time.
///
/// Commands that do not apply to the current state are ignored and return
/// `None`.
pub trait SortGame: fmt::Debug {
    /// Returns which game this is.
    fn kind(&self) -> GameKind;

    /// Returns the configuration the game runs with.
    fn config(&self) -> &GameConfig;

    /// Changes how diagonal movement is scaled.
    fn set_movement_policy(&mut self, policy: MovementPolicy);

    /// Returns the array being sorted.
    fn board(&self) -> &Board;

    /// Returns the player's avatar.
    fn avatar(&self) -> &Avatar;

    /// Returns the name of the current state, e.g. `MOVING_TO_COMPARE`.
    fn state_name(&self) -> String;

    /// Returns `true` if the game is waiting for the player to start.
    fn is_ready(&self) -> bool;

    /// Returns `true` if the array has been sorted.
    fn is_finished(&self) -> bool;

    /// Returns `true` if progress currently requires a confirmation.
    fn awaiting_confirmation(&self) -> bool;

    /// Returns the slot the avatar has to reach to make progress, if any.
    fn target(&self) -> Option<usize>;

    /// Returns how the element at `index` should be highlighted.
    fn element_role(&self, index: usize) -> Option<ElementRole>;

    /// Returns the boundary of the sorted prefix, if one should be shown.
    fn sorted_boundary(&self) -> Option<usize> {
        None
    }

    /// Returns the instruction shown to the player.
    fn objective(&self) -> String;

    /// Returns the array rendered as text.
    fn array_line(&self) -> String;

    /// Handles the confirmation key.
    fn confirm(&mut self) -> Option<GameEvent>;

    /// Starts over with a freshly generated array.
    fn reset(&mut self) -> GameEvent;

    /// Starts over with the given array.
    fn reset_with_values(&mut self, values: &[u32]) -> GameEvent;

    /// Advances game logic by one tick of length `dt` with `directions` held.
    fn tick(&mut self, directions: Directions, dt: Duration) -> Option<GameEvent>;

    /// Lets `dt` of game time pass without running a tick.
    ///
    /// Frontends call this for time they skip ticks for, so that timers
    /// stay on wall-clock time. The avatar does not move.
    fn elapse(&mut self, _dt: Duration) -> Option<GameEvent> {
        None
    }
}
