//! Selection Sorter: selection sort played by carrying blocks.
//!
//! Each pass finds the minimum of the unsorted suffix. The sorter walks to it
//! to pick it up, then carries it to the first slot of the suffix, where the
//! two blocks are swapped. Both steps are proximity triggers; the only
//! confirmations are starting and restarting the game. After every swap game
//! logic pauses briefly so the player can see the result.

use std::time::Duration;

use sortwalk_core::{Avatar, Board, Directions, MovementPolicy};
use sortwalk_generator::GenerateError;

use crate::{ElementRole, GameConfig, GameEvent, GameKind, SortGame, stage::Stage};

/// States of the selection sort machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum SelectionState {
    /// Waiting for the player to start.
    #[display("READY")]
    Ready,
    /// About to scan the unsorted suffix. Never observed between calls.
    #[display("START_PASS")]
    StartPass,
    /// Waiting for the sorter to reach the minimum.
    #[display("MOVE_TO_MIN")]
    MoveToMin,
    /// Waiting for the sorter to carry the minimum to the front of the suffix.
    #[display("CARRYING_TO_SWAP")]
    CarryingToSwap,
    /// Showing the completed swap; logic resumes when `remaining` runs out.
    #[display("PAUSED_AFTER_SWAP")]
    PausedAfterSwap {
        /// Time left before the next pass starts.
        remaining: Duration,
    },
    /// The array is sorted.
    #[display("FINISHED")]
    Finished,
}

/// A Selection Sorter session.
///
/// # Invariants
///
/// Slots below `pass_index` hold their final values and are never touched
/// again during the session.
#[derive(Debug, Clone)]
pub struct SelectionSortGame {
    stage: Stage,
    pass_index: usize,
    min_index: usize,
    state: SelectionState,
}

impl SelectionSortGame {
    /// Starts a game with a randomly generated array.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` describes arrays that cannot be generated.
    pub fn new(config: GameConfig) -> Result<Self, GenerateError> {
        let mut game = Self::with_values(config, &[])?;
        game.reset();
        Ok(game)
    }

    /// Starts a game with the given array.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` describes arrays that cannot be generated,
    /// since resetting the game later draws from it.
    pub fn with_values(config: GameConfig, values: &[u32]) -> Result<Self, GenerateError> {
        Ok(Self {
            stage: Stage::new(config, values)?,
            pass_index: 0,
            min_index: 0,
            state: SelectionState::Ready,
        })
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Returns the boundary between the sorted prefix and the unsorted suffix.
    #[must_use]
    pub fn pass_index(&self) -> usize {
        self.pass_index
    }

    /// Returns the slot holding the minimum of the current pass.
    #[must_use]
    pub fn min_index(&self) -> usize {
        self.min_index
    }

    fn count_down_pause(&mut self, remaining: Duration, dt: Duration) -> Option<GameEvent> {
        let remaining = remaining.saturating_sub(dt);
        if remaining.is_zero() {
            return Some(self.start_pass());
        }
        self.state = SelectionState::PausedAfterSwap { remaining };
        None
    }

    fn restart_cursors(&mut self) {
        self.pass_index = 0;
        self.min_index = 0;
        self.state = SelectionState::Ready;
    }

    fn start_pass(&mut self) -> GameEvent {
        self.state = SelectionState::StartPass;
        let len = self.stage.board.len();
        let min_index = if self.pass_index + 1 >= len {
            None
        } else {
            self.stage.board.min_index_from(self.pass_index)
        };
        match min_index {
            Some(min_index) => {
                self.min_index = min_index;
                self.state = SelectionState::MoveToMin;
                GameEvent::PassStarted {
                    pass_index: self.pass_index,
                    min_index,
                    min_value: self.stage.board[min_index].value(),
                }
            }
            None => {
                self.state = SelectionState::Finished;
                GameEvent::Finished
            }
        }
    }

    fn pick_up(&mut self) -> GameEvent {
        let index = self.min_index;
        let value = self.stage.board[index].value();
        self.stage.avatar.pick_up(value);
        self.stage.board.set_hidden(index, true);
        self.state = SelectionState::CarryingToSwap;
        GameEvent::PickedUp { index, value }
    }

    fn deliver(&mut self) -> GameEvent {
        let (a, b) = (self.pass_index, self.min_index);
        self.stage.board.swap(a, b);
        self.stage.avatar.put_down();
        self.stage.board.set_hidden(b, false);
        self.pass_index += 1;
        self.state = SelectionState::PausedAfterSwap {
            remaining: self.stage.config.pause_after_swap,
        };
        GameEvent::Swapped { a, b }
    }

    fn log_event(&self, event: &GameEvent) {
        log::debug!("selection: {event} -> {}", self.state);
    }
}

impl SortGame for SelectionSortGame {
    fn kind(&self) -> GameKind {
        GameKind::Selection
    }

    fn config(&self) -> &GameConfig {
        &self.stage.config
    }

    fn set_movement_policy(&mut self, policy: MovementPolicy) {
        self.stage.config.movement = policy;
    }

    fn board(&self) -> &Board {
        &self.stage.board
    }

    fn avatar(&self) -> &Avatar {
        &self.stage.avatar
    }

    fn state_name(&self) -> String {
        self.state.to_string()
    }

    fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    fn awaiting_confirmation(&self) -> bool {
        false
    }

    fn target(&self) -> Option<usize> {
        match self.state {
            SelectionState::MoveToMin => Some(self.min_index),
            SelectionState::CarryingToSwap => Some(self.pass_index),
            SelectionState::Ready
            | SelectionState::StartPass
            | SelectionState::PausedAfterSwap { .. }
            | SelectionState::Finished => None,
        }
    }

    fn element_role(&self, index: usize) -> Option<ElementRole> {
        match self.state {
            SelectionState::MoveToMin if index == self.min_index => Some(ElementRole::Minimum),
            SelectionState::CarryingToSwap if index == self.pass_index => {
                Some(ElementRole::SwapTarget)
            }
            _ => None,
        }
    }

    fn sorted_boundary(&self) -> Option<usize> {
        (0 < self.pass_index && self.pass_index < self.stage.board.len())
            .then_some(self.pass_index)
    }

    fn objective(&self) -> String {
        match self.state {
            SelectionState::Ready => "Press SPACE to begin sorting! (R to reset)".to_owned(),
            SelectionState::StartPass => "Looking for the smallest block...".to_owned(),
            SelectionState::MoveToMin => format!(
                "Minimum is {}. Move to the GREEN highlighted block to pick it up.",
                self.stage.board[self.min_index].value()
            ),
            SelectionState::CarryingToSwap => format!(
                "Block acquired! Now move to the CYAN swap target at position {}.",
                self.pass_index
            ),
            SelectionState::PausedAfterSwap { .. } => {
                "Swap complete! Starting next pass...".to_owned()
            }
            SelectionState::Finished => "Array sorted! Press SPACE to play again.".to_owned(),
        }
    }

    fn array_line(&self) -> String {
        self.stage
            .board
            .values()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn confirm(&mut self) -> Option<GameEvent> {
        let event = match self.state {
            SelectionState::Ready => self.start_pass(),
            SelectionState::Finished => self.reset(),
            SelectionState::StartPass
            | SelectionState::MoveToMin
            | SelectionState::CarryingToSwap
            | SelectionState::PausedAfterSwap { .. } => return None,
        };
        self.log_event(&event);
        Some(event)
    }

    fn reset(&mut self) -> GameEvent {
        let event = self.stage.regenerate();
        self.restart_cursors();
        event
    }

    fn reset_with_values(&mut self, values: &[u32]) -> GameEvent {
        self.stage.replace_values(values);
        self.restart_cursors();
        GameEvent::Reset { seed: None }
    }

    fn tick(&mut self, directions: Directions, dt: Duration) -> Option<GameEvent> {
        let event = match self.state {
            SelectionState::PausedAfterSwap { remaining } => self.count_down_pause(remaining, dt),
            SelectionState::MoveToMin => {
                self.stage.move_avatar(directions);
                self.stage
                    .avatar_near(self.min_index)
                    .then(|| self.pick_up())
            }
            SelectionState::CarryingToSwap => {
                self.stage.move_avatar(directions);
                self.stage
                    .avatar_near(self.pass_index)
                    .then(|| self.deliver())
            }
            SelectionState::Ready | SelectionState::StartPass | SelectionState::Finished => {
                self.stage.move_avatar(directions);
                None
            }
        };
        if let Some(event) = &event {
            self.log_event(event);
        }
        event
    }

    fn elapse(&mut self, dt: Duration) -> Option<GameEvent> {
        let SelectionState::PausedAfterSwap { remaining } = self.state else {
            return None;
        };
        let event = self.count_down_pause(remaining, dt)?;
        self.log_event(&event);
        Some(event)
    }
}
