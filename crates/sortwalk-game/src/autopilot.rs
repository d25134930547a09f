//! Headless driver that plays a game to completion.
//!
//! The autopilot walks the avatar straight towards whatever slot the game is
//! waiting for and confirms every prompt, so it takes exactly the path the
//! algorithm prescribes. It is used to check the games end to end and to
//! replay a seed without a window.

use sortwalk_core::Directions;

use crate::{GameConfig, GameEvent, SortGame};

/// Errors returned by [`Autopilot::run`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum AutoplayError {
    /// The game did not finish within the step budget.
    #[display("game did not finish within {steps} steps")]
    StepBudgetExceeded {
        /// Steps taken before giving up.
        steps: u64,
    },
}

/// Everything that happened during an autopilot run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    /// Events in the order they occurred.
    pub events: Vec<GameEvent>,
    /// Logic ticks spent, not counting confirmations.
    pub ticks: u64,
    /// Confirmations issued.
    pub confirmations: u64,
}

/// Plays a [`SortGame`] by steering towards its target and confirming prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autopilot {
    max_steps: u64,
}

impl Autopilot {
    /// Default step budget; several times what an 8-element game needs.
    pub const DEFAULT_MAX_STEPS: u64 = 200_000;

    /// Creates an autopilot that gives up after `max_steps` ticks and
    /// confirmations combined.
    #[must_use]
    pub fn new(max_steps: u64) -> Self {
        Self { max_steps }
    }

    /// Returns the directions that move the avatar towards the game's target.
    ///
    /// An axis is left alone once the avatar is within half a step of the
    /// target on it, so the avatar does not oscillate around the target.
    #[must_use]
    pub fn steer(game: &dyn SortGame) -> Directions {
        let Some(target) = game.target().and_then(|index| game.board().get(index)) else {
            return Directions::empty();
        };
        let avatar = game.avatar();
        let delta = target.position() - avatar.position();
        let dead_zone = avatar.speed() / 2.0;

        let mut directions = Directions::empty();
        if delta.x > dead_zone {
            directions |= Directions::RIGHT;
        } else if delta.x < -dead_zone {
            directions |= Directions::LEFT;
        }
        if delta.y > dead_zone {
            directions |= Directions::DOWN;
        } else if delta.y < -dead_zone {
            directions |= Directions::UP;
        }
        directions
    }

    /// Performs a single step: a confirmation if the game is waiting for one,
    /// otherwise one logic tick.
    ///
    /// Does nothing once the game is finished.
    pub fn step(&self, game: &mut dyn SortGame) -> Option<GameEvent> {
        if game.is_finished() {
            return None;
        }
        if game.is_ready() || game.awaiting_confirmation() {
            game.confirm()
        } else {
            let directions = Self::steer(game);
            game.tick(directions, GameConfig::TICK)
        }
    }

    /// Plays `game` until it is finished.
    ///
    /// # Errors
    ///
    /// Returns [`AutoplayError::StepBudgetExceeded`] if the game is not
    /// finished after the configured number of steps.
    pub fn run(&self, game: &mut dyn SortGame) -> Result<Transcript, AutoplayError> {
        let mut transcript = Transcript::default();
        while !game.is_finished() {
            let steps = transcript.ticks + transcript.confirmations;
            if steps >= self.max_steps {
                return Err(AutoplayError::StepBudgetExceeded { steps });
            }
            if game.is_ready() || game.awaiting_confirmation() {
                transcript.confirmations += 1;
            } else {
                transcript.ticks += 1;
            }
            if let Some(event) = self.step(game) {
                transcript.events.push(event);
            }
        }
        Ok(transcript)
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_STEPS)
    }
}
