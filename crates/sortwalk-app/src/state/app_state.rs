use std::time::Duration;

use sortwalk_core::Directions;
use sortwalk_game::{GameEvent, GameKind, GenerateError, SortGame};

use super::Settings;
use crate::clock::TickPlan;

// AppState owns the running game. Window-only state lives in UiState.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: Box<dyn SortGame>,
    pub(crate) settings: Settings,
}

impl AppState {
    pub(crate) fn new(kind: GameKind) -> Result<Self, GenerateError> {
        Ok(Self::with_game(kind.new_game(kind.config())?))
    }

    #[must_use]
    pub(crate) fn with_game(game: Box<dyn SortGame>) -> Self {
        let mut state = Self {
            game,
            settings: Settings::default(),
        };
        state.apply_settings();
        state
    }

    pub(crate) fn update_settings(&mut self, settings: Settings) {
        self.settings = settings;
        self.apply_settings();
    }

    fn apply_settings(&mut self) {
        self.game
            .set_movement_policy(self.settings.movement.policy());
    }

    /// Runs the frame's logic ticks with the same keys held, then hands the
    /// dropped backlog to the game's timers. Returns the events produced.
    pub(crate) fn run_frame(
        &mut self,
        plan: TickPlan,
        tick: Duration,
        directions: Directions,
    ) -> Vec<GameEvent> {
        let mut events: Vec<_> = (0..plan.ticks)
            .filter_map(|_| self.game.tick(directions, tick))
            .collect();
        if !plan.dropped.is_zero() {
            events.extend(self.game.elapse(plan.dropped));
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use sortwalk_core::MovementPolicy;
    use sortwalk_game::{Autopilot, GameConfig};

    use super::*;
    use crate::{clock::FixedTimestep, state::MovementSettings};

    fn selection_state(values: &[u32]) -> AppState {
        let kind = GameKind::Selection;
        AppState::with_game(kind.new_game_with_values(kind.config(), values).unwrap())
    }

    #[test]
    fn update_settings_applies_movement_policy() {
        let mut state = selection_state(&[3, 1, 2]);
        assert_eq!(state.game.config().movement, MovementPolicy::Unnormalized);

        let mut settings = state.settings.clone();
        settings.movement = MovementSettings {
            normalize_diagonal: true,
        };
        state.update_settings(settings);
        assert_eq!(state.game.config().movement, MovementPolicy::Normalized);
    }

    #[test]
    fn run_frame_moves_avatar() {
        let mut state = selection_state(&[3, 1, 2]);
        state.game.confirm();
        let start = state.game.avatar().position();

        let plan = TickPlan {
            ticks: 3,
            dropped: Duration::ZERO,
        };
        let events = state.run_frame(plan, GameConfig::TICK, Directions::UP);
        assert!(events.is_empty());
        let moved = state.game.avatar().position();
        assert_eq!(moved.x, start.x);
        assert!((start.y - moved.y - 3.0 * state.game.avatar().speed()).abs() < 1e-3);
    }

    #[test]
    fn pause_keeps_wall_clock_time_on_slow_frames() {
        let mut state = selection_state(&[3, 1, 2]);
        let autopilot = Autopilot::default();
        while state.game.state_name() != "PAUSED_AFTER_SWAP" {
            autopilot.step(state.game.as_mut());
        }

        // At 5 FPS every frame hits the tick cap and drops the rest.
        let mut clock = FixedTimestep::default();
        let frame_dt = Duration::from_millis(200);
        for _ in 0..4 {
            let plan = clock.advance(frame_dt);
            assert!(!plan.dropped.is_zero());
            let events = state.run_frame(plan, clock.tick(), Directions::empty());
            assert!(events.is_empty());
            assert_eq!(state.game.state_name(), "PAUSED_AFTER_SWAP");
        }

        let plan = clock.advance(frame_dt);
        let events = state.run_frame(plan, clock.tick(), Directions::empty());
        assert!(matches!(events.as_slice(), [GameEvent::PassStarted { .. }]));
        assert_eq!(state.game.state_name(), "MOVE_TO_MIN");
    }
}
