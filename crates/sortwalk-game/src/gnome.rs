//! Gnome Sorter: gnome sort played by walking between flower pots.
//!
//! The gnome walks to the pot at the cursor. Arriving there compares the pot
//! with its left neighbor; the player then confirms either a swap (after which
//! the cursor steps back) or an advance (after which it steps forward). The
//! array is sorted once the cursor walks off the right end.

use std::time::Duration;

use sortwalk_core::{Avatar, Board, Directions, MovementPolicy};
use sortwalk_generator::GenerateError;

use crate::{ElementRole, GameConfig, GameEvent, GameKind, SortGame, stage::Stage};

/// States of the gnome sort machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GnomeState {
    /// Waiting for the player to start.
    #[display("READY")]
    Ready,
    /// Waiting for the gnome to reach the pot at the cursor.
    #[display("MOVING_TO_COMPARE")]
    MovingToCompare,
    /// The pot at the cursor is smaller than its left neighbor.
    #[display("SWAP_PROMPT")]
    SwapPrompt,
    /// The pot at the cursor is in order with its left neighbor.
    #[display("ADVANCE_PROMPT")]
    AdvancePrompt,
    /// The array is sorted.
    #[display("FINISHED")]
    Finished,
}

/// A Gnome Sorter session.
///
/// # Invariants
///
/// `sort_index` is at least 1 at all times, so a comparison always has a left
/// neighbor. While sorting is in progress it is also below the array length.
#[derive(Debug, Clone)]
pub struct GnomeSortGame {
    stage: Stage,
    sort_index: usize,
    state: GnomeState,
}

impl GnomeSortGame {
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
            sort_index: 1,
            state: GnomeState::Ready,
        })
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> GnomeState {
        self.state
    }

    /// Returns the cursor: the pot compared with its left neighbor.
    #[must_use]
    pub fn sort_index(&self) -> usize {
        self.sort_index
    }

    fn value(&self, index: usize) -> u32 {
        self.stage.board[index].value()
    }

    fn restart_cursor(&mut self) {
        self.sort_index = 1;
        self.state = GnomeState::Ready;
    }

    fn compare(&mut self) -> GameEvent {
        let index = self.sort_index;
        let value = self.value(index);
        let left = self.value(index - 1);
        let in_order = value >= left;
        self.state = if in_order {
            GnomeState::AdvancePrompt
        } else {
            GnomeState::SwapPrompt
        };
        GameEvent::Compared {
            index,
            value,
            left,
            in_order,
        }
    }

    fn advance(&mut self) -> GameEvent {
        self.sort_index += 1;
        if self.sort_index >= self.stage.board.len() {
            self.state = GnomeState::Finished;
            GameEvent::Finished
        } else {
            self.state = GnomeState::MovingToCompare;
            GameEvent::Advanced {
                index: self.sort_index,
            }
        }
    }

    fn swap_back(&mut self) -> GameEvent {
        let (a, b) = (self.sort_index, self.sort_index - 1);
        self.stage.board.swap(a, b);
        self.sort_index = usize::max(1, self.sort_index - 1);
        self.state = GnomeState::MovingToCompare;
        GameEvent::Swapped { a, b }
    }
}

impl SortGame for GnomeSortGame {
    fn kind(&self) -> GameKind {
        GameKind::Gnome
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
        matches!(self.state, GnomeState::SwapPrompt | GnomeState::AdvancePrompt)
    }

    fn target(&self) -> Option<usize> {
        self.state.is_moving_to_compare().then_some(self.sort_index)
    }

    fn element_role(&self, index: usize) -> Option<ElementRole> {
        if self.state.is_ready() {
            return None;
        }
        if index == self.sort_index {
            Some(ElementRole::Current)
        } else if index + 1 == self.sort_index {
            Some(ElementRole::Compare)
        } else {
            None
        }
    }

    fn objective(&self) -> String {
        match self.state {
            GnomeState::Ready => "Press SPACE to start sorting! (R to reset)".to_owned(),
            GnomeState::MovingToCompare => format!(
                "Move the gnome to pot {} to compare it with the previous one.",
                self.sort_index
            ),
            GnomeState::SwapPrompt => format!(
                "{} < {}. Out of order! Press SPACE to SWAP.",
                self.value(self.sort_index),
                self.value(self.sort_index - 1)
            ),
            GnomeState::AdvancePrompt => format!(
                "{} >= {}. In order! Press SPACE to ADVANCE.",
                self.value(self.sort_index),
                self.value(self.sort_index - 1)
            ),
            GnomeState::Finished => "All pots sorted! Press SPACE to play again.".to_owned(),
        }
    }

    fn array_line(&self) -> String {
        self.stage
            .board
            .elements()
            .iter()
            .map(|element| {
                let i = element.index();
                if i == self.sort_index || i + 1 == self.sort_index {
                    format!("[{}]", element.value())
                } else {
                    element.value().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn confirm(&mut self) -> Option<GameEvent> {
        let event = match self.state {
            GnomeState::Ready if self.sort_index >= self.stage.board.len() => {
                self.state = GnomeState::Finished;
                GameEvent::Finished
            }
            GnomeState::Ready => {
                self.state = GnomeState::MovingToCompare;
                GameEvent::Started
            }
            GnomeState::SwapPrompt => self.swap_back(),
            GnomeState::AdvancePrompt => self.advance(),
            GnomeState::Finished => self.reset(),
            GnomeState::MovingToCompare => return None,
        };
        log::debug!("gnome: {event} -> {}", self.state);
        Some(event)
    }

    fn reset(&mut self) -> GameEvent {
        let event = self.stage.regenerate();
        self.restart_cursor();
        event
    }

    fn reset_with_values(&mut self, values: &[u32]) -> GameEvent {
        self.stage.replace_values(values);
        self.restart_cursor();
        GameEvent::Reset { seed: None }
    }

    fn tick(&mut self, directions: Directions, _dt: Duration) -> Option<GameEvent> {
        if matches!(self.state, GnomeState::Ready | GnomeState::Finished) {
            return None;
        }
        self.stage.move_avatar(directions);

        if self.state.is_moving_to_compare() && self.stage.avatar_near(self.sort_index) {
            let event = self.compare();
            log::debug!("gnome: {event} -> {}", self.state);
            return Some(event);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use sortwalk_core::Point;

    use super::*;
    use crate::Autopilot;

    const EXAMPLE: [u32; 8] = [42, 17, 93, 8, 55, 61, 29, 74];

    fn game_with(values: &[u32]) -> GnomeSortGame {
        GnomeSortGame::with_values(GameConfig::GNOME, values).unwrap()
    }

    fn example_game() -> GnomeSortGame {
        game_with(&EXAMPLE)
    }

    fn walk_to(game: &mut GnomeSortGame, index: usize) -> Option<GameEvent> {
        let target = game.board()[index].position();
        game.stage.avatar.set_position(target);
        game.tick(Directions::empty(), GameConfig::TICK)
    }

    #[test]
    fn test_new_game_is_ready() {
        let game = GnomeSortGame::new(GameConfig::GNOME).unwrap();
        assert_eq!(game.state(), GnomeState::Ready);
        assert_eq!(game.sort_index(), 1);
        assert_eq!(game.board().len(), 8);
        assert_eq!(game.target(), None);
        assert_eq!(
            game.avatar().position(),
            GameConfig::GNOME.playfield.avatar_spawn()
        );
    }

    #[test]
    fn test_new_game_rejects_unusable_config() {
        let config = GameConfig {
            value_range: 10..12,
            ..GameConfig::GNOME
        };
        assert!(matches!(
            GnomeSortGame::with_values(config.clone(), &[11, 10]),
            Err(GenerateError::RangeTooSmall { len: 8, .. })
        ));
        assert!(GnomeSortGame::new(config).is_err());
    }

    #[test]
    fn test_reset_draws_from_configured_range() {
        let config = GameConfig {
            array_len: 4,
            value_range: 1..5,
            ..GameConfig::GNOME
        };
        let mut game = GnomeSortGame::new(config).unwrap();
        let mut values = game.board().values();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2, 3, 4]);

        assert!(matches!(game.reset(), GameEvent::Reset { seed: Some(_) }));
        assert_eq!(game.board().len(), 4);
    }

    #[test]
    fn test_avatar_frozen_while_ready_and_finished() {
        let mut game = example_game();
        let start = game.avatar().position();
        assert_eq!(game.tick(Directions::UP, GameConfig::TICK), None);
        assert_eq!(game.avatar().position(), start);

        game.confirm();
        game.tick(Directions::UP, GameConfig::TICK);
        assert_eq!(game.avatar().position(), start - Point::new(0.0, 4.0));
    }

    #[test]
    fn test_compare_is_triggered_by_proximity() {
        let mut game = example_game();
        assert_eq!(game.confirm(), Some(GameEvent::Started));
        assert_eq!(game.state(), GnomeState::MovingToCompare);
        assert_eq!(game.target(), Some(1));

        // Standing next to the wrong pot does nothing.
        assert_eq!(walk_to(&mut game, 3), None);
        assert_eq!(game.state(), GnomeState::MovingToCompare);

        assert_eq!(
            walk_to(&mut game, 1),
            Some(GameEvent::Compared {
                index: 1,
                value: 17,
                left: 42,
                in_order: false
            })
        );
        assert_eq!(game.state(), GnomeState::SwapPrompt);
        assert_eq!(game.objective(), "17 < 42. Out of order! Press SPACE to SWAP.");
    }

    #[test]
    fn test_swap_steps_back_but_not_below_one() {
        let mut game = example_game();
        game.confirm();
        walk_to(&mut game, 1);
        assert_eq!(game.confirm(), Some(GameEvent::Swapped { a: 1, b: 0 }));
        assert_eq!(game.board().values()[..2], [17, 42]);
        assert_eq!(game.sort_index(), 1);
        assert_eq!(game.state(), GnomeState::MovingToCompare);

        // Re-reaching the same pot re-evaluates from the current values.
        walk_to(&mut game, 1);
        assert_eq!(game.state(), GnomeState::AdvancePrompt);
        assert_eq!(game.objective(), "42 >= 17. In order! Press SPACE to ADVANCE.");
    }

    #[test]
    fn test_swap_steps_back() {
        let mut game = game_with(&[10, 30, 20]);
        game.confirm();
        walk_to(&mut game, 1);
        assert_eq!(game.confirm(), Some(GameEvent::Advanced { index: 2 }));
        walk_to(&mut game, 2);
        assert_eq!(game.state(), GnomeState::SwapPrompt);
        game.confirm();
        assert_eq!(game.sort_index(), 1);
        assert_eq!(game.board().values(), vec![10, 20, 30]);
    }

    #[test]
    fn test_prompts_wait_for_confirmation() {
        let mut game = example_game();
        game.confirm();
        walk_to(&mut game, 1);
        assert!(game.awaiting_confirmation());
        for _ in 0..10 {
            assert_eq!(game.tick(Directions::LEFT, GameConfig::TICK), None);
        }
        assert_eq!(game.state(), GnomeState::SwapPrompt);
        assert_eq!(game.board().values(), EXAMPLE);
    }

    #[test]
    fn test_confirm_ignored_while_moving() {
        let mut game = example_game();
        game.confirm();
        assert_eq!(game.confirm(), None);
        assert_eq!(game.state(), GnomeState::MovingToCompare);
        assert_eq!(game.sort_index(), 1);
    }

    #[test]
    fn test_advance_past_end_finishes() {
        let mut game = game_with(&[1, 2]);
        game.confirm();
        walk_to(&mut game, 1);
        assert_eq!(game.state(), GnomeState::AdvancePrompt);
        assert_eq!(game.confirm(), Some(GameEvent::Finished));
        assert!(game.is_finished());
        assert_eq!(game.target(), None);
        assert_eq!(game.objective(), "All pots sorted! Press SPACE to play again.");
    }

    #[test]
    fn test_confirm_when_finished_resets() {
        let mut game = game_with(&[1, 2]);
        game.confirm();
        walk_to(&mut game, 1);
        game.confirm();
        let event = game.confirm();
        assert!(matches!(event, Some(GameEvent::Reset { seed: Some(_) })));
        assert!(game.is_ready());
        assert_eq!(game.sort_index(), 1);
        assert_eq!(game.board().len(), 8);
    }

    #[test]
    fn test_short_arrays_finish_immediately() {
        for values in [&[][..], &[5][..]] {
            let mut game = game_with(values);
            assert_eq!(game.confirm(), Some(GameEvent::Finished));
            assert!(game.is_finished());
            assert_eq!(game.target(), None);
        }
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut game = example_game();
        let mut visited = vec![game.state()];
        let autopilot = Autopilot::default();
        while !game.is_finished() {
            autopilot.step(&mut game);
            if !visited.contains(&game.state()) {
                visited.push(game.state());
            }
        }
        assert_eq!(visited.len(), 5);

        for state in visited {
            let mut game = example_game();
            while game.state() != state {
                autopilot.step(&mut game);
            }
            let event = game.reset();
            assert!(matches!(event, GameEvent::Reset { seed: Some(_) }));
            assert_eq!(game.state(), GnomeState::Ready);
            assert_eq!(game.sort_index(), 1);
            let values = game.board().values();
            assert_eq!(values.len(), 8);
            assert!(values.iter().all(|v| (10..100).contains(v)));
            let mut distinct = values.clone();
            distinct.sort_unstable();
            distinct.dedup();
            assert_eq!(distinct.len(), 8);
        }
    }

    #[test]
    fn test_highlights_and_array_line() {
        let mut game = example_game();
        assert_eq!(game.element_role(1), None);
        assert_eq!(game.array_line(), "[42] [17] 93 8 55 61 29 74");
        assert_eq!(game.state_name(), "READY");

        game.confirm();
        assert_eq!(game.element_role(0), Some(ElementRole::Compare));
        assert_eq!(game.element_role(1), Some(ElementRole::Current));
        assert_eq!(game.element_role(2), None);
        assert_eq!(game.state_name(), "MOVING_TO_COMPARE");
        assert_eq!(
            game.objective(),
            "Move the gnome to pot 1 to compare it with the previous one."
        );
    }

    #[test]
    fn test_example_sorts() {
        let mut game = example_game();
        Autopilot::default().run(&mut game).unwrap();
        assert!(game.is_finished());
        assert_eq!(game.board().values(), vec![8, 17, 29, 42, 55, 61, 74, 93]);
    }

    proptest! {
        #[test]
        fn prop_finishes_sorted(
            values in prop::sample::subsequence((10u32..100).collect::<Vec<_>>(), 8)
                .prop_shuffle(),
        ) {
            let mut game = game_with(&values);
            let transcript = Autopilot::default().run(&mut game).unwrap();
            prop_assert!(game.is_finished());
            prop_assert!(game.board().is_sorted());

            // The cursor never compares pot 0 with a non-existent neighbor.
            for event in &transcript.events {
                if let GameEvent::Compared { index, .. } = event {
                    prop_assert!(*index >= 1);
                }
            }
        }
    }
}
