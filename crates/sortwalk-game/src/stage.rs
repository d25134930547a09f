use sortwalk_core::{Avatar, Board, Directions};
use sortwalk_generator::{ArrayGenerator, GenerateError};

use crate::{GameConfig, GameEvent};

/// Everything a game owns besides its algorithm cursors.
#[derive(Debug, Clone)]
pub(crate) struct Stage {
    pub(crate) config: GameConfig,
    pub(crate) generator: ArrayGenerator,
    pub(crate) board: Board,
    pub(crate) avatar: Avatar,
}

impl Stage {
    pub(crate) fn new(config: GameConfig, values: &[u32]) -> Result<Self, GenerateError> {
        let generator = config.generator()?;
        let board = Board::new(values, &config.playfield);
        let avatar = Avatar::new(
            config.playfield.avatar_spawn(),
            config.avatar_radius,
            config.avatar_speed,
        );
        Ok(Self {
            config,
            generator,
            board,
            avatar,
        })
    }

    /// Lays out a freshly generated array. The avatar stays where it is.
    pub(crate) fn regenerate(&mut self) -> GameEvent {
        let generated = self.generator.generate();
        log::info!("new array generated: seed={}", generated.seed);
        self.replace_values(&generated.values);
        GameEvent::Reset {
            seed: Some(generated.seed),
        }
    }

    pub(crate) fn replace_values(&mut self, values: &[u32]) {
        self.board = Board::new(values, &self.config.playfield);
        self.avatar.put_down();
    }

    pub(crate) fn move_avatar(&mut self, directions: Directions) {
        self.avatar
            .step(directions, &self.config.playfield, self.config.movement);
    }

    /// Returns `true` if the avatar touches the slot at `index`.
    #[must_use]
    pub(crate) fn avatar_near(&self, index: usize) -> bool {
        self.board.get(index).is_some_and(|element| {
            self.avatar
                .is_near(element.position(), self.config.target_radius)
        })
    }
}
