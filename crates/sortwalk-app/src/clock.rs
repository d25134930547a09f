//! Fixed-timestep clock that turns variable frame times into logic ticks.

use std::time::Duration;

use sortwalk_game::GameConfig;

/// Ticks to run for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TickPlan {
    pub(crate) ticks: u32,
    /// Time no tick is run for because the frame needed more than the tick
    /// cap. Movement skips it; timers still count it.
    pub(crate) dropped: Duration,
}

#[derive(Debug, Clone)]
pub(crate) struct FixedTimestep {
    tick: Duration,
    max_ticks_per_frame: u32,
    accumulator: Duration,
}

impl FixedTimestep {
    pub(crate) const MAX_TICKS_PER_FRAME: u32 = 5;

    #[must_use]
    pub(crate) fn new(tick: Duration, max_ticks_per_frame: u32) -> Self {
        Self {
            tick,
            max_ticks_per_frame,
            accumulator: Duration::ZERO,
        }
    }

    #[must_use]
    pub(crate) fn tick(&self) -> Duration {
        self.tick
    }

    /// Adds `frame_dt` to the accumulator and takes as many whole ticks out of
    /// it as the cap allows.
    ///
    /// Whatever still amounts to a whole tick after the cap is dropped so a
    /// long stall does not make the game fast-forward afterwards.
    pub(crate) fn advance(&mut self, frame_dt: Duration) -> TickPlan {
        let mut accumulator = self.accumulator.saturating_add(frame_dt);
        let mut ticks = 0;
        while accumulator >= self.tick && ticks < self.max_ticks_per_frame {
            accumulator -= self.tick;
            ticks += 1;
        }

        let dropped = if accumulator >= self.tick {
            std::mem::take(&mut accumulator)
        } else {
            Duration::ZERO
        };
        self.accumulator = accumulator;
        TickPlan { ticks, dropped }
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(GameConfig::TICK, Self::MAX_TICKS_PER_FRAME)
    }
}
