//! Window shell shared by both games.
//!
//! Each frame runs in the same order: key presses become actions, actions are
//! applied, the fixed-timestep clock decides how many logic ticks the frame
//! gets, and then the side panel and the playfield are drawn from view models.

use std::time::Duration;

use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context, SidePanel, ViewportCommand},
};
use sortwalk_game::{GameKind, GenerateError};

use crate::{
    action::{self, ActionRequestQueue},
    state::{AppState, UiState},
    ui, version, view_model_builder,
};

const SIDEBAR_WIDTH: f32 = 220.0;

#[derive(Debug)]
pub struct SortwalkApp {
    app_state: AppState,
    ui_state: UiState,
    version: String,
}

impl SortwalkApp {
    pub fn new(_cc: &CreationContext<'_>, kind: GameKind) -> Result<Self, GenerateError> {
        Ok(Self {
            app_state: AppState::new(kind)?,
            ui_state: UiState::default(),
            version: version::build_version(),
        })
    }
}

impl App for SortwalkApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let mut action_queue = ActionRequestQueue::default();

        let (directions, frame_dt) = ctx.input_mut(|i| {
            ui::input::handle_input(i, &mut action_queue);
            (
                ui::input::held_directions(i),
                Duration::from_secs_f32(i.stable_dt.max(0.0)),
            )
        });
        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        let plan = self.ui_state.clock.advance(frame_dt);
        if !plan.dropped.is_zero() {
            log::debug!("frame too slow, dropped {:?} of tick backlog", plan.dropped);
        }
        let tick = self.ui_state.clock.tick();
        self.app_state.run_frame(plan, tick, directions);

        let sidebar_vm = view_model_builder::build_sidebar_vm(&self.app_state, &self.version);
        SidePanel::right("sidebar")
            .resizable(false)
            .exact_width(SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                ui::sidebar::show(ui, &sidebar_vm, &mut action_queue);
            });

        let game_screen_vm = view_model_builder::build_game_screen_vm(&self.app_state);
        CentralPanel::default().show(ctx, |ui| {
            ui::game_screen::show(ui, &game_screen_vm);
        });

        action::handler::handle_all(&mut self.app_state, &mut self.ui_state, &mut action_queue);

        if self.ui_state.quit_requested {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
        ctx.request_repaint();
    }
}
