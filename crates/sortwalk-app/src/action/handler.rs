use crate::{
    action::{Action, ActionRequestQueue},
    state::{AppState, UiState},
};

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action) {
    match action {
        Action::Confirm => {
            app_state.game.confirm();
        }
        Action::Reset => {
            app_state.game.reset();
        }
        Action::Quit => {
            log::info!("quit requested");
            ui_state.quit_requested = true;
        }
        Action::UpdateSettings(settings) => app_state.update_settings(settings),
    }
}
