use std::mem;

use crate::state::Settings;

pub(crate) mod handler;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Action {
    /// SPACE: start, swap, advance or play again depending on the state.
    Confirm,
    /// R: start over with a fresh array.
    Reset,
    Quit,
    UpdateSettings(Settings),
}

#[derive(Debug, Default)]
pub(crate) struct ActionRequestQueue {
    actions: Vec<Action>,
}

impl ActionRequestQueue {
    pub(crate) fn request(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Action> {
        mem::take(&mut self.actions)
    }
}
