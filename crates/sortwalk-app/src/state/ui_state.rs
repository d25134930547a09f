use crate::clock::FixedTimestep;

// UiState holds state that only matters while the window is open.
#[derive(Debug, Default)]
pub(crate) struct UiState {
    pub(crate) clock: FixedTimestep,
    pub(crate) quit_requested: bool,
}
