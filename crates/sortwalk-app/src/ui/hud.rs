use eframe::egui::{Align2, Painter};
use sortwalk_core::Playfield;

use crate::ui::{playfield::Viewport, theme::Palette};

const TITLE_FONT_SIZE: f32 = 34.0;
const TEXT_FONT_SIZE: f32 = 22.0;
const PANEL_MARGIN: f32 = 20.0;
const PANEL_TOP: f32 = 80.0;
const PANEL_HEIGHT: f32 = 80.0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HudViewModel {
    pub(crate) title: &'static str,
    pub(crate) objective: String,
    /// Already prefixed, e.g. `Array: 17 [42] ...`.
    pub(crate) array_line: Option<String>,
    pub(crate) state_line: Option<String>,
}

/// Paints the title, the objective panel and the status lines on top of the
/// playfield.
///
/// The bottom lines stack upwards from the bottom edge so that whichever are
/// enabled stay in the same place.
pub(crate) fn paint(
    painter: &Painter,
    viewport: &Viewport,
    playfield: Playfield,
    vm: &HudViewModel,
    palette: &Palette,
) {
    let text_font = viewport.font(TEXT_FONT_SIZE);

    painter.text(
        viewport.pos(playfield.width() / 2.0, 20.0),
        Align2::CENTER_TOP,
        vm.title,
        viewport.font(TITLE_FONT_SIZE),
        palette.text,
    );

    painter.rect_filled(
        viewport.rect(
            PANEL_MARGIN,
            PANEL_TOP,
            playfield.width() - PANEL_MARGIN * 2.0,
            PANEL_HEIGHT,
        ),
        viewport.len(10.0),
        palette.objective_panel,
    );
    painter.text(
        viewport.pos(40.0, 90.0),
        Align2::LEFT_TOP,
        "Current Objective:",
        text_font.clone(),
        palette.objective_title,
    );
    painter.text(
        viewport.pos(40.0, 120.0),
        Align2::LEFT_TOP,
        &vm.objective,
        text_font.clone(),
        palette.text,
    );

    let mut y = playfield.height() - 50.0;
    for line in [&vm.state_line, &vm.array_line].into_iter().flatten() {
        painter.text(
            viewport.pos(PANEL_MARGIN, y),
            Align2::LEFT_TOP,
            line,
            text_font.clone(),
            palette.text,
        );
        y -= 30.0;
    }
}
