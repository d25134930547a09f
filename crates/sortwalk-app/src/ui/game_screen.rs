use eframe::egui::{Sense, Ui, Vec2, vec2};
use egui_extras::{Size, StripBuilder};
use sortwalk_core::Playfield;

use crate::ui::{
    hud::{self, HudViewModel},
    playfield::{self, PlayfieldViewModel, Viewport},
    theme::Palette,
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) playfield_vm: PlayfieldViewModel,
    pub(crate) hud_vm: HudViewModel,
    pub(crate) palette: Palette,
}

impl GameScreenViewModel {
    #[must_use]
    pub(crate) fn new(
        playfield_vm: PlayfieldViewModel,
        hud_vm: HudViewModel,
        palette: Palette,
    ) -> Self {
        Self {
            playfield_vm,
            hud_vm,
            palette,
        }
    }
}

/// Largest size with the playfield's aspect ratio that fits in `available`.
#[must_use]
fn fitted_size(available: Vec2, playfield: Playfield) -> Vec2 {
    let scale = f32::min(
        available.x / playfield.width(),
        available.y / playfield.height(),
    )
    .max(0.0);
    vec2(playfield.width(), playfield.height()) * scale
}

fn paint_canvas(ui: &mut Ui, vm: &GameScreenViewModel, size: Vec2) {
    let playfield = vm.playfield_vm.playfield();
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);
    let viewport = Viewport::fit(rect, playfield);

    playfield::paint(&painter, &viewport, &vm.playfield_vm, &vm.palette);
    hud::paint(&painter, &viewport, playfield, &vm.hud_vm, &vm.palette);
    playfield::paint_border(&painter, &viewport, playfield);
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel) {
    let playfield = vm.playfield_vm.playfield();
    let size = fitted_size(ui.available_size(), playfield);

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(size.x))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(size.y))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| paint_canvas(ui, vm, size));
                        strip.empty();
                    });
            });
            strip.empty();
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fitted_size_keeps_aspect_ratio() {
        let playfield = Playfield::new(1200.0, 700.0);
        assert_eq!(
            fitted_size(vec2(2400.0, 2000.0), playfield),
            vec2(2400.0, 1400.0)
        );
        assert_eq!(
            fitted_size(vec2(600.0, 700.0), playfield),
            vec2(600.0, 350.0)
        );
        assert_eq!(fitted_size(Vec2::ZERO, playfield), Vec2::ZERO);
    }
}
