use eframe::egui::{
    Align2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, StrokeKind, Vec2, vec2,
};
use sortwalk_core::{Playfield, Point};
use sortwalk_game::{ElementRole, GameKind};

use crate::ui::theme::Palette;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct ElementVisualState: u8 {
        const CURRENT = 0b0001;
        const COMPARE = 0b0010;
        const MINIMUM = 0b0100;
        const SWAP_TARGET = 0b1000;
    }
}

impl From<ElementRole> for ElementVisualState {
    fn from(role: ElementRole) -> Self {
        match role {
            ElementRole::Current => Self::CURRENT,
            ElementRole::Compare => Self::COMPARE,
            ElementRole::Minimum => Self::MINIMUM,
            ElementRole::SwapTarget => Self::SWAP_TARGET,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ElementView {
    pub(crate) value: u32,
    pub(crate) position: Point,
    pub(crate) visual_state: ElementVisualState,
    pub(crate) hidden: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AvatarView {
    pub(crate) position: Point,
    pub(crate) radius: f32,
    pub(crate) carrying: Option<u32>,
}

#[derive(Debug, Clone)]
pub(crate) struct PlayfieldViewModel {
    kind: GameKind,
    playfield: Playfield,
    elements: Vec<ElementView>,
    avatar: AvatarView,
    /// x coordinate separating the sorted prefix from the rest.
    zone_boundary: Option<f32>,
    enabled_highlights: ElementVisualState,
}

impl PlayfieldViewModel {
    #[must_use]
    pub(crate) fn new(
        kind: GameKind,
        playfield: Playfield,
        elements: Vec<ElementView>,
        avatar: AvatarView,
        zone_boundary: Option<f32>,
        show_highlights: bool,
    ) -> Self {
        let enabled_highlights = if show_highlights {
            ElementVisualState::all()
        } else {
            ElementVisualState::empty()
        };
        Self {
            kind,
            playfield,
            elements,
            avatar,
            zone_boundary,
            enabled_highlights,
        }
    }

    #[must_use]
    pub(crate) fn playfield(&self) -> Playfield {
        self.playfield
    }

    fn effective_visual_state(&self, state: ElementVisualState) -> EffectiveVisualState {
        EffectiveVisualState(self.enabled_highlights & state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EffectiveVisualState(ElementVisualState);

impl EffectiveVisualState {
    fn highlight_color(self, palette: &Palette) -> Option<Color32> {
        if self.0.intersects(ElementVisualState::CURRENT) {
            return Some(palette.highlight_current);
        }
        if self.0.intersects(ElementVisualState::COMPARE) {
            return Some(palette.highlight_compare);
        }
        if self.0.intersects(ElementVisualState::MINIMUM) {
            return Some(palette.highlight_minimum);
        }
        if self.0.intersects(ElementVisualState::SWAP_TARGET) {
            return Some(palette.highlight_swap_target);
        }
        None
    }
}

const POT_RADIUS: f32 = 35.0;
const BLOCK_SIZE: f32 = 80.0;
const BLOCK_ROUNDING: f32 = 10.0;
const ZONE_HALF_HEIGHT: f32 = 70.0;
const ELEMENT_FONT_SIZE: f32 = 28.0;
const SORTER_RING_WIDTH: f32 = 3.0;

/// Maps logical playfield coordinates onto a screen rectangle.
///
/// The playfield keeps its aspect ratio and is centered in the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Viewport {
    origin: Pos2,
    scale: f32,
}

impl Viewport {
    #[must_use]
    pub(crate) fn fit(rect: Rect, playfield: Playfield) -> Self {
        let scale = f32::min(
            rect.width() / playfield.width(),
            rect.height() / playfield.height(),
        );
        let size = vec2(playfield.width(), playfield.height()) * scale;
        Self {
            origin: rect.center() - size / 2.0,
            scale,
        }
    }

    #[must_use]
    pub(crate) fn pos(&self, x: f32, y: f32) -> Pos2 {
        self.origin + vec2(x, y) * self.scale
    }

    #[must_use]
    pub(crate) fn point(&self, point: Point) -> Pos2 {
        self.pos(point.x, point.y)
    }

    #[must_use]
    pub(crate) fn len(&self, len: f32) -> f32 {
        len * self.scale
    }

    #[must_use]
    pub(crate) fn rect(&self, x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect::from_min_size(self.pos(x, y), Vec2::new(width, height) * self.scale)
    }

    #[must_use]
    pub(crate) fn font(&self, size: f32) -> FontId {
        FontId::proportional(self.len(size))
    }
}

pub(crate) fn paint(
    painter: &Painter,
    viewport: &Viewport,
    vm: &PlayfieldViewModel,
    palette: &Palette,
) {
    let playfield = vm.playfield;
    painter.rect_filled(
        viewport.rect(0.0, 0.0, playfield.width(), playfield.height()),
        0.0,
        palette.background,
    );

    if let Some(boundary) = vm.zone_boundary {
        paint_zones(painter, viewport, playfield, boundary, palette);
    }

    for element in &vm.elements {
        if element.hidden {
            continue;
        }
        let vs = vm.effective_visual_state(element.visual_state);
        match vm.kind {
            GameKind::Gnome => paint_pot(painter, viewport, element, vs, palette),
            GameKind::Selection => paint_block(painter, viewport, element, vs, palette),
        }
    }

    match vm.kind {
        GameKind::Gnome => paint_gnome(painter, viewport, &vm.avatar, palette),
        GameKind::Selection => paint_sorter(painter, viewport, &vm.avatar, palette),
    }
}

fn paint_zones(
    painter: &Painter,
    viewport: &Viewport,
    playfield: Playfield,
    boundary: f32,
    palette: &Palette,
) {
    let top = playfield.height() / 2.0 - ZONE_HALF_HEIGHT;
    let height = ZONE_HALF_HEIGHT * 2.0;
    painter.rect_filled(
        viewport.rect(0.0, top, boundary, height),
        0.0,
        palette.sorted_zone,
    );
    painter.rect_filled(
        viewport.rect(boundary, top, playfield.width() - boundary, height),
        0.0,
        palette.unsorted_zone,
    );
}

fn paint_value(painter: &Painter, viewport: &Viewport, center: Pos2, value: u32, color: Color32) {
    painter.text(
        center,
        Align2::CENTER_CENTER,
        value.to_string(),
        viewport.font(ELEMENT_FONT_SIZE),
        color,
    );
}

fn paint_pot(
    painter: &Painter,
    viewport: &Viewport,
    element: &ElementView,
    vs: EffectiveVisualState,
    palette: &Palette,
) {
    let Point { x, y } = element.position;
    let center = viewport.point(element.position);

    // Highlight sits behind the pot.
    if let Some(color) = vs.highlight_color(palette) {
        painter.circle_filled(center, viewport.len(POT_RADIUS), color);
    }
    painter.rect_filled(
        viewport.rect(x - 25.0, y - 15.0, 50.0, 40.0),
        0.0,
        palette.element_body,
    );
    painter.rect_filled(
        viewport.rect(x - 30.0, y - 25.0, 60.0, 10.0),
        0.0,
        palette.element_rim,
    );
    paint_value(painter, viewport, center, element.value, palette.element_text);
}

fn paint_block(
    painter: &Painter,
    viewport: &Viewport,
    element: &ElementView,
    vs: EffectiveVisualState,
    palette: &Palette,
) {
    let Point { x, y } = element.position;
    let rect = viewport.rect(
        x - BLOCK_SIZE / 2.0,
        y - BLOCK_SIZE / 2.0,
        BLOCK_SIZE,
        BLOCK_SIZE,
    );
    let rounding = viewport.len(BLOCK_ROUNDING);

    painter.rect_filled(rect, rounding, palette.element_body);
    if let Some(color) = vs.highlight_color(palette) {
        painter.rect_filled(rect, rounding, color);
    }
    paint_value(painter, viewport, rect.center(), element.value, palette.element_text);
}

fn paint_gnome(painter: &Painter, viewport: &Viewport, avatar: &AvatarView, palette: &Palette) {
    let Point { x, y } = avatar.position;
    painter.circle_filled(
        viewport.pos(x, y + 5.0),
        viewport.len(avatar.radius),
        palette.avatar_body,
    );
    let hat = vec![
        viewport.pos(x, y - 30.0),
        viewport.pos(x - 20.0, y),
        viewport.pos(x + 20.0, y),
    ];
    painter.add(Shape::convex_polygon(hat, palette.avatar_accent, Stroke::NONE));
    painter.circle_filled(
        viewport.pos(x, y - 30.0),
        viewport.len(5.0),
        palette.avatar_detail,
    );
}

fn paint_sorter(painter: &Painter, viewport: &Viewport, avatar: &AvatarView, palette: &Palette) {
    let center = viewport.point(avatar.position);
    let radius = viewport.len(avatar.radius);
    painter.circle_filled(center, radius, palette.avatar_body);
    let ring_width = viewport.len(SORTER_RING_WIDTH);
    painter.circle_stroke(
        center,
        radius - ring_width / 2.0,
        Stroke::new(ring_width, palette.avatar_accent),
    );
    if let Some(value) = avatar.carrying {
        paint_value(painter, viewport, center, value, palette.avatar_detail);
    }
}

/// Outlines the playfield against the surrounding panel.
pub(crate) fn paint_border(painter: &Painter, viewport: &Viewport, playfield: Playfield) {
    painter.rect_stroke(
        viewport.rect(0.0, 0.0, playfield.width(), playfield.height()),
        0.0,
        Stroke::new(1.0, Color32::from_gray(90)),
        StrokeKind::Inside,
    );
}

#[cfg(test)]
mod tests {
    use eframe::egui::pos2;

    use super::*;

    #[test]
    fn viewport_preserves_aspect_ratio() {
        let playfield = Playfield::new(1200.0, 700.0);
        let rect = Rect::from_min_size(pos2(10.0, 20.0), vec2(600.0, 600.0));
        let viewport = Viewport::fit(rect, playfield);

        assert!((viewport.len(1200.0) - 600.0).abs() < 1e-3);
        let top_left = viewport.pos(0.0, 0.0);
        let bottom_right = viewport.pos(1200.0, 700.0);
        assert!((top_left.x - 10.0).abs() < 1e-3);
        assert!((bottom_right.y - top_left.y - 350.0).abs() < 1e-3);
        // Vertically centered.
        assert!((top_left.y - (20.0 + 125.0)).abs() < 1e-3);
    }

    #[test]
    fn disabled_highlights_paint_nothing() {
        let avatar = AvatarView {
            position: Point::ZERO,
            radius: 20.0,
            carrying: None,
        };
        let vm = PlayfieldViewModel::new(
            GameKind::Gnome,
            Playfield::DEFAULT,
            vec![],
            avatar,
            None,
            false,
        );
        let vs = vm.effective_visual_state(ElementVisualState::CURRENT);
        assert_eq!(vs.highlight_color(&Palette::garden()), None);
    }

    #[test]
    fn highlight_follows_role() {
        let palette = Palette::slate();
        let vs = EffectiveVisualState(ElementRole::Minimum.into());
        assert_eq!(vs.highlight_color(&palette), Some(palette.highlight_minimum));
        let vs = EffectiveVisualState(ElementRole::SwapTarget.into());
        assert_eq!(
            vs.highlight_color(&palette),
            Some(palette.highlight_swap_target)
        );
    }
}
