use eframe::egui::Color32;
use sortwalk_game::GameKind;

/// Colors used to paint the playfield and its HUD.
///
/// Each game has a fixed look that does not follow the egui light/dark
/// visuals; only the side panel does.
#[derive(Debug, Clone)]
pub(crate) struct Palette {
    pub(crate) background: Color32,
    pub(crate) text: Color32,
    pub(crate) objective_panel: Color32,
    pub(crate) objective_title: Color32,

    pub(crate) element_body: Color32,
    /// Pot rim for gnome sort; unused by blocks.
    pub(crate) element_rim: Color32,
    pub(crate) element_text: Color32,

    pub(crate) highlight_current: Color32,
    pub(crate) highlight_compare: Color32,
    pub(crate) highlight_minimum: Color32,
    pub(crate) highlight_swap_target: Color32,

    pub(crate) sorted_zone: Color32,
    pub(crate) unsorted_zone: Color32,

    pub(crate) avatar_body: Color32,
    pub(crate) avatar_accent: Color32,
    pub(crate) avatar_detail: Color32,
}

impl Palette {
    /// Garden colors: brown pots on grass and a blue gnome with a red hat.
    #[must_use]
    pub(crate) fn garden() -> Self {
        Self {
            background: Color32::from_rgb(26, 77, 46),
            text: Color32::from_rgb(240, 240, 240),
            objective_panel: Color32::from_black_alpha(150),
            objective_title: Color32::from_rgb(255, 255, 0),

            element_body: Color32::from_rgb(139, 69, 19),
            element_rim: Color32::from_rgb(160, 82, 45),
            element_text: Color32::from_rgb(240, 240, 240),

            highlight_current: Color32::from_rgba_unmultiplied(255, 255, 0, 100),
            highlight_compare: Color32::from_rgba_unmultiplied(0, 255, 255, 100),
            highlight_minimum: Color32::TRANSPARENT,
            highlight_swap_target: Color32::TRANSPARENT,

            sorted_zone: Color32::TRANSPARENT,
            unsorted_zone: Color32::TRANSPARENT,

            avatar_body: Color32::from_rgb(0, 0, 255),
            avatar_accent: Color32::from_rgb(255, 0, 0),
            avatar_detail: Color32::WHITE,
        }
    }

    /// Slate colors: blue blocks and an amber sorter.
    #[must_use]
    pub(crate) fn slate() -> Self {
        let amber = Color32::from_rgb(234, 179, 8);
        Self {
            background: Color32::from_rgb(17, 24, 39),
            text: Color32::from_rgb(240, 240, 240),
            objective_panel: Color32::from_black_alpha(150),
            objective_title: amber,

            element_body: Color32::from_rgb(59, 130, 246),
            element_rim: Color32::from_rgb(59, 130, 246),
            element_text: Color32::WHITE,

            highlight_current: Color32::TRANSPARENT,
            highlight_compare: Color32::TRANSPARENT,
            highlight_minimum: Color32::from_rgba_unmultiplied(22, 163, 74, 120),
            highlight_swap_target: Color32::from_rgba_unmultiplied(34, 211, 238, 120),

            sorted_zone: Color32::from_rgba_unmultiplied(22, 163, 74, 40),
            unsorted_zone: Color32::from_rgba_unmultiplied(239, 68, 68, 40),

            avatar_body: amber,
            avatar_accent: Color32::WHITE,
            avatar_detail: Color32::from_rgb(240, 240, 240),
        }
    }

    #[must_use]
    pub(crate) fn for_kind(kind: GameKind) -> Self {
        match kind {
            GameKind::Gnome => Self::garden(),
            GameKind::Selection => Self::slate(),
        }
    }
}
