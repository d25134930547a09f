pub(crate) mod game_screen;
pub(crate) mod hud;
pub(crate) mod input;
pub(crate) mod playfield;
pub(crate) mod sidebar;
pub(crate) mod theme;
