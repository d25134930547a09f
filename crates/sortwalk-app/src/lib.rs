//! Shared library module for the sortwalk app crate.
#![allow(missing_docs, clippy::missing_errors_doc, clippy::missing_panics_doc)]

use sortwalk_game::GameKind;

pub use self::app::SortwalkApp;

pub mod app;
pub mod version;

mod action;
mod clock;
mod state;
mod ui;
mod view_model_builder;

/// Opens the window for `kind` and runs it until it is closed.
pub fn run(kind: GameKind) -> eframe::Result<()> {
    let app_id = match kind {
        GameKind::Gnome => "io.github.sortwalk.gnome-sorter",
        GameKind::Selection => "io.github.sortwalk.selection-sorter",
    };
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(app_id)
            .with_title(kind.window_title())
            .with_resizable(true)
            .with_inner_size((1440.0, 720.0))
            .with_min_inner_size((640.0, 400.0)),
        ..Default::default()
    };
    eframe::run_native(
        kind.window_title(),
        options,
        Box::new(move |cc| Ok(Box::new(SortwalkApp::new(cc, kind)?))),
    )
}
