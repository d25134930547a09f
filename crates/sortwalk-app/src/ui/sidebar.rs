use eframe::egui::{CollapsingHeader, RichText, ScrollArea, Ui, widgets};

use crate::{
    action::{Action, ActionRequestQueue},
    state::{DisplaySettings, MovementSettings, Settings},
};

#[derive(Debug, Clone)]
pub(crate) struct SidebarViewModel<'a> {
    finished: bool,
    settings: &'a Settings,
    version: &'a str,
}

impl<'a> SidebarViewModel<'a> {
    #[must_use]
    pub(crate) fn new(finished: bool, settings: &'a Settings, version: &'a str) -> Self {
        Self {
            finished,
            settings,
            version,
        }
    }
}

const CONTROLS: [(&str, &str); 4] = [
    ("Arrows / WASD", "Move"),
    ("Space", "Confirm"),
    ("R", "New array"),
    ("Esc", "Quit"),
];

pub(crate) fn show(ui: &mut Ui, vm: &SidebarViewModel, action_queue: &mut ActionRequestQueue) {
    ui.vertical(|ui| {
        ui.group(|ui| {
            let status = if vm.finished {
                RichText::new("Sorted!").color(ui.visuals().warn_fg_color)
            } else {
                RichText::new("Sorting...")
            };
            ui.label(status.size(20.0));
        });

        let mut changed = false;
        let mut settings = vm.settings.clone();
        let Settings { display, movement } = &mut settings;
        ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Settings");
            ui.indent("sidebar_settings", |ui| {
                CollapsingHeader::new("Display")
                    .default_open(true)
                    .show(ui, |ui| {
                        let DisplaySettings {
                            show_state_name,
                            show_highlights,
                            show_zones,
                            show_array_line,
                        } = display;
                        changed |= ui.checkbox(show_highlights, "Highlight targets").changed();
                        changed |= ui.checkbox(show_zones, "Sorted/unsorted zones").changed();
                        changed |= ui.checkbox(show_array_line, "Array line").changed();
                        changed |= ui.checkbox(show_state_name, "Algorithm state").changed();
                    });

                CollapsingHeader::new("Movement")
                    .default_open(true)
                    .show(ui, |ui| {
                        let MovementSettings { normalize_diagonal } = movement;
                        changed |= ui
                            .checkbox(normalize_diagonal, "Normalize diagonal speed")
                            .changed();
                    });

                CollapsingHeader::new("Appearance")
                    .default_open(false)
                    .show(ui, |ui| {
                        widgets::global_theme_preference_buttons(ui);
                    });
            });

            ui.separator();
            ui.heading("Controls");
            for (keys, what) in CONTROLS {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(keys).strong());
                    ui.label(what);
                });
            }

            ui.separator();
            ui.small(format!("Version {}", vm.version));
        });
        if changed {
            action_queue.request(Action::UpdateSettings(settings));
        }
    });
}
