// src/ui/settings.rs
use eframe::egui;
use rfd::FileDialog;

use crate::config::{ChartKind, Theme, Year};
use crate::state::AppState;

pub fn show_settings_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading(egui::RichText::new("Settings").size(30.0).strong());
    ui.label("Manage your dashboard preferences");
    ui.add_space(12.0);

    // Appearance applies immediately, like the toggle in the top bar
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("🎨 Appearance");
        ui.add_space(4.0);
        let mut dark = state.theme.current().is_dark();
        if ui.checkbox(&mut dark, "Dark Mode").changed() {
            state.theme.set(if dark { Theme::Dark } else { Theme::Light });
        }
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("📊 Dashboard Defaults");
        ui.add_space(4.0);

        egui::Grid::new("settings_defaults")
            .num_columns(2)
            .spacing([24.0, 8.0])
            .show(ui, |ui| {
                ui.label("Default year:");
                egui::ComboBox::from_id_source("default_year")
                    .selected_text(state.settings_draft.default_year.to_string())
                    .show_ui(ui, |ui| {
                        for year in Year::ALL {
                            ui.selectable_value(&mut state.settings_draft.default_year, year, year.to_string());
                        }
                    });
                ui.end_row();

                ui.label("Default chart:");
                ui.horizontal(|ui| {
                    for kind in ChartKind::ALL {
                        ui.radio_value(&mut state.settings_draft.default_chart, kind, kind.label());
                    }
                });
                ui.end_row();
            });
    });

    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading("💾 Data Management");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Export directory:");
            match &state.settings_draft.export_dir {
                Some(dir) => ui.monospace(dir.display().to_string()),
                None => ui.weak("Ask every time"),
            };
        });
        ui.horizontal(|ui| {
            if ui.button("Browse…").clicked() {
                if let Some(dir) = FileDialog::new().set_title("Export Directory").pick_folder() {
                    state.settings_draft.export_dir = Some(dir);
                }
            }
            if ui.add_enabled(state.settings_draft.export_dir.is_some(), egui::Button::new("Clear")).clicked() {
                state.settings_draft.export_dir = None;
            }
        });

        if let Some(path) = &state.settings_path {
            ui.add_space(4.0);
            ui.weak(format!("Settings file: {}", path.display()));
        }
    });

    ui.add_space(16.0);

    let dirty = state.settings_draft != state.settings;
    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
        if ui.add_enabled(dirty, egui::Button::new("Save Changes")).clicked() {
            match state.apply_settings_draft() {
                Ok(()) => state.notice = Some("Settings saved".to_string()),
                Err(e) => state.error_message = Some(format!("Error saving settings: {:#}", e)),
            }
        }
        if ui.add_enabled(dirty, egui::Button::new("Cancel")).clicked() {
            state.discard_settings_draft();
        }
    });
}
