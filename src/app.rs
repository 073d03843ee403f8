// src/app.rs
use eframe::egui;

use crate::state::{AppState, Screen, SessionSnapshot};
use crate::ui;

pub struct VortexApp {
    state: AppState,
}

impl VortexApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut state = AppState::load();

        if let Some(storage) = cc.storage {
            if let Some(snapshot) = eframe::get_value::<SessionSnapshot>(storage, eframe::APP_KEY) {
                log::debug!("restoring previous session on {:?}", snapshot.current_screen);
                state.restore_session(snapshot);
            }
        }

        ui::theme::apply(&cc.egui_ctx, state.theme.current());
        Self { state }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.label(
                egui::RichText::new("📊 Vortex Analytics")
                    .strong()
                    .color(ui::theme::accent(self.state.theme.current()))
            );

            ui.separator();

            // Tab selection using buttons
            let tabs = [
                (Screen::Home, "Home"),
                (Screen::Analytics, "Analytics"),
                (Screen::Reports, "Reports"),
                (Screen::Settings, "Settings"),
            ];

            for (screen, label) in tabs {
                if ui.selectable_label(self.state.current_screen == screen, label).clicked() {
                    self.state.current_screen = screen;
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icon = if self.state.theme.current().is_dark() { "☀" } else { "🌙" };
                if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                    self.state.theme.toggle();
                }
            });
        });
    }
}

impl eframe::App for VortexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(theme) = self.state.drain_theme_changes() {
            ui::theme::apply(ctx, theme);
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        let notice = self.state.notice.clone();
        if let Some(notice) = notice {
            egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(notice);
                    if ui.small_button("✖").clicked() {
                        self.state.notice = None;
                    }
                });
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    match self.state.current_screen {
                        Screen::Home => ui::home::show_home_view(ui, &mut self.state),
                        Screen::Analytics => ui::analytics::show_analytics_view(ui, &mut self.state),
                        Screen::Reports => ui::reports::show_reports_view(ui, &mut self.state),
                        Screen::Settings => ui::settings::show_settings_view(ui, &mut self.state),
                    }
                });
        });

        // Show error modal if needed
        let error_msg = self.state.error_message.clone();
        if let Some(error) = error_msg {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.state.session_snapshot());
    }
}
