// src/ui/widgets.rs
use eframe::egui;
use crate::config::{ChartKind, Year};
use crate::state::DashboardQuery;

/// Which controls a screen exposes. The year selector is always shown.
#[derive(Debug, Clone, Copy)]
pub struct ControlsConfig {
    pub chart_toggle: bool,
    pub min_sales: bool,
}

impl ControlsConfig {
    pub const FULL: Self = Self { chart_toggle: true, min_sales: true };
    pub const YEAR_ONLY: Self = Self { chart_toggle: false, min_sales: false };
    pub const YEAR_AND_FILTER: Self = Self { chart_toggle: false, min_sales: true };
}

/// Returns true when the query changed.
pub fn show_controls(ui: &mut egui::Ui, query: &mut DashboardQuery, config: ControlsConfig) -> bool {
    let before = *query;

    ui.group(|ui| {
        ui.horizontal_wrapped(|ui| {
            ui.vertical(|ui| {
                ui.strong("Select Year");
                ui.horizontal(|ui| {
                    for year in Year::ALL {
                        ui.selectable_value(&mut query.year, year, year.to_string());
                    }
                });
            });

            if config.chart_toggle {
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.strong("Chart Type");
                    ui.horizontal(|ui| {
                        for kind in ChartKind::ALL {
                            ui.selectable_value(&mut query.chart, kind, kind.label());
                        }
                    });
                });
            }

            if config.min_sales {
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.strong("Min Sales Filter");
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::DragValue::new(&mut query.threshold)
                                .speed(1000.0)
                                .prefix("≥ ")
                        );
                        if ui.small_button("Reset").clicked() {
                            query.threshold = 0;
                        }
                    });
                });
            }
        });
    });

    let changed = *query != before;
    if changed {
        log::debug!("selection changed: {:?} -> {:?}", before, query);
    }
    changed
}

pub struct StatCard {
    pub title: &'static str,
    pub value: String,
}

pub fn show_stat_cards(ui: &mut egui::Ui, cards: &[StatCard], accent: egui::Color32) {
    if cards.is_empty() {
        return;
    }
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards) {
            column.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(egui::RichText::new(card.title).weak());
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(&card.value)
                        .size(26.0)
                        .strong()
                        .color(accent)
                );
            });
        }
    });
}
