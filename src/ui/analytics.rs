// src/ui/analytics.rs
use eframe::egui;
use crate::state::AppState;
use crate::ui::{charts, theme};
use crate::ui::widgets::{show_controls, show_stat_cards, ControlsConfig, StatCard};
use crate::utils::{format_millions, format_thousands};

pub fn show_analytics_view(ui: &mut egui::Ui, state: &mut AppState) {
    let accent = theme::accent(state.theme.current());

    ui.heading(egui::RichText::new("Advanced Analytics").size(30.0).strong());
    ui.label("Deep insights into sales performance");
    ui.add_space(12.0);

    show_controls(ui, &mut state.analytics.query, ControlsConfig::YEAR_ONLY);
    ui.add_space(12.0);

    let view = state.analytics.view();
    let m = &view.metrics;
    show_stat_cards(ui, &[
        StatCard { title: "Total Sales", value: format_thousands(m.total_sales) },
        StatCard { title: "Revenue", value: format_millions(m.total_revenue, 1) },
        StatCard { title: "Avg Sales", value: format_thousands(m.average_sales) },
        StatCard { title: "Peak Sales", value: format_thousands(m.peak_sales) },
    ], accent);
    ui.add_space(4.0);
    ui.weak(format!(
        "{} months · lowest month {} · growth {}%",
        m.record_count,
        format_thousands(m.lowest_sales),
        m.growth_percent
    ));
    ui.add_space(12.0);

    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.heading("Combined Analysis");
            charts::show_combined_chart(ui, &view.records);
        });
        columns[1].group(|ui| {
            ui.heading("Trend Analysis");
            charts::show_trend_chart(ui, &view.records);
        });
    });
}
