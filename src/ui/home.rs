// src/ui/home.rs
use eframe::egui;
use crate::analysis::DerivedMetrics;
use crate::state::AppState;
use crate::ui::{charts, theme};
use crate::ui::widgets::{show_controls, show_stat_cards, ControlsConfig, StatCard};
use crate::utils::{format_millions, format_thousands};

pub fn dashboard_cards(metrics: &DerivedMetrics) -> Vec<StatCard> {
    vec![
        StatCard { title: "Total Sales", value: format_thousands(metrics.total_sales) },
        StatCard { title: "Total Revenue", value: format_millions(metrics.total_revenue, 1) },
        StatCard { title: "Average Sales", value: format_thousands(metrics.average_sales) },
        StatCard { title: "Growth Rate", value: format!("{}%", metrics.growth_percent) },
    ]
}

pub fn show_home_view(ui: &mut egui::Ui, state: &mut AppState) {
    let accent = theme::accent(state.theme.current());

    ui.heading(egui::RichText::new("Sales Dashboard").size(30.0).strong());
    ui.label("Monthly sales performance by year");
    ui.add_space(12.0);

    show_controls(ui, &mut state.home.query, ControlsConfig::FULL);
    ui.add_space(12.0);

    let chart = state.home.query.chart;
    let view = state.home.view();

    show_stat_cards(ui, &dashboard_cards(&view.metrics), accent);
    ui.add_space(12.0);

    ui.group(|ui| {
        ui.heading("Sales Performance");
        ui.add_space(8.0);
        charts::show_sales_chart(ui, &view.points, chart);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::aggregate;
    use crate::config::Year;
    use crate::data::series;

    #[test]
    fn cards_for_2022() {
        let cards = dashboard_cards(&aggregate(series(Year::Y2022)));
        let values: Vec<(&str, &str)> = cards.iter().map(|c| (c.title, c.value.as_str())).collect();
        assert_eq!(values, vec![
            ("Total Sales", "807,000"),
            ("Total Revenue", "$8.1M"),
            ("Average Sales", "67,250"),
            ("Growth Rate", "111%"),
        ]);
    }

    #[test]
    fn cards_for_an_empty_selection_are_zero() {
        let cards = dashboard_cards(&DerivedMetrics::default());
        assert_eq!(cards[0].value, "0");
        assert_eq!(cards[1].value, "$0.0M");
        assert_eq!(cards[3].value, "0%");
    }
}
