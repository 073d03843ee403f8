// src/ui/charts.rs
use eframe::egui::{self, Align2, RichText};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoint, Points, Polygon, Text};

use crate::analysis::{pie_slices, ChartPoint};
use crate::config::{ChartKind, SalesRecord};
use crate::ui::theme;

const PIE_RADIUS: f64 = 1.0;

fn base_plot(id: &str, height: f32) -> Plot {
    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
}

// Month names under the x axis; plots index the records from 0.
fn month_labels(plot_ui: &mut egui_plot::PlotUi, labels: impl Iterator<Item = String>) {
    for (i, label) in labels.enumerate() {
        plot_ui.text(
            Text::new(PlotPoint::new(i as f64, 0.0), RichText::new(label).small())
                .anchor(Align2::CENTER_TOP)
        );
    }
}

fn empty_notice(ui: &mut egui::Ui, height: f32) {
    ui.allocate_ui(egui::vec2(ui.available_width(), height), |ui| {
        ui.centered_and_justified(|ui| {
            ui.label("No records match the current filter");
        });
    });
}

/// The main dashboard chart: bar, line or pie over the filtered points.
pub fn show_sales_chart(ui: &mut egui::Ui, points: &[ChartPoint], kind: ChartKind) {
    let height = 420.0;
    if points.is_empty() {
        empty_notice(ui, height);
        return;
    }

    match kind {
        ChartKind::Bar => {
            base_plot("sales_bar", height)
                .include_y(0.0)
                .label_formatter(|_, value| format!("{:.0}", value.y))
                .show(ui, |plot_ui| {
                    let bars: Vec<Bar> = points.iter()
                        .enumerate()
                        .map(|(i, p)| {
                            Bar::new(i as f64, p.value)
                                .name(&p.label)
                                .width(0.7)
                                .fill(theme::CYAN)
                        })
                        .collect();
                    plot_ui.bar_chart(BarChart::new(bars).name("sales").color(theme::CYAN));
                    month_labels(plot_ui, points.iter().map(|p| p.label.clone()));
                });
        }
        ChartKind::Line => {
            base_plot("sales_line", height)
                .include_y(0.0)
                .label_formatter(|_, value| format!("{:.0}", value.y))
                .show(ui, |plot_ui| {
                    let coords: Vec<[f64; 2]> = points.iter()
                        .enumerate()
                        .map(|(i, p)| [i as f64, p.value])
                        .collect();
                    plot_ui.line(
                        Line::new(coords.clone())
                            .name("sales")
                            .color(theme::CYAN)
                            .width(3.0)
                    );
                    plot_ui.points(Points::new(coords).radius(5.0).color(theme::PURPLE));
                    month_labels(plot_ui, points.iter().map(|p| p.label.clone()));
                });
        }
        ChartKind::Pie => {
            let slices = pie_slices(points);
            base_plot("sales_pie", height)
                .data_aspect(1.0)
                .show_axes([false, false])
                .include_x(-1.4)
                .include_x(1.4)
                .include_y(-1.2)
                .include_y(1.2)
                .label_formatter(|name, _| name.to_string())
                .show(ui, |plot_ui| {
                    for (i, slice) in slices.iter().enumerate() {
                        let color = theme::series_color(i);
                        plot_ui.polygon(
                            Polygon::new(slice.outline(PIE_RADIUS, 128))
                                .fill_color(color.gamma_multiply(0.85))
                                .stroke(egui::Stroke::new(1.0, color))
                                .name(&slice.label)
                        );
                        let [x, y] = slice.label_anchor(PIE_RADIUS * 1.15);
                        plot_ui.text(Text::new(
                            PlotPoint::new(x, y),
                            format!("{} {:.0}%", slice.label, slice.share * 100.0),
                        ));
                    }
                });
        }
    }
}

/// Sales as bars with revenue drawn as a line over them.
pub fn show_combined_chart(ui: &mut egui::Ui, records: &[SalesRecord]) {
    let height = 320.0;
    if records.is_empty() {
        empty_notice(ui, height);
        return;
    }

    base_plot("analytics_combined", height)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = records.iter()
                .enumerate()
                .map(|(i, r)| Bar::new(i as f64, r.sales as f64).name(&r.period).width(0.6))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name("sales").color(theme::CYAN));

            let revenue: Vec<[f64; 2]> = records.iter()
                .enumerate()
                .map(|(i, r)| [i as f64, r.revenue as f64])
                .collect();
            plot_ui.line(Line::new(revenue).name("revenue").color(theme::PURPLE).width(3.0));
            month_labels(plot_ui, records.iter().map(|r| r.period.clone()));
        });
}

/// Filled trend line of monthly sales.
pub fn show_trend_chart(ui: &mut egui::Ui, records: &[SalesRecord]) {
    let height = 320.0;
    if records.is_empty() {
        empty_notice(ui, height);
        return;
    }

    base_plot("analytics_trend", height)
        .include_y(0.0)
        .show(ui, |plot_ui| {
            let coords: Vec<[f64; 2]> = records.iter()
                .enumerate()
                .map(|(i, r)| [i as f64, r.sales as f64])
                .collect();
            plot_ui.line(
                Line::new(coords)
                    .name("sales")
                    .color(theme::CYAN)
                    .width(2.0)
                    .fill(0.0)
            );
            month_labels(plot_ui, records.iter().map(|r| r.period.clone()));
        });
}
