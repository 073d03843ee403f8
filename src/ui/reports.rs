// src/ui/reports.rs
use eframe::egui;
use rfd::FileDialog;
use std::path::PathBuf;
use chrono::Local;

use crate::analysis::month_over_month;
use crate::config::Year;
use crate::file::{CsvExporter, ExportManager, JsonExporter, RecordExporter, ReportContext, ReportRegion};
use crate::state::{AppState, DashboardView};
use crate::ui::widgets::{show_controls, ControlsConfig};
use crate::utils::{format_millions, format_thousands};

#[derive(Debug, Clone, Copy, PartialEq)]
enum ExportKind {
    Csv,
    Json,
    Document,
    Summary,
}

impl ExportKind {
    fn extension(self) -> &'static str {
        match self {
            ExportKind::Csv => CsvExporter.extension(),
            ExportKind::Json => JsonExporter.extension(),
            ExportKind::Document => "txt",
            ExportKind::Summary => "summary.txt",
        }
    }

    fn filter_name(self) -> &'static str {
        match self {
            ExportKind::Csv => "CSV files",
            ExportKind::Json => "JSON files",
            ExportKind::Document | ExportKind::Summary => "Text documents",
        }
    }

    fn filter_extension(self) -> &'static str {
        match self {
            ExportKind::Csv => "csv",
            ExportKind::Json => "json",
            ExportKind::Document | ExportKind::Summary => "txt",
        }
    }

    fn region(self) -> Option<ReportRegion> {
        match self {
            ExportKind::Document => Some(ReportRegion::ReportContent),
            ExportKind::Summary => Some(ReportRegion::StatsCards),
            ExportKind::Csv | ExportKind::Json => None,
        }
    }
}

pub fn show_reports_view(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.heading(egui::RichText::new("Sales Reports").size(30.0).strong());
            ui.label("Detailed sales data and insights");
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // right-to-left, so listed in reverse
            for (kind, label) in [
                (ExportKind::Summary, "⬇ Summary"),
                (ExportKind::Document, "⬇ Document"),
                (ExportKind::Json, "⬇ JSON"),
                (ExportKind::Csv, "⬇ CSV"),
            ] {
                if ui.button(label).clicked() {
                    run_export(state, kind);
                }
            }
        });
    });
    ui.add_space(12.0);

    show_controls(ui, &mut state.reports.query, ControlsConfig::YEAR_AND_FILTER);
    match state.export_manager.export_dir() {
        Some(dir) => ui.weak(format!("Exports are saved to {}", dir.display())),
        None => ui.weak("Exports ask for a location (set a directory in Settings)"),
    };
    ui.add_space(12.0);

    let year = state.reports.query.year;
    let view = state.reports.view();

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.heading(format!("Sales Data {}", year));
        ui.add_space(8.0);

        if view.records.is_empty() {
            ui.label("No records match the current filter");
            return;
        }

        let growth = month_over_month(&view.records);
        egui::ScrollArea::horizontal().show(ui, |ui| {
            egui::Grid::new("report_table")
                .num_columns(4)
                .striped(true)
                .spacing([48.0, 6.0])
                .show(ui, |ui| {
                    ui.strong("Month");
                    ui.strong("Sales");
                    ui.strong("Revenue");
                    ui.strong("Growth");
                    ui.end_row();

                    for (record, change) in view.records.iter().zip(growth) {
                        ui.label(record.period.as_str());
                        ui.label(format_thousands(record.sales));
                        ui.label(format_millions(record.revenue, 2));
                        ui.label(format!("{:.1}%", change));
                        ui.end_row();
                    }
                });
        });
    });
}

fn choose_path(manager: &ExportManager, year: Year, kind: ExportKind) -> Option<PathBuf> {
    if let Some(path) = manager.default_path(year, kind.extension()) {
        return Some(path);
    }
    FileDialog::new()
        .set_title("Export Sales Report")
        .set_file_name(ExportManager::file_name(year, kind.extension()))
        .add_filter(kind.filter_name(), &[kind.filter_extension()])
        .save_file()
}

fn run_export(state: &mut AppState, kind: ExportKind) {
    let year = state.reports.query.year;
    let view: DashboardView = state.reports.view().clone();

    let Some(path) = choose_path(&state.export_manager, year, kind) else {
        log::debug!("export cancelled");
        return;
    };

    let result = match (kind, kind.region()) {
        (_, Some(region)) => {
            let ctx = ReportContext {
                year,
                records: &view.records,
                metrics: view.metrics,
                generated_at: Local::now(),
            };
            state.export_manager.export_region(region.id(), &ctx, &path)
        }
        (ExportKind::Json, None) => state.export_manager.export_records(&JsonExporter, &view.records, &path),
        (_, None) => state.export_manager.export_records(&CsvExporter, &view.records, &path),
    };

    match result {
        Ok(written) => {
            state.notice = Some(format!("Saved {}", written.display()));
        }
        Err(e) => {
            log::error!("export to {} failed: {}", path.display(), e);
            state.error_message = Some(format!("Export failed: {}", e));
        }
    }
}
