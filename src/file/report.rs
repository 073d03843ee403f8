// src/file/report.rs
//! Plain-text rendering of the on-screen report regions.
use std::fmt::Write as _;
use chrono::{DateTime, Local};

use crate::analysis::{month_over_month, DerivedMetrics};
use crate::config::{SalesRecord, Year};
use crate::error::ExportError;
use crate::utils::{format_millions, format_thousands};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportRegion {
    /// The monthly sales table on the Reports screen.
    ReportContent,
    /// The four metric cards.
    StatsCards,
}

impl ReportRegion {
    pub const ALL: [ReportRegion; 2] = [ReportRegion::ReportContent, ReportRegion::StatsCards];

    pub fn id(self) -> &'static str {
        match self {
            ReportRegion::ReportContent => "report-content",
            ReportRegion::StatsCards => "stats-cards",
        }
    }

    pub fn from_id(id: &str) -> Result<Self, ExportError> {
        Self::ALL
            .into_iter()
            .find(|region| region.id() == id)
            .ok_or_else(|| ExportError::MissingRegion(id.to_string()))
    }
}

pub struct ReportContext<'a> {
    pub year: Year,
    pub records: &'a [SalesRecord],
    pub metrics: DerivedMetrics,
    pub generated_at: DateTime<Local>,
}

pub fn render_region(region_id: &str, ctx: &ReportContext<'_>) -> Result<String, ExportError> {
    let region = ReportRegion::from_id(region_id)?;
    if ctx.records.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut doc = String::new();
    // Writing into a String cannot fail
    let _ = writeln!(doc, "Vortex Analytics: Sales Data {}", ctx.year);
    let _ = writeln!(doc, "Generated {}", ctx.generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(doc);

    match region {
        ReportRegion::ReportContent => {
            let growth = month_over_month(ctx.records);
            let _ = writeln!(doc, "{:<8}{:>14}{:>14}{:>10}", "Month", "Sales", "Revenue", "Growth");
            for (record, change) in ctx.records.iter().zip(growth) {
                let _ = writeln!(
                    doc,
                    "{:<8}{:>14}{:>14}{:>9.1}%",
                    record.period,
                    format_thousands(record.sales),
                    format_millions(record.revenue, 2),
                    change
                );
            }
        }
        ReportRegion::StatsCards => {
            let m = &ctx.metrics;
            let _ = writeln!(doc, "Total Sales:   {}", format_thousands(m.total_sales));
            let _ = writeln!(doc, "Total Revenue: {}", format_millions(m.total_revenue, 1));
            let _ = writeln!(doc, "Average Sales: {}", format_thousands(m.average_sales));
            let _ = writeln!(doc, "Growth Rate:   {}%", m.growth_percent);
        }
    }

    Ok(doc)
}
