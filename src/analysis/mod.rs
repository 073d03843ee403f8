// src/analysis/mod.rs
pub mod chart;
pub mod filter;
pub mod metrics;

// Re-export commonly used types
pub use chart::{chart_points, pie_slices, ChartPoint, PieSlice};
pub use filter::filter_by_min_sales;
pub use metrics::{aggregate, growth_percent, month_over_month, DerivedMetrics};
