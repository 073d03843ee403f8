// src/config/mod.rs
pub mod record;
pub mod settings;

// Re-export commonly used types
pub use record::{SalesRecord, Year, ChartKind};
pub use settings::{AppSettings, Theme};
