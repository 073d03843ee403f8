// src/file/mod.rs
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{SalesRecord, Year};
use crate::error::ExportError;

pub mod records;
pub mod report;
pub mod settings;

pub use records::{CsvExporter, JsonExporter, RecordExporter};
#[cfg(test)]
pub use records::parse_csv;
pub use report::{render_region, ReportContext, ReportRegion};
pub use settings::SettingsFileHandler;

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
    fn save(&self, data: &T, path: &Path) -> Result<()>;
}

/// Writes exports, either to an explicit path or into the configured export directory.
#[derive(Debug, Default)]
pub struct ExportManager {
    export_dir: Option<PathBuf>,
}

impl ExportManager {
    pub fn new(export_dir: Option<PathBuf>) -> Self {
        Self { export_dir }
    }

    pub fn set_export_dir(&mut self, dir: Option<PathBuf>) {
        self.export_dir = dir;
    }

    pub fn export_dir(&self) -> Option<&Path> {
        self.export_dir.as_deref()
    }

    pub fn file_name(year: Year, extension: &str) -> String {
        format!("sales-report-{}.{}", year, extension)
    }

    /// Target path inside the export directory, if one is configured.
    pub fn default_path(&self, year: Year, extension: &str) -> Option<PathBuf> {
        self.export_dir
            .as_ref()
            .map(|dir| dir.join(Self::file_name(year, extension)))
    }

    pub fn export_records(
        &self,
        exporter: &dyn RecordExporter,
        records: &[SalesRecord],
        path: &Path,
    ) -> Result<PathBuf, ExportError> {
        let content = exporter.render(records)?;
        self.write(path, &content)
    }

    pub fn export_region(
        &self,
        region_id: &str,
        ctx: &ReportContext<'_>,
        path: &Path,
    ) -> Result<PathBuf, ExportError> {
        let content = render_region(region_id, ctx)?;
        self.write(path, &content)
    }

    fn write(&self, path: &Path, content: &str) -> Result<PathBuf, ExportError> {
        let io_err = |source| ExportError::Io {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, content).map_err(io_err)?;

        log::info!("exported {} bytes to {}", content.len(), path.display());
        Ok(path.to_path_buf())
    }
}
