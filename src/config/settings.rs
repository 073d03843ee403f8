// src/config/settings.rs
use serde::{Serialize, Deserialize};
use std::path::PathBuf;
use super::{ChartKind, Year};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

/// User preferences stored in `settings.ron`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub theme: Theme,
    pub default_year: Year,
    pub default_chart: ChartKind,
    pub export_dir: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            default_year: Year::Y2024,
            default_chart: ChartKind::Bar,
            export_dir: None,
        }
    }
}
