// src/file/settings.rs
use super::FileHandler;
use crate::config::AppSettings;
use anyhow::{Result, Context};
use config::{Config, Environment};
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_PREFIX: &str = "VORTEX";

#[derive(Debug, Clone)]
pub struct SettingsFileHandler {
    env_prefix: Option<String>,
}

impl SettingsFileHandler {
    pub fn new() -> Self {
        Self {
            env_prefix: Some(ENV_PREFIX.to_string()),
        }
    }

    /// Reads only the file, ignoring environment overrides.
    #[cfg(test)]
    pub fn file_only() -> Self {
        Self { env_prefix: None }
    }

    /// `<config dir>/vortex-analytics/settings.ron`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vortex-analytics").join("settings.ron"))
    }

    fn read_file(&self, path: &Path) -> Result<AppSettings> {
        if !path.exists() {
            log::debug!("no settings file at {}, using defaults", path.display());
            return Ok(AppSettings::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
        ron::from_str(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }
}

impl FileHandler<AppSettings> for SettingsFileHandler {
    fn load(&self, path: &Path) -> Result<AppSettings> {
        let from_file = self.read_file(path)?;

        let Some(prefix) = &self.env_prefix else {
            return Ok(from_file);
        };

        // Environment variables override whatever the file says.
        let settings = Config::builder()
            .add_source(Config::try_from(&from_file).context("Failed to layer settings file")?)
            .add_source(Environment::with_prefix(prefix))
            .build()
            .context("Failed to build settings")?
            .try_deserialize()
            .context("Invalid settings override in environment")?;

        Ok(settings)
    }

    fn save(&self, data: &AppSettings, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = ron::ser::to_string_pretty(
            data,
            ron::ser::PrettyConfig::new()
                .new_line("\n".to_string())
                .depth_limit(4)
        )?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))?;
        log::info!("saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartKind, Theme, Year};
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let settings = SettingsFileHandler::file_only()
            .load(&dir.path().join("settings.ron"))
            .unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.ron");
        let handler = SettingsFileHandler::file_only();

        let settings = AppSettings {
            theme: Theme::Light,
            default_year: Year::Y2022,
            default_chart: ChartKind::Pie,
            export_dir: Some(dir.path().to_path_buf()),
        };
        handler.save(&settings, &path).unwrap();
        assert_eq!(handler.load(&path).unwrap(), settings);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(theme: light)").unwrap();

        let settings = SettingsFileHandler::file_only().load(&path).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.default_year, Year::Y2024);
    }

    #[test]
    fn unknown_year_in_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(default_year: 1999)").unwrap();
        assert!(SettingsFileHandler::file_only().load(&path).is_err());
    }

    #[test]
    fn environment_overrides_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.ron");
        fs::write(&path, "(theme: dark, default_chart: line)").unwrap();

        std::env::set_var("VORTEXTEST_THEME", "light");
        let handler = SettingsFileHandler { env_prefix: Some("VORTEXTEST".to_string()) };
        let settings = handler.load(&path).unwrap();
        std::env::remove_var("VORTEXTEST_THEME");

        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.default_chart, ChartKind::Line);
    }
}
