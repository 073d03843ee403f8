// src/state/mod.rs
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use anyhow::{Result, anyhow};
use serde::{Serialize, Deserialize};

use crate::config::{AppSettings, Theme};
use crate::file::{ExportManager, FileHandler, SettingsFileHandler};

pub mod dashboard_state;
pub mod theme_state;

pub use dashboard_state::{DashboardQuery, DashboardState, DashboardView, MetricsCache};
pub use theme_state::ThemeStore;

// Screen/tab tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Home,
    Analytics,
    Reports,
    Settings,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

/// What survives between runs through eframe storage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub current_screen: Screen,
    pub home: Option<DashboardQuery>,
    pub analytics: Option<DashboardQuery>,
    pub reports: Option<DashboardQuery>,
}

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub settings: AppSettings,
    pub settings_path: Option<PathBuf>,
    pub settings_draft: AppSettings,

    pub theme: ThemeStore,
    theme_changes: Receiver<Theme>,

    pub home: DashboardState,
    pub analytics: DashboardState,
    pub reports: DashboardState,

    pub current_screen: Screen,
    pub error_message: Option<String>,
    pub notice: Option<String>,

    pub export_manager: ExportManager,
    settings_handler: SettingsFileHandler,
}

impl AppState {
    pub fn new(settings: AppSettings, settings_path: Option<PathBuf>) -> Self {
        let query = DashboardQuery {
            year: settings.default_year,
            chart: settings.default_chart,
            threshold: 0,
        };

        let mut theme = ThemeStore::new(settings.theme);
        let theme_changes = theme.subscribe();

        Self {
            settings_draft: settings.clone(),
            export_manager: ExportManager::new(settings.export_dir.clone()),
            settings,
            settings_path,
            theme,
            theme_changes,
            home: DashboardState::new(query),
            analytics: DashboardState::new(query),
            reports: DashboardState::new(query),
            current_screen: Screen::Home,
            error_message: None,
            notice: None,
            settings_handler: SettingsFileHandler::new(),
        }
    }

    /// Loads settings from the default location, falling back to defaults on failure.
    pub fn load() -> Self {
        let path = SettingsFileHandler::default_path();
        let handler = SettingsFileHandler::new();

        let (settings, error) = match &path {
            Some(p) => match handler.load(p) {
                Ok(settings) => (settings, None),
                Err(e) => {
                    log::warn!("falling back to default settings: {:#}", e);
                    (AppSettings::default(), Some(format!("Error loading settings: {:#}", e)))
                }
            },
            None => {
                log::warn!("no config directory available; settings will not be saved");
                (AppSettings::default(), None)
            }
        };

        let mut state = Self::new(settings, path);
        state.error_message = error;
        state
    }

    pub fn restore_session(&mut self, snapshot: SessionSnapshot) {
        self.current_screen = snapshot.current_screen;
        if let Some(query) = snapshot.home {
            self.home.query = query;
        }
        if let Some(query) = snapshot.analytics {
            self.analytics.query = query;
        }
        if let Some(query) = snapshot.reports {
            self.reports.query = query;
        }
    }

    pub fn session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            current_screen: self.current_screen,
            home: Some(self.home.query),
            analytics: Some(self.analytics.query),
            reports: Some(self.reports.query),
        }
    }

    /// Applies pending theme changes to the settings and persists them.
    /// Returns the latest theme if any change arrived.
    pub fn drain_theme_changes(&mut self) -> Option<Theme> {
        let latest = self.theme_changes.try_iter().last()?;
        self.settings.theme = latest;
        self.settings_draft.theme = latest;
        if let Err(e) = self.save_settings() {
            self.error_message = Some(e.to_string());
        }
        Some(latest)
    }

    /// Promotes the Settings screen draft to the active settings.
    pub fn apply_settings_draft(&mut self) -> Result<()> {
        let draft = self.settings_draft.clone();
        self.export_manager.set_export_dir(draft.export_dir.clone());
        self.settings = draft;
        // The theme store notifies us, which saves; save here in case it didn't change.
        if !self.theme.set(self.settings.theme) {
            self.save_settings()?;
        }
        Ok(())
    }

    pub fn discard_settings_draft(&mut self) {
        self.settings_draft = self.settings.clone();
    }

    pub fn save_settings(&self) -> Result<()> {
        let path = self.settings_path
            .as_ref()
            .ok_or_else(|| anyhow!("No settings location available"))?;
        self.settings_handler.save(&self.settings, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ChartKind, Year};
    use tempfile::tempdir;

    fn state_in(dir: &std::path::Path) -> AppState {
        AppState::new(AppSettings::default(), Some(dir.join("settings.ron")))
    }

    #[test]
    fn defaults_seed_every_screen() {
        let settings = AppSettings {
            default_year: Year::Y2023,
            default_chart: ChartKind::Line,
            ..AppSettings::default()
        };
        let state = AppState::new(settings, None);
        for screen in [&state.home, &state.analytics, &state.reports] {
            assert_eq!(screen.query.year, Year::Y2023);
            assert_eq!(screen.query.chart, ChartKind::Line);
            assert_eq!(screen.query.threshold, 0);
        }
    }

    #[test]
    fn theme_toggle_is_persisted() {
        let dir = tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.theme.toggle();
        assert_eq!(state.drain_theme_changes(), Some(Theme::Light));
        assert_eq!(state.settings.theme, Theme::Light);
        assert_eq!(state.drain_theme_changes(), None);

        let saved = SettingsFileHandler::file_only()
            .load(&dir.path().join("settings.ron"))
            .unwrap();
        assert_eq!(saved.theme, Theme::Light);
    }

    #[test]
    fn settings_draft_apply_and_discard() {
        let dir = tempdir().unwrap();
        let mut state = state_in(dir.path());

        state.settings_draft.default_year = Year::Y2022;
        state.discard_settings_draft();
        assert_eq!(state.settings_draft.default_year, Year::Y2024);

        state.settings_draft.export_dir = Some(dir.path().join("out"));
        state.apply_settings_draft().unwrap();
        assert_eq!(state.export_manager.export_dir(), Some(dir.path().join("out").as_path()));
        assert!(dir.path().join("settings.ron").exists());
    }

    #[test]
    fn saving_without_a_location_fails() {
        let state = AppState::new(AppSettings::default(), None);
        assert!(state.save_settings().is_err());
    }

    #[test]
    fn session_round_trip() {
        let mut state = AppState::new(AppSettings::default(), None);
        state.current_screen = Screen::Reports;
        state.reports.query.threshold = 200_000;

        let snapshot = state.session_snapshot();
        let mut restored = AppState::new(AppSettings::default(), None);
        restored.restore_session(snapshot);

        assert_eq!(restored.current_screen, Screen::Reports);
        assert_eq!(restored.reports.query.threshold, 200_000);
    }
}
