// src/ui/theme.rs
use eframe::egui::{self, Color32};
use crate::config::Theme;

pub const CYAN: Color32 = Color32::from_rgb(0x00, 0xD9, 0xFF);
pub const PURPLE: Color32 = Color32::from_rgb(0x9D, 0x4E, 0xDD);
pub const PINK: Color32 = Color32::from_rgb(0xFF, 0x00, 0x6E);
pub const YELLOW: Color32 = Color32::from_rgb(0xFF, 0xBE, 0x0B);

/// Pie wedge colours, cycled.
pub const SERIES: [Color32; 6] = [
    CYAN,
    PURPLE,
    PINK,
    YELLOW,
    Color32::from_rgb(0x83, 0x38, 0xEC),
    Color32::from_rgb(0x3A, 0x86, 0xFF),
];

pub fn series_color(index: usize) -> Color32 {
    SERIES[index % SERIES.len()]
}

pub fn visuals(theme: Theme) -> egui::Visuals {
    match theme {
        Theme::Dark => {
            let mut visuals = egui::Visuals::dark();
            visuals.panel_fill = Color32::from_rgb(0x0E, 0x0E, 0x18);
            visuals.window_fill = Color32::from_rgb(0x14, 0x14, 0x1E);
            visuals.extreme_bg_color = Color32::from_rgb(0x08, 0x08, 0x10);
            visuals.selection.bg_fill = Color32::from_rgb(0x00, 0x7A, 0x90);
            visuals.hyperlink_color = CYAN;
            visuals
        }
        Theme::Light => {
            let mut visuals = egui::Visuals::light();
            visuals.selection.bg_fill = Color32::from_rgb(0x9A, 0xE8, 0xFF);
            visuals.hyperlink_color = PURPLE;
            visuals
        }
    }
}

pub fn apply(ctx: &egui::Context, theme: Theme) {
    ctx.set_visuals(visuals(theme));
}

/// Accent used for headline numbers.
pub fn accent(theme: Theme) -> Color32 {
    match theme {
        Theme::Dark => CYAN,
        Theme::Light => PURPLE,
    }
}
