// src/main.rs
use eframe::egui;
use anyhow::Result;

mod analysis;
mod app;
mod config;
mod data;
mod error;
mod file;
mod state;
mod ui;
mod utils;

use app::VortexApp;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Vortex Analytics"),
        ..Default::default()
    };

    log::info!("starting Vortex Analytics {}", env!("CARGO_PKG_VERSION"));

    eframe::run_native(
        "Vortex Analytics",
        options,
        Box::new(|cc| Box::new(VortexApp::new(cc))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
