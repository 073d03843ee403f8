// src/ui/mod.rs
pub mod analytics;
pub mod charts;
pub mod home;
pub mod reports;
pub mod settings;
pub mod theme;
pub mod widgets;
