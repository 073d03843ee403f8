// src/data/mod.rs
pub mod sales;

pub use sales::series;
