// src/data/sales.rs
//! Bundled monthly sales figures, one series per supported year.
use std::sync::OnceLock;

use crate::config::{SalesRecord, Year};

pub const MONTHS_PER_YEAR: usize = 12;

pub type YearSeries = [SalesRecord; MONTHS_PER_YEAR];

const MONTHS: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// (sales, revenue) per month
const SALES_2022: [(u64, u64); MONTHS_PER_YEAR] = [
    (45_000, 450_000),
    (52_000, 520_000),
    (48_000, 480_000),
    (61_000, 610_000),
    (55_000, 550_000),
    (67_000, 670_000),
    (72_000, 720_000),
    (68_000, 680_000),
    (75_000, 750_000),
    (81_000, 810_000),
    (88_000, 880_000),
    (95_000, 950_000),
];

const SALES_2023: [(u64, u64); MONTHS_PER_YEAR] = [
    (98_000, 980_000),
    (105_000, 1_050_000),
    (112_000, 1_120_000),
    (108_000, 1_080_000),
    (125_000, 1_250_000),
    (132_000, 1_320_000),
    (128_000, 1_280_000),
    (145_000, 1_450_000),
    (152_000, 1_520_000),
    (148_000, 1_480_000),
    (165_000, 1_650_000),
    (178_000, 1_780_000),
];

const SALES_2024: [(u64, u64); MONTHS_PER_YEAR] = [
    (182_000, 1_820_000),
    (195_000, 1_950_000),
    (201_000, 2_010_000),
    (215_000, 2_150_000),
    (228_000, 2_280_000),
    (245_000, 2_450_000),
    (252_000, 2_520_000),
    (268_000, 2_680_000),
    (281_000, 2_810_000),
    (295_000, 2_950_000),
    (312_000, 3_120_000),
    (335_000, 3_350_000),
];

fn build(table: &[(u64, u64); MONTHS_PER_YEAR]) -> YearSeries {
    std::array::from_fn(|i| {
        let (sales, revenue) = table[i];
        SalesRecord::new(MONTHS[i], sales, revenue)
    })
}

/// The twelve records for `year`, in calendar order.
pub fn series(year: Year) -> &'static YearSeries {
    static S2022: OnceLock<YearSeries> = OnceLock::new();
    static S2023: OnceLock<YearSeries> = OnceLock::new();
    static S2024: OnceLock<YearSeries> = OnceLock::new();

    match year {
        Year::Y2022 => S2022.get_or_init(|| build(&SALES_2022)),
        Year::Y2023 => S2023.get_or_init(|| build(&SALES_2023)),
        Year::Y2024 => S2024.get_or_init(|| build(&SALES_2024)),
    }
}
