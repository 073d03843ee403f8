// src/analysis/metrics.rs

use serde::{Serialize, Deserialize};
use crate::config::SalesRecord;

/// Aggregates shown on the stat cards.
///
/// An empty input produces the all-zero value returned by `Default`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub record_count: usize,
    pub total_sales: u64,
    pub total_revenue: u64,
    pub average_sales: u64,
    pub growth_percent: i64,
    pub peak_sales: u64,
    pub lowest_sales: u64,
}

// Halves round toward positive infinity, matching the figures on the web dashboard.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

pub fn aggregate(records: &[SalesRecord]) -> DerivedMetrics {
    if records.is_empty() {
        return DerivedMetrics::default();
    }

    let total_sales: u64 = records.iter().map(|r| r.sales).sum();
    let total_revenue: u64 = records.iter().map(|r| r.revenue).sum();
    let average_sales = round_half_up(total_sales as f64 / records.len() as f64) as u64;

    DerivedMetrics {
        record_count: records.len(),
        total_sales,
        total_revenue,
        average_sales,
        growth_percent: growth_percent(records),
        peak_sales: records.iter().map(|r| r.sales).max().unwrap_or(0),
        lowest_sales: records.iter().map(|r| r.sales).min().unwrap_or(0),
    }
}

/// Growth from the first to the last record, in whole percent.
pub fn growth_percent(records: &[SalesRecord]) -> i64 {
    match (records.first(), records.last()) {
        (Some(first), Some(last)) if records.len() > 1 && first.sales != 0 => {
            let change = last.sales as f64 - first.sales as f64;
            round_half_up(change / first.sales as f64 * 100.0) as i64
        }
        _ => 0,
    }
}

/// Percent change of each record against the one before it. The first entry is always 0.
pub fn month_over_month(records: &[SalesRecord]) -> Vec<f64> {
    let mut growth = Vec::with_capacity(records.len());
    for (i, record) in records.iter().enumerate() {
        let change = match i.checked_sub(1).and_then(|p| records.get(p)) {
            Some(prev) if prev.sales != 0 => {
                (record.sales as f64 - prev.sales as f64) / prev.sales as f64 * 100.0
            }
            _ => 0.0,
        };
        growth.push(change);
    }
    growth
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Year;
    use crate::data::series;
    use proptest::prelude::*;

    fn units(values: &[u64]) -> Vec<SalesRecord> {
        values.iter()
            .enumerate()
            .map(|(i, &v)| SalesRecord::new(format!("P{}", i), v, v * 10))
            .collect()
    }

    #[test]
    fn full_2022_series() {
        let m = aggregate(series(Year::Y2022));
        assert_eq!(m.record_count, 12);
        assert_eq!(m.total_sales, 807_000);
        assert_eq!(m.total_revenue, 8_070_000);
        assert_eq!(m.average_sales, 67_250);
        assert_eq!(m.growth_percent, 111);
        assert_eq!(m.peak_sales, 95_000);
        assert_eq!(m.lowest_sales, 45_000);
    }

    #[test]
    fn growth_cases() {
        assert_eq!(growth_percent(&units(&[100, 150])), 50);
        assert_eq!(growth_percent(&units(&[100])), 0);
        assert_eq!(growth_percent(&units(&[0, 50])), 0);
        assert_eq!(growth_percent(&units(&[200, 100])), -50);
        assert_eq!(growth_percent(&[]), 0);
    }

    #[test]
    fn empty_input_is_zero_state() {
        assert_eq!(aggregate(&[]), DerivedMetrics::default());
    }

    #[test]
    fn average_rounds_halves_up() {
        assert_eq!(aggregate(&units(&[1, 2])).average_sales, 2);
        assert_eq!(aggregate(&units(&[1, 1, 2])).average_sales, 1);
    }

    #[test]
    fn month_over_month_growth() {
        let growth = month_over_month(&units(&[100, 150, 0, 30]));
        assert_eq!(growth, vec![0.0, 50.0, -100.0, 0.0]);
        assert!(month_over_month(&[]).is_empty());

        let growth_2024 = month_over_month(series(Year::Y2024));
        assert_eq!(format!("{:.1}", growth_2024[1]), "7.1");
    }

    fn records_strategy() -> impl Strategy<Value = Vec<SalesRecord>> {
        prop::collection::vec((0u64..500_000, 0u64..5_000_000), 1..24).prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (sales, revenue))| SalesRecord::new(format!("P{}", i), sales, revenue))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn totals_ignore_order(
            (original, shuffled) in records_strategy()
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            let expected: u64 = original.iter().map(|r| r.sales).sum();
            let a = aggregate(&original);
            let b = aggregate(&shuffled);
            prop_assert_eq!(a.total_sales, expected);
            prop_assert_eq!(a.total_sales, b.total_sales);
            prop_assert_eq!(a.total_revenue, b.total_revenue);
            prop_assert_eq!(a.average_sales, b.average_sales);
        }

        #[test]
        fn peak_bounds_average(records in records_strategy()) {
            let m = aggregate(&records);
            prop_assert!(m.lowest_sales <= m.average_sales);
            prop_assert!(m.average_sales <= m.peak_sales);
        }
    }
}
