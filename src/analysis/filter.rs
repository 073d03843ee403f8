// src/analysis/filter.rs

use crate::config::SalesRecord;

/// Minimum-sales cutoff. Negative and zero thresholds keep every record.
pub fn passes(record: &SalesRecord, threshold: i64) -> bool {
    match u64::try_from(threshold) {
        Ok(min) => record.sales >= min,
        Err(_) => true,
    }
}

/// Records with `sales >= threshold`, in their original order.
pub fn filter_by_min_sales(records: &[SalesRecord], threshold: i64) -> Vec<SalesRecord> {
    records.iter()
        .filter(|r| passes(r, threshold))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Year;
    use crate::data::series;
    use proptest::prelude::*;

    #[test]
    fn threshold_boundaries() {
        let data = series(Year::Y2022);
        assert_eq!(filter_by_min_sales(data, -5).len(), 12);
        assert_eq!(filter_by_min_sales(data, 0).len(), 12);

        let kept = filter_by_min_sales(data, 75_000);
        let months: Vec<&str> = kept.iter().map(|r| r.period.as_str()).collect();
        assert_eq!(months, vec!["Sep", "Oct", "Nov", "Dec"]);

        assert!(filter_by_min_sales(data, 95_001).is_empty());
    }

    #[test]
    fn source_is_untouched() {
        let data = series(Year::Y2023).to_vec();
        let before = data.clone();
        let _ = filter_by_min_sales(&data, 150_000);
        assert_eq!(data, before);
    }

    fn records_strategy() -> impl Strategy<Value = Vec<SalesRecord>> {
        prop::collection::vec(0u64..400_000, 0..30).prop_map(|sales| {
            sales.into_iter()
                .enumerate()
                .map(|(i, s)| SalesRecord::new(format!("P{}", i), s, s * 10))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn keeps_an_ordered_subsequence(records in records_strategy(), threshold in -1_000i64..450_000) {
            let kept = filter_by_min_sales(&records, threshold);

            prop_assert!(kept.iter().all(|r| r.sales as i64 >= threshold));

            // every kept record appears in the source, in the same relative order
            let mut cursor = records.iter();
            for record in &kept {
                prop_assert!(cursor.any(|r| r == record));
            }

            let dropped = records.iter().filter(|r| (r.sales as i64) < threshold).count();
            prop_assert_eq!(kept.len() + dropped, records.len());
        }

        #[test]
        fn is_idempotent(records in records_strategy(), threshold in -1_000i64..450_000) {
            let once = filter_by_min_sales(&records, threshold);
            let twice = filter_by_min_sales(&once, threshold);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn above_the_maximum_is_empty(records in records_strategy()) {
            let max = records.iter().map(|r| r.sales).max().unwrap_or(0);
            prop_assert!(filter_by_min_sales(&records, max as i64 + 1).is_empty());
        }
    }
}
