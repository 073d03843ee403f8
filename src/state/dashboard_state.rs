// src/state/dashboard_state.rs
use serde::{Serialize, Deserialize};

use crate::analysis::{aggregate, chart_points, filter_by_min_sales, ChartPoint, DerivedMetrics};
use crate::config::{ChartKind, SalesRecord, Year};
use crate::data::series;

/// Everything the dashboard derives its view from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardQuery {
    pub year: Year,
    pub threshold: i64,
    pub chart: ChartKind,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            year: Year::default(),
            threshold: 0,
            chart: ChartKind::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub records: Vec<SalesRecord>,
    pub metrics: DerivedMetrics,
    pub points: Vec<ChartPoint>,
}

impl DashboardView {
    pub fn compute(query: &DashboardQuery) -> Self {
        let records = filter_by_min_sales(series(query.year), query.threshold);
        let metrics = aggregate(&records);
        let points = chart_points(&records);
        Self { records, metrics, points }
    }
}

/// Holds the view for the last query and rebuilds it only when the query changes.
#[derive(Debug, Default)]
pub struct MetricsCache {
    entry: Option<(DashboardQuery, DashboardView)>,
    recomputations: usize,
}

impl MetricsCache {
    pub fn get(&mut self, query: &DashboardQuery) -> &DashboardView {
        if !matches!(&self.entry, Some((key, _)) if key == query) {
            self.entry = None;
        }

        let recomputations = &mut self.recomputations;
        let (_, view) = self.entry.get_or_insert_with(|| {
            log::debug!(
                "recomputing dashboard view for {} (min sales {}, {:?})",
                query.year, query.threshold, query.chart
            );
            *recomputations += 1;
            (*query, DashboardView::compute(query))
        });
        view
    }

    #[cfg(test)]
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

/// Per-screen selection plus its cached view.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub query: DashboardQuery,
    cache: MetricsCache,
}

impl DashboardState {
    pub fn new(query: DashboardQuery) -> Self {
        Self {
            query,
            cache: MetricsCache::default(),
        }
    }

    pub fn view(&mut self) -> &DashboardView {
        self.cache.get(&self.query)
    }

    #[cfg(test)]
    pub fn recomputations(&self) -> usize {
        self.cache.recomputations()
    }
}
