// src/analysis/chart.rs
use std::f64::consts::TAU;

use crate::config::SalesRecord;

/// A labelled value, the only shape the chart widgets consume.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

pub fn chart_points(records: &[SalesRecord]) -> Vec<ChartPoint> {
    records.iter()
        .map(|r| ChartPoint {
            label: r.period.clone(),
            value: r.sales as f64,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    pub share: f64,       // 0.0..=1.0
    pub start_angle: f64, // radians, counter-clockwise from +x
    pub sweep: f64,
}

impl PieSlice {
    /// Wedge outline: the centre followed by points along the arc.
    pub fn outline(&self, radius: f64, steps_per_turn: usize) -> Vec<[f64; 2]> {
        let steps = ((self.sweep / TAU) * steps_per_turn as f64).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push([0.0, 0.0]);
        for i in 0..=steps {
            let angle = self.start_angle + self.sweep * i as f64 / steps as f64;
            points.push([radius * angle.cos(), radius * angle.sin()]);
        }
        points
    }

    pub fn label_anchor(&self, radius: f64) -> [f64; 2] {
        let mid = self.start_angle + self.sweep / 2.0;
        [radius * mid.cos(), radius * mid.sin()]
    }
}

/// Splits a full turn between the points in proportion to their value.
/// Non-positive values get no wedge; an all-zero input yields nothing.
pub fn pie_slices(points: &[ChartPoint]) -> Vec<PieSlice> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = 0.0;
    points.iter()
        .filter(|p| p.value > 0.0)
        .map(|p| {
            let share = p.value / total;
            let slice = PieSlice {
                label: p.label.clone(),
                value: p.value,
                share,
                start_angle: angle,
                sweep: share * TAU,
            };
            angle += slice.sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(label: &str, value: f64) -> ChartPoint {
        ChartPoint { label: label.to_string(), value }
    }

    #[test]
    fn points_carry_month_and_sales() {
        let records = vec![SalesRecord::new("Jan", 45_000, 450_000)];
        assert_eq!(chart_points(&records), vec![point("Jan", 45_000.0)]);
    }

    #[test]
    fn slices_cover_a_full_turn() {
        let slices = pie_slices(&[point("a", 1.0), point("b", 3.0)]);
        assert_eq!(slices.len(), 2);
        assert!((slices[0].share - 0.25).abs() < 1e-12);
        assert!((slices[1].start_angle - TAU / 4.0).abs() < 1e-12);
        let swept: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((swept - TAU).abs() < 1e-9);
    }

    #[test]
    fn zero_totals_draw_nothing() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[point("a", 0.0), point("b", 0.0)]).is_empty());
        assert_eq!(pie_slices(&[point("a", 0.0), point("b", 2.0)]).len(), 1);
    }

    #[test]
    fn outline_starts_at_centre_and_stays_on_radius() {
        let slice = &pie_slices(&[point("a", 1.0), point("b", 1.0)])[0];
        let outline = slice.outline(2.0, 64);
        assert_eq!(outline[0], [0.0, 0.0]);
        for [x, y] in &outline[1..] {
            assert!(((x * x + y * y).sqrt() - 2.0).abs() < 1e-9);
        }
    }
}
