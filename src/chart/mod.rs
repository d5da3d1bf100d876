//! Donut-chart segmentation of the category breakdown.

use crate::ledger::Category;
use crate::summary::CategoryTotal;

/// Fill color of the placeholder ring shown for a month with no spend.
pub const NEUTRAL_COLOR: &str = "#e2e8f0";

/// One arc of the donut, bounded by percentages of the full circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Category the arc belongs to, `None` only on the empty-month
    /// placeholder.
    pub category: Option<Category>,
    /// Arc start, in percent of the circle.
    pub start: f64,
    /// Arc end, in percent of the circle.
    pub end: f64,
    /// Fill color as `#rrggbb`.
    pub color: &'static str,
}

impl Segment {
    /// Arc width in percent.
    pub fn width(&self) -> f64 {
        self.end - self.start
    }
}

/// Lays `category_totals` out as contiguous arcs from 0% to 100%, one per
/// entry in the given order.
///
/// Bounds come from a running integer sum of the amounts, so adjacent arcs
/// share their boundary exactly, a zero-total entry collapses to
/// `start == end`, and the final end lands on exactly `100.0`. When
/// `monthly_total` is zero there is nothing to apportion and a single
/// neutral full-circle segment is returned instead.
pub fn segments(category_totals: &[CategoryTotal], monthly_total: i64) -> Vec<Segment> {
    if monthly_total <= 0 {
        return vec![Segment {
            category: None,
            start: 0.0,
            end: 100.0,
            color: NEUTRAL_COLOR,
        }];
    }

    let mut segments = Vec::with_capacity(category_totals.len());
    let mut cumulative: i64 = 0;
    for entry in category_totals {
        let start = percent(cumulative, monthly_total);
        cumulative += entry.total;
        let end = percent(cumulative, monthly_total);
        segments.push(Segment {
            category: Some(entry.category),
            start,
            end,
            color: entry.category.color_hex(),
        });
    }
    segments
}

fn percent(part: i64, whole: i64) -> f64 {
    part as f64 / whole as f64 * 100.0
}
