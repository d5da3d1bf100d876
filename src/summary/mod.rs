//! Derived views over a single month of the ledger.
//!
//! A [`MonthSummary`] is a pure snapshot: callers recompute it whenever the
//! ledger or the month under view changes. Nothing is cached in between.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::chart::{self, Segment};
use crate::ledger::{Category, Ledger, MonthCursor, Transaction};

/// Total spend for one category over the summarized month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: i64,
}

impl CategoryTotal {
    /// Share of `monthly_total` as a display percentage rounded to one
    /// decimal place. Rounded shares are not required to sum to 100.
    pub fn percent_of(&self, monthly_total: i64) -> f64 {
        if monthly_total <= 0 {
            return 0.0;
        }
        let raw = self.total as f64 / monthly_total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}

/// Snapshot of every derived view for one month.
#[derive(Debug, Clone)]
pub struct MonthSummary {
    cursor: MonthCursor,
    transactions: Vec<Transaction>,
    total: i64,
    daily_totals: HashMap<NaiveDate, i64>,
    category_totals: Vec<CategoryTotal>,
}

impl MonthSummary {
    /// Filters, sorts, and aggregates `ledger` for the month under `cursor`.
    pub fn compute(ledger: &Ledger, cursor: MonthCursor) -> Self {
        let mut transactions: Vec<Transaction> = ledger
            .transactions()
            .iter()
            .filter(|txn| cursor.contains(txn.date))
            .cloned()
            .collect();
        // Most recent day first; entries on the same day newest first.
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        let total = transactions.iter().map(|txn| txn.amount).sum();

        let mut daily_totals = HashMap::new();
        for txn in &transactions {
            *daily_totals.entry(txn.date).or_insert(0) += txn.amount;
        }

        let mut category_totals: Vec<CategoryTotal> = Category::ALL
            .iter()
            .map(|&category| CategoryTotal {
                category,
                total: transactions
                    .iter()
                    .filter(|txn| txn.category == category)
                    .map(|txn| txn.amount)
                    .sum(),
            })
            .collect();
        // Stable sort: equal totals keep registry order.
        category_totals.sort_by(|a, b| b.total.cmp(&a.total));

        Self {
            cursor,
            transactions,
            total,
            daily_totals,
            category_totals,
        }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    /// The month's transactions, most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Grand total for the month, 0 when the month is empty.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Spend per day; days without transactions are absent.
    pub fn daily_totals(&self) -> &HashMap<NaiveDate, i64> {
        &self.daily_totals
    }

    /// Spend on `date`, 0 when nothing was recorded.
    pub fn daily_total(&self, date: NaiveDate) -> i64 {
        self.daily_totals.get(&date).copied().unwrap_or(0)
    }

    /// Per-category totals, largest first, registry order breaking ties.
    /// Every registry category appears, including zero-activity ones.
    pub fn category_totals(&self) -> &[CategoryTotal] {
        &self.category_totals
    }

    /// Donut segments for the category breakdown.
    pub fn segments(&self) -> Vec<Segment> {
        chart::segments(&self.category_totals, self.total)
    }
}
