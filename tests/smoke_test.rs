use kakeibo_core::{
    init,
    ledger::{Category, Ledger, MonthCursor},
    summary::MonthSummary,
};
use chrono::NaiveDate;

#[test]
fn ledger_summary_smoke() {
    init();

    let mut ledger = Ledger::new();
    ledger
        .create(
            NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            980,
            Category::Food,
            "弁当",
            1,
        )
        .expect("create");

    let summary = MonthSummary::compute(&ledger, MonthCursor::new(2025, 1));
    assert_eq!(summary.total(), 980);
    assert_eq!(summary.transactions().len(), 1);
    assert!(ledger.get(1).is_some());
}
