use chrono::{NaiveDate, TimeZone, Utc};
use kakeibo_core::{
    chart::NEUTRAL_COLOR,
    input::{evaluate, AmountInput, Key},
    ledger::{Category, MonthCursor},
    manager::{LedgerManager, DEFAULT_STORAGE_KEY},
    storage::MemoryStorage,
    time::FixedClock,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn open_manager() -> LedgerManager {
    let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 20, 18, 30, 0).unwrap());
    LedgerManager::open_with_clock(
        Box::new(MemoryStorage::new()),
        DEFAULT_STORAGE_KEY,
        Box::new(clock),
    )
}

#[test]
fn a_month_of_activity_rolls_up_into_every_view() {
    let mut manager = open_manager();
    manager
        .create(date(2024, 3, 1), 1200, Category::Food, "ランチ")
        .expect("create");
    manager
        .create(date(2024, 3, 1), 800, Category::Daily, "電池")
        .expect("create");
    manager
        .create(date(2024, 3, 15), 1500, Category::Entertainment, "映画")
        .expect("create");
    manager
        .create(date(2024, 4, 1), 999, Category::Food, "来月分")
        .expect("create");

    let summary = manager.month_summary(MonthCursor::new(2024, 3));

    assert_eq!(summary.total(), 3500);
    assert_eq!(summary.transactions().len(), 3);
    assert_eq!(summary.daily_total(date(2024, 3, 1)), 2000);
    assert_eq!(summary.daily_total(date(2024, 3, 15)), 1500);

    let breakdown: Vec<(Category, i64)> = summary
        .category_totals()
        .iter()
        .map(|entry| (entry.category, entry.total))
        .collect();
    assert_eq!(
        breakdown,
        vec![
            (Category::Entertainment, 1500),
            (Category::Food, 1200),
            (Category::Daily, 800),
            (Category::Medical, 0),
        ]
    );

    let segments = summary.segments();
    assert_eq!(segments[0].start, 0.0);
    assert_eq!(segments[3].end, 100.0);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    // Medical recorded nothing, so its arc is empty.
    assert_eq!(segments[3].width(), 0.0);
}

#[test]
fn editing_a_date_moves_the_entry_in_history() {
    let mut manager = open_manager();
    let a = manager
        .create(date(2024, 3, 1), 100, Category::Food, "a")
        .expect("create")
        .id;
    let b = manager
        .create(date(2024, 3, 5), 200, Category::Food, "b")
        .expect("create")
        .id;
    let c = manager
        .create(date(2024, 3, 10), 300, Category::Food, "c")
        .expect("create")
        .id;

    let before: Vec<i64> = manager
        .month_summary(MonthCursor::new(2024, 3))
        .transactions()
        .iter()
        .map(|txn| txn.id)
        .collect();
    assert_eq!(before, vec![c, b, a]);

    manager
        .update(c, date(2024, 3, 2), 300, Category::Food, "c")
        .expect("update");

    let after: Vec<i64> = manager
        .month_summary(MonthCursor::new(2024, 3))
        .transactions()
        .iter()
        .map(|txn| txn.id)
        .collect();
    assert_eq!(after, vec![b, c, a]);
}

#[test]
fn moving_an_entry_across_months_moves_its_totals() {
    let mut manager = open_manager();
    let id = manager
        .create(date(2024, 3, 31), 2500, Category::Entertainment, "旅行")
        .expect("create")
        .id;

    let march = MonthCursor::new(2024, 3);
    let april = march.advance(1);
    assert_eq!(manager.month_summary(march).total(), 2500);
    assert_eq!(manager.month_summary(april).total(), 0);

    manager
        .update(id, date(2024, 4, 1), 2500, Category::Entertainment, "旅行")
        .expect("update");

    assert_eq!(manager.month_summary(march).total(), 0);
    assert_eq!(manager.month_summary(april).total(), 2500);
}

#[test]
fn an_untouched_month_shows_the_neutral_ring() {
    let manager = open_manager();
    let summary = manager.month_summary(MonthCursor::new(2024, 3));
    let segments = summary.segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].category, None);
    assert_eq!(segments[0].color, NEUTRAL_COLOR);
    assert_eq!((segments[0].start, segments[0].end), (0.0, 100.0));
}

#[test]
fn keypad_entry_feeds_a_valid_create() {
    let mut input = AmountInput::new();
    for key in [
        Key::Digit(1),
        Key::Digit(0),
        Key::Digit(0),
        Key::Digit(0),
        Key::Plus,
        Key::Digit(5),
        Key::Digit(0),
        Key::Digit(0),
    ] {
        input.press(key);
    }
    assert_eq!(input.text(), "1000+500");

    let amount = input.resolve().expect("sums to an integer");
    assert_eq!(amount, 1500);

    let mut manager = open_manager();
    let txn = manager
        .create(date(2024, 3, 20), amount, Category::Food, "買い出し")
        .expect("create");
    assert_eq!(txn.amount, 1500);
}

#[test]
fn keypad_garbage_cannot_become_a_transaction() {
    // A buffer that does not collapse to an integer resolves to None, and a
    // zero result is rejected by the ledger, matching the entry flow.
    assert_eq!(evaluate("abc"), "0");

    let mut manager = open_manager();
    let err = manager
        .create(date(2024, 3, 20), 0, Category::Food, "")
        .expect_err("zero amount is rejected");
    assert!(matches!(
        err,
        kakeibo_core::errors::LedgerError::InvalidAmount(0)
    ));
    assert!(manager.ledger().is_empty());
}

#[test]
fn grid_and_daily_totals_line_up_for_the_calendar() {
    let mut manager = open_manager();
    manager
        .create(date(2024, 3, 1), 1200, Category::Food, "")
        .expect("create");
    manager
        .create(date(2024, 3, 15), 1500, Category::Entertainment, "")
        .expect("create");

    let cursor = MonthCursor::new(2024, 3);
    let summary = manager.month_summary(cursor);

    // March 2024 opens on a Friday: five leading blanks, then 31 days.
    let cells = cursor.grid();
    assert_eq!(cells.len(), 36);
    assert!(cells[..5].iter().all(Option::is_none));

    let spent_days: Vec<NaiveDate> = cells
        .iter()
        .flatten()
        .copied()
        .filter(|day| summary.daily_total(*day) > 0)
        .collect();
    assert_eq!(spent_days, vec![date(2024, 3, 1), date(2024, 3, 15)]);
}
