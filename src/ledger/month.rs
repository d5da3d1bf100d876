use chrono::{Datelike, NaiveDate};

/// Sunday-first weekday headers for the calendar grid.
pub const WEEKDAY_LABELS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Identifies the month under view as a plain (year, month) pair.
///
/// The cursor never carries a day of month; navigation moves in whole
/// months only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthCursor {
    year: i32,
    month: u32,
}

impl MonthCursor {
    /// Cursor for the given year and 1-based month. Out-of-range months are
    /// clamped into `1..=12`.
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// Cursor for the month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Moves the cursor by `months`, negative values moving backwards.
    /// December to January rolls the year forward and vice versa.
    pub fn advance(self, months: i32) -> Self {
        let index = self.year * 12 + self.month as i32 - 1 + months;
        Self {
            year: index.div_euclid(12),
            month: index.rem_euclid(12) as u32 + 1,
        }
    }

    /// True when `date` falls inside this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // month is clamped on construction, so this cannot fail
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// Number of calendar days in the month.
    pub fn day_count(&self) -> u32 {
        let next_first = self.advance(1).first_day();
        (next_first - self.first_day()).num_days() as u32
    }

    /// Calendar cells for the month: one empty cell per weekday before day 1
    /// (Sunday-first), then every day in order. There is no trailing
    /// padding, so the length is rarely a multiple of seven.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let leading = self.first_day().weekday().num_days_from_sunday() as usize;
        let mut cells = vec![None; leading];
        for day in 1..=self.day_count() {
            cells.push(NaiveDate::from_ymd_opt(self.year, self.month, day));
        }
        cells
    }
}
