use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// A single recorded expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique id, assigned from the creation timestamp in Unix milliseconds.
    pub id: i64,
    /// Calendar day the expense belongs to; also the grouping key for daily
    /// totals.
    #[serde(with = "wire_date")]
    pub date: NaiveDate,
    /// Whole yen, always positive.
    pub amount: i64,
    pub category: Category,
    #[serde(default)]
    pub memo: String,
}

impl Transaction {
    /// The `YYYY/M/D` form of `date` used on the wire and in history rows.
    pub fn date_label(&self) -> String {
        wire_date::format(self.date)
    }
}

/// Serde adapter for the `YYYY/M/D` date strings the stored format has
/// always used. Month and day carry no zero padding.
pub(crate) mod wire_date {
    use chrono::{Datelike, NaiveDate};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub(crate) fn format(date: NaiveDate) -> String {
        format!("{}/{}/{}", date.year(), date.month(), date.day())
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format(*date))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, "%Y/%m/%d").map_err(de::Error::custom)
    }
}
