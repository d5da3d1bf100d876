//! Ledger domain models: transactions, categories, and the month cursor.

pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod month;
pub mod transaction;

pub use category::Category;
pub use ledger::Ledger;
pub use month::{MonthCursor, WEEKDAY_LABELS};
pub use transaction::Transaction;
