//! Facade that coordinates the live ledger with its persistence backend.

use chrono::NaiveDate;

use crate::errors::LedgerError;
use crate::ledger::{Category, Ledger, MonthCursor, Transaction};
use crate::storage::StorageBackend;
use crate::summary::MonthSummary;
use crate::time::{Clock, SystemClock};

/// Storage key the app has written since the v4 data layout.
pub const DEFAULT_STORAGE_KEY: &str = "kakeibo_v4_data";

/// Owns the in-memory ledger plus the storage it mirrors.
///
/// The persisted list is read exactly once, at open. Every successful
/// mutation writes the whole list back before the new state becomes
/// visible, so memory and storage cannot diverge; there is no other writer.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    key: String,
    clock: Box<dyn Clock>,
}

impl LedgerManager {
    /// Opens the ledger stored under `key` using the system clock.
    ///
    /// An absent key and an unreadable blob both start an empty ledger; a
    /// first run and corrupted data are deliberately indistinguishable.
    pub fn open(storage: Box<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self::open_with_clock(storage, key, Box::new(SystemClock))
    }

    /// [`LedgerManager::open`] with a caller-supplied clock, for
    /// deterministic transaction ids.
    pub fn open_with_clock(
        storage: Box<dyn StorageBackend>,
        key: impl Into<String>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let key = key.into();
        let ledger = match storage.load(&key) {
            Ok(Some(transactions)) => Ledger::from_transactions(transactions),
            Ok(None) => Ledger::new(),
            Err(err) => {
                tracing::warn!(key, %err, "stored data unreadable, starting empty");
                Ledger::new()
            }
        };
        Self {
            ledger,
            storage,
            key,
            clock,
        }
    }

    /// The live ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// The backing storage.
    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    /// Records a new transaction and persists the updated list.
    ///
    /// A non-positive amount is rejected before anything is written. A
    /// storage failure leaves the in-memory list at its previous state.
    pub fn create(
        &mut self,
        date: NaiveDate,
        amount: i64,
        category: Category,
        memo: impl Into<String>,
    ) -> Result<Transaction, LedgerError> {
        let mut next = self.ledger.clone();
        let created = next
            .create(date, amount, category, memo, self.clock.now_millis())?
            .clone();
        self.commit(next)?;
        tracing::debug!(id = created.id, amount = created.amount, "recorded transaction");
        Ok(created)
    }

    /// Rewrites every field except `id` on an existing transaction and
    /// persists the updated list. Failure behavior matches
    /// [`LedgerManager::create`].
    pub fn update(
        &mut self,
        id: i64,
        date: NaiveDate,
        amount: i64,
        category: Category,
        memo: impl Into<String>,
    ) -> Result<Transaction, LedgerError> {
        let mut next = self.ledger.clone();
        let updated = next.update(id, date, amount, category, memo)?.clone();
        self.commit(next)?;
        tracing::debug!(id, "rewrote transaction");
        Ok(updated)
    }

    /// Derived views for the month under `cursor`.
    pub fn month_summary(&self, cursor: MonthCursor) -> MonthSummary {
        MonthSummary::compute(&self.ledger, cursor)
    }

    fn commit(&mut self, next: Ledger) -> Result<(), LedgerError> {
        self.storage.save(&self.key, next.transactions())?;
        self.ledger = next;
        Ok(())
    }
}
