use chrono::NaiveDate;

use crate::errors::LedgerError;

use super::{category::Category, transaction::Transaction};

/// The in-memory transaction list.
///
/// Storage order is insertion order and carries no meaning; every derived
/// view sorts at query time. Ids are assigned here: the caller's clock
/// reading in Unix milliseconds, bumped past the current maximum when the
/// clock has not advanced since the previous create, so ids stay unique and
/// strictly increasing.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a ledger from persisted records, dropping any that violate
    /// the positive-amount invariant.
    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let mut kept = Vec::with_capacity(transactions.len());
        for txn in transactions {
            if txn.amount > 0 {
                kept.push(txn);
            } else {
                tracing::warn!(
                    id = txn.id,
                    amount = txn.amount,
                    "dropping persisted transaction with non-positive amount"
                );
            }
        }
        Self { transactions: kept }
    }

    /// Every transaction, in storage order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    /// Appends a new transaction and returns a reference to it.
    ///
    /// `now_millis` is the caller's clock reading. A non-positive amount is
    /// rejected and leaves the list untouched.
    pub fn create(
        &mut self,
        date: NaiveDate,
        amount: i64,
        category: Category,
        memo: impl Into<String>,
        now_millis: i64,
    ) -> Result<&Transaction, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let id = now_millis.max(self.max_id() + 1);
        let index = self.transactions.len();
        self.transactions.push(Transaction {
            id,
            date,
            amount,
            category,
            memo: memo.into(),
        });
        Ok(&self.transactions[index])
    }

    /// Replaces every field except `id` on the transaction matching `id`.
    ///
    /// Amounts follow the same rule as [`Ledger::create`]; an unknown id is
    /// an error and changes nothing.
    pub fn update(
        &mut self,
        id: i64,
        date: NaiveDate,
        amount: i64,
        category: Category,
        memo: impl Into<String>,
    ) -> Result<&Transaction, LedgerError> {
        if amount <= 0 {
            return Err(LedgerError::InvalidAmount(amount));
        }
        let txn = self
            .transactions
            .iter_mut()
            .find(|txn| txn.id == id)
            .ok_or(LedgerError::UnknownTransaction(id))?;
        txn.date = date;
        txn.amount = amount;
        txn.category = category;
        txn.memo = memo.into();
        Ok(txn)
    }

    fn max_id(&self) -> i64 {
        self.transactions
            .iter()
            .map(|txn| txn.id)
            .max()
            .unwrap_or(0)
    }
}
