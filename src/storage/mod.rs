//! Persistence boundary: transaction lists are stored as whole JSON blobs
//! addressed by key.

pub mod json_backend;
pub mod memory;

use crate::errors::LedgerError;
use crate::ledger::Transaction;

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over blob stores capable of persisting a transaction list.
///
/// Semantics are whole-list overwrite: `save` replaces whatever `key` held,
/// and `load` yields `Ok(None)` when the key has never been written. A
/// corrupt payload surfaces as an error; the caller decides how to degrade.
pub trait StorageBackend: Send + Sync {
    fn save(&self, key: &str, transactions: &[Transaction]) -> Result<()>;
    fn load(&self, key: &str) -> Result<Option<Vec<Transaction>>>;
}

pub use json_backend::JsonStorage;
pub use memory::MemoryStorage;
