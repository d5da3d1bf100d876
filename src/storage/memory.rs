use std::collections::HashMap;
use std::sync::Mutex;

use crate::ledger::Transaction;

use super::{Result, StorageBackend};

#[derive(Debug, Default)]
struct Inner {
    blobs: HashMap<String, String>,
    saves: u64,
}

/// In-process backend keeping blobs in a mutex-guarded map.
///
/// Payloads go through the same JSON serialization as the file backend, so
/// wire-format behavior is shared. Successful saves are counted; tests use
/// the counter to assert that rejected mutations never reach storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: Mutex<Inner>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful saves since construction.
    pub fn save_count(&self) -> u64 {
        self.inner.lock().expect("blob map poisoned").saves
    }

    /// Raw JSON held under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.lock().expect("blob map poisoned").blobs.get(key).cloned()
    }

    /// Pre-seeds `key` with an arbitrary payload, valid or not.
    pub fn seed(&self, key: &str, payload: &str) {
        self.inner
            .lock()
            .expect("blob map poisoned")
            .blobs
            .insert(key.to_string(), payload.to_string());
    }
}

impl StorageBackend for MemoryStorage {
    fn save(&self, key: &str, transactions: &[Transaction]) -> Result<()> {
        let json = serde_json::to_string_pretty(transactions)?;
        let mut inner = self.inner.lock().expect("blob map poisoned");
        inner.blobs.insert(key.to_string(), json);
        inner.saves += 1;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<Transaction>>> {
        let inner = self.inner.lock().expect("blob map poisoned");
        match inner.blobs.get(key) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}
