use std::{fs, path::PathBuf};

use crate::ledger::Transaction;
use crate::utils::app_data_dir;

use super::{Result, StorageBackend};

/// File-backed storage keeping each key as `<root>/<key>.json`.
///
/// Writes stage the payload to a temporary file and rename it over the
/// target, so a crash mid-write leaves the previous blob intact.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Storage rooted at `root`, defaulting to the application data
    /// directory. The directory is created lazily on first save.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root: root.unwrap_or_else(app_data_dir),
        }
    }

    /// File path backing `key`.
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl Default for JsonStorage {
    fn default() -> Self {
        Self::new(None)
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, key: &str, transactions: &[Transaction]) -> Result<()> {
        let path = self.blob_path(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(transactions)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        tracing::debug!(key, count = transactions.len(), "persisted transaction list");
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<Vec<Transaction>>> {
        let path = self.blob_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }
}
