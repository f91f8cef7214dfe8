use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::{BudgetError, Result},
    ledger::{BudgetBook, Transaction},
    utils::paths::{self, ensure_dir},
};

use super::StorageBackend;

/// Current on-disk schema version for both collection blobs.
pub const SCHEMA_VERSION: u32 = 1;

const TMP_SUFFIX: &str = "tmp";

/// JSON-file persistence: one blob per collection under the data directory.
///
/// Each blob is a versioned envelope (`{"schema_version": 1, "records": [...]}`).
/// Loading also accepts a bare array, the shape of pre-envelope exports.
/// Unreadable JSON degrades to an empty collection with a warning; a blob
/// written by a newer schema version is refused instead of mangled.
#[derive(Debug, Clone)]
pub struct JsonStore {
    budgets_file: PathBuf,
    transactions_file: PathBuf,
}

impl JsonStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(paths::app_data_dir);
        ensure_dir(&base)?;
        Ok(Self {
            budgets_file: paths::budgets_file_in(&base),
            transactions_file: paths::transactions_file_in(&base),
        })
    }

    /// Store rooted at the default data directory.
    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn budgets_path(&self) -> &Path {
        &self.budgets_file
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions_file
    }
}

impl StorageBackend for JsonStore {
    fn load_budgets(&self) -> Result<BudgetBook> {
        load_collection(&self.budgets_file)
    }

    fn save_budgets(&self, book: &BudgetBook) -> Result<()> {
        save_collection(&self.budgets_file, book)
    }

    fn load_transactions(&self) -> Result<Vec<Transaction>> {
        load_collection(&self.transactions_file)
    }

    fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        save_collection(&self.transactions_file, transactions)
    }
}

#[derive(Serialize)]
struct Envelope<'a, T: Serialize + ?Sized> {
    schema_version: u32,
    records: &'a T,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredCollection<T> {
    Versioned {
        #[allow(dead_code)]
        schema_version: u32,
        records: T,
    },
    Legacy(T),
}

/// Reads just the envelope version, ignoring the records entirely. The
/// version must be checked before decoding: a newer blob's records may not
/// parse under the current shapes at all, and that failure must surface as
/// a refusal, not as the unreadable-file empty fallback.
#[derive(Deserialize)]
struct VersionProbe {
    schema_version: u32,
}

fn load_collection<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let data = fs::read_to_string(path)?;
    if let Ok(probe) = serde_json::from_str::<VersionProbe>(&data) {
        if probe.schema_version > SCHEMA_VERSION {
            return Err(BudgetError::Storage(format!(
                "`{}` uses schema version {}, newer than supported version {SCHEMA_VERSION}",
                path.display(),
                probe.schema_version
            )));
        }
    }
    match serde_json::from_str::<StoredCollection<T>>(&data) {
        Ok(StoredCollection::Versioned { records, .. }) => Ok(records),
        Ok(StoredCollection::Legacy(records)) => Ok(records),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "stored collection is unreadable, starting empty"
            );
            Ok(T::default())
        }
    }
}

fn save_collection<T: Serialize + ?Sized>(path: &Path, records: &T) -> Result<()> {
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        records,
    };
    let json = serde_json::to_string_pretty(&envelope)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
