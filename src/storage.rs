use crate::errors::AppResult;
use crate::models::MoodEntry;
use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tokio::fs;
use tracing::{debug, error};

/// Key the whole journal is written under.
pub const JOURNAL_KEY: &str = "wellnessData";

/// String key-value store the journal is mirrored to.
///
/// `Dir` keeps one `<key>.json` file per key; `Memory` lives only as long as
/// the process and is shared between clones.
#[derive(Debug, Clone)]
pub enum Storage {
    Dir(PathBuf),
    Memory(Arc<Mutex<HashMap<String, String>>>),
}

impl Storage {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Storage::Dir(path.into())
    }

    pub fn memory() -> Self {
        Storage::Memory(Arc::default())
    }

    pub async fn get(&self, key: &str) -> io::Result<Option<String>> {
        match self {
            Storage::Dir(dir) => match fs::read_to_string(key_path(dir, key)).await {
                Ok(value) => Ok(Some(value)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err),
            },
            Storage::Memory(map) => Ok(lock(map).get(key).cloned()),
        }
    }

    pub async fn set(&self, key: &str, value: String) -> io::Result<()> {
        match self {
            Storage::Dir(dir) => {
                fs::create_dir_all(dir).await?;
                fs::write(key_path(dir, key), value).await
            }
            Storage::Memory(map) => {
                lock(map).insert(key.to_string(), value);
                Ok(())
            }
        }
    }
}

fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}

fn lock(map: &Mutex<HashMap<String, String>>) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
    map.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Outcome of reading the persisted journal.
#[derive(Debug, PartialEq)]
pub enum Loaded {
    /// Nothing stored under the key yet.
    Missing,
    Entries(Vec<MoodEntry>),
}

/// Reads the journal. Unreadable or malformed values are logged and read as
/// an empty journal.
pub async fn load_entries(storage: &Storage) -> Loaded {
    match storage.get(JOURNAL_KEY).await {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<MoodEntry>>(&raw) {
            Ok(entries) => Loaded::Entries(entries),
            Err(err) => {
                error!(key = JOURNAL_KEY, "failed to parse journal: {err}");
                Loaded::Entries(Vec::new())
            }
        },
        Ok(None) => Loaded::Missing,
        Err(err) => {
            error!(key = JOURNAL_KEY, "failed to read journal: {err}");
            Loaded::Entries(Vec::new())
        }
    }
}

/// Overwrites the stored journal with `entries`.
pub async fn persist_entries(storage: &Storage, entries: &[MoodEntry]) -> AppResult<()> {
    let payload = serde_json::to_string(entries)?;
    storage.set(JOURNAL_KEY, payload).await?;
    debug!(key = JOURNAL_KEY, entries = entries.len(), "journal persisted");
    Ok(())
}
