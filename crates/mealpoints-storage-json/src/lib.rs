//! JSON persistence for account snapshots.
//!
//! The reporting engine performs no I/O of its own; this crate is the
//! collaborator that loads the `{balances, entries, budgets}` bundle a
//! report call consumes, and saves it back for fixtures and local use.

use std::{
    fs,
    path::{Path, PathBuf},
};

use mealpoints_domain::AccountSnapshot;
use thiserror::Error;

const SNAPSHOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Error type covering snapshot persistence failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Snapshot not found: {0}")]
    NotFound(String),
}

/// Filesystem-backed JSON store for [`AccountSnapshot`] files.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    root: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn snapshot_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(name), SNAPSHOT_EXTENSION))
    }

    /// Writes through a temp file and rename so a crash mid-write never
    /// leaves a truncated snapshot behind.
    pub fn save(&self, name: &str, snapshot: &AccountSnapshot) -> Result<(), StorageError> {
        let path = self.snapshot_path(name);
        let tmp = path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, serde_json::to_string_pretty(snapshot)?)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    pub fn load(&self, name: &str) -> Result<AccountSnapshot, StorageError> {
        let path = self.snapshot_path(name);
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        Self::load_path(&path)
    }

    /// Loads a snapshot from an explicit path.
    ///
    /// Reports rely on the ledger-reader contract that entries arrive
    /// ordered by `occurred_at` ascending, so ordering is normalized here
    /// rather than inside the engine.
    pub fn load_path(path: &Path) -> Result<AccountSnapshot, StorageError> {
        let raw = fs::read_to_string(path)?;
        let mut snapshot: AccountSnapshot = serde_json::from_str(&raw)?;
        snapshot.entries.sort_by_key(|entry| entry.occurred_at);
        Ok(snapshot)
    }

    /// Slugs of every snapshot under the store root, sorted.
    pub fn list(&self) -> Result<Vec<String>, StorageError> {
        let mut names = Vec::new();
        for dir_entry in fs::read_dir(&self.root)? {
            let path = dir_entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

fn canonical_name(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    let slug = slug.trim_matches('-');
    if slug.is_empty() {
        "snapshot".to_string()
    } else {
        slug.to_string()
    }
}
