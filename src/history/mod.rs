//! Persistent Q&A history.
//!
//! Records are keyed on `(question, language)` and written at most once:
//! the first answer stored for a key is the one every later lookup sees.
//! Backends are `Send + Sync`; the pipeline treats every error as a miss
//! or a dropped write.

#[cfg(feature = "isqlite")]
pub mod sqlite;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tracing::{debug, error, info};

use crate::error::AppError;
use crate::lang::Language;

/// Outcome of an [`HistoryStore::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Inserted,
    /// A record already existed for the key; nothing was written.
    AlreadyPresent,
}

/// Pluggable history backend.
pub trait HistoryStore: Send + Sync {
    /// Short backend name for logs (e.g. `"sqlite"`).
    fn backend(&self) -> &str;

    fn find(&self, question: &str, language: Language) -> Result<Option<String>, AppError>;

    /// Insert unless a record for `(question, language)` already exists.
    fn upsert(&self, question: &str, answer: &str, language: Language) -> Result<Upsert, AppError>;

    fn len(&self) -> Result<usize, AppError>;
}

// ── In-memory backend ─────────────────────────────────────────────────────────

/// Process-local history, lost on exit.
#[derive(Default)]
pub struct MemoryHistory {
    records: Mutex<HashMap<(String, Language), String>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistory {
    fn backend(&self) -> &str {
        "memory"
    }

    fn find(&self, question: &str, language: Language) -> Result<Option<String>, AppError> {
        let records = self
            .records
            .lock()
            .map_err(|_| AppError::Store("memory history lock poisoned".into()))?;
        Ok(records.get(&(question.to_string(), language)).cloned())
    }

    fn upsert(&self, question: &str, answer: &str, language: Language) -> Result<Upsert, AppError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| AppError::Store("memory history lock poisoned".into()))?;
        let key = (question.to_string(), language);
        if records.contains_key(&key) {
            return Ok(Upsert::AlreadyPresent);
        }
        records.insert(key, answer.to_string());
        Ok(Upsert::Inserted)
    }

    fn len(&self) -> Result<usize, AppError> {
        let records = self
            .records
            .lock()
            .map_err(|_| AppError::Store("memory history lock poisoned".into()))?;
        Ok(records.len())
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

/// Open the history store at `db_path`.
///
/// With `reset` the existing database file is deleted first. If SQLite is
/// unavailable (feature off, or the file cannot be opened) the in-memory
/// backend is returned instead; startup never fails here.
pub fn open(db_path: &Path, reset: bool) -> Arc<dyn HistoryStore> {
    if reset {
        if let Err(e) = remove_database(db_path) {
            error!(path = %db_path.display(), error = %e, "history reset failed");
        }
    }

    #[cfg(feature = "isqlite")]
    {
        match sqlite::SqliteHistory::open(db_path) {
            Ok(store) => {
                info!(path = %db_path.display(), "history store opened");
                return Arc::new(store);
            }
            Err(e) => {
                error!(error = %e, "history store unavailable, answers will not persist across runs");
            }
        }
    }

    #[cfg(not(feature = "isqlite"))]
    {
        info!("sqlite support disabled, using in-memory history");
    }

    Arc::new(MemoryHistory::new())
}

/// Delete the database and its WAL side files. Missing files are fine.
fn remove_database(db_path: &Path) -> Result<(), AppError> {
    info!(path = %db_path.display(), "removing existing history database");
    for suffix in ["", "-wal", "-shm"] {
        let mut target = db_path.as_os_str().to_owned();
        target.push(suffix);
        match std::fs::remove_file(&target) {
            Ok(()) => debug!(path = ?target, "removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
