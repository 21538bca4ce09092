//! SQLite-backed history store.
//!
//! One table, `chat_history`, with a UNIQUE index on `(question, language)`
//! so duplicate inserts are dropped by the engine itself. A single
//! connection is shared behind a mutex; every statement is a short
//! lookup or insert.

use std::path::Path;
use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use crate::error::AppError;
use crate::lang::Language;

use super::{HistoryStore, Upsert};

/// Schema version stored in `PRAGMA user_version`.
const SCHEMA_VERSION: i64 = 1;

pub struct SqliteHistory {
    conn: Mutex<Connection>,
}

impl SqliteHistory {
    /// Open (or create) the database at `db_path`, creating parent
    /// directories as needed.
    pub fn open(db_path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Store(format!("history: create {}: {e}", parent.display()))
            })?;
        }

        let conn = Connection::open(db_path)
            .map_err(|e| AppError::Store(format!("history: open {}: {e}", db_path.display())))?;

        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| AppError::Store(format!("history: set journal_mode WAL: {e}")))?;
        conn.pragma_update(None, "busy_timeout", 5000)
            .map_err(|e| AppError::Store(format!("history: set busy_timeout: {e}")))?;

        init_schema(&conn)?;

        Ok(Self { conn: Mutex::new(conn) })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, AppError> {
        self.conn
            .lock()
            .map_err(|_| AppError::Store("history: connection lock poisoned".into()))
    }
}

fn init_schema(conn: &Connection) -> Result<(), AppError> {
    let version: i64 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .map_err(|e| AppError::Store(format!("history: read schema version: {e}")))?;

    if version == 0 {
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS chat_history (
                id INTEGER PRIMARY KEY,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                language TEXT NOT NULL,
                timestamp TEXT NOT NULL
            );

            CREATE UNIQUE INDEX IF NOT EXISTS idx_chat_history_key
                ON chat_history(question, language);

            PRAGMA user_version = 1;
            ",
        )
        .map_err(|e| AppError::Store(format!("history: initialize schema: {e}")))?;
        return Ok(());
    }

    if version != SCHEMA_VERSION {
        return Err(AppError::Store(format!(
            "history: unsupported schema version {version}, expected {SCHEMA_VERSION}"
        )));
    }

    Ok(())
}

impl HistoryStore for SqliteHistory {
    fn backend(&self) -> &str {
        "sqlite"
    }

    fn find(&self, question: &str, language: Language) -> Result<Option<String>, AppError> {
        let conn = self.lock()?;
        conn.query_row(
            "SELECT answer FROM chat_history WHERE question = ?1 AND language = ?2 LIMIT 1",
            params![question, language.code()],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| AppError::Store(format!("history: find: {e}")))
    }

    fn upsert(&self, question: &str, answer: &str, language: Language) -> Result<Upsert, AppError> {
        let conn = self.lock()?;
        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO chat_history (question, answer, language, timestamp)
                 VALUES (?1, ?2, ?3, ?4)",
                params![question, answer, language.code(), now_iso8601()],
            )
            .map_err(|e| AppError::Store(format!("history: insert: {e}")))?;

        Ok(if inserted == 0 { Upsert::AlreadyPresent } else { Upsert::Inserted })
    }

    fn len(&self) -> Result<usize, AppError> {
        let conn = self.lock()?;
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM chat_history", [], |row| row.get(0))
            .map_err(|e| AppError::Store(format!("history: count: {e}")))?;
        usize::try_from(n).map_err(|e| AppError::Store(format!("history: count {n} out of range: {e}")))
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_store() -> (TempDir, SqliteHistory) {
        let temp = TempDir::new().expect("tempdir");
        let store = SqliteHistory::open(&temp.path().join("history.db")).expect("open history");
        (temp, store)
    }

    #[test]
    fn upsert_deduplicates_on_key() {
        let (_temp, store) = make_store();
        assert_eq!(store.upsert("q", "a1", Language::Es).unwrap(), Upsert::Inserted);
        assert_eq!(store.upsert("q", "a2", Language::Es).unwrap(), Upsert::AlreadyPresent);
        assert_eq!(store.find("q", Language::Es).unwrap().as_deref(), Some("a1"));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn find_missing_returns_none() {
        let (_temp, store) = make_store();
        assert_eq!(store.find("nothing", Language::En).unwrap(), None);
    }

    #[test]
    fn timestamp_is_rfc3339() {
        let (_temp, store) = make_store();
        store.upsert("q", "a", Language::En).unwrap();
        let conn = store.lock().unwrap();
        let ts: String = conn
            .query_row("SELECT timestamp FROM chat_history", [], |row| row.get(0))
            .unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok(), "bad timestamp {ts}");
    }

    #[test]
    fn rejects_unknown_schema_version() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch("PRAGMA user_version = 7;").unwrap();
        }
        let err = SqliteHistory::open(&path).err().expect("should reject");
        assert!(err.to_string().contains("unsupported schema version"));
    }
}
