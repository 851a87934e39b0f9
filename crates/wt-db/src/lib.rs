//! Storage layer for the workday tracker.
//!
//! A key-value blob store backed by `rusqlite`: the whole workday collection
//! is serialized as one JSON array and stored under a fixed key. The core
//! reads it once at startup and writes it after every mutation; the
//! in-memory log remains the source of truth for the running session, and
//! storage is best-effort durability.
//!
//! # Thread Safety
//!
//! [`Database`] wraps a `rusqlite::Connection`, which is `Send` but not
//! `Sync`. Use one instance per thread or serialize access externally.
//!
//! # Blob Format
//!
//! The value under [`WORKDAYS_KEY`] is a JSON array of workday records:
//! `id`, `date` (`YYYY-MM-DD`), `startedAt`/`endedAt` (ISO 8601,
//! `endedAt` null while active), `tasks[{occurredAt, text}]`, and an
//! optional `cachedHours`. Records written without `cachedHours` load
//! unchanged; the aggregator recomputes on demand.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use wt_core::Workday;

/// Key the workday collection blob is stored under.
pub const WORKDAYS_KEY: &str = "worktracker:workdays";

/// Storage errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// An error from the underlying database.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    /// The stored blob could not be serialized or deserialized.
    #[error("invalid workday blob: {0}")]
    Blob(#[from] serde_json::Error),
}

/// Database connection wrapper.
///
/// See the [module documentation](self) for thread safety considerations.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens a database at the given path, creating it if necessary.
    ///
    /// The schema is automatically initialized on first open.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Opens an in-memory database.
    ///
    /// Useful for testing. The database is destroyed when the connection
    /// closes.
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init()?;
        Ok(db)
    }

    /// Initializes the schema. Idempotent.
    fn init(&self) -> Result<(), DbError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
            );
            ",
        )?;
        Ok(())
    }

    /// Loads the persisted workday collection.
    ///
    /// Returns `None` when nothing has been saved yet.
    pub fn load(&self) -> Result<Option<Vec<Workday>>, DbError> {
        let blob: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?",
                params![WORKDAYS_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(blob) = blob else {
            return Ok(None);
        };
        let days: Vec<Workday> = serde_json::from_str(&blob)?;
        tracing::debug!(days = days.len(), "loaded workday collection");
        Ok(Some(days))
    }

    /// Saves the workday collection, replacing any previous blob.
    pub fn save(&mut self, days: &[Workday]) -> Result<(), DbError> {
        let blob = serde_json::to_string(days)?;
        let tx = self.conn.transaction()?;
        tx.execute(
            "
            INSERT INTO kv (key, value, updated_at)
            VALUES (?, ?, strftime('%Y-%m-%dT%H:%M:%SZ', 'now'))
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            ",
            params![WORKDAYS_KEY, blob],
        )?;
        tx.commit()?;
        tracing::debug!(days = days.len(), "saved workday collection");
        Ok(())
    }
}
