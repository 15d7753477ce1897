pub mod error;
pub mod migrations;
pub mod models;
pub mod queries;

pub use error::{Result, StoreError};

use rusqlite::Connection;
use std::sync::Mutex;
use tracing::info;

/// Handle to the review store.
///
/// Opened once per process and shared between requests; every query goes
/// through the single connection behind the mutex.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open the database at `url`: a filesystem path, a `file:` URI or
    /// `:memory:`. The schema is not touched; call [`Database::provision`].
    pub fn open(url: &str) -> Result<Self> {
        let conn = Connection::open(url)?;

        if !is_memory(url) {
            // WAL mode for concurrent reads from other processes (init tool, backups)
            conn.pragma_update(None, "journal_mode", "WAL")?;
        }

        info!("Database opened at {}", url);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create the reviews table if it does not exist yet. Safe to run on
    /// every startup.
    pub fn provision(&self) -> Result<()> {
        self.with_conn(migrations::run)
    }

    pub fn with_conn<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock().map_err(|_| StoreError::LockPoisoned)?;
        f(&conn)
    }
}

fn is_memory(url: &str) -> bool {
    url == ":memory:" || url.contains("mode=memory")
}
