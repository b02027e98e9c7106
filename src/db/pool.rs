//! Read-only SQLite handle on the session snapshot (lightweight for CLI usage).

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open an existing snapshot. Never creates the file.
    pub fn open_snapshot(path: &str) -> AppResult<Self> {
        let p = Path::new(path);
        if !p.is_file() {
            return Err(AppError::DataSourceUnavailable(format!(
                "database file not found: {}",
                p.display()
            )));
        }

        let conn = Connection::open_with_flags(
            p,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| AppError::DataSourceUnavailable(format!("{}: {e}", p.display())))?;

        Ok(Self { conn })
    }

    /// Helper to execute a closure with a connection reference.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        func(&self.conn)
    }
}
