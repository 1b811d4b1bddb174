// ABOUTME: SQLite-backed record store with session-per-request scoping.
// ABOUTME: SessionManager opens one connection per request; Session exposes the row operations.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use crate::item::Item;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Opens one storage session per request against a SQLite database file.
///
/// Construction runs schema initialization on a short-lived connection, so a
/// manager that exists is always backed by a usable table. Sessions are never
/// shared across requests and are released when the `with_session` scope ends.
pub struct SessionManager {
    db_path: PathBuf,
}

impl SessionManager {
    /// Create a manager for the database at `db_path`, initializing the
    /// schema if it does not exist yet.
    pub fn new(db_path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db_path = db_path.as_ref().to_path_buf();
        let conn = open_connection(&db_path)?;
        // AUTOINCREMENT keeps ids monotonic: a deleted id is never handed
        // out again by this store instance.
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_items_name ON items(name);
            CREATE INDEX IF NOT EXISTS idx_items_description ON items(description);",
        )?;
        Ok(Self { db_path })
    }

    /// Acquire a session, run `f` with it, and release the session on every
    /// exit path. The connection is closed when the `Session` drops, whether
    /// `f` returns a value or an error.
    pub fn with_session<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Session) -> Result<T, StoreError>,
    {
        let session = Session {
            conn: open_connection(&self.db_path)?,
        };
        f(&session)
    }

    /// Path of the underlying database file.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

fn open_connection(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    Ok(conn)
}

/// A scoped handle to the item table, valid for the duration of one request.
pub struct Session {
    conn: Connection,
}

impl Session {
    /// Insert a new item. The store assigns the id and the returned record
    /// is fully populated.
    pub fn insert(&self, name: &str, description: &str) -> Result<Item, StoreError> {
        self.conn.execute(
            "INSERT INTO items (name, description) VALUES (?1, ?2)",
            params![name, description],
        )?;
        Ok(Item {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            description: description.to_string(),
        })
    }

    /// Look up an item by id. A missing row is `None`, never an error.
    pub fn get(&self, id: i64) -> Result<Option<Item>, StoreError> {
        let item = self
            .conn
            .query_row(
                "SELECT id, name, description FROM items WHERE id = ?1",
                params![id],
                |row| {
                    Ok(Item {
                        id: row.get(0)?,
                        name: row.get(1)?,
                        description: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(item)
    }

    /// Overwrite name and description of an existing item. Returns the
    /// updated record, or `None` if no row has this id.
    pub fn update(
        &self,
        id: i64,
        name: &str,
        description: &str,
    ) -> Result<Option<Item>, StoreError> {
        let changed = self.conn.execute(
            "UPDATE items SET name = ?1, description = ?2 WHERE id = ?3",
            params![name, description, id],
        )?;
        if changed == 0 {
            return Ok(None);
        }
        Ok(Some(Item {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }))
    }

    /// Delete an item by id. Returns whether a row was actually removed.
    pub fn delete(&self, id: i64) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}
