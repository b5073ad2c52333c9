//! Connection management and the unit-of-work boundary.

use std::path::Path;
use std::sync::Mutex;

use qprof_core::errors::StorageError;
use rusqlite::{Connection, Transaction};

use crate::migrations;

pub(crate) fn sqlite_err(e: rusqlite::Error) -> StorageError {
    StorageError::Sqlite {
        message: e.to_string(),
    }
}

/// Owns the database connection. Writes are serialized through a
/// mutex; every mutating batch runs inside one transaction handed
/// out by `with_tx`.
pub struct Datastore {
    conn: Mutex<Connection>,
}

impl Datastore {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(sqlite_err)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA foreign_keys = ON;",
        )
        .map_err(sqlite_err)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(sqlite_err)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(sqlite_err)?;
        migrations::run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Execute a read-only operation on the connection.
    pub fn with_conn<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Connection) -> Result<T, E>,
        E: From<StorageError>,
    {
        let guard = self.conn.lock().map_err(|_| StorageError::Sqlite {
            message: "connection lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Execute a mutating batch inside one transaction.
    ///
    /// The transaction commits only if the closure returns `Ok`; on
    /// `Err` it is dropped and every mutation in the batch rolls
    /// back. This is the single unit-of-work boundary for activation
    /// batches.
    pub fn with_tx<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&Transaction) -> Result<T, E>,
        E: From<StorageError>,
    {
        let mut guard = self.conn.lock().map_err(|_| StorageError::Sqlite {
            message: "connection lock poisoned".to_string(),
        })?;
        let tx = guard.transaction().map_err(sqlite_err)?;
        let value = f(&tx)?;
        tx.commit().map_err(sqlite_err)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tx_rolls_back_on_error() {
        let db = Datastore::open_in_memory().unwrap();
        let result: Result<(), StorageError> = db.with_tx(|tx| {
            tx.execute(
                "INSERT INTO profiles (kee, name, language) VALUES ('p1', 'One', 'java')",
                [],
            )
            .map_err(sqlite_err)?;
            Err(StorageError::Sqlite {
                message: "boom".to_string(),
            })
        });
        assert!(result.is_err());

        let count: i64 = db
            .with_conn(|conn| {
                conn.query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))
                    .map_err(sqlite_err)
            })
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn tx_commits_on_ok() {
        let db = Datastore::open_in_memory().unwrap();
        db.with_tx(|tx| {
            tx.execute(
                "INSERT INTO profiles (kee, name, language) VALUES ('p1', 'One', 'java')",
                [],
            )
            .map_err(sqlite_err)
        })
        .unwrap();

        let count: i64 = db
            .with_conn(|conn| {
                conn.query_row("SELECT COUNT(*) FROM profiles", [], |row| row.get(0))
                    .map_err(sqlite_err)
            })
            .unwrap();
        assert_eq!(count, 1);
    }
}
