//! profiles CRUD queries.

use qprof_core::errors::StorageError;
use qprof_core::types::ProfileRecord;
use rusqlite::{params, Connection, OptionalExtension};

use crate::connection::sqlite_err;

/// Insert a profile. Fails if the key already exists.
pub fn insert_profile(conn: &Connection, profile: &ProfileRecord) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO profiles (kee, name, language) VALUES (?1, ?2, ?3)",
        params![profile.key.as_str(), profile.name, profile.language],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Load a profile by key, failing when it does not exist.
pub fn require_profile(conn: &Connection, key: &str) -> Result<ProfileRecord, StorageError> {
    get_profile(conn, key)?.ok_or_else(|| StorageError::ProfileNotFound {
        profile: key.to_string(),
    })
}

/// Load a profile by key.
pub fn get_profile(conn: &Connection, key: &str) -> Result<Option<ProfileRecord>, StorageError> {
    conn.query_row(
        "SELECT kee, name, language FROM profiles WHERE kee = ?1",
        params![key],
        |row| {
            Ok(ProfileRecord {
                key: row.get::<_, String>(0)?.into(),
                name: row.get(1)?,
                language: row.get(2)?,
            })
        },
    )
    .optional()
    .map_err(sqlite_err)
}
