//! active_rules and active_rule_params queries.
//!
//! All functions take a `&Connection`; a `rusqlite::Transaction`
//! derefs to one, so the same functions serve reads and
//! transactional writes.

use std::collections::HashMap;

use qprof_core::errors::StorageError;
use rusqlite::{params, Connection, OptionalExtension};

use crate::connection::sqlite_err;

/// An active rule row.
#[derive(Debug, Clone)]
pub struct ActiveRuleRow {
    pub id: i64,
    pub profile_kee: String,
    pub rule_key: String,
    pub severity: String,
}

/// A parameter row of an active rule.
#[derive(Debug, Clone)]
pub struct ActiveRuleParamRow {
    pub active_rule_id: i64,
    pub name: String,
    pub value: String,
}

/// Load all active rules of a profile.
pub fn select_by_profile(
    conn: &Connection,
    profile_kee: &str,
) -> Result<Vec<ActiveRuleRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, profile_kee, rule_key, severity
             FROM active_rules WHERE profile_kee = ?1 ORDER BY id",
        )
        .map_err(sqlite_err)?;

    let rows = stmt
        .query_map(params![profile_kee], |row| {
            Ok(ActiveRuleRow {
                id: row.get(0)?,
                profile_kee: row.get(1)?,
                rule_key: row.get(2)?,
                severity: row.get(3)?,
            })
        })
        .map_err(sqlite_err)?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(sqlite_err)?);
    }
    Ok(result)
}

/// Load the active rule for one (profile, rule) pair, if any.
pub fn select_by_profile_and_rule(
    conn: &Connection,
    profile_kee: &str,
    rule_key: &str,
) -> Result<Option<ActiveRuleRow>, StorageError> {
    conn.query_row(
        "SELECT id, profile_kee, rule_key, severity
         FROM active_rules WHERE profile_kee = ?1 AND rule_key = ?2",
        params![profile_kee, rule_key],
        |row| {
            Ok(ActiveRuleRow {
                id: row.get(0)?,
                profile_kee: row.get(1)?,
                rule_key: row.get(2)?,
                severity: row.get(3)?,
            })
        },
    )
    .optional()
    .map_err(sqlite_err)
}

/// Batch-load the params of many active rules in one query, indexed
/// by owning active rule id.
pub fn select_params_by_active_rule_ids(
    conn: &Connection,
    ids: &[i64],
) -> Result<HashMap<i64, Vec<ActiveRuleParamRow>>, StorageError> {
    let mut by_id: HashMap<i64, Vec<ActiveRuleParamRow>> = HashMap::new();
    if ids.is_empty() {
        return Ok(by_id);
    }

    let placeholders = vec!["?"; ids.len()].join(", ");
    let sql = format!(
        "SELECT active_rule_id, name, value FROM active_rule_params
         WHERE active_rule_id IN ({placeholders}) ORDER BY active_rule_id, name"
    );
    let mut stmt = conn.prepare(&sql).map_err(sqlite_err)?;

    let rows = stmt
        .query_map(rusqlite::params_from_iter(ids.iter()), |row| {
            Ok(ActiveRuleParamRow {
                active_rule_id: row.get(0)?,
                name: row.get(1)?,
                value: row.get(2)?,
            })
        })
        .map_err(sqlite_err)?;

    for row in rows {
        let row = row.map_err(sqlite_err)?;
        by_id.entry(row.active_rule_id).or_default().push(row);
    }
    Ok(by_id)
}

/// Insert an active rule, returning its id.
pub fn insert_active_rule(
    conn: &Connection,
    profile_kee: &str,
    rule_key: &str,
    severity: &str,
) -> Result<i64, StorageError> {
    conn.execute(
        "INSERT INTO active_rules (profile_kee, rule_key, severity) VALUES (?1, ?2, ?3)",
        params![profile_kee, rule_key, severity],
    )
    .map_err(sqlite_err)?;
    Ok(conn.last_insert_rowid())
}

/// Update the severity of an existing active rule.
pub fn update_active_rule_severity(
    conn: &Connection,
    id: i64,
    severity: &str,
) -> Result<(), StorageError> {
    conn.execute(
        "UPDATE active_rules SET severity = ?1 WHERE id = ?2",
        params![severity, id],
    )
    .map_err(sqlite_err)?;
    Ok(())
}

/// Remove an active rule; its params cascade.
pub fn delete_active_rule(conn: &Connection, id: i64) -> Result<(), StorageError> {
    conn.execute("DELETE FROM active_rules WHERE id = ?1", params![id])
        .map_err(sqlite_err)?;
    Ok(())
}

/// Replace the full parameter set of an active rule.
pub fn replace_params<'a>(
    conn: &Connection,
    active_rule_id: i64,
    params_iter: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<(), StorageError> {
    conn.execute(
        "DELETE FROM active_rule_params WHERE active_rule_id = ?1",
        params![active_rule_id],
    )
    .map_err(sqlite_err)?;

    let mut stmt = conn
        .prepare_cached(
            "INSERT INTO active_rule_params (active_rule_id, name, value) VALUES (?1, ?2, ?3)",
        )
        .map_err(sqlite_err)?;
    for (name, value) in params_iter {
        stmt.execute(params![active_rule_id, name, value])
            .map_err(sqlite_err)?;
    }
    Ok(())
}
