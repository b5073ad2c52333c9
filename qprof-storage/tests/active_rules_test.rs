//! Tests for active rule persistence: insert, update, delete, batch
//! param lookup.

use qprof_core::types::ProfileRecord;
use qprof_storage::migrations::run_migrations;
use qprof_storage::queries::active_rules::*;
use qprof_storage::queries::profiles::insert_profile;
use rusqlite::Connection;

fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("PRAGMA foreign_keys = ON;").unwrap();
    run_migrations(&conn).unwrap();
    insert_profile(&conn, &ProfileRecord::new("p1", "Sonar way", "java")).unwrap();
    conn
}

#[test]
fn insert_and_select_roundtrip() {
    let conn = setup_db();
    let id = insert_active_rule(&conn, "p1", "squid:S100", "MAJOR").unwrap();
    assert!(id > 0);

    let rules = select_by_profile(&conn, "p1").unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].rule_key, "squid:S100");
    assert_eq!(rules[0].severity, "MAJOR");

    let found = select_by_profile_and_rule(&conn, "p1", "squid:S100").unwrap();
    assert_eq!(found.unwrap().id, id);
    assert!(select_by_profile_and_rule(&conn, "p1", "squid:S200")
        .unwrap()
        .is_none());
}

#[test]
fn unique_per_profile_and_rule() {
    let conn = setup_db();
    insert_active_rule(&conn, "p1", "squid:S100", "MAJOR").unwrap();
    assert!(insert_active_rule(&conn, "p1", "squid:S100", "MINOR").is_err());
}

#[test]
fn severity_update() {
    let conn = setup_db();
    let id = insert_active_rule(&conn, "p1", "squid:S100", "MAJOR").unwrap();
    update_active_rule_severity(&conn, id, "BLOCKER").unwrap();

    let rules = select_by_profile(&conn, "p1").unwrap();
    assert_eq!(rules[0].severity, "BLOCKER");
}

#[test]
fn params_batch_lookup() {
    let conn = setup_db();
    let id1 = insert_active_rule(&conn, "p1", "squid:S100", "MAJOR").unwrap();
    let id2 = insert_active_rule(&conn, "p1", "squid:S200", "MINOR").unwrap();
    replace_params(&conn, id1, [("max", "10"), ("format", "^[a-z]")]).unwrap();
    replace_params(&conn, id2, [("threshold", "3")]).unwrap();

    let by_id = select_params_by_active_rule_ids(&conn, &[id1, id2]).unwrap();
    assert_eq!(by_id[&id1].len(), 2);
    assert_eq!(by_id[&id2].len(), 1);
    assert_eq!(by_id[&id2][0].name, "threshold");
    assert_eq!(by_id[&id2][0].value, "3");

    let empty = select_params_by_active_rule_ids(&conn, &[]).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn replace_params_overwrites() {
    let conn = setup_db();
    let id = insert_active_rule(&conn, "p1", "squid:S100", "MAJOR").unwrap();
    replace_params(&conn, id, [("max", "10")]).unwrap();
    replace_params(&conn, id, [("max", "20"), ("min", "1")]).unwrap();

    let by_id = select_params_by_active_rule_ids(&conn, &[id]).unwrap();
    let params = &by_id[&id];
    assert_eq!(params.len(), 2);
    assert!(params.iter().any(|p| p.name == "max" && p.value == "20"));
}

#[test]
fn delete_cascades_params() {
    let conn = setup_db();
    let id = insert_active_rule(&conn, "p1", "squid:S100", "MAJOR").unwrap();
    replace_params(&conn, id, [("max", "10")]).unwrap();
    delete_active_rule(&conn, id).unwrap();

    assert!(select_by_profile(&conn, "p1").unwrap().is_empty());
    let by_id = select_params_by_active_rule_ids(&conn, &[id]).unwrap();
    assert!(by_id.is_empty());
}
