//! Tests for the qprof error handling system: stable codes, boundary
//! formatting, From conversions.

use qprof_core::errors::error_code;
use qprof_core::errors::*;

#[test]
fn every_error_maps_to_a_stable_code() {
    let sqlite = StorageError::Sqlite {
        message: "locked".into(),
    };
    assert_eq!(sqlite.error_code(), error_code::STORAGE_ERROR);

    let migration = StorageError::MigrationFailed {
        version: 1,
        message: "bad sql".into(),
    };
    assert_eq!(migration.error_code(), error_code::MIGRATION_FAILED);

    let missing = StorageError::ProfileNotFound {
        profile: "p1".into(),
    };
    assert_eq!(missing.error_code(), error_code::STORAGE_ERROR);

    let not_found = ActivationError::RuleNotFound {
        rule: "squid:S100".into(),
    };
    assert_eq!(not_found.error_code(), error_code::RULE_NOT_FOUND);

    let unknown_param = ActivationError::UnknownParameter {
        rule: "squid:S100".into(),
        param: "max".into(),
    };
    assert_eq!(unknown_param.error_code(), error_code::INVALID_PARAMETER);

    let invalid_param = ActivationError::InvalidParameter {
        rule: "squid:S100".into(),
        param: "max".into(),
        reason: "not an integer".into(),
    };
    assert_eq!(invalid_param.error_code(), error_code::INVALID_PARAMETER);

    let exporter = ExchangeError::UnknownExporter { key: "pmd".into() };
    assert_eq!(exporter.error_code(), error_code::UNKNOWN_EXPORTER);

    let importer = ExchangeError::UnknownImporter { key: "pmd".into() };
    assert_eq!(importer.error_code(), error_code::UNKNOWN_IMPORTER);

    let rejected = ExchangeError::ImportRejected {
        errors: vec!["bad severity".into()],
    };
    assert_eq!(rejected.error_code(), error_code::IMPORT_REJECTED);

    let io = ExchangeError::Io(std::io::Error::other("closed"));
    assert_eq!(io.error_code(), error_code::EXCHANGE_ERROR);

    let config = ConfigError::ParseError {
        path: "qprof.toml".into(),
        message: "bad toml".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn boundary_string_carries_code_and_message() {
    let err = ExchangeError::UnknownExporter { key: "pmd".into() };
    assert_eq!(
        err.boundary_string(),
        "[UNKNOWN_EXPORTER] Unknown quality profile exporter: pmd"
    );
}

#[test]
fn wrapped_errors_keep_the_inner_code() {
    let storage = StorageError::MigrationFailed {
        version: 2,
        message: "bad sql".into(),
    };
    let activation: ActivationError = storage.into();
    assert_eq!(activation.error_code(), error_code::MIGRATION_FAILED);

    let exchange: ExchangeError = activation.into();
    assert!(matches!(
        exchange,
        ExchangeError::Activation(ActivationError::Storage(_))
    ));
    assert_eq!(exchange.error_code(), error_code::MIGRATION_FAILED);
}
