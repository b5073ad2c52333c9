//! Export/import pipeline errors.

use super::activation_error::ActivationError;
use super::error_code::{self, QprofErrorCode};
use super::storage_error::StorageError;

/// Errors from the exporter/importer registry and the export/import
/// pipelines.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// Requested exporter key is not registered. Client error, no
    /// mutation attempted.
    #[error("Unknown quality profile exporter: {key}")]
    UnknownExporter { key: String },

    /// Requested importer key is not registered. Client error, no
    /// mutation attempted.
    #[error("Unknown quality profile importer: {key}")]
    UnknownImporter { key: String },

    /// The importer's validation outcome contained errors. Carries
    /// every collected message; zero mutations were applied.
    #[error("Import rejected: {}", errors.join("; "))]
    ImportRejected { errors: Vec<String> },

    #[error(transparent)]
    Activation(#[from] ActivationError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QprofErrorCode for ExchangeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownExporter { .. } => error_code::UNKNOWN_EXPORTER,
            Self::UnknownImporter { .. } => error_code::UNKNOWN_IMPORTER,
            Self::ImportRejected { .. } => error_code::IMPORT_REJECTED,
            Self::Activation(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Io(_) => error_code::EXCHANGE_ERROR,
        }
    }
}
