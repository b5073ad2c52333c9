//! Activation engine errors.

use super::error_code::{self, QprofErrorCode};
use super::storage_error::StorageError;

/// Errors from a single activate/deactivate call. All variants fire
/// before any mutation is applied, so a failed call leaves the
/// profile untouched.
#[derive(Debug, thiserror::Error)]
pub enum ActivationError {
    #[error("Rule not found in catalog: {rule}")]
    RuleNotFound { rule: String },

    #[error("Rule {rule} declares no parameter \"{param}\"")]
    UnknownParameter { rule: String, param: String },

    #[error("Invalid value for parameter \"{param}\" of rule {rule}: {reason}")]
    InvalidParameter {
        rule: String,
        param: String,
        reason: String,
    },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl QprofErrorCode for ActivationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RuleNotFound { .. } => error_code::RULE_NOT_FOUND,
            Self::UnknownParameter { .. } | Self::InvalidParameter { .. } => {
                error_code::INVALID_PARAMETER
            }
            Self::Storage(e) => e.error_code(),
        }
    }
}
