//! QprofErrorCode trait for API boundary conversion.

/// Trait for converting qprof errors to structured API error codes.
/// Every error enum implements this so the serving layer can attach
/// a stable code string to each failure.
pub trait QprofErrorCode {
    /// Returns the error code string (e.g., "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the API boundary.
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const RULE_NOT_FOUND: &str = "RULE_NOT_FOUND";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const UNKNOWN_EXPORTER: &str = "UNKNOWN_EXPORTER";
pub const UNKNOWN_IMPORTER: &str = "UNKNOWN_IMPORTER";
pub const IMPORT_REJECTED: &str = "IMPORT_REJECTED";
pub const EXCHANGE_ERROR: &str = "EXCHANGE_ERROR";
