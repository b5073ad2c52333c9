//! Error handling for qprof.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod activation_error;
pub mod config_error;
pub mod error_code;
pub mod exchange_error;
pub mod storage_error;

pub use activation_error::ActivationError;
pub use config_error::ConfigError;
pub use error_code::QprofErrorCode;
pub use exchange_error::ExchangeError;
pub use storage_error::StorageError;
