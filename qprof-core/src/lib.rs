//! Core types, traits, errors, config, and tracing for qprof.
//!
//! Everything shared between the storage and exchange crates lives
//! here: the severity scale, rule/profile identifiers, the rule
//! catalog contract, per-subsystem error enums, and the ambient
//! config/tracing setup.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use catalog::{RuleCatalog, StaticCatalog};
pub use config::QprofConfig;
pub use types::{
    ParamType, ProfileKey, ProfileRecord, RuleKey, RuleMetadata, RuleParam, Severity,
};
