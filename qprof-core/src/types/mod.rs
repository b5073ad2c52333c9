//! Shared domain types: severity scale, identifiers, rule metadata.

pub mod identifiers;
pub mod rule;
pub mod severity;

pub use identifiers::{ProfileKey, RuleKey};
pub use rule::{ParamType, ProfileRecord, RuleMetadata, RuleParam};
pub use severity::Severity;
