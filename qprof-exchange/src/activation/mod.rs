//! Activation reconciliation: requests, change records, and the
//! engine that diffs a request against persisted state.

pub mod changes;
pub mod engine;
pub mod request;

pub use changes::{ActiveRuleChange, ChangeType};
pub use engine::RuleActivator;
pub use request::RuleActivation;
