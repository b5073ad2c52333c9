//! Activation reconciliation and exchange engine for quality
//! profiles.
//!
//! Given a profile's persisted active-rule set and a requested change
//! (activate/deactivate one rule, or bulk-import a foreign format),
//! compute the minimal set of mutations, apply them inside one unit
//! of work, and report every change individually. Export goes the
//! other way: persisted rows are materialized into the
//! format-agnostic [`RulesProfile`] model and streamed through a
//! pluggable exporter.

pub mod activation;
pub mod exchange;
pub mod model;
pub mod registry;
pub mod result;
pub mod validation;
pub mod xml;

pub use activation::{ActiveRuleChange, ChangeType, RuleActivation, RuleActivator};
pub use exchange::{ExporterDescriptor, ProfileExchange};
pub use model::{ModelActiveRule, RulesProfile};
pub use registry::{ExchangeRegistry, ProfileExporter, ProfileImporter};
pub use result::ImportResult;
pub use validation::ValidationMessages;
pub use xml::{XmlProfileExporter, XmlProfileImporter};
