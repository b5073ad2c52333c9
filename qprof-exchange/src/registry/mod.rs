//! Pluggable exporter/importer capabilities and their registry.

pub mod registry;
pub mod traits;

pub use registry::ExchangeRegistry;
pub use traits::{ProfileExporter, ProfileImporter};
