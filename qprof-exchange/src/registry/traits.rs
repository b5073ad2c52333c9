//! Exporter and importer traits.

use std::io::{Read, Write};

use qprof_core::errors::ExchangeError;

use crate::model::RulesProfile;
use crate::validation::ValidationMessages;

/// A converter from the interchange model to one external byte
/// format. Writes synchronously; any write failure aborts the whole
/// export, there is no partial-output recovery.
pub trait ProfileExporter: Send + Sync {
    /// Unique key callers use to select this exporter.
    fn key(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str {
        self.key()
    }

    /// Declared content type of the produced bytes.
    fn mime_type(&self) -> &str {
        "text/plain"
    }

    /// Languages this exporter supports. Empty means unrestricted.
    fn supported_languages(&self) -> &[&str] {
        &[]
    }

    /// Stream the profile out in this exporter's format.
    fn export_profile(
        &self,
        profile: &RulesProfile,
        out: &mut dyn Write,
    ) -> Result<(), ExchangeError>;
}

/// A converter from one external byte format to the interchange
/// model. Parse problems are accumulated into [`ValidationMessages`]
/// rather than returned as errors; only I/O failures are hard
/// errors.
pub trait ProfileImporter: Send + Sync {
    /// Unique key callers use to select this importer.
    fn key(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str {
        self.key()
    }

    /// Parse external bytes into the interchange model.
    fn import_profile(
        &self,
        input: &mut dyn Read,
    ) -> Result<(RulesProfile, ValidationMessages), ExchangeError>;
}
