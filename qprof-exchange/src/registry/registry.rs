//! The process-wide exporter/importer registry.

use qprof_core::errors::ExchangeError;

use super::traits::{ProfileExporter, ProfileImporter};

/// Holds every registered exporter and importer. Populated once at
/// process start and read-only thereafter; lookups are by exact key
/// or by language filter.
pub struct ExchangeRegistry {
    exporters: Vec<Box<dyn ProfileExporter>>,
    importers: Vec<Box<dyn ProfileImporter>>,
}

impl ExchangeRegistry {
    pub fn new(
        exporters: Vec<Box<dyn ProfileExporter>>,
        importers: Vec<Box<dyn ProfileImporter>>,
    ) -> Self {
        Self {
            exporters,
            importers,
        }
    }

    /// Exporters eligible for a language, in registration order. An
    /// exporter with no language restriction matches every language.
    pub fn exporters_for_language(&self, language: &str) -> Vec<&dyn ProfileExporter> {
        self.exporters
            .iter()
            .map(|e| e.as_ref())
            .filter(|e| {
                let langs = e.supported_languages();
                langs.is_empty() || langs.contains(&language)
            })
            .collect()
    }

    /// Exact-key exporter lookup across the full registered set.
    pub fn find_exporter(&self, key: &str) -> Result<&dyn ProfileExporter, ExchangeError> {
        self.exporters
            .iter()
            .map(|e| e.as_ref())
            .find(|e| e.key() == key)
            .ok_or_else(|| ExchangeError::UnknownExporter {
                key: key.to_string(),
            })
    }

    /// Exact-key importer lookup across the full registered set.
    pub fn find_importer(&self, key: &str) -> Result<&dyn ProfileImporter, ExchangeError> {
        self.importers
            .iter()
            .map(|i| i.as_ref())
            .find(|i| i.key() == key)
            .ok_or_else(|| ExchangeError::UnknownImporter {
                key: key.to_string(),
            })
    }

    /// MIME type declared by the exporter registered under `key`.
    pub fn mime_type(&self, key: &str) -> Result<&str, ExchangeError> {
        Ok(self.find_exporter(key)?.mime_type())
    }
}
