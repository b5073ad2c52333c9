//! Aggregated outcome of an import run.

use crate::activation::ActiveRuleChange;
use crate::validation::ValidationMessages;

/// Everything one import produced: the full list of change records
/// plus the importer's warning and info messages. Errors never end
/// up here; they abort the import before a result exists.
#[derive(Debug, Default)]
pub struct ImportResult {
    changes: Vec<ActiveRuleChange>,
    warnings: Vec<String>,
    infos: Vec<String>,
}

impl ImportResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_changes(&mut self, changes: Vec<ActiveRuleChange>) {
        self.changes.extend(changes);
    }

    /// Take over the warnings and infos of a validation outcome.
    pub fn add_messages(&mut self, messages: &ValidationMessages) {
        self.warnings.extend(messages.warnings().iter().cloned());
        self.infos.extend(messages.infos().iter().cloned());
    }

    pub fn changes(&self) -> &[ActiveRuleChange] {
        &self.changes
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn infos(&self) -> &[String] {
        &self.infos
    }
}
