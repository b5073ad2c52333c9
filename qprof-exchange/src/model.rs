//! Format-agnostic in-memory model of a profile's active rules.
//!
//! The common currency between persistence and the exporter/importer
//! capabilities: exporters consume it, importers produce it. It
//! carries no file-format knowledge at all.

use std::collections::BTreeMap;

use qprof_core::types::{RuleKey, Severity};

/// One active rule in the interchange model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelActiveRule {
    pub rule_key: RuleKey,
    pub severity: Severity,
    pub params: BTreeMap<String, String>,
}

/// A named, language-tagged bag of active rules.
///
/// Rules keep the order they were added in; duplicate rule keys are
/// allowed here and resolved last-wins by the activation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesProfile {
    pub name: String,
    pub language: String,
    active_rules: Vec<ModelActiveRule>,
}

impl RulesProfile {
    pub fn new(name: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: language.into(),
            active_rules: Vec::new(),
        }
    }

    /// Append an active rule, preserving emission order.
    pub fn activate_rule(
        &mut self,
        rule_key: impl Into<RuleKey>,
        severity: Severity,
        params: BTreeMap<String, String>,
    ) {
        self.active_rules.push(ModelActiveRule {
            rule_key: rule_key.into(),
            severity,
            params,
        });
    }

    pub fn active_rules(&self) -> &[ModelActiveRule] {
        &self.active_rules
    }

    pub fn is_empty(&self) -> bool {
        self.active_rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_emission_order_and_duplicates() {
        let mut profile = RulesProfile::new("Sonar way", "java");
        profile.activate_rule("r1", Severity::Major, BTreeMap::new());
        profile.activate_rule("r2", Severity::Minor, BTreeMap::new());
        profile.activate_rule("r1", Severity::Blocker, BTreeMap::new());

        let keys: Vec<&str> = profile
            .active_rules()
            .iter()
            .map(|r| r.rule_key.as_str())
            .collect();
        assert_eq!(keys, vec!["r1", "r2", "r1"]);
    }
}
