//! The activation request value.

use std::collections::BTreeMap;

use qprof_core::types::{RuleKey, Severity};

/// Immutable description of a desired activation: rule identity,
/// optional severity, parameter overrides.
///
/// An absent severity resolves to the rule's catalog default. An
/// unspecified parameter retains the catalog default; a parameter
/// set to the empty string clears the override entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleActivation {
    rule_key: RuleKey,
    severity: Option<Severity>,
    params: BTreeMap<String, String>,
}

impl RuleActivation {
    pub fn new(rule_key: impl Into<RuleKey>) -> Self {
        Self {
            rule_key: rule_key.into(),
            severity: None,
            params: BTreeMap::new(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn rule_key(&self) -> &RuleKey {
        &self.rule_key
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    pub fn params(&self) -> &BTreeMap<String, String> {
        &self.params
    }
}
