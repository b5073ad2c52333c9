//! Change records, the audit unit returned to every caller.

use std::collections::BTreeMap;

use qprof_core::types::{RuleKey, Severity};
use serde::Serialize;

/// What kind of change happened to an active rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Activated,
    Updated,
    Deactivated,
}

/// One observed mutation of an active rule: the change kind plus the
/// before/after severity and parameter snapshots. Never mutated
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveRuleChange {
    pub change_type: ChangeType,
    pub rule_key: RuleKey,
    /// Severity after the change; `None` for a deactivation.
    pub severity: Option<Severity>,
    /// Parameters after the change; empty for a deactivation.
    pub params: BTreeMap<String, String>,
    /// Severity before the change; `None` for a fresh activation.
    pub prior_severity: Option<Severity>,
    /// Parameters before the change; empty for a fresh activation.
    pub prior_params: BTreeMap<String, String>,
}

impl ActiveRuleChange {
    pub fn activated(
        rule_key: RuleKey,
        severity: Severity,
        params: BTreeMap<String, String>,
    ) -> Self {
        Self {
            change_type: ChangeType::Activated,
            rule_key,
            severity: Some(severity),
            params,
            prior_severity: None,
            prior_params: BTreeMap::new(),
        }
    }

    pub fn updated(
        rule_key: RuleKey,
        severity: Severity,
        params: BTreeMap<String, String>,
        prior_severity: Option<Severity>,
        prior_params: BTreeMap<String, String>,
    ) -> Self {
        Self {
            change_type: ChangeType::Updated,
            rule_key,
            severity: Some(severity),
            params,
            prior_severity,
            prior_params,
        }
    }

    pub fn deactivated(
        rule_key: RuleKey,
        prior_severity: Option<Severity>,
        prior_params: BTreeMap<String, String>,
    ) -> Self {
        Self {
            change_type: ChangeType::Deactivated,
            rule_key,
            severity: None,
            params: BTreeMap::new(),
            prior_severity,
            prior_params,
        }
    }
}
