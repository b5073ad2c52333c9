//! The activation engine: minimal diff against persisted state.

use std::collections::BTreeMap;
use std::sync::Arc;

use qprof_core::catalog::RuleCatalog;
use qprof_core::errors::ActivationError;
use qprof_core::types::{ProfileRecord, RuleKey, RuleMetadata, Severity};
use qprof_storage::queries::active_rules;
use rusqlite::Transaction;

use super::changes::ActiveRuleChange;
use super::request::RuleActivation;

/// Computes and applies the minimal mutation set for one activation
/// or deactivation. All writes go through the transaction supplied
/// by the caller; commit/rollback is never decided here.
pub struct RuleActivator {
    catalog: Arc<dyn RuleCatalog>,
}

impl RuleActivator {
    pub fn new(catalog: Arc<dyn RuleCatalog>) -> Self {
        Self { catalog }
    }

    /// Activate a rule in a profile, or update its settings if it is
    /// already active. Identical resolved settings are a no-op.
    ///
    /// Validation (catalog lookup, parameter names and values) runs
    /// before any mutation, so a failed call leaves the profile
    /// untouched.
    pub fn activate(
        &self,
        tx: &Transaction,
        profile: &ProfileRecord,
        activation: &RuleActivation,
    ) -> Result<Vec<ActiveRuleChange>, ActivationError> {
        let rule_key = activation.rule_key();
        let rule = self
            .catalog
            .find_by_key(rule_key)
            .ok_or_else(|| ActivationError::RuleNotFound {
                rule: rule_key.to_string(),
            })?;

        validate_overrides(rule, activation)?;

        let severity = activation.severity().unwrap_or(rule.default_severity);
        let params = resolve_params(rule, activation);

        let existing =
            active_rules::select_by_profile_and_rule(tx, profile.key.as_str(), rule_key.as_str())?;

        match existing {
            None => {
                let id = active_rules::insert_active_rule(
                    tx,
                    profile.key.as_str(),
                    rule_key.as_str(),
                    severity.as_str(),
                )?;
                active_rules::replace_params(
                    tx,
                    id,
                    params.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                )?;
                tracing::debug!(profile = %profile.key, rule = %rule_key, %severity, "activated rule");
                Ok(vec![ActiveRuleChange::activated(
                    rule_key.clone(),
                    severity,
                    params,
                )])
            }
            Some(row) => {
                let prior_severity = Severity::parse(&row.severity);
                let prior_params = load_params(tx, row.id)?;

                if prior_severity == Some(severity) && prior_params == params {
                    // Idempotent re-activation.
                    return Ok(Vec::new());
                }

                active_rules::update_active_rule_severity(tx, row.id, severity.as_str())?;
                active_rules::replace_params(
                    tx,
                    row.id,
                    params.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                )?;
                tracing::debug!(profile = %profile.key, rule = %rule_key, %severity, "updated rule");
                Ok(vec![ActiveRuleChange::updated(
                    rule_key.clone(),
                    severity,
                    params,
                    prior_severity,
                    prior_params,
                )])
            }
        }
    }

    /// Remove an active rule. Deactivating a rule that is not active
    /// is a no-op, not an error.
    pub fn deactivate(
        &self,
        tx: &Transaction,
        profile: &ProfileRecord,
        rule_key: &RuleKey,
    ) -> Result<Vec<ActiveRuleChange>, ActivationError> {
        let existing =
            active_rules::select_by_profile_and_rule(tx, profile.key.as_str(), rule_key.as_str())?;

        let Some(row) = existing else {
            return Ok(Vec::new());
        };

        let prior_severity = Severity::parse(&row.severity);
        let prior_params = load_params(tx, row.id)?;
        active_rules::delete_active_rule(tx, row.id)?;
        tracing::debug!(profile = %profile.key, rule = %rule_key, "deactivated rule");
        Ok(vec![ActiveRuleChange::deactivated(
            rule_key.clone(),
            prior_severity,
            prior_params,
        )])
    }
}

/// Reject unknown parameter names and type-invalid values before any
/// mutation is applied.
fn validate_overrides(
    rule: &RuleMetadata,
    activation: &RuleActivation,
) -> Result<(), ActivationError> {
    for (name, value) in activation.params() {
        let declared = rule
            .param(name)
            .ok_or_else(|| ActivationError::UnknownParameter {
                rule: rule.key.to_string(),
                param: name.clone(),
            })?;
        // Empty string means "clear override", always acceptable.
        if value.is_empty() {
            continue;
        }
        if let Some(reason) = declared.param_type.validate(value) {
            return Err(ActivationError::InvalidParameter {
                rule: rule.key.to_string(),
                param: name.clone(),
                reason,
            });
        }
    }
    Ok(())
}

/// Resolve the effective parameter map: an override wins, an empty
/// override clears the entry, anything unspecified falls back to the
/// catalog default (no entry when the rule declares no default).
fn resolve_params(rule: &RuleMetadata, activation: &RuleActivation) -> BTreeMap<String, String> {
    let mut resolved = BTreeMap::new();
    for declared in &rule.params {
        match activation.params().get(&declared.key) {
            Some(value) if value.is_empty() => {}
            Some(value) => {
                resolved.insert(declared.key.clone(), value.clone());
            }
            None => {
                if let Some(default) = &declared.default_value {
                    resolved.insert(declared.key.clone(), default.clone());
                }
            }
        }
    }
    resolved
}

fn load_params(tx: &Transaction, id: i64) -> Result<BTreeMap<String, String>, ActivationError> {
    let by_id = active_rules::select_params_by_active_rule_ids(tx, &[id])?;
    Ok(by_id
        .get(&id)
        .map(|rows| {
            rows.iter()
                .map(|p| (p.name.clone(), p.value.clone()))
                .collect()
        })
        .unwrap_or_default())
}
