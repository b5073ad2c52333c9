//! Export and import pipelines over the registry, the activation
//! engine, and storage.

use std::io::{Read, Write};
use std::sync::Arc;

use qprof_core::catalog::RuleCatalog;
use qprof_core::errors::{ExchangeError, StorageError};
use qprof_core::types::{ProfileRecord, Severity};
use qprof_storage::queries::{active_rules, profiles};
use qprof_storage::Datastore;
use serde::Serialize;

use crate::activation::{ActiveRuleChange, RuleActivation, RuleActivator};
use crate::model::RulesProfile;
use crate::registry::ExchangeRegistry;
use crate::result::ImportResult;

/// Outward-facing description of one registered exporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExporterDescriptor {
    pub key: String,
    pub name: String,
    pub mime_type: String,
}

/// The exchange service: resolves converters, materializes persisted
/// state into the interchange model, and drives bulk imports through
/// the activation engine inside one unit of work.
pub struct ProfileExchange {
    datastore: Arc<Datastore>,
    activator: RuleActivator,
    registry: ExchangeRegistry,
}

impl ProfileExchange {
    pub fn new(
        datastore: Arc<Datastore>,
        catalog: Arc<dyn RuleCatalog>,
        registry: ExchangeRegistry,
    ) -> Self {
        Self {
            datastore,
            activator: RuleActivator::new(catalog),
            registry,
        }
    }

    /// Exporters eligible for a language, in registration order.
    pub fn exporters_for_language(&self, language: &str) -> Vec<ExporterDescriptor> {
        self.registry
            .exporters_for_language(language)
            .iter()
            .map(|e| ExporterDescriptor {
                key: e.key().to_string(),
                name: e.name().to_string(),
                mime_type: e.mime_type().to_string(),
            })
            .collect()
    }

    /// MIME type of the exporter registered under `key`.
    pub fn mime_type(&self, exporter_key: &str) -> Result<String, ExchangeError> {
        Ok(self.registry.mime_type(exporter_key)?.to_string())
    }

    /// Export a profile's persisted active rules through the chosen
    /// exporter.
    pub fn export(
        &self,
        profile: &ProfileRecord,
        exporter_key: &str,
        out: &mut dyn Write,
    ) -> Result<(), ExchangeError> {
        let exporter = self.registry.find_exporter(exporter_key)?;
        let model = self.materialize(profile)?;
        tracing::debug!(
            profile = %profile.key,
            exporter = exporter_key,
            rules = model.active_rules().len(),
            "exporting profile"
        );
        exporter.export_profile(&model, out)
    }

    /// Import an external document into a profile.
    ///
    /// Parses through the chosen importer, rejects the whole import
    /// if the validation outcome holds any error (zero mutations),
    /// and otherwise drives every parsed rule through the activation
    /// engine inside one transaction. Any activation failure aborts
    /// the batch uncommitted.
    pub fn import_xml(
        &self,
        profile: &ProfileRecord,
        importer_key: &str,
        input: &mut dyn Read,
    ) -> Result<ImportResult, ExchangeError> {
        let importer = self.registry.find_importer(importer_key)?;
        let (model, messages) = importer.import_profile(input)?;

        if messages.has_errors() {
            return Err(ExchangeError::ImportRejected {
                errors: messages.errors().to_vec(),
            });
        }

        let changes: Vec<ActiveRuleChange> = self.datastore.with_tx(|tx| {
            profiles::require_profile(tx, profile.key.as_str())?;
            let mut changes = Vec::new();
            // Importer emission order; later entries for the same
            // rule overwrite earlier ones.
            for rule in model.active_rules() {
                let mut activation =
                    RuleActivation::new(rule.rule_key.clone()).with_severity(rule.severity);
                for (name, value) in &rule.params {
                    activation = activation.with_param(name.clone(), value.clone());
                }
                changes.extend(self.activator.activate(tx, profile, &activation)?);
            }
            Ok::<_, ExchangeError>(changes)
        })?;

        tracing::info!(
            profile = %profile.key,
            importer = importer_key,
            changes = changes.len(),
            warnings = messages.warnings().len(),
            "imported profile"
        );

        let mut result = ImportResult::new();
        result.add_changes(changes);
        result.add_messages(&messages);
        Ok(result)
    }

    /// Build the interchange model from persisted rows: one read for
    /// the active rules, one batch read for all their params.
    fn materialize(&self, profile: &ProfileRecord) -> Result<RulesProfile, ExchangeError> {
        self.datastore.with_conn(|conn| {
            profiles::require_profile(conn, profile.key.as_str())?;
            let rows = active_rules::select_by_profile(conn, profile.key.as_str())?;
            let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
            let params_by_id = active_rules::select_params_by_active_rule_ids(conn, &ids)?;

            let mut model = RulesProfile::new(profile.name.clone(), profile.language.clone());
            for row in rows {
                let severity =
                    Severity::parse(&row.severity).ok_or_else(|| StorageError::Sqlite {
                        message: format!(
                            "active rule {} has corrupt severity \"{}\"",
                            row.rule_key, row.severity
                        ),
                    })?;
                let params = params_by_id
                    .get(&row.id)
                    .map(|rows| {
                        rows.iter()
                            .map(|p| (p.name.clone(), p.value.clone()))
                            .collect()
                    })
                    .unwrap_or_default();
                model.activate_rule(row.rule_key, severity, params);
            }
            Ok::<_, ExchangeError>(model)
        })
    }
}
