//! Rule metadata and declared parameters, as exposed by the catalog.

use serde::{Deserialize, Serialize};

use super::identifiers::{ProfileKey, RuleKey};
use super::severity::Severity;

/// Value type of a declared rule parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    Text,
    Integer,
    Boolean,
    Float,
}

impl ParamType {
    /// Check a candidate value against this type. Returns the reason
    /// a value is unacceptable, `None` if it is fine.
    pub fn validate(&self, value: &str) -> Option<String> {
        match self {
            Self::Text => None,
            Self::Integer => value
                .parse::<i64>()
                .err()
                .map(|_| format!("\"{value}\" is not an integer")),
            Self::Boolean => match value {
                "true" | "false" => None,
                _ => Some(format!("\"{value}\" is not a boolean")),
            },
            Self::Float => value
                .parse::<f64>()
                .err()
                .map(|_| format!("\"{value}\" is not a number")),
        }
    }
}

/// A parameter declared by a rule: name, type constraint, optional
/// catalog default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleParam {
    pub key: String,
    pub param_type: ParamType,
    pub default_value: Option<String>,
}

impl RuleParam {
    pub fn new(key: impl Into<String>, param_type: ParamType) -> Self {
        Self {
            key: key.into(),
            param_type,
            default_value: None,
        }
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

/// Catalog metadata for one rule: identity, language, default
/// severity, declared parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleMetadata {
    pub key: RuleKey,
    pub name: String,
    pub language: String,
    pub default_severity: Severity,
    pub params: Vec<RuleParam>,
}

impl RuleMetadata {
    pub fn new(
        key: impl Into<RuleKey>,
        name: impl Into<String>,
        language: impl Into<String>,
        default_severity: Severity,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            language: language.into(),
            default_severity,
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: RuleParam) -> Self {
        self.params.push(param);
        self
    }

    /// Look up a declared parameter by name.
    pub fn param(&self, key: &str) -> Option<&RuleParam> {
        self.params.iter().find(|p| p.key == key)
    }
}

/// A quality profile: key, display name, target language.
///
/// The active-rule set it owns lives in storage and is only ever
/// mutated through the activation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub key: ProfileKey,
    pub name: String,
    pub language: String,
}

impl ProfileRecord {
    pub fn new(
        key: impl Into<ProfileKey>,
        name: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            language: language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_type_validation() {
        assert!(ParamType::Integer.validate("10").is_none());
        assert!(ParamType::Integer.validate("ten").is_some());
        assert!(ParamType::Boolean.validate("true").is_none());
        assert!(ParamType::Boolean.validate("yes").is_some());
        assert!(ParamType::Float.validate("0.5").is_none());
        assert!(ParamType::Float.validate("half").is_some());
        assert!(ParamType::Text.validate("anything at all").is_none());
    }

    #[test]
    fn metadata_param_lookup() {
        let rule = RuleMetadata::new("squid:S100", "Method names", "java", Severity::Minor)
            .with_param(RuleParam::new("format", ParamType::Text).with_default("^[a-z]"));
        assert!(rule.param("format").is_some());
        assert_eq!(
            rule.param("format").unwrap().default_value.as_deref(),
            Some("^[a-z]")
        );
        assert!(rule.param("missing").is_none());
    }
}
