//! qprof configuration, loaded from `qprof.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level configuration.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`QPROF_*`)
/// 2. Config file (`qprof.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QprofConfig {
    /// Path of the SQLite database file.
    pub db_path: PathBuf,
    /// Default tracing filter when `QPROF_LOG` is not set.
    pub log_filter: String,
}

impl Default for QprofConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from("qprof.db"),
            log_filter: "qprof=info".to_string(),
        }
    }
}

impl QprofConfig {
    /// Load configuration from a TOML file, then apply `QPROF_DB`
    /// from the environment on top.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml_str(&text).map_err(|message| ConfigError::ParseError {
            path: path.display().to_string(),
            message,
        })?;
        if let Ok(db) = std::env::var("QPROF_DB") {
            config.db_path = PathBuf::from(db);
        }
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(text: &str) -> Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config = QprofConfig::from_toml_str("").unwrap();
        assert_eq!(config.db_path, PathBuf::from("qprof.db"));
        assert_eq!(config.log_filter, "qprof=info");
    }

    #[test]
    fn parses_overrides() {
        let config = QprofConfig::from_toml_str(
            r#"
            db_path = "/var/lib/qprof/profiles.db"
            log_filter = "qprof=debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/var/lib/qprof/profiles.db"));
        assert_eq!(config.log_filter, "qprof=debug");
    }

    #[test]
    fn rejects_bad_toml() {
        assert!(QprofConfig::from_toml_str("db_path = [").is_err());
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qprof.toml");
        std::fs::write(&path, "log_filter = \"qprof=trace\"\n").unwrap();

        let config = QprofConfig::load(&path).unwrap();
        assert_eq!(config.log_filter, "qprof=trace");

        assert!(QprofConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
