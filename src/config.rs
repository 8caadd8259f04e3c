//! YAML configuration file support.
//!
//! Every field has a default, so a missing section (or no file at all) means
//! the built-in behaviour. The reference corpus is compiled in and cannot be
//! changed from here.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! analysis:
//!   version: 1
//!   highlight_threshold: 0.3
//!   source_threshold: 0.1
//!
//! logging:
//!   level: "info"
//!   json: false
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analyzer::AnalysisConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct PlagscanConfig {
    /// Configuration format version
    #[serde(default = "default_format_version")]
    pub version: String,

    /// Thresholds used by the analyzer
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Log output settings for the binary
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PlagscanConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: PlagscanConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.analysis
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for PlagscanConfig {
    fn default() -> Self {
        Self {
            version: default_format_version(),
            analysis: AnalysisConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. `info` or `plagscan=debug,matcher=trace`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.level.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_format_version() -> String {
    "1.0".to_string()
}
fn default_log_level() -> String {
    "warn".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
analysis:
  highlight_threshold: 0.5
  source_threshold: 0.2
logging:
  level: "debug"
  json: true
"#;

        let config = PlagscanConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.analysis.highlight_threshold, 0.5);
        assert_eq!(config.analysis.source_threshold, 0.2);
        assert_eq!(config.analysis.version, 1);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
analysis:
  source_threshold: 0.15
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = PlagscanConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.version, "1");
        assert_eq!(config.analysis.source_threshold, 0.15);
        assert_eq!(config.analysis.highlight_threshold, 0.3);
    }

    #[test]
    fn test_missing_file() {
        let err = PlagscanConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileRead(_)));
    }

    #[test]
    fn test_default_config() {
        let config = PlagscanConfig::default();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.analysis, AnalysisConfig::default());
        assert_eq!(config.logging.level, "warn");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PlagscanConfig::from_yaml("{}").unwrap();
        assert_eq!(config, PlagscanConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let err = PlagscanConfig::from_yaml("version: \"2.0\"").unwrap_err();
        match err {
            ConfigLoadError::UnsupportedVersion(v) => assert_eq!(v, "2.0"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_threshold_validation() {
        let yaml = r#"
version: "1.0"
analysis:
  highlight_threshold: 3.0
"#;
        let err = PlagscanConfig::from_yaml(yaml).unwrap_err();
        match err {
            ConfigLoadError::Validation(msg) => assert!(msg.contains("highlight_threshold")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_logging_validation() {
        let yaml = r#"
logging:
  level: "  "
"#;
        assert!(matches!(
            PlagscanConfig::from_yaml(yaml),
            Err(ConfigLoadError::Validation(_))
        ));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = PlagscanConfig::from_yaml("analysis: [not, a, map").unwrap_err();
        assert!(matches!(err, ConfigLoadError::YamlParse(_)));
    }

    #[test]
    fn test_full_yaml_roundtrip() {
        let config = PlagscanConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = PlagscanConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
