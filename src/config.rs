use crate::flags::RECOGNIZED_KEYS;
use crate::options::OptionValue;
use crate::quote::QuoteMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Declarative configuration for a batch of repository removals
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    /// Options applied to every repository entry unless overridden
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<BTreeMap<String, OptionValue>>,
    pub repositories: Vec<RepositoryEntry>,
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(binary) = &self.general.helm_binary {
            if binary.is_empty() {
                return Err(ValidationError::InvalidGeneral(
                    "helm_binary cannot be empty".to_string(),
                ));
            }
        }

        if self.repositories.is_empty() {
            return Err(ValidationError::InvalidRepository(
                "at least one repository entry is required".to_string(),
            ));
        }

        for entry in &self.repositories {
            if entry.name.is_empty() {
                return Err(ValidationError::InvalidRepository(
                    "repository name cannot be empty".to_string(),
                ));
            }
        }

        // Unknown option keys are ignored at serialization time, so they are
        // only worth a warning here
        for (scope, options) in self.option_scopes() {
            for key in options.keys() {
                if !RECOGNIZED_KEYS.contains(&key.as_str()) {
                    log::warn!("Ignoring unrecognized option '{}' in {}", key, scope);
                }
            }
        }

        Ok(())
    }

    /// Resolved helm binary to embed in generated command lines
    pub fn helm_binary(&self) -> &str {
        self.general.helm_binary.as_deref().unwrap_or("helm")
    }

    /// Quoting mode selected by the configuration
    pub fn quote_mode(&self) -> QuoteMode {
        if self.general.escape_values.unwrap_or(false) {
            QuoteMode::Escaped
        } else {
            QuoteMode::Legacy
        }
    }

    fn option_scopes(&self) -> Vec<(String, &BTreeMap<String, OptionValue>)> {
        let mut scopes = Vec::new();
        if let Some(defaults) = &self.defaults {
            scopes.push(("defaults".to_string(), defaults));
        }
        for entry in &self.repositories {
            if let Some(options) = &entry.options {
                scopes.push((format!("repository '{}'", entry.name), options));
            }
        }
        scopes
    }
}

/// Shared general configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneralConfig {
    /// Helm binary name or path; defaults to "helm" when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub helm_binary: Option<String>,
    /// Emit POSIX-escaped values instead of legacy fixed single quotes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_values: Option<bool>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            helm_binary: None,
            escape_values: Some(false),
        }
    }
}

/// A single repository to remove
#[derive(Debug, Serialize, Deserialize)]
pub struct RepositoryEntry {
    /// Repository name; becomes the positional argument of the command
    pub name: String,
    /// Per-entry options, overriding the global defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<BTreeMap<String, OptionValue>>,
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid general configuration: {0}")]
    InvalidGeneral(String),
    #[error("Invalid repository configuration: {0}")]
    InvalidRepository(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parsing() {
        let yaml = r#"
general:
  helm_binary: "/usr/local/bin/helm"
  escape_values: false
defaults:
  home: "/root/.helm"
repositories:
  - name: "stable"
  - name: "incubator"
    options:
      kube_context: "staging"
"#;

        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.helm_binary(), "/usr/local/bin/helm");
        assert_eq!(config.quote_mode(), QuoteMode::Legacy);
        assert_eq!(config.repositories.len(), 2);
    }

    #[test]
    fn test_minimal_config() {
        let yaml = r#"
repositories:
  - name: "stable"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.helm_binary(), "helm");
        assert_eq!(config.quote_mode(), QuoteMode::Legacy);
    }

    #[test]
    fn test_escape_values_selects_mode() {
        let yaml = r#"
general:
  escape_values: true
repositories:
  - name: "stable"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.quote_mode(), QuoteMode::Escaped);
    }

    #[test]
    fn test_validation_errors() {
        let yaml = r#"
repositories: []
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());

        let yaml = r#"
repositories:
  - name: ""
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());

        let yaml = r#"
general:
  helm_binary: ""
repositories:
  - name: "stable"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_option_keys_do_not_fail_validation() {
        let yaml = r#"
defaults:
  foo: "bar"
repositories:
  - name: "stable"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
    }
}
