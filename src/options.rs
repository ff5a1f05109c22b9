//! Option value conversion and merging utilities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A loosely-typed option value as it appears in YAML/JSON option maps.
///
/// Configuration sources carry option values without a declared type, so a
/// single slot may hold a boolean, a number, or a string. Values are
/// normalized to their string form with [`OptionValue::render`] before they
/// are embedded in a command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl OptionValue {
    /// Canonical string form of the value.
    /// - Bool(b) -> "true" / "false"
    /// - Number(n) -> shortest decimal representation ("8080", "0.5")
    /// - String(s) -> s unchanged
    pub fn render(&self) -> String {
        match self {
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Number(n) => n.to_string(),
            OptionValue::String(s) => s.clone(),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::String(s.to_string())
    }
}

/// Merge two option maps, with overrides taking precedence over defaults
pub fn merge_options(
    defaults: Option<&BTreeMap<String, OptionValue>>,
    overrides: Option<&BTreeMap<String, OptionValue>>,
) -> BTreeMap<String, OptionValue> {
    let mut merged = BTreeMap::new();

    // Apply defaults first
    if let Some(defs) = defaults {
        for (k, v) in defs {
            merged.insert(k.clone(), v.clone());
        }
    }

    // Apply overrides (these take precedence)
    if let Some(ovrs) = overrides {
        for (k, v) in ovrs {
            merged.insert(k.clone(), v.clone());
        }
    }

    merged
}
