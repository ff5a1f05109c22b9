//! Flag serialization for `helm repo remove` invocations.
//!
//! This module turns a set of named repository-removal options into the
//! command-line fragment that gets embedded in a shell command. The
//! repository name is emitted first as a bare quoted positional argument,
//! followed by the named flags in a fixed order that does not depend on how
//! the input map was built.
//!
//! Upstream configuration layers cannot always express "unset" as true
//! absence and fall back to the literal string `"undef"`. Both forms are
//! treated identically here: the flag is omitted.

use crate::options::OptionValue;
use crate::quote::{quote_value, QuoteMode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentinel string used by upstream configuration layers for "explicitly unset"
pub const UNDEF_SENTINEL: &str = "undef";

/// Option keys recognized by [`RemoveOptions::from_options`], in emission order.
pub const RECOGNIZED_KEYS: [&str; 8] = [
    "repo_name",
    "home",
    "host",
    "kube_context",
    "tiller_namespace",
    "reg_config",
    "repo_cache",
    "repo_config",
];

/// CLI flag names for `helm repo remove`
pub mod flag_names {
    /// Helm home directory: `--home <path>`
    pub const HOME: &str = "--home";

    /// Tiller host address: `--host <address>`
    pub const HOST: &str = "--host";

    /// Kubeconfig context: `--kube-context <name>`
    pub const KUBE_CONTEXT: &str = "--kube-context";

    /// Tiller namespace: `--tiller-namespace <namespace>`
    pub const TILLER_NAMESPACE: &str = "--tiller-namespace";

    /// Registry config file: `--registry-config <path>`
    pub const REGISTRY_CONFIG: &str = "--registry-config";

    /// Repository cache directory: `--repository-cache <path>`
    pub const REPOSITORY_CACHE: &str = "--repository-cache";

    /// Repository config file: `--repository-config <path>`
    pub const REPOSITORY_CONFIG: &str = "--repository-config";
}

/// Typed options for a single repository removal.
///
/// Every field is optional; a field set to the `"undef"` sentinel behaves
/// exactly like an absent field.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoveOptions {
    /// Repository name, emitted as the bare positional argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiller_namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reg_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_cache: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_config: Option<String>,
}

impl RemoveOptions {
    /// Build typed options from a loosely-typed option map.
    ///
    /// This is the single ingestion boundary for untyped configuration input:
    /// values are rendered to their string form, the `"undef"` sentinel is
    /// normalized to `None`, and unrecognized keys are ignored.
    pub fn from_options(options: &BTreeMap<String, OptionValue>) -> Self {
        let mut opts = RemoveOptions::default();
        for (key, value) in options {
            let rendered = value.render();
            if rendered == UNDEF_SENTINEL {
                continue;
            }
            match key.as_str() {
                "repo_name" => opts.repo_name = Some(rendered),
                "home" => opts.home = Some(rendered),
                "host" => opts.host = Some(rendered),
                "kube_context" => opts.kube_context = Some(rendered),
                "tiller_namespace" => opts.tiller_namespace = Some(rendered),
                "reg_config" => opts.reg_config = Some(rendered),
                "repo_cache" => opts.repo_cache = Some(rendered),
                "repo_config" => opts.repo_config = Some(rendered),
                _ => {}
            }
        }
        opts
    }

    /// True when no field would contribute output
    pub fn is_empty(&self) -> bool {
        remove_flags(self).is_empty()
    }
}

/// Serialize removal options to a flag string using legacy quoting.
///
/// Equivalent to `remove_flags_with(options, QuoteMode::Legacy)`.
pub fn remove_flags(options: &RemoveOptions) -> String {
    remove_flags_with(options, QuoteMode::Legacy)
}

/// Serialize removal options to a flag string.
///
/// The repository name comes first as a bare quoted value, then the named
/// flags in fixed order. Fields that are absent or hold the `"undef"`
/// sentinel are skipped. Returns an empty string when nothing contributes.
pub fn remove_flags_with(options: &RemoveOptions, mode: QuoteMode) -> String {
    let mut flags = Vec::new();

    if let Some(name) = present(&options.repo_name) {
        flags.push(quote_value(name, mode));
    }

    let named = [
        (flag_names::HOME, &options.home),
        (flag_names::HOST, &options.host),
        (flag_names::KUBE_CONTEXT, &options.kube_context),
        (flag_names::TILLER_NAMESPACE, &options.tiller_namespace),
        (flag_names::REGISTRY_CONFIG, &options.reg_config),
        (flag_names::REPOSITORY_CACHE, &options.repo_cache),
        (flag_names::REPOSITORY_CONFIG, &options.repo_config),
    ];

    for (flag, value) in named {
        if let Some(value) = present(value) {
            flags.push(format!("{} {}", flag, quote_value(value, mode)));
        }
    }

    flags.join(" ")
}

// A field contributes output only when set and not the sentinel. Empty
// strings are deliberately NOT treated as unset.
fn present(field: &Option<String>) -> Option<&str> {
    match field.as_deref() {
        Some(v) if v != UNDEF_SENTINEL => Some(v),
        _ => None,
    }
}
