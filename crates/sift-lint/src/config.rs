//! Lint configuration: per-rule severity overrides, rule options and fix
//! settings, loaded from `sift.toml`.
//!
//! ```toml
//! [rules]
//! prefer-early-return = "off"
//!
//! [options]
//! async-suffix = "Async"
//! error-classes = ["Error", "HttpError"]
//!
//! [fix]
//! max-passes = 10
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use thiserror::Error;

use crate::plugin::Plugin;
use crate::rule::Severity;

/// Default number of lint-and-fix rounds in [`Linter::fix_source`](crate::Linter::fix_source).
pub const DEFAULT_MAX_FIX_PASSES: usize = 10;

const DEFAULT_ASYNC_SUFFIX: &str = "Async";

const DEFAULT_FILE_NAMESPACE: &str = "Deno";

const DEFAULT_ERROR_CLASSES: &[&str] = &[
    "Error",
    "TypeError",
    "RangeError",
    "SyntaxError",
    "ReferenceError",
    "EvalError",
    "URIError",
    "AggregateError",
    "DOMException",
];

const DEFAULT_FILE_OPERATIONS: &[&str] = &[
    "readTextFile",
    "writeTextFile",
    "readFile",
    "writeFile",
    "remove",
    "mkdir",
    "rename",
    "copyFile",
    "stat",
    "lstat",
    "readDir",
    "open",
    "create",
    "truncate",
    "symlink",
    "link",
    "chmod",
    "chown",
    "realPath",
    "readLink",
    "makeTempFile",
    "makeTempDir",
    "utime",
];

/// Errors from loading `sift.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    /// `[rules]` names a rule that does not exist
    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },

    /// Severity other than off/warn/warning/error
    #[error("invalid severity '{value}' for rule '{rule}' (expected off, warn or error)")]
    InvalidSeverity { rule: String, value: String },
}

/// Immutable lookup sets injected into rules when they are constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOptions {
    /// Suffix required on async function names.
    pub async_suffix: String,
    /// Constructors that produce Error objects.
    pub error_classes: FxHashSet<String>,
    /// Namespace object of fallible file operations (`Deno`).
    pub file_namespace: String,
    /// Members of the namespace that can reject.
    pub file_operations: FxHashSet<String>,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            async_suffix: DEFAULT_ASYNC_SUFFIX.to_string(),
            error_classes: DEFAULT_ERROR_CLASSES.iter().map(|s| s.to_string()).collect(),
            file_namespace: DEFAULT_FILE_NAMESPACE.to_string(),
            file_operations: DEFAULT_FILE_OPERATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Configuration for the linter.
#[derive(Debug, Clone)]
pub struct LintConfig {
    /// Per-rule severity overrides. Key = rule name (e.g. "prefer-spread").
    overrides: FxHashMap<String, Severity>,
    /// Options handed to rule constructors.
    pub options: RuleOptions,
    /// Upper bound on lint-and-fix rounds.
    pub max_fix_passes: usize,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            overrides: FxHashMap::default(),
            options: RuleOptions::default(),
            max_fix_passes: DEFAULT_MAX_FIX_PASSES,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
    #[serde(default)]
    rules: BTreeMap<String, String>,
    #[serde(default)]
    options: OptionsSection,
    #[serde(default)]
    fix: FixSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct OptionsSection {
    async_suffix: Option<String>,
    error_classes: Option<Vec<String>>,
    file_namespace: Option<String>,
    file_operations: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FixSection {
    max_passes: Option<usize>,
}

impl LintConfig {
    /// Create a new config (all rules use their default severity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the severity for a specific rule.
    pub fn set_severity(&mut self, rule_name: &str, severity: Severity) {
        self.overrides.insert(rule_name.to_string(), severity);
    }

    /// Get the effective severity for a rule, falling back to its default.
    pub fn effective_severity(&self, rule_name: &str, default: Severity) -> Severity {
        self.overrides.get(rule_name).copied().unwrap_or(default)
    }

    /// Check if a rule is explicitly disabled.
    pub fn is_disabled(&self, rule_name: &str) -> bool {
        self.overrides.get(rule_name) == Some(&Severity::Off)
    }

    /// Parse a `sift.toml` document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let known = Plugin::new(&RuleOptions::default());

        let mut config = LintConfig::new();
        for (rule, value) in &file.rules {
            if known.rule(rule).is_none() {
                return Err(ConfigError::UnknownRule { name: rule.clone() });
            }
            let severity = Severity::parse(value).ok_or_else(|| ConfigError::InvalidSeverity {
                rule: rule.clone(),
                value: value.clone(),
            })?;
            config.set_severity(rule, severity);
        }

        let options = file.options;
        if let Some(suffix) = options.async_suffix {
            config.options.async_suffix = suffix;
        }
        if let Some(classes) = options.error_classes {
            config.options.error_classes = classes.into_iter().collect();
        }
        if let Some(namespace) = options.file_namespace {
            config.options.file_namespace = namespace;
        }
        if let Some(operations) = options.file_operations {
            config.options.file_operations = operations.into_iter().collect();
        }
        if let Some(passes) = file.fix.max_passes {
            config.max_fix_passes = passes;
        }

        Ok(config)
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
