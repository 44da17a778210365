//! Lint rule trait and supporting types.
//!
//! Each lint rule implements `LintRule`: static metadata (`RuleMeta`), the
//! node types it listens to, and a `check` callback the runner invokes once
//! per matching node.

use std::fmt;

use serde::Serialize;
use sift_parser::{NodeRef, NodeType, Span};

use crate::source::{Fixer, SourceCode};

/// Severity level for a lint diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule is disabled.
    Off,
    /// Reports as a warning (does not affect exit code).
    Warn,
    /// Reports as an error (causes non-zero exit code).
    Error,
}

impl Severity {
    /// Parse a configuration value: `off`, `warn`, `warning` or `error`.
    pub fn parse(value: &str) -> Option<Severity> {
        match value.to_ascii_lowercase().as_str() {
            "off" => Some(Severity::Off),
            "warn" | "warning" => Some(Severity::Warn),
            "error" => Some(Severity::Error),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category of a lint rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Likely bugs or unhandled failures.
    Correctness,
    /// Naming and formatting conventions.
    Style,
    /// Language idioms and recommended patterns.
    BestPractice,
    /// Superseded variants kept for compatibility; off unless enabled.
    Deprecated,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Correctness => "correctness",
            Category::Style => "style",
            Category::BestPractice => "best-practice",
            Category::Deprecated => "deprecated",
        };
        f.write_str(name)
    }
}

/// Static metadata for a lint rule.
#[derive(Debug)]
pub struct RuleMeta {
    /// Rule id, e.g. "prefer-optional-chain".
    pub name: &'static str,
    /// Lint code, e.g. "S3002".
    pub code: &'static str,
    /// Human-readable description.
    pub description: &'static str,
    /// Category.
    pub category: Category,
    /// Default severity when no config override is set.
    pub default_severity: Severity,
    /// Whether the rule can provide auto-fixes.
    pub fixable: bool,
}

/// A suggested auto-fix: replace a span with new text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintFix {
    /// The span to replace.
    pub span: Span,
    /// Replacement text.
    pub replacement: String,
}

/// A single lint diagnostic emitted by a rule.
#[derive(Debug, Clone, Serialize)]
pub struct LintDiagnostic {
    /// Rule name (e.g. "prefer-spread").
    pub rule: &'static str,
    /// Lint code (e.g. "S3006").
    pub code: &'static str,
    /// Human-readable message.
    pub message: String,
    /// Source location.
    pub span: Span,
    /// Severity level.
    pub severity: Severity,
    /// Optional auto-fix.
    pub fix: Option<LintFix>,
    /// Additional notes.
    pub notes: Vec<String>,
}

/// Reporting context handed to a rule for one node visit.
///
/// Diagnostics go straight into the runner's sink; the rule keeps nothing.
pub struct RuleContext<'a> {
    source: &'a SourceCode<'a>,
    file_path: &'a str,
    rule: &'static str,
    code: &'static str,
    severity: Severity,
    diagnostics: &'a mut Vec<LintDiagnostic>,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        source: &'a SourceCode<'a>,
        file_path: &'a str,
        meta: &RuleMeta,
        severity: Severity,
        diagnostics: &'a mut Vec<LintDiagnostic>,
    ) -> Self {
        Self {
            source,
            file_path,
            rule: meta.name,
            code: meta.code,
            severity,
            diagnostics,
        }
    }

    /// Source text accessor.
    pub fn source(&self) -> &'a SourceCode<'a> {
        self.source
    }

    /// Path of the file being linted.
    pub fn file_path(&self) -> &'a str {
        self.file_path
    }

    /// Report a diagnostic without a fix.
    pub fn report(&mut self, node: NodeRef<'_>, message: impl Into<String>) {
        self.push(node, message.into(), None, Vec::new());
    }

    /// Report a diagnostic whose fix is built lazily.
    ///
    /// If `fix` yields `None` (for instance because a span is unknown) the
    /// diagnostic is still reported, just without a fix.
    pub fn report_with_fix<F>(&mut self, node: NodeRef<'_>, message: impl Into<String>, fix: F)
    where
        F: FnOnce(&Fixer<'_>) -> Option<LintFix>,
    {
        let fixer = Fixer::new(self.source);
        let fix = fix(&fixer);
        self.push(node, message.into(), fix, Vec::new());
    }

    /// Report a diagnostic carrying explanatory notes.
    pub fn report_with_notes(
        &mut self,
        node: NodeRef<'_>,
        message: impl Into<String>,
        notes: Vec<String>,
    ) {
        self.push(node, message.into(), None, notes);
    }

    fn push(
        &mut self,
        node: NodeRef<'_>,
        message: String,
        fix: Option<LintFix>,
        notes: Vec<String>,
    ) {
        self.diagnostics.push(LintDiagnostic {
            rule: self.rule,
            code: self.code,
            message,
            span: node.range().unwrap_or_default(),
            severity: self.severity,
            fix,
            notes,
        });
    }
}

/// Trait that every lint rule must implement.
///
/// Rules are stateless: all per-visit state lives in the node and the
/// context. A rule reports at most one diagnostic per visited node.
pub trait LintRule: Send + Sync {
    /// Static metadata for this rule.
    fn meta(&self) -> &RuleMeta;

    /// Node types this rule wants to see.
    fn listeners(&self) -> &'static [NodeType];

    /// Inspect one node of a listened-to type.
    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("off"), Some(Severity::Off));
        assert_eq!(Severity::parse("warning"), Some(Severity::Warn));
        assert_eq!(Severity::parse("Error"), Some(Severity::Error));
        assert_eq!(Severity::parse("fatal"), None);
    }

    #[test]
    fn test_diagnostic_json_shape() {
        let diag = LintDiagnostic {
            rule: "prefer-spread",
            code: "S3006",
            message: "Use array spread instead of '.concat()'".to_string(),
            span: Span::new(4, 15, 1, 5),
            severity: Severity::Warn,
            fix: Some(LintFix {
                span: Span::new(4, 15, 1, 5),
                replacement: "[...a, ...b]".to_string(),
            }),
            notes: vec![],
        };
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "warn");
        assert_eq!(json["span"]["line"], 1);
        assert_eq!(json["fix"]["replacement"], "[...a, ...b]");
        assert_eq!(serde_json::to_value(Category::BestPractice).unwrap(), "best-practice");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::BestPractice.to_string(), "best-practice");
        assert_eq!(Category::Deprecated.to_string(), "deprecated");
    }
}
