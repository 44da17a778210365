//! Sift linter
//!
//! Rule-based analysis of JavaScript/TypeScript syntax trees with automatic,
//! text-preserving fixes.
//!
//! # Architecture
//!
//! - Each rule implements [`LintRule`]: metadata, the node types it listens
//!   to, and a `check` callback that reports through a [`RuleContext`].
//! - Rules are built from small layers: the node classifier ([`classify`]),
//!   structural predicates ([`predicates`]), chain matchers ([`chains`]) and
//!   fix synthesizers ([`fixes`]).
//! - The [`Plugin`] names the rule set; the runner walks the tree once and
//!   dispatches each node to the rules listening for its type.
//! - [`Linter`] is the public entry point: create one, then call
//!   [`lint_source`](Linter::lint_source), [`lint_ast`](Linter::lint_ast) or
//!   [`fix_source`](Linter::fix_source).
//!
//! # Example
//!
//! ```ignore
//! use sift_lint::Linter;
//!
//! let linter = Linter::new();
//! let result = linter.lint_source("const n = user && user.name;", "main.ts");
//! for d in &result.diagnostics {
//!     println!("[{}] {}: {}", d.code, d.rule, d.message);
//! }
//! ```

pub mod apply;
pub mod chains;
pub mod classify;
pub mod config;
pub mod fixes;
pub mod legacy;
pub mod plugin;
pub mod predicates;
pub mod rule;
pub mod rules;
mod runner;
pub mod source;

pub use apply::{apply_fixes, AppliedFixes};
pub use config::{ConfigError, LintConfig, RuleOptions};
pub use plugin::Plugin;
pub use rule::{Category, LintDiagnostic, LintFix, LintRule, RuleContext, RuleMeta, Severity};
pub use source::{Fixer, SourceCode};

use sift_parser::{Ast, SyntaxError};
use tracing::{debug, trace, warn};

use runner::LintRunner;

/// Rule id attached to diagnostics for unparseable input.
pub const PARSE_ERROR_RULE: &str = "parse-error";

/// Code attached to diagnostics for unparseable input.
pub const PARSE_ERROR_CODE: &str = "S0001";

/// Result of linting a single file.
#[derive(Debug)]
pub struct LintResult {
    /// All diagnostics emitted for this file.
    pub diagnostics: Vec<LintDiagnostic>,
    /// File path that was linted.
    pub file_path: String,
    /// Number of diagnostics that have an auto-fix.
    pub fixable_count: usize,
}

impl LintResult {
    fn new(diagnostics: Vec<LintDiagnostic>, file_path: &str) -> Self {
        let fixable_count = diagnostics.iter().filter(|d| d.fix.is_some()).count();
        Self {
            diagnostics,
            file_path: file_path.to_string(),
            fixable_count,
        }
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warn)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == severity).count()
    }
}

/// Result of [`Linter::fix_source`].
#[derive(Debug)]
pub struct FixOutcome {
    /// Source after all passes.
    pub output: String,
    /// Fixes applied across all passes.
    pub fixes_applied: usize,
    /// Lint passes that applied at least one fix.
    pub passes: usize,
    /// Diagnostics remaining in `output`.
    pub diagnostics: Vec<LintDiagnostic>,
}

/// The linter. Holds the rule set and configuration.
pub struct Linter {
    plugin: Plugin,
    config: LintConfig,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter {
    /// Create a linter with all rules and default severities.
    pub fn new() -> Self {
        Self::with_config(LintConfig::new())
    }

    /// Create a linter with configuration overrides. Rules are built with
    /// the config's options.
    pub fn with_config(config: LintConfig) -> Self {
        Self {
            plugin: Plugin::new(&config.options),
            config,
        }
    }

    pub fn plugin(&self) -> &Plugin {
        &self.plugin
    }

    pub fn config(&self) -> &LintConfig {
        &self.config
    }

    /// Lint an already parsed tree. `source` must be the text it was parsed
    /// from.
    pub fn lint_ast(&self, ast: &Ast, source: &str, file_path: &str) -> LintResult {
        let code = SourceCode::new(source);
        let runner = LintRunner::new(&self.plugin, &self.config);
        trace!(file = file_path, rules = runner.rule_count(), "lint_ast");
        LintResult::new(runner.run(ast, &code, file_path), file_path)
    }

    /// Convenience: parse source code and lint it.
    ///
    /// Parse errors are converted to lint diagnostics so the caller gets a
    /// uniform result.
    pub fn lint_source(&self, source: &str, file_path: &str) -> LintResult {
        match sift_parser::parse(source) {
            Ok(ast) => self.lint_ast(&ast, source, file_path),
            Err(errors) => {
                debug!(file = file_path, errors = errors.len(), "parse failed");
                let diagnostics = errors.iter().map(parse_error_diagnostic).collect();
                LintResult::new(diagnostics, file_path)
            }
        }
    }

    /// Lint and apply fixes repeatedly, up to `max_fix_passes` rounds, until
    /// no fix applies.
    ///
    /// A round whose output no longer parses is discarded and fixing stops
    /// there.
    pub fn fix_source(&self, source: &str, file_path: &str) -> FixOutcome {
        let mut output = source.to_string();
        let mut fixes_applied = 0;
        let mut passes = 0;

        let mut result = self.lint_source(&output, file_path);
        while passes < self.config.max_fix_passes {
            let fixes: Vec<&LintFix> = result.diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
            if fixes.is_empty() {
                break;
            }
            let applied = apply_fixes(&output, &fixes);
            if applied.applied == 0 {
                break;
            }
            if sift_parser::parse(&applied.output).is_err() {
                warn!(file = file_path, pass = passes + 1, "fixes produced unparseable output; discarded");
                break;
            }

            passes += 1;
            fixes_applied += applied.applied;
            debug!(
                file = file_path,
                pass = passes,
                applied = applied.applied,
                skipped = applied.skipped,
                "fix pass"
            );
            output = applied.output;
            result = self.lint_source(&output, file_path);
        }

        FixOutcome {
            output,
            fixes_applied,
            passes,
            diagnostics: result.diagnostics,
        }
    }
}

fn parse_error_diagnostic(error: &SyntaxError) -> LintDiagnostic {
    LintDiagnostic {
        rule: PARSE_ERROR_RULE,
        code: PARSE_ERROR_CODE,
        message: error.to_string(),
        span: error.span(),
        severity: Severity::Error,
        fix: None,
        notes: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_becomes_diagnostic() {
        let result = Linter::new().lint_source("let x = ;", "broken.ts");
        assert_eq!(result.diagnostics.len(), 1);
        let diag = &result.diagnostics[0];
        assert_eq!(diag.rule, PARSE_ERROR_RULE);
        assert_eq!(diag.code, "S0001");
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.file_path, "broken.ts");
    }

    #[test]
    fn test_clean_source() {
        let result = Linter::new().lint_source("const x = a ?? b;", "ok.ts");
        assert!(result.diagnostics.is_empty());
        assert_eq!(result.fixable_count, 0);
    }

    #[test]
    fn test_counts() {
        let result = Linter::new().lint_source("Deno.remove(p);\nconst s = t || '';", "a.ts");
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.fixable_count, 1);
    }

    #[test]
    fn test_fix_source_reaches_fixpoint() {
        let outcome = Linter::new().fix_source("const n = user && user.name;\nconst s = a || '';\n", "a.ts");
        assert_eq!(outcome.output, "const n = user?.name;\nconst s = a ?? '';\n");
        assert_eq!(outcome.fixes_applied, 2);
        assert_eq!(outcome.passes, 1);
        assert!(outcome.diagnostics.is_empty());
    }

    #[test]
    fn test_fix_pass_limit() {
        let mut config = LintConfig::new();
        config.max_fix_passes = 0;
        let outcome = Linter::with_config(config).fix_source("const s = a || '';", "a.ts");
        assert_eq!(outcome.output, "const s = a || '';");
        assert_eq!(outcome.fixes_applied, 0);
        assert_eq!(outcome.diagnostics.len(), 1);
    }
}
