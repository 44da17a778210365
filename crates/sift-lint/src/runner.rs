//! Lint runner: single pre-order walk that dispatches each node to the rules
//! listening for its type.

use rustc_hash::FxHashMap;
use sift_parser::{Ast, NodeType};
use tracing::{debug, trace};

use crate::config::LintConfig;
use crate::plugin::Plugin;
use crate::rule::{LintDiagnostic, LintRule, RuleContext, Severity};
use crate::source::SourceCode;

/// Runs all enabled lint rules over an AST in a single traversal.
pub struct LintRunner<'a> {
    rules: Vec<(&'a dyn LintRule, Severity)>,
    /// Node type → indices into `rules`, in registration order
    dispatch: FxHashMap<NodeType, Vec<usize>>,
}

impl<'a> LintRunner<'a> {
    /// Register every rule of `plugin` whose effective severity is not `Off`.
    pub fn new(plugin: &'a Plugin, config: &LintConfig) -> Self {
        let mut rules = Vec::new();
        let mut dispatch: FxHashMap<NodeType, Vec<usize>> = FxHashMap::default();

        for rule in &plugin.rules {
            let meta = rule.meta();
            let severity = config.effective_severity(meta.name, meta.default_severity);
            if severity == Severity::Off {
                continue;
            }
            let index = rules.len();
            rules.push((rule.as_ref(), severity));
            for node_type in rule.listeners() {
                dispatch.entry(*node_type).or_default().push(index);
            }
        }

        debug!(rules = rules.len(), node_types = dispatch.len(), "registered lint rules");
        Self { rules, dispatch }
    }

    /// Number of active rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run all rules over the tree and return diagnostics sorted by position.
    pub fn run(&self, ast: &Ast, source: &SourceCode<'_>, file_path: &str) -> Vec<LintDiagnostic> {
        let mut diagnostics = Vec::new();
        let mut visited = 0usize;

        for node in ast.preorder() {
            visited += 1;
            let Some(indices) = self.dispatch.get(&node.node_type()) else {
                continue;
            };
            for &index in indices {
                let (rule, severity) = self.rules[index];
                let meta = rule.meta();
                trace!(rule = meta.name, node = %node.node_type(), "dispatch");
                let mut ctx = RuleContext::new(source, file_path, meta, severity, &mut diagnostics);
                rule.check(node, &mut ctx);
            }
        }

        diagnostics.sort_by_key(|d| d.span.start);
        debug!(
            file = file_path,
            nodes = visited,
            diagnostics = diagnostics.len(),
            "lint pass finished"
        );
        diagnostics
    }
}
