//! Rule: require-error-handling (S1001)
//!
//! Flags calls to fallible file operations (`Deno.readTextFile(...)` and
//! friends) whose promise is dropped: not awaited and not followed by
//! `.catch` or `.then`.

use rustc_hash::FxHashSet;
use sift_parser::{NodeRef, NodeType};

use crate::classify::as_call_expression;
use crate::config::RuleOptions;
use crate::predicates::{is_awaited, is_handled_by_catch, requires_error_handling};
use crate::rule::*;

pub struct RequireErrorHandling {
    namespace: String,
    operations: FxHashSet<String>,
}

impl RequireErrorHandling {
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            namespace: options.file_namespace.clone(),
            operations: options.file_operations.clone(),
        }
    }
}

static META: RuleMeta = RuleMeta {
    name: "require-error-handling",
    code: "S1001",
    description: "Require fallible file operations to be awaited or handled",
    category: Category::Correctness,
    default_severity: Severity::Error,
    fixable: false,
};

impl LintRule for RequireErrorHandling {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::CallExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !requires_error_handling(node, &self.namespace, &self.operations) {
            return;
        }
        if is_awaited(node) || is_handled_by_catch(node) {
            return;
        }

        let Some(call) = as_call_expression(node) else {
            return;
        };
        let callee = ctx.source().get_text(node.get(call.callee));
        ctx.report_with_notes(
            node,
            format!("'{callee}' can fail, but its result is neither awaited nor handled"),
            vec!["Await the call inside try/catch, or attach a .catch() handler".to_string()],
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LintConfig;
    use crate::rule::LintDiagnostic;
    use crate::Linter;

    fn lint(source: &str) -> Vec<LintDiagnostic> {
        let linter = Linter::new();
        linter.lint_source(source, "test.ts").diagnostics
    }

    fn has_rule(diags: &[LintDiagnostic], code: &str) -> bool {
        diags.iter().any(|d| d.code == code)
    }

    #[test]
    fn test_unhandled_read_flagged() {
        let diags = lint("Deno.readTextFile('config.json');");
        assert!(has_rule(&diags, "S1001"), "should flag unhandled read, got: {:?}", diags);
        let diag = diags.iter().find(|d| d.code == "S1001").unwrap();
        assert!(diag.message.contains("Deno.readTextFile"));
        assert!(diag.fix.is_none());
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_awaited_ok() {
        let diags = lint("async function load() { const text = await Deno.readTextFile('a'); }");
        assert!(!has_rule(&diags, "S1001"));
    }

    #[test]
    fn test_catch_and_then_ok() {
        assert!(!has_rule(&lint("Deno.remove(path).catch(report);"), "S1001"));
        assert!(!has_rule(&lint("Deno.writeTextFile(p, s).then(done);"), "S1001"));
    }

    #[test]
    fn test_assigned_promise_flagged() {
        let diags = lint("const pending = Deno.mkdir('out');");
        assert!(has_rule(&diags, "S1001"));
    }

    #[test]
    fn test_other_calls_ok() {
        assert!(!has_rule(&lint("Deno.cwd();"), "S1001"));
        assert!(!has_rule(&lint("fs.readFile('a');"), "S1001"));
        assert!(!has_rule(&lint("Deno['readFile']('a');"), "S1001"));
    }

    #[test]
    fn test_configured_operations() {
        let config = LintConfig::from_toml_str(
            "[options]\nfile-namespace = \"fsp\"\nfile-operations = [\"unlink\"]\n",
        )
        .unwrap();
        let linter = Linter::with_config(config);
        let diags = linter.lint_source("fsp.unlink(p); Deno.remove(p);", "test.ts").diagnostics;
        assert_eq!(diags.iter().filter(|d| d.code == "S1001").count(), 1);
    }
}
