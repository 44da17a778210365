//! Rule: prefer-array-some (S3005)
//!
//! A counting loop whose guards return `true`, followed by `return false`,
//! is `return arr.some(...)`.

use sift_parser::{NodeRef, NodeType};

use super::prefer_array_every::check_array_method_loop;
use crate::chains::ArrayMethod;
use crate::rule::*;

pub struct PreferArraySome;

static META: RuleMeta = RuleMeta {
    name: "prefer-array-some",
    code: "S3005",
    description: "Prefer 'some()' over a loop that returns true early",
    category: Category::BestPractice,
    default_severity: Severity::Warn,
    fixable: true,
};

impl LintRule for PreferArraySome {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::ForStatement]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        check_array_method_loop(node, ctx, ArrayMethod::Some);
    }
}

#[cfg(test)]
mod tests {
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
    fn test_some_loop_flagged() {
        let source = "function hasAdmin(users) {\n  for (let i = 0; i < users.length; ++i) {\n    if (users[i].role === 'admin') return true;\n  }\n  return false;\n}";
        let diags = lint(source);
        let fix = diags.iter().find(|d| d.code == "S3005").and_then(|d| d.fix.clone()).unwrap();
        assert_eq!(fix.replacement, "return users.some(user => user.role === 'admin');");
        assert!(!has_rule(&diags, "S3004"));
    }

    #[test]
    fn test_continue_guards_combined() {
        let source = "function f(items) { for (let i = 0; i < items.length; i += 1) { if (items[i].skip) continue; if (items[i].hit) return true; } return false; }";
        let fix = lint(source).into_iter().find(|d| d.code == "S3005").and_then(|d| d.fix).unwrap();
        assert_eq!(fix.replacement, "return items.some(item => !item.skip && item.hit);");
    }

    #[test]
    fn test_counter_used_directly_ok() {
        let source = "function f(xs) { for (let i = 0; i < xs.length; i++) { if (xs[i] === i) return true; } return false; }";
        assert!(!has_rule(&lint(source), "S3005"));
    }

    #[test]
    fn test_labelled_continue_ok() {
        let source = "function f(xs) { outer: for (let i = 0; i < xs.length; i++) { if (xs[i]) continue outer; if (xs[i].y) return true; } return false; }";
        assert!(!has_rule(&lint(source), "S3005"));
    }
}
