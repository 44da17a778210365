//! Rule: prefer-const-assertion (S3007)
//!
//! A function returning a literal tuple such as `['GET', 'POST']` widens it
//! to `string[]` unless it is marked `as const`. Only TypeScript sources are
//! checked, since `as const` is not valid JavaScript.

use std::path::Path;

use sift_parser::{NodeRef, NodeType};

use crate::classify::{as_array_expression, is_literal, is_ts_as_expression};
use crate::fixes::const_assertion;
use crate::predicates::{has_const_assertion, is_in_return_statement};
use crate::rule::*;

pub struct PreferConstAssertion;

static META: RuleMeta = RuleMeta {
    name: "prefer-const-assertion",
    code: "S3007",
    description: "Prefer 'as const' for returned literal arrays",
    category: Category::BestPractice,
    default_severity: Severity::Warn,
    fixable: true,
};

const TYPESCRIPT_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

fn is_typescript_file(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TYPESCRIPT_EXTENSIONS.contains(&ext))
}

impl LintRule for PreferConstAssertion {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::ArrayExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !is_typescript_file(ctx.file_path()) {
            return;
        }
        let Some(array) = as_array_expression(node) else {
            return;
        };
        if array.elements.len() < 2 {
            return;
        }
        let all_literals = array
            .elements
            .iter()
            .all(|element| element.is_some_and(|id| is_literal(node.get(id))));
        if !all_literals || !is_in_return_statement(node) || has_const_assertion(node) {
            return;
        }
        // Already asserted to some other type
        if node.parent().is_some_and(is_ts_as_expression) {
            return;
        }

        ctx.report_with_fix(node, "Add 'as const' to keep the literal element types", |fixer| {
            fixer.replace_text(node, const_assertion(fixer.source().try_get_text(node)?))
        });
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
    fn test_returned_tuple_flagged() {
        let diags = lint("function methods() { return ['GET', 'POST']; }");
        let fix = diags.iter().find(|d| d.code == "S3007").and_then(|d| d.fix.clone()).unwrap();
        assert_eq!(fix.replacement, "['GET', 'POST'] as const");
    }

    #[test]
    fn test_already_const_ok() {
        assert!(!has_rule(&lint("function f() { return [1, 2] as const; }"), "S3007"));
    }

    #[test]
    fn test_other_assertion_ok() {
        assert!(!has_rule(&lint("function f() { return [1, 2] as number[]; }"), "S3007"));
    }

    #[test]
    fn test_non_literal_or_short_ok() {
        assert!(!has_rule(&lint("function f() { return [a, 2]; }"), "S3007"));
        assert!(!has_rule(&lint("function f() { return [1]; }"), "S3007"));
        assert!(!has_rule(&lint("function f() { return [1, , 2]; }"), "S3007"));
        assert!(!has_rule(&lint("const xs = [1, 2];"), "S3007"));
    }

    #[test]
    fn test_javascript_file_ok() {
        let linter = Linter::new();
        let source = "function f() { return ['a', 'b']; }";
        for path in ["a.js", "a.jsx", "a.mjs", "a.cjs"] {
            let diags = linter.lint_source(source, path).diagnostics;
            assert!(!has_rule(&diags, "S3007"), "{path}");
        }
        let outcome = linter.fix_source(source, "a.js");
        assert_eq!(outcome.output, source);
        assert!(has_rule(&linter.lint_source(source, "a.mts").diagnostics, "S3007"));
    }
}
