//! Rule: prefer-promise-reject-errors (S1002)
//!
//! `Promise.reject` should be given an Error so the rejection carries a
//! stack trace. Literal reasons are wrapped in `new Error(...)`.

use rustc_hash::FxHashSet;
use sift_parser::ast::LiteralValue;
use sift_parser::{Node, NodeRef, NodeType};

use crate::classify::as_call_expression;
use crate::config::RuleOptions;
use crate::fixes::wrap_in_error;
use crate::predicates::{is_error_construction, is_promise_reject_call};
use crate::rule::*;

pub struct PreferPromiseRejectErrors {
    error_classes: FxHashSet<String>,
}

impl PreferPromiseRejectErrors {
    pub fn new(options: &RuleOptions) -> Self {
        Self {
            error_classes: options.error_classes.clone(),
        }
    }
}

static META: RuleMeta = RuleMeta {
    name: "prefer-promise-reject-errors",
    code: "S1002",
    description: "Require Error objects as Promise rejection reasons",
    category: Category::Correctness,
    default_severity: Severity::Warn,
    fixable: true,
};

impl LintRule for PreferPromiseRejectErrors {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::CallExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !is_promise_reject_call(node) {
            return;
        }
        let Some(call) = as_call_expression(node) else {
            return;
        };
        let Some(reason) = call.arguments.first().map(|id| node.get(*id)) else {
            return;
        };
        if is_error_construction(reason, &self.error_classes) {
            return;
        }

        let message = "Expected the Promise rejection reason to be an Error";
        let wrappable = match reason.node() {
            Node::Literal(lit) => matches!(lit.value, LiteralValue::String(_) | LiteralValue::Number(_)),
            Node::TemplateLiteral(_) => true,
            _ => false,
        };
        if wrappable {
            ctx.report_with_fix(node, message, |fixer| {
                let text = fixer.source().get_text(reason);
                fixer.replace_text(reason, wrap_in_error(text))
            });
        } else {
            ctx.report(node, message);
        }
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

    fn fix_for(source: &str) -> Option<String> {
        lint(source)
            .into_iter()
            .find(|d| d.code == "S1002")
            .and_then(|d| d.fix)
            .map(|f| f.replacement)
    }

    #[test]
    fn test_string_reason_fixed() {
        assert_eq!(
            fix_for("Promise.reject('timeout');").as_deref(),
            Some("new Error('timeout')")
        );
        assert_eq!(fix_for("Promise.reject(404);").as_deref(), Some("new Error(404)"));
        assert_eq!(
            fix_for("Promise.reject(`bad ${id}`);").as_deref(),
            Some("new Error(`bad ${id}`)")
        );
    }

    #[test]
    fn test_error_reason_ok() {
        assert!(!has_rule(&lint("Promise.reject(new Error('x'));"), "S1002"));
        assert!(!has_rule(&lint("Promise.reject(new TypeError('x'));"), "S1002"));
        assert!(!has_rule(&lint("Promise.reject(RangeError('x'));"), "S1002"));
    }

    #[test]
    fn test_no_arguments_ok() {
        assert!(!has_rule(&lint("Promise.reject();"), "S1002"));
    }

    #[test]
    fn test_other_reason_reported_without_fix() {
        let diags = lint("Promise.reject(reason);");
        let diag = diags.iter().find(|d| d.code == "S1002").expect("should report");
        assert!(diag.fix.is_none());
        let diags = lint("Promise.reject(new HttpError(500));");
        assert!(has_rule(&diags, "S1002"), "unknown class is not an Error construction");
    }

    #[test]
    fn test_other_rejects_ignored() {
        assert!(!has_rule(&lint("deferred.reject('x');"), "S1002"));
        assert!(!has_rule(&lint("Promise.resolve('x');"), "S1002"));
    }
}
