//! Rule: prefer-optional-chain (S3002)
//!
//! `user && user.profile.name` → `user?.profile.name`. The left operand must
//! reappear verbatim as the object of an access in the right operand.

use sift_parser::ast::LogicalOperator;
use sift_parser::{NodeRef, NodeType};

use crate::chains::{can_convert_to_optional_chain, convert_to_optional_chain, TextEquivalence};
use crate::classify::{as_logical_expression, is_logical_with};
use crate::rule::*;

pub struct PreferOptionalChain;

static META: RuleMeta = RuleMeta {
    name: "prefer-optional-chain",
    code: "S3002",
    description: "Prefer optional chaining over '&&' guards",
    category: Category::BestPractice,
    default_severity: Severity::Warn,
    fixable: true,
};

impl LintRule for PreferOptionalChain {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::LogicalExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !is_logical_with(node, LogicalOperator::And) {
            return;
        }
        let Some(logical) = as_logical_expression(node) else {
            return;
        };
        let equivalence = TextEquivalence::new(ctx.source());
        let Some(matched) = can_convert_to_optional_chain(node, &equivalence) else {
            return;
        };
        let right = node.get(logical.right);

        ctx.report_with_fix(node, "Prefer optional chaining over an '&&' guard", |fixer| {
            fixer.replace_text(node, convert_to_optional_chain(fixer.source(), right, matched)?)
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

    fn fix_for(source: &str) -> Option<String> {
        lint(source)
            .into_iter()
            .find(|d| d.code == "S3002")
            .and_then(|d| d.fix)
            .map(|f| f.replacement)
    }

    #[test]
    fn test_member_guard_flagged() {
        assert_eq!(fix_for("const n = user && user.name;").as_deref(), Some("user?.name"));
        assert_eq!(
            fix_for("const n = this.cache && this.cache.get(key);").as_deref(),
            Some("this.cache?.get(key)")
        );
    }

    #[test]
    fn test_call_chain_flagged() {
        assert_eq!(
            fix_for("if (res && res.json().then(parse)) {}").as_deref(),
            Some("res?.json().then(parse)")
        );
    }

    #[test]
    fn test_unrelated_operands_ok() {
        assert!(!has_rule(&lint("const v = a && b.c;"), "S3002"));
        assert!(!has_rule(&lint("const v = a && check(a.b);"), "S3002"));
        assert!(!has_rule(&lint("const v = a || a.b;"), "S3002"));
    }

    #[test]
    fn test_already_optional_ok() {
        assert!(!has_rule(&lint("const v = user?.name;"), "S3002"));
    }

    #[test]
    fn test_deep_member_chain() {
        let links = ".a".repeat(5000);
        let source = format!("x && x{links};");
        assert_eq!(fix_for(&source), Some(format!("x?{links}")));
    }
}
