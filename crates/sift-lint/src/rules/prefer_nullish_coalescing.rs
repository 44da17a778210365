//! Rule: prefer-nullish-coalescing (S3001)
//!
//! `value || ''`, `value || 0` and `value || false` fall back on every falsy
//! value, which for these defaults is what `??` is usually meant to do.

use sift_parser::ast::LogicalOperator;
use sift_parser::{NodeRef, NodeType};

use crate::classify::{as_logical_expression, is_logical_with};
use crate::fixes::nullish_coalescing;
use crate::predicates::should_use_nullish_coalescing;
use crate::rule::*;
use crate::source::SourceCode;

pub struct PreferNullishCoalescing;

static META: RuleMeta = RuleMeta {
    name: "prefer-nullish-coalescing",
    code: "S3001",
    description: "Prefer '??' over '||' for empty-value defaults",
    category: Category::BestPractice,
    default_severity: Severity::Warn,
    fixable: true,
};

fn is_and_or(node: NodeRef<'_>) -> bool {
    is_logical_with(node, LogicalOperator::Or) || is_logical_with(node, LogicalOperator::And)
}

/// `a || b` rewritten with `??`, parenthesized where `??` may not mix with
/// `||`/`&&` unparenthesized.
pub(crate) fn nullish_replacement(source: &SourceCode<'_>, node: NodeRef<'_>) -> Option<String> {
    let logical = as_logical_expression(node)?;
    let left = node.get(logical.left);
    let right = node.get(logical.right);
    let mut left_text = source.try_get_text(left)?.to_string();
    if is_and_or(left) {
        left_text = format!("({left_text})");
    }
    let replacement = nullish_coalescing(&left_text, source.try_get_text(right)?);
    if node.parent().is_some_and(is_and_or) {
        return Some(format!("({replacement})"));
    }
    Some(replacement)
}

impl LintRule for PreferNullishCoalescing {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::LogicalExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        if !should_use_nullish_coalescing(node) {
            return;
        }
        ctx.report_with_fix(node, "Prefer '??' over '||' for default values", |fixer| {
            fixer.replace_text(node, nullish_replacement(fixer.source(), node)?)
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
            .find(|d| d.code == "S3001")
            .and_then(|d| d.fix)
            .map(|f| f.replacement)
    }

    #[test]
    fn test_empty_defaults_flagged() {
        assert_eq!(fix_for("const s = name || '';").as_deref(), Some("name ?? ''"));
        assert_eq!(fix_for("const n = count || 0;").as_deref(), Some("count ?? 0"));
        assert_eq!(fix_for("const b = flag || false;").as_deref(), Some("flag ?? false"));
    }

    #[test]
    fn test_other_defaults_ok() {
        assert!(!has_rule(&lint("const s = name || 'anonymous';"), "S3001"));
        assert!(!has_rule(&lint("const n = count || 1;"), "S3001"));
        assert!(!has_rule(&lint("const v = a || null;"), "S3001"));
        assert!(!has_rule(&lint("const v = a && '';"), "S3001"));
        assert!(!has_rule(&lint("const v = a ?? '';"), "S3001"));
    }

    #[test]
    fn test_mixed_operators_parenthesized() {
        assert_eq!(fix_for("x = a || b || '';").as_deref(), Some("(a || b) ?? ''"));
        assert_eq!(fix_for("x = ok && (v || 0);").as_deref(), Some("v ?? 0"));
        assert_eq!(fix_for("x = v || 0 || w;").as_deref(), Some("(v ?? 0)"));
    }
}
