//! Rule: legacy-prefer-nullish-coalescing (S9001)
//!
//! Flags `||` with any literal on the right, `"default"`, `42` and `null`
//! included.

use sift_parser::ast::LogicalOperator;
use sift_parser::{NodeRef, NodeType};

use crate::classify::{as_logical_expression, is_literal};
use crate::rule::*;
use crate::rules::prefer_nullish_coalescing::nullish_replacement;

pub struct LegacyPreferNullishCoalescing;

static META: RuleMeta = RuleMeta {
    name: "legacy-prefer-nullish-coalescing",
    code: "S9001",
    description: "Prefer '??' over '||' whenever the default is a literal",
    category: Category::Deprecated,
    default_severity: Severity::Off,
    fixable: true,
};

impl LintRule for LegacyPreferNullishCoalescing {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::LogicalExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        let Some(logical) = as_logical_expression(node) else {
            return;
        };
        if logical.operator != LogicalOperator::Or || !is_literal(node.get(logical.right)) {
            return;
        }
        ctx.report_with_fix(node, "Prefer '??' over '||' for default values", |fixer| {
            fixer.replace_text(node, nullish_replacement(fixer.source(), node)?)
        });
    }
}
