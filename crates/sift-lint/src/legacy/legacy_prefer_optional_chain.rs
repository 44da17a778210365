//! Rule: legacy-prefer-optional-chain (S9002)
//!
//! Only the plain `id && id.prop` shape: an identifier guarding a direct,
//! non-computed property access on itself. Call chains are not followed.

use sift_parser::ast::LogicalOperator;
use sift_parser::{NodeRef, NodeType};

use crate::chains::convert_to_optional_chain;
use crate::classify::{as_logical_expression, as_member_expression, identifier_name};
use crate::rule::*;

pub struct LegacyPreferOptionalChain;

static META: RuleMeta = RuleMeta {
    name: "legacy-prefer-optional-chain",
    code: "S9002",
    description: "Prefer 'a?.b' over 'a && a.b'",
    category: Category::Deprecated,
    default_severity: Severity::Off,
    fixable: true,
};

impl LintRule for LegacyPreferOptionalChain {
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
        if logical.operator != LogicalOperator::And {
            return;
        }
        let Some(guard) = identifier_name(node.get(logical.left)) else {
            return;
        };
        let right = node.get(logical.right);
        let Some(member) = as_member_expression(right) else {
            return;
        };
        if member.computed || member.optional || identifier_name(right.get(member.object)) != Some(guard) {
            return;
        }

        ctx.report_with_fix(node, format!("Prefer '{guard}?.' over an '&&' guard"), |fixer| {
            fixer.replace_text(node, convert_to_optional_chain(fixer.source(), right, right)?)
        });
    }
}
