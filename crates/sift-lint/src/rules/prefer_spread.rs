//! Rule: prefer-spread (S3006)
//!
//! `a.concat(b, [1, 2])` → `[...a, ...b, 1, 2]`.

use sift_parser::{NodeRef, NodeType};

use crate::chains::match_concat_chain;
use crate::fixes::{spread_array, spread_parts};
use crate::rule::*;

pub struct PreferSpread;

static META: RuleMeta = RuleMeta {
    name: "prefer-spread",
    code: "S3006",
    description: "Prefer array spread over '.concat()'",
    category: Category::BestPractice,
    default_severity: Severity::Warn,
    fixable: true,
};

impl LintRule for PreferSpread {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[NodeType::CallExpression]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        let Some(chain) = match_concat_chain(node) else {
            return;
        };
        ctx.report_with_fix(node, "Use array spread instead of '.concat()'", |fixer| {
            let parts = spread_parts(fixer.source(), &chain)?;
            fixer.replace_text(node, spread_array(&parts))
        });
    }
}
