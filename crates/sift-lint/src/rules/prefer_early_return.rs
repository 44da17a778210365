//! Rule: prefer-early-return (S2003)
//!
//! A function whose body ends in an `if` wrapping another `if` can invert the
//! outer test into a guard clause and drop one nesting level. Only the first
//! top-level `if` of each function is inspected.

use sift_parser::{Node, NodeRef, NodeType};

use crate::classify::*;
use crate::fixes::{early_return, Branch};
use crate::predicates::is_guard_clause;
use crate::rule::*;

pub struct PreferEarlyReturn;

static META: RuleMeta = RuleMeta {
    name: "prefer-early-return",
    code: "S2003",
    description: "Prefer guard clauses over nested if statements",
    category: Category::Style,
    default_severity: Severity::Warn,
    fixable: true,
};

fn function_body(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let body = match node.node() {
        Node::FunctionDeclaration(f) | Node::FunctionExpression(f) => f.body,
        Node::ArrowFunctionExpression(arrow) => arrow.body,
        _ => return None,
    };
    let body = node.get(body);
    is_block_statement(body).then_some(body)
}

/// Whether a block lists an `if` among its own statements.
fn directly_contains_if(block: NodeRef<'_>) -> bool {
    as_block_statement(block)
        .is_some_and(|b| b.body.iter().any(|id| is_if_statement(block.get(*id))))
}

/// The branch of `if_node` that holds a nested `if`, if any.
fn nested_branch(if_node: NodeRef<'_>) -> Option<Branch> {
    let if_stmt = as_if_statement(if_node)?;
    let consequent = if_node.get(if_stmt.consequent);
    match if_stmt.alternate {
        None => directly_contains_if(consequent).then_some(Branch::Consequent),
        Some(alternate) => {
            let alternate = if_node.get(alternate);
            (is_block_statement(consequent) && directly_contains_if(alternate))
                .then_some(Branch::Alternate)
        }
    }
}

impl LintRule for PreferEarlyReturn {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn listeners(&self) -> &'static [NodeType] {
        &[
            NodeType::FunctionDeclaration,
            NodeType::FunctionExpression,
            NodeType::ArrowFunctionExpression,
        ]
    }

    fn check(&self, node: NodeRef<'_>, ctx: &mut RuleContext<'_>) {
        let Some(body) = function_body(node) else {
            return;
        };
        let Some(block) = as_block_statement(body) else {
            return;
        };
        let Some(if_node) = block.body.iter().map(|id| body.get(*id)).find(|n| is_if_statement(*n)) else {
            return;
        };
        if is_guard_clause(if_node) || block.body.last() != Some(&if_node.id()) {
            return;
        }
        let Some(branch) = nested_branch(if_node) else {
            return;
        };

        ctx.report_with_fix(
            if_node,
            "Invert this condition and return early to reduce nesting",
            |fixer| fixer.replace_text(if_node, early_return(fixer.source(), if_node, branch)?),
        );
    }
}
