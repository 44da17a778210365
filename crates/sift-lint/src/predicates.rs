//! Structural predicates
//!
//! Each predicate answers one question about a node from its own shape and
//! its direct children. The only exception is [`is_awaited`], which walks the
//! parent chain.

use rustc_hash::FxHashSet;
use sift_parser::ast::*;

use crate::classify::*;

/// Property name of a non-computed member access, `obj.name`.
pub fn static_member_name<'a>(member: &'a MemberExpression, node: NodeRef<'a>) -> Option<&'a str> {
    if member.computed {
        return None;
    }
    identifier_name(node.get(member.property))
}

/// Match `<object>.<property>(...)` and return the object.
pub fn member_call<'a>(call: NodeRef<'a>, property: &str) -> Option<NodeRef<'a>> {
    let call_expr = as_call_expression(call)?;
    let callee = call.get(call_expr.callee);
    let member = as_member_expression(callee)?;
    (static_member_name(member, callee)? == property).then(|| callee.get(member.object))
}

/// Named async function declaration whose name lacks `suffix`.
pub fn is_async_without_suffix(node: NodeRef<'_>, suffix: &str) -> bool {
    let Some(function) = as_function_declaration(node) else {
        return false;
    };
    if !function.is_async {
        return false;
    }
    let Some(name) = function.id.and_then(|id| identifier_name(node.get(id))) else {
        return false;
    };
    !name.is_empty() && !name.ends_with(suffix)
}

/// `<namespace>.<operation>(...)` for a fallible file operation.
pub fn requires_error_handling(
    call: NodeRef<'_>,
    namespace: &str,
    operations: &FxHashSet<String>,
) -> bool {
    let Some(call_expr) = as_call_expression(call) else {
        return false;
    };
    let callee = call.get(call_expr.callee);
    let Some(member) = as_member_expression(callee) else {
        return false;
    };
    let Some(operation) = static_member_name(member, callee) else {
        return false;
    };
    identifier_name(callee.get(member.object)) == Some(namespace) && operations.contains(operation)
}

/// Whether any ancestor is an `await` expression.
pub fn is_awaited(node: NodeRef<'_>) -> bool {
    node.ancestors().any(is_await_expression)
}

/// Call that is the receiver of `.catch(...)` or `.then(...)`.
pub fn is_handled_by_catch(call: NodeRef<'_>) -> bool {
    let Some(parent) = call.parent() else {
        return false;
    };
    let Some(member) = as_member_expression(parent) else {
        return false;
    };
    if member.object != call.id() {
        return false;
    }
    let handles = matches!(static_member_name(member, parent), Some("catch" | "then"));
    handles
        && parent
            .parent()
            .and_then(as_call_expression)
            .is_some_and(|outer| outer.callee == parent.id())
}

/// `a || ""`, `a || 0` or `a || false`.
pub fn should_use_nullish_coalescing(node: NodeRef<'_>) -> bool {
    let Some(logical) = as_logical_expression(node) else {
        return false;
    };
    if logical.operator != LogicalOperator::Or {
        return false;
    }
    let right = node.get(logical.right);
    match as_literal(right).map(|lit| &lit.value) {
        Some(LiteralValue::String(s)) => s.is_empty(),
        Some(LiteralValue::Number(n)) => *n == 0.0,
        Some(LiteralValue::Boolean(b)) => !*b,
        _ => false,
    }
}

/// Whether `node` is the operand of `as const`.
pub fn has_const_assertion(node: NodeRef<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    let Some(assertion) = as_ts_as_expression(parent) else {
        return false;
    };
    if assertion.expression != node.id() {
        return false;
    }
    let target = parent.get(assertion.type_annotation);
    let Some(reference) = as_ts_type_reference(target) else {
        return false;
    };
    let mut name = target.get(reference.type_name);
    if let Some(qualified) = as_ts_qualified_name(name) {
        name = name.get(qualified.right);
    }
    identifier_name(name) == Some("const")
}

/// Returned directly, or returned through a type assertion.
pub fn is_in_return_statement(node: NodeRef<'_>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    if is_return_statement(parent) {
        return true;
    }
    is_ts_as_expression(parent) && parent.parent().is_some_and(is_return_statement)
}

/// `new E(...)` or `E(...)` for a known Error constructor.
pub fn is_error_construction(node: NodeRef<'_>, error_classes: &FxHashSet<String>) -> bool {
    let callee = match node.node() {
        Node::NewExpression(new) => new.callee,
        Node::CallExpression(call) => call.callee,
        _ => return false,
    };
    identifier_name(node.get(callee)).is_some_and(|name| error_classes.contains(name))
}

/// `Promise.reject(...)`
pub fn is_promise_reject_call(call: NodeRef<'_>) -> bool {
    member_call(call, "reject").is_some_and(|object| identifier_name(object) == Some("Promise"))
}

/// A string literal, as one side of a `+`.
pub fn is_string_literal_operand(node: NodeRef<'_>) -> bool {
    as_string_literal(node).is_some()
}

/// An `indexOf` comparison that can be expressed with `includes`.
#[derive(Debug, Clone, Copy)]
pub struct IndexOfComparison<'a> {
    /// Receiver of `indexOf`.
    pub receiver: NodeRef<'a>,
    /// The searched value.
    pub argument: NodeRef<'a>,
    /// True when the comparison means "found".
    pub found: bool,
}

fn is_minus_one(node: NodeRef<'_>) -> bool {
    if as_number_literal(node) == Some(-1.0) {
        return true;
    }
    as_unary_expression(node).is_some_and(|unary| {
        unary.operator == UnaryOperator::Minus && as_number_literal(node.get(unary.argument)) == Some(1.0)
    })
}

/// `x.indexOf(a) !== -1`, `x.indexOf(a) >= 0` and their negations.
pub fn is_index_of_comparison(binary: NodeRef<'_>) -> Option<IndexOfComparison<'_>> {
    let expr = as_binary_expression(binary)?;
    let left = binary.get(expr.left);
    let receiver = member_call(left, "indexOf")?;
    let call = as_call_expression(left)?;
    if call.optional || call.arguments.len() != 1 {
        return None;
    }
    let argument = left.get(call.arguments[0]);
    if is_spread_element(argument) {
        return None;
    }

    let right = binary.get(expr.right);
    let found = if is_minus_one(right) {
        match expr.operator {
            BinaryOperator::StrictNotEqual | BinaryOperator::NotEqual | BinaryOperator::Greater => true,
            BinaryOperator::StrictEqual | BinaryOperator::Equal => false,
            _ => return None,
        }
    } else if as_number_literal(right) == Some(0.0) {
        match expr.operator {
            BinaryOperator::GreaterEqual => true,
            BinaryOperator::Less => false,
            _ => return None,
        }
    } else {
        return None;
    };

    Some(IndexOfComparison {
        receiver,
        argument,
        found,
    })
}

fn is_jump(node: NodeRef<'_>) -> bool {
    matches!(
        node.node(),
        Node::ReturnStatement(_)
            | Node::ThrowStatement(_)
            | Node::ContinueStatement(_)
            | Node::BreakStatement(_)
    )
}

/// `if (c) return;` style statement: no else, and the consequent only jumps.
pub fn is_guard_clause(stmt: NodeRef<'_>) -> bool {
    let Some(if_stmt) = as_if_statement(stmt) else {
        return false;
    };
    if if_stmt.alternate.is_some() {
        return false;
    }
    let consequent = stmt.get(if_stmt.consequent);
    if is_jump(consequent) {
        return true;
    }
    as_block_statement(consequent)
        .is_some_and(|block| block.body.len() == 1 && is_jump(consequent.get(block.body[0])))
}
