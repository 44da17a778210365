//! Chain matchers
//!
//! Matchers over member/call chains and loop bodies. Whether two
//! sub-expressions denote the same value is decided by an [`Equivalence`];
//! the shipped [`TextEquivalence`] compares exact source text, so `a.b` and
//! `a .b` differ while two textually equal calls are taken as equal.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use sift_parser::ast::*;

use crate::classify::*;
use crate::predicates::{member_call, static_member_name};
use crate::source::SourceCode;

static RESERVED: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete",
        "do", "else", "enum", "export", "extends", "false", "finally", "for", "function", "if",
        "import", "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw",
        "true", "try", "typeof", "var", "void", "while", "with", "yield", "let", "static", "await",
    ]
    .into_iter()
    .collect()
});

fn is_identifier_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Structural equality of two sub-expressions.
pub trait Equivalence {
    fn equivalent(&self, a: NodeRef<'_>, b: NodeRef<'_>) -> bool;
}

/// Equal when both nodes have a range and their source texts are identical.
pub struct TextEquivalence<'s> {
    source: &'s SourceCode<'s>,
}

impl<'s> TextEquivalence<'s> {
    pub fn new(source: &'s SourceCode<'s>) -> Self {
        Self { source }
    }
}

impl Equivalence for TextEquivalence<'_> {
    fn equivalent(&self, a: NodeRef<'_>, b: NodeRef<'_>) -> bool {
        match (self.source.try_get_text(a), self.source.try_get_text(b)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// Optional chain
// ============================================================================

/// For `L && R`, the member access in `R` that can become `?.`.
///
/// Walks `R`'s object/callee chain left-wards until it finds a member whose
/// object is equivalent to `L`. The walk stops at anything that is not a
/// member or call, so parentheses end it.
pub fn can_convert_to_optional_chain<'a>(
    logical: NodeRef<'a>,
    eq: &dyn Equivalence,
) -> Option<NodeRef<'a>> {
    let expr = as_logical_expression(logical)?;
    if expr.operator != LogicalOperator::And {
        return None;
    }
    let left = logical.get(expr.left);
    find_optional_access(logical.get(expr.right), left, eq)
}

fn find_optional_access<'a>(
    right: NodeRef<'a>,
    left: NodeRef<'_>,
    eq: &dyn Equivalence,
) -> Option<NodeRef<'a>> {
    let mut node = right;
    loop {
        node = match node.node() {
            Node::MemberExpression(member) => {
                let object = node.get(member.object);
                if eq.equivalent(object, left) {
                    // Already optional at this step: nothing to do
                    return (!member.optional).then_some(node);
                }
                object
            }
            Node::CallExpression(call) => node.get(call.callee),
            _ => return None,
        };
    }
}

/// Rebuild `right` with the access at `matched` made optional.
///
/// The separator right after the matched object becomes `?.` (or `?.[`);
/// every wrapper around it keeps its original text.
pub fn convert_to_optional_chain(
    source: &SourceCode<'_>,
    right: NodeRef<'_>,
    matched: NodeRef<'_>,
) -> Option<String> {
    let range = right.range()?;

    // `matched` must sit on the object/callee spine of `right`
    let mut node = right;
    while node.id() != matched.id() {
        node = match node.node() {
            Node::MemberExpression(member) => node.get(member.object),
            Node::CallExpression(call) => node.get(call.callee),
            _ => return None,
        };
    }

    let member = as_member_expression(matched)?;
    let matched_range = matched.range()?;
    let object = matched.get(member.object).range()?;
    let head = source.slice(matched_range.start, object.end);
    let tail = source.slice(object.end, matched_range.end);
    let gap = tail.len() - tail.trim_start().len();
    let (space, rest) = tail.split_at(gap);
    let rebuilt = if let Some(after_dot) = rest.strip_prefix('.') {
        format!("{head}{space}?.{after_dot}")
    } else if rest.starts_with('[') {
        format!("{head}{space}?.{rest}")
    } else {
        return None;
    };

    Some(format!(
        "{}{}{}",
        source.slice(range.start, matched_range.start),
        rebuilt,
        source.slice(matched_range.end, range.end)
    ))
}

// ============================================================================
// Loop → every / some
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayMethod {
    Every,
    Some,
}

impl ArrayMethod {
    pub fn name(self) -> &'static str {
        match self {
            ArrayMethod::Every => "every",
            ArrayMethod::Some => "some",
        }
    }

    /// Value the guards return from inside the loop.
    pub fn guard_value(self) -> bool {
        matches!(self, ArrayMethod::Some)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardKind {
    /// `if (g) return <guard value>`
    Return,
    /// `if (g) continue`
    Continue,
}

#[derive(Debug, Clone, Copy)]
pub struct LoopGuard<'a> {
    pub test: NodeRef<'a>,
    pub kind: GuardKind,
}

/// A counting loop equivalent to `array.every(...)` or `array.some(...)`.
#[derive(Debug, Clone)]
pub struct ArrayMethodLoop<'a> {
    pub method: ArrayMethod,
    pub for_stmt: NodeRef<'a>,
    /// The iterated array (`X` in `i < X.length`)
    pub array: NodeRef<'a>,
    pub counter: &'a str,
    pub guards: Vec<LoopGuard<'a>>,
    /// `X[i]` accesses inside the guards
    pub element_accesses: Vec<NodeRef<'a>>,
    /// The `return` right after the loop
    pub trailing_return: NodeRef<'a>,
    /// Callback parameter name
    pub param: String,
}

pub fn match_array_method_loop<'a>(
    for_stmt: NodeRef<'a>,
    method: ArrayMethod,
    eq: &dyn Equivalence,
) -> Option<ArrayMethodLoop<'a>> {
    let for_loop = as_for_statement(for_stmt)?;

    let counter = loop_counter(for_stmt.get(for_loop.init?))?;
    let array = length_bound(for_stmt.get(for_loop.test?), counter)?;
    if !is_counter_increment(for_stmt.get(for_loop.update?), counter) {
        return None;
    }

    let guards = loop_guards(for_stmt.get(for_loop.body), method.guard_value())?;
    if !guards.iter().any(|g| g.kind == GuardKind::Return) {
        return None;
    }

    let mut element_accesses = Vec::new();
    let mut used_names = FxHashSet::default();
    for guard in &guards {
        for node in guard.test.descendants() {
            match node.node() {
                Node::AwaitExpression(_) | Node::YieldExpression(_) => return None,
                Node::Identifier(id) => {
                    if id.name == counter {
                        element_accesses.push(element_access(node, array, eq)?);
                    } else {
                        used_names.insert(id.name.as_str());
                    }
                }
                _ => {}
            }
        }
    }

    let trailing_return = next_statement(for_stmt)?;
    let returned = as_return_statement(trailing_return)?.argument?;
    if as_boolean_literal(trailing_return.get(returned)) != Some(!method.guard_value()) {
        return None;
    }

    let param = parameter_name(array, counter, &used_names);
    Some(ArrayMethodLoop {
        method,
        for_stmt,
        array,
        counter,
        guards,
        element_accesses,
        trailing_return,
        param,
    })
}

/// `let i = 0` with a single declarator.
fn loop_counter(init: NodeRef<'_>) -> Option<&str> {
    let decl = as_variable_declaration(init)?;
    let [declarator] = decl.declarations.as_slice() else {
        return None;
    };
    let declarator = init.get(*declarator);
    let var = as_variable_declarator(declarator)?;
    if as_number_literal(declarator.get(var.init?)) != Some(0.0) {
        return None;
    }
    identifier_name(declarator.get(var.id))
}

/// `i < X.length`, returning `X`.
fn length_bound<'a>(test: NodeRef<'a>, counter: &str) -> Option<NodeRef<'a>> {
    let binary = as_binary_expression(test)?;
    if binary.operator != BinaryOperator::Less || identifier_name(test.get(binary.left)) != Some(counter) {
        return None;
    }
    let bound = test.get(binary.right);
    let member = as_member_expression(bound)?;
    if member.optional || static_member_name(member, bound)? != "length" {
        return None;
    }
    let array = bound.get(member.object);
    is_static_path(array).then_some(array)
}

/// Identifier, `this`, or a non-computed member chain over them.
pub fn is_static_path(node: NodeRef<'_>) -> bool {
    let mut node = node;
    loop {
        match node.node() {
            Node::Identifier(_) | Node::ThisExpression => return true,
            Node::MemberExpression(member) if !member.computed && !member.optional => {
                node = node.get(member.object);
            }
            _ => return false,
        }
    }
}

/// `i++`, `++i` or `i += 1`.
fn is_counter_increment(update: NodeRef<'_>, counter: &str) -> bool {
    match update.node() {
        Node::UpdateExpression(u) => {
            u.operator == UpdateOperator::Increment
                && identifier_name(update.get(u.argument)) == Some(counter)
        }
        Node::AssignmentExpression(a) => {
            a.operator == AssignmentOperator::AddAssign
                && identifier_name(update.get(a.left)) == Some(counter)
                && as_number_literal(update.get(a.right)) == Some(1.0)
        }
        _ => false,
    }
}

/// The loop body as a list of `if` guards.
fn loop_guards(body: NodeRef<'_>, guard_value: bool) -> Option<Vec<LoopGuard<'_>>> {
    let statements: Vec<NodeRef<'_>> = match as_block_statement(body) {
        Some(block) => block.body.iter().map(|id| body.get(*id)).collect(),
        None => vec![body],
    };
    if statements.is_empty() {
        return None;
    }

    statements
        .into_iter()
        .map(|stmt| {
            let if_stmt = as_if_statement(stmt)?;
            if if_stmt.alternate.is_some() {
                return None;
            }
            let kind = guard_kind(single_statement(stmt.get(if_stmt.consequent))?, guard_value)?;
            Some(LoopGuard {
                test: stmt.get(if_stmt.test),
                kind,
            })
        })
        .collect()
}

/// A bare statement, or the only statement of a block.
fn single_statement(node: NodeRef<'_>) -> Option<NodeRef<'_>> {
    match as_block_statement(node) {
        Some(block) => match block.body.as_slice() {
            [only] => Some(node.get(*only)),
            _ => None,
        },
        None => Some(node),
    }
}

fn guard_kind(stmt: NodeRef<'_>, guard_value: bool) -> Option<GuardKind> {
    match stmt.node() {
        Node::ContinueStatement(c) if c.label.is_none() => Some(GuardKind::Continue),
        Node::ReturnStatement(r) => {
            let value = as_boolean_literal(stmt.get(r.argument?))?;
            (value == guard_value).then_some(GuardKind::Return)
        }
        _ => None,
    }
}

/// For a use of the counter, the enclosing `X[i]`.
fn element_access<'a>(
    counter: NodeRef<'a>,
    array: NodeRef<'_>,
    eq: &dyn Equivalence,
) -> Option<NodeRef<'a>> {
    let parent = counter.parent()?;
    let member = as_member_expression(parent)?;
    let is_index = member.computed && member.property == counter.id();
    (is_index && eq.equivalent(parent.get(member.object), array)).then_some(parent)
}

/// The statement following `stmt` in its enclosing statement list.
pub fn next_statement(stmt: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let parent = stmt.parent()?;
    let siblings = match parent.node() {
        Node::Program(p) => &p.body,
        Node::BlockStatement(b) => &b.body,
        Node::SwitchCase(c) => &c.consequent,
        _ => return None,
    };
    let index = siblings.iter().position(|id| *id == stmt.id())?;
    siblings.get(index + 1).map(|id| parent.get(*id))
}

/// Callback parameter: the singular of the array's name, else the first of
/// a few generic names that is not already used by the guards.
fn parameter_name(array: NodeRef<'_>, counter: &str, used: &FxHashSet<&str>) -> String {
    let last = match array.node() {
        Node::Identifier(id) => Some(id.name.as_str()),
        Node::MemberExpression(member) => static_member_name(member, array),
        _ => None,
    };
    let free = |name: &str| {
        is_identifier_name(name) && !RESERVED.contains(name) && name != counter && !used.contains(name)
    };
    last.and_then(singularize)
        .filter(|name| free(name))
        .or_else(|| {
            ["item", "element", "entry"]
                .into_iter()
                .find(|name| free(*name))
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("{counter}Item"))
}

/// English singular of a plural identifier: `users` → `user`,
/// `categories` → `category`, `boxes` → `box`. `None` if not plural.
pub fn singularize(word: &str) -> Option<String> {
    if word.len() > 3 {
        if let Some(stem) = word.strip_suffix("ies") {
            return Some(format!("{stem}y"));
        }
    }
    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if word.len() > suffix.len() && word.ends_with(suffix) {
            return Some(word[..word.len() - 2].to_string());
        }
    }
    if word.len() > 1 && word.ends_with('s') && !word.ends_with("ss") {
        return Some(word[..word.len() - 1].to_string());
    }
    None
}

// ============================================================================
// concat → spread
// ============================================================================

/// Operands of `a.concat(b).concat(c, d)`: the receiver, then every argument
/// in call order.
#[derive(Debug, Clone)]
pub struct ConcatChain<'a> {
    pub operands: Vec<NodeRef<'a>>,
}

fn concat_receiver(call: NodeRef<'_>) -> Option<NodeRef<'_>> {
    let expr = as_call_expression(call)?;
    let callee = call.get(expr.callee);
    let member = as_member_expression(callee)?;
    if expr.optional || member.optional {
        return None;
    }
    member_call(call, "concat")
}

pub fn match_concat_chain(call: NodeRef<'_>) -> Option<ConcatChain<'_>> {
    concat_receiver(call)?;

    // Only the outermost call of a chain reports
    if let Some(parent) = call.parent() {
        if let Some(grandparent) = parent.parent() {
            if concat_receiver(grandparent).is_some_and(|receiver| receiver == call) {
                return None;
            }
        }
    }

    let mut groups = Vec::new();
    let mut current = call;
    let receiver = loop {
        let receiver = concat_receiver(current)?;
        let args = &as_call_expression(current)?.arguments;
        groups.push(args.iter().map(|id| current.get(*id)).collect::<Vec<_>>());
        if concat_receiver(receiver).is_some() {
            current = receiver;
        } else {
            break receiver;
        }
    };

    let mut operands = vec![receiver];
    operands.extend(groups.into_iter().rev().flatten());
    operands
        .iter()
        .all(|operand| is_spreadable(*operand))
        .then_some(ConcatChain { operands })
}

fn is_spreadable(node: NodeRef<'_>) -> bool {
    match node.node() {
        Node::ArrayExpression(array) => array.elements.iter().all(Option::is_some),
        _ => is_static_path(node),
    }
}
