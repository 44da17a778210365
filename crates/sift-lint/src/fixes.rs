//! Fix synthesizers
//!
//! Pure functions from matched nodes (or their source text) to replacement
//! text. Each produces the replacement for one contiguous span; the rule
//! decides which span.

use regex::{Captures, Regex};
use rustc_hash::FxHashSet;
use sift_parser::ast::*;

use crate::chains::{ArrayMethod, ArrayMethodLoop, ConcatChain, GuardKind};
use crate::classify::*;
use crate::predicates::is_string_literal_operand;
use crate::source::SourceCode;

/// Append `suffix` to the function name in an `async function NAME` header.
///
/// `text` is the header slice (from `async` through the name). Returns `None`
/// when the header does not have that shape.
pub fn add_suffix(text: &str, name: &str, suffix: &str) -> Option<String> {
    let pattern = format!(r"^(async\s+function\s*\*?\s*){}([^\w$]|$)", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    if !re.is_match(text) {
        return None;
    }
    let replaced = re.replace(text, |caps: &Captures<'_>| {
        format!("{}{}{}{}", &caps[1], name, suffix, &caps[2])
    });
    Some(replaced.into_owned())
}

/// `new Error(<argument>)`
pub fn wrap_in_error(argument: &str) -> String {
    format!("new Error({argument})")
}

/// `<left> ?? <right>`
pub fn nullish_coalescing(left: &str, right: &str) -> String {
    format!("{left} ?? {right}")
}

/// `X.includes(a)`, negated when the comparison tested for absence.
pub fn array_includes(receiver: &str, argument: &str, found: bool) -> String {
    let call = format!("{receiver}.includes({argument})");
    if found {
        call
    } else {
        format!("!{call}")
    }
}

/// `<array> as const`
pub fn const_assertion(array: &str) -> String {
    format!("{array} as const")
}

// ============================================================================
// Template literal
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart<'a> {
    /// Raw contents of a string literal, quotes stripped
    Text(&'a str),
    /// Raw contents of a template literal, backticks stripped
    Template(&'a str),
    /// Source text of any other operand
    Expression(&'a str),
}

/// Operands of a `+` chain as template parts.
///
/// Only the left spine is flattened, so `a + (b + "c")` has two operands.
/// Operands before the first string are added numerically at run time and
/// stay together as one expression.
pub fn template_parts<'a>(
    source: &SourceCode<'a>,
    binary: NodeRef<'_>,
) -> Option<Vec<TemplatePart<'a>>> {
    let mut spine = Vec::new();
    let mut current = binary;
    while let Some(expr) = as_binary_expression(current) {
        if expr.operator != BinaryOperator::Add {
            break;
        }
        spine.push(current);
        current = current.get(expr.left);
    }
    if spine.is_empty() {
        return None;
    }
    // Innermost first: spine[k] covers operands[0..=k + 1]
    spine.reverse();

    let mut operands = vec![current];
    for node in &spine {
        operands.push(node.get(as_binary_expression(*node)?.right));
    }

    if !operands.iter().any(|n| is_string_literal_operand(*n)) {
        return None;
    }
    let first_string = operands
        .iter()
        .position(|n| is_string_literal_operand(*n) || is_template_literal(*n))?;
    let mut parts = Vec::with_capacity(operands.len());
    let rest = if first_string >= 2 {
        parts.push(TemplatePart::Expression(source.try_get_text(spine[first_string - 2])?));
        &operands[first_string..]
    } else {
        &operands[..]
    };
    for operand in rest {
        parts.push(template_part(source, *operand)?);
    }

    parts
        .iter()
        .any(|part| matches!(part, TemplatePart::Expression(_)))
        .then_some(parts)
}

fn template_part<'a>(source: &SourceCode<'a>, node: NodeRef<'_>) -> Option<TemplatePart<'a>> {
    let text = source.try_get_text(node)?;
    if as_string_literal(node).is_some() {
        return strip_delimiters(text).map(TemplatePart::Text);
    }
    if is_template_literal(node) {
        return strip_delimiters(text).map(TemplatePart::Template);
    }
    Some(TemplatePart::Expression(text))
}

fn strip_delimiters(text: &str) -> Option<&str> {
    let mut chars = text.chars();
    chars.next()?;
    chars.next_back()?;
    Some(chars.as_str())
}

pub fn template_literal(parts: &[TemplatePart<'_>]) -> String {
    let mut out = String::from("`");
    for part in parts {
        match part {
            TemplatePart::Text(raw) => push_escaped(&mut out, raw),
            TemplatePart::Template(raw) => out.push_str(raw),
            TemplatePart::Expression(expr) => {
                out.push_str("${");
                out.push_str(expr);
                out.push('}');
            }
        }
    }
    out.push('`');
    out
}

fn push_escaped(out: &mut String, raw: &str) {
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '`' => out.push_str("\\`"),
            '$' => out.push_str("\\$"),
            _ => out.push(c),
        }
    }
}

// ============================================================================
// Spread
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadPart<'a> {
    /// Element of an array literal, copied as-is
    Inline(&'a str),
    /// Operand spread with `...`
    Spread(&'a str),
}

pub fn spread_parts<'a>(source: &SourceCode<'a>, chain: &ConcatChain<'_>) -> Option<Vec<SpreadPart<'a>>> {
    let mut parts = Vec::new();
    for operand in &chain.operands {
        match as_array_expression(*operand) {
            Some(array) => {
                for element in array.elements.iter().flatten() {
                    parts.push(SpreadPart::Inline(source.try_get_text(operand.get(*element))?));
                }
            }
            None => parts.push(SpreadPart::Spread(source.try_get_text(*operand)?)),
        }
    }
    Some(parts)
}

pub fn spread_array(parts: &[SpreadPart<'_>]) -> String {
    let items: Vec<String> = parts
        .iter()
        .map(|part| match part {
            SpreadPart::Inline(text) => text.to_string(),
            SpreadPart::Spread(text) => format!("...{text}"),
        })
        .collect();
    format!("[{}]", items.join(", "))
}

// ============================================================================
// Test negation
// ============================================================================

/// Binding strength of a rendered condition, as far as `&&`/`||` care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    /// `??`, `?:`, assignment, sequence, arrow, yield
    Loose,
    Or,
    And,
    Tight,
}

fn precedence_of(node: NodeRef<'_>) -> Precedence {
    match node.node() {
        Node::LogicalExpression(l) => match l.operator {
            LogicalOperator::Or => Precedence::Or,
            LogicalOperator::And => Precedence::And,
            LogicalOperator::NullishCoalescing => Precedence::Loose,
        },
        Node::ConditionalExpression(_)
        | Node::AssignmentExpression(_)
        | Node::SequenceExpression(_)
        | Node::ArrowFunctionExpression(_)
        | Node::YieldExpression(_) => Precedence::Loose,
        _ => Precedence::Tight,
    }
}

/// Source text of nodes with some sub-spans substituted.
pub struct Rendering<'s> {
    source: &'s SourceCode<'s>,
    /// Sorted, non-overlapping `(start, end, text)`
    substitutions: Vec<(usize, usize, String)>,
}

impl<'s> Rendering<'s> {
    pub fn plain(source: &'s SourceCode<'s>) -> Self {
        Self {
            source,
            substitutions: Vec::new(),
        }
    }

    pub fn with_substitutions(
        source: &'s SourceCode<'s>,
        mut substitutions: Vec<(usize, usize, String)>,
    ) -> Self {
        substitutions.sort_by_key(|(start, _, _)| *start);
        Self {
            source,
            substitutions,
        }
    }

    pub fn render(&self, node: NodeRef<'_>) -> Option<String> {
        let range = node.range()?;
        self.source.text().get(range.start..range.end)?;

        let mut out = String::new();
        let mut cursor = range.start;
        for (start, end, text) in &self.substitutions {
            if *start < cursor || *end > range.end {
                continue;
            }
            out.push_str(self.source.slice(cursor, *start));
            out.push_str(text);
            cursor = *end;
        }
        out.push_str(self.source.slice(cursor, range.end));
        Some(out)
    }

    fn render_negated(&self, node: NodeRef<'_>) -> Option<(String, Precedence)> {
        match node.node() {
            Node::UnaryExpression(u) if u.operator == UnaryOperator::Not => {
                let mut inner = node.get(u.argument);
                if let Some(paren) = as_parenthesized_expression(inner) {
                    inner = inner.get(paren.expression);
                }
                Some((self.render(inner)?, precedence_of(inner)))
            }
            Node::BinaryExpression(b) => {
                let flipped = match b.operator {
                    BinaryOperator::StrictEqual => BinaryOperator::StrictNotEqual,
                    BinaryOperator::StrictNotEqual => BinaryOperator::StrictEqual,
                    BinaryOperator::Equal => BinaryOperator::NotEqual,
                    BinaryOperator::NotEqual => BinaryOperator::Equal,
                    _ => return Some((format!("!({})", self.render(node)?), Precedence::Tight)),
                };
                let left = node.get(b.left);
                let right = node.get(b.right);
                let gap = self.source.slice(left.range()?.end, right.range()?.start);
                let gap = gap.replacen(b.operator.as_str(), flipped.as_str(), 1);
                Some((
                    format!("{}{}{}", self.render(left)?, gap, self.render(right)?),
                    Precedence::Tight,
                ))
            }
            Node::Identifier(_)
            | Node::MemberExpression(_)
            | Node::CallExpression(_)
            | Node::ChainExpression(_)
            | Node::ThisExpression
            | Node::Literal(_)
            | Node::ParenthesizedExpression(_) => {
                Some((format!("!{}", self.render(node)?), Precedence::Tight))
            }
            _ => Some((format!("!({})", self.render(node)?), Precedence::Tight)),
        }
    }

    /// Text of the logical negation of `test`.
    pub fn negate(&self, test: NodeRef<'_>) -> Option<String> {
        self.render_negated(test).map(|(text, _)| text)
    }
}

fn parenthesize_below(text: String, precedence: Precedence, floor: Precedence) -> String {
    if precedence < floor {
        format!("({text})")
    } else {
        text
    }
}

// ============================================================================
// Early return
// ============================================================================

/// Which branch of an `if` holds the nested `if` being flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Consequent,
    Alternate,
}

/// Rewrite the last `if` of a function body into a guard clause followed by
/// the flattened branch.
///
/// Returns `None` when a `let`, `const`, class or function declared at the top
/// of the flattened branch would collide with a binding of the enclosing
/// scope once hoisted out of its block.
pub fn early_return(source: &SourceCode<'_>, if_node: NodeRef<'_>, branch: Branch) -> Option<String> {
    let if_stmt = as_if_statement(if_node)?;
    let range = if_node.range()?;
    let indent = source.line_indent(range.start);
    let semi = if uses_semicolons(source, if_node) { ";" } else { "" };
    let consequent = if_node.get(if_stmt.consequent);
    let consequent_body = &as_block_statement(consequent)?.body;

    let flattened = match branch {
        Branch::Consequent => consequent_body,
        Branch::Alternate => &as_block_statement(if_node.get(if_stmt.alternate?))?.body,
    };
    if redeclares_enclosing_binding(if_node, flattened) {
        return None;
    }

    match branch {
        Branch::Consequent => {
            let unit = indent_unit(source, if_node, consequent_body, indent);
            let test = Rendering::plain(source).negate(if_node.get(if_stmt.test))?;
            let guard = format!("if ({test}) {{\n{indent}{unit}return{semi}\n{indent}}}");
            let body = dedented_body(source, if_node, consequent_body, indent, &unit);
            Some(join_guard(guard, body, indent))
        }
        Branch::Alternate => {
            let alternate = if_node.get(if_stmt.alternate?);
            let alternate_body = &as_block_statement(alternate)?.body;
            let unit = indent_unit(source, if_node, alternate_body, indent);
            let test = source.try_get_text(if_node.get(if_stmt.test))?;

            let head = match consequent_body.last() {
                Some(last) => {
                    let last_end = if_node.get(*last).range()?.end;
                    source.slice(consequent.range()?.start, last_end).to_string()
                }
                None => "{".to_string(),
            };
            let guard = format!("if ({test}) {head}\n{indent}{unit}return{semi}\n{indent}}}");
            let body = dedented_body(source, if_node, alternate_body, indent, &unit);
            Some(join_guard(guard, body, indent))
        }
    }
}

fn redeclares_enclosing_binding(if_node: NodeRef<'_>, flattened: &[NodeId]) -> bool {
    let mut moved = Vec::new();
    for id in flattened {
        declared_names(if_node.get(*id), true, &mut moved);
    }
    if moved.is_empty() {
        return false;
    }

    let mut taken = Vec::new();
    if let Some(siblings) = if_node.parent().and_then(statement_list) {
        for id in siblings.iter().filter(|id| **id != if_node.id()) {
            declared_names(if_node.get(*id), false, &mut taken);
        }
    }
    if let Some(function) = if_node.ancestors().find(|n| is_function_like(*n)) {
        let params = match function.node() {
            Node::ArrowFunctionExpression(arrow) => &arrow.params[..],
            _ => as_function(function).map_or(&[][..], |f| &f.params[..]),
        };
        for param in params {
            pattern_names(function.get(*param), &mut taken);
        }
        // `var` hoists to the function scope from any block
        for node in function.descendants() {
            let hoisted = matches!(
                as_variable_declaration(node),
                Some(decl) if decl.kind == VariableKind::Var
            );
            if hoisted && node.ancestors().find(|n| is_function_like(*n)) == Some(function) {
                declared_names(node, false, &mut taken);
            }
        }
    }

    let taken: FxHashSet<&str> = taken.into_iter().collect();
    moved.iter().any(|name| taken.contains(name))
}

fn statement_list(node: NodeRef<'_>) -> Option<&[NodeId]> {
    match node.node() {
        Node::BlockStatement(block) => Some(&block.body[..]),
        Node::Program(program) => Some(&program.body[..]),
        _ => None,
    }
}

/// Names a statement binds in its own scope. With `lexical_only`, `var`
/// declarations are skipped.
fn declared_names<'a>(stmt: NodeRef<'a>, lexical_only: bool, out: &mut Vec<&'a str>) {
    match stmt.node() {
        Node::VariableDeclaration(decl) => {
            if lexical_only && decl.kind == VariableKind::Var {
                return;
            }
            for id in &decl.declarations {
                let declarator = stmt.get(*id);
                if let Some(var) = as_variable_declarator(declarator) {
                    pattern_names(declarator.get(var.id), out);
                }
            }
        }
        Node::FunctionDeclaration(function) => {
            out.extend(function.id.and_then(|id| identifier_name(stmt.get(id))));
        }
        Node::ClassDeclaration(class) => {
            out.extend(class.id.and_then(|id| identifier_name(stmt.get(id))));
        }
        _ => {}
    }
}

fn pattern_names<'a>(pattern: NodeRef<'a>, out: &mut Vec<&'a str>) {
    let mut stack = vec![pattern];
    while let Some(node) = stack.pop() {
        match node.node() {
            Node::Identifier(id) => out.push(id.name.as_str()),
            Node::ObjectPattern(p) => stack.extend(p.properties.iter().map(|id| node.get(*id))),
            Node::Property(p) => stack.push(node.get(p.value)),
            Node::ArrayPattern(p) => {
                stack.extend(p.elements.iter().flatten().map(|id| node.get(*id)));
            }
            Node::AssignmentPattern(p) => stack.push(node.get(p.left)),
            Node::RestElement(p) => stack.push(node.get(p.argument)),
            _ => {}
        }
    }
}

fn join_guard(guard: String, body: String, indent: &str) -> String {
    if body.is_empty() {
        guard
    } else {
        format!("{guard}\n{indent}{body}")
    }
}

/// One level of indentation as used inside `block`.
fn indent_unit(source: &SourceCode<'_>, node: NodeRef<'_>, block: &[NodeId], indent: &str) -> String {
    let first_indent = block
        .first()
        .and_then(|id| node.get(*id).range())
        .map(|r| source.line_indent(r.start));
    match first_indent {
        Some(inner) if inner.len() > indent.len() && inner.starts_with(indent) => {
            inner[indent.len()..].to_string()
        }
        _ if indent.contains('\t') => "\t".to_string(),
        _ => "  ".to_string(),
    }
}

/// The statements of a block, with one `unit` of indentation removed from
/// every continuation line.
fn dedented_body(
    source: &SourceCode<'_>,
    node: NodeRef<'_>,
    block: &[NodeId],
    indent: &str,
    unit: &str,
) -> String {
    let (Some(first), Some(last)) = (block.first(), block.last()) else {
        return String::new();
    };
    let (Some(first), Some(last)) = (node.get(*first).range(), node.get(*last).range()) else {
        return String::new();
    };
    let text = source.slice(first.start, last.end);
    let nested = format!("{indent}{unit}");

    let mut lines = text.split('\n');
    let mut out = lines.next().unwrap_or_default().to_string();
    for line in lines {
        out.push('\n');
        match line.strip_prefix(nested.as_str()) {
            Some(rest) => {
                out.push_str(indent);
                out.push_str(rest);
            }
            None => out.push_str(line),
        }
    }
    out
}

fn uses_semicolons(source: &SourceCode<'_>, node: NodeRef<'_>) -> bool {
    node.descendants().any(|n| {
        matches!(
            n.node(),
            Node::ExpressionStatement(_)
                | Node::ReturnStatement(_)
                | Node::VariableDeclaration(_)
                | Node::ThrowStatement(_)
                | Node::BreakStatement(_)
                | Node::ContinueStatement(_)
        ) && source.get_text(n).ends_with(';')
    })
}

// ============================================================================
// every / some
// ============================================================================

/// `X.every(item => ...)` / `X.some(item => ...)` for a matched loop.
pub fn synthesize_array_method_call(
    source: &SourceCode<'_>,
    matched: &ArrayMethodLoop<'_>,
) -> Option<String> {
    let substitutions = matched
        .element_accesses
        .iter()
        .map(|access| {
            let range = access.range()?;
            Some((range.start, range.end, matched.param.clone()))
        })
        .collect::<Option<Vec<_>>>()?;
    let rendering = Rendering::with_substitutions(source, substitutions);

    // Folded from the last guard backwards; `None` is the constant `false`
    let mut condition: Option<(String, Precedence)> = None;
    for guard in matched.guards.iter().rev() {
        condition = match guard.kind {
            GuardKind::Return => {
                let test = rendering.render(guard.test)?;
                let precedence = precedence_of(guard.test);
                Some(match condition {
                    None => (test, precedence),
                    Some((rest, rest_precedence)) => (
                        format!(
                            "{} || {}",
                            parenthesize_below(test, precedence, Precedence::Or),
                            parenthesize_below(rest, rest_precedence, Precedence::Or)
                        ),
                        Precedence::Or,
                    ),
                })
            }
            GuardKind::Continue => match condition {
                None => None,
                Some((rest, rest_precedence)) => {
                    let (negated, precedence) = rendering.render_negated(guard.test)?;
                    Some((
                        format!(
                            "{} && {}",
                            parenthesize_below(negated, precedence, Precedence::And),
                            parenthesize_below(rest, rest_precedence, Precedence::And)
                        ),
                        Precedence::And,
                    ))
                }
            },
        };
    }
    let (condition, precedence) = condition?;

    let body = match matched.method {
        ArrayMethod::Every => format!("!({condition})"),
        ArrayMethod::Some => parenthesize_below(condition, precedence, Precedence::Or),
    };
    let array = source.try_get_text(matched.array)?;
    Some(format!(
        "{array}.{}({} => {body})",
        matched.method.name(),
        matched.param
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chains::{match_array_method_loop, match_concat_chain, TextEquivalence};

    fn find<'a>(ast: &'a Ast, ty: NodeType) -> NodeRef<'a> {
        ast.preorder().find(|n| n.node_type() == ty).unwrap()
    }

    #[test]
    fn test_add_suffix() {
        assert_eq!(
            add_suffix("async function load", "load", "Async").as_deref(),
            Some("async function loadAsync")
        );
        assert_eq!(
            add_suffix("async  function*  $get", "$get", "Async").as_deref(),
            Some("async  function*  $getAsync")
        );
        assert_eq!(add_suffix("async function loader", "load", "Async"), None);
        assert_eq!(add_suffix("function load", "load", "Async"), None);
    }

    #[test]
    fn test_small_synthesizers() {
        assert_eq!(wrap_in_error("'boom'"), "new Error('boom')");
        assert_eq!(nullish_coalescing("a", "b"), "a ?? b");
        assert_eq!(array_includes("xs", "x", true), "xs.includes(x)");
        assert_eq!(array_includes("xs", "x", false), "!xs.includes(x)");
        assert_eq!(const_assertion("[1, 2]"), "[1, 2] as const");
    }

    fn template(source: &str) -> Option<String> {
        let ast = sift_parser::parse(source).unwrap();
        let code = SourceCode::new(source);
        let binary = find(&ast, NodeType::BinaryExpression);
        template_parts(&code, binary).map(|parts| template_literal(&parts))
    }

    #[test]
    fn test_template_literal_order() {
        assert_eq!(template("'Hello, ' + name + '!';").as_deref(), Some("`Hello, ${name}!`"));
        assert_eq!(template("a + ' items';").as_deref(), Some("`${a} items`"));
    }

    #[test]
    fn test_template_literal_numeric_prefix() {
        assert_eq!(template("a + b + 'px';").as_deref(), Some("`${a + b}px`"));
        assert_eq!(template("1 + 2 + 'x' + y;").as_deref(), Some("`${1 + 2}x${y}`"));
    }

    #[test]
    fn test_template_literal_escaping() {
        assert_eq!(template("'cost: $' + n;").as_deref(), Some("`cost: \\$${n}`"));
        assert_eq!(template("'a`b' + c;").as_deref(), Some("`a\\`b${c}`"));
        assert_eq!(template(r"'it\'s ' + x;").as_deref(), Some(r"`it\'s ${x}`"));
    }

    #[test]
    fn test_template_literal_inlines_templates() {
        assert_eq!(template("`${a}-` + b + 'c';").as_deref(), Some("`${a}-${b}c`"));
    }

    #[test]
    fn test_template_literal_rejections() {
        assert_eq!(template("'a' + 'b';"), None);
        assert_eq!(template("a + b;"), None);
        // Parenthesized operands are opaque
        assert_eq!(template("x + (y + 'z');"), None);
    }

    #[test]
    fn test_spread_array() {
        let source = "a.concat(b).concat([1, 2]);";
        let ast = sift_parser::parse(source).unwrap();
        let code = SourceCode::new(source);
        let chain = match_concat_chain(find(&ast, NodeType::CallExpression)).unwrap();
        let parts = spread_parts(&code, &chain).unwrap();
        assert_eq!(spread_array(&parts), "[...a, ...b, 1, 2]");
    }

    fn negated(source: &str) -> String {
        let ast = sift_parser::parse(source).unwrap();
        let code = SourceCode::new(source);
        let stmt = as_expression_statement(ast.root().unwrap().children()[0]).unwrap();
        Rendering::plain(&code).negate(ast.get(stmt.expression)).unwrap()
    }

    #[test]
    fn test_negation() {
        assert_eq!(negated("!x;"), "x");
        assert_eq!(negated("!(a && b);"), "a && b");
        assert_eq!(negated("a === b;"), "a !== b");
        assert_eq!(negated("a != b;"), "a == b");
        assert_eq!(negated("user.active;"), "!user.active");
        assert_eq!(negated("ready();"), "!ready()");
        assert_eq!(negated("a > b;"), "!(a > b)");
        assert_eq!(negated("a && b;"), "!(a && b)");
    }

    fn flatten(source: &str, branch: Branch) -> Option<String> {
        let ast = sift_parser::parse(source).unwrap();
        let code = SourceCode::new(source);
        early_return(&code, find(&ast, NodeType::IfStatement), branch)
    }

    #[test]
    fn test_early_return_consequent() {
        let source = "function f() {\n  if (user) {\n    if (user.admin) {\n      grant();\n    }\n  }\n}";
        assert_eq!(
            flatten(source, Branch::Consequent).as_deref(),
            Some("if (!user) {\n    return;\n  }\n  if (user.admin) {\n    grant();\n  }")
        );
    }

    #[test]
    fn test_early_return_without_semicolons() {
        let source = "function f() {\n\tif (a === b) {\n\t\tif (c) {\n\t\t\tgo()\n\t\t}\n\t}\n}";
        assert_eq!(
            flatten(source, Branch::Consequent).as_deref(),
            Some("if (a !== b) {\n\t\treturn\n\t}\n\tif (c) {\n\t\tgo()\n\t}")
        );
    }

    #[test]
    fn test_early_return_alternate() {
        let source = "function f() {\n  if (done) {\n    log();\n  } else {\n    if (retry) {\n      again();\n    }\n  }\n}";
        assert_eq!(
            flatten(source, Branch::Alternate).as_deref(),
            Some("if (done) {\n    log();\n    return;\n  }\n  if (retry) {\n    again();\n  }")
        );
    }

    fn loop_call(source: &str, method: ArrayMethod) -> Option<String> {
        let ast = sift_parser::parse(source).unwrap();
        let code = SourceCode::new(source);
        let eq = TextEquivalence::new(&code);
        let matched = match_array_method_loop(find(&ast, NodeType::ForStatement), method, &eq)?;
        synthesize_array_method_call(&code, &matched)
    }

    #[test]
    fn test_every_call() {
        let source = "for (let i = 0; i < arr.length; i++) { if (arr[i] <= 0) { return false } } return true";
        assert_eq!(
            loop_call(source, ArrayMethod::Every).as_deref(),
            Some("arr.every(item => !(item <= 0))")
        );
    }

    #[test]
    fn test_some_call_with_continue_guard() {
        let source = "for (let i = 0; i < users.length; i++) {\n  if (!users[i].active) continue;\n  if (users[i].admin || users[i].owner) return true;\n}\nreturn false;";
        assert_eq!(
            loop_call(source, ArrayMethod::Some).as_deref(),
            Some("users.some(user => user.active && (user.admin || user.owner))")
        );
    }

    #[test]
    fn test_every_call_with_multiple_returns() {
        let source = "for (let i = 0; i < xs.length; i++) { if (xs[i] == null) return false; if (xs[i].bad) return false; } return true;";
        assert_eq!(
            loop_call(source, ArrayMethod::Every).as_deref(),
            Some("xs.every(x => !(x == null || x.bad))")
        );
    }
}
