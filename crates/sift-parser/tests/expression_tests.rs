//! Tests for expression parsing

use sift_parser::ast::*;
use sift_parser::parse;

/// Parse `source` and return the arena plus the expression of its first statement.
fn expr(source: &str) -> (Ast, NodeId) {
    let ast = parse(source).unwrap();
    let root = ast.root().unwrap();
    let first = root.children()[0];
    let id = match first.node() {
        Node::ExpressionStatement(stmt) => stmt.expression,
        other => panic!("expected expression statement, got {}", other.type_name()),
    };
    (ast, id)
}

// ============================================================================
// Operators
// ============================================================================

#[test]
fn test_binary_precedence() {
    let (ast, id) = expr("a + b * c;");
    match ast.get(id).node() {
        Node::BinaryExpression(bin) => {
            assert_eq!(bin.operator, BinaryOperator::Add);
            assert!(matches!(
                ast.get(bin.right).node(),
                Node::BinaryExpression(inner) if inner.operator == BinaryOperator::Multiply
            ));
        }
        _ => panic!("Expected binary expression"),
    }
}

#[test]
fn test_exponent_is_right_associative() {
    let (ast, id) = expr("a ** b ** c;");
    let Node::BinaryExpression(bin) = ast.get(id).node() else {
        panic!("Expected binary expression");
    };
    assert_eq!(ast.get(bin.left).node_type(), NodeType::Identifier);
    assert_eq!(ast.get(bin.right).node_type(), NodeType::BinaryExpression);
}

#[test]
fn test_logical_operators() {
    let (ast, id) = expr("a || b && c;");
    let Node::LogicalExpression(outer) = ast.get(id).node() else {
        panic!("Expected logical expression");
    };
    assert_eq!(outer.operator, LogicalOperator::Or);
    assert!(matches!(
        ast.get(outer.right).node(),
        Node::LogicalExpression(inner) if inner.operator == LogicalOperator::And
    ));
}

#[test]
fn test_nullish_coalescing() {
    let (ast, id) = expr("value ?? fallback;");
    assert!(matches!(
        ast.get(id).node(),
        Node::LogicalExpression(l) if l.operator == LogicalOperator::NullishCoalescing
    ));
}

#[test]
fn test_conditional() {
    let (ast, id) = expr("ok ? yes : no;");
    assert_eq!(ast.get(id).node_type(), NodeType::ConditionalExpression);
}

#[test]
fn test_compound_assignment() {
    let (ast, id) = expr("total += 1;");
    assert!(matches!(
        ast.get(id).node(),
        Node::AssignmentExpression(a) if a.operator == AssignmentOperator::AddAssign
    ));
}

#[test]
fn test_unary_and_update() {
    let (ast, id) = expr("!done;");
    assert!(matches!(ast.get(id).node(), Node::UnaryExpression(u) if u.operator == UnaryOperator::Not));
    let (ast, id) = expr("count++;");
    assert!(matches!(ast.get(id).node(), Node::UpdateExpression(u) if !u.prefix));
}

// ============================================================================
// Member access and calls
// ============================================================================

#[test]
fn test_optional_chain_is_wrapped() {
    let (ast, id) = expr("a?.b.c;");
    let Node::ChainExpression(chain) = ast.get(id).node() else {
        panic!("Expected chain expression");
    };
    let Node::MemberExpression(outer) = ast.get(chain.expression).node() else {
        panic!("Expected member expression");
    };
    assert!(!outer.optional);
    assert!(matches!(ast.get(outer.object).node(), Node::MemberExpression(m) if m.optional));
}

#[test]
fn test_optional_call() {
    let (ast, id) = expr("callback?.(value);");
    let Node::ChainExpression(chain) = ast.get(id).node() else {
        panic!("Expected chain expression");
    };
    assert!(matches!(ast.get(chain.expression).node(), Node::CallExpression(c) if c.optional));
}

#[test]
fn test_computed_member() {
    let (ast, id) = expr("items[index];");
    assert!(matches!(ast.get(id).node(), Node::MemberExpression(m) if m.computed));
}

#[test]
fn test_call_with_spread_argument() {
    let (ast, id) = expr("fn(a, ...rest);");
    let Node::CallExpression(call) = ast.get(id).node() else {
        panic!("Expected call expression");
    };
    assert_eq!(call.arguments.len(), 2);
    assert_eq!(ast.get(call.arguments[1]).node_type(), NodeType::SpreadElement);
}

#[test]
fn test_new_expression() {
    let (ast, id) = expr("new Error('boom');");
    let Node::NewExpression(new) = ast.get(id).node() else {
        panic!("Expected new expression");
    };
    assert!(matches!(ast.get(new.callee).node(), Node::Identifier(i) if i.name == "Error"));
    assert_eq!(new.arguments.len(), 1);
}

#[test]
fn test_promise_chain() {
    let (ast, id) = expr("fetch(url).then(parse).catch(report);");
    let Node::CallExpression(call) = ast.get(id).node() else {
        panic!("Expected call expression");
    };
    let Node::MemberExpression(member) = ast.get(call.callee).node() else {
        panic!("Expected member callee");
    };
    assert!(matches!(ast.get(member.property).node(), Node::Identifier(i) if i.name == "catch"));
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_template_literal_parts() {
    let (ast, id) = expr("`hello ${name}, you are ${age + 1}`;");
    let Node::TemplateLiteral(tpl) = ast.get(id).node() else {
        panic!("Expected template literal");
    };
    assert_eq!(tpl.quasis.len(), 3);
    assert_eq!(tpl.expressions.len(), 2);
    assert_eq!(ast.get(tpl.expressions[1]).node_type(), NodeType::BinaryExpression);
}

#[test]
fn test_array_holes() {
    let (ast, id) = expr("[1, , 3];");
    let Node::ArrayExpression(array) = ast.get(id).node() else {
        panic!("Expected array expression");
    };
    assert_eq!(array.elements.len(), 3);
    assert!(array.elements[1].is_none());
}

#[test]
fn test_object_literal_members() {
    let source = "({ a, b: 1, [key]: 2, method() {}, get value() { return 1 }, ...rest });";
    let (ast, id) = expr(source);
    let Node::ParenthesizedExpression(paren) = ast.get(id).node() else {
        panic!("Expected parenthesized expression");
    };
    let Node::ObjectExpression(object) = ast.get(paren.expression).node() else {
        panic!("Expected object expression");
    };
    assert_eq!(object.properties.len(), 6);
    assert!(matches!(ast.get(object.properties[0]).node(), Node::Property(p) if p.shorthand));
    assert!(matches!(ast.get(object.properties[2]).node(), Node::Property(p) if p.computed));
    assert!(matches!(ast.get(object.properties[3]).node(), Node::Property(p) if p.method));
    assert!(matches!(ast.get(object.properties[4]).node(), Node::Property(p) if p.kind == PropertyKind::Get));
    assert_eq!(ast.get(object.properties[5]).node_type(), NodeType::SpreadElement);
}

#[test]
fn test_literal_raw_text_is_kept() {
    let (ast, id) = expr("0xff;");
    let Node::Literal(lit) = ast.get(id).node() else {
        panic!("Expected literal");
    };
    assert_eq!(lit.raw, "0xff");
    assert_eq!(lit.value, LiteralValue::Number(255.0));
}

// ============================================================================
// Functions
// ============================================================================

#[test]
fn test_arrow_with_expression_body() {
    let (ast, id) = expr("(a, b) => a + b;");
    assert!(matches!(
        ast.get(id).node(),
        Node::ArrowFunctionExpression(f) if f.expression && f.params.len() == 2
    ));
}

#[test]
fn test_async_arrow_with_block_body() {
    let (ast, id) = expr("async (x) => { await x; };");
    assert!(matches!(
        ast.get(id).node(),
        Node::ArrowFunctionExpression(f) if f.is_async && !f.expression
    ));
}

#[test]
fn test_single_param_arrow() {
    let (ast, id) = expr("x => x * 2;");
    assert_eq!(ast.get(id).node_type(), NodeType::ArrowFunctionExpression);
}

#[test]
fn test_parenthesized_is_not_arrow() {
    let (ast, id) = expr("(a + b) * c;");
    let Node::BinaryExpression(bin) = ast.get(id).node() else {
        panic!("Expected binary expression");
    };
    assert_eq!(ast.get(bin.left).node_type(), NodeType::ParenthesizedExpression);
}

#[test]
fn test_destructuring_assignment_becomes_pattern() {
    let (ast, id) = expr("[a, b] = [b, a];");
    let Node::AssignmentExpression(assign) = ast.get(id).node() else {
        panic!("Expected assignment");
    };
    assert_eq!(ast.get(assign.left).node_type(), NodeType::ArrayPattern);
    assert_eq!(ast.get(assign.right).node_type(), NodeType::ArrayExpression);
}
