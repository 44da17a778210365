//! Tests for statement parsing

use sift_parser::ast::*;
use sift_parser::parse;

fn statements(source: &str) -> (Ast, Vec<NodeId>) {
    let ast = parse(source).unwrap();
    let body = match ast.root().unwrap().node() {
        Node::Program(program) => program.body.clone(),
        _ => panic!("Expected program"),
    };
    (ast, body)
}

// ============================================================================
// Variable Declarations
// ============================================================================

#[test]
fn test_parse_const_declaration() {
    let (ast, body) = statements("const y = 10;");
    match ast.get(body[0]).node() {
        Node::VariableDeclaration(decl) => {
            assert_eq!(decl.kind, VariableKind::Const);
            assert_eq!(decl.declarations.len(), 1);
            let Node::VariableDeclarator(declarator) = ast.get(decl.declarations[0]).node() else {
                panic!("Expected declarator");
            };
            assert!(matches!(ast.get(declarator.id).node(), Node::Identifier(id) if id.name == "y"));
            assert!(declarator.init.is_some());
        }
        _ => panic!("Expected variable declaration"),
    }
}

#[test]
fn test_parse_multiple_declarators() {
    let (ast, body) = statements("let a = 1, b, c = a;");
    assert!(matches!(
        ast.get(body[0]).node(),
        Node::VariableDeclaration(decl) if decl.declarations.len() == 3
    ));
}

#[test]
fn test_parse_destructuring_declaration() {
    let (ast, body) = statements("const { a, b: renamed = 2, ...others } = source;");
    let Node::VariableDeclaration(decl) = ast.get(body[0]).node() else {
        panic!("Expected variable declaration");
    };
    let Node::VariableDeclarator(declarator) = ast.get(decl.declarations[0]).node() else {
        panic!("Expected declarator");
    };
    let Node::ObjectPattern(pattern) = ast.get(declarator.id).node() else {
        panic!("Expected object pattern");
    };
    assert_eq!(pattern.properties.len(), 3);
    assert_eq!(ast.get(pattern.properties[2]).node_type(), NodeType::RestElement);
}

// ============================================================================
// Control Flow
// ============================================================================

#[test]
fn test_parse_if_else_chain() {
    let (ast, body) = statements("if (a) { x(); } else if (b) { y(); } else { z(); }");
    let Node::IfStatement(outer) = ast.get(body[0]).node() else {
        panic!("Expected if statement");
    };
    let alternate = ast.get(outer.alternate.unwrap());
    assert!(matches!(alternate.node(), Node::IfStatement(inner) if inner.alternate.is_some()));
}

#[test]
fn test_parse_for_of_with_destructuring() {
    let (ast, body) = statements("for (const [key, value] of entries) {}");
    let Node::ForOfStatement(stmt) = ast.get(body[0]).node() else {
        panic!("Expected for-of");
    };
    assert_eq!(ast.get(stmt.left).node_type(), NodeType::VariableDeclaration);
}

#[test]
fn test_parse_for_in_with_expression_left() {
    let (ast, body) = statements("for (key in obj) {}");
    assert_eq!(ast.get(body[0]).node_type(), NodeType::ForInStatement);
}

#[test]
fn test_parse_for_with_in_operator_in_body() {
    let (ast, body) = statements("for (let i = 0; 'x' in o; i++) {}");
    let Node::ForStatement(stmt) = ast.get(body[0]).node() else {
        panic!("Expected for statement");
    };
    assert!(matches!(
        ast.get(stmt.test.unwrap()).node(),
        Node::BinaryExpression(b) if b.operator == BinaryOperator::In
    ));
}

#[test]
fn test_parse_for_await() {
    let (ast, body) = statements("async function f() { for await (const chunk of stream) {} }");
    let found = ast
        .preorder()
        .any(|n| matches!(n.node(), Node::ForOfStatement(f) if f.is_await));
    assert!(found, "{:?}", ast.get(body[0]));
}

#[test]
fn test_parse_catch_without_binding() {
    let (ast, body) = statements("try { risky(); } catch { recover(); }");
    let Node::TryStatement(stmt) = ast.get(body[0]).node() else {
        panic!("Expected try statement");
    };
    let Node::CatchClause(clause) = ast.get(stmt.handler.unwrap()).node() else {
        panic!("Expected catch clause");
    };
    assert!(clause.param.is_none());
}

#[test]
fn test_parse_try_requires_handler() {
    assert!(parse("try { risky(); }").is_err());
}

#[test]
fn test_parse_do_while_and_while() {
    let (ast, body) = statements("do { i++; } while (i < 3)\nwhile (i) i--;");
    assert_eq!(ast.get(body[0]).node_type(), NodeType::DoWhileStatement);
    assert_eq!(ast.get(body[1]).node_type(), NodeType::WhileStatement);
}

// ============================================================================
// Declarations
// ============================================================================

#[test]
fn test_parse_generator_function() {
    let (ast, body) = statements("function* ids() { yield* other(); }");
    assert!(matches!(ast.get(body[0]).node(), Node::FunctionDeclaration(f) if f.generator));
    assert!(ast
        .preorder()
        .any(|n| matches!(n.node(), Node::YieldExpression(y) if y.delegate)));
}

#[test]
fn test_parse_class_constructor_kind() {
    let (ast, _) = statements("class A { constructor(private readonly x: number) {} }");
    let method = ast
        .preorder()
        .find(|n| n.node_type() == NodeType::MethodDefinition)
        .unwrap();
    assert!(matches!(method.node(), Node::MethodDefinition(m) if m.kind == MethodKind::Constructor));
}

#[test]
fn test_parse_export_default_async_function() {
    let (ast, body) = statements("export default async function () {}");
    let Node::ExportDefaultDeclaration(export) = ast.get(body[0]).node() else {
        panic!("Expected default export");
    };
    assert!(matches!(
        ast.get(export.declaration).node(),
        Node::FunctionDeclaration(f) if f.is_async && f.id.is_none()
    ));
}

#[test]
fn test_parse_import_type_and_dynamic_import() {
    let (ast, body) = statements("import type { Config } from './config';\nconst m = await import('./m');");
    assert_eq!(ast.get(body[0]).node_type(), NodeType::ImportDeclaration);
    assert_eq!(ast.get(body[1]).node_type(), NodeType::VariableDeclaration);
}
