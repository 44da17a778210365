//! Tests for TypeScript annotations

use sift_parser::ast::*;
use sift_parser::parse;

fn count(ast: &Ast, ty: NodeType) -> usize {
    ast.preorder().filter(|n| n.node_type() == ty).count()
}

#[test]
fn test_annotated_binding() {
    let ast = parse("let names: string[] = [];").unwrap();
    let ident = ast
        .preorder()
        .find(|n| matches!(n.node(), Node::Identifier(i) if i.name == "names"))
        .unwrap();
    let Node::Identifier(id) = ident.node() else { unreachable!() };
    let annotation = ast.get(id.type_annotation.unwrap());
    let Node::TSTypeAnnotation(ann) = annotation.node() else {
        panic!("Expected type annotation");
    };
    assert_eq!(ast.get(ann.type_annotation).node_type(), NodeType::TSArrayType);
}

#[test]
fn test_as_const() {
    let ast = parse("const modes = ['a', 'b'] as const;").unwrap();
    let as_expr = ast
        .preorder()
        .find(|n| n.node_type() == NodeType::TSAsExpression)
        .unwrap();
    let Node::TSAsExpression(node) = as_expr.node() else { unreachable!() };
    let Node::TSTypeReference(reference) = ast.get(node.type_annotation).node() else {
        panic!("Expected type reference");
    };
    assert!(matches!(ast.get(reference.type_name).node(), Node::Identifier(i) if i.name == "const"));
}

#[test]
fn test_generic_arguments_with_shift_token() {
    let ast = parse("let m: Map<string, Array<number>> = new Map();").unwrap();
    assert_eq!(count(&ast, NodeType::TSTypeReference), 2);
}

#[test]
fn test_union_and_literal_types() {
    let ast = parse("type Mode = 'read' | 'write' | null;").unwrap();
    let alias = ast
        .preorder()
        .find(|n| n.node_type() == NodeType::TSTypeAliasDeclaration)
        .unwrap();
    let Node::TSTypeAliasDeclaration(decl) = alias.node() else { unreachable!() };
    assert!(matches!(ast.get(decl.type_annotation).node(), Node::TSUnionType(u) if u.types.len() == 3));
    assert_eq!(count(&ast, NodeType::TSLiteralType), 2);
}

#[test]
fn test_interface_members() {
    let source = "interface User extends Base {\n  readonly id: number;\n  name?: string;\n  greet(other: User): string;\n}";
    let ast = parse(source).unwrap();
    assert_eq!(count(&ast, NodeType::TSPropertySignature), 2);
    assert_eq!(count(&ast, NodeType::TSMethodSignature), 1);
}

#[test]
fn test_function_types_and_non_null() {
    let ast = parse("const run: (x: number) => void = handler!;").unwrap();
    assert_eq!(count(&ast, NodeType::TSFunctionType), 1);
    assert_eq!(count(&ast, NodeType::TSNonNullExpression), 1);
}

#[test]
fn test_return_type_on_async_function() {
    let ast = parse("async function loadAsync(): Promise<void> {}").unwrap();
    let func = ast
        .preorder()
        .find(|n| n.node_type() == NodeType::FunctionDeclaration)
        .unwrap();
    assert!(matches!(func.node(), Node::FunctionDeclaration(f) if f.is_async && f.return_type.is_some()));
}

#[test]
fn test_abstract_class_with_overloads() {
    let source = "abstract class Shape {\n  abstract area(): number;\n  describe(): string { return 'shape'; }\n}";
    let ast = parse(source).unwrap();
    assert_eq!(count(&ast, NodeType::TSMethodSignature), 1);
    assert_eq!(count(&ast, NodeType::MethodDefinition), 1);
}
