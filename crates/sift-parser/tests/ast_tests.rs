//! Tests for arena invariants: parent links, ranges and traversal order

use sift_parser::ast::*;
use sift_parser::parse;

const SAMPLE: &str = r#"
import { readFile } from "fs";

export async function loadAsync(path: string): Promise<string> {
    try {
        const text = await readFile(path, "utf8");
        return text ?? "";
    } catch (err) {
        throw new Error(`failed: ${path}`);
    }
}

class Cache<T> {
    private items: T[] = [];
    get size() { return this.items.length; }
}

const [first, ...rest] = list.map((x) => x * 2);
"#;

#[test]
fn test_every_non_root_node_has_a_parent() {
    let ast = parse(SAMPLE).unwrap();
    let root = ast.root().unwrap();
    for node in ast.preorder() {
        if node == root {
            assert!(node.parent().is_none());
        } else {
            assert!(node.parent().is_some(), "{:?} has no parent", node.node_type());
        }
    }
}

#[test]
fn test_children_point_back_to_parent() {
    let ast = parse(SAMPLE).unwrap();
    for node in ast.preorder() {
        for child in node.children() {
            assert_eq!(child.parent(), Some(node));
        }
    }
}

#[test]
fn test_child_ranges_nest_inside_parent() {
    let ast = parse(SAMPLE).unwrap();
    for node in ast.preorder() {
        let Some(outer) = node.range() else { continue };
        for child in node.children() {
            let inner = child.range().unwrap();
            assert!(
                outer.start <= inner.start && inner.end <= outer.end,
                "{:?} {:?} escapes {:?} {:?}",
                child.node_type(),
                inner,
                node.node_type(),
                outer
            );
        }
    }
}

#[test]
fn test_preorder_visits_in_source_order() {
    let ast = parse("a; b; c;").unwrap();
    let names: Vec<_> = ast
        .preorder()
        .filter_map(|n| match n.node() {
            Node::Identifier(id) => Some(id.name.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn test_ancestors_walk_to_program() {
    let ast = parse("function f() { if (x) { return y; } }").unwrap();
    let y = ast
        .preorder()
        .find(|n| matches!(n.node(), Node::Identifier(id) if id.name == "y"))
        .unwrap();
    let chain: Vec<_> = y.ancestors().map(|n| n.node_type()).collect();
    assert_eq!(
        chain,
        [
            NodeType::ReturnStatement,
            NodeType::BlockStatement,
            NodeType::IfStatement,
            NodeType::BlockStatement,
            NodeType::FunctionDeclaration,
            NodeType::Program,
        ]
    );
}

#[test]
fn test_node_type_names_round_trip() {
    for ty in NodeType::ALL {
        assert_eq!(NodeType::from_name(ty.as_str()), Some(*ty));
    }
    assert_eq!(NodeType::from_name("JSXElement"), None);
}

#[test]
fn test_ranges_slice_source_text() {
    let source = "let total = price * qty;";
    let ast = parse(source).unwrap();
    let binary = ast
        .preorder()
        .find(|n| n.node_type() == NodeType::BinaryExpression)
        .unwrap();
    assert_eq!(binary.range().unwrap().slice(source), "price * qty");
}
