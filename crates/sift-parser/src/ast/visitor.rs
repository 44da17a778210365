//! Child enumeration and pre-order traversal
//!
//! [`children`] is the single place that knows the child fields of every node;
//! parent linking and the pre-order walk are both built on it.
//!
//! # Example
//!
//! ```rust
//! use sift_parser::ast::NodeType;
//!
//! let ast = sift_parser::parse("let x = a + b;").unwrap();
//! let identifiers = ast
//!     .preorder()
//!     .filter(|node| node.node_type() == NodeType::Identifier)
//!     .count();
//! assert_eq!(identifiers, 3);
//! ```

use super::*;

/// Direct children of a node, in source order.
pub fn children(node: &Node) -> Vec<NodeId> {
    let mut out = Vec::new();
    match node {
        Node::Program(n) => out.extend(&n.body),
        Node::ExpressionStatement(n) => out.push(n.expression),
        Node::BlockStatement(n) => out.extend(&n.body),
        Node::VariableDeclaration(n) => out.extend(&n.declarations),
        Node::VariableDeclarator(n) => {
            out.push(n.id);
            out.extend(n.init);
        }
        Node::FunctionDeclaration(f) | Node::FunctionExpression(f) => {
            out.extend(f.id);
            out.extend(&f.params);
            out.extend(f.return_type);
            out.push(f.body);
        }
        Node::ReturnStatement(n) => out.extend(n.argument),
        Node::IfStatement(n) => {
            out.push(n.test);
            out.push(n.consequent);
            out.extend(n.alternate);
        }
        Node::ForStatement(n) => {
            out.extend(n.init);
            out.extend(n.test);
            out.extend(n.update);
            out.push(n.body);
        }
        Node::ForInStatement(n) => out.extend([n.left, n.right, n.body]),
        Node::ForOfStatement(n) => out.extend([n.left, n.right, n.body]),
        Node::WhileStatement(n) => out.extend([n.test, n.body]),
        Node::DoWhileStatement(n) => out.extend([n.body, n.test]),
        Node::BreakStatement(n) => out.extend(n.label),
        Node::ContinueStatement(n) => out.extend(n.label),
        Node::LabeledStatement(n) => out.extend([n.label, n.body]),
        Node::ThrowStatement(n) => out.push(n.argument),
        Node::TryStatement(n) => {
            out.push(n.block);
            out.extend(n.handler);
            out.extend(n.finalizer);
        }
        Node::CatchClause(n) => {
            out.extend(n.param);
            out.push(n.body);
        }
        Node::SwitchStatement(n) => {
            out.push(n.discriminant);
            out.extend(&n.cases);
        }
        Node::SwitchCase(n) => {
            out.extend(n.test);
            out.extend(&n.consequent);
        }
        Node::ClassDeclaration(c) | Node::ClassExpression(c) => {
            out.extend(c.id);
            out.extend(c.super_class);
            out.push(c.body);
        }
        Node::ClassBody(n) => out.extend(&n.body),
        Node::MethodDefinition(n) => out.extend([n.key, n.value]),
        Node::PropertyDefinition(n) => {
            out.push(n.key);
            out.extend(n.type_annotation);
            out.extend(n.value);
        }
        Node::ImportDeclaration(n) => {
            out.extend(&n.specifiers);
            out.push(n.source);
        }
        Node::ImportSpecifier(n) => {
            out.push(n.imported);
            if n.local != n.imported {
                out.push(n.local);
            }
        }
        Node::ImportDefaultSpecifier(n) => out.push(n.local),
        Node::ImportNamespaceSpecifier(n) => out.push(n.local),
        Node::ExportNamedDeclaration(n) => {
            out.extend(n.declaration);
            out.extend(&n.specifiers);
            out.extend(n.source);
        }
        Node::ExportDefaultDeclaration(n) => out.push(n.declaration),
        Node::ExportAllDeclaration(n) => {
            out.extend(n.exported);
            out.push(n.source);
        }
        Node::ExportSpecifier(n) => {
            out.push(n.local);
            if n.exported != n.local {
                out.push(n.exported);
            }
        }
        Node::Identifier(n) => out.extend(n.type_annotation),
        Node::TemplateLiteral(n) => {
            // Interleave quasis and expressions to keep source order
            for (i, quasi) in n.quasis.iter().enumerate() {
                out.push(*quasi);
                if let Some(expr) = n.expressions.get(i) {
                    out.push(*expr);
                }
            }
        }
        Node::TaggedTemplateExpression(n) => out.extend([n.tag, n.quasi]),
        Node::ArrayExpression(n) => out.extend(n.elements.iter().flatten()),
        Node::ObjectExpression(n) => out.extend(&n.properties),
        Node::Property(n) => {
            if n.shorthand && n.key == n.value {
                out.push(n.key);
            } else if n.shorthand {
                // `{ a = 1 }`: the value pattern contains the key
                out.push(n.value);
            } else {
                out.extend([n.key, n.value]);
            }
        }
        Node::SpreadElement(n) => out.push(n.argument),
        Node::ArrowFunctionExpression(n) => {
            out.extend(&n.params);
            out.extend(n.return_type);
            out.push(n.body);
        }
        Node::UnaryExpression(n) => out.push(n.argument),
        Node::UpdateExpression(n) => out.push(n.argument),
        Node::BinaryExpression(n) => out.extend([n.left, n.right]),
        Node::LogicalExpression(n) => out.extend([n.left, n.right]),
        Node::AssignmentExpression(n) => out.extend([n.left, n.right]),
        Node::ConditionalExpression(n) => out.extend([n.test, n.consequent, n.alternate]),
        Node::CallExpression(n) => {
            out.push(n.callee);
            out.extend(&n.arguments);
        }
        Node::NewExpression(n) => {
            out.push(n.callee);
            out.extend(&n.arguments);
        }
        Node::MemberExpression(n) => out.extend([n.object, n.property]),
        Node::ChainExpression(n) => out.push(n.expression),
        Node::SequenceExpression(n) => out.extend(&n.expressions),
        Node::AwaitExpression(n) => out.push(n.argument),
        Node::YieldExpression(n) => out.extend(n.argument),
        Node::ParenthesizedExpression(n) => out.push(n.expression),
        Node::ArrayPattern(n) => {
            out.extend(n.elements.iter().flatten());
            out.extend(n.type_annotation);
        }
        Node::ObjectPattern(n) => {
            out.extend(&n.properties);
            out.extend(n.type_annotation);
        }
        Node::AssignmentPattern(n) => out.extend([n.left, n.right]),
        Node::RestElement(n) => {
            out.push(n.argument);
            out.extend(n.type_annotation);
        }
        Node::TSAsExpression(n) => out.extend([n.expression, n.type_annotation]),
        Node::TSNonNullExpression(n) => out.push(n.expression),
        Node::TSTypeAnnotation(n) => out.push(n.type_annotation),
        Node::TSTypeReference(n) => {
            out.push(n.type_name);
            out.extend(&n.type_arguments);
        }
        Node::TSQualifiedName(n) => out.extend([n.left, n.right]),
        Node::TSArrayType(n) => out.push(n.element_type),
        Node::TSIndexedAccessType(n) => out.extend([n.object_type, n.index_type]),
        Node::TSUnionType(n) => out.extend(&n.types),
        Node::TSIntersectionType(n) => out.extend(&n.types),
        Node::TSTupleType(n) => out.extend(&n.element_types),
        Node::TSLiteralType(n) => out.push(n.literal),
        Node::TSTypeLiteral(n) => out.extend(&n.members),
        Node::TSPropertySignature(n) => {
            out.push(n.key);
            out.extend(n.type_annotation);
        }
        Node::TSMethodSignature(n) => {
            out.push(n.key);
            out.extend(&n.params);
            out.extend(n.return_type);
        }
        Node::TSFunctionType(n) => {
            out.extend(&n.params);
            out.push(n.return_type);
        }
        Node::TSTypeQuery(n) => out.push(n.expr_name),
        Node::TSTypeOperator(n) => out.push(n.type_annotation),
        Node::TSDeclareFunction(n) => {
            out.extend(n.id);
            out.extend(&n.params);
            out.extend(n.return_type);
        }
        Node::TSTypeAliasDeclaration(n) => out.extend([n.id, n.type_annotation]),
        Node::TSInterfaceDeclaration(n) => {
            out.push(n.id);
            out.extend(&n.extends);
            out.extend(&n.body);
        }
        Node::EmptyStatement
        | Node::DebuggerStatement
        | Node::Literal(_)
        | Node::TemplateElement(_)
        | Node::ThisExpression
        | Node::Super
        | Node::TSStringKeyword
        | Node::TSNumberKeyword
        | Node::TSBooleanKeyword
        | Node::TSAnyKeyword
        | Node::TSUnknownKeyword
        | Node::TSVoidKeyword
        | Node::TSNeverKeyword
        | Node::TSNullKeyword
        | Node::TSUndefinedKeyword
        | Node::TSObjectKeyword
        | Node::TSSymbolKeyword
        | Node::TSBigIntKeyword
        | Node::Unknown { .. } => {}
    }
    out
}

/// Depth-first pre-order iterator over an [`Ast`].
pub struct Preorder<'a> {
    ast: &'a Ast,
    stack: Vec<NodeId>,
    seen: Vec<bool>,
}

impl<'a> Preorder<'a> {
    pub fn new(ast: &'a Ast, start: Option<NodeId>) -> Self {
        Self {
            ast,
            stack: start.into_iter().collect(),
            seen: vec![false; ast.len()],
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let id = self.stack.pop()?;
            // Skip dangling ids and nodes reached twice
            match self.seen.get_mut(id.index()) {
                Some(seen) if !*seen => *seen = true,
                _ => continue,
            }
            let node = self.ast.get(id);
            self.stack.extend(children(node.node()).into_iter().rev());
            return Some(node);
        }
    }
}
