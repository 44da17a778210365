//! Statement and declaration nodes

use super::NodeId;

/// Root of a parsed file.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Vec<NodeId>,
}

/// `expr;`
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: NodeId,
}

/// `{ ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub body: Vec<NodeId>,
}

/// Declaration keyword of a [`VariableDeclaration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

/// `let a = 1, b;`
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    /// Binding pattern
    pub id: NodeId,
    pub init: Option<NodeId>,
}

/// Shared payload of `FunctionDeclaration` and `FunctionExpression`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub id: Option<NodeId>,
    pub params: Vec<NodeId>,
    /// Always a `BlockStatement`
    pub body: NodeId,
    pub is_async: bool,
    pub generator: bool,
    /// `TSTypeAnnotation`
    pub return_type: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub argument: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub test: NodeId,
    pub consequent: NodeId,
    pub alternate: Option<NodeId>,
}

/// `for (init; test; update) body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<NodeId>,
    pub test: Option<NodeId>,
    pub update: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForInStatement {
    pub left: NodeId,
    pub right: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForOfStatement {
    pub left: NodeId,
    pub right: NodeId,
    pub body: NodeId,
    /// `for await (...)`
    pub is_await: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub test: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub body: NodeId,
    pub test: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub label: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub label: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledStatement {
    pub label: NodeId,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub argument: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub block: NodeId,
    pub handler: Option<NodeId>,
    pub finalizer: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub param: Option<NodeId>,
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub discriminant: NodeId,
    pub cases: Vec<NodeId>,
}

/// `case test:` or `default:` when `test` is `None`
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub test: Option<NodeId>,
    pub consequent: Vec<NodeId>,
}

/// Shared payload of `ClassDeclaration` and `ClassExpression`.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub id: Option<NodeId>,
    pub super_class: Option<NodeId>,
    /// `ClassBody`
    pub body: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassBody {
    pub body: Vec<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    Constructor,
    Method,
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDefinition {
    pub key: NodeId,
    /// `FunctionExpression`
    pub value: NodeId,
    pub kind: MethodKind,
    pub computed: bool,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDefinition {
    pub key: NodeId,
    pub value: Option<NodeId>,
    pub computed: bool,
    pub is_static: bool,
    pub type_annotation: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    pub specifiers: Vec<NodeId>,
    /// String `Literal`
    pub source: NodeId,
}

/// `{ imported as local }`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    pub imported: NodeId,
    pub local: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDefaultSpecifier {
    pub local: NodeId,
}

/// `* as local`
#[derive(Debug, Clone, PartialEq)]
pub struct ImportNamespaceSpecifier {
    pub local: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportNamedDeclaration {
    pub declaration: Option<NodeId>,
    pub specifiers: Vec<NodeId>,
    pub source: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportDefaultDeclaration {
    pub declaration: NodeId,
}

/// `export * [as exported] from source`
#[derive(Debug, Clone, PartialEq)]
pub struct ExportAllDeclaration {
    pub exported: Option<NodeId>,
    pub source: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportSpecifier {
    pub local: NodeId,
    pub exported: NodeId,
}
