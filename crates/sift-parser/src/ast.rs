//! Arena AST for JavaScript/TypeScript programs
//!
//! Nodes live in a flat [`Ast`] arena and refer to their children by
//! [`NodeId`]. Every entry carries an optional source range and a parent
//! back-reference that [`Ast::link_parents`] fills in after parsing, so read-only
//! consumers can walk both down and up through a [`NodeRef`] handle.

pub mod expression;
pub mod pattern;
pub mod statement;
pub mod types;
pub mod visitor;

use std::fmt;

pub use expression::*;
pub use pattern::*;
pub use statement::*;
pub use types::*;
pub use visitor::Preorder;

use crate::token::Span;

/// Index of a node in its [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One arena slot.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeEntry {
    pub node: Node,
    /// Source range; hosts may leave it out
    pub range: Option<Span>,
    /// Non-owning back-reference, set by [`Ast::link_parents`]
    pub parent: Option<NodeId>,
}

/// Any syntax node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Statements and declarations
    Program(Program),
    ExpressionStatement(ExpressionStatement),
    BlockStatement(BlockStatement),
    EmptyStatement,
    DebuggerStatement,
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    FunctionDeclaration(Function),
    ReturnStatement(ReturnStatement),
    IfStatement(IfStatement),
    ForStatement(ForStatement),
    ForInStatement(ForInStatement),
    ForOfStatement(ForOfStatement),
    WhileStatement(WhileStatement),
    DoWhileStatement(DoWhileStatement),
    BreakStatement(BreakStatement),
    ContinueStatement(ContinueStatement),
    LabeledStatement(LabeledStatement),
    ThrowStatement(ThrowStatement),
    TryStatement(TryStatement),
    CatchClause(CatchClause),
    SwitchStatement(SwitchStatement),
    SwitchCase(SwitchCase),
    ClassDeclaration(Class),
    ClassExpression(Class),
    ClassBody(ClassBody),
    MethodDefinition(MethodDefinition),
    PropertyDefinition(PropertyDefinition),
    ImportDeclaration(ImportDeclaration),
    ImportSpecifier(ImportSpecifier),
    ImportDefaultSpecifier(ImportDefaultSpecifier),
    ImportNamespaceSpecifier(ImportNamespaceSpecifier),
    ExportNamedDeclaration(ExportNamedDeclaration),
    ExportDefaultDeclaration(ExportDefaultDeclaration),
    ExportAllDeclaration(ExportAllDeclaration),
    ExportSpecifier(ExportSpecifier),

    // Expressions
    Identifier(Identifier),
    Literal(Literal),
    TemplateLiteral(TemplateLiteral),
    TemplateElement(TemplateElement),
    TaggedTemplateExpression(TaggedTemplateExpression),
    ArrayExpression(ArrayExpression),
    ObjectExpression(ObjectExpression),
    Property(Property),
    SpreadElement(SpreadElement),
    FunctionExpression(Function),
    ArrowFunctionExpression(ArrowFunctionExpression),
    UnaryExpression(UnaryExpression),
    UpdateExpression(UpdateExpression),
    BinaryExpression(BinaryExpression),
    LogicalExpression(LogicalExpression),
    AssignmentExpression(AssignmentExpression),
    ConditionalExpression(ConditionalExpression),
    CallExpression(CallExpression),
    NewExpression(NewExpression),
    MemberExpression(MemberExpression),
    ChainExpression(ChainExpression),
    SequenceExpression(SequenceExpression),
    AwaitExpression(AwaitExpression),
    YieldExpression(YieldExpression),
    ThisExpression,
    Super,
    ParenthesizedExpression(ParenthesizedExpression),

    // Patterns
    ArrayPattern(ArrayPattern),
    ObjectPattern(ObjectPattern),
    AssignmentPattern(AssignmentPattern),
    RestElement(RestElement),

    // TypeScript
    TSAsExpression(TSAsExpression),
    TSNonNullExpression(TSNonNullExpression),
    TSTypeAnnotation(TSTypeAnnotation),
    TSTypeReference(TSTypeReference),
    TSQualifiedName(TSQualifiedName),
    TSArrayType(TSArrayType),
    TSIndexedAccessType(TSIndexedAccessType),
    TSUnionType(TSUnionType),
    TSIntersectionType(TSIntersectionType),
    TSTupleType(TSTupleType),
    TSLiteralType(TSLiteralType),
    TSTypeLiteral(TSTypeLiteral),
    TSPropertySignature(TSPropertySignature),
    TSMethodSignature(TSMethodSignature),
    TSFunctionType(TSFunctionType),
    TSTypeQuery(TSTypeQuery),
    TSTypeOperator(TSTypeOperator),
    TSDeclareFunction(TSDeclareFunction),
    TSTypeAliasDeclaration(TSTypeAliasDeclaration),
    TSInterfaceDeclaration(TSInterfaceDeclaration),
    TSStringKeyword,
    TSNumberKeyword,
    TSBooleanKeyword,
    TSAnyKeyword,
    TSUnknownKeyword,
    TSVoidKeyword,
    TSNeverKeyword,
    TSNullKeyword,
    TSUndefinedKeyword,
    TSObjectKeyword,
    TSSymbolKeyword,
    TSBigIntKeyword,

    /// A node kind produced by a foreign host that this model does not know.
    Unknown { type_name: String },
}

macro_rules! node_types {
    ($($name:ident),* $(,)?) => {
        /// Discriminant of a [`Node`], named after the ESTree `type` field.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeType {
            $($name,)*
            Unknown,
        }

        impl NodeType {
            /// Every known node type, excluding `Unknown`.
            pub const ALL: &'static [NodeType] = &[$(NodeType::$name,)*];

            /// The ESTree `type` name.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(NodeType::$name => stringify!($name),)*
                    NodeType::Unknown => "Unknown",
                }
            }

            /// Map an ESTree `type` name back to a tag. Unknown names yield `None`.
            pub fn from_name(name: &str) -> Option<NodeType> {
                match name {
                    $(stringify!($name) => Some(NodeType::$name),)*
                    _ => None,
                }
            }
        }
    };
}

node_types! {
    Program,
    ExpressionStatement,
    BlockStatement,
    EmptyStatement,
    DebuggerStatement,
    VariableDeclaration,
    VariableDeclarator,
    FunctionDeclaration,
    ReturnStatement,
    IfStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    WhileStatement,
    DoWhileStatement,
    BreakStatement,
    ContinueStatement,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    CatchClause,
    SwitchStatement,
    SwitchCase,
    ClassDeclaration,
    ClassExpression,
    ClassBody,
    MethodDefinition,
    PropertyDefinition,
    ImportDeclaration,
    ImportSpecifier,
    ImportDefaultSpecifier,
    ImportNamespaceSpecifier,
    ExportNamedDeclaration,
    ExportDefaultDeclaration,
    ExportAllDeclaration,
    ExportSpecifier,
    Identifier,
    Literal,
    TemplateLiteral,
    TemplateElement,
    TaggedTemplateExpression,
    ArrayExpression,
    ObjectExpression,
    Property,
    SpreadElement,
    FunctionExpression,
    ArrowFunctionExpression,
    UnaryExpression,
    UpdateExpression,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    CallExpression,
    NewExpression,
    MemberExpression,
    ChainExpression,
    SequenceExpression,
    AwaitExpression,
    YieldExpression,
    ThisExpression,
    Super,
    ParenthesizedExpression,
    ArrayPattern,
    ObjectPattern,
    AssignmentPattern,
    RestElement,
    TSAsExpression,
    TSNonNullExpression,
    TSTypeAnnotation,
    TSTypeReference,
    TSQualifiedName,
    TSArrayType,
    TSIndexedAccessType,
    TSUnionType,
    TSIntersectionType,
    TSTupleType,
    TSLiteralType,
    TSTypeLiteral,
    TSPropertySignature,
    TSMethodSignature,
    TSFunctionType,
    TSTypeQuery,
    TSTypeOperator,
    TSDeclareFunction,
    TSTypeAliasDeclaration,
    TSInterfaceDeclaration,
    TSStringKeyword,
    TSNumberKeyword,
    TSBooleanKeyword,
    TSAnyKeyword,
    TSUnknownKeyword,
    TSVoidKeyword,
    TSNeverKeyword,
    TSNullKeyword,
    TSUndefinedKeyword,
    TSObjectKeyword,
    TSSymbolKeyword,
    TSBigIntKeyword,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn node_type(&self) -> NodeType {
        match self {
            Node::Program(_) => NodeType::Program,
            Node::ExpressionStatement(_) => NodeType::ExpressionStatement,
            Node::BlockStatement(_) => NodeType::BlockStatement,
            Node::EmptyStatement => NodeType::EmptyStatement,
            Node::DebuggerStatement => NodeType::DebuggerStatement,
            Node::VariableDeclaration(_) => NodeType::VariableDeclaration,
            Node::VariableDeclarator(_) => NodeType::VariableDeclarator,
            Node::FunctionDeclaration(_) => NodeType::FunctionDeclaration,
            Node::ReturnStatement(_) => NodeType::ReturnStatement,
            Node::IfStatement(_) => NodeType::IfStatement,
            Node::ForStatement(_) => NodeType::ForStatement,
            Node::ForInStatement(_) => NodeType::ForInStatement,
            Node::ForOfStatement(_) => NodeType::ForOfStatement,
            Node::WhileStatement(_) => NodeType::WhileStatement,
            Node::DoWhileStatement(_) => NodeType::DoWhileStatement,
            Node::BreakStatement(_) => NodeType::BreakStatement,
            Node::ContinueStatement(_) => NodeType::ContinueStatement,
            Node::LabeledStatement(_) => NodeType::LabeledStatement,
            Node::ThrowStatement(_) => NodeType::ThrowStatement,
            Node::TryStatement(_) => NodeType::TryStatement,
            Node::CatchClause(_) => NodeType::CatchClause,
            Node::SwitchStatement(_) => NodeType::SwitchStatement,
            Node::SwitchCase(_) => NodeType::SwitchCase,
            Node::ClassDeclaration(_) => NodeType::ClassDeclaration,
            Node::ClassExpression(_) => NodeType::ClassExpression,
            Node::ClassBody(_) => NodeType::ClassBody,
            Node::MethodDefinition(_) => NodeType::MethodDefinition,
            Node::PropertyDefinition(_) => NodeType::PropertyDefinition,
            Node::ImportDeclaration(_) => NodeType::ImportDeclaration,
            Node::ImportSpecifier(_) => NodeType::ImportSpecifier,
            Node::ImportDefaultSpecifier(_) => NodeType::ImportDefaultSpecifier,
            Node::ImportNamespaceSpecifier(_) => NodeType::ImportNamespaceSpecifier,
            Node::ExportNamedDeclaration(_) => NodeType::ExportNamedDeclaration,
            Node::ExportDefaultDeclaration(_) => NodeType::ExportDefaultDeclaration,
            Node::ExportAllDeclaration(_) => NodeType::ExportAllDeclaration,
            Node::ExportSpecifier(_) => NodeType::ExportSpecifier,
            Node::Identifier(_) => NodeType::Identifier,
            Node::Literal(_) => NodeType::Literal,
            Node::TemplateLiteral(_) => NodeType::TemplateLiteral,
            Node::TemplateElement(_) => NodeType::TemplateElement,
            Node::TaggedTemplateExpression(_) => NodeType::TaggedTemplateExpression,
            Node::ArrayExpression(_) => NodeType::ArrayExpression,
            Node::ObjectExpression(_) => NodeType::ObjectExpression,
            Node::Property(_) => NodeType::Property,
            Node::SpreadElement(_) => NodeType::SpreadElement,
            Node::FunctionExpression(_) => NodeType::FunctionExpression,
            Node::ArrowFunctionExpression(_) => NodeType::ArrowFunctionExpression,
            Node::UnaryExpression(_) => NodeType::UnaryExpression,
            Node::UpdateExpression(_) => NodeType::UpdateExpression,
            Node::BinaryExpression(_) => NodeType::BinaryExpression,
            Node::LogicalExpression(_) => NodeType::LogicalExpression,
            Node::AssignmentExpression(_) => NodeType::AssignmentExpression,
            Node::ConditionalExpression(_) => NodeType::ConditionalExpression,
            Node::CallExpression(_) => NodeType::CallExpression,
            Node::NewExpression(_) => NodeType::NewExpression,
            Node::MemberExpression(_) => NodeType::MemberExpression,
            Node::ChainExpression(_) => NodeType::ChainExpression,
            Node::SequenceExpression(_) => NodeType::SequenceExpression,
            Node::AwaitExpression(_) => NodeType::AwaitExpression,
            Node::YieldExpression(_) => NodeType::YieldExpression,
            Node::ThisExpression => NodeType::ThisExpression,
            Node::Super => NodeType::Super,
            Node::ParenthesizedExpression(_) => NodeType::ParenthesizedExpression,
            Node::ArrayPattern(_) => NodeType::ArrayPattern,
            Node::ObjectPattern(_) => NodeType::ObjectPattern,
            Node::AssignmentPattern(_) => NodeType::AssignmentPattern,
            Node::RestElement(_) => NodeType::RestElement,
            Node::TSAsExpression(_) => NodeType::TSAsExpression,
            Node::TSNonNullExpression(_) => NodeType::TSNonNullExpression,
            Node::TSTypeAnnotation(_) => NodeType::TSTypeAnnotation,
            Node::TSTypeReference(_) => NodeType::TSTypeReference,
            Node::TSQualifiedName(_) => NodeType::TSQualifiedName,
            Node::TSArrayType(_) => NodeType::TSArrayType,
            Node::TSIndexedAccessType(_) => NodeType::TSIndexedAccessType,
            Node::TSUnionType(_) => NodeType::TSUnionType,
            Node::TSIntersectionType(_) => NodeType::TSIntersectionType,
            Node::TSTupleType(_) => NodeType::TSTupleType,
            Node::TSLiteralType(_) => NodeType::TSLiteralType,
            Node::TSTypeLiteral(_) => NodeType::TSTypeLiteral,
            Node::TSPropertySignature(_) => NodeType::TSPropertySignature,
            Node::TSMethodSignature(_) => NodeType::TSMethodSignature,
            Node::TSFunctionType(_) => NodeType::TSFunctionType,
            Node::TSTypeQuery(_) => NodeType::TSTypeQuery,
            Node::TSTypeOperator(_) => NodeType::TSTypeOperator,
            Node::TSDeclareFunction(_) => NodeType::TSDeclareFunction,
            Node::TSTypeAliasDeclaration(_) => NodeType::TSTypeAliasDeclaration,
            Node::TSInterfaceDeclaration(_) => NodeType::TSInterfaceDeclaration,
            Node::TSStringKeyword => NodeType::TSStringKeyword,
            Node::TSNumberKeyword => NodeType::TSNumberKeyword,
            Node::TSBooleanKeyword => NodeType::TSBooleanKeyword,
            Node::TSAnyKeyword => NodeType::TSAnyKeyword,
            Node::TSUnknownKeyword => NodeType::TSUnknownKeyword,
            Node::TSVoidKeyword => NodeType::TSVoidKeyword,
            Node::TSNeverKeyword => NodeType::TSNeverKeyword,
            Node::TSNullKeyword => NodeType::TSNullKeyword,
            Node::TSUndefinedKeyword => NodeType::TSUndefinedKeyword,
            Node::TSObjectKeyword => NodeType::TSObjectKeyword,
            Node::TSSymbolKeyword => NodeType::TSSymbolKeyword,
            Node::TSBigIntKeyword => NodeType::TSBigIntKeyword,
            Node::Unknown { .. } => NodeType::Unknown,
        }
    }

    /// The ESTree `type` name; foreign tags keep their own spelling.
    pub fn type_name(&self) -> &str {
        match self {
            Node::Unknown { type_name } => type_name,
            other => other.node_type().as_str(),
        }
    }
}

/// Stand-in returned for ids that do not exist in the arena.
static MISSING: Node = Node::Unknown {
    type_name: String::new(),
};

/// Node arena with a designated root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ast {
    nodes: Vec<NodeEntry>,
    root: Option<NodeId>,
}

impl Ast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its id. The parent link is left empty.
    pub fn alloc(&mut self, node: Node, range: Option<Span>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeEntry {
            node,
            range,
            parent: None,
        });
        id
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn entry(&self, id: NodeId) -> Option<&NodeEntry> {
        self.nodes.get(id.index())
    }

    pub fn entry_mut(&mut self, id: NodeId) -> Option<&mut NodeEntry> {
        self.nodes.get_mut(id.index())
    }

    /// Handle to a node. Ids outside the arena resolve to an `Unknown` node
    /// without range or parent.
    pub fn get(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { ast: self, id }
    }

    /// Drop every node allocated at or after `len`.
    pub fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Pre-order walk from the root.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder::new(self, self.root)
    }

    /// Attach parent back-references to every node reachable from the root.
    pub fn link_parents(&mut self) {
        for entry in &mut self.nodes {
            entry.parent = None;
        }
        let Some(root) = self.root else {
            return;
        };

        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let children = match self.entry(id) {
                Some(entry) => visitor::children(&entry.node),
                None => continue,
            };
            for child in children {
                // Already linked means shared or cyclic ids from a foreign host
                match self.nodes.get_mut(child.index()) {
                    Some(entry) if entry.parent.is_none() && child != root => {
                        entry.parent = Some(id);
                        stack.push(child);
                    }
                    _ => {}
                }
            }
        }
    }
}

/// Read-only handle to a node and the arena it lives in.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    #[inline]
    pub fn id(self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn ast(self) -> &'a Ast {
        self.ast
    }

    pub fn node(self) -> &'a Node {
        self.ast
            .entry(self.id)
            .map(|entry| &entry.node)
            .unwrap_or(&MISSING)
    }

    pub fn node_type(self) -> NodeType {
        self.node().node_type()
    }

    pub fn range(self) -> Option<Span> {
        self.ast.entry(self.id).and_then(|entry| entry.range)
    }

    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.ast
            .entry(self.id)
            .and_then(|entry| entry.parent)
            .map(|id| self.ast.get(id))
    }

    /// Resolve another id in the same arena.
    #[inline]
    pub fn get(self, id: NodeId) -> NodeRef<'a> {
        self.ast.get(id)
    }

    /// Direct children in source order.
    pub fn children(self) -> Vec<NodeRef<'a>> {
        visitor::children(self.node())
            .into_iter()
            .map(|id| self.ast.get(id))
            .collect()
    }

    /// Parent, grandparent, ... up to the root.
    pub fn ancestors(self) -> impl Iterator<Item = NodeRef<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Pre-order walk of the subtree rooted here, starting with `self`.
    pub fn descendants(self) -> Preorder<'a> {
        Preorder::new(self.ast, Some(self.id))
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ast, other.ast) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("type", &self.node().type_name())
            .field("range", &self.range())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_ast() -> (Ast, NodeId, NodeId) {
        let mut ast = Ast::new();
        let ident = ast.alloc(Node::Identifier(Identifier::new("x")), Some(Span::new(0, 1, 1, 1)));
        let stmt = ast.alloc(
            Node::ExpressionStatement(ExpressionStatement { expression: ident }),
            Some(Span::new(0, 2, 1, 1)),
        );
        let program = ast.alloc(Node::Program(Program { body: vec![stmt] }), None);
        ast.set_root(program);
        ast.link_parents();
        (ast, ident, stmt)
    }

    #[test]
    fn test_node_type_names_round_trip() {
        for ty in NodeType::ALL {
            assert_eq!(NodeType::from_name(ty.as_str()), Some(*ty));
        }
        assert_eq!(NodeType::from_name("JSXElement"), None);
        assert_eq!(NodeType::from_name("Unknown"), None);
    }

    #[test]
    fn test_link_parents() {
        let (ast, ident, stmt) = small_ast();
        let node = ast.get(ident);
        assert_eq!(node.parent().map(|p| p.id()), Some(stmt));
        assert_eq!(node.ancestors().count(), 2);
        assert!(ast.root().and_then(|r| r.parent()).is_none());
    }

    #[test]
    fn test_missing_id_is_unknown() {
        let (ast, _, _) = small_ast();
        let dangling = ast.get(NodeId(99));
        assert_eq!(dangling.node_type(), NodeType::Unknown);
        assert!(dangling.range().is_none());
        assert!(dangling.parent().is_none());
    }

    #[test]
    fn test_unknown_keeps_type_name() {
        let node = Node::Unknown {
            type_name: "JSXElement".to_string(),
        };
        assert_eq!(node.node_type(), NodeType::Unknown);
        assert_eq!(node.type_name(), "JSXElement");
    }
}
