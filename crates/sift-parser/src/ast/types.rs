//! TypeScript annotation nodes
//!
//! Only the shapes needed to keep annotated code parseable and to recognize
//! `as const` are modelled. Fieldless keyword types (`string`, `number`, ...)
//! are unit variants of [`Node`](super::Node).

use super::NodeId;

/// `expression as type_annotation`
#[derive(Debug, Clone, PartialEq)]
pub struct TSAsExpression {
    pub expression: NodeId,
    pub type_annotation: NodeId,
}

/// `expression!`
#[derive(Debug, Clone, PartialEq)]
pub struct TSNonNullExpression {
    pub expression: NodeId,
}

/// `: type` in binding or return position
#[derive(Debug, Clone, PartialEq)]
pub struct TSTypeAnnotation {
    pub type_annotation: NodeId,
}

/// `Name<Args>`; `as const` is a reference to the identifier `const`
#[derive(Debug, Clone, PartialEq)]
pub struct TSTypeReference {
    /// `Identifier` or `TSQualifiedName`
    pub type_name: NodeId,
    pub type_arguments: Vec<NodeId>,
}

/// `left.right`
#[derive(Debug, Clone, PartialEq)]
pub struct TSQualifiedName {
    pub left: NodeId,
    pub right: NodeId,
}

/// `T[]`
#[derive(Debug, Clone, PartialEq)]
pub struct TSArrayType {
    pub element_type: NodeId,
}

/// `T[K]`
#[derive(Debug, Clone, PartialEq)]
pub struct TSIndexedAccessType {
    pub object_type: NodeId,
    pub index_type: NodeId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TSUnionType {
    pub types: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TSIntersectionType {
    pub types: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TSTupleType {
    pub element_types: Vec<NodeId>,
}

/// `"a"`, `1`, `true` used as a type
#[derive(Debug, Clone, PartialEq)]
pub struct TSLiteralType {
    /// `Literal`
    pub literal: NodeId,
}

/// `{ a: T; b?: U }`
#[derive(Debug, Clone, PartialEq)]
pub struct TSTypeLiteral {
    pub members: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TSPropertySignature {
    pub key: NodeId,
    pub computed: bool,
    pub optional: bool,
    pub readonly: bool,
    pub type_annotation: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TSMethodSignature {
    pub key: NodeId,
    pub params: Vec<NodeId>,
    pub return_type: Option<NodeId>,
}

/// `(params) => return_type`
#[derive(Debug, Clone, PartialEq)]
pub struct TSFunctionType {
    pub params: Vec<NodeId>,
    pub return_type: NodeId,
}

/// `typeof expr_name`
#[derive(Debug, Clone, PartialEq)]
pub struct TSTypeQuery {
    pub expr_name: NodeId,
}

/// `keyof T`, `readonly T[]`, `unique symbol`
#[derive(Debug, Clone, PartialEq)]
pub struct TSTypeOperator {
    pub operator: String,
    pub type_annotation: NodeId,
}

/// Function signature without a body (overloads, `declare function`).
#[derive(Debug, Clone, PartialEq)]
pub struct TSDeclareFunction {
    pub id: Option<NodeId>,
    pub params: Vec<NodeId>,
    pub return_type: Option<NodeId>,
    pub is_async: bool,
}

/// `type Id = T;`
#[derive(Debug, Clone, PartialEq)]
pub struct TSTypeAliasDeclaration {
    pub id: NodeId,
    pub type_annotation: NodeId,
}

/// `interface Id extends A, B { members }`
#[derive(Debug, Clone, PartialEq)]
pub struct TSInterfaceDeclaration {
    pub id: NodeId,
    pub extends: Vec<NodeId>,
    pub body: Vec<NodeId>,
}
