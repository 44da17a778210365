//! Binding and assignment patterns
//!
//! Plain identifiers in binding position are `Identifier` nodes; object
//! pattern members reuse `Property`.

use super::NodeId;

/// `[a, , ...rest]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPattern {
    pub elements: Vec<Option<NodeId>>,
    pub type_annotation: Option<NodeId>,
}

/// `{ a, b: c, ...rest }`
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPattern {
    pub properties: Vec<NodeId>,
    pub type_annotation: Option<NodeId>,
}

/// `left = right` default value
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentPattern {
    pub left: NodeId,
    pub right: NodeId,
}

/// `...argument`
#[derive(Debug, Clone, PartialEq)]
pub struct RestElement {
    pub argument: NodeId,
    pub type_annotation: Option<NodeId>,
}
