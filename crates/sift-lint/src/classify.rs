//! Node classifier
//!
//! `is_x` / `as_x` pairs that test a node's discriminant and, on success,
//! narrow it to the variant's struct. They never look past the tag, so a
//! `Node::Unknown` produced by a foreign host is never taken for a known
//! shape.

use sift_parser::ast::*;

macro_rules! shapes {
    ($($is:ident, $as:ident => $variant:ident($ty:ty);)*) => {
        $(
            #[inline]
            pub fn $is(node: NodeRef<'_>) -> bool {
                matches!(node.node(), Node::$variant(_))
            }

            #[inline]
            pub fn $as<'a>(node: NodeRef<'a>) -> Option<&'a $ty> {
                match node.node() {
                    Node::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        )*
    };
}

shapes! {
    is_program, as_program => Program(Program);
    is_expression_statement, as_expression_statement => ExpressionStatement(ExpressionStatement);
    is_block_statement, as_block_statement => BlockStatement(BlockStatement);
    is_variable_declaration, as_variable_declaration => VariableDeclaration(VariableDeclaration);
    is_variable_declarator, as_variable_declarator => VariableDeclarator(VariableDeclarator);
    is_function_declaration, as_function_declaration => FunctionDeclaration(Function);
    is_function_expression, as_function_expression => FunctionExpression(Function);
    is_arrow_function, as_arrow_function => ArrowFunctionExpression(ArrowFunctionExpression);
    is_return_statement, as_return_statement => ReturnStatement(ReturnStatement);
    is_if_statement, as_if_statement => IfStatement(IfStatement);
    is_for_statement, as_for_statement => ForStatement(ForStatement);
    is_continue_statement, as_continue_statement => ContinueStatement(ContinueStatement);
    is_break_statement, as_break_statement => BreakStatement(BreakStatement);
    is_throw_statement, as_throw_statement => ThrowStatement(ThrowStatement);
    is_switch_case, as_switch_case => SwitchCase(SwitchCase);
    is_identifier, as_identifier => Identifier(Identifier);
    is_literal, as_literal => Literal(Literal);
    is_template_literal, as_template_literal => TemplateLiteral(TemplateLiteral);
    is_array_expression, as_array_expression => ArrayExpression(ArrayExpression);
    is_spread_element, as_spread_element => SpreadElement(SpreadElement);
    is_unary_expression, as_unary_expression => UnaryExpression(UnaryExpression);
    is_update_expression, as_update_expression => UpdateExpression(UpdateExpression);
    is_binary_expression, as_binary_expression => BinaryExpression(BinaryExpression);
    is_logical_expression, as_logical_expression => LogicalExpression(LogicalExpression);
    is_assignment_expression, as_assignment_expression => AssignmentExpression(AssignmentExpression);
    is_call_expression, as_call_expression => CallExpression(CallExpression);
    is_new_expression, as_new_expression => NewExpression(NewExpression);
    is_member_expression, as_member_expression => MemberExpression(MemberExpression);
    is_parenthesized_expression, as_parenthesized_expression => ParenthesizedExpression(ParenthesizedExpression);
    is_ts_as_expression, as_ts_as_expression => TSAsExpression(TSAsExpression);
    is_ts_type_reference, as_ts_type_reference => TSTypeReference(TSTypeReference);
    is_ts_qualified_name, as_ts_qualified_name => TSQualifiedName(TSQualifiedName);
}

#[inline]
pub fn is_await_expression(node: NodeRef<'_>) -> bool {
    matches!(node.node(), Node::AwaitExpression(_))
}

/// FunctionDeclaration, FunctionExpression or ArrowFunctionExpression.
pub fn is_function_like(node: NodeRef<'_>) -> bool {
    matches!(
        node.node(),
        Node::FunctionDeclaration(_) | Node::FunctionExpression(_) | Node::ArrowFunctionExpression(_)
    )
}

/// A declared or expression function (not an arrow).
pub fn as_function<'a>(node: NodeRef<'a>) -> Option<&'a Function> {
    match node.node() {
        Node::FunctionDeclaration(f) | Node::FunctionExpression(f) => Some(f),
        _ => None,
    }
}

pub fn as_string_literal<'a>(node: NodeRef<'a>) -> Option<&'a str> {
    match &as_literal(node)?.value {
        LiteralValue::String(s) => Some(s),
        _ => None,
    }
}

pub fn as_boolean_literal(node: NodeRef<'_>) -> Option<bool> {
    match as_literal(node)?.value {
        LiteralValue::Boolean(b) => Some(b),
        _ => None,
    }
}

pub fn as_number_literal(node: NodeRef<'_>) -> Option<f64> {
    match as_literal(node)?.value {
        LiteralValue::Number(n) => Some(n),
        _ => None,
    }
}

pub fn is_binary_with(node: NodeRef<'_>, operator: BinaryOperator) -> bool {
    as_binary_expression(node).is_some_and(|b| b.operator == operator)
}

pub fn is_logical_with(node: NodeRef<'_>, operator: LogicalOperator) -> bool {
    as_logical_expression(node).is_some_and(|l| l.operator == operator)
}

/// Name of an Identifier node.
pub fn identifier_name<'a>(node: NodeRef<'a>) -> Option<&'a str> {
    as_identifier(node).map(|id| id.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_expression(ast: &Ast) -> NodeRef<'_> {
        let stmt = ast.root().unwrap().children()[0];
        let expr = as_expression_statement(stmt).unwrap().expression;
        ast.get(expr)
    }

    #[test]
    fn test_narrowing() {
        let ast = sift_parser::parse("a.b(1);").unwrap();
        let call = first_expression(&ast);
        assert!(is_call_expression(call));
        assert!(!is_member_expression(call));
        let callee = call.get(as_call_expression(call).unwrap().callee);
        assert!(as_member_expression(callee).is_some());
    }

    #[test]
    fn test_literal_views() {
        let ast = sift_parser::parse("[\"s\", 2, true, null];").unwrap();
        let array = as_array_expression(first_expression(&ast)).unwrap();
        let elements: Vec<_> = array.elements.iter().flatten().map(|id| ast.get(*id)).collect();
        assert_eq!(as_string_literal(elements[0]), Some("s"));
        assert_eq!(as_number_literal(elements[1]), Some(2.0));
        assert_eq!(as_boolean_literal(elements[2]), Some(true));
        assert_eq!(as_string_literal(elements[3]), None);
        assert!(is_literal(elements[3]));
    }

    #[test]
    fn test_unknown_nodes_fail_closed() {
        let mut ast = Ast::new();
        let id = ast.alloc(
            Node::Unknown {
                type_name: "JSXElement".to_string(),
            },
            None,
        );
        let node = ast.get(id);
        assert!(!is_call_expression(node));
        assert!(!is_function_like(node));
        assert!(as_literal(node).is_none());
        assert_eq!(node.node_type(), NodeType::Unknown);
    }

    #[test]
    fn test_operator_checks() {
        let ast = sift_parser::parse("a || b;").unwrap();
        let logical = first_expression(&ast);
        assert!(is_logical_with(logical, LogicalOperator::Or));
        assert!(!is_logical_with(logical, LogicalOperator::And));
        assert!(!is_binary_with(logical, BinaryOperator::Add));
    }
}
