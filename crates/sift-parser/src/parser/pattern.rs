//! Binding patterns and parameter lists

use super::expr::{parse_assignment, parse_identifier, parse_property_key};
use super::{types, ParseError, Parser};
use crate::ast::*;
use crate::token::{Keyword, Token};

/// Parameter modifiers allowed on constructor parameter properties.
const PARAMETER_MODIFIERS: &[&str] = &["public", "private", "protected", "readonly", "override"];

/// `( a, b: T = 1, ...rest )`
pub fn parse_formal_params(p: &mut Parser) -> Result<Vec<NodeId>, ParseError> {
    p.expect(Token::LeftParen)?;
    p.with_in(true, |p| {
        let mut params = Vec::new();
        while !p.check(&Token::RightParen) && !p.at_eof() {
            params.push(parse_param(p)?);
            if !p.check(&Token::RightParen) {
                p.expect(Token::Comma)?;
            }
        }
        p.expect(Token::RightParen)?;
        Ok(params)
    })
}

fn parse_param(p: &mut Parser) -> Result<NodeId, ParseError> {
    while matches!(p.current(), Token::Identifier(m) if PARAMETER_MODIFIERS.contains(&m.as_str()))
        && matches!(
            p.peek(),
            Token::Identifier(_) | Token::LeftBrace | Token::LeftBracket
        )
    {
        p.advance();
    }

    if p.check(&Token::DotDotDot) {
        return parse_rest(p, true);
    }

    // `this: Type` parameter
    if p.check_keyword(Keyword::This) {
        let span = p.current_span();
        p.advance();
        let id = p.alloc(Node::Identifier(Identifier::new("this")), span);
        annotate(p, id)?;
        return Ok(id);
    }

    parse_binding_element(p, true)
}

fn parse_rest(p: &mut Parser, allow_annotation: bool) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::DotDotDot)?;
    let argument = parse_binding_target(p)?;
    let type_annotation = if allow_annotation && p.check(&Token::Colon) {
        Some(types::parse_type_annotation(p)?)
    } else {
        None
    };
    Ok(p.finish(
        start,
        Node::RestElement(RestElement {
            argument,
            type_annotation,
        }),
    ))
}

/// Identifier, array pattern or object pattern, without annotation.
pub fn parse_binding_target(p: &mut Parser) -> Result<NodeId, ParseError> {
    match p.current() {
        Token::LeftBracket => parse_array_pattern(p),
        Token::LeftBrace => parse_object_pattern(p),
        _ => parse_identifier(p),
    }
}

/// Binding target with optional `?` and `: Type`, as in declarators.
pub fn parse_binding_with_annotation(p: &mut Parser) -> Result<NodeId, ParseError> {
    let target = parse_binding_target(p)?;
    annotate(p, target)?;
    Ok(target)
}

/// Attach `?` and `: Type` to a binding, growing its range.
fn annotate(p: &mut Parser, target: NodeId) -> Result<(), ParseError> {
    let optional = p.eat(&Token::Question);
    // Definite assignment `let x!: T`
    let definite = p.eat(&Token::Bang);
    let annotation = if p.check(&Token::Colon) {
        Some(types::parse_type_annotation(p)?)
    } else {
        None
    };
    if !optional && !definite && annotation.is_none() {
        return Ok(());
    }

    match p.node_mut(target) {
        Some(Node::Identifier(id)) => {
            id.optional = optional;
            id.type_annotation = annotation;
        }
        Some(Node::ArrayPattern(pattern)) => pattern.type_annotation = annotation,
        Some(Node::ObjectPattern(pattern)) => pattern.type_annotation = annotation,
        _ => {}
    }
    p.extend_range(target);
    Ok(())
}

/// Binding with optional annotation and default value.
fn parse_binding_element(p: &mut Parser, allow_annotation: bool) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let target = if allow_annotation {
        parse_binding_with_annotation(p)?
    } else {
        parse_binding_target(p)?
    };
    if !p.eat(&Token::Equal) {
        return Ok(target);
    }
    let right = p.with_in(true, parse_assignment)?;
    Ok(p.finish(
        start,
        Node::AssignmentPattern(AssignmentPattern {
            left: target,
            right,
        }),
    ))
}

fn parse_array_pattern(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::LeftBracket)?;

    let mut elements = Vec::new();
    while !p.check(&Token::RightBracket) && !p.at_eof() {
        if p.eat(&Token::Comma) {
            elements.push(None);
            continue;
        }
        let element = if p.check(&Token::DotDotDot) {
            parse_rest(p, false)?
        } else {
            parse_binding_element(p, false)?
        };
        elements.push(Some(element));
        if !p.check(&Token::RightBracket) {
            p.expect(Token::Comma)?;
        }
    }
    p.expect(Token::RightBracket)?;

    Ok(p.finish(
        start,
        Node::ArrayPattern(ArrayPattern {
            elements,
            type_annotation: None,
        }),
    ))
}

fn parse_object_pattern(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::LeftBrace)?;

    let mut properties = Vec::new();
    while !p.check(&Token::RightBrace) && !p.at_eof() {
        let property = if p.check(&Token::DotDotDot) {
            parse_rest(p, false)?
        } else {
            parse_pattern_property(p)?
        };
        properties.push(property);
        if !p.check(&Token::RightBrace) {
            p.expect(Token::Comma)?;
        }
    }
    p.expect(Token::RightBrace)?;

    Ok(p.finish(
        start,
        Node::ObjectPattern(ObjectPattern {
            properties,
            type_annotation: None,
        }),
    ))
}

fn parse_pattern_property(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let (key, computed) = parse_property_key(p)?;

    let (value, shorthand) = if p.eat(&Token::Colon) {
        (parse_binding_element(p, false)?, false)
    } else if !computed && matches!(p.node(key), Some(Node::Identifier(_))) {
        let value = if p.eat(&Token::Equal) {
            let right = p.with_in(true, parse_assignment)?;
            p.finish(
                start,
                Node::AssignmentPattern(AssignmentPattern { left: key, right }),
            )
        } else {
            key
        };
        (value, true)
    } else {
        return Err(p.unexpected(vec![Token::Colon]));
    };

    Ok(p.finish(
        start,
        Node::Property(Property {
            key,
            value,
            kind: PropertyKind::Init,
            computed,
            shorthand,
            method: false,
        }),
    ))
}

/// Reinterpret an expression as an assignment target, re-tagging literals in
/// place (`[a, b] = ...`, `({ a } = ...)`).
pub fn to_pattern(p: &mut Parser, id: NodeId) -> NodeId {
    let Some(node) = p.node(id).cloned() else {
        return id;
    };

    let replacement = match node {
        Node::ArrayExpression(array) => {
            let elements = array
                .elements
                .into_iter()
                .map(|element| element.map(|e| to_pattern(p, e)))
                .collect();
            Node::ArrayPattern(ArrayPattern {
                elements,
                type_annotation: None,
            })
        }
        Node::ObjectExpression(object) => {
            let properties = object
                .properties
                .into_iter()
                .map(|prop| to_pattern(p, prop))
                .collect();
            Node::ObjectPattern(ObjectPattern {
                properties,
                type_annotation: None,
            })
        }
        Node::Property(mut property) if !property.method => {
            property.value = to_pattern(p, property.value);
            Node::Property(property)
        }
        Node::SpreadElement(spread) => Node::RestElement(RestElement {
            argument: to_pattern(p, spread.argument),
            type_annotation: None,
        }),
        Node::AssignmentExpression(assign) if assign.operator == AssignmentOperator::Assign => {
            Node::AssignmentPattern(AssignmentPattern {
                left: to_pattern(p, assign.left),
                right: assign.right,
            })
        }
        _ => return id,
    };

    if let Some(slot) = p.node_mut(id) {
        *slot = replacement;
    }
    id
}

#[cfg(test)]
mod tests {
    use crate::ast::*;

    fn params_of_first_function(source: &str) -> (Ast, Vec<NodeId>) {
        let ast = crate::parse(source).unwrap();
        let params = ast
            .preorder()
            .find_map(|node| match node.node() {
                Node::FunctionDeclaration(f) => Some(f.params.clone()),
                _ => None,
            })
            .unwrap();
        (ast, params)
    }

    #[test]
    fn test_parameter_kinds() {
        let (ast, params) =
            params_of_first_function("function f(a, b?: string, [c] = [], { d, e: g = 1 }, ...rest) {}");
        let kinds: Vec<_> = params.iter().map(|id| ast.get(*id).node_type()).collect();
        assert_eq!(
            kinds,
            vec![
                NodeType::Identifier,
                NodeType::Identifier,
                NodeType::AssignmentPattern,
                NodeType::ObjectPattern,
                NodeType::RestElement,
            ]
        );
        assert!(matches!(ast.get(params[1]).node(), Node::Identifier(id) if id.optional));
    }

    #[test]
    fn test_annotated_identifier_range_covers_type() {
        let source = "function f(count: number) {}";
        let (ast, params) = params_of_first_function(source);
        let range = ast.get(params[0]).range().unwrap();
        assert_eq!(range.slice(source), "count: number");
    }

    #[test]
    fn test_constructor_parameter_properties() {
        let ast = crate::parse("class A { constructor(private readonly x: number) {} }");
        assert!(ast.is_ok());
    }
}
