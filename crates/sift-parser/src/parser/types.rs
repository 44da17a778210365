//! TypeScript type annotation parsing
//!
//! Covers references, unions, intersections, arrays, tuples, literal and
//! object types, function types and `typeof` queries. Type parameter lists
//! are skipped. Conditional and mapped types are rejected.

use super::expr::{parse_identifier, parse_property_identifier, parse_property_key};
use super::{pattern, ParseError, Parser};
use crate::ast::*;
use crate::token::{Keyword, Token};

/// `: Type`
pub fn parse_type_annotation(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::Colon)?;
    let type_annotation = parse_type(p)?;
    Ok(p.finish(
        start,
        Node::TSTypeAnnotation(TSTypeAnnotation { type_annotation }),
    ))
}

pub fn parse_type(p: &mut Parser) -> Result<NodeId, ParseError> {
    p.enter()?;
    let result = parse_union(p);
    p.leave();
    result
}

fn parse_union(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.eat(&Token::Pipe);
    let first = parse_intersection(p)?;
    if !p.check(&Token::Pipe) {
        return Ok(first);
    }
    let mut types = vec![first];
    while p.eat(&Token::Pipe) {
        types.push(parse_intersection(p)?);
    }
    Ok(p.finish(start, Node::TSUnionType(TSUnionType { types })))
}

fn parse_intersection(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.eat(&Token::Amp);
    let first = parse_type_operator(p)?;
    if !p.check(&Token::Amp) {
        return Ok(first);
    }
    let mut types = vec![first];
    while p.eat(&Token::Amp) {
        types.push(parse_type_operator(p)?);
    }
    Ok(p.finish(
        start,
        Node::TSIntersectionType(TSIntersectionType { types }),
    ))
}

fn parse_type_operator(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let operator = match p.current() {
        Token::Identifier(name)
            if matches!(name.as_str(), "keyof" | "unique" | "readonly")
                && starts_type(p.peek()) =>
        {
            name.clone()
        }
        _ => return parse_postfix_type(p),
    };
    p.advance();
    let type_annotation = parse_type_operator(p)?;
    Ok(p.finish(
        start,
        Node::TSTypeOperator(TSTypeOperator {
            operator,
            type_annotation,
        }),
    ))
}

fn starts_type(token: &Token) -> bool {
    matches!(
        token,
        Token::Identifier(_)
            | Token::LeftParen
            | Token::LeftBracket
            | Token::LeftBrace
            | Token::String(_)
            | Token::Number(_)
            | Token::Keyword(
                Keyword::Typeof | Keyword::Void | Keyword::Null | Keyword::True | Keyword::False
            )
    )
}

fn parse_postfix_type(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let mut ty = parse_primary_type(p)?;

    while p.check(&Token::LeftBracket) && !p.newline_before() {
        p.advance();
        if p.eat(&Token::RightBracket) {
            ty = p.finish(start, Node::TSArrayType(TSArrayType { element_type: ty }));
        } else {
            let index_type = parse_type(p)?;
            p.expect(Token::RightBracket)?;
            ty = p.finish(
                start,
                Node::TSIndexedAccessType(TSIndexedAccessType {
                    object_type: ty,
                    index_type,
                }),
            );
        }
    }

    Ok(ty)
}

fn keyword_type(name: &str) -> Option<Node> {
    let node = match name {
        "string" => Node::TSStringKeyword,
        "number" => Node::TSNumberKeyword,
        "boolean" => Node::TSBooleanKeyword,
        "any" => Node::TSAnyKeyword,
        "unknown" => Node::TSUnknownKeyword,
        "never" => Node::TSNeverKeyword,
        "undefined" => Node::TSUndefinedKeyword,
        "object" => Node::TSObjectKeyword,
        "symbol" => Node::TSSymbolKeyword,
        "bigint" => Node::TSBigIntKeyword,
        _ => return None,
    };
    Some(node)
}

fn parse_primary_type(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();

    match p.current() {
        Token::Identifier(name) => {
            if let Some(node) = keyword_type(name) {
                if !matches!(p.peek(), Token::Dot) {
                    p.advance();
                    return Ok(p.alloc(node, start));
                }
            }
            let reference = parse_type_reference(p)?;
            // Type predicate `x is T`: keep the asserted type
            if p.check_ident("is") && !p.newline_before() {
                p.advance();
                return parse_type(p);
            }
            Ok(reference)
        }
        Token::Keyword(Keyword::Void) => {
            p.advance();
            Ok(p.alloc(Node::TSVoidKeyword, start))
        }
        Token::Keyword(Keyword::Null) => {
            p.advance();
            Ok(p.alloc(Node::TSNullKeyword, start))
        }
        Token::Keyword(Keyword::This) => {
            p.advance();
            let type_name = p.alloc(Node::Identifier(Identifier::new("this")), start);
            Ok(p.alloc(
                Node::TSTypeReference(TSTypeReference {
                    type_name,
                    type_arguments: Vec::new(),
                }),
                start,
            ))
        }
        // `as const`
        Token::Keyword(Keyword::Const) => {
            p.advance();
            let type_name = p.alloc(Node::Identifier(Identifier::new("const")), start);
            Ok(p.alloc(
                Node::TSTypeReference(TSTypeReference {
                    type_name,
                    type_arguments: Vec::new(),
                }),
                start,
            ))
        }
        Token::Keyword(Keyword::Typeof) => {
            p.advance();
            let expr_name = parse_entity_name(p)?;
            Ok(p.finish(start, Node::TSTypeQuery(TSTypeQuery { expr_name })))
        }
        Token::Keyword(Keyword::True) | Token::Keyword(Keyword::False) => {
            let value = p.check_keyword(Keyword::True);
            literal_type(p, LiteralValue::Boolean(value))
        }
        Token::String(s) => {
            let value = LiteralValue::String(s.clone());
            literal_type(p, value)
        }
        Token::Number(n) => {
            let value = LiteralValue::Number(*n);
            literal_type(p, value)
        }
        Token::Minus if matches!(p.peek(), Token::Number(_)) => {
            let value = match p.peek() {
                Token::Number(n) => LiteralValue::Number(-n),
                _ => LiteralValue::Null,
            };
            p.advance();
            p.advance();
            let raw = p.text(p.span_from(start)).to_string();
            let literal = p.finish(start, Node::Literal(Literal { value, raw }));
            Ok(p.finish(start, Node::TSLiteralType(TSLiteralType { literal })))
        }
        Token::LeftBrace => {
            let members = parse_type_members(p)?;
            Ok(p.finish(start, Node::TSTypeLiteral(TSTypeLiteral { members })))
        }
        Token::LeftBracket => parse_tuple_type(p),
        Token::LeftParen => {
            if is_function_type(p) {
                return parse_function_type(p);
            }
            p.advance();
            let inner = parse_type(p)?;
            p.expect(Token::RightParen)?;
            Ok(inner)
        }
        Token::Less => parse_function_type(p),
        Token::Keyword(Keyword::New) => {
            p.advance();
            parse_function_type(p)
        }
        _ => Err(p.unexpected(Vec::new())),
    }
}

fn literal_type(p: &mut Parser, value: LiteralValue) -> Result<NodeId, ParseError> {
    let span = p.current_span();
    p.advance();
    let raw = p.text(span).to_string();
    let literal = p.alloc(Node::Literal(Literal { value, raw }), span);
    Ok(p.alloc(Node::TSLiteralType(TSLiteralType { literal }), span))
}

/// `A.B.C` as nested `TSQualifiedName`s.
fn parse_entity_name(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let mut name = parse_identifier(p)?;
    while p.eat(&Token::Dot) {
        let right = parse_property_identifier(p)?;
        name = p.finish(
            start,
            Node::TSQualifiedName(TSQualifiedName { left: name, right }),
        );
    }
    Ok(name)
}

fn parse_type_reference(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let type_name = parse_entity_name(p)?;
    let type_arguments = if p.check(&Token::Less) && !p.newline_before() {
        parse_type_arguments(p)?
    } else {
        Vec::new()
    };
    Ok(p.finish(
        start,
        Node::TSTypeReference(TSTypeReference {
            type_name,
            type_arguments,
        }),
    ))
}

/// `<A, B>`
pub fn parse_type_arguments(p: &mut Parser) -> Result<Vec<NodeId>, ParseError> {
    p.expect(Token::Less)?;
    let mut arguments = Vec::new();
    loop {
        arguments.push(parse_type(p)?);
        if !p.eat(&Token::Comma) {
            break;
        }
    }
    expect_closing_angle(p)?;
    Ok(arguments)
}

/// Consume one `>`, splitting `>>`, `>=` and friends.
fn expect_closing_angle(p: &mut Parser) -> Result<(), ParseError> {
    let rest = match p.current() {
        Token::Greater => {
            p.advance();
            return Ok(());
        }
        Token::GreaterGreater => Token::Greater,
        Token::GreaterGreaterGreater => Token::GreaterGreater,
        Token::GreaterEqual => Token::Equal,
        Token::GreaterGreaterEqual => Token::GreaterEqual,
        Token::GreaterGreaterGreaterEqual => Token::GreaterGreaterEqual,
        _ => return Err(p.unexpected(vec![Token::Greater])),
    };
    p.split_current(rest);
    Ok(())
}

/// Skip a `<T extends U = V, ...>` list if present.
pub fn skip_type_parameters(p: &mut Parser) -> Result<(), ParseError> {
    if !p.eat(&Token::Less) {
        return Ok(());
    }
    let mut depth = 1usize;
    while depth > 0 {
        match p.current() {
            Token::Eof => return Err(p.unexpected(vec![Token::Greater])),
            Token::Less => {
                depth += 1;
                p.advance();
            }
            Token::Greater
            | Token::GreaterGreater
            | Token::GreaterGreaterGreater
            | Token::GreaterEqual
            | Token::GreaterGreaterEqual
            | Token::GreaterGreaterGreaterEqual => {
                expect_closing_angle(p)?;
                depth -= 1;
            }
            _ => {
                p.advance();
            }
        }
    }
    Ok(())
}

fn is_function_type(p: &Parser) -> bool {
    p.matching_close(p.pos)
        .map_or(false, |close| matches!(p.token_at(close + 1), Token::Arrow))
}

/// `<T>(params) => Return`
fn parse_function_type(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    skip_type_parameters(p)?;
    let params = pattern::parse_formal_params(p)?;
    p.expect(Token::Arrow)?;
    let return_type = parse_type(p)?;
    Ok(p.finish(
        start,
        Node::TSFunctionType(TSFunctionType {
            params,
            return_type,
        }),
    ))
}

fn parse_tuple_type(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::LeftBracket)?;
    let mut element_types = Vec::new();
    while !p.check(&Token::RightBracket) && !p.at_eof() {
        p.eat(&Token::DotDotDot);
        // Named member `label: T` or `label?: T`
        if matches!(p.current(), Token::Identifier(_))
            && matches!(p.peek(), Token::Colon | Token::Question)
        {
            p.advance();
            p.eat(&Token::Question);
            p.expect(Token::Colon)?;
        }
        element_types.push(parse_type(p)?);
        if !p.check(&Token::RightBracket) {
            p.expect(Token::Comma)?;
        }
    }
    p.expect(Token::RightBracket)?;
    Ok(p.finish(start, Node::TSTupleType(TSTupleType { element_types })))
}

/// `{ a: T; b?(x: U): V, [key: string]: W }`, braces included.
pub fn parse_type_members(p: &mut Parser) -> Result<Vec<NodeId>, ParseError> {
    p.expect(Token::LeftBrace)?;
    let mut members = Vec::new();
    while !p.check(&Token::RightBrace) && !p.at_eof() {
        members.push(parse_type_member(p)?);
        if !p.eat(&Token::Semicolon) && !p.eat(&Token::Comma) {
            if !p.check(&Token::RightBrace) && !p.newline_before() {
                return Err(p.unexpected(vec![Token::Semicolon]));
            }
        }
    }
    p.expect(Token::RightBrace)?;
    Ok(members)
}

fn parse_type_member(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let readonly = p.check_ident("readonly")
        && !matches!(p.peek(), Token::Colon | Token::Question | Token::LeftParen);
    if readonly {
        p.advance();
    }

    // Index signature `[key: string]: T`
    if p.check(&Token::LeftBracket)
        && matches!(p.peek(), Token::Identifier(_))
        && matches!(p.token_at(p.pos + 2), Token::Colon)
    {
        p.advance();
        let key = parse_identifier(p)?;
        p.expect(Token::Colon)?;
        parse_type(p)?;
        p.expect(Token::RightBracket)?;
        let type_annotation = Some(parse_type_annotation(p)?);
        return Ok(p.finish(
            start,
            Node::TSPropertySignature(TSPropertySignature {
                key,
                computed: true,
                optional: false,
                readonly,
                type_annotation,
            }),
        ));
    }

    let (key, computed) = parse_property_key(p)?;
    let optional = p.eat(&Token::Question);

    if p.check(&Token::LeftParen) || p.check(&Token::Less) {
        skip_type_parameters(p)?;
        let params = pattern::parse_formal_params(p)?;
        let return_type = if p.check(&Token::Colon) {
            Some(parse_type_annotation(p)?)
        } else {
            None
        };
        return Ok(p.finish(
            start,
            Node::TSMethodSignature(TSMethodSignature {
                key,
                params,
                return_type,
            }),
        ));
    }

    let type_annotation = if p.check(&Token::Colon) {
        Some(parse_type_annotation(p)?)
    } else {
        None
    };
    Ok(p.finish(
        start,
        Node::TSPropertySignature(TSPropertySignature {
            key,
            computed,
            optional,
            readonly,
            type_annotation,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use crate::ast::*;

    fn parses(source: &str) -> bool {
        crate::parse(source).is_ok()
    }

    #[test]
    fn test_common_annotations() {
        assert!(parses("let a: string | number[] = 1;"));
        assert!(parses("let b: Array<Map<string, number>> = x;"));
        assert!(parses("let c: { a: number; b?: string } = x;"));
        assert!(parses("let d: (x: number) => void = f;"));
        assert!(parses("let e: [string, number] = x;"));
        assert!(parses("let f: typeof window.config = x;"));
        assert!(parses("let g: keyof T = x;"));
    }

    #[test]
    fn test_nested_generic_closing_split() {
        let ast = crate::parse("let x: A<B<C>>= y;").unwrap();
        let references = ast
            .preorder()
            .filter(|n| n.node_type() == NodeType::TSTypeReference)
            .count();
        assert_eq!(references, 3);
    }

    #[test]
    fn test_keyword_types() {
        let ast = crate::parse("let x: unknown = 1;").unwrap();
        assert!(ast
            .preorder()
            .any(|n| n.node_type() == NodeType::TSUnknownKeyword));
    }

    #[test]
    fn test_type_alias_and_interface() {
        assert!(parses("type Id = string | number;"));
        assert!(parses("interface User extends Base { name: string; greet(): void }"));
    }
}
