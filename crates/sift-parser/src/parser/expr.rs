//! Expression parsing

use super::precedence::{infix_operator, is_right_associative, InfixOp, Precedence};
use super::{pattern, stmt, types, ParseError, Parser};
use crate::ast::*;
use crate::token::{Keyword, Span, TemplatePart, Token};

/// Parse a full expression, including the comma operator.
pub fn parse_expression(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let first = parse_assignment(p)?;
    if !p.check(&Token::Comma) {
        return Ok(first);
    }

    let mut expressions = vec![first];
    while p.eat(&Token::Comma) {
        expressions.push(parse_assignment(p)?);
    }
    Ok(p.finish(start, Node::SequenceExpression(SequenceExpression { expressions })))
}

/// Parse an assignment-level expression (no top-level comma).
pub fn parse_assignment(p: &mut Parser) -> Result<NodeId, ParseError> {
    p.enter()?;
    let result = parse_assignment_inner(p);
    p.leave();
    result
}

enum ArrowCandidate {
    Yes,
    Maybe,
    No,
}

fn parse_assignment_inner(p: &mut Parser) -> Result<NodeId, ParseError> {
    match arrow_candidate(p) {
        ArrowCandidate::Yes => return parse_arrow_function(p),
        ArrowCandidate::Maybe => {
            if let Some(arrow) = p.try_parse(parse_arrow_function) {
                return Ok(arrow);
            }
        }
        ArrowCandidate::No => {}
    }

    if p.check_keyword(Keyword::Yield) {
        return parse_yield(p);
    }

    let start = p.current_span();
    let left = parse_conditional(p)?;

    let Some(operator) = assignment_operator(p.current()) else {
        return Ok(left);
    };
    p.advance();

    let left = if operator == AssignmentOperator::Assign {
        pattern::to_pattern(p, left)
    } else {
        left
    };
    let right = parse_assignment(p)?;
    Ok(p.finish(
        start,
        Node::AssignmentExpression(AssignmentExpression {
            operator,
            left,
            right,
        }),
    ))
}

fn assignment_operator(token: &Token) -> Option<AssignmentOperator> {
    use AssignmentOperator as A;
    let op = match token {
        Token::Equal => A::Assign,
        Token::PlusEqual => A::AddAssign,
        Token::MinusEqual => A::SubtractAssign,
        Token::StarEqual => A::MultiplyAssign,
        Token::SlashEqual => A::DivideAssign,
        Token::PercentEqual => A::RemainderAssign,
        Token::StarStarEqual => A::ExponentAssign,
        Token::LessLessEqual => A::ShiftLeftAssign,
        Token::GreaterGreaterEqual => A::ShiftRightAssign,
        Token::GreaterGreaterGreaterEqual => A::UnsignedShiftRightAssign,
        Token::PipeEqual => A::BitOrAssign,
        Token::CaretEqual => A::BitXorAssign,
        Token::AmpEqual => A::BitAndAssign,
        Token::AmpAmpEqual => A::AndAssign,
        Token::PipePipeEqual => A::OrAssign,
        Token::QuestionQuestionEqual => A::NullishAssign,
        _ => return None,
    };
    Some(op)
}

/// Decide from lookahead whether an arrow function starts here.
fn arrow_candidate(p: &Parser) -> ArrowCandidate {
    let mut i = p.pos;
    if p.check_ident("async")
        && !p.newline_before_at(i + 1)
        && matches!(p.token_at(i + 1), Token::Identifier(_) | Token::LeftParen)
    {
        i += 1;
    }

    match p.token_at(i) {
        Token::Identifier(_) if matches!(p.token_at(i + 1), Token::Arrow) => ArrowCandidate::Yes,
        Token::LeftParen => match p.matching_close(i).map(|close| p.token_at(close + 1)) {
            Some(Token::Arrow) => ArrowCandidate::Yes,
            Some(Token::Colon) => ArrowCandidate::Maybe,
            _ => ArrowCandidate::No,
        },
        Token::Less => ArrowCandidate::Maybe,
        _ => ArrowCandidate::No,
    }
}

/// `async? (params) => body` or `x => body`
pub fn parse_arrow_function(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let is_async = p.check_ident("async") && !matches!(p.peek(), Token::Arrow);
    if is_async {
        p.advance();
    }

    types::skip_type_parameters(p)?;
    let params = if matches!(p.current(), Token::Identifier(_)) {
        vec![parse_identifier(p)?]
    } else {
        pattern::parse_formal_params(p)?
    };
    let return_type = if p.check(&Token::Colon) {
        Some(types::parse_type_annotation(p)?)
    } else {
        None
    };
    p.expect(Token::Arrow)?;

    let (body, expression) = if p.check(&Token::LeftBrace) {
        (stmt::parse_block(p)?, false)
    } else {
        (parse_assignment(p)?, true)
    };

    Ok(p.finish(
        start,
        Node::ArrowFunctionExpression(ArrowFunctionExpression {
            params,
            body,
            is_async,
            expression,
            return_type,
        }),
    ))
}

fn parse_yield(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.advance();
    let delegate = p.eat(&Token::Star);
    let ends_here = p.newline_before()
        || matches!(
            p.current(),
            Token::RightParen
                | Token::RightBracket
                | Token::RightBrace
                | Token::Comma
                | Token::Semicolon
                | Token::Colon
                | Token::Eof
        );
    let argument = if ends_here && !delegate {
        None
    } else {
        Some(parse_assignment(p)?)
    };
    Ok(p.finish(
        start,
        Node::YieldExpression(YieldExpression { argument, delegate }),
    ))
}

fn parse_conditional(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let test = parse_binary(p, Precedence::NullCoalescing)?;
    if !p.eat(&Token::Question) {
        return Ok(test);
    }

    let consequent = p.with_in(true, parse_assignment)?;
    p.expect(Token::Colon)?;
    let alternate = parse_assignment(p)?;
    Ok(p.finish(
        start,
        Node::ConditionalExpression(ConditionalExpression {
            test,
            consequent,
            alternate,
        }),
    ))
}

/// Precedence climbing over infix operators and `as` assertions.
fn parse_binary(p: &mut Parser, min: Precedence) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let mut left = parse_unary(p)?;

    loop {
        if p.check_ident("as") && !p.newline_before() && Precedence::Relational >= min {
            p.advance();
            let type_annotation = types::parse_type(p)?;
            left = p.finish(
                start,
                Node::TSAsExpression(TSAsExpression {
                    expression: left,
                    type_annotation,
                }),
            );
            continue;
        }

        let Some((op, prec)) = infix_operator(p.current(), p.allow_in()) else {
            break;
        };
        if prec < min {
            break;
        }
        let right_assoc = is_right_associative(p.current());
        p.advance();

        let next_min = if right_assoc { prec } else { prec.next() };
        let right = parse_binary(p, next_min)?;
        let node = match op {
            InfixOp::Binary(operator) => Node::BinaryExpression(BinaryExpression {
                operator,
                left,
                right,
            }),
            InfixOp::Logical(operator) => Node::LogicalExpression(LogicalExpression {
                operator,
                left,
                right,
            }),
        };
        left = p.finish(start, node);
    }

    Ok(left)
}

fn parse_unary(p: &mut Parser) -> Result<NodeId, ParseError> {
    p.enter()?;
    let result = parse_unary_inner(p);
    p.leave();
    result
}

fn parse_unary_inner(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let operator = match p.current() {
        Token::Bang => Some(UnaryOperator::Not),
        Token::Tilde => Some(UnaryOperator::BitNot),
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Minus),
        Token::Keyword(Keyword::Typeof) => Some(UnaryOperator::Typeof),
        Token::Keyword(Keyword::Void) => Some(UnaryOperator::Void),
        Token::Keyword(Keyword::Delete) => Some(UnaryOperator::Delete),
        _ => None,
    };
    if let Some(operator) = operator {
        p.advance();
        let argument = parse_unary(p)?;
        return Ok(p.finish(
            start,
            Node::UnaryExpression(UnaryExpression { operator, argument }),
        ));
    }

    let update = match p.current() {
        Token::PlusPlus => Some(UpdateOperator::Increment),
        Token::MinusMinus => Some(UpdateOperator::Decrement),
        _ => None,
    };
    if let Some(operator) = update {
        p.advance();
        let argument = parse_unary(p)?;
        return Ok(p.finish(
            start,
            Node::UpdateExpression(UpdateExpression {
                operator,
                prefix: true,
                argument,
            }),
        ));
    }

    if p.eat_keyword(Keyword::Await) {
        let argument = parse_unary(p)?;
        return Ok(p.finish(start, Node::AwaitExpression(AwaitExpression { argument })));
    }

    if p.check(&Token::Less) {
        return Err(ParseError::unsupported(
            "angle-bracket type assertion",
            p.current_span(),
        ));
    }

    parse_postfix(p)
}

fn parse_postfix(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let argument = parse_lhs(p)?;

    let operator = match p.current() {
        Token::PlusPlus if !p.newline_before() => UpdateOperator::Increment,
        Token::MinusMinus if !p.newline_before() => UpdateOperator::Decrement,
        _ => return Ok(argument),
    };
    p.advance();
    Ok(p.finish(
        start,
        Node::UpdateExpression(UpdateExpression {
            operator,
            prefix: false,
            argument,
        }),
    ))
}

/// Left-hand-side expression: primary or `new`, then member/call suffixes.
pub fn parse_lhs(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let expr = if p.check_keyword(Keyword::New) {
        parse_new(p)?
    } else {
        parse_primary(p)?
    };
    parse_call_tail(p, start, expr, true)
}

/// Member, call, tagged template and non-null suffixes.
///
/// Any `?.` in the chain wraps the result in a `ChainExpression`.
fn parse_call_tail(
    p: &mut Parser,
    start: Span,
    mut expr: NodeId,
    calls: bool,
) -> Result<NodeId, ParseError> {
    let mut in_chain = false;

    loop {
        match p.current() {
            Token::Dot => {
                p.advance();
                let property = parse_property_identifier(p)?;
                expr = member(p, start, expr, property, false, false);
            }
            Token::QuestionDot if calls => {
                p.advance();
                in_chain = true;
                match p.current() {
                    Token::LeftParen => {
                        let arguments = parse_arguments(p)?;
                        expr = p.finish(
                            start,
                            Node::CallExpression(CallExpression {
                                callee: expr,
                                arguments,
                                optional: true,
                            }),
                        );
                    }
                    Token::LeftBracket => {
                        p.advance();
                        let property = p.with_in(true, parse_expression)?;
                        p.expect(Token::RightBracket)?;
                        expr = member(p, start, expr, property, true, true);
                    }
                    _ => {
                        let property = parse_property_identifier(p)?;
                        expr = member(p, start, expr, property, false, true);
                    }
                }
            }
            Token::LeftBracket => {
                p.advance();
                let property = p.with_in(true, parse_expression)?;
                p.expect(Token::RightBracket)?;
                expr = member(p, start, expr, property, true, false);
            }
            Token::LeftParen if calls => {
                let arguments = parse_arguments(p)?;
                expr = p.finish(
                    start,
                    Node::CallExpression(CallExpression {
                        callee: expr,
                        arguments,
                        optional: false,
                    }),
                );
            }
            Token::Template(_) => {
                let quasi = parse_template(p)?;
                expr = p.finish(
                    start,
                    Node::TaggedTemplateExpression(TaggedTemplateExpression { tag: expr, quasi }),
                );
            }
            Token::Bang if !p.newline_before() => {
                p.advance();
                expr = p.finish(
                    start,
                    Node::TSNonNullExpression(TSNonNullExpression { expression: expr }),
                );
            }
            _ => break,
        }
    }

    if in_chain {
        let span = p.span_from(start);
        expr = p.alloc(Node::ChainExpression(ChainExpression { expression: expr }), span);
    }
    Ok(expr)
}

fn member(
    p: &mut Parser,
    start: Span,
    object: NodeId,
    property: NodeId,
    computed: bool,
    optional: bool,
) -> NodeId {
    p.finish(
        start,
        Node::MemberExpression(MemberExpression {
            object,
            property,
            computed,
            optional,
        }),
    )
}

fn parse_new(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::New)?;
    if p.check(&Token::Dot) {
        return Err(ParseError::unsupported("new.target", start));
    }

    let callee_start = p.current_span();
    let callee = if p.check_keyword(Keyword::New) {
        parse_new(p)?
    } else {
        parse_primary(p)?
    };
    let callee = parse_call_tail(p, callee_start, callee, false)?;
    let arguments = if p.check(&Token::LeftParen) {
        parse_arguments(p)?
    } else {
        Vec::new()
    };
    Ok(p.finish(start, Node::NewExpression(NewExpression { callee, arguments })))
}

/// `( arg, ...spread )`
pub fn parse_arguments(p: &mut Parser) -> Result<Vec<NodeId>, ParseError> {
    p.expect(Token::LeftParen)?;
    p.with_in(true, |p| {
        let mut arguments = Vec::new();
        while !p.check(&Token::RightParen) && !p.at_eof() {
            arguments.push(parse_spread_or_assignment(p)?);
            if !p.check(&Token::RightParen) {
                p.expect(Token::Comma)?;
            }
        }
        p.expect(Token::RightParen)?;
        Ok(arguments)
    })
}

fn parse_spread_or_assignment(p: &mut Parser) -> Result<NodeId, ParseError> {
    if !p.check(&Token::DotDotDot) {
        return parse_assignment(p);
    }
    let start = p.current_span();
    p.advance();
    let argument = parse_assignment(p)?;
    Ok(p.finish(start, Node::SpreadElement(SpreadElement { argument })))
}

fn parse_primary(p: &mut Parser) -> Result<NodeId, ParseError> {
    let span = p.current_span();

    match p.current() {
        Token::Identifier(name) => {
            if name == "async"
                && p.peek() == &Token::Keyword(Keyword::Function)
                && !p.newline_before_at(p.pos + 1)
            {
                return parse_function_expression(p);
            }
            parse_identifier(p)
        }
        Token::Keyword(Keyword::This) => {
            p.advance();
            Ok(p.alloc(Node::ThisExpression, span))
        }
        Token::Keyword(Keyword::Super) => {
            p.advance();
            Ok(p.alloc(Node::Super, span))
        }
        Token::Keyword(Keyword::True) => Ok(literal(p, LiteralValue::Boolean(true))),
        Token::Keyword(Keyword::False) => Ok(literal(p, LiteralValue::Boolean(false))),
        Token::Keyword(Keyword::Null) => Ok(literal(p, LiteralValue::Null)),
        Token::Keyword(Keyword::Function) => parse_function_expression(p),
        Token::Keyword(Keyword::Class) => stmt::parse_class(p, true),
        Token::Keyword(Keyword::Import) => {
            // `import(...)` and `import.meta`
            p.advance();
            Ok(p.alloc(Node::Identifier(Identifier::new("import")), span))
        }
        Token::Number(n) => {
            let value = LiteralValue::Number(*n);
            Ok(literal(p, value))
        }
        Token::String(s) => {
            let value = LiteralValue::String(s.clone());
            Ok(literal(p, value))
        }
        Token::Template(_) => parse_template(p),
        Token::LeftParen => parse_parenthesized(p),
        Token::LeftBracket => parse_array_literal(p),
        Token::LeftBrace => parse_object_literal(p),
        Token::Slash | Token::SlashEqual => {
            Err(ParseError::unsupported("regular expression literal", span))
        }
        Token::Less => Err(ParseError::unsupported("JSX", span)),
        _ => Err(p.unexpected(Vec::new())),
    }
}

fn literal(p: &mut Parser, value: LiteralValue) -> NodeId {
    let span = p.current_span();
    p.advance();
    let raw = p.text(span).to_string();
    p.alloc(Node::Literal(Literal { value, raw }), span)
}

/// Binding or reference identifier.
pub fn parse_identifier(p: &mut Parser) -> Result<NodeId, ParseError> {
    let span = p.current_span();
    match p.current() {
        Token::Identifier(name) => {
            let name = name.clone();
            p.advance();
            Ok(p.alloc(Node::Identifier(Identifier::new(name)), span))
        }
        _ => Err(p.unexpected(vec![Token::Identifier(String::new())])),
    }
}

/// Identifier after `.`, where reserved words are allowed.
pub fn parse_property_identifier(p: &mut Parser) -> Result<NodeId, ParseError> {
    let span = p.current_span();
    let name = match p.current() {
        Token::Identifier(name) => name.clone(),
        Token::Keyword(kw) => kw.as_str().to_string(),
        _ => return Err(p.unexpected(vec![Token::Identifier(String::new())])),
    };
    p.advance();
    Ok(p.alloc(Node::Identifier(Identifier::new(name)), span))
}

/// Key of an object member, class member or type member.
///
/// Returns the key and whether it was computed (`[expr]`).
pub fn parse_property_key(p: &mut Parser) -> Result<(NodeId, bool), ParseError> {
    match p.current() {
        Token::LeftBracket => {
            p.advance();
            let key = p.with_in(true, parse_assignment)?;
            p.expect(Token::RightBracket)?;
            Ok((key, true))
        }
        Token::String(s) => {
            let value = LiteralValue::String(s.clone());
            Ok((literal(p, value), false))
        }
        Token::Number(n) => {
            let value = LiteralValue::Number(*n);
            Ok((literal(p, value), false))
        }
        _ => Ok((parse_property_identifier(p)?, false)),
    }
}

/// Whether the current token can start a property key.
pub fn at_property_key(p: &Parser, index: usize) -> bool {
    matches!(
        p.token_at(index),
        Token::Identifier(_)
            | Token::Keyword(_)
            | Token::String(_)
            | Token::Number(_)
            | Token::LeftBracket
    )
}

/// Template literal from the current `Template` token.
pub fn parse_template(p: &mut Parser) -> Result<NodeId, ParseError> {
    let span = p.current_span();
    let parts = match p.advance() {
        Token::Template(parts) => parts,
        _ => return Err(ParseError::invalid_syntax("expected template literal", span)),
    };

    let quasi_count = parts
        .iter()
        .filter(|part| matches!(part, TemplatePart::Quasi { .. }))
        .count();
    let mut quasis = Vec::with_capacity(quasi_count);
    let mut expressions = Vec::new();

    for part in parts {
        match part {
            TemplatePart::Quasi { raw, span } => {
                let tail = quasis.len() + 1 == quasi_count;
                quasis.push(p.alloc(Node::TemplateElement(TemplateElement { raw, tail }), span));
            }
            TemplatePart::Expression(tokens) => {
                let expr = p.with_tokens(tokens, |p| {
                    let expr = parse_expression(p)?;
                    if !p.at_eof() {
                        return Err(p.unexpected(vec![Token::RightBrace]));
                    }
                    Ok(expr)
                })?;
                expressions.push(expr);
            }
        }
    }

    Ok(p.alloc(
        Node::TemplateLiteral(TemplateLiteral { quasis, expressions }),
        span,
    ))
}

fn parse_parenthesized(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::LeftParen)?;
    let expression = p.with_in(true, parse_expression)?;
    p.expect(Token::RightParen)?;
    Ok(p.finish(
        start,
        Node::ParenthesizedExpression(ParenthesizedExpression { expression }),
    ))
}

fn parse_array_literal(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::LeftBracket)?;

    let elements = p.with_in(true, |p| {
        let mut elements = Vec::new();
        while !p.check(&Token::RightBracket) && !p.at_eof() {
            if p.eat(&Token::Comma) {
                elements.push(None);
                continue;
            }
            elements.push(Some(parse_spread_or_assignment(p)?));
            if !p.check(&Token::RightBracket) {
                p.expect(Token::Comma)?;
            }
        }
        Ok(elements)
    })?;

    p.expect(Token::RightBracket)?;
    Ok(p.finish(start, Node::ArrayExpression(ArrayExpression { elements })))
}

fn parse_object_literal(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::LeftBrace)?;

    let properties = p.with_in(true, |p| {
        let mut properties = Vec::new();
        while !p.check(&Token::RightBrace) && !p.at_eof() {
            properties.push(parse_object_member(p)?);
            if !p.check(&Token::RightBrace) {
                p.expect(Token::Comma)?;
            }
        }
        Ok(properties)
    })?;

    p.expect(Token::RightBrace)?;
    Ok(p.finish(start, Node::ObjectExpression(ObjectExpression { properties })))
}

fn parse_object_member(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    if p.check(&Token::DotDotDot) {
        return parse_spread_or_assignment(p);
    }

    let mut kind = PropertyKind::Init;
    let mut is_async = false;
    if (p.check_ident("get") || p.check_ident("set")) && at_property_key(p, p.pos + 1) {
        kind = if p.check_ident("get") {
            PropertyKind::Get
        } else {
            PropertyKind::Set
        };
        p.advance();
    } else if p.check_ident("async")
        && !p.newline_before_at(p.pos + 1)
        && (at_property_key(p, p.pos + 1) || matches!(p.peek(), Token::Star))
    {
        is_async = true;
        p.advance();
    }
    let generator = p.eat(&Token::Star);

    let (key, computed) = parse_property_key(p)?;

    if p.check(&Token::LeftParen) || p.check(&Token::Less) {
        let value = parse_method_function(p, is_async, generator)?;
        return Ok(p.finish(
            start,
            Node::Property(Property {
                key,
                value,
                kind,
                computed,
                shorthand: false,
                method: kind == PropertyKind::Init,
            }),
        ));
    }
    if kind != PropertyKind::Init || is_async || generator {
        return Err(p.unexpected(vec![Token::LeftParen]));
    }

    if p.eat(&Token::Colon) {
        let value = parse_assignment(p)?;
        return Ok(p.finish(
            start,
            Node::Property(Property {
                key,
                value,
                kind,
                computed,
                shorthand: false,
                method: false,
            }),
        ));
    }

    if computed || !matches!(p.node(key), Some(Node::Identifier(_))) {
        return Err(p.unexpected(vec![Token::Colon]));
    }

    // Shorthand, optionally with a default when used as a pattern
    let value = if p.eat(&Token::Equal) {
        let right = parse_assignment(p)?;
        p.finish(
            start,
            Node::AssignmentPattern(AssignmentPattern { left: key, right }),
        )
    } else {
        key
    };
    Ok(p.finish(
        start,
        Node::Property(Property {
            key,
            value,
            kind,
            computed: false,
            shorthand: true,
            method: false,
        }),
    ))
}

/// Parameters and body of a method; the node spans from `(` to `}`.
pub fn parse_method_function(
    p: &mut Parser,
    is_async: bool,
    generator: bool,
) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let (params, return_type) = parse_signature(p)?;
    let body = stmt::parse_block(p)?;
    Ok(p.finish(
        start,
        Node::FunctionExpression(Function {
            id: None,
            params,
            body,
            is_async,
            generator,
            return_type,
        }),
    ))
}

/// `<T>(params): ReturnType`
pub fn parse_signature(p: &mut Parser) -> Result<(Vec<NodeId>, Option<NodeId>), ParseError> {
    types::skip_type_parameters(p)?;
    let params = pattern::parse_formal_params(p)?;
    let return_type = if p.check(&Token::Colon) {
        Some(types::parse_type_annotation(p)?)
    } else {
        None
    };
    Ok((params, return_type))
}

fn parse_function_expression(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let is_async = p.eat_ident("async");
    p.expect_keyword(Keyword::Function)?;
    let generator = p.eat(&Token::Star);
    let id = if matches!(p.current(), Token::Identifier(_)) {
        Some(parse_identifier(p)?)
    } else {
        None
    };
    let (params, return_type) = parse_signature(p)?;
    let body = stmt::parse_block(p)?;
    Ok(p.finish(
        start,
        Node::FunctionExpression(Function {
            id,
            params,
            body,
            is_async,
            generator,
            return_type,
        }),
    ))
}
