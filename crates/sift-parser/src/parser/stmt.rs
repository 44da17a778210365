//! Statement and declaration parsing

use super::expr::{
    at_property_key, parse_assignment, parse_expression, parse_identifier, parse_lhs,
    parse_property_key, parse_property_identifier, parse_signature,
};
use super::{pattern, types, ParseError, Parser};
use crate::ast::*;
use crate::token::{Keyword, Token};

/// Modifiers that may precede a class member name.
const MEMBER_MODIFIERS: &[&str] = &[
    "static",
    "public",
    "private",
    "protected",
    "readonly",
    "abstract",
    "declare",
    "override",
    "accessor",
];

pub fn parse_statement(p: &mut Parser) -> Result<NodeId, ParseError> {
    p.enter()?;
    let result = parse_statement_inner(p);
    p.leave();
    result
}

fn parse_statement_inner(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();

    match p.current() {
        Token::LeftBrace => parse_block(p),
        Token::Semicolon => {
            p.advance();
            Ok(p.alloc(Node::EmptyStatement, start))
        }
        Token::Keyword(Keyword::Var | Keyword::Let | Keyword::Const) => {
            parse_variable_declaration(p, false)
        }
        Token::Keyword(Keyword::Function) => parse_function_declaration(p),
        Token::Keyword(Keyword::Class) => parse_class(p, false),
        Token::Keyword(Keyword::If) => parse_if(p),
        Token::Keyword(Keyword::For) => parse_for(p),
        Token::Keyword(Keyword::While) => parse_while(p),
        Token::Keyword(Keyword::Do) => parse_do_while(p),
        Token::Keyword(Keyword::Return) => parse_return(p),
        Token::Keyword(Keyword::Break) => parse_jump(p, true),
        Token::Keyword(Keyword::Continue) => parse_jump(p, false),
        Token::Keyword(Keyword::Throw) => parse_throw(p),
        Token::Keyword(Keyword::Try) => parse_try(p),
        Token::Keyword(Keyword::Switch) => parse_switch(p),
        Token::Keyword(Keyword::Debugger) => {
            p.advance();
            p.consume_semicolon()?;
            Ok(p.finish(start, Node::DebuggerStatement))
        }
        Token::Keyword(Keyword::Import) if !matches!(p.peek(), Token::LeftParen | Token::Dot) => {
            parse_import(p)
        }
        Token::Keyword(Keyword::Export) => parse_export(p),
        Token::Identifier(name) => {
            let same_line = !p.newline_before_at(p.pos + 1);
            match (name.as_str(), p.peek()) {
                ("async", Token::Keyword(Keyword::Function)) if same_line => {
                    parse_function_declaration(p)
                }
                ("type", Token::Identifier(_)) if same_line => parse_type_alias(p),
                ("interface", Token::Identifier(_)) if same_line => parse_interface(p),
                ("declare" | "abstract", Token::Keyword(_) | Token::Identifier(_)) if same_line => {
                    p.advance();
                    parse_statement(p)
                }
                (_, Token::Colon) => parse_labeled(p),
                _ => parse_expression_statement(p),
            }
        }
        _ => parse_expression_statement(p),
    }
}

fn parse_expression_statement(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let expression = parse_expression(p)?;
    p.consume_semicolon()?;
    Ok(p.finish(
        start,
        Node::ExpressionStatement(ExpressionStatement { expression }),
    ))
}

/// `{ statements }`
pub fn parse_block(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::LeftBrace)?;
    let mut body = Vec::new();
    while !p.check(&Token::RightBrace) && !p.at_eof() {
        body.push(parse_statement(p)?);
    }
    p.expect(Token::RightBrace)?;
    Ok(p.finish(start, Node::BlockStatement(BlockStatement { body })))
}

/// `var|let|const a = 1, b;` or, in a `for` head, the same without `;`.
fn parse_variable_declaration(p: &mut Parser, for_head: bool) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let kind = match p.advance() {
        Token::Keyword(Keyword::Var) => VariableKind::Var,
        Token::Keyword(Keyword::Let) => VariableKind::Let,
        _ => VariableKind::Const,
    };

    let mut declarations = Vec::new();
    loop {
        let decl_start = p.current_span();
        let id = pattern::parse_binding_with_annotation(p)?;
        let init = if p.eat(&Token::Equal) {
            Some(parse_assignment(p)?)
        } else {
            None
        };
        declarations.push(p.finish(
            decl_start,
            Node::VariableDeclarator(VariableDeclarator { id, init }),
        ));
        if !p.eat(&Token::Comma) {
            break;
        }
    }

    if !for_head {
        p.consume_semicolon()?;
    }
    Ok(p.finish(
        start,
        Node::VariableDeclaration(VariableDeclaration { kind, declarations }),
    ))
}

/// `async? function* name(params) { body }`; a signature without body becomes
/// a `TSDeclareFunction`.
fn parse_function_declaration(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let is_async = p.eat_ident("async");
    p.expect_keyword(Keyword::Function)?;
    let generator = p.eat(&Token::Star);
    // Anonymous only under `export default`
    let id = if matches!(p.current(), Token::Identifier(_)) {
        Some(parse_identifier(p)?)
    } else {
        None
    };
    let (params, return_type) = parse_signature(p)?;

    if !p.check(&Token::LeftBrace) {
        p.consume_semicolon()?;
        return Ok(p.finish(
            start,
            Node::TSDeclareFunction(TSDeclareFunction {
                id,
                params,
                return_type,
                is_async,
            }),
        ));
    }

    let body = parse_block(p)?;
    Ok(p.finish(
        start,
        Node::FunctionDeclaration(Function {
            id,
            params,
            body,
            is_async,
            generator,
            return_type,
        }),
    ))
}

/// Class declaration or expression.
pub fn parse_class(p: &mut Parser, expression: bool) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::Class)?;

    let id = match p.current() {
        Token::Identifier(name) if name != "implements" => Some(parse_identifier(p)?),
        _ => None,
    };
    types::skip_type_parameters(p)?;

    let super_class = if p.eat_keyword(Keyword::Extends) {
        let super_class = parse_lhs(p)?;
        if p.check(&Token::Less) {
            types::parse_type_arguments(p)?;
        }
        Some(super_class)
    } else {
        None
    };
    if p.eat_ident("implements") {
        loop {
            types::parse_type(p)?;
            if !p.eat(&Token::Comma) {
                break;
            }
        }
    }

    let body = parse_class_body(p)?;
    let class = Class {
        id,
        super_class,
        body,
    };
    let node = if expression {
        Node::ClassExpression(class)
    } else {
        Node::ClassDeclaration(class)
    };
    Ok(p.finish(start, node))
}

fn parse_class_body(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect(Token::LeftBrace)?;
    let mut body = Vec::new();
    while !p.check(&Token::RightBrace) && !p.at_eof() {
        if p.eat(&Token::Semicolon) {
            continue;
        }
        body.push(parse_class_member(p)?);
    }
    p.expect(Token::RightBrace)?;
    Ok(p.finish(start, Node::ClassBody(ClassBody { body })))
}

/// Whether the identifier at the cursor is a modifier rather than a name.
fn at_member_modifier(p: &Parser) -> bool {
    let is_modifier =
        matches!(p.current(), Token::Identifier(m) if MEMBER_MODIFIERS.contains(&m.as_str()));
    is_modifier
        && !p.newline_before_at(p.pos + 1)
        && (at_property_key(p, p.pos + 1) || matches!(p.peek(), Token::Star))
}

fn parse_class_member(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();

    let mut is_static = false;
    while at_member_modifier(p) {
        if p.check_ident("static") {
            is_static = true;
        }
        p.advance();
    }
    if p.check_ident("static") && matches!(p.peek(), Token::LeftBrace) {
        return Err(ParseError::unsupported("class static block", start));
    }

    let mut kind = MethodKind::Method;
    let mut is_async = false;
    if (p.check_ident("get") || p.check_ident("set")) && at_property_key(p, p.pos + 1) {
        kind = if p.check_ident("get") {
            MethodKind::Get
        } else {
            MethodKind::Set
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
    let optional = p.eat(&Token::Question);
    if !optional {
        p.eat(&Token::Bang);
    }

    if p.check(&Token::LeftParen) || p.check(&Token::Less) {
        let fn_start = p.current_span();
        let (params, return_type) = parse_signature(p)?;

        if !p.check(&Token::LeftBrace) {
            // Overload or abstract method
            p.consume_semicolon()?;
            return Ok(p.finish(
                start,
                Node::TSMethodSignature(TSMethodSignature {
                    key,
                    params,
                    return_type,
                }),
            ));
        }

        let body = parse_block(p)?;
        let value = p.finish(
            fn_start,
            Node::FunctionExpression(Function {
                id: None,
                params,
                body,
                is_async,
                generator,
                return_type,
            }),
        );
        let is_constructor = !computed
            && matches!(p.node(key), Some(Node::Identifier(id)) if id.name == "constructor");
        if is_constructor {
            kind = MethodKind::Constructor;
        }
        return Ok(p.finish(
            start,
            Node::MethodDefinition(MethodDefinition {
                key,
                value,
                kind,
                computed,
                is_static,
            }),
        ));
    }

    let type_annotation = if p.check(&Token::Colon) {
        Some(types::parse_type_annotation(p)?)
    } else {
        None
    };
    let value = if p.eat(&Token::Equal) {
        Some(p.with_in(true, parse_assignment)?)
    } else {
        None
    };
    p.consume_semicolon()?;
    Ok(p.finish(
        start,
        Node::PropertyDefinition(PropertyDefinition {
            key,
            value,
            computed,
            is_static,
            type_annotation,
        }),
    ))
}

fn parse_paren_expression(p: &mut Parser) -> Result<NodeId, ParseError> {
    p.expect(Token::LeftParen)?;
    let expr = p.with_in(true, parse_expression)?;
    p.expect(Token::RightParen)?;
    Ok(expr)
}

fn parse_if(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::If)?;
    let test = parse_paren_expression(p)?;
    let consequent = parse_statement(p)?;
    let alternate = if p.eat_keyword(Keyword::Else) {
        Some(parse_statement(p)?)
    } else {
        None
    };
    Ok(p.finish(
        start,
        Node::IfStatement(IfStatement {
            test,
            consequent,
            alternate,
        }),
    ))
}

fn parse_for(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::For)?;
    let is_await = p.eat_keyword(Keyword::Await);
    p.expect(Token::LeftParen)?;

    let init = match p.current() {
        Token::Semicolon => None,
        Token::Keyword(Keyword::Var | Keyword::Let | Keyword::Const) => {
            Some(p.with_in(false, |p| parse_variable_declaration(p, true))?)
        }
        _ => Some(p.with_in(false, parse_expression)?),
    };

    if let Some(left) = init {
        let is_of = p.check_ident("of");
        if is_of || p.check_keyword(Keyword::In) {
            p.advance();
            let left = pattern::to_pattern(p, left);
            let right = if is_of {
                p.with_in(true, parse_assignment)?
            } else {
                p.with_in(true, parse_expression)?
            };
            p.expect(Token::RightParen)?;
            let body = parse_statement(p)?;
            let node = if is_of {
                Node::ForOfStatement(ForOfStatement {
                    left,
                    right,
                    body,
                    is_await,
                })
            } else {
                Node::ForInStatement(ForInStatement { left, right, body })
            };
            return Ok(p.finish(start, node));
        }
    }

    p.expect(Token::Semicolon)?;
    let test = if p.check(&Token::Semicolon) {
        None
    } else {
        Some(p.with_in(true, parse_expression)?)
    };
    p.expect(Token::Semicolon)?;
    let update = if p.check(&Token::RightParen) {
        None
    } else {
        Some(p.with_in(true, parse_expression)?)
    };
    p.expect(Token::RightParen)?;
    let body = parse_statement(p)?;

    Ok(p.finish(
        start,
        Node::ForStatement(ForStatement {
            init,
            test,
            update,
            body,
        }),
    ))
}

fn parse_while(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::While)?;
    let test = parse_paren_expression(p)?;
    let body = parse_statement(p)?;
    Ok(p.finish(start, Node::WhileStatement(WhileStatement { test, body })))
}

fn parse_do_while(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::Do)?;
    let body = parse_statement(p)?;
    p.expect_keyword(Keyword::While)?;
    let test = parse_paren_expression(p)?;
    p.eat(&Token::Semicolon);
    Ok(p.finish(start, Node::DoWhileStatement(DoWhileStatement { body, test })))
}

/// Whether the statement ends right here (before ASI applies).
fn at_statement_end(p: &Parser) -> bool {
    matches!(
        p.current(),
        Token::Semicolon | Token::RightBrace | Token::Eof
    ) || p.newline_before()
}

fn parse_return(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::Return)?;
    let argument = if at_statement_end(p) {
        None
    } else {
        Some(parse_expression(p)?)
    };
    p.consume_semicolon()?;
    Ok(p.finish(start, Node::ReturnStatement(ReturnStatement { argument })))
}

fn parse_jump(p: &mut Parser, is_break: bool) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.advance();
    let label = if matches!(p.current(), Token::Identifier(_)) && !p.newline_before() {
        Some(parse_identifier(p)?)
    } else {
        None
    };
    p.consume_semicolon()?;
    let node = if is_break {
        Node::BreakStatement(BreakStatement { label })
    } else {
        Node::ContinueStatement(ContinueStatement { label })
    };
    Ok(p.finish(start, node))
}

fn parse_throw(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::Throw)?;
    let argument = parse_expression(p)?;
    p.consume_semicolon()?;
    Ok(p.finish(start, Node::ThrowStatement(ThrowStatement { argument })))
}

fn parse_try(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::Try)?;
    let block = parse_block(p)?;

    let handler = if p.check_keyword(Keyword::Catch) {
        let catch_start = p.current_span();
        p.advance();
        let param = if p.eat(&Token::LeftParen) {
            let param = pattern::parse_binding_with_annotation(p)?;
            p.expect(Token::RightParen)?;
            Some(param)
        } else {
            None
        };
        let body = parse_block(p)?;
        Some(p.finish(catch_start, Node::CatchClause(CatchClause { param, body })))
    } else {
        None
    };
    let finalizer = if p.eat_keyword(Keyword::Finally) {
        Some(parse_block(p)?)
    } else {
        None
    };

    if handler.is_none() && finalizer.is_none() {
        return Err(ParseError::invalid_syntax(
            "try statement needs a catch or finally clause",
            p.current_span(),
        ));
    }
    Ok(p.finish(
        start,
        Node::TryStatement(TryStatement {
            block,
            handler,
            finalizer,
        }),
    ))
}

fn parse_switch(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::Switch)?;
    let discriminant = parse_paren_expression(p)?;
    p.expect(Token::LeftBrace)?;

    let mut cases = Vec::new();
    while !p.check(&Token::RightBrace) && !p.at_eof() {
        let case_start = p.current_span();
        let test = if p.eat_keyword(Keyword::Case) {
            Some(parse_expression(p)?)
        } else {
            p.expect_keyword(Keyword::Default)?;
            None
        };
        p.expect(Token::Colon)?;

        let mut consequent = Vec::new();
        while !p.check_keyword(Keyword::Case)
            && !p.check_keyword(Keyword::Default)
            && !p.check(&Token::RightBrace)
            && !p.at_eof()
        {
            consequent.push(parse_statement(p)?);
        }
        cases.push(p.finish(case_start, Node::SwitchCase(SwitchCase { test, consequent })));
    }
    p.expect(Token::RightBrace)?;

    Ok(p.finish(
        start,
        Node::SwitchStatement(SwitchStatement {
            discriminant,
            cases,
        }),
    ))
}

fn parse_labeled(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    let label = parse_identifier(p)?;
    p.expect(Token::Colon)?;
    let body = parse_statement(p)?;
    Ok(p.finish(start, Node::LabeledStatement(LabeledStatement { label, body })))
}

fn parse_string_literal(p: &mut Parser) -> Result<NodeId, ParseError> {
    let span = p.current_span();
    match p.current() {
        Token::String(value) => {
            let value = LiteralValue::String(value.clone());
            p.advance();
            let raw = p.text(span).to_string();
            Ok(p.alloc(Node::Literal(Literal { value, raw }), span))
        }
        _ => Err(p.unexpected(vec![Token::String(String::new())])),
    }
}

/// Name in an import/export list: identifier, reserved word or string.
fn parse_module_export_name(p: &mut Parser) -> Result<NodeId, ParseError> {
    if matches!(p.current(), Token::String(_)) {
        parse_string_literal(p)
    } else {
        parse_property_identifier(p)
    }
}

/// Skip `with { type: "json" }` import attributes if present.
fn skip_import_attributes(p: &mut Parser) -> Result<(), ParseError> {
    let at_attributes = (p.check_ident("assert") || p.check_ident("with"))
        && matches!(p.peek(), Token::LeftBrace)
        && !p.newline_before();
    if !at_attributes {
        return Ok(());
    }
    p.advance();
    let close = p
        .matching_close(p.pos)
        .ok_or_else(|| p.unexpected(vec![Token::RightBrace]))?;
    while p.pos <= close {
        p.advance();
    }
    Ok(())
}

fn parse_import(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::Import)?;

    // `import type { A } from "m"`
    if p.check_ident("type") {
        match p.peek() {
            Token::LeftBrace | Token::Star => {
                p.advance();
            }
            Token::Identifier(name) if name != "from" => {
                p.advance();
            }
            _ => {}
        }
    }

    let mut specifiers = Vec::new();
    if !matches!(p.current(), Token::String(_)) {
        if matches!(p.current(), Token::Identifier(_)) {
            let spec_start = p.current_span();
            let local = parse_identifier(p)?;
            specifiers.push(p.finish(
                spec_start,
                Node::ImportDefaultSpecifier(ImportDefaultSpecifier { local }),
            ));
            p.eat(&Token::Comma);
        }

        if p.check(&Token::Star) {
            let spec_start = p.current_span();
            p.advance();
            p.expect_ident("as")?;
            let local = parse_identifier(p)?;
            specifiers.push(p.finish(
                spec_start,
                Node::ImportNamespaceSpecifier(ImportNamespaceSpecifier { local }),
            ));
        } else if p.eat(&Token::LeftBrace) {
            while !p.check(&Token::RightBrace) && !p.at_eof() {
                if p.check_ident("type") && matches!(p.peek(), Token::Identifier(_)) {
                    p.advance();
                }
                let spec_start = p.current_span();
                let imported = parse_module_export_name(p)?;
                let local = if p.eat_ident("as") {
                    parse_identifier(p)?
                } else {
                    imported
                };
                specifiers.push(p.finish(
                    spec_start,
                    Node::ImportSpecifier(ImportSpecifier { imported, local }),
                ));
                if !p.check(&Token::RightBrace) {
                    p.expect(Token::Comma)?;
                }
            }
            p.expect(Token::RightBrace)?;
        }
        p.expect_ident("from")?;
    }

    let source = parse_string_literal(p)?;
    skip_import_attributes(p)?;
    p.consume_semicolon()?;
    Ok(p.finish(
        start,
        Node::ImportDeclaration(ImportDeclaration { specifiers, source }),
    ))
}

fn parse_export(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_keyword(Keyword::Export)?;

    if p.eat_keyword(Keyword::Default) {
        let declaration = match p.current() {
            Token::Keyword(Keyword::Function) => parse_function_declaration(p)?,
            Token::Keyword(Keyword::Class) => parse_class(p, false)?,
            Token::Identifier(name)
                if name == "async"
                    && matches!(p.peek(), Token::Keyword(Keyword::Function))
                    && !p.newline_before_at(p.pos + 1) =>
            {
                parse_function_declaration(p)?
            }
            _ => {
                let expr = parse_assignment(p)?;
                p.consume_semicolon()?;
                expr
            }
        };
        return Ok(p.finish(
            start,
            Node::ExportDefaultDeclaration(ExportDefaultDeclaration { declaration }),
        ));
    }

    if p.eat(&Token::Star) {
        let exported = if p.eat_ident("as") {
            Some(parse_module_export_name(p)?)
        } else {
            None
        };
        p.expect_ident("from")?;
        let source = parse_string_literal(p)?;
        p.consume_semicolon()?;
        return Ok(p.finish(
            start,
            Node::ExportAllDeclaration(ExportAllDeclaration { exported, source }),
        ));
    }

    if p.check_ident("type") && matches!(p.peek(), Token::LeftBrace) {
        p.advance();
    }
    if p.eat(&Token::LeftBrace) {
        let mut specifiers = Vec::new();
        while !p.check(&Token::RightBrace) && !p.at_eof() {
            let spec_start = p.current_span();
            let local = parse_module_export_name(p)?;
            let exported = if p.eat_ident("as") {
                parse_module_export_name(p)?
            } else {
                local
            };
            specifiers.push(p.finish(
                spec_start,
                Node::ExportSpecifier(ExportSpecifier { local, exported }),
            ));
            if !p.check(&Token::RightBrace) {
                p.expect(Token::Comma)?;
            }
        }
        p.expect(Token::RightBrace)?;
        let source = if p.eat_ident("from") {
            Some(parse_string_literal(p)?)
        } else {
            None
        };
        p.consume_semicolon()?;
        return Ok(p.finish(
            start,
            Node::ExportNamedDeclaration(ExportNamedDeclaration {
                declaration: None,
                specifiers,
                source,
            }),
        ));
    }

    let declaration = parse_statement(p)?;
    Ok(p.finish(
        start,
        Node::ExportNamedDeclaration(ExportNamedDeclaration {
            declaration: Some(declaration),
            specifiers: Vec::new(),
            source: None,
        }),
    ))
}

fn parse_type_alias(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_ident("type")?;
    let id = parse_identifier(p)?;
    types::skip_type_parameters(p)?;
    p.expect(Token::Equal)?;
    let type_annotation = types::parse_type(p)?;
    p.consume_semicolon()?;
    Ok(p.finish(
        start,
        Node::TSTypeAliasDeclaration(TSTypeAliasDeclaration {
            id,
            type_annotation,
        }),
    ))
}

fn parse_interface(p: &mut Parser) -> Result<NodeId, ParseError> {
    let start = p.current_span();
    p.expect_ident("interface")?;
    let id = parse_identifier(p)?;
    types::skip_type_parameters(p)?;

    let mut extends = Vec::new();
    if p.eat_keyword(Keyword::Extends) {
        loop {
            extends.push(types::parse_type(p)?);
            if !p.eat(&Token::Comma) {
                break;
            }
        }
    }
    let body = types::parse_type_members(p)?;
    Ok(p.finish(
        start,
        Node::TSInterfaceDeclaration(TSInterfaceDeclaration { id, extends, body }),
    ))
}
