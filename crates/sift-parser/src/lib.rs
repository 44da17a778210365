//! Sift Parser
//!
//! Lexer, parser and arena AST for the JavaScript and TypeScript subset that
//! `sift-lint` analyzes. Nodes live in a flat arena and are addressed by
//! [`NodeId`]; every node records its source range and parent.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{Ast, Node, NodeId, NodeRef, NodeType};
pub use lexer::{LexError, Lexer};
pub use parser::{ParseError, ParseErrorKind, Parser};
pub use token::{Span, Token};

use thiserror::Error;

/// Any error that stops a source file from producing an AST.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SyntaxError {
    pub fn span(&self) -> Span {
        match self {
            SyntaxError::Lex(err) => err.span(),
            SyntaxError::Parse(err) => err.span,
        }
    }
}

/// Lex and parse a complete source file.
pub fn parse(source: &str) -> Result<Ast, Vec<SyntaxError>> {
    let parser = Parser::new(source)
        .map_err(|errors| errors.into_iter().map(SyntaxError::from).collect::<Vec<_>>())?;
    parser
        .parse()
        .map_err(|errors| errors.into_iter().map(SyntaxError::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reports_lex_errors() {
        let errors = parse("let s = `unterminated").unwrap_err();
        assert!(matches!(errors[0], SyntaxError::Lex(_)));
    }

    #[test]
    fn test_parse_reports_parse_errors_with_position() {
        let errors = parse("let x = ;\nlet y = 1;").unwrap_err();
        assert_eq!(errors.len(), 1);
        let span = errors[0].span();
        assert_eq!((span.line, span.column), (1, 9));
    }

    #[test]
    fn test_empty_source_is_an_empty_program() {
        let ast = parse("").unwrap();
        let root = ast.root().unwrap();
        assert_eq!(root.node_type(), NodeType::Program);
        assert!(root.children().is_empty());
    }
}
