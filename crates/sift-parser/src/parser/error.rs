//! Parse error types and error reporting

use thiserror::Error;

use crate::token::{Span, Token};

/// A parse error with location and contextual information.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("parse error at {}:{}: {message}", .span.line, .span.column)]
pub struct ParseError {
    /// The kind of error that occurred
    pub kind: ParseErrorKind,

    /// Source location of the error
    pub span: Span,

    /// Human-readable error message
    pub message: String,

    /// Optional suggestion for fixing the error
    pub suggestion: Option<String>,
}

/// The kind of parse error.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token found
    UnexpectedToken { expected: Vec<Token>, found: Token },

    /// Unexpected end of file
    UnexpectedEof { expected: Vec<Token> },

    /// Invalid syntax
    InvalidSyntax { reason: String },

    /// Statement not terminated and no line break to insert one
    MissingSemicolon,

    /// Construct outside the supported subset (JSX, regex literals, ...)
    Unsupported { feature: String },

    /// Nesting depth limit exceeded
    ParserLimitExceeded { message: String },
}

impl ParseError {
    /// Create an "unexpected token" error.
    pub fn unexpected_token(expected: Vec<Token>, found: Token, span: Span) -> Self {
        let message = match expected.as_slice() {
            [] => format!("unexpected token '{}'", found),
            [one] => format!("expected '{}', found '{}'", one, found),
            many => format!(
                "expected one of {}, found '{}'",
                many.iter()
                    .map(|t| format!("'{}'", t))
                    .collect::<Vec<_>>()
                    .join(", "),
                found
            ),
        };

        Self {
            kind: ParseErrorKind::UnexpectedToken { expected, found },
            span,
            message,
            suggestion: None,
        }
    }

    /// Create an "unexpected EOF" error.
    pub fn unexpected_eof(expected: Vec<Token>, span: Span) -> Self {
        let message = match expected.first() {
            Some(tok) => format!("unexpected end of file, expected '{}'", tok),
            None => "unexpected end of file".to_string(),
        };

        Self {
            kind: ParseErrorKind::UnexpectedEof { expected },
            span,
            message,
            suggestion: None,
        }
    }

    /// Create an "invalid syntax" error.
    pub fn invalid_syntax(reason: impl Into<String>, span: Span) -> Self {
        let reason = reason.into();
        Self {
            message: reason.clone(),
            kind: ParseErrorKind::InvalidSyntax { reason },
            span,
            suggestion: None,
        }
    }

    pub fn missing_semicolon(span: Span) -> Self {
        Self {
            kind: ParseErrorKind::MissingSemicolon,
            span,
            message: "expected ';' or a line break".to_string(),
            suggestion: Some("terminate the statement with ';'".to_string()),
        }
    }

    pub fn unsupported(feature: impl Into<String>, span: Span) -> Self {
        let feature = feature.into();
        Self {
            message: format!("{} is not supported", feature),
            kind: ParseErrorKind::Unsupported { feature },
            span,
            suggestion: None,
        }
    }

    /// Create a "parser limit exceeded" error.
    pub fn parser_limit_exceeded(message: impl Into<String>, span: Span) -> Self {
        let message = message.into();
        Self {
            kind: ParseErrorKind::ParserLimitExceeded {
                message: message.clone(),
            },
            span,
            message: format!("parser limit exceeded: {}", message),
            suggestion: None,
        }
    }

    /// Add a suggestion to this error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
