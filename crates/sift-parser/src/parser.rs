//! Parser for JavaScript with TypeScript annotations
//!
//! A recursive descent parser that turns the lexer's token stream into an
//! arena [`Ast`]. Statements are separated with a light form of automatic
//! semicolon insertion: a statement may end at `;`, before `}`, at end of file
//! or before a line break.

pub mod error;
pub mod expr;
pub mod pattern;
pub mod precedence;
pub mod recovery;
pub mod stmt;
pub mod types;

use crate::ast::{Ast, Node, NodeId, Program};
use crate::lexer::{LexError, Lexer};
use crate::token::{Keyword, Span, Token};

pub use error::{ParseError, ParseErrorKind};

/// Maximum nesting of statements, expressions and types.
const MAX_DEPTH: usize = 256;

static EOF: Token = Token::Eof;

/// Parser state.
pub struct Parser<'a> {
    source: &'a str,

    /// Pre-tokenized input; swapped out while parsing template substitutions
    tokens: Vec<(Token, Span)>,

    /// Current position in token stream
    pos: usize,

    /// Nodes built so far
    ast: Ast,

    /// Accumulated parse errors (allows continuing after errors)
    errors: Vec<ParseError>,

    /// Current recursion depth
    depth: usize,

    /// False inside a `for (...)` head, where `in` is not an operator
    allow_in: bool,
}

impl<'a> Parser<'a> {
    /// Create a new parser from source code.
    pub fn new(source: &'a str) -> Result<Self, Vec<LexError>> {
        let tokens = Lexer::new(source).tokenize()?;

        Ok(Self {
            source,
            tokens,
            pos: 0,
            ast: Ast::new(),
            errors: Vec::new(),
            depth: 0,
            allow_in: true,
        })
    }

    /// Parse the entire source file.
    ///
    /// Returns the tree with parent links attached, or all accumulated errors.
    pub fn parse(mut self) -> Result<Ast, Vec<ParseError>> {
        let mut body = Vec::new();

        while !self.at_eof() {
            match stmt::parse_statement(&mut self) {
                Ok(stmt) => body.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    recovery::sync_to_statement_boundary(&mut self);
                }
            }
        }

        if !self.errors.is_empty() {
            return Err(self.errors);
        }

        let span = Span::new(0, self.source.len(), 1, 1);
        let root = self.ast.alloc(Node::Program(Program { body }), Some(span));
        self.ast.set_root(root);
        self.ast.link_parents();
        Ok(self.ast)
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        self.token_at(self.pos)
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.span_at(self.pos)
    }

    /// Peek at the next token (lookahead).
    #[inline]
    pub fn peek(&self) -> &Token {
        self.token_at(self.pos + 1)
    }

    /// Token at an absolute position; `Eof` past the end.
    pub fn token_at(&self, index: usize) -> &Token {
        self.tokens.get(index).map(|(tok, _)| tok).unwrap_or(&EOF)
    }

    fn span_at(&self, index: usize) -> Span {
        match self.tokens.get(index).or_else(|| self.tokens.last()) {
            Some((_, span)) => *span,
            None => Span::default(),
        }
    }

    /// Advance to the next token, returning the previous current token.
    pub fn advance(&mut self) -> Token {
        let tok = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    /// Check if the current token matches the given kind.
    ///
    /// Payloads are ignored, so every keyword matches every other keyword;
    /// use [`Parser::check_keyword`] for those.
    #[inline]
    pub fn check(&self, expected: &Token) -> bool {
        std::mem::discriminant(self.current()) == std::mem::discriminant(expected)
    }

    #[inline]
    pub fn check_keyword(&self, keyword: Keyword) -> bool {
        matches!(self.current(), Token::Keyword(kw) if *kw == keyword)
    }

    /// Check for a contextual keyword such as `of`, `as` or `async`.
    #[inline]
    pub fn check_ident(&self, name: &str) -> bool {
        matches!(self.current(), Token::Identifier(id) if id == name)
    }

    /// Check if we've reached EOF.
    #[inline]
    pub fn at_eof(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    /// Consume the current token if it matches.
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.check(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn eat_ident(&mut self, name: &str) -> bool {
        if self.check_ident(name) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it matches the expected kind.
    pub fn expect(&mut self, expected: Token) -> Result<Token, ParseError> {
        if self.check(&expected) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(vec![expected]))
        }
    }

    pub fn expect_keyword(&mut self, keyword: Keyword) -> Result<(), ParseError> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(self.unexpected(vec![Token::Keyword(keyword)]))
        }
    }

    pub fn expect_ident(&mut self, name: &str) -> Result<(), ParseError> {
        if self.eat_ident(name) {
            Ok(())
        } else {
            Err(self.unexpected(vec![Token::Identifier(name.to_string())]))
        }
    }

    /// Whether a line break separates the current token from the previous one.
    pub fn newline_before(&self) -> bool {
        self.newline_before_at(self.pos)
    }

    pub fn newline_before_at(&self, index: usize) -> bool {
        if index == 0 || index >= self.tokens.len() {
            return false;
        }
        let prev_end = self.tokens[index - 1].1.end;
        let start = self.tokens[index].1.start;
        self.source
            .get(prev_end..start)
            .map_or(false, |gap| gap.contains('\n'))
    }

    /// Replace the current token after consuming its first character, used to
    /// split `>>` when closing type arguments.
    pub fn split_current(&mut self, rest: Token) {
        if let Some((tok, span)) = self.tokens.get_mut(self.pos) {
            *tok = rest;
            span.start += 1;
            span.column += 1;
        }
    }

    // ========================================================================
    // Node construction
    // ========================================================================

    /// Span from `start` to the end of the previously consumed token.
    pub fn span_from(&self, start: Span) -> Span {
        let end = if self.pos > 0 {
            self.tokens[self.pos - 1].1.end
        } else {
            start.end
        };
        Span {
            start: start.start,
            end: end.max(start.start),
            line: start.line,
            column: start.column,
        }
    }

    /// Allocate a node covering `start` up to the previous token.
    pub fn finish(&mut self, start: Span, node: Node) -> NodeId {
        let span = self.span_from(start);
        self.ast.alloc(node, Some(span))
    }

    pub fn alloc(&mut self, node: Node, span: Span) -> NodeId {
        self.ast.alloc(node, Some(span))
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.ast.entry(id).map(|entry| &entry.node)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.ast.entry_mut(id).map(|entry| &mut entry.node)
    }

    pub fn range(&self, id: NodeId) -> Option<Span> {
        self.ast.entry(id).and_then(|entry| entry.range)
    }

    /// Grow a node's range to end at the previous token.
    pub fn extend_range(&mut self, id: NodeId) {
        if let Some(range) = self.range(id) {
            let span = self.span_from(range);
            if let Some(entry) = self.ast.entry_mut(id) {
                entry.range = Some(span);
            }
        }
    }

    /// Source text of a span.
    pub fn text(&self, span: Span) -> &'a str {
        span.slice(self.source)
    }

    // ========================================================================
    // Control
    // ========================================================================

    /// Enter one nesting level.
    pub fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::parser_limit_exceeded(
                format!("nesting deeper than {}", MAX_DEPTH),
                self.current_span(),
            ));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run `f`, rolling back tokens and nodes if it fails.
    pub fn try_parse<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Option<T> {
        let (pos, nodes, errors, depth) = (self.pos, self.ast.len(), self.errors.len(), self.depth);
        match f(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.pos = pos;
                self.ast.truncate(nodes);
                self.errors.truncate(errors);
                self.depth = depth;
                None
            }
        }
    }

    /// Run `f` with `in` enabled or disabled as a binary operator.
    pub fn with_in<T>(
        &mut self,
        allow_in: bool,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved = std::mem::replace(&mut self.allow_in, allow_in);
        let result = f(self);
        self.allow_in = saved;
        result
    }

    pub fn allow_in(&self) -> bool {
        self.allow_in
    }

    /// Run `f` over a nested token stream (a template substitution).
    pub fn with_tokens<T>(
        &mut self,
        tokens: Vec<(Token, Span)>,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let saved_tokens = std::mem::replace(&mut self.tokens, tokens);
        let saved_pos = std::mem::replace(&mut self.pos, 0);
        let result = self.with_in(true, f);
        self.tokens = saved_tokens;
        self.pos = saved_pos;
        result
    }

    /// Index of the token closing the bracket opened at `open`.
    pub fn matching_close(&self, open: usize) -> Option<usize> {
        let mut depth = 0usize;
        for (i, (tok, _)) in self.tokens.iter().enumerate().skip(open) {
            match tok {
                Token::LeftParen | Token::LeftBracket | Token::LeftBrace => depth += 1,
                Token::RightParen | Token::RightBracket | Token::RightBrace => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(i);
                    }
                }
                Token::Eof => return None,
                _ => {}
            }
        }
        None
    }

    /// End a statement: `;`, or nothing before `}`, end of file or a line break.
    pub fn consume_semicolon(&mut self) -> Result<(), ParseError> {
        if self.eat(&Token::Semicolon) {
            return Ok(());
        }
        if self.check(&Token::RightBrace) || self.at_eof() || self.newline_before() {
            return Ok(());
        }
        Err(ParseError::missing_semicolon(self.current_span()))
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Error for the current token given what was expected.
    pub fn unexpected(&self, expected: Vec<Token>) -> ParseError {
        let span = self.current_span();
        if self.at_eof() {
            ParseError::unexpected_eof(expected, span)
        } else {
            ParseError::unexpected_token(expected, self.current().clone(), span)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_new() {
        let parser = Parser::new("let x = 42;").unwrap();
        assert!(parser.check_keyword(Keyword::Let));
    }

    #[test]
    fn test_parser_advance() {
        let mut parser = Parser::new("let x").unwrap();
        let tok = parser.advance();
        assert!(matches!(tok, Token::Keyword(Keyword::Let)));
        assert!(matches!(parser.current(), Token::Identifier(_)));
    }

    #[test]
    fn test_parser_at_eof() {
        let parser = Parser::new("").unwrap();
        assert!(parser.at_eof());
    }

    #[test]
    fn test_newline_before() {
        let mut parser = Parser::new("a\nb c").unwrap();
        parser.advance();
        assert!(parser.newline_before());
        parser.advance();
        assert!(!parser.newline_before());
    }

    #[test]
    fn test_try_parse_rolls_back() {
        let mut parser = Parser::new("a b").unwrap();
        let result: Option<()> = parser.try_parse(|p| {
            p.advance();
            Err(p.unexpected(vec![]))
        });
        assert!(result.is_none());
        assert!(parser.check_ident("a"));
    }

    #[test]
    fn test_matching_close() {
        let parser = Parser::new("(a, (b)) => c").unwrap();
        assert_eq!(parser.matching_close(0), Some(6));
    }
}
