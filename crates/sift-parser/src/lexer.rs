//! Lexer for the JavaScript/TypeScript subset.
//!
//! Built on the logos library. Template literals are scanned by hand: their
//! quasis are kept raw and every `${ ... }` substitution is lexed recursively
//! into its own token list, so the parser can treat it as a nested stream.

use logos::Logos;
use thiserror::Error;

use crate::token::{Keyword, Span, TemplatePart, Token};

/// Logos-based token enum for lexing.
///
/// Converted to [`Token`] after lexing.
#[derive(Logos, Debug, Clone, PartialEq)]
enum LogosToken {
    #[regex(r"[ \t\r\n\f\u{FEFF}]+", logos::skip)]
    Whitespace,

    #[regex(r"//[^\n]*", logos::skip)]
    LineComment,

    #[regex(r"#![^\n]*", logos::skip)]
    Hashbang,

    #[regex(r"/\*", lex_block_comment)]
    BlockComment,

    #[token("await", |_| Keyword::Await)]
    #[token("break", |_| Keyword::Break)]
    #[token("case", |_| Keyword::Case)]
    #[token("catch", |_| Keyword::Catch)]
    #[token("class", |_| Keyword::Class)]
    #[token("const", |_| Keyword::Const)]
    #[token("continue", |_| Keyword::Continue)]
    #[token("debugger", |_| Keyword::Debugger)]
    #[token("default", |_| Keyword::Default)]
    #[token("delete", |_| Keyword::Delete)]
    #[token("do", |_| Keyword::Do)]
    #[token("else", |_| Keyword::Else)]
    #[token("export", |_| Keyword::Export)]
    #[token("extends", |_| Keyword::Extends)]
    #[token("false", |_| Keyword::False)]
    #[token("finally", |_| Keyword::Finally)]
    #[token("for", |_| Keyword::For)]
    #[token("function", |_| Keyword::Function)]
    #[token("if", |_| Keyword::If)]
    #[token("import", |_| Keyword::Import)]
    #[token("in", |_| Keyword::In)]
    #[token("instanceof", |_| Keyword::Instanceof)]
    #[token("let", |_| Keyword::Let)]
    #[token("new", |_| Keyword::New)]
    #[token("null", |_| Keyword::Null)]
    #[token("return", |_| Keyword::Return)]
    #[token("super", |_| Keyword::Super)]
    #[token("switch", |_| Keyword::Switch)]
    #[token("this", |_| Keyword::This)]
    #[token("throw", |_| Keyword::Throw)]
    #[token("true", |_| Keyword::True)]
    #[token("try", |_| Keyword::Try)]
    #[token("typeof", |_| Keyword::Typeof)]
    #[token("var", |_| Keyword::Var)]
    #[token("void", |_| Keyword::Void)]
    #[token("while", |_| Keyword::While)]
    #[token("yield", |_| Keyword::Yield)]
    Keyword(Keyword),

    // Identifiers (must come after keywords); `#name` covers private members
    #[regex(r"#?[a-zA-Z_$][a-zA-Z0-9_$]*", |lex| lex.slice().to_string())]
    Identifier(String),

    #[regex(r"0[xX][0-9a-fA-F]+(_[0-9a-fA-F]+)*", |lex| parse_radix(lex.slice(), 16))]
    #[regex(r"0[bB][01]+(_[01]+)*", |lex| parse_radix(lex.slice(), 2))]
    #[regex(r"0[oO][0-7]+(_[0-7]+)*", |lex| parse_radix(lex.slice(), 8))]
    #[regex(r"[0-9]+(_[0-9]+)*(\.[0-9]*(_[0-9]+)*)?([eE][+-]?[0-9]+)?", parse_decimal)]
    #[regex(r"\.[0-9]+(_[0-9]+)*([eE][+-]?[0-9]+)?", parse_decimal)]
    Number(f64),

    #[regex(r#""([^"\\\n]|\\[^\n]|\\\n)*""#, parse_string)]
    #[regex(r"'([^'\\\n]|\\[^\n]|\\\n)*'", parse_string)]
    String(String),

    #[token("`")]
    Backtick,

    #[token(">>>=")]
    GreaterGreaterGreaterEqual,
    #[token("===")]
    EqualEqualEqual,
    #[token("!==")]
    BangEqualEqual,
    #[token(">>>")]
    GreaterGreaterGreater,
    #[token("**=")]
    StarStarEqual,
    #[token("<<=")]
    LessLessEqual,
    #[token(">>=")]
    GreaterGreaterEqual,
    #[token("&&=")]
    AmpAmpEqual,
    #[token("||=")]
    PipePipeEqual,
    #[token("??=")]
    QuestionQuestionEqual,
    #[token("...")]
    DotDotDot,
    #[token("**")]
    StarStar,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("??")]
    QuestionQuestion,
    #[token("?.")]
    QuestionDot,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("<<")]
    LessLess,
    #[token(">>")]
    GreaterGreater,
    #[token("=>")]
    Arrow,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    StarEqual,
    #[token("/=")]
    SlashEqual,
    #[token("%=")]
    PercentEqual,
    #[token("&=")]
    AmpEqual,
    #[token("|=")]
    PipeEqual,
    #[token("^=")]
    CaretEqual,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("=")]
    Equal,
    #[token("?")]
    Question,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("@")]
    At,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
}

fn lex_block_comment(lex: &mut logos::Lexer<LogosToken>) -> logos::Skip {
    // "/*" already consumed
    let remainder = lex.remainder();
    match remainder.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(remainder.len()),
    }
    logos::Skip
}

fn parse_radix(slice: &str, radix: u32) -> Option<f64> {
    let digits = slice[2..].replace('_', "");
    u64::from_str_radix(&digits, radix).ok().map(|n| n as f64)
}

fn parse_decimal(lex: &mut logos::Lexer<LogosToken>) -> Option<f64> {
    lex.slice().replace('_', "").parse().ok()
}

fn parse_string(lex: &mut logos::Lexer<LogosToken>) -> Option<String> {
    let s = lex.slice();
    Some(unescape(&s[1..s.len() - 1]))
}

/// Resolve the escapes of a string literal body.
pub fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('b') => result.push('\u{8}'),
            Some('f') => result.push('\u{c}'),
            Some('v') => result.push('\u{b}'),
            Some('0') => result.push('\0'),
            Some('\n') => {}
            Some('x') => {
                let hex: String = chars.by_ref().take(2).collect();
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => result.push(ch),
                    None => result.push_str(&hex),
                }
            }
            Some('u') => {
                let hex: String = if chars.peek() == Some(&'{') {
                    chars.next();
                    chars.by_ref().take_while(|c| *c != '}').collect()
                } else {
                    chars.by_ref().take(4).collect()
                };
                match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
                    Some(ch) => result.push(ch),
                    None => result.push_str(&hex),
                }
            }
            Some(other) => result.push(other),
            None => break,
        }
    }

    result
}

/// Lexer error types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    #[error("unexpected character '{char}' at {}:{}", .span.line, .span.column)]
    UnexpectedCharacter { char: char, span: Span },

    #[error("unterminated template literal starting at {}:{}", .span.line, .span.column)]
    UnterminatedTemplate { span: Span },

    #[error("invalid token '{text}' at {}:{}", .span.line, .span.column)]
    InvalidToken { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedTemplate { span }
            | LexError::InvalidToken { span, .. } => *span,
        }
    }
}

/// Main lexer structure.
pub struct Lexer<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(source.match_indices('\n').map(|(i, _)| i + 1));
        Self {
            source,
            line_starts,
        }
    }

    /// Tokenize the whole source. The last token is always `Eof`.
    pub fn tokenize(&self) -> Result<Vec<(Token, Span)>, Vec<LexError>> {
        let mut errors = Vec::new();
        let tokens = self.tokenize_range(0, self.source.len(), &mut errors);
        if errors.is_empty() {
            Ok(tokens)
        } else {
            Err(errors)
        }
    }

    /// Build a span with line/column information for a byte range.
    pub fn span(&self, start: usize, end: usize) -> Span {
        let line_idx = match self.line_starts.binary_search(&start) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        let line_start = self.line_starts[line_idx];
        let column = self.source[line_start..start].chars().count() as u32 + 1;
        Span::new(start, end, line_idx as u32 + 1, column)
    }

    fn tokenize_range(
        &self,
        start: usize,
        end: usize,
        errors: &mut Vec<LexError>,
    ) -> Vec<(Token, Span)> {
        let mut tokens = Vec::new();
        let mut lex = LogosToken::lexer(&self.source[start..end]);

        while let Some(result) = lex.next() {
            let range = lex.span();
            let (tok_start, tok_end) = (start + range.start, start + range.end);
            let span = self.span(tok_start, tok_end);

            match result {
                Ok(LogosToken::Backtick) => match self.lex_template(tok_end, end, errors) {
                    Some((parts, template_end)) => {
                        tokens.push((Token::Template(parts), self.span(tok_start, template_end)));
                        lex.bump(template_end - tok_end);
                    }
                    None => {
                        errors.push(LexError::UnterminatedTemplate { span });
                        lex.bump(end - tok_end);
                    }
                },
                Ok(logos_token) => tokens.push((convert_token(logos_token), span)),
                Err(()) => {
                    let text = &self.source[tok_start..tok_end];
                    match text.chars().next() {
                        Some(char) if text.chars().count() == 1 => {
                            errors.push(LexError::UnexpectedCharacter { char, span })
                        }
                        _ => errors.push(LexError::InvalidToken {
                            text: text.to_string(),
                            span,
                        }),
                    }
                }
            }
        }

        tokens.push((Token::Eof, self.span(end, end)));
        tokens
    }

    /// Scan a template literal whose opening backtick ends at `start`.
    ///
    /// Returns the parts and the offset just past the closing backtick.
    fn lex_template(
        &self,
        start: usize,
        limit: usize,
        errors: &mut Vec<LexError>,
    ) -> Option<(Vec<TemplatePart>, usize)> {
        let bytes = self.source.as_bytes();
        let mut parts = Vec::new();
        let mut quasi_start = start;
        let mut pos = start;

        while pos < limit {
            match bytes[pos] {
                b'\\' => pos += 2,
                b'`' => {
                    parts.push(self.quasi(quasi_start, pos));
                    return Some((parts, pos + 1));
                }
                b'$' if bytes.get(pos + 1) == Some(&b'{') => {
                    parts.push(self.quasi(quasi_start, pos));
                    let expr_start = pos + 2;
                    let expr_end = self.find_substitution_end(expr_start, limit)?;
                    let tokens = self.tokenize_range(expr_start, expr_end, errors);
                    parts.push(TemplatePart::Expression(tokens));
                    pos = expr_end + 1;
                    quasi_start = pos;
                }
                _ => pos += 1,
            }
        }

        None
    }

    fn quasi(&self, start: usize, end: usize) -> TemplatePart {
        TemplatePart::Quasi {
            raw: self.source[start..end].to_string(),
            span: self.span(start, end),
        }
    }

    /// Find the `}` closing a substitution that starts at `start`.
    fn find_substitution_end(&self, start: usize, limit: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let mut depth = 0usize;
        let mut pos = start;

        while pos < limit {
            match bytes[pos] {
                b'{' => depth += 1,
                b'}' if depth == 0 => return Some(pos),
                b'}' => depth -= 1,
                quote @ (b'"' | b'\'') => {
                    pos += 1;
                    while pos < limit && bytes[pos] != quote {
                        if bytes[pos] == b'\\' {
                            pos += 1;
                        }
                        pos += 1;
                    }
                }
                b'`' => {
                    let mut scratch = Vec::new();
                    let (_, end) = self.lex_template(pos + 1, limit, &mut scratch)?;
                    pos = end;
                    continue;
                }
                _ => {}
            }
            pos += 1;
        }

        None
    }
}

fn convert_token(logos_token: LogosToken) -> Token {
    match logos_token {
        LogosToken::Keyword(kw) => Token::Keyword(kw),
        LogosToken::Identifier(name) => Token::Identifier(name),
        LogosToken::Number(n) => Token::Number(n),
        LogosToken::String(s) => Token::String(s),
        LogosToken::GreaterGreaterGreaterEqual => Token::GreaterGreaterGreaterEqual,
        LogosToken::EqualEqualEqual => Token::EqualEqualEqual,
        LogosToken::BangEqualEqual => Token::BangEqualEqual,
        LogosToken::GreaterGreaterGreater => Token::GreaterGreaterGreater,
        LogosToken::StarStarEqual => Token::StarStarEqual,
        LogosToken::LessLessEqual => Token::LessLessEqual,
        LogosToken::GreaterGreaterEqual => Token::GreaterGreaterEqual,
        LogosToken::AmpAmpEqual => Token::AmpAmpEqual,
        LogosToken::PipePipeEqual => Token::PipePipeEqual,
        LogosToken::QuestionQuestionEqual => Token::QuestionQuestionEqual,
        LogosToken::DotDotDot => Token::DotDotDot,
        LogosToken::StarStar => Token::StarStar,
        LogosToken::EqualEqual => Token::EqualEqual,
        LogosToken::BangEqual => Token::BangEqual,
        LogosToken::LessEqual => Token::LessEqual,
        LogosToken::GreaterEqual => Token::GreaterEqual,
        LogosToken::AmpAmp => Token::AmpAmp,
        LogosToken::PipePipe => Token::PipePipe,
        LogosToken::QuestionQuestion => Token::QuestionQuestion,
        LogosToken::QuestionDot => Token::QuestionDot,
        LogosToken::PlusPlus => Token::PlusPlus,
        LogosToken::MinusMinus => Token::MinusMinus,
        LogosToken::LessLess => Token::LessLess,
        LogosToken::GreaterGreater => Token::GreaterGreater,
        LogosToken::Arrow => Token::Arrow,
        LogosToken::PlusEqual => Token::PlusEqual,
        LogosToken::MinusEqual => Token::MinusEqual,
        LogosToken::StarEqual => Token::StarEqual,
        LogosToken::SlashEqual => Token::SlashEqual,
        LogosToken::PercentEqual => Token::PercentEqual,
        LogosToken::AmpEqual => Token::AmpEqual,
        LogosToken::PipeEqual => Token::PipeEqual,
        LogosToken::CaretEqual => Token::CaretEqual,
        LogosToken::Plus => Token::Plus,
        LogosToken::Minus => Token::Minus,
        LogosToken::Star => Token::Star,
        LogosToken::Slash => Token::Slash,
        LogosToken::Percent => Token::Percent,
        LogosToken::Bang => Token::Bang,
        LogosToken::Tilde => Token::Tilde,
        LogosToken::Less => Token::Less,
        LogosToken::Greater => Token::Greater,
        LogosToken::Amp => Token::Amp,
        LogosToken::Pipe => Token::Pipe,
        LogosToken::Caret => Token::Caret,
        LogosToken::Equal => Token::Equal,
        LogosToken::Question => Token::Question,
        LogosToken::Dot => Token::Dot,
        LogosToken::Colon => Token::Colon,
        LogosToken::At => Token::At,
        LogosToken::LeftParen => Token::LeftParen,
        LogosToken::RightParen => Token::RightParen,
        LogosToken::LeftBrace => Token::LeftBrace,
        LogosToken::RightBrace => Token::RightBrace,
        LogosToken::LeftBracket => Token::LeftBracket,
        LogosToken::RightBracket => Token::RightBracket,
        LogosToken::Semicolon => Token::Semicolon,
        LogosToken::Comma => Token::Comma,
        // Skipped or hand-scanned; never produced by `lex.next()` as values
        LogosToken::Whitespace
        | LogosToken::LineComment
        | LogosToken::Hashbang
        | LogosToken::BlockComment
        | LogosToken::Backtick => Token::Eof,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Lexer::new(source)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|(t, _)| t)
            .collect()
    }

    #[test]
    fn test_keywords_and_contextual_identifiers() {
        let toks = tokens("async function f");
        assert_eq!(
            toks,
            vec![
                Token::Identifier("async".into()),
                Token::Keyword(Keyword::Function),
                Token::Identifier("f".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        assert_eq!(tokens("iffy")[0], Token::Identifier("iffy".into()));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokens("0xFF")[0], Token::Number(255.0));
        assert_eq!(tokens("1_000")[0], Token::Number(1000.0));
        assert_eq!(tokens("1.5e2")[0], Token::Number(150.0));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(tokens(r#""a\"b""#)[0], Token::String("a\"b".into()));
        assert_eq!(tokens(r"'\x41B'")[0], Token::String("AB".into()));
    }

    #[test]
    fn test_operators_longest_match() {
        let toks = tokens("a?.b ?? c !== d");
        assert!(toks.contains(&Token::QuestionDot));
        assert!(toks.contains(&Token::QuestionQuestion));
        assert!(toks.contains(&Token::BangEqualEqual));
    }

    #[test]
    fn test_comments_skipped() {
        let toks = tokens("a // line\n/* block */ b");
        assert_eq!(toks.len(), 3);
    }

    #[test]
    fn test_template_parts() {
        let toks = tokens("`a${b + 1}c`");
        match &toks[0] {
            Token::Template(parts) => {
                assert_eq!(parts.len(), 3);
                assert!(matches!(&parts[0], TemplatePart::Quasi { raw, .. } if raw == "a"));
                assert!(matches!(&parts[1], TemplatePart::Expression(t) if t.len() == 4));
                assert!(matches!(&parts[2], TemplatePart::Quasi { raw, .. } if raw == "c"));
            }
            other => panic!("expected template, got {:?}", other),
        }
    }

    #[test]
    fn test_template_nested_braces() {
        let toks = tokens("`${ {a: 1}.a }` + x");
        assert!(matches!(toks[0], Token::Template(_)));
        assert_eq!(toks[1], Token::Plus);
    }

    #[test]
    fn test_unterminated_template() {
        let errors = Lexer::new("`abc").tokenize().unwrap_err();
        assert!(matches!(errors[0], LexError::UnterminatedTemplate { .. }));
    }

    #[test]
    fn test_span_line_column() {
        let (_, span) = Lexer::new("a\n  b").tokenize().unwrap()[1].clone();
        assert_eq!((span.line, span.column, span.start), (2, 3, 4));
    }
}
