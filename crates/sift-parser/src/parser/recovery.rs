//! Error recovery

use super::Parser;
use crate::token::{Keyword, Token};

/// Skip tokens until a likely statement start.
///
/// Always consumes at least one token so that the top-level loop makes
/// progress.
pub fn sync_to_statement_boundary(parser: &mut Parser) {
    if parser.at_eof() {
        return;
    }
    let first = parser.advance();
    if matches!(first, Token::Semicolon | Token::RightBrace) {
        return;
    }

    while !parser.at_eof() {
        match parser.current() {
            Token::Semicolon => {
                parser.advance();
                return;
            }
            Token::RightBrace => return,
            Token::Keyword(
                Keyword::Const
                | Keyword::Let
                | Keyword::Var
                | Keyword::Function
                | Keyword::Class
                | Keyword::If
                | Keyword::For
                | Keyword::While
                | Keyword::Return
                | Keyword::Import
                | Keyword::Export,
            ) if parser.newline_before() => return,
            _ => {
                parser.advance();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::Parser;

    #[test]
    fn test_reports_every_broken_statement() {
        let errors = Parser::new("let = 1;\nconst y = ;\nlet ok = 2;")
            .unwrap()
            .parse()
            .unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
