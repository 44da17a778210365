//! Operator precedence table for binary expression parsing.
//!
//! Follows JavaScript precedence. Assignment, conditional and unary forms are
//! parsed by dedicated functions; this table only covers infix operators.

use crate::ast::{BinaryOperator, LogicalOperator};
use crate::token::{Keyword, Token};

/// Operator precedence level (higher = tighter binding).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    None = 0,
    NullCoalescing = 1, // ??
    LogicalOr = 2,      // ||
    LogicalAnd = 3,     // &&
    BitwiseOr = 4,      // |
    BitwiseXor = 5,     // ^
    BitwiseAnd = 6,     // &
    Equality = 7,       // ==, !=, ===, !==
    Relational = 8,     // <, >, <=, >=, instanceof, in, as
    Shift = 9,          // <<, >>, >>>
    Additive = 10,      // +, -
    Multiplicative = 11, // *, /, %
    Exponentiation = 12, // **
}

impl Precedence {
    /// The next tighter level, used for left-associative operands.
    pub fn next(self) -> Precedence {
        match self {
            Precedence::None => Precedence::NullCoalescing,
            Precedence::NullCoalescing => Precedence::LogicalOr,
            Precedence::LogicalOr => Precedence::LogicalAnd,
            Precedence::LogicalAnd => Precedence::BitwiseOr,
            Precedence::BitwiseOr => Precedence::BitwiseXor,
            Precedence::BitwiseXor => Precedence::BitwiseAnd,
            Precedence::BitwiseAnd => Precedence::Equality,
            Precedence::Equality => Precedence::Relational,
            Precedence::Relational => Precedence::Shift,
            Precedence::Shift => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::Exponentiation,
            Precedence::Exponentiation => Precedence::Exponentiation,
        }
    }
}

/// Infix operator recognized by the binary expression loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOp {
    Binary(BinaryOperator),
    Logical(LogicalOperator),
}

/// Map a token to its infix operator and precedence.
///
/// `allow_in` is false inside a `for (...)` head, where `in` starts a
/// for-in loop instead of a comparison.
pub fn infix_operator(token: &Token, allow_in: bool) -> Option<(InfixOp, Precedence)> {
    use BinaryOperator as B;
    use InfixOp::{Binary, Logical};

    let entry = match token {
        Token::QuestionQuestion => (
            Logical(LogicalOperator::NullishCoalescing),
            Precedence::NullCoalescing,
        ),
        Token::PipePipe => (Logical(LogicalOperator::Or), Precedence::LogicalOr),
        Token::AmpAmp => (Logical(LogicalOperator::And), Precedence::LogicalAnd),
        Token::Pipe => (Binary(B::BitOr), Precedence::BitwiseOr),
        Token::Caret => (Binary(B::BitXor), Precedence::BitwiseXor),
        Token::Amp => (Binary(B::BitAnd), Precedence::BitwiseAnd),
        Token::EqualEqual => (Binary(B::Equal), Precedence::Equality),
        Token::BangEqual => (Binary(B::NotEqual), Precedence::Equality),
        Token::EqualEqualEqual => (Binary(B::StrictEqual), Precedence::Equality),
        Token::BangEqualEqual => (Binary(B::StrictNotEqual), Precedence::Equality),
        Token::Less => (Binary(B::Less), Precedence::Relational),
        Token::LessEqual => (Binary(B::LessEqual), Precedence::Relational),
        Token::Greater => (Binary(B::Greater), Precedence::Relational),
        Token::GreaterEqual => (Binary(B::GreaterEqual), Precedence::Relational),
        Token::Keyword(Keyword::Instanceof) => (Binary(B::Instanceof), Precedence::Relational),
        Token::Keyword(Keyword::In) if allow_in => (Binary(B::In), Precedence::Relational),
        Token::LessLess => (Binary(B::ShiftLeft), Precedence::Shift),
        Token::GreaterGreater => (Binary(B::ShiftRight), Precedence::Shift),
        Token::GreaterGreaterGreater => (Binary(B::UnsignedShiftRight), Precedence::Shift),
        Token::Plus => (Binary(B::Add), Precedence::Additive),
        Token::Minus => (Binary(B::Subtract), Precedence::Additive),
        Token::Star => (Binary(B::Multiply), Precedence::Multiplicative),
        Token::Slash => (Binary(B::Divide), Precedence::Multiplicative),
        Token::Percent => (Binary(B::Remainder), Precedence::Multiplicative),
        Token::StarStar => (Binary(B::Exponent), Precedence::Exponentiation),
        _ => return None,
    };
    Some(entry)
}

/// Check if an infix operator is right-associative.
pub fn is_right_associative(token: &Token) -> bool {
    matches!(token, Token::StarStar)
}
