use crate::error::Span;
use std::fmt;

/// Kind of a lexical token
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Identifier(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LeftParen,
    RightParen,
    /// Argument separator in calls
    Comma,
}

impl TokenKind {
    /// Operator character, for operator tokens
    pub(crate) fn operator_char(&self) -> Option<char> {
        match self {
            TokenKind::Plus => Some('+'),
            TokenKind::Minus => Some('-'),
            TokenKind::Star => Some('*'),
            TokenKind::Slash => Some('/'),
            TokenKind::Percent => Some('%'),
            TokenKind::Caret => Some('^'),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Number(n) => write!(f, "{}", n),
            TokenKind::Identifier(name) => write!(f, "{}", name),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
            op => match op.operator_char() {
                Some(c) => write!(f, "{}", c),
                None => Ok(()),
            },
        }
    }
}

/// A token with its location in the source text
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub(crate) fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
