//! Lexer: splits expression text into tokens with character spans

use super::tokens::{Token, TokenKind};
use crate::error::{ParseError, Span};

/// Tokenize the input. Whitespace is skipped.
///
/// Spans are character offsets, not byte offsets, so positions reported to
/// users line up with what they typed even for non-ASCII input.
pub(crate) fn lex(chars: &[char]) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::with_capacity(chars.len() / 2 + 1);
    let mut pos = 0;

    while pos < chars.len() {
        let ch = chars[pos];

        if ch.is_whitespace() {
            pos += 1;
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let (token, next) = lex_number(chars, pos)?;
            tokens.push(token);
            pos = next;
            continue;
        }

        if ch.is_alphabetic() || ch == '_' {
            let start = pos;
            while pos < chars.len() && (chars[pos].is_alphanumeric() || chars[pos] == '_') {
                pos += 1;
            }
            let name: String = chars[start..pos].iter().collect();
            tokens.push(Token::new(
                TokenKind::Identifier(name),
                Span::new(start, pos),
            ));
            continue;
        }

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            ',' => TokenKind::Comma,
            _ => {
                return Err(ParseError::InvalidCharacter {
                    ch,
                    span: Span::at(pos),
                });
            }
        };
        tokens.push(Token::new(kind, Span::at(pos)));
        pos += 1;
    }

    Ok(tokens)
}

/// Lex a numeral starting at `start`: `digits [. digits] [(e|E) [+|-] digits]`.
///
/// At least one digit must appear around the decimal point, a second point
/// is rejected, and an exponent marker must be followed by digits.
fn lex_number(chars: &[char], start: usize) -> Result<(Token, usize), ParseError> {
    let len = chars.len();
    let mut pos = start;
    let mut digits = 0;

    while pos < len && chars[pos].is_ascii_digit() {
        pos += 1;
        digits += 1;
    }
    if pos < len && chars[pos] == '.' {
        pos += 1;
        while pos < len && chars[pos].is_ascii_digit() {
            pos += 1;
            digits += 1;
        }
    }

    if digits == 0 || (pos < len && chars[pos] == '.') {
        // Swallow the rest of the digit/point run so the error shows all of it
        let mut end = pos;
        while end < len && (chars[end].is_ascii_digit() || chars[end] == '.') {
            end += 1;
        }
        return Err(invalid_number(chars, start, end));
    }

    if pos < len && (chars[pos] == 'e' || chars[pos] == 'E') {
        let mut end = pos + 1;
        if end < len && (chars[end] == '+' || chars[end] == '-') {
            end += 1;
        }
        let exp_start = end;
        while end < len && chars[end].is_ascii_digit() {
            end += 1;
        }
        if end == exp_start {
            return Err(invalid_number(chars, start, end));
        }
        pos = end;
    }

    let text: String = chars[start..pos].iter().collect();
    let span = Span::new(start, pos);
    match text.parse::<f64>() {
        Ok(value) => Ok((Token::new(TokenKind::Number(value), span), pos)),
        Err(_) => Err(ParseError::InvalidNumber { value: text, span }),
    }
}

fn invalid_number(chars: &[char], start: usize, end: usize) -> ParseError {
    let end = end.max(start + 1).min(chars.len());
    ParseError::InvalidNumber {
        value: chars[start..end].iter().collect(),
        span: Span::new(start, end),
    }
}
