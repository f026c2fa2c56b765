//! Parser front end: turns expression text into a checked token stream
//!
//! Pipeline: validate -> lex -> balance. The token stream is then consumed by
//! the bytecode compiler in [`crate::evaluator`], which parses and emits code
//! in a single recursive-descent pass.
mod lexer;
mod tokens;

pub(crate) use tokens::{Token, TokenKind};

use crate::error::{ParseError, Span};

/// Tokenized input ready for the compiler
#[derive(Debug)]
pub(crate) struct TokenStream {
    pub tokens: Vec<Token>,
    /// Length of the input in characters; where end-of-input errors point
    pub end: usize,
}

/// Validate, lex and balance-check `input`.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is blank, contains an invalid
/// character or malformed numeral, or has unbalanced parentheses.
pub(crate) fn tokenize(input: &str) -> Result<TokenStream, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let chars: Vec<char> = input.chars().collect();
    let tokens = lexer::lex(&chars)?;
    check_parentheses(&tokens, chars.len())?;

    Ok(TokenStream {
        tokens,
        end: chars.len(),
    })
}

/// Check that every `(` has a matching `)` and vice versa.
///
/// An unclosed `(` is reported at `end`, the position where its `)` was
/// expected, along with the offset of the innermost unclosed `(`.
fn check_parentheses(tokens: &[Token], end: usize) -> Result<(), ParseError> {
    let mut open: Vec<Span> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => open.push(token.span),
            TokenKind::RightParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnmatchedCloseParen { span: token.span });
                }
            }
            _ => {}
        }
    }

    match open.last() {
        Some(span) => Err(ParseError::UnclosedParen {
            open: span.start,
            pos: end,
        }),
        None => Ok(()),
    }
}
