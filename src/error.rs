use std::fmt;

/// Source location span for error reporting
/// Represents a range of characters in the input string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position (0-indexed character offset)
    pub start: usize,
    /// End position (exclusive, 0-indexed character offset)
    pub end: usize,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Create a span for a single position
    pub fn at(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos + 1,
        }
    }

    /// Check if this span has valid location info
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    /// Format the span for display (1-indexed for users)
    pub fn display(&self) -> String {
        if !self.is_valid() {
            String::new()
        } else if self.end - self.start == 1 {
            format!(" at position {}", self.start + 1)
        } else {
            format!(" at positions {}-{}", self.start + 1, self.end)
        }
    }
}

/// Errors that can occur while compiling an expression
///
/// All of these are structural problems with the input text. Numeric domain
/// problems (division by zero, `ln(0)`, ...) are never errors; they evaluate
/// to NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    // Input validation errors
    EmptyExpression,
    InvalidCharacter {
        ch: char,
        span: Span,
    },

    // Lexical errors
    InvalidNumber {
        value: String,
        span: Span,
    },
    UnknownIdentifier {
        name: String,
        span: Span,
    },

    // Syntax errors
    MisplacedOperator {
        op: char,
        span: Span,
    },
    UnexpectedToken {
        expected: String,
        got: String,
        span: Span,
    },
    ExpectedOpenParen {
        function: String,
        span: Span,
    },
    UnclosedParen {
        /// Offset of the `(` that is never closed
        open: usize,
        /// End of input, where the `)` was expected
        pos: usize,
    },
    UnmatchedCloseParen {
        span: Span,
    },
    UnexpectedEndOfInput {
        pos: usize,
    },
    TrailingInput {
        span: Span,
    },

    // Safety limits
    MaxDepthExceeded {
        limit: usize,
        span: Span,
    },
    StackOverflow {
        depth: usize,
        limit: usize,
    },
    TooManyConstants,
}

impl ParseError {
    /// Character offset the error points at, if it has one
    ///
    /// For unclosed parentheses this is the end of the input.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnclosedParen { pos, .. } | ParseError::UnexpectedEndOfInput { pos } => {
                Some(*pos)
            }
            _ => self.span().map(|s| s.start),
        }
    }

    /// Full span of the offending input, when the error covers a token
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::InvalidCharacter { span, .. }
            | ParseError::InvalidNumber { span, .. }
            | ParseError::UnknownIdentifier { span, .. }
            | ParseError::MisplacedOperator { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedOpenParen { span, .. }
            | ParseError::UnmatchedCloseParen { span }
            | ParseError::TrailingInput { span }
            | ParseError::MaxDepthExceeded { span, .. } => Some(*span),
            ParseError::UnclosedParen { pos, .. } | ParseError::UnexpectedEndOfInput { pos } => {
                Some(Span::at(*pos))
            }
            ParseError::EmptyExpression
            | ParseError::StackOverflow { .. }
            | ParseError::TooManyConstants => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyExpression => write!(f, "Expression cannot be empty"),
            ParseError::InvalidCharacter { ch, span } => {
                write!(f, "Invalid character '{}'{}", ch, span.display())
            }
            ParseError::InvalidNumber { value, span } => {
                write!(f, "Invalid number format: '{}'{}", value, span.display())
            }
            ParseError::UnknownIdentifier { name, span } => {
                write!(
                    f,
                    "Unknown identifier '{}'{}: expected 'x', a constant or a function name",
                    name,
                    span.display()
                )
            }
            ParseError::MisplacedOperator { op, span } => {
                write!(
                    f,
                    "Operator '{}' is not allowed here{}: expected a number, 'x', a function or '('",
                    op,
                    span.display()
                )
            }
            ParseError::UnexpectedToken {
                expected,
                got,
                span,
            } => {
                write!(
                    f,
                    "Expected {}, but got '{}'{}",
                    expected,
                    got,
                    span.display()
                )
            }
            ParseError::ExpectedOpenParen { function, span } => {
                write!(
                    f,
                    "Function '{}' must be followed by '('{}",
                    function,
                    span.display()
                )
            }
            ParseError::UnclosedParen { open, pos } => {
                write!(
                    f,
                    "Unmatched parenthesis: '(' at position {} is never closed (expected ')' at position {})",
                    open + 1,
                    pos + 1
                )
            }
            ParseError::UnmatchedCloseParen { span } => {
                write!(
                    f,
                    "Unmatched parenthesis: ')' has no opening '('{}",
                    span.display()
                )
            }
            ParseError::UnexpectedEndOfInput { pos } => {
                write!(f, "Unexpected end of input at position {}", pos + 1)
            }
            ParseError::TrailingInput { span } => {
                write!(
                    f,
                    "Unexpected input after a complete expression{}",
                    span.display()
                )
            }
            ParseError::MaxDepthExceeded { limit, span } => {
                write!(
                    f,
                    "Expression nesting depth exceeds maximum limit of {}{}",
                    limit,
                    span.display()
                )
            }
            ParseError::StackOverflow { depth, limit } => {
                write!(
                    f,
                    "Expression needs an evaluation stack of {} entries, limit is {}",
                    depth, limit
                )
            }
            ParseError::TooManyConstants => {
                write!(f, "Expression has too many numeric literals")
            }
        }
    }
}

impl std::error::Error for ParseError {}
