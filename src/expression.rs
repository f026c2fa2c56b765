//! User-facing expression: original text plus its compiled program
//!
//! An [`Expression`] is what a plotting layer holds on to. It is built once
//! from the text the user typed, keeps that text for labels, and owns a
//! reusable stack buffer so that sampling does not allocate.

use crate::builder::CompileOptions;
use crate::error::ParseError;
use crate::evaluator::Program;
use crate::C64;
use std::fmt;
use std::str::FromStr;

/// A compiled expression of one real variable `x`.
///
/// `evaluate` takes `&mut self` because it reuses the owned stack buffer.
/// To sample one expression from several threads, share its
/// [`program`](Self::program) and give each thread its own buffer.
///
/// # Example
///
/// ```
/// use complex_plot_expr::Expression;
///
/// let mut expr = Expression::new("sqrt(x)").expect("Should compile");
///
/// assert!(expr.evaluate(4.0).is_real());
///
/// let y = expr.evaluate(-1.0);
/// assert!(!y.is_real());
/// assert_eq!((y.re(), y.im()), (0.0, 1.0));
///
/// assert_eq!(expr.text(), "sqrt(x)");
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    text: String,
    program: Program,
    stack: Box<[C64]>,
}

impl Expression {
    /// Compile `text` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the text is not a well-formed expression.
    pub fn new(text: &str) -> Result<Self, ParseError> {
        Self::with_options(text, &CompileOptions::default())
    }

    /// Compile `text` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the text is not a well-formed expression or
    /// exceeds a configured limit.
    pub fn with_options(text: &str, options: &CompileOptions) -> Result<Self, ParseError> {
        let program = options.compile(text)?;
        let stack = program.new_stack();
        Ok(Self {
            text: text.to_owned(),
            program,
            stack,
        })
    }

    /// Evaluate at `x`. Undefined or divergent samples come back as NaN.
    #[inline]
    pub fn evaluate(&mut self, x: f64) -> C64 {
        self.program.run(x, &mut self.stack)
    }

    /// The text this expression was compiled from, unmodified
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The compiled form, shareable across threads
    #[inline]
    pub fn program(&self) -> &Program {
        &self.program
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
