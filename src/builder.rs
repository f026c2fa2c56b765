//! Builder pattern API for compilation settings
//!
//! Provides a fluent interface for configuring and running the compiler.
//!
//! # Example
//! ```
//! use complex_plot_expr::CompileOptions;
//!
//! let program = CompileOptions::new()
//!     .max_depth(32)
//!     .named_constants(false)
//!     .compile("sin(x)^2 + cos(x)^2")
//!     .expect("Should compile");
//!
//! assert!((program.evaluate(0.3).re() - 1.0).abs() < 1e-12);
//! ```

use crate::error::ParseError;
use crate::evaluator::{Compiler, Program};
use crate::parser;
use log::{debug, trace};

/// Default limit on parenthesis and function-call nesting
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Default limit on the statically computed evaluation stack
pub const DEFAULT_MAX_STACK: usize = 1024;

/// Builder for compilation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileOptions {
    pub(crate) max_depth: usize,
    pub(crate) max_stack: usize,
    pub(crate) named_constants: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_stack: DEFAULT_MAX_STACK,
            named_constants: true,
        }
    }
}

impl CompileOptions {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting of parentheses and function calls.
    ///
    /// The parser recurses once per level, so very large values trade the
    /// error for native stack usage.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the maximum evaluation stack a compiled program may require
    pub fn max_stack(mut self, slots: usize) -> Self {
        self.max_stack = slots;
        self
    }

    /// Accept `pi` and `e` as literals (on by default)
    pub fn named_constants(mut self, enabled: bool) -> Self {
        self.named_constants = enabled;
        self
    }

    /// Compile `text` into a [`Program`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the text is empty, malformed, or exceeds
    /// one of the configured limits.
    pub fn compile(&self, text: &str) -> Result<Program, ParseError> {
        let result = parser::tokenize(text)
            .and_then(|stream| Compiler::new(&stream, self).compile())
            .map(|parts| Program::from_parts(parts.instructions, parts.constants, parts.stack_size));

        match &result {
            Ok(program) => {
                debug!(
                    "compiled {:?}: {} instructions, {} constants, stack {}",
                    text,
                    program.instructions().len(),
                    program.constants().len(),
                    program.stack_size()
                );
                trace!("rpn for {:?}: {}", text, program);
            }
            Err(err) => debug!("failed to compile {:?}: {}", text, err),
        }
        result
    }
}
