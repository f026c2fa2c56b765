//! Compiled expression evaluator for repeated numerical sampling.
//!
//! Expression text is compiled once into flat postfix bytecode plus a
//! constant pool; the resulting [`Program`] is then executed for as many
//! values of `x` as needed without re-parsing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌────────────┐    ┌─────────────────────┐
//! │    text     │ -> │  Compiler  │ -> │       Program       │
//! │  (tokens)   │    │ (Bytecode) │    │   (Stack Machine)   │
//! └─────────────┘    └────────────┘    └─────────────────────┘
//!                                              │
//!                          ┌───────────────────┼───────────────────┐
//!                          ▼                   ▼                   ▼
//!                    ┌──────────┐       ┌──────────┐       ┌──────────┐
//!                    │ evaluate │       │eval_batch│       │ parallel │
//!                    │ (scalar) │       │ (reuse)  │       │  (Rayon) │
//!                    └──────────┘       └──────────┘       └──────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use complex_plot_expr::compile;
//!
//! let program = compile("sin(x) * cos(x) + x^2").expect("Should compile");
//!
//! let result = program.evaluate(0.5);
//! assert!((result.re() - (0.5_f64.sin() * 0.5_f64.cos() + 0.25)).abs() < 1e-10);
//! assert!(result.is_real());
//! ```
//!
//! # Modules
//!
//! - `instruction`: Bytecode instruction definitions
//! - `compiler`: Token-to-bytecode compilation
//! - `stack`: Static stack depth analysis
//! - `execution`: Evaluation loop

mod compiler;
mod execution;
mod instruction;
mod stack;

pub(crate) use compiler::Compiler;
pub use instruction::{BinaryOp, Instruction, UnaryOp};

use crate::C64;
use crate::builder::CompileOptions;
use crate::error::ParseError;
use std::fmt;

/// Compile `text` with default options.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a well-formed expression.
pub fn compile(text: &str) -> Result<Program, ParseError> {
    CompileOptions::default().compile(text)
}

/// A compiled expression: bytecode, constant pool and required stack size.
///
/// A `Program` is immutable after compilation and is `Send + Sync`, so it
/// can be shared read-only across threads. Evaluation state lives in a
/// separate stack buffer (see [`Program::evaluate_with`]).
#[derive(Clone, PartialEq)]
pub struct Program {
    /// Bytecode instructions in postfix order
    instructions: Box<[Instruction]>,
    /// Constant pool referenced by `LoadConst`
    constants: Box<[C64]>,
    /// Maximum stack depth reached during evaluation
    stack_size: usize,
}

impl Program {
    pub(crate) fn from_parts(
        instructions: Vec<Instruction>,
        constants: Vec<C64>,
        stack_size: usize,
    ) -> Self {
        Self {
            instructions: instructions.into_boxed_slice(),
            constants: constants.into_boxed_slice(),
            stack_size,
        }
    }

    /// Bytecode in execution order
    #[inline]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Literal pool indexed by [`Instruction::LoadConst`]
    #[inline]
    pub fn constants(&self) -> &[C64] {
        &self.constants
    }

    /// Number of stack slots an evaluation needs
    #[inline]
    pub const fn stack_size(&self) -> usize {
        self.stack_size
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Program")
            .field("code", &self.to_string())
            .field("constants", &self.constants.len())
            .field("stack_size", &self.stack_size)
            .finish()
    }
}

/// Reverse Polish rendering with literals shown by value, e.g. `x 2 ^ 1 +`
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, instr) in self.instructions.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match instr {
                Instruction::LoadConst(idx) => match self.constants.get(*idx as usize) {
                    Some(value) if value.is_real() => write!(f, "{}", value.re())?,
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, "{instr}")?,
                },
                _ => write!(f, "{instr}")?,
            }
        }
        Ok(())
    }
}
