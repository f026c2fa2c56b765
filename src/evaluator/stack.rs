//! Static stack analysis for compiled bytecode.
//!
//! The evaluator runs every program on a fixed-capacity stack. Its capacity
//! is computed here, once, by walking the instruction stream:
//!
//! - `LoadConst` / `LoadX` push one value (+1)
//! - binary operators pop two and push one (-1)
//! - unary operators pop one and push one (0)
//!
//! The maximum running depth is the capacity. The same walk checks that no
//! instruction pops from an empty stack and that exactly one value is left
//! at the end; a program that passes can be executed without any runtime
//! stack checks.

use super::instruction::Instruction;
use std::fmt;

/// Structural fault found while analyzing a program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackFault {
    /// Instruction at `index` needs more operands than are on the stack
    Underflow { index: usize },
    /// The program finishes with `remaining` values instead of one
    Unbalanced { remaining: usize },
}

impl fmt::Display for StackFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackFault::Underflow { index } => {
                write!(f, "instruction {} pops from an empty stack", index)
            }
            StackFault::Unbalanced { remaining } => {
                write!(f, "program leaves {} values on the stack", remaining)
            }
        }
    }
}

/// Compute the maximum stack depth a program reaches.
///
/// # Errors
///
/// Returns a [`StackFault`] when the program is structurally malformed.
pub fn max_depth(instructions: &[Instruction]) -> Result<usize, StackFault> {
    let mut depth = 0_usize;
    let mut max = 0_usize;

    for (index, instr) in instructions.iter().enumerate() {
        if depth < instr.arity() {
            return Err(StackFault::Underflow { index });
        }
        depth = depth - instr.arity() + 1;
        max = max.max(depth);
    }

    if depth == 1 {
        Ok(max)
    } else {
        Err(StackFault::Unbalanced { remaining: depth })
    }
}
