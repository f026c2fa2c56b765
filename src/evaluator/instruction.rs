//! Bytecode instruction definitions.
//!
//! A compiled program is a postfix sequence of [`Instruction`]s. Operators
//! are explicit enum variants rather than offsets from a base tag, so the
//! order in which functions are declared never changes their encoding.

use crate::C64;
use std::fmt;

/// Binary operators and two-argument functions, popping two operands and
/// pushing one result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
    Min,
    Max,
}

impl BinaryOp {
    /// Apply the operator; `lhs` is the operand pushed first
    #[inline]
    pub fn apply(self, lhs: C64, rhs: C64) -> C64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Rem => lhs % rhs,
            BinaryOp::Pow => lhs.pow(rhs),
            BinaryOp::Min => lhs.min_real(rhs),
            BinaryOp::Max => lhs.max_real(rhs),
        }
    }

    /// Operator symbol, or the function name for `min` and `max`
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "^",
            BinaryOp::Min => "min",
            BinaryOp::Max => "max",
        }
    }
}

/// Unary operators, replacing the top of the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Neg,
    Sin,
    Cos,
    Tan,
    Cot,
    Sec,
    Csc,
    Asin,
    Acos,
    Atan,
    Exp,
    Ln,
    Log10,
    Log2,
    Abs,
    Sqrt,
    Sinh,
    Cosh,
    Tanh,
    Rad,
    Deg,
    Not,
}

impl UnaryOp {
    #[inline]
    pub fn apply(self, z: C64) -> C64 {
        match self {
            UnaryOp::Neg => -z,
            UnaryOp::Sin => z.sin(),
            UnaryOp::Cos => z.cos(),
            UnaryOp::Tan => z.tan(),
            UnaryOp::Cot => z.cot(),
            UnaryOp::Sec => z.sec(),
            UnaryOp::Csc => z.csc(),
            UnaryOp::Asin => z.asin(),
            UnaryOp::Acos => z.acos(),
            UnaryOp::Atan => z.atan(),
            UnaryOp::Exp => z.exp(),
            UnaryOp::Ln => z.ln(),
            UnaryOp::Log10 => z.log10(),
            UnaryOp::Log2 => z.log2(),
            UnaryOp::Abs => z.abs(),
            UnaryOp::Sqrt => z.sqrt(),
            UnaryOp::Sinh => z.sinh(),
            UnaryOp::Cosh => z.cosh(),
            UnaryOp::Tanh => z.tanh(),
            UnaryOp::Rad => z.to_radians(),
            UnaryOp::Deg => z.to_degrees(),
            UnaryOp::Not => z.logical_not(),
        }
    }

    /// Canonical source name (`neg` for the unary minus)
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Neg => "neg",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Cot => "cot",
            UnaryOp::Sec => "sec",
            UnaryOp::Csc => "csc",
            UnaryOp::Asin => "arcsin",
            UnaryOp::Acos => "arccos",
            UnaryOp::Atan => "arctan",
            UnaryOp::Exp => "exp",
            UnaryOp::Ln => "ln",
            UnaryOp::Log10 => "log10",
            UnaryOp::Log2 => "log2",
            UnaryOp::Abs => "abs",
            UnaryOp::Sqrt => "sqrt",
            UnaryOp::Sinh => "sinh",
            UnaryOp::Cosh => "cosh",
            UnaryOp::Tanh => "tanh",
            UnaryOp::Rad => "rad",
            UnaryOp::Deg => "deg",
            UnaryOp::Not => "not",
        }
    }
}

/// One bytecode instruction.
///
/// Constant-pool indices are full `u32` operands, so the number of literals
/// is not capped by the width of the opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Push `constants[idx]`
    LoadConst(u32),
    /// Push the free variable as a real value
    LoadX,
    /// Pop right, pop left, push `left op right`
    Binary(BinaryOp),
    /// Pop one, push `op(value)`
    Unary(UnaryOp),
}

impl Instruction {
    /// Number of operands popped before the result is pushed
    #[inline]
    pub fn arity(self) -> usize {
        match self {
            Instruction::LoadConst(_) | Instruction::LoadX => 0,
            Instruction::Unary(_) => 1,
            Instruction::Binary(_) => 2,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::LoadConst(idx) => write!(f, "#{}", idx),
            Instruction::LoadX => write!(f, "x"),
            Instruction::Binary(op) => write!(f, "{}", op.name()),
            Instruction::Unary(op) => write!(f, "{}", op.name()),
        }
    }
}
