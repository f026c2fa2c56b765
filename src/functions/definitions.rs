//! Function and constant definitions for the registry
//!
//! The first fifteen entries are the core vocabulary in its fixed order:
//! sin, cos, tan, cot, sec, csc, arcsin, arccos, arctan, exp, ln, log10,
//! log2, abs, sqrt. Encoding does not depend on this order (each entry names
//! its instruction explicitly), but listings and error messages follow it.
//! `min` and `max` take two comma-separated arguments; everything else
//! takes one.

use super::{ConstantDefinition, FunctionDefinition};
use crate::evaluator::{BinaryOp, Instruction, UnaryOp};

/// All recognized functions
pub static FUNCTIONS: &[FunctionDefinition] = &[
    // Trigonometric
    FunctionDefinition {
        name: "sin",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Sin),
    },
    FunctionDefinition {
        name: "cos",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Cos),
    },
    FunctionDefinition {
        name: "tan",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Tan),
    },
    FunctionDefinition {
        name: "cot",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Cot),
    },
    FunctionDefinition {
        name: "sec",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Sec),
    },
    FunctionDefinition {
        name: "csc",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Csc),
    },
    // Inverse trigonometric
    FunctionDefinition {
        name: "arcsin",
        aliases: &["asin"],
        op: Instruction::Unary(UnaryOp::Asin),
    },
    FunctionDefinition {
        name: "arccos",
        aliases: &["acos"],
        op: Instruction::Unary(UnaryOp::Acos),
    },
    FunctionDefinition {
        name: "arctan",
        aliases: &["atan"],
        op: Instruction::Unary(UnaryOp::Atan),
    },
    // Exponential / Log
    FunctionDefinition {
        name: "exp",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Exp),
    },
    FunctionDefinition {
        name: "ln",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Ln),
    },
    FunctionDefinition {
        name: "log10",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Log10),
    },
    FunctionDefinition {
        name: "log2",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Log2),
    },
    // Modulus and roots
    FunctionDefinition {
        name: "abs",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Abs),
    },
    FunctionDefinition {
        name: "sqrt",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Sqrt),
    },
    // Hyperbolic
    FunctionDefinition {
        name: "sinh",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Sinh),
    },
    FunctionDefinition {
        name: "cosh",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Cosh),
    },
    FunctionDefinition {
        name: "tanh",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Tanh),
    },
    // Angle conversion
    FunctionDefinition {
        name: "rad",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Rad),
    },
    FunctionDefinition {
        name: "deg",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Deg),
    },
    // Comparison and logic, defined on real values only
    FunctionDefinition {
        name: "not",
        aliases: &[],
        op: Instruction::Unary(UnaryOp::Not),
    },
    FunctionDefinition {
        name: "min",
        aliases: &[],
        op: Instruction::Binary(BinaryOp::Min),
    },
    FunctionDefinition {
        name: "max",
        aliases: &[],
        op: Instruction::Binary(BinaryOp::Max),
    },
];

/// Named constants, enabled by `CompileOptions::named_constants`
pub static CONSTANTS: &[ConstantDefinition] = &[
    ConstantDefinition {
        name: "pi",
        value: std::f64::consts::PI,
    },
    ConstantDefinition {
        name: "e",
        value: std::f64::consts::E,
    },
];
