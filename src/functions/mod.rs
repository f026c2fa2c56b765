//! Centralized table of recognized function names and named constants
//!
//! This module is the single source of truth for which identifiers the
//! compiler accepts. The table is built once, never mutated afterwards, and
//! maps every (lowercase) name directly to the [`Instruction`] a call emits.

pub(crate) mod definitions;
pub(crate) mod registry;

pub use definitions::{CONSTANTS, FUNCTIONS};

use crate::evaluator::Instruction;

/// A recognized function name and the instruction it compiles to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDefinition {
    /// Canonical lowercase name (e.g., "arcsin")
    pub name: &'static str,
    /// Alternative spellings accepted by the parser
    pub aliases: &'static [&'static str],
    /// Instruction emitted after the arguments
    pub op: Instruction,
}

impl FunctionDefinition {
    /// Number of comma-separated arguments a call takes
    pub fn arity(&self) -> usize {
        self.op.arity()
    }
}

/// A named literal such as `pi`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantDefinition {
    pub name: &'static str,
    pub value: f64,
}

/// Look up a function by name, ignoring ASCII case
pub fn lookup_function(name: &str) -> Option<&'static FunctionDefinition> {
    registry::Registry::function(name)
}

/// Look up a named constant, ignoring ASCII case
pub fn lookup_constant(name: &str) -> Option<&'static ConstantDefinition> {
    registry::Registry::constant(name)
}
