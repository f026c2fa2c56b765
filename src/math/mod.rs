//! Numeric value types
//!
//! The evaluator computes over [`Complex`] values so that real-looking
//! expressions such as `sqrt(x)` or `ln(x)` stay defined for negative `x`.
//!
//! # Domain handling
//!
//! No operation panics or returns an error for domain problems. Poles and
//! undefined points resolve to sentinels that propagate silently:
//!
//! - **Zero divisor**: `z / 0` is the infinite sentinel, `0 / 0` is NaN
//! - **Logarithms**: `ln(0)` has an infinite real part
//! - **Power**: `0^w` follows the sign of `Re(w)`

mod complex;

pub use complex::{C64, Complex};
