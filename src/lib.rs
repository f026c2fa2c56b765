//! Complex-valued expression compiler for plotting
//!
//! Compile a formula in one real variable `x` once, then sample it at as many
//! points as needed. Evaluation happens over the complex numbers, so
//! `sqrt(x)` or `ln(x)` for negative `x` produce well-defined complex values
//! instead of failing.
//!
//! # Features
//! - Recursive-descent compiler emitting compact postfix bytecode
//! - Stack machine with a statically sized evaluation stack
//! - Principal-branch complex elementary functions, plus `min`, `max` and `not` on reals
//! - Domain problems resolve to NaN instead of errors
//! - **Builder pattern API** for compiler limits
//! - Optional parallel batch sampling (`parallel` feature)
//!
//! # Usage Examples
//!
//! ## Expression facade
//! ```
//! use complex_plot_expr::Expression;
//!
//! let mut parabola = Expression::new("x^2 - 1").unwrap();
//! let y = parabola.evaluate(3.0);
//! assert_eq!((y.re(), y.im()), (8.0, 0.0));
//! assert!(y.is_real());
//! ```
//!
//! ## Shared program
//! ```
//! use complex_plot_expr::compile;
//!
//! let program = compile("1 / (x - 2)").unwrap();
//! let ys = program.eval_batch(&[1.0, 2.0, 3.0]);
//! assert_eq!(ys[0].re(), -1.0);
//! assert!(ys[1].is_nan()); // pole
//! assert_eq!(ys[2].re(), 1.0);
//! ```
//!
//! ## Errors
//! ```
//! use complex_plot_expr::{Expression, ParseError};
//!
//! let err = Expression::new("2*(3+").unwrap_err();
//! assert!(matches!(err, ParseError::UnclosedParen { .. }));
//! assert_eq!(err.position(), Some(5));
//! ```

mod builder;
mod error;
mod evaluator;
mod expression;
pub mod functions;
pub(crate) mod math;
mod parser;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;


// Re-export key types for easier usage
pub use builder::{CompileOptions, DEFAULT_MAX_DEPTH, DEFAULT_MAX_STACK};
pub use error::{ParseError, Span};
pub use evaluator::{BinaryOp, Instruction, Program, UnaryOp, compile};
pub use expression::Expression;
pub use math::{C64, Complex};
pub use traits::MathScalar;
