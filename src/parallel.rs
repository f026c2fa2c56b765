//! Parallel batch evaluation using Rayon
//!
//! A compiled [`Program`] is immutable, so it can be shared by reference
//! across worker threads. Each worker gets its own stack buffer, allocated
//! once per work split rather than once per sample.
//!
//! Enable with the `parallel` feature:
//! ```toml
//! complex_plot_expr = { version = "0.1", features = ["parallel"] }
//! ```

use crate::C64;
use crate::evaluator::Program;
use rayon::prelude::*;

/// Evaluate `program` at every value in `xs` in parallel.
///
/// Results are in the same order as `xs` and identical to what
/// [`Program::eval_batch`] returns.
///
/// # Example
/// ```
/// use complex_plot_expr::{compile, parallel::eval_batch_parallel};
///
/// let program = compile("x^2").expect("Should compile");
/// let xs: Vec<f64> = (0..1000).map(f64::from).collect();
/// let ys = eval_batch_parallel(&program, &xs);
/// assert_eq!(ys[12].re(), 144.0);
/// ```
pub fn eval_batch_parallel(program: &Program, xs: &[f64]) -> Vec<C64> {
    xs.par_iter()
        .map_init(|| program.new_stack(), |stack, &x| program.run(x, stack))
        .collect()
}

/// Evaluate several programs over the same sample points in parallel.
///
/// Returns one result vector per program, in the order of `programs`. This
/// is the shape a plotter needs when drawing several curves over one axis.
pub fn eval_programs_parallel(programs: &[&Program], xs: &[f64]) -> Vec<Vec<C64>> {
    programs
        .par_iter()
        .map(|program| eval_batch_parallel(program, xs))
        .collect()
}
