//! Scalar evaluation implementation for the bytecode evaluator.
//!
//! This module provides the `evaluate` family of methods on [`Program`]. It
//! uses a stack-based virtual machine over a fixed-capacity buffer whose size
//! was computed by the static pass in `stack`.
//!
//! # Performance Optimizations
//!
//! 1. **Inline stack**: For small programs (≤48 stack depth), uses a
//!    fixed-size array on the CPU stack instead of heap allocation.
//!
//! 2. **Buffer reuse**: `eval_batch` and `Expression` allocate one buffer
//!    and reuse it for every sample.
//!
//! 3. **Instruction dispatch**: a single `match` over four instruction
//!    shapes; operator semantics live on `BinaryOp`/`UnaryOp`.

use super::Program;
use super::instruction::Instruction;
use crate::C64;
use num_traits::Zero;

/// Size of the inline stack buffer (on CPU stack, not heap).
///
/// 48 elements * 16 bytes = 768 bytes.
/// Programs with deeper stacks fall back to heap allocation.
const INLINE_STACK_SIZE: usize = 48;

impl Program {
    /// Evaluate the program at `x`.
    ///
    /// Never fails: numeric domain problems (`ln(0)`, `1/0`, ...) produce
    /// the NaN sentinel. Infinite results are also reported as NaN, so
    /// callers only need `is_nan()` to detect an undefined sample.
    ///
    /// # Example
    ///
    /// ```
    /// use complex_plot_expr::compile;
    ///
    /// let program = compile("x^2 + 1").expect("compile");
    /// let y = program.evaluate(3.0);
    /// assert!((y.re() - 10.0).abs() < 1e-10);
    /// assert!(y.is_real());
    /// ```
    #[inline]
    #[must_use]
    pub fn evaluate(&self, x: f64) -> C64 {
        if self.stack_size <= INLINE_STACK_SIZE {
            let mut inline_stack = [C64::zero(); INLINE_STACK_SIZE];
            self.run(x, &mut inline_stack)
        } else {
            let mut stack = self.new_stack();
            self.run(x, &mut stack)
        }
    }

    /// Evaluate at `x` using a caller-supplied scratch buffer.
    ///
    /// This is the stateless form: the program itself is never mutated, so
    /// one program can be evaluated concurrently as long as every thread has
    /// its own buffer. Use [`Program::new_stack`] to get one of the right
    /// size.
    ///
    /// # Panics
    ///
    /// Panics if `stack` is shorter than [`Program::stack_size`].
    #[inline]
    pub fn evaluate_with(&self, x: f64, stack: &mut [C64]) -> C64 {
        assert!(
            stack.len() >= self.stack_size,
            "evaluation stack has {} slots, program needs {}",
            stack.len(),
            self.stack_size
        );
        self.run(x, stack)
    }

    /// Allocate a scratch buffer sized for this program
    #[must_use]
    pub fn new_stack(&self) -> Box<[C64]> {
        vec![C64::zero(); self.stack_size].into_boxed_slice()
    }

    /// Evaluate the program at every value in `xs`, reusing one stack buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use complex_plot_expr::compile;
    ///
    /// let program = compile("sqrt(x)").expect("compile");
    /// let ys = program.eval_batch(&[4.0, -4.0]);
    /// assert!((ys[0].re() - 2.0).abs() < 1e-12);
    /// assert!((ys[1].im() - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn eval_batch(&self, xs: &[f64]) -> Vec<C64> {
        let mut stack = self.new_stack();
        xs.iter().map(|&x| self.run(x, &mut stack)).collect()
    }

    /// The evaluation loop.
    ///
    /// `stack` must hold at least `stack_size` slots. The compiler guarantees
    /// every program pops only what it pushed and leaves exactly one value.
    #[inline]
    pub(crate) fn run(&self, x: f64, stack: &mut [C64]) -> C64 {
        let consts = &*self.constants;
        let mut len = 0_usize;

        for instr in &*self.instructions {
            match *instr {
                Instruction::LoadConst(c) => {
                    stack[len] = consts[c as usize];
                    len += 1;
                }
                Instruction::LoadX => {
                    stack[len] = C64::real(x);
                    len += 1;
                }
                Instruction::Unary(op) => {
                    let top = &mut stack[len - 1];
                    *top = op.apply(*top);
                }
                Instruction::Binary(op) => {
                    len -= 1;
                    let rhs = stack[len];
                    let lhs = &mut stack[len - 1];
                    *lhs = op.apply(*lhs, rhs);
                }
            }
        }

        debug_assert_eq!(len, 1, "program left {len} values on the stack");
        let result = stack[0];
        if result.is_infinite() {
            C64::nan()
        } else {
            result
        }
    }
}
