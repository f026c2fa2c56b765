use num_traits::{Float, FloatConst};
use std::fmt::{Debug, Display};

/// Default tolerance for floating-point comparisons in tests
#[cfg(test)]
pub(crate) const FLOAT_TOLERANCE: f64 = 1e-10;

/// Component type of a [`Complex`](crate::Complex) value.
///
/// This aggregates `num_traits::Float` (providing sin, cosh, atan2, etc.),
/// `FloatConst` (PI, LN_2, LN_10) and the formatting traits the value type
/// needs. Both `f32` and `f64` satisfy it; the compiler and evaluator work
/// on `f64`.
pub trait MathScalar: Float + FloatConst + Debug + Display + 'static {}

// Blanket implementation for any type that satisfies the bounds
impl<T> MathScalar for T where T: Float + FloatConst + Debug + Display + 'static {}

/// Check if two floats agree within [`FLOAT_TOLERANCE`]
#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < FLOAT_TOLERANCE
}
