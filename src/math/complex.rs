use crate::traits::MathScalar;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

/// Complex value `re + im·i`.
///
/// Values are immutable: every operation returns a new value. Equality is
/// exact component-wise comparison. Domain problems (zero divisors, logs of
/// zero, ...) never panic; they resolve to the NaN or infinite sentinels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Complex<T: MathScalar> {
    re: T,
    im: T,
}

/// The complex type the compiler and evaluator work with
pub type C64 = Complex<f64>;

impl<T: MathScalar> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// A value on the real axis
    pub fn real(re: T) -> Self {
        Self { re, im: T::zero() }
    }

    /// The imaginary unit
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// The NaN sentinel `(NaN, NaN)`
    pub fn nan() -> Self {
        Self::new(T::nan(), T::nan())
    }

    /// The positive infinite sentinel `(+inf, +inf)`
    pub fn infinity() -> Self {
        Self::new(T::infinity(), T::infinity())
    }

    /// The negative infinite sentinel `(-inf, -inf)`
    pub fn neg_infinity() -> Self {
        Self::new(T::neg_infinity(), T::neg_infinity())
    }

    #[inline]
    pub fn re(self) -> T {
        self.re
    }

    #[inline]
    pub fn im(self) -> T {
        self.im
    }

    // Predicates

    /// True iff the imaginary component is exactly zero
    #[inline]
    pub fn is_real(self) -> bool {
        self.im == T::zero()
    }

    /// True if either component is NaN
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// True if no component is NaN and at least one is infinite
    #[inline]
    pub fn is_infinite(self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    // Representations

    /// `|z|` as a scalar
    pub fn modulus(self) -> T {
        self.re.hypot(self.im)
    }

    /// `|z|` as a real complex value
    pub fn abs(self) -> Self {
        Self::real(self.modulus())
    }

    /// `arg(z) = atan2(im, re)`, in `(-pi, pi]`
    pub fn argument(self) -> T {
        self.im.atan2(self.re)
    }

    pub fn conjugate(self) -> Self {
        Self::new(self.re, -self.im)
    }

    /// Polar form packed as `(modulus, argument)`
    pub fn polar(self) -> Self {
        Self::new(self.modulus(), self.argument())
    }

    /// Inverse of [`polar`](Self::polar): reads `re` as the modulus and `im` as the angle
    pub fn cartesian(self) -> Self {
        Self::new(self.re * self.im.cos(), self.re * self.im.sin())
    }

    pub fn recip(self) -> Self {
        Self::one() / self
    }

    // i·z and -i·z without a full complex multiplication
    fn mul_i(self) -> Self {
        Self::new(-self.im, self.re)
    }

    fn mul_neg_i(self) -> Self {
        Self::new(self.im, -self.re)
    }

    // Power, exponential and logarithms

    /// Principal power `exp(w · ln z)`.
    ///
    /// Where the principal value is real (positive real base with a real
    /// exponent, negative real base with an integral exponent) the result is
    /// computed with the real `powf` so no rounding noise leaks into the
    /// imaginary part. A zero base gives `1` for `w = 0`, `0` for
    /// `Re(w) > 0`, the infinite sentinel for real `w < 0`, and NaN otherwise.
    pub fn pow(self, w: Self) -> Self {
        if self.is_zero() {
            return if w.is_zero() {
                Self::one()
            } else if w.re > T::zero() {
                Self::zero()
            } else if w.is_real() && w.re < T::zero() {
                Self::infinity()
            } else {
                Self::nan()
            };
        }

        if self.is_real()
            && w.is_real()
            && (self.re > T::zero() || (self.re < T::zero() && w.re.fract() == T::zero()))
        {
            return Self::real(self.re.powf(w.re));
        }

        (self.ln() * w).exp()
    }

    pub fn exp(self) -> Self {
        if self.is_real() {
            return Self::real(self.re.exp());
        }
        let scale = self.re.exp();
        Self::new(scale * self.im.cos(), scale * self.im.sin())
    }

    /// Principal natural logarithm `(ln|z|, arg z)`
    pub fn ln(self) -> Self {
        Self::new(self.modulus().ln(), self.argument())
    }

    /// Logarithm to a real base: `ln z / ln base`
    pub fn log(self, base: T) -> Self {
        let ln = self.ln();
        let ln_base = base.ln();
        Self::new(ln.re / ln_base, ln.im / ln_base)
    }

    pub fn log2(self) -> Self {
        let ln = self.ln();
        Self::new(ln.re / T::LN_2(), ln.im / T::LN_2())
    }

    pub fn log10(self) -> Self {
        let ln = self.ln();
        Self::new(ln.re / T::LN_10(), ln.im / T::LN_10())
    }

    /// Principal square root.
    ///
    /// Half-angle form through the modulus: `sqrt((|z| + |re|) / 2)` is the
    /// larger component, the other one follows from `im / 2t`. Exact on
    /// both axes, so `sqrt(-1) = i`.
    pub fn sqrt(self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let two = T::one() + T::one();
        let m = self.modulus();
        // Halve first near the top of the range so the sum cannot overflow
        let half = if m < T::max_value() / two {
            (m + self.re.abs()) / two
        } else {
            m / two + self.re.abs() / two
        };
        let t = half.sqrt();
        if self.re >= T::zero() {
            Self::new(t, self.im / (t + t))
        } else {
            let im = if self.im.is_sign_negative() { -t } else { t };
            Self::new(self.im.abs() / (t + t), im)
        }
    }

    // Trigonometry

    pub fn sin(self) -> Self {
        Self::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    pub fn cos(self) -> Self {
        Self::new(
            self.re.cos() * self.im.cosh(),
            -(self.re.sin() * self.im.sinh()),
        )
    }

    pub fn tan(self) -> Self {
        self.sin() / self.cos()
    }

    pub fn cot(self) -> Self {
        Self::one() / self.tan()
    }

    pub fn sec(self) -> Self {
        Self::one() / self.cos()
    }

    pub fn csc(self) -> Self {
        Self::one() / self.sin()
    }

    pub fn sinh(self) -> Self {
        Self::new(
            self.re.sinh() * self.im.cos(),
            self.re.cosh() * self.im.sin(),
        )
    }

    pub fn cosh(self) -> Self {
        Self::new(
            self.re.cosh() * self.im.cos(),
            self.re.sinh() * self.im.sin(),
        )
    }

    /// Hyperbolic tangent.
    ///
    /// Away from the imaginary axis `sinh / cosh` overflows long before the
    /// quotient leaves `±1`, so for `|re| > 1` it is computed as
    /// `(1 - e^(-2z)) / (1 + e^(-2z))` on the right half-plane and mirrored.
    pub fn tanh(self) -> Self {
        if self.is_real() {
            return Self::real(self.re.tanh());
        }
        if self.re.abs() > T::one() {
            let w = if self.re < T::zero() { -self } else { self };
            let q = (-(w + w)).exp();
            let t = (Self::one() - q) / (Self::one() + q);
            return if self.re < T::zero() { -t } else { t };
        }
        self.sinh() / self.cosh()
    }

    /// Arcsine: `-i · ln(sqrt(1 - z²) + i·z)`
    pub fn asin(self) -> Self {
        let w = (Self::one() - self * self).sqrt() + self.mul_i();
        w.ln().mul_neg_i()
    }

    /// Arccosine: `-i · ln(z + sqrt(z² - 1))`, folded onto the principal branch.
    ///
    /// A non-negative real part keeps its sign and only the imaginary part
    /// flips; otherwise the whole value is negated.
    pub fn acos(self) -> Self {
        let w = (self + (self * self - Self::one()).sqrt()).ln().mul_neg_i();
        if w.re >= T::zero() {
            Self::new(w.re, -w.im)
        } else {
            -w
        }
    }

    /// Arctangent: `-i/2 · ln((z - i) / (-z - i))`
    pub fn atan(self) -> Self {
        if self.is_real() {
            return Self::real(self.re.atan());
        }
        let i = Self::i();
        let two = T::one() + T::one();
        let ratio = (self - i) / (-self - i);
        let w = ratio.ln().mul_neg_i();
        Self::new(w.re / two, w.im / two)
    }

    /// Degrees to radians, component-wise
    pub fn to_radians(self) -> Self {
        Self::new(self.re.to_radians(), self.im.to_radians())
    }

    /// Radians to degrees, component-wise
    pub fn to_degrees(self) -> Self {
        Self::new(self.re.to_degrees(), self.im.to_degrees())
    }

    // Comparisons. Only real values are ordered; anything else is NaN.

    fn ordered(self, other: Self) -> bool {
        self.is_real() && other.is_real() && !self.is_nan() && !other.is_nan()
    }

    /// The larger of two real values (`other` on a tie)
    pub fn max_real(self, other: Self) -> Self {
        if !self.ordered(other) {
            return Self::nan();
        }
        if self.re > other.re { self } else { other }
    }

    /// The smaller of two real values (`other` on a tie)
    pub fn min_real(self, other: Self) -> Self {
        if !self.ordered(other) {
            return Self::nan();
        }
        if self.re < other.re { self } else { other }
    }

    /// Logical negation of a real value: `1` for zero, `0` otherwise
    pub fn logical_not(self) -> Self {
        if !self.is_real() || self.is_nan() {
            Self::nan()
        } else if self.re.is_zero() {
            Self::one()
        } else {
            Self::zero()
        }
    }
}

impl<T: MathScalar> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.im < T::zero() { '-' } else { '+' };
        write!(f, "({} {} {}i)", self.re, sign, self.im.abs())
    }
}

impl<T: MathScalar> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::real(re)
    }
}

impl<T: MathScalar> From<(T, T)> for Complex<T> {
    fn from((re, im): (T, T)) -> Self {
        Self::new(re, im)
    }
}

// Basic Arithmetic

impl<T: MathScalar> Add for Complex<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: MathScalar> Sub for Complex<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: MathScalar> Mul for Complex<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: MathScalar> Div for Complex<T> {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        // A zero divisor is a pole, not a panic: 0/0 is undefined, anything else diverges
        if rhs.is_zero() {
            return if self.is_zero() || self.is_nan() {
                Self::nan()
            } else {
                Self::infinity()
            };
        }
        if rhs.is_real() {
            return Self::new(self.re / rhs.re, self.im / rhs.re);
        }
        // Smith's algorithm: scale by the larger divisor component so |w|^2
        // is never formed
        let (a, b, c, d) = (self.re, self.im, rhs.re, rhs.im);
        if c.abs() >= d.abs() {
            let r = d / c;
            let den = c + d * r;
            Self::new((a + b * r) / den, (b - a * r) / den)
        } else {
            let r = c / d;
            let den = c * r + d;
            Self::new((a * r + b) / den, (b * r - a) / den)
        }
    }
}

impl<T: MathScalar> Neg for Complex<T> {
    type Output = Self;
    fn neg(self) -> Self {
        // Subtraction from zero never produces -0.0, so -1 stays on the
        // upper side of the branch cut used by sqrt and ln
        Self::new(T::zero() - self.re, T::zero() - self.im)
    }
}

impl<T: MathScalar> Rem for Complex<T> {
    type Output = Self;
    fn rem(self, rhs: Self) -> Self {
        // Gaussian remainder: z - round(z / w) * w
        let q = self / rhs;
        self - Self::new(q.re.round(), q.im.round()) * rhs
    }
}

// Assignments

impl<T: MathScalar> AddAssign for Complex<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: MathScalar> SubAssign for Complex<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: MathScalar> MulAssign for Complex<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: MathScalar> DivAssign for Complex<T> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: MathScalar> RemAssign for Complex<T> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl<T: MathScalar> Zero for Complex<T> {
    fn zero() -> Self {
        Self::real(T::zero())
    }
    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T: MathScalar> One for Complex<T> {
    fn one() -> Self {
        Self::real(T::one())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::approx_eq;
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, PI};

    fn c(re: f64, im: f64) -> C64 {
        Complex::new(re, im)
    }

    fn close(a: C64, b: C64) -> bool {
        approx_eq(a.re(), b.re()) && approx_eq(a.im(), b.im())
    }

    #[test]
    fn test_basic_arithmetic() {
        let z = c(1.0, 2.0);
        let w = c(3.0, -4.0);

        assert_eq!(z + w, c(4.0, -2.0));
        assert_eq!(z - w, c(-2.0, 6.0));
        // (1+2i)(3-4i) = 3 - 4i + 6i + 8 = 11 + 2i
        assert_eq!(z * w, c(11.0, 2.0));
        // (1+2i)/(3-4i) = (1+2i)(3+4i)/25 = (-5 + 10i)/25
        assert!(close(z / w, c(-0.2, 0.4)));
    }

    #[test]
    fn test_division_by_zero_is_infinite() {
        let q = c(1.0, 0.0) / C64::zero();
        assert!(q.is_infinite());
        assert!(!q.is_nan());
        assert_eq!(q, C64::infinity());

        let undefined = C64::zero() / C64::zero();
        assert!(undefined.is_nan());
    }

    #[test]
    fn test_negation_has_no_negative_zero() {
        let n = -c(1.0, 0.0);
        assert_eq!(n.re(), -1.0);
        assert!(n.im().is_sign_positive());
        assert!(n.is_real());
    }

    #[test]
    fn test_sqrt_principal_branch() {
        assert_eq!(c(-1.0, 0.0).sqrt(), c(0.0, 1.0));
        assert_eq!((-c(1.0, 0.0)).sqrt(), c(0.0, 1.0));
        assert_eq!(c(4.0, 0.0).sqrt(), c(2.0, 0.0));
        assert_eq!(c(-4.0, 0.0).sqrt(), c(0.0, 2.0));
        assert_eq!(C64::zero().sqrt(), C64::zero());

        // sqrt(2i) = 1 + i
        assert!(close(c(0.0, 2.0).sqrt(), c(1.0, 1.0)));
        // sqrt(-2i) = 1 - i
        assert!(close(c(0.0, -2.0).sqrt(), c(1.0, -1.0)));

        let z = c(-3.0, 4.0);
        let root = z.sqrt();
        assert!(close(root * root, z));
        assert!(root.re() >= 0.0);
    }

    #[test]
    fn test_exp_and_ln() {
        assert_eq!(C64::zero().exp(), C64::one());
        assert!(close(c(1.0, 0.0).exp(), c(E, 0.0)));
        // Euler: e^(i*pi) = -1
        assert!(close(c(0.0, PI).exp(), c(-1.0, 0.0)));

        assert!(close(c(-1.0, 0.0).ln(), c(0.0, PI)));
        assert!(close(c(0.0, 1.0).ln(), c(0.0, FRAC_PI_2)));

        let ln0 = C64::zero().ln();
        assert_eq!(ln0.re(), f64::NEG_INFINITY);
        assert!(ln0.is_infinite());

        let z = c(0.7, -1.3);
        assert!(close(z.ln().exp(), z));
    }

    #[test]
    fn test_logarithm_bases() {
        assert!(close(c(8.0, 0.0).log2(), c(3.0, 0.0)));
        assert!(close(c(1000.0, 0.0).log10(), c(3.0, 0.0)));
        assert!(close(c(81.0, 0.0).log(3.0), c(4.0, 0.0)));
        // log10(-1) = i*pi / ln 10
        assert!(close(c(-1.0, 0.0).log10(), c(0.0, PI / std::f64::consts::LN_10)));
    }

    #[test]
    fn test_trig_on_real_axis() {
        for &x in &[-2.5, -1.0, -0.3, 0.0, 0.4, 1.0, 2.2] {
            let z = c(x, 0.0);
            assert!(approx_eq(z.sin().re(), x.sin()));
            assert!(approx_eq(z.cos().re(), x.cos()));
            assert!(approx_eq(z.tan().re(), x.tan()));
            assert!(approx_eq(z.sinh().re(), x.sinh()));
            assert!(approx_eq(z.cosh().re(), x.cosh()));
            assert!(approx_eq(z.tanh().re(), x.tanh()));
            assert!(approx_eq(z.sin().im(), 0.0));
        }
        assert!(approx_eq(c(1.0, 0.0).sec().re(), 1.0 / 1.0_f64.cos()));
        assert!(approx_eq(c(1.0, 0.0).csc().re(), 1.0 / 1.0_f64.sin()));
        assert!(approx_eq(c(1.0, 0.0).cot().re(), 1.0 / 1.0_f64.tan()));
    }

    #[test]
    fn test_trig_identities_off_axis() {
        let z = c(0.8, -0.6);
        let s = z.sin();
        let co = z.cos();
        assert!(close(s * s + co * co, C64::one()));

        let sh = z.sinh();
        let ch = z.cosh();
        assert!(close(ch * ch - sh * sh, C64::one()));

        // sin(i) = i sinh(1)
        assert!(close(c(0.0, 1.0).sin(), c(0.0, 1.0_f64.sinh())));
    }

    #[test]
    fn test_inverse_trig() {
        assert!(close(c(0.5, 0.0).asin(), c(FRAC_PI_6, 0.0)));
        assert!(close(c(0.5, 0.0).acos(), c(FRAC_PI_3, 0.0)));
        assert!(close(c(-0.5, 0.0).acos(), c(2.0 * FRAC_PI_3, 0.0)));
        assert!(close(c(1.0, 0.0).atan(), c(FRAC_PI_4, 0.0)));
        assert!(close(C64::zero().atan(), C64::zero()));

        for &x in &[-1.0, -0.7, -0.2, 0.0, 0.35, 0.9, 1.0] {
            let z = c(x, 0.0);
            assert!(approx_eq(z.asin().re(), x.asin()));
            assert!(approx_eq(z.acos().re(), x.acos()));
            assert!(approx_eq(z.atan().re(), x.atan()));
        }

        // Round trips away from the branch cuts
        let z = c(0.3, 0.2);
        assert!(close(z.asin().sin(), z));
        assert!(close(z.atan().tan(), z));
    }

    #[test]
    fn test_acos_outside_unit_interval() {
        // acos(2) has zero real part and |im| = ln(2 + sqrt 3)
        let w = c(2.0, 0.0).acos();
        assert!(approx_eq(w.re(), 0.0));
        assert!(approx_eq(w.im().abs(), (2.0 + 3.0_f64.sqrt()).ln()));
        assert!(close(w.cos(), c(2.0, 0.0)));
    }

    #[test]
    fn test_power_real_exponents() {
        assert_eq!(c(3.0, 0.0).pow(c(2.0, 0.0)), c(9.0, 0.0));
        assert_eq!(c(-2.0, 0.0).pow(c(3.0, 0.0)), c(-8.0, 0.0));
        assert_eq!(c(-2.0, 0.0).pow(c(2.0, 0.0)), c(4.0, 0.0));
        assert!(close(c(4.0, 0.0).pow(c(0.5, 0.0)), c(2.0, 0.0)));
        assert!(close(c(2.0, 0.0).pow(c(-1.0, 0.0)), c(0.5, 0.0)));

        // Fractional power of a negative base leaves the real axis
        let r = c(-4.0, 0.0).pow(c(0.5, 0.0));
        assert!(close(r, c(0.0, 2.0)));
        assert!(!r.is_real());
    }

    #[test]
    fn test_power_zero_base() {
        assert_eq!(C64::zero().pow(C64::zero()), C64::one());
        assert_eq!(C64::zero().pow(c(2.0, 0.0)), C64::zero());
        assert!(C64::zero().pow(c(-1.0, 0.0)).is_infinite());
        assert!(C64::zero().pow(c(0.0, 1.0)).is_nan());
    }

    #[test]
    fn test_power_complex() {
        // i^i = e^(-pi/2)
        let ii = C64::i().pow(C64::i());
        assert!(close(ii, c((-FRAC_PI_2).exp(), 0.0)));

        // (1+i)^2 = 2i
        assert!(close(c(1.0, 1.0).pow(c(2.0, 0.0)), c(0.0, 2.0)));
    }

    #[test]
    fn test_remainder() {
        assert_eq!(c(7.0, 0.0) % c(3.0, 0.0), c(1.0, 0.0));
        // round(8/3) = 3, so 8 - 9 = -1
        assert_eq!(c(8.0, 0.0) % c(3.0, 0.0), c(-1.0, 0.0));
        assert!((c(1.0, 0.0) % C64::zero()).is_nan());
    }

    #[test]
    fn test_modulus_argument_and_forms() {
        let z = c(3.0, 4.0);
        assert_eq!(z.modulus(), 5.0);
        assert_eq!(z.abs(), c(5.0, 0.0));
        assert!(approx_eq(c(0.0, 1.0).argument(), FRAC_PI_2));
        assert!(approx_eq(c(-1.0, 0.0).argument(), PI));
        assert_eq!(z.conjugate(), c(3.0, -4.0));
        assert!(close(z.polar().cartesian(), z));
        assert!(close(z.recip() * z, C64::one()));
    }

    #[test]
    fn test_angle_conversions() {
        assert!(close(c(180.0, 0.0).to_radians(), c(PI, 0.0)));
        assert!(close(c(FRAC_PI_2, 0.0).to_degrees(), c(90.0, 0.0)));
    }

    #[test]
    fn test_predicates() {
        assert!(c(2.0, 0.0).is_real());
        assert!(c(2.0, -0.0).is_real());
        assert!(!c(2.0, 1e-300).is_real());

        assert!(C64::nan().is_nan());
        assert!(c(f64::NAN, 0.0).is_nan());
        assert!(!C64::nan().is_infinite());
        assert!(C64::infinity().is_infinite());
        assert!(C64::neg_infinity().is_infinite());
        assert!(!C64::infinity().is_finite());
        assert!(c(1.0, 2.0).is_finite());

        // Exact equality: no tolerance and NaN never equals itself
        assert_ne!(c(1.0, 0.0), c(1.0 + f64::EPSILON, 0.0));
        assert_ne!(C64::nan(), C64::nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(c(1.5, -2.0).to_string(), "(1.5 - 2i)");
        assert_eq!(c(0.0, 1.0).to_string(), "(0 + 1i)");
    }

    #[test]
    fn test_real_divisor_matches_f64() {
        for &x in &[0.1, 3.0, 1e-160, 1e-170, 1e200, -7.5e-300] {
            let q = c(1.0, 0.0) / c(x, 0.0);
            assert_eq!(q, c(1.0 / x, 0.0));
        }
        assert_eq!(c(1.0, 0.0) / c(0.1, 0.0), c(10.0, 0.0));
        // Complex numerator over a real divisor scales both parts
        assert_eq!(c(3.0, -6.0) / c(3.0, 0.0), c(1.0, -2.0));
    }

    #[test]
    fn test_complex_divisor_keeps_range() {
        let big = c(1e300, 1e300);
        assert_eq!(big / big, c(1.0, 0.0));

        let tiny = c(1e-300, -1e-300);
        assert!(close(c(1.0, 0.0) / tiny * tiny, C64::one()));

        // Purely imaginary divisor: 2 / 2i = -i
        assert_eq!(c(2.0, 0.0) / c(0.0, 2.0), c(0.0, -1.0));
    }

    #[test]
    fn test_sqrt_near_overflow() {
        let root = c(1e308, 0.0).sqrt();
        assert!(root.is_real());
        assert!((root.re() / 1e154 - 1.0).abs() < 1e-12);

        let root = c(-f64::MAX, 0.0).sqrt();
        assert!(root.is_finite());
        assert!((root.im() - f64::MAX.sqrt()).abs() / f64::MAX.sqrt() < 1e-12);
    }

    #[test]
    fn test_tanh_saturates() {
        assert_eq!(c(1000.0, 0.0).tanh(), c(1.0, 0.0));
        assert_eq!(c(-1000.0, 0.0).tanh(), c(-1.0, 0.0));
        assert!(close(c(800.0, 0.5).tanh(), c(1.0, 0.0)));
        assert!(close(c(-800.0, 0.3).tanh(), c(-1.0, 0.0)));

        // The exponential form agrees with sinh/cosh where both are finite
        for z in [c(1.7, -0.4), c(-2.3, 0.9), c(5.0, 3.0)] {
            assert!(close(z.tanh(), z.sinh() / z.cosh()));
        }
    }

    #[test]
    fn test_atan_of_large_arguments() {
        let w = c(1e300, 0.0).atan();
        assert!(w.is_real() && approx_eq(w.re(), FRAC_PI_2));
        let w = c(-1e300, 0.0).atan();
        assert!(w.is_real() && approx_eq(w.re(), -FRAC_PI_2));
        assert!(close(c(1e300, 1.0).atan(), c(FRAC_PI_2, 0.0)));
    }

    #[test]
    fn test_real_comparisons() {
        assert_eq!(c(2.0, 0.0).max_real(c(-3.0, 0.0)), c(2.0, 0.0));
        assert_eq!(c(2.0, 0.0).min_real(c(-3.0, 0.0)), c(-3.0, 0.0));
        assert_eq!(c(1.0, 0.0).max_real(c(1.0, 0.0)), c(1.0, 0.0));
        assert!(c(1.0, 1.0).max_real(c(0.0, 0.0)).is_nan());
        assert!(c(0.0, 0.0).min_real(C64::nan()).is_nan());

        assert_eq!(C64::zero().logical_not(), C64::one());
        assert_eq!(c(-0.5, 0.0).logical_not(), C64::zero());
        assert!(C64::i().logical_not().is_nan());
        assert!(C64::nan().logical_not().is_nan());
    }

    #[test]
    fn test_single_precision() {
        let z: Complex<f32> = Complex::new(-1.0, 0.0);
        assert_eq!(z.sqrt(), Complex::new(0.0, 1.0));
    }
}
