//! Complex scalar type.
//!
//! [`Complex`] is an IEEE double pair with value semantics. Every operation
//! returns a new value; real inputs take real fast paths so results match
//! plain `f64` arithmetic exactly (`sqrt(4) = 2`, `sqrt(-4) = 2i`).
//!
//! ```
//! use zmatrix::Complex;
//!
//! let z: Complex = "3+4i".parse().unwrap();
//! assert_eq!(z.abs(), 5.0);
//! assert_eq!(z.to_string(), "3 + 4i");
//! assert_eq!((z * Complex::I).to_string(), "-4 + 3i");
//! assert_eq!(Complex::new(-4.0, 0.0).sqrt(), Complex::new(0.0, 2.0));
//! ```

mod compare;
mod elementary;
pub(crate) mod format;
mod ops;
pub(crate) mod parse;

use core::f64::consts;

use rand::Rng;
use rand_distr::StandardNormal;

use crate::traits::IntoComplex;
use crate::{Error, Matrix, NumericValue, Result};

/// Complex number `re + im·i`.
///
/// `PartialEq` is exact IEEE equality; use [`equals`](Complex::equals) for
/// tolerance-aware comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

// ── Constants ────────────────────────────────────────────────────────

impl Complex {
    /// Default comparison tolerance for scalars (machine epsilon).
    pub const EPSILON: f64 = f64::EPSILON;

    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    pub const TWO: Complex = Complex::new(2.0, 0.0);
    pub const TEN: Complex = Complex::new(10.0, 0.0);
    pub const MINUS_ONE: Complex = Complex::new(-1.0, 0.0);
    pub const HALF: Complex = Complex::new(0.5, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);
    pub const MINUS_I: Complex = Complex::new(0.0, -1.0);
    pub const PI: Complex = Complex::new(consts::PI, 0.0);
    pub const QUARTER_PI: Complex = Complex::new(consts::FRAC_PI_4, 0.0);
    pub const HALF_PI: Complex = Complex::new(consts::FRAC_PI_2, 0.0);
    pub const TWO_PI: Complex = Complex::new(consts::TAU, 0.0);
    pub const E: Complex = Complex::new(consts::E, 0.0);
    pub const LN2: Complex = Complex::new(consts::LN_2, 0.0);
    pub const LN10: Complex = Complex::new(consts::LN_10, 0.0);
    pub const LOG2E: Complex = Complex::new(consts::LOG2_E, 0.0);
    pub const LOG10E: Complex = Complex::new(consts::LOG10_E, 0.0);
    pub const SQRT2: Complex = Complex::new(consts::SQRT_2, 0.0);
    pub const SQRT1_2: Complex = Complex::new(consts::FRAC_1_SQRT_2, 0.0);
    pub const POSITIVE_INFINITY: Complex = Complex::new(f64::INFINITY, 0.0);
    pub const NEGATIVE_INFINITY: Complex = Complex::new(f64::NEG_INFINITY, 0.0);
    pub const NAN: Complex = Complex::new(f64::NAN, 0.0);
}

// ── Constructors ─────────────────────────────────────────────────────

impl Complex {
    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline]
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// `r·e^(iθ)`.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// let z = Complex::from_polar(2.0, core::f64::consts::FRAC_PI_2);
    /// assert!(z.equals_tol(&Complex::new(0.0, 2.0), 1e-15));
    /// ```
    pub fn from_polar(r: f64, theta: f64) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Uniform draw from `[0, 1)`.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use zmatrix::Complex;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let z = Complex::rand(&mut rng);
    /// assert!(z.re >= 0.0 && z.re < 1.0 && z.im == 0.0);
    /// ```
    pub fn rand<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_real(rng.gen::<f64>())
    }

    /// Standard normal draw.
    pub fn randn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_real(rng.sample(StandardNormal))
    }
}

// ── Accessors ────────────────────────────────────────────────────────

impl Complex {
    #[inline]
    pub fn real(&self) -> f64 {
        self.re
    }

    #[inline]
    pub fn imag(&self) -> f64 {
        self.im
    }

    /// Modulus `|z|`, exact for real and pure imaginary values.
    pub fn norm(&self) -> f64 {
        if self.im == 0.0 {
            self.re.abs()
        } else if self.re == 0.0 {
            self.im.abs()
        } else {
            self.re.hypot(self.im)
        }
    }

    /// Alias for [`norm`](Complex::norm).
    #[inline]
    pub fn abs(&self) -> f64 {
        self.norm()
    }

    /// Argument in `(-π, π]`; exactly `0`/`π` for reals and `±π/2` for pure
    /// imaginary values.
    pub fn arg(&self) -> f64 {
        if self.im == 0.0 {
            if self.re >= 0.0 {
                0.0
            } else {
                consts::PI
            }
        } else if self.re == 0.0 {
            if self.im >= 0.0 {
                consts::FRAC_PI_2
            } else {
                -consts::FRAC_PI_2
            }
        } else {
            self.im.atan2(self.re)
        }
    }

    /// Number of decimal digits (up to 20) needed by the larger of the two
    /// parts. Non-finite parts count as zero.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// assert_eq!(Complex::new(1.25, 3.0).decimal_position(), 2);
    /// assert_eq!(Complex::new(7.0, 0.0).decimal_position(), 0);
    /// ```
    pub fn decimal_position(&self) -> usize {
        fn digits(x: f64) -> usize {
            if !x.is_finite() {
                return 0;
            }
            let mut a = x;
            let mut point = 0;
            for _ in 0..20 {
                if (a - a.round()).abs() <= f64::EPSILON {
                    break;
                }
                a *= 10.0;
                point += 1;
            }
            point
        }
        digits(self.re).max(digits(self.im))
    }

    /// Real part snapped to the nearest integer when within machine epsilon,
    /// truncated otherwise.
    pub fn int_value(&self) -> f64 {
        if !self.is_finite() {
            return self.nonfinite_value();
        }
        let delta = (self.re - self.re.trunc()).abs();
        if delta < f64::EPSILON {
            self.re.round()
        } else {
            self.re.trunc()
        }
    }

    /// Real part snapped to the nearest integer when within machine epsilon.
    pub fn double_value(&self) -> f64 {
        if !self.is_finite() {
            return self.nonfinite_value();
        }
        let delta = (self.re - self.re.trunc()).abs();
        if delta < f64::EPSILON {
            self.re.round()
        } else {
            self.re
        }
    }

    fn nonfinite_value(&self) -> f64 {
        if self.is_nan() {
            f64::NAN
        } else if self.is_positive_infinity() {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    }
}

// ── Predicates ───────────────────────────────────────────────────────

impl Complex {
    /// `|re| < ε` and `|im| < ε` with ε = machine epsilon.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_zero_tol(Self::EPSILON)
    }

    pub fn is_zero_tol(&self, tol: f64) -> bool {
        self.re.abs() < tol && self.im.abs() < tol
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        self.is_one_tol(Self::EPSILON)
    }

    pub fn is_one_tol(&self, tol: f64) -> bool {
        (self.re - 1.0).abs() < tol && self.im.abs() < tol
    }

    /// `|im| < ε`.
    #[inline]
    pub fn is_real(&self) -> bool {
        self.is_real_tol(Self::EPSILON)
    }

    pub fn is_real_tol(&self, tol: f64) -> bool {
        self.im.abs() < tol
    }

    /// `|im| ≥ ε`.
    #[inline]
    pub fn is_complex(&self) -> bool {
        self.is_complex_tol(Self::EPSILON)
    }

    pub fn is_complex_tol(&self, tol: f64) -> bool {
        self.im.abs() >= tol
    }

    /// Real with an integral real part.
    #[inline]
    pub fn is_integer(&self) -> bool {
        self.is_integer_tol(Self::EPSILON)
    }

    pub fn is_integer_tol(&self, tol: f64) -> bool {
        self.is_real() && (self.re - self.re.trunc()).abs() < tol
    }

    /// Gaussian integer: both parts integral.
    #[inline]
    pub fn is_complex_integer(&self) -> bool {
        self.is_complex_integer_tol(Self::EPSILON)
    }

    pub fn is_complex_integer_tol(&self, tol: f64) -> bool {
        (self.re - self.re.trunc()).abs() < tol && (self.im - self.im.trunc()).abs() < tol
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// `re > 0`, with no tolerance.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.re > 0.0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.re < 0.0
    }

    #[inline]
    pub fn is_not_negative(&self) -> bool {
        self.re >= 0.0
    }

    /// Either part is `+∞`.
    pub fn is_positive_infinity(&self) -> bool {
        self.re == f64::INFINITY || self.im == f64::INFINITY
    }

    /// Either part is `-∞`.
    pub fn is_negative_infinity(&self) -> bool {
        self.re == f64::NEG_INFINITY || self.im == f64::NEG_INFINITY
    }

    pub fn is_infinite(&self) -> bool {
        self.is_positive_infinity() || self.is_negative_infinity()
    }

    pub fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }
}

// ── Conversions ──────────────────────────────────────────────────────

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Complex {
                #[inline]
                fn from(x: $t) -> Self {
                    Complex::from_real(x as f64)
                }
            }

            impl IntoComplex for $t {
                #[inline]
                fn into_complex(self) -> Result<Complex> {
                    Ok(Complex::from(self))
                }
            }
        )*
    };
}

impl_from_primitive!(f64, f32, i32, i64, u32, usize);

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl IntoComplex for Complex {
    #[inline]
    fn into_complex(self) -> Result<Complex> {
        Ok(self)
    }
}

impl IntoComplex for &Complex {
    #[inline]
    fn into_complex(self) -> Result<Complex> {
        Ok(*self)
    }
}

impl IntoComplex for (f64, f64) {
    #[inline]
    fn into_complex(self) -> Result<Complex> {
        Ok(Complex::from(self))
    }
}

impl IntoComplex for &str {
    fn into_complex(self) -> Result<Complex> {
        self.parse()
    }
}

impl IntoComplex for String {
    fn into_complex(self) -> Result<Complex> {
        self.parse()
    }
}

impl IntoComplex for &String {
    fn into_complex(self) -> Result<Complex> {
        self.parse()
    }
}

impl IntoComplex for NumericValue {
    fn into_complex(self) -> Result<Complex> {
        match self {
            NumericValue::Scalar(z) => Ok(z),
            NumericValue::Tensor(m) => m.scalar(),
        }
    }
}

impl IntoComplex for &Matrix {
    fn into_complex(self) -> Result<Complex> {
        self.scalar()
    }
}

impl IntoComplex for Matrix {
    fn into_complex(self) -> Result<Complex> {
        self.scalar()
    }
}

impl TryFrom<&Matrix> for Complex {
    type Error = Error;

    fn try_from(m: &Matrix) -> Result<Self> {
        m.scalar()
    }
}

#[cfg(feature = "complex")]
impl From<num_complex::Complex<f64>> for Complex {
    #[inline]
    fn from(z: num_complex::Complex<f64>) -> Self {
        Complex::new(z.re, z.im)
    }
}

#[cfg(feature = "complex")]
impl From<Complex> for num_complex::Complex<f64> {
    #[inline]
    fn from(z: Complex) -> Self {
        num_complex::Complex::new(z.re, z.im)
    }
}

#[cfg(feature = "complex")]
impl IntoComplex for num_complex::Complex<f64> {
    #[inline]
    fn into_complex(self) -> Result<Complex> {
        Ok(Complex::from(self))
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn norm_fast_paths() {
        assert_eq!(Complex::new(-3.0, 0.0).norm(), 3.0);
        assert_eq!(Complex::new(0.0, -2.5).norm(), 2.5);
        assert_eq!(Complex::new(3.0, 4.0).norm(), 5.0);
    }

    #[test]
    fn arg_exact_axes() {
        assert_eq!(Complex::new(2.0, 0.0).arg(), 0.0);
        assert_eq!(Complex::new(-2.0, 0.0).arg(), consts::PI);
        assert_eq!(Complex::new(0.0, 1.0).arg(), consts::FRAC_PI_2);
        assert_eq!(Complex::new(0.0, -1.0).arg(), -consts::FRAC_PI_2);
        assert!((Complex::new(1.0, 1.0).arg() - consts::FRAC_PI_4).abs() < 1e-15);
    }

    #[test]
    fn predicates_use_strict_tolerance() {
        assert!(Complex::new(1e-17, 0.0).is_zero());
        assert!(!Complex::new(1e-3, 0.0).is_zero());
        assert!(Complex::new(1e-3, 0.0).is_zero_tol(1e-2));
        assert!(Complex::new(3.0, 0.0).is_integer());
        assert!(!Complex::new(3.0, 1.0).is_integer());
        assert!(Complex::new(3.0, 1.0).is_complex_integer());
        assert!(Complex::new(0.0, f64::INFINITY).is_positive_infinity());
        assert!(!Complex::NAN.is_finite());
    }

    #[test]
    fn value_snapping() {
        assert_eq!(Complex::from_real(2.9999999999999996).double_value(), 2.9999999999999996);
        assert_eq!(Complex::from_real(3.5).int_value(), 3.0);
        assert_eq!(Complex::from_real(-3.5).int_value(), -3.0);
        assert!(Complex::NAN.double_value().is_nan());
        assert_eq!(Complex::NEGATIVE_INFINITY.int_value(), f64::NEG_INFINITY);
    }

    #[test]
    fn conversions() {
        assert_eq!(Complex::from(2_i32), Complex::new(2.0, 0.0));
        assert_eq!(Complex::from((1.0, -1.0)), Complex::new(1.0, -1.0));
        assert_eq!("2-3i".into_complex().unwrap(), Complex::new(2.0, -3.0));
        let m = Matrix::new("[1 2]").unwrap();
        assert!(m.into_complex().is_err());
    }

    #[test]
    fn random_draws_are_reproducible() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..8 {
            assert_eq!(Complex::randn(&mut a), Complex::randn(&mut b));
        }
        let u = Complex::rand(&mut a);
        assert!((0.0..1.0).contains(&u.re));
    }
}
