//! Exponential, trigonometric, hyperbolic and special functions on
//! [`Complex`].
//!
//! Real arguments take the `f64` routines directly; everything else goes
//! through the exponential and logarithm identities. The special family
//! (gamma, erf, ...) evaluates the real part only.

use core::cmp::Ordering;
use core::f64::consts::{FRAC_PI_2, PI};

use super::Complex;
use crate::special;
use crate::{Error, Result};

// ── Powers, roots, exponentials ──────────────────────────────────────

impl Complex {
    /// `self^exponent`.
    ///
    /// Real `pow` for a real exponent when the base is non-negative real or
    /// the exponent is an integer, polar form for other real exponents, and
    /// `exp(exponent·log(self))` for complex exponents.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// assert_eq!(Complex::from(-2.0).pow(3.0), Complex::from(-8.0));
    /// let r = Complex::from(-4.0).pow(0.5);
    /// assert!(r.equals_tol(&Complex::new(0.0, 2.0), 1e-15));
    /// ```
    pub fn pow(self, exponent: impl Into<Complex>) -> Complex {
        let b = exponent.into();
        if b.is_real() {
            if self.is_real() && (self.is_not_negative() || b.is_integer()) {
                Complex::from_real(self.re.powf(b.re))
            } else {
                let r = self.norm().powf(b.re);
                let s = self.arg() * b.re;
                Complex::from_polar(r, s)
            }
        } else {
            (b * self.log()).exp()
        }
    }

    /// Principal square root; real for non-negative reals, pure imaginary
    /// for negative reals.
    pub fn sqrt(self) -> Complex {
        if self.is_real() {
            return if self.is_not_negative() {
                Complex::from_real(self.re.sqrt())
            } else {
                Complex::new(0.0, (-self.re).sqrt())
            };
        }
        Complex::from_polar(self.norm().sqrt(), self.arg() * 0.5)
    }

    /// Cube root on branch `0`, `1` or `2` (any larger value selects `2`).
    ///
    /// Branch 0 is `exp(log(z)/3)`; the others rotate it by ±120°.
    pub fn cbrt(self, branch: usize) -> Complex {
        let x = (self.log() / 3.0).exp();
        let h = 3.0_f64.sqrt() * 0.5;
        match branch {
            0 => x,
            1 => x * Complex::new(-0.5, h),
            _ => x * Complex::new(-0.5, -h),
        }
    }

    /// `1 / sqrt(z)`.
    pub fn rsqrt(self) -> Complex {
        if self.is_real() {
            return if self.is_not_negative() {
                Complex::from_real(1.0 / self.re.sqrt())
            } else {
                Complex::new(0.0, -1.0 / (-self.re).sqrt())
            };
        }
        self.sqrt().inv()
    }

    /// Natural logarithm, principal branch.
    pub fn log(self) -> Complex {
        if self.is_real() && self.is_not_negative() {
            return Complex::from_real(self.re.ln());
        }
        Complex::new(self.norm().ln(), self.arg())
    }

    pub fn exp(self) -> Complex {
        if self.is_real() {
            return Complex::from_real(self.re.exp());
        }
        Complex::from_polar(self.re.exp(), self.im)
    }

    /// `exp(z) − 1`.
    pub fn expm1(self) -> Complex {
        self.exp() - 1.0
    }

    /// `log(1 + z)`.
    pub fn log1p(self) -> Complex {
        (self + 1.0).log()
    }

    pub fn log2(self) -> Complex {
        self.log() / Complex::LN2
    }

    pub fn log10(self) -> Complex {
        self.log() / Complex::LN10
    }

    /// `log(z) − log(1 − z)`.
    pub fn logit(self) -> Complex {
        self.log() - (Complex::ONE - self).log()
    }
}

// ── Trigonometric ────────────────────────────────────────────────────

impl Complex {
    pub fn sin(self) -> Complex {
        if self.is_real() {
            return Complex::from_real(self.re.sin());
        }
        let a = (self * Complex::I).exp();
        let b = (self * Complex::MINUS_I).exp();
        (a - b) / Complex::new(0.0, 2.0)
    }

    pub fn cos(self) -> Complex {
        if self.is_real() {
            return Complex::from_real(self.re.cos());
        }
        let a = (self * Complex::I).exp();
        let b = (self * Complex::MINUS_I).exp();
        (a + b) / 2.0
    }

    pub fn tan(self) -> Complex {
        if self.is_real() {
            return Complex::from_real(self.re.tan());
        }
        self.sin() / self.cos()
    }

    /// `−i·log(iz + sqrt(1 − z²))`.
    pub fn asin(self) -> Complex {
        ((self * Complex::I) + (Complex::ONE - self.square()).sqrt()).log() * Complex::MINUS_I
    }

    /// `−i·log(z + i·sqrt(1 − z²))`.
    pub fn acos(self) -> Complex {
        (self + Complex::I * (Complex::ONE - self.square()).sqrt()).log() * Complex::MINUS_I
    }

    /// `(i/2)·log((i + z)/(i − z))`.
    pub fn atan(self) -> Complex {
        if self.is_real() {
            return Complex::from_real(self.re.atan());
        }
        (Complex::I / Complex::TWO) * ((Complex::I + self) / (Complex::I - self)).log()
    }

    /// Four-quadrant arctangent of `self / x`; real operands only.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// let t = Complex::from(1.0).atan2(Complex::from(-1.0)).unwrap();
    /// assert!((t.re - 3.0 * core::f64::consts::FRAC_PI_4).abs() < 1e-15);
    /// ```
    pub fn atan2(self, x: Complex) -> Result<Complex> {
        if self.is_real() && x.is_real() {
            Ok(Complex::from_real(self.re.atan2(x.re)))
        } else {
            Err(Error::NotReal { op: "atan2" })
        }
    }

    pub fn sec(self) -> Complex {
        self.cos().inv()
    }

    pub fn asec(self) -> Complex {
        self.inv().acos()
    }

    pub fn csc(self) -> Complex {
        self.sin().inv()
    }

    pub fn acsc(self) -> Complex {
        self.inv().asin()
    }

    pub fn cot(self) -> Complex {
        self.tan().inv()
    }

    pub fn acot(self) -> Complex {
        self.inv().atan()
    }

    /// Normalized sinc, `sin(πz)/(πz)` with `sinc(0) = 1`.
    pub fn sinc(self) -> Complex {
        if self.is_real() {
            if self.re == 0.0 {
                return Complex::ONE;
            }
            let x = PI * self.re;
            return Complex::from_real(x.sin() / x);
        }
        let x = self * Complex::PI;
        x.sin() / x
    }
}

// ── Hyperbolic ───────────────────────────────────────────────────────

impl Complex {
    pub fn sinh(self) -> Complex {
        let y = self.exp();
        (y - y.inv()) * 0.5
    }

    pub fn asinh(self) -> Complex {
        if self.is_infinite() {
            return self;
        }
        (self + (self * self + 1.0).sqrt()).log()
    }

    pub fn cosh(self) -> Complex {
        (self.exp() + (-self).exp()) * 0.5
    }

    /// Inverse hyperbolic cosine.
    ///
    /// Uses `log(z + sqrt(z² − 1))` above 1 and `log(z − sqrt(z² − 1))`
    /// otherwise; `acosh(0) = iπ/2`.
    pub fn acosh(self) -> Complex {
        if self.is_zero() {
            return Complex::new(0.0, FRAC_PI_2);
        }
        let root = (self.square() - 1.0).sqrt();
        if self.compare_to(&Complex::ONE) == Some(Ordering::Greater) {
            (self + root).log()
        } else {
            (self - root).log()
        }
    }

    /// Saturates to `±1` once `exp(2z)` leaves the representable range.
    pub fn tanh(self) -> Complex {
        if self.is_nan() {
            return Complex::NAN;
        }
        let y = (self * 2.0).exp();
        if y.is_zero() {
            Complex::MINUS_ONE
        } else if y.is_positive_infinity() {
            Complex::ONE
        } else {
            (y - 1.0) / (y + 1.0)
        }
    }

    /// `0.5·log((1 + z)/(1 − z))`; a real infinity maps to `iπ/2`.
    pub fn atanh(self) -> Complex {
        if self.is_infinite() && self.is_real() {
            return Complex::new(0.0, FRAC_PI_2);
        }
        ((self + 1.0) / (1.0 - self)).log() * 0.5
    }

    pub fn sech(self) -> Complex {
        (self.exp() + (-self).exp()).inv() * 2.0
    }

    pub fn asech(self) -> Complex {
        if self.is_infinite() && self.is_real() {
            return Complex::new(0.0, FRAC_PI_2);
        }
        let root = (self.square().inv() - 1.0).sqrt();
        if self.is_positive() || self.compare_to(&Complex::MINUS_ONE) == Some(Ordering::Less) {
            (self.inv() + root).log()
        } else {
            (self.inv() - root).log()
        }
    }

    pub fn csch(self) -> Complex {
        (self.exp() - (-self).exp()).inv() * 2.0
    }

    pub fn acsch(self) -> Complex {
        (self.inv() + (self.square().inv() + 1.0).sqrt()).log()
    }

    /// `1 / tanh(z)`, with `coth(0) = +∞`.
    pub fn coth(self) -> Complex {
        if self.is_zero() {
            return Complex::POSITIVE_INFINITY;
        }
        self.tanh().inv()
    }

    /// `0.5·log((z + 1)/(z − 1))`, with `acoth(±∞) = 0`.
    pub fn acoth(self) -> Complex {
        if self.is_infinite() {
            return Complex::ZERO;
        }
        ((self + 1.0) / (self - 1.0)).log() * 0.5
    }
}

// ── Special functions (real part) ────────────────────────────────────

impl Complex {
    pub fn gamma(self) -> Complex {
        Complex::from_real(special::gamma(self.re))
    }

    /// `ln|Γ(re)|`.
    pub fn gammaln(self) -> Complex {
        Complex::from_real(special::lgamma(self.re))
    }

    pub fn beta(self, y: impl Into<Complex>) -> Complex {
        Complex::from_real(special::beta(self.re, y.into().re))
    }

    pub fn erf(self) -> Complex {
        Complex::from_real(special::erf(self.re))
    }

    pub fn erfc(self) -> Complex {
        Complex::from_real(special::erfc(self.re))
    }

    pub fn erfinv(self) -> Complex {
        Complex::from_real(special::erfinv(self.re))
    }

    pub fn erfcinv(self) -> Complex {
        Complex::from_real(special::erfcinv(self.re))
    }

    /// `re!`, exact for integers.
    pub fn factorial(self) -> Complex {
        Complex::from_real(special::factorial(self.re))
    }

    /// Binomial coefficient `re` choose `k`.
    pub fn nchoosek(self, k: impl Into<Complex>) -> Complex {
        Complex::from_real(special::nchoosek(self.re, k.into().re))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: Complex, b: Complex, tol: f64, msg: &str) {
        assert!(a.equals_tol(&b, tol), "{msg}: {a} vs {b}");
    }

    #[test]
    fn pow_branches() {
        assert_eq!(Complex::from(2.0).pow(10.0), Complex::from(1024.0));
        assert_eq!(Complex::from(-3.0).pow(2.0), Complex::from(9.0));
        // (1+i)^2 = 2i via polar form
        assert_near(Complex::new(1.0, 1.0).pow(2.0), Complex::new(0.0, 2.0), 1e-14, "polar");
        // i^i = e^(-π/2)
        let z = Complex::I.pow(Complex::I);
        assert_near(z, Complex::from((-FRAC_PI_2).exp()), 1e-15, "complex exponent");
    }

    #[test]
    fn sqrt_negative_real_is_pure_imaginary() {
        let z = Complex::from(-9.0).sqrt();
        assert_eq!(z.re, 0.0);
        assert_eq!(z.im, 3.0);
        let w = Complex::new(3.0, 4.0).sqrt();
        assert_near(w, Complex::new(2.0, 1.0), 1e-14, "sqrt(3+4i)");
    }

    #[test]
    fn cbrt_branches_cube_back() {
        let z = Complex::new(1.0, 2.0);
        for branch in 0..3 {
            let r = z.cbrt(branch);
            assert_near(r * r * r, z, 1e-13, "cbrt^3");
        }
    }

    #[test]
    fn log_of_negative_real() {
        let z = Complex::from(-1.0).log();
        assert_near(z, Complex::new(0.0, PI), 1e-15, "log(-1)");
        assert_near(Complex::from(8.0).log2(), Complex::from(3.0), 1e-15, "log2");
        assert_near(Complex::from(1000.0).log10(), Complex::from(3.0), 1e-14, "log10");
    }

    #[test]
    fn exp_euler_identity() {
        let z = (Complex::I * PI).exp() + 1.0;
        assert!(z.is_zero_tol(1e-15));
    }

    #[test]
    fn trig_inverse_roundtrips() {
        let z = Complex::new(0.3, 0.4);
        assert_near(z.sin().asin(), z, 1e-14, "asin(sin)");
        assert_near(z.cos().acos(), z, 1e-14, "acos(cos)");
        assert_near(z.tan().atan(), z, 1e-14, "atan(tan)");
        assert_near(z.sinh().asinh(), z, 1e-14, "asinh(sinh)");
        assert_near(z.tanh().atanh(), z, 1e-14, "atanh(tanh)");
        assert_near(z.sec().asec(), z, 1e-13, "asec(sec)");
        assert_near(z.cot().acot(), z, 1e-13, "acot(cot)");
    }

    #[test]
    fn hyperbolic_edge_cases() {
        assert_eq!(Complex::ZERO.acosh(), Complex::new(0.0, FRAC_PI_2));
        assert_eq!(Complex::ZERO.coth(), Complex::POSITIVE_INFINITY);
        assert_eq!(Complex::POSITIVE_INFINITY.acoth(), Complex::ZERO);
        assert_eq!(Complex::POSITIVE_INFINITY.atanh(), Complex::new(0.0, FRAC_PI_2));
        assert_eq!(Complex::from(1000.0).tanh(), Complex::ONE);
        assert_eq!(Complex::from(-1000.0).tanh(), Complex::MINUS_ONE);
        assert_near(Complex::from(2.0).acosh(), Complex::from(2.0_f64.acosh()), 1e-14, "acosh(2)");
        // below 1 the z − sqrt(z² − 1) form is used
        let a = Complex::from(0.5).acosh();
        assert_near(a, Complex::new(0.0, -(0.5_f64.acos())), 1e-14, "acosh(0.5)");
    }

    #[test]
    fn reciprocal_hyperbolics() {
        let x = Complex::from(0.7);
        assert_near(x.sech(), Complex::from(1.0 / 0.7_f64.cosh()), 1e-15, "sech");
        assert_near(x.csch(), Complex::from(1.0 / 0.7_f64.sinh()), 1e-14, "csch");
        assert_near(x.sech().asech(), x, 1e-14, "asech(sech)");
        assert_near(x.csch().acsch(), x, 1e-14, "acsch(csch)");
    }

    #[test]
    fn sinc_and_logit() {
        assert_eq!(Complex::ZERO.sinc(), Complex::ONE);
        assert!(Complex::from(1.0).sinc().is_zero_tol(1e-15));
        assert_near(Complex::from(0.5).logit(), Complex::ZERO, 1e-15, "logit(0.5)");
    }

    #[test]
    fn special_use_real_part() {
        assert_eq!(Complex::new(5.0, 3.0).factorial(), Complex::from(120.0));
        assert_eq!(Complex::from(5.0).nchoosek(2.0), Complex::from(10.0));
        assert_near(Complex::from(0.5).gamma(), Complex::from(PI.sqrt()), 1e-14, "gamma");
        assert_near(Complex::from(0.3).erf().erfinv(), Complex::from(0.3), 1e-13, "erfinv");
    }

    #[test]
    fn atan2_rejects_complex() {
        assert!(matches!(
            Complex::I.atan2(Complex::ONE),
            Err(Error::NotReal { op: "atan2" })
        ));
    }
}
