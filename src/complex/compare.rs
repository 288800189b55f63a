use core::cmp::Ordering;

use super::Complex;
use crate::{Error, Result};

// ── Equality and ordering ────────────────────────────────────────────

impl Complex {
    /// Component-wise equality within machine epsilon. NaN equals nothing.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// assert!(Complex::new(0.1 + 0.2, 0.0).equals(&Complex::new(0.3, 0.0)));
    /// assert!(!Complex::NAN.equals(&Complex::NAN));
    /// ```
    #[inline]
    pub fn equals(&self, other: &Complex) -> bool {
        self.equals_tol(other, Self::EPSILON)
    }

    /// Component-wise equality: `|Δre| < tol` and `|Δim| < tol`.
    pub fn equals_tol(&self, other: &Complex, tol: f64) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        if self.re == other.re && self.im == other.im {
            return true;
        }
        (self.re - other.re).abs() < tol && (self.im - other.im).abs() < tol
    }

    /// Orders by `re + im` within machine epsilon.
    ///
    /// `None` when the pair cannot be ordered: a NaN operand, an operand of
    /// the form `±∞ ∓ ∞i`, or two distinct non-finite values.
    ///
    /// ```
    /// use core::cmp::Ordering;
    /// use zmatrix::Complex;
    ///
    /// let a = Complex::new(1.0, 2.0);
    /// assert_eq!(a.compare_to(&Complex::from(3.0)), Some(Ordering::Equal));
    /// assert_eq!(a.compare_to(&Complex::POSITIVE_INFINITY), Some(Ordering::Less));
    /// assert_eq!(a.compare_to(&Complex::NAN), None);
    /// ```
    #[inline]
    pub fn compare_to(&self, other: &Complex) -> Option<Ordering> {
        self.compare_to_tol(other, Self::EPSILON)
    }

    /// [`compare_to`](Complex::compare_to) with an explicit inclusive
    /// tolerance on `|Δ(re + im)|`.
    pub fn compare_to_tol(&self, other: &Complex, tol: f64) -> Option<Ordering> {
        if !self.is_finite() || !other.is_finite() {
            if self.equals(other) {
                return Some(Ordering::Equal);
            }
            if self.is_nan() || other.is_nan() || self.is_opposed_infinity() || other.is_opposed_infinity()
            {
                return None;
            }
            if self.is_finite() {
                return Some(if other.re + other.im < 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                });
            }
            if other.is_finite() {
                return Some(if self.re + self.im > 0.0 {
                    Ordering::Greater
                } else {
                    Ordering::Less
                });
            }
            return None;
        }
        let a = self.re + self.im;
        let b = other.re + other.im;
        if (a - b).abs() <= tol {
            Some(Ordering::Equal)
        } else if a > b {
            Some(Ordering::Greater)
        } else {
            Some(Ordering::Less)
        }
    }

    fn is_opposed_infinity(&self) -> bool {
        (self.re == f64::INFINITY && self.im == f64::NEG_INFINITY)
            || (self.re == f64::NEG_INFINITY && self.im == f64::INFINITY)
    }

    /// Larger of two values under [`compare_to`](Complex::compare_to);
    /// `other` wins when the pair is unordered.
    pub fn max(self, other: Complex) -> Complex {
        match self.compare_to(&other) {
            Some(Ordering::Greater | Ordering::Equal) => self,
            _ => other,
        }
    }

    /// Smaller of two values under [`compare_to`](Complex::compare_to);
    /// `other` wins when the pair is unordered.
    pub fn min(self, other: Complex) -> Complex {
        match self.compare_to(&other) {
            Some(Ordering::Less | Ordering::Equal) => self,
            _ => other,
        }
    }

    /// Clamp into `[min, max]`.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// let z = Complex::from(5.0);
    /// assert_eq!(z.clip(Complex::from(0.0), Complex::from(2.0)).unwrap(), Complex::from(2.0));
    /// assert!(z.clip(Complex::from(3.0), Complex::from(1.0)).is_err());
    /// ```
    pub fn clip(self, min: Complex, max: Complex) -> Result<Complex> {
        match min.compare_to(&max) {
            Some(Ordering::Greater) => {
                return Err(Error::invalid("clip", format!("min > max ({min} > {max})")));
            }
            Some(Ordering::Equal) => return Ok(min),
            _ => {}
        }
        if self.compare_to(&max) == Some(Ordering::Greater) {
            Ok(max)
        } else if self.compare_to(&min) == Some(Ordering::Less) {
            Ok(min)
        } else {
            Ok(self)
        }
    }
}

// ── Rounding ─────────────────────────────────────────────────────────

impl Complex {
    pub fn floor(self) -> Complex {
        Complex::new(self.re.floor(), self.im.floor())
    }

    pub fn ceil(self) -> Complex {
        Complex::new(self.re.ceil(), self.im.ceil())
    }

    /// Rounds both parts half away from zero.
    pub fn round(self) -> Complex {
        Complex::new(self.re.round(), self.im.round())
    }

    /// Rounds both parts toward zero.
    pub fn fix(self) -> Complex {
        Complex::new(self.re.trunc(), self.im.trunc())
    }

    /// `z − floor(z)` on both parts.
    pub fn fract(self) -> Complex {
        Complex::new(self.re - self.re.floor(), self.im - self.im.floor())
    }

    /// `±1`/`0` for reals, `z/|z|` otherwise.
    ///
    /// NaN for NaN input or an infinite imaginary part; `±1` for a real
    /// infinity.
    pub fn sign(self) -> Complex {
        if !self.is_finite() {
            if self.is_nan() || self.im.is_infinite() {
                return Complex::NAN;
            }
            return if self.re == f64::INFINITY {
                Complex::ONE
            } else {
                Complex::MINUS_ONE
            };
        }
        if self.im == 0.0 {
            if self.re == 0.0 {
                Complex::ZERO
            } else if self.re > 0.0 {
                Complex::ONE
            } else {
                Complex::MINUS_ONE
            }
        } else {
            self / self.norm()
        }
    }
}
