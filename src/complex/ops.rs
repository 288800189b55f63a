use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{Inv, One, Zero};

use super::Complex;
use crate::{Error, Result};

// ── Kernels ──────────────────────────────────────────────────────────

impl Complex {
    #[inline]
    fn add_c(self, b: Complex) -> Complex {
        Complex::new(self.re + b.re, self.im + b.im)
    }

    #[inline]
    fn sub_c(self, b: Complex) -> Complex {
        Complex::new(self.re - b.re, self.im - b.im)
    }

    fn mul_c(self, b: Complex) -> Complex {
        if self.im == 0.0 && b.im == 0.0 {
            Complex::from_real(self.re * b.re)
        } else if self.re == 0.0 && b.re == 0.0 {
            Complex::from_real(-self.im * b.im)
        } else {
            Complex::new(
                self.re * b.re - self.im * b.im,
                self.im * b.re + self.re * b.im,
            )
        }
    }

    fn div_c(self, b: Complex) -> Complex {
        if self.im == 0.0 && b.im == 0.0 {
            Complex::from_real(self.re / b.re)
        } else if self.re == 0.0 && b.re == 0.0 {
            Complex::from_real(self.im / b.im)
        } else {
            let re = self.re * b.re + self.im * b.im;
            let im = self.im * b.re - self.re * b.im;
            let den = 1.0 / (b.re * b.re + b.im * b.im);
            Complex::new(re * den, im * den)
        }
    }

    /// Conjugate-linear product `conj(self)·b`.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// let a = Complex::new(1.0, 2.0);
    /// assert_eq!(a.dot(a), Complex::new(5.0, 0.0));
    /// ```
    pub fn dot(self, b: impl Into<Complex>) -> Complex {
        let b = b.into();
        if self.im == 0.0 && b.im == 0.0 {
            Complex::from_real(self.re * b.re)
        } else if self.re == 0.0 && b.re == 0.0 {
            Complex::from_real(self.im * b.im)
        } else {
            Complex::new(
                self.re * b.re + self.im * b.im,
                -self.im * b.re + self.re * b.im,
            )
        }
    }

    /// Remainder with the sign of the dividend.
    ///
    /// Both operands must be real. Returns NaN when either side is
    /// non-finite or the divisor is zero.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// assert_eq!(Complex::from(-7.0).rem(3.0).unwrap(), Complex::from(-1.0));
    /// assert!(Complex::I.rem(2.0).is_err());
    /// ```
    pub fn rem(self, b: impl Into<Complex>) -> Result<Complex> {
        let b = b.into();
        if self.im != 0.0 || b.im != 0.0 {
            return Err(Error::NotReal { op: "rem" });
        }
        if !self.is_finite() || !b.is_finite() || b.is_zero() {
            return Ok(Complex::NAN);
        }
        Ok(Complex::from_real(self.re - b.re * (self.re / b.re).trunc()))
    }

    /// Modulo with the sign of the divisor.
    ///
    /// A zero divisor returns the dividend unchanged.
    ///
    /// ```
    /// use zmatrix::Complex;
    /// assert_eq!(Complex::from(-7.0).modulo(3.0).unwrap(), Complex::from(2.0));
    /// assert_eq!(Complex::from(7.0).modulo(-3.0).unwrap(), Complex::from(-2.0));
    /// assert_eq!(Complex::from(6.0).modulo(-3.0).unwrap(), Complex::from(0.0));
    /// ```
    pub fn modulo(self, b: impl Into<Complex>) -> Result<Complex> {
        let b = b.into();
        if self.im != 0.0 || b.im != 0.0 {
            return Err(Error::NotReal { op: "mod" });
        }
        if b.is_zero() {
            return Ok(self);
        }
        let r = self.rem(b)?;
        if !r.is_zero() && r.is_negative() != b.is_negative() {
            Ok(r + b)
        } else {
            Ok(r)
        }
    }

    /// `1 / z`.
    pub fn inv(self) -> Complex {
        if self.im == 0.0 {
            Complex::from_real(1.0 / self.re)
        } else if self.re == 0.0 {
            Complex::new(0.0, -1.0 / self.im)
        } else {
            Complex::ONE.div_c(self)
        }
    }

    pub fn conj(self) -> Complex {
        if self.im == 0.0 {
            self
        } else {
            Complex::new(self.re, -self.im)
        }
    }

    pub fn square(self) -> Complex {
        if self.im == 0.0 {
            Complex::from_real(self.re * self.re)
        } else {
            self.mul_c(self)
        }
    }
}

// ── Operators ────────────────────────────────────────────────────────

macro_rules! impl_complex_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $kernel:ident) => {
        impl $Op for Complex {
            type Output = Complex;

            #[inline]
            fn $op(self, rhs: Complex) -> Complex {
                self.$kernel(rhs)
            }
        }

        impl $Op<&Complex> for Complex {
            type Output = Complex;

            #[inline]
            fn $op(self, rhs: &Complex) -> Complex {
                self.$kernel(*rhs)
            }
        }

        impl $Op<Complex> for &Complex {
            type Output = Complex;

            #[inline]
            fn $op(self, rhs: Complex) -> Complex {
                (*self).$kernel(rhs)
            }
        }

        impl $Op<&Complex> for &Complex {
            type Output = Complex;

            #[inline]
            fn $op(self, rhs: &Complex) -> Complex {
                (*self).$kernel(*rhs)
            }
        }

        impl $Op<f64> for Complex {
            type Output = Complex;

            #[inline]
            fn $op(self, rhs: f64) -> Complex {
                self.$kernel(Complex::from_real(rhs))
            }
        }

        impl $Op<Complex> for f64 {
            type Output = Complex;

            #[inline]
            fn $op(self, rhs: Complex) -> Complex {
                Complex::from_real(self).$kernel(rhs)
            }
        }

        impl $OpAssign for Complex {
            #[inline]
            fn $op_assign(&mut self, rhs: Complex) {
                *self = self.$kernel(rhs);
            }
        }

        impl $OpAssign<f64> for Complex {
            #[inline]
            fn $op_assign(&mut self, rhs: f64) {
                *self = self.$kernel(Complex::from_real(rhs));
            }
        }
    };
}

impl_complex_binop!(Add, add, AddAssign, add_assign, add_c);
impl_complex_binop!(Sub, sub, SubAssign, sub_assign, sub_c);
impl_complex_binop!(Mul, mul, MulAssign, mul_assign, mul_c);
impl_complex_binop!(Div, div, DivAssign, div_assign, div_c);

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Neg for &Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        -*self
    }
}

// ── num-traits ───────────────────────────────────────────────────────

impl Zero for Complex {
    #[inline]
    fn zero() -> Self {
        Complex::ZERO
    }

    /// Exact zero test; the tolerance-aware form is the inherent
    /// [`Complex::is_zero`].
    #[inline]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Self {
        Complex::ONE
    }
}

impl Inv for Complex {
    type Output = Complex;

    #[inline]
    fn inv(self) -> Complex {
        Complex::inv(self)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + z)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ZERO, |acc, z| acc + *z)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * z)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Self {
        iter.fold(Complex::ONE, |acc, z| acc * *z)
    }
}
