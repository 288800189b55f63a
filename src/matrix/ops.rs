use core::cmp::Ordering;
use core::ops::{Add, Mul, Neg, Sub};

use tracing::debug;

use crate::linalg::{self, DEFAULT_TOLERANCE};
use crate::{Complex, Error, Result};

use super::{Matrix, MatrixBuilder};

// ── Broadcasting ────────────────────────────────────────────────────

impl Matrix {
    /// Element-wise combination where a 1×1 operand stretches over the
    /// other; otherwise shapes must agree.
    pub(crate) fn broadcast(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(Complex, Complex) -> Complex,
    ) -> Result<Matrix> {
        self.try_broadcast(other, op, |a, b| Ok(f(a, b)))
    }

    pub(crate) fn try_broadcast(
        &self,
        other: &Matrix,
        op: &'static str,
        f: impl Fn(Complex, Complex) -> Result<Complex>,
    ) -> Result<Matrix> {
        let ((nrows, ncols), data) = if other.is_scalar() {
            let b = other.data[0];
            (self.size(), self.data.iter().map(|&a| f(a, b)).collect::<Result<Vec<_>>>()?)
        } else if self.is_scalar() {
            let a = self.data[0];
            (other.size(), other.data.iter().map(|&b| f(a, b)).collect::<Result<Vec<_>>>()?)
        } else if self.size() == other.size() {
            let data = self
                .data
                .iter()
                .zip(&other.data)
                .map(|(&a, &b)| f(a, b))
                .collect::<Result<Vec<_>>>()?;
            (self.size(), data)
        } else {
            return Err(Error::ShapeMismatch {
                op,
                expected: self.size(),
                got: other.size(),
            });
        };
        Ok(Matrix::from_parts(nrows, ncols, data))
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl Matrix {
    /// `self + other`, broadcasting a 1×1 operand.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let a = Matrix::new("[1 2; 3 4]").unwrap();
    /// let b = a.try_add(&Matrix::new("10").unwrap()).unwrap();
    /// assert!(b.equals(&Matrix::new("[11 12; 13 14]").unwrap()));
    /// assert!(a.try_add(&Matrix::new("[1 2 3]").unwrap()).is_err());
    /// ```
    pub fn try_add(&self, other: &Matrix) -> Result<Matrix> {
        self.broadcast(other, "add", |a, b| a + b)
    }

    pub fn try_sub(&self, other: &Matrix) -> Result<Matrix> {
        self.broadcast(other, "sub", |a, b| a - b)
    }

    /// Matrix product, or element-wise scaling when either side is 1×1.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let a = Matrix::new("[1 2; 3 4]").unwrap();
    /// let b = Matrix::new("[5; 6]").unwrap();
    /// assert!(a.try_mul(&b).unwrap().equals(&Matrix::new("[17; 39]").unwrap()));
    /// assert!(b.try_mul(&a).is_err());
    /// ```
    pub fn try_mul(&self, other: &Matrix) -> Result<Matrix> {
        if self.is_scalar() || other.is_scalar() {
            return self.broadcast(other, "mul", |a, b| a * b);
        }
        if self.ncols != other.nrows {
            return Err(Error::ShapeMismatch {
                op: "mul",
                expected: (self.ncols, other.ncols),
                got: other.size(),
            });
        }
        let (n, p) = (self.nrows, other.ncols);
        let mut data = Vec::with_capacity(n * p);
        for i in 0..n {
            let row = self.row_slice(i);
            for j in 0..p {
                let mut sum = Complex::ZERO;
                for (k, &a) in row.iter().enumerate() {
                    sum += a * other.data[k * p + j];
                }
                data.push(sum);
            }
        }
        Ok(Matrix::from_parts(n, p, data))
    }

    /// `self · other⁻¹`.
    ///
    /// A 1×1 divisor divides element-wise. A square divisor is inverted
    /// when `|det| > 1e-10` and pseudo-inverted otherwise.
    pub fn try_div(&self, other: &Matrix) -> Result<Matrix> {
        if other.is_scalar() {
            return self.broadcast(other, "div", |a, b| a / b);
        }
        if !other.is_square() {
            return Err(Error::NotSquare {
                op: "div",
                rows: other.nrows,
                cols: other.ncols,
            });
        }
        if self.ncols != other.nrows {
            return Err(Error::ShapeMismatch {
                op: "div",
                expected: (other.nrows, other.nrows),
                got: self.size(),
            });
        }
        let det = linalg::det(other)?;
        let divisor = if det.abs() > DEFAULT_TOLERANCE {
            linalg::inv(other)?
        } else {
            debug!(det = det.abs(), "divisor is near-singular, using pseudo-inverse");
            linalg::pinv(other)?
        };
        self.try_mul(&divisor)
    }

    /// Element-wise product.
    pub fn dotmul(&self, other: &Matrix) -> Result<Matrix> {
        self.broadcast(other, "dotmul", |a, b| a * b)
    }

    /// Element-wise quotient.
    pub fn dotdiv(&self, other: &Matrix) -> Result<Matrix> {
        self.broadcast(other, "dotdiv", |a, b| a / b)
    }

    /// Element-wise power.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let a = Matrix::new("[1 2 3]").unwrap();
    /// let sq = a.dotpow(&Matrix::new("2").unwrap()).unwrap();
    /// assert!(sq.equals(&Matrix::new("[1 4 9]").unwrap()));
    /// ```
    pub fn dotpow(&self, other: &Matrix) -> Result<Matrix> {
        self.broadcast(other, "dotpow", |a, b| a.pow(b))
    }

    /// Element-wise reciprocal.
    pub fn dotinv(&self) -> Matrix {
        self.map(Complex::inv)
    }

    /// Element-wise remainder with the dividend's sign; real operands only.
    pub fn rem(&self, other: &Matrix) -> Result<Matrix> {
        self.try_broadcast(other, "rem", |a, b| a.rem(b))
    }

    /// Element-wise modulus with the divisor's sign; real operands only.
    pub fn modulo(&self, other: &Matrix) -> Result<Matrix> {
        self.try_broadcast(other, "mod", |a, b| a.modulo(b))
    }

    /// Matrix power.
    ///
    /// A 1×1 matrix raises its scalar with [`Complex::pow`]. Otherwise the
    /// matrix must be square and the exponent a non-negative integer, and
    /// the result is computed by repeated squaring.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let a = Matrix::new("[1 1; 1 0]").unwrap();
    /// let f = a.pow(10).unwrap();
    /// assert!(f.equals(&Matrix::new("[89 55; 55 34]").unwrap()));
    /// assert!(a.pow(0).unwrap().is_identity());
    /// assert!(a.pow(-1).is_err());
    /// ```
    pub fn pow(&self, exponent: impl Into<Complex>) -> Result<Matrix> {
        let exponent = exponent.into();
        if self.is_scalar() {
            return Ok(Matrix::from_parts(1, 1, vec![self.data[0].pow(exponent)]));
        }
        if !self.is_square() {
            return Err(Error::NotSquare {
                op: "pow",
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        if !exponent.is_integer() || exponent.is_negative() {
            return Err(Error::invalid(
                "pow",
                format!("exponent {exponent} must be a non-negative integer"),
            ));
        }
        let mut n = exponent.int_value() as u64;
        let mut result = MatrixBuilder::eye(self.nrows).build();
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            n >>= 1;
            if n > 0 {
                base = base.try_mul(&base)?;
            }
        }
        Ok(result)
    }

    /// Element-wise [`Complex::compare_to`] as `-1`, `0`, `1`, or NaN when
    /// the pair is unordered.
    pub fn compare_to_matrix(&self, other: &Matrix) -> Result<Matrix> {
        self.broadcast(other, "compare", |a, b| match a.compare_to(&b) {
            Some(Ordering::Less) => Complex::MINUS_ONE,
            Some(Ordering::Equal) => Complex::ZERO,
            Some(Ordering::Greater) => Complex::ONE,
            None => Complex::NAN,
        })
    }

    /// Element-wise negation.
    pub fn neg(&self) -> Matrix {
        self.map(|z| -z)
    }

    /// Plain transpose.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |r, c| self[(c, r)])
    }

    /// Conjugate (Hermitian) transpose.
    pub fn ctranspose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |r, c| self[(c, r)].conj())
    }

    /// Shorthand for [`ctranspose`](Matrix::ctranspose).
    pub fn t(&self) -> Matrix {
        self.ctranspose()
    }
}

// ── Operators ───────────────────────────────────────────────────────

macro_rules! impl_matrix_binop {
    ($Trait:ident, $method:ident, $checked:ident) => {
        /// Panics on a shape mismatch; see the `try_` method for a checked
        /// version.
        impl $Trait<&Matrix> for &Matrix {
            type Output = Matrix;
            fn $method(self, rhs: &Matrix) -> Matrix {
                self.$checked(rhs).unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl $Trait<Matrix> for Matrix {
            type Output = Matrix;
            fn $method(self, rhs: Matrix) -> Matrix {
                $Trait::$method(&self, &rhs)
            }
        }

        impl $Trait<&Matrix> for Matrix {
            type Output = Matrix;
            fn $method(self, rhs: &Matrix) -> Matrix {
                $Trait::$method(&self, rhs)
            }
        }

        impl $Trait<Matrix> for &Matrix {
            type Output = Matrix;
            fn $method(self, rhs: Matrix) -> Matrix {
                $Trait::$method(self, &rhs)
            }
        }
    };
}

impl_matrix_binop!(Add, add, try_add);
impl_matrix_binop!(Sub, sub, try_sub);
impl_matrix_binop!(Mul, mul, try_mul);

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        Matrix::neg(&self)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        Matrix::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(s: &str) -> Matrix {
        Matrix::new(s).unwrap()
    }

    #[test]
    fn scalar_broadcasts_both_ways() {
        let a = m("[1 2; 3 4]");
        let two = m("2");
        assert!(two.try_sub(&a).unwrap().equals(&m("[1 0; -1 -2]")));
        assert!(a.dotdiv(&two).unwrap().equals(&m("[0.5 1; 1.5 2]")));
        assert!((&a * &two).equals(&m("[2 4; 6 8]")));
    }

    #[test]
    fn shape_mismatch_reports_sizes() {
        let err = m("[1 2]").try_add(&m("[1; 2]")).unwrap_err();
        assert_eq!(
            err,
            Error::ShapeMismatch {
                op: "add",
                expected: (1, 2),
                got: (2, 1)
            }
        );
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn operator_panics_on_mismatch() {
        let _ = m("[1 2]") + m("[1 2 3]");
    }

    #[test]
    fn complex_product() {
        let a = m("[1+i 2]");
        let b = m("[1; i]");
        assert_eq!(a.try_mul(&b).unwrap().scalar().unwrap(), Complex::new(1.0, 3.0));
    }

    #[test]
    fn div_by_regular_and_singular() {
        let a = m("[4 7; 2 6]");
        let q = a.try_div(&a).unwrap();
        assert!(q.equals_tol(&Matrix::eye(2), 1e-12));

        // singular divisor falls back to the pseudo-inverse
        let s = m("[1 2; 2 4]");
        let q = s.try_div(&s).unwrap();
        assert!(q.equals_tol(&m("[0.2 0.4; 0.4 0.8]"), 1e-10));
    }

    #[test]
    fn rem_and_modulo_broadcast() {
        let a = m("[5 -5]");
        let b = m("3");
        assert!(a.rem(&b).unwrap().equals(&m("[2 -2]")));
        assert!(a.modulo(&b).unwrap().equals(&m("[2 1]")));
        assert!(m("[1+i]").rem(&b).is_err());
    }

    #[test]
    fn compare_elements() {
        let c = m("[1 2 3]").compare_to_matrix(&m("2")).unwrap();
        assert!(c.equals(&m("[-1 0 1]")));
        let n = Matrix::fill(1, 1, Complex::NAN).compare_to_matrix(&m("1")).unwrap();
        assert!(n[(0, 0)].is_nan());
    }

    #[test]
    fn transposes() {
        let a = m("[1+i 2; 3 4-2i; 5 6]");
        assert_eq!(a.transpose().size(), (2, 3));
        assert_eq!(a.transpose()[(0, 0)], Complex::new(1.0, 1.0));
        assert_eq!(a.t()[(1, 1)], Complex::new(4.0, 2.0));
        assert!(a.ctranspose().ctranspose().equals(&a));
    }

    #[test]
    fn scalar_pow() {
        let z = m("[2]").pow(0.5).unwrap();
        assert!(z[(0, 0)].equals_tol(&Complex::from(2.0_f64.sqrt()), 1e-15));
        assert!(m("[1 2 3]").pow(2).is_err());
    }
}
