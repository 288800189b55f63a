//! Scalar-or-matrix tagged union.

use core::fmt;

use crate::{Complex, Matrix, Result};

/// A value that is either a [`Complex`] scalar or a [`Matrix`].
///
/// A 1×1 matrix and a scalar are interchangeable; [`normalize`] collapses the
/// former into the latter so callers only ever match one shape per case.
///
/// [`normalize`]: NumericValue::normalize
///
/// ```
/// use zmatrix::{Complex, Matrix, NumericValue};
///
/// let v = NumericValue::from(Matrix::new("[5]").unwrap()).normalize();
/// assert_eq!(v, NumericValue::Scalar(Complex::from(5.0)));
/// assert!(NumericValue::from(Matrix::eye(2)).is_tensor());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum NumericValue {
    Scalar(Complex),
    Tensor(Matrix),
}

impl NumericValue {
    /// Collapse a 1×1 tensor into a scalar.
    pub fn normalize(self) -> Self {
        match self {
            NumericValue::Tensor(m) if m.is_scalar() => NumericValue::Scalar(m[(0, 0)]),
            other => other,
        }
    }

    pub fn is_scalar(&self) -> bool {
        match self {
            NumericValue::Scalar(_) => true,
            NumericValue::Tensor(m) => m.is_scalar(),
        }
    }

    pub fn is_tensor(&self) -> bool {
        !self.is_scalar()
    }

    /// The scalar, or the single element of a 1×1 tensor.
    pub fn scalar(&self) -> Result<Complex> {
        match self {
            NumericValue::Scalar(z) => Ok(*z),
            NumericValue::Tensor(m) => m.scalar(),
        }
    }

    /// Widen to a matrix; a scalar becomes 1×1.
    pub fn into_matrix(self) -> Matrix {
        match self {
            NumericValue::Scalar(z) => Matrix::fill(1, 1, z),
            NumericValue::Tensor(m) => m,
        }
    }

    pub fn equals(&self, other: &NumericValue) -> bool {
        self.equals_tol(other, Complex::EPSILON)
    }

    /// Tolerance-aware equality that treats a scalar and a 1×1 tensor alike.
    pub fn equals_tol(&self, other: &NumericValue, tol: f64) -> bool {
        match (self.clone().normalize(), other.clone().normalize()) {
            (NumericValue::Scalar(a), NumericValue::Scalar(b)) => a.equals_tol(&b, tol),
            (NumericValue::Tensor(a), NumericValue::Tensor(b)) => a.equals_tol(&b, tol),
            _ => false,
        }
    }
}

impl From<Complex> for NumericValue {
    fn from(z: Complex) -> Self {
        NumericValue::Scalar(z)
    }
}

impl From<Matrix> for NumericValue {
    fn from(m: Matrix) -> Self {
        NumericValue::Tensor(m)
    }
}

impl From<f64> for NumericValue {
    fn from(x: f64) -> Self {
        NumericValue::Scalar(Complex::from(x))
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericValue::Scalar(z) => fmt::Display::fmt(z, f),
            NumericValue::Tensor(m) => fmt::Display::fmt(m, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_one_by_one_are_equal() {
        let a = NumericValue::from(2.0);
        let b = NumericValue::from(Matrix::fill(1, 1, Complex::from(2.0)));
        assert!(a.equals(&b));
        assert!(b.is_scalar());
        assert_eq!(b.scalar().unwrap(), Complex::from(2.0));
    }

    #[test]
    fn tensor_is_not_scalar() {
        let t = NumericValue::from(Matrix::zeros(2, 3));
        assert!(t.is_tensor());
        assert!(t.scalar().is_err());
        assert!(!t.equals(&NumericValue::from(0.0)));
        assert_eq!(t.into_matrix().size(), (2, 3));
    }
}
