use crate::linalg::{self, Lu, Lup, Qr, Svd, SymmetricEigen, Tridiagonal};
use crate::{Complex, Result};

use super::Matrix;

// ── Linear algebra conveniences ─────────────────────────────────────
//
// Thin wrappers over `crate::linalg` so calls chain off a matrix.

impl Matrix {
    /// See [`linalg::inner`].
    pub fn inner(&self, other: &Matrix, dim: usize) -> Result<Matrix> {
        linalg::inner(self, other, dim)
    }

    /// See [`linalg::norm`].
    pub fn norm(&self, p: f64) -> Result<f64> {
        linalg::norm(self, p)
    }

    /// See [`linalg::cond`].
    pub fn cond(&self, p: f64) -> Result<f64> {
        linalg::cond(self, p)
    }

    pub fn rcond(&self) -> Result<f64> {
        linalg::rcond(self)
    }

    /// Numerical rank with the default tolerance.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// assert_eq!(Matrix::new("[1 2 3; 0 0 0; 2 4 5]").unwrap().rank(), 2);
    /// ```
    pub fn rank(&self) -> usize {
        linalg::rank(self)
    }

    pub fn rank_tol(&self, tol: f64) -> usize {
        linalg::rank_tol(self, tol)
    }

    pub fn trace(&self) -> Complex {
        linalg::trace(self)
    }

    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let a = Matrix::new("[1 2 3; 0 -1 5; -2 3 4]").unwrap();
    /// assert_eq!(a.det().unwrap(), Complex::from(-45.0));
    /// ```
    pub fn det(&self) -> Result<Complex> {
        linalg::det(self)
    }

    pub fn lup(&self) -> Lup {
        linalg::lup(self)
    }

    pub fn lu(&self) -> Lu {
        linalg::lu(self)
    }

    /// Solve `self·x = b`.
    pub fn linsolve(&self, b: &Matrix) -> Result<Matrix> {
        linalg::linsolve(self, b)
    }

    pub fn qr(&self) -> Qr {
        linalg::qr(self)
    }

    pub fn tridiagonalize(&self) -> Result<Tridiagonal> {
        linalg::tridiagonalize(self)
    }

    pub fn eig(&self) -> Result<SymmetricEigen> {
        linalg::eig(self)
    }

    pub fn svd(&self) -> Result<Svd> {
        linalg::svd(self)
    }

    /// ```
    /// use zmatrix::Matrix;
    /// let a = Matrix::new("[2 1; 1 1]").unwrap();
    /// assert!(a.inv().unwrap().equals_tol(&Matrix::new("[1 -1; -1 2]").unwrap(), 1e-12));
    /// ```
    pub fn inv(&self) -> Result<Matrix> {
        linalg::inv(self)
    }

    pub fn pinv(&self) -> Result<Matrix> {
        linalg::pinv(self)
    }
}
