//! Structural and numerical predicates.
//!
//! Each tolerance-aware predicate has a default form using
//! [`DEFAULT_TOLERANCE`](crate::linalg::DEFAULT_TOLERANCE) (machine epsilon
//! for `is_real`/`is_complex`) and a `_tol` form. Shape mismatches answer
//! `false`; no predicate fails.

use crate::linalg::{self, DEFAULT_TOLERANCE};
use crate::Complex;

use super::Matrix;

impl Matrix {
    fn all_indexed(&self, pred: impl Fn(&Complex, usize, usize) -> bool) -> bool {
        self.data
            .iter()
            .enumerate()
            .all(|(i, z)| pred(z, i / self.ncols, i % self.ncols))
    }

    pub fn is_real(&self) -> bool {
        self.is_real_tol(Complex::EPSILON)
    }

    pub fn is_real_tol(&self, tol: f64) -> bool {
        self.data.iter().all(|z| z.is_real_tol(tol))
    }

    pub fn is_complex(&self) -> bool {
        !self.is_real()
    }

    pub fn is_complex_tol(&self, tol: f64) -> bool {
        !self.is_real_tol(tol)
    }

    pub fn is_zeros(&self) -> bool {
        self.is_zeros_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_zeros_tol(&self, tol: f64) -> bool {
        self.data.iter().all(|z| z.is_zero_tol(tol))
    }

    /// Square, ones on the diagonal and zeros elsewhere.
    pub fn is_identity(&self) -> bool {
        self.is_identity_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_identity_tol(&self, tol: f64) -> bool {
        self.is_square()
            && self.all_indexed(|z, r, c| {
                if r == c {
                    z.is_one_tol(tol)
                } else {
                    z.is_zero_tol(tol)
                }
            })
    }

    pub fn is_diagonal(&self) -> bool {
        self.is_diagonal_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_diagonal_tol(&self, tol: f64) -> bool {
        self.all_indexed(|z, r, c| r == c || z.is_zero_tol(tol))
    }

    pub fn is_tridiagonal(&self) -> bool {
        self.is_tridiagonal_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_tridiagonal_tol(&self, tol: f64) -> bool {
        self.all_indexed(|z, r, c| r.abs_diff(c) <= 1 || z.is_zero_tol(tol))
    }

    pub fn is_triangle_upper(&self) -> bool {
        self.is_triangle_upper_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_triangle_upper_tol(&self, tol: f64) -> bool {
        self.all_indexed(|z, r, c| r <= c || z.is_zero_tol(tol))
    }

    pub fn is_triangle_lower(&self) -> bool {
        self.is_triangle_lower_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_triangle_lower_tol(&self, tol: f64) -> bool {
        self.all_indexed(|z, r, c| r >= c || z.is_zero_tol(tol))
    }

    /// `A[i][j] ≈ A[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        self.is_symmetric_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_symmetric_tol(&self, tol: f64) -> bool {
        self.is_square()
            && (0..self.nrows).all(|r| {
                (r + 1..self.ncols).all(|c| self[(r, c)].equals_tol(&self[(c, r)], tol))
            })
    }

    /// Real diagonal and `A[i][j] ≈ conj(A[j][i])`.
    pub fn is_hermitian(&self) -> bool {
        self.is_hermitian_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_hermitian_tol(&self, tol: f64) -> bool {
        self.is_square()
            && (0..self.nrows).all(|r| {
                self[(r, r)].is_real_tol(tol)
                    && (r + 1..self.ncols)
                        .all(|c| self[(r, c)].equals_tol(&self[(c, r)].conj(), tol))
            })
    }

    /// `A·Aᵀ ≈ I`.
    pub fn is_orthogonal(&self) -> bool {
        self.is_orthogonal_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_orthogonal_tol(&self, tol: f64) -> bool {
        self.is_square()
            && self
                .try_mul(&self.transpose())
                .is_ok_and(|p| p.is_identity_tol(tol))
    }

    /// `A·Aᴴ ≈ I`.
    pub fn is_unitary(&self) -> bool {
        self.is_unitary_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_unitary_tol(&self, tol: f64) -> bool {
        self.is_square()
            && self
                .try_mul(&self.ctranspose())
                .is_ok_and(|p| p.is_identity_tol(tol))
    }

    /// Exactly one unit entry in every row and column, zeros elsewhere.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// assert!(Matrix::new("[0 1 0; 0 0 1; 1 0 0]").unwrap().is_permutation());
    /// assert!(!Matrix::new("[1 1; 0 0]").unwrap().is_permutation());
    /// ```
    pub fn is_permutation(&self) -> bool {
        self.is_permutation_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_permutation_tol(&self, tol: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let mut row_hit = vec![false; self.nrows];
        let mut col_hit = vec![false; self.ncols];
        for r in 0..self.nrows {
            for c in 0..self.ncols {
                let z = self[(r, c)];
                if z.is_one_tol(tol) {
                    if row_hit[r] || col_hit[c] {
                        return false;
                    }
                    row_hit[r] = true;
                    col_hit[c] = true;
                } else if !z.is_zero_tol(tol) {
                    return false;
                }
            }
        }
        row_hit.iter().chain(&col_hit).all(|&hit| hit)
    }

    /// Square with full rank.
    pub fn is_regular(&self) -> bool {
        self.is_regular_tol(DEFAULT_TOLERANCE)
    }

    pub fn is_regular_tol(&self, tol: f64) -> bool {
        self.is_square() && linalg::rank_tol(self, tol) == self.nrows
    }

    /// Any element is NaN.
    pub fn is_nan(&self) -> bool {
        self.data.iter().any(Complex::is_nan)
    }

    /// Any element has an infinite part.
    pub fn is_infinite(&self) -> bool {
        self.data.iter().any(Complex::is_infinite)
    }

    /// Every element is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(Complex::is_finite)
    }
}
