//! Stateless linear-algebra engine over [`Matrix`].
//!
//! Every function takes its operands by reference and returns new matrices.
//! Numerical degradation (rank deficiency, a skipped pivot, an unconverged
//! eigen sweep) is not an error: the functions return their best estimate and
//! emit a `tracing` event. Domain violations (non-square, non-symmetric or
//! complex input where a real symmetric matrix is required) are errors.
//!
//! | Function | Identity |
//! |----------|----------|
//! | [`lup`] | `Pᵀ·L·U = A` |
//! | [`lu`] | `L·U = A` |
//! | [`qr`] | `Q·R = A` |
//! | [`tridiagonalize`] | `P·H·Pᵀ = A` |
//! | [`eig`] | `V·D·Vᵀ = A` |
//! | [`svd`] | `U·S·Vᵀ = A` |
//!
//! ```
//! use zmatrix::{linalg, Matrix};
//!
//! let a = Matrix::new("[4 1; 2 3]").unwrap();
//! let f = linalg::lup(&a);
//! let back = f.p.transpose().try_mul(&f.l).unwrap().try_mul(&f.u).unwrap();
//! assert!(back.equals_tol(&a, 1e-12));
//! assert!((linalg::det(&a).unwrap().re - 10.0).abs() < 1e-12);
//! ```

mod lu;
mod norm;
mod qr;
mod rank;
mod svd;
mod symmetric_eigen;

pub use lu::{det, inv, linsolve, lu, lup, Lu, Lup};
pub use norm::{cond, inner, norm, rcond, trace};
pub use qr::{qr, qr_with_rng, Qr};
pub use rank::{rank, rank_tol};
pub use svd::{pinv, svd, Svd};
pub use symmetric_eigen::{eig, tridiagonalize, SymmetricEigen, Tridiagonal};

use crate::traits::MatrixRef;
use crate::Complex;

/// Tolerance used by the decompositions and the matrix predicates unless the
/// caller passes one.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Row at or below `from` with the largest modulus in column `col`, and that
/// modulus. Ties keep the upper row.
pub(crate) fn max_row(m: &impl MatrixRef<Complex>, col: usize, from: usize) -> (usize, f64) {
    let mut best = (from, 0.0);
    for row in from..m.nrows() {
        let v = m.get(row, col).norm();
        if v > best.1 {
            best = (row, v);
        }
    }
    best
}
