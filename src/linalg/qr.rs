use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use tracing::{debug, warn};

use crate::linalg::DEFAULT_TOLERANCE;
use crate::matrix::MatrixBuilder;
use crate::traits::{MatrixMut, MatrixRef};
use crate::{Complex, Matrix};

/// Attempts at drawing a usable random vector for each missing column.
const MAX_COMPLETION_ATTEMPTS: usize = 100;

/// `Q·R = A` from [`qr`].
#[derive(Debug, Clone, PartialEq)]
pub struct Qr {
    /// Unitary, `rows × rows`.
    pub q: Matrix,
    /// Upper triangular, `rows × cols`.
    pub r: Matrix,
}

/// QR decomposition by Gram-Schmidt orthonormalization.
///
/// Column `c` of `Q` belongs to column `c` of `A`, and `R[c][c]` is the norm
/// of what is left of that column after projecting out the earlier ones. A
/// column that leaves nothing (linear dependence) keeps `R[c][c] = 0`, and
/// its `Q` column, like those past the last column of a tall `A`, is filled
/// with a random unit vector orthogonal to the rest, so `Q` is always square
/// and unitary. The generator is a [`ChaCha8Rng`] seeded with `0`, which
/// makes the result deterministic. When no column yields a direction `Q` is
/// the identity.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[1 2; 3 4; 5 6]").unwrap();
/// let f = linalg::qr(&a);
/// assert_eq!(f.q.size(), (3, 3));
/// assert_eq!(f.r.size(), (3, 2));
/// assert!(f.q.is_unitary());
/// assert!(f.r.is_triangle_upper());
/// assert!(f.q.try_mul(&f.r).unwrap().equals_tol(&a, 1e-12));
/// ```
pub fn qr(a: &Matrix) -> Qr {
    qr_with_rng(a, &mut ChaCha8Rng::seed_from_u64(0))
}

/// [`qr`] drawing the completion vectors from `rng`.
pub fn qr_with_rng<R: Rng + ?Sized>(a: &Matrix, rng: &mut R) -> Qr {
    let (rows, cols) = a.size();
    let aligned = rows.min(cols);
    let mut q = MatrixBuilder::zeros(rows, rows);
    let mut r = MatrixBuilder::zeros(rows, cols);
    let mut basis: Vec<usize> = Vec::with_capacity(rows);
    let mut missing: Vec<usize> = Vec::new();

    for c in 0..aligned {
        let mut v = column(a, c);
        let scale = norm(&v).max(1.0);
        let coeffs = project_out(&q, &basis, &mut v);
        for (&j, h) in basis.iter().zip(coeffs) {
            *r.get_mut(j, c) = h;
        }
        let nv = norm(&v);
        if nv > DEFAULT_TOLERANCE * scale {
            set_column(&mut q, c, &v, nv);
            *r.get_mut(c, c) = Complex::from(nv);
            basis.push(c);
        } else {
            missing.push(c);
        }
    }
    missing.extend(aligned..rows);

    if basis.is_empty() {
        q = MatrixBuilder::eye(rows);
    } else if !missing.is_empty() {
        debug!(missing = missing.len(), "qr: completing orthonormal basis");
        complete_basis(&mut q, &mut basis, &missing, rng);
    }

    // columns past the square block of a wide A see the whole basis
    let all: Vec<usize> = (0..rows).collect();
    for c in aligned..cols {
        let mut v = column(a, c);
        let coeffs = project_out(&q, &all, &mut v);
        for (j, h) in coeffs.into_iter().enumerate() {
            *r.get_mut(j, c) = h;
        }
    }

    Qr {
        q: q.build(),
        r: r.build(),
    }
}

fn column(a: &Matrix, c: usize) -> Vec<Complex> {
    (0..a.rows()).map(|i| a[(i, c)]).collect()
}

/// Euclidean norm with the complex modulus.
fn norm(v: &[Complex]) -> f64 {
    v.iter().map(|z| z.re * z.re + z.im * z.im).sum::<f64>().sqrt()
}

/// Remove from `v` its components along the `basis` columns of `q`,
/// returning the accumulated coefficients `qⱼᴴ·v` in `basis` order. Two
/// passes keep `v` orthogonal to working precision.
fn project_out(q: &MatrixBuilder, basis: &[usize], v: &mut [Complex]) -> Vec<Complex> {
    let mut coeffs = vec![Complex::ZERO; basis.len()];
    for _ in 0..2 {
        for (&j, coeff) in basis.iter().zip(coeffs.iter_mut()) {
            let h: Complex = v
                .iter()
                .enumerate()
                .map(|(i, &x)| q.get(i, j).conj() * x)
                .sum();
            for (i, x) in v.iter_mut().enumerate() {
                *x -= h * *q.get(i, j);
            }
            *coeff += h;
        }
    }
    coeffs
}

fn set_column(q: &mut MatrixBuilder, col: usize, v: &[Complex], nv: f64) {
    for (i, &x) in v.iter().enumerate() {
        *q.get_mut(i, col) = x / nv;
    }
}

/// Fill the `missing` columns of `q` with unit vectors orthogonal to the
/// `basis` columns and to each other.
fn complete_basis<R: Rng + ?Sized>(
    q: &mut MatrixBuilder,
    basis: &mut Vec<usize>,
    missing: &[usize],
    rng: &mut R,
) {
    let n = q.nrows();
    for &col in missing {
        let mut placed = false;
        for attempt in 1..=MAX_COMPLETION_ATTEMPTS {
            let mut v: Vec<Complex> = (0..n)
                .map(|_| Complex::from(rng.sample::<f64, _>(StandardNormal)))
                .collect();
            project_out(q, basis, &mut v);
            let nv = norm(&v);
            if nv > DEFAULT_TOLERANCE {
                set_column(q, col, &v, nv);
                placed = true;
                break;
            }
            debug!(column = col, attempt, "qr: random vector was dependent, retrying");
        }
        if !placed {
            warn!(column = col, "qr: could not complete orthonormal basis");
            return;
        }
        basis.push(col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::test_util::{assert_mat_near, m};

    fn check(a: &Matrix) -> Qr {
        let f = qr(a);
        assert_eq!(f.q.size(), (a.rows(), a.rows()));
        assert_eq!(f.r.size(), a.size());
        assert!(f.q.is_unitary(), "Q not unitary:\n{}", f.q);
        assert!(f.r.is_triangle_upper(), "R not upper:\n{}", f.r);
        assert_mat_near(&f.q.try_mul(&f.r).unwrap(), a, 1e-10, "QR");
        f
    }

    #[test]
    fn square() {
        check(&m("[12 -51 4; 6 167 -68; -4 24 -41]"));
    }

    #[test]
    fn tall_and_wide() {
        check(&m("[1 2; 3 4; 5 6]"));
        check(&m("[1 2 3; 4 5 6]"));
    }

    #[test]
    fn rank_deficient() {
        check(&m("[1 2; 2 4]"));
        check(&m("[0 1; 0 1]"));
        check(&m("[0 0 1]"));
    }

    #[test]
    fn dependent_column_keeps_its_diagonal_slot() {
        let f = check(&m("[0 1; 0 1]"));
        let s = 2.0_f64.sqrt();
        assert_eq!(f.r[(0, 0)], Complex::ZERO);
        assert_eq!(f.r[(0, 1)], Complex::ZERO);
        assert!((f.r[(1, 1)] - Complex::from(s)).norm() < 1e-12, "{}", f.r);
        assert!((f.q[(0, 1)] - Complex::from(1.0 / s)).norm() < 1e-12);

        // a dependent middle column leaves the later diagonal in place
        let f = check(&m("[1 2 0; 0 0 1; 0 0 0]"));
        assert_eq!(f.r[(1, 1)], Complex::ZERO);
        assert!((f.r[(2, 2)] - Complex::ONE).norm() < 1e-12, "{}", f.r);
    }

    #[test]
    fn zero_matrix_gives_identity_q() {
        let f = check(&Matrix::zeros(3, 3));
        assert!(f.r.is_zeros());
        assert_eq!(f.q, Matrix::eye(3));
    }

    #[test]
    fn wide_with_dependent_leading_column() {
        let f = check(&m("[0 0 1]"));
        assert!((f.r[(0, 2)].abs() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn complex_columns() {
        check(&m("[1+i 2; -i 3-2i]"));
        check(&m("[1 i; i -1]"));
    }

    #[test]
    fn deterministic_completion() {
        let a = m("[1 1; 1 1; 1 1]");
        assert_eq!(qr(&a), qr(&a));
    }
}
