use tracing::debug;

use crate::linalg::max_row;
use crate::matrix::MatrixBuilder;
use crate::traits::{MatrixMut, MatrixRef};
use crate::{Complex, Error, Matrix, Result};

/// `Pᵀ·L·U = A` from [`lup`].
#[derive(Debug, Clone, PartialEq)]
pub struct Lup {
    /// Unit lower triangular, `rows × min(rows, cols)`.
    pub l: Matrix,
    /// Upper triangular, `min(rows, cols) × cols`.
    pub u: Matrix,
    /// Row permutation, `rows × rows`.
    pub p: Matrix,
    /// Number of row exchanges performed.
    pub swaps: usize,
}

impl Lup {
    /// `true` when an even number of rows were exchanged.
    #[inline]
    pub fn is_even(&self) -> bool {
        self.swaps % 2 == 0
    }
}

/// `L·U = A` from [`lu`]; `L` is a row-permuted lower triangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Lu {
    pub l: Matrix,
    pub u: Matrix,
}

/// LU decomposition with partial pivoting.
///
/// Works on any shape. A column with no non-zero entry at or below the pivot
/// row is skipped, so rank-deficient input still yields a valid factorization.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[1 2; 3 4; 5 6]").unwrap();
/// let f = linalg::lup(&a);
/// assert_eq!(f.l.size(), (3, 2));
/// assert_eq!(f.u.size(), (2, 2));
/// assert!(f.u.is_triangle_upper());
/// let back = f.p.transpose().try_mul(&f.l).unwrap().try_mul(&f.u).unwrap();
/// assert!(back.equals_tol(&a, 1e-12));
/// ```
pub fn lup(a: &Matrix) -> Lup {
    let (rows, cols) = a.size();
    let mut l = MatrixBuilder::zeros(rows, rows);
    let mut u = MatrixBuilder::from_matrix(a);
    let mut p = MatrixBuilder::eye(rows);
    let mut swaps = 0;

    for k in 0..rows.min(cols) {
        let (pivot, max) = max_row(&u, k, k);
        if max == 0.0 {
            debug!(column = k, "lup: skipping all-zero pivot column");
            continue;
        }
        if pivot != k {
            l.swap_rows(k, pivot);
            u.swap_rows(k, pivot);
            p.swap_rows(k, pivot);
            swaps += 1;
        }
        let ukk = *u.get(k, k);
        for row in k + 1..rows {
            let factor = *u.get(row, k) / ukk;
            *l.get_mut(row, k) = factor;
            for col in k..cols {
                let v = *u.get(k, col);
                *u.get_mut(row, col) -= v * factor;
            }
        }
    }

    let inner = rows.min(cols);
    for i in 0..inner {
        *l.get_mut(i, i) = Complex::ONE;
    }
    // shrinking never fails for non-empty extents
    let _ = l.resize(rows, inner);
    let _ = u.resize(inner, cols);

    Lup {
        l: l.build(),
        u: u.build(),
        p: p.build(),
        swaps,
    }
}

/// LU decomposition without a separate permutation: `L = Pᵀ·L_lup`.
pub fn lu(a: &Matrix) -> Lu {
    let f = lup(a);
    let mut l = MatrixBuilder::zeros(f.l.rows(), f.l.cols());
    // Pᵀ·L is a row permutation: row i of L lands where P sends it.
    for (i, prow) in f.p.to_rows().iter().enumerate() {
        if let Some(target) = prow.iter().position(|z| z.is_one()) {
            for c in 0..f.l.cols() {
                l.set(target, c, f.l[(i, c)]);
            }
        }
    }
    Lu { l: l.build(), u: f.u }
}

/// Determinant of a square matrix.
///
/// Cofactor expansion below 5×5, otherwise the product of the LUP diagonal
/// signed by the swap parity.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[6 2; 1 4]").unwrap();
/// assert_eq!(linalg::det(&a).unwrap().re, 22.0);
/// assert!(linalg::det(&Matrix::new("[1 2 3]").unwrap()).is_err());
/// ```
pub fn det(a: &Matrix) -> Result<Complex> {
    let (rows, cols) = a.size();
    if rows != cols {
        return Err(Error::NotSquare {
            op: "det",
            rows,
            cols,
        });
    }
    if rows < 5 {
        let order: Vec<usize> = (0..rows).collect();
        return Ok(cofactor(a, &order, 0));
    }
    let f = lup(a);
    let d: Complex = (0..rows).map(|i| f.u[(i, i)]).product();
    Ok(if f.is_even() { d } else { -d })
}

/// Expansion along column `col` over the remaining `rows`.
fn cofactor(a: &Matrix, rows: &[usize], col: usize) -> Complex {
    match rows {
        [r] => a[(*r, col)],
        [r0, r1] => a[(*r0, col)] * a[(*r1, col + 1)] - a[(*r0, col + 1)] * a[(*r1, col)],
        _ => {
            let mut sum = Complex::ZERO;
            let mut minor = Vec::with_capacity(rows.len() - 1);
            for (i, &r) in rows.iter().enumerate() {
                minor.clear();
                minor.extend(rows.iter().copied().filter(|&x| x != r));
                let term = a[(r, col)] * cofactor(a, &minor, col + 1);
                if i % 2 == 0 {
                    sum += term;
                } else {
                    sum -= term;
                }
            }
            sum
        }
    }
}

/// Solve `A·x = b` for a square `A` and a column `b` by Gaussian elimination
/// with partial pivoting and back substitution.
///
/// A singular `A` yields non-finite entries rather than an error.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[2 1; 1 3]").unwrap();
/// let b = Matrix::new("[3; 5]").unwrap();
/// let x = linalg::linsolve(&a, &b).unwrap();
/// assert!(x.equals_tol(&Matrix::new("[0.8; 1.4]").unwrap(), 1e-12));
/// ```
pub fn linsolve(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    let (n, cols) = a.size();
    if n != cols {
        return Err(Error::NotSquare {
            op: "linsolve",
            rows: n,
            cols,
        });
    }
    if b.size() != (n, 1) {
        return Err(Error::ShapeMismatch {
            op: "linsolve",
            expected: (n, 1),
            got: b.size(),
        });
    }
    let mut m = MatrixBuilder::from_matrix(a);
    m.concat_right(b)?;
    let width = n + 1;

    // forward elimination, pivot rows normalized to a unit diagonal
    for k in 0..n {
        let (pivot, _) = max_row(&m, k, k);
        m.swap_rows(k, pivot);
        let scale = m.get(k, k).inv();
        for col in k..width {
            *m.get_mut(k, col) *= scale;
        }
        for row in k + 1..n {
            let factor = *m.get(row, k);
            for col in k..width {
                let v = *m.get(k, col);
                *m.get_mut(row, col) -= v * factor;
            }
        }
    }

    let mut x = vec![Complex::ZERO; n];
    for row in (0..n).rev() {
        let mut s = *m.get(row, n);
        for j in row + 1..n {
            s -= *m.get(row, j) * x[j];
        }
        x[row] = s;
    }
    Matrix::from_vec(n, 1, x)
}

/// Inverse of a square matrix by Gauss-Jordan elimination on `[A | I]`.
///
/// A 1×1 matrix inverts its element; a diagonal matrix inverts its
/// diagonal directly. A singular `A` yields non-finite entries.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[4 7; 2 6]").unwrap();
/// let ai = linalg::inv(&a).unwrap();
/// assert!(a.try_mul(&ai).unwrap().is_identity());
/// ```
pub fn inv(a: &Matrix) -> Result<Matrix> {
    let (n, cols) = a.size();
    if a.is_scalar() {
        return Ok(a.map(Complex::inv));
    }
    if n != cols {
        return Err(Error::NotSquare {
            op: "inv",
            rows: n,
            cols,
        });
    }
    if a.is_diagonal() {
        return Ok(a.map_indexed(|z, r, c| if r == c { z.inv() } else { z }));
    }

    let mut m = MatrixBuilder::from_matrix(a);
    m.concat_right(&Matrix::eye(n))?;
    let width = 2 * n;
    for k in 0..n {
        let (pivot, _) = max_row(&m, k, k);
        m.swap_rows(k, pivot);
        let scale = m.get(k, k).inv();
        for col in k..width {
            *m.get_mut(k, col) *= scale;
        }
        for row in (0..n).filter(|&r| r != k) {
            let factor = *m.get(row, k);
            for col in k..width {
                let v = *m.get(k, col);
                *m.get_mut(row, col) -= v * factor;
            }
        }
    }
    let built = m.build();
    built.get_matrix(.., n..width)
}
