use crate::linalg::DEFAULT_TOLERANCE;
use crate::matrix::MatrixBuilder;
use crate::traits::{MatrixMut, MatrixRef};
use crate::Matrix;

/// Numerical rank with [`DEFAULT_TOLERANCE`].
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// assert_eq!(linalg::rank(&Matrix::new("[1 1; 1 0]").unwrap()), 2);
/// assert_eq!(linalg::rank(&Matrix::new("[1 2; 2 4]").unwrap()), 1);
/// ```
pub fn rank(a: &Matrix) -> usize {
    rank_tol(a, DEFAULT_TOLERANCE)
}

/// Numerical rank: the number of rows extracted by elimination whose pivot
/// magnitude exceeds `tol`.
///
/// Each column, the remaining row with the largest entry in that column
/// becomes a pivot and is eliminated from the others.
pub fn rank_tol(a: &Matrix, tol: f64) -> usize {
    let (rows, cols) = a.size();
    let mut m = MatrixBuilder::from_matrix(a);
    let mut candidates: Vec<usize> = (0..rows).collect();
    let mut found = 0;

    for col in 0..cols {
        let mut best: Option<(usize, f64)> = None;
        for (slot, &row) in candidates.iter().enumerate() {
            let v = m.get(row, col).norm();
            if v > best.map_or(0.0, |b| b.1) {
                best = Some((slot, v));
            }
        }
        let Some((slot, max)) = best else { continue };
        if max <= tol {
            continue;
        }
        let pivot = candidates.remove(slot);
        found += 1;
        if candidates.is_empty() {
            break;
        }
        let p = *m.get(pivot, col);
        for &row in &candidates {
            let factor = *m.get(row, col) / p;
            for c in col..cols {
                let v = *m.get(pivot, c);
                *m.get_mut(row, c) -= v * factor;
            }
        }
    }
    found
}
