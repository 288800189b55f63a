use tracing::{trace, warn};

use crate::linalg::DEFAULT_TOLERANCE;
use crate::{Complex, Error, Matrix, Result};

/// Sweeps allowed per deflation block before the eigen solver gives up.
const MAX_ITER: usize = 100;

/// `P·H·Pᵀ = A` from [`tridiagonalize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tridiagonal {
    /// Orthogonal.
    pub p: Matrix,
    /// Symmetric tridiagonal with the eigenvalues of `A`.
    pub h: Matrix,
}

/// `V·D·Vᵀ = A` from [`eig`].
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigen {
    /// Orthogonal; column `i` is the eigenvector of `d[(i, i)]`.
    pub v: Matrix,
    /// Diagonal, eigenvalues in descending order.
    pub d: Matrix,
    /// `false` when some block exhausted its sweep budget; `v` and `d` are
    /// then the best estimate reached.
    pub converged: bool,
}

impl SymmetricEigen {
    /// Eigenvalues as a column, largest first.
    pub fn eigenvalues(&self) -> Matrix {
        self.d.diag()
    }
}

fn check_real_symmetric(a: &Matrix, op: &'static str) -> Result<Vec<f64>> {
    let (rows, cols) = a.size();
    if rows != cols {
        return Err(Error::NotSquare { op, rows, cols });
    }
    if !a.is_symmetric_tol(DEFAULT_TOLERANCE) {
        return Err(Error::NotSymmetric { op });
    }
    if !a.is_real() {
        return Err(Error::NotReal { op });
    }
    Ok(a.iter().map(|z| z.re).collect())
}

fn from_real(n: usize, data: &[f64]) -> Matrix {
    Matrix::from_parts(n, n, data.iter().map(|&x| Complex::from(x)).collect())
}

fn dot(x: &[f64], y: &[f64]) -> f64 {
    x.iter().zip(y).map(|(a, b)| a * b).sum()
}

/// Householder reduction of the packed row-major `w` (upper triangle used).
///
/// Returns the diagonal `d`, the super-diagonal `e` (length `n`, last entry
/// unused) and the orthogonal transform as rows of `w`, so that `Pᵀ`
/// is left in `w`.
fn householder(n: usize, w: &mut [f64]) -> (Vec<f64>, Vec<f64>) {
    let mut d = vec![0.0; n];
    let mut e = vec![0.0; n];

    for k in 0..n.saturating_sub(2) {
        d[k] = w[k * n + k];

        // reflector for the tail of row k, stored back into that tail
        let tail = k * n + k + 1..k * n + n;
        let mut y1 = dot(&w[tail.clone()], &w[tail.clone()]).sqrt();
        if y1 >= DEFAULT_TOLERANCE {
            if w[k * n + k + 1] < 0.0 {
                y1 = -y1;
            }
            let v0 = w[k * n + k + 1] + y1;
            let t = 1.0 / (v0 * y1).sqrt();
            w[k * n + k + 1] = v0 * t;
            for x in &mut w[k * n + k + 2..k * n + n] {
                *x *= t;
            }
        } else {
            w[tail.clone()].fill(0.0);
        }
        e[k] = -y1;
        if e[k].abs() < DEFAULT_TOLERANCE {
            continue;
        }

        for i in k + 1..n {
            let mut s = 0.0;
            for j in k + 1..i {
                s += w[j * n + i] * w[k * n + j];
            }
            for j in i..n {
                s += w[i * n + j] * w[k * n + j];
            }
            d[i] = s;
        }
        let t = dot(&w[tail.clone()], &d[k + 1..]) / 2.0;
        for i in (k + 1..n).rev() {
            let p = w[k * n + i];
            let q = d[i] - t * p;
            d[i] = q;
            for j in i..n {
                let r = p * d[j] + q * w[k * n + j];
                w[i * n + j] -= r;
            }
        }
    }
    if n >= 2 {
        d[n - 2] = w[(n - 2) * n + n - 2];
        e[n - 2] = w[(n - 2) * n + n - 1];
    }
    if n >= 1 {
        d[n - 1] = w[(n - 1) * n + n - 1];
    }

    // accumulate the reflectors, last first
    for k in (0..n).rev() {
        if k + 2 < n {
            for i in k + 1..n {
                let t: f64 = (k + 1..n).map(|j| w[k * n + j] * w[i * n + j]).sum();
                for j in k + 1..n {
                    w[i * n + j] -= t * w[k * n + j];
                }
            }
        }
        w[k * n..(k + 1) * n].fill(0.0);
        w[k * n + k] = 1.0;
    }
    (d, e)
}

/// Reduce a real symmetric matrix to tridiagonal form with Householder
/// reflections.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[4 1 -2 2; 1 2 0 1; -2 0 3 -2; 2 1 -2 -1]").unwrap();
/// let t = linalg::tridiagonalize(&a).unwrap();
/// assert!(t.h.is_tridiagonal());
/// let back = t.p.try_mul(&t.h).unwrap().try_mul(&t.p.transpose()).unwrap();
/// assert!(back.equals_tol(&a, 1e-10));
/// ```
pub fn tridiagonalize(a: &Matrix) -> Result<Tridiagonal> {
    let mut w = check_real_symmetric(a, "tridiagonalize")?;
    let n = a.rows();
    let (d, e) = householder(n, &mut w);
    let h = Matrix::from_fn(n, n, |r, c| {
        if r == c {
            Complex::from(d[r])
        } else if r.abs_diff(c) == 1 {
            Complex::from(e[r.min(c)])
        } else {
            Complex::ZERO
        }
    });
    Ok(Tridiagonal {
        p: from_real(n, &w).transpose(),
        h,
    })
}

/// Eigendecomposition of a real symmetric matrix: tridiagonalization
/// followed by implicit-shift QR sweeps.
///
/// Eigenpairs are ordered by descending eigenvalue. A block that does not
/// converge within its sweep budget is reported through
/// [`SymmetricEigen::converged`] and a `warn` event, not an error.
/// The remaining blocks are still swept, so a `false` flag can come with a
/// mix of converged and partially refined eigenpairs.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[2 1; 1 2]").unwrap();
/// let e = linalg::eig(&a).unwrap();
/// assert!(e.converged);
/// assert!(e.eigenvalues().equals_tol(&Matrix::new("[3; 1]").unwrap(), 1e-12));
/// assert!(linalg::eig(&Matrix::new("[1 2; 3 4]").unwrap()).is_err());
/// ```
pub fn eig(a: &Matrix) -> Result<SymmetricEigen> {
    eig_with_budget(a, MAX_ITER)
}

fn eig_with_budget(a: &Matrix, max_iter: usize) -> Result<SymmetricEigen> {
    let mut v = check_real_symmetric(a, "eig")?;
    let n = a.rows();
    let (mut d, sup) = householder(n, &mut v);
    // rows of `v` now hold Pᵀ; work on columns of P
    let mut p = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            p[i * n + j] = v[j * n + i];
        }
    }
    // e[i] couples d[i - 1] and d[i]
    let mut e = vec![0.0; n];
    for i in 1..n {
        e[i] = sup[i - 1];
    }

    let converged = qr_sweeps(n, &mut d, &mut e, &mut p, max_iter);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&x, &y| d[y].total_cmp(&d[x]));
    let vecs = Matrix::from_fn(n, n, |r, c| Complex::from(p[r * n + order[c]]));
    let vals = Matrix::from_fn(n, n, |r, c| {
        if r == c {
            Complex::from(d[order[r]])
        } else {
            Complex::ZERO
        }
    });
    Ok(SymmetricEigen {
        v: vecs,
        d: vals,
        converged,
    })
}

fn negligible(e: f64, d0: f64, d1: f64) -> bool {
    e.abs() <= DEFAULT_TOLERANCE * (d0.abs() + d1.abs())
}

/// Diagonalize the tridiagonal `(d, e)` in place, rotating the columns of
/// the row-major `p` along. Returns `false` if any block ran out of sweeps.
fn qr_sweeps(n: usize, d: &mut [f64], e: &mut [f64], p: &mut [f64], max_iter: usize) -> bool {
    let mut converged = true;
    for h in (1..n).rev() {
        let mut j = h;
        while j >= 1 && !negligible(e[j], d[j - 1], d[j]) {
            j -= 1;
        }
        if j == h {
            continue;
        }

        let mut iter = 0;
        loop {
            iter += 1;
            if iter > max_iter {
                warn!(block = h, iterations = max_iter, "eig: QR sweep did not converge");
                converged = false;
                break;
            }
            let mut w = (d[h - 1] - d[h]) / 2.0;
            let mut t = e[h] * e[h];
            let mut s = (w * w + t).sqrt();
            if w < 0.0 {
                s = -s;
            }
            let mut x = d[j] - d[h] + t / (w + s);
            let mut y = e[j + 1];
            for k in j..h {
                let (c, s) = if x.abs() >= y.abs() {
                    t = -y / x;
                    let c = 1.0 / (t * t + 1.0).sqrt();
                    (c, t * c)
                } else {
                    t = -x / y;
                    let s = 1.0 / (t * t + 1.0).sqrt();
                    (t * s, s)
                };
                w = d[k] - d[k + 1];
                t = (w * s + 2.0 * c * e[k + 1]) * s;
                d[k] -= t;
                d[k + 1] += t;
                if k > j {
                    e[k] = c * e[k] - s * y;
                }
                e[k + 1] += s * (c * w - 2.0 * s * e[k + 1]);
                for i in 0..n {
                    let (a0, a1) = (p[i * n + k], p[i * n + k + 1]);
                    p[i * n + k] = c * a0 - s * a1;
                    p[i * n + k + 1] = s * a0 + c * a1;
                }
                if k + 1 < h {
                    x = e[k + 1];
                    y = -s * e[k + 2];
                    e[k + 2] *= c;
                }
            }
            trace!(block = h, iter, off_diagonal = e[h], "eig: sweep");
            if negligible(e[h], d[h - 1], d[h]) {
                break;
            }
        }
    }
    converged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::test_util::{assert_mat_near, m, mul3};

    #[test]
    fn tridiagonal_reconstructs() {
        let a = m("[4 1 -2 2; 1 2 0 1; -2 0 3 -2; 2 1 -2 -1]");
        let t = tridiagonalize(&a).unwrap();
        assert!(t.h.is_tridiagonal());
        assert!(t.h.is_symmetric());
        assert!(t.p.is_orthogonal());
        assert_mat_near(&mul3(&t.p, &t.h, &t.p.transpose()), &a, 1e-10, "PHPᵀ");
    }

    #[test]
    fn small_sizes() {
        for s in ["5", "[1 2; 2 1]"] {
            let a = m(s);
            let t = tridiagonalize(&a).unwrap();
            assert_mat_near(&mul3(&t.p, &t.h, &t.p.transpose()), &a, 1e-12, s);
            let e = eig(&a).unwrap();
            assert_mat_near(&mul3(&e.v, &e.d, &e.v.transpose()), &a, 1e-10, s);
        }
    }

    #[test]
    fn eig_reconstructs_and_sorts() {
        let a = m("[4 1 -2 2; 1 2 0 1; -2 0 3 -2; 2 1 -2 -1]");
        let e = eig(&a).unwrap();
        assert!(e.converged);
        assert!(e.d.is_diagonal());
        assert!(e.v.is_orthogonal());
        assert_mat_near(&mul3(&e.v, &e.d, &e.v.transpose()), &a, 1e-10, "VDVᵀ");
        let vals = e.eigenvalues();
        for i in 1..4 {
            assert!(vals[(i - 1, 0)].re >= vals[(i, 0)].re);
        }
    }

    #[test]
    fn diagonal_input_is_already_converged() {
        let e = eig(&m("[1 0 0; 0 3 0; 0 0 2]")).unwrap();
        assert!(e.eigenvalues().equals(&m("[3; 2; 1]")));
        assert!(e.v.is_permutation());
    }

    #[test]
    fn repeated_eigenvalues() {
        let a = m("[2 1 1; 1 2 1; 1 1 2]");
        let e = eig(&a).unwrap();
        assert_mat_near(&e.eigenvalues(), &m("[4; 1; 1]"), 1e-10, "λ");
        assert_mat_near(&mul3(&e.v, &e.d, &e.v.transpose()), &a, 1e-10, "VDVᵀ");
    }

    #[test]
    fn exhausted_budget_still_returns_an_orthogonal_basis() {
        let a = m("[4 1 -2 2; 1 2 0 1; -2 0 3 -2; 2 1 -2 -1]");
        for budget in [0, 1] {
            let e = eig_with_budget(&a, budget).unwrap();
            if budget == 0 {
                assert!(!e.converged);
            }
            assert!(e.d.is_diagonal());
            assert!(e.v.is_orthogonal());
            let trace: f64 = (0..4).map(|i| e.d[(i, i)].re).sum();
            assert!((trace - 8.0).abs() < 1e-10, "budget {budget}: {trace}");
        }
    }

    #[test]
    fn domain_errors() {
        assert!(matches!(
            eig(&m("[1 2 3]")),
            Err(Error::NotSquare { op: "eig", .. })
        ));
        assert_eq!(
            tridiagonalize(&m("[1 2; 3 4]")),
            Err(Error::NotSymmetric { op: "tridiagonalize" })
        );
        assert_eq!(eig(&m("[1 i; i 1]")), Err(Error::NotReal { op: "eig" }));
    }
}
