use crate::linalg::{pinv, svd};
use crate::{Complex, Error, Matrix, Result};

/// Inner product `Σ conj(aᵢ)·bᵢ`.
///
/// Two scalars or two vectors give a 1×1 result. Equal-shaped matrices are
/// reduced per column when `dim == 1` (row result) or per row when
/// `dim == 2` (column result).
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[1 2; 3 4]").unwrap();
/// let cols = linalg::inner(&a, &a, 1).unwrap();
/// assert!(cols.equals(&Matrix::new("[10 20]").unwrap()));
/// let v = linalg::inner(&Matrix::new("[i 1]").unwrap(), &Matrix::new("[i; 1]").unwrap(), 1).unwrap();
/// assert!(v.equals(&Matrix::new("2").unwrap()));
/// ```
pub fn inner(a: &Matrix, b: &Matrix, dim: usize) -> Result<Matrix> {
    if a.is_vector() && b.is_vector() {
        if a.len() != b.len() {
            return Err(Error::ShapeMismatch {
                op: "inner",
                expected: a.size(),
                got: b.size(),
            });
        }
        let s: Complex = a.iter().zip(b.iter()).map(|(x, y)| x.dot(*y)).sum();
        return Matrix::from_vec(1, 1, vec![s]);
    }
    if a.size() != b.size() {
        return Err(Error::ShapeMismatch {
            op: "inner",
            expected: a.size(),
            got: b.size(),
        });
    }
    let (rows, cols) = a.size();
    let cell = |r: usize, c: usize| a[(r, c)].dot(b[(r, c)]);
    match dim {
        1 => Matrix::from_vec(
            1,
            cols,
            (0..cols).map(|c| (0..rows).map(|r| cell(r, c)).sum()).collect(),
        ),
        2 => Matrix::from_vec(
            rows,
            1,
            (0..rows).map(|r| (0..cols).map(|c| cell(r, c)).sum()).collect(),
        ),
        _ => Err(Error::invalid("inner", format!("dimension must be 1 or 2, got {dim}"))),
    }
}

/// Vector or matrix `p`-norm.
///
/// | `p` | vector | matrix |
/// |-----|--------|--------|
/// | `1` | `Σ\|x\|` | largest column sum |
/// | `2` | Euclidean | largest singular value |
/// | `∞` | `max\|x\|` | largest row sum |
/// | `-∞` | `min\|x\|` | largest row sum |
/// | other | `(Σ\|x\|ᵖ)^(1/p)` | unsupported |
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let v = Matrix::new("[3 -4]").unwrap();
/// assert_eq!(linalg::norm(&v, 2.0).unwrap(), 5.0);
/// assert_eq!(linalg::norm(&v, f64::INFINITY).unwrap(), 4.0);
/// let a = Matrix::new("[1 -2; 3 4]").unwrap();
/// assert_eq!(linalg::norm(&a, 1.0).unwrap(), 6.0);
/// assert_eq!(linalg::norm(&a, f64::INFINITY).unwrap(), 7.0);
/// assert!(linalg::norm(&a, 3.0).is_err());
/// ```
pub fn norm(a: &Matrix, p: f64) -> Result<f64> {
    let abs = || a.iter().map(Complex::norm);
    let (rows, cols) = a.size();
    if a.is_vector() {
        return Ok(if p == 1.0 {
            abs().sum()
        } else if p == 2.0 {
            abs().map(|x| x * x).sum::<f64>().sqrt()
        } else if p == f64::INFINITY {
            abs().fold(0.0, f64::max)
        } else if p == f64::NEG_INFINITY {
            abs().fold(f64::INFINITY, f64::min)
        } else {
            abs().map(|x| x.powf(p)).sum::<f64>().powf(p.recip())
        });
    }
    if p == 1.0 {
        Ok((0..cols)
            .map(|c| (0..rows).map(|r| a[(r, c)].norm()).sum::<f64>())
            .fold(0.0, f64::max))
    } else if p == 2.0 {
        let s = svd(a)?.singular_values();
        Ok(s.iter().map(|z| z.re).fold(0.0, f64::max))
    } else if p.is_infinite() {
        Ok((0..rows)
            .map(|r| a.row_slice(r).iter().map(Complex::norm).sum::<f64>())
            .fold(0.0, f64::max))
    } else {
        Err(Error::invalid(
            "norm",
            format!("order {p} is only defined for vectors"),
        ))
    }
}

/// Condition number in the `p`-norm.
///
/// For `p = 2` the zero matrix is `∞`, vectors and unitary matrices are `1`,
/// and anything else is the ratio of the extreme singular values. Other
/// orders use `‖A‖ₚ·‖A⁺‖ₚ`.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// assert_eq!(linalg::cond(&Matrix::zeros(2, 2), 2.0).unwrap(), f64::INFINITY);
/// assert_eq!(linalg::cond(&Matrix::eye(3), 2.0).unwrap(), 1.0);
/// let c = linalg::cond(&Matrix::new("[2 0; 0 0.5]").unwrap(), 2.0).unwrap();
/// assert!((c - 4.0).abs() < 1e-12);
/// ```
pub fn cond(a: &Matrix, p: f64) -> Result<f64> {
    if p == 2.0 {
        if a.is_zeros() {
            return Ok(f64::INFINITY);
        }
        if a.is_vector() || a.is_unitary() {
            return Ok(1.0);
        }
        let s = svd(a)?.singular_values();
        let max = s.iter().map(|z| z.re).fold(0.0, f64::max);
        let min = s.iter().map(|z| z.re).fold(f64::INFINITY, f64::min);
        return Ok(max / min);
    }
    Ok(norm(a, p)? * norm(&pinv(a)?, p)?)
}

/// Reciprocal condition number `1 / cond(A, 1)`.
pub fn rcond(a: &Matrix) -> Result<f64> {
    Ok(cond(a, 1.0)?.recip())
}

/// Sum of the leading diagonal; any shape.
pub fn trace(a: &Matrix) -> Complex {
    (0..a.rows().min(a.cols())).map(|i| a[(i, i)]).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::test_util::m;

    #[test]
    fn inner_shapes() {
        assert!(inner(&m("2i"), &m("3"), 1).unwrap().equals(&m("-6i")));
        let a = m("[1 2; 3 4]");
        assert!(inner(&a, &a, 2).unwrap().equals(&m("[5; 25]")));
        assert!(inner(&a, &a, 3).is_err());
        assert!(inner(&a, &m("[1 2 3; 4 5 6]"), 1).is_err());
        assert!(inner(&m("[1 2]"), &m("[1 2 3]"), 1).is_err());
    }

    #[test]
    fn vector_norms() {
        let v = m("[3; 4i]");
        assert_eq!(norm(&v, 1.0).unwrap(), 7.0);
        assert_eq!(norm(&v, 2.0).unwrap(), 5.0);
        assert_eq!(norm(&v, f64::NEG_INFINITY).unwrap(), 3.0);
        let p3 = norm(&m("[1 1]"), 3.0).unwrap();
        assert!((p3 - 2.0_f64.powf(1.0 / 3.0)).abs() < 1e-15);
    }

    #[test]
    fn matrix_two_norm_is_largest_singular_value() {
        let a = m("[3 0; 0 -7]");
        assert!((norm(&a, 2.0).unwrap() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn condition_numbers() {
        let s = 0.5_f64.sqrt();
        let rot = Matrix::from_vec(2, 2, vec![s.into(), (-s).into(), s.into(), s.into()]).unwrap();
        assert_eq!(cond(&rot, 2.0).unwrap(), 1.0);
        assert_eq!(cond(&m("[1 2 3]"), 2.0).unwrap(), 1.0);
        let a = m("[4 0; 0 1]");
        assert!((cond(&a, 1.0).unwrap() - 4.0).abs() < 1e-12);
        assert!((rcond(&a).unwrap() - 0.25).abs() < 1e-12);
        assert!(cond(&m("[1 2; 2 4]"), 2.0).unwrap().is_infinite());
    }

    #[test]
    fn trace_of_rectangle() {
        assert_eq!(trace(&m("[1 2 3; 4 5 6]")), Complex::from(6.0));
        assert_eq!(trace(&m("[1+i 0; 0 2]")), Complex::new(3.0, 1.0));
    }
}
