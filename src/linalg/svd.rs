use crate::linalg::{eig, qr, rank};
use crate::matrix::MatrixBuilder;
use crate::traits::MatrixMut;
use crate::{Complex, Error, Matrix, Result};

/// `U·S·Vᵀ = A` from [`svd`].
#[derive(Debug, Clone, PartialEq)]
pub struct Svd {
    /// Orthogonal, `rows × rows`.
    pub u: Matrix,
    /// `rows × cols`, singular values on the diagonal in descending order.
    pub s: Matrix,
    /// Orthogonal, `cols × cols`.
    pub v: Matrix,
}

impl Svd {
    /// Singular values as a column, largest first.
    pub fn singular_values(&self) -> Matrix {
        self.s.diag()
    }
}

/// Singular value decomposition of a real matrix.
///
/// `V` and the squared singular values come from the eigendecomposition of
/// `AᵀA`; singular values past the numerical rank of `A` are set to zero.
/// `U` is recovered as `A·V·S⁻¹` and re-orthonormalized with [`qr`].
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[3 0; 0 -2; 0 0]").unwrap();
/// let f = linalg::svd(&a).unwrap();
/// assert!(f.singular_values().equals_tol(&Matrix::new("[3; 2]").unwrap(), 1e-12));
/// let back = f.u.try_mul(&f.s).unwrap().try_mul(&f.v.transpose()).unwrap();
/// assert!(back.equals_tol(&a, 1e-10));
/// ```
pub fn svd(a: &Matrix) -> Result<Svd> {
    if !a.is_real() {
        return Err(Error::NotReal { op: "svd" });
    }
    let (rows, cols) = a.size();
    let r = rank(a);
    let ata = a.transpose().try_mul(a)?;
    let e = eig(&ata)?;

    let mut s = MatrixBuilder::zeros(rows, cols);
    let inner = rows.min(cols);
    let mut s_inv = MatrixBuilder::zeros(inner, inner);
    for i in 0..r {
        // round-off can leave tiny negative eigenvalues
        let sigma = e.d[(i, i)].re.max(0.0).sqrt();
        *s.get_mut(i, i) = Complex::from(sigma);
        if sigma != 0.0 {
            *s_inv.get_mut(i, i) = Complex::from(sigma.recip());
        }
    }

    let v_r = e.v.resize(cols, inner)?;
    let u = a.try_mul(&v_r)?.try_mul(&s_inv.build())?;
    Ok(Svd {
        u: qr(&u).q,
        s: s.build(),
        v: e.v,
    })
}

/// Moore-Penrose pseudo-inverse `V·S⁺·Uᵀ`; zero singular values stay zero.
///
/// ```
/// use zmatrix::{linalg, Matrix};
///
/// let a = Matrix::new("[1 2; 2 4]").unwrap();
/// let p = linalg::pinv(&a).unwrap();
/// assert!(p.equals_tol(&Matrix::new("[0.04 0.08; 0.08 0.16]").unwrap(), 1e-12));
/// ```
pub fn pinv(a: &Matrix) -> Result<Matrix> {
    let f = svd(a)?;
    let (rows, cols) = a.size();
    let mut s_plus = MatrixBuilder::zeros(cols, rows);
    for i in 0..rows.min(cols) {
        let sigma = f.s[(i, i)];
        if !sigma.is_zero() {
            *s_plus.get_mut(i, i) = sigma.inv();
        }
    }
    f.v.try_mul(&s_plus.build())?.try_mul(&f.u.transpose())
}
