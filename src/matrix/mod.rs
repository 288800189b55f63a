mod block;
mod builder;
mod convert;
mod elementwise;
mod format;
mod linalg;
mod ops;
mod parse;
mod predicates;
mod slice;
mod vector;

pub use format::FormatOptions;
pub use slice::Selector;
pub use vector::{SortOrder, VectorMode};

pub(crate) use builder::MatrixBuilder;

use core::fmt;
use core::ops::Index;
use std::sync::OnceLock;

use rand::Rng;

use crate::traits::{IntoMatrix, MatrixRef};
use crate::{Complex, Error, NumericValue, Result};

/// Dense immutable matrix of [`Complex`] values.
///
/// Row-major `Vec<Complex>` storage with at least one row and one column.
/// Every method returns a new value; the receiver is never modified. A 1×1
/// matrix stands in for a scalar wherever one is accepted.
///
/// # Examples
///
/// ```
/// use zmatrix::{Complex, Matrix};
///
/// let a = Matrix::new("[1 2; 3 4]").unwrap();
/// assert_eq!(a[(0, 1)], Complex::from(2.0));
/// assert_eq!(a.size(), (2, 2));
///
/// let b = Matrix::new([[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// assert!(a.equals(&b));
///
/// let c = Matrix::new("[1:4]'").unwrap();
/// assert_eq!(c.size(), (4, 1));
/// ```
#[derive(Clone)]
pub struct Matrix {
    data: Vec<Complex>,
    nrows: usize,
    ncols: usize,
    text: OnceLock<String>,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Build from anything implementing [`IntoMatrix`]: grammar strings,
    /// scalars, flat or nested arrays, or another matrix.
    pub fn new(value: impl IntoMatrix) -> Result<Self> {
        value.into_matrix()
    }

    /// Row-major constructor that does not validate; callers guarantee
    /// `data.len() == nrows * ncols` with both dimensions non-zero.
    pub(crate) fn from_parts(nrows: usize, ncols: usize, data: Vec<Complex>) -> Self {
        debug_assert!(nrows > 0 && ncols > 0 && data.len() == nrows * ncols);
        Self {
            data,
            nrows,
            ncols,
            text: OnceLock::new(),
        }
    }

    /// Build from a row-major element vector.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let m = Matrix::from_vec(2, 2, vec![Complex::ONE; 4]).unwrap();
    /// assert!(m.equals(&Matrix::ones(2, 2)));
    /// assert!(Matrix::from_vec(2, 2, vec![Complex::ONE; 3]).is_err());
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<Complex>) -> Result<Self> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::Empty);
        }
        if data.len() != nrows * ncols {
            return Err(Error::invalid(
                "from_vec",
                format!("{} elements cannot fill {nrows}x{ncols}", data.len()),
            ));
        }
        Ok(Self::from_parts(nrows, ncols, data))
    }

    /// Build from explicit rows, which must be non-empty and equally long.
    pub fn from_rows(rows: Vec<Vec<Complex>>) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 {
            return Err(Error::Empty);
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                return Err(Error::RaggedRows {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self::from_parts(nrows, ncols, data))
    }

    /// `nrows x ncols` matrix with every element set to `value`.
    ///
    /// Panics if either dimension is zero.
    pub fn fill(nrows: usize, ncols: usize, value: impl Into<Complex>) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix dimensions must be non-zero");
        Self::from_parts(nrows, ncols, vec![value.into(); nrows * ncols])
    }

    /// Panics if either dimension is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, Complex::ZERO)
    }

    /// Panics if either dimension is zero.
    pub fn ones(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, Complex::ONE)
    }

    /// `n x n` identity.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let id = Matrix::eye(3);
    /// assert!(id.is_identity());
    /// ```
    pub fn eye(n: usize) -> Self {
        Self::eye_rect(n, n)
    }

    /// Rectangular identity: ones on the leading diagonal.
    pub fn eye_rect(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |r, c| if r == c { Complex::ONE } else { Complex::ZERO })
    }

    /// Element `(r, c)` is `f(r, c)`.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let m = Matrix::from_fn(2, 3, |r, c| Complex::from((r * 3 + c) as f64));
    /// assert_eq!(m[(1, 2)], Complex::from(5.0));
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> Complex) -> Self {
        assert!(nrows > 0 && ncols > 0, "matrix dimensions must be non-zero");
        let mut data = Vec::with_capacity(nrows * ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                data.push(f(r, c));
            }
        }
        Self::from_parts(nrows, ncols, data)
    }

    /// Tile `pattern` over an `nrows x ncols` matrix.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let p = Matrix::new("[1 2]").unwrap();
    /// let m = Matrix::memset(&p, 2, 3);
    /// assert!(m.equals(&Matrix::new("[1 2 1; 1 2 1]").unwrap()));
    /// ```
    pub fn memset(pattern: &Matrix, nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |r, c| pattern[(r % pattern.nrows, c % pattern.ncols)])
    }

    /// Row vector `start, start+step, ...` stopping before `stop`.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let m = Matrix::arange(0.0, 1.0, 0.25).unwrap();
    /// assert_eq!(m.size(), (1, 4));
    /// assert_eq!(m[(0, 3)], Complex::from(0.75));
    /// ```
    pub fn arange(
        start: impl Into<Complex>,
        stop: impl Into<Complex>,
        step: impl Into<Complex>,
    ) -> Result<Self> {
        let values = crate::complex::parse::interpolate(start.into(), step.into(), stop.into(), false)?;
        Ok(Self::from_parts(1, values.len(), values))
    }

    /// Uniform `[0, 1)` draws.
    pub fn rand<R: Rng + ?Sized>(nrows: usize, ncols: usize, rng: &mut R) -> Self {
        Self::from_fn(nrows, ncols, |_, _| Complex::rand(rng))
    }

    /// Standard normal draws.
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use zmatrix::Matrix;
    ///
    /// let a = Matrix::randn(3, 3, &mut ChaCha8Rng::seed_from_u64(1));
    /// let b = Matrix::randn(3, 3, &mut ChaCha8Rng::seed_from_u64(1));
    /// assert!(a.equals(&b));
    /// ```
    pub fn randn<R: Rng + ?Sized>(nrows: usize, ncols: usize, rng: &mut R) -> Self {
        Self::from_fn(nrows, ncols, |_, _| Complex::randn(rng))
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix {
    #[inline]
    pub fn rows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.ncols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// The larger dimension.
    #[inline]
    pub fn len(&self) -> usize {
        self.nrows.max(self.ncols)
    }

    /// Always `false`; a matrix has at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Checked element access.
    pub fn get(&self, row: usize, col: usize) -> Result<Complex> {
        if row >= self.nrows {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.nrows,
            });
        }
        if col >= self.ncols {
            return Err(Error::IndexOutOfRange {
                index: col,
                len: self.ncols,
            });
        }
        Ok(self.data[row * self.ncols + col])
    }

    /// Element `pos` of a row or column vector (row-major for matrices).
    pub fn get_complex(&self, pos: usize) -> Result<Complex> {
        self.data.get(pos).copied().ok_or(Error::IndexOutOfRange {
            index: pos,
            len: self.data.len(),
        })
    }

    /// The single element of a 1×1 matrix.
    pub fn scalar(&self) -> Result<Complex> {
        if self.is_scalar() {
            Ok(self.data[0])
        } else {
            Err(Error::ShapeMismatch {
                op: "scalar",
                expected: (1, 1),
                got: self.size(),
            })
        }
    }

    /// Row-major view of the elements.
    #[inline]
    pub fn as_slice(&self) -> &[Complex] {
        &self.data
    }

    /// Row-major element iterator.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, Complex> {
        self.data.iter()
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[Complex] {
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Complex>> {
        self.data.chunks(self.ncols).map(<[Complex]>::to_vec).collect()
    }

    /// Scalar for 1×1 matrices, tensor otherwise.
    pub fn into_value(self) -> NumericValue {
        if self.is_scalar() {
            NumericValue::Scalar(self.data[0])
        } else {
            NumericValue::Tensor(self)
        }
    }

    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.nrows == 1 && self.ncols == 1
    }

    #[inline]
    pub fn is_row(&self) -> bool {
        self.nrows == 1
    }

    #[inline]
    pub fn is_column(&self) -> bool {
        self.ncols == 1
    }

    #[inline]
    pub fn is_vector(&self) -> bool {
        self.nrows == 1 || self.ncols == 1
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    pub(crate) fn into_data(self) -> Vec<Complex> {
        self.data
    }
}

// ── Equality ────────────────────────────────────────────────────────

impl Matrix {
    /// Same shape and element-wise [`Complex::equals`].
    #[inline]
    pub fn equals(&self, other: &Matrix) -> bool {
        self.equals_tol(other, Complex::EPSILON)
    }

    pub fn equals_tol(&self, other: &Matrix, tol: f64) -> bool {
        self.size() == other.size()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.equals_tol(b, tol))
    }
}

/// Exact element equality; the cached text does not participate.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.size() == other.size() && self.data == other.data
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.nrows)
            .field("cols", &self.ncols)
            .field("data", &self.data)
            .finish()
    }
}

// ── Indexing ────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Complex;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Complex {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols
        );
        &self.data[row * self.ncols + col]
    }
}

impl MatrixRef<Complex> for Matrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &Complex {
        &self[(row, col)]
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Complex;
    type IntoIter = core::slice::Iter<'a, Complex>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
