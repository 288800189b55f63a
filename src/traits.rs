use crate::{Complex, Matrix, Result};

/// Conversion into a [`Complex`] scalar.
///
/// Implemented for the finite set of inputs the crate accepts: `Complex`,
/// the primitive numbers, `(re, im)` tuples, literal strings (`"3+4i"`),
/// [`NumericValue`](crate::NumericValue), and 1×1 matrices. Anything else is
/// rejected at compile time.
///
/// ```
/// use zmatrix::{Complex, IntoComplex};
///
/// assert_eq!(3.0_f64.into_complex().unwrap(), Complex::new(3.0, 0.0));
/// assert_eq!("1-2j".into_complex().unwrap(), Complex::new(1.0, -2.0));
/// assert!("1+".into_complex().is_err());
/// ```
pub trait IntoComplex {
    fn into_complex(self) -> Result<Complex>;
}

/// Conversion into a [`Matrix`].
///
/// Scalars become 1×1 matrices, flat sequences become row vectors, nested
/// sequences become rows, and strings go through the literal grammar
/// (`"[1 2; 3 4]"`, `"[1:2:9]'"`).
///
/// ```
/// use zmatrix::{IntoMatrix, Matrix};
///
/// let a = [[1.0_f64, 2.0], [3.0, 4.0]].into_matrix().unwrap();
/// let b = "[1 2; 3 4]".into_matrix().unwrap();
/// assert!(a.equals(&b));
/// ```
pub trait IntoMatrix {
    fn into_matrix(self) -> Result<Matrix>;
}

/// Read-only element access for the engine kernels.
///
/// Lets the same pivot searches and sweeps run over the immutable
/// [`Matrix`] and the crate's private working buffer.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable element access for in-place kernels.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Swap two rows in place.
    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = *self.get(a, j);
            *self.get_mut(a, j) = *self.get(b, j);
            *self.get_mut(b, j) = tmp;
        }
    }
}
