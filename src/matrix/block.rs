use crate::{Complex, Error, Result};

use super::{Matrix, MatrixBuilder};

// ── Structural operations ───────────────────────────────────────────
//
// Each one copies into a builder, applies the in-place primitive and
// returns the finished matrix; `self` is never touched.

impl Matrix {
    fn restructure(&self, f: impl FnOnce(&mut MatrixBuilder) -> Result<()>) -> Result<Matrix> {
        let mut b = MatrixBuilder::from_matrix(self);
        f(&mut b)?;
        Ok(b.build())
    }

    /// Copy with new extents; the overlapping block is kept and new cells
    /// are zero.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let m = Matrix::new("[1 2; 3 4]").unwrap();
    /// let r = m.resize(3, 1).unwrap();
    /// assert!(r.equals(&Matrix::new("[1; 3; 0]").unwrap()));
    /// ```
    pub fn resize(&self, nrows: usize, ncols: usize) -> Result<Matrix> {
        self.restructure(|b| b.resize(nrows, ncols))
    }

    /// Rotate clockwise by `count` quarter turns. Negative counts rotate
    /// counter-clockwise.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let m = Matrix::new("[1 2; 3 4]").unwrap();
    /// assert!(m.rot90(1).equals(&Matrix::new("[3 1; 4 2]").unwrap()));
    /// assert!(m.rot90(-1).equals(&m.rot90(3)));
    /// ```
    pub fn rot90(&self, count: i64) -> Matrix {
        let mut b = MatrixBuilder::from_matrix(self);
        b.rot90(count);
        b.build()
    }

    pub fn delete_row(&self, row: usize) -> Result<Matrix> {
        self.restructure(|b| b.delete_row(row))
    }

    pub fn delete_column(&self, col: usize) -> Result<Matrix> {
        self.restructure(|b| b.delete_column(col))
    }

    pub fn exchange_row(&self, a: usize, b: usize) -> Result<Matrix> {
        self.restructure(|m| m.exchange_row(a, b))
    }

    pub fn exchange_column(&self, a: usize, b: usize) -> Result<Matrix> {
        self.restructure(|m| m.exchange_column(a, b))
    }

    /// `[self right]`.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let a = Matrix::new("[1; 2]").unwrap();
    /// let y = a.concat_right(&Matrix::new("[3 4; 5 6]").unwrap()).unwrap();
    /// assert!(y.equals(&Matrix::new("[1 3 4; 2 5 6]").unwrap()));
    /// ```
    pub fn concat_right(&self, right: &Matrix) -> Result<Matrix> {
        self.restructure(|b| b.concat_right(right))
    }

    /// `[self; bottom]`.
    pub fn concat_bottom(&self, bottom: &Matrix) -> Result<Matrix> {
        self.restructure(|b| b.concat_bottom(bottom))
    }

    /// Reinterpret the row-major element order with new extents.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let m = Matrix::new("[1 2 3 4 5 6]").unwrap();
    /// assert!(m.reshape(2, 3).unwrap().equals(&Matrix::new("[1 2 3; 4 5 6]").unwrap()));
    /// assert!(m.reshape(4, 2).is_err());
    /// ```
    pub fn reshape(&self, nrows: usize, ncols: usize) -> Result<Matrix> {
        if nrows * ncols != self.data.len() || nrows == 0 {
            return Err(Error::invalid(
                "reshape",
                format!(
                    "cannot reshape {}x{} into {nrows}x{ncols}",
                    self.nrows, self.ncols
                ),
            ));
        }
        Ok(Matrix::from_parts(nrows, ncols, self.data.clone()))
    }

    /// A vector becomes the diagonal of a square matrix; any other matrix
    /// yields its leading diagonal as a column.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let d = Matrix::new("[1 2]").unwrap().diag();
    /// assert!(d.equals(&Matrix::new("[1 0; 0 2]").unwrap()));
    /// assert!(d.diag().equals(&Matrix::new("[1; 2]").unwrap()));
    /// ```
    pub fn diag(&self) -> Matrix {
        if self.is_vector() && !self.is_scalar() {
            let n = self.data.len();
            let mut b = MatrixBuilder::zeros(n, n);
            for (i, &z) in self.data.iter().enumerate() {
                b.set(i, i, z);
            }
            b.build()
        } else {
            let n = self.nrows.min(self.ncols);
            Matrix::from_parts(n, 1, (0..n).map(|i| self[(i, i)]).collect())
        }
    }

    /// Clamp every element between `min` and `max`, each of which is either
    /// 1×1 or the same shape as `self`.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let m = Matrix::new("[-3 0.5 7]").unwrap();
    /// let lo = Matrix::new("0").unwrap();
    /// let hi = Matrix::new("[1 1 5]").unwrap();
    /// assert!(m.clip(&lo, &hi).unwrap().equals(&Matrix::new("[0 0.5 5]").unwrap()));
    /// ```
    pub fn clip(&self, min: &Matrix, max: &Matrix) -> Result<Matrix> {
        for bound in [min, max] {
            if !bound.is_scalar() && bound.size() != self.size() {
                return Err(Error::ShapeMismatch {
                    op: "clip",
                    expected: self.size(),
                    got: bound.size(),
                });
            }
        }
        let pick = |m: &Matrix, i: usize| -> Complex {
            if m.is_scalar() {
                m.data[0]
            } else {
                m.data[i]
            }
        };
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &z)| z.clip(pick(min, i), pick(max, i)))
            .collect::<Result<Vec<_>>>()?;
        Ok(Matrix::from_parts(self.nrows, self.ncols, data))
    }
}
