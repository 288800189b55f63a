use crate::traits::{MatrixMut, MatrixRef};
use crate::{Complex, Error, Result};

use super::Matrix;

/// Mutable row-major working buffer.
///
/// Every structural operation and every in-place kernel runs on one of these
/// and finishes with [`build`](MatrixBuilder::build), so a [`Matrix`] handed
/// out to callers is never modified afterwards.
#[derive(Debug, Clone)]
pub(crate) struct MatrixBuilder {
    data: Vec<Complex>,
    nrows: usize,
    ncols: usize,
}

impl MatrixBuilder {
    pub(crate) fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![Complex::ZERO; nrows * ncols],
            nrows,
            ncols,
        }
    }

    pub(crate) fn eye(n: usize) -> Self {
        let mut b = Self::zeros(n, n);
        for i in 0..n {
            b.data[i * n + i] = Complex::ONE;
        }
        b
    }

    pub(crate) fn from_matrix(m: &Matrix) -> Self {
        Self {
            data: m.as_slice().to_vec(),
            nrows: m.rows(),
            ncols: m.cols(),
        }
    }

    #[inline]
    pub(crate) fn size(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: Complex) {
        self.data[row * self.ncols + col] = value;
    }

    /// Finalize into an immutable matrix.
    pub(crate) fn build(self) -> Matrix {
        Matrix::from_parts(self.nrows, self.ncols, self.data)
    }

    /// Change the extents, keeping the overlapping block and zero-filling
    /// anything new.
    pub(crate) fn resize(&mut self, nrows: usize, ncols: usize) -> Result<()> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::invalid("resize", format!("cannot resize to {nrows}x{ncols}")));
        }
        if (nrows, ncols) == self.size() {
            return Ok(());
        }
        let mut data = vec![Complex::ZERO; nrows * ncols];
        for r in 0..nrows.min(self.nrows) {
            for c in 0..ncols.min(self.ncols) {
                data[r * ncols + c] = self.data[r * self.ncols + c];
            }
        }
        self.data = data;
        self.nrows = nrows;
        self.ncols = ncols;
        Ok(())
    }

    /// Rotate clockwise by `count` quarter turns; negative counts turn the
    /// other way.
    pub(crate) fn rot90(&mut self, count: i64) {
        let (rows, cols) = self.size();
        let x = &self.data;
        let (data, nrows, ncols) = match count.rem_euclid(4) {
            0 => return,
            1 => {
                let mut y = Vec::with_capacity(rows * cols);
                for c in 0..cols {
                    for r in 0..rows {
                        y.push(x[(rows - 1 - r) * cols + c]);
                    }
                }
                (y, cols, rows)
            }
            2 => (x.iter().rev().copied().collect(), rows, cols),
            _ => {
                let mut y = Vec::with_capacity(rows * cols);
                for c in 0..cols {
                    for r in 0..rows {
                        y.push(x[r * cols + (cols - 1 - c)]);
                    }
                }
                (y, cols, rows)
            }
        };
        self.data = data;
        self.nrows = nrows;
        self.ncols = ncols;
    }

    pub(crate) fn delete_row(&mut self, row: usize) -> Result<()> {
        if row >= self.nrows {
            return Err(Error::IndexOutOfRange {
                index: row,
                len: self.nrows,
            });
        }
        if self.nrows == 1 {
            return Err(Error::invalid("delete_row", "cannot delete the only row"));
        }
        let start = row * self.ncols;
        self.data.drain(start..start + self.ncols);
        self.nrows -= 1;
        Ok(())
    }

    pub(crate) fn delete_column(&mut self, col: usize) -> Result<()> {
        if col >= self.ncols {
            return Err(Error::IndexOutOfRange {
                index: col,
                len: self.ncols,
            });
        }
        if self.ncols == 1 {
            return Err(Error::invalid("delete_column", "cannot delete the only column"));
        }
        let ncols = self.ncols;
        let mut i = 0;
        self.data.retain(|_| {
            let keep = i % ncols != col;
            i += 1;
            keep
        });
        self.ncols -= 1;
        Ok(())
    }

    pub(crate) fn exchange_row(&mut self, a: usize, b: usize) -> Result<()> {
        for i in [a, b] {
            if i >= self.nrows {
                return Err(Error::IndexOutOfRange {
                    index: i,
                    len: self.nrows,
                });
            }
        }
        self.swap_rows(a, b);
        Ok(())
    }

    pub(crate) fn exchange_column(&mut self, a: usize, b: usize) -> Result<()> {
        for i in [a, b] {
            if i >= self.ncols {
                return Err(Error::IndexOutOfRange {
                    index: i,
                    len: self.ncols,
                });
            }
        }
        if a != b {
            for r in 0..self.nrows {
                self.data.swap(r * self.ncols + a, r * self.ncols + b);
            }
        }
        Ok(())
    }

    /// Append `right`'s columns; row counts must agree.
    pub(crate) fn concat_right(&mut self, right: &Matrix) -> Result<()> {
        if right.rows() != self.nrows {
            return Err(Error::ShapeMismatch {
                op: "concat_right",
                expected: (self.nrows, right.cols()),
                got: right.size(),
            });
        }
        let ncols = self.ncols + right.cols();
        let mut data = Vec::with_capacity(self.nrows * ncols);
        for r in 0..self.nrows {
            data.extend_from_slice(&self.data[r * self.ncols..(r + 1) * self.ncols]);
            data.extend_from_slice(right.row_slice(r));
        }
        self.data = data;
        self.ncols = ncols;
        Ok(())
    }

    /// Append `bottom`'s rows; column counts must agree.
    pub(crate) fn concat_bottom(&mut self, bottom: &Matrix) -> Result<()> {
        if bottom.cols() != self.ncols {
            return Err(Error::ShapeMismatch {
                op: "concat_bottom",
                expected: (bottom.rows(), self.ncols),
                got: bottom.size(),
            });
        }
        self.data.extend_from_slice(bottom.as_slice());
        self.nrows += bottom.rows();
        Ok(())
    }
}

impl MatrixRef<Complex> for MatrixBuilder {
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
        &self.data[row * self.ncols + col]
    }
}

impl MatrixMut<Complex> for MatrixBuilder {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut Complex {
        &mut self.data[row * self.ncols + col]
    }
}
