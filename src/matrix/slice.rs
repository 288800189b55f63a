use core::ops::{Range, RangeFull, RangeInclusive};

use crate::complex::parse::ElementParser;
use crate::{Complex, Error, Result};

use super::{Matrix, MatrixBuilder};

/// Row or column selection for [`Matrix::get_matrix`] and
/// [`Matrix::set_matrix`].
///
/// Index lists are taken in the order given, so they can permute or repeat
/// rows and columns.
///
/// ```
/// use zmatrix::{Matrix, Selector};
///
/// let m = Matrix::new("[1 2 3; 4 5 6; 7 8 9]").unwrap();
/// let s = m.get_matrix(vec![2_usize, 0], ..).unwrap();
/// assert!(s.equals(&Matrix::new("[7 8 9; 1 2 3]").unwrap()));
///
/// let corner = m.get_matrix(Selector::parse("1:2").unwrap(), 1..3_usize).unwrap();
/// assert!(corner.equals(&Matrix::new("[5 6; 8 9]").unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selector {
    /// Every index, in order.
    #[default]
    All,
    Index(usize),
    Indices(Vec<usize>),
}

impl Selector {
    /// Parse `":"`, a single index, a range such as `"0:2:6"`, or a list
    /// such as `"[0 2]"`.
    pub fn parse(text: &str) -> Result<Self> {
        let body = text.trim();
        if body == ":" {
            return Ok(Selector::All);
        }
        let stripped: String = body
            .chars()
            .filter(|&c| c != '[' && c != ']')
            .collect::<String>()
            .to_lowercase();
        let values = ElementParser::new(&stripped)?.row()?;
        if values.is_empty() {
            return Err(Error::parse(text, "empty selector"));
        }
        let indices = values
            .into_iter()
            .map(|z| to_index(text, z))
            .collect::<Result<Vec<_>>>()?;
        Ok(Selector::Indices(indices))
    }

    fn resolve(&self, len: usize) -> Result<Vec<usize>> {
        let indices = match self {
            Selector::All => return Ok((0..len).collect()),
            Selector::Index(i) => vec![*i],
            Selector::Indices(v) => v.clone(),
        };
        match indices.iter().find(|&&i| i >= len) {
            Some(&index) => Err(Error::IndexOutOfRange { index, len }),
            None if indices.is_empty() => Err(Error::Empty),
            None => Ok(indices),
        }
    }
}

fn to_index(text: &str, z: Complex) -> Result<usize> {
    if !z.is_real() || !z.re.is_finite() || z.re < 0.0 {
        return Err(Error::parse(text, format!("{z} is not an index")));
    }
    Ok(z.re.trunc() as usize)
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self {
        Selector::Index(i)
    }
}

impl From<Vec<usize>> for Selector {
    fn from(v: Vec<usize>) -> Self {
        Selector::Indices(v)
    }
}

impl From<&[usize]> for Selector {
    fn from(v: &[usize]) -> Self {
        Selector::Indices(v.to_vec())
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Selector::All
    }
}

impl From<Range<usize>> for Selector {
    fn from(r: Range<usize>) -> Self {
        Selector::Indices(r.collect())
    }
}

impl From<RangeInclusive<usize>> for Selector {
    fn from(r: RangeInclusive<usize>) -> Self {
        Selector::Indices(r.collect())
    }
}

/// A row or column vector of non-negative integer indices.
impl TryFrom<&Matrix> for Selector {
    type Error = Error;

    fn try_from(m: &Matrix) -> Result<Self> {
        if !m.is_vector() {
            return Err(Error::invalid("selector", "index matrix must be a vector"));
        }
        let text = m.to_one_line_string();
        let indices = m
            .iter()
            .map(|&z| to_index(&text, z))
            .collect::<Result<Vec<_>>>()?;
        Ok(Selector::Indices(indices))
    }
}

impl Matrix {
    /// Copy out the sub-matrix at the selected rows and columns.
    pub fn get_matrix(&self, rows: impl Into<Selector>, cols: impl Into<Selector>) -> Result<Matrix> {
        let rows = rows.into().resolve(self.nrows)?;
        let cols = cols.into().resolve(self.ncols)?;
        let mut y = MatrixBuilder::zeros(rows.len(), cols.len());
        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                y.set(i, j, self[(r, c)]);
            }
        }
        Ok(y.build())
    }

    /// Copy of `self` with the selected cells overwritten by `replacement`,
    /// which is tiled when smaller than the selection.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let m = Matrix::zeros(3, 3);
    /// let y = m.set_matrix(.., 1_usize, &Matrix::new("[7; 8; 9]").unwrap()).unwrap();
    /// assert!(y.equals(&Matrix::new("[0 7 0; 0 8 0; 0 9 0]").unwrap()));
    /// ```
    pub fn set_matrix(
        &self,
        rows: impl Into<Selector>,
        cols: impl Into<Selector>,
        replacement: &Matrix,
    ) -> Result<Matrix> {
        let rows = rows.into().resolve(self.nrows)?;
        let cols = cols.into().resolve(self.ncols)?;
        let mut y = MatrixBuilder::from_matrix(self);
        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                y.set(r, c, replacement[(i % replacement.nrows, j % replacement.ncols)]);
            }
        }
        Ok(y.build())
    }
}
