//! Row- and column-wise mapping, reductions and reordering.

use core::cmp::Ordering;

use crate::{Complex, Error, Result};

use super::{Matrix, MatrixBuilder};

/// Which vectors of a matrix [`Matrix::each_vector`] walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VectorMode {
    /// The row itself for a single-row matrix, each column otherwise.
    #[default]
    Auto,
    /// Each row.
    Row,
    /// Each column.
    Column,
    /// Each row, then each column of that result.
    Both,
}

/// Direction for [`Matrix::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascend,
    Descend,
}

/// [`Complex::compare_to`] ordering, so values within epsilon of each other
/// tie. Unordered values (`re + im` is NaN) collect after everything else.
fn ascending(a: &Complex, b: &Complex) -> Ordering {
    let (ka, kb) = (a.re + a.im, b.re + b.im);
    match (ka.is_nan(), kb.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.compare_to(b).unwrap_or_else(|| ka.total_cmp(&kb)),
    }
}

/// Stable top-down merge sort.
///
/// Accepts comparators with non-transitive ties, which `slice::sort_by`
/// may panic on.
fn merge_sort_by<T: Copy>(v: &mut [T], cmp: &impl Fn(&T, &T) -> Ordering) {
    let n = v.len();
    if n < 2 {
        return;
    }
    let mid = n / 2;
    merge_sort_by(&mut v[..mid], cmp);
    merge_sort_by(&mut v[mid..], cmp);

    let mut merged = Vec::with_capacity(n);
    let (mut i, mut j) = (0, mid);
    while i < mid && j < n {
        if cmp(&v[j], &v[i]) == Ordering::Less {
            merged.push(v[j]);
            j += 1;
        } else {
            merged.push(v[i]);
            i += 1;
        }
    }
    merged.extend_from_slice(&v[i..mid]);
    merged.extend_from_slice(&v[j..]);
    v.copy_from_slice(&merged);
}

/// Compensated sum; the running error term is subtracted from each new
/// addend.
fn kahan_sum(data: &[Complex]) -> Complex {
    let mut sum = Complex::ZERO;
    let mut err = Complex::ZERO;
    for &x in data {
        let y = x - err;
        let t = sum + y;
        err = (t - sum) - y;
        sum = t;
    }
    sum
}

fn extreme(data: &[Complex], want: Ordering) -> Complex {
    let mut best = data[0];
    for &x in &data[1..] {
        if x.compare_to(&best) == Some(want) {
            best = x;
        }
    }
    best
}

fn rotate(data: &[Complex], shift: i64) -> Vec<Complex> {
    let n = data.len() as i64;
    let from = (-shift).rem_euclid(n) as usize;
    data[from..].iter().chain(&data[..from]).copied().collect()
}

impl Matrix {
    fn column_vec(&self, c: usize) -> Vec<Complex> {
        (0..self.nrows).map(|r| self.data[r * self.ncols + c]).collect()
    }

    fn each_row(&self, f: &mut impl FnMut(&[Complex]) -> Vec<Complex>) -> Matrix {
        let outputs: Vec<_> = (0..self.nrows).map(|r| f(self.row_slice(r))).collect();
        let width = outputs.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let mut y = MatrixBuilder::zeros(self.nrows, width);
        for (r, out) in outputs.into_iter().enumerate() {
            for (c, z) in out.into_iter().enumerate() {
                y.set(r, c, z);
            }
        }
        y.build()
    }

    fn each_column(&self, f: &mut impl FnMut(&[Complex]) -> Vec<Complex>) -> Matrix {
        let outputs: Vec<_> = (0..self.ncols).map(|c| f(&self.column_vec(c))).collect();
        let height = outputs.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let mut y = MatrixBuilder::zeros(height, self.ncols);
        for (c, out) in outputs.into_iter().enumerate() {
            for (r, z) in out.into_iter().enumerate() {
                y.set(r, c, z);
            }
        }
        y.build()
    }

    /// Map every row and/or column through `f`.
    ///
    /// Outputs may be shorter or longer than their inputs: the result grows
    /// to the longest output and shorter ones are zero-filled.
    ///
    /// ```
    /// use zmatrix::{Matrix, VectorMode};
    ///
    /// let m = Matrix::new("[1 2; 3 4; 5 6]").unwrap();
    /// let firsts = m.each_vector(|v| vec![v[0]], VectorMode::Column);
    /// assert!(firsts.equals(&Matrix::new("[1 2]").unwrap()));
    ///
    /// // ragged outputs are zero-padded
    /// let r = m.each_vector(
    ///     |v| if v[0].re > 2.0 { vec![v[0]] } else { v.to_vec() },
    ///     VectorMode::Row,
    /// );
    /// assert!(r.equals(&Matrix::new("[1 2; 3 0; 5 0]").unwrap()));
    /// ```
    pub fn each_vector(
        &self,
        mut f: impl FnMut(&[Complex]) -> Vec<Complex>,
        mode: VectorMode,
    ) -> Matrix {
        match mode {
            VectorMode::Auto if self.is_row() => self.each_row(&mut f),
            VectorMode::Auto | VectorMode::Column => self.each_column(&mut f),
            VectorMode::Row => self.each_row(&mut f),
            VectorMode::Both => self.each_row(&mut f).each_column(&mut f),
        }
    }

    /// Kahan-compensated sum.
    ///
    /// ```
    /// use zmatrix::{Matrix, VectorMode};
    /// let m = Matrix::new("[1 2; 3 4]").unwrap();
    /// assert!(m.sum(VectorMode::Auto).equals(&Matrix::new("[4 6]").unwrap()));
    /// assert!(m.sum(VectorMode::Row).equals(&Matrix::new("[3; 7]").unwrap()));
    /// assert!(m.sum(VectorMode::Both).equals(&Matrix::new("10").unwrap()));
    /// ```
    pub fn sum(&self, mode: VectorMode) -> Matrix {
        self.each_vector(|v| vec![kahan_sum(v)], mode)
    }

    /// Arithmetic mean over a Kahan-compensated sum.
    pub fn mean(&self, mode: VectorMode) -> Matrix {
        self.each_vector(|v| vec![kahan_sum(v) / v.len() as f64], mode)
    }

    pub fn prod(&self, mode: VectorMode) -> Matrix {
        self.each_vector(|v| vec![v.iter().product()], mode)
    }

    /// Largest element by [`Complex::compare_to`].
    pub fn max(&self, mode: VectorMode) -> Matrix {
        self.each_vector(|v| vec![extreme(v, Ordering::Greater)], mode)
    }

    /// Smallest element by [`Complex::compare_to`].
    pub fn min(&self, mode: VectorMode) -> Matrix {
        self.each_vector(|v| vec![extreme(v, Ordering::Less)], mode)
    }

    /// Stable sort of each vector by [`Complex::compare_to`]; elements
    /// within epsilon of each other keep their input order. NaN keys sort
    /// after `+∞` when ascending and before everything when descending.
    ///
    /// ```
    /// use zmatrix::{Matrix, SortOrder, VectorMode};
    /// let m = Matrix::new("[3 1 2]").unwrap();
    /// assert!(m.sort(SortOrder::Descend, VectorMode::Auto).equals(&Matrix::new("[3 2 1]").unwrap()));
    /// ```
    pub fn sort(&self, order: SortOrder, mode: VectorMode) -> Matrix {
        self.each_vector(
            |v| {
                let mut v = v.to_vec();
                match order {
                    SortOrder::Ascend => merge_sort_by(&mut v, &ascending),
                    SortOrder::Descend => merge_sort_by(&mut v, &|a, b| ascending(b, a)),
                }
                v
            },
            mode,
        )
    }

    /// Circular shift of each vector by `shift` places (positive moves
    /// elements towards the end).
    ///
    /// ```
    /// use zmatrix::{Matrix, VectorMode};
    /// let m = Matrix::new("[1 2 3 4]").unwrap();
    /// assert!(m.circshift(1, VectorMode::Auto).equals(&Matrix::new("[4 1 2 3]").unwrap()));
    /// assert!(m.circshift(-1, VectorMode::Auto).equals(&Matrix::new("[2 3 4 1]").unwrap()));
    /// ```
    pub fn circshift(&self, shift: i64, mode: VectorMode) -> Matrix {
        self.each_vector(|v| rotate(v, shift), mode)
    }

    /// Alias of [`circshift`](Matrix::circshift).
    pub fn roll(&self, shift: i64, mode: VectorMode) -> Matrix {
        self.circshift(shift, mode)
    }

    /// Reverse each vector.
    pub fn flip(&self, mode: VectorMode) -> Matrix {
        self.each_vector(|v| v.iter().rev().copied().collect(), mode)
    }

    /// Reverse the column order.
    pub fn fliplr(&self) -> Matrix {
        self.flip(VectorMode::Row)
    }

    /// Reverse the row order.
    pub fn flipud(&self) -> Matrix {
        self.flip(VectorMode::Column)
    }

    /// Reorder by a key vector, stably.
    ///
    /// A column key with one entry per row permutes rows; a row key with one
    /// entry per column permutes columns.
    ///
    /// ```
    /// use zmatrix::Matrix;
    /// let m = Matrix::new("[1 2; 3 4; 5 6]").unwrap();
    /// let keys = Matrix::new("[3; 1; 2]").unwrap();
    /// let sorted = m.indexsort(&keys).unwrap();
    /// assert!(sorted.equals(&Matrix::new("[3 4; 5 6; 1 2]").unwrap()));
    /// ```
    pub fn indexsort(&self, keys: &Matrix) -> Result<Matrix> {
        if !keys.is_vector() {
            return Err(Error::invalid("indexsort", "keys must be a row or column vector"));
        }
        let by_rows = keys.is_column();
        let (target, len) = if by_rows {
            (self.clone(), self.nrows)
        } else {
            (self.transpose(), self.ncols)
        };
        if keys.data.len() != len {
            return Err(Error::ShapeMismatch {
                op: "indexsort",
                expected: if by_rows { (len, 1) } else { (1, len) },
                got: keys.size(),
            });
        }
        let mut order: Vec<usize> = (0..len).collect();
        merge_sort_by(&mut order, &|&a, &b| ascending(&keys.data[a], &keys.data[b]));

        let width = target.ncols;
        let mut data = Vec::with_capacity(target.data.len());
        for &i in &order {
            data.extend_from_slice(target.row_slice(i));
        }
        let sorted = Matrix::from_parts(len, width, data);
        Ok(if by_rows { sorted } else { sorted.transpose() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(s: &str) -> Matrix {
        Matrix::new(s).unwrap()
    }

    #[test]
    fn auto_mode_follows_shape() {
        let row = m("[1 2 3]");
        assert!(row.sum(VectorMode::Auto).equals(&m("6")));
        let col = m("[1; 2; 3]");
        assert!(col.sum(VectorMode::Auto).equals(&m("6")));
        assert!(row.sum(VectorMode::Column).equals(&m("[1 2 3]")));
    }

    #[test]
    fn growth_zero_fills() {
        let a = m("[1 2; 3 4]");
        let y = a.each_vector(|v| v.iter().chain(v).copied().collect(), VectorMode::Column);
        assert!(y.equals(&m("[1 2; 3 4; 1 2; 3 4]")));
        let y = a.each_vector(|_| Vec::new(), VectorMode::Row);
        assert!(y.equals(&m("[0; 0]")));
    }

    #[test]
    fn kahan_keeps_small_terms() {
        let mut v = vec![Complex::from(1.0)];
        v.extend(std::iter::repeat(Complex::from(1e-16)).take(10_000));
        let s = kahan_sum(&v);
        assert!((s.re - (1.0 + 1e-12)).abs() < 1e-15, "{}", s.re);
    }

    #[test]
    fn mean_prod_extremes() {
        let a = m("[1 5; 3 -2]");
        assert!(a.mean(VectorMode::Auto).equals(&m("[2 1.5]")));
        assert!(a.prod(VectorMode::Row).equals(&m("[5; -6]")));
        assert!(a.max(VectorMode::Both).equals(&m("5")));
        assert!(a.min(VectorMode::Both).equals(&m("-2")));
        // ordering on re + im
        assert!(m("[3 1+3i]").max(VectorMode::Auto).equals(&m("1+3i")));
    }

    #[test]
    fn sort_with_nan() {
        let a = Matrix::from_vec(
            1,
            4,
            vec![Complex::from(2.0), Complex::NAN, Complex::from(-1.0), Complex::POSITIVE_INFINITY],
        )
        .unwrap();
        let s = a.sort(SortOrder::Ascend, VectorMode::Auto);
        assert_eq!(s[(0, 0)], Complex::from(-1.0));
        assert_eq!(s[(0, 2)], Complex::POSITIVE_INFINITY);
        assert!(s[(0, 3)].is_nan());
    }

    #[test]
    fn sort_keeps_epsilon_ties_in_input_order() {
        let a = Complex::from(1.0 + f64::EPSILON);
        let b = Complex::ONE;
        assert_eq!(a.compare_to(&b), Some(Ordering::Equal));
        let v = Matrix::from_vec(1, 3, vec![a, Complex::from(-3.0), b]).unwrap();
        let s = v.sort(SortOrder::Ascend, VectorMode::Auto);
        assert_eq!(s.as_slice(), &[Complex::from(-3.0), a, b]);
        let s = v.sort(SortOrder::Descend, VectorMode::Auto);
        assert_eq!(s.as_slice(), &[a, b, Complex::from(-3.0)]);
    }

    #[test]
    fn sort_orders_by_sum_of_parts() {
        let s = m("[2i 3 1+i -1]").sort(SortOrder::Ascend, VectorMode::Auto);
        assert_eq!(s.as_slice(), m("[-1 2i 1+i 3]").as_slice());
    }

    #[test]
    fn flips_and_shifts() {
        let a = m("[1 2; 3 4]");
        assert!(a.fliplr().equals(&m("[2 1; 4 3]")));
        assert!(a.flipud().equals(&m("[3 4; 1 2]")));
        assert!(a.roll(1, VectorMode::Column).equals(&a.flipud()));
        assert!(a.circshift(5, VectorMode::Row).equals(&a.fliplr()));
    }

    #[test]
    fn indexsort_columns_and_errors() {
        let a = m("[1 2 3; 4 5 6]");
        let s = a.indexsort(&m("[2 2 1]")).unwrap();
        assert!(s.equals(&m("[3 1 2; 6 4 5]")));
        assert!(a.indexsort(&m("[1 2]")).is_err());
        assert!(a.indexsort(&Matrix::eye(2)).is_err());
    }
}
