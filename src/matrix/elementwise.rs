use crate::{Complex, Result};

use super::Matrix;

impl Matrix {
    /// Apply `f` to every element.
    ///
    /// ```
    /// use zmatrix::{Complex, Matrix};
    /// let m = Matrix::new("[1 4 9]").unwrap();
    /// assert!(m.map(Complex::sqrt).equals(&Matrix::new("[1 2 3]").unwrap()));
    /// ```
    pub fn map(&self, f: impl Fn(Complex) -> Complex) -> Matrix {
        Matrix::from_parts(self.nrows, self.ncols, self.data.iter().map(|&z| f(z)).collect())
    }

    /// Apply `f(value, row, col)` to every element.
    pub fn map_indexed(&self, mut f: impl FnMut(Complex, usize, usize) -> Complex) -> Matrix {
        let ncols = self.ncols;
        let data = self
            .data
            .iter()
            .enumerate()
            .map(|(i, &z)| f(z, i / ncols, i % ncols))
            .collect();
        Matrix::from_parts(self.nrows, self.ncols, data)
    }

    /// Fallible element map; stops at the first error.
    pub fn try_map(&self, f: impl Fn(Complex) -> Result<Complex>) -> Result<Matrix> {
        let data = self.data.iter().map(|&z| f(z)).collect::<Result<_>>()?;
        Ok(Matrix::from_parts(self.nrows, self.ncols, data))
    }

    /// Real parts.
    pub fn real(&self) -> Matrix {
        self.map(|z| Complex::from(z.re))
    }

    /// Imaginary parts, as reals.
    pub fn imag(&self) -> Matrix {
        self.map(|z| Complex::from(z.im))
    }

    /// Element magnitudes.
    pub fn abs(&self) -> Matrix {
        self.map(|z| Complex::from(z.abs()))
    }

    /// Element phase angles.
    pub fn arg(&self) -> Matrix {
        self.map(|z| Complex::from(z.arg()))
    }

    /// Cube root on the given branch of every element.
    pub fn cbrt(&self, branch: usize) -> Matrix {
        self.map(|z| z.cbrt(branch))
    }

    /// Element-wise `atan2(self, x)`, broadcasting; real operands only.
    pub fn atan2(&self, x: &Matrix) -> Result<Matrix> {
        self.try_broadcast(x, "atan2", |y, x| y.atan2(x))
    }

    /// Element-wise `beta(self, y)`, broadcasting.
    pub fn beta(&self, y: &Matrix) -> Result<Matrix> {
        self.broadcast(y, "beta", |a, b| a.beta(b))
    }

    /// Element-wise `nchoosek(self, k)`, broadcasting.
    pub fn nchoosek(&self, k: &Matrix) -> Result<Matrix> {
        self.broadcast(k, "nchoosek", |n, k| n.nchoosek(k))
    }
}

macro_rules! elementwise {
    ($($(#[$doc:meta])* $name:ident),* $(,)?) => {
        impl Matrix {
            $(
                $(#[$doc])*
                pub fn $name(&self) -> Matrix {
                    self.map(Complex::$name)
                }
            )*
        }
    };
}

elementwise!(
    /// Complex conjugate of every element.
    conj,
    sign,
    floor,
    ceil,
    /// Rounds half away from zero.
    round,
    /// Rounds towards zero.
    fix,
    fract,
    square,
    sqrt,
    rsqrt,
    exp,
    expm1,
    /// Principal natural logarithm.
    log,
    log1p,
    log2,
    log10,
    logit,
    sin,
    cos,
    tan,
    asin,
    acos,
    atan,
    sec,
    csc,
    cot,
    asec,
    acsc,
    acot,
    sinh,
    cosh,
    tanh,
    asinh,
    acosh,
    atanh,
    sech,
    csch,
    coth,
    asech,
    acsch,
    acoth,
    /// Normalized `sin(πx)/(πx)`.
    sinc,
    gamma,
    gammaln,
    erf,
    erfc,
    erfinv,
    erfcinv,
    factorial,
);
