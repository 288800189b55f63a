//! `IntoMatrix` for scalars, strings and flat or nested sequences.

use crate::traits::{IntoComplex, IntoMatrix};
use crate::{Complex, NumericValue, Result};

use super::{parse, Matrix};

fn scalar_matrix(z: Complex) -> Matrix {
    Matrix::from_parts(1, 1, vec![z])
}

fn row_vector<T: IntoComplex>(items: impl IntoIterator<Item = T>) -> Result<Matrix> {
    let row = items
        .into_iter()
        .map(IntoComplex::into_complex)
        .collect::<Result<Vec<_>>>()?;
    Matrix::from_rows(vec![row])
}

fn nested<T, R>(rows: impl IntoIterator<Item = R>) -> Result<Matrix>
where
    T: IntoComplex,
    R: IntoIterator<Item = T>,
{
    let rows = rows
        .into_iter()
        .map(|row| row.into_iter().map(IntoComplex::into_complex).collect::<Result<Vec<_>>>())
        .collect::<Result<Vec<_>>>()?;
    Matrix::from_rows(rows)
}

impl IntoMatrix for Matrix {
    fn into_matrix(self) -> Result<Matrix> {
        Ok(self)
    }
}

impl IntoMatrix for &Matrix {
    fn into_matrix(self) -> Result<Matrix> {
        Ok(self.clone())
    }
}

impl IntoMatrix for NumericValue {
    fn into_matrix(self) -> Result<Matrix> {
        Ok(NumericValue::into_matrix(self))
    }
}

impl IntoMatrix for &str {
    fn into_matrix(self) -> Result<Matrix> {
        parse::parse_matrix(self)
    }
}

impl IntoMatrix for String {
    fn into_matrix(self) -> Result<Matrix> {
        parse::parse_matrix(&self)
    }
}

impl IntoMatrix for &String {
    fn into_matrix(self) -> Result<Matrix> {
        parse::parse_matrix(self)
    }
}

macro_rules! impl_into_matrix_scalar {
    ($($t:ty),*) => {
        $(
            impl IntoMatrix for $t {
                fn into_matrix(self) -> Result<Matrix> {
                    Ok(scalar_matrix(self.into_complex()?))
                }
            }
        )*
    };
}

impl_into_matrix_scalar!(Complex, f64, f32, i32, i64, u32, usize, (f64, f64));

// Sequence element types. A `Matrix` element must be 1×1.
macro_rules! impl_into_matrix_seq {
    ($($t:ty),*) => {
        $(
            impl IntoMatrix for Vec<$t> {
                fn into_matrix(self) -> Result<Matrix> {
                    row_vector(self)
                }
            }

            impl IntoMatrix for &[$t] {
                fn into_matrix(self) -> Result<Matrix> {
                    row_vector(self.iter().cloned())
                }
            }

            impl<const N: usize> IntoMatrix for [$t; N] {
                fn into_matrix(self) -> Result<Matrix> {
                    row_vector(self)
                }
            }

            impl IntoMatrix for Vec<Vec<$t>> {
                fn into_matrix(self) -> Result<Matrix> {
                    nested(self)
                }
            }

            impl IntoMatrix for &[Vec<$t>] {
                fn into_matrix(self) -> Result<Matrix> {
                    nested(self.iter().map(|row| row.iter().cloned()))
                }
            }

            impl<const R: usize, const C: usize> IntoMatrix for [[$t; C]; R] {
                fn into_matrix(self) -> Result<Matrix> {
                    nested(self)
                }
            }
        )*
    };
}

impl_into_matrix_seq!(f64, f32, i32, i64, Complex, String, Matrix, NumericValue);

impl IntoMatrix for Vec<&str> {
    fn into_matrix(self) -> Result<Matrix> {
        row_vector(self)
    }
}

impl<const N: usize> IntoMatrix for [&str; N] {
    fn into_matrix(self) -> Result<Matrix> {
        row_vector(self)
    }
}

impl IntoMatrix for Vec<Vec<&str>> {
    fn into_matrix(self) -> Result<Matrix> {
        nested(self)
    }
}

impl<const R: usize, const C: usize> IntoMatrix for [[&str; C]; R] {
    fn into_matrix(self) -> Result<Matrix> {
        nested(self)
    }
}
