//! # zmatrix
//!
//! Complex scalars, dense complex matrices, and a small linear-algebra
//! engine. Matrices are immutable values built from MATLAB-style literals,
//! nested arrays, or scalars; every operation returns a new value.
//!
//! ## Quick start
//!
//! ```
//! use zmatrix::{linalg, Complex, Matrix};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::new("[2 1 -1; -3 -1 2; -2 1 2]").unwrap();
//! let b = Matrix::new("[8; -11; -3]").unwrap();
//! let x = a.linsolve(&b).unwrap();
//! assert!(x.equals_tol(&Matrix::new("[2; 3; -1]").unwrap(), 1e-12));
//!
//! // Complex literals, ranges and conjugate transpose
//! let z = Matrix::new("[1+2i 3; 1:2]'").unwrap();
//! assert_eq!(z.size(), (2, 2));
//! assert_eq!(z[(0, 0)], Complex::new(1.0, -2.0));
//!
//! // Decompositions carry their reconstruction identity
//! let f = linalg::qr(&a);
//! assert!(f.q.try_mul(&f.r).unwrap().equals_tol(&a, 1e-12));
//! ```
//!
//! ## Modules
//!
//! - [`complex`]: [`Complex`], an `f64` pair with real fast paths for the
//!   elementary, trigonometric, hyperbolic and special functions, literal
//!   parsing (`"3+4i"`) and tolerance-aware comparison.
//!
//! - [`matrix`]: [`Matrix`], row-major `Vec<Complex>` storage with the
//!   literal grammar, broadcasting arithmetic, selectors, vector-wise
//!   reductions ([`VectorMode`]), predicates and formatting.
//!
//! - [`linalg`]: LUP/LU, determinant, linear solve, inverse, Gram-Schmidt
//!   QR, symmetric tridiagonalization and eigendecomposition, SVD,
//!   pseudo-inverse, rank, norms and condition numbers.
//!
//! - [`special`]: real gamma, beta and error functions.
//!
//! - [`traits`]: [`IntoComplex`] and [`IntoMatrix`] input conversions, and
//!   [`MatrixRef`] / [`MatrixMut`] element access for the engine kernels.
//!
//! - [`value`]: [`NumericValue`], the scalar-or-matrix union used at API
//!   boundaries.
//!
//! ## Errors and logging
//!
//! Fallible operations return [`Result`] with a structured [`Error`].
//! Numerical degradation is not an error; the engine reports it through
//! `tracing` events (`warn` for an unconverged eigen sweep, `debug` for
//! skipped pivots, basis completion and pseudo-inverse fallbacks).
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `complex` | no      | `From` conversions to and from `num_complex::Complex<f64>` |
//! | `all`     | no      | All features |

pub mod complex;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod special;
pub mod traits;
pub mod value;

pub use complex::Complex;
pub use error::{Error, Result};
pub use matrix::{FormatOptions, Matrix, Selector, SortOrder, VectorMode};
pub use traits::{IntoComplex, IntoMatrix, MatrixMut, MatrixRef};
pub use value::NumericValue;
