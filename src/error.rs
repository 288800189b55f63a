//! Crate-wide error type.
//!
//! Construction and shape errors are raised immediately. Numerical
//! degradation (rank loss, eigen non-convergence) is never an error; it shows
//! up in the quality of the returned values instead.

use thiserror::Error;

/// Errors from construction, shape checks, and domain restrictions.
///
/// ```
/// use zmatrix::{Error, Matrix};
///
/// let a = Matrix::new("[1 2; 3 4]").unwrap();
/// let b = Matrix::new("[1 2 3]").unwrap();
/// assert!(matches!(a.try_add(&b), Err(Error::ShapeMismatch { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Literal text that does not follow the number/matrix grammar.
    #[error("cannot parse {input:?}: {reason}")]
    Parse {
        /// The offending text.
        input: String,
        /// What went wrong.
        reason: String,
    },

    /// Nested rows of unequal length.
    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first row that disagrees with row 0.
        row: usize,
        /// Column count of row 0.
        expected: usize,
        /// Column count of the offending row.
        got: usize,
    },

    /// A matrix with zero rows or zero columns.
    #[error("matrix must have at least one row and one column")]
    Empty,

    /// Binary operation on incompatible dimensions.
    #[error("{op}: dimension mismatch, expected {}x{}, got {}x{}", expected.0, expected.1, got.0, got.1)]
    ShapeMismatch {
        /// Operation name.
        op: &'static str,
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Actual `(rows, cols)`.
        got: (usize, usize),
    },

    /// Operation requires a square matrix.
    #[error("{op}: matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Operation name.
        op: &'static str,
        /// Row count of the input.
        rows: usize,
        /// Column count of the input.
        cols: usize,
    },

    /// Operation requires a symmetric matrix.
    #[error("{op}: matrix is not symmetric")]
    NotSymmetric {
        /// Operation name.
        op: &'static str,
    },

    /// Operation is only defined for real operands.
    #[error("{op}: complex operands are not supported")]
    NotReal {
        /// Operation name.
        op: &'static str,
    },

    /// Argument outside the accepted domain.
    #[error("{op}: {reason}")]
    InvalidArgument {
        /// Operation name.
        op: &'static str,
        /// Human-readable constraint that was violated.
        reason: String,
    },

    /// Index past the end of a dimension.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the indexed dimension.
        len: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid(op: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            op,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message() {
        let e = Error::ShapeMismatch {
            op: "add",
            expected: (2, 2),
            got: (1, 3),
        };
        assert_eq!(e.to_string(), "add: dimension mismatch, expected 2x2, got 1x3");
    }

    #[test]
    fn parse_message_quotes_input() {
        let e = Error::parse("[1 2", "unclosed bracket");
        assert_eq!(e.to_string(), "cannot parse \"[1 2\": unclosed bracket");
    }
}
