//! Error types for matrix operations.

use thiserror::Error;

/// Result type for matrix operations
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Errors raised when a matrix operation's precondition does not hold.
///
/// Every variant is produced before the receiver is touched, so a failed
/// operation leaves its operands unchanged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatrixError {
    /// Requested extent below 1
    #[error("invalid matrix size {rows}x{cols}: rows and cols must be at least 1")]
    InvalidSize { rows: usize, cols: usize },

    /// Element access outside the matrix
    #[error("index ({row}, {col}) out of range for {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Operand extents incompatible with the requested operation
    #[error("dimension mismatch in {op}: {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Square matrix required
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Inverse requested for a singular matrix
    #[error("matrix is singular (determinant {determinant}), inverse does not exist")]
    Singular { determinant: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size_message() {
        let err = MatrixError::InvalidSize { rows: 0, cols: 3 };
        assert_eq!(
            err.to_string(),
            "invalid matrix size 0x3: rows and cols must be at least 1"
        );
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = MatrixError::IndexOutOfRange {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert_eq!(err.to_string(), "index (2, 0) out of range for 2x2 matrix");
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = MatrixError::DimensionMismatch {
            op: "mul_matrix",
            lhs: (2, 3),
            rhs: (2, 3),
        };
        assert_eq!(err.to_string(), "dimension mismatch in mul_matrix: (2, 3) vs (2, 3)");
    }

    #[test]
    fn test_not_square_message() {
        let err = MatrixError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(err.to_string(), "matrix is not square: 2x3");
    }

    #[test]
    fn test_singular_message() {
        let err = MatrixError::Singular { determinant: 0.0 };
        assert_eq!(
            err.to_string(),
            "matrix is singular (determinant 0), inverse does not exist"
        );
    }

    #[test]
    fn test_error_equality() {
        let a = MatrixError::NotSquare { rows: 1, cols: 2 };
        let b = MatrixError::NotSquare { rows: 1, cols: 2 };
        assert_eq!(a, b);
        assert_ne!(a, MatrixError::NotSquare { rows: 2, cols: 1 });
    }
}
