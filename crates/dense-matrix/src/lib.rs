//! dense-matrix: a small dense `f64` matrix value type.
//!
//! `Matrix` stores its elements in one row-major buffer with explicit row
//! and column extents. On top of it the crate provides elementwise
//! arithmetic, matrix multiplication, transpose, and the cofactor-expansion
//! family (determinant, cofactor matrix, inverse) intended for small
//! matrices.
//!
//! ```
//! use dense_matrix::Matrix;
//!
//! let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! assert_eq!(m.determinant().unwrap(), -2.0);
//!
//! let inv = m.inverse().unwrap();
//! let expected = Matrix::from_rows(&[[-2.0, 1.0], [1.5, -0.5]]).unwrap();
//! assert_eq!(inv, expected);
//! ```
//!
//! Fallible operations return [`Result`] with a [`MatrixError`]; nothing in
//! the crate logs or swallows an error it returns.
pub mod config;
pub mod error;
pub mod math;

pub use config::{NumericConfig, SingularityCheck};
pub use error::{MatrixError, Result};
pub use math::Matrix;
