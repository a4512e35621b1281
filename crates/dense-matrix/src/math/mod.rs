//! Dense matrix type and the algorithms built on it.
//!
//! `matrix` owns storage, access, resizing and elementwise arithmetic,
//! `decomposition` adds the cofactor-expansion family (minor, determinant,
//! cofactors, inverse) and `ops` wires both into the `std::ops` operators.
pub mod decomposition;
pub mod matrix;
pub mod ops;

pub use matrix::Matrix;
