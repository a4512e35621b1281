//! Determinant, cofactor matrix and inverse by cofactor expansion.
//!
//! All three are built on [`Matrix::minor`]: each minor is a freshly
//! allocated (n-1)x(n-1) matrix, so the recursion shares no state between
//! levels. Cost grows as O(n!); these routines are meant for small matrices.

use log::{debug, trace};

use crate::config::NumericConfig;
use crate::error::{MatrixError, Result};
use crate::math::Matrix;

impl Matrix {
    fn ensure_square(&self) -> Result<usize> {
        if self.is_empty() {
            return Err(MatrixError::InvalidSize {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if !self.is_square() {
            return Err(MatrixError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        Ok(self.rows())
    }

    /// The submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        let n = self.ensure_square()?;
        if row >= n || col >= n {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows: n,
                cols: n,
            });
        }
        if n == 1 {
            return Err(MatrixError::InvalidSize { rows: 0, cols: 0 });
        }
        Ok(self.minor_unchecked(row, col))
    }

    /// Caller guarantees a square matrix with n >= 2 and in-range indices.
    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix {
        let n = self.rows();
        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for i in (0..n).filter(|&i| i != row) {
            for j in (0..n).filter(|&j| j != col) {
                data.push(self.at(i, j));
            }
        }
        Matrix::from_raw(n - 1, n - 1, data)
    }

    pub fn determinant(&self) -> Result<f64> {
        self.ensure_square()?;
        Ok(self.expand_determinant())
    }

    fn expand_determinant(&self) -> f64 {
        match self.rows() {
            1 => self.at(0, 0),
            2 => self.at(0, 0) * self.at(1, 1) - self.at(0, 1) * self.at(1, 0),
            n => {
                trace!("expanding {}x{} determinant along row 0", n, n);
                (0..n)
                    .map(|k| {
                        sign(k) * self.at(0, k) * self.minor_unchecked(0, k).expand_determinant()
                    })
                    .sum()
            }
        }
    }

    /// Matrix of signed minor determinants, `(-1)^(i+j) * det(minor(i, j))`.
    ///
    /// A 1x1 input yields `[[1.0]]`: its only minor is empty and has
    /// determinant 1.
    pub fn cofactors(&self) -> Result<Matrix> {
        let n = self.ensure_square()?;
        let mut result = Matrix::new(n, n)?;
        if n == 1 {
            *result.get_mut(0, 0)? = 1.0;
            return Ok(result);
        }

        for i in 0..n {
            for j in 0..n {
                let minor_det = self.minor_unchecked(i, j).expand_determinant();
                *result.get_mut(i, j)? = sign(i + j) * minor_det;
            }
        }
        Ok(result)
    }

    /// Inverse with the default exact-zero singularity check.
    pub fn inverse(&self) -> Result<Matrix> {
        self.inverse_with(&NumericConfig::default())
    }

    /// `transpose(cofactors) / determinant`, failing when `config.singularity`
    /// classifies the determinant as zero.
    pub fn inverse_with(&self, config: &NumericConfig) -> Result<Matrix> {
        let determinant = self.determinant()?;
        if config.singularity.is_singular(determinant) {
            return Err(MatrixError::Singular { determinant });
        }

        debug!(
            "inverting {}x{} matrix, determinant {}",
            self.rows(),
            self.cols(),
            determinant
        );
        let mut result = self.cofactors()?.transpose();
        result.div_scalar(determinant);
        Ok(result)
    }
}

#[inline]
fn sign(k: usize) -> f64 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}
