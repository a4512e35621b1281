use std::fmt;

use log::debug;

use crate::config::{NumericConfig, DEFAULT_EQUALITY_TOLERANCE};
use crate::error::{MatrixError, Result};

/// Dense row-major matrix of `f64`.
///
/// Element `(i, j)` lives at offset `i * cols + j` of a single owned buffer
/// whose length is always `rows * cols`. Both extents are at least 1 for
/// every matrix produced by a constructor; the only exception is the empty
/// husk left behind by [`Matrix::take`].
#[derive(Clone, Debug)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Default for Matrix {
    /// A 1x1 matrix holding `0.0`.
    fn default() -> Self {
        Self {
            data: vec![0.0],
            rows: 1,
            cols: 1,
        }
    }
}

impl Matrix {
    /// Zero-filled `rows` x `cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(MatrixError::DimensionMismatch {
                op: "from_shape_vec",
                lhs: (rows, cols),
                rhs: (1, data.len()),
            });
        }
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from equally sized rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let len = checked_len(rows.len(), cols)?;

        let mut data = Vec::with_capacity(len);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::DimensionMismatch {
                    op: "from_rows",
                    lhs: (1, cols),
                    rhs: (1, row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Wrap a buffer whose length the caller has already matched to the extents.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert!(rows >= 1 && cols >= 1 && data.len() == rows * cols);
        Self { data, rows, cols }
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            let offset = m.offset(i, i);
            m.data[offset] = 1.0;
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True only for a moved-from husk.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn row_slice(&self, row: usize) -> Result<&[f64]> {
        if row >= self.rows {
            return Err(self.out_of_range(row, 0));
        }
        let start = self.offset(row, 0);
        Ok(&self.data[start..start + self.cols])
    }

    #[inline]
    pub(crate) fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Unchecked read for callers that iterate within the current extents.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[self.offset(row, col)]
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::IndexOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&f64> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(&self.data[self.offset(row, col)])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut f64> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        let offset = self.offset(row, col);
        Ok(&mut self.data[offset])
    }

    /// Move the buffer out, leaving `self` as a 0x0 husk with no storage.
    ///
    /// The husk may be dropped or overwritten; every operation that needs
    /// elements rejects it.
    pub fn take(&mut self) -> Matrix {
        std::mem::replace(
            self,
            Matrix {
                data: Vec::new(),
                rows: 0,
                cols: 0,
            },
        )
    }

    /// Change the row count. Surviving rows keep their values, new rows are zero.
    pub fn set_rows(&mut self, rows: usize) -> Result<()> {
        let mut resized = Matrix::new(rows, self.cols)?;
        let kept = rows.min(self.rows) * self.cols;
        resized.data[..kept].copy_from_slice(&self.data[..kept]);

        debug!(
            "set_rows: {}x{} -> {}x{}",
            self.rows, self.cols, resized.rows, resized.cols
        );
        *self = resized;
        Ok(())
    }

    /// Change the column count. Surviving columns keep their values, new columns are zero.
    pub fn set_cols(&mut self, cols: usize) -> Result<()> {
        let mut resized = Matrix::new(self.rows, cols)?;
        let kept = cols.min(self.cols);
        for row in 0..self.rows {
            let src = self.offset(row, 0);
            let dst = resized.offset(row, 0);
            resized.data[dst..dst + kept].copy_from_slice(&self.data[src..src + kept]);
        }

        debug!(
            "set_cols: {}x{} -> {}x{}",
            self.rows, self.cols, resized.rows, resized.cols
        );
        *self = resized;
        Ok(())
    }

    /// Element-wise comparison with an absolute tolerance of `1e-7`.
    pub fn approx_eq(&self, other: &Matrix) -> bool {
        self.approx_eq_with(other, DEFAULT_EQUALITY_TOLERANCE)
    }

    /// Comparison with the tolerance carried by `config`.
    pub fn approx_eq_config(&self, other: &Matrix, config: &NumericConfig) -> bool {
        self.approx_eq_with(other, config.equality_tolerance)
    }

    /// Mismatched extents compare unequal. Identical elements (including
    /// equal infinities) always match; a NaN element never does.
    pub fn approx_eq_with(&self, other: &Matrix, tolerance: f64) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| a == b || (a - b).abs() <= tolerance)
    }

    fn ensure_same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                op,
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }
        Ok(())
    }

    pub fn add_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.ensure_same_shape(other, "add_matrix")?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += b;
        }
        Ok(())
    }

    pub fn sub_matrix(&mut self, other: &Matrix) -> Result<()> {
        self.ensure_same_shape(other, "sub_matrix")?;
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a -= b;
        }
        Ok(())
    }

    pub fn scale(&mut self, factor: f64) {
        for v in self.data.iter_mut() {
            *v *= factor;
        }
    }

    pub(crate) fn div_scalar(&mut self, divisor: f64) {
        for v in self.data.iter_mut() {
            *v /= divisor;
        }
    }

    /// Replace `self` with `self * other`.
    ///
    /// The product is accumulated into a fresh buffer, so `self` and `other`
    /// are never read and written at the same time.
    pub fn mul_matrix(&mut self, other: &Matrix) -> Result<()> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "mul_matrix",
                lhs: self.shape(),
                rhs: other.shape(),
            });
        }

        let mut product = Matrix::new(self.rows, other.cols)?;
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.at(i, k) * other.at(k, j);
                }
                let offset = product.offset(i, j);
                product.data[offset] = acc;
            }
        }

        debug!(
            "mul_matrix: {}x{} * {}x{}",
            self.rows, self.cols, other.rows, other.cols
        );
        *self = product;
        Ok(())
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.cols {
            for i in 0..self.rows {
                data.push(self.at(i, j));
            }
        }
        Matrix {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }
}

/// Buffer length for `rows` x `cols`, rejecting zero extents and lengths
/// that overflow or exceed what a `Vec<f64>` can address.
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    let invalid = MatrixError::InvalidSize { rows, cols };
    if rows < 1 || cols < 1 {
        return Err(invalid);
    }
    let len = rows.checked_mul(cols).ok_or_else(|| invalid.clone())?;
    match len.checked_mul(std::mem::size_of::<f64>()) {
        Some(bytes) if bytes <= isize::MAX as usize => Ok(len),
        _ => Err(invalid),
    }
}

impl From<Matrix> for Vec<f64> {
    fn from(value: Matrix) -> Self {
        value.data
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            write!(f, "[")?;
            for col in 0..self.cols {
                write!(f, "{}", self.at(row, col))?;
                if col + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if row + 1 != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
