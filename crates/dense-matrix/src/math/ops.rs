//! Operator forms of the `Matrix` methods.
//!
//! Binary matrix operators return `Result<Matrix>` so a shape error reaches
//! the caller through `?`. The compound-assignment operators have no return
//! value to carry an error and panic with the `MatrixError` message instead;
//! use `add_matrix`, `sub_matrix` or `mul_matrix` when the shapes are not
//! known to agree. Indexing with `m[(row, col)]` likewise panics where
//! `get`/`get_mut` would return `IndexOutOfRange`.

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use crate::error::{MatrixError, Result};
use crate::math::Matrix;

impl PartialEq for Matrix {
    /// Tolerance-based, see [`Matrix::approx_eq`].
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        self.get(index.0, index.1).unwrap_or_else(|err| panic!("{}", err))
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        match self.get_mut(index.0, index.1) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }
}

fn or_panic(result: Result<()>) {
    if let Err(err) = result {
        panic!("{}", err);
    }
}

macro_rules! impl_checked_binop {
    ($trait:ident, $fn:ident, $method:ident) => {
        impl<'a> $trait<&'a Matrix> for &Matrix {
            type Output = Result<Matrix>;

            fn $fn(self, rhs: &'a Matrix) -> Self::Output {
                let mut out = self.clone();
                out.$method(rhs)?;
                Ok(out)
            }
        }

        impl<'a> $trait<&'a Matrix> for Matrix {
            type Output = Result<Matrix>;

            fn $fn(mut self, rhs: &'a Matrix) -> Self::Output {
                self.$method(rhs)?;
                Ok(self)
            }
        }

        impl $trait<Matrix> for Matrix {
            type Output = Result<Matrix>;

            fn $fn(mut self, rhs: Matrix) -> Self::Output {
                self.$method(&rhs)?;
                Ok(self)
            }
        }
    };
}

impl_checked_binop!(Add, add, add_matrix);
impl_checked_binop!(Sub, sub, sub_matrix);
impl_checked_binop!(Mul, mul, mul_matrix);

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f64) -> Self::Output {
        let mut out = self.clone();
        out.scale(rhs);
        out
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(mut self, rhs: f64) -> Self::Output {
        self.scale(rhs);
        self
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        rhs * self
    }
}

impl AddAssign<&Matrix> for Matrix {
    fn add_assign(&mut self, rhs: &Matrix) {
        or_panic(self.add_matrix(rhs));
    }
}

impl SubAssign<&Matrix> for Matrix {
    fn sub_assign(&mut self, rhs: &Matrix) {
        or_panic(self.sub_matrix(rhs));
    }
}

impl MulAssign<&Matrix> for Matrix {
    fn mul_assign(&mut self, rhs: &Matrix) {
        or_panic(self.mul_matrix(rhs));
    }
}

impl MulAssign<f64> for Matrix {
    fn mul_assign(&mut self, rhs: f64) {
        self.scale(rhs);
    }
}

impl TryFrom<&[Vec<f64>]> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: &[Vec<f64>]) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lhs() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap()
    }

    fn rhs() -> Matrix {
        Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]).unwrap()
    }

    #[test]
    fn test_binary_ops_leave_operands() {
        let a = lhs();
        let b = rhs();
        let sum = (&a + &b).unwrap();
        assert_eq!(sum.as_slice(), &[6.0, 8.0, 10.0, 12.0]);
        assert_eq!(a, lhs());
        assert_eq!(b, rhs());
    }

    #[test]
    fn test_binary_op_propagates_error() {
        let a = lhs();
        let b = Matrix::new(3, 2).unwrap();
        assert_eq!(
            (&a - &b).unwrap_err(),
            MatrixError::DimensionMismatch {
                op: "sub_matrix",
                lhs: (2, 2),
                rhs: (3, 2),
            }
        );
    }

    #[test]
    fn test_scalar_mul_both_sides() {
        let a = lhs();
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((0.5_f64 * &a).as_slice(), &[0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in add_matrix")]
    fn test_add_assign_panics_on_mismatch() {
        let mut a = lhs();
        a += &Matrix::new(1, 2).unwrap();
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_panics_out_of_range() {
        let a = lhs();
        let _value = a[(2, 0)];
    }

    #[test]
    fn test_index_mut_writes_through() {
        let mut a = Matrix::new(2, 2).unwrap();
        a[(1, 0)] = 9.0;
        assert_eq!(a.as_slice(), &[0.0, 0.0, 9.0, 0.0]);
    }

    #[test]
    fn test_eq_uses_tolerance() {
        let a = lhs();
        let mut b = lhs();
        b[(0, 0)] += 5e-8;
        assert_eq!(a, b);
        b[(0, 0)] += 1e-6;
        assert_ne!(a, b);
    }
}
