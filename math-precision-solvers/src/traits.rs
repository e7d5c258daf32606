//! Core traits shared by the matrix containers
//!
//! - [`LinearOperator`]: matrix-like objects that can form `y = A * x` with
//!   the result rounded to a working precision

use crate::error::{Result, SolverError};
use crate::matrix::Vector;
use crate::precision::Precision;

/// Trait for matrix-like storage that can perform matrix-vector products.
///
/// Implemented by the dense and the banded containers so that right-hand
/// sides can be formed the same way for both solver families.
pub trait LinearOperator: Send + Sync {
    /// Number of rows in the operator
    fn num_rows(&self) -> usize;

    /// Number of columns in the operator
    fn num_cols(&self) -> usize;

    /// Apply the operator without size checks: `y = A * x`
    ///
    /// Each entry of `y` is accumulated at full width and rounded to
    /// `precision` once.
    fn apply_unchecked(&self, x: &Vector, precision: Precision) -> Vector;

    /// Apply the operator: `y = A * x`
    fn apply(&self, x: &Vector, precision: Precision) -> Result<Vector> {
        if x.len() != self.num_cols() {
            return Err(SolverError::DimensionMismatch {
                expected: self.num_cols(),
                got: x.len(),
            });
        }
        Ok(self.apply_unchecked(x, precision))
    }

    /// Check if the operator is square
    fn is_square(&self) -> bool {
        self.num_rows() == self.num_cols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{BandedMatrix, DenseMatrix};
    use ndarray::array;

    fn rhs_for(op: &dyn LinearOperator, x: &Vector) -> Vector {
        op.apply(x, Precision::Double).unwrap()
    }

    #[test]
    fn test_dense_and_banded_agree_through_trait() {
        let banded = BandedMatrix::from_diagonals(
            &[0.0, 1.0, 1.0],
            &[2.0, 2.0, 2.0],
            &[1.0, 1.0, 0.0],
        )
        .unwrap();
        let dense = banded.to_dense();
        let x = array![1.0, -1.0, 1.0];

        assert_eq!(rhs_for(&dense, &x), rhs_for(&banded, &x));
        assert!(dense.is_square());
        assert!(LinearOperator::is_square(&banded));
    }

    #[test]
    fn test_apply_rejects_wrong_length() {
        let dense = DenseMatrix::identity(3);
        let err = dense.apply(&array![1.0, 2.0], Precision::Double);
        assert!(matches!(
            err,
            Err(SolverError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }
}
