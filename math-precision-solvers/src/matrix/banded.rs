//! Compact tridiagonal storage
//!
//! An `n x 3` buffer whose columns hold the sub-, main and super-diagonal:
//!
//! ```text
//! row i: [ a(i, i-1), a(i, i), a(i, i+1) ]
//! ```
//!
//! Row 0's sub-diagonal slot and row `n-1`'s super-diagonal slot do not
//! correspond to matrix entries and are kept at zero.

use crate::error::{Result, SolverError};
use crate::matrix::{DenseMatrix, Vector};
use crate::precision::Precision;
use crate::traits::LinearOperator;
use ndarray::Array2;

const SUB: usize = 0;
const MAIN: usize = 1;
const SUPER: usize = 2;

/// Tridiagonal matrix in `n x 3` banded storage
#[derive(Debug, Clone, PartialEq)]
pub struct BandedMatrix {
    bands: Array2<f64>,
}

impl BandedMatrix {
    /// Create an `n x n` zero tridiagonal matrix
    pub fn zeros(n: usize) -> Self {
        Self {
            bands: Array2::zeros((n, 3)),
        }
    }

    /// Build from the three diagonals, each of length `n`
    ///
    /// `sub[0]` and `sup[n-1]` are unused and must be zero.
    pub fn from_diagonals(sub: &[f64], main: &[f64], sup: &[f64]) -> Result<Self> {
        let n = main.len();
        for len in [sub.len(), sup.len()] {
            if len != n {
                return Err(SolverError::DimensionMismatch { expected: n, got: len });
            }
        }
        let bands = Array2::from_shape_fn((n, 3), |(i, band)| match band {
            SUB => sub[i],
            MAIN => main[i],
            _ => sup[i],
        });
        Self::from_array(bands)
    }

    /// Build from a closure `i -> (sub, main, super)` for each row
    ///
    /// The sub value of row 0 and the super value of row `n-1` are ignored.
    pub fn from_fn<F>(n: usize, mut f: F) -> Self
    where
        F: FnMut(usize) -> (f64, f64, f64),
    {
        let mut bands = Array2::zeros((n, 3));
        for i in 0..n {
            let (sub, main, sup) = f(i);
            if i > 0 {
                bands[[i, SUB]] = sub;
            }
            bands[[i, MAIN]] = main;
            if i + 1 < n {
                bands[[i, SUPER]] = sup;
            }
        }
        Self { bands }
    }

    /// Wrap an existing `n x 3` buffer
    pub fn from_array(bands: Array2<f64>) -> Result<Self> {
        if bands.ncols() != 3 {
            return Err(SolverError::DimensionMismatch {
                expected: 3,
                got: bands.ncols(),
            });
        }
        let banded = Self { bands };
        banded.check_corners()?;
        Ok(banded)
    }

    /// Extract the three central diagonals of a square dense matrix
    ///
    /// Entries outside the band are ignored.
    pub fn from_dense(matrix: &DenseMatrix) -> Result<Self> {
        if !matrix.is_square() {
            return Err(SolverError::NotSquare {
                rows: matrix.rows(),
                cols: matrix.cols(),
            });
        }
        let n = matrix.rows();
        let bands = Array2::from_shape_fn((n, 3), |(i, band)| match band {
            SUB if i > 0 => matrix.get(i, i - 1),
            MAIN => matrix.get(i, i),
            SUPER if i + 1 < n => matrix.get(i, i + 1),
            _ => 0.0,
        });
        Ok(Self { bands })
    }

    fn check_corners(&self) -> Result<()> {
        let n = self.dim();
        if n == 0 {
            return Ok(());
        }
        let first = self.bands[[0, SUB]];
        if first != 0.0 {
            return Err(SolverError::BandedCorner { row: 0, value: first });
        }
        let last = self.bands[[n - 1, SUPER]];
        if last != 0.0 {
            return Err(SolverError::BandedCorner {
                row: n - 1,
                value: last,
            });
        }
        Ok(())
    }

    /// Matrix dimension `n`
    #[inline]
    pub fn dim(&self) -> usize {
        self.bands.nrows()
    }

    /// Sub-diagonal entry `a(i, i-1)`; zero for `i == 0`
    #[inline]
    pub fn sub(&self, i: usize) -> f64 {
        self.bands[[i, SUB]]
    }

    /// Diagonal entry `a(i, i)`
    #[inline]
    pub fn main(&self, i: usize) -> f64 {
        self.bands[[i, MAIN]]
    }

    /// Super-diagonal entry `a(i, i+1)`; zero for `i == n-1`
    #[inline]
    pub fn sup(&self, i: usize) -> f64 {
        self.bands[[i, SUPER]]
    }

    /// Set `a(i, i-1)`; fails for `i == 0`
    pub fn set_sub(&mut self, i: usize, value: f64) -> Result<()> {
        if i == 0 && value != 0.0 {
            return Err(SolverError::BandedCorner { row: 0, value });
        }
        self.bands[[i, SUB]] = value;
        Ok(())
    }

    /// Set `a(i, i)`
    pub fn set_main(&mut self, i: usize, value: f64) {
        self.bands[[i, MAIN]] = value;
    }

    /// Set `a(i, i+1)`; fails for `i == n-1`
    pub fn set_sup(&mut self, i: usize, value: f64) -> Result<()> {
        if i + 1 == self.dim() && value != 0.0 {
            return Err(SolverError::BandedCorner { row: i, value });
        }
        self.bands[[i, SUPER]] = value;
        Ok(())
    }

    /// Borrow the `n x 3` buffer
    pub fn as_array(&self) -> &Array2<f64> {
        &self.bands
    }

    /// Copy with every entry rounded to `precision`
    pub fn rounded(&self, precision: Precision) -> Self {
        Self {
            bands: self.bands.mapv(|v| precision.cast(v)),
        }
    }

    /// Expand to a full `n x n` matrix
    pub fn to_dense(&self) -> DenseMatrix {
        let n = self.dim();
        let mut dense = DenseMatrix::zeros(n, n);
        for i in 0..n {
            dense.set(i, i, self.main(i));
            if i > 0 {
                dense.set(i, i - 1, self.sub(i));
            }
            if i + 1 < n {
                dense.set(i, i + 1, self.sup(i));
            }
        }
        dense
    }

    /// Banded matrix-vector product, each entry rounded to `precision`
    pub fn matvec(&self, x: &Vector, precision: Precision) -> Result<Vector> {
        self.apply(x, precision)
    }
}

impl LinearOperator for BandedMatrix {
    fn num_rows(&self) -> usize {
        self.dim()
    }

    fn num_cols(&self) -> usize {
        self.dim()
    }

    fn apply_unchecked(&self, x: &Vector, precision: Precision) -> Vector {
        let n = self.dim();
        Vector::from_shape_fn(n, |i| {
            let mut sum = 0.0;
            if i > 0 {
                sum += self.sub(i) * x[i - 1];
            }
            sum += self.main(i) * x[i];
            if i + 1 < n {
                sum += self.sup(i) * x[i + 1];
            }
            precision.cast(sum)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn sample() -> BandedMatrix {
        BandedMatrix::from_diagonals(&[0.0, 1.0, 3.0], &[2.0, 4.0, 6.0], &[5.0, 7.0, 0.0]).unwrap()
    }

    #[test]
    fn test_accessors() {
        let b = sample();
        assert_eq!(b.dim(), 3);
        assert_eq!(b.sub(1), 1.0);
        assert_eq!(b.main(2), 6.0);
        assert_eq!(b.sup(0), 5.0);
        assert_eq!(b.sub(0), 0.0);
        assert_eq!(b.sup(2), 0.0);
    }

    #[test]
    fn test_corner_slots_must_be_zero() {
        let err = BandedMatrix::from_diagonals(&[9.0, 1.0], &[1.0, 1.0], &[1.0, 0.0]);
        assert!(matches!(err, Err(SolverError::BandedCorner { row: 0, .. })));

        let err = BandedMatrix::from_diagonals(&[0.0, 1.0], &[1.0, 1.0], &[1.0, 2.0]);
        assert!(matches!(err, Err(SolverError::BandedCorner { row: 1, .. })));

        let mut b = sample();
        assert!(b.set_sub(0, 1.0).is_err());
        assert!(b.set_sup(2, 1.0).is_err());
        assert!(b.set_sub(2, -1.0).is_ok());
        assert_eq!(b.sub(2), -1.0);
    }

    #[test]
    fn test_wrong_lengths() {
        let err = BandedMatrix::from_diagonals(&[0.0], &[1.0, 1.0], &[1.0, 0.0]);
        assert!(matches!(
            err,
            Err(SolverError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        ));
        assert!(BandedMatrix::from_array(Array2::zeros((3, 2))).is_err());
    }

    #[test]
    fn test_dense_roundtrip() {
        let b = sample();
        let dense = b.to_dense();
        assert_eq!(
            dense.as_array(),
            &array![[2.0, 5.0, 0.0], [1.0, 4.0, 7.0], [0.0, 3.0, 6.0]]
        );
        assert_eq!(BandedMatrix::from_dense(&dense).unwrap(), b);
    }

    #[test]
    fn test_matvec_matches_dense() {
        let b = sample();
        let x = array![1.0, -2.0, 0.5];
        let banded = b.matvec(&x, Precision::Double).unwrap();
        let dense = b.to_dense().matvec(&x, Precision::Double).unwrap();
        assert_eq!(banded, dense);
    }
}
