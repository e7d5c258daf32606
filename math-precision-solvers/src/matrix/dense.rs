//! Dense row-major matrix
//!
//! A thin owner around `Array2<f64>` with the accessors the solvers need.
//! Values are always stored at double width; [`DenseMatrix::rounded`]
//! produces a copy snapped to a working precision.

use crate::direct::norm1;
use crate::error::{Result, SolverError};
use crate::matrix::Vector;
use crate::precision::Precision;
use crate::traits::LinearOperator;
use ndarray::{Array2, ArrayView1, s};
use std::ops::{Index, IndexMut};

/// Dense `rows x cols` matrix of `f64`
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Array2<f64>,
}

impl DenseMatrix {
    /// Create a zero-filled matrix
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create the `n x n` identity
    pub fn identity(n: usize) -> Self {
        Self {
            data: Array2::eye(n),
        }
    }

    /// Wrap an existing ndarray buffer
    pub fn from_array(data: Array2<f64>) -> Self {
        Self { data }
    }

    /// Build a matrix from a closure `(row, col) -> value`
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        Self {
            data: Array2::from_shape_fn((rows, cols), |(i, j)| f(i, j)),
        }
    }

    /// Build a matrix from a row-major slice
    pub fn from_row_slice(rows: usize, cols: usize, values: &[f64]) -> Result<Self> {
        if values.len() != rows * cols {
            return Err(SolverError::DimensionMismatch {
                expected: rows * cols,
                got: values.len(),
            });
        }
        Ok(Self::from_fn(rows, cols, |i, j| values[i * cols + j]))
    }

    /// Build a matrix from a list of rows; all rows must have equal length
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(SolverError::DimensionMismatch {
                expected: cols,
                got: bad.len(),
            });
        }
        Ok(Self::from_fn(rows.len(), cols, |i, j| rows[i][j]))
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Check if the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Element at `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[[row, col]]
    }

    /// Overwrite the element at `(row, col)`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[[row, col]] = value;
    }

    /// View of one row
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    /// View of one column
    pub fn column(&self, j: usize) -> ArrayView1<'_, f64> {
        self.data.column(j)
    }

    /// Overwrite column `j` with `values`
    pub fn set_column(&mut self, j: usize, values: &Vector) -> Result<()> {
        if values.len() != self.rows() {
            return Err(SolverError::DimensionMismatch {
                expected: self.rows(),
                got: values.len(),
            });
        }
        self.data.column_mut(j).assign(values);
        Ok(())
    }

    /// Resize in place, keeping the overlapping top-left block
    ///
    /// New entries are zero.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        if rows == self.rows() && cols == self.cols() {
            return;
        }
        let keep_r = rows.min(self.rows());
        let keep_c = cols.min(self.cols());
        let mut data = Array2::zeros((rows, cols));
        data.slice_mut(s![..keep_r, ..keep_c])
            .assign(&self.data.slice(s![..keep_r, ..keep_c]));
        self.data = data;
    }

    /// Borrow the underlying buffer
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consume into the underlying buffer
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Copy with every entry rounded to `precision`
    pub fn rounded(&self, precision: Precision) -> Self {
        Self {
            data: self.data.mapv(|v| precision.cast(v)),
        }
    }

    /// Returns `true` if every entry is finite
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|v| v.is_finite())
    }

    /// Matrix-vector product, each result entry rounded to `precision`
    pub fn matvec(&self, x: &Vector, precision: Precision) -> Result<Vector> {
        self.apply(x, precision)
    }

    /// Plain double-width matrix product `self * other`
    pub fn matmul(&self, other: &DenseMatrix) -> Result<DenseMatrix> {
        if self.cols() != other.rows() {
            return Err(SolverError::DimensionMismatch {
                expected: self.cols(),
                got: other.rows(),
            });
        }
        Ok(Self {
            data: self.data.dot(&other.data),
        })
    }

    /// Maximum absolute column sum at `precision`
    pub fn norm1(&self, precision: Precision) -> f64 {
        norm1(self, precision)
    }

    /// Return `n` if the matrix is square and non-empty
    pub(crate) fn square_dim(&self) -> Result<usize> {
        if !self.is_square() {
            return Err(SolverError::NotSquare {
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        if self.rows() == 0 {
            return Err(SolverError::EmptyMatrix);
        }
        Ok(self.rows())
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[[row, col]]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[[row, col]]
    }
}

impl From<Array2<f64>> for DenseMatrix {
    fn from(data: Array2<f64>) -> Self {
        Self::from_array(data)
    }
}

impl LinearOperator for DenseMatrix {
    fn num_rows(&self) -> usize {
        self.rows()
    }

    fn num_cols(&self) -> usize {
        self.cols()
    }

    fn apply_unchecked(&self, x: &Vector, precision: Precision) -> Vector {
        self.data
            .rows()
            .into_iter()
            .map(|row| precision.cast(row.dot(x)))
            .collect()
    }
}
