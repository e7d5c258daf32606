//! Error types for the direct solvers.
//!
//! Only caller mistakes are reported as errors. Numerical singularity is
//! part of the result: the dense path lets `NaN`/`inf` flow into the
//! solution and the tridiagonal path flags it on
//! [`ThomasSolution`](crate::direct::ThomasSolution).

use thiserror::Error;

/// Errors that can occur when calling a solver.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A square matrix was required.
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The matrix has no rows.
    #[error("matrix is empty")]
    EmptyMatrix,

    /// Operand sizes do not agree.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length provided
        got: usize,
    },

    /// An unused slot of the banded storage holds a non-zero value.
    #[error("banded storage row {row} has non-zero unused slot ({value})")]
    BandedCorner {
        /// Row of the offending slot (0 or n-1)
        row: usize,
        /// The stored value
        value: f64,
    },

    /// A tolerance factor is not a finite positive number.
    #[error("invalid tolerance {name}: {value} (must be finite and > 0)")]
    InvalidTolerance {
        /// Field name
        name: &'static str,
        /// The invalid value
        value: f64,
    },

    /// A precision name could not be parsed.
    #[error("unknown precision '{0}' (expected single or double)")]
    UnknownPrecision(String),
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    /// Returns `true` if this is a shape or size error.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            SolverError::NotSquare { .. }
                | SolverError::EmptyMatrix
                | SolverError::DimensionMismatch { .. }
                | SolverError::BandedCorner { .. }
        )
    }

    /// Returns `true` if this is a configuration error.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SolverError::InvalidTolerance { .. } | SolverError::UnknownPrecision(_)
        )
    }
}
