//! Matrix and vector containers
//!
//! This module provides the owned buffers every solver works on:
//! - [`DenseMatrix`]: row-major `rows x cols` storage
//! - [`BandedMatrix`]: compact `n x 3` tridiagonal storage
//! - [`Vector`]: a plain `ndarray::Array1<f64>`

mod banded;
mod dense;

pub use banded::BandedMatrix;
pub use dense::DenseMatrix;

/// One-dimensional numeric buffer (right-hand sides, solutions)
pub type Vector = ndarray::Array1<f64>;
