//! Direct linear solvers with emulated working precision
//!
//! This crate provides dense and tridiagonal direct solvers whose every
//! arithmetic step can be rounded to single or double precision, so the
//! same algorithm can be compared across widths.
//!
//! # Features
//!
//! - **LU factorization**: scaled partial pivoting over a row permutation
//! - **Inverse and L1 condition number** from a single factorization
//! - **Thomas algorithm**: O(n) elimination over `n x 3` banded storage
//! - **Precision emulation**: [`Precision::Single`] rounds through `f32`
//!   after every operation while storage stays `f64`
//!
//! Singular dense systems do not fail: the solution carries `NaN`/`inf`.
//! The Thomas solver has no pivoting and reports a vanishing denominator
//! through [`ThomasSolution::ok`].
//!
//! # Example
//!
//! ```
//! use math_precision_solvers::{DenseMatrix, Precision, solve_dense};
//! use ndarray::array;
//!
//! let a = DenseMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]).unwrap();
//! let x = solve_dense(&a, &array![2.0, 3.0], Precision::Double).unwrap();
//! assert_eq!(x, array![3.0, 2.0]);
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod matrix;
pub mod metrics;
pub mod precision;
pub mod systems;
pub mod traits;

// Re-export main types
pub use config::{SolverConfig, Tolerances};
pub use error::{Result, SolverError};
pub use matrix::{BandedMatrix, DenseMatrix, Vector};
pub use precision::Precision;
pub use traits::LinearOperator;

// Re-export direct solvers
pub use direct::{
    LuFactorization, PivotPermutation, ThomasSolution, condition_number_l1, factorize, invert,
    solve_dense, solve_permuted, thomas_solve,
};
