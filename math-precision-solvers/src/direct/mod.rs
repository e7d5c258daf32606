//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`factorize`] / [`solve_permuted`] / [`solve_dense`]: LU with scaled partial pivoting
//! - [`invert`]: inverse from one factorization
//! - [`condition_number_l1`]: `‖A‖₁ · ‖A⁻¹‖₁`
//! - [`thomas_solve`]: O(n) tridiagonal elimination

mod condition;
mod inverse;
mod lu;
mod thomas;

pub use condition::{condition_number_l1, condition_number_l1_with, norm1};
pub use inverse::{invert, invert_with};
pub use lu::{
    LuFactorization, PivotPermutation, factorize, factorize_with, solve_dense, solve_dense_with,
    solve_permuted,
};
pub use thomas::{ThomasSolution, thomas_solve, thomas_solve_with};
