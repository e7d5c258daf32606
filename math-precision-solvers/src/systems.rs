//! Reference test systems
//!
//! Structured matrices used to compare the solvers across precisions, and a
//! reproducible ±1 "true solution" generator. A typical experiment builds
//! `A` and `x_true`, forms `b = A x_true` with
//! [`LinearOperator::apply`](crate::LinearOperator::apply), solves, and
//! scores the result with [`max_abs_error`](crate::metrics::max_abs_error).

use crate::matrix::{BandedMatrix, DenseMatrix, Vector};
use crate::precision::Precision;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used by the reference experiments
pub const DEFAULT_SEED: u64 = 30;

/// First row and column are ones, the rest is `1 / (i + j + 1)` (0-based)
///
/// Hilbert-like and severely ill-conditioned as `n` grows.
pub fn bordered_reciprocal(n: usize, precision: Precision) -> DenseMatrix {
    DenseMatrix::from_fn(n, n, |i, j| {
        if i == 0 || j == 0 {
            precision.cast(1.0)
        } else {
            precision.cast(1.0 / (i as f64 + j as f64 + 1.0))
        }
    })
}

/// Symmetric matrix with `a(i, j) = 2 (i+1) / (j+1)` on and above the diagonal
pub fn symmetric_ratio(n: usize, precision: Precision) -> DenseMatrix {
    DenseMatrix::from_fn(n, n, |i, j| {
        let (r, c) = if j >= i { (i, j) } else { (j, i) };
        precision.cast(2.0 * (r as f64 + 1.0) / (c as f64 + 1.0))
    })
}

fn mk_row(i: usize, m: f64, k: f64, precision: Precision) -> (f64, f64, f64) {
    let idx = i as f64 + 1.0;
    (
        precision.cast(m / idx),
        precision.cast(-m * idx - k),
        precision.cast(idx),
    )
}

/// Tridiagonal matrix with main `-m(i+1) - k`, super `i+1`, sub `m/(i+1)`
pub fn tridiagonal_mk_banded(n: usize, m: f64, k: f64, precision: Precision) -> BandedMatrix {
    BandedMatrix::from_fn(n, |i| mk_row(i, m, k, precision))
}

/// Dense form of [`tridiagonal_mk_banded`]
pub fn tridiagonal_mk(n: usize, m: f64, k: f64, precision: Precision) -> DenseMatrix {
    tridiagonal_mk_banded(n, m, k, precision).to_dense()
}

/// Vector of `±1` entries from a seeded generator
pub fn random_sign_vector(n: usize, seed: u64) -> Vector {
    let mut rng = StdRng::seed_from_u64(seed);
    Vector::from_shape_fn(n, |_| if rng.random_bool(0.5) { 1.0 } else { -1.0 })
}
