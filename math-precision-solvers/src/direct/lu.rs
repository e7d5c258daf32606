//! LU decomposition solver
//!
//! Provides LU factorization with scaled partial pivoting for dense square
//! systems. Rows are never moved: pivoting only reorders a
//! [`PivotPermutation`], and every arithmetic step is rounded to the
//! configured [`Precision`].
//!
//! A pivot that is numerically zero does not stop the factorization. The
//! affected multipliers become infinite and the substitution step turns the
//! matching solution entries into `NaN` or `±inf`, so a caller sweeping many
//! systems always gets a result.

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::matrix::{DenseMatrix, Vector};
use crate::precision::Precision;
use ndarray::Array2;

/// Logical-to-physical row mapping produced by pivoting
///
/// Logical row `i` of the factors is stored in physical row
/// `permutation[i]` of the factored buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PivotPermutation {
    order: Vec<usize>,
}

impl PivotPermutation {
    /// The identity permutation of size `n`
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// Number of rows
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` for the empty permutation
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Physical storage row of logical row `logical`
    #[inline]
    pub fn physical(&self, logical: usize) -> usize {
        self.order[logical]
    }

    /// Exchange two logical rows
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    /// Returns `true` if no row exchange happened
    pub fn is_identity(&self) -> bool {
        self.order.iter().enumerate().all(|(i, &p)| i == p)
    }

    /// Raw index sequence
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Reorder `v` into logical order: `out[i] = v[permutation[i]]`
    pub fn apply(&self, v: &Vector) -> Vector {
        self.order.iter().map(|&p| v[p]).collect()
    }
}

/// LU factorization result
///
/// Stores L and U factors along with pivot information
#[derive(Debug, Clone)]
pub struct LuFactorization {
    /// Combined factors in physical row order (L unit lower, stored below the diagonal)
    lu: Array2<f64>,
    permutation: PivotPermutation,
    /// Per-row maximum magnitude at the working precision
    scale_factors: Vector,
    config: SolverConfig,
    /// Pivot columns flagged as numerically singular
    soft_singular_columns: Vec<usize>,
}

impl LuFactorization {
    /// Matrix dimension
    #[inline]
    pub fn dim(&self) -> usize {
        self.lu.nrows()
    }

    /// Working precision the factors were computed at
    #[inline]
    pub fn precision(&self) -> Precision {
        self.config.precision
    }

    /// Configuration used for the factorization
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Combined L/U buffer in physical row order
    pub fn lu(&self) -> &Array2<f64> {
        &self.lu
    }

    /// Pivot permutation
    pub fn permutation(&self) -> &PivotPermutation {
        &self.permutation
    }

    /// Row scale factors used for pivot selection
    pub fn scale_factors(&self) -> &Vector {
        &self.scale_factors
    }

    /// Pivot columns whose pivot fell below the singularity tolerance
    pub fn soft_singular_columns(&self) -> &[usize] {
        &self.soft_singular_columns
    }

    /// Returns `true` if any pivot was flagged as numerically singular
    pub fn is_soft_singular(&self) -> bool {
        !self.soft_singular_columns.is_empty()
    }

    /// Unit lower-triangular factor in logical row order
    pub fn lower(&self) -> DenseMatrix {
        let n = self.dim();
        DenseMatrix::from_fn(n, n, |i, j| match j.cmp(&i) {
            std::cmp::Ordering::Less => self.lu[[self.permutation.physical(i), j]],
            std::cmp::Ordering::Equal => 1.0,
            std::cmp::Ordering::Greater => 0.0,
        })
    }

    /// Upper-triangular factor in logical row order
    pub fn upper(&self) -> DenseMatrix {
        let n = self.dim();
        DenseMatrix::from_fn(n, n, |i, j| {
            if j >= i {
                self.lu[[self.permutation.physical(i), j]]
            } else {
                0.0
            }
        })
    }

    /// Solve `Ax = b` using the pre-computed factors
    ///
    /// `b` is rounded to the working precision first. A zero diagonal in U
    /// yields `NaN` (zero numerator) or a signed infinity instead of an error.
    pub fn solve(&self, b: &Vector) -> Result<Vector> {
        let n = self.dim();
        if b.len() != n {
            return Err(SolverError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        let p = self.precision();
        let perm = &self.permutation;

        // Forward substitution: Ly = Pb
        let mut y = Vector::zeros(n);
        for i in 0..n {
            let row = perm.physical(i);
            let mut sum = 0.0;
            for j in 0..i {
                let term = p.cast(self.lu[[row, j]] * y[j]);
                sum = p.cast(sum + term);
            }
            y[i] = p.cast(p.cast(b[row]) - sum);
        }

        // Backward substitution: Ux = y
        let mut x = Vector::zeros(n);
        for i in (0..n).rev() {
            let row = perm.physical(i);
            let mut sum = 0.0;
            for j in (i + 1)..n {
                let term = p.cast(self.lu[[row, j]] * x[j]);
                sum = p.cast(sum + term);
            }
            let numerator = p.cast(y[i] - sum);
            let u_ii = self.lu[[row, i]];
            x[i] = if p.is_negligible(u_ii) {
                if p.is_negligible(numerator) {
                    f64::NAN
                } else {
                    f64::INFINITY.copysign(numerator)
                }
            } else {
                p.cast(numerator / u_ii)
            };
        }

        Ok(x)
    }
}

/// Compute LU factorization with scaled partial pivoting at `precision`
pub fn factorize(a: &DenseMatrix, precision: Precision) -> Result<LuFactorization> {
    factorize_with(a, &SolverConfig::new(precision))
}

/// Compute LU factorization with scaled partial pivoting
///
/// The input is copied and rounded to the working precision; it is never
/// modified.
pub fn factorize_with(a: &DenseMatrix, config: &SolverConfig) -> Result<LuFactorization> {
    let n = a.square_dim()?;
    config.tolerances.validate()?;
    let p = config.precision;

    let mut lu = a.rounded(p).into_array();
    let mut permutation = PivotPermutation::identity(n);
    let scale_factors: Vector = lu
        .rows()
        .into_iter()
        .map(|row| row.iter().fold(0.0_f64, |acc, v| acc.max(v.abs())))
        .collect();
    let mut soft_singular_columns = Vec::new();

    let is_soft_singular = |pivot: f64, scale: f64| {
        p.is_negligible(pivot) || pivot.abs() < config.soft_pivot_threshold(scale)
    };

    for k in 0..n.saturating_sub(1) {
        // Find pivot: largest |a(row, k)| / scale(row), first one wins on ties
        let mut max_ratio = 0.0;
        let mut pivot_idx = k;
        for i in k..n {
            let row = permutation.physical(i);
            let scale = scale_factors[row];
            if p.is_negligible(scale) {
                continue;
            }
            let ratio = p.cast(lu[[row, k]].abs() / scale);
            if ratio > max_ratio {
                max_ratio = ratio;
                pivot_idx = i;
            }
        }

        if pivot_idx != k {
            log::trace!("column {k}: swapping logical rows {k} and {pivot_idx}");
            permutation.swap(k, pivot_idx);
        }

        let pivot_row = permutation.physical(k);
        let pivot = lu[[pivot_row, k]];
        if is_soft_singular(pivot, scale_factors[pivot_row]) {
            log::debug!(
                "LU ({p}): near-singular pivot {pivot:.3e} at column {k} (row scale {:.3e})",
                scale_factors[pivot_row]
            );
            soft_singular_columns.push(k);
        }

        // Compute multipliers and eliminate
        let pivot_is_zero = p.is_negligible(pivot);
        for i in (k + 1)..n {
            let row = permutation.physical(i);
            let entry = lu[[row, k]];
            let mult = if !pivot_is_zero {
                p.cast(entry / pivot)
            } else if entry == 0.0 {
                0.0
            } else {
                f64::INFINITY.copysign(entry) * pivot.signum()
            };
            lu[[row, k]] = mult; // Store multiplier in L part

            for j in (k + 1)..n {
                let update = p.cast(mult * lu[[pivot_row, j]]);
                lu[[row, j]] = p.cast(lu[[row, j]] - update);
            }
        }
    }

    let last_row = permutation.physical(n - 1);
    if is_soft_singular(lu[[last_row, n - 1]], scale_factors[last_row]) {
        log::debug!("LU ({p}): near-singular final diagonal at column {}", n - 1);
        soft_singular_columns.push(n - 1);
    }

    Ok(LuFactorization {
        lu,
        permutation,
        scale_factors,
        config: *config,
        soft_singular_columns,
    })
}

/// Solve against existing factors (forward then back substitution)
pub fn solve_permuted(factors: &LuFactorization, b: &Vector) -> Result<Vector> {
    factors.solve(b)
}

/// Solve `Ax = b` using LU decomposition at `precision`
///
/// This is a convenience function that combines factorization and solve.
pub fn solve_dense(a: &DenseMatrix, b: &Vector, precision: Precision) -> Result<Vector> {
    solve_dense_with(a, b, &SolverConfig::new(precision))
}

/// Solve `Ax = b` using LU decomposition with an explicit configuration
pub fn solve_dense_with(a: &DenseMatrix, b: &Vector, config: &SolverConfig) -> Result<Vector> {
    if b.len() != a.rows() {
        return Err(SolverError::DimensionMismatch {
            expected: a.rows(),
            got: b.len(),
        });
    }
    let factorization = factorize_with(a, config)?;
    factorization.solve(b)
}
