//! Thomas algorithm for tridiagonal systems.
//!
//! Direct O(n) elimination over [`BandedMatrix`] storage. There is no
//! pivoting, so a denominator that vanishes during the forward sweep is a
//! hard failure: the solve stops, the solution is filled with `NaN` and
//! [`ThomasSolution::ok`] is `false`.

use crate::config::SolverConfig;
use crate::error::{Result, SolverError};
use crate::matrix::{BandedMatrix, Vector};
use crate::precision::Precision;

/// Thomas solver result
#[derive(Debug, Clone)]
pub struct ThomasSolution {
    /// Solution vector (all `NaN` when `ok` is false)
    pub x: Vector,
    /// Whether elimination completed
    pub ok: bool,
    /// Row whose denominator vanished, if any
    pub breakdown_row: Option<usize>,
}

impl ThomasSolution {
    fn breakdown(n: usize, row: usize) -> Self {
        Self {
            x: Vector::from_elem(n, f64::NAN),
            ok: false,
            breakdown_row: Some(row),
        }
    }
}

/// Solve a tridiagonal system `Ax = d` at `precision`
pub fn thomas_solve(a: &BandedMatrix, d: &Vector, precision: Precision) -> Result<ThomasSolution> {
    thomas_solve_with(a, d, &SolverConfig::new(precision))
}

/// Solve a tridiagonal system `Ax = d` with an explicit configuration
///
/// - forward sweep: `c'[i] = u[i] / m`, `d'[i] = (d[i] - l[i] d'[i-1]) / m`
///   with `m = b[i] - l[i] c'[i-1]`
/// - back substitution: `x[i] = d'[i] - c'[i] x[i+1]`
pub fn thomas_solve_with(
    a: &BandedMatrix,
    d: &Vector,
    config: &SolverConfig,
) -> Result<ThomasSolution> {
    let n = a.dim();
    if d.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: d.len(),
        });
    }
    config.tolerances.validate()?;
    if n == 0 {
        return Ok(ThomasSolution {
            x: Vector::zeros(0),
            ok: true,
            breakdown_row: None,
        });
    }

    let p = config.precision;
    let threshold = config.breakdown_threshold();

    let mut c_prime = Vector::zeros(n);
    let mut d_prime = Vector::zeros(n);

    // Forward sweep
    let b0 = p.cast(a.main(0));
    if b0.abs() < threshold {
        log::warn!("Thomas ({p}): zero pivot at row 0 (b0 = {b0:e})");
        return Ok(ThomasSolution::breakdown(n, 0));
    }
    c_prime[0] = p.cast(p.cast(a.sup(0)) / b0);
    d_prime[0] = p.cast(p.cast(d[0]) / b0);

    for i in 1..n {
        let l_i = p.cast(a.sub(i));
        let b_i = p.cast(a.main(i));
        let u_i = p.cast(a.sup(i));

        let den = p.cast(b_i - p.cast(l_i * c_prime[i - 1]));
        if den.abs() < threshold {
            log::warn!("Thomas ({p}): zero pivot at row {i} (denominator = {den:e})");
            return Ok(ThomasSolution::breakdown(n, i));
        }

        if i < n - 1 {
            c_prime[i] = p.cast(u_i / den);
        }
        d_prime[i] = p.cast((p.cast(d[i]) - p.cast(l_i * d_prime[i - 1])) / den);
    }

    // Back substitution
    let mut x = Vector::zeros(n);
    x[n - 1] = d_prime[n - 1];
    for i in (0..n - 1).rev() {
        x[i] = p.cast(d_prime[i] - p.cast(c_prime[i] * x[i + 1]));
    }

    Ok(ThomasSolution {
        x,
        ok: true,
        breakdown_row: None,
    })
}
