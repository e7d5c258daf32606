//! L1 condition number
//!
//! `cond₁(A) = ‖A‖₁ · ‖A⁻¹‖₁` with the inverse formed by [`invert_with`].
//! A matrix whose norm or inverse norm is zero or non-finite reports
//! `inf`.

use crate::config::SolverConfig;
use crate::direct::inverse::invert_with;
use crate::error::Result;
use crate::matrix::DenseMatrix;
use crate::precision::Precision;

/// Maximum absolute column sum at `precision`
///
/// Any non-finite entry makes the norm `inf`.
pub fn norm1(a: &DenseMatrix, precision: Precision) -> f64 {
    let mut max_col_sum = 0.0_f64;
    for column in a.as_array().columns() {
        let mut col_sum = 0.0;
        for &v in column.iter() {
            let v = precision.cast(v);
            if !v.is_finite() {
                return f64::INFINITY;
            }
            col_sum = precision.cast(col_sum + v.abs());
        }
        if col_sum > max_col_sum {
            max_col_sum = col_sum;
        }
    }
    precision.cast(max_col_sum)
}

/// L1 condition number at `precision`
pub fn condition_number_l1(a: &DenseMatrix, precision: Precision) -> Result<f64> {
    condition_number_l1_with(a, &SolverConfig::new(precision))
}

/// L1 condition number with an explicit configuration
pub fn condition_number_l1_with(a: &DenseMatrix, config: &SolverConfig) -> Result<f64> {
    a.square_dim()?;
    let p = config.precision;

    let norm_a = norm1(&a.rounded(p), p);
    if norm_a == 0.0 || !norm_a.is_finite() {
        log::debug!("cond1 ({p}): ‖A‖₁ = {norm_a:e}, reporting inf");
        return Ok(f64::INFINITY);
    }

    let inverse = invert_with(a, config)?;
    let norm_inv = norm1(&inverse, p);
    if norm_inv == 0.0 || !norm_inv.is_finite() {
        log::debug!("cond1 ({p}): ‖A⁻¹‖₁ = {norm_inv:e}, reporting inf");
        return Ok(f64::INFINITY);
    }

    let cond = p.cast(norm_a * norm_inv);
    log::debug!("cond1 ({p}) of {n}x{n}: {cond:.6e}", n = a.rows());
    Ok(if cond.is_finite() { cond } else { f64::INFINITY })
}
