//! Accuracy metrics

use crate::matrix::Vector;
use crate::precision::Precision;

/// Largest `|computed[i] - truth[i]|` at `precision`
///
/// `truth` is rounded to `precision` before comparison. A non-finite
/// computed entry or a length mismatch gives `inf`, so singular solves
/// surface as an infinite error.
pub fn max_abs_error(computed: &Vector, truth: &Vector, precision: Precision) -> f64 {
    if computed.len() != truth.len() {
        return f64::INFINITY;
    }
    let mut max_err = 0.0_f64;
    for (&c, &t) in computed.iter().zip(truth.iter()) {
        if !c.is_finite() {
            return f64::INFINITY;
        }
        let err = precision.cast((c - precision.cast(t)).abs());
        if err > max_err {
            max_err = err;
        }
    }
    if max_err.is_finite() { max_err } else { f64::INFINITY }
}
