//! Solver configuration
//!
//! All fields have defaults so a configuration can be deserialized from a
//! partial JSON document such as `{"precision": "single"}`.

use crate::error::{Result, SolverError};
use crate::precision::Precision;
use serde::{Deserialize, Serialize};

/// Safety factors applied on top of the precision's epsilon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// A dense pivot is reported as soft-singular when
    /// `|pivot| < epsilon * pivot_factor * scale[row]`
    pub pivot_factor: f64,
    /// Multiplier on [`Precision::negligible`] below which a Thomas
    /// denominator aborts the solve
    pub breakdown_factor: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            pivot_factor: 1.0,
            breakdown_factor: 10.0,
        }
    }
}

impl Tolerances {
    /// Check that every factor is finite and strictly positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("pivot_factor", self.pivot_factor),
            ("breakdown_factor", self.breakdown_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SolverError::InvalidTolerance { name, value });
            }
        }
        Ok(())
    }
}

/// Configuration shared by the dense and tridiagonal solvers
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Working precision for every arithmetic step
    pub precision: Precision,
    /// Singularity detection factors
    pub tolerances: Tolerances,
}

impl SolverConfig {
    /// Default tolerances at the given precision
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            tolerances: Tolerances::default(),
        }
    }

    /// Replace the tolerances
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Threshold below which a Thomas denominator is a hard breakdown
    pub fn breakdown_threshold(&self) -> f64 {
        self.precision.negligible() * self.tolerances.breakdown_factor
    }

    /// Threshold below which a dense pivot with row scale `scale` is soft-singular
    pub fn soft_pivot_threshold(&self, scale: f64) -> f64 {
        self.precision.epsilon() * self.tolerances.pivot_factor * scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.precision, Precision::Double);
        assert_eq!(config.tolerances.pivot_factor, 1.0);
        assert_eq!(config.tolerances.breakdown_factor, 10.0);
        assert!(config.tolerances.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: SolverConfig = serde_json::from_str(r#"{"precision": "float"}"#).unwrap();
        assert_eq!(config.precision, Precision::Single);
        assert_eq!(config.tolerances, Tolerances::default());

        let config: SolverConfig =
            serde_json::from_str(r#"{"tolerances": {"breakdown_factor": 2.0}}"#).unwrap();
        assert_eq!(config.precision, Precision::Double);
        assert_eq!(config.tolerances.breakdown_factor, 2.0);
        assert_eq!(config.tolerances.pivot_factor, 1.0);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SolverConfig::new(Precision::Single).with_tolerances(Tolerances {
            pivot_factor: 4.0,
            breakdown_factor: 1.0,
        });
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"single\""));
        let back: SolverConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validate_rejects_bad_factors() {
        let bad = Tolerances {
            pivot_factor: 0.0,
            ..Tolerances::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(SolverError::InvalidTolerance {
                name: "pivot_factor",
                ..
            })
        ));

        let bad = Tolerances {
            breakdown_factor: f64::NAN,
            ..Tolerances::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_thresholds_scale_with_precision() {
        let single = SolverConfig::new(Precision::Single);
        let double = SolverConfig::new(Precision::Double);
        assert!(single.breakdown_threshold() > double.breakdown_threshold());
        assert_eq!(single.soft_pivot_threshold(2.0), 2.0 * f32::EPSILON as f64);
    }
}
