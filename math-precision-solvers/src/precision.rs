//! Working-precision policy
//!
//! Every matrix and vector in this crate is stored as `f64`. A [`Precision`]
//! tag decides how each intermediate result is rounded: `Double` keeps the
//! value as is, `Single` rounds it through `f32`. Threading the same tag
//! through every sum, product and quotient reproduces the behaviour of a
//! genuine single-precision implementation while keeping one code path.

use crate::error::SolverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Working precision selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// IEEE-754 binary32 semantics
    #[serde(alias = "float", alias = "f32")]
    Single,
    /// IEEE-754 binary64 semantics
    #[default]
    #[serde(alias = "f64")]
    Double,
}

impl Precision {
    /// Both precisions, narrowest first
    pub const ALL: [Precision; 2] = [Precision::Single, Precision::Double];

    /// Round `value` to the representable grid of this precision
    ///
    /// Values outside the `f32` range become `±inf`, as they would in a
    /// real single-precision computation.
    #[inline]
    pub fn cast(self, value: f64) -> f64 {
        match self {
            Precision::Single => value as f32 as f64,
            Precision::Double => value,
        }
    }

    /// Machine epsilon of this precision
    #[inline]
    pub fn epsilon(self) -> f64 {
        match self {
            Precision::Single => f32::EPSILON as f64,
            Precision::Double => f64::EPSILON,
        }
    }

    /// Smallest positive normal number of this precision
    #[inline]
    pub fn min_positive(self) -> f64 {
        match self {
            Precision::Single => f32::MIN_POSITIVE as f64,
            Precision::Double => f64::MIN_POSITIVE,
        }
    }

    /// Magnitude below which a value is treated as zero
    ///
    /// `epsilon * min_positive` of the same width, so both the dense and the
    /// banded path share one precision-relative floor.
    #[inline]
    pub fn negligible(self) -> f64 {
        self.epsilon() * self.min_positive()
    }

    /// Returns `true` if `|value|` is below [`Precision::negligible`]
    #[inline]
    pub fn is_negligible(self, value: f64) -> bool {
        value.abs() < self.negligible()
    }

    /// Short lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Precision::Single => "single",
            Precision::Double => "double",
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Precision {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "float" | "f32" => Ok(Precision::Single),
            "double" | "f64" => Ok(Precision::Double),
            _ => Err(SolverError::UnknownPrecision(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_double_is_identity() {
        let x = 0.1_f64 + 0.2;
        assert_eq!(Precision::Double.cast(x), x);
    }

    #[test]
    fn test_cast_single_rounds_through_f32() {
        let x = 0.1_f64;
        let rounded = Precision::Single.cast(x);
        assert_ne!(rounded, x);
        assert_eq!(rounded, 0.1_f32 as f64);
        // idempotent once on the f32 grid
        assert_eq!(Precision::Single.cast(rounded), rounded);
    }

    #[test]
    fn test_cast_single_overflows_to_infinity() {
        assert_eq!(Precision::Single.cast(1e300), f64::INFINITY);
        assert_eq!(Precision::Single.cast(-1e300), f64::NEG_INFINITY);
        assert!(Precision::Single.cast(f64::NAN).is_nan());
    }

    #[test]
    fn test_epsilon() {
        assert_eq!(Precision::Single.epsilon(), f32::EPSILON as f64);
        assert_eq!(Precision::Double.epsilon(), f64::EPSILON);
        assert!(Precision::Single.epsilon() > Precision::Double.epsilon());
    }

    #[test]
    fn test_negligible_is_precision_relative() {
        for p in Precision::ALL {
            assert!(p.negligible() > 0.0);
            assert!(p.is_negligible(0.0));
            assert!(!p.is_negligible(p.min_positive()));
        }
        assert!(Precision::Single.negligible() > Precision::Double.negligible());
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("single".parse::<Precision>().unwrap(), Precision::Single);
        assert_eq!("float".parse::<Precision>().unwrap(), Precision::Single);
        assert_eq!(" Double ".parse::<Precision>().unwrap(), Precision::Double);
        assert!("half".parse::<Precision>().is_err());
        assert_eq!(Precision::Single.to_string(), "single");
        assert_eq!(Precision::default(), Precision::Double);
    }
}
