use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Absolute element tolerance used by `Matrix::approx_eq`.
pub const DEFAULT_EQUALITY_TOLERANCE: f64 = 1e-7;

/// Numeric tolerances consulted by equality and inversion.
///
/// `equality_tolerance` is read by `Matrix::approx_eq_config`;
/// `singularity` by `Matrix::inverse_with`. `PartialEq` and `approx_eq`
/// always use `DEFAULT_EQUALITY_TOLERANCE`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct NumericConfig {
    pub equality_tolerance: f64,

    #[serde(default)]
    pub singularity: SingularityCheck,
}

/// How `inverse_with` decides that a determinant is zero.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SingularityCheck {
    /// Singular only when the determinant is exactly `0.0`.
    #[default]
    Exact,
    /// Singular when `|det| <= epsilon`.
    Tolerance { epsilon: f64 },
}

impl SingularityCheck {
    pub fn is_singular(&self, determinant: f64) -> bool {
        match *self {
            SingularityCheck::Exact => determinant == 0.0,
            SingularityCheck::Tolerance { epsilon } => determinant.abs() <= epsilon,
        }
    }
}

impl FromStr for SingularityCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(SingularityCheck::Exact),
            "tolerance" => Ok(SingularityCheck::Tolerance {
                epsilon: DEFAULT_EQUALITY_TOLERANCE,
            }),
            _ => Err(format!(
                "Unknown singularity check: {}. Expected `exact` or `tolerance`",
                s
            )),
        }
    }
}

impl NumericConfig {
    pub fn new(equality_tolerance: f64, singularity: SingularityCheck) -> Self {
        Self {
            equality_tolerance,
            singularity,
        }
    }
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self {
            equality_tolerance: DEFAULT_EQUALITY_TOLERANCE,
            singularity: SingularityCheck::Exact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_check_only_flags_zero() {
        let check = SingularityCheck::Exact;
        assert!(check.is_singular(0.0));
        assert!(check.is_singular(-0.0));
        assert!(!check.is_singular(1e-300));
    }

    #[test]
    fn tolerance_check_flags_small_values() {
        let check = SingularityCheck::Tolerance { epsilon: 1e-9 };
        assert!(check.is_singular(5e-10));
        assert!(check.is_singular(-1e-9));
        assert!(!check.is_singular(1e-8));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("EXACT".parse::<SingularityCheck>(), Ok(SingularityCheck::Exact));
        assert_eq!(
            "Tolerance".parse::<SingularityCheck>(),
            Ok(SingularityCheck::Tolerance { epsilon: 1e-7 })
        );
    }
}
