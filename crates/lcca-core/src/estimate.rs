//! Cost estimate and comparison result types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The collection-system technology an estimate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemKind {
    /// Vacuum sewer: central station plus shared valve pits.
    Vacuum,
    /// Low-pressure sewer: one grinder pump package per lot.
    Pressure,
}

impl fmt::Display for SystemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vacuum => write!(f, "Vacuum"),
            Self::Pressure => write!(f, "Pressure"),
        }
    }
}

/// Lifecycle cost projection for one system type.
///
/// All monetary values are in USD and rounded to 2 decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// System the estimate applies to.
    pub system: SystemKind,
    /// One-time capital cost.
    pub capex: f64,
    /// First-year operating cost.
    pub annual_om_year1: f64,
    /// Discounted sum of all operating and replacement costs over the horizon.
    pub npv_om: f64,
    /// `capex + npv_om`.
    pub npv_total: f64,
}

/// Side-by-side comparison of the two candidate systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Vacuum system projection.
    pub vacuum: CostEstimate,
    /// Pressure system projection.
    pub pressure: CostEstimate,
    /// System with the lower `npv_total`. Exact ties resolve to `Pressure`.
    pub preferred: SystemKind,
    /// Absolute difference between the two `npv_total` values, rounded to 2
    /// decimal places.
    pub npv_delta: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_kind_display() {
        assert_eq!(SystemKind::Vacuum.to_string(), "Vacuum");
        assert_eq!(SystemKind::Pressure.to_string(), "Pressure");
    }

    #[test]
    fn test_system_kind_serializes_as_name() {
        assert_eq!(
            serde_json::to_string(&SystemKind::Vacuum).unwrap(),
            "\"Vacuum\""
        );
    }

    #[test]
    fn test_comparison_result_json_shape() {
        let estimate = CostEstimate {
            system: SystemKind::Vacuum,
            capex: 100.0,
            annual_om_year1: 10.0,
            npv_om: 90.0,
            npv_total: 190.0,
        };
        let result = ComparisonResult {
            vacuum: estimate.clone(),
            pressure: CostEstimate {
                system: SystemKind::Pressure,
                ..estimate
            },
            preferred: SystemKind::Vacuum,
            npv_delta: 0.0,
        };

        let json: serde_json::Value = serde_json::to_value(&result).unwrap();
        assert_eq!(json["vacuum"]["system"], "Vacuum");
        assert_eq!(json["pressure"]["system"], "Pressure");
        assert_eq!(json["preferred"], "Vacuum");
    }
}
