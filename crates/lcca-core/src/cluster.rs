//! Cluster sizing input for a collection-system cost comparison.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ModelError, ModelResult};

/// A cluster of lots to be served by one collection-system extension.
///
/// The three finance fields are per-request overrides; when absent they fall
/// back to the cost book's `finance` section and then to hardcoded defaults
/// (30 years, 6% discount rate, $0.14/kWh).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Cluster {
    /// Number of service connections. Must be positive.
    #[validate(range(min = 1))]
    pub num_lots: u32,
    /// Estimated linear feet of main line.
    #[validate(range(min = 0.0))]
    pub est_main_lf: f64,
    /// Estimated linear feet of lateral connections.
    #[validate(range(min = 0.0))]
    pub est_laterals_lf: f64,
    /// Financial horizon in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub analysis_years: Option<u32>,
    /// Annual discount rate, strictly between 0 and 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, exclusive_max = 1.0))]
    pub discount_rate: Option<f64>,
    /// Energy unit cost in $/kWh.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub energy_rate_per_kwh: Option<f64>,
}

impl Cluster {
    /// Create a cluster with the required sizing fields.
    #[must_use]
    pub fn new(num_lots: u32, est_main_lf: f64, est_laterals_lf: f64) -> Self {
        Self {
            num_lots,
            est_main_lf,
            est_laterals_lf,
            analysis_years: None,
            discount_rate: None,
            energy_rate_per_kwh: None,
        }
    }

    /// Override the financial horizon.
    #[must_use]
    pub fn with_analysis_years(mut self, years: u32) -> Self {
        self.analysis_years = Some(years);
        self
    }

    /// Override the annual discount rate.
    #[must_use]
    pub fn with_discount_rate(mut self, rate: f64) -> Self {
        self.discount_rate = Some(rate);
        self
    }

    /// Override the energy unit cost.
    #[must_use]
    pub fn with_energy_rate(mut self, rate: f64) -> Self {
        self.energy_rate_per_kwh = Some(rate);
        self
    }

    /// Run boundary validation, flattening validator output into a
    /// single descriptive message.
    pub fn check(&self) -> ModelResult<()> {
        self.validate()
            .map_err(|e| ModelError::InvalidCluster(flatten_errors(&e)))
    }
}

/// Render validator errors as a compact `field: code` list.
fn flatten_errors(errors: &validator::ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                err.message
                    .as_ref()
                    .map_or_else(|| format!("{field}: {}", err.code), |m| format!("{field}: {m}"))
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let cluster = Cluster::new(100, 5000.0, 2000.0)
            .with_analysis_years(20)
            .with_discount_rate(0.05)
            .with_energy_rate(0.12);

        assert_eq!(cluster.num_lots, 100);
        assert_eq!(cluster.analysis_years, Some(20));
        assert_eq!(cluster.discount_rate, Some(0.05));
        assert_eq!(cluster.energy_rate_per_kwh, Some(0.12));
    }

    #[test]
    fn test_valid_cluster_passes() {
        let cluster = Cluster::new(1, 0.0, 0.0);
        assert!(cluster.check().is_ok());
    }

    #[test]
    fn test_zero_lots_rejected() {
        let cluster = Cluster::new(0, 100.0, 50.0);
        let err = cluster.check().unwrap_err();
        assert!(err.to_string().contains("num_lots"));
    }

    #[test]
    fn test_negative_lengths_rejected() {
        let cluster = Cluster::new(10, -1.0, 50.0);
        assert!(cluster.check().is_err());
    }

    #[test]
    fn test_discount_rate_bounds() {
        assert!(Cluster::new(10, 0.0, 0.0)
            .with_discount_rate(0.0)
            .check()
            .is_err());
        assert!(Cluster::new(10, 0.0, 0.0)
            .with_discount_rate(1.0)
            .check()
            .is_err());
        assert!(Cluster::new(10, 0.0, 0.0)
            .with_discount_rate(0.99)
            .check()
            .is_ok());
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let cluster = Cluster::new(10, 100.0, 50.0);
        let json = serde_json::to_string(&cluster).unwrap();
        assert!(!json.contains("analysis_years"));
        assert!(!json.contains("discount_rate"));
    }
}
