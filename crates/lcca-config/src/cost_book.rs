//! Typed cost book: unit costs per system type plus finance defaults.
//!
//! Every key the cost formulas reference is a required field, so a missing
//! key fails at load time rather than mid-computation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use validator::Validate;

use crate::error::{ConfigError, ConfigResult};

/// Unit costs for a vacuum sewer system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct VacuumCosts {
    /// Main line cost per linear foot at shallow bury depth.
    #[validate(range(min = 0.0))]
    pub main_per_lf_shallow: f64,
    /// Lateral cost per linear foot.
    #[validate(range(min = 0.0))]
    pub lateral_per_lf: f64,
    /// Lump-sum vacuum station cost; one station serves up to 400 lots.
    #[validate(range(min = 0.0))]
    pub station_per_400_lots_ls: f64,
    /// Valve pit cost; one pit serves two lots.
    #[validate(range(min = 0.0))]
    pub valve_pit_each: f64,
    /// Annual O&M cost per connection.
    #[validate(range(min = 0.0))]
    pub annual_om_per_conn: f64,
    /// Daily energy draw per connection in kWh.
    #[validate(range(min = 0.0))]
    pub energy_kwh_per_conn_day: f64,
}

/// Unit costs for a low-pressure sewer system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PressureCosts {
    /// Main line cost per linear foot at shallow bury depth.
    #[validate(range(min = 0.0))]
    pub main_per_lf_shallow: f64,
    /// Lateral cost per linear foot.
    #[validate(range(min = 0.0))]
    pub lateral_per_lf: f64,
    /// Grinder pump package cost, one per lot.
    #[validate(range(min = 0.0))]
    pub grinder_pump_package_each: f64,
    /// Lump-sum booster station, applied when the main run exceeds the
    /// booster threshold.
    #[validate(range(min = 0.0))]
    pub booster_ls: f64,
    /// Annual O&M cost per connection.
    #[validate(range(min = 0.0))]
    pub annual_om_per_conn: f64,
    /// Daily energy draw per connection in kWh.
    #[validate(range(min = 0.0))]
    pub energy_kwh_per_conn_day: f64,
    /// Grinder pump replacement interval in years. Treated as at least 1.
    pub pump_replace_years: u32,
    /// Replacement cost per pump.
    #[validate(range(min = 0.0))]
    pub pump_replace_cost_each: f64,
}

/// System-wide finance defaults, used when a cluster does not override them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FinanceDefaults {
    /// Default financial horizon in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1))]
    pub analysis_years: Option<u32>,
    /// Default annual discount rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0, exclusive_max = 1.0))]
    pub discount_rate: Option<f64>,
    /// Default energy unit cost in $/kWh.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub energy_rate_per_kwh: Option<f64>,
}

/// The loaded cost book: one section per system type plus finance defaults.
///
/// The raw document is retained so callers can expose it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CostBook {
    /// Vacuum system unit costs.
    #[validate(nested)]
    pub vacuum: VacuumCosts,
    /// Pressure system unit costs.
    #[validate(nested)]
    pub pressure: PressureCosts,
    /// Finance defaults. Absent keys fall through to hardcoded constants.
    #[serde(default)]
    #[validate(nested)]
    pub finance: FinanceDefaults,
    /// The document exactly as loaded, for verbatim exposure.
    #[serde(skip)]
    raw: serde_json::Value,
}

impl CostBook {
    /// Parse a cost book from YAML text.
    ///
    /// Fails if any required key is missing or any value is out of range.
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let document: serde_yaml::Value = serde_yaml::from_str(yaml)?;
        let mut book: Self = serde_yaml::from_value(document.clone())?;
        book.raw = serde_json::to_value(&document)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        book.validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(book)
    }

    /// The document exactly as loaded.
    #[must_use]
    pub fn document(&self) -> &serde_json::Value {
        &self.raw
    }
}

/// Load and validate a cost book from a YAML file.
pub async fn load_cost_book(path: impl AsRef<Path>) -> ConfigResult<CostBook> {
    let path = path.as_ref();
    let yaml = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

    let book = CostBook::from_yaml_str(&yaml)?;

    info!(path = %path.display(), "Cost book loaded");
    Ok(book)
}
