//! Finance parameter resolution and net-present-value discounting.

use lcca_config::FinanceDefaults;
use lcca_core::Cluster;

/// Fallback financial horizon when neither the cluster nor the cost book
/// sets one.
pub const DEFAULT_ANALYSIS_YEARS: u32 = 30;
/// Fallback annual discount rate.
pub const DEFAULT_DISCOUNT_RATE: f64 = 0.06;
/// Fallback energy unit cost in $/kWh.
pub const DEFAULT_ENERGY_RATE_PER_KWH: f64 = 0.14;

/// Fully resolved finance parameters for one estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinanceParams {
    /// Financial horizon in years.
    pub analysis_years: u32,
    /// Annual discount rate.
    pub discount_rate: f64,
    /// Energy unit cost in $/kWh.
    pub energy_rate_per_kwh: f64,
}

impl FinanceParams {
    /// Resolve effective finance parameters.
    ///
    /// The full three-level fallback chain is visible here and nowhere else:
    /// cluster override, then cost-book `finance` defaults, then the
    /// hardcoded constants.
    #[must_use]
    pub fn resolve(cluster: &Cluster, defaults: &FinanceDefaults) -> Self {
        Self {
            analysis_years: cluster
                .analysis_years
                .or(defaults.analysis_years)
                .unwrap_or(DEFAULT_ANALYSIS_YEARS),
            discount_rate: cluster
                .discount_rate
                .or(defaults.discount_rate)
                .unwrap_or(DEFAULT_DISCOUNT_RATE),
            energy_rate_per_kwh: cluster
                .energy_rate_per_kwh
                .or(defaults.energy_rate_per_kwh)
                .unwrap_or(DEFAULT_ENERGY_RATE_PER_KWH),
        }
    }
}

/// Net present value of a yearly cost series.
///
/// The first element is year 1; each year `t` is discounted by
/// `(1 + rate)^t`.
#[must_use]
pub fn npv(series: impl IntoIterator<Item = f64>, rate: f64) -> f64 {
    series
        .into_iter()
        .zip(1i32..)
        .map(|(cost, year)| cost / (1.0 + rate).powi(year))
        .sum()
}
