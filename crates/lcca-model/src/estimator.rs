//! Capital and operating cost estimators for the two candidate systems.

use lcca_config::CostBook;
use lcca_core::{Cluster, ComparisonResult, CostEstimate, ModelResult, SystemKind};
use tracing::debug;

use crate::finance::{npv, FinanceParams};

/// Main-line length above which a pressure system needs a booster station.
/// Fixed policy constant, deliberately not configurable.
pub const BOOSTER_MAIN_LF_THRESHOLD: f64 = 8000.0;

const DAYS_PER_YEAR: f64 = 365.0;

/// Deterministic lifecycle cost comparison engine.
///
/// Holds the immutable cost book injected at construction; every call is
/// request-scoped and side-effect free.
#[derive(Debug, Clone)]
pub struct CostModel {
    book: CostBook,
}

impl CostModel {
    /// Create a model over the given cost book.
    #[must_use]
    pub fn new(book: CostBook) -> Self {
        Self { book }
    }

    /// The cost book this model was built with.
    #[must_use]
    pub fn cost_book(&self) -> &CostBook {
        &self.book
    }

    /// Estimate the vacuum sewer lifecycle cost for a cluster.
    ///
    /// The station term guarantees at least one vacuum station even for a
    /// single-lot cluster; ceil division models discrete equipment units
    /// serving a fixed lot capacity.
    #[must_use]
    pub fn estimate_vacuum(&self, cluster: &Cluster) -> CostEstimate {
        let costs = &self.book.vacuum;
        let fin = FinanceParams::resolve(cluster, &self.book.finance);
        let lots = f64::from(cluster.num_lots);

        let stations = cluster.num_lots.max(1).div_ceil(400);
        let valve_pits = cluster.num_lots.div_ceil(2);

        let capex = cluster.est_main_lf * costs.main_per_lf_shallow
            + cluster.est_laterals_lf * costs.lateral_per_lf
            + f64::from(stations) * costs.station_per_400_lots_ls
            + f64::from(valve_pits) * costs.valve_pit_each;

        let annual = lots * costs.annual_om_per_conn
            + lots * costs.energy_kwh_per_conn_day * DAYS_PER_YEAR * fin.energy_rate_per_kwh;

        let npv_om = npv(
            std::iter::repeat(annual).take(fin.analysis_years as usize),
            fin.discount_rate,
        );

        CostEstimate {
            system: SystemKind::Vacuum,
            capex: round2(capex),
            annual_om_year1: round2(annual),
            npv_om: round2(npv_om),
            npv_total: round2(capex + npv_om),
        }
    }

    /// Estimate the low-pressure sewer lifecycle cost for a cluster.
    ///
    /// Grinder pumps are replaced every `pump_replace_years` years (treated
    /// as at least 1); replacement years are 1-indexed, so a lump cost lands
    /// in every year divisible by the interval.
    #[must_use]
    pub fn estimate_pressure(&self, cluster: &Cluster) -> CostEstimate {
        let costs = &self.book.pressure;
        let fin = FinanceParams::resolve(cluster, &self.book.finance);
        let lots = f64::from(cluster.num_lots);

        let booster = if cluster.est_main_lf > BOOSTER_MAIN_LF_THRESHOLD {
            costs.booster_ls
        } else {
            0.0
        };

        let capex = cluster.est_main_lf * costs.main_per_lf_shallow
            + cluster.est_laterals_lf * costs.lateral_per_lf
            + lots * costs.grinder_pump_package_each
            + booster;

        let annual = lots * costs.annual_om_per_conn
            + lots * costs.energy_kwh_per_conn_day * DAYS_PER_YEAR * fin.energy_rate_per_kwh;

        let replace_interval = costs.pump_replace_years.max(1);
        let replace_cost = lots * costs.pump_replace_cost_each;
        let series = (1..=fin.analysis_years).map(|year| {
            if year % replace_interval == 0 {
                annual + replace_cost
            } else {
                annual
            }
        });

        let npv_om = npv(series, fin.discount_rate);

        CostEstimate {
            system: SystemKind::Pressure,
            capex: round2(capex),
            annual_om_year1: round2(annual),
            npv_om: round2(npv_om),
            npv_total: round2(capex + npv_om),
        }
    }

    /// Compare both systems for a cluster.
    ///
    /// The cluster is validated first; the model is never run on invalid
    /// input. `Vacuum` is preferred only on strictly lower `npv_total`, so an
    /// exact tie resolves to `Pressure`.
    pub fn compare(&self, cluster: &Cluster) -> ModelResult<ComparisonResult> {
        cluster.check()?;

        let vacuum = self.estimate_vacuum(cluster);
        let pressure = self.estimate_pressure(cluster);

        let preferred = if vacuum.npv_total < pressure.npv_total {
            SystemKind::Vacuum
        } else {
            SystemKind::Pressure
        };
        let npv_delta = round2((vacuum.npv_total - pressure.npv_total).abs());

        debug!(
            num_lots = cluster.num_lots,
            vacuum_npv = vacuum.npv_total,
            pressure_npv = pressure.npv_total,
            preferred = %preferred,
            "Comparison computed"
        );

        Ok(ComparisonResult {
            vacuum,
            pressure,
            preferred,
            npv_delta,
        })
    }
}

/// Round a monetary value to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
