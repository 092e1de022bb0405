//! Siteworks earthwork estimation: lot pad fill volume, cost, and viability.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fill compaction factor applied to raw cut/fill volume.
pub const DEFAULT_COMPACTION_FACTOR: f64 = 1.15;
/// Maximum fill-cost-to-annual-rent ratio for a lot to stay viable.
pub const DEFAULT_VIABILITY_RATIO: f64 = 0.15;

const SQFT_PER_CY_FT: f64 = 27.0;

/// One lot in a siteworks assessment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LotPlan {
    /// Caller-supplied lot identifier, echoed back in the assessment.
    pub id: String,
    /// Existing lot elevation in feet.
    pub elevation_ft: f64,
    /// Target pad elevation in feet.
    pub pad_target_ft: f64,
    /// Pad area in square feet.
    #[validate(range(min = 0.0))]
    pub area_sqft: f64,
    /// Expected annual rent for the finished lot.
    #[validate(range(min = 0.0))]
    pub annual_rent: f64,
    /// Whether sewer service can reach this lot.
    #[serde(default = "default_sewer_ok")]
    pub sewer_ok: bool,
}

fn default_sewer_ok() -> bool {
    true
}

/// Financial viability of a single lot's fill work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LotViability {
    /// Fill cost is an acceptable fraction of annual rent.
    Viable,
    /// Fill cost is out of proportion, or the lot produces no rent.
    Redesign,
}

/// Overall layout status for a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LotStatus {
    /// Lot works as laid out.
    Ok,
    /// Lot is non-viable or sewer-blocked.
    NeedsRedesign,
}

/// A batch siteworks assessment request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SiteworksRequest {
    /// Lots to assess. Must not be empty.
    #[validate(length(min = 1), nested)]
    pub lots: Vec<LotPlan>,
    /// Fill unit cost in $/CY.
    #[validate(range(min = 0.0))]
    pub unit_cost_per_cy: f64,
    /// Compaction factor; defaults to 1.15.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 1.0))]
    pub compaction_factor: Option<f64>,
    /// Viability threshold ratio; defaults to 0.15.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(exclusive_min = 0.0))]
    pub viability_ratio: Option<f64>,
}

/// Per-lot assessment output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotAssessment {
    /// Lot identifier from the request.
    pub id: String,
    /// Compacted fill volume in cubic yards.
    pub fill_cy: f64,
    /// Fill cost in USD.
    pub fill_cost: f64,
    /// Financial viability of the fill work.
    pub viability: LotViability,
    /// Overall layout status.
    pub status: LotStatus,
}

/// Compacted fill volume in cubic yards for one pad.
///
/// Pads already at or above target need no fill; the delta clamps to zero.
#[must_use]
pub fn fill_volume_cy(
    elevation_ft: f64,
    pad_target_ft: f64,
    area_sqft: f64,
    compaction_factor: f64,
) -> f64 {
    let delta = (pad_target_ft - elevation_ft).max(0.0);
    let raw_cy = delta * area_sqft / SQFT_PER_CY_FT;
    raw_cy * compaction_factor
}

/// Fill cost for a volume at a unit cost.
#[must_use]
pub fn fill_cost(volume_cy: f64, unit_cost_per_cy: f64) -> f64 {
    volume_cy * unit_cost_per_cy
}

/// Viability of a lot given its fill cost and expected annual rent.
#[must_use]
pub fn lot_viability(fill_cost: f64, annual_rent: f64, threshold_ratio: f64) -> LotViability {
    if annual_rent <= 0.0 {
        return LotViability::Redesign;
    }
    if fill_cost / annual_rent <= threshold_ratio {
        LotViability::Viable
    } else {
        LotViability::Redesign
    }
}

/// Assess every lot in a request.
#[must_use]
pub fn assess_lots(request: &SiteworksRequest) -> Vec<LotAssessment> {
    let compaction = request
        .compaction_factor
        .unwrap_or(DEFAULT_COMPACTION_FACTOR);
    let threshold = request.viability_ratio.unwrap_or(DEFAULT_VIABILITY_RATIO);

    request
        .lots
        .iter()
        .map(|lot| {
            let fill_cy =
                fill_volume_cy(lot.elevation_ft, lot.pad_target_ft, lot.area_sqft, compaction);
            let cost = fill_cost(fill_cy, request.unit_cost_per_cy);
            let viability = lot_viability(cost, lot.annual_rent, threshold);
            let status = if viability == LotViability::Redesign || !lot.sewer_ok {
                LotStatus::NeedsRedesign
            } else {
                LotStatus::Ok
            };

            LotAssessment {
                id: lot.id.clone(),
                fill_cy,
                fill_cost: cost,
                viability,
                status,
            }
        })
        .collect()
}
