//! # LCCA Model
//!
//! Deterministic lifecycle cost comparison of two wastewater-collection
//! technologies (vacuum vs. low-pressure sewer) for a cluster of lots:
//! - Net-present-value discounting of operating cost series
//! - Capital and operating estimators driven by a typed cost book
//! - Siteworks earthwork (pad fill) estimation
//!
//! The model is a pure function pipeline: it holds the immutable cost book
//! injected at construction and computes request-scoped values. Safe for
//! unlimited concurrent callers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod estimator;
pub mod finance;
pub mod siteworks;

// Re-export commonly used types
pub use estimator::{CostModel, BOOSTER_MAIN_LF_THRESHOLD};
pub use finance::{
    npv, FinanceParams, DEFAULT_ANALYSIS_YEARS, DEFAULT_DISCOUNT_RATE,
    DEFAULT_ENERGY_RATE_PER_KWH,
};
pub use siteworks::{LotAssessment, LotPlan, LotStatus, LotViability, SiteworksRequest};
