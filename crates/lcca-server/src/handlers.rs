//! HTTP request handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use lcca_core::{Cluster, ComparisonResult};
use lcca_model::siteworks::{self, LotAssessment, SiteworksRequest};
use lcca_report::{to_csv, to_html, to_markdown, ReportFormat};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use validator::Validate;

use crate::{error::ApiError, extractors::{JsonBody, RequestId}, state::AppState};

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Health check endpoint.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// Liveness check endpoint.
pub async fn liveness_check() -> impl IntoResponse {
    (StatusCode::OK, "alive")
}

/// Readiness check endpoint. The cost book is loaded before the server
/// starts, so a running server is always ready.
pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, "ready")
}

/// GET /vendors/costs - return the loaded cost-book document verbatim.
#[instrument(skip(state))]
pub async fn vendors_costs(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.model.cost_book().document().clone())
}

/// Comparison request body.
#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    /// Cluster to cost out.
    pub cluster: Cluster,
    /// Output representation; defaults to `json`.
    #[serde(default)]
    pub fmt: Option<String>,
    /// Download filename for attachment formats.
    #[serde(default)]
    pub filename: Option<String>,
}

/// Error payload for an unknown output format.
///
/// Deliberately returned with HTTP 200: the comparison itself is valid, only
/// the representation choice is not.
#[derive(Debug, Serialize)]
pub struct FormatErrorBody {
    /// Message naming the rejected format.
    pub error: String,
    /// The accepted format names.
    pub accepted: [&'static str; 4],
}

/// POST /vendors/compare - compare both systems for a cluster.
///
/// The cluster is validated here, before the model is invoked. The result is
/// rendered according to `fmt`.
#[instrument(skip(state, body), fields(num_lots = body.cluster.num_lots))]
pub async fn vendors_compare(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
    JsonBody(body): JsonBody<CompareRequest>,
) -> Result<Response, ApiError> {
    body.cluster
        .check()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let fmt = match body.fmt.as_deref().unwrap_or("json").parse::<ReportFormat>() {
        Ok(fmt) => fmt,
        Err(e) => {
            debug!(request_id = %request_id, requested = %e.requested, "Unknown output format");
            return Ok(Json(FormatErrorBody {
                error: e.to_string(),
                accepted: ReportFormat::ACCEPTED,
            })
            .into_response());
        }
    };

    let result = state.model.compare(&body.cluster)?;

    info!(
        request_id = %request_id,
        preferred = %result.preferred,
        npv_delta = result.npv_delta,
        fmt = fmt.name(),
        "Comparison served"
    );

    Ok(render_comparison(&result, fmt, body.filename.as_deref()))
}

/// Render a comparison in the requested representation.
fn render_comparison(
    result: &ComparisonResult,
    fmt: ReportFormat,
    filename: Option<&str>,
) -> Response {
    match fmt {
        ReportFormat::Json => Json(result).into_response(),
        ReportFormat::Markdown => (
            [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
            to_markdown(result),
        )
            .into_response(),
        ReportFormat::Html => attachment(
            "text/html; charset=utf-8",
            filename.unwrap_or("vendor_compare.html"),
            to_html(result),
        ),
        ReportFormat::Csv => attachment(
            "text/csv; charset=utf-8",
            filename.unwrap_or("vendor_compare.csv"),
            to_csv(result),
        ),
    }
}

/// Build a downloadable response with a `Content-Disposition` header.
fn attachment(content_type: &str, filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// Siteworks assessment response.
#[derive(Debug, Serialize)]
pub struct SiteworksResponse {
    /// Per-lot assessments, in request order.
    pub lots: Vec<LotAssessment>,
}

/// POST /siteworks/fill - assess pad fill volume, cost, and viability for a
/// batch of lots.
#[instrument(skip(body), fields(lots = body.lots.len()))]
pub async fn siteworks_fill(
    JsonBody(body): JsonBody<SiteworksRequest>,
) -> Result<Json<SiteworksResponse>, ApiError> {
    body.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(Json(SiteworksResponse {
        lots: siteworks::assess_lots(&body),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lcca_core::{CostEstimate, SystemKind};

    fn sample_result() -> ComparisonResult {
        let estimate = |system, capex| CostEstimate {
            system,
            capex,
            annual_om_year1: 10.0,
            npv_om: 100.0,
            npv_total: capex + 100.0,
        };
        ComparisonResult {
            vacuum: estimate(SystemKind::Vacuum, 500.0),
            pressure: estimate(SystemKind::Pressure, 600.0),
            preferred: SystemKind::Vacuum,
            npv_delta: 100.0,
        }
    }

    #[test]
    fn test_render_json_content_type() {
        let response = render_comparison(&sample_result(), ReportFormat::Json, None);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_render_csv_default_filename() {
        let response = render_comparison(&sample_result(), ReportFormat::Csv, None);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("vendor_compare.csv"));
    }

    #[test]
    fn test_render_html_custom_filename() {
        let response =
            render_comparison(&sample_result(), ReportFormat::Html, Some("report.html"));
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("report.html"));
    }
}
