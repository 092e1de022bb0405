//! API integration tests exercising the router end to end.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use lcca_config::CostBook;
use lcca_server::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

const BOOK: &str = r"
vacuum:
  main_per_lf_shallow: 50
  lateral_per_lf: 30
  station_per_400_lots_ls: 150000
  valve_pit_each: 2000
  annual_om_per_conn: 120
  energy_kwh_per_conn_day: 0.5
pressure:
  main_per_lf_shallow: 40
  lateral_per_lf: 25
  grinder_pump_package_each: 4500
  booster_ls: 120000
  annual_om_per_conn: 180
  energy_kwh_per_conn_day: 1.2
  pump_replace_years: 10
  pump_replace_cost_each: 2500
finance:
  analysis_years: 30
  discount_rate: 0.06
  energy_rate_per_kwh: 0.14
";

fn test_router() -> Router {
    let book = CostBook::from_yaml_str(BOOK).expect("sample book parses");
    let state = AppState::builder().cost_book(book).build();
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body is UTF-8")
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn sample_cluster() -> Value {
    json!({
        "num_lots": 100,
        "est_main_lf": 5000.0,
        "est_laterals_lf": 2000.0
    })
}

#[tokio::test]
async fn test_health_endpoint() {
    let response = test_router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_liveness_and_readiness() {
    for uri in ["/live", "/ready"] {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
    }
}

#[tokio::test]
async fn test_costs_returns_loaded_document() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/vendors/costs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["vacuum"]["main_per_lf_shallow"], json!(50));
    assert_eq!(body["pressure"]["pump_replace_years"], json!(10));
    assert_eq!(body["finance"]["discount_rate"], json!(0.06));
}

#[tokio::test]
async fn test_compare_json_default() {
    let response = test_router()
        .oneshot(post_json(
            "/vendors/compare",
            json!({ "cluster": sample_cluster() }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["vacuum"]["system"], "Vacuum");
    assert_eq!(body["pressure"]["system"], "Pressure");
    assert_eq!(body["vacuum"]["capex"], json!(560_000.0));
    assert!(body["preferred"].is_string());
    assert!(body["npv_delta"].is_number());
}

#[tokio::test]
async fn test_compare_rejects_zero_lots() {
    let mut cluster = sample_cluster();
    cluster["num_lots"] = json!(0);

    let response = test_router()
        .oneshot(post_json("/vendors/compare", json!({ "cluster": cluster })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("num_lots"));
}

#[tokio::test]
async fn test_compare_rejects_negative_footage() {
    let mut cluster = sample_cluster();
    cluster["est_main_lf"] = json!(-1.0);

    let response = test_router()
        .oneshot(post_json("/vendors/compare", json!({ "cluster": cluster })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_compare_malformed_json_is_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/vendors/compare")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_compare_unknown_format_is_200_with_error_payload() {
    let response = test_router()
        .oneshot(post_json(
            "/vendors/compare",
            json!({ "cluster": sample_cluster(), "fmt": "xml" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["error"],
        "Unknown format 'xml'. Use json|markdown|html|csv"
    );
    assert_eq!(body["accepted"], json!(["json", "markdown", "html", "csv"]));
}

#[tokio::test]
async fn test_compare_markdown_content_type() {
    let response = test_router()
        .oneshot(post_json(
            "/vendors/compare",
            json!({ "cluster": sample_cluster(), "fmt": "markdown" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/markdown; charset=utf-8"
    );
    let text = body_text(response).await;
    assert!(text.contains("| System |"));
    assert!(text.contains("**Preferred:**"));
}

#[tokio::test]
async fn test_compare_csv_attachment() {
    let response = test_router()
        .oneshot(post_json(
            "/vendors/compare",
            json!({ "cluster": sample_cluster(), "fmt": "csv" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("attachment"));
    assert!(disposition.contains("vendor_compare.csv"));

    let text = body_text(response).await;
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "System,CapEx ($),Year1 O&M ($/yr),NPV O&M ($),NPV Total ($)"
    );
    assert!(text.contains("Preferred,"));
    assert!(text.contains("NPV Delta (USD),"));
}

#[tokio::test]
async fn test_compare_html_custom_filename() {
    let response = test_router()
        .oneshot(post_json(
            "/vendors/compare",
            json!({
                "cluster": sample_cluster(),
                "fmt": "html",
                "filename": "phase2.html"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("phase2.html"));

    let text = body_text(response).await;
    assert!(text.contains("<table"));
    assert!(text.contains("Vacuum"));
}

#[tokio::test]
async fn test_compare_with_finance_overrides() {
    let mut cluster = sample_cluster();
    cluster["analysis_years"] = json!(10);
    cluster["discount_rate"] = json!(0.03);

    let response = test_router()
        .oneshot(post_json("/vendors/compare", json!({ "cluster": cluster })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    // Shorter horizon means a smaller O&M NPV than the 30-year default.
    let npv_om = body["vacuum"]["npv_om"].as_f64().unwrap();
    assert!(npv_om < 14_555.0 * 30.0);
    assert!(npv_om > 0.0);
}

#[tokio::test]
async fn test_siteworks_fill_batch() {
    let response = test_router()
        .oneshot(post_json(
            "/siteworks/fill",
            json!({
                "unit_cost_per_cy": 18.0,
                "lots": [
                    {
                        "id": "L-1",
                        "elevation_ft": 100.0,
                        "pad_target_ft": 102.0,
                        "area_sqft": 8000.0,
                        "annual_rent": 90000.0
                    },
                    {
                        "id": "L-2",
                        "elevation_ft": 100.0,
                        "pad_target_ft": 100.0,
                        "area_sqft": 8000.0,
                        "annual_rent": 90000.0
                    }
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let lots = body["lots"].as_array().unwrap();
    assert_eq!(lots.len(), 2);
    assert_eq!(lots[0]["id"], "L-1");
    assert!(lots[0]["fill_cy"].as_f64().unwrap() > 0.0);
    assert!(lots[0]["fill_cost"].as_f64().unwrap() > 0.0);
    // A lot already at grade needs no fill.
    assert_eq!(lots[1]["fill_cy"], json!(0.0));
    assert_eq!(lots[1]["fill_cost"], json!(0.0));
}

#[tokio::test]
async fn test_siteworks_rejects_empty_lot_list() {
    let response = test_router()
        .oneshot(post_json(
            "/siteworks/fill",
            json!({ "unit_cost_per_cy": 18.0, "lots": [] }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let response = test_router()
        .oneshot(
            Request::builder()
                .uri("/vendors/unknown")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
