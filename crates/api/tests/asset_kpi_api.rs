//! HTTP-level integration tests for asset/KPI link endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, TestApp};
use serde_json::json;

async fn create_kpi(app: &TestApp, name: &str, expression: &str) -> i64 {
    let response = post_json(
        app.router(),
        "/api/v1/kpis",
        json!({"name": name, "expression": expression}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["kpi"]["id"].as_i64().unwrap()
}

async fn link(app: &TestApp, asset_id: &str, kpi_id: i64, value: &str) -> axum::response::Response {
    post_json(
        app.router(),
        "/api/v1/asset-kpis",
        json!({"assetId": asset_id, "kpiId": kpi_id, "value": value}),
    )
    .await
}

// ---------------------------------------------------------------------------
// linkAssetToKpi
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_link_asset_to_kpi_returns_201_with_resolved_kpi() {
    let app = TestApp::new();
    let kpi_id = create_kpi(&app, "Uptime", "sum(x)/count(x)").await;

    let response = link(&app, "asset-42", kpi_id, "123.4").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let asset_kpi = &json["data"]["assetKpi"];
    assert!(asset_kpi["id"].is_number());
    assert_eq!(asset_kpi["assetId"], "asset-42");
    assert_eq!(asset_kpi["value"], "123.4");
    assert!(asset_kpi["timestamp"].is_string());
    assert_eq!(asset_kpi["kpi"]["id"], kpi_id);
    assert_eq!(asset_kpi["kpi"]["name"], "Uptime");
    assert_eq!(asset_kpi["kpi"]["expression"], "sum(x)/count(x)");
}

#[tokio::test]
async fn test_list_asset_kpis_contains_exactly_the_link() {
    let app = TestApp::new();
    let kpi_id = create_kpi(&app, "Uptime", "sum(x)/count(x)").await;
    link(&app, "asset-42", kpi_id, "123.4").await;

    let response = get(app.router(), "/api/v1/asset-kpis").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let links = json["data"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["assetId"], "asset-42");
    assert_eq!(links[0]["kpi"]["name"], "Uptime");
    assert_eq!(links[0]["kpi"]["expression"], "sum(x)/count(x)");
}

#[tokio::test]
async fn test_link_to_nonexistent_kpi_returns_404_and_creates_nothing() {
    let app = TestApp::new();

    let response = link(&app, "asset-42", 999_999, "1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "KPI with id 999999 not found");

    let json = body_json(get(app.router(), "/api/v1/asset-kpis").await).await;
    assert_eq!(json["data"], json!([]));
}

#[tokio::test]
async fn test_link_requires_all_fields() {
    let app = TestApp::new();
    let kpi_id = create_kpi(&app, "Uptime", "sum(x)/count(x)").await;

    let response = post_json(
        app.router(),
        "/api/v1/asset-kpis",
        json!({"assetId": "asset-42", "kpiId": kpi_id}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_value_is_stored_as_text() {
    let app = TestApp::new();
    let kpi_id = create_kpi(&app, "Status", "last(x)").await;

    let response = link(&app, "pump-7", kpi_id, "degraded").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["assetKpi"]["value"], "degraded");
}

// ---------------------------------------------------------------------------
// Cascade on deleteKpi
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_deleting_linked_kpi_succeeds_and_removes_its_links() {
    let app = TestApp::new();
    let doomed = create_kpi(&app, "Uptime", "sum(x)/count(x)").await;
    let kept = create_kpi(&app, "Latency", "p99(x)").await;
    link(&app, "asset-1", doomed, "99.9").await;
    link(&app, "asset-2", doomed, "98.1").await;
    link(&app, "asset-3", kept, "120").await;

    let response = delete(app.router(), &format!("/api/v1/kpis/{doomed}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["success"], true);

    let json = body_json(get(app.router(), "/api/v1/asset-kpis").await).await;
    let links = json["data"].as_array().unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["assetId"], "asset-3");
    assert_eq!(links[0]["kpi"]["id"], kept);
}
