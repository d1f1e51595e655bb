pub mod asset_kpi;
pub mod health;
pub mod kpi;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /kpis                     list, create
/// /kpis/{kpi_id}            update, delete
/// /asset-kpis               list, link
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/kpis", kpi::router())
        .nest("/asset-kpis", asset_kpi::router())
}
