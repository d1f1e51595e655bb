//! Route definitions for asset/KPI links.

use axum::routing::get;
use axum::Router;

use crate::handlers::asset_kpi;
use crate::state::AppState;

/// Routes mounted at `/asset-kpis`.
///
/// ```text
/// GET  /   -> list_asset_kpis
/// POST /   -> link_asset_to_kpi
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(asset_kpi::list_asset_kpis).post(asset_kpi::link_asset_to_kpi),
    )
}
