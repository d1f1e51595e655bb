//! Route definitions for KPI definitions.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::kpi;
use crate::state::AppState;

/// Routes mounted at `/kpis`.
///
/// ```text
/// GET    /            -> list_kpis
/// POST   /            -> create_kpi
/// PUT    /{kpi_id}    -> update_kpi
/// DELETE /{kpi_id}    -> delete_kpi
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(kpi::list_kpis).post(kpi::create_kpi))
        .route("/{kpi_id}", put(kpi::update_kpi).delete(kpi::delete_kpi))
}
