use std::sync::Arc;

use kpi_db::store::KpiStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// KPI and asset link storage, injected at startup.
    pub store: Arc<dyn KpiStore>,
}
