//! Read-only collection queries.

use kpi_db::models::asset_kpi::AssetKpi;
use kpi_db::models::kpi::Kpi;
use kpi_db::store::KpiStore;

use crate::error::AppResult;

/// Every KPI in the store, ordered by ID.
pub async fn list_kpis(store: &dyn KpiStore) -> AppResult<Vec<Kpi>> {
    Ok(store.list_kpis().await?)
}

/// Every asset link with its KPI resolved, ordered by ID.
pub async fn list_asset_kpis(store: &dyn KpiStore) -> AppResult<Vec<AssetKpi>> {
    Ok(store.list_asset_kpis().await?)
}
