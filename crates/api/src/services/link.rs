//! Associating assets with KPI measurements.

use kpi_core::error::CoreError;
use kpi_db::models::asset_kpi::{AssetKpi, LinkAssetKpi};
use kpi_db::store::KpiStore;

use crate::error::AppResult;

/// Record a measurement of `input.kpi_id` for `input.asset_id`.
///
/// Fails with `NotFound` and creates nothing if the KPI does not exist.
pub async fn link_asset_to_kpi(store: &dyn KpiStore, input: &LinkAssetKpi) -> AppResult<AssetKpi> {
    if store.find_kpi_by_id(input.kpi_id).await?.is_none() {
        return Err(CoreError::kpi_not_found(input.kpi_id).into());
    }
    Ok(store.create_asset_kpi(input).await?)
}
