//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Mutation payloads
//! keep their operation-specific field names inside it
//! (`{ "data": { "kpi": ... } }`).

use kpi_db::models::asset_kpi::AssetKpi;
use kpi_db::models::kpi::Kpi;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload of `createKpi` and `updateKpi`.
#[derive(Debug, Serialize)]
pub struct KpiPayload {
    pub kpi: Kpi,
}

/// Payload of `deleteKpi`.
#[derive(Debug, Serialize)]
pub struct SuccessPayload {
    pub success: bool,
}

/// Payload of `linkAssetToKpi`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetKpiPayload {
    pub asset_kpi: AssetKpi,
}
