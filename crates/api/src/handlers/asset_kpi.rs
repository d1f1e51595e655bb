//! Handlers for asset/KPI links.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kpi_db::models::asset_kpi::LinkAssetKpi;

use crate::error::AppResult;
use crate::response::{AssetKpiPayload, DataResponse};
use crate::services;
use crate::state::AppState;

/// GET /api/v1/asset-kpis
///
/// List every asset link with its KPI embedded.
pub async fn list_asset_kpis(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let links = services::query::list_asset_kpis(state.store.as_ref()).await?;

    Ok(Json(DataResponse { data: links }))
}

/// POST /api/v1/asset-kpis
///
/// Link an asset to a KPI from `{assetId, kpiId, value}`.
pub async fn link_asset_to_kpi(
    State(state): State<AppState>,
    payload: Result<Json<LinkAssetKpi>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let asset_kpi = services::link::link_asset_to_kpi(state.store.as_ref(), &input).await?;

    tracing::info!(
        asset_kpi_id = asset_kpi.id,
        asset_id = %asset_kpi.asset_id,
        kpi_id = asset_kpi.kpi.id,
        "Asset linked to KPI",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: AssetKpiPayload { asset_kpi },
        }),
    ))
}
