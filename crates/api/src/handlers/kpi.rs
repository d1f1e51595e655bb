//! Handlers for KPI definitions.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use kpi_core::types::DbId;
use kpi_db::models::kpi::{CreateKpi, UpdateKpi};

use crate::error::AppResult;
use crate::response::{DataResponse, KpiPayload, SuccessPayload};
use crate::services;
use crate::state::AppState;

/// GET /api/v1/kpis
///
/// List every KPI definition.
pub async fn list_kpis(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let kpis = services::query::list_kpis(state.store.as_ref()).await?;

    Ok(Json(DataResponse { data: kpis }))
}

/// POST /api/v1/kpis
///
/// Create a KPI from `{name, expression, description?}`.
pub async fn create_kpi(
    State(state): State<AppState>,
    payload: Result<Json<CreateKpi>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let kpi = services::kpi::create_kpi(state.store.as_ref(), &input).await?;

    tracing::info!(kpi_id = kpi.id, name = %kpi.name, "KPI created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: KpiPayload { kpi },
        }),
    ))
}

/// PUT /api/v1/kpis/{kpi_id}
///
/// Partially update a KPI. Omitted fields are left unchanged.
pub async fn update_kpi(
    State(state): State<AppState>,
    Path(kpi_id): Path<DbId>,
    payload: Result<Json<UpdateKpi>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let kpi = services::kpi::update_kpi(state.store.as_ref(), kpi_id, input).await?;

    tracing::info!(kpi_id, "KPI updated");

    Ok(Json(DataResponse {
        data: KpiPayload { kpi },
    }))
}

/// DELETE /api/v1/kpis/{kpi_id}
///
/// Delete a KPI and its asset links.
pub async fn delete_kpi(
    State(state): State<AppState>,
    Path(kpi_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    services::kpi::delete_kpi(state.store.as_ref(), kpi_id).await?;

    tracing::info!(kpi_id, "KPI deleted");

    Ok(Json(DataResponse {
        data: SuccessPayload { success: true },
    }))
}
