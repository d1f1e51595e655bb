//! Asset/KPI link model and DTOs.

use kpi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::kpi::Kpi;

/// A measurement linking an external asset to a KPI, with the KPI resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetKpi {
    pub id: DbId,
    pub asset_id: String,
    pub kpi: Kpi,
    /// Assigned by the store when the link is created.
    pub timestamp: Timestamp,
    /// Raw measured value; no unit or numeric type is enforced.
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from `asset_kpis` joined with its `kpis` row.
///
/// KPI columns are aliased with a `kpi_` prefix.
#[derive(Debug, Clone, FromRow)]
pub struct AssetKpiRow {
    pub id: DbId,
    pub asset_id: String,
    pub timestamp: Timestamp,
    pub value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub kpi_id: DbId,
    pub kpi_name: String,
    pub kpi_expression: String,
    pub kpi_description: Option<String>,
    pub kpi_created_at: Timestamp,
    pub kpi_updated_at: Timestamp,
}

impl From<AssetKpiRow> for AssetKpi {
    fn from(row: AssetKpiRow) -> Self {
        Self {
            id: row.id,
            asset_id: row.asset_id,
            kpi: Kpi {
                id: row.kpi_id,
                name: row.kpi_name,
                expression: row.kpi_expression,
                description: row.kpi_description,
                created_at: row.kpi_created_at,
                updated_at: row.kpi_updated_at,
            },
            timestamp: row.timestamp,
            value: row.value,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for linking an asset to a KPI with a measured value.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAssetKpi {
    pub asset_id: String,
    pub kpi_id: DbId,
    pub value: String,
}
