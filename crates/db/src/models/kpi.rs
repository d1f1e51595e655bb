//! KPI definition model and DTOs.

use kpi_core::patch::Patch;
use kpi_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `kpis` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpi {
    pub id: DbId,
    pub name: String,
    /// Opaque expression text; stored as given, never evaluated.
    pub expression: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new KPI.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateKpi {
    pub name: String,
    pub expression: String,
    pub description: Option<String>,
}

/// DTO for partially updating a KPI.
///
/// Every field distinguishes "omitted" from "sent as `null`" from "sent with
/// a value", see [`Patch`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateKpi {
    #[serde(default)]
    pub name: Patch<String>,
    #[serde(default)]
    pub expression: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
}
