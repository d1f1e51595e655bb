//! Repository for the `asset_kpis` table.
//!
//! Every read joins `kpis` so callers always receive the linked KPI.

use kpi_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset_kpi::{AssetKpi, AssetKpiRow, LinkAssetKpi};

/// Joined column list; `a` is `asset_kpis`, `k` is `kpis`.
const JOINED_COLUMNS: &str = "\
    a.id, a.asset_id, a.\"timestamp\", a.value, a.created_at, a.updated_at, \
    k.id AS kpi_id, k.name AS kpi_name, k.expression AS kpi_expression, \
    k.description AS kpi_description, k.created_at AS kpi_created_at, \
    k.updated_at AS kpi_updated_at";

/// Provides data access for asset/KPI links.
pub struct AssetKpiRepo;

impl AssetKpiRepo {
    /// List every link with its KPI, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<AssetKpi>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM asset_kpis a \
             JOIN kpis k ON k.id = a.kpi_id \
             ORDER BY a.id"
        );
        let rows = sqlx::query_as::<_, AssetKpiRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(AssetKpi::from).collect())
    }

    /// Insert a link. The timestamp is assigned by the database.
    ///
    /// The KPI must exist; a dangling `kpi_id` surfaces as a foreign key
    /// violation.
    pub async fn create(pool: &PgPool, input: &LinkAssetKpi) -> Result<AssetKpi, sqlx::Error> {
        let query = format!(
            "WITH a AS ( \
                 INSERT INTO asset_kpis (asset_id, kpi_id, value) \
                 VALUES ($1, $2, $3) \
                 RETURNING * \
             ) \
             SELECT {JOINED_COLUMNS} FROM a \
             JOIN kpis k ON k.id = a.kpi_id"
        );
        let row = sqlx::query_as::<_, AssetKpiRow>(&query)
            .bind(&input.asset_id)
            .bind(input.kpi_id)
            .bind(&input.value)
            .fetch_one(pool)
            .await?;
        Ok(row.into())
    }

    /// Count links pointing at a KPI.
    pub async fn count_for_kpi(pool: &PgPool, kpi_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM asset_kpis WHERE kpi_id = $1")
            .bind(kpi_id)
            .fetch_one(pool)
            .await
    }
}
