//! Repository for the `kpis` table.

use kpi_core::types::DbId;
use sqlx::PgPool;

use crate::models::kpi::{CreateKpi, Kpi};

/// Column list for `kpis` queries.
const COLUMNS: &str = "id, name, expression, description, created_at, updated_at";

/// Provides CRUD operations for KPI definitions.
pub struct KpiRepo;

impl KpiRepo {
    /// List every KPI, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Kpi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kpis ORDER BY id");
        sqlx::query_as::<_, Kpi>(&query).fetch_all(pool).await
    }

    /// Find a KPI by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Kpi>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM kpis WHERE id = $1");
        sqlx::query_as::<_, Kpi>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new KPI, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateKpi) -> Result<Kpi, sqlx::Error> {
        let query = format!(
            "INSERT INTO kpis (name, expression, description) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kpi>(&query)
            .bind(&input.name)
            .bind(&input.expression)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Overwrite the mutable fields of an existing KPI.
    ///
    /// Returns `None` if no row with `kpi.id` exists. `updated_at` is
    /// refreshed by the table trigger.
    pub async fn save(pool: &PgPool, kpi: &Kpi) -> Result<Option<Kpi>, sqlx::Error> {
        let query = format!(
            "UPDATE kpis SET \
                 name = $2, \
                 expression = $3, \
                 description = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Kpi>(&query)
            .bind(kpi.id)
            .bind(&kpi.name)
            .bind(&kpi.expression)
            .bind(&kpi.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a KPI by ID. Linked `asset_kpis` rows go with it.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM kpis WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
