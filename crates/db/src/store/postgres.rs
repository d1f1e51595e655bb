use kpi_core::types::DbId;

use crate::models::asset_kpi::{AssetKpi, LinkAssetKpi};
use crate::models::kpi::{CreateKpi, Kpi};
use crate::repositories::{AssetKpiRepo, KpiRepo};
use crate::DbPool;

use super::KpiStore;

/// [`KpiStore`] backed by PostgreSQL through the sqlx repositories.
#[derive(Clone)]
pub struct PgKpiStore {
    pool: DbPool,
}

impl PgKpiStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl KpiStore for PgKpiStore {
    async fn list_kpis(&self) -> Result<Vec<Kpi>, sqlx::Error> {
        KpiRepo::list(&self.pool).await
    }

    async fn find_kpi_by_id(&self, id: DbId) -> Result<Option<Kpi>, sqlx::Error> {
        KpiRepo::find_by_id(&self.pool, id).await
    }

    async fn create_kpi(&self, input: &CreateKpi) -> Result<Kpi, sqlx::Error> {
        KpiRepo::create(&self.pool, input).await
    }

    async fn save_kpi(&self, kpi: &Kpi) -> Result<Option<Kpi>, sqlx::Error> {
        KpiRepo::save(&self.pool, kpi).await
    }

    async fn delete_kpi(&self, id: DbId) -> Result<bool, sqlx::Error> {
        KpiRepo::delete(&self.pool, id).await
    }

    async fn list_asset_kpis(&self) -> Result<Vec<AssetKpi>, sqlx::Error> {
        AssetKpiRepo::list(&self.pool).await
    }

    async fn create_asset_kpi(&self, input: &LinkAssetKpi) -> Result<AssetKpi, sqlx::Error> {
        AssetKpiRepo::create(&self.pool, input).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}
