//! Data-access interface consumed by the API layer.
//!
//! Handlers never touch a pool directly; they go through an injected
//! `Arc<dyn KpiStore>` so the backing store can be swapped (PostgreSQL in
//! production, in-memory for tests and local runs).

mod memory;
mod postgres;

pub use memory::InMemoryKpiStore;
pub use postgres::PgKpiStore;

use kpi_core::types::DbId;

use crate::models::asset_kpi::{AssetKpi, LinkAssetKpi};
use crate::models::kpi::{CreateKpi, Kpi};

/// Storage operations for KPIs and their asset links.
///
/// Deleting a KPI removes its links. Link timestamps are assigned by the
/// store at creation time.
#[async_trait::async_trait]
pub trait KpiStore: Send + Sync {
    /// Every KPI, ordered by ID.
    async fn list_kpis(&self) -> Result<Vec<Kpi>, sqlx::Error>;

    async fn find_kpi_by_id(&self, id: DbId) -> Result<Option<Kpi>, sqlx::Error>;

    /// Insert a KPI and return it with its assigned ID.
    async fn create_kpi(&self, input: &CreateKpi) -> Result<Kpi, sqlx::Error>;

    /// Persist the mutable fields of an existing KPI.
    ///
    /// Returns `None` if the KPI no longer exists.
    async fn save_kpi(&self, kpi: &Kpi) -> Result<Option<Kpi>, sqlx::Error>;

    /// Remove a KPI and its links. Returns `true` if the KPI existed.
    async fn delete_kpi(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Every asset link with its KPI resolved, ordered by ID.
    async fn list_asset_kpis(&self) -> Result<Vec<AssetKpi>, sqlx::Error>;

    /// Insert an asset link. Callers check that the KPI exists first.
    async fn create_asset_kpi(&self, input: &LinkAssetKpi) -> Result<AssetKpi, sqlx::Error>;

    /// Check that the store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}
