use std::collections::BTreeMap;

use kpi_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use crate::models::asset_kpi::{AssetKpi, LinkAssetKpi};
use crate::models::kpi::{CreateKpi, Kpi};

use super::KpiStore;

/// A stored link; the KPI is resolved on read.
#[derive(Debug, Clone)]
struct LinkRecord {
    id: DbId,
    asset_id: String,
    kpi_id: DbId,
    timestamp: Timestamp,
    value: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

#[derive(Debug, Default)]
struct Tables {
    kpis: BTreeMap<DbId, Kpi>,
    links: BTreeMap<DbId, LinkRecord>,
    last_kpi_id: DbId,
    last_link_id: DbId,
}

impl Tables {
    fn resolve(&self, link: &LinkRecord) -> Option<AssetKpi> {
        let kpi = self.kpis.get(&link.kpi_id)?;
        Some(AssetKpi {
            id: link.id,
            asset_id: link.asset_id.clone(),
            kpi: kpi.clone(),
            timestamp: link.timestamp,
            value: link.value.clone(),
            created_at: link.created_at,
            updated_at: link.updated_at,
        })
    }
}

/// [`KpiStore`] held entirely in process memory.
///
/// Mirrors the PostgreSQL schema: IDs start at 1 and are never reused,
/// deleting a KPI cascades to its links, and timestamps are assigned on
/// write.
#[derive(Debug, Default)]
pub struct InMemoryKpiStore {
    tables: RwLock<Tables>,
}

impl InMemoryKpiStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl KpiStore for InMemoryKpiStore {
    async fn list_kpis(&self) -> Result<Vec<Kpi>, sqlx::Error> {
        Ok(self.tables.read().await.kpis.values().cloned().collect())
    }

    async fn find_kpi_by_id(&self, id: DbId) -> Result<Option<Kpi>, sqlx::Error> {
        Ok(self.tables.read().await.kpis.get(&id).cloned())
    }

    async fn create_kpi(&self, input: &CreateKpi) -> Result<Kpi, sqlx::Error> {
        let mut tables = self.tables.write().await;
        tables.last_kpi_id += 1;
        let now = chrono::Utc::now();
        let kpi = Kpi {
            id: tables.last_kpi_id,
            name: input.name.clone(),
            expression: input.expression.clone(),
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.kpis.insert(kpi.id, kpi.clone());
        Ok(kpi)
    }

    async fn save_kpi(&self, kpi: &Kpi) -> Result<Option<Kpi>, sqlx::Error> {
        let mut tables = self.tables.write().await;
        let Some(stored) = tables.kpis.get_mut(&kpi.id) else {
            return Ok(None);
        };
        stored.name = kpi.name.clone();
        stored.expression = kpi.expression.clone();
        stored.description = kpi.description.clone();
        stored.updated_at = chrono::Utc::now();
        Ok(Some(stored.clone()))
    }

    async fn delete_kpi(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tables = self.tables.write().await;
        if tables.kpis.remove(&id).is_none() {
            return Ok(false);
        }
        let before = tables.links.len();
        tables.links.retain(|_, link| link.kpi_id != id);
        let removed_links = before - tables.links.len();
        if removed_links > 0 {
            tracing::debug!(kpi_id = id, removed_links, "Cascaded KPI delete to asset links");
        }
        Ok(true)
    }

    async fn list_asset_kpis(&self) -> Result<Vec<AssetKpi>, sqlx::Error> {
        let tables = self.tables.read().await;
        Ok(tables
            .links
            .values()
            .filter_map(|link| tables.resolve(link))
            .collect())
    }

    async fn create_asset_kpi(&self, input: &LinkAssetKpi) -> Result<AssetKpi, sqlx::Error> {
        let mut tables = self.tables.write().await;
        // Same outcome as the foreign key on `asset_kpis.kpi_id`.
        if !tables.kpis.contains_key(&input.kpi_id) {
            return Err(sqlx::Error::RowNotFound);
        }
        tables.last_link_id += 1;
        let now = chrono::Utc::now();
        let link = LinkRecord {
            id: tables.last_link_id,
            asset_id: input.asset_id.clone(),
            kpi_id: input.kpi_id,
            timestamp: now,
            value: input.value.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.links.insert(link.id, link.clone());
        tables.resolve(&link).ok_or(sqlx::Error::RowNotFound)
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn new_kpi(name: &str) -> CreateKpi {
        CreateKpi {
            name: name.to_string(),
            expression: "sum(x)/count(x)".to_string(),
            description: None,
        }
    }

    fn new_link(asset_id: &str, kpi_id: DbId) -> LinkAssetKpi {
        LinkAssetKpi {
            asset_id: asset_id.to_string(),
            kpi_id,
            value: "1".to_string(),
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially_and_not_reused() {
        let store = InMemoryKpiStore::new();
        let a = store.create_kpi(&new_kpi("a")).await.unwrap();
        let b = store.create_kpi(&new_kpi("b")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        assert!(store.delete_kpi(b.id).await.unwrap());
        let c = store.create_kpi(&new_kpi("c")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn list_kpis_is_ordered_by_id() {
        let store = InMemoryKpiStore::new();
        for name in ["z", "y", "x"] {
            store.create_kpi(&new_kpi(name)).await.unwrap();
        }
        let names: Vec<_> = store
            .list_kpis()
            .await
            .unwrap()
            .into_iter()
            .map(|k| k.name)
            .collect();
        assert_eq!(names, ["z", "y", "x"]);
    }

    #[tokio::test]
    async fn save_overwrites_fields_and_keeps_created_at() {
        let store = InMemoryKpiStore::new();
        let mut kpi = store.create_kpi(&new_kpi("before")).await.unwrap();
        kpi.name = "after".to_string();
        kpi.description = Some("now described".to_string());

        let saved = store.save_kpi(&kpi).await.unwrap().unwrap();
        assert_eq!(saved.name, "after");
        assert_eq!(saved.description.as_deref(), Some("now described"));
        assert_eq!(saved.created_at, kpi.created_at);
        assert!(saved.updated_at >= kpi.updated_at);
    }

    #[tokio::test]
    async fn save_of_missing_kpi_returns_none() {
        let store = InMemoryKpiStore::new();
        let mut kpi = store.create_kpi(&new_kpi("gone")).await.unwrap();
        store.delete_kpi(kpi.id).await.unwrap();
        kpi.name = "ghost".to_string();
        assert!(store.save_kpi(&kpi).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_cascades_to_links() {
        let store = InMemoryKpiStore::new();
        let kept = store.create_kpi(&new_kpi("kept")).await.unwrap();
        let dropped = store.create_kpi(&new_kpi("dropped")).await.unwrap();
        store.create_asset_kpi(&new_link("asset-1", kept.id)).await.unwrap();
        store.create_asset_kpi(&new_link("asset-2", dropped.id)).await.unwrap();
        store.create_asset_kpi(&new_link("asset-3", dropped.id)).await.unwrap();

        assert!(store.delete_kpi(dropped.id).await.unwrap());

        let links = store.list_asset_kpis().await.unwrap();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].asset_id, "asset-1");
        assert_eq!(links[0].kpi.id, kept.id);
    }

    #[tokio::test]
    async fn delete_of_unknown_id_returns_false() {
        let store = InMemoryKpiStore::new();
        assert!(!store.delete_kpi(999_999).await.unwrap());
    }

    #[tokio::test]
    async fn link_resolves_current_kpi_fields() {
        let store = InMemoryKpiStore::new();
        let mut kpi = store.create_kpi(&new_kpi("Uptime")).await.unwrap();
        store.create_asset_kpi(&new_link("asset-42", kpi.id)).await.unwrap();

        kpi.name = "Availability".to_string();
        store.save_kpi(&kpi).await.unwrap();

        let links = store.list_asset_kpis().await.unwrap();
        assert_eq!(links[0].kpi.name, "Availability");
    }

    #[tokio::test]
    async fn link_to_unknown_kpi_is_rejected() {
        let store = InMemoryKpiStore::new();
        let result = store.create_asset_kpi(&new_link("asset-1", 7)).await;
        assert_matches!(result, Err(sqlx::Error::RowNotFound));
        assert!(store.list_asset_kpis().await.unwrap().is_empty());
    }
}
