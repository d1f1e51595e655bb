//! KPI definition lifecycle: create, update, delete.

use kpi_core::error::CoreError;
use kpi_core::patch::Patch;
use kpi_core::types::DbId;
use kpi_db::models::kpi::{CreateKpi, Kpi, UpdateKpi};
use kpi_db::store::KpiStore;

use crate::error::AppResult;

/// Create a KPI. No uniqueness or format checks are made on its fields.
pub async fn create_kpi(store: &dyn KpiStore, input: &CreateKpi) -> AppResult<Kpi> {
    Ok(store.create_kpi(input).await?)
}

/// Apply a partial update to an existing KPI and persist it.
///
/// Concurrent updates to the same KPI are last-write-wins.
pub async fn update_kpi(store: &dyn KpiStore, id: DbId, input: UpdateKpi) -> AppResult<Kpi> {
    let current = store
        .find_kpi_by_id(id)
        .await?
        .ok_or(CoreError::kpi_not_found(id))?;

    let updated = apply_update(current, input)?;

    // The row can disappear between the lookup and the write.
    let saved = store
        .save_kpi(&updated)
        .await?
        .ok_or(CoreError::kpi_not_found(id))?;
    Ok(saved)
}

/// Delete a KPI together with its asset links.
pub async fn delete_kpi(store: &dyn KpiStore, id: DbId) -> AppResult<()> {
    if !store.delete_kpi(id).await? {
        return Err(CoreError::kpi_not_found(id).into());
    }
    Ok(())
}

/// Merge `input` into `kpi`.
///
/// Omitted fields are left alone and supplied values (empty strings
/// included) overwrite. `null` clears `description` but is rejected for
/// the required `name` and `expression`.
pub fn apply_update(mut kpi: Kpi, input: UpdateKpi) -> Result<Kpi, CoreError> {
    if let Some(name) = required_field("name", input.name)? {
        kpi.name = name;
    }
    if let Some(expression) = required_field("expression", input.expression)? {
        kpi.expression = expression;
    }
    kpi.description = input.description.apply_to(kpi.description);
    Ok(kpi)
}

fn required_field(field: &str, patch: Patch<String>) -> Result<Option<String>, CoreError> {
    match patch {
        Patch::Missing => Ok(None),
        Patch::Null => Err(CoreError::Validation(format!("{field} cannot be null"))),
        Patch::Value(v) => Ok(Some(v)),
    }
}
