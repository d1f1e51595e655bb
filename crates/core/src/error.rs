use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl CoreError {
    /// Not-found error for a KPI identifier.
    pub fn kpi_not_found(id: DbId) -> Self {
        CoreError::NotFound { entity: "KPI", id }
    }
}
