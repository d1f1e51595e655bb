//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` DTO for inserts
//! - An update DTO where the entity is mutable

pub mod asset_kpi;
pub mod kpi;
