//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod asset_kpi_repo;
pub mod kpi_repo;

pub use asset_kpi_repo::AssetKpiRepo;
pub use kpi_repo::KpiRepo;
