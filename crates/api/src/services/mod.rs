//! KPI operations, independent of HTTP.
//!
//! Each operation receives the injected [`KpiStore`](kpi_db::store::KpiStore)
//! and returns an [`AppResult`](crate::error::AppResult), so a missing KPI is
//! always an explicit `CoreError::NotFound` the caller has to handle.

pub mod kpi;
pub mod link;
pub mod query;
