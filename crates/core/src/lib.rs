//! Shared domain types for the KPI service.

pub mod error;
pub mod patch;
pub mod types;
