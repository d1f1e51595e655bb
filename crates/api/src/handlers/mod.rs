pub mod asset_kpi;
pub mod kpi;
