//! Export module for the trip planner
//!
//! Provides data export in multiple formats:
//! - CSV: the expense list (spreadsheet-compatible)
//! - JSON: full machine-readable snapshot, also accepted by `trip import`
//! - YAML: full human-readable snapshot, also accepted by `trip import`

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, import_from_json, ExportMetadata, TripExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_full_yaml, import_from_yaml};
