//! YAML export and import
//!
//! Same snapshot as the JSON export, in a human-readable format.

use std::io::Write;

use crate::error::{TripError, TripResult};
use crate::export::json::TripExport;
use crate::storage::Storage;

/// Export all stored data as YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TripResult<()> {
    let export = TripExport::from_storage(storage)?;

    writeln!(writer, "# Trip planner export")
        .map_err(|e| TripError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TripError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| TripError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TripError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TripError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML snapshot
pub fn import_from_yaml(yaml_str: &str) -> TripResult<TripExport> {
    let export: TripExport =
        serde_yaml::from_str(yaml_str).map_err(|e| TripError::Import(e.to_string()))?;

    export.validate().map_err(TripError::Import)?;

    Ok(export)
}
