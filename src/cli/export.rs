//! CLI commands for export and import
//!
//! Export writes CSV, JSON or YAML; import restores a JSON or YAML snapshot.

use chrono::Local;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::paths::TripPaths;
use crate::error::{TripError, TripResult};
use crate::export::{
    export_expenses_csv, export_full_json, export_full_yaml, import_from_json, import_from_yaml,
};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expenses only)
    Csv,
    /// JSON format (full snapshot)
    Json,
    /// YAML format (full snapshot, human-readable)
    Yaml,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Arguments of `trip export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file (defaults to a timestamped file in the exports directory)
    pub output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,
}

/// Arguments of `trip import`
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON or YAML snapshot produced by `trip export`
    pub file: PathBuf,
}

/// Handle `trip export`
pub fn handle_export_command(storage: &Storage, paths: &TripPaths, args: ExportArgs) -> TripResult<()> {
    let output = args.output.unwrap_or_else(|| {
        paths.export_dir().join(format!(
            "trip-{}.{}",
            Local::now().format("%Y%m%d-%H%M%S"),
            args.format.extension()
        ))
    });

    let file = File::create(&output).map_err(|e| {
        TripError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => {
            export_expenses_csv(storage, &mut writer)?;
            println!("Expenses exported to: {}", output.display());
        }
        ExportFormat::Json => {
            export_full_json(storage, &mut writer)?;
            println!("Trip exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            export_full_yaml(storage, &mut writer)?;
            println!("Trip exported to: {}", output.display());
        }
    }

    writer
        .flush()
        .map_err(|e| TripError::Export(format!("Failed to write {}: {}", output.display(), e)))?;

    Ok(())
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Handle `trip import`
pub fn handle_import_command(storage: &Storage, args: ImportArgs) -> TripResult<()> {
    let contents = std::fs::read_to_string(&args.file).map_err(|e| {
        TripError::Import(format!("Failed to read {}: {}", args.file.display(), e))
    })?;

    let export = if is_yaml(&args.file) {
        import_from_yaml(&contents)?
    } else {
        import_from_json(&contents)?
    };

    export.restore(storage)?;

    println!("Imported {}", args.file.display());
    match &export.settings {
        Some(settings) => println!("  Trip: {}", settings.title()),
        None => println!("  Trip: (not set up)"),
    }
    println!("  Itinerary entries: {}", export.itinerary.len());
    println!("  Expenses: {}", export.expenses.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yaml() {
        assert!(is_yaml(Path::new("trip.yaml")));
        assert!(is_yaml(Path::new("trip.yml")));
        assert!(!is_yaml(Path::new("trip.json")));
        assert!(!is_yaml(Path::new("trip")));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Yaml.extension(), "yaml");
    }
}
