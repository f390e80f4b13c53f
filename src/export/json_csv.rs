// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{TableData, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed, one object per row keyed by header.
pub(crate) fn export_json(table: &TableData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let objects: Vec<serde_json::Value> = table
        .rows
        .iter()
        .map(|row| {
            let mut obj = serde_json::Map::new();
            for (header, value) in table.headers.iter().zip(row) {
                obj.insert(header.to_string(), serde_json::Value::String(value.clone()));
            }
            serde_json::Value::Object(obj)
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&objects)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the table headers as first record.
pub(crate) fn export_csv(table: &TableData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
