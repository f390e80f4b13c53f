// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::table::TableData;
use crate::export::xlsx::export_xlsx;
use crate::utils::table::Table;
use std::path::Path;

/// Write a table to a file in the requested format, or render it to
/// stdout when no output file was given.
pub fn write_table(
    table: &TableData,
    format: &ExportFormat,
    file: Option<&str>,
    force: bool,
) -> AppResult<()> {
    let Some(file) = file else {
        print!("{}", render(table));
        return Ok(());
    };

    let path = Path::new(file);
    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(table, path),
        ExportFormat::Json => export_json(table, path),
        ExportFormat::Xlsx => export_xlsx(table, path),
    }
}

fn render(table: &TableData) -> String {
    let mut out = Table::new(table.headers.iter().map(|h| h.to_string()).collect());
    for row in &table.rows {
        out.add_row(row.clone());
    }
    out.render()
}
