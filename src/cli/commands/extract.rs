use crate::cli::commands::resolve_format;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::extract;
use crate::errors::AppResult;
use crate::export::{table, write_table};
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Extract {
        input,
        format,
        file,
        force,
    } = cmd
    {
        let text = fs::read_to_string(Path::new(input))?;
        let rows = extract::extract_rows(&text);

        if rows.is_empty() {
            warning("No punch records found in the report text.");
        }

        let table = table::punch_table(&rows);
        let format = resolve_format(format, cfg)?;
        write_table(&table, &format, file.as_deref(), *force)?;
    }
    Ok(())
}
