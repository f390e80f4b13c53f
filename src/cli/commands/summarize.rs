use crate::cli::commands::resolve_format;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{input, summarize};
use crate::errors::AppResult;
use crate::export::{table, write_table};
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summarize {
        input: in_file,
        mode,
        format,
        file,
        force,
    } = cmd
    {
        let in_path = Path::new(in_file);
        let (events, dropped) = input::load_events(in_path)?;

        if dropped > 0 {
            warning(format!("Dropped {dropped} row(s) with unparseable date, time, or I/O type."));
        }

        let summaries = summarize(&events, *mode, &cfg.policy()?);

        let table = table::summary_table(&result_name(in_path), &summaries);
        let format = resolve_format(format, cfg)?;
        write_table(&table, &format, file.as_deref(), *force)?;
    }
    Ok(())
}

/// Result-set name derived from the input batch, as the original tool
/// names its result sheets. Kept within the XLSX 31-character limit.
fn result_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("Sheet1");
    let name = format!("Results_{stem}");
    match name.char_indices().nth(31) {
        Some((cut, _)) => name[..cut].to_string(),
        None => name,
    }
}
