use crate::cli::commands::resolve_format;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{input, organized_rows, reconstruct};
use crate::errors::AppResult;
use crate::export::{table, write_table};
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Organize {
        input: in_file,
        format,
        file,
        force,
    } = cmd
    {
        let (events, dropped) = input::load_events(Path::new(in_file))?;

        if dropped > 0 {
            warning(format!("Dropped {dropped} row(s) with unparseable date, time, or I/O type."));
        }
        if events.is_empty() {
            warning("No valid punch events in input.");
        }

        let shifts = reconstruct(&events, &cfg.policy()?);
        let rows = organized_rows(&shifts);

        let table = table::organized_table(&rows);
        let format = resolve_format(format, cfg)?;
        write_table(&table, &format, file.as_deref(), *force)?;
    }
    Ok(())
}
