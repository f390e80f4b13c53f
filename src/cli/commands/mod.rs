pub mod config;
pub mod extract;
pub mod organize;
pub mod summarize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;

/// CLI `--format` wins; otherwise the configured default applies.
pub(crate) fn resolve_format(
    cli_format: &Option<ExportFormat>,
    cfg: &Config,
) -> AppResult<ExportFormat> {
    match cli_format {
        Some(f) => Ok(f.clone()),
        None => ExportFormat::parse(&cfg.default_format)
            .ok_or_else(|| AppError::InvalidExportFormat(cfg.default_format.clone())),
    }
}
