use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        path,
        init,
    } = cmd
    {
        if *init {
            let written = Config::init()?;
            success(format!("Config file written: {}", written.display()));
            return Ok(());
        }

        if *path {
            println!("{}", Config::config_file().display());
            return Ok(());
        }

        if *print_config {
            let yaml = serde_yaml::to_string(cfg)
                .map_err(|e| AppError::Config(e.to_string()))?;
            print!("{yaml}");
            return Ok(());
        }

        info("Use --print, --path or --init.");
    }
    Ok(())
}
