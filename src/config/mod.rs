use crate::core::policy::ShiftPolicy;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_evening_threshold")]
    pub evening_threshold: String,
    #[serde(default = "default_night_end_threshold")]
    pub night_end_threshold: String,
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_evening_threshold() -> String {
    "17:00:00".to_string()
}
fn default_night_end_threshold() -> String {
    "02:15:00".to_string()
}
fn default_format() -> String {
    "csv".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            evening_threshold: default_evening_threshold(),
            night_end_threshold: default_night_end_threshold(),
            default_format: default_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchlog")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".punchlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchlog.conf")
    }

    /// Load configuration from file, or return defaults if not found or
    /// unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Ignoring malformed config file: {e}"));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Cannot read config file: {e}"));
                Self::default()
            }
        }
    }

    /// Write the default configuration file.
    pub fn init() -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;

        let path = Self::config_file();
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;

        Ok(path)
    }

    /// Build the reconstruction policy from the configured thresholds.
    pub fn policy(&self) -> AppResult<ShiftPolicy> {
        let evening = crate::utils::time::parse_time(&self.evening_threshold)
            .ok_or_else(|| AppError::InvalidTime(self.evening_threshold.clone()))?;
        let night_end = crate::utils::time::parse_time(&self.night_end_threshold)
            .ok_or_else(|| AppError::InvalidTime(self.night_end_threshold.clone()))?;

        Ok(ShiftPolicy {
            evening_threshold: evening,
            night_end_threshold: night_end,
        })
    }
}
