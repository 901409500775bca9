use std::path::PathBuf;

use cronforge_config::LoggingConfig;
use cronforge_logging::LoggerOptions;

/// Log level when neither the environment nor the schedules file sets one.
const DEFAULT_LOG_LEVEL: &str = "warn";

/// CLI runtime configuration.
///
/// Unset values fall back to the schedules file's `logging` section.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Log filter used when `RUST_LOG` is unset
    pub log_level: Option<String>,
    /// JSON console logs
    pub log_json: Option<bool>,
    /// Rolling log file directory
    pub log_dir: Option<PathBuf>,
    /// Schedules file for `check`
    pub config_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_level: var("CRONFORGE_LOG").or_else(|| var("RUST_LOG")),
            log_json: var("CRONFORGE_LOG_JSON")
                .map(|v| matches!(v.as_str(), "1" | "true" | "yes")),
            log_dir: var("CRONFORGE_LOG_DIR").map(PathBuf::from),
            config_path: var("CRONFORGE_CONFIG").map(PathBuf::from),
        }
    }

    /// Environment values win over the file's `logging` section.
    pub fn logger_options(&self, file: Option<&LoggingConfig>) -> LoggerOptions {
        let file = file.cloned().unwrap_or_default();
        LoggerOptions {
            level: self
                .log_level
                .clone()
                .or(file.level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            json: self.log_json.or(file.json).unwrap_or(false),
            log_dir: self.log_dir.clone().or(file.dir.map(PathBuf::from)),
        }
    }
}
