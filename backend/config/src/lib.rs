//! `cronforge-config`: schedule definition files.
//!
//! Provides:
//! - Typed schema for named schedules and logging settings
//! - YAML loading with `${ENV_VAR}` substitution
//! - Default value application
//! - Validation of every schedule against the cron validator

pub mod defaults;
pub mod env;
pub mod io;
pub mod schema;
pub mod validation;

pub use defaults::apply_all_defaults;
pub use env::{resolve_env_vars, resolve_env_vars_with, MissingEnvVarError};
pub use io::{config_dir, config_file_path, load_config, parse_config};
pub use schema::{CronforgeConfig, LoggingConfig, ScheduleConfig};
pub use validation::{validate, ConfigValidationError, ValidationReport};

use anyhow::Result;
use std::path::Path;

/// Load a schedules file, apply defaults and validate it.
///
/// Report entries are logged; the caller decides whether errors are fatal.
pub async fn load_and_prepare(path: &Path) -> Result<(CronforgeConfig, ValidationReport)> {
    let config = apply_all_defaults(load_config(path).await?);

    let report = validate(&config);
    for warning in &report.warnings {
        tracing::warn!(path = %warning.path, message = %warning.message, "Config warning");
    }
    for error in &report.errors {
        tracing::error!(path = %error.path, message = %error.message, "Config error");
    }

    Ok((config, report))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepares_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedules.yaml");
        std::fs::write(
            &path,
            "schedules:\n  - name: ok\n    every: hourly\n  - name: bad\n    expression: \"61 * * * *\"\n",
        )
        .unwrap();

        let (config, report) = load_and_prepare(&path).await.unwrap();
        assert_eq!(config.schedules[0].enabled, Some(true));
        assert_eq!(config.logging.unwrap().level.as_deref(), Some("info"));
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].path, "schedules[1]");
    }
}
