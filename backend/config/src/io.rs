//! Schedule file location and loading.

use crate::env::resolve_env_vars;
use crate::schema::CronforgeConfig;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Default config file name within the config directory.
const CONFIG_FILE_NAME: &str = "schedules.yaml";

/// Resolve the cronforge config directory.
/// Priority: `CRONFORGE_CONFIG_DIR` env > `~/.cronforge/` > `./.cronforge`
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CRONFORGE_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    match dirs::home_dir() {
        Some(home) => home.join(".cronforge"),
        None => PathBuf::from(".cronforge"),
    }
}

/// Resolve the full path to the schedules file.
pub fn config_file_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

/// Load, substitute `${VAR}` references and parse the config from disk.
///
/// Returns `Ok(Default::default())` if the file doesn't exist.
pub async fn load_config(path: &Path) -> Result<CronforgeConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "Config file does not exist; using defaults");
        return Ok(CronforgeConfig::default());
    }

    let raw = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = parse_config(&raw)
        .with_context(|| format!("Failed to load config at: {}", path.display()))?;

    info!(
        path = %path.display(),
        schedules = config.schedules.len(),
        "Loaded config"
    );
    Ok(config)
}

/// Parse YAML text, resolving env references before typing it.
pub fn parse_config(raw: &str) -> Result<CronforgeConfig> {
    if raw.trim().is_empty() {
        return Ok(CronforgeConfig::default());
    }
    let value = match serde_yaml::from_str::<Value>(raw).context("Failed to parse config YAML")? {
        Value::Null => return Ok(CronforgeConfig::default()),
        value => value,
    };
    let value = resolve_env_vars(&value).context("Failed to resolve env vars in config")?;
    serde_json::from_value(value).context("Config does not match the schedules schema")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cronforge_scheduler::Interval;

    #[test]
    fn parses_camel_case_yaml() {
        let config = parse_config(
            r#"
logging:
  level: debug
schedules:
  - name: nightly
    description: nightly export
    every: daily
    at: "02:15"
  - name: paused
    expression: "*/5 * * * *"
    enabled: false
"#,
        )
        .unwrap();
        assert_eq!(config.schedules.len(), 2);
        assert_eq!(config.schedules[0].every, Some(Interval::Daily));
        assert!(!config.schedules[1].is_enabled());
        assert_eq!(config.logging.unwrap().level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_document_is_default() {
        assert!(parse_config("").unwrap().schedules.is_empty());
    }

    #[test]
    fn unknown_shape_is_an_error() {
        assert!(parse_config("schedules: 5").is_err());
    }

    #[tokio::test]
    async fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.yaml")).await.unwrap();
        assert!(config.schedules.is_empty());
    }

    #[tokio::test]
    async fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = config_file_path(dir.path());
        std::fs::write(&path, "schedules:\n  - name: a\n    expression: \"@weekly\"\n").unwrap();
        let config = load_config(&path).await.unwrap();
        assert_eq!(config.schedules[0].expression.as_deref(), Some("@weekly"));
    }
}
