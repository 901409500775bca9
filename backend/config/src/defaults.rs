//! Config defaults: fills in values the file left out.

use crate::schema::{CronforgeConfig, LoggingConfig};

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Apply all defaults to a freshly loaded config.
pub fn apply_all_defaults(config: CronforgeConfig) -> CronforgeConfig {
    let config = apply_logging_defaults(config);
    apply_schedule_defaults(config)
}

fn apply_logging_defaults(mut config: CronforgeConfig) -> CronforgeConfig {
    let logging = config.logging.get_or_insert_with(LoggingConfig::default);
    if logging.level.is_none() {
        logging.level = Some(DEFAULT_LOG_LEVEL.to_string());
    }
    if logging.json.is_none() {
        logging.json = Some(false);
    }
    config
}

fn apply_schedule_defaults(mut config: CronforgeConfig) -> CronforgeConfig {
    for schedule in &mut config.schedules {
        schedule.enabled.get_or_insert(true);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ScheduleConfig;

    #[test]
    fn fills_missing_values() {
        let config = CronforgeConfig {
            logging: None,
            schedules: vec![ScheduleConfig {
                name: "a".into(),
                ..Default::default()
            }],
        };
        let config = apply_all_defaults(config);
        let logging = config.logging.unwrap();
        assert_eq!(logging.level.as_deref(), Some("info"));
        assert_eq!(logging.json, Some(false));
        assert_eq!(config.schedules[0].enabled, Some(true));
    }

    #[test]
    fn keeps_explicit_values() {
        let config = CronforgeConfig {
            logging: Some(LoggingConfig {
                level: Some("debug".into()),
                dir: None,
                json: Some(true),
            }),
            schedules: vec![ScheduleConfig {
                name: "a".into(),
                enabled: Some(false),
                ..Default::default()
            }],
        };
        let config = apply_all_defaults(config);
        assert_eq!(config.logging.unwrap().level.as_deref(), Some("debug"));
        assert_eq!(config.schedules[0].enabled, Some(false));
    }
}
