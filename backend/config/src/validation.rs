//! Config validation: every schedule is built and checked against the
//! standard cron validator.

use std::collections::HashSet;

use cronforge_scheduler::ExpressionValidator;
use thiserror::Error;

use crate::schema::CronforgeConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// A config validation error with field path and message.
#[derive(Debug, Error)]
#[error("Config validation error at '{path}': {message}")]
pub struct ConfigValidationError {
    pub path: String,
    pub message: String,
}

/// A collection of validation errors found in one pass.
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<ConfigValidationError>,
    pub warnings: Vec<ConfigValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }

    fn warn(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(ConfigValidationError {
            path: path.into(),
            message: message.into(),
        });
    }
}

/// Validate the config and return a report of all errors and warnings.
pub fn validate(config: &CronforgeConfig) -> ValidationReport {
    let mut report = ValidationReport::default();
    validate_logging(config, &mut report);
    validate_schedules(config, &mut report);
    report
}

fn validate_logging(config: &CronforgeConfig, report: &mut ValidationReport) {
    let Some(level) = config.logging.as_ref().and_then(|l| l.level.as_deref()) else {
        return;
    };
    // Full filter directives like "cronforge=debug" are left to EnvFilter.
    if !level.contains('=') && !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        report.warn("logging.level", format!("Unknown log level '{level}'"));
    }
}

fn validate_schedules(config: &CronforgeConfig, report: &mut ValidationReport) {
    let mut seen = HashSet::new();

    for (i, schedule) in config.schedules.iter().enumerate() {
        let path = format!("schedules[{i}]");
        let name = schedule.name.trim();

        if name.is_empty() {
            report.error(format!("{path}.name"), "Schedule name cannot be empty");
        } else if !seen.insert(name) {
            report.error(format!("{path}.name"), format!("Duplicate schedule name '{name}'"));
        }

        if schedule.is_unconstrained() {
            report.warn(
                path.as_str(),
                "No expression, every or at given; schedule fires every minute",
            );
        }

        let expression = match schedule.build() {
            Ok(expression) => expression.to_string(),
            Err(e) => {
                report.error(path.as_str(), e.to_string());
                continue;
            }
        };

        match ExpressionValidator::is_valid(&expression) {
            Ok(true) => {}
            Ok(false) => report.error(
                path.as_str(),
                format!("Expression '{expression}' is not a valid cron expression"),
            ),
            Err(e) => report.error(path.as_str(), e.to_string()),
        }
    }
}
