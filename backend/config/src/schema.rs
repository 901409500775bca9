//! Schedule definition file schema.

use cronforge_scheduler::{Expression, ExpressionBuilder, Interval, InvalidExpressionError};
use serde::{Deserialize, Serialize};

/// Root of a `schedules.yaml` file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronforgeConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,

    #[serde(default)]
    pub schedules: Vec<ScheduleConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Directory for the rolling NDJSON log file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<bool>,
}

/// One named schedule.
///
/// `expression`, `every` and `at` are applied in that order to a fresh
/// builder, so `every: daily` with `at: "06:30"` gives `30 6 * * *`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub every: Option<Interval>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl ScheduleConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// True when none of `expression`, `every` or `at` is given.
    pub fn is_unconstrained(&self) -> bool {
        self.expression.is_none() && self.every.is_none() && self.at.is_none()
    }

    pub fn build(&self) -> Result<Expression, InvalidExpressionError> {
        let mut builder = ExpressionBuilder::new();
        if let Some(raw) = &self.expression {
            builder.set_expression(raw)?;
        }
        if let Some(interval) = self.every {
            builder.every(interval)?;
        }
        if let Some(time) = &self.at {
            builder.at(time)?;
        }
        Ok(builder.into_expression())
    }
}
