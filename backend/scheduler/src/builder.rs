//! Fluent construction of cron expressions.
//!
//! The builder keeps a structured [`Expression`] and renders it to its
//! string form after every mutation. No grammar checks happen here; run the
//! result through [`ExpressionValidator`](crate::ExpressionValidator) for that.

use tracing::debug;

use crate::cron_macro::Macro;
use crate::error::{InvalidExpressionError, Result};
use crate::expression::{split_fields, Expression, FieldPosition};
use crate::interval::Interval;

/// Builds one schedule's expression, starting from `* * * * *`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpressionBuilder {
    expression: Expression,
}

impl ExpressionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current expression rendered as a string.
    pub fn expression(&self) -> String {
        self.expression.to_string()
    }

    pub fn as_expression(&self) -> &Expression {
        &self.expression
    }

    pub fn into_expression(self) -> Expression {
        self.expression
    }

    /// Replace the whole expression. `@` input is treated as a macro.
    ///
    /// Fields are not range-checked, but there must be exactly five of them
    /// (`Syntax` otherwise); runs of whitespace collapse to single spaces.
    pub fn set_expression(&mut self, raw: &str) -> Result<String> {
        let raw = raw.trim();
        if raw.starts_with('@') {
            return self.set_macro(raw);
        }
        self.expression = Expression::Fields(split_fields(raw)?);
        debug!(expression = %self.expression, "Set cron expression");
        Ok(self.expression())
    }

    /// Replace the whole expression with a macro token (stored unexpanded).
    pub fn set_macro(&mut self, token: &str) -> Result<String> {
        let m: Macro = token.parse()?;
        self.expression = Expression::Macro(m);
        debug!(expression = %self.expression, "Set cron macro");
        Ok(self.expression())
    }

    pub fn every_specific_minutes(&mut self, value: &str) -> Result<String> {
        self.change_expression(&[(FieldPosition::Minute, value)])
    }

    pub fn every_specific_hours(&mut self, value: &str) -> Result<String> {
        self.change_expression(&[(FieldPosition::Hour, value)])
    }

    pub fn every_specific_days(&mut self, value: &str) -> Result<String> {
        self.change_expression(&[(FieldPosition::DayOfMonth, value)])
    }

    pub fn every_specific_months(&mut self, value: &str) -> Result<String> {
        self.change_expression(&[(FieldPosition::Month, value)])
    }

    pub fn every_specific_days_of_week(&mut self, value: &str) -> Result<String> {
        self.change_expression(&[(FieldPosition::DayOfWeek, value)])
    }

    pub fn every_5_minutes(&mut self) -> Result<String> {
        self.every_specific_minutes("*/5")
    }

    pub fn every_10_minutes(&mut self) -> Result<String> {
        self.every_specific_minutes("*/10")
    }

    pub fn every_15_minutes(&mut self) -> Result<String> {
        self.every_specific_minutes("*/15")
    }

    pub fn every_20_minutes(&mut self) -> Result<String> {
        self.every_specific_minutes("*/20")
    }

    pub fn every_25_minutes(&mut self) -> Result<String> {
        self.every_specific_minutes("*/25")
    }

    pub fn every_30_minutes(&mut self) -> Result<String> {
        self.every_specific_minutes("*/30")
    }

    /// Minute 0 of every hour.
    pub fn every_hours(&mut self) -> Result<String> {
        self.change_expression(&[(FieldPosition::Minute, "0")])
    }

    /// Midnight every day.
    pub fn every_days(&mut self) -> Result<String> {
        self.change_expression(&[(FieldPosition::Minute, "0"), (FieldPosition::Hour, "0")])
    }

    /// Midnight every Sunday.
    pub fn every_weeks(&mut self) -> Result<String> {
        self.change_expression(&[
            (FieldPosition::Minute, "0"),
            (FieldPosition::Hour, "0"),
            (FieldPosition::DayOfWeek, "0"),
        ])
    }

    /// Midnight on the 1st of every month.
    pub fn every_months(&mut self) -> Result<String> {
        self.change_expression(&[
            (FieldPosition::Minute, "0"),
            (FieldPosition::Hour, "0"),
            (FieldPosition::DayOfMonth, "1"),
        ])
    }

    /// Midnight on January 1st.
    pub fn every_years(&mut self) -> Result<String> {
        self.change_expression(&[
            (FieldPosition::Minute, "0"),
            (FieldPosition::Hour, "0"),
            (FieldPosition::DayOfMonth, "1"),
            (FieldPosition::Month, "1"),
        ])
    }

    pub fn every(&mut self, interval: Interval) -> Result<String> {
        match interval {
            Interval::FiveMinutes => self.every_5_minutes(),
            Interval::TenMinutes => self.every_10_minutes(),
            Interval::FifteenMinutes => self.every_15_minutes(),
            Interval::TwentyMinutes => self.every_20_minutes(),
            Interval::TwentyFiveMinutes => self.every_25_minutes(),
            Interval::ThirtyMinutes => self.every_30_minutes(),
            Interval::Hourly => self.every_hours(),
            Interval::Daily => self.every_days(),
            Interval::Weekly => self.every_weeks(),
            Interval::Monthly => self.every_months(),
            Interval::Yearly => self.every_years(),
        }
    }

    /// Fire at `HH` or `HH:MM`. Only the first colon splits, and ranges are
    /// left to the validator.
    pub fn at(&mut self, time: &str) -> Result<String> {
        let (hour, minute) = time.split_once(':').unwrap_or((time, "0"));
        self.change_expression(&[(FieldPosition::Hour, hour), (FieldPosition::Minute, minute)])
    }

    /// Overwrite the given fields, expanding a macro first.
    ///
    /// Nothing changes unless every value is a single non-empty token.
    fn change_expression(&mut self, changes: &[(FieldPosition, &str)]) -> Result<String> {
        let mut fields = self.expression.fields()?;
        for &(position, value) in changes {
            if value.is_empty() || value.chars().any(char::is_whitespace) {
                return Err(InvalidExpressionError::Syntax(value.to_string()));
            }
            let index = position
                .index()
                .ok_or(InvalidExpressionError::UnknownPosition(position))?;
            fields[index] = value.to_string();
        }
        self.expression = Expression::Fields(fields);
        debug!(expression = %self.expression, "Changed cron expression");
        Ok(self.expression())
    }
}
