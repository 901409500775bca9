//! Per-position validation strategies.
//!
//! Each strategy owns exactly one [`FieldPosition`] and is stateless, so a
//! single set can be shared across threads and reused across validations.

use tracing::debug;

use crate::cron_macro::Macro;
use crate::cron_parser::check_field;
use crate::expression::FieldPosition;

/// Decides whether one token is acceptable at the position it governs.
pub trait FieldValidator: Send + Sync {
    fn position(&self) -> FieldPosition;

    fn is_valid(&self, token: &str) -> bool;
}

fn field_in_bounds(position: FieldPosition, token: &str) -> bool {
    let Some((min, max)) = position.bounds() else {
        return false;
    };
    match check_field(token, min, max) {
        Ok(()) => true,
        Err(e) => {
            debug!(position = position.name(), token, reason = %e, "Rejected cron field");
            false
        }
    }
}

/// Minute field, 0-59.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinuteValidator;

impl FieldValidator for MinuteValidator {
    fn position(&self) -> FieldPosition {
        FieldPosition::Minute
    }

    fn is_valid(&self, token: &str) -> bool {
        field_in_bounds(self.position(), token)
    }
}

/// Hour field, 0-23.
#[derive(Debug, Default, Clone, Copy)]
pub struct HourValidator;

impl FieldValidator for HourValidator {
    fn position(&self) -> FieldPosition {
        FieldPosition::Hour
    }

    fn is_valid(&self, token: &str) -> bool {
        field_in_bounds(self.position(), token)
    }
}

/// Day-of-month field, 1-31.
#[derive(Debug, Default, Clone, Copy)]
pub struct DayOfMonthValidator;

impl FieldValidator for DayOfMonthValidator {
    fn position(&self) -> FieldPosition {
        FieldPosition::DayOfMonth
    }

    fn is_valid(&self, token: &str) -> bool {
        field_in_bounds(self.position(), token)
    }
}

/// Month field, 1-12.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonthValidator;

impl FieldValidator for MonthValidator {
    fn position(&self) -> FieldPosition {
        FieldPosition::Month
    }

    fn is_valid(&self, token: &str) -> bool {
        field_in_bounds(self.position(), token)
    }
}

/// Day-of-week field, 0-6 with 0 as Sunday.
#[derive(Debug, Default, Clone, Copy)]
pub struct DayOfWeekValidator;

impl FieldValidator for DayOfWeekValidator {
    fn position(&self) -> FieldPosition {
        FieldPosition::DayOfWeek
    }

    fn is_valid(&self, token: &str) -> bool {
        field_in_bounds(self.position(), token)
    }
}

/// Whole-expression `@` tokens.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroValidator;

impl FieldValidator for MacroValidator {
    fn position(&self) -> FieldPosition {
        FieldPosition::Macro
    }

    fn is_valid(&self, token: &str) -> bool {
        let known = token.parse::<Macro>().is_ok();
        if !known {
            debug!(token, "Rejected cron macro");
        }
        known
    }
}

/// One strategy per field position plus the macro strategy.
pub fn standard_validators() -> Vec<Box<dyn FieldValidator>> {
    vec![
        Box::new(MinuteValidator),
        Box::new(HourValidator),
        Box::new(DayOfMonthValidator),
        Box::new(MonthValidator),
        Box::new(DayOfWeekValidator),
        Box::new(MacroValidator),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_covers_every_position() {
        let positions: Vec<FieldPosition> =
            standard_validators().iter().map(|v| v.position()).collect();
        for pos in FieldPosition::FIELDS {
            assert!(positions.contains(&pos));
        }
        assert!(positions.contains(&FieldPosition::Macro));
    }

    #[test]
    fn ranges_per_position() {
        assert!(MinuteValidator.is_valid("59"));
        assert!(!MinuteValidator.is_valid("60"));
        assert!(HourValidator.is_valid("23"));
        assert!(!HourValidator.is_valid("24"));
        assert!(DayOfMonthValidator.is_valid("31"));
        assert!(!DayOfMonthValidator.is_valid("0"));
        assert!(MonthValidator.is_valid("12"));
        assert!(!MonthValidator.is_valid("13"));
        assert!(DayOfWeekValidator.is_valid("0"));
        assert!(DayOfWeekValidator.is_valid("1-5"));
        assert!(!DayOfWeekValidator.is_valid("7"));
    }

    #[test]
    fn macro_validator_accepts_only_known_tokens() {
        for m in Macro::ALL {
            assert!(MacroValidator.is_valid(m.as_str()));
        }
        assert!(!MacroValidator.is_valid("@hourly"));
        assert!(!MacroValidator.is_valid("* * * * *"));
    }
}
