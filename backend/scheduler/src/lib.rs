//! Cron expression engine: build, mutate and validate five-field cron
//! expressions and `@` macros.
//!
//! Computing run times from an expression is left to the job runtime that
//! consumes it.

pub mod builder;
pub mod cron_macro;
pub mod cron_parser;
pub mod error;
pub mod expression;
pub mod field_validator;
pub mod interval;
pub mod validator;

pub use builder::ExpressionBuilder;
pub use cron_macro::Macro;
pub use error::InvalidExpressionError;
pub use expression::{Expression, FieldPosition, FIELD_COUNT};
pub use field_validator::{
    standard_validators, DayOfMonthValidator, DayOfWeekValidator, FieldValidator, HourValidator,
    MacroValidator, MinuteValidator, MonthValidator,
};
pub use interval::Interval;
pub use validator::ExpressionValidator;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_expressions_validate() {
        let mut b = ExpressionBuilder::new();
        for interval in Interval::ALL {
            let expr = ExpressionBuilder::new().every(interval).unwrap();
            assert_eq!(ExpressionValidator::is_valid(&expr), Ok(true), "{expr}");
        }

        b.every_weeks().unwrap();
        let expr = b.at("23:59").unwrap();
        assert_eq!(expr, "59 23 * * 0");
        assert_eq!(ExpressionValidator::is_valid(&expr), Ok(true));
    }

    #[test]
    fn out_of_range_at_is_caught_by_validator() {
        let expr = ExpressionBuilder::new().at("25:00").unwrap();
        assert_eq!(expr, "00 25 * * *");
        assert_eq!(ExpressionValidator::is_valid(&expr), Ok(false));
    }

    #[test]
    fn every_macro_validates_and_expands() {
        for m in Macro::ALL {
            let mut b = ExpressionBuilder::new();
            let token = b.set_macro(m.as_str()).unwrap();
            assert_eq!(ExpressionValidator::is_valid(&token), Ok(true));
            if let Some(expansion) = m.expansion() {
                assert_eq!(ExpressionValidator::is_valid(expansion), Ok(true));
            }
        }
    }

    #[test]
    fn custom_strategy_set() {
        struct WeekdaysOnly;
        impl FieldValidator for WeekdaysOnly {
            fn position(&self) -> FieldPosition {
                FieldPosition::DayOfWeek
            }
            fn is_valid(&self, token: &str) -> bool {
                token == "1-5"
            }
        }

        let mut validators = standard_validators();
        validators.push(Box::new(WeekdaysOnly));
        let v = ExpressionValidator::new(validators);
        assert_eq!(v.validate("0 9 * * 1-5"), Ok(true));
        assert!(matches!(
            v.validate("0 9 * * *"),
            Err(InvalidExpressionError::InvalidField { position: FieldPosition::DayOfWeek, .. })
        ));
    }
}
