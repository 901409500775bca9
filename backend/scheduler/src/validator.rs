//! Whole-expression validation by dispatching fields to their strategies.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{InvalidExpressionError, Result};
use crate::expression::{FieldPosition, FIELD_COUNT};
use crate::field_validator::{standard_validators, FieldValidator};

static STANDARD: Lazy<ExpressionValidator> = Lazy::new(ExpressionValidator::standard);

/// Validates candidate expressions against a set of [`FieldValidator`]s.
pub struct ExpressionValidator {
    validators: HashMap<FieldPosition, Box<dyn FieldValidator>>,
}

impl ExpressionValidator {
    /// Later strategies replace earlier ones registered for the same position.
    pub fn new(validators: impl IntoIterator<Item = Box<dyn FieldValidator>>) -> Self {
        let validators = validators
            .into_iter()
            .map(|v| (v.position(), v))
            .collect();
        Self { validators }
    }

    pub fn standard() -> Self {
        Self::new(standard_validators())
    }

    /// The process-wide standard validator, built on first use.
    pub fn shared() -> &'static ExpressionValidator {
        &STANDARD
    }

    /// Validate `expression`.
    ///
    /// A single `@` token returns the macro strategy's verdict. Otherwise the
    /// expression must have exactly five fields (`Syntax` error if not) and
    /// the first field its strategy rejects is reported as `InvalidField`.
    pub fn validate(&self, expression: &str) -> Result<bool> {
        let parts: Vec<&str> = expression.split_whitespace().collect();

        if let [token] = parts.as_slice() {
            if token.starts_with('@') {
                return Ok(self.lookup(FieldPosition::Macro)?.is_valid(token));
            }
        }

        if parts.len() != FIELD_COUNT {
            return Err(InvalidExpressionError::Syntax(expression.to_string()));
        }

        for (position, field) in FieldPosition::FIELDS.into_iter().zip(parts) {
            if !self.lookup(position)?.is_valid(field) {
                debug!(%position, field, "Cron expression failed field validation");
                return Err(InvalidExpressionError::InvalidField {
                    field: field.to_string(),
                    position,
                });
            }
        }

        Ok(true)
    }

    /// Validate with the standard strategy set.
    ///
    /// Field-level rejections become `Ok(false)`; a wrong field count still
    /// surfaces as `Err(Syntax)`.
    pub fn is_valid(expression: &str) -> Result<bool> {
        match Self::shared().validate(expression) {
            Err(InvalidExpressionError::InvalidField { .. })
            | Err(InvalidExpressionError::UnknownPosition(_)) => Ok(false),
            other => other,
        }
    }

    fn lookup(&self, position: FieldPosition) -> Result<&dyn FieldValidator> {
        self.validators
            .get(&position)
            .map(|v| v.as_ref())
            .ok_or(InvalidExpressionError::UnknownPosition(position))
    }
}

impl Default for ExpressionValidator {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_validator::{HourValidator, MinuteValidator};

    #[test]
    fn accepts_literals_and_macros() {
        let v = ExpressionValidator::standard();
        for expr in ["1 * * * *", "* 1 * * *", "1 2 3 * 4", "@yearly", "@daily", "@reboot"] {
            assert_eq!(v.validate(expr), Ok(true), "{expr}");
        }
    }

    #[test]
    fn accepts_step_range_and_list() {
        for expr in ["*/1 * * * *", "* * 1-3 * *", "* * * 1,2 *"] {
            assert_eq!(ExpressionValidator::is_valid(expr), Ok(true), "{expr}");
        }
    }

    #[test]
    fn wrong_field_count_is_an_error_not_false() {
        let err = ExpressionValidator::standard().validate("* * * *").unwrap_err();
        assert!(matches!(err, InvalidExpressionError::Syntax(_)));
        assert!(matches!(
            ExpressionValidator::is_valid("* * * *"),
            Err(InvalidExpressionError::Syntax(_))
        ));
        assert!(ExpressionValidator::is_valid("* * * * * *").is_err());
        assert!(ExpressionValidator::is_valid("   ").is_err());
    }

    #[test]
    fn first_bad_field_is_reported() {
        let err = ExpressionValidator::standard().validate("60 24 * * *").unwrap_err();
        assert_eq!(
            err,
            InvalidExpressionError::InvalidField {
                field: "60".into(),
                position: FieldPosition::Minute,
            }
        );
        assert_eq!(ExpressionValidator::is_valid("* 24 * * *"), Ok(false));
    }

    #[test]
    fn unknown_macro_is_false() {
        assert_eq!(ExpressionValidator::standard().validate("@hourly"), Ok(false));
        assert_eq!(ExpressionValidator::is_valid("@nope"), Ok(false));
    }

    #[test]
    fn macro_mixed_with_fields_is_rejected() {
        assert_eq!(ExpressionValidator::is_valid("@daily * * * *"), Ok(false));
        assert!(ExpressionValidator::is_valid("@daily *").is_err());
    }

    #[test]
    fn missing_strategy_is_unknown_position() {
        let partial = ExpressionValidator::new(vec![
            Box::new(MinuteValidator) as Box<dyn FieldValidator>,
            Box::new(HourValidator),
        ]);
        assert_eq!(
            partial.validate("* * * * *"),
            Err(InvalidExpressionError::UnknownPosition(FieldPosition::DayOfMonth))
        );
        assert_eq!(
            partial.validate("@daily"),
            Err(InvalidExpressionError::UnknownPosition(FieldPosition::Macro))
        );
    }

    #[test]
    fn repeated_validation_is_stable() {
        let v = ExpressionValidator::default();
        let first = v.validate("0 0 1 1 *");
        assert_eq!(first, v.validate("0 0 1 1 *"));
    }

    #[test]
    fn shared_instance_is_reused() {
        assert!(std::ptr::eq(ExpressionValidator::shared(), ExpressionValidator::shared()));
        assert_eq!(ExpressionValidator::shared().validate("@weekly"), Ok(true));
    }

    #[test]
    fn shared_across_threads() {
        let v = std::sync::Arc::new(ExpressionValidator::standard());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let v = v.clone();
                std::thread::spawn(move || v.validate(&format!("{i} * * * *")))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), Ok(true));
        }
    }
}
