//! `cronforge build`: compose an expression from builder operations.

use std::process::ExitCode;

use clap::Args;
use cronforge_scheduler::{ExpressionBuilder, Interval, InvalidExpressionError};

use crate::terminal_output::note_error;
use crate::validate_cmd::{self, Verdict};

/// Operations run in the order the flags are listed here.
#[derive(Debug, Default, Args)]
pub struct BuildArgs {
    /// Start from a full five-field expression
    #[arg(long, conflicts_with = "macro_token")]
    pub expression: Option<String>,

    /// Start from a macro such as @daily
    #[arg(long = "macro")]
    pub macro_token: Option<String>,

    /// Interval shorthand: 5m, 10m, 15m, 20m, 25m, 30m, hourly, daily, weekly, monthly, yearly
    #[arg(long)]
    pub every: Option<Interval>,

    #[arg(long)]
    pub minutes: Option<String>,

    #[arg(long)]
    pub hours: Option<String>,

    /// Day-of-month field
    #[arg(long)]
    pub days: Option<String>,

    #[arg(long)]
    pub months: Option<String>,

    #[arg(long)]
    pub days_of_week: Option<String>,

    /// Time of day as HH or HH:MM
    #[arg(long)]
    pub at: Option<String>,

    /// Validate the result as well
    #[arg(long)]
    pub check: bool,
}

pub fn build_expression(args: &BuildArgs) -> Result<String, InvalidExpressionError> {
    let mut builder = ExpressionBuilder::new();

    if let Some(raw) = &args.expression {
        builder.set_expression(raw)?;
    }
    if let Some(token) = &args.macro_token {
        builder.set_macro(token)?;
    }
    if let Some(interval) = args.every {
        builder.every(interval)?;
    }
    if let Some(v) = &args.minutes {
        builder.every_specific_minutes(v)?;
    }
    if let Some(v) = &args.hours {
        builder.every_specific_hours(v)?;
    }
    if let Some(v) = &args.days {
        builder.every_specific_days(v)?;
    }
    if let Some(v) = &args.months {
        builder.every_specific_months(v)?;
    }
    if let Some(v) = &args.days_of_week {
        builder.every_specific_days_of_week(v)?;
    }
    if let Some(time) = &args.at {
        builder.at(time)?;
    }

    Ok(builder.expression())
}

pub fn run(args: &BuildArgs) -> ExitCode {
    let expression = match build_expression(args) {
        Ok(expression) => expression,
        Err(e) => {
            note_error(&e.to_string());
            return ExitCode::from(2);
        }
    };

    println!("{expression}");

    if !args.check {
        return ExitCode::SUCCESS;
    }
    let verdict = validate_cmd::check(&expression);
    if let Verdict::Invalid(reason) | Verdict::Malformed(reason) = &verdict {
        note_error(reason);
    }
    verdict.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_every_minute() {
        assert_eq!(build_expression(&BuildArgs::default()).unwrap(), "* * * * *");
    }

    #[test]
    fn applies_in_flag_order() {
        let args = BuildArgs {
            every: Some(Interval::Daily),
            days_of_week: Some("1-5".into()),
            at: Some("07:45".into()),
            ..Default::default()
        };
        assert_eq!(build_expression(&args).unwrap(), "45 07 * * 1-5");
    }

    #[test]
    fn macro_then_field_expands() {
        let args = BuildArgs {
            macro_token: Some("@monthly".into()),
            days: Some("15".into()),
            ..Default::default()
        };
        assert_eq!(build_expression(&args).unwrap(), "0 0 15 * *");
    }

    #[test]
    fn macro_alone_is_kept() {
        let args = BuildArgs {
            macro_token: Some("@weekly".into()),
            ..Default::default()
        };
        assert_eq!(build_expression(&args).unwrap(), "@weekly");
    }

    #[test]
    fn bad_macro_is_reported() {
        let args = BuildArgs {
            macro_token: Some("@sometimes".into()),
            ..Default::default()
        };
        assert!(matches!(
            build_expression(&args),
            Err(InvalidExpressionError::UnsupportedMacro(_))
        ));
    }
}
