//! `cronforge validate <EXPR>`

use std::process::ExitCode;

use cronforge_scheduler::{ExpressionValidator, InvalidExpressionError};
use tracing::debug;

use crate::terminal_output::{note_error, note_success};

/// Verdict for one expression, with the reason when it is rejected.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid(String),
    Malformed(String),
}

impl Verdict {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Verdict::Valid => ExitCode::SUCCESS,
            Verdict::Invalid(_) => ExitCode::from(1),
            Verdict::Malformed(_) => ExitCode::from(2),
        }
    }
}

pub fn check(expression: &str) -> Verdict {
    match ExpressionValidator::shared().validate(expression) {
        Ok(true) => Verdict::Valid,
        Ok(false) => Verdict::Invalid(format!("unsupported macro: {}", expression.trim())),
        Err(e @ InvalidExpressionError::Syntax(_)) => Verdict::Malformed(e.to_string()),
        Err(e) => Verdict::Invalid(e.to_string()),
    }
}

pub fn run(expression: &str) -> ExitCode {
    let verdict = check(expression);
    debug!(expression, ?verdict, "Validated expression");
    match &verdict {
        Verdict::Valid => note_success(&format!("valid: {}", expression.trim())),
        Verdict::Invalid(reason) => note_error(&format!("invalid: {reason}")),
        Verdict::Malformed(reason) => note_error(reason),
    }
    verdict.exit_code()
}
