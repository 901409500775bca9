use thiserror::Error;

use crate::cron_macro::Macro;
use crate::expression::FieldPosition;

/// Errors raised while building or validating a cron expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidExpressionError {
    #[error("unsupported macro: {0}")]
    UnsupportedMacro(String),

    #[error("expression invalid, check syntax: '{0}'")]
    Syntax(String),

    #[error("field '{field}' invalid at position {position}")]
    InvalidField {
        field: String,
        position: FieldPosition,
    },

    #[error("unknown position: {0}")]
    UnknownPosition(FieldPosition),

    #[error("macro {0} has no field expansion")]
    MacroNotExpandable(Macro),
}

pub type Result<T, E = InvalidExpressionError> = std::result::Result<T, E>;
