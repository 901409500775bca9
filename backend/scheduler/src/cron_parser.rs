/// Per-field cron grammar.
///
/// A field is a comma list of items; each item is `*`, `n` or `a-b`,
/// optionally followed by `/step`.
use thiserror::Error;

/// Why a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldSyntaxError {
    #[error("empty item")]
    Empty,

    #[error("'{0}' not numeric")]
    NotNumeric(String),

    #[error("step {step} out of [1, {max}]")]
    Step { step: u32, max: u32 },

    #[error("value {value} out of [{min}, {max}]")]
    OutOfRange { value: u32, min: u32, max: u32 },

    #[error("range {lo}-{hi} is inverted")]
    Inverted { lo: u32, hi: u32 },
}

/// Check whether a cron field is syntactically valid within [min, max].
pub fn check_field(field: &str, min: u32, max: u32) -> Result<(), FieldSyntaxError> {
    for item in field.split(',') {
        check_item(item, min, max)?;
    }
    Ok(())
}

fn check_item(item: &str, min: u32, max: u32) -> Result<(), FieldSyntaxError> {
    let (base, step) = match item.split_once('/') {
        Some((base, step)) => (base, Some(number(step)?)),
        None => (item, None),
    };

    if let Some(step) = step {
        if step == 0 || step > max {
            return Err(FieldSyntaxError::Step { step, max });
        }
    }

    if base == "*" {
        return Ok(());
    }

    if let Some((lo, hi)) = base.split_once('-') {
        let lo = bounded(number(lo)?, min, max)?;
        let hi = bounded(number(hi)?, min, max)?;
        if lo > hi {
            return Err(FieldSyntaxError::Inverted { lo, hi });
        }
        return Ok(());
    }

    bounded(number(base)?, min, max).map(|_| ())
}

fn number(s: &str) -> Result<u32, FieldSyntaxError> {
    if s.is_empty() {
        return Err(FieldSyntaxError::Empty);
    }
    // `u32::from_str` would also take a leading '+'.
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldSyntaxError::NotNumeric(s.to_string()));
    }
    s.parse()
        .map_err(|_| FieldSyntaxError::NotNumeric(s.to_string()))
}

fn bounded(value: u32, min: u32, max: u32) -> Result<u32, FieldSyntaxError> {
    if value < min || value > max {
        return Err(FieldSyntaxError::OutOfRange { value, min, max });
    }
    Ok(value)
}
