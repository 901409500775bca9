//! Structured cron expression: five ordered fields or a single macro token.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::cron_macro::Macro;
use crate::error::{InvalidExpressionError, Result};

/// Number of fields in a non-macro expression.
pub const FIELD_COUNT: usize = 5;

/// The slot a [`FieldValidator`](crate::FieldValidator) governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldPosition {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    /// The whole expression when it is a single `@` token.
    Macro,
}

impl FieldPosition {
    pub const FIELDS: [FieldPosition; FIELD_COUNT] = [
        FieldPosition::Minute,
        FieldPosition::Hour,
        FieldPosition::DayOfMonth,
        FieldPosition::Month,
        FieldPosition::DayOfWeek,
    ];

    pub fn index(self) -> Option<usize> {
        match self {
            FieldPosition::Minute => Some(0),
            FieldPosition::Hour => Some(1),
            FieldPosition::DayOfMonth => Some(2),
            FieldPosition::Month => Some(3),
            FieldPosition::DayOfWeek => Some(4),
            FieldPosition::Macro => None,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::FIELDS.get(index).copied()
    }

    /// Inclusive numeric range accepted at this position.
    pub fn bounds(self) -> Option<(u32, u32)> {
        match self {
            FieldPosition::Minute => Some((0, 59)),
            FieldPosition::Hour => Some((0, 23)),
            FieldPosition::DayOfMonth => Some((1, 31)),
            FieldPosition::Month => Some((1, 12)),
            // 0 is Sunday
            FieldPosition::DayOfWeek => Some((0, 6)),
            FieldPosition::Macro => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FieldPosition::Minute => "minute",
            FieldPosition::Hour => "hour",
            FieldPosition::DayOfMonth => "day-of-month",
            FieldPosition::Month => "month",
            FieldPosition::DayOfWeek => "day-of-week",
            FieldPosition::Macro => "macro",
        }
    }
}

impl fmt::Display for FieldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index() {
            Some(i) => write!(f, "{i}"),
            None => f.write_str("macro"),
        }
    }
}

/// A cron expression in either of its two shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Fields([String; FIELD_COUNT]),
    Macro(Macro),
}

impl Default for Expression {
    fn default() -> Self {
        Expression::Fields(std::array::from_fn(|_| "*".to_string()))
    }
}

impl Expression {
    pub fn is_macro(&self) -> bool {
        matches!(self, Expression::Macro(_))
    }

    /// The five-field form, looking macros up in the expansion table.
    pub fn fields(&self) -> Result<[String; FIELD_COUNT]> {
        match self {
            Expression::Fields(fields) => Ok(fields.clone()),
            Expression::Macro(m) => {
                let expansion = m
                    .expansion()
                    .ok_or(InvalidExpressionError::MacroNotExpandable(*m))?;
                split_fields(expansion)
            }
        }
    }
}

/// Split on whitespace into exactly [`FIELD_COUNT`] fields.
pub(crate) fn split_fields(raw: &str) -> Result<[String; FIELD_COUNT]> {
    let parts: Vec<&str> = raw.split_whitespace().collect();
    if parts.len() != FIELD_COUNT {
        return Err(InvalidExpressionError::Syntax(raw.to_string()));
    }
    Ok(std::array::from_fn(|i| parts[i].to_string()))
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Fields(fields) => f.write_str(&fields.join(" ")),
            Expression::Macro(m) => f.write_str(m.as_str()),
        }
    }
}

impl FromStr for Expression {
    type Err = InvalidExpressionError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('@') {
            return Ok(Expression::Macro(trimmed.parse()?));
        }
        Ok(Expression::Fields(split_fields(trimmed)?))
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_wildcards() {
        assert_eq!(Expression::default().to_string(), "* * * * *");
    }

    #[test]
    fn parses_fields_and_macros() {
        let expr: Expression = "*/45 * * * *".parse().unwrap();
        assert_eq!(expr.to_string(), "*/45 * * * *");

        let expr: Expression = "@weekly".parse().unwrap();
        assert_eq!(expr, Expression::Macro(Macro::Weekly));
        assert!(expr.is_macro());
    }

    #[test]
    fn wrong_field_count_is_syntax_error() {
        assert!(matches!(
            "* * * *".parse::<Expression>(),
            Err(InvalidExpressionError::Syntax(_))
        ));
        assert!("* * * * * *".parse::<Expression>().is_err());
        assert!("".parse::<Expression>().is_err());
    }

    #[test]
    fn macro_fields_use_expansion() {
        let expr = Expression::Macro(Macro::Monthly);
        assert_eq!(expr.fields().unwrap().join(" "), "0 0 1 * *");
        assert_eq!(
            Expression::Macro(Macro::Reboot).fields(),
            Err(InvalidExpressionError::MacroNotExpandable(Macro::Reboot))
        );
    }

    #[test]
    fn positions_round_trip_through_index() {
        for (i, pos) in FieldPosition::FIELDS.into_iter().enumerate() {
            assert_eq!(pos.index(), Some(i));
            assert_eq!(FieldPosition::from_index(i), Some(pos));
        }
        assert_eq!(FieldPosition::from_index(5), None);
        assert_eq!(FieldPosition::Macro.bounds(), None);
        assert_eq!(FieldPosition::DayOfWeek.bounds(), Some((0, 6)));
    }

    #[test]
    fn serde_as_string() {
        let expr: Expression = serde_json::from_str("\"0 0 * * *\"").unwrap();
        assert_eq!(serde_json::to_string(&expr).unwrap(), "\"0 0 * * *\"");
        assert!(serde_json::from_str::<Expression>("\"@nope\"").is_err());
    }
}
