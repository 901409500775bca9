//! `@`-prefixed shorthand tokens and their fixed five-field expansions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidExpressionError;

/// A cron macro token such as `@daily`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Macro {
    #[serde(rename = "@annually")]
    Annually,
    #[serde(rename = "@yearly")]
    Yearly,
    #[serde(rename = "@monthly")]
    Monthly,
    #[serde(rename = "@weekly")]
    Weekly,
    #[serde(rename = "@daily")]
    Daily,
    #[serde(rename = "@reboot")]
    Reboot,
}

impl Macro {
    pub const ALL: [Macro; 6] = [
        Macro::Annually,
        Macro::Yearly,
        Macro::Monthly,
        Macro::Weekly,
        Macro::Daily,
        Macro::Reboot,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Macro::Annually => "@annually",
            Macro::Yearly => "@yearly",
            Macro::Monthly => "@monthly",
            Macro::Weekly => "@weekly",
            Macro::Daily => "@daily",
            Macro::Reboot => "@reboot",
        }
    }

    /// The five-field expression this macro stands for.
    ///
    /// `@reboot` fires on startup rather than at a wall-clock time, so it has
    /// no expansion.
    pub fn expansion(self) -> Option<&'static str> {
        match self {
            Macro::Annually | Macro::Yearly => Some("0 0 1 1 *"),
            Macro::Monthly => Some("0 0 1 * *"),
            Macro::Weekly => Some("0 0 * * 0"),
            Macro::Daily => Some("0 0 * * *"),
            Macro::Reboot => None,
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Macro {
    type Err = InvalidExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Macro::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| InvalidExpressionError::UnsupportedMacro(s.to_string()))
    }
}
