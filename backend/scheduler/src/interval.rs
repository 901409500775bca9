use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Shorthand schedules the builder knows how to apply in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "5m")]
    FiveMinutes,
    #[serde(rename = "10m")]
    TenMinutes,
    #[serde(rename = "15m")]
    FifteenMinutes,
    #[serde(rename = "20m")]
    TwentyMinutes,
    #[serde(rename = "25m")]
    TwentyFiveMinutes,
    #[serde(rename = "30m")]
    ThirtyMinutes,
    #[serde(rename = "hourly")]
    Hourly,
    #[serde(rename = "daily")]
    Daily,
    #[serde(rename = "weekly")]
    Weekly,
    #[serde(rename = "monthly")]
    Monthly,
    #[serde(rename = "yearly")]
    Yearly,
}

impl Interval {
    pub const ALL: [Interval; 11] = [
        Interval::FiveMinutes,
        Interval::TenMinutes,
        Interval::FifteenMinutes,
        Interval::TwentyMinutes,
        Interval::TwentyFiveMinutes,
        Interval::ThirtyMinutes,
        Interval::Hourly,
        Interval::Daily,
        Interval::Weekly,
        Interval::Monthly,
        Interval::Yearly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Interval::FiveMinutes => "5m",
            Interval::TenMinutes => "10m",
            Interval::FifteenMinutes => "15m",
            Interval::TwentyMinutes => "20m",
            Interval::TwentyFiveMinutes => "25m",
            Interval::ThirtyMinutes => "30m",
            Interval::Hourly => "hourly",
            Interval::Daily => "daily",
            Interval::Weekly => "weekly",
            Interval::Monthly => "monthly",
            Interval::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Interval::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Interval::ALL.iter().map(|i| i.as_str()).collect();
                format!("unknown interval '{s}', expected one of: {}", known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_parse_back() {
        for i in Interval::ALL {
            assert_eq!(i.to_string().parse::<Interval>(), Ok(i));
        }
        assert!("7m".parse::<Interval>().unwrap_err().contains("15m"));
    }
}
