//! Month selector for a timesheet report.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local};
use thiserror::Error;

/// Error returned when a period string is not a month number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid period {value:?}: expected a month between 01 and 12")]
pub struct PeriodError {
    value: String,
}

/// A calendar month (1-12) selecting which day markers belong to the report.
///
/// Always rendered as two digits, matching the `[MM/DD HH:MM]` day markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Period(u8);

impl Period {
    /// Creates a period from a month number.
    pub fn new(month: u32) -> Result<Self, PeriodError> {
        match u8::try_from(month) {
            Ok(m @ 1..=12) => Ok(Self(m)),
            _ => Err(PeriodError {
                value: month.to_string(),
            }),
        }
    }

    /// The current month in local time.
    pub fn current() -> Self {
        Self::new(Local::now().month()).unwrap_or(Self(1))
    }

    /// The month number (1-12).
    pub fn month(self) -> u32 {
        u32::from(self.0)
    }

    /// The month before this one; January wraps to December.
    pub const fn previous(self) -> Self {
        if self.0 == 1 { Self(12) } else { Self(self.0 - 1) }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || PeriodError {
            value: s.to_string(),
        };

        if trimmed.is_empty() || trimmed.len() > 2 || !trimmed.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let month: u32 = trimmed.parse().map_err(|_| invalid())?;
        Self::new(month).map_err(|_| invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_digit_months() {
        let period: Period = "05".parse().unwrap();
        assert_eq!(period.month(), 5);
        assert_eq!(period.to_string(), "05");

        let december: Period = "12".parse().unwrap();
        assert_eq!(december.to_string(), "12");
    }

    #[test]
    fn normalizes_single_digit_month() {
        let period: Period = "5".parse().unwrap();
        assert_eq!(period.to_string(), "05");
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        for input in ["00", "13", "", "ab", "-1", "123", "1a"] {
            let result: Result<Period, _> = input.parse();
            assert!(result.is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn error_message_names_the_value() {
        let err = "13".parse::<Period>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid period \"13\": expected a month between 01 and 12"
        );
    }

    #[test]
    fn previous_wraps_january_to_december() {
        assert_eq!(Period::new(1).unwrap().previous(), Period::new(12).unwrap());
        assert_eq!(Period::new(3).unwrap().previous(), Period::new(2).unwrap());
        assert_eq!(Period::new(12).unwrap().previous().to_string(), "11");
    }

    #[test]
    fn current_is_a_valid_month() {
        let month = Period::current().month();
        assert!((1..=12).contains(&month));
    }
}
