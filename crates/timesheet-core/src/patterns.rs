//! Regular expressions recognizing the timesheet line syntax.
//!
//! Capture groups are named so callers never index by position:
//!
//! | pattern      | groups                       | example           |
//! |--------------|------------------------------|-------------------|
//! | day marker   | `day`, `hour`, `minute`      | `[05/14 09:30]`   |
//! | [`TASK_TAG`] | `task`                       | `#review:`        |
//! | [`HOURS`]    | `value`                      | `2h`, `2 h`       |
//! | [`MINUTES`]  | `value`                      | `45m`             |

use std::sync::LazyLock;

use regex::Regex;

use crate::period::Period;

/// Day marker template; `{month}` is replaced by a two-digit month.
const DAY_MARKER_TEMPLATE: &str =
    r"\[{month}/(?P<day>\d{2}) (?P<hour>\d{2}):(?P<minute>\d{2})\]";

/// Exactly fifty `#` characters; lines equal to this are ignored.
pub const SEPARATOR_LINE: &str = "##################################################";

/// First `#tag:` in a segment. The tag may contain word characters and spaces.
pub static TASK_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(?P<task>[\w\s]+):").unwrap());

/// An hour quantity: ASCII digits, optional whitespace, `h`.
pub static HOURS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<value>[0-9]+)\s*h").unwrap());

/// A minute quantity: ASCII digits, optional whitespace, `m`.
pub static MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<value>[0-9]+)\s*m").unwrap());

/// A timestamp parsed from a `[MM/DD HH:MM]` day marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMarker {
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Day marker matcher bound to a single month.
#[derive(Debug, Clone)]
pub struct DayMarkerPattern {
    period: Period,
    regex: Regex,
}

impl DayMarkerPattern {
    /// Compiles the day marker pattern for `period`.
    pub fn new(period: Period) -> Self {
        let source = DAY_MARKER_TEMPLATE.replace("{month}", &period.to_string());
        // The template is fixed and the month is always two digits.
        let regex = Regex::new(&source).unwrap();
        Self { period, regex }
    }

    /// The month this pattern matches.
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Finds the first day marker for this month anywhere in `line`.
    pub fn find(&self, line: &str) -> Option<DayMarker> {
        let caps = self.regex.captures(line)?;
        Some(DayMarker {
            month: self.period.month(),
            day: caps["day"].parse().ok()?,
            hour: caps["hour"].parse().ok()?,
            minute: caps["minute"].parse().ok()?,
        })
    }
}
