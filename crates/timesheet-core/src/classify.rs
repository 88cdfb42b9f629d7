//! Line classification for the timesheet parser.
//!
//! Each trimmed line is one of four kinds, checked in order:
//!
//! 1. [`LineKind::Skip`]: blank, or the fifty-`#` separator.
//! 2. [`LineKind::DayStart`]: a day marker for the selected month.
//! 3. [`LineKind::PeriodBoundary`]: a day marker for the month before it.
//! 4. [`LineKind::Project`]: anything else.
//!
//! Because the selected month is tested first, a marker whose month equals the
//! selected period is always a day start.

use crate::patterns::{DayMarker, DayMarkerPattern, SEPARATOR_LINE};
use crate::period::Period;

/// Classification of a single timesheet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Blank or separator line.
    Skip,
    /// Start of a day inside the selected period.
    DayStart(DayMarker),
    /// Day marker of the previous month; the selected period has ended.
    PeriodBoundary(DayMarker),
    /// A candidate `Project: ...` line.
    Project,
}

/// Classifies lines and tracks which day is being read.
#[derive(Debug, Clone)]
pub struct LineClassifier {
    current: DayMarkerPattern,
    previous: DayMarkerPattern,
    current_day: Option<u32>,
    last_day: Option<u32>,
}

impl LineClassifier {
    /// Creates a classifier for `period`.
    pub fn new(period: Period) -> Self {
        Self {
            current: DayMarkerPattern::new(period),
            previous: DayMarkerPattern::new(period.previous()),
            current_day: None,
            last_day: None,
        }
    }

    /// The selected period.
    pub const fn period(&self) -> Period {
        self.current.period()
    }

    /// Day of the most recent day start, if any.
    #[cfg(test)]
    pub const fn current_day(&self) -> Option<u32> {
        self.current_day
    }

    /// Day that was current before the most recent change of day.
    pub const fn last_day(&self) -> Option<u32> {
        self.last_day
    }

    /// Classifies `line`, updating the tracked day on a day start.
    pub fn classify(&mut self, line: &str) -> LineKind {
        let line = line.trim();

        if line.is_empty() || line == SEPARATOR_LINE {
            return LineKind::Skip;
        }

        if let Some(marker) = self.current.find(line) {
            if self.current_day != Some(marker.day) {
                self.last_day = self.current_day;
            }
            self.current_day = Some(marker.day);
            return LineKind::DayStart(marker);
        }

        if let Some(marker) = self.previous.find(line) {
            return LineKind::PeriodBoundary(marker);
        }

        LineKind::Project
    }
}
