//! The timesheet parser state machine.
//!
//! A [`TimesheetParser`] is created fresh for each run and owns all running
//! totals. Lines are fed one at a time; the parser classifies each, writes the
//! matching report lines and accumulates hours:
//!
//! ```text
//! Scanning --Skip / DayStart / Project--> Scanning
//! Scanning --PeriodBoundary-----------> PeriodEnded   (terminal)
//! ```
//!
//! Once the period has ended every further line is ignored. [`TimesheetParser::finish`]
//! flushes the last daily total, writes the summary and returns a [`Summary`].

use std::io;
use std::ops::ControlFlow;

use crate::classify::{LineClassifier, LineKind};
use crate::extract::{DEFAULT_LOCATION_TAGS, parse_project_line};
use crate::period::Period;
use crate::report::{
    ReportSink, write_daily_total, write_day_header, write_project_entry, write_summary,
};
use crate::totals::{ProjectTotal, Totals};

/// Parser state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Reading lines of the selected period.
    Scanning,
    /// A day marker of the previous month was seen; no more input is accepted.
    PeriodEnded,
}

/// Final result of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// The period that was reported.
    pub period: Period,
    /// Totals per project in first-seen order.
    pub projects: Vec<ProjectTotal>,
    /// Number of day markers of the period that were read.
    pub day_markers: usize,
    /// Whether reading stopped at a previous-month day marker.
    pub period_ended: bool,
}

impl Summary {
    /// Totals of `project`, if it was seen.
    #[cfg(test)]
    pub fn project(&self, project: &str) -> Option<&ProjectTotal> {
        self.projects.iter().find(|p| p.project == project)
    }

    /// Sum of all project totals.
    pub fn total_hours(&self) -> f64 {
        self.projects.iter().map(|p| p.hours).sum()
    }
}

/// Line-by-line timesheet parser for a single period.
#[derive(Debug, Clone)]
pub struct TimesheetParser {
    classifier: LineClassifier,
    location_tags: Vec<String>,
    state: ParserState,
    day_total: f64,
    day_markers: usize,
    totals: Totals,
}

impl TimesheetParser {
    /// Creates a parser for `period` stripping the default location tags.
    pub fn new(period: Period) -> Self {
        Self::with_location_tags(period, DEFAULT_LOCATION_TAGS)
    }

    /// Creates a parser for `period` stripping the given location tags.
    pub fn with_location_tags<I, T>(period: Period, location_tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            classifier: LineClassifier::new(period),
            location_tags: location_tags.into_iter().map(Into::into).collect(),
            state: ParserState::Scanning,
            day_total: 0.0,
            day_markers: 0,
            totals: Totals::new(),
        }
    }

    pub const fn period(&self) -> Period {
        self.classifier.period()
    }

    pub const fn state(&self) -> ParserState {
        self.state
    }

    /// Hours accumulated for the current day and not yet reported.
    pub const fn day_total(&self) -> f64 {
        self.day_total
    }

    pub const fn totals(&self) -> &Totals {
        &self.totals
    }

    /// Processes one line.
    ///
    /// Returns [`ControlFlow::Break`] once the period has ended; the caller
    /// should stop reading.
    pub fn feed<S: ReportSink + ?Sized>(
        &mut self,
        line: &str,
        sink: &mut S,
    ) -> io::Result<ControlFlow<()>> {
        if self.state == ParserState::PeriodEnded {
            return Ok(ControlFlow::Break(()));
        }

        match self.classifier.classify(line) {
            LineKind::Skip => {}
            LineKind::DayStart(marker) => {
                tracing::debug!(
                    day = marker.day,
                    hour = marker.hour,
                    minute = marker.minute,
                    last_day = ?self.classifier.last_day(),
                    "day start"
                );
                self.day_markers += 1;
                self.flush_day_total(sink)?;
                write_day_header(sink, self.period(), marker.day)?;
            }
            LineKind::PeriodBoundary(marker) => {
                tracing::debug!(
                    month = marker.month,
                    day = marker.day,
                    "previous period reached, stopping"
                );
                self.flush_day_total(sink)?;
                self.state = ParserState::PeriodEnded;
                return Ok(ControlFlow::Break(()));
            }
            LineKind::Project => self.process_project_line(line, sink)?,
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Flushes the pending daily total and writes the summary.
    pub fn finish<S: ReportSink + ?Sized>(mut self, sink: &mut S) -> io::Result<Summary> {
        self.flush_day_total(sink)?;
        tracing::debug!(
            projects = self.totals.projects().len(),
            total_hours = self.totals.total_hours(),
            "writing summary"
        );
        write_summary(sink, self.totals.projects())?;

        Ok(Summary {
            period: self.period(),
            projects: self.totals.into_projects(),
            day_markers: self.day_markers,
            period_ended: self.state == ParserState::PeriodEnded,
        })
    }

    fn process_project_line<S: ReportSink + ?Sized>(
        &mut self,
        line: &str,
        sink: &mut S,
    ) -> io::Result<()> {
        let Some(entry) = parse_project_line(line, self.location_tags.as_slice()) else {
            tracing::debug!(line = line.trim(), "skipping line without project separator");
            return Ok(());
        };

        let line_total = self.totals.record(&entry);
        tracing::debug!(
            project = %entry.project,
            line_total,
            project_total = ?self.totals.project(&entry.project).map(|p| p.hours),
            "project line"
        );
        write_project_entry(sink, &entry, line_total)?;
        self.day_total += line_total;
        Ok(())
    }

    fn flush_day_total<S: ReportSink + ?Sized>(&mut self, sink: &mut S) -> io::Result<()> {
        if self.day_total > 0.0 {
            write_daily_total(sink, self.day_total)?;
            self.day_total = 0.0;
        }
        Ok(())
    }
}
