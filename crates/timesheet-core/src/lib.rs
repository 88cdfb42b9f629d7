//! Core logic for monthly timesheet reports.
//!
//! This crate contains the parsing and aggregation pipeline:
//! - Period: the selected month and its predecessor
//! - Classification: skip lines, day starts, period boundaries, project lines
//! - Extraction: tasks, descriptions and hours from `Project: ...` lines
//! - Totals and report output, driven by [`TimesheetParser`]

pub mod classify;
mod error;
pub mod extract;
pub mod parser;
pub mod patterns;
mod period;
pub mod report;
mod source;
pub mod totals;

pub use error::TimesheetError;
pub use extract::{DEFAULT_LOCATION_TAGS, OTHER_TASK, ProjectEntry, TaskSegment};
pub use parser::{ParserState, Summary, TimesheetParser};
pub use period::{Period, PeriodError};
pub use report::{ReportSink, format_hours};
pub use source::{open_timesheet, report_file, run_report};
pub use totals::{ProjectTotal, TaskTotal, Totals};
