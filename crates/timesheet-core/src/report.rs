//! Human-readable report lines.
//!
//! The parser writes the report one line at a time into a [`ReportSink`],
//! so output appears as the timesheet is read.

use std::io;

use crate::extract::{OTHER_TASK, ProjectEntry};
use crate::period::Period;
use crate::totals::ProjectTotal;

/// Rule printed above each day header.
pub const DAY_RULE: &str = "------------------------------------------";

/// Rule printed above the final summary.
pub const SUMMARY_RULE: &str = "***************************";

/// Destination for report lines.
///
/// Implemented for every [`io::Write`], so stdout, files and `Vec<u8>` buffers
/// all work.
pub trait ReportSink {
    /// Writes one line of output. `text` has no trailing newline.
    fn line(&mut self, text: &str) -> io::Result<()>;
}

impl<W: io::Write> ReportSink for W {
    fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self, "{text}")
    }
}

// ========== Hours Formatting ==========

/// Formats hours with at most two decimals and no trailing zeros.
///
/// `1.0` → `"1"`, `1.5` → `"1.5"`, `0.25` → `"0.25"`, `1.0 / 3.0` → `"0.33"`.
pub fn format_hours(hours: f64) -> String {
    let fixed = format!("{hours:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

// ========== Report Sections ==========

/// Header printed when a new day of the period starts.
pub fn write_day_header<S: ReportSink + ?Sized>(
    sink: &mut S,
    period: Period,
    day: u32,
) -> io::Result<()> {
    sink.line(DAY_RULE)?;
    sink.line(&format!("{period}/{day:02}:"))
}

/// Total for the day just finished, surrounded by blank lines.
pub fn write_daily_total<S: ReportSink + ?Sized>(sink: &mut S, hours: f64) -> io::Result<()> {
    sink.line("")?;
    sink.line(&format!("Daily total: {}h", format_hours(hours)))?;
    sink.line("")
}

/// One project line: task descriptions without their times, then the line total.
pub fn write_project_entry<S: ReportSink + ?Sized>(
    sink: &mut S,
    entry: &ProjectEntry,
    line_total: f64,
) -> io::Result<()> {
    let tasks = entry
        .segments
        .iter()
        .map(|segment| format!("{}: {}", segment.task, segment.description))
        .collect::<Vec<_>>()
        .join(" | ");

    sink.line("")?;
    sink.line(&format!("{}: {tasks}", entry.project))?;
    sink.line(&format!("> Total: {}h", format_hours(line_total)))
}

/// Final per-project and per-task totals. Writes nothing when `projects` is empty.
pub fn write_summary<S: ReportSink + ?Sized>(
    sink: &mut S,
    projects: &[ProjectTotal],
) -> io::Result<()> {
    if projects.is_empty() {
        return Ok(());
    }

    sink.line(SUMMARY_RULE)?;
    sink.line("Total time worked:")?;

    for project in projects {
        sink.line(&format!(
            "- {}: {}h",
            project.project,
            format_hours(project.hours)
        ))?;
        for task in &project.tasks {
            sink.line(&format!("  - {}: {}h", task.task, format_hours(task.hours)))?;
        }
        if let Some(rest) = project.unattributed_hours() {
            sink.line(&format!("  - {OTHER_TASK}: {}h", format_hours(rest)))?;
        }
    }

    Ok(())
}
