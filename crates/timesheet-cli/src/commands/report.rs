//! Report command: reads the timesheet and prints the monthly report.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use timesheet_core::{Period, TimesheetError, TimesheetParser, report_file};

use crate::{Config, ReportArgs};

/// Period and file after applying defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget {
    pub period: Period,
    pub file: PathBuf,
}

impl ReportTarget {
    /// Fills unset arguments from the configuration and the current month.
    pub fn resolve(args: &ReportArgs, config: &Config) -> Self {
        Self {
            period: args.period.unwrap_or_else(Period::current),
            file: args
                .file
                .clone()
                .unwrap_or_else(|| config.timesheet_path.clone()),
        }
    }
}

/// Runs the report, writing to `writer`.
///
/// A missing or unreadable timesheet is reported as a single `Error:` line and
/// is not treated as a failure.
pub fn run<W: Write>(writer: &mut W, config: &Config, args: &ReportArgs) -> Result<()> {
    let target = ReportTarget::resolve(args, config);
    tracing::debug!(period = %target.period, file = %target.file.display(), "generating report");

    let parser = TimesheetParser::with_location_tags(target.period, &config.location_tags);

    match report_file(&target.file, parser, writer) {
        Ok(summary) => {
            tracing::debug!(
                projects = summary.projects.len(),
                days = summary.day_markers,
                total_hours = summary.total_hours(),
                period_ended = summary.period_ended,
                "report complete"
            );
            Ok(())
        }
        Err(err @ (TimesheetError::FileNotFound { .. } | TimesheetError::FileUnreadable { .. })) => {
            tracing::debug!(error = ?err, "timesheet not readable");
            writeln!(writer, "Error: {err}")?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn config_for(path: PathBuf) -> Config {
        Config {
            timesheet_path: path,
            ..Config::default()
        }
    }

    fn run_to_string(config: &Config, args: &ReportArgs) -> String {
        let mut out = Vec::new();
        run(&mut out, config, args).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_resolve_prefers_arguments() {
        let config = config_for(PathBuf::from("/default.txt"));
        let args = ReportArgs {
            period: Some(Period::new(4).unwrap()),
            file: Some(PathBuf::from("/chosen.txt")),
        };
        let target = ReportTarget::resolve(&args, &config);
        assert_eq!(target.period, Period::new(4).unwrap());
        assert_eq!(target.file, PathBuf::from("/chosen.txt"));
    }

    #[test]
    fn test_resolve_falls_back_to_config_and_current_month() {
        let config = config_for(PathBuf::from("/default.txt"));
        let target = ReportTarget::resolve(&ReportArgs::default(), &config);
        assert_eq!(target.file, PathBuf::from("/default.txt"));
        assert_eq!(target.period, Period::current());
    }

    #[test]
    fn test_missing_file_prints_error_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let args = ReportArgs {
            period: Some(Period::new(5).unwrap()),
            file: Some(path.clone()),
        };

        let out = run_to_string(&Config::default(), &args);
        assert_eq!(out, format!("Error: File not found: {}\n", path.display()));
    }

    #[test]
    fn test_reports_configured_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timesheet.txt");
        fs::write(
            &path,
            "[05/02 09:00]\nProjA: #dev: fix bug 1h | #mtg: standup 15m\n",
        )
        .unwrap();

        let args = ReportArgs {
            period: Some(Period::new(5).unwrap()),
            file: None,
        };
        let out = run_to_string(&config_for(path), &args);

        assert!(out.contains("ProjA: dev: fix bug | mtg: standup\n> Total: 1.25h\n"));
        assert!(out.ends_with("- ProjA: 1.25h\n  - dev: 1h\n  - mtg: 0.25h\n"));
    }

    #[test]
    fn test_configured_location_tags_are_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("timesheet.txt");
        fs::write(&path, "[05/02 09:00]\nAcme: @home: #dev: api 1h\n").unwrap();

        let config = Config {
            timesheet_path: path,
            location_tags: vec!["@home:".to_string()],
        };
        let args = ReportArgs {
            period: Some(Period::new(5).unwrap()),
            file: None,
        };
        let out = run_to_string(&config, &args);
        assert!(out.contains("Acme: dev: api\n"));
    }
}
