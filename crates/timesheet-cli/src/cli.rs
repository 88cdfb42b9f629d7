//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use timesheet_core::Period;

/// Monthly timesheet report.
///
/// Reads a plain-text timesheet log and prints the time spent per project and
/// task for one month, with daily and monthly totals.
#[derive(Debug, Parser)]
#[command(name = "timesheet", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report settings as `key=value` pairs: `period=MM`, `file=PATH`.
    ///
    /// Unknown keys and arguments without `=` are ignored.
    #[arg(value_name = "KEY=VALUE", allow_hyphen_values = true)]
    pub settings: Vec<String>,
}

impl Cli {
    /// Report arguments extracted from the `key=value` settings.
    pub fn report_args(&self) -> ReportArgs {
        ReportArgs::from_settings(self.settings.as_slice())
    }
}

/// Values taken from `key=value` arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportArgs {
    /// Selected month, if a valid `period=` was given.
    pub period: Option<Period>,
    /// Timesheet file, if `file=` was given.
    pub file: Option<PathBuf>,
}

impl ReportArgs {
    /// Collects `period` and `file` from `key=value` strings.
    ///
    /// Later values override earlier ones. A malformed `period` is logged and
    /// left unset so the caller falls back to the current month.
    pub fn from_settings<S: AsRef<str>>(settings: &[S]) -> Self {
        let mut args = Self::default();

        for setting in settings {
            let setting = setting.as_ref();
            let Some((key, value)) = setting.split_once('=') else {
                tracing::debug!(argument = setting, "ignoring argument without '='");
                continue;
            };

            match key {
                "period" => match value.parse::<Period>() {
                    Ok(period) => args.period = Some(period),
                    Err(err) => {
                        tracing::warn!(%err, "ignoring malformed period argument");
                    }
                },
                "file" => args.file = Some(PathBuf::from(value)),
                _ => tracing::debug!(key, "ignoring unknown argument"),
            }
        }

        args
    }
}
