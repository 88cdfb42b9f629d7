//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use timesheet_core::DEFAULT_LOCATION_TAGS;

/// Name of the timesheet file used when none is configured.
pub const DEFAULT_TIMESHEET_FILE: &str = "timesheet.txt";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Timesheet read when no `file=` argument is given.
    pub timesheet_path: PathBuf,

    /// Substrings removed from project lines before splitting into tasks.
    pub location_tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timesheet_path: default_timesheet_path(),
            location_tags: DEFAULT_LOCATION_TAGS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Loads configuration from the default locations, an optional extra
    /// file and `TIMESHEET_*` environment variables.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TIMESHEET_*)
        figment = figment.merge(Env::prefixed("TIMESHEET_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for the timesheet tool.
///
/// On Linux: `~/.config/timesheet`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("timesheet"))
}

/// `timesheet.txt` next to the running executable, or in the working directory
/// when the executable path is unknown.
fn default_timesheet_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .map_or_else(
            || PathBuf::from(DEFAULT_TIMESHEET_FILE),
            |dir| dir.join(DEFAULT_TIMESHEET_FILE),
        )
}
