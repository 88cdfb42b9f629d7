//! Timesheet report CLI library.
//!
//! This crate provides the CLI interface for the timesheet report.

mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, ReportArgs};
pub use config::Config;
