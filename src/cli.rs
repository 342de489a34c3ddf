//! CLI glue for `aicoe-index`: argument parsing, policy assembly, report rendering
//! and exit code mapping.
//!
//! All validation logic lives in `aicoe-index-core`. This module only decides which
//! [`PlatformPolicy`] to use, runs the scan and turns the outcome into a process status:
//!
//! - `0`: no violation anywhere in the tree
//! - `1`: at least one violation
//! - `2`: the scan could not run (unreadable path, bad policy file)
//!
//! For programmatic and integration use, build a [`Cli`] and call [`run`].

use std::path::PathBuf;
use std::process::ExitCode;

use aicoe_index_core::{check_index, PlatformPolicy, ValidationReport};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;

use crate::load_config::load_config;

/// Exit status when the scan found layout violations.
pub const EXIT_VIOLATIONS: u8 = 1;
/// Exit status when the scan could not be performed.
pub const EXIT_FATAL: u8 = 2;

/// A simple tool to test AICoE Python index structure.
#[derive(Parser, Debug)]
#[clap(
    name = "aicoe-index",
    version,
    about = "Check an AICoE Python index directory against the simple API layout, wheel naming and platform tag policy"
)]
pub struct Cli {
    /// Path to a directory for which AICoE index should be checked
    #[clap(long, short)]
    pub path: PathBuf,

    /// YAML file with the platform tag policy
    #[clap(long, short, env = "AICOE_INDEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Accept this platform tag in addition to the configured ones (repeatable)
    #[clap(long = "allow-platform", value_name = "TAG")]
    pub allow_platform: Vec<String>,

    /// How to print the final report
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Log lines only
    Text,
    /// Log lines plus the full report as JSON on stdout
    Json,
}

impl Cli {
    /// Policy from the config file (or the default), widened by `--allow-platform`.
    pub fn platform_policy(&self) -> Result<PlatformPolicy> {
        let mut policy = match &self.config {
            Some(path) => load_config(path)?.platform_policy(),
            None => PlatformPolicy::default(),
        };
        for tag in &self.allow_platform {
            policy.allow(tag.as_str());
        }
        Ok(policy)
    }
}

/// Run one validation. Violations are part of the returned report, not errors.
pub fn run(cli: Cli) -> Result<ValidationReport> {
    info!(path = %cli.path.display(), format = ?cli.format, "Checking AICoE index");

    let policy = cli.platform_policy()?;
    let report = check_index(&cli.path, &policy)
        .with_context(|| format!("Failed to check index at {}", cli.path.display()))?;

    if cli.format == OutputFormat::Json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialise report")?;
        println!("{json}");
    }

    Ok(report)
}

/// Map the outcome of [`run`] to the process exit status.
pub fn exit_status(result: &Result<ValidationReport>) -> u8 {
    match result {
        Ok(report) if report.has_errors() => EXIT_VIOLATIONS,
        Ok(_) => 0,
        Err(_) => EXIT_FATAL,
    }
}

pub fn exit_code(result: &Result<ValidationReport>) -> ExitCode {
    ExitCode::from(exit_status(result))
}
