use std::process::ExitCode;

use aicoe_index::cli::{exit_code, run, Cli};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load environment (AICOE_INDEX_CONFIG, RUST_LOG)
    dotenvy::dotenv().ok();

    // Diagnostics go to stderr so `--format json` output stays clean on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("CLI application startup: tracing initialised, environment loaded");

    let cli = Cli::parse();
    let result = run(cli);
    match &result {
        Ok(report) if report.has_errors() => tracing::warn!(
            violations = report.violations.len(),
            "Index layout check found violations"
        ),
        Ok(_) => tracing::info!("Index layout check passed"),
        Err(e) => tracing::error!(error = %format!("{e:#}"), "CLI exited with error"),
    }
    exit_code(&result)
}
