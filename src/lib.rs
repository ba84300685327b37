//! imgdedupe - camera and UUID filename deduplicator
//!
//! Scans a directory for files named like `IMG_1234.jpg` or
//! `1b4e28ba-2fa1-11d2-883f-0016d3cca427.heic`, groups byte-identical files,
//! keeps the one with the cleanest name, and deletes the rest.

pub mod actions;
pub mod cli;
pub mod config;
pub mod dedupe;
pub mod duplicates;
pub mod error;
pub mod logging;
pub mod report;
pub mod scanner;

use anyhow::{Context, Result};
use bytesize::ByteSize;

use crate::cli::Cli;
use crate::config::Config;
use crate::dedupe::{DedupeOptions, Deduplicator, RunSummary};
use crate::error::ExitCode;
use crate::report::{ConsoleReporter, Reporter};
use crate::scanner::NamePattern;

/// Run the application for parsed CLI arguments, reporting to stdout.
///
/// Logging must already be initialized.
///
/// # Errors
///
/// Returns an error if configuration can't be loaded or the run aborts on a
/// filesystem failure.
pub fn run_app(cli: Cli) -> Result<ExitCode> {
    run_app_with_reporter(cli, ConsoleReporter::stdout())
}

/// Same as [`run_app`], reporting to `reporter`.
///
/// # Errors
///
/// See [`run_app`].
pub fn run_app_with_reporter<R: Reporter>(cli: Cli, reporter: R) -> Result<ExitCode> {
    let config = Config::resolve(&cli).context("failed to load configuration")?;
    let options = DedupeOptions::from(config);
    log::debug!("Running with {:?}", options);

    let pattern = NamePattern::camera_and_uuid();
    let mut dedupe = Deduplicator::new(pattern, options, reporter);
    let summary = dedupe
        .run(&cli.dir)
        .with_context(|| format!("failed to deduplicate {}", cli.dir.display()))?;

    log_summary(&summary);
    Ok(ExitCode::Success)
}

fn log_summary(summary: &RunSummary) {
    let verb = if summary.dry_run {
        "would remove"
    } else {
        "removed"
    };
    log::info!(
        "Scanned {} director{}: {} candidate(s) in {} group(s), {} {} file(s), {} reclaimed",
        summary.directories_scanned,
        if summary.directories_scanned == 1 { "y" } else { "ies" },
        summary.candidates,
        summary.groups,
        verb,
        summary.files_removed,
        ByteSize::b(summary.bytes_reclaimed),
    );
}
