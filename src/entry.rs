//! Process-level entry: runs the eradication and turns errors into an exit status.

use crate::config::EradicateConfig;
use crate::eradicator::TabEradicator;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

/// Run completed.
pub const EXIT_OK: i32 = 0;
/// Run failed; the error has already been reported.
pub const EXIT_FAILURE: i32 = 1;

/// Eradicate tabs with the built-in replacement, searching from `start_dir`.
pub fn run(start_dir: &Path) -> i32 {
    report(eradicate(start_dir, None))
}

/// Eradicate tabs with an explicit replacement value, searching from `start_dir`.
pub fn run_with(start_dir: &Path, replacement: &toml::Value) -> i32 {
    report(eradicate(start_dir, Some(replacement)))
}

fn eradicate(start_dir: &Path, replacement: Option<&toml::Value>) -> Result<()> {
    let config = EradicateConfig::load_defaults()?;
    let replacement = replacement.cloned().unwrap_or_else(|| config.replacement.clone());
    let eradicator = TabEradicator::new(config).context("Failed to build tab eradicator")?;

    eradicator.eradicate(start_dir, &replacement)?;
    Ok(())
}

fn report(result: Result<()>) -> i32 {
    match result {
        Ok(()) => EXIT_OK,
        Err(err) => {
            print_error(&err);
            EXIT_FAILURE
        }
    }
}

/// Print an error and its cause chain to stderr
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "error:".red().bold(), err);
}
