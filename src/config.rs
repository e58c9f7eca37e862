//! Built-in settings loaded from the embedded defaults.toml, plus argument validation.

use crate::error::{EradicateError, Result};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// Embed the TOML file directly in the binary at compile time
const DEFAULTS_TOML: &str = include_str!("../defaults.toml");

/// Structure to deserialize the defaults from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct EradicateConfig {
    /// Name of the repository directory to search for
    pub repo_dir_name: String,
    /// Replacement for each tab, kept raw so it is validated where it is used
    pub replacement: toml::Value,
    /// Directories to scan, relative to the repository root, with `/` separators
    pub source_dirs: Vec<String>,
    /// File name suffixes eligible for rewriting (e.g., ".c")
    pub extensions: Vec<String>,
}

impl EradicateConfig {
    /// Parse the defaults compiled into the binary
    pub fn load_defaults() -> anyhow::Result<Self> {
        toml::from_str(DEFAULTS_TOML).context("Failed to parse embedded defaults.toml")
    }

    /// Resolve each configured source directory under `root`, preserving order
    pub fn source_paths(&self, root: &Path) -> Vec<PathBuf> {
        self.source_dirs
            .iter()
            .map(|dir| {
                dir.split('/')
                    .filter(|part| !part.is_empty())
                    .fold(root.to_path_buf(), |acc, part| acc.join(part))
            })
            .collect()
    }
}

/// Check that `value` is a string, optionally rejecting the empty string.
///
/// Returns the validated text on success.
pub fn validate_string<'a>(
    value: &'a toml::Value,
    param: &'static str,
    can_be_empty: bool,
) -> Result<&'a str> {
    let text = value.as_str().ok_or_else(|| EradicateError::InvalidArgument {
        param,
        message: format!("expected a string, got {}", value.type_str()),
    })?;

    if text.is_empty() && !can_be_empty {
        return Err(EradicateError::InvalidArgument {
            param,
            message: "must not be empty".to_string(),
        });
    }

    Ok(text)
}
