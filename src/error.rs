//! Error kinds raised while eradicating tabs.

use std::path::PathBuf;

/// Every failure the eradication pipeline can produce.
///
/// Only [`EradicateError::NoMatchFound`] is ever recovered from (a file with
/// no tabs in it); everything else aborts the run.
#[derive(thiserror::Error, Debug)]
pub enum EradicateError {
    #[error("Invalid {param}: {message}")]
    InvalidArgument { param: &'static str, message: String },

    #[error("Unable to find a directory named '{name}' from {}", start.display())]
    RootNotFound { name: String, start: PathBuf },

    #[error("Failed to list files under {}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    /// Display always starts with `Expected `.
    #[error("Expected at least one match for '{pattern}' in {}", path.display())]
    NoMatchFound { path: PathBuf, pattern: String },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    /// A pattern handed to the file modifier failed to compile. The built-in
    /// tab pattern always compiles; this covers callers building their own.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl EradicateError {
    /// True for the one error kind the eradicator tolerates.
    pub fn is_no_match(&self) -> bool {
        matches!(self, EradicateError::NoMatchFound { .. })
    }
}

pub type Result<T, E = EradicateError> = std::result::Result<T, E>;
