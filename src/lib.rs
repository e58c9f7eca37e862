//! eradicate-tabs - Tab Eradicator for C Sources
//!
//! Finds the `sketchy-idea` repository by walking up from a start directory, then
//! rewrites every `.c` and `.h` file under `code/include` and `code/src` so each
//! tab becomes the replacement string (four spaces by default).
//!
//! ## Pipeline
//!
//! - `root`: locate the repository directory by name
//! - `listing`: list files recursively and keep the configured extensions
//! - `modify`: regex substitution in place, with an optional must-match check
//! - `eradicator`: ties the above together; tab-free files are not an error
//! - `entry`: the single error boundary, mapping failures to exit status 1

pub mod config;
pub mod entry;
pub mod eradicator;
pub mod error;
pub mod listing;
pub mod logging;
pub mod modify;
pub mod root;

// Re-export commonly used items
pub use config::{validate_string, EradicateConfig};
pub use eradicator::TabEradicator;
pub use error::EradicateError;
pub use listing::{has_extension, list_files};
pub use modify::modify_file;
pub use root::find_path_to_dir;
