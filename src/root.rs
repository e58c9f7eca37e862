//! Repository root discovery.

use crate::error::{EradicateError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Find a directory named `dir_name` starting at `start` and walking up.
///
/// At each level the level itself wins if it carries the name, otherwise a
/// child directory with that name is accepted. This covers running from
/// inside the repository as well as from the directory that contains it.
pub fn find_path_to_dir(start: &Path, dir_name: &str) -> Result<PathBuf> {
    // Relative paths have no useful ancestors
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());

    for ancestor in start.ancestors() {
        if ancestor.file_name().and_then(|n| n.to_str()) == Some(dir_name) {
            debug!(root = %ancestor.display(), "found repository root");
            return Ok(ancestor.to_path_buf());
        }

        let candidate = ancestor.join(dir_name);
        if candidate.is_dir() {
            debug!(root = %candidate.display(), "found repository root below ancestor");
            return Ok(candidate);
        }
    }

    Err(EradicateError::RootNotFound {
        name: dir_name.to_string(),
        start,
    })
}
