//! Recursive file listing and extension filtering.

use crate::error::{EradicateError, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// List every regular file under `dir`, recursively.
///
/// Each returned path has `dir` prefixed. Order follows the walker (no sort).
/// Hidden files are included and ignore files are not honored: this lists
/// what is on disk, not what version control would see. Symlinks to regular
/// files are listed under their link path; linked directories are not entered.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let walker = WalkBuilder::new(dir)
        .hidden(false)
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build();

    let mut files = Vec::new();
    for result in walker {
        let entry = result.map_err(|source| EradicateError::Listing {
            path: dir.to_path_buf(),
            source,
        })?;

        let is_file = match entry.file_type() {
            Some(ft) if ft.is_symlink() => entry.path().is_file(),
            Some(ft) => ft.is_file(),
            None => false,
        };
        if is_file {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

/// Check whether the file name ends with one of `extensions` (case-sensitive)
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let filename = path
        .file_name()
        .map(|f| f.to_string_lossy())
        .unwrap_or_default();

    extensions.iter().any(|ext| filename.ends_with(ext.as_str()))
}
