//! In-place regex substitution on a single file.

use crate::error::{EradicateError, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Replace every match of `pattern` in the file at `path` with `replacement`.
///
/// The replacement is inserted literally (`$` is not expanded). Returns the
/// number of matches replaced. With `must_find_match` set, a file without
/// any match fails with [`EradicateError::NoMatchFound`] and is left alone;
/// without it, the file is simply not rewritten.
///
/// The write is not atomic: a failure mid-write can leave the file truncated.
pub fn modify_file(
    path: &Path,
    pattern: &Regex,
    replacement: &str,
    must_find_match: bool,
) -> Result<usize> {
    let contents = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            EradicateError::Encoding {
                path: path.to_path_buf(),
            }
        } else {
            EradicateError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let count = pattern.find_iter(&contents).count();
    if count == 0 {
        if must_find_match {
            return Err(EradicateError::NoMatchFound {
                path: path.to_path_buf(),
                pattern: pattern.as_str().to_string(),
            });
        }
        return Ok(0);
    }

    let updated = pattern.replace_all(&contents, NoExpand(replacement));
    fs::write(path, updated.as_bytes()).map_err(|source| EradicateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tab() -> Regex {
        Regex::new(r"\t").unwrap()
    }

    #[test]
    fn test_replaces_every_tab() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo.c");
        fs::write(&path, "int\tmain()\t{\n\treturn 0;\n}\n").unwrap();

        let count = modify_file(&path, &tab(), "    ", true).unwrap();

        assert_eq!(count, 3);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "int    main()    {\n    return 0;\n}\n"
        );
    }

    #[test]
    fn test_empty_replacement_deletes_tabs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo.c");
        fs::write(&path, "\t\tx\t").unwrap();

        modify_file(&path, &tab(), "", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x");
    }

    #[test]
    fn test_replacement_is_literal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("foo.c");
        fs::write(&path, "a\tb").unwrap();

        modify_file(&path, &tab(), "$0${1}", true).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a$0${1}b");
    }

    #[test]
    fn test_no_match_required() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bar.h");
        fs::write(&path, "int    x;\n").unwrap();

        let err = modify_file(&path, &tab(), "    ", true).unwrap_err();

        assert!(err.is_no_match());
        assert!(err.to_string().starts_with("Expected "));
        assert_eq!(fs::read_to_string(&path).unwrap(), "int    x;\n");
    }

    #[test]
    fn test_no_match_optional() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bar.h");
        fs::write(&path, "int x;\n").unwrap();

        assert_eq!(modify_file(&path, &tab(), "    ", false).unwrap(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "int x;\n");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = modify_file(&dir.path().join("gone.c"), &tab(), "    ", true).unwrap_err();
        assert!(matches!(err, EradicateError::Io { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_encoding_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.c");
        fs::write(&path, b"/* caf\xe9 */\tint x;").unwrap();

        let err = modify_file(&path, &tab(), "    ", true).unwrap_err();

        assert!(matches!(err, EradicateError::Encoding { .. }));
        assert_eq!(fs::read(&path).unwrap(), b"/* caf\xe9 */\tint x;");
    }
}
