//! Directory listing for the book output root.
//!
//! Only the root's immediate children are considered. Asset directories
//! sit next to the chapter files and are skipped by exact name:
//!
//! ```text
//! book/html/                 # Root
//! ├── index.html             # listed
//! ├── cha2.html              # listed
//! ├── intdiv.cpp.html        # listed
//! ├── images/                # excluded
//! ├── js/                    # excluded
//! └── styles/                # excluded
//! ```
//!
//! The match is on the whole name, so `images.html` is listed, while a
//! regular file named exactly `images` is skipped. Files and directories
//! are not distinguished here; the rewriter decides what it can open.
//!
//! Names are returned as `OsString`s so that entries whose names are not
//! UTF-8 can still be opened; callers convert lossily only for display.

use std::ffi::OsString;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read directory {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// List the names of the direct children of `root`, minus `excluded`.
///
/// Names come back sorted so that every run visits files in the same order.
pub fn list_entries(root: &Path, excluded: &[String]) -> Result<Vec<OsString>, ScanError> {
    let io_err = |source| ScanError::Io {
        path: root.display().to_string(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(root).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let name = entry.file_name();
        if excluded.iter().any(|ex| name.to_str() == Some(ex.as_str())) {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    #[test]
    fn lists_direct_children_sorted() {
        let tmp = setup_book();
        let names = list_entries(tmp.path(), &stock_excluded()).unwrap();
        assert_eq!(
            names,
            vec!["binary.bin", "cha2.html", "include.cpp.html", "index.html"]
        );
    }

    #[test]
    fn reserved_names_are_skipped_even_for_files() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "js", "<code>");
        write_file(tmp.path(), "a.html", "");
        let names = list_entries(tmp.path(), &stock_excluded()).unwrap();
        assert_eq!(names, vec!["a.html"]);
    }

    #[test]
    fn exclusion_is_exact_match() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "images.html", "");
        write_file(tmp.path(), "Styles", "");
        let names = list_entries(tmp.path(), &stock_excluded()).unwrap();
        assert_eq!(names, vec!["Styles", "images.html"]);
    }

    #[test]
    fn unreserved_subdirectory_is_listed() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("chapters")).unwrap();
        let names = list_entries(tmp.path(), &stock_excluded()).unwrap();
        assert_eq!(names, vec!["chapters"]);
    }

    #[test]
    fn custom_exclusions() {
        let tmp = setup_book();
        let names = list_entries(tmp.path(), &["index.html".to_string()]).unwrap();
        assert!(!names.contains(&OsString::from("index.html")));
        assert!(names.contains(&OsString::from("styles")));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_is_kept_exact() {
        use std::os::unix::ffi::OsStringExt;

        let tmp = TempDir::new().unwrap();
        let raw = OsString::from_vec(b"a\xe9.html".to_vec());
        std::fs::write(tmp.path().join(&raw), "").unwrap();
        let names = list_entries(tmp.path(), &stock_excluded()).unwrap();
        assert_eq!(names, vec![raw]);
    }

    #[test]
    fn missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = list_entries(&tmp.path().join("missing"), &stock_excluded());
        assert!(matches!(result, Err(ScanError::Io { .. })));
    }

    #[test]
    fn root_that_is_a_file_is_error() {
        let tmp = TempDir::new().unwrap();
        write_file(tmp.path(), "book.html", "");
        let result = list_entries(&tmp.path().join("book.html"), &stock_excluded());
        assert!(result.is_err());
    }
}
