//! In-place rewriting of a single file.
//!
//! The whole file is read and decoded first, every line is passed through
//! the [`ReplacementTable`], and the buffered result is written back over
//! the file with one `fs::write`. A crash can therefore leave earlier
//! files rewritten and later ones untouched, but the truncate-then-write is
//! not atomic: an interruption during the write leaves a short file.
//!
//! Two failure classes are kept apart:
//!
//! - content that is not UTF-8, or an entry that is not a regular file, is
//!   a recoverable [`RewriteOutcome`] and the file is left exactly as it was;
//! - any other I/O failure is a fatal [`RewriteError`] that ends the run.

use crate::replace::ReplacementTable;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What happened to one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// File was decoded, transformed, and written back.
    Rewritten {
        /// Number of (line, pair) substitutions that changed a line.
        changes: usize,
    },
    /// Content is not valid UTF-8; nothing was written.
    Binary,
    /// Entry is a directory or other non-regular file; nothing was opened.
    NotAFile,
}

/// Rewrite `path` in place using `table`.
///
/// `on_change` runs once for every line a pair modifies, in file order, as
/// the file is transformed.
pub fn rewrite_file(
    path: &Path,
    table: &ReplacementTable,
    mut on_change: impl FnMut(),
) -> Result<RewriteOutcome, RewriteError> {
    let io_err = |source| RewriteError::Io {
        path: path.to_path_buf(),
        source,
    };

    if !fs::metadata(path).map_err(io_err)?.is_file() {
        return Ok(RewriteOutcome::NotAFile);
    }

    let bytes = fs::read(path).map_err(io_err)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => return Ok(RewriteOutcome::Binary),
    };

    let mut lines = Vec::new();
    let mut changes = 0;
    for line in text.split_inclusive('\n') {
        let (rewritten, changed) = table.apply_line(line);
        for _ in 0..changed {
            on_change();
        }
        changes += changed;
        lines.push(rewritten);
    }

    fs::write(path, lines.concat()).map_err(io_err)?;
    Ok(RewriteOutcome::Rewritten { changes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replace::Replacement;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn rewrite(path: &Path) -> RewriteOutcome {
        rewrite_file(path, &ReplacementTable::stock(), || {}).unwrap()
    }

    #[test]
    fn wraps_code_block() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(tmp.path(), "a.html", "<code>x</code>");
        assert_eq!(rewrite(&path), RewriteOutcome::Rewritten { changes: 2 });
        assert_eq!(read_file(&path), "<pre><code>x</code></pre>");
    }

    #[test]
    fn escapes_include() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(tmp.path(), "b.cpp.html", "#include <stdio.h>");
        rewrite(&path);
        assert_eq!(read_file(&path), "#include &ltstdio.h>");
    }

    #[test]
    fn multiline_content_and_line_endings_preserved() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            tmp.path(),
            "c.html",
            "<p>intro</p>\r\n<code>\nint main() {}\n</code>\n\n",
        );
        rewrite(&path);
        assert_eq!(
            read_file(&path),
            "<p>intro</p>\r\n<pre><code>\nint main() {}\n</code></pre>\n\n"
        );
    }

    #[test]
    fn binary_file_is_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("logo.png");
        let bytes = b"<code>\x89PNG\xff\xfe</code>".to_vec();
        std::fs::write(&path, &bytes).unwrap();

        assert_eq!(rewrite(&path), RewriteOutcome::Binary);
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn invalid_utf8_late_in_file_still_skips_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("late.html");
        let mut bytes = b"<code>ok</code>\n".repeat(50);
        bytes.extend_from_slice(b"\xc3\x28\n");
        std::fs::write(&path, &bytes).unwrap();

        assert_eq!(rewrite(&path), RewriteOutcome::Binary);
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn directory_is_not_a_file() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("chapters");
        std::fs::create_dir(&dir).unwrap();
        assert_eq!(rewrite(&dir), RewriteOutcome::NotAFile);
    }

    #[test]
    fn missing_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let result = rewrite_file(&tmp.path().join("gone.html"), &ReplacementTable::stock(), || {});
        assert!(matches!(result, Err(RewriteError::Io { .. })));
    }

    #[test]
    fn unchanged_file_is_still_rewritten_with_same_content() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(tmp.path(), "plain.html", "<p>no code</p>\n");
        assert_eq!(rewrite(&path), RewriteOutcome::Rewritten { changes: 0 });
        assert_eq!(read_file(&path), "<p>no code</p>\n");
    }

    #[test]
    fn on_change_fires_per_line_and_pair() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(
            tmp.path(),
            "d.html",
            "<code>a</code><code>b</code>\n#include <x>\n",
        );
        let mut markers = 0;
        let outcome = rewrite_file(&path, &ReplacementTable::stock(), || markers += 1).unwrap();
        assert_eq!(markers, 3);
        assert_eq!(outcome, RewriteOutcome::Rewritten { changes: 3 });
    }

    #[test]
    fn second_run_double_wraps() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(tmp.path(), "e.html", "<code>x</code>");
        rewrite(&path);
        rewrite(&path);
        assert_eq!(read_file(&path), "<pre><pre><code>x</code></pre></pre>");
    }

    #[test]
    fn custom_table() {
        let tmp = TempDir::new().unwrap();
        let path = write_file(tmp.path(), "f.html", "<tt>x</tt>");
        let table = ReplacementTable::new(vec![
            Replacement::new("<tt>", "<code>"),
            Replacement::new("</tt>", "</code>"),
        ]);
        rewrite_file(&path, &table, || {}).unwrap();
        assert_eq!(read_file(&path), "<code>x</code>");
    }
}
