//! Read-only inspection of code-tag lines.
//!
//! Lists every line containing `<code` or `</code>` in each file the fix
//! run would touch, without writing anything. Useful before a run to see
//! what will be wrapped, and after one to spot double wrapping.

use crate::config::FixConfig;
use crate::scan::{ScanError, list_entries};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Substrings that mark a line as part of a code snippet.
const CODE_MARKERS: &[&str] = &["<code", "</code>"];

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A line that mentions a code tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    /// 1-based line number.
    pub number: usize,
    /// Line text without its trailing newline.
    pub text: String,
}

/// Inspection result for one listed entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReport {
    Text { name: String, lines: Vec<CodeLine> },
    Binary { name: String },
    NotAFile { name: String },
}

/// Find code-tag lines in `text`.
pub fn find_code_lines(text: &str) -> Vec<CodeLine> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| CODE_MARKERS.iter().any(|m| line.contains(m)))
        .map(|(i, line)| CodeLine {
            number: i + 1,
            text: line.to_string(),
        })
        .collect()
}

/// Inspect every listed entry under `root`.
pub fn check_directory(root: &Path, config: &FixConfig) -> Result<Vec<FileReport>, CheckError> {
    let mut reports = Vec::new();
    for entry in list_entries(root, &config.excluded)? {
        let name = entry.to_string_lossy().into_owned();
        let path = root.join(&entry);
        let io_err = |source| CheckError::Io {
            path: path.clone(),
            source,
        };
        if !fs::metadata(&path).map_err(io_err)?.is_file() {
            reports.push(FileReport::NotAFile { name });
            continue;
        }
        let report = match String::from_utf8(fs::read(&path).map_err(io_err)?) {
            Ok(text) => FileReport::Text {
                lines: find_code_lines(&text),
                name,
            },
            Err(_) => FileReport::Binary { name },
        };
        reports.push(report);
    }
    Ok(reports)
}
