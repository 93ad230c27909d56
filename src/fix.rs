//! The fix run: list the root, then rewrite each entry in order.
//!
//! There is no state machine and no parallelism. One pass:
//!
//! ```text
//! list_entries(root) → for each name → rewrite_file(root/name)
//! ```
//!
//! Progress is reported through [`FixEvent`]s handed to a caller-supplied
//! callback as they happen, so the binary can stream them to stdout while
//! tests collect them.

use crate::config::FixConfig;
use crate::rewrite::{RewriteError, RewriteOutcome, rewrite_file};
use crate::scan::{ScanError, list_entries};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

/// Options resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub root: PathBuf,
    /// Accepted for compatibility with existing build scripts. Has no
    /// effect on output yet.
    pub verbose: bool,
}

/// Progress events emitted during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixEvent {
    /// About to process an entry. Names that are not UTF-8 are shown lossily.
    FileStarted { name: String },
    /// One pair changed one line of the current file.
    Marker,
    /// Finished with an entry.
    FileFinished {
        name: String,
        path: PathBuf,
        outcome: RewriteOutcome,
    },
}

/// Totals for a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixSummary {
    pub rewritten: usize,
    pub binary: usize,
    pub not_files: usize,
    pub changes: usize,
}

impl FixSummary {
    fn record(&mut self, outcome: RewriteOutcome) {
        match outcome {
            RewriteOutcome::Rewritten { changes } => {
                self.rewritten += 1;
                self.changes += changes;
            }
            RewriteOutcome::Binary => self.binary += 1,
            RewriteOutcome::NotAFile => self.not_files += 1,
        }
    }
}

/// Rewrite every listed entry under `options.root`.
///
/// Stops at the first fatal error. Files handled before it stay rewritten.
pub fn fix_directory(
    options: &RunOptions,
    config: &FixConfig,
    mut on_event: impl FnMut(FixEvent),
) -> Result<FixSummary, FixError> {
    let table = config.table();
    let entries = list_entries(&options.root, &config.excluded)?;

    let mut summary = FixSummary::default();
    for entry in entries {
        let name = entry.to_string_lossy().into_owned();
        on_event(FixEvent::FileStarted { name: name.clone() });
        let path = options.root.join(&entry);
        let outcome = rewrite_file(&path, &table, || on_event(FixEvent::Marker))?;
        summary.record(outcome);
        on_event(FixEvent::FileFinished {
            name,
            path,
            outcome,
        });
    }

    Ok(summary)
}
