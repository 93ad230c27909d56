//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Fix
//!
//! ```text
//! utf-8
//! binary.bin
//! ../book/html/binary.bin is binary, not changing
//! cha2.html
//! . . . .
//! index.html
//!
//! Rewrote 2 files (4 changes), skipped 1 binary
//! ```
//!
//! Each `.` is one line changed by one replacement pair, printed as the
//! file is processed.
//!
//! ## Check
//!
//! ```text
//! cha2.html
//!     12: <code class="language-cpp">
//!     18: </code>
//! binary.bin (binary)
//! ```
//!
//! # Architecture
//!
//! Format functions are pure and return strings for testability; the
//! `print_*` wrappers write them to stdout.

use crate::check::FileReport;
use crate::fix::{FixEvent, FixSummary};
use crate::rewrite::RewriteOutcome;

/// Encoding used for both file content and stdout.
pub const OUTPUT_ENCODING: &str = "utf-8";

/// Progress marker for one changed line.
pub const MARKER: &str = ". ";

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

// ============================================================================
// Fix output
// ============================================================================

/// Streamed text for one fix event, without a trailing newline.
///
/// Markers accumulate on a single line; the finish event closes it.
pub fn format_fix_event(event: &FixEvent, markers_on_line: bool) -> String {
    match event {
        FixEvent::FileStarted { name } => format!("{name}\n"),
        FixEvent::Marker => MARKER.to_string(),
        FixEvent::FileFinished { path, outcome, .. } => {
            let close = if markers_on_line { "\n" } else { "" };
            match outcome {
                RewriteOutcome::Rewritten { .. } => close.to_string(),
                RewriteOutcome::Binary => {
                    format!("{close}{} is binary, not changing\n", path.display())
                }
                RewriteOutcome::NotAFile => {
                    format!("{close}{} is not a file, skipping\n", path.display())
                }
            }
        }
    }
}

pub fn format_fix_summary(summary: &FixSummary) -> String {
    let mut line = format!(
        "Rewrote {} ({})",
        plural(summary.rewritten, "file", "files"),
        plural(summary.changes, "change", "changes"),
    );
    let mut skipped = Vec::new();
    if summary.binary > 0 {
        skipped.push(plural(summary.binary, "binary", "binary"));
    }
    if summary.not_files > 0 {
        skipped.push(plural(summary.not_files, "non-file", "non-files"));
    }
    if !skipped.is_empty() {
        line.push_str(&format!(", skipped {}", skipped.join(", ")));
    }
    line
}

/// Writes fix events to stdout as they arrive.
#[derive(Debug, Default)]
pub struct FixPrinter {
    markers_on_line: bool,
}

impl FixPrinter {
    /// Text for `event`, tracking whether the current line holds markers.
    pub fn render(&mut self, event: &FixEvent) -> String {
        let text = format_fix_event(event, self.markers_on_line);
        self.markers_on_line = matches!(event, FixEvent::Marker);
        text
    }

    pub fn print(&mut self, event: &FixEvent) {
        print!("{}", self.render(event));
    }
}

pub fn print_encoding() {
    println!("{OUTPUT_ENCODING}");
}

pub fn print_fix_summary(summary: &FixSummary) {
    println!();
    println!("{}", format_fix_summary(summary));
}

// ============================================================================
// Check output
// ============================================================================

pub fn format_check_report(reports: &[FileReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for report in reports {
        match report {
            FileReport::Text { name, lines: code } => {
                lines.push(name.clone());
                for line in code {
                    lines.push(format!("{}{}: {}", indent(1), line.number, line.text));
                }
            }
            FileReport::Binary { name } => lines.push(format!("{name} (binary)")),
            FileReport::NotAFile { name } => lines.push(format!("{name} (not a file)")),
        }
    }
    lines
}

pub fn print_check_report(reports: &[FileReport]) {
    for line in format_check_report(reports) {
        println!("{}", line);
    }
}
