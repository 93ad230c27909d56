//! # fixhtml
//!
//! Post-processes a generated book's HTML output so code snippets render as
//! preformatted blocks. Every file directly inside the output directory is
//! rewritten in place with a small ordered table of literal replacements:
//!
//! ```text
//! <code       → <pre><code
//! </code>     → </code></pre>
//! #include <  → #include &lt
//! ```
//!
//! # Pipeline
//!
//! ```text
//! list root (skip images/ js/ styles/)  →  for each entry  →  rewrite in place
//! ```
//!
//! Single-threaded and sequential. Files that are not UTF-8 are reported and
//! left byte-for-byte unchanged; any other I/O failure ends the run.
//!
//! The pass is not idempotent. Run it once per book build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `fixhtml.toml` loading, defaults, validation, `gen-config` text |
//! | [`replace`] | Ordered literal replacement table |
//! | [`scan`] | Lists the root's direct children, minus reserved names |
//! | [`rewrite`] | Rewrites one file in place |
//! | [`fix`] | Runs the list → rewrite pass and emits progress events |
//! | [`check`] | Read-only listing of code-tag lines |
//! | [`args`] | Positional `v` / `p <path>` tokens |
//! | [`output`] | CLI output formatting |

pub mod args;
pub mod check;
pub mod config;
pub mod fix;
pub mod output;
pub mod replace;
pub mod rewrite;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
