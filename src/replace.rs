//! The replacement table: ordered literal find/replace pairs.
//!
//! Pairs are applied in declaration order, each one to the result of the
//! previous. Matching is plain substring search, never a pattern language.
//!
//! ```text
//! <code       → <pre><code
//! </code>     → </code></pre>
//! #include <  → #include &lt
//! ```
//!
//! The table is not idempotent: applying it to its own output wraps again
//! (`<pre><pre><code`).

use serde::{Deserialize, Serialize};

/// One literal rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Replacement {
    pub from: String,
    pub to: String,
}

impl Replacement {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Ordered sequence of replacement pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementTable {
    pairs: Vec<Replacement>,
}

impl ReplacementTable {
    pub fn new(pairs: Vec<Replacement>) -> Self {
        Self { pairs }
    }

    /// The three pairs used for book output.
    pub fn stock() -> Self {
        Self::new(vec![
            Replacement::new("<code", "<pre><code"),
            Replacement::new("</code>", "</code></pre>"),
            Replacement::new("#include <", "#include &lt"),
        ])
    }

    pub fn pairs(&self) -> &[Replacement] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<Replacement> {
        self.pairs
    }

    /// Apply every pair to `line`, returning the new line and how many pairs
    /// changed it.
    ///
    /// The count is per pair, not per occurrence: a line with two `<code`
    /// tags counts once for that pair.
    pub fn apply_line(&self, line: &str) -> (String, usize) {
        let mut current = line.to_string();
        let mut changed = 0;
        for pair in &self.pairs {
            if pair.from.is_empty() || !current.contains(&pair.from) {
                continue;
            }
            let next = current.replace(&pair.from, &pair.to);
            if next != current {
                changed += 1;
            }
            current = next;
        }
        (current, changed)
    }
}

impl Default for ReplacementTable {
    fn default() -> Self {
        Self::stock()
    }
}
