//! Run configuration.
//!
//! Handles loading, validating, and merging the optional `fixhtml.toml` file.
//! Stock defaults describe the standard book layout; a user file overrides
//! only the keys it names.
//!
//! ## Config File Location
//!
//! Passed with `--config <FILE>`. Without the flag, `fixhtml.toml` in the
//! current working directory is used if it exists. The file never lives in
//! the book output directory itself, since every file there gets rewritten.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! root = "../book/html/"              # Book HTML output directory
//! excluded = ["images", "js", "styles"] # Direct children never touched
//!
//! [[replacements]]
//! from = "<code"
//! to = "<pre><code"
//!
//! [[replacements]]
//! from = "</code>"
//! to = "</code></pre>"
//!
//! [[replacements]]
//! from = "#include <"
//! to = "#include &lt"
//! ```
//!
//! `replacements` is an array: a user file that sets it replaces the whole
//! table, in the order written. Unknown keys are rejected to catch typos early.

use crate::replace::{Replacement, ReplacementTable};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILENAME: &str = "fixhtml.toml";

/// Book HTML output directory, relative to the working directory.
pub const DEFAULT_ROOT: &str = "../book/html/";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration for a fix run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixConfig {
    /// Directory whose immediate children are processed.
    pub root: String,
    /// Child names skipped when listing the root.
    pub excluded: Vec<String>,
    /// Ordered literal find/replace pairs applied to every line.
    pub replacements: Vec<Replacement>,
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            excluded: vec!["images".into(), "js".into(), "styles".into()],
            replacements: ReplacementTable::stock().into_pairs(),
        }
    }
}

impl FixConfig {
    /// Validate values the rewriter relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.root.is_empty() {
            return Err(ConfigError::Validation("root must not be empty".into()));
        }
        if self.excluded.iter().any(|name| name.is_empty()) {
            return Err(ConfigError::Validation(
                "excluded names must not be empty".into(),
            ));
        }
        for (i, pair) in self.replacements.iter().enumerate() {
            if pair.from.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "replacements[{i}].from must not be empty"
                )));
            }
            // Lines are rewritten one at a time, so a pattern can never span two.
            if pair.from.contains('\n') {
                return Err(ConfigError::Validation(format!(
                    "replacements[{i}].from must not contain a newline"
                )));
            }
        }
        Ok(())
    }

    /// The replacement pairs as an ordered table.
    pub fn table(&self) -> ReplacementTable {
        ReplacementTable::new(self.replacements.clone())
    }

    pub fn root_path(&self) -> PathBuf {
        PathBuf::from(&self.root)
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(FixConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<FixConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: FixConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the run configuration.
///
/// An explicit path must exist; without one, `fixhtml.toml` in the working
/// directory is used when present and stock defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<FixConfig, ConfigError> {
    let overlay = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("config file not found: {}", path.display()),
                )));
            }
            load_raw_config(path)?
        }
        None => load_raw_config(Path::new(CONFIG_FILENAME))?,
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock `fixhtml.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# fixhtml configuration
# =====================
# All options are optional. Values shown are the defaults.

# Directory holding the generated book HTML. Only its immediate children
# are processed; nothing below a subdirectory is touched.
root = "../book/html/"

# Direct children of root with exactly these names are never opened,
# whether they are asset directories or plain files.
excluded = ["images", "js", "styles"]

# Literal find/replace pairs, applied in order to every line of every file.
# Setting this key replaces the whole table.
#
# Running fixhtml twice over the same output double-wraps code blocks
# (<pre><pre><code ...). Rebuild the book before re-running.

# Wrap inline code in a preformatted block.
[[replacements]]
from = "<code"
to = "<pre><code"

[[replacements]]
from = "</code>"
to = "</code></pre>"

# Keep C/C++ includes from being parsed as tags.
[[replacements]]
from = "#include <"
to = "#include &lt"
"##
}
