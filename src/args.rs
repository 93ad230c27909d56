//! Positional tokens accepted for compatibility with existing build scripts.
//!
//! ```text
//! fixhtml v                 # verbose (currently no effect)
//! fixhtml p /tmp/mybook/    # use /tmp/mybook/ as the root
//! fixhtml v p out/html/     # both, in any order
//! ```
//!
//! Tokens other than `v` and `p` are ignored, as is the path token that
//! follows a `p`. When `p` appears more than once, the last one wins.
//!
//! A subcommand name among the tokens (`fixhtml p out/ check`) is an
//! error: subcommands must come first (`fixhtml check p out/`), and
//! silently dropping one could turn a read-only check into a rewrite.

use std::path::PathBuf;
use thiserror::Error;

/// Subcommand names that may not appear among the positional tokens.
pub const COMMAND_NAMES: &[&str] = &["fix", "check", "gen-config"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgsError {
    #[error("`p` must be followed by a path (token {0} is the last one)")]
    MissingPath(usize),
    #[error("`{0}` must come before the positional tokens, e.g. `fixhtml {0} p <path>`")]
    MisplacedCommand(String),
}

/// Settings carried by the positional tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyArgs {
    pub verbose: bool,
    pub path: Option<PathBuf>,
}

/// Interpret positional tokens.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Result<LegacyArgs, ArgsError> {
    let mut args = LegacyArgs::default();
    let mut iter = tokens.iter().map(AsRef::as_ref).enumerate();
    while let Some((i, token)) = iter.next() {
        match token {
            "v" => args.verbose = true,
            "p" => {
                let (_, path) = iter.next().ok_or(ArgsError::MissingPath(i + 1))?;
                args.path = Some(PathBuf::from(path));
            }
            _ if COMMAND_NAMES.contains(&token) => {
                return Err(ArgsError::MisplacedCommand(token.to_string()));
            }
            _ => {}
        }
    }
    Ok(args)
}
