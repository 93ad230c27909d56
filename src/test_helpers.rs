//! Shared test utilities.
//!
//! [`setup_book`] builds a small book output directory in a temp dir:
//!
//! ```text
//! binary.bin          # invalid UTF-8
//! cha2.html           # one <code> block
//! include.cpp.html    # one #include
//! index.html          # no code
//! images/logo.png
//! js/book.js
//! styles/code.html    # would change if it were ever processed
//! ```

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Bytes that are not valid UTF-8.
pub const BINARY_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\xff\xfe<code>";

pub fn setup_book() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_file(
        root,
        "cha2.html",
        "<h1>Chapter 2</h1>\n<code>int x = 7 / 2;</code>\n",
    );
    write_file(root, "include.cpp.html", "#include <iostream>\n");
    write_file(root, "index.html", "<h1>Contents</h1>\n");
    std::fs::write(root.join("binary.bin"), BINARY_BYTES).unwrap();

    for dir in ["images", "js", "styles"] {
        std::fs::create_dir(root.join(dir)).unwrap();
    }
    std::fs::write(root.join("images/logo.png"), BINARY_BYTES).unwrap();
    write_file(&root.join("js"), "book.js", "var code = '<code>';\n");
    write_file(&root.join("styles"), "code.html", "<code>untouched</code>");

    tmp
}

/// The reserved asset names as owned strings.
pub fn stock_excluded() -> Vec<String> {
    vec!["images".into(), "js".into(), "styles".into()]
}

/// Write `content` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Read a file that must be UTF-8.
pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}
