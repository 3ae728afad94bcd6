//! DDL text normalization.
//!
//! Strips comments and collapses whitespace so that the extraction regexes
//! are insensitive to formatting and to statements spread over multiple
//! lines.

use std::sync::LazyLock;

use regex::Regex;

static LINE_COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)--.*$").unwrap());
static BLOCK_COMMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Remove `--` line comments and `/* */` block comments, then collapse every
/// whitespace run (including newlines) to a single space.
///
/// Never fails; an empty or comment-only input yields an empty string.
pub fn normalize_sql(sql: &str) -> String {
    let without_line = LINE_COMMENTS.replace_all(sql, "");
    let without_block = BLOCK_COMMENTS.replace_all(&without_line, "");
    WHITESPACE_RUNS
        .replace_all(&without_block, " ")
        .trim()
        .to_string()
}
