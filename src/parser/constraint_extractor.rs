//! Table-level `PRIMARY KEY` and `FOREIGN KEY` constraint extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::names;
use crate::schema::ForeignKey;

static PRIMARY_KEY_CLAUSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)PRIMARY\s+KEY\s*\(([^)]+)\)").unwrap());

static FOREIGN_KEY_CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)FOREIGN\s+KEY\s*\(([^)]+)\)\s*REFERENCES\s+(?:`([^`]+)`|(\w+))\s*\(([^)]+)\)")
        .unwrap()
});

/// Ordered primary-key column names from the first table-level
/// `PRIMARY KEY (...)` clause in the body, if any.
///
/// A table is assumed to declare at most one table-level primary key clause;
/// later matches are ignored. Inline `PRIMARY KEY` column modifiers carry no
/// parenthesized list and are never matched here.
pub fn find_primary_keys(body: &str) -> Vec<String> {
    PRIMARY_KEY_CLAUSE.captures(body).map_or_else(Vec::new, |caps| {
        caps[1]
            .split(',')
            .map(|column| names::unquote_identifier(column).to_string())
            .collect()
    })
}

/// Every table-level `FOREIGN KEY (...) REFERENCES ...(...)` clause in the
/// body, in declaration order, with `resolved_target` left unset for the
/// later linking pass.
pub fn find_foreign_keys(body: &str) -> Vec<ForeignKey> {
    FOREIGN_KEY_CLAUSE
        .captures_iter(body)
        .map(|caps| {
            let referenced_table = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map_or("", |m| m.as_str());
            ForeignKey {
                column_name: names::unquote_identifier(&caps[1]).to_string(),
                referenced_table: referenced_table.to_string(),
                referenced_column: names::unquote_identifier(&caps[4]).to_string(),
                resolved_target: None,
            }
        })
        .collect()
}
