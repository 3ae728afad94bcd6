//! Structured parsing of a single column-definition clause.
//!
//! A clause must match the column shape in full: an identifier, a type token
//! run, and a tail of recognized modifiers. The modifier tail is accepted in
//! any order because real dialects emit `PRIMARY KEY AUTO_INCREMENT` and
//! `AUTO_INCREMENT PRIMARY KEY` interchangeably. A clause that does not match
//! the shape produces no column; the caller records a diagnostic and moves on
//! to the table's remaining clauses.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::names;
use crate::parser::type_map;
use crate::schema::Column;

/// Full-clause column shape: name, type token run (word characters,
/// parentheses, commas, internal whitespace), then zero or more modifiers.
static COLUMN_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)^\s*(?:`([^`]+)`|"([^"]+)"|(\w+))\s+([\w()\s,]+?)((?:\s*(?:NOT\s+NULL|NULL|AUTO_INCREMENT|IDENTITY|PRIMARY\s+KEY|DEFAULT\s+[^,\s]+|COMMENT\s+'[^']*'|COMMENT\s+"[^"]*"))*)\s*$"#,
    )
    .unwrap()
});

static NOT_NULL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\bNOT\s+NULL\b").unwrap());
static AUTO_INCREMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:AUTO_INCREMENT|IDENTITY)\b").unwrap());
static PRIMARY_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bPRIMARY\s+KEY\b").unwrap());
static DEFAULT_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bDEFAULT\s+([^,\s]+)").unwrap());
static COMMENT_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bCOMMENT\s+(?:'([^']*)'|"([^"]*)")"#).unwrap());
static UNSIGNED_QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+UNSIGNED").unwrap());

/// Parse one column-definition clause.
///
/// Returns `None` when the clause does not match the column shape, so no
/// column with an empty or missing name is ever materialized.
pub fn parse_column(clause: &str) -> Option<Column> {
    let caps = COLUMN_SHAPE.captures(clause)?;
    let name = caps
        .get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))?
        .as_str();

    let raw_type = caps[4].trim().to_uppercase();
    let modifiers = caps.get(5).map_or("", |m| m.as_str());

    let sql_base_type = extract_base_type(&raw_type);
    let mut java_type = type_map::java_type_for(&sql_base_type).to_string();
    if raw_type.contains("UNSIGNED") {
        java_type = type_map::widen_unsigned(&java_type).to_string();
    }

    let default_value = DEFAULT_VALUE
        .captures(modifiers)
        .map(|caps| caps[1].to_string());
    let comment = COMMENT_TEXT
        .captures(modifiers)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|text| text.as_str().to_string());

    Some(Column {
        name: name.to_string(),
        field_name: names::to_camel_case(name, false),
        sql_base_type,
        java_type,
        nullable: !NOT_NULL.is_match(modifiers),
        primary_key: PRIMARY_KEY.is_match(modifiers),
        auto_increment: AUTO_INCREMENT.is_match(modifiers),
        default_value,
        comment,
    })
}

/// Strip a trailing precision/length group and an `UNSIGNED` qualifier from
/// an uppercased type token, yielding the type-map lookup key.
fn extract_base_type(raw_type: &str) -> String {
    let without_args = match raw_type.find('(') {
        Some(idx) => &raw_type[..idx],
        None => raw_type,
    };
    UNSIGNED_QUALIFIER
        .replace_all(without_args, "")
        .trim()
        .to_string()
}
