//! `CREATE TABLE` statement extraction and schema assembly.
//!
//! The extraction is deliberately lenient: the normalized text is scanned
//! globally for table-creation statements, each table body is split into
//! clauses, and a malformed column clause costs exactly that clause. Nothing
//! that goes wrong inside one table affects any other table.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::parser::clause_splitter;
use crate::parser::column_parser;
use crate::parser::constraint_extractor;
use crate::parser::names;
use crate::parser::normalize;
use crate::schema::{Schema, Table};

/// A table-creation statement: keyword, optional `IF NOT EXISTS`, an
/// identifier (backtick-quoted or bare), a parenthesized body, and a
/// terminator (storage engine clause, default clause, comment clause, `;`, or
/// end of input). The body match is lazy, so it ends at the first closing
/// parenthesis followed by a terminator.
static CREATE_TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?(?:`([^`]+)`|(\w+))\s*\((.*?)\)\s*(?:ENGINE|DEFAULT|COMMENT|;|$)",
    )
    .unwrap()
});

/// A column clause that was dropped because it did not match the column
/// shape.
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    /// Table whose body contained the clause.
    pub table: String,
    /// The offending clause text, trimmed.
    pub clause: String,
}

/// Result of one parse run: the linked schema plus per-clause diagnostics.
#[derive(Debug, Clone)]
pub struct ParsedSchema {
    /// All recognized tables in discovery order, with foreign keys resolved
    /// against the same batch.
    pub schema: Schema,
    /// One entry per column clause that failed structured parsing.
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse DDL text into a linked [`Schema`].
///
/// The text is normalized, every table-creation statement is extracted
/// (multiple statements per input are supported), and foreign keys are
/// resolved against the tables found in the same text. This is a pure
/// transformation: all observations, including dropped clauses, come back as
/// data and printing is left to the caller.
pub fn parse_schema(sql: &str) -> ParsedSchema {
    let normalized = normalize::normalize_sql(sql);
    let mut tables = Vec::new();
    let mut diagnostics = Vec::new();

    for caps in CREATE_TABLE.captures_iter(&normalized) {
        let name = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map_or("", |m| m.as_str())
            .trim();
        if name.is_empty() {
            continue;
        }
        tables.push(parse_table(name, &caps[3], &mut diagnostics));
    }

    let mut schema = Schema { tables };
    schema.link_foreign_keys();
    ParsedSchema {
        schema,
        diagnostics,
    }
}

/// Assemble one table from its extracted body text.
fn parse_table(name: &str, body: &str, diagnostics: &mut Vec<Diagnostic>) -> Table {
    let mut columns = Vec::new();
    for clause in clause_splitter::split_top_level(body) {
        if clause_splitter::is_constraint_clause(&clause) {
            continue;
        }
        match column_parser::parse_column(&clause) {
            Some(column) => columns.push(column),
            None => diagnostics.push(Diagnostic {
                table: name.to_string(),
                clause,
            }),
        }
    }

    let primary_key_columns = constraint_extractor::find_primary_keys(body);
    for column in &mut columns {
        if primary_key_columns.iter().any(|pk| pk == &column.name) {
            column.primary_key = true;
        }
    }

    Table {
        name: name.to_string(),
        class_name: names::to_camel_case(name, true),
        columns,
        primary_key_columns,
        foreign_keys: constraint_extractor::find_foreign_keys(body),
    }
}
