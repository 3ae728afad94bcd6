//! Markdown generation report.

use std::fmt::Write;

use crate::parser::schema_parser::Diagnostic;
use crate::schema::Schema;

/// Build a Markdown report summarizing one generation run: a per-table
/// overview, the column clauses that were skipped, and the foreign keys that
/// could not be resolved inside the batch.
pub fn build_report(schema: &Schema, diagnostics: &[Diagnostic]) -> String {
    let mut report = String::new();

    writeln!(report, "# sql2jpa Generation Report").unwrap();
    writeln!(report).unwrap();

    writeln!(report, "## Tables").unwrap();
    writeln!(report).unwrap();
    writeln!(report, "| Table | Class | Columns | Primary key | Foreign keys |").unwrap();
    writeln!(report, "|-------|-------|---------|-------------|--------------|").unwrap();
    for table in &schema.tables {
        let primary_key = table
            .primary_key_fields()
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let primary_key = if primary_key.is_empty() {
            "(none)".to_string()
        } else {
            primary_key
        };
        writeln!(
            report,
            "| {} | {} | {} | {} | {}/{} |",
            table.name,
            table.class_name,
            table.columns.len(),
            primary_key,
            table.resolved_foreign_keys().count(),
            table.foreign_keys.len(),
        )
        .unwrap();
    }

    let unresolved: Vec<(&str, &crate::schema::ForeignKey)> = schema
        .tables
        .iter()
        .flat_map(|table| {
            table
                .foreign_keys
                .iter()
                .filter(|fk| fk.resolved_target.is_none())
                .map(move |fk| (table.name.as_str(), fk))
        })
        .collect();
    if !unresolved.is_empty() {
        writeln!(report).unwrap();
        writeln!(report, "## Unresolved foreign keys").unwrap();
        writeln!(report).unwrap();
        for (table, fk) in unresolved {
            writeln!(
                report,
                "- `{}.{}` references `{}.{}`, which is not part of this schema; no relationship was generated.",
                table, fk.column_name, fk.referenced_table, fk.referenced_column,
            )
            .unwrap();
        }
    }

    if !diagnostics.is_empty() {
        writeln!(report).unwrap();
        writeln!(report, "## Skipped column clauses").unwrap();
        writeln!(report).unwrap();
        for diagnostic in diagnostics {
            writeln!(report, "- `{}`: `{}`", diagnostic.table, diagnostic.clause).unwrap();
        }
    }

    report
}
