//! In-memory schema model shared by the parser and the entity generator.
//!
//! The model is built once per invocation from the normalized DDL text,
//! linked once by [`Schema::link_foreign_keys`], consumed once by the
//! generator, and then discarded. Nothing mutates it after linking.
//!
//! Cross-table references are stored as arena indices rather than owning
//! links: table A may reference B while B references A, and an index into the
//! shared [`Schema::tables`] vector expresses that without ownership cycles.

use std::collections::HashMap;

use serde::Serialize;

/// A single parsed column definition.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    /// Raw identifier as written in the DDL, without quoting.
    pub name: String,
    /// Lower-camel-cased accessor-safe identifier.
    pub field_name: String,
    /// Uppercased base SQL type, stripped of precision/scale and `UNSIGNED`.
    pub sql_base_type: String,
    /// Mapped Java type name.
    pub java_type: String,
    /// False only when the clause carried `NOT NULL`.
    pub nullable: bool,
    /// Set by an inline `PRIMARY KEY` or by the table-level key list.
    pub primary_key: bool,
    /// Set by `AUTO_INCREMENT` or `IDENTITY`.
    pub auto_increment: bool,
    /// Raw `DEFAULT` token, when present.
    pub default_value: Option<String>,
    /// `COMMENT '...'` text, carried into the generated field documentation.
    pub comment: Option<String>,
}

/// A table-level foreign-key declaration.
#[derive(Debug, Clone, Serialize)]
pub struct ForeignKey {
    /// Referencing column in the declaring table.
    pub column_name: String,
    /// Referenced table name as written in the DDL.
    pub referenced_table: String,
    /// Referenced column name as written in the DDL.
    pub referenced_column: String,
    /// Index of the referenced table in the owning [`Schema`], set by
    /// [`Schema::link_foreign_keys`] only when the target was parsed in the
    /// same batch. `None` keeps the relationship out of generation entirely.
    pub resolved_target: Option<usize>,
}

/// One parsed `CREATE TABLE` statement.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    /// Table name as written in the DDL, without quoting.
    pub name: String,
    /// Upper-camel-cased Java class name derived from [`Table::name`].
    pub class_name: String,
    /// Columns in declaration order. The order drives field order,
    /// constructor parameter order, and accessor order in the generated
    /// entity.
    pub columns: Vec<Column>,
    /// Column names from the table-level `PRIMARY KEY (...)` clause, in
    /// declaration order. Each listed column also has its
    /// [`Column::primary_key`] flag set.
    pub primary_key_columns: Vec<String>,
    /// Table-level foreign keys in declaration order.
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    /// Columns taken by the required-arguments constructor: non-nullable and
    /// not auto-incrementing, in declaration order.
    pub fn required_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns
            .iter()
            .filter(|column| !column.nullable && !column.auto_increment)
    }

    /// Columns participating in the generated equality contract.
    pub fn primary_key_fields(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.primary_key)
    }

    /// Foreign keys whose target table exists in the parsed batch.
    pub fn resolved_foreign_keys(&self) -> impl Iterator<Item = &ForeignKey> {
        self.foreign_keys
            .iter()
            .filter(|fk| fk.resolved_target.is_some())
    }
}

/// All tables recognized in one input, in discovery order.
#[derive(Debug, Clone, Serialize)]
pub struct Schema {
    /// Table arena; [`ForeignKey::resolved_target`] indexes into it.
    pub tables: Vec<Table>,
}

impl Schema {
    /// Look up a table by its schema name.
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Resolve every foreign key against the tables in this schema.
    ///
    /// Second pass over the whole batch: targets parsed from the same input
    /// get their arena index, the rest stay `None` and are skipped by the
    /// generator. The referenced table may legitimately live outside the
    /// parsed batch, so an unresolved key is not an error.
    pub fn link_foreign_keys(&mut self) {
        let index: HashMap<String, usize> = self
            .tables
            .iter()
            .enumerate()
            .map(|(idx, table)| (table.name.clone(), idx))
            .collect();

        for table in &mut self.tables {
            for fk in &mut table.foreign_keys {
                fk.resolved_target = index.get(&fk.referenced_table).copied();
            }
        }
    }
}
