//! Java JPA entity source rendering.
//!
//! Each table renders independently into one source unit; the only
//! cross-table input is the class name of a resolved foreign-key target.
//! Rendering is deterministic: imports are collected into a sorted set and
//! every other section follows column declaration order, so byte-identical
//! input produces byte-identical output.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::parser::names;
use crate::parser::type_map;
use crate::schema::{Column, ForeignKey, Schema, Table};

/// A rendered entity source unit for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEntity {
    /// Output file name, `<ClassName>.java`.
    pub file_name: String,
    /// Complete Java source text.
    pub source: String,
}

/// Render one entity per table, in discovery order.
pub fn generate_entities(schema: &Schema, package: &str) -> Vec<GeneratedEntity> {
    schema
        .tables
        .iter()
        .map(|table| generate_entity(table, schema, package))
        .collect()
}

/// Render the entity class for a single table.
pub fn generate_entity(table: &Table, schema: &Schema, package: &str) -> GeneratedEntity {
    let mut src = String::new();

    writeln!(src, "package {package};").unwrap();
    writeln!(src).unwrap();

    for import in collect_imports(table) {
        writeln!(src, "import {import};").unwrap();
    }
    writeln!(src).unwrap();

    writeln!(src, "/**").unwrap();
    writeln!(src, " * JPA entity for the {} table.", table.name).unwrap();
    writeln!(src, " * Generated by sql2jpa.").unwrap();
    writeln!(src, " */").unwrap();
    writeln!(src, "@Entity").unwrap();
    writeln!(src, "@Table(name = \"{}\")", table.name).unwrap();
    writeln!(src, "public class {} implements Serializable {{", table.class_name).unwrap();
    writeln!(src).unwrap();
    writeln!(src, "    private static final long serialVersionUID = 1L;").unwrap();
    writeln!(src).unwrap();

    for column in &table.columns {
        render_field(&mut src, column);
    }
    for fk in table.resolved_foreign_keys() {
        render_relationship_field(&mut src, fk, schema);
    }

    render_constructors(&mut src, table);

    for column in &table.columns {
        render_accessor_pair(&mut src, &column.java_type, &column.field_name);
    }
    for fk in table.resolved_foreign_keys() {
        if let Some(target) = target_table(fk, schema) {
            render_accessor_pair(
                &mut src,
                &target.class_name,
                &names::to_camel_case(&target.name, false),
            );
        }
    }

    render_equals_hash_code(&mut src, table);
    render_to_string(&mut src, table);

    writeln!(src, "}}").unwrap();

    GeneratedEntity {
        file_name: format!("{}.java", table.class_name),
        source: src,
    }
}

/// Sorted, de-duplicated import list for one entity.
///
/// Always carries the persistence annotations and the serializability marker;
/// column types contribute their own imports, and `java.util.Objects` is
/// added exactly when an equality contract will be emitted.
fn collect_imports(table: &Table) -> BTreeSet<&'static str> {
    let mut imports = BTreeSet::from(["javax.persistence.*", "java.io.Serializable"]);
    for column in &table.columns {
        if let Some(import) = type_map::import_for(&column.java_type) {
            imports.insert(import);
        }
    }
    if table.primary_key_fields().next().is_some() {
        imports.insert("java.util.Objects");
    }
    imports
}

fn target_table<'a>(fk: &ForeignKey, schema: &'a Schema) -> Option<&'a Table> {
    fk.resolved_target.and_then(|idx| schema.tables.get(idx))
}

fn render_field(src: &mut String, column: &Column) {
    writeln!(src, "    /**").unwrap();
    let mut heading = format!("Column {}", column.name);
    if let Some(default) = &column.default_value {
        write!(heading, " (default: {default})").unwrap();
    }
    writeln!(src, "     * {heading}").unwrap();
    if let Some(comment) = &column.comment {
        writeln!(src, "     * {comment}").unwrap();
    }
    writeln!(src, "     */").unwrap();

    if column.primary_key {
        writeln!(src, "    @Id").unwrap();
        if column.auto_increment {
            writeln!(src, "    @GeneratedValue(strategy = GenerationType.IDENTITY)").unwrap();
        }
    }

    let mut annotation = format!("@Column(name = \"{}\"", column.name);
    if !column.nullable {
        annotation.push_str(", nullable = false");
    }
    if let Some(default) = &column.default_value {
        if !column.primary_key {
            write!(annotation, ", columnDefinition = \"{}", column.sql_base_type).unwrap();
            if !column.nullable {
                annotation.push_str(" NOT NULL");
            }
            write!(annotation, " DEFAULT {default}\"").unwrap();
        }
    }
    annotation.push(')');
    writeln!(src, "    {annotation}").unwrap();

    writeln!(src, "    private {} {};", column.java_type, column.field_name).unwrap();
    writeln!(src).unwrap();
}

fn render_relationship_field(src: &mut String, fk: &ForeignKey, schema: &Schema) {
    let Some(target) = target_table(fk, schema) else {
        return;
    };
    let field_name = names::to_camel_case(&target.name, false);

    writeln!(src, "    /**").unwrap();
    writeln!(src, "     * Relationship to {}.", target.name).unwrap();
    writeln!(src, "     */").unwrap();
    writeln!(src, "    @ManyToOne(fetch = FetchType.LAZY)").unwrap();
    writeln!(src, "    @JoinColumn(name = \"{}\")", fk.column_name).unwrap();
    writeln!(src, "    private {} {};", target.class_name, field_name).unwrap();
    writeln!(src).unwrap();
}

fn render_constructors(src: &mut String, table: &Table) {
    writeln!(src, "    /**").unwrap();
    writeln!(src, "     * No-argument constructor required by JPA.").unwrap();
    writeln!(src, "     */").unwrap();
    writeln!(src, "    public {}() {{", table.class_name).unwrap();
    writeln!(src, "    }}").unwrap();
    writeln!(src).unwrap();

    let required: Vec<&Column> = table.required_columns().collect();
    if required.is_empty() {
        return;
    }

    writeln!(src, "    /**").unwrap();
    writeln!(src, "     * Constructor taking every required column.").unwrap();
    writeln!(src, "     */").unwrap();
    let params = required
        .iter()
        .map(|column| format!("{} {}", column.java_type, column.field_name))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(src, "    public {}({params}) {{", table.class_name).unwrap();
    for column in &required {
        writeln!(src, "        this.{0} = {0};", column.field_name).unwrap();
    }
    writeln!(src, "    }}").unwrap();
    writeln!(src).unwrap();
}

fn render_accessor_pair(src: &mut String, java_type: &str, field_name: &str) {
    let accessor = names::capitalize_first(field_name);

    writeln!(src, "    public {java_type} get{accessor}() {{").unwrap();
    writeln!(src, "        return {field_name};").unwrap();
    writeln!(src, "    }}").unwrap();
    writeln!(src).unwrap();

    writeln!(src, "    public void set{accessor}({java_type} {field_name}) {{").unwrap();
    writeln!(src, "        this.{field_name} = {field_name};").unwrap();
    writeln!(src, "    }}").unwrap();
    writeln!(src).unwrap();
}

fn render_equals_hash_code(src: &mut String, table: &Table) {
    let pk_columns: Vec<&Column> = table.primary_key_fields().collect();
    if pk_columns.is_empty() {
        return;
    }

    writeln!(src, "    @Override").unwrap();
    writeln!(src, "    public boolean equals(Object o) {{").unwrap();
    writeln!(src, "        if (this == o) return true;").unwrap();
    writeln!(src, "        if (o == null || getClass() != o.getClass()) return false;").unwrap();
    writeln!(src, "        {0} that = ({0}) o;", table.class_name).unwrap();
    let comparisons = pk_columns
        .iter()
        .map(|column| format!("Objects.equals({0}, that.{0})", column.field_name))
        .collect::<Vec<_>>()
        .join(" && ");
    writeln!(src, "        return {comparisons};").unwrap();
    writeln!(src, "    }}").unwrap();
    writeln!(src).unwrap();

    writeln!(src, "    @Override").unwrap();
    writeln!(src, "    public int hashCode() {{").unwrap();
    let fields = pk_columns
        .iter()
        .map(|column| column.field_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(src, "        return Objects.hash({fields});").unwrap();
    writeln!(src, "    }}").unwrap();
    writeln!(src).unwrap();
}

fn render_to_string(src: &mut String, table: &Table) {
    writeln!(src, "    @Override").unwrap();
    writeln!(src, "    public String toString() {{").unwrap();
    writeln!(src, "        return \"{}{{\" +", table.class_name).unwrap();
    for (idx, column) in table.columns.iter().enumerate() {
        let separator = if idx + 1 < table.columns.len() {
            " + \", \" +"
        } else {
            " +"
        };
        writeln!(src, "                \"{0}=\" + {0}{separator}", column.field_name).unwrap();
    }
    writeln!(src, "                '}}';").unwrap();
    writeln!(src, "    }}").unwrap();
}
