/// Top-level comma splitting and column/constraint clause classification.
pub mod clause_splitter;
/// Structured parsing of a single column-definition clause.
pub mod column_parser;
/// Table-level `PRIMARY KEY` and `FOREIGN KEY` constraint extraction.
pub mod constraint_extractor;
/// Identifier normalization helpers (quoting, camel casing).
pub mod names;
/// Comment stripping and whitespace normalization.
pub mod normalize;
/// `CREATE TABLE` statement extraction and schema assembly.
pub mod schema_parser;
/// SQL base-type to Java type mapping and import resolution.
pub mod type_map;
