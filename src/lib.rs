//! Generate Java JPA entity classes from SQL `CREATE TABLE` statements.
#![warn(missing_docs)]

/// Java entity source rendering from the resolved schema model.
pub mod generator;
/// File output and markdown report generation.
pub mod output;
/// DDL normalization and schema extraction.
pub mod parser;
/// In-memory schema model and relationship linking.
pub mod schema;
