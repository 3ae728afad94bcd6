/// Writes generated entities, the report, and the schema JSON to disk.
pub mod formatter;
/// Builds a Markdown summary report for one generation run.
pub mod report;
