//! CLI entry point for `sql2jpa`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use sql2jpa::generator::entity_generator;
use sql2jpa::output::formatter;
use sql2jpa::output::report;
use sql2jpa::parser::schema_parser;

#[derive(Parser)]
#[command(
    name = "sql2jpa",
    about = "Generate Java JPA entity classes from SQL CREATE TABLE statements"
)]
struct Cli {
    /// Input SQL schema file
    schema: PathBuf,

    /// Java package for the generated entities
    #[arg(default_value = "com.example.entities")]
    package: String,

    /// Output directory
    #[arg(default_value = "./generated-entities")]
    output_dir: PathBuf,

    /// Also write the parsed schema model as JSON
    #[arg(long)]
    schema_json: bool,

    /// Print verbose diagnostics
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let sql = match std::fs::read_to_string(&cli.schema) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {e}", cli.schema.display());
            process::exit(2);
        }
    };

    // Stage 1-2: Parse and link the schema.
    let parsed = schema_parser::parse_schema(&sql);

    for table in &parsed.schema.tables {
        println!("Found table: {} ({} columns)", table.name, table.columns.len());
    }
    for diagnostic in &parsed.diagnostics {
        eprintln!(
            "Warning: could not parse column definition in {}: {}",
            diagnostic.table, diagnostic.clause
        );
    }
    if cli.verbose {
        for table in &parsed.schema.tables {
            for fk in table
                .foreign_keys
                .iter()
                .filter(|fk| fk.resolved_target.is_none())
            {
                eprintln!(
                    "Note: {}.{} references {}, which is not part of this schema; relationship skipped",
                    table.name, fk.column_name, fk.referenced_table
                );
            }
        }
    }

    // Stage 3: Render one entity per table.
    let entities = entity_generator::generate_entities(&parsed.schema, &cli.package);

    // Stage 4: Build the report and the optional schema JSON.
    let report_md = report::build_report(&parsed.schema, &parsed.diagnostics);
    let schema_json = if cli.schema_json {
        match serde_json::to_string_pretty(&parsed.schema) {
            Ok(json) => Some(json),
            Err(e) => {
                eprintln!("Error serializing schema model: {e}");
                process::exit(2);
            }
        }
    } else {
        None
    };

    // Stage 5: Write output.
    let stem = cli
        .schema
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("schema");

    if let Err(e) = formatter::write_output(
        &cli.output_dir,
        stem,
        &entities,
        &report_md,
        schema_json.as_deref(),
    ) {
        eprintln!("Error writing output: {e}");
        process::exit(2);
    }

    for entity in &entities {
        println!("Generated entity: {}", entity.file_name);
    }
    println!(
        "Generation complete! {} entities written to {}",
        entities.len(),
        cli.output_dir.display()
    );
}
