//! Writes generated artifacts to the output directory.

use std::path::{Component, Path};

use crate::generator::entity_generator::GeneratedEntity;

/// Write all output files to the specified directory.
///
/// Creates the directory when missing, then writes one `.java` file per
/// entity, the Markdown report as `<stem>_report.md`, and, when provided,
/// the schema model JSON as `<stem>_schema.json`.
pub fn write_output(
    output_dir: &Path,
    stem: &str,
    entities: &[GeneratedEntity],
    report: &str,
    schema_json: Option<&str>,
) -> Result<(), String> {
    validate_artifact_name(stem)?;
    for entity in entities {
        validate_artifact_name(&entity.file_name)?;
    }

    std::fs::create_dir_all(output_dir)
        .map_err(|e| format!("Failed to create output directory: {e}"))?;

    for entity in entities {
        let path = output_dir.join(&entity.file_name);
        std::fs::write(&path, &entity.source)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
    }

    let report_path = output_dir.join(format!("{stem}_report.md"));
    std::fs::write(&report_path, report)
        .map_err(|e| format!("Failed to write {}: {e}", report_path.display()))?;

    if let Some(json) = schema_json {
        let json_path = output_dir.join(format!("{stem}_schema.json"));
        std::fs::write(&json_path, json)
            .map_err(|e| format!("Failed to write {}: {e}", json_path.display()))?;
    }

    Ok(())
}

/// Artifact base names come from user-controlled identifiers (the input file
/// stem and table names, which may be backtick-quoted to arbitrary text), so
/// they must stay inside the output directory.
fn validate_artifact_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Artifact name must not be empty".to_string());
    }
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return Err(format!(
            "Invalid artifact name '{name}': absolute paths are not allowed"
        ));
    }
    if candidate.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    }) {
        return Err(format!(
            "Invalid artifact name '{name}': traversal segments are not allowed"
        ));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(format!(
            "Invalid artifact name '{name}': path separators are not allowed"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_path(prefix: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!("{prefix}_{nanos}"))
    }

    fn sample_entity() -> GeneratedEntity {
        GeneratedEntity {
            file_name: "Users.java".to_string(),
            source: "public class Users {}\n".to_string(),
        }
    }

    #[test]
    fn write_output_reports_directory_creation_errors() {
        let path = unique_path("sql2jpa_formatter_file");
        std::fs::write(&path, "not a directory").expect("should create marker file");

        let err = write_output(&path, "schema", &[sample_entity()], "# report\n", None)
            .expect_err("directory creation should fail");
        assert!(err.contains("Failed to create output directory"));
    }

    #[test]
    fn write_output_rejects_unsafe_artifact_names() {
        let dir = unique_path("sql2jpa_formatter_dir");
        std::fs::create_dir_all(&dir).expect("should create temp directory");

        let err = write_output(&dir, "nested/schema", &[], "# report\n", None)
            .expect_err("unsafe stem should fail validation");
        assert!(err.contains("Invalid artifact name"));

        let traversal = GeneratedEntity {
            file_name: "../Escape.java".to_string(),
            source: String::new(),
        };
        let err = write_output(&dir, "schema", &[traversal], "# report\n", None)
            .expect_err("path traversal should fail validation");
        assert!(err.contains("Invalid artifact name"));
    }

    #[test]
    fn write_output_writes_all_artifacts_on_success() {
        let dir = unique_path("sql2jpa_formatter_ok");

        write_output(
            &dir,
            "shop",
            &[sample_entity()],
            "# sql2jpa Generation Report\n",
            Some("{\"tables\":[]}"),
        )
        .expect("write_output should succeed");

        let entity =
            std::fs::read_to_string(dir.join("Users.java")).expect("entity file should exist");
        let report =
            std::fs::read_to_string(dir.join("shop_report.md")).expect("report should exist");
        let json =
            std::fs::read_to_string(dir.join("shop_schema.json")).expect("json should exist");

        assert_eq!(entity, "public class Users {}\n");
        assert!(report.contains("# sql2jpa Generation Report"));
        assert!(json.contains("tables"));
    }

    #[test]
    fn schema_json_is_only_written_when_requested() {
        let dir = unique_path("sql2jpa_formatter_nojson");

        write_output(&dir, "shop", &[], "# report\n", None).expect("write_output should succeed");

        assert!(!dir.join("shop_schema.json").exists());
        assert!(dir.join("shop_report.md").exists());
    }
}
