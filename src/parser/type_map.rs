//! SQL base-type to Java type mapping.

/// Map an uppercased base SQL type to its Java type name.
///
/// Covers the common string, integer, decimal, date/time, boolean, binary,
/// and document families across MySQL, PostgreSQL, and SQL Server spellings.
/// Unrecognized types fall back to `String`; the mapping never fails.
pub fn java_type_for(base_type: &str) -> &'static str {
    match base_type {
        "VARCHAR" | "CHAR" | "TEXT" | "LONGTEXT" | "MEDIUMTEXT" | "TINYTEXT" | "CLOB"
        | "NVARCHAR" | "NCHAR" | "NTEXT" => "String",
        "INT" | "INTEGER" | "MEDIUMINT" => "Integer",
        "SMALLINT" => "Short",
        "TINYINT" => "Byte",
        "BIGINT" => "Long",
        "DECIMAL" | "NUMERIC" | "MONEY" | "SMALLMONEY" => "BigDecimal",
        "FLOAT" | "REAL" => "Float",
        "DOUBLE" => "Double",
        "DATE" => "LocalDate",
        "TIME" => "LocalTime",
        "TIMESTAMP" | "DATETIME" | "DATETIME2" | "SMALLDATETIME" => "LocalDateTime",
        "BOOLEAN" | "BOOL" | "BIT" => "Boolean",
        "BLOB" | "LONGBLOB" | "MEDIUMBLOB" | "TINYBLOB" | "BINARY" | "VARBINARY" | "IMAGE" => {
            "byte[]"
        }
        "JSON" | "JSONB" | "XML" => "String",
        "UUID" => "UUID",
        _ => "String",
    }
}

/// Widen an integer Java type by one step for an `UNSIGNED` qualifier.
///
/// `Byte` → `Short` → `Integer` → `Long` → `BigInteger`, saturating at
/// `BigInteger`. Non-integer types pass through unchanged.
pub fn widen_unsigned(java_type: &str) -> &str {
    match java_type {
        "Byte" => "Short",
        "Short" => "Integer",
        "Integer" => "Long",
        "Long" => "BigInteger",
        other => other,
    }
}

/// Java import required by a mapped type, when one exists.
///
/// Types resolvable from `java.lang` (and `byte[]`) contribute no import.
pub fn import_for(java_type: &str) -> Option<&'static str> {
    match java_type {
        "BigDecimal" => Some("java.math.BigDecimal"),
        "BigInteger" => Some("java.math.BigInteger"),
        "LocalDate" => Some("java.time.LocalDate"),
        "LocalTime" => Some("java.time.LocalTime"),
        "LocalDateTime" => Some("java.time.LocalDateTime"),
        "UUID" => Some("java.util.UUID"),
        _ => None,
    }
}
