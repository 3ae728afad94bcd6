//! Top-level clause splitting and column/constraint classification.

/// Keywords that open a table-level constraint clause.
const CONSTRAINT_PREFIXES: [&str; 7] = [
    "PRIMARY KEY",
    "FOREIGN KEY",
    "KEY",
    "INDEX",
    "UNIQUE",
    "CONSTRAINT",
    "CHECK",
];

/// Split a table body into its top-level comma-separated clauses.
///
/// A comma nested inside parentheses (`DECIMAL(10,2)`, a multi-column key
/// list) or inside a quoted literal (`DEFAULT 'x,y'`) does not split. Clauses
/// are trimmed and empty clauses are dropped.
pub fn split_top_level(body: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut depth: i32 = 0;
    let mut quote: Option<char> = None;

    for ch in body.chars() {
        match ch {
            '\'' | '"' => {
                match quote {
                    Some(open) if open == ch => quote = None,
                    None => quote = Some(ch),
                    Some(_) => {}
                }
                current.push(ch);
            }
            '(' if quote.is_none() => {
                depth += 1;
                current.push(ch);
            }
            ')' if quote.is_none() => {
                depth -= 1;
                current.push(ch);
            }
            ',' if quote.is_none() && depth == 0 => {
                let clause = current.trim();
                if !clause.is_empty() {
                    clauses.push(clause.to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    let clause = current.trim();
    if !clause.is_empty() {
        clauses.push(clause.to_string());
    }

    clauses
}

/// True when the clause is a table-level constraint rather than a column
/// definition.
///
/// Decided by case-insensitive prefix match only, never by full-token
/// inspection. A column whose name itself starts with a constraint keyword
/// (e.g. `key_code`) is therefore classified as a constraint; callers depend
/// on this exact behavior.
pub fn is_constraint_clause(clause: &str) -> bool {
    let upper = clause.trim().to_uppercase();
    CONSTRAINT_PREFIXES
        .iter()
        .any(|prefix| upper.starts_with(prefix))
}
