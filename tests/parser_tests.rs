mod support;

#[test]
fn parse_bookstore_tables() {
    let parsed = support::parse_fixture("bookstore");

    let names: Vec<&str> = parsed
        .schema
        .tables
        .iter()
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["authors", "books", "orders"], "discovery order");
    assert!(parsed.diagnostics.is_empty(), "fixture parses cleanly");
}

#[test]
fn parse_bookstore_columns() {
    let parsed = support::parse_fixture("bookstore");

    let authors = parsed.schema.table("authors").expect("authors table");
    let author_columns: Vec<&str> = authors.columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(author_columns, vec!["id", "name", "country", "born"]);

    let id = &authors.columns[0];
    assert!(id.primary_key);
    assert!(id.auto_increment);
    assert_eq!(id.java_type, "Integer");

    let name = &authors.columns[1];
    assert!(!name.nullable);
    assert_eq!(name.java_type, "String");

    let born = &authors.columns[3];
    assert!(born.nullable);
    assert_eq!(born.java_type, "LocalDate");
}

#[test]
fn parse_bookstore_types_and_modifiers() {
    let parsed = support::parse_fixture("bookstore");

    let books = parsed.schema.table("books").expect("books table");

    let price = books.columns.iter().find(|c| c.name == "price").unwrap();
    assert_eq!(price.sql_base_type, "DECIMAL");
    assert_eq!(price.java_type, "BigDecimal");

    let pages = books.columns.iter().find(|c| c.name == "pages").unwrap();
    assert_eq!(pages.sql_base_type, "SMALLINT");
    assert_eq!(pages.java_type, "Integer", "UNSIGNED widens Short to Integer");

    let summary = books.columns.iter().find(|c| c.name == "summary").unwrap();
    assert_eq!(summary.comment.as_deref(), Some("Back-cover text"));

    let in_print = books.columns.iter().find(|c| c.name == "in_print").unwrap();
    assert_eq!(in_print.java_type, "Boolean");
    assert_eq!(in_print.default_value.as_deref(), Some("TRUE"));
}

#[test]
fn parse_bookstore_primary_keys() {
    let parsed = support::parse_fixture("bookstore");

    let books = parsed.schema.table("books").expect("books table");
    assert_eq!(books.primary_key_columns, vec!["id"]);

    // The backtick-quoted `id` column has no inline PRIMARY KEY keyword; the
    // table-level clause alone must set its flag.
    let id = &books.columns[0];
    assert_eq!(id.name, "id");
    assert!(id.primary_key);
    assert!(id.auto_increment);
    assert_eq!(id.java_type, "Long");
}

#[test]
fn parse_bookstore_foreign_keys() {
    let parsed = support::parse_fixture("bookstore");

    let books = parsed.schema.table("books").expect("books table");
    assert_eq!(books.foreign_keys.len(), 1);
    assert_eq!(books.foreign_keys[0].referenced_table, "authors");
    assert!(books.foreign_keys[0].resolved_target.is_some());

    let orders = parsed.schema.table("orders").expect("orders table");
    assert_eq!(orders.foreign_keys.len(), 2);
    assert_eq!(orders.foreign_keys[0].referenced_table, "books");
    assert!(orders.foreign_keys[0].resolved_target.is_some());
    assert_eq!(orders.foreign_keys[1].referenced_table, "customers");
    assert!(
        orders.foreign_keys[1].resolved_target.is_none(),
        "customers is outside the parsed batch"
    );
    assert_eq!(orders.resolved_foreign_keys().count(), 1);
}

#[test]
fn index_clauses_never_become_columns() {
    let parsed = support::parse_fixture("bookstore");

    let books = parsed.schema.table("books").expect("books table");
    assert!(
        books.columns.iter().all(|c| c.name != "idx_books_title"),
        "KEY clause must be classified as a constraint"
    );
}
