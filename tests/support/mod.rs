#![allow(dead_code)]

use std::path::PathBuf;

use sql2jpa::parser::schema_parser::{self, ParsedSchema};

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn read_fixture_sql(fixture: &str) -> String {
    let path = fixture_dir(fixture).join("schema.sql");
    std::fs::read_to_string(path).expect("fixture SQL should be readable")
}

pub(crate) fn parse_fixture(fixture: &str) -> ParsedSchema {
    schema_parser::parse_schema(&read_fixture_sql(fixture))
}
