//! Shared helpers for integration tests.

use formdown::{parse_form, FormModel};
use std::path::PathBuf;

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

pub fn parse(source: &str) -> FormModel {
    parse_form(source).expect("Should parse form")
}

pub fn section_titles(form: &FormModel) -> Vec<&str> {
    form.sections.iter().map(|s| s.title.as_str()).collect()
}
