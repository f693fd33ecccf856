use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn inspect_defaults_to_tree() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("form.md");
    fs::write(&input, "# Poll\n## Lunch\n### Where?\n* Here\n* There [Lunch]\n").unwrap();

    cargo_bin_cmd!("formdown")
        .arg("inspect")
        .arg(input.as_os_str())
        .assert()
        .success()
        .stdout(predicate::str::contains("⧉ Poll (1 sections, 1 items)"))
        .stdout(predicate::str::contains("• There → [Lunch]"));
}

#[test]
fn inspect_lines_simple() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("form.md");
    fs::write(&input, "# Poll\n\n#### [ ] Rows\nLow 1 --- 5 High\n").unwrap();

    cargo_bin_cmd!("formdown")
        .arg("inspect")
        .arg(input.as_os_str())
        .arg("lines-simple")
        .assert()
        .success()
        .stdout(predicate::str::contains("   1 main-title    Poll"))
        .stdout(predicate::str::contains("   3 grid-header   Rows (checkbox grid)"))
        .stdout(predicate::str::contains("   4 scale         1..5"));
}

#[test]
fn inspect_full_tree_shows_descriptions() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("form.md");
    fs::write(&input, "# Poll\nQuick one.\n### Age\nIn years\n`n`\n").unwrap();

    cargo_bin_cmd!("formdown")
        .arg("inspect")
        .arg(input.as_os_str())
        .arg("--extra-full")
        .assert()
        .success()
        .stdout(predicate::str::contains("↵ Quick one."))
        .stdout(predicate::str::contains("↵ In years"));
}

#[test]
fn inspect_rejects_unknown_transform() {
    cargo_bin_cmd!("formdown")
        .arg("inspect")
        .arg("form.md")
        .arg("ast-tag")
        .assert()
        .failure();
}
