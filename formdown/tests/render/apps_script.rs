//! Apps Script output for parsed documents.

use crate::common::{fixture, parse};
use formdown::renderers::{render_script, ScriptOptions};
use formdown::RendererRegistry;
use insta::assert_snapshot;
use std::collections::HashMap;

fn script(source: &str) -> String {
    render_script(&parse(source), &ScriptOptions::default())
}

#[test]
fn test_sections_scenario_script() {
    let output = script("# My Form\n## Section A\n### Name\n`answer`\n## Section B\n* Opt1\n* Opt2");
    assert_snapshot!(output, @r#"
    function createForm() {
      var form = FormApp.create("My Form");

      var sections = {};
      sections["Section A"] = form.addPageBreakItem()
        .setTitle("Section A");
      sections["Section B"] = form.addPageBreakItem()
        .setTitle("Section B");

      form.moveItem(form.getItemById(sections["Section A"].getId()), form.getItems().length - 1);

      form.addTextItem()
        .setTitle("Name");

      form.moveItem(form.getItemById(sections["Section B"].getId()), form.getItems().length - 1);

      form.addMultipleChoiceItem()
        .setTitle("")
        .setChoiceValues(["Opt1","Opt2"]);
    }
    "#);
}

#[test]
fn test_output_is_deterministic() {
    let source = fixture("sample.md");
    assert_eq!(script(&source), script(&source));
}

#[test]
fn test_sample_script_structure() {
    let output = script(&fixture("sample.md"));

    assert!(output.starts_with("function createForm() {\n"));
    assert!(output.ends_with("}\n"));
    assert!(output.contains(".setConfirmationMessage(\"Thanks! See you there.\")"));

    // Every page break exists before any item refers to it.
    let feedback_break = output
        .find("sections[\"Feedback\"] = form.addPageBreakItem()")
        .unwrap();
    let jump = output
        .find("item.createChoice(\"No, skip to feedback\", sections[\"Feedback\"])")
        .unwrap();
    assert!(feedback_break < jump);

    assert!(output.contains("form.addDateItem()\n    .setTitle(\"Date of birth\");"));
    assert!(output.contains(".setBounds(1, 10)"));
    assert!(output.contains(".setRows([\"Morning\",\"Afternoon\"])"));
    assert!(output.contains("form.addListItem()\n    .setTitle(\"T-shirt size\")"));
    assert_eq!(output.matches("form.moveItem(").count(), 3);
}

#[test]
fn test_required_item_help_text_order() {
    let output = script("### **Age**\nIn whole years\n`42`\n");
    assert!(output.contains(
        "form.addTextItem()\n    .setTitle(\"Age\")\n    .setHelpText(\"In whole years\")\n    .setRequired(true);"
    ));
    // Implicit section: no page break, no move.
    assert!(!output.contains("addPageBreakItem"));
    assert!(!output.contains("moveItem"));
}

#[test]
fn test_custom_function_name_and_indent() {
    let mut options = HashMap::new();
    options.insert("function-name".to_string(), "buildRsvp".to_string());
    options.insert("indent".to_string(), "    ".to_string());

    let output = RendererRegistry::default()
        .render_with_options(&parse("# RSVP\n"), "apps-script", &options)
        .unwrap();
    assert_eq!(
        output,
        "function buildRsvp() {\n    var form = FormApp.create(\"RSVP\");\n\n    var sections = {};\n}\n"
    );
}
