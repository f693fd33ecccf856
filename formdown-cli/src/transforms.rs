//! Inspect transforms
//!
//! Views of what the parser made of a document, for debugging forms that do
//! not come out as expected. Each transform is a stage + format combination:
//!
//! - `lines-simple`: one row per non-blank line with its classification
//! - `model-json`: the parsed model as JSON
//! - `model-treeviz`: the parsed model as a tree (default)
//!
//! `model-treeviz` accepts `--extra-full` to include descriptions.

use formdown::parser::{classify, LineClass};
use formdown::renderers::{json::to_json_string, treeviz::to_treeviz_str_with_params};
use formdown::parse_form;
use std::collections::HashMap;

/// All available inspect transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["lines-simple", "model-json", "model-treeviz"];

/// Execute a named transform on a source document.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "lines-simple" => Ok(lines_to_simple(source)),
        "model-json" => {
            let form = parse_form(source).map_err(|e| format!("Transform failed: {e}"))?;
            to_json_string(&form).map_err(|e| e.to_string())
        }
        "model-treeviz" => {
            let form = parse_form(source).map_err(|e| format!("Transform failed: {e}"))?;
            Ok(to_treeviz_str_with_params(&form, extra_params))
        }
        other => Err(format!(
            "Unknown transform '{other}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn lines_to_simple(source: &str) -> String {
    let mut output = String::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let class = classify(line);
        output.push_str(&format!(
            "{:>4} {:<13} {}\n",
            index + 1,
            class.name(),
            line_detail(&class, line)
        ));
    }
    output
}

fn line_detail(class: &LineClass, line: &str) -> String {
    match class {
        LineClass::GridHeader { axis, kind } => format!("{axis:?} ({kind})"),
        LineClass::ItemTitle { title, required } if *required => format!("{title} *"),
        LineClass::ItemTitle { title, .. }
        | LineClass::Section { title }
        | LineClass::MainTitle { title } => title.clone(),
        LineClass::KindMarker(kind) => kind.to_string(),
        LineClass::Option {
            label,
            target: Some(target),
            ..
        } => format!("{label} -> [{target}]"),
        LineClass::Option { label, .. } => label.clone(),
        LineClass::Scale(scale) => format!("{}..{}", scale.min_value, scale.max_value),
        LineClass::ConfirmationMessage(_) | LineClass::Description(_) => line.to_string(),
    }
}
