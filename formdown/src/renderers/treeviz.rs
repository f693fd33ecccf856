//! Treeviz renderer
//!
//! A visual tree of the parsed form, one line per node, meant for checking
//! how a document was understood:
//!
//! ```text
//! ⧉ My Form (2 sections, 2 items)
//! ├─ § Section A
//! │ └─ ✎ Name [short text]
//! └─ § Section B
//!   └─ ◉ (untitled) [multiple choice]
//!     ├─ • Opt1
//!     └─ • Opt2
//! ```
//!
//! Required items are marked with `*`, revisited sections with `(revisited)`.
//! With the `full` parameter set to `true`, descriptions are shown as `↵`
//! children.

use super::icons::{get_icon, item_icon};
use crate::error::FormError;
use crate::model::{FormModel, Item, ItemContent, Section};
use crate::render::Renderer;
use std::collections::HashMap;

struct Node {
    icon: &'static str,
    label: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(icon: &'static str, label: impl Into<String>) -> Self {
        Node {
            icon,
            label: label.into(),
            children: Vec::new(),
        }
    }
}

fn or_untitled(title: &str) -> &str {
    if title.is_empty() {
        "(untitled)"
    } else {
        title
    }
}

fn description_node(description: &str, full: bool) -> Option<Node> {
    (full && !description.is_empty()).then(|| Node::leaf(get_icon("Description"), description))
}

fn item_node(item: &Item, full: bool) -> Node {
    let mut label = format!("{} [{}]", or_untitled(&item.title), item.kind());
    if item.required {
        label.push_str(" *");
    }

    let mut children: Vec<Node> = description_node(&item.description, full)
        .into_iter()
        .collect();
    match &item.content {
        ItemContent::MultipleChoice { choices }
        | ItemContent::Checkbox { choices }
        | ItemContent::List { choices } => {
            children.extend(choices.iter().map(|choice| {
                let label = match &choice.navigation_target {
                    Some(target) => format!("{} → [{}]", choice.label, target),
                    None => choice.label.clone(),
                };
                Node::leaf(get_icon("Choice"), label)
            }));
        }
        ItemContent::Scale(scale) => children.push(Node::leaf(
            get_icon("Bounds"),
            format!(
                "{} {} --- {} {}",
                scale.min_label, scale.min_value, scale.max_value, scale.max_label
            )
            .trim()
            .to_string(),
        )),
        ItemContent::Grid(grid) | ItemContent::CheckboxGrid(grid) => {
            children.extend(grid.rows.iter().map(|r| Node::leaf(get_icon("Row"), r)));
            children.extend(
                grid.columns
                    .iter()
                    .map(|c| Node::leaf(get_icon("Column"), c)),
            );
        }
        _ => {}
    }

    Node {
        icon: item_icon(item.kind()),
        label,
        children,
    }
}

fn section_node(section: &Section, full: bool) -> Node {
    let mut label = if section.explicit {
        section.title.clone()
    } else {
        "(implicit)".to_string()
    };
    if section.revisited {
        label.push_str(" (revisited)");
    }
    let mut children: Vec<Node> = description_node(&section.description, full)
        .into_iter()
        .collect();
    children.extend(section.items.iter().map(|item| item_node(item, full)));
    Node {
        icon: get_icon("Section"),
        label,
        children,
    }
}

fn format_children(children: &[Node], prefix: &str, output: &mut String) {
    let count = children.len();
    for (i, child) in children.iter().enumerate() {
        let is_last = i == count - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!(
            "{prefix}{connector} {} {}\n",
            child.icon, child.label
        ));
        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        format_children(&child.children, &child_prefix, output);
    }
}

pub fn to_treeviz_str(form: &FormModel) -> String {
    to_treeviz_str_with_params(form, &HashMap::new())
}

/// Convert a form to a treeviz string.
///
/// # Parameters
///
/// - `"full"`: when `"true"`, includes form, section and item descriptions.
pub fn to_treeviz_str_with_params(form: &FormModel, params: &HashMap<String, String>) -> String {
    let full = params
        .get("full")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    let mut output = format!(
        "{} {} ({} sections, {} items)\n",
        get_icon("Form"),
        or_untitled(&form.title),
        form.sections.len(),
        form.items().count()
    );

    let mut children: Vec<Node> = description_node(&form.description, full)
        .into_iter()
        .collect();
    children.extend(form.sections.iter().map(|s| section_node(s, full)));
    format_children(&children, "", &mut output);
    output
}

/// Renderer implementation for the tree visualization
pub struct TreevizRenderer;

impl Renderer for TreevizRenderer {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn render(&self, form: &FormModel) -> Result<String, FormError> {
        Ok(to_treeviz_str(form))
    }

    fn render_with_options(
        &self,
        form: &FormModel,
        options: &HashMap<String, String>,
    ) -> Result<String, FormError> {
        Ok(to_treeviz_str_with_params(form, options))
    }
}
