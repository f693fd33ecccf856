//! Google Apps Script renderer
//!
//! Emits a single function that builds the form through the `FormApp`
//! service when run from the Apps Script editor:
//!
//! ```text
//! function createForm() {
//!   var form = FormApp.create("Title")
//!     .setDescription("...");
//!
//!   var sections = {};
//!   sections["Part one"] = form.addPageBreakItem()
//!     .setTitle("Part one");
//!
//!   form.moveItem(form.getItemById(sections["Part one"].getId()), form.getItems().length - 1);
//!
//!   form.addTextItem()
//!     .setTitle("Name");
//! }
//! ```
//!
//! Every page break is created up front and registered in `sections` by
//! title, so navigation choices can point at sections declared later in the
//! document. Each section is then moved to the end of the form right before
//! its items are added, which puts pages and items in model order.
//!
//! Checkbox items cannot navigate in Apps Script; their targets are dropped
//! with a warning.

use crate::error::FormError;
use crate::model::{Choice, FormModel, Grid, Item, ItemContent, Section};
use crate::render::Renderer;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Knobs of the generated script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    pub function_name: String,
    pub indent: String,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        ScriptOptions {
            function_name: "createForm".to_string(),
            indent: "  ".to_string(),
        }
    }
}

impl ScriptOptions {
    /// Read `function-name` and `indent` from renderer parameters.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FormError> {
        let mut options = ScriptOptions::default();
        for (key, value) in params {
            match key.as_str() {
                "function-name" => {
                    if !is_identifier(value) {
                        return Err(FormError::Render(format!(
                            "'{value}' is not a valid function name"
                        )));
                    }
                    options.function_name = value.clone();
                }
                "indent" => options.indent = value.clone(),
                other => {
                    return Err(FormError::NotSupported(format!(
                        "Renderer 'apps-script' does not support parameter '{other}'"
                    )))
                }
            }
        }
        Ok(options)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// One JavaScript statement: a head line followed by chained calls.
type Statement = Vec<String>;

/// Statements printed together, blocks are separated by a blank line.
type Block = Vec<Statement>;

fn js_string(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

fn js_array(values: &[String]) -> String {
    Value::Array(values.iter().cloned().map(Value::String).collect()).to_string()
}

fn section_ref(title: &str) -> String {
    format!("sections[{}]", js_string(title))
}

fn form_block(form: &FormModel) -> Block {
    let mut statement = vec![format!("var form = FormApp.create({})", js_string(&form.title))];
    if !form.description.is_empty() {
        statement.push(format!(".setDescription({})", js_string(&form.description)));
    }
    if !form.confirmation_message.is_empty() {
        statement.push(format!(
            ".setConfirmationMessage({})",
            js_string(&form.confirmation_message)
        ));
    }
    vec![statement]
}

fn sections_block(form: &FormModel) -> Block {
    let mut block = vec![vec!["var sections = {}".to_string()]];
    for section in form.sections.iter().filter(|s| s.explicit) {
        debug!(
            "Creating section: {} - {}",
            section.title, section.description
        );
        let mut statement = vec![
            format!("{} = form.addPageBreakItem()", section_ref(&section.title)),
            format!(".setTitle({})", js_string(&section.title)),
        ];
        if !section.description.is_empty() {
            statement.push(format!(".setHelpText({})", js_string(&section.description)));
        }
        block.push(statement);
    }
    block
}

fn move_to_end_block(section: &Section) -> Block {
    if section.revisited {
        debug!("Moving revisited section to end of form: {}", section.title);
    }
    vec![vec![format!(
        "form.moveItem(form.getItemById({}.getId()), form.getItems().length - 1)",
        section_ref(&section.title)
    )]]
}

/// Help text and required flag, shared by every item kind.
fn common_tail(item: &Item) -> Statement {
    let mut calls = Vec::new();
    if !item.description.is_empty() {
        calls.push(format!(".setHelpText({})", js_string(&item.description)));
    }
    if item.required {
        calls.push(".setRequired(true)".to_string());
    }
    calls
}

fn simple_item(constructor: &str, item: &Item, extra: Statement) -> Block {
    let mut statement = vec![
        format!("form.{constructor}()"),
        format!(".setTitle({})", js_string(&item.title)),
    ];
    statement.extend(extra);
    statement.extend(common_tail(item));
    vec![statement]
}

fn grid_calls(grid: &Grid) -> Statement {
    vec![
        format!(".setRows({})", js_array(&grid.rows)),
        format!(".setColumns({})", js_array(&grid.columns)),
    ]
}

fn choice_item(constructor: &str, item: &Item, choices: &[Choice], navigable: bool) -> Block {
    let has_targets = choices.iter().any(|c| c.navigation_target.is_some());
    if has_targets && !navigable {
        warn!(
            "Checkbox item '{}' cannot navigate to sections; ignoring targets",
            item.title
        );
    }

    if !(has_targets && navigable) {
        let labels: Vec<String> = choices.iter().map(|c| c.label.clone()).collect();
        return simple_item(
            constructor,
            item,
            vec![format!(".setChoiceValues({})", js_array(&labels))],
        );
    }

    let created: Vec<String> = choices
        .iter()
        .map(|choice| match &choice.navigation_target {
            Some(target) => format!(
                "item.createChoice({}, {})",
                js_string(&choice.label),
                section_ref(target.name())
            ),
            None => format!("item.createChoice({})", js_string(&choice.label)),
        })
        .collect();

    let declaration = vec![
        format!("var item = form.{constructor}()"),
        format!(".setTitle({})", js_string(&item.title)),
    ];
    let mut choices_statement = vec![format!("item.setChoices([{}])", created.join(", "))];
    choices_statement.extend(common_tail(item));
    vec![declaration, choices_statement]
}

fn item_block(item: &Item) -> Block {
    debug!(
        "Rendering {} item: {}{} - {}",
        item.kind(),
        item.title,
        if item.required { " (required)" } else { "" },
        item.description
    );
    match &item.content {
        ItemContent::TitleAndDescription => simple_item("addSectionHeaderItem", item, vec![]),
        ItemContent::ShortText => simple_item("addTextItem", item, vec![]),
        ItemContent::ParagraphText => simple_item("addParagraphTextItem", item, vec![]),
        ItemContent::MultipleChoice { choices } => {
            choice_item("addMultipleChoiceItem", item, choices, true)
        }
        ItemContent::Checkbox { choices } => choice_item("addCheckboxItem", item, choices, false),
        ItemContent::List { choices } => choice_item("addListItem", item, choices, true),
        ItemContent::Scale(scale) => simple_item(
            "addScaleItem",
            item,
            vec![
                format!(".setBounds({}, {})", scale.min_value, scale.max_value),
                format!(
                    ".setLabels({}, {})",
                    js_string(&scale.min_label),
                    js_string(&scale.max_label)
                ),
            ],
        ),
        ItemContent::Date => simple_item("addDateItem", item, vec![]),
        ItemContent::Time => simple_item("addTimeItem", item, vec![]),
        ItemContent::DateTime => simple_item("addDateTimeItem", item, vec![]),
        ItemContent::Duration => simple_item("addDurationItem", item, vec![]),
        ItemContent::Grid(grid) => simple_item("addGridItem", item, grid_calls(grid)),
        ItemContent::CheckboxGrid(grid) => {
            simple_item("addCheckboxGridItem", item, grid_calls(grid))
        }
    }
}

fn write_block(out: &mut String, block: &Block, indent: &str) {
    for statement in block {
        let last = statement.len().saturating_sub(1);
        for (i, line) in statement.iter().enumerate() {
            out.push_str(indent);
            if i > 0 {
                out.push_str(indent);
            }
            out.push_str(line);
            if i == last {
                out.push(';');
            }
            out.push('\n');
        }
    }
}

/// Render a form as an Apps Script function.
pub fn render_script(form: &FormModel, options: &ScriptOptions) -> String {
    debug!("Creating form: {}", form.title);

    let mut blocks = vec![form_block(form), sections_block(form)];
    for section in &form.sections {
        if section.explicit {
            blocks.push(move_to_end_block(section));
        }
        blocks.extend(section.items.iter().map(item_block));
    }

    let mut out = format!("function {}() {{\n", options.function_name);
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_block(&mut out, block, &options.indent);
    }
    out.push_str("}\n");

    debug!("Form created");
    out
}

/// Renderer implementation for Google Apps Script
pub struct AppsScriptRenderer;

impl Renderer for AppsScriptRenderer {
    fn name(&self) -> &str {
        "apps-script"
    }

    fn description(&self) -> &str {
        "Google Apps Script function that builds the form with FormApp"
    }

    fn file_extensions(&self) -> &[&str] {
        &["gs", "js"]
    }

    fn render(&self, form: &FormModel) -> Result<String, FormError> {
        Ok(render_script(form, &ScriptOptions::default()))
    }

    fn render_with_options(
        &self,
        form: &FormModel,
        options: &HashMap<String, String>,
    ) -> Result<String, FormError> {
        let options = ScriptOptions::from_params(options)?;
        Ok(render_script(form, &options))
    }
}
