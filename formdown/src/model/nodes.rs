//! Core data structures of the form model.

use serde::Serialize;
use std::fmt;

/// The root of a parsed form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormModel {
    pub title: String,
    pub description: String,
    pub confirmation_message: String,
    pub sections: Vec<Section>,
}

impl FormModel {
    /// Look up a section by its exact title.
    pub fn section(&self, title: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// Iterate over every item of every section, in document order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }
}

/// A page of the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Section {
    pub title: String,
    pub description: String,
    pub items: Vec<Item>,
    /// False only for the leading section created to hold items that appear
    /// before any section was declared. It is rendered without a page break.
    pub explicit: bool,
    /// Set when a later `##` heading re-opened this section and moved it to
    /// the end of the form.
    pub revisited: bool,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Section {
            title: title.into(),
            explicit: true,
            ..Default::default()
        }
    }

    /// The leading section that holds items declared before any section.
    pub fn implicit() -> Self {
        Section::default()
    }
}

/// A single question (or header) of the form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    pub title: String,
    pub description: String,
    pub required: bool,
    #[serde(flatten)]
    pub content: ItemContent,
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        self.content.kind()
    }
}

/// Kind-specific payload of an [`Item`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemContent {
    TitleAndDescription,
    ShortText,
    ParagraphText,
    MultipleChoice { choices: Vec<Choice> },
    Checkbox { choices: Vec<Choice> },
    List { choices: Vec<Choice> },
    Scale(Scale),
    Date,
    Time,
    DateTime,
    Duration,
    Grid(Grid),
    CheckboxGrid(Grid),
}

impl ItemContent {
    pub fn kind(&self) -> ItemKind {
        match self {
            ItemContent::TitleAndDescription => ItemKind::TitleAndDescription,
            ItemContent::ShortText => ItemKind::ShortText,
            ItemContent::ParagraphText => ItemKind::ParagraphText,
            ItemContent::MultipleChoice { .. } => ItemKind::MultipleChoice,
            ItemContent::Checkbox { .. } => ItemKind::Checkbox,
            ItemContent::List { .. } => ItemKind::List,
            ItemContent::Scale(_) => ItemKind::Scale,
            ItemContent::Date => ItemKind::Date,
            ItemContent::Time => ItemKind::Time,
            ItemContent::DateTime => ItemKind::DateTime,
            ItemContent::Duration => ItemKind::Duration,
            ItemContent::Grid(_) => ItemKind::Grid,
            ItemContent::CheckboxGrid(_) => ItemKind::CheckboxGrid,
        }
    }

    /// Choices of a choice-based item, empty for every other kind.
    pub fn choices(&self) -> &[Choice] {
        match self {
            ItemContent::MultipleChoice { choices }
            | ItemContent::Checkbox { choices }
            | ItemContent::List { choices } => choices,
            _ => &[],
        }
    }
}

/// Discriminant of [`ItemContent`], used while an item is still being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    TitleAndDescription,
    ShortText,
    ParagraphText,
    MultipleChoice,
    Checkbox,
    List,
    Scale,
    Date,
    Time,
    DateTime,
    Duration,
    Grid,
    CheckboxGrid,
}

impl ItemKind {
    /// Whether respondents answer this kind of item. Only answerable items
    /// can be required.
    pub fn is_answerable(self) -> bool {
        !matches!(self, ItemKind::TitleAndDescription)
    }

    pub fn label(self) -> &'static str {
        match self {
            ItemKind::TitleAndDescription => "title and description",
            ItemKind::ShortText => "short text",
            ItemKind::ParagraphText => "paragraph text",
            ItemKind::MultipleChoice => "multiple choice",
            ItemKind::Checkbox => "checkbox",
            ItemKind::List => "list",
            ItemKind::Scale => "scale",
            ItemKind::Date => "date",
            ItemKind::Time => "time",
            ItemKind::DateTime => "date time",
            ItemKind::Duration => "duration",
            ItemKind::Grid => "grid",
            ItemKind::CheckboxGrid => "checkbox grid",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable option of a choice item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choice {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_target: Option<SectionRef>,
}

impl Choice {
    pub fn plain(label: impl Into<String>) -> Self {
        Choice {
            label: label.into(),
            navigation_target: None,
        }
    }

    pub fn navigating(label: impl Into<String>, target: impl Into<String>) -> Self {
        Choice {
            label: label.into(),
            navigation_target: Some(SectionRef::new(target)),
        }
    }
}

/// Name of a section referenced from a navigation choice.
///
/// Kept as an opaque token while parsing; sections may be declared after the
/// choice that points at them, see [`crate::model::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SectionRef(String);

impl SectionRef {
    pub fn new(name: impl Into<String>) -> Self {
        SectionRef(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Bounds and labels of a linear scale item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Scale {
    pub min_value: i64,
    pub max_value: i64,
    pub min_label: String,
    pub max_label: String,
}

/// Row and column labels of a grid item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
}
