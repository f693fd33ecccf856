//! Line classification
//!
//! Every non-blank line of a form document is matched against an ordered list
//! of structural patterns. The first pattern that matches wins, anything that
//! matches nothing is description text. Classification is stateless: what a
//! line *means* for the form (a choice, a grid row, a section declaration) is
//! decided by the state machine in [`super::machine`].
//!
//! Precedence (top to bottom):
//!
//! | # | Pattern                         | Class                   |
//! |---|---------------------------------|-------------------------|
//! | 1 | `#### Rows`, `#### [ ] Columns` | grid header             |
//! | 2 | `### Title`, `### **Title**`    | item title              |
//! | 3 | `## Title`                      | section                 |
//! | 4 | `# Title`                       | main title              |
//! | 5 | `_Thanks!_`                     | confirmation message    |
//! | 6 | ```` ``` ````                   | paragraph text marker   |
//! | 7 | `` `answer` ``                  | short text marker       |
//! | 8 | `- [ ] label`, `[ ] label`      | checkbox option         |
//! | 9 | `* label`                       | radio option            |
//! | 10| `- label`                       | list option             |
//! | 11| `Bad 1 --- 5 Good`              | scale                   |
//! | 12| `dd/mm/yyyy hh:mm`, `dd/mm/yyyy`, `hh:mm:ss`, `hh:mm` | date family |
//! | 13| anything else                   | description             |

use crate::model::{ItemKind, Scale};
use once_cell::sync::Lazy;
use regex::Regex;

static GRID_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^####\s+(\[ \]\s*)?(rows|columns)\s*$").unwrap());
static ITEM_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^###\s+(.+)$").unwrap());
static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+)$").unwrap());
static MAIN_TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s+(.+)$").unwrap());
static REQUIRED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\*(.+?)\*\*$").unwrap());
static CONFIRMATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^_([^_].*)_$").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^`[^`]*`$").unwrap());
static CHECKBOX_OPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-*]\s+)?\[ \]\s+(.+)$").unwrap());
static RADIO_OPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\s+(.+)$").unwrap());
static LIST_OPTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-\s+(.+)$").unwrap());
static SCALE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)(?:^|\s)(-?\d+)\s+---\s+(-?\d+)(?:\s|$)(.*)$").unwrap());
static NAVIGATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\s+\[([^\[\]]+)\]$").unwrap());

/// Date/time placeholders, most specific first.
const DATE_FAMILY: &[(&str, ItemKind)] = &[
    ("dd/mm/yyyy hh:mm", ItemKind::DateTime),
    ("dd/mm/yyyy", ItemKind::Date),
    ("hh:mm:ss", ItemKind::Duration),
    ("hh:mm", ItemKind::Time),
];

/// Which axis of a grid the following option lines fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    Rows,
    Columns,
}

/// The bullet style of an option line, which decides the natural item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMarker {
    /// `- [ ] label` or `[ ] label`
    Checkbox,
    /// `* label`
    Radio,
    /// `- label`
    List,
}

impl OptionMarker {
    pub fn natural_kind(self) -> ItemKind {
        match self {
            OptionMarker::Checkbox => ItemKind::Checkbox,
            OptionMarker::Radio => ItemKind::MultipleChoice,
            OptionMarker::List => ItemKind::List,
        }
    }
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    GridHeader {
        axis: GridAxis,
        kind: ItemKind,
    },
    ItemTitle {
        title: String,
        required: bool,
    },
    Section {
        title: String,
    },
    MainTitle {
        title: String,
    },
    ConfirmationMessage(String),
    /// Marks the pending item as paragraph text, or as short text for inline code.
    KindMarker(ItemKind),
    Option {
        marker: OptionMarker,
        label: String,
        target: Option<String>,
    },
    Scale(Scale),
    Description(String),
}

impl LineClass {
    /// Short tag used by the line inspection output.
    pub fn name(&self) -> &'static str {
        match self {
            LineClass::GridHeader { .. } => "grid-header",
            LineClass::ItemTitle { .. } => "item-title",
            LineClass::Section { .. } => "section",
            LineClass::MainTitle { .. } => "main-title",
            LineClass::ConfirmationMessage(_) => "confirmation",
            LineClass::KindMarker(_) => "kind-marker",
            LineClass::Option { .. } => "option",
            LineClass::Scale(_) => "scale",
            LineClass::Description(_) => "description",
        }
    }

    /// Whether the line is structural rather than free description text.
    pub fn is_structural(&self) -> bool {
        !matches!(self, LineClass::Description(_))
    }
}

/// Classify one trimmed, non-empty line.
pub fn classify(line: &str) -> LineClass {
    if let Some(caps) = GRID_HEADER.captures(line) {
        let kind = if caps.get(1).is_some() {
            ItemKind::CheckboxGrid
        } else {
            ItemKind::Grid
        };
        let axis = if caps[2].eq_ignore_ascii_case("rows") {
            GridAxis::Rows
        } else {
            GridAxis::Columns
        };
        return LineClass::GridHeader { axis, kind };
    }

    if let Some(caps) = ITEM_TITLE.captures(line) {
        let text = caps[1].trim();
        return match REQUIRED.captures(text) {
            Some(inner) => LineClass::ItemTitle {
                title: inner[1].trim().to_string(),
                required: true,
            },
            None => LineClass::ItemTitle {
                title: text.to_string(),
                required: false,
            },
        };
    }

    if let Some(caps) = SECTION.captures(line) {
        return LineClass::Section {
            title: caps[1].trim().to_string(),
        };
    }

    if let Some(caps) = MAIN_TITLE.captures(line) {
        return LineClass::MainTitle {
            title: caps[1].trim().to_string(),
        };
    }

    if let Some(caps) = CONFIRMATION.captures(line) {
        return LineClass::ConfirmationMessage(caps[1].to_string());
    }

    if line.starts_with("```") {
        return LineClass::KindMarker(ItemKind::ParagraphText);
    }

    if INLINE_CODE.is_match(line) {
        return LineClass::KindMarker(ItemKind::ShortText);
    }

    let options: [(&Lazy<Regex>, OptionMarker); 3] = [
        (&CHECKBOX_OPTION, OptionMarker::Checkbox),
        (&RADIO_OPTION, OptionMarker::Radio),
        (&LIST_OPTION, OptionMarker::List),
    ];
    for (pattern, marker) in options {
        if let Some(caps) = pattern.captures(line) {
            let (label, target) = split_navigation(caps[1].trim());
            return LineClass::Option {
                marker,
                label,
                target,
            };
        }
    }

    if let Some(caps) = SCALE.captures(line) {
        if let (Ok(min_value), Ok(max_value)) = (caps[2].parse(), caps[3].parse()) {
            return LineClass::Scale(Scale {
                min_value,
                max_value,
                min_label: caps[1].trim().to_string(),
                max_label: caps[4].trim().to_string(),
            });
        }
    }

    for (placeholder, kind) in DATE_FAMILY {
        if line.eq_ignore_ascii_case(placeholder) {
            return LineClass::KindMarker(*kind);
        }
    }

    LineClass::Description(line.to_string())
}

/// Split `text [target]` into a visible label and a section name.
fn split_navigation(label: &str) -> (String, Option<String>) {
    match NAVIGATION.captures(label) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].trim().to_string()),
        ),
        None => (label.to_string(), None),
    }
}
