//! Icon mapping for the tree visualization

use crate::model::ItemKind;

/// Icons for the nodes of a form tree
pub fn get_icon(node_type: &str) -> &'static str {
    match node_type {
        "Form" => "⧉",
        "Section" => "§",
        "Description" => "↵",
        "Choice" => "•",
        "Row" => "→",
        "Column" => "↓",
        "Bounds" => "⇔",
        _ => "○",
    }
}

/// Icon for an item, by kind
pub fn item_icon(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::TitleAndDescription => "¶",
        ItemKind::ShortText => "✎",
        ItemKind::ParagraphText => "≡",
        ItemKind::MultipleChoice => "◉",
        ItemKind::Checkbox => "☑",
        ItemKind::List => "▾",
        ItemKind::Scale => "⇔",
        ItemKind::Date => "▦",
        ItemKind::Time => "◷",
        ItemKind::DateTime => "⌚",
        ItemKind::Duration => "⧗",
        ItemKind::Grid => "▤",
        ItemKind::CheckboxGrid => "▥",
    }
}
