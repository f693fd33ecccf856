//! The event registration fixture, parsed end to end.

use crate::common::{fixture, parse, section_titles};
use formdown::model::{resolve_references, unresolved_targets, ItemContent, ItemKind, Scale};

#[test]
fn test_sample_header() {
    let form = parse(&fixture("sample.md"));
    assert_eq!(form.title, "Event Registration");
    assert_eq!(
        form.description,
        "Tell us about yourself so we can plan the day."
    );
    assert_eq!(form.confirmation_message, "Thanks! See you there.");
}

#[test]
fn test_sample_sections_end_in_heading_order() {
    let form = parse(&fixture("sample.md"));
    // Declared up front by option lines, then each `##` moves its section to the end.
    assert_eq!(
        section_titles(&form),
        vec!["About you", "Workshops", "Feedback"]
    );
    assert!(form.sections.iter().all(|s| s.explicit && s.revisited));
    assert_eq!(
        form.section("About you").unwrap().description,
        "A few basic details."
    );
}

#[test]
fn test_sample_item_kinds() {
    let form = parse(&fixture("sample.md"));
    let kinds: Vec<_> = form.items().map(|i| i.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ItemKind::ShortText,
            ItemKind::ParagraphText,
            ItemKind::Date,
            ItemKind::MultipleChoice,
            ItemKind::Checkbox,
            ItemKind::Grid,
            ItemKind::Scale,
            ItemKind::List,
        ]
    );
    assert_eq!(form.items().filter(|i| i.required).count(), 1);
}

#[test]
fn test_sample_scale_and_grid() {
    let form = parse(&fixture("sample.md"));
    let feedback = form.section("Feedback").unwrap();
    assert_eq!(
        feedback.items[0].content,
        ItemContent::Scale(Scale {
            min_value: 1,
            max_value: 10,
            min_label: "Unlikely".to_string(),
            max_label: "Very likely".to_string(),
        })
    );

    let workshops = form.section("Workshops").unwrap();
    match &workshops.items[1].content {
        ItemContent::Grid(grid) => {
            assert_eq!(grid.rows, vec!["Morning", "Afternoon"]);
            assert_eq!(grid.columns, vec!["Day one", "Day two"]);
        }
        other => panic!("Expected a grid, got {other:?}"),
    }
}

#[test]
fn test_sample_navigation_resolves() {
    let form = parse(&fixture("sample.md"));
    assert!(unresolved_targets(&form).is_empty());
    let index = resolve_references(&form).unwrap();
    assert_eq!(index.len(), 3);
}
