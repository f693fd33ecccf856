//! Small documents exercising one rule each.

use crate::common::{parse, section_titles};
use formdown::model::{resolve_references, Choice, ItemContent, ItemKind};
use formdown::{parse_form, FormError};

#[test]
fn test_main_title_is_stripped() {
    let form = parse("#    Customer Survey   \n### Name\n`n`\n");
    assert_eq!(form.title, "Customer Survey");
}

#[test]
fn test_second_main_title_fails() {
    let err = parse_form("# One\n### Q\n`a`\n\n# Two\n").unwrap_err();
    assert_eq!(
        err,
        FormError::DuplicateMainTitle {
            line: 5,
            title: "Two".to_string()
        }
    );
    assert!(err.to_string().contains("line 5"));
}

#[test]
fn test_back_to_back_main_titles_fail() {
    assert!(matches!(
        parse_form("# One\n# Two\n"),
        Err(FormError::DuplicateMainTitle { line: 2, .. })
    ));
}

#[test]
fn test_bold_item_title_is_required() {
    let form = parse("### **Email**\n`you@example.com`\n### Phone\n`123`\n");
    let items: Vec<_> = form.items().collect();
    assert_eq!(items[0].title, "Email");
    assert!(items[0].required);
    assert_eq!(items[1].title, "Phone");
    assert!(!items[1].required);
}

#[test]
fn test_forward_navigation_resolves() {
    let source = "\
# Trip
## Start
### Continue?
* Yes
* No [Goodbye]
## Middle
### Anything else?
```
## Goodbye
Thanks for your time.
";
    let form = parse(source);
    let question = &form.section("Start").unwrap().items[0];
    assert_eq!(
        question.content.choices(),
        &[Choice::plain("Yes"), Choice::navigating("No", "Goodbye")]
    );

    let index = resolve_references(&form).expect("Goodbye is declared");
    assert_eq!(index.position("Goodbye"), Some(2));
}

#[test]
fn test_missing_navigation_target_is_reported() {
    let form = parse("## A\n### Go\n* On [Nowhere]\n");
    match resolve_references(&form) {
        Err(FormError::UnresolvedNavigation(targets)) => {
            assert_eq!(targets.len(), 1);
            assert_eq!(targets[0].target, "Nowhere");
            assert_eq!(targets[0].item, "Go");
        }
        other => panic!("Expected unresolved navigation, got {other:?}"),
    }
}

#[test]
fn test_rows_header_fills_rows() {
    let form = parse("### Meals\n#### Rows\n- [ ] Lunch\n- [ ] Dinner\n#### Columns\n- [ ] Mon\n");
    let item = form.items().next().unwrap();
    match &item.content {
        ItemContent::Grid(grid) => {
            assert_eq!(grid.rows, vec!["Lunch", "Dinner"]);
            assert_eq!(grid.columns, vec!["Mon"]);
        }
        other => panic!("Expected a grid, got {other:?}"),
    }
    assert!(item.content.choices().is_empty());
}

#[test]
fn test_checkbox_rows_header_makes_checkbox_grid() {
    let form = parse("### Meals\n#### [ ] Rows\n- [ ] Lunch\n#### [ ] Columns\n- [ ] Mon\n");
    assert_eq!(form.items().next().unwrap().kind(), ItemKind::CheckboxGrid);
}

#[test]
fn test_sections_and_implicit_item() {
    let form = parse("# My Form\n## Section A\n### Name\n`answer`\n## Section B\n* Opt1\n* Opt2");

    assert_eq!(form.title, "My Form");
    assert_eq!(section_titles(&form), vec!["Section A", "Section B"]);

    let a = &form.sections[0];
    assert_eq!(a.items.len(), 1);
    assert_eq!(a.items[0].title, "Name");
    assert_eq!(a.items[0].kind(), ItemKind::ShortText);

    let b = &form.sections[1];
    assert_eq!(b.items.len(), 1);
    assert_eq!(b.items[0].title, "");
    assert_eq!(
        b.items[0].content,
        ItemContent::MultipleChoice {
            choices: vec![Choice::plain("Opt1"), Choice::plain("Opt2")]
        }
    );
}

#[test]
fn test_items_without_sections_share_one_implicit_section() {
    let form = parse("# Quick\n### One\n`a`\n### Two\n```\n### Three\nhh:mm\n");
    assert_eq!(form.sections.len(), 1);
    assert!(!form.sections[0].explicit);
    let titles: Vec<_> = form.items().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["One", "Two", "Three"]);
}

#[test]
fn test_unrecognized_lines_become_descriptions() {
    let form = parse("# F\nFirst\nSecond\n### Q\n* not [closed\n");
    assert_eq!(form.description, "Second");
    let item = form.items().next().unwrap();
    assert_eq!(item.content.choices(), &[Choice::plain("not [closed")]);
}

#[test]
fn test_each_parse_is_independent() {
    let source = "# A\n## S\n### Q\n* x\n";
    assert_eq!(parse(source), parse(source));
    assert!(parse_form("# B\n").is_ok());
    assert_eq!(parse(source).title, "A");
}
