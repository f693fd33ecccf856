//! Property tests: the classifier and parser never panic, and only a second
//! `#` heading can make a parse fail.

use formdown::parser::classify;
use formdown::renderers::{render_script, ScriptOptions};
use formdown::{parse_form, FormError};
use proptest::prelude::*;

fn dialect_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,20}".prop_map(|t| format!("## {t}")),
        "[a-zA-Z ]{0,20}".prop_map(|t| format!("### {t}")),
        "[a-zA-Z ]{1,20}".prop_map(|t| format!("### **{t}**")),
        "[a-zA-Z ]{1,20}".prop_map(|t| format!("* {t}")),
        "[a-zA-Z ]{1,20}".prop_map(|t| format!("- [ ] {t}")),
        "[a-zA-Z ]{1,20}".prop_map(|t| format!("- {t}")),
        ("[a-zA-Z ]{1,10}", "[a-zA-Z ]{1,10}").prop_map(|(l, s)| format!("* {l} [{s}]")),
        Just("#### Rows".to_string()),
        Just("#### [ ] Columns".to_string()),
        Just("`short`".to_string()),
        Just("```".to_string()),
        Just("dd/mm/yyyy".to_string()),
        Just("Low 1 --- 5 High".to_string()),
        "[a-zA-Z_ ]{0,30}",
    ]
}

proptest! {
    #[test]
    fn classify_never_panics(line in "\\PC{0,60}") {
        prop_assume!(!line.trim().is_empty());
        let _ = classify(line.trim());
    }

    #[test]
    fn parse_without_main_title_never_fails(lines in prop::collection::vec(dialect_line(), 0..40)) {
        let source = lines.join("\n");
        let form = parse_form(&source);
        prop_assert!(form.is_ok());
    }

    #[test]
    fn only_duplicate_titles_fail(
        lines in prop::collection::vec(dialect_line(), 0..20),
        titles in 0usize..3,
    ) {
        let mut all: Vec<String> = (0..titles).map(|i| format!("# Title {i}")).collect();
        all.extend(lines);
        match parse_form(&all.join("\n")) {
            Ok(_) => prop_assert!(titles < 2),
            Err(FormError::DuplicateMainTitle { .. }) => prop_assert!(titles >= 2),
            Err(other) => prop_assert!(false, "unexpected error {other:?}"),
        }
    }

    #[test]
    fn rendering_is_deterministic(lines in prop::collection::vec(dialect_line(), 0..30)) {
        let form = parse_form(&lines.join("\n")).unwrap();
        let options = ScriptOptions::default();
        prop_assert_eq!(render_script(&form, &options), render_script(&form, &options));
    }
}
