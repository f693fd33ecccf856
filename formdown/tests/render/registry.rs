//! Renderer discovery and the other output formats.

use crate::common::{fixture, parse};
use formdown::{convert, FormError, RendererRegistry};
use serde_json::Value;
use std::collections::HashMap;

#[test]
fn test_default_renderers() {
    let registry = RendererRegistry::default();
    assert_eq!(
        registry.list_renderers(),
        vec!["apps-script", "json", "treeviz"]
    );
    assert_eq!(
        registry.detect_renderer_from_filename("form.gs"),
        Some("apps-script".to_string())
    );
    assert_eq!(
        registry.detect_renderer_from_filename("form.json"),
        Some("json".to_string())
    );
    assert_eq!(registry.detect_renderer_from_filename("form.txt"), None);
}

#[test]
fn test_unknown_renderer() {
    let result = convert("# F\n", "pdf", &HashMap::new());
    assert_eq!(result, Err(FormError::RendererNotFound("pdf".to_string())));
}

#[test]
fn test_options_rejected_by_json() {
    let mut options = HashMap::new();
    options.insert("pretty".to_string(), "false".to_string());
    assert!(matches!(
        convert("# F\n", "json", &options),
        Err(FormError::NotSupported(_))
    ));
}

#[test]
fn test_json_of_sample() {
    let json = convert(&fixture("sample.md"), "json", &HashMap::new()).unwrap();
    let value: Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["title"], "Event Registration");
    let about = &value["sections"][0];
    assert_eq!(about["title"], "About you");
    assert_eq!(about["items"][0]["kind"], "short_text");
    assert_eq!(about["items"][0]["required"], true);
    assert_eq!(
        about["items"][3]["choices"][1]["navigation_target"],
        "Feedback"
    );
}

#[test]
fn test_treeviz_of_sample() {
    let tree = RendererRegistry::default()
        .render(&parse(&fixture("sample.md")), "treeviz")
        .unwrap();
    assert!(tree.starts_with("⧉ Event Registration (3 sections, 8 items)\n"));
    assert!(tree.contains("§ About you (revisited)"));
    assert!(tree.contains("✎ Full name [short text] *"));
    assert!(tree.contains("• No, skip to feedback → [Feedback]"));
}
