//! Export tests for HTML format (node tree → Markdown → preview HTML)

use crate::common::{read_fixture, RELEASE_NOTES_MARKDOWN};
use markitdown_core::{render_preview, FormatRegistry, PreviewOptions};
use std::collections::HashMap;

fn fixture_preview(options: &HashMap<String, String>) -> String {
    let registry = FormatRegistry::default();
    let doc = registry
        .parse(&read_fixture("clipboard-release-notes.html"), "html")
        .unwrap();
    registry.serialize_with_options(&doc, "html", options).unwrap()
}

#[test]
fn test_preview_matches_rendered_markdown() {
    let via_registry = fixture_preview(&HashMap::new());
    let direct = render_preview(RELEASE_NOTES_MARKDOWN, &PreviewOptions::default());
    assert_eq!(via_registry, direct);
}

#[test]
fn test_preview_contains_converted_elements() {
    let html = fixture_preview(&HashMap::new());

    assert!(html.contains("<h1>Release notes</h1>"));
    assert!(html.contains("<strong>faster</strong>"));
    assert!(html.contains("<em>better</em>"));
    assert!(html.contains("<li>Bug fixes</li>"));
    assert!(html.contains("<li>New<code>--quiet</code>flag</li>"));
    assert!(html.contains("<ol>"));
    assert!(html.contains("<li>Download</li>"));
    assert!(html.contains("<blockquote>"));
    assert!(html.contains("<a href=\"https://example.com/changelog\">the changelog</a><br />"));
    assert!(html.contains("<img src=\"logo.png\" alt=\"Logo\" />"));
    assert!(html.contains("<pre><code>cargo install markitdown\n</code></pre>"));
}

#[test]
fn test_preview_raw_html_option() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("<p>&lt;u&gt;x&lt;/u&gt;</p>", "html").unwrap();

    let safe = registry.serialize(&doc, "html").unwrap();
    assert!(!safe.contains("<u>x</u>"));

    let mut options = HashMap::new();
    options.insert("raw-html".to_string(), "true".to_string());
    let raw = registry.serialize_with_options(&doc, "html", &options).unwrap();
    assert!(raw.contains("<u>x</u>"));
}
