//! Paste flow tests (HTML payload → Markdown)

use crate::common::{read_fixture, RELEASE_NOTES_MARKDOWN};
use insta::assert_snapshot;
use markitdown_core::{html_to_markdown, payload_to_markdown, ClipboardPayload};

#[test]
fn test_release_notes_fixture() {
    let markdown = html_to_markdown(&read_fixture("clipboard-release-notes.html"));
    assert_eq!(markdown, RELEASE_NOTES_MARKDOWN);
}

#[test]
fn test_heading_and_paragraph() {
    assert_snapshot!(html_to_markdown("<h2>Sub</h2><p>text</p>"), @r"
    ## Sub

    text
    ");
}

#[test]
fn test_nested_list_is_flattened_into_item() {
    let html = "<ul><li>outer<ul><li>inner</li></ul></li><li>two</li></ul>";
    assert_snapshot!(html_to_markdown(html), @r"
    - outer- inner
    - two
    ");
}

#[test]
fn test_blockquote_prefixes_first_line_only() {
    let html = "<blockquote><p>one</p><p>two</p></blockquote>";
    assert_snapshot!(html_to_markdown(html), @r"
    > one

    two
    ");
}

#[test]
fn test_code_inside_pre_keeps_backticks() {
    let html = "<pre><code>let x = 1;\nlet y = 2;</code></pre>";
    assert_snapshot!(html_to_markdown(html), @r"
    ```
    `let x = 1;
    let y = 2;`
    ```
    ");
}

#[test]
fn test_inline_spacing_is_lost() {
    assert_eq!(
        html_to_markdown("<p>Hello <b>world</b> again</p>"),
        "Hello**world**again"
    );
}

#[test]
fn test_link_without_href() {
    assert_eq!(html_to_markdown("<a>bare</a>"), "[bare]()");
}

#[test]
fn test_image_without_attributes() {
    assert_eq!(html_to_markdown("<img>"), "![]()");
}

#[test]
fn test_ordered_list_numbers_from_one() {
    assert_eq!(
        html_to_markdown("<ol start=\"5\"><li>a</li><li>b</li><li>c</li></ol>"),
        "1. a\n2. b\n3. c"
    );
}

#[test]
fn test_unknown_tags_pass_through() {
    assert_eq!(
        html_to_markdown("<section><article><mark>kept</mark></article></section>"),
        "kept"
    );
}

#[test]
fn test_noscript_content_is_kept() {
    assert_eq!(html_to_markdown("<noscript><b>x</b></noscript>"), "**x**");
}

#[test]
fn test_line_break_between_texts() {
    assert_eq!(html_to_markdown("<p>one<br>two</p>"), "one  \ntwo");
}

#[test]
fn test_plain_text_payload() {
    let payload = ClipboardPayload::from_text("  just words  ");
    assert_eq!(payload_to_markdown(&payload), "just words");
}

#[test]
fn test_html_flavor_wins() {
    let payload = ClipboardPayload::new(Some("<b>x</b>".into()), Some("x".into()));
    assert_eq!(payload_to_markdown(&payload), "**x**");
}

#[test]
fn test_empty_payload() {
    assert_eq!(payload_to_markdown(&ClipboardPayload::default()), "");
    assert_eq!(html_to_markdown(""), "");
}
