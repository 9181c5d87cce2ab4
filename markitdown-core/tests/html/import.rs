//! Import tests for HTML format (HTML → node tree)

use crate::common::read_fixture;
use insta::assert_snapshot;
use markitdown_core::format::Format;
use markitdown_core::formats::html::{parse_html, parse_payload, HtmlFormat};
use markitdown_core::{ClipboardPayload, Node};

#[test]
fn test_fixture_body_structure() {
    let doc = HtmlFormat::default()
        .parse(&read_fixture("clipboard-release-notes.html"))
        .unwrap();
    let body = doc.body.expect("body");

    let tags: Vec<_> = body.element_children().filter_map(Node::tag_name).collect();
    assert_eq!(
        tags,
        vec!["h1", "p", "ul", "ol", "blockquote", "p", "img", "hr", "pre"]
    );
}

#[test]
fn test_fixture_attributes_survive() {
    let body = parse_html(&read_fixture("clipboard-release-notes.html"))
        .body
        .unwrap();

    let img = body
        .element_children()
        .find(|node| node.tag_name() == Some("img"))
        .unwrap();
    assert_eq!(img.attribute("src"), Some("logo.png"));
    assert_eq!(img.attribute("alt"), Some("Logo"));
    assert!(img.children().is_empty());
}

#[test]
fn test_node_tree_json() {
    let body = parse_html("<a href='x'>y</a><!-- gone -->").body.unwrap();
    assert_snapshot!(
        serde_json::to_string(&body).unwrap(),
        @r#"{"kind":"element","tag_name":"body","children":[{"kind":"element","tag_name":"a","attributes":{"href":"x"},"children":[{"kind":"text","content":"y"}]}]}"#
    );
}

#[test]
fn test_malformed_markup_is_repaired_by_parser() {
    let body = parse_html("<p>one<p>two<b>bold").body.unwrap();
    let tags: Vec<_> = body.element_children().filter_map(Node::tag_name).collect();
    assert_eq!(tags, vec!["p", "p"]);
    assert_eq!(
        body.children()[1].children()[1],
        Node::element("b").with_child(Node::text("bold"))
    );
}

#[test]
fn test_plain_text_payload_is_parsed_as_html() {
    let payload = ClipboardPayload::from_text("a < b & c");
    let body = parse_payload(&payload).body.unwrap();
    assert_eq!(body.children(), &[Node::text("a < b & c")]);
}
