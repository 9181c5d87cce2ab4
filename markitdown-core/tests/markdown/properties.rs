//! Structural properties of the converter over generated node trees

use markitdown_core::{convert, Node};
use proptest::prelude::*;

const TAGS: &[&str] = &[
    "h1", "h3", "p", "br", "hr", "strong", "b", "em", "i", "code", "pre", "a", "img", "ul",
    "ol", "li", "blockquote", "div", "span", "body", "section", "table",
];

fn arb_tag() -> impl Strategy<Value = &'static str> {
    prop::sample::select(TAGS)
}

fn arb_node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        "[a-z ]{0,8}".prop_map(|content| Node::text(content)),
        arb_tag().prop_map(|tag| Node::element(tag)),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        (arb_tag(), prop::collection::vec(inner, 0..4))
            .prop_map(|(tag, children)| Node::element(tag).with_children(children))
    })
}

fn render(node: &Node) -> String {
    convert(Some(node))
}

proptest! {
    #[test]
    fn text_is_trimmed(content in "\\PC{0,16}") {
        let node = Node::text(content.clone());
        prop_assert_eq!(render(&node), content.trim());
    }

    #[test]
    fn void_like_tags_ignore_children(children in prop::collection::vec(arb_node(), 0..4)) {
        let br = Node::element("br").with_children(children.clone());
        prop_assert_eq!(render(&br), "  \n");

        let hr = Node::element("hr").with_children(children.clone());
        prop_assert_eq!(render(&hr), "---\n\n");

        let img = Node::element("img")
            .with_attribute("src", "a.png")
            .with_attribute("alt", "A")
            .with_children(children);
        prop_assert_eq!(render(&img), "![A](a.png)");
    }

    #[test]
    fn unknown_wrappers_are_transparent(
        node in arb_node(),
        wrapper in prop::sample::select(vec!["div", "span", "section", "li", "font"]),
    ) {
        let wrapped = Node::element(wrapper).with_child(node.clone());
        let expected = render(&node);
        prop_assert_eq!(render(&wrapped), expected.trim());
    }

    #[test]
    fn strong_wraps_trimmed_content(node in arb_node()) {
        let strong = Node::element("strong").with_child(node.clone());
        prop_assert_eq!(render(&strong), format!("**{}**", render(&node).trim()));
    }

    #[test]
    fn single_item_list(node in arb_node()) {
        let list = Node::element("ul").with_child(Node::element("li").with_child(node.clone()));
        prop_assert_eq!(render(&list), format!("- {}\n\n", render(&node).trim()));
    }

    #[test]
    fn list_text_children_are_skipped(node in arb_node(), stray in "[a-z]{1,8}") {
        let list = Node::element("ol").with_children([
            Node::text(stray),
            Node::element("li").with_child(node.clone()),
        ]);
        prop_assert_eq!(render(&list), format!("1. {}\n\n", render(&node).trim()));
    }

    #[test]
    fn conversion_is_deterministic(node in arb_node()) {
        prop_assert_eq!(render(&node), render(&node.clone()));
    }
}
