//! Markdown serialization (node tree → Markdown fragment)
//!
//! A structural fold over the node tree. Each element's children are
//! rendered in document order, concatenated and trimmed into `inner`, and the
//! element's tag decides how `inner` is wrapped. Text nodes contribute their
//! trimmed content.
//!
//! The walk keeps its own work stack instead of recursing, so a paste with
//! pathological nesting cannot exhaust the call stack.

use crate::dom::{ElementNode, Node};

/// The tag set the converter knows how to format.
///
/// Everything else is [`MarkdownTag::Passthrough`], which renders the
/// children unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkdownTag {
    /// `h1`..`h6`
    Heading(usize),
    Paragraph,
    LineBreak,
    Rule,
    /// `strong`, `b`
    Strong,
    /// `em`, `i`
    Emphasis,
    Code,
    Preformatted,
    Link,
    Image,
    UnorderedList,
    OrderedList,
    ListItem,
    Blockquote,
    /// `div`, `span`
    Container,
    Passthrough,
}

impl MarkdownTag {
    /// Classify a tag name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "h1" => MarkdownTag::Heading(1),
            "h2" => MarkdownTag::Heading(2),
            "h3" => MarkdownTag::Heading(3),
            "h4" => MarkdownTag::Heading(4),
            "h5" => MarkdownTag::Heading(5),
            "h6" => MarkdownTag::Heading(6),
            "p" => MarkdownTag::Paragraph,
            "br" => MarkdownTag::LineBreak,
            "hr" => MarkdownTag::Rule,
            "strong" | "b" => MarkdownTag::Strong,
            "em" | "i" => MarkdownTag::Emphasis,
            "code" => MarkdownTag::Code,
            "pre" => MarkdownTag::Preformatted,
            "a" => MarkdownTag::Link,
            "img" => MarkdownTag::Image,
            "ul" => MarkdownTag::UnorderedList,
            "ol" => MarkdownTag::OrderedList,
            "li" => MarkdownTag::ListItem,
            "blockquote" => MarkdownTag::Blockquote,
            "div" | "span" => MarkdownTag::Container,
            _ => MarkdownTag::Passthrough,
        }
    }

    /// Tags whose output does not depend on their children.
    pub fn ignores_children(self) -> bool {
        matches!(
            self,
            MarkdownTag::LineBreak | MarkdownTag::Rule | MarkdownTag::Image
        )
    }
}

enum Step<'a> {
    Enter(&'a Node),
    Exit(&'a ElementNode, MarkdownTag),
}

/// Convert a node and its subtree to a Markdown fragment.
///
/// Total over its input: an absent node gives `""`, unknown tags pass their
/// children through, missing attributes become empty strings. The result
/// is not trimmed; callers trim the top-level output once.
pub fn convert(node: Option<&Node>) -> String {
    let Some(root) = node else {
        return String::new();
    };

    let mut work = vec![Step::Enter(root)];
    // Rendered fragments of finished nodes. When an element exits, its
    // children's fragments sit on top, in document order.
    let mut fragments: Vec<String> = Vec::new();

    while let Some(step) = work.pop() {
        match step {
            Step::Enter(Node::Text(text)) => {
                fragments.push(text.content.trim().to_string());
            }
            Step::Enter(Node::Element(element)) => {
                let tag = MarkdownTag::from_name(&element.tag_name);
                if tag.ignores_children() {
                    fragments.push(render_leaf(tag, element));
                } else {
                    work.push(Step::Exit(element, tag));
                    work.extend(element.children.iter().rev().map(Step::Enter));
                }
            }
            Step::Exit(element, tag) => {
                let start = fragments.len().saturating_sub(element.children.len());
                let children = fragments.split_off(start);
                fragments.push(render_element(tag, element, &children));
            }
        }
    }

    fragments.pop().unwrap_or_default()
}

fn render_leaf(tag: MarkdownTag, element: &ElementNode) -> String {
    match tag {
        MarkdownTag::LineBreak => "  \n".to_string(),
        MarkdownTag::Rule => "---\n\n".to_string(),
        MarkdownTag::Image => format!(
            "![{}]({})",
            attribute_or_empty(element, "alt"),
            attribute_or_empty(element, "src")
        ),
        _ => String::new(),
    }
}

/// `children` holds one rendered fragment per entry of `element.children`.
fn render_element(tag: MarkdownTag, element: &ElementNode, children: &[String]) -> String {
    let inner = children.concat();
    let inner = inner.trim();

    match tag {
        MarkdownTag::Heading(level) => format!("{} {inner}\n\n", "#".repeat(level)),
        MarkdownTag::Paragraph => format!("{inner}\n\n"),
        MarkdownTag::Strong => format!("**{inner}**"),
        MarkdownTag::Emphasis => format!("*{inner}*"),
        MarkdownTag::Code => format!("`{inner}`"),
        MarkdownTag::Preformatted => format!("```\n{inner}\n```\n"),
        MarkdownTag::Link => format!("[{inner}]({})", attribute_or_empty(element, "href")),
        MarkdownTag::UnorderedList => {
            render_list(list_items(element, children).map(|item| format!("- {item}")))
        }
        MarkdownTag::OrderedList => render_list(
            list_items(element, children)
                .enumerate()
                .map(|(index, item)| format!("{}. {item}", index + 1)),
        ),
        MarkdownTag::Blockquote => format!("> {inner}\n\n"),
        MarkdownTag::ListItem | MarkdownTag::Container | MarkdownTag::Passthrough => {
            inner.to_string()
        }
        MarkdownTag::LineBreak | MarkdownTag::Rule | MarkdownTag::Image => {
            render_leaf(tag, element)
        }
    }
}

/// Fragments of the direct element children, each trimmed on its own.
///
/// This is what converting each child again and trimming would produce,
/// since conversion is pure.
fn list_items<'a>(
    element: &'a ElementNode,
    children: &'a [String],
) -> impl Iterator<Item = &'a str> {
    element
        .children
        .iter()
        .zip(children)
        .filter(|(node, _)| node.is_element())
        .map(|(_, fragment)| fragment.trim())
}

fn render_list(items: impl Iterator<Item = String>) -> String {
    let mut out = items.collect::<Vec<_>>().join("\n");
    out.push_str("\n\n");
    out
}

fn attribute_or_empty<'a>(element: &'a ElementNode, name: &str) -> &'a str {
    element
        .attributes
        .get(name)
        .map(String::as_str)
        .unwrap_or("")
}
