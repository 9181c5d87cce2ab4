//! Owned node tree handed to the converter.

use serde::Serialize;
use std::collections::BTreeMap;

pub type ElementChildren = Vec<Node>;
pub type ElementAttributes = BTreeMap<String, String>;

/// A unit of a parsed HTML tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Text(TextNode),
    Element(ElementNode),
}

/// Literal textual content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextNode {
    pub content: String,
}

/// A tagged element with ordered children and attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementNode {
    pub tag_name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: ElementAttributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: ElementChildren,
}

/// Result of parsing an HTML payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    /// The root content node, absent only when the parser produced no body.
    pub body: Option<Node>,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(TextNode {
            content: content.into(),
        })
    }

    pub fn element(tag_name: impl Into<String>) -> Self {
        Node::Element(ElementNode {
            tag_name: tag_name.into(),
            attributes: ElementAttributes::new(),
            children: ElementChildren::new(),
        })
    }

    /// Set an attribute. No-op on text nodes.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element(element) = &mut self {
            element.attributes.insert(name.into(), value.into());
        }
        self
    }

    /// Append a child. No-op on text nodes.
    pub fn with_child(mut self, child: Node) -> Self {
        if let Node::Element(element) = &mut self {
            element.children.push(child);
        }
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element(element) = &mut self {
            element.children.extend(children);
        }
        self
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Element(element) => Some(&element.tag_name),
            Node::Text(_) => None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element(element) => element.attributes.get(name).map(String::as_str),
            Node::Text(_) => None,
        }
    }

    /// All children, text included. Empty for text nodes.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element(element) => &element.children,
            Node::Text(_) => &[],
        }
    }

    /// Direct element children only, in document order.
    pub fn element_children(&self) -> impl Iterator<Item = &Node> {
        self.children().iter().filter(|child| child.is_element())
    }
}

impl Document {
    pub fn new(body: Option<Node>) -> Self {
        Self { body }
    }
}

// Pasted HTML can nest arbitrarily deep; the default recursive drop would
// overflow the stack on such trees.
impl Drop for ElementNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            if let Node::Element(element) = &mut node {
                pending.append(&mut element.children);
            }
        }
    }
}
