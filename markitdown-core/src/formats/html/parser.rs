//! HTML parsing (HTML source → node tree)
//!
//! Pipeline: HTML string → html5ever → RcDom → owned [`Node`] tree rooted at `<body>`.
//!
//! html5ever runs the HTML5 tree builder with the implied `html`/`head`/`body` wrappers,
//! so plain text and fragments both end up under a body. Scripting is off, as it is for
//! documents built by `DOMParser`: `<noscript>` content is parsed as markup, not raw text.

use crate::dom::{ClipboardPayload, Document, ElementAttributes, ElementNode, Node};
use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parse an HTML string into a [`Document`].
pub fn parse_html(source: &str) -> Document {
    let dom = parse_dom(source);

    let Some(body) = find_body(&dom.document) else {
        tracing::warn!("parsed HTML has no body element");
        return Document::new(None);
    };

    let body = copy_tree(&body);
    tracing::debug!(bytes = source.len(), "parsed HTML into node tree");
    Document::new(Some(body))
}

/// Parse whichever flavor of a clipboard payload wins.
pub fn parse_payload(payload: &ClipboardPayload) -> Document {
    parse_html(payload.source())
}

fn parse_dom(source: &str) -> RcDom {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            drop_doctype: true,
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    parse_document(RcDom::default(), opts).one(source)
}

fn find_body(document: &Handle) -> Option<Handle> {
    let html = child_element(document, "html")?;
    child_element(&html, "body")
}

fn child_element(parent: &Handle, name: &str) -> Option<Handle> {
    parent
        .children
        .borrow()
        .iter()
        .find(|child| element_name(child).as_deref() == Some(name))
        .cloned()
}

fn element_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_string()),
        _ => None,
    }
}

enum Step {
    Enter(Handle),
    /// Build the element once its children are on the output stack from `start` on.
    Exit { handle: Handle, start: usize },
}

/// Copy an RcDom subtree into owned nodes.
///
/// Comments, doctypes and processing instructions produce nothing. Template contents are
/// not children in the DOM and are skipped as well.
fn copy_tree(root: &Handle) -> Node {
    let mut work = vec![Step::Enter(root.clone())];
    let mut built: Vec<Node> = Vec::new();

    while let Some(step) = work.pop() {
        match step {
            Step::Enter(handle) => match &handle.data {
                NodeData::Text { contents } => {
                    built.push(Node::text(contents.borrow().to_string()));
                }
                NodeData::Element { .. } => {
                    let start = built.len();
                    let children: Vec<Handle> = handle.children.borrow().iter().cloned().collect();
                    work.push(Step::Exit {
                        handle: handle.clone(),
                        start,
                    });
                    work.extend(children.into_iter().rev().map(Step::Enter));
                }
                NodeData::Document
                | NodeData::Doctype { .. }
                | NodeData::Comment { .. }
                | NodeData::ProcessingInstruction { .. } => {}
            },
            Step::Exit { handle, start } => {
                let children = built.split_off(start);
                built.push(build_element(&handle, children));
            }
        }
    }

    built.pop().unwrap_or_else(|| Node::element("body"))
}

fn build_element(handle: &Handle, children: Vec<Node>) -> Node {
    let NodeData::Element { name, attrs, .. } = &handle.data else {
        return Node::element("body").with_children(children);
    };

    let attributes: ElementAttributes = attrs
        .borrow()
        .iter()
        .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
        .collect();

    Node::Element(ElementNode {
        tag_name: name.local.to_string(),
        attributes,
        children,
    })
}
