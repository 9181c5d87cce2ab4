//! Node model shared by the parser and the converter.
//!
//! The tree is owned and read-only from the converter's point of view: the
//! HTML parser builds one per conversion, the converter walks it, and it is
//! dropped afterwards.

pub mod nodes;
pub mod payload;

pub use nodes::{Document, ElementAttributes, ElementChildren, ElementNode, Node, TextNode};
pub use payload::ClipboardPayload;
