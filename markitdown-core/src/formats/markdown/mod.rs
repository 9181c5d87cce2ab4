//! Markdown format implementation
//!
//! Serializes a parsed [`Document`] to Markdown. This is the direction a paste
//! takes: HTML is parsed into the node tree, the body is folded into Markdown by
//! [`serializer::convert`], and the result is trimmed once at the top level.
//!
//! # Element Mapping Table
//!
//! | HTML                 | Markdown                     | Notes                                 |
//! |----------------------|------------------------------|---------------------------------------|
//! | `h1`..`h6`           | `# ` .. `###### ` + blank    |                                       |
//! | `p`                  | text + blank line            |                                       |
//! | `br`                 | two spaces + newline         | children ignored                      |
//! | `hr`                 | `---` + blank line           | children ignored                      |
//! | `strong`, `b`        | `**text**`                   |                                       |
//! | `em`, `i`            | `*text*`                     |                                       |
//! | `code`               | `` `text` ``                 |                                       |
//! | `pre`                | fenced block                 | no info string                        |
//! | `a`                  | `[text](href)`               | missing href → `()`                   |
//! | `img`                | `![alt](src)`                | children ignored                      |
//! | `ul` / `ol`          | `- item` / `1. item`         | direct element children only          |
//! | `li`                 | text                         | marker comes from the list            |
//! | `blockquote`         | `> text` + blank line        | only the first line is prefixed       |
//! | anything else        | text                         | passthrough                           |
//!
//! # Lossy Conversions
//!
//! - Whitespace between inline siblings is dropped: each text node is trimmed on its own
//! - Nested lists are flattened into their parent item's text
//! - Tables, definition lists and attributes other than href/src/alt are lost
//!
//! Markdown import is not supported.

pub mod serializer;

use crate::dom::Document;
use crate::error::FormatError;
use crate::format::Format;

pub use serializer::{convert, MarkdownTag};

/// Format implementation for Markdown
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown converted from pasted HTML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_markdown(doc))
    }
}

/// Convert a document's body to Markdown, trimmed once at the top level.
pub fn serialize_to_markdown(doc: &Document) -> String {
    if doc.body.is_none() {
        tracing::warn!("document has no body, producing empty markdown");
    }
    let markdown = convert(doc.body.as_ref()).trim().to_string();
    tracing::debug!(bytes = markdown.len(), "serialized document to markdown");
    markdown
}
