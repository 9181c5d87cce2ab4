//! Pasted HTML to Markdown, with a rendered preview
//!
//!     This crate turns the rich text a user pastes (the clipboard's HTML flavor, or its
//!     plain-text fallback) into Markdown, and renders that Markdown back to HTML so it can be
//!     previewed.
//!
//!     This is a pure lib: it powers the markitdown-cli but is shell agnostic, that is no code
//!     here supposes a shell environment, be it stdout printing, env vars etc. The one
//!     exception is [`export`], which writes the converted file where it is told to.
//!
//! Architecture
//!
//!     The pipeline has three stages, each owned by a module:
//!
//!     payload ──parse──▶ node tree ──convert──▶ Markdown ──render──▶ preview HTML
//!
//!     - Parsing is done by html5ever (./formats/html/parser.rs). We never write an HTML
//!       parser, we copy the parsed body into the small owned node model in ./dom.
//!     - Converting is the only piece with real semantics (./formats/markdown/serializer.rs):
//!       a structural fold that maps a fixed tag set to Markdown fragments.
//!     - Rendering is done by comrak (./preview.rs). We only choose options.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── dom                     # Owned node model and clipboard payload
//!     ├── formats
//!     │   ├── html
//!     │   │   ├── parser.rs       # html5ever → node tree
//!     │   │   └── mod.rs          # HtmlFormat: parse input, serialize preview
//!     │   └── markdown
//!     │       ├── serializer.rs   # The converter
//!     │       └── mod.rs          # MarkdownFormat
//!     ├── preview.rs              # comrak rendering
//!     ├── export.rs               # converted.md on disk
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     ├── lib.rs                  # aggregates the folders below
//!     ├── html                    # parse + preview, end to end
//!     ├── markdown                # paste → Markdown, end to end, and properties
//!     └── fixtures
//!
//! Conversion Rules
//!
//!     The converter is total: any tree, or none at all, produces a string. Unknown tags pass
//!     their children through, missing attributes become empty strings. See the mapping table
//!     in ./formats/markdown/mod.rs.
//!
//!     Conversion is not CommonMark-complete. Tables, definition lists and entity handling
//!     beyond what the parser decodes are out of scope, and pasted HTML is not sanitized.
//!
pub mod dom;
pub mod error;
pub mod export;
pub mod format;
pub mod formats;
pub mod preview;
pub mod registry;

pub use dom::{ClipboardPayload, Document, Node};
pub use error::FormatError;
pub use format::Format;
pub use formats::markdown::{convert, MarkdownTag};
pub use preview::{render_preview, PreviewOptions};
pub use registry::FormatRegistry;

/// Parse HTML, convert its body, and trim the result once.
///
/// This is the whole paste flow in one call.
pub fn html_to_markdown(html: &str) -> String {
    formats::markdown::serialize_to_markdown(&formats::html::parse_html(html))
}

/// [`html_to_markdown`] on whichever flavor of the payload wins.
pub fn payload_to_markdown(payload: &ClipboardPayload) -> String {
    formats::markdown::serialize_to_markdown(&formats::html::parse_payload(payload))
}
