//! HTML format implementation
//!
//! HTML is both the input and, through the preview, an output:
//!
//! - Import (HTML → Document): the pasted payload is parsed with `html5ever` into an
//!   `RcDom`, and the `<body>` subtree is copied into the owned node model (see
//!   [`parser`]).
//! - Export (Document → HTML): the document is first converted to Markdown, then rendered
//!   with `comrak` (see [`crate::preview`]). Going through Markdown means the preview shows
//!   exactly what the Markdown will look like, not the original markup.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for parsing:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Malformed markup is repaired the way a browser would, which is the only recovery the
//! converter relies on.
//!
//! # Parameters
//!
//! Serialization accepts the preview parameters listed in [`PreviewOptions::PARAMS`].

pub mod parser;

use crate::dom::Document;
use crate::error::FormatError;
use crate::format::Format;
use crate::formats::markdown::serialize_to_markdown;
use crate::preview::{render_preview, PreviewOptions};
use std::collections::HashMap;

pub use parser::{parse_html, parse_payload};

/// Format implementation for HTML
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlFormat {
    preview: PreviewOptions,
}

impl HtmlFormat {
    pub fn new(preview: PreviewOptions) -> Self {
        Self { preview }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML input, and a preview rendered from the converted Markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_html(source))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(render_preview(&serialize_to_markdown(doc), &self.preview))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let preview = self.preview.with_params(options)?;
        Ok(render_preview(&serialize_to_markdown(doc), &preview))
    }
}
