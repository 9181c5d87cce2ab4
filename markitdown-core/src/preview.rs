//! Markdown → HTML preview
//!
//! The preview is rendered from the Markdown text, not from the pasted HTML, so edits to the
//! Markdown show up in it. Rendering is delegated to `comrak`; this module only picks options.

use crate::error::FormatError;
use comrak::{markdown_to_html, ComrakOptions};
use std::collections::HashMap;

/// Rendering knobs for the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewOptions {
    pub table: bool,
    pub strikethrough: bool,
    pub autolink: bool,
    pub tasklist: bool,
    /// Pass raw HTML in the Markdown through instead of omitting it. Not a sanitizer.
    pub raw_html: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            table: true,
            strikethrough: true,
            autolink: true,
            tasklist: true,
            raw_html: false,
        }
    }
}

impl PreviewOptions {
    /// Parameter names understood by [`PreviewOptions::with_params`].
    pub const PARAMS: &'static [&'static str] =
        &["table", "strikethrough", "autolink", "tasklist", "raw-html"];

    /// Start from `self` and apply string parameters (`--extra-*` style).
    ///
    /// Unknown keys are ignored; known keys must hold a boolean.
    pub fn with_params(mut self, params: &HashMap<String, String>) -> Result<Self, FormatError> {
        for (key, value) in params {
            let slot = match key.as_str() {
                "table" => &mut self.table,
                "strikethrough" => &mut self.strikethrough,
                "autolink" => &mut self.autolink,
                "tasklist" => &mut self.tasklist,
                "raw-html" => &mut self.raw_html,
                _ => continue,
            };
            *slot = parse_bool(key, value)?;
        }
        Ok(self)
    }

    fn comrak_options(&self) -> ComrakOptions<'static> {
        let mut options = ComrakOptions::default();
        options.extension.table = self.table;
        options.extension.strikethrough = self.strikethrough;
        options.extension.autolink = self.autolink;
        options.extension.tasklist = self.tasklist;
        options.render.unsafe_ = self.raw_html;
        options
    }
}

/// Render Markdown to an HTML fragment.
pub fn render_preview(markdown: &str, options: &PreviewOptions) -> String {
    let html = markdown_to_html(markdown, &options.comrak_options());
    tracing::debug!(
        markdown_bytes = markdown.len(),
        html_bytes = html.len(),
        "rendered markdown preview"
    );
    html
}

/// Read a boolean parameter. Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `y`/`n`.
pub fn parse_bool(key: &str, raw: &str) -> Result<bool, FormatError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(FormatError::InvalidOption {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}
