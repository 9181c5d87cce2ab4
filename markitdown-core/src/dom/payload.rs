//! Clipboard payload flavors.

/// The two flavors a paste event can carry.
///
/// Both flavors are parsed as HTML; plain text simply ends up as text nodes
/// under the body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardPayload {
    pub html: Option<String>,
    pub text: Option<String>,
}

impl ClipboardPayload {
    pub fn new(html: Option<String>, text: Option<String>) -> Self {
        Self { html, text }
    }

    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            text: None,
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            html: None,
            text: Some(text.into()),
        }
    }

    /// The HTML flavor when non-empty, else the plain-text flavor, else `""`.
    pub fn source(&self) -> &str {
        [self.html.as_deref(), self.text.as_deref()]
            .into_iter()
            .flatten()
            .find(|flavor| !flavor.is_empty())
            .unwrap_or("")
    }
}
