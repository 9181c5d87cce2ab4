//! HTML format tests
//!
//! Parsing pasted HTML into the node tree, and rendering the preview.

mod import;
mod preview;
