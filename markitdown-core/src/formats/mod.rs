//! Format implementations
//!
//! This module contains the format implementations that move documents in and out of
//! the node model.

pub mod html;
pub mod markdown;

pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
