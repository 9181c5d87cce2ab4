//! Markdown format tests
//!
//! End-to-end paste conversions and the converter's algebraic properties.

mod paste;
mod properties;
