//! Shared helpers for the integration tests.

use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Markdown the release-notes fixture converts to.
///
/// Text nodes are trimmed one by one, so inline siblings lose the spaces between them,
/// and the image runs straight into the rule.
pub const RELEASE_NOTES_MARKDOWN: &str = "# Release notes\n\n\
This release adds**faster**parsing and*better*errors.\n\n\
- Bug fixes\n\
- New`--quiet`flag\n\n\
1. Download\n\
2. Install\n\n\
> Ship it.\n\n\
See[the changelog](https://example.com/changelog)  \nor ask.\n\n\
![Logo](logo.png)---\n\n\
```\ncargo install markitdown\n```";
