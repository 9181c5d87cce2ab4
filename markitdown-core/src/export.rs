//! Saving converted Markdown to disk.

use crate::error::FormatError;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when the caller does not pick one.
pub const DEFAULT_FILENAME: &str = "converted.md";

/// MIME type of exported files.
pub const MARKDOWN_MIME: &str = "text/markdown;charset=utf-8";

/// Where an export into `dir` ends up.
pub fn export_path(dir: impl AsRef<Path>, filename: Option<&str>) -> PathBuf {
    let filename = filename
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(DEFAULT_FILENAME);
    dir.as_ref().join(filename)
}

/// Write `markdown` to `path` as UTF-8, creating missing parent directories.
///
/// Returns the path that was written.
pub fn save_markdown(markdown: &str, path: impl AsRef<Path>) -> Result<PathBuf, FormatError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FormatError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, markdown.as_bytes()).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), bytes = markdown.len(), mime = MARKDOWN_MIME, "saved markdown");
    Ok(path.to_path_buf())
}
