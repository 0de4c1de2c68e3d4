//! Reading pages from disk.

use crate::dom::Document;
use crate::error::Result;
use crate::formats::{self, Format};
use std::fs;
use std::path::Path;
use tracing::info;

/// Loads and parses the page at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_page(path: &Path, format: &impl Format) -> Result<Document> {
    let source = fs::read_to_string(path)?;
    let name = path.display().to_string();
    let doc = formats::parse_document(format, &name, &source)?;
    info!(path = %name, bytes = source.len(), "page loaded");
    Ok(doc)
}

#[must_use]
/// Whether `path` has the extension `format` handles (case-insensitive).
pub fn matches_format(path: &Path, format: &impl Format) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(format.file_extension()))
}

#[cfg(test)]
#[path = "tests/input.rs"]
mod tests;
