//! Format trait and implementations for the page formats navspy can load.
//!
//! A format supplies the tree-sitter grammar for its source language and knows how to turn the
//! resulting syntax tree into a [`Document`].

pub mod html;

use crate::dom::Document;
use crate::error::{Error, Result};
use tracing::debug;

/// A source language that can be parsed into a document.
pub trait Format {
    /// File suffix this format is chosen for.
    fn file_extension(&self) -> &str;
    /// Tree-sitter grammar for the source language.
    fn language(&self) -> tree_sitter::Language;
    /// Builds a document from a parsed tree over `source`.
    fn build_document(&self, root: tree_sitter::Node<'_>, source: &[u8]) -> Document;
}

/// Parses `source` with `format`'s grammar and builds the document.
///
/// # Errors
///
/// Returns an error if the grammar cannot be loaded or the parser produces no tree.
pub fn parse_document(format: &impl Format, name: &str, source: &str) -> Result<Document> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&format.language())?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::Parse(name.to_string()))?;
    let root = tree.root_node();
    if root.has_error() {
        debug!(%name, "syntax errors in page, continuing with recovered tree");
    }
    Ok(format.build_document(root, source.as_bytes()))
}
