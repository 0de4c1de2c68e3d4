//! Error type shared by the loader, the page adapter and the binary.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
/// Everything that can go wrong between reading a page and highlighting it.
pub enum Error {
    /// Reading a page or config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// The tree-sitter grammar could not be loaded into the parser.
    #[error("failed to load grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The parser gave up without producing a tree.
    #[error("failed to parse {0}")]
    Parse(String),
    /// A structural element the page contract relies on is absent.
    #[error("page has no {0}")]
    MissingElement(&'static str),
    /// A setting is out of range.
    #[error("invalid {0}")]
    InvalidConfig(String),
    /// The headless report could not be serialised.
    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
