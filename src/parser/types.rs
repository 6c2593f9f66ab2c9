//! Data types for the parser module

use serde::Serialize;
use thiserror::Error;

use crate::language::LanguageId;

// Re-export so callers can build points without importing tree-sitter directly
pub use tree_sitter::Point;

/// Errors that can occur during code parsing
#[derive(Error, Debug)]
pub enum ParserError {
    /// No grammar is available for the requested language (feature disabled
    /// or language not registered)
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(LanguageId),
    /// Source content could not be parsed (invalid UTF-8, or tree-sitter
    /// produced no tree)
    #[error("Malformed source: {0}")]
    MalformedSource(String),
}

/// A region of source code with its tree-sitter coordinates
///
/// Points are zero-indexed with byte columns, matching tree-sitter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeContext {
    pub text: String,
    #[serde(serialize_with = "serialize_point")]
    pub start: Point,
    #[serde(serialize_with = "serialize_point")]
    pub end: Point,
}

impl CodeContext {
    pub fn from_node(node: &tree_sitter::Node<'_>, source: &[u8]) -> Self {
        CodeContext {
            text: node.utf8_text(source).unwrap_or_default().to_string(),
            start: node.start_position(),
            end: node.end_position(),
        }
    }
}

fn serialize_point<S: serde::Serializer>(point: &Point, serializer: S) -> Result<S::Ok, S::Error> {
    use serde::ser::SerializeTuple;
    let mut tuple = serializer.serialize_tuple(2)?;
    tuple.serialize_element(&point.row)?;
    tuple.serialize_element(&point.column)?;
    tuple.end()
}
