//! Code parsing with tree-sitter
//!
//! Split into submodules:
//! - `types` — data structures and error types
//! - `traversal` — BFS/DFS walks decoupled from visitors
//! - `visitors` — table-driven node visitors
//!
//! [`CodeParser`] is the facade tying them together: one parsed tree,
//! queried through visitor runs.

pub mod traversal;
pub mod types;
pub mod visitors;

pub use traversal::{tree_bfs, tree_dfs, Visitor};
pub use types::{CodeContext, ParserError, Point};

use std::collections::HashMap;

use crate::language::{LanguageDef, LanguageId, SymbolCategory};
use crate::ops;
use visitors::{
    CommentOnlyVisitor, ContextCollector, ErrorBlocksVisitor, FunctionSignatureVisitor,
    MinAllowedBlockVisitor, NodeCollector, SymbolCounter,
};

/// Minimum line count for a block returned by [`CodeParser::min_allowed_context`]
pub const MIN_BLOCK_SIZE: usize = 2;

/// A parsed source buffer queried through tree visitors
///
/// # Example
///
/// ```no_run
/// use codeprompt::{CodeParser, LanguageId};
///
/// let parser = CodeParser::from_language_id("import os\n", LanguageId::Python)?;
/// assert_eq!(parser.imports(), vec!["import os".to_string()]);
/// # Ok::<(), codeprompt::ParserError>(())
/// ```
pub struct CodeParser {
    tree: tree_sitter::Tree,
    source: String,
    def: &'static LanguageDef,
}

impl CodeParser {
    /// Parse `content` with the grammar registered for `lang_id`.
    ///
    /// Tree-sitter always yields a tree for UTF-8 input, error nodes
    /// included, so broken code still parses; `MalformedSource` covers the
    /// pathological cases where it yields none.
    pub fn from_language_id(
        content: impl Into<String>,
        lang_id: LanguageId,
    ) -> Result<Self, ParserError> {
        let source = content.into();
        let def = lang_id
            .def()
            .ok_or(ParserError::UnsupportedLanguage(lang_id))?;

        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&(def.grammar)())
            .map_err(|_| ParserError::UnsupportedLanguage(lang_id))?;

        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| ParserError::MalformedSource("tree-sitter produced no tree".into()))?;

        Ok(CodeParser { tree, source, def })
    }

    /// Parse raw bytes, rejecting invalid UTF-8.
    pub fn from_bytes(content: &[u8], lang_id: LanguageId) -> Result<Self, ParserError> {
        let source = std::str::from_utf8(content)
            .map_err(|e| ParserError::MalformedSource(e.to_string()))?;
        Self::from_language_id(source, lang_id)
    }

    pub fn language(&self) -> LanguageId {
        self.def.id
    }

    /// Import statements in document order
    pub fn imports(&self) -> Vec<String> {
        let mut collector =
            NodeCollector::new(self.def, SymbolCategory::Imports, self.source.as_bytes());
        tree_dfs(&self.tree, &mut collector);
        collector.into_texts()
    }

    /// Function signatures with bodies stripped
    pub fn function_signatures(&self) -> Vec<String> {
        let mut visitor = FunctionSignatureVisitor::new(self.def, self.source.as_bytes());
        tree_dfs(&self.tree, &mut visitor);
        visitor.into_signatures()
    }

    /// Count symbols per category; `None` counts all categories.
    ///
    /// Categories with no occurrences are absent from the result.
    pub fn count_symbols(
        &self,
        categories: Option<&[SymbolCategory]>,
    ) -> HashMap<SymbolCategory, usize> {
        let categories = categories.unwrap_or(SymbolCategory::ALL).to_vec();
        let mut counter = SymbolCounter::new(self.def, categories, self.source.as_bytes());
        tree_dfs(&self.tree, &mut counter);
        counter.into_counts()
    }

    /// Text from `point` to the end of its enclosing context construct.
    ///
    /// Returns `None` when the language declares no context node kinds or
    /// no declared construct spans the point.
    pub fn suffix_near_cursor(&self, point: Point) -> Option<String> {
        if self.def.context_nodes.is_empty() {
            return None;
        }

        let mut collector = ContextCollector::new(point);
        tree_dfs(&self.tree, &mut collector);
        let node = collector.most_relevant(self.def.context_nodes)?;

        let text = node.utf8_text(self.source.as_bytes()).ok()?;
        let relative = ops::relative_point_in_node(&node, point);
        let (_, suffix) = ops::split_on_point(text, relative)?;
        Some(suffix.to_string())
    }

    /// Smallest multi-line block containing `point`, or the whole tree when
    /// no such block exists.
    pub fn min_allowed_context(&self, point: Point) -> CodeContext {
        let mut visitor = MinAllowedBlockVisitor::new(point, MIN_BLOCK_SIZE);
        tree_dfs(&self.tree, &mut visitor);

        let source = self.source.as_bytes();
        match visitor.block() {
            Some(node) => CodeContext::from_node(&node, source),
            None => CodeContext::from_node(&self.tree.root_node(), source),
        }
    }

    /// Whether the source consists solely of comments
    pub fn comments_only(&self) -> bool {
        let mut visitor =
            CommentOnlyVisitor::new(self.def.comment_nodes, self.tree.root_node().kind());
        tree_dfs(&self.tree, &mut visitor);
        visitor.comments_only()
    }

    /// Lowest-level syntax error regions
    pub fn errors(&self) -> Vec<CodeContext> {
        let mut visitor = ErrorBlocksVisitor::new();
        tree_dfs(&self.tree, &mut visitor);

        let source = self.source.as_bytes();
        visitor
            .into_errors()
            .iter()
            .map(|node| CodeContext::from_node(node, source))
            .collect()
    }
}
