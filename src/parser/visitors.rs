//! Data-driven visitors over parse trees
//!
//! Every visitor here is configured from the [`LanguageDef`] table instead
//! of hardcoding per-language node kinds. Visitors that keep `Node` values
//! past traversal carry the tree lifetime `'t`.

use std::collections::HashMap;

use tree_sitter::{Node, Point};

use crate::language::{LanguageDef, SymbolCategory};
use crate::parser::traversal::Visitor;

/// Node predicate narrowing an over-broad grammar kind (e.g. Ruby
/// `require` calls within the generic `call` kind).
pub type NodePredicate = fn(&Node<'_>, &[u8]) -> bool;

/// Collects the source text of nodes in one symbol category.
pub struct NodeCollector<'s> {
    targets: &'static [&'static str],
    predicate: Option<NodePredicate>,
    source: &'s [u8],
    texts: Vec<String>,
}

impl<'s> NodeCollector<'s> {
    pub fn new(def: &'static LanguageDef, category: SymbolCategory, source: &'s [u8]) -> Self {
        let predicate = match category {
            SymbolCategory::Imports => def.import_predicate,
            _ => None,
        };
        NodeCollector {
            targets: def.category_nodes(category),
            predicate,
            source,
            texts: Vec::new(),
        }
    }

    pub fn into_texts(self) -> Vec<String> {
        self.texts
    }

    fn matches(&self, node: &Node<'_>) -> bool {
        self.targets.contains(&node.kind())
            && self.predicate.map_or(true, |pred| pred(node, self.source))
    }
}

impl<'t, 's> Visitor<'t> for NodeCollector<'s> {
    fn visit(&mut self, node: &Node<'t>) {
        if !self.matches(node) {
            return;
        }
        if let Ok(text) = node.utf8_text(self.source) {
            self.texts.push(text.to_string());
        }
    }
}

/// Counts nodes per symbol category.
pub struct SymbolCounter<'s> {
    def: &'static LanguageDef,
    categories: Vec<SymbolCategory>,
    source: &'s [u8],
    counts: HashMap<SymbolCategory, usize>,
}

impl<'s> SymbolCounter<'s> {
    pub fn new(
        def: &'static LanguageDef,
        categories: Vec<SymbolCategory>,
        source: &'s [u8],
    ) -> Self {
        SymbolCounter {
            def,
            categories,
            source,
            counts: HashMap::new(),
        }
    }

    pub fn into_counts(self) -> HashMap<SymbolCategory, usize> {
        self.counts
    }
}

impl<'t, 's> Visitor<'t> for SymbolCounter<'s> {
    fn visit(&mut self, node: &Node<'t>) {
        for category in &self.categories {
            if !self.def.category_nodes(*category).contains(&node.kind()) {
                continue;
            }
            if *category == SymbolCategory::Imports {
                if let Some(pred) = self.def.import_predicate {
                    if !pred(node, self.source) {
                        continue;
                    }
                }
            }
            *self.counts.entry(*category).or_insert(0) += 1;
        }
    }
}

/// Extracts function signatures by slicing each function node up to the
/// start of its body node. The trailing delimiter of body-last languages
/// (Ruby's `end`) falls away with the body.
pub struct FunctionSignatureVisitor<'s> {
    targets: &'static [&'static str],
    body_kinds: &'static [&'static str],
    source: &'s [u8],
    signatures: Vec<String>,
}

impl<'s> FunctionSignatureVisitor<'s> {
    pub fn new(def: &'static LanguageDef, source: &'s [u8]) -> Self {
        FunctionSignatureVisitor {
            targets: def.function_nodes,
            body_kinds: def.function_body_nodes,
            source,
            signatures: Vec::new(),
        }
    }

    pub fn into_signatures(self) -> Vec<String> {
        self.signatures
    }
}

impl<'t, 's> Visitor<'t> for FunctionSignatureVisitor<'s> {
    fn visit(&mut self, node: &Node<'t>) {
        if !self.targets.contains(&node.kind()) {
            return;
        }

        let mut signature_end = node.end_byte();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if self.body_kinds.contains(&child.kind()) {
                signature_end = child.start_byte();
                break;
            }
        }

        let bytes = &self.source[node.start_byte()..signature_end];
        if let Ok(text) = std::str::from_utf8(bytes) {
            self.signatures.push(text.trim_end().to_string());
        }
    }
}

/// Collects every named node whose row span contains the target point,
/// then picks the highest-priority kind among them.
pub struct ContextCollector<'t> {
    target_point: Point,
    visited: Vec<Node<'t>>,
}

impl<'t> ContextCollector<'t> {
    pub fn new(target_point: Point) -> Self {
        ContextCollector {
            target_point,
            visited: Vec::new(),
        }
    }

    /// Pick the node whose kind ranks highest in `priority`; earlier kinds
    /// outrank later ones, and among equally ranked nodes the first one
    /// visited (the outermost, under pre-order traversal) wins.
    pub fn most_relevant(&self, priority: &[&str]) -> Option<Node<'t>> {
        let rank = |kind: &str| priority.iter().position(|p| *p == kind);

        let mut best: Option<(usize, Node<'t>)> = None;
        for node in &self.visited {
            let Some(node_rank) = rank(node.kind()) else {
                continue;
            };
            match best {
                Some((best_rank, _)) if best_rank <= node_rank => {}
                _ => best = Some((node_rank, *node)),
            }
        }
        best.map(|(_, node)| node)
    }
}

impl<'t> Visitor<'t> for ContextCollector<'t> {
    fn visit(&mut self, node: &Node<'t>) {
        if !node.is_named() {
            return;
        }
        let row = self.target_point.row;
        if node.start_position().row <= row && row <= node.end_position().row {
            self.visited.push(*node);
        }
    }
}

/// Finds the smallest block of at least `min_block_size` lines containing
/// the target point.
pub struct MinAllowedBlockVisitor<'t> {
    target_point: Point,
    min_block_size: usize,
    candidates: Vec<Node<'t>>,
}

impl<'t> MinAllowedBlockVisitor<'t> {
    pub fn new(target_point: Point, min_block_size: usize) -> Self {
        MinAllowedBlockVisitor {
            target_point,
            min_block_size,
            candidates: Vec::new(),
        }
    }

    fn point_included(&self, node: &Node<'t>) -> bool {
        let Point {
            row: target_row,
            column: target_col,
        } = self.target_point;
        let start = node.start_position();
        let end = node.end_position();

        if start.row == target_row {
            return start.column <= target_col;
        }
        if end.row == target_row {
            return end.column >= target_col;
        }
        start.row < target_row && target_row < end.row
    }

    /// The candidate with the smallest end point; ties go to the node
    /// visited last, which under pre-order traversal is the deepest.
    pub fn block(&self) -> Option<Node<'t>> {
        let mut best: Option<Node<'t>> = None;
        for node in &self.candidates {
            match best {
                Some(current) if node.end_position() > current.end_position() => {}
                _ => best = Some(*node),
            }
        }
        best
    }
}

impl<'t> Visitor<'t> for MinAllowedBlockVisitor<'t> {
    fn visit(&mut self, node: &Node<'t>) {
        let rows = node.end_position().row - node.start_position().row + 1;
        if rows >= self.min_block_size && self.point_included(node) {
            self.candidates.push(*node);
        }
    }
}

/// Collects the lowest-level error nodes: a containing error node is
/// dropped once a nested one is seen. Relies on pre-order traversal
/// visiting ancestors before descendants.
pub struct ErrorBlocksVisitor<'t> {
    error_nodes: Vec<Node<'t>>,
}

impl<'t> ErrorBlocksVisitor<'t> {
    pub fn new() -> Self {
        ErrorBlocksVisitor {
            error_nodes: Vec::new(),
        }
    }

    pub fn into_errors(self) -> Vec<Node<'t>> {
        self.error_nodes
    }
}

impl<'t> Default for ErrorBlocksVisitor<'t> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'t> Visitor<'t> for ErrorBlocksVisitor<'t> {
    fn visit(&mut self, node: &Node<'t>) {
        if !node.has_error() {
            return;
        }
        self.error_nodes.retain(|prev| {
            !(prev.start_position() <= node.start_position() && node.end_position() <= prev.end_position())
        });
        self.error_nodes.push(*node);
    }
}

/// Checks whether a tree consists solely of comments.
///
/// Any node outside the comment kinds (and the root) flips the answer and
/// aborts the walk.
pub struct CommentOnlyVisitor {
    allowed: Vec<&'static str>,
    comments_only: bool,
}

impl CommentOnlyVisitor {
    pub fn new(comment_kinds: &'static [&'static str], root_kind: &'static str) -> Self {
        let mut allowed = comment_kinds.to_vec();
        allowed.push(root_kind);
        CommentOnlyVisitor {
            allowed,
            comments_only: true,
        }
    }

    pub fn comments_only(&self) -> bool {
        self.comments_only
    }
}

impl<'t> Visitor<'t> for CommentOnlyVisitor {
    fn visit(&mut self, node: &Node<'t>) {
        if !self.allowed.contains(&node.kind()) {
            self.comments_only = false;
        }
    }

    fn stop_node_traversal(&self) -> bool {
        !self.comments_only
    }

    fn stop_tree_traversal(&self) -> bool {
        !self.comments_only
    }
}
