//! Tree traversal orders decoupled from node inspection
//!
//! Visitors receive nodes; traversal functions own the walk. The two
//! advisory flags on [`Visitor`] let an implementation prune a subtree or
//! abort the walk without knowing anything about cursors.

use std::collections::VecDeque;

use tree_sitter::{Node, Tree};

/// Node inspection callback for [`tree_bfs`] and [`tree_dfs`]
///
/// The lifetime ties collected nodes to the tree being walked, so a
/// visitor may hold on to `Node` values after traversal finishes.
pub trait Visitor<'t> {
    fn visit(&mut self, node: &Node<'t>);

    /// Skip the current node's children (honored by DFS)
    fn stop_node_traversal(&self) -> bool {
        false
    }

    /// Abort the whole walk (honored by DFS)
    fn stop_tree_traversal(&self) -> bool {
        false
    }
}

/// Level-order traversal of `node`'s descendants, bounded by `max_depth`.
///
/// Depth 0 is the immediate children; a negative `max_depth` removes the
/// bound. The root itself is not visited.
pub fn tree_bfs<'t, V: Visitor<'t>>(node: &Node<'t>, visitor: &mut V, max_depth: i32) {
    let mut depth: i32 = 0;

    let mut cursor = node.walk();
    let mut current_level: VecDeque<Node<'t>> = node.children(&mut cursor).collect();
    let mut next_level: VecDeque<Node<'t>> = VecDeque::new();

    while let Some(current) = current_level.pop_front() {
        visitor.visit(&current);

        let mut child_cursor = current.walk();
        next_level.extend(current.children(&mut child_cursor));

        if current_level.is_empty() {
            if next_level.is_empty() {
                break;
            }
            depth += 1;
            if max_depth >= 0 && depth > max_depth {
                break;
            }
            current_level.append(&mut next_level);
        }
    }
}

/// Visit cap for [`tree_dfs`], guarding against degenerate trees from
/// adversarial or machine-generated sources.
const MAX_VISIT_COUNT: usize = 100_000;

/// Pre-order traversal of the whole tree, starting at the root.
///
/// Honors both visitor stop flags: `stop_node_traversal` skips the current
/// node's subtree, `stop_tree_traversal` ends the walk before the next
/// visit.
pub fn tree_dfs<'t, V: Visitor<'t>>(tree: &'t Tree, visitor: &mut V) {
    let mut cursor = tree.walk();
    let mut visit_count = 0;
    let mut has_next = true;

    while has_next && visit_count < MAX_VISIT_COUNT {
        if visitor.stop_tree_traversal() {
            break;
        }

        let node = cursor.node();
        visitor.visit(&node);
        visit_count += 1;

        has_next = !visitor.stop_node_traversal() && cursor.goto_first_child();

        if !has_next {
            has_next = cursor.goto_next_sibling();
        }

        while !has_next && cursor.goto_parent() {
            has_next = cursor.goto_next_sibling();
        }
    }
}
