//! Paths through a graph, and how to print them.

use crate::graph::Node;

/// A sequence of nodes, each a child of the one before.
///
/// Paths returned by the searches are simple: no node appears twice.
pub type Path = Vec<Node>;

/// Render `path` as `"a->b->c"`. An empty path renders as the empty string.
pub fn print_path(path: &[Node]) -> String {
    path.iter()
        .map(Node::name)
        .collect::<Vec<_>>()
        .join("->")
}

/// Return the number of edges `path` traverses.
pub fn hop_count(path: &[Node]) -> usize {
    path.len().saturating_sub(1)
}
