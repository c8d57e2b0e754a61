/// Utilities for tests.

use crate::digraph::{Digraph, Kind};
use crate::graph::{Edge, Graph, Node};

use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FromIterator;

/// If `left` and `right` hold the same elements, ignoring order and repetition,
/// return `None`. Otherwise, return `Some(left_only, right_only)`, where
/// `left_only` and `right_only` are vectors of the elements appearing only one
/// one side or the other.
pub fn diff_elements<T: Clone + Hash + Eq>(left: &[T], right: &[T])
    -> Option<(HashSet<T>, HashSet<T>)>
{
    let left: HashSet<_> = FromIterator::from_iter(left.iter().cloned());
    let right: HashSet<_> = FromIterator::from_iter(right.iter().cloned());
    if left == right {
        None
    } else {
        Some((HashSet::from_iter(left.difference(&right).cloned()),
              HashSet::from_iter(right.difference(&left).cloned())))
    }
}

/// Take ownership of LEFT and RIGHT, and assert that they hold the same
/// elements, ignoring order and repetition.
macro_rules! assert_same_elements {
    ($left:expr, $right:expr) => ({
        let left = $left;
        let right = $right;
        if let Some((left_only, right_only)) = $crate::test_utils::diff_elements(&left, &right) {
            panic!("assertion failed: left and right have different elements:\n\
                    left has only `{:#?}`,\n\
                    right has only `{:#?}`",
                   left_only, right_only);
        }
    });
}

/// Build a graph of `count` nodes named `"0"`, `"1"`, ..., with an edge for
/// each pair of indices in `edges`. Return the graph and its nodes.
pub fn graph_from_pairs(kind: Kind, count: usize, edges: &[(usize, usize)])
    -> (Digraph, Vec<Node>)
{
    let nodes: Vec<Node> = (0..count).map(|i| Node::new(i.to_string())).collect();
    let mut graph = Digraph::with_kind(kind);
    for node in &nodes {
        graph.add_node(node.clone()).unwrap();
    }
    for &(src, dest) in edges {
        graph.add_edge(Edge::new(nodes[src].clone(), nodes[dest].clone())).unwrap();
    }
    (graph, nodes)
}

/// The six-node directed graph from the classic shortest-path exercise. The
/// only three-hop path from 0 to 5 is 0->2->3->5.
pub fn six_node_graph() -> (Digraph, Vec<Node>) {
    graph_from_pairs(Kind::Directed, 6,
                     &[(0, 1), (1, 2), (2, 3), (2, 4), (3, 4),
                       (3, 5), (0, 2), (1, 0), (3, 1), (4, 0)])
}

/// Assert that `path` is simple and that each step follows an arc of `graph`.
pub fn assert_valid_path<G: Graph>(graph: &G, path: &[Node]) {
    let distinct: HashSet<&Node> = path.iter().collect();
    assert_eq!(distinct.len(), path.len(), "path revisits a node");
    for pair in path.windows(2) {
        assert!(graph.children_of(&pair[0]).unwrap().contains(&pair[1]),
                "no arc {}->{}", pair[0], pair[1]);
    }
}
