//! Random graphs, reproducible from a seed.

use crate::digraph::{Digraph, Kind};
use crate::errors::*;
use crate::graph::{Edge, Node};

use rand::Rng;

/// Build a graph of `count` nodes named `"0"`, `"1"`, ..., where each ordered
/// pair of distinct nodes is joined by an edge with probability
/// `edge_probability`.
///
/// On an undirected graph each unordered pair gets one chance, since adding
/// either direction adds both. Candidate edges are considered in row-major
/// order, so a given generator state always produces the same graph with the
/// same adjacency order.
pub fn random_graph<R: Rng>(rng: &mut R, count: usize, edge_probability: f64, kind: Kind)
                            -> Result<Digraph>
{
    if !(0.0..=1.0).contains(&edge_probability) {
        bail!("edge probability {} is not between 0 and 1", edge_probability);
    }

    let nodes: Vec<Node> = (0..count).map(|i| Node::new(i.to_string())).collect();
    let mut graph = Digraph::with_kind(kind);
    for node in &nodes {
        graph.add_node(node.clone())?;
    }

    for (i, src) in nodes.iter().enumerate() {
        for (j, dest) in nodes.iter().enumerate() {
            if i == j || (kind == Kind::Undirected && j < i) {
                continue;
            }
            if rng.gen_bool(edge_probability) {
                graph.add_edge(Edge::new(src.clone(), dest.clone()))?;
            }
        }
    }

    debug!("random graph: {} nodes, {} arcs", graph.node_count(), graph.edge_count());
    Ok(graph)
}

/// Return the `index`'th node added to `graph`.
pub fn node_at(graph: &Digraph, index: usize) -> Result<&Node> {
    graph.nodes()
        .get(index)
        .ok_or_else(|| ErrorKind::BadNodeIndex(index, graph.node_count()).into())
}

#[cfg(test)]
mod tests {
    use crate::digraph::Kind;
    use crate::errors::ErrorKind;
    use crate::graph::Graph;
    use crate::xorshift::XorShift128Plus;
    use super::{node_at, random_graph};

    #[test]
    fn reproducible() {
        let a = random_graph(&mut XorShift128Plus::from_u64(7), 10, 0.3, Kind::Directed).unwrap();
        let b = random_graph(&mut XorShift128Plus::from_u64(7), 10, 0.3, Kind::Directed).unwrap();
        // Different nodes, but the same names and the same shape.
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn extremes() {
        let mut rng = XorShift128Plus::from_u64(1);

        let empty = random_graph(&mut rng, 5, 0.0, Kind::Directed).unwrap();
        assert_eq!(empty.node_count(), 5);
        assert_eq!(empty.edge_count(), 0);

        let full = random_graph(&mut rng, 5, 1.0, Kind::Directed).unwrap();
        assert_eq!(full.edge_count(), 20);
        let first = node_at(&full, 0).unwrap();
        assert_same_elements!(full.children_of(first).unwrap(),
                              full.nodes()[1..].to_vec());

        let full = random_graph(&mut rng, 5, 1.0, Kind::Undirected).unwrap();
        assert_eq!(full.edge_count(), 20);
    }

    #[test]
    fn no_self_loops() {
        let mut rng = XorShift128Plus::from_u64(99);
        let g = random_graph(&mut rng, 12, 0.5, Kind::Directed).unwrap();
        for node in g.nodes() {
            assert!(!g.children_of(node).unwrap().contains(node));
        }
    }

    #[test]
    fn bad_probability() {
        let mut rng = XorShift128Plus::from_u64(1);
        assert!(random_graph(&mut rng, 3, 1.5, Kind::Directed).is_err());
        assert!(random_graph(&mut rng, 3, -0.1, Kind::Directed).is_err());
    }

    #[test]
    fn bad_index() {
        let mut rng = XorShift128Plus::from_u64(1);
        let g = random_graph(&mut rng, 3, 0.5, Kind::Directed).unwrap();
        assert_eq!(node_at(&g, 2).unwrap().name(), "2");
        match *node_at(&g, 3).unwrap_err().kind() {
            ErrorKind::BadNodeIndex(3, 3) => (),
            ref other => panic!("unexpected error: {}", other)
        }
    }
}
