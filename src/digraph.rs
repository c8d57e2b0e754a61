//! Adjacency-list storage for directed and undirected graphs.

use crate::errors::*;
use crate::graph::{Edge, Graph, Node};

use std::collections::HashMap;
use std::fmt;

/// Whether a `Digraph` mirrors its edges.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Kind {
    /// Edges run one way only.
    Directed,

    /// Every edge added is accompanied by its reverse, so the adjacency
    /// relation is symmetric.
    Undirected
}

/// A graph that grows one node or edge at a time.
///
/// Nodes are kept in insertion order. Each node's outgoing arcs are kept in
/// the order they were added, duplicates included; that order is the order in
/// which `children_of` reports children, and so the order in which the
/// searches explore them.
///
/// There are no removal operations.
#[derive(Clone, Debug)]
pub struct Digraph {
    kind: Kind,

    /// Every node in the graph, in the order added.
    nodes: Vec<Node>,

    /// The outgoing arcs of each node. Every node in `nodes` has an entry
    /// here, possibly empty, and nothing else does.
    edges: HashMap<Node, Vec<Edge>>
}

impl Digraph {
    /// Construct an empty directed graph.
    pub fn new() -> Digraph { Digraph::with_kind(Kind::Directed) }

    /// Construct an empty undirected graph.
    pub fn undirected() -> Digraph { Digraph::with_kind(Kind::Undirected) }

    pub fn with_kind(kind: Kind) -> Digraph {
        Digraph { kind, nodes: Vec::new(), edges: HashMap::new() }
    }

    pub fn kind(&self) -> Kind { self.kind }

    /// Add `node` to the graph, with no edges.
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if self.edges.contains_key(&node) {
            bail!(ErrorKind::DuplicateNode(node.name().to_owned()));
        }
        trace!("add node {}", node);
        self.edges.insert(node.clone(), Vec::new());
        self.nodes.push(node);
        Ok(())
    }

    /// Add `edge` to the graph. Both endpoints must already be present.
    ///
    /// On an undirected graph, this also adds the reverse arc, carrying the
    /// same weight.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        for endpoint in &[&edge.source, &edge.destination] {
            if !self.has_node(endpoint) {
                bail!(ErrorKind::NodeNotFound(endpoint.name().to_owned()));
            }
        }

        trace!("add edge {}", edge);
        if self.kind == Kind::Undirected {
            let reverse = edge.reversed();
            self.arcs_mut(&edge.source).push(edge);
            self.arcs_mut(&reverse.source).push(reverse);
        } else {
            self.arcs_mut(&edge.source).push(edge);
        }
        Ok(())
    }

    /// Return the arc list for `node`, which the caller has checked is present.
    fn arcs_mut(&mut self, node: &Node) -> &mut Vec<Edge> {
        self.edges.entry(node.clone()).or_insert_with(Vec::new)
    }

    /// Return the arcs leaving `node`, weights included.
    pub fn edges_from(&self, node: &Node) -> Result<&[Edge]> {
        match self.edges.get(node) {
            Some(arcs) => Ok(arcs),
            None => Err(ErrorKind::NodeNotFound(node.name().to_owned()).into())
        }
    }

    /// Return this graph's nodes, in the order they were added.
    pub fn nodes(&self) -> &[Node] { &self.nodes }

    pub fn node_count(&self) -> usize { self.nodes.len() }

    /// Return the number of stored arcs. On an undirected graph each added
    /// edge counts twice.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Return the first node added with the name `name`, if any.
    pub fn node_named(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.name() == name)
    }
}

impl Default for Digraph {
    fn default() -> Digraph { Digraph::new() }
}

impl Graph for Digraph {
    fn has_node(&self, node: &Node) -> bool {
        self.edges.contains_key(node)
    }

    fn children_of(&self, node: &Node) -> Result<Vec<Node>> {
        Ok(self.edges_from(node)?
           .iter()
           .map(|edge| edge.destination.clone())
           .collect())
    }
}

/// One `source->destination` line per arc, nodes in insertion order, with
/// no trailing newline.
impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for src in &self.nodes {
            for edge in &self.edges[src] {
                if !first {
                    f.write_str("\n")?;
                }
                first = false;
                write!(f, "{}->{}", src, edge.destination)?;
            }
        }
        Ok(())
    }
}
