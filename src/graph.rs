//! Nodes, edges, and the `Graph` trait the searches are written against.

use crate::errors::*;

use serde::ser::{Serialize, Serializer};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of identity handles for `Node`s.
static NEXT_NODE_ID: AtomicUsize = AtomicUsize::new(0);

/// A named vertex.
///
/// A `Node`'s identity is a handle assigned when it is constructed, not its
/// name: two calls to `Node::new("a")` produce two different nodes, while a
/// clone of a node is the same node. Every membership test in this crate
/// (`has_node`, adjacency lookups, cycle avoidance during search) goes through
/// `Eq` and `Hash`, which compare handles only.
#[derive(Clone, Debug)]
pub struct Node {
    id: usize,
    name: String
}

impl Node {
    pub fn new<S: Into<String>>(name: S) -> Node {
        Node {
            id: NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into()
        }
    }

    pub fn name(&self) -> &str { &self.name }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool { self.id == other.id }
}

impl Eq for Node { }

impl Hash for Node {
    fn hash<H>(&self, state: &mut H)
        where H: Hasher
    {
        self.id.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Nodes serialize as their names. The identity handle is meaningless
/// outside the process that assigned it.
impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.name)
    }
}

/// A directed arc from `source` to `destination`, possibly carrying a weight.
///
/// Weights are conventionally in `0.0 ..= 1.0`, but nothing checks that.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Edge {
    pub source: Node,
    pub destination: Node,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>
}

impl Edge {
    pub fn new(source: Node, destination: Node) -> Edge {
        Edge { source, destination, weight: None }
    }

    pub fn weighted(source: Node, destination: Node, weight: f64) -> Edge {
        Edge { source, destination, weight: Some(weight) }
    }

    /// Return the arc running the other way, with the same weight.
    pub fn reversed(&self) -> Edge {
        Edge {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.weight {
            None => write!(f, "{}->{}", self.source, self.destination),
            Some(w) => write!(f, "{}->({}){}", self.source, w, self.destination)
        }
    }
}

/// A graph of nodes and their children.
///
/// This is everything the path searches need to know about a graph.
pub trait Graph {
    /// Return true if `node` has been added to this graph.
    fn has_node(&self, node: &Node) -> bool;

    /// Return the children of `node`, in the order their edges were added.
    ///
    /// Fails with `ErrorKind::NodeNotFound` if `node` is not in the graph.
    fn children_of(&self, node: &Node) -> Result<Vec<Node>>;
}
