//! Shortest paths in small graphs, found two ways.
//!
//! Build a `Digraph` (directed, or undirected with every edge mirrored), add
//! `Node`s and `Edge`s, then ask `search::shortest_path` (depth-first, branch
//! and bound) or `search::bfs` (breadth-first) for a shortest path between two
//! nodes. `path::print_path` renders the answer as `a->b->c`.
//!
//! The `recursion` module holds unrelated small exercises in recursion.

// `error_chain!` can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

#[cfg(test)]
#[macro_use]
mod test_utils;

pub mod digraph;
pub mod errors;
pub mod graph;
pub mod path;
pub mod random;
pub mod recursion;
pub mod search;
pub mod square;
pub mod xorshift;

pub use crate::digraph::{Digraph, Kind};
pub use crate::graph::{Edge, Graph, Node};
pub use crate::path::{print_path, Path};
pub use crate::search::{bfs, shortest_path};
