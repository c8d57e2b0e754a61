//! Shortest-path search by hop count.
//!
//! Two searches answer the same question, "what is a shortest path from
//! `start` to `end`?", in different ways:
//!
//! - `shortest_path` is a depth-first branch-and-bound search. It walks every
//!   simple path out of `start` in adjacency order, remembering the best
//!   complete path found so far, and abandons any partial path that is already
//!   as long as that best. It is exponential in the worst case.
//!
//! - `bfs` explores partial paths in level order, so the first complete path
//!   it finds is a shortest one.
//!
//! Both avoid cycles only within the path being extended: a node may appear on
//! many different partial paths, but never twice on the same one.
//!
//! Neither search treats "no path" as an error; they return `Ok(None)`. They
//! fail only if `start` is not in the graph.
//!
//! Each search takes a `Trace`, which is shown every partial path as the
//! search visits it. `NoTrace` ignores them; `LogTrace` logs them.

use crate::errors::*;
use crate::graph::{Graph, Node};
use crate::path::{print_path, Path};

use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Which search is reporting to a `Trace`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Algorithm {
    Dfs,
    Bfs
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match *self {
            Algorithm::Dfs => "DFS",
            Algorithm::Bfs => "BFS"
        })
    }
}

/// An observer of a search's progress.
pub trait Trace {
    /// Called each time `algorithm` visits `path`, the root-to-frontier path
    /// it is currently extending or testing.
    fn visit(&mut self, algorithm: Algorithm, path: &[Node]);
}

/// A `Trace` that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl Trace for NoTrace {
    fn visit(&mut self, _algorithm: Algorithm, _path: &[Node]) { }
}

/// A `Trace` that logs each visited path at `Debug` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogTrace;

impl Trace for LogTrace {
    fn visit(&mut self, algorithm: Algorithm, path: &[Node]) {
        debug!("Current {} path: {}", algorithm, print_path(path));
    }
}

impl<F> Trace for F
    where F: FnMut(Algorithm, &[Node]) + ?Sized
{
    fn visit(&mut self, algorithm: Algorithm, path: &[Node]) {
        (*self)(algorithm, path)
    }
}

fn check_start<G: Graph + ?Sized>(graph: &G, start: &Node) -> Result<()> {
    if graph.has_node(start) {
        Ok(())
    } else {
        Err(ErrorKind::NodeNotFound(start.name().to_owned()).into())
    }
}

/// Find a shortest path from `start` to `end` by depth-first search.
pub fn shortest_path<G>(graph: &G, start: &Node, end: &Node) -> Result<Option<Path>>
    where G: Graph + ?Sized
{
    shortest_path_traced(graph, start, end, &mut NoTrace)
}

/// A node on the depth-first search's stack, and how far through its
/// children we've gotten.
struct Frame {
    children: Vec<Node>,
    next: usize
}

/// Like `shortest_path`, but show `trace` every path visited.
///
/// This visits paths in exactly the order the natural recursive formulation
/// would, but keeps its stack on the heap: `path` holds the nodes along the
/// current branch, and `stack` holds one `Frame` for each of them.
///
/// A child is pushed only if it isn't already on the current path, and only
/// while the current path is strictly shorter than the best complete path
/// found so far. Reaching `end` replaces the best path unconditionally; the
/// length check guarantees the replacement is no longer than what it replaces.
/// So among several shortest paths, the last one found in adjacency order is
/// the one returned.
pub fn shortest_path_traced<G, T>(graph: &G, start: &Node, end: &Node, trace: &mut T)
                                  -> Result<Option<Path>>
    where G: Graph + ?Sized,
          T: Trace + ?Sized
{
    check_start(graph, start)?;

    let mut path = vec![start.clone()];
    trace.visit(Algorithm::Dfs, &path);
    if start == end {
        return Ok(Some(path));
    }

    let mut best: Option<Path> = None;
    let mut stack = vec![Frame { children: graph.children_of(start)?, next: 0 }];

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.children.len() {
            stack.pop();
            path.pop();
            continue;
        }

        let child = frame.children[frame.next].clone();
        frame.next += 1;

        if path.contains(&child) {
            continue;
        }
        if let Some(ref best) = best {
            if path.len() >= best.len() {
                continue;
            }
        }

        path.push(child);
        trace.visit(Algorithm::Dfs, &path);

        if path.last() == Some(end) {
            best = Some(path.clone());
            path.pop();
        } else {
            let children = graph.children_of(&path[path.len() - 1])?;
            stack.push(Frame { children, next: 0 });
        }
    }

    match best {
        Some(ref best) => debug!("DFS found {} ({} hops)", print_path(best), best.len() - 1),
        None => debug!("DFS found no path from {} to {}", start, end)
    }
    Ok(best)
}

/// Find a shortest path from `start` to `end` by breadth-first search.
pub fn bfs<G>(graph: &G, start: &Node, end: &Node) -> Result<Option<Path>>
    where G: Graph + ?Sized
{
    bfs_traced(graph, start, end, &mut NoTrace)
}

/// Like `bfs`, but show `trace` every path dequeued.
pub fn bfs_traced<G, T>(graph: &G, start: &Node, end: &Node, trace: &mut T)
                        -> Result<Option<Path>>
    where G: Graph + ?Sized,
          T: Trace + ?Sized
{
    check_start(graph, start)?;

    let mut queue: VecDeque<Path> = VecDeque::new();
    queue.push_back(vec![start.clone()]);

    while let Some(path) = queue.pop_front() {
        trace.visit(Algorithm::Bfs, &path);

        let last = match path.last() {
            Some(last) => last.clone(),
            None => continue
        };
        if last == *end {
            debug!("BFS found {} ({} hops)", print_path(&path), path.len() - 1);
            return Ok(Some(path));
        }

        for next in graph.children_of(&last)? {
            if !path.contains(&next) {
                let mut extended = path.clone();
                extended.push(next);
                queue.push_back(extended);
            }
        }
    }

    debug!("BFS found no path from {} to {}", start, end);
    Ok(None)
}

/// Return the number of hops on a shortest path from `start` to `end`, or
/// `None` if `end` is unreachable.
///
/// This is the usual node-level breadth-first search, marking each node
/// visited once, and shares no code with `bfs`. It's handy for checking the
/// path searches' answers.
pub fn hop_distance<G>(graph: &G, start: &Node, end: &Node) -> Result<Option<usize>>
    where G: Graph + ?Sized
{
    check_start(graph, start)?;

    let mut seen = HashSet::new();
    seen.insert(start.clone());
    let mut level = vec![start.clone()];
    let mut distance = 0;

    while !level.is_empty() {
        if level.contains(end) {
            return Ok(Some(distance));
        }
        let mut next_level = Vec::new();
        for node in &level {
            for child in graph.children_of(node)? {
                if seen.insert(child.clone()) {
                    next_level.push(child);
                }
            }
        }
        level = next_level;
        distance += 1;
    }

    Ok(None)
}
