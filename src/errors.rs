//! Error types for graph construction and search.
//!
//! Failing to find a path is not an error: searches return `Ok(None)` for
//! that. These errors are for misuse of the graph, like adding a node twice
//! or asking about a node the graph has never seen.

error_chain! {
    errors {
        DuplicateNode(name: String) {
            description("node already in graph")
            display("duplicate node: '{}'", name)
        }

        NodeNotFound(name: String) {
            description("node not in graph")
            display("node not in graph: '{}'", name)
        }

        BadNodeIndex(index: usize, count: usize) {
            description("node index out of range")
            display("node index {} out of range; graph has {} nodes", index, count)
        }
    }
}
