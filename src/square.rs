//! Square grids, as undirected graphs.

use crate::digraph::Digraph;
use crate::errors::*;
use crate::graph::{Edge, Node};
use crate::random::node_at;

/// A grid of 1✕1 squares, of a given number of rows and columns. A cell's
/// neighbors are those above, below, and to the left and right of it; diagonal
/// connections are not neighbors.
///
/// Cells are numbered in row-major order, and the graph built from a grid
/// names each cell's node `"row,col"`. Since every step moves one row or one
/// column, the hop distance between two cells is their Manhattan distance.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SquareGrid {
    rows: usize,
    cols: usize
}

impl SquareGrid {
    /// Construct a `SquareGrid` with the given number of rows and columns.
    pub fn new(rows: usize, cols: usize) -> SquareGrid {
        SquareGrid { rows, cols }
    }

    pub fn cells(&self) -> usize { self.rows * self.cols }

    /// Return the number of undirected edges between neighboring cells.
    pub fn edges(&self) -> usize {
        // Each row has self.cols-1 horizontal edges;
        // each column has self.rows-1 vertical edges.
        self.rows * self.cols.saturating_sub(1) +
        self.cols * self.rows.saturating_sub(1)
    }

    /// Return the row and column of cell `index`.
    pub fn cell_rc(&self, index: usize) -> (usize, usize) {
        assert!(index < self.cells());
        (index / self.cols, index % self.cols)
    }

    /// Return the index of the cell at the given row and column.
    pub fn rc_cell(&self, row: usize, col: usize) -> usize {
        assert!(row < self.rows);
        assert!(col < self.cols);
        row * self.cols + col
    }

    /// Build the undirected graph of this grid.
    ///
    /// Each cell is joined to the cell above it and the cell to its right, so
    /// a cell's children come out as: below, left (from earlier cells'
    /// edges), then above, right.
    pub fn build(&self) -> Result<Digraph> {
        let mut graph = Digraph::undirected();
        let mut nodes = Vec::with_capacity(self.cells());
        for row in 0..self.rows {
            for col in 0..self.cols {
                let node = Node::new(format!("{},{}", row, col));
                graph.add_node(node.clone())?;
                nodes.push(node);
            }
        }

        for index in 0..self.cells() {
            let (row, col) = self.cell_rc(index);
            if row + 1 < self.rows {
                let above = self.rc_cell(row + 1, col);
                graph.add_edge(Edge::new(nodes[index].clone(), nodes[above].clone()))?;
            }
            if col + 1 < self.cols {
                let right = self.rc_cell(row, col + 1);
                graph.add_edge(Edge::new(nodes[index].clone(), nodes[right].clone()))?;
            }
        }

        debug!("{}x{} grid: {} nodes, {} arcs",
               self.rows, self.cols, graph.node_count(), graph.edge_count());
        Ok(graph)
    }

    /// Return the node for the cell at `row`, `col` of `graph`, which must
    /// have been built from this grid.
    pub fn node<'g>(&self, graph: &'g Digraph, row: usize, col: usize) -> Result<&'g Node> {
        if row >= self.rows || col >= self.cols {
            bail!(ErrorKind::BadNodeIndex(row * self.cols + col, self.cells()));
        }
        node_at(graph, self.rc_cell(row, col))
    }
}
