//! Dense adjacency-matrix export and import.

use causal_core::constants::NO_EDGE_CODE;
use causal_core::{EdgeType, GraphError};
use serde::{Deserialize, Serialize};

use super::indexed_graph::IndexedGraph;

/// Square matrix of edge-type codes over the node list.
///
/// Cell `[first][second]` holds the code of the edge whose marks sit at
/// `first` and `second` in table order, so `A -> B` reads `m[A][B] == 1`
/// and `m[B][A] == 0`. Zero means not adjacent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    nodes: Vec<String>,
    cells: Vec<i8>,
}

impl AdjacencyMatrix {
    /// All-zero matrix over `nodes`.
    pub fn empty(nodes: Vec<String>) -> Self {
        let n = nodes.len();
        Self {
            nodes,
            cells: vec![NO_EDGE_CODE; n * n],
        }
    }

    pub(crate) fn of(graph: &IndexedGraph) -> Self {
        let mut matrix = Self::empty(graph.nodes().to_vec());
        for edge in graph.edges() {
            matrix.set(edge.first, edge.second, edge.edge_type.code());
        }
        matrix
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Code at `[row][col]`. Out-of-range positions read as no edge.
    pub fn get(&self, row: usize, col: usize) -> i8 {
        let n = self.size();
        if row < n && col < n {
            self.cells[row * n + col]
        } else {
            NO_EDGE_CODE
        }
    }

    /// Write a raw code. Out-of-range positions are ignored.
    pub fn set(&mut self, row: usize, col: usize, code: i8) {
        let n = self.size();
        if row < n && col < n {
            self.cells[row * n + col] = code;
        }
    }

    /// Code between two labelled nodes, `None` if either label is unknown.
    pub fn code(&self, first: &str, second: &str) -> Option<i8> {
        let row = self.nodes.iter().position(|n| n == first)?;
        let col = self.nodes.iter().position(|n| n == second)?;
        Some(self.get(row, col))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[i8]> + '_ {
        self.cells.chunks(self.size().max(1))
    }

    /// Decode the non-zero cells into `(first, type, second)` index triples.
    pub(crate) fn decode(&self) -> Result<Vec<(usize, EdgeType, usize)>, GraphError> {
        let n = self.size();
        let mut edges = Vec::new();
        for row in 0..n {
            if self.get(row, row) != NO_EDGE_CODE {
                return Err(GraphError::SelfLoop {
                    node: self.nodes[row].clone(),
                });
            }
            for col in row + 1..n {
                let forward = self.get(row, col);
                let backward = self.get(col, row);
                let (first, code, second) = match (forward, backward) {
                    (NO_EDGE_CODE, NO_EDGE_CODE) => continue,
                    (code, NO_EDGE_CODE) => (row, code, col),
                    (NO_EDGE_CODE, code) => (col, code, row),
                    _ => {
                        return Err(GraphError::ParallelEdge {
                            a: self.nodes[row].clone(),
                            b: self.nodes[col].clone(),
                        })
                    }
                };
                let edge_type = EdgeType::from_code(code).ok_or_else(|| {
                    GraphError::InvalidMarkCombination {
                        combination: format!("unknown edge code {code}"),
                    }
                })?;
                edges.push((first, edge_type, second));
            }
        }
        Ok(edges)
    }
}
