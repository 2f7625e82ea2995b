//! General dependency graph: any of the six edge types, one edge per node pair.

use std::collections::HashMap;
use std::fmt;

use causal_core::{EdgeSpec, GraphError};
use serde::{Deserialize, Serialize};

use super::adjacency::AdjacencyMatrix;
use super::dag_enforcement;
use super::indexed_graph::IndexedGraph;
use super::spec::GraphSpec;
use super::GraphView;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphSpec", into = "GraphSpec")]
pub struct GeneralGraph {
    graph: IndexedGraph,
}

impl GeneralGraph {
    /// Validate and build.
    ///
    /// Checks run in this order and the first failure is returned: the node
    /// list is non-empty, labels are non-empty and unique; then per edge the
    /// symbol resolves, both endpoints are known, they differ, and the pair
    /// carries no earlier edge.
    pub fn new<N, E>(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self, GraphError>
    where
        N: Into<String>,
        E: Into<EdgeSpec>,
    {
        IndexedGraph::build(nodes, edges).map(Self::from_indexed)
    }

    /// Rebuild from a dense matrix. A cell pair with codes in both directions
    /// is a parallel edge; unknown codes and diagonal entries are rejected.
    pub fn from_adjacency(matrix: &AdjacencyMatrix) -> Result<Self, GraphError> {
        let nodes = matrix.nodes();
        let edges: Vec<EdgeSpec> = matrix
            .decode()?
            .into_iter()
            .map(|(first, edge_type, second)| {
                EdgeSpec::new(
                    nodes[first].as_str(),
                    edge_type.symbol(),
                    nodes[second].as_str(),
                )
            })
            .collect();
        Self::new(nodes.iter().cloned(), edges)
    }

    pub(crate) fn from_indexed(graph: IndexedGraph) -> Self {
        Self { graph }
    }

    pub(crate) fn into_indexed(self) -> IndexedGraph {
        self.graph
    }

    /// Substitute node labels. Labels missing from `mapping` stay as they are.
    pub fn rename(&self, mapping: &HashMap<String, String>) -> Result<Self, GraphError> {
        rename_indexed(&self.graph, mapping).map(Self::from_indexed)
    }

    /// Directed and undirected edges only, with no directed cycle.
    pub fn is_pdag(&self) -> bool {
        self.is_partially_directed() && dag_enforcement::find_directed_cycle(&self.graph).is_none()
    }

    /// Directed edges only, with no cycle.
    pub fn is_dag(&self) -> bool {
        self.is_directed() && dag_enforcement::topological_order(&self.graph).is_ok()
    }

    /// `DAG`, `PDAG`, or `SDG` for anything with other edge types or a directed cycle.
    pub fn kind(&self) -> &'static str {
        if self.is_dag() {
            "DAG"
        } else if self.is_pdag() {
            "PDAG"
        } else {
            "SDG"
        }
    }
}

/// Relabel with `mapping`, rejecting keys that name no node.
pub(crate) fn rename_indexed(
    graph: &IndexedGraph,
    mapping: &HashMap<String, String>,
) -> Result<IndexedGraph, GraphError> {
    if let Some(unknown) = mapping.keys().find(|k| graph.index_of(k).is_none()) {
        return Err(GraphError::UnknownNode {
            node: unknown.clone(),
        });
    }
    let nodes = graph
        .nodes()
        .iter()
        .map(|n| mapping.get(n).unwrap_or(n).clone())
        .collect();
    graph.relabeled(nodes)
}

impl GraphView for GeneralGraph {
    fn as_indexed(&self) -> &IndexedGraph {
        &self.graph
    }
}

impl fmt::Display for GeneralGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.graph
            .write_summary(f, self.kind(), self.number_components())
    }
}

impl TryFrom<GraphSpec> for GeneralGraph {
    type Error = GraphError;

    fn try_from(spec: GraphSpec) -> Result<Self, Self::Error> {
        Self::new(spec.nodes, spec.edges)
    }
}

impl From<GeneralGraph> for GraphSpec {
    fn from(graph: GeneralGraph) -> Self {
        GraphSpec::of(&graph)
    }
}
