//! Partially directed acyclic graph.

use std::collections::HashMap;
use std::fmt;

use causal_core::{EdgeSpec, GraphError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dag_enforcement;
use super::full::Dag;
use super::general::{rename_indexed, GeneralGraph};
use super::indexed_graph::IndexedGraph;
use super::spec::GraphSpec;
use super::GraphView;

/// Directed and undirected edges only, with an acyclic directed part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphSpec", into = "GraphSpec")]
pub struct Pdag {
    graph: IndexedGraph,
}

impl Pdag {
    /// Validate and build: the general-graph checks, then every edge must be
    /// directed or undirected, then the directed edges must not form a cycle
    /// (`NotPdag` carries the cycle as `A -> B -> A`).
    pub fn new<N, E>(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self, GraphError>
    where
        N: Into<String>,
        E: Into<EdgeSpec>,
    {
        Self::validate(IndexedGraph::build(nodes, edges)?)
    }

    fn validate(graph: IndexedGraph) -> Result<Self, GraphError> {
        if let Some(edge) = graph
            .edges()
            .find(|e| !e.edge_type.is_directed() && !e.edge_type.is_undirected())
        {
            return Err(GraphError::InvalidEdgeType {
                edge_type: format!(
                    "{} {} {}",
                    graph.label(edge.first),
                    edge.edge_type,
                    graph.label(edge.second)
                ),
                kind: "PDAG".to_string(),
            });
        }
        if let Some(cycle) = dag_enforcement::find_directed_cycle(&graph) {
            let path = dag_enforcement::format_path(&graph, &cycle);
            debug!(%path, "directed cycle rejected");
            return Err(GraphError::NotPdag { path });
        }
        Ok(Self { graph })
    }

    /// Wrap a graph the caller has already checked.
    pub(crate) fn from_checked(graph: IndexedGraph) -> Self {
        debug_assert!(dag_enforcement::find_directed_cycle(&graph).is_none());
        Self { graph }
    }

    /// Sources of directed edges into `node`, in declaration order.
    pub fn parents(&self, node: &str) -> Vec<&str> {
        match self.graph.index_of(node) {
            Some(i) => self.graph.labels(self.graph.parents(i)),
            None => Vec::new(),
        }
    }

    /// Targets of directed edges out of `node`, in declaration order.
    pub fn children(&self, node: &str) -> Vec<&str> {
        match self.graph.index_of(node) {
            Some(i) => self.graph.labels(self.graph.children(i)),
            None => Vec::new(),
        }
    }

    pub fn undirected_neighbors(&self, node: &str) -> Vec<&str> {
        match self.graph.index_of(node) {
            Some(i) => self.graph.labels(self.graph.undirected_neighbors(i)),
            None => Vec::new(),
        }
    }

    /// Whether the pair is joined by an undirected edge, i.e. its orientation
    /// may differ between members of the equivalence class.
    pub fn is_reversible(&self, a: &str, b: &str) -> bool {
        self.edge_between(a, b).is_some_and(|t| t.is_undirected())
    }

    pub fn directed_count(&self) -> usize {
        self.graph
            .edges()
            .filter(|e| e.edge_type.is_directed())
            .count()
    }

    pub fn undirected_count(&self) -> usize {
        self.edge_count() - self.directed_count()
    }

    /// The same graph as a [`Dag`]; fails with `NotDag` while any edge is undirected.
    pub fn to_dag(&self) -> Result<Dag, GraphError> {
        Dag::try_from(self.clone())
    }

    pub fn rename(&self, mapping: &HashMap<String, String>) -> Result<Self, GraphError> {
        rename_indexed(&self.graph, mapping).map(Self::from_checked)
    }
}

impl GraphView for Pdag {
    fn as_indexed(&self) -> &IndexedGraph {
        &self.graph
    }
}

impl fmt::Display for Pdag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_directed() { "DAG" } else { "PDAG" };
        self.graph.write_summary(f, kind, self.number_components())
    }
}

impl TryFrom<GeneralGraph> for Pdag {
    type Error = GraphError;

    fn try_from(graph: GeneralGraph) -> Result<Self, Self::Error> {
        Self::validate(graph.into_indexed())
    }
}

impl From<Pdag> for GeneralGraph {
    fn from(pdag: Pdag) -> Self {
        GeneralGraph::from_indexed(pdag.graph)
    }
}

impl TryFrom<GraphSpec> for Pdag {
    type Error = GraphError;

    fn try_from(spec: GraphSpec) -> Result<Self, Self::Error> {
        Self::new(spec.nodes, spec.edges)
    }
}

impl From<Pdag> for GraphSpec {
    fn from(pdag: Pdag) -> Self {
        GraphSpec::of(&pdag)
    }
}
