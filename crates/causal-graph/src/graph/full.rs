//! Fully directed acyclic graph.

use std::collections::HashMap;
use std::fmt;

use causal_core::constants::PARENT_SEPARATOR;
use causal_core::{EdgeSpec, GraphError};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::dag_enforcement;
use super::general::{rename_indexed, GeneralGraph};
use super::indexed_graph::IndexedGraph;
use super::partial::Pdag;
use super::spec::GraphSpec;
use super::GraphView;

/// Directed edges only, acyclic, with a topological order fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GraphSpec", into = "GraphSpec")]
pub struct Dag {
    graph: IndexedGraph,
    /// Node indices in topological order, ties broken by input position.
    order: Vec<usize>,
}

impl Dag {
    /// Validate and build: the general-graph checks, then every edge must be
    /// directed, then Kahn's algorithm must place every node. Both failures
    /// report `NotDag`.
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
        if let Some(edge) = graph.edges().find(|e| !e.edge_type.is_directed()) {
            return Err(GraphError::NotDag {
                reason: format!(
                    "edge {} {} {} is not directed",
                    graph.label(edge.first),
                    edge.edge_type,
                    graph.label(edge.second)
                ),
            });
        }
        match dag_enforcement::topological_order(&graph) {
            Ok(order) => Ok(Self { graph, order }),
            Err(stuck) => {
                let reason = format!("cycle through {}", graph.labels(stuck).join(", "));
                debug!(%reason, "directed cycle rejected");
                Err(GraphError::NotDag { reason })
            }
        }
    }

    /// Wrap a fully directed graph the caller has already ordered.
    pub(crate) fn from_checked(graph: IndexedGraph, order: Vec<usize>) -> Self {
        debug_assert_eq!(order.len(), graph.node_count());
        Self { graph, order }
    }

    /// Nodes in topological order; among unordered nodes, input order wins.
    pub fn ordered_nodes(&self) -> Vec<&str> {
        self.graph.labels(self.order.iter().copied())
    }

    /// Parents in declaration order.
    pub fn parents(&self, node: &str) -> Vec<&str> {
        match self.graph.index_of(node) {
            Some(i) => self.graph.labels(self.graph.parents(i)),
            None => Vec::new(),
        }
    }

    /// Children in declaration order.
    pub fn children(&self, node: &str) -> Vec<&str> {
        match self.graph.index_of(node) {
            Some(i) => self.graph.labels(self.graph.children(i)),
            None => Vec::new(),
        }
    }

    /// Successive layers: roots first, then every node whose parents all sit
    /// in earlier layers. Each layer is in input order.
    pub fn tiers(&self) -> Vec<Vec<&str>> {
        let mut depth = vec![0usize; self.node_count()];
        for &node in &self.order {
            let below = self.graph.parents(node).map(|p| depth[p] + 1).max();
            depth[node] = below.unwrap_or(0);
        }
        let layers = depth.iter().max().map_or(0, |d| d + 1);
        let mut tiers = vec![Vec::new(); layers];
        for (node, &d) in depth.iter().enumerate() {
            tiers[d].push(self.graph.label(node));
        }
        tiers
    }

    /// Export for petgraph tooling. Node weights are labels; node indices
    /// follow input order.
    pub fn to_stable_graph(&self) -> StableDiGraph<String, ()> {
        let mut exported = StableDiGraph::with_capacity(self.node_count(), self.edge_count());
        for label in self.nodes() {
            exported.add_node(label.clone());
        }
        for edge in self.graph.edges() {
            exported.add_edge(NodeIndex::new(edge.first), NodeIndex::new(edge.second), ());
        }
        exported
    }

    pub fn to_pdag(&self) -> Pdag {
        Pdag::from_checked(self.graph.clone())
    }

    pub fn rename(&self, mapping: &HashMap<String, String>) -> Result<Self, GraphError> {
        let graph = rename_indexed(&self.graph, mapping)?;
        Ok(Self::from_checked(graph, self.order.clone()))
    }
}

impl GraphView for Dag {
    fn as_indexed(&self) -> &IndexedGraph {
        &self.graph
    }
}

impl PartialEq for Dag {
    fn eq(&self, other: &Self) -> bool {
        self.graph == other.graph
    }
}

impl Eq for Dag {}

/// Compact listing `[A][B|A][C|A:B]` in topological order.
impl fmt::Display for Dag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &node in &self.order {
            write!(f, "[{}", self.graph.label(node))?;
            let parents = self.graph.labels(self.graph.parents(node));
            if !parents.is_empty() {
                write!(f, "|{}", parents.join(&PARENT_SEPARATOR.to_string()))?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

impl TryFrom<GeneralGraph> for Dag {
    type Error = GraphError;

    fn try_from(graph: GeneralGraph) -> Result<Self, Self::Error> {
        Self::validate(graph.into_indexed())
    }
}

impl TryFrom<Pdag> for Dag {
    type Error = GraphError;

    fn try_from(pdag: Pdag) -> Result<Self, Self::Error> {
        Self::try_from(GeneralGraph::from(pdag))
    }
}

impl From<Dag> for GeneralGraph {
    fn from(dag: Dag) -> Self {
        GeneralGraph::from_indexed(dag.graph)
    }
}

impl From<Dag> for Pdag {
    fn from(dag: Dag) -> Self {
        Pdag::from_checked(dag.graph)
    }
}

impl TryFrom<GraphSpec> for Dag {
    type Error = GraphError;

    fn try_from(spec: GraphSpec) -> Result<Self, Self::Error> {
        Self::new(spec.nodes, spec.edges)
    }
}

impl From<Dag> for GraphSpec {
    fn from(dag: Dag) -> Self {
        GraphSpec::of(&dag)
    }
}
