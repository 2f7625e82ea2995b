//! Graph value types and the structural queries they share.

pub mod adjacency;
pub mod components;
pub mod dag_enforcement;
pub mod full;
pub mod general;
pub mod indexed_graph;
pub mod partial;
pub mod spec;

use causal_core::{Edge, EdgeSpec, EdgeType};

pub use adjacency::AdjacencyMatrix;
pub use full::Dag;
pub use general::GeneralGraph;
pub use indexed_graph::{IndexedGraph, StoredEdge};
pub use partial::Pdag;
pub use spec::GraphSpec;

/// Read-only queries available on every graph type.
///
/// Implementors only expose their validated [`IndexedGraph`]; every other
/// method has a default. Lookups by an unknown label return `None`, `false`
/// or an empty list rather than failing.
pub trait GraphView {
    fn as_indexed(&self) -> &IndexedGraph;

    /// Node labels in input order.
    fn nodes(&self) -> &[String] {
        self.as_indexed().nodes()
    }

    fn node_count(&self) -> usize {
        self.as_indexed().node_count()
    }

    fn edge_count(&self) -> usize {
        self.as_indexed().edge_count()
    }

    fn contains_node(&self, node: &str) -> bool {
        self.as_indexed().index_of(node).is_some()
    }

    /// Edges in canonical orientation, in construction order.
    fn edges(&self) -> Vec<(&str, EdgeType, &str)> {
        let graph = self.as_indexed();
        graph
            .edges()
            .map(|e| (graph.label(e.first), e.edge_type, graph.label(e.second)))
            .collect()
    }

    /// Edges in the `(a, symbol, b)` notation accepted by the constructors.
    fn edge_specs(&self) -> Vec<EdgeSpec> {
        self.edges()
            .into_iter()
            .map(|(a, edge_type, b)| EdgeSpec::new(a, edge_type.symbol(), b))
            .collect()
    }

    /// Adjacent nodes in edge declaration order.
    fn neighbors(&self, node: &str) -> Vec<&str> {
        let graph = self.as_indexed();
        match graph.index_of(node) {
            Some(i) => graph.labels(graph.neighbors(i).iter().copied()),
            None => Vec::new(),
        }
    }

    fn edge_between(&self, a: &str, b: &str) -> Option<EdgeType> {
        let graph = self.as_indexed();
        let edge = graph.edge(graph.index_of(a)?, graph.index_of(b)?)?;
        Some(edge.edge_type)
    }

    /// The edge joining `a` and `b`, seen from `a`.
    fn oriented_edge(&self, a: &str, b: &str) -> Option<Edge> {
        let graph = self.as_indexed();
        let ia = graph.index_of(a)?;
        let edge = graph.edge(ia, graph.index_of(b)?)?;
        let (first, second) = edge.edge_type.marks();
        let (mark_a, mark_b) = if edge.first == ia {
            (first, second)
        } else {
            (second, first)
        };
        Edge::new(a, mark_a, b, mark_b).ok()
    }

    fn adjacent(&self, a: &str, b: &str) -> bool {
        self.edge_between(a, b).is_some()
    }

    fn adjacency_matrix(&self) -> AdjacencyMatrix {
        AdjacencyMatrix::of(self.as_indexed())
    }

    /// Same nodes and node pairs, every edge undirected.
    fn skeleton(&self) -> GeneralGraph {
        GeneralGraph::from_indexed(self.as_indexed().skeleton())
    }

    /// Connected components, each in input order, ordered by their first node.
    fn components(&self) -> Vec<Vec<&str>> {
        let graph = self.as_indexed();
        components::connected_components(graph)
            .into_iter()
            .map(|members| graph.labels(members))
            .collect()
    }

    fn number_components(&self) -> usize {
        components::connected_components(self.as_indexed()).len()
    }

    /// Every edge is directed.
    fn is_directed(&self) -> bool {
        self.as_indexed().edges().all(|e| e.edge_type.is_directed())
    }

    /// Every edge is directed or undirected.
    fn is_partially_directed(&self) -> bool {
        self.as_indexed()
            .edges()
            .all(|e| e.edge_type.is_directed() || e.edge_type.is_undirected())
    }

    fn has_directed_cycles(&self) -> bool {
        dag_enforcement::has_directed_cycle(self.as_indexed())
    }
}
