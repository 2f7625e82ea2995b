//! Validated node and edge storage shared by every graph type.

use std::collections::{HashMap, HashSet};
use std::fmt;

use causal_core::tracing_setup::names;
use causal_core::{EdgeSpec, EdgeType, GraphError};
use tracing::{trace, trace_span};

/// One stored edge in canonical orientation: the marks of `edge_type` sit at
/// `first` and `second` in table order, so a directed edge always points
/// from `first` to `second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StoredEdge {
    pub first: usize,
    pub second: usize,
    pub edge_type: EdgeType,
}

impl StoredEdge {
    pub(crate) fn directed(from: usize, to: usize) -> Self {
        Self {
            first: from,
            second: to,
            edge_type: EdgeType::Directed,
        }
    }

    pub(crate) fn undirected(first: usize, second: usize) -> Self {
        Self {
            first,
            second,
            edge_type: EdgeType::Undirected,
        }
    }

    /// The endpoint that is not `node`.
    pub fn other(&self, node: usize) -> usize {
        if self.first == node {
            self.second
        } else {
            self.first
        }
    }

    pub fn points_from(&self, node: usize) -> bool {
        self.edge_type.is_directed() && self.first == node
    }

    pub fn points_to(&self, node: usize) -> bool {
        self.edge_type.is_directed() && self.second == node
    }
}

fn pair_key(a: usize, b: usize) -> (usize, usize) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Nodes in input order plus at most one edge per unordered node pair.
///
/// Only reachable through validating constructors, so every value upholds:
/// labels are non-empty and unique, edge endpoints are known and distinct,
/// and no pair carries two edges.
#[derive(Debug, Clone)]
pub struct IndexedGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    edges: HashMap<(usize, usize), StoredEdge>,
    /// Edge keys in construction order.
    order: Vec<(usize, usize)>,
    /// Neighbours of each node in the order their edges were declared.
    adjacency: Vec<Vec<usize>>,
}

impl IndexedGraph {
    /// Validate and build, failing on the first violation found.
    pub(crate) fn build<N, E>(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self, GraphError>
    where
        N: Into<String>,
        E: Into<EdgeSpec>,
    {
        let _span = trace_span!(names::CONSTRUCT).entered();
        let mut graph = Self::with_nodes(nodes.into_iter().map(Into::into).collect())?;
        for spec in edges {
            graph.insert_spec(&spec.into())?;
        }
        trace!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph validated"
        );
        Ok(graph)
    }

    fn with_nodes(nodes: Vec<String>) -> Result<Self, GraphError> {
        if nodes.is_empty() {
            return Err(GraphError::EmptyGraph);
        }
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, label) in nodes.iter().enumerate() {
            if label.is_empty() {
                return Err(GraphError::EmptyNodeLabel { position });
            }
            if index.insert(label.clone(), position).is_some() {
                return Err(GraphError::DuplicateNode {
                    node: label.clone(),
                });
            }
        }
        let adjacency = vec![Vec::new(); nodes.len()];
        Ok(Self {
            nodes,
            index,
            edges: HashMap::new(),
            order: Vec::new(),
            adjacency,
        })
    }

    fn insert_spec(&mut self, spec: &EdgeSpec) -> Result<(), GraphError> {
        let edge = spec.to_edge()?;
        let a = self.require(&spec.a)?;
        let b = self.require(&spec.b)?;
        if a == b {
            return Err(GraphError::SelfLoop {
                node: spec.a.clone(),
            });
        }
        let (first, second) = if edge.is_canonical() { (a, b) } else { (b, a) };
        self.insert(StoredEdge {
            first,
            second,
            edge_type: edge.edge_type(),
        })
    }

    fn insert(&mut self, edge: StoredEdge) -> Result<(), GraphError> {
        let key = pair_key(edge.first, edge.second);
        if self.edges.contains_key(&key) {
            return Err(GraphError::ParallelEdge {
                a: self.nodes[edge.first].clone(),
                b: self.nodes[edge.second].clone(),
            });
        }
        self.edges.insert(key, edge);
        self.order.push(key);
        self.adjacency[edge.first].push(edge.second);
        self.adjacency[edge.second].push(edge.first);
        Ok(())
    }

    fn require(&self, label: &str) -> Result<usize, GraphError> {
        self.index_of(label).ok_or_else(|| GraphError::UnknownNode {
            node: label.to_string(),
        })
    }

    /// Same node indices and edges under new labels.
    pub(crate) fn relabeled(&self, nodes: Vec<String>) -> Result<Self, GraphError> {
        let mut graph = Self::with_nodes(nodes)?;
        for edge in self.edges() {
            graph.insert(*edge)?;
        }
        Ok(graph)
    }

    /// Same nodes and node pairs with each edge replaced by `orient(edge)`.
    /// `orient` must keep the edge's endpoints.
    pub(crate) fn reoriented(&self, orient: impl Fn(&StoredEdge) -> StoredEdge) -> Self {
        let mut graph = self.clone();
        for edge in graph.edges.values_mut() {
            let replaced = orient(edge);
            debug_assert_eq!(
                pair_key(replaced.first, replaced.second),
                pair_key(edge.first, edge.second)
            );
            *edge = replaced;
        }
        graph
    }

    /// Every edge made undirected.
    pub(crate) fn skeleton(&self) -> Self {
        self.reoriented(|e| StoredEdge::undirected(e.first, e.second))
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.order.len()
    }

    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn label(&self, node: usize) -> &str {
        &self.nodes[node]
    }

    pub fn labels(&self, nodes: impl IntoIterator<Item = usize>) -> Vec<&str> {
        nodes.into_iter().map(|n| self.label(n)).collect()
    }

    pub fn edge(&self, a: usize, b: usize) -> Option<&StoredEdge> {
        self.edges.get(&pair_key(a, b))
    }

    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.edges.contains_key(&pair_key(a, b))
    }

    /// Edges in construction order.
    pub fn edges(&self) -> impl Iterator<Item = &StoredEdge> + '_ {
        self.order.iter().filter_map(|key| self.edges.get(key))
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    fn incident(&self, node: usize) -> impl Iterator<Item = &StoredEdge> + '_ {
        self.adjacency[node]
            .iter()
            .filter_map(move |&other| self.edge(node, other))
    }

    pub fn children(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident(node)
            .filter(move |e| e.points_from(node))
            .map(|e| e.second)
    }

    pub fn parents(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident(node)
            .filter(move |e| e.points_to(node))
            .map(|e| e.first)
    }

    pub fn undirected_neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident(node)
            .filter(|e| e.edge_type.is_undirected())
            .map(move |e| e.other(node))
    }

    /// Edges with endpoint labels, symmetric types normalised to label order.
    fn edge_set(&self) -> HashSet<(&str, EdgeType, &str)> {
        self.edges()
            .map(|e| {
                let (a, b) = (self.label(e.first), self.label(e.second));
                if e.edge_type.is_symmetric() && b < a {
                    (b, e.edge_type, a)
                } else {
                    (a, e.edge_type, b)
                }
            })
            .collect()
    }

    /// `kind` header, counts, then one line per node listing the edges for
    /// which that node is the first endpoint.
    pub(crate) fn write_summary(
        &self,
        f: &mut fmt::Formatter<'_>,
        kind: &str,
        components: usize,
    ) -> fmt::Result {
        writeln!(
            f,
            "{kind} with {} nodes, {} edges, {components} components",
            self.node_count(),
            self.edge_count()
        )?;
        for (node, label) in self.nodes.iter().enumerate() {
            write!(f, "{label}:")?;
            for edge in self.incident(node).filter(|e| e.first == node) {
                write!(f, " {}{}", edge.edge_type.symbol(), self.label(edge.second))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Order-independent: same node set and same edge set.
impl PartialEq for IndexedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.node_count() == other.node_count()
            && self.nodes.iter().all(|n| other.index.contains_key(n))
            && self.edge_count() == other.edge_count()
            && self.edge_set() == other.edge_set()
    }
}

impl Eq for IndexedGraph {}
