//! Mutable orientation state used while converting between graph types.

use std::collections::{BTreeSet, HashSet};

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;

use crate::graph::{IndexedGraph, StoredEdge};

/// Parents, children and undirected neighbours per node index.
#[derive(Debug, Clone)]
pub(crate) struct WorkingGraph {
    parents: Vec<BTreeSet<usize>>,
    children: Vec<BTreeSet<usize>>,
    undirected: Vec<BTreeSet<usize>>,
}

impl WorkingGraph {
    /// Directed and undirected edges of `graph`; other types are skipped.
    pub(crate) fn from_indexed(graph: &IndexedGraph) -> Self {
        let n = graph.node_count();
        let mut working = Self {
            parents: vec![BTreeSet::new(); n],
            children: vec![BTreeSet::new(); n],
            undirected: vec![BTreeSet::new(); n],
        };
        for edge in graph.edges() {
            if edge.edge_type.is_directed() {
                working.add_directed(edge.first, edge.second);
            } else if edge.edge_type.is_undirected() {
                working.undirected[edge.first].insert(edge.second);
                working.undirected[edge.second].insert(edge.first);
            }
        }
        working
    }

    fn add_directed(&mut self, from: usize, to: usize) {
        self.children[from].insert(to);
        self.parents[to].insert(from);
    }

    pub(crate) fn node_count(&self) -> usize {
        self.parents.len()
    }

    pub(crate) fn parents(&self, node: usize) -> &BTreeSet<usize> {
        &self.parents[node]
    }

    pub(crate) fn children(&self, node: usize) -> &BTreeSet<usize> {
        &self.children[node]
    }

    pub(crate) fn undirected(&self, node: usize) -> &BTreeSet<usize> {
        &self.undirected[node]
    }

    pub(crate) fn is_directed(&self, from: usize, to: usize) -> bool {
        self.children[from].contains(&to)
    }

    pub(crate) fn is_undirected(&self, a: usize, b: usize) -> bool {
        self.undirected[a].contains(&b)
    }

    pub(crate) fn adjacent(&self, a: usize, b: usize) -> bool {
        self.is_undirected(a, b) || self.is_directed(a, b) || self.is_directed(b, a)
    }

    /// Every node joined to `node` by any edge.
    pub(crate) fn neighbors(&self, node: usize) -> impl Iterator<Item = usize> + '_ {
        self.parents[node]
            .iter()
            .chain(&self.children[node])
            .chain(&self.undirected[node])
            .copied()
    }

    /// Undirected pairs `(a, b)` with `a < b`, in ascending order.
    pub(crate) fn undirected_edges(&self) -> Vec<(usize, usize)> {
        self.undirected
            .iter()
            .enumerate()
            .flat_map(|(a, others)| others.range(a + 1..).map(move |&b| (a, b)))
            .collect()
    }

    pub(crate) fn undirected_count(&self) -> usize {
        self.undirected.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Replace the undirected edge `from -- to` with `from -> to`.
    pub(crate) fn orient(&mut self, from: usize, to: usize) {
        self.undirected[from].remove(&to);
        self.undirected[to].remove(&from);
        self.add_directed(from, to);
    }

    /// Drop `node` and every edge touching it.
    pub(crate) fn remove(&mut self, node: usize) {
        for other in std::mem::take(&mut self.parents[node]) {
            self.children[other].remove(&node);
        }
        for other in std::mem::take(&mut self.children[node]) {
            self.parents[other].remove(&node);
        }
        for other in std::mem::take(&mut self.undirected[node]) {
            self.undirected[other].remove(&node);
        }
    }

    /// `(a, c, b)` with `a -> c <- b`, `a < b`, and `a`, `b` not adjacent.
    pub(crate) fn unshielded_colliders(&self) -> BTreeSet<(usize, usize, usize)> {
        let mut colliders = BTreeSet::new();
        for c in 0..self.node_count() {
            let parents: Vec<usize> = self.parents[c].iter().copied().collect();
            for (i, &a) in parents.iter().enumerate() {
                for &b in &parents[i + 1..] {
                    if !self.adjacent(a, b) {
                        colliders.insert((a, c, b));
                    }
                }
            }
        }
        colliders
    }

    /// Whether the directed edges contain a cycle.
    pub(crate) fn has_directed_cycle(&self) -> bool {
        let directed = DiGraph::<(), ()>::from_edges(self.children.iter().enumerate().flat_map(
            |(from, children)| children.iter().map(move |&to| (from as u32, to as u32)),
        ));
        is_cyclic_directed(&directed)
    }

    /// Re-emit `template`'s node pairs with this state's orientations. Pairs
    /// without a directed edge here keep the template's stored edge.
    pub(crate) fn apply_to(&self, template: &IndexedGraph) -> IndexedGraph {
        template.reoriented(|edge| self.orientation_of(edge))
    }

    fn orientation_of(&self, edge: &StoredEdge) -> StoredEdge {
        if self.is_directed(edge.first, edge.second) {
            StoredEdge::directed(edge.first, edge.second)
        } else if self.is_directed(edge.second, edge.first) {
            StoredEdge::directed(edge.second, edge.first)
        } else if self.is_undirected(edge.first, edge.second) {
            StoredEdge::undirected(edge.first, edge.second)
        } else {
            *edge
        }
    }
}

/// Edges `(from, to)` taking part in a collider of `colliders`.
pub(crate) fn collider_edges(colliders: &BTreeSet<(usize, usize, usize)>) -> HashSet<(usize, usize)> {
    colliders
        .iter()
        .flat_map(|&(a, c, b)| [(a, c), (b, c)])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: &[(&str, &str, &str)] = &[("A", "->", "B"), ("B", "->", "C"), ("A", "--", "C")];

    fn working(nodes: &[&str], edges: &[(&str, &str, &str)]) -> WorkingGraph {
        let graph = IndexedGraph::build(nodes.iter().copied(), edges.iter().copied()).unwrap();
        WorkingGraph::from_indexed(&graph)
    }

    #[test]
    fn acyclic_orientation_has_no_cycle() {
        let graph = working(&["A", "B", "C"], TRIANGLE);
        assert!(!graph.has_directed_cycle());
    }

    #[test]
    fn orienting_an_undirected_edge_can_close_a_cycle() {
        let mut graph = working(&["A", "B", "C"], TRIANGLE);
        graph.orient(2, 0);
        assert!(graph.has_directed_cycle());
    }

    #[test]
    fn undirected_edges_never_form_a_cycle() {
        let graph = working(
            &["A", "B", "C"],
            &[("A", "--", "B"), ("B", "--", "C"), ("C", "--", "A")],
        );
        assert!(!graph.has_directed_cycle());
    }

    #[test]
    fn graph_without_edges_has_no_cycle() {
        let graph = working(&["A", "B"], &[]);
        assert!(!graph.has_directed_cycle());
    }
}
