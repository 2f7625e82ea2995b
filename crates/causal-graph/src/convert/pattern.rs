//! Patterns: the skeleton with only unshielded colliders oriented.

use crate::graph::{IndexedGraph, StoredEdge};

use super::working::{collider_edges, WorkingGraph};

/// Keep a directed edge only where it points into an unshielded collider
/// `a -> c <- b`; make every other edge undirected.
pub(crate) fn pattern_of(graph: &IndexedGraph) -> IndexedGraph {
    let colliders = WorkingGraph::from_indexed(graph).unshielded_colliders();
    let keep = collider_edges(&colliders);
    graph.reoriented(|edge| {
        if edge.edge_type.is_directed() && keep.contains(&(edge.first, edge.second)) {
            *edge
        } else {
            StoredEdge::undirected(edge.first, edge.second)
        }
    })
}

/// Collider triples as labels, `a` before `b` by label, sorted.
pub(crate) fn collider_labels(graph: &IndexedGraph) -> Vec<(String, String, String)> {
    let mut colliders: Vec<(String, String, String)> = WorkingGraph::from_indexed(graph)
        .unshielded_colliders()
        .into_iter()
        .map(|(a, c, b)| {
            let (a, b) = (graph.label(a), graph.label(b));
            let (a, b) = if b < a { (b, a) } else { (a, b) };
            (a.to_string(), graph.label(c).to_string(), b.to_string())
        })
        .collect();
    colliders.sort();
    colliders
}
