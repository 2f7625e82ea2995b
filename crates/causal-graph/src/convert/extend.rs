//! Dor-Tarsi extension of a PDAG to a consistent DAG.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::graph::{dag_enforcement, Dag, GraphView, Pdag, StoredEdge};

use super::working::WorkingGraph;
use super::NotExtendable;

/// Repeatedly eliminate the first node, in input order, that has no outgoing
/// directed edge and whose undirected neighbours are each adjacent to all of
/// its other neighbours. Its undirected edges become incoming.
pub(crate) fn extend(pdag: &Pdag) -> Result<Dag, NotExtendable> {
    let graph = pdag.as_indexed();
    let n = graph.node_count();
    let mut working = WorkingGraph::from_indexed(graph);
    let mut remaining = vec![true; n];
    let mut incoming: HashSet<(usize, usize)> = HashSet::new();

    for _ in 0..n {
        let Some(node) = (0..n).find(|&i| remaining[i] && can_eliminate(&working, i)) else {
            let stuck = graph.labels((0..n).filter(|&i| remaining[i]));
            debug!(remaining = stuck.len(), "extension blocked");
            return Err(NotExtendable {
                reason: format!("no node can be eliminated among {}", stuck.join(", ")),
            });
        };
        trace!(node = graph.label(node), "eliminated");
        incoming.extend(working.undirected(node).iter().map(|&y| (y, node)));
        working.remove(node);
        remaining[node] = false;
    }

    let extended = graph.reoriented(|edge| {
        if edge.edge_type.is_directed() || incoming.contains(&(edge.first, edge.second)) {
            StoredEdge::directed(edge.first, edge.second)
        } else {
            StoredEdge::directed(edge.second, edge.first)
        }
    });
    let order = dag_enforcement::topological_order(&extended).map_err(|_| NotExtendable {
        reason: "extension contains a directed cycle".to_string(),
    })?;
    Ok(Dag::from_checked(extended, order))
}

fn can_eliminate(working: &WorkingGraph, node: usize) -> bool {
    if !working.children(node).is_empty() {
        return false;
    }
    let neighbors: Vec<usize> = working.neighbors(node).collect();
    working.undirected(node).iter().all(|&y| {
        neighbors
            .iter()
            .all(|&z| z == y || working.adjacent(y, z))
    })
}
