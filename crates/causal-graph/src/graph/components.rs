//! Connected components of the skeleton.

use petgraph::unionfind::UnionFind;

use super::indexed_graph::IndexedGraph;

/// Components ordered by their earliest node; members in input order.
pub fn connected_components(graph: &IndexedGraph) -> Vec<Vec<usize>> {
    let n = graph.node_count();
    let mut sets = UnionFind::<usize>::new(n);
    for edge in graph.edges() {
        sets.union(edge.first, edge.second);
    }

    let mut slot_of_root = vec![usize::MAX; n];
    let mut components: Vec<Vec<usize>> = Vec::new();
    for node in 0..n {
        let root = sets.find(node);
        if slot_of_root[root] == usize::MAX {
            slot_of_root[root] = components.len();
            components.push(Vec::new());
        }
        components[slot_of_root[root]].push(node);
    }
    components
}
