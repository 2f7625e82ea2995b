//! Cycle detection and topological ordering over the directed edges of a graph.
//! Edges of every other type are ignored.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::DiGraph;

use super::indexed_graph::IndexedGraph;

/// Whether the directed edges contain a cycle.
pub fn has_directed_cycle(graph: &IndexedGraph) -> bool {
    let directed = DiGraph::<(), ()>::from_edges(
        graph
            .edges()
            .filter(|e| e.edge_type.is_directed())
            .map(|e| (e.first as u32, e.second as u32)),
    );
    is_cyclic_directed(&directed)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    White,
    Grey,
    Black,
}

/// Iterative depth-first search with three-colour marking.
///
/// Roots are tried in input order and children in declaration order. Returns
/// the first cycle met as a node path closed by repeating its start node.
pub fn find_directed_cycle(graph: &IndexedGraph) -> Option<Vec<usize>> {
    let n = graph.node_count();
    let children: Vec<Vec<usize>> = (0..n).map(|i| graph.children(i).collect()).collect();
    let mut colour = vec![Colour::White; n];

    for root in 0..n {
        if colour[root] != Colour::White {
            continue;
        }
        colour[root] = Colour::Grey;
        // (node, position of the next child to visit); the stack is the current path.
        let mut stack = vec![(root, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let Some(&child) = children[node].get(frame.1) else {
                colour[node] = Colour::Black;
                stack.pop();
                continue;
            };
            frame.1 += 1;
            match colour[child] {
                Colour::White => {
                    colour[child] = Colour::Grey;
                    stack.push((child, 0));
                }
                Colour::Grey => {
                    let start = stack.iter().position(|&(n, _)| n == child).unwrap_or(0);
                    let mut cycle: Vec<usize> = stack[start..].iter().map(|&(n, _)| n).collect();
                    cycle.push(child);
                    return Some(cycle);
                }
                Colour::Black => {}
            }
        }
    }
    None
}

/// Render a node path as `A -> B -> C -> A`.
pub fn format_path(graph: &IndexedGraph, path: &[usize]) -> String {
    graph.labels(path.iter().copied()).join(" -> ")
}

/// Kahn's algorithm over directed edges. Among ready nodes the one earliest
/// in input order goes first, so the result is deterministic.
///
/// On a cycle returns the nodes that never became ready.
pub fn topological_order(graph: &IndexedGraph) -> Result<Vec<usize>, Vec<usize>> {
    let n = graph.node_count();
    let mut in_degree: Vec<usize> = (0..n).map(|i| graph.parents(i).count()).collect();
    let mut ready: BinaryHeap<Reverse<usize>> = (0..n)
        .filter(|&i| in_degree[i] == 0)
        .map(Reverse)
        .collect();
    let mut order = Vec::with_capacity(n);

    while let Some(Reverse(node)) = ready.pop() {
        order.push(node);
        for child in graph.children(node) {
            in_degree[child] -= 1;
            if in_degree[child] == 0 {
                ready.push(Reverse(child));
            }
        }
    }

    if order.len() == n {
        Ok(order)
    } else {
        Err((0..n).filter(|&i| in_degree[i] > 0).collect())
    }
}
