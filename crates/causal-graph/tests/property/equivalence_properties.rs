//! Property tests for causal-graph construction and conversion.

use proptest::prelude::*;

use causal_core::{EdgeType, GraphError};
use causal_graph::convert::{
    dag_to_cpdag, dag_to_pdag, extend_pdag, is_cpdag, is_markov_equivalent, pdag_to_cpdag,
    unshielded_colliders,
};
use causal_graph::{Dag, GeneralGraph, GraphView, Pdag};

fn label(i: usize) -> String {
    format!("n{i}")
}

/// A DAG over `n` nodes. `rank` is a permutation giving the causal order;
/// `mask` picks which forward pairs get an edge.
fn build_dag(n: usize, rank: &[usize], mask: &[bool]) -> Dag {
    let mut edges = Vec::new();
    let mut bits = mask.iter().copied().cycle();
    for i in 0..n {
        for j in i + 1..n {
            if bits.next().unwrap_or(false) {
                edges.push((label(rank[i]), "->".to_string(), label(rank[j])));
            }
        }
    }
    Dag::new((0..n).map(label), edges).unwrap()
}

// Strategy for random DAGs of up to 8 nodes.
fn dag_strategy() -> impl Strategy<Value = Dag> {
    (2usize..8).prop_flat_map(|n| {
        (
            Just(n),
            Just((0..n).collect::<Vec<_>>()).prop_shuffle(),
            prop::collection::vec(prop::bool::weighted(0.4), n * (n - 1) / 2),
        )
            .prop_map(|(n, rank, mask)| build_dag(n, &rank, &mask))
    })
}

/// A PDAG over `n` nodes, or `None` if the orientations close a cycle.
/// Each node pair gets no edge, `--`, `->` or `<-` according to `kinds`.
fn build_pdag(n: usize, kinds: &[u8]) -> Option<Pdag> {
    let mut edges = Vec::new();
    let mut kinds = kinds.iter().copied();
    for i in 0..n {
        for j in i + 1..n {
            match kinds.next().unwrap_or(0) {
                1 => edges.push((label(i), "--".to_string(), label(j))),
                2 => edges.push((label(i), "->".to_string(), label(j))),
                3 => edges.push((label(j), "->".to_string(), label(i))),
                _ => {}
            }
        }
    }
    Pdag::new((0..n).map(label), edges).ok()
}

// Strategy for arbitrary PDAG inputs of up to 6 nodes, including ones with
// orientations no pattern would carry.
fn pdag_strategy() -> impl Strategy<Value = Option<Pdag>> {
    (2usize..7).prop_flat_map(|n| {
        prop::collection::vec(0u8..4, n * (n - 1) / 2)
            .prop_map(move |kinds| build_pdag(n, &kinds))
    })
}

/// Whether every directed edge of `pdag` belongs to one of its unshielded
/// colliders, i.e. `pdag` is its own pattern.
fn orients_only_colliders(pdag: &Pdag) -> bool {
    let colliders = unshielded_colliders(pdag);
    pdag.edges()
        .into_iter()
        .filter(|(_, edge_type, _)| *edge_type == EdgeType::Directed)
        .all(|(from, _, to)| {
            colliders
                .iter()
                .any(|(a, c, b)| c == to && (a == from || b == from))
        })
}

// =============================================================================
// Completion is idempotent
// =============================================================================
proptest! {
    #[test]
    fn completion_is_idempotent(dag in dag_strategy()) {
        let completed = pdag_to_cpdag(&dag_to_pdag(&dag)).unwrap();
        prop_assert_eq!(pdag_to_cpdag(&completed).unwrap(), completed.clone());
        prop_assert_eq!(dag_to_cpdag(&dag), completed);
    }
}

// =============================================================================
// Extending a pattern stays in the equivalence class
// =============================================================================
proptest! {
    #[test]
    fn pattern_extension_is_markov_equivalent(dag in dag_strategy()) {
        let extension = extend_pdag(&dag_to_pdag(&dag)).unwrap();
        prop_assert!(is_markov_equivalent(&extension, &dag));
        prop_assert_eq!(extension.edge_count(), dag.edge_count());
    }
}

// =============================================================================
// Completed patterns are CPDAGs, and CPDAGs extend
// =============================================================================
proptest! {
    #[test]
    fn completed_pattern_is_cpdag_and_extends(dag in dag_strategy()) {
        let cpdag = dag_to_cpdag(&dag);
        prop_assert!(is_cpdag(&cpdag));
        let extension = extend_pdag(&cpdag).unwrap();
        prop_assert!(is_markov_equivalent(&extension, &dag));
        for (a, _, b) in cpdag.edges() {
            if !cpdag.is_reversible(a, b) {
                prop_assert!(extension.children(a).contains(&b));
            }
        }
    }
}

// =============================================================================
// The DAG is a member of its own class
// =============================================================================
proptest! {
    #[test]
    fn dag_is_equivalent_to_itself_and_its_cpdag_contains_it(dag in dag_strategy()) {
        prop_assert!(is_markov_equivalent(&dag, &dag));
        let cpdag = dag_to_cpdag(&dag);
        for (a, _, b) in cpdag.edges() {
            if !cpdag.is_reversible(a, b) {
                prop_assert!(dag.children(a).contains(&b));
            }
        }
    }
}

// =============================================================================
// Topological order respects every edge
// =============================================================================
proptest! {
    #[test]
    fn ordered_nodes_respect_edges(dag in dag_strategy()) {
        let order = dag.ordered_nodes();
        prop_assert_eq!(order.len(), dag.node_count());
        let position = |n: &str| order.iter().position(|m| *m == n);
        for (a, _, b) in dag.edges() {
            prop_assert!(position(a) < position(b));
        }
    }
}

// =============================================================================
// Cycle detection agrees across graph types
// =============================================================================
proptest! {
    #[test]
    fn pdag_construction_agrees_with_cycle_check(
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..12)
    ) {
        let mut seen = std::collections::HashSet::new();
        let specs: Vec<(String, String, String)> = edges
            .into_iter()
            .filter(|&(a, b)| a != b && seen.insert((a.min(b), a.max(b))))
            .map(|(a, b)| (label(a), "->".to_string(), label(b)))
            .collect();
        let nodes: Vec<String> = (0..6).map(label).collect();

        let general = GeneralGraph::new(nodes.clone(), specs.clone()).unwrap();
        let pdag = Pdag::new(nodes.clone(), specs.clone());
        let dag = Dag::new(nodes, specs);

        prop_assert_eq!(pdag.is_ok(), !general.has_directed_cycles());
        prop_assert_eq!(dag.is_ok(), pdag.is_ok());
        if let Err(e) = pdag {
            prop_assert!(matches!(e, GraphError::NotPdag { .. }), "{}", e);
        }
    }
}

// =============================================================================
// Arbitrary PDAGs: canonical inputs extend, completed outputs are consistent
// =============================================================================
proptest! {
    #[test]
    fn cpdag_inputs_always_extend(pdag in pdag_strategy()) {
        prop_assume!(pdag.is_some());
        let pdag = pdag.unwrap();
        if is_cpdag(&pdag) {
            prop_assert!(extend_pdag(&pdag).is_ok(), "{}", pdag);
        }
    }

    #[test]
    fn successful_completion_is_consistent(pdag in pdag_strategy()) {
        prop_assume!(pdag.is_some());
        let pdag = pdag.unwrap();
        if let Ok(completed) = pdag_to_cpdag(&pdag) {
            prop_assert!(extend_pdag(&completed).is_ok(), "{}", completed);
            prop_assert_eq!(pdag_to_cpdag(&completed).unwrap(), completed.clone());
            for (from, edge_type, to) in pdag.edges() {
                if edge_type == EdgeType::Directed {
                    prop_assert!(completed.children(from).contains(&to));
                }
            }
            if orients_only_colliders(&pdag) {
                prop_assert!(is_cpdag(&completed), "{} completed to {}", pdag, completed);
            }
        }
    }
}
