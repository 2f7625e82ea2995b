//! Tests for Dag construction, ordering and exports.

use std::collections::HashMap;

use causal_core::GraphError;
use causal_graph::{Dag, GeneralGraph, Pdag};
use petgraph::stable_graph::NodeIndex;

fn dag(nodes: &[&str], edges: &[(&str, &str, &str)]) -> Result<Dag, GraphError> {
    Dag::new(nodes.iter().copied(), edges.iter().copied())
}

fn cancer() -> Dag {
    dag(
        &["Pollution", "Smoker", "Cancer", "Xray", "Dyspnoea"],
        &[
            ("Pollution", "->", "Cancer"),
            ("Smoker", "->", "Cancer"),
            ("Cancer", "->", "Xray"),
            ("Cancer", "->", "Dyspnoea"),
        ],
    )
    .unwrap()
}

#[test]
fn undirected_edge_is_rejected() {
    let err = dag(&["A", "B"], &[("A", "--", "B")]).unwrap_err();
    match err {
        GraphError::NotDag { reason } => assert!(reason.contains("not directed")),
        other => panic!("expected NotDag, got {other:?}"),
    }
}

#[test]
fn cycle_is_rejected_as_not_dag() {
    let edges = [("A", "->", "B"), ("B", "->", "C"), ("C", "->", "A")];
    let err = dag(&["A", "B", "C"], &edges).unwrap_err();
    match err {
        GraphError::NotDag { reason } => assert!(reason.starts_with("cycle")),
        other => panic!("expected NotDag, got {other:?}"),
    }

    let as_pdag = Pdag::new(["A", "B", "C"], edges);
    assert!(matches!(as_pdag, Err(GraphError::NotPdag { .. })));
}

#[test]
fn parallel_edges_fail_before_direction_checks() {
    let err = dag(&["A", "B"], &[("A", "->", "B"), ("A", "--", "B")]).unwrap_err();
    assert!(matches!(err, GraphError::ParallelEdge { .. }));
}

#[test]
fn topological_order_breaks_ties_by_input_position() {
    let unconnected = dag(&["C", "B", "A"], &[]).unwrap();
    assert_eq!(unconnected.ordered_nodes(), vec!["C", "B", "A"]);

    let g = dag(&["C", "B", "A"], &[("A", "->", "C")]).unwrap();
    assert_eq!(g.ordered_nodes(), vec!["B", "A", "C"]);
}

#[test]
fn compact_string_lists_parents_in_declaration_order() {
    assert_eq!(
        cancer().to_string(),
        "[Pollution][Smoker][Cancer|Pollution:Smoker][Xray|Cancer][Dyspnoea|Cancer]"
    );

    let swapped = dag(
        &["A", "B", "C"],
        &[("B", "->", "C"), ("A", "->", "C")],
    )
    .unwrap();
    assert_eq!(swapped.to_string(), "[A][B][C|B:A]");
}

#[test]
fn parents_and_children() {
    let g = cancer();
    assert_eq!(g.parents("Cancer"), vec!["Pollution", "Smoker"]);
    assert_eq!(g.children("Cancer"), vec!["Xray", "Dyspnoea"]);
    assert!(g.parents("Pollution").is_empty());
    assert!(g.children("Nowhere").is_empty());
}

#[test]
fn tiers_layer_nodes_by_longest_parent_chain() {
    assert_eq!(
        cancer().tiers(),
        vec![
            vec!["Pollution", "Smoker"],
            vec!["Cancer"],
            vec!["Xray", "Dyspnoea"]
        ]
    );

    let chain = dag(
        &["A", "B", "C"],
        &[("A", "->", "B"), ("B", "->", "C"), ("A", "->", "C")],
    )
    .unwrap();
    assert_eq!(chain.tiers(), vec![vec!["A"], vec!["B"], vec!["C"]]);
}

#[test]
fn stable_graph_export_keeps_labels_and_edges() {
    let exported = cancer().to_stable_graph();
    assert_eq!(exported.node_count(), 5);
    assert_eq!(exported.edge_count(), 4);
    assert_eq!(exported[NodeIndex::new(2)], "Cancer");
    assert!(exported
        .find_edge(NodeIndex::new(0), NodeIndex::new(2))
        .is_some());
    assert!(exported
        .find_edge(NodeIndex::new(2), NodeIndex::new(0))
        .is_none());
}

#[test]
fn conversions_between_graph_types() {
    let g = cancer();
    let pdag = g.to_pdag();
    assert_eq!(pdag.directed_count(), 4);
    assert_eq!(Dag::try_from(pdag.clone()).unwrap(), g);
    assert_eq!(Pdag::from(g.clone()), pdag);

    let general = GeneralGraph::from(g.clone());
    assert!(general.is_dag());
    assert_eq!(Dag::try_from(general).unwrap(), g);
}

#[test]
fn rename_keeps_structure() {
    let g = dag(&["A", "B"], &[("A", "->", "B")]).unwrap();
    let mapping = HashMap::from([("B".to_string(), "Z".to_string())]);
    assert_eq!(g.rename(&mapping).unwrap().to_string(), "[A][Z|A]");
}

#[test]
fn serde_round_trip_revalidates() {
    let g = cancer();
    let json = serde_json::to_string(&g).unwrap();
    let back: Dag = serde_json::from_str(&json).unwrap();
    assert_eq!(back, g);
    assert_eq!(back.to_string(), g.to_string());

    let undirected = r#"{"nodes":["A","B"],"edges":[["A","--","B"]]}"#;
    assert!(serde_json::from_str::<Dag>(undirected).is_err());
}

#[test]
fn graph_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GeneralGraph>();
    assert_send_sync::<Pdag>();
    assert_send_sync::<Dag>();
    assert_send_sync::<causal_graph::EquivalenceConverter>();
}
