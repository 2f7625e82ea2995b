use causal_core::errors::*;

#[test]
fn duplicate_node_carries_label() {
    let err = GraphError::DuplicateNode { node: "Smoker".into() };
    assert!(err.to_string().contains("Smoker"));
    assert_eq!(err.error_code(), error_code::DUPLICATE_NODE);
}

#[test]
fn parallel_edge_carries_both_endpoints() {
    let err = GraphError::ParallelEdge {
        a: "A".into(),
        b: "B".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains('A'));
    assert!(msg.contains('B'));
}

#[test]
fn not_pdag_carries_cycle_path() {
    let err = GraphError::NotPdag {
        path: "A -> B -> A".into(),
    };
    assert!(err.to_string().contains("A -> B -> A"));
    assert_eq!(err.error_code(), error_code::NOT_PDAG);
}

#[test]
fn graph_error_converts_to_causal_error() {
    let err: CausalError = GraphError::EmptyGraph.into();
    assert!(matches!(err, CausalError::Graph(GraphError::EmptyGraph)));
    assert_eq!(err.error_code(), error_code::EMPTY_GRAPH);
}

#[test]
fn config_error_converts_to_causal_error() {
    let err: CausalError = ConfigError::ValidationFailed {
        field: "convert.rules".into(),
        message: "must name at least one rule".into(),
    }
    .into();
    assert!(err.to_string().contains("convert.rules"));
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}
