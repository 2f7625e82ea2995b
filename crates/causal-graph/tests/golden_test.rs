//! Golden dataset tests for causal-graph.
//!
//! Loads each equivalence case from test-fixtures, runs the converter on its
//! DAG or PDAG input, and checks every expectation the case records.

use causal_core::EdgeSpec;
use causal_graph::convert::{dag_to_pdag, extend_pdag, is_cpdag, pdag_to_cpdag};
use causal_graph::{Dag, Pdag};
use test_fixtures::{all_graph_cases, load_graph_case, EdgeTriple, GraphCase};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn specs(triples: &[EdgeTriple]) -> Vec<EdgeSpec> {
    triples.iter().cloned().map(EdgeSpec::from).collect()
}

fn expected_pdag(case: &GraphCase, triples: &[EdgeTriple]) -> Pdag {
    Pdag::new(case.nodes.clone(), specs(triples))
        .unwrap_or_else(|e| panic!("{}: expected PDAG invalid: {e}", case.name))
}

fn expected_dag(case: &GraphCase, triples: &[EdgeTriple]) -> Dag {
    Dag::new(case.nodes.clone(), specs(triples))
        .unwrap_or_else(|e| panic!("{}: expected DAG invalid: {e}", case.name))
}

/// The PDAG the converter starts from: the pattern of the DAG input, or the
/// PDAG input itself.
fn converter_input(case: &GraphCase) -> Pdag {
    match (&case.dag, &case.pdag) {
        (Some(dag), None) => {
            let dag = expected_dag(case, dag);
            let pattern = dag_to_pdag(&dag);
            if let Some(expected) = &case.expected.pattern {
                assert_eq!(pattern, expected_pdag(case, expected), "{}: pattern", case.name);
            }
            if let Some(compact) = &case.expected.compact {
                assert_eq!(&dag.to_string(), compact, "{}: compact form", case.name);
            }
            pattern
        }
        (None, Some(pdag)) => expected_pdag(case, pdag),
        _ => panic!("{}: needs exactly one of dag/pdag", case.name),
    }
}

fn check_case(case: &GraphCase) {
    let input = converter_input(case);

    let completed = pdag_to_cpdag(&input);
    if let Some(completes) = case.expected.completes {
        assert_eq!(completed.is_ok(), completes, "{}: completes", case.name);
    }
    if let Some(expected) = &case.expected.cpdag {
        let expected = expected_pdag(case, expected);
        assert_eq!(
            completed.as_ref().ok(),
            Some(&expected),
            "{}: cpdag",
            case.name
        );
        if let Some(canonical) = case.expected.cpdag_is_canonical {
            assert_eq!(is_cpdag(&expected), canonical, "{}: is_cpdag", case.name);
        }
    }

    let extension = extend_pdag(&input);
    if let Some(extendable) = case.expected.extendable {
        assert_eq!(extension.is_ok(), extendable, "{}: extendable", case.name);
    }
    if let Some(expected) = &case.expected.extension {
        assert_eq!(
            extension.ok(),
            Some(expected_dag(case, expected)),
            "{}: extension",
            case.name
        );
    }
}

// ---------------------------------------------------------------------------
// Cases
// ---------------------------------------------------------------------------

#[test]
fn golden_cancer() {
    check_case(&load_graph_case("cancer"));
}

#[test]
fn golden_asia() {
    check_case(&load_graph_case("asia"));
}

#[test]
fn golden_chain() {
    check_case(&load_graph_case("chain"));
}

#[test]
fn golden_collider() {
    check_case(&load_graph_case("collider"));
}

#[test]
fn golden_andersson_examples() {
    check_case(&load_graph_case("andersson_10"));
    check_case(&load_graph_case("andersson_14"));
}

#[test]
fn golden_meek_rule_three() {
    check_case(&load_graph_case("meek_r3"));
}

#[test]
fn golden_meek_rule_four() {
    check_case(&load_graph_case("meek_r4"));
}

#[test]
fn golden_unextendable_square() {
    check_case(&load_graph_case("unextendable_square"));
}

#[test]
fn golden_new_collider() {
    check_case(&load_graph_case("new_collider"));
}

#[test]
fn every_golden_case_passes() {
    let cases = all_graph_cases();
    assert!(cases.len() >= 10);
    for case in &cases {
        check_case(case);
    }
}

#[test]
fn dag_input_cases_extend_back_into_their_class() {
    for case in all_graph_cases() {
        let Some(edges) = &case.dag else { continue };
        let dag = expected_dag(&case, edges);
        let extension = extend_pdag(&dag_to_pdag(&dag)).unwrap();
        assert!(
            causal_graph::convert::is_markov_equivalent(&extension, &dag),
            "{}: extension left the equivalence class",
            case.name
        );
    }
}
