//! Conversion between DAGs, patterns, CPDAGs and consistent extensions.
//!
//! The free functions use the default [`ConvertConfig`]: all four Meek rules
//! and extension checking on. Build an [`EquivalenceConverter`] to change
//! either.

mod canonical;
mod extend;
mod meek;
mod pattern;
mod working;

use causal_core::config::{ConvertConfig, MeekRule};
use tracing::{debug, instrument, warn};

use crate::graph::{Dag, GraphView, Pdag};

/// No consistent completion or extension exists for the given PDAG.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no consistent extension: {reason}")]
pub struct NotExtendable {
    pub reason: String,
}

/// Stateless converter carrying the rule selection.
#[derive(Debug, Clone)]
pub struct EquivalenceConverter {
    rules: Vec<MeekRule>,
    verify_extendable: bool,
}

impl Default for EquivalenceConverter {
    fn default() -> Self {
        Self::new(&ConvertConfig::default())
    }
}

impl EquivalenceConverter {
    pub fn new(config: &ConvertConfig) -> Self {
        Self {
            rules: config.effective_rules(),
            verify_extendable: config.effective_verify_extendable(),
        }
    }

    pub fn rules(&self) -> &[MeekRule] {
        &self.rules
    }

    /// The DAG's skeleton with exactly its unshielded colliders oriented.
    #[instrument(
        name = "causal.pattern",
        level = "debug",
        skip(self, dag),
        fields(nodes = dag.node_count())
    )]
    pub fn dag_to_pdag(&self, dag: &Dag) -> Pdag {
        let pattern = Pdag::from_checked(pattern::pattern_of(dag.as_indexed()));
        debug!(
            directed = pattern.directed_count(),
            undirected = pattern.undirected_count(),
            "pattern built"
        );
        pattern
    }

    /// Orient every edge the Meek rules force.
    ///
    /// Fails if the result would hold a directed cycle or a new unshielded
    /// collider, or, when extension checking is on, if no DAG extends it.
    #[instrument(
        name = "causal.complete",
        level = "debug",
        skip(self, pdag),
        fields(nodes = pdag.node_count())
    )]
    pub fn pdag_to_cpdag(&self, pdag: &Pdag) -> Result<Pdag, NotExtendable> {
        canonical::complete(pdag, &self.rules, self.verify_extendable)
    }

    /// One DAG consistent with every orientation in `pdag`.
    #[instrument(
        name = "causal.extend",
        level = "debug",
        skip(self, pdag),
        fields(nodes = pdag.node_count())
    )]
    pub fn extend_pdag(&self, pdag: &Pdag) -> Result<Dag, NotExtendable> {
        extend::extend(pdag)
    }

    /// Whether completing the pattern of `pdag` succeeds and gives back `pdag`.
    #[instrument(
        name = "causal.is_cpdag",
        level = "debug",
        skip(self, pdag),
        fields(nodes = pdag.node_count())
    )]
    pub fn is_cpdag(&self, pdag: &Pdag) -> bool {
        let pattern = Pdag::from_checked(pattern::pattern_of(pdag.as_indexed()));
        match self.pdag_to_cpdag(&pattern) {
            Ok(completed) => completed == *pdag,
            Err(e) => {
                debug!(reason = %e.reason, "pattern does not complete");
                false
            }
        }
    }

    /// Pattern followed by completion.
    pub fn dag_to_cpdag(&self, dag: &Dag) -> Pdag {
        let pattern = self.dag_to_pdag(dag);
        match self.pdag_to_cpdag(&pattern) {
            Ok(completed) => completed,
            Err(e) => {
                // The DAG itself extends its pattern, so this only happens
                // with an inconsistent rule set.
                warn!(reason = %e.reason, "completion of a DAG pattern failed");
                pattern
            }
        }
    }

    /// Same nodes, same skeleton and same unshielded colliders.
    pub fn is_markov_equivalent(&self, a: &Dag, b: &Dag) -> bool {
        self.dag_to_pdag(a) == self.dag_to_pdag(b)
    }
}

pub fn dag_to_pdag(dag: &Dag) -> Pdag {
    EquivalenceConverter::default().dag_to_pdag(dag)
}

pub fn pdag_to_cpdag(pdag: &Pdag) -> Result<Pdag, NotExtendable> {
    EquivalenceConverter::default().pdag_to_cpdag(pdag)
}

pub fn extend_pdag(pdag: &Pdag) -> Result<Dag, NotExtendable> {
    EquivalenceConverter::default().extend_pdag(pdag)
}

pub fn is_cpdag(pdag: &Pdag) -> bool {
    EquivalenceConverter::default().is_cpdag(pdag)
}

pub fn dag_to_cpdag(dag: &Dag) -> Pdag {
    EquivalenceConverter::default().dag_to_cpdag(dag)
}

pub fn is_markov_equivalent(a: &Dag, b: &Dag) -> bool {
    EquivalenceConverter::default().is_markov_equivalent(a, b)
}

/// Unshielded colliders `(a, c, b)` meaning `a -> c <- b`, with `a` before
/// `b` by label, sorted.
pub fn unshielded_colliders(pdag: &Pdag) -> Vec<(String, String, String)> {
    pattern::collider_labels(pdag.as_indexed())
}
