//! Completion of a PDAG to its canonical representative.

use causal_core::config::MeekRule;
use tracing::debug;

use crate::graph::{GraphView, Pdag};

use super::working::WorkingGraph;
use super::{extend, meek, NotExtendable};

/// Run the Meek rules to a fixpoint, then reject results that contain a
/// directed cycle or an unshielded collider the input did not have. With
/// `verify` set, the result must also admit a consistent extension.
pub(crate) fn complete(pdag: &Pdag, rules: &[MeekRule], verify: bool) -> Result<Pdag, NotExtendable> {
    let graph = pdag.as_indexed();
    let mut working = WorkingGraph::from_indexed(graph);
    let colliders_before = working.unshielded_colliders();
    let undirected_before = working.undirected_count();

    let passes = meek::apply_rules(&mut working, rules);
    debug!(
        passes,
        oriented = undirected_before - working.undirected_count(),
        "orientation rules settled"
    );

    if working.has_directed_cycle() {
        return Err(NotExtendable {
            reason: "orientation rules produced a directed cycle".to_string(),
        });
    }
    let colliders_after = working.unshielded_colliders();
    if let Some(&(a, c, b)) = colliders_after.difference(&colliders_before).next() {
        return Err(NotExtendable {
            reason: format!(
                "orientation creates unshielded collider {} -> {} <- {}",
                graph.label(a),
                graph.label(c),
                graph.label(b)
            ),
        });
    }

    let completed = Pdag::from_checked(working.apply_to(graph));
    if verify {
        extend::extend(&completed)?;
    }
    Ok(completed)
}
