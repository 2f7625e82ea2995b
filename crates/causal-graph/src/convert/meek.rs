//! Meek orientation rules.
//!
//! Each rule tests whether an undirected edge `x -- y` is forced to `x -> y`:
//!
//! - R1: `a -> x`, `a` and `y` not adjacent.
//! - R2: `x -> z -> y`.
//! - R3: `x -- c`, `x -- d`, `c -> y`, `d -> y`, `c` and `d` not adjacent.
//! - R4: `x -- k`, `k -> l -> y`, `k` and `y` not adjacent, `x` adjacent to `l`.

use causal_core::config::MeekRule;
use tracing::trace;

use super::working::WorkingGraph;

/// Apply `rules` to every undirected edge until a full pass orients nothing.
/// Orientations take effect immediately within a pass. Passes are capped at
/// the starting number of undirected edges plus one. Returns passes run.
pub(crate) fn apply_rules(working: &mut WorkingGraph, rules: &[MeekRule]) -> usize {
    let cap = working.undirected_count() + 1;
    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;
        for (u, v) in working.undirected_edges() {
            if !working.is_undirected(u, v) {
                continue;
            }
            let forced = match implied_by(working, rules, u, v) {
                Some(rule) => Some((u, v, rule)),
                None => implied_by(working, rules, v, u).map(|rule| (v, u, rule)),
            };
            if let Some((from, to, rule)) = forced {
                trace!(from, to, %rule, "edge oriented");
                working.orient(from, to);
                changed = true;
            }
        }
        if !changed || passes >= cap {
            return passes;
        }
    }
}

/// First enabled rule forcing `x -> y`.
fn implied_by(working: &WorkingGraph, rules: &[MeekRule], x: usize, y: usize) -> Option<MeekRule> {
    rules.iter().copied().find(|rule| match rule {
        MeekRule::R1 => rule_one(working, x, y),
        MeekRule::R2 => rule_two(working, x, y),
        MeekRule::R3 => rule_three(working, x, y),
        MeekRule::R4 => rule_four(working, x, y),
    })
}

fn rule_one(working: &WorkingGraph, x: usize, y: usize) -> bool {
    working
        .parents(x)
        .iter()
        .any(|&a| a != y && !working.adjacent(a, y))
}

fn rule_two(working: &WorkingGraph, x: usize, y: usize) -> bool {
    working
        .children(x)
        .iter()
        .any(|&z| working.is_directed(z, y))
}

fn rule_three(working: &WorkingGraph, x: usize, y: usize) -> bool {
    let into_y: Vec<usize> = working
        .undirected(x)
        .iter()
        .copied()
        .filter(|&c| c != y && working.is_directed(c, y))
        .collect();
    into_y.iter().enumerate().any(|(i, &c)| {
        into_y[i + 1..]
            .iter()
            .any(|&d| !working.adjacent(c, d))
    })
}

fn rule_four(working: &WorkingGraph, x: usize, y: usize) -> bool {
    working.undirected(x).iter().any(|&k| {
        k != y
            && !working.adjacent(k, y)
            && working
                .children(k)
                .iter()
                .any(|&l| working.is_directed(l, y) && working.adjacent(x, l))
    })
}
