//! Plain serde representation shared by every graph type.

use std::fmt;

use causal_core::EdgeSpec;
use serde::{Deserialize, Serialize};

use super::GraphView;

/// `{ "nodes": [...], "edges": [[a, symbol, b], ...] }`.
///
/// Graph types deserialize through this form and run their validating
/// constructor on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    pub fn new<N, E>(nodes: impl IntoIterator<Item = N>, edges: impl IntoIterator<Item = E>) -> Self
    where
        N: Into<String>,
        E: Into<EdgeSpec>,
    {
        Self {
            nodes: nodes.into_iter().map(Into::into).collect(),
            edges: edges.into_iter().map(Into::into).collect(),
        }
    }

    pub fn of(graph: &impl GraphView) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph.edge_specs(),
        }
    }
}

impl fmt::Display for GraphSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nodes [{}]", self.nodes.join(", "))?;
        for edge in &self.edges {
            write!(f, "; {edge}")?;
        }
        Ok(())
    }
}
