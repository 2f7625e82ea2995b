//! A single edge between two labelled nodes.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::edge_type::{classify, parse_symbol, view_symbol};
use super::{EdgeMark, EdgeType};
use crate::errors::GraphError;

/// An edge seen from endpoint `a`.
///
/// The same edge may be viewed from either end; [`Edge::reverse`] switches
/// the view and [`Edge::canonical`] picks the view whose marks match the
/// edge type's table row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    a: String,
    mark_a: EdgeMark,
    b: String,
    mark_b: EdgeMark,
    edge_type: EdgeType,
}

impl Edge {
    /// Build an edge from the marks at each end. Either orientation of the
    /// marks must name an edge type.
    pub fn new(
        a: impl Into<String>,
        mark_a: EdgeMark,
        b: impl Into<String>,
        mark_b: EdgeMark,
    ) -> Result<Self, GraphError> {
        let edge_type = match classify(mark_a, mark_b) {
            Ok(edge_type) => edge_type,
            Err(e) => classify(mark_b, mark_a).map_err(|_| e)?,
        };
        Ok(Self {
            a: a.into(),
            mark_a,
            b: b.into(),
            mark_b,
            edge_type,
        })
    }

    /// Build an edge from an `(a, symbol, b)` triple such as `("A", "<-", "B")`.
    pub fn from_symbol(
        a: impl Into<String>,
        symbol: &str,
        b: impl Into<String>,
    ) -> Result<Self, GraphError> {
        let (mark_a, mark_b) = parse_symbol(symbol)?;
        Self::new(a, mark_a, b, mark_b)
    }

    pub fn a(&self) -> &str {
        &self.a
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    pub fn mark_a(&self) -> EdgeMark {
        self.mark_a
    }

    pub fn mark_b(&self) -> EdgeMark {
        self.mark_b
    }

    pub fn edge_type(&self) -> EdgeType {
        self.edge_type
    }

    /// The same edge seen from the other endpoint.
    pub fn reverse(&self) -> Self {
        Self {
            a: self.b.clone(),
            mark_a: self.mark_b,
            b: self.a.clone(),
            mark_b: self.mark_a,
            edge_type: self.edge_type,
        }
    }

    pub fn is_canonical(&self) -> bool {
        self.edge_type.marks() == (self.mark_a, self.mark_b)
    }

    /// The view in which the marks read in table order (`A -> B`, never `B <- A`).
    pub fn canonical(&self) -> Self {
        if self.is_canonical() {
            self.clone()
        } else {
            self.reverse()
        }
    }

    /// Symbol for this view, e.g. `<-` for a directed edge seen from its head.
    pub fn symbol(&self) -> &'static str {
        view_symbol(self.mark_a, self.mark_b).unwrap_or(self.edge_type.symbol())
    }

    /// The canonical `(a, symbol, b)` triple.
    pub fn to_spec(&self) -> EdgeSpec {
        let canonical = self.canonical();
        EdgeSpec::new(canonical.a, canonical.edge_type.symbol(), canonical.b)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.symbol(), self.b)
    }
}

/// The external `(endpoint_a, symbol, endpoint_b)` edge notation consumed
/// from readers and handed to writers. Serializes as a three-element array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct EdgeSpec {
    pub a: String,
    pub symbol: String,
    pub b: String,
}

impl EdgeSpec {
    pub fn new(a: impl Into<String>, symbol: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            symbol: symbol.into(),
            b: b.into(),
        }
    }

    /// Resolve the symbol and build the edge it describes.
    pub fn to_edge(&self) -> Result<Edge, GraphError> {
        Edge::from_symbol(self.a.as_str(), &self.symbol, self.b.as_str())
    }
}

impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.a, self.symbol, self.b)
    }
}

impl From<(String, String, String)> for EdgeSpec {
    fn from((a, symbol, b): (String, String, String)) -> Self {
        Self { a, symbol, b }
    }
}

impl From<(&str, &str, &str)> for EdgeSpec {
    fn from((a, symbol, b): (&str, &str, &str)) -> Self {
        Self::new(a, symbol, b)
    }
}

impl From<EdgeSpec> for (String, String, String) {
    fn from(spec: EdgeSpec) -> Self {
        (spec.a, spec.symbol, spec.b)
    }
}
