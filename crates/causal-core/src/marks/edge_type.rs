//! The finite edge-type table and symbol resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::EdgeMark;
use crate::errors::GraphError;

/// Supported edge types. Each pairs the mark at its first endpoint with
/// the mark at its second endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// `a -> b`
    Directed,
    /// `a -- b`
    Undirected,
    /// `a <-> b`
    Bidirected,
    /// `a o-> b`
    SemiDirected,
    /// `a o-o b`
    NonDirected,
    /// `a o- b`
    SemiUndirected,
}

/// Every symbol accepted on input, with the marks it puts at the first
/// and second endpoint. Canonical symbols come before their aliases so
/// that [`view_symbol`] prefers them.
const SYMBOLS: [(&str, EdgeMark, EdgeMark); 10] = [
    ("->", EdgeMark::Tail, EdgeMark::Arrow),
    ("--", EdgeMark::Tail, EdgeMark::Tail),
    ("<->", EdgeMark::Arrow, EdgeMark::Arrow),
    ("o->", EdgeMark::Circle, EdgeMark::Arrow),
    ("o-o", EdgeMark::Circle, EdgeMark::Circle),
    ("o-", EdgeMark::Circle, EdgeMark::Tail),
    ("<-", EdgeMark::Arrow, EdgeMark::Tail),
    ("<-o", EdgeMark::Arrow, EdgeMark::Circle),
    ("-o", EdgeMark::Tail, EdgeMark::Circle),
    ("-", EdgeMark::Tail, EdgeMark::Tail),
];

impl EdgeType {
    pub const ALL: [EdgeType; 6] = [
        Self::Directed,
        Self::Undirected,
        Self::Bidirected,
        Self::SemiDirected,
        Self::NonDirected,
        Self::SemiUndirected,
    ];

    /// Integer code used in adjacency matrices. Zero is reserved for "no edge".
    pub fn code(self) -> i8 {
        match self {
            Self::Directed => 1,
            Self::Undirected => 2,
            Self::Bidirected => 3,
            Self::SemiDirected => 4,
            Self::NonDirected => 5,
            Self::SemiUndirected => 6,
        }
    }

    pub fn from_code(code: i8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Marks at the (first, second) endpoint.
    pub fn marks(self) -> (EdgeMark, EdgeMark) {
        match self {
            Self::Directed => (EdgeMark::Tail, EdgeMark::Arrow),
            Self::Undirected => (EdgeMark::Tail, EdgeMark::Tail),
            Self::Bidirected => (EdgeMark::Arrow, EdgeMark::Arrow),
            Self::SemiDirected => (EdgeMark::Circle, EdgeMark::Arrow),
            Self::NonDirected => (EdgeMark::Circle, EdgeMark::Circle),
            Self::SemiUndirected => (EdgeMark::Circle, EdgeMark::Tail),
        }
    }

    /// Canonical display symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Directed => "->",
            Self::Undirected => "--",
            Self::Bidirected => "<->",
            Self::SemiDirected => "o->",
            Self::NonDirected => "o-o",
            Self::SemiUndirected => "o-",
        }
    }

    pub fn is_directed(self) -> bool {
        self == Self::Directed
    }

    pub fn is_undirected(self) -> bool {
        self == Self::Undirected
    }

    /// Same mark at both ends, so the endpoint order carries no meaning.
    pub fn is_symmetric(self) -> bool {
        let (first, second) = self.marks();
        first == second
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Classify an ordered pair of endpoint marks.
///
/// Order-sensitive: `(Tail, Arrow)` is [`EdgeType::Directed`] while
/// `(Arrow, Tail)` names no type and fails, as does any pair involving
/// [`EdgeMark::None`].
pub fn classify(mark_a: EdgeMark, mark_b: EdgeMark) -> Result<EdgeType, GraphError> {
    EdgeType::ALL
        .into_iter()
        .find(|t| t.marks() == (mark_a, mark_b))
        .ok_or_else(|| GraphError::InvalidMarkCombination {
            combination: format!("{mark_a}/{mark_b}"),
        })
}

/// Resolve an input symbol to the (first, second) marks it denotes.
pub fn parse_symbol(symbol: &str) -> Result<(EdgeMark, EdgeMark), GraphError> {
    SYMBOLS
        .iter()
        .find(|(s, _, _)| *s == symbol)
        .map(|&(_, a, b)| (a, b))
        .ok_or_else(|| GraphError::InvalidMarkCombination {
            combination: format!("unknown symbol {symbol:?}"),
        })
}

/// Symbol for an edge seen with `mark_a` at the near end, including the
/// mirrored forms (`<-`, `<-o`, `-o`) that no edge type uses canonically.
pub(crate) fn view_symbol(mark_a: EdgeMark, mark_b: EdgeMark) -> Option<&'static str> {
    SYMBOLS
        .iter()
        .find(|(_, a, b)| *a == mark_a && *b == mark_b)
        .map(|(s, _, _)| *s)
}
