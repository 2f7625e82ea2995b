//! Structural validation errors raised while constructing graph values.

use super::error_code::{self, ErrorCode};

/// Violations detected by the validating graph constructors.
///
/// Construction stops at the first violation found, so a graph value
/// is either fully valid or never built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("graph has no nodes")]
    EmptyGraph,

    #[error("node label at position {position} is empty")]
    EmptyNodeLabel { position: usize },

    #[error("duplicate node: {node}")]
    DuplicateNode { node: String },

    #[error("edge references unknown node: {node}")]
    UnknownNode { node: String },

    #[error("edge joins node {node} to itself")]
    SelfLoop { node: String },

    #[error("more than one edge between {a} and {b}")]
    ParallelEdge { a: String, b: String },

    #[error("invalid mark combination: {combination}")]
    InvalidMarkCombination { combination: String },

    #[error("edge type {edge_type} not permitted in a {kind}")]
    InvalidEdgeType { edge_type: String, kind: String },

    #[error("not a PDAG, directed cycle: {path}")]
    NotPdag { path: String },

    #[error("not a DAG: {reason}")]
    NotDag { reason: String },
}

impl ErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyGraph => error_code::EMPTY_GRAPH,
            Self::EmptyNodeLabel { .. } => error_code::EMPTY_NODE_LABEL,
            Self::DuplicateNode { .. } => error_code::DUPLICATE_NODE,
            Self::UnknownNode { .. } => error_code::UNKNOWN_NODE,
            Self::SelfLoop { .. } => error_code::SELF_LOOP,
            Self::ParallelEdge { .. } => error_code::PARALLEL_EDGE,
            Self::InvalidMarkCombination { .. } => error_code::INVALID_MARK_COMBINATION,
            Self::InvalidEdgeType { .. } => error_code::INVALID_EDGE_TYPE,
            Self::NotPdag { .. } => error_code::NOT_PDAG,
            Self::NotDag { .. } => error_code::NOT_DAG,
        }
    }
}
