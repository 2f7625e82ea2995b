//! Stable machine-readable error codes.

/// Implemented by every error enum so callers can branch on a code
/// instead of matching message text.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const EMPTY_GRAPH: &str = "EMPTY_GRAPH";
pub const EMPTY_NODE_LABEL: &str = "EMPTY_NODE_LABEL";
pub const DUPLICATE_NODE: &str = "DUPLICATE_NODE";
pub const UNKNOWN_NODE: &str = "UNKNOWN_NODE";
pub const SELF_LOOP: &str = "SELF_LOOP";
pub const PARALLEL_EDGE: &str = "PARALLEL_EDGE";
pub const INVALID_MARK_COMBINATION: &str = "INVALID_MARK_COMBINATION";
pub const INVALID_EDGE_TYPE: &str = "INVALID_EDGE_TYPE";
pub const NOT_PDAG: &str = "NOT_PDAG";
pub const NOT_DAG: &str = "NOT_DAG";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
