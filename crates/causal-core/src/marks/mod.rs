//! Edge-mark model: endpoint marks, the edge-type table, and edges
//! viewed from either endpoint.

pub mod edge;
pub mod edge_mark;
pub mod edge_type;

pub use edge::{Edge, EdgeSpec};
pub use edge_mark::EdgeMark;
pub use edge_type::{classify, parse_symbol, EdgeType};
