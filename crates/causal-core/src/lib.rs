//! # causal-core
//!
//! Foundation crate for causal graph handling.
//! Defines edge marks and edge types, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod marks;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::CausalConfig;
pub use errors::{CausalError, CausalResult, GraphError};
pub use marks::{classify, Edge, EdgeMark, EdgeSpec, EdgeType};
