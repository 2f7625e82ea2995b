//! Error handling for causal graphs.
//! One error enum per concern, `thiserror` only, aggregated into [`CausalError`].

pub mod causal_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;

pub use causal_error::{CausalError, CausalResult};
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use graph_error::GraphError;
