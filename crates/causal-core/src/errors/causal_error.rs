use super::error_code::ErrorCode;
use super::{ConfigError, GraphError};

/// Top-level error aggregating every subsystem error via `From`.
#[derive(Debug, thiserror::Error)]
pub enum CausalError {
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ErrorCode for CausalError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type CausalResult<T> = Result<T, CausalError>;
