//! Configuration for causal graph handling.
//! TOML-based, resolved as: env > config file > compiled defaults.

pub mod causal_config;
pub mod convert_config;
pub mod observability_config;

pub use causal_config::CausalConfig;
pub use convert_config::{ConvertConfig, MeekRule};
pub use observability_config::ObservabilityConfig;
