/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV_VAR: &str = "CAUSAL_LOG";

/// Log level used when neither `CAUSAL_LOG` nor config specify one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted by the observability config.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Integer written to the adjacency matrix where two nodes are not adjacent.
pub const NO_EDGE_CODE: i8 = 0;

/// Separator between parents in the compact DAG notation `[C|A:B]`.
pub const PARENT_SEPARATOR: char = ':';
