//! Tracing initialization and span names.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants;

static INIT: Once = Once::new();

/// Span names as constants for programmatic use.
///
/// `#[instrument(name = ...)]` only takes a string literal, so the
/// converter spans repeat these values; keep both in sync.
pub mod names {
    /// `trace_span!` in `IndexedGraph::build`.
    pub const CONSTRUCT: &str = "causal.construct";
    /// `#[instrument]` on `EquivalenceConverter::dag_to_pdag`.
    pub const PATTERN: &str = "causal.pattern";
    /// `#[instrument]` on `EquivalenceConverter::pdag_to_cpdag`.
    pub const COMPLETE: &str = "causal.complete";
    /// `#[instrument]` on `EquivalenceConverter::extend_pdag`.
    pub const EXTEND: &str = "causal.extend";
    /// `#[instrument]` on `EquivalenceConverter::is_cpdag`.
    pub const IS_CPDAG: &str = "causal.is_cpdag";
}

/// Initialize the global tracing subscriber.
///
/// Reads the `CAUSAL_LOG` environment variable for filter directives,
/// e.g. `CAUSAL_LOG=causal_graph=debug`. Falls back to the configured
/// level if `CAUSAL_LOG` is unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(constants::LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

        let registry = tracing_subscriber::registry().with(filter);
        let installed = if config.effective_json() {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_line_number(true))
                .try_init()
        };
        if let Err(e) = installed {
            tracing::debug!(error = %e, "tracing subscriber already installed");
        }
    });
}
