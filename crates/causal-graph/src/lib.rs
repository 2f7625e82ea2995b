//! # causal-graph
//!
//! Immutable causal graph values and Markov-equivalence conversion.
//!
//! - [`GeneralGraph`]: any mix of the six edge types, one edge per node pair.
//! - [`Pdag`]: directed and undirected edges, no directed cycle.
//! - [`Dag`]: directed edges only, with a deterministic topological order.
//!
//! All three share one validated representation and the [`GraphView`] queries.
//! The [`convert`] module moves between them: DAG to pattern, pattern to
//! CPDAG, PDAG to a consistent DAG extension.

pub mod convert;
pub mod graph;

pub use convert::{EquivalenceConverter, NotExtendable};
pub use graph::adjacency::AdjacencyMatrix;
pub use graph::full::Dag;
pub use graph::general::GeneralGraph;
pub use graph::partial::Pdag;
pub use graph::spec::GraphSpec;
pub use graph::GraphView;
