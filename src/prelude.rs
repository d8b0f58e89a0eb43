//! # domgraph Prelude
//!
//! Convenient re-exports of the most commonly used types and functions.
//! Import this module to get quick access to the essentials for building a
//! graph, running the analyses, and exporting the results.
//!
//! ```rust
//! use domgraph::prelude::*;
//!
//! let mut graph = DirectedGraph::new();
//! graph.insert(0u64, vec![1]);
//! let order = graph.topological_sort()?;
//! assert_eq!(order, vec![0, 1]);
//! # Ok::<(), domgraph::Error>(())
//! ```

/// The main error type for all domgraph operations
pub use crate::Error;

/// The result type used throughout domgraph
pub use crate::Result;

/// The central graph store consumed by every analysis
pub use crate::DirectedGraph;

/// Dominator-set results and their query interface
pub use crate::graph::algorithms::DominatorSets;

/// Standalone analysis entry points
pub use crate::graph::algorithms::{
    compute_dominators, compute_post_dominators, dominance_tree, topological_sort,
};

/// DOT serialization
pub use crate::dot::to_dot;

/// Line-oriented graph input
pub use crate::reader::read_graph;
