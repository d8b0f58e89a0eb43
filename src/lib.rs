#![doc(html_no_source)]
#![deny(missing_docs)]

//! # domgraph
//!
//! A directed-graph analysis library for control-flow-style graphs: build a
//! graph from vertex → successor declarations, compute a topological
//! ordering, compute dominator and post-dominator trees via iterative
//! fixed-point dataflow, and export any graph as Graphviz DOT text.
//!
//! ## Features
//!
//! - **Whole-vertex construction** - each vertex is declared exactly once
//!   with its complete successor list; forward references become
//!   placeholders that are resolved when declared
//! - **Topological ordering** - Kahn's algorithm with explicit cycle
//!   failure instead of a partial order
//! - **Dominance analysis** - dominator and post-dominator sets over a
//!   virtually-augmented graph, immediate dominators derived from the
//!   dominance partial order, trees materialized as ordinary graphs
//! - **Deterministic DOT export** - sorted edge-list output with optional
//!   `Start`/`End` sentinel nodes
//!
//! ## Quick Start
//!
//! ```rust
//! use domgraph::DirectedGraph;
//!
//! // if/else: 0 branches to 1 and 2, both rejoin at 3
//! let mut graph = DirectedGraph::new();
//! graph.insert(0u64, vec![1, 2]);
//! graph.insert(1, vec![3]);
//! graph.insert(2, vec![3]);
//!
//! // A valid topological order exists since there is no cycle.
//! let order = graph.topological_sort()?;
//! assert_eq!(order.len(), 4);
//!
//! // The branch head dominates the join; neither arm does.
//! let doms = graph.dominators();
//! assert!(doms.dominates(&0, &3));
//! assert!(!doms.strictly_dominates(&1, &3));
//!
//! // The dominator tree is itself a graph and exports like any other.
//! let tree = graph.dominator_tree();
//! let dot = tree.to_dot("Dominator Tree", false);
//! assert!(dot.starts_with("digraph {"));
//! # Ok::<(), domgraph::Error>(())
//! ```
//!
//! ## Reading Graphs from Text
//!
//! The [`reader`] module consumes a line-oriented format (one declaration
//! per line: vertex first, successors after), which is also what the
//! `domgraph` CLI feeds from stdin:
//!
//! ```rust
//! use domgraph::prelude::*;
//!
//! let graph = read_graph::<u64, _>("0 1 2\n1 3\n2 3\n".as_bytes())?;
//! assert_eq!(graph.vertex_count(), 4);
//! # Ok::<(), domgraph::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`graph`] - The [`DirectedGraph`] store and its
//!   [`algorithms`](graph::algorithms) (topological sort, dominators,
//!   dominance trees)
//! - [`dot`] - DOT serialization
//! - [`reader`] - Textual graph input
//! - [`prelude`] - Convenient re-exports
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Ownership Model
//!
//! A graph is mutated only while it is being built; analyses borrow it
//! immutably and return freshly allocated results. Dominance trees are new
//! [`DirectedGraph`] values with no back-reference to their source, so they
//! can outlive it or be analyzed and exported independently.

mod error;

pub mod dot;
pub mod graph;
pub mod prelude;
pub mod reader;

pub use error::{Error, Result};
pub use graph::DirectedGraph;
