use thiserror::Error;

/// The generic Error type covering all failures this library can return.
///
/// Graph construction itself signals duplicate declarations through the
/// boolean return of [`DirectedGraph::insert`](crate::DirectedGraph::insert);
/// the variants here are the fatal, propagated failures: an ordering that
/// cannot exist, or input that cannot be read.
///
/// # Examples
///
/// ```rust
/// use domgraph::{DirectedGraph, Error};
///
/// let mut graph = DirectedGraph::new();
/// graph.insert(0u64, vec![1]);
/// graph.insert(1u64, vec![0]);
///
/// match graph.topological_sort() {
///     Err(Error::Cycle { .. }) => {} // no valid ordering exists
///     other => panic!("expected cycle error, got {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The graph contains at least one cycle, so no topological ordering
    /// exists.
    ///
    /// `missing` is the number of vertices that never reached zero working
    /// in-degree during Kahn's algorithm; every one of them sits on or
    /// behind a cycle.
    #[error("graph contains a cycle: {missing} vertices could not be ordered")]
    Cycle {
        /// Number of vertices left unordered when the worklist drained.
        missing: usize,
    },

    /// The textual input declared the same vertex twice.
    ///
    /// Surfaced by [`read_graph`](crate::reader::read_graph) when the
    /// underlying [`insert`](crate::DirectedGraph::insert) reports a
    /// duplicate declaration.
    #[error("line {line}: vertex declared more than once")]
    DuplicateVertex {
        /// 1-based input line of the offending declaration.
        line: usize,
    },

    /// A token in the textual input could not be parsed as a vertex.
    #[error("line {line}: cannot parse token `{token}` as a vertex")]
    Parse {
        /// 1-based input line containing the token.
        line: usize,
        /// The token that failed to parse.
        token: String,
    },

    /// I/O error while reading graph input.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
