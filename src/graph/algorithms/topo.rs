//! Topological ordering via Kahn's algorithm.
//!
//! The sort runs over a scratch copy of the graph's in-degree counters, so
//! the store itself is never mutated. Cycle detection falls out of the
//! algorithm: any vertex that never reaches zero working in-degree sits on
//! or behind a cycle, and the sort fails rather than emit a partial order.

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Computes a topological ordering of all vertices in `graph`.
///
/// Implements Kahn's algorithm: seed a FIFO queue with every vertex of
/// in-degree zero, then repeatedly dequeue a vertex, append it to the output
/// and decrement the working in-degree of each of its successors, enqueueing
/// any successor that reaches zero. Ties among simultaneously eligible
/// vertices resolve in queue order; callers must not rely on any property of
/// the result beyond "every edge points forward".
///
/// # Arguments
///
/// * `graph` - The graph to order; read-only.
///
/// # Returns
///
/// A vector containing every declared and referenced vertex, in an order
/// where for every edge `u -> v`, `u` precedes `v`.
///
/// # Errors
///
/// Returns [`Error::Cycle`] if the output would be shorter than the vertex
/// count, meaning at least one vertex never became eligible: the graph
/// contains a cycle and no valid ordering exists.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V) for the scratch degree map and queue
///
/// # Examples
///
/// ```rust
/// use domgraph::{graph::algorithms::topological_sort, DirectedGraph};
///
/// let mut graph = DirectedGraph::new();
/// graph.insert(0u64, vec![1, 2]);
/// graph.insert(1, vec![3]);
/// graph.insert(2, vec![3]);
///
/// let order = topological_sort(&graph).unwrap();
/// let pos = |v: u64| order.iter().position(|&x| x == v).unwrap();
/// assert!(pos(0) < pos(1));
/// assert!(pos(0) < pos(2));
/// assert!(pos(1) < pos(3));
/// assert!(pos(2) < pos(3));
/// ```
pub fn topological_sort<V>(graph: &DirectedGraph<V>) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone,
{
    let mut remaining: HashMap<&V, usize> = graph
        .vertices()
        .map(|v| (v, graph.in_degree_of(v).unwrap_or(0)))
        .collect();

    let mut queue: VecDeque<&V> = remaining
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(vertex, _)| *vertex)
        .collect();

    let mut order = Vec::with_capacity(graph.vertex_count());

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex.clone());

        for succ in graph.successors_of(vertex) {
            if let Some(degree) = remaining.get_mut(succ) {
                *degree -= 1;
                if *degree == 0 {
                    queue.push_back(succ);
                }
            }
        }
    }

    if order.len() < graph.vertex_count() {
        return Err(Error::Cycle {
            missing: graph.vertex_count() - order.len(),
        });
    }

    Ok(order)
}
