//! Directed-graph storage with insertion-order adjacency.
//!
//! This module provides [`DirectedGraph`], the central store every analysis
//! in this crate consumes. A graph is built incrementally by declaring each
//! vertex together with its complete successor list; vertices that are
//! referenced before (or instead of) being declared exist as placeholders
//! with an empty successor list. The store tracks in- and out-degree counters
//! alongside the adjacency, which the analyses use to find roots and leaves
//! without rescanning every edge.
//!
//! # Construction Model
//!
//! Unlike an edge-at-a-time builder, [`DirectedGraph::insert`] registers a
//! vertex's entire successor list at once and at most once. This mirrors how
//! control-flow graphs are produced by a front end: each basic block is
//! emitted exactly once with its branch targets. A second declaration of the
//! same vertex is rejected without mutating the store.
//!
//! # Examples
//!
//! ```rust
//! use domgraph::DirectedGraph;
//!
//! // Diamond: 0 -> {1, 2}, 1 -> {3}, 2 -> {3}
//! let mut graph = DirectedGraph::new();
//! assert!(graph.insert(0u64, vec![1, 2]));
//! assert!(graph.insert(1, vec![3]));
//! assert!(graph.insert(2, vec![3]));
//!
//! // 3 was only ever referenced; it exists as a leaf placeholder.
//! assert_eq!(graph.vertex_count(), 4);
//! assert_eq!(graph.out_degree_of(&3), Some(0));
//! assert_eq!(graph.in_degree_of(&3), Some(2));
//!
//! let order = graph.topological_sort().unwrap();
//! assert_eq!(order.first(), Some(&0));
//! assert_eq!(order.last(), Some(&3));
//! ```

pub mod algorithms;

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::graph::algorithms::{
    compute_dominators, compute_post_dominators, dominance_tree, topological_sort, DominatorSets,
};
use crate::Result;

/// A directed graph keyed by domain values, built by whole-vertex insertion.
///
/// `DirectedGraph<V>` stores, for every vertex ever declared or referenced:
/// its successor list (empty for placeholders), its in-degree (number of
/// insertion edges pointing at it, counted with multiplicity), and its
/// out-degree (length of its declared successor list).
///
/// # Type Parameters
///
/// * `V` - The vertex identity type. Any `Eq + Hash + Clone` value works;
///   analyses that must produce deterministic output additionally require
///   `Ord`, and DOT export requires `Display`.
///
/// # Ownership
///
/// A graph is owned by exactly one context at a time: producers mutate it
/// through `&mut self`, analyses read it through `&self` and return freshly
/// allocated results. Derived trees are new `DirectedGraph` values with no
/// aliasing back to their source.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    /// Successor lists in declared order. Placeholder entries are empty.
    successors: HashMap<V, Vec<V>>,
    /// Insertion edges pointing at each vertex, counted with multiplicity.
    in_degree: HashMap<V, usize>,
    /// Declared successor count per vertex; 0 for placeholders.
    out_degree: HashMap<V, usize>,
}

impl<V> Default for DirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            successors: HashMap::new(),
            in_degree: HashMap::new(),
            out_degree: HashMap::new(),
        }
    }

    /// Creates a new graph with pre-allocated capacity for `vertices`.
    #[must_use]
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            successors: HashMap::with_capacity(vertices),
            in_degree: HashMap::with_capacity(vertices),
            out_degree: HashMap::with_capacity(vertices),
        }
    }

    /// Declares `vertex` with its complete successor list.
    ///
    /// Every entry of `successors` gains a placeholder adjacency entry (if
    /// not yet present) and one in-degree count per occurrence; a successor
    /// listed twice is two insertion edges. `vertex` itself gets the list as
    /// its adjacency, `successors.len()` as its out-degree, and an in-degree
    /// entry of 0 unless earlier declarations already referenced it.
    ///
    /// A vertex previously referenced only as a successor (or declared with
    /// an empty list, the two are indistinguishable) is a placeholder, and
    /// declaring it replaces the placeholder. Declaring a vertex that already
    /// carries a non-empty successor list fails.
    ///
    /// # Returns
    ///
    /// `true` if the declaration was installed; `false` if `vertex` was
    /// already declared, in which case the store is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use domgraph::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new();
    /// assert!(graph.insert(5u64, vec![6, 7]));
    /// assert!(!graph.insert(5, vec![8])); // duplicate declaration
    /// assert_eq!(graph.successors_of(&5), &[6, 7]); // first one wins
    /// ```
    pub fn insert(&mut self, vertex: V, successors: Vec<V>) -> bool {
        if self.successors.get(&vertex).is_some_and(|s| !s.is_empty()) {
            return false;
        }

        for succ in &successors {
            self.successors.entry(succ.clone()).or_default();
            *self.in_degree.entry(succ.clone()).or_insert(0) += 1;
            self.out_degree.entry(succ.clone()).or_insert(0);
        }

        self.out_degree.insert(vertex.clone(), successors.len());
        self.in_degree.entry(vertex.clone()).or_insert(0);
        self.successors.insert(vertex, successors);
        true
    }

    /// Returns an iterator over every vertex ever declared or referenced.
    ///
    /// The order is implementation-defined; callers that need a stable order
    /// must sort (as [`crate::dot::to_dot`] does).
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.in_degree.keys()
    }

    /// Returns the declared successor list of `vertex`, in declaration order.
    ///
    /// Placeholders and unknown vertices both yield an empty slice.
    #[must_use]
    pub fn successors_of(&self, vertex: &V) -> &[V] {
        self.successors.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Returns the in-degree of `vertex`, or `None` if the vertex is unknown.
    #[must_use]
    pub fn in_degree_of(&self, vertex: &V) -> Option<usize> {
        self.in_degree.get(vertex).copied()
    }

    /// Returns the out-degree of `vertex`, or `None` if the vertex is unknown.
    #[must_use]
    pub fn out_degree_of(&self, vertex: &V) -> Option<usize> {
        self.out_degree.get(vertex).copied()
    }

    /// Returns `true` if `vertex` has ever been declared or referenced.
    #[must_use]
    pub fn contains(&self, vertex: &V) -> bool {
        self.in_degree.contains_key(vertex)
    }

    /// Returns the number of vertices (declared plus referenced).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.in_degree.len()
    }

    /// Returns the number of declared edges, counted with multiplicity.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }

    /// Returns `true` if the graph contains no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_degree.is_empty()
    }

    /// Returns an iterator over all vertices with in-degree zero.
    ///
    /// These are the entry candidates the dominator analysis hangs off its
    /// virtual entry, and the targets of `Start` sentinel edges in exports.
    pub fn roots(&self) -> impl Iterator<Item = &V> {
        self.in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(vertex, _)| vertex)
    }

    /// Returns an iterator over all vertices with out-degree zero.
    ///
    /// These are the exit candidates for post-dominator analysis and the
    /// sources of `End` sentinel edges in exports.
    pub fn leaves(&self) -> impl Iterator<Item = &V> {
        self.out_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(vertex, _)| vertex)
    }

    /// Returns an iterator over every declared edge as `(from, to)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.successors
            .iter()
            .flat_map(|(from, succs)| succs.iter().map(move |to| (from, to)))
    }

    /// Computes a topological ordering of all vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Cycle`](crate::Error::Cycle) if the graph contains a
    /// cycle; see [`algorithms::topological_sort`].
    pub fn topological_sort(&self) -> Result<Vec<V>> {
        topological_sort(self)
    }

    /// Computes the dominator sets of every vertex reachable from the
    /// graph's roots. See [`algorithms::compute_dominators`].
    #[must_use]
    pub fn dominators(&self) -> DominatorSets<V> {
        compute_dominators(self)
    }

    /// Computes the post-dominator sets of every vertex that can reach one
    /// of the graph's leaves. See [`algorithms::compute_post_dominators`].
    #[must_use]
    pub fn post_dominators(&self) -> DominatorSets<V> {
        compute_post_dominators(self)
    }
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone + Ord,
{
    /// Builds the dominator tree of this graph as a fresh `DirectedGraph`.
    ///
    /// Each vertex's successor list in the result is its set of immediately
    /// dominated vertices. See [`algorithms::dominance_tree`].
    #[must_use]
    pub fn dominator_tree(&self) -> DirectedGraph<V> {
        dominance_tree(&self.dominators())
    }

    /// Builds the post-dominator tree of this graph as a fresh
    /// `DirectedGraph`. See [`algorithms::dominance_tree`].
    #[must_use]
    pub fn post_dominator_tree(&self) -> DirectedGraph<V> {
        dominance_tree(&self.post_dominators())
    }
}

impl<V> DirectedGraph<V>
where
    V: Eq + Hash + Clone + Ord + Display,
{
    /// Serializes this graph to DOT format. See [`crate::dot::to_dot`].
    #[must_use]
    pub fn to_dot(&self, name: &str, sentinels: bool) -> String {
        crate::dot::to_dot(self, name, sentinels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_basic() {
        let mut graph = DirectedGraph::new();
        assert!(graph.insert(1u64, vec![2, 3]));

        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors_of(&1), &[2, 3]);
        assert_eq!(graph.out_degree_of(&1), Some(2));
        assert_eq!(graph.in_degree_of(&1), Some(0));
        assert_eq!(graph.in_degree_of(&2), Some(1));
        assert_eq!(graph.in_degree_of(&3), Some(1));
    }

    #[test]
    fn test_insert_duplicate_fails_without_mutation() {
        let mut graph = DirectedGraph::new();
        assert!(graph.insert(1u64, vec![2, 3]));
        assert!(!graph.insert(1, vec![4]));

        // First declaration intact, 4 never entered the store.
        assert_eq!(graph.successors_of(&1), &[2, 3]);
        assert!(!graph.contains(&4));
        assert_eq!(graph.in_degree_of(&2), Some(1));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_insert_replaces_placeholder() {
        let mut graph = DirectedGraph::new();
        assert!(graph.insert(1u64, vec![2]));

        // 2 exists only as a placeholder and may still be declared.
        assert_eq!(graph.out_degree_of(&2), Some(0));
        assert!(graph.insert(2, vec![3]));
        assert_eq!(graph.successors_of(&2), &[3]);
        assert_eq!(graph.out_degree_of(&2), Some(1));
        assert_eq!(graph.in_degree_of(&2), Some(1));
    }

    #[test]
    fn test_insert_empty_list_is_placeholder() {
        let mut graph = DirectedGraph::new();
        assert!(graph.insert(1u64, vec![]));

        // An empty declaration is indistinguishable from a placeholder and
        // can be upgraded exactly once.
        assert!(graph.insert(1, vec![2]));
        assert!(!graph.insert(1, vec![3]));
        assert_eq!(graph.successors_of(&1), &[2]);
    }

    #[test]
    fn test_insert_duplicate_successor_counts_twice() {
        let mut graph = DirectedGraph::new();
        assert!(graph.insert(1u64, vec![2, 2]));

        assert_eq!(graph.in_degree_of(&2), Some(2));
        assert_eq!(graph.out_degree_of(&1), Some(2));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_insert_self_loop() {
        let mut graph = DirectedGraph::new();
        assert!(graph.insert(1u64, vec![1]));

        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.in_degree_of(&1), Some(1));
        assert_eq!(graph.out_degree_of(&1), Some(1));
    }

    #[test]
    fn test_roots_and_leaves() {
        let mut graph = DirectedGraph::new();
        graph.insert(1u64, vec![2]);
        graph.insert(2, vec![3]);

        let roots: Vec<&u64> = graph.roots().collect();
        assert_eq!(roots, vec![&1]);

        let leaves: Vec<&u64> = graph.leaves().collect();
        assert_eq!(leaves, vec![&3]);
    }

    #[test]
    fn test_edges_iterator() {
        let mut graph = DirectedGraph::new();
        graph.insert(1u64, vec![2, 3]);
        graph.insert(2, vec![3]);

        let mut edges: Vec<(u64, u64)> = graph.edges().map(|(a, b)| (*a, *b)).collect();
        edges.sort_unstable();
        assert_eq!(edges, vec![(1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn test_vertices_cover_declared_and_referenced() {
        let mut graph = DirectedGraph::new();
        graph.insert(1u64, vec![2, 3]);

        let mut vertices: Vec<u64> = graph.vertices().copied().collect();
        vertices.sort_unstable();
        assert_eq!(vertices, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_graph() {
        let graph: DirectedGraph<u64> = DirectedGraph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.topological_sort().unwrap().is_empty());
    }

    #[test]
    fn test_string_vertices() {
        let mut graph: DirectedGraph<String> = DirectedGraph::new();
        assert!(graph.insert("entry".into(), vec!["exit".into()]));
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.in_degree_of(&"exit".to_string()), Some(1));
    }

    #[test]
    fn test_degree_consistency_after_many_inserts() {
        let mut graph = DirectedGraph::new();
        graph.insert(0u64, vec![1, 2]);
        graph.insert(1, vec![3]);
        graph.insert(2, vec![3]);
        graph.insert(3, vec![]);

        // In-degree of every vertex equals its occurrences across all
        // declared lists; out-degree equals its declared list length.
        for v in graph.vertices() {
            let referenced = graph
                .edges()
                .filter(|(_, to)| *to == v)
                .count();
            assert_eq!(graph.in_degree_of(v), Some(referenced));
            assert_eq!(graph.out_degree_of(v), Some(graph.successors_of(v).len()));
        }
    }
}
