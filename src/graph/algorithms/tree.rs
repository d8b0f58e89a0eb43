//! Dominance-tree construction from dominator sets.
//!
//! The immediate-dominator relation of a dominator (or post-dominator)
//! analysis forms a forest: every vertex except the forest roots has exactly
//! one immediate dominator. This module materializes that forest as a fresh
//! [`DirectedGraph`] whose edges run parent → child, which makes the tree
//! exportable and traversable with the same machinery as any other graph.

use std::collections::HashMap;
use std::hash::Hash;

use crate::graph::algorithms::DominatorSets;
use crate::graph::DirectedGraph;

/// Builds the dominance tree encoded by `sets` as a fresh graph.
///
/// Every vertex covered by the analysis appears in the result exactly once.
/// A vertex with an immediate dominator becomes a successor of that
/// dominator; forest roots keep an in-degree of zero. Child lists are sorted
/// so repeated runs over the same input produce identical trees.
///
/// Each vertex is declared exactly once (it has at most one parent), so
/// every internal insertion succeeds by construction.
///
/// # Examples
///
/// ```rust
/// use domgraph::{graph::algorithms::dominance_tree, DirectedGraph};
///
/// let mut graph = DirectedGraph::new();
/// graph.insert(0u64, vec![1, 2]);
/// graph.insert(1, vec![3]);
/// graph.insert(2, vec![3]);
///
/// let tree = dominance_tree(&graph.dominators());
/// // 0 immediately dominates 1, 2 and the join vertex 3.
/// assert_eq!(tree.successors_of(&0), &[1, 2, 3]);
/// assert_eq!(tree.successors_of(&3), &[] as &[u64]);
/// ```
#[must_use]
pub fn dominance_tree<V>(sets: &DominatorSets<V>) -> DirectedGraph<V>
where
    V: Eq + Hash + Clone + Ord,
{
    let mut children: HashMap<&V, Vec<V>> = HashMap::new();
    for (vertex, _) in sets.iter() {
        if let Some(idom) = sets.immediate_dominator(vertex) {
            children.entry(idom).or_default().push(vertex.clone());
        }
    }

    let mut tree = DirectedGraph::with_capacity(sets.len());
    for (vertex, _) in sets.iter() {
        let mut kids = children.remove(vertex).unwrap_or_default();
        kids.sort_unstable();

        let inserted = tree.insert(vertex.clone(), kids);
        debug_assert!(inserted, "dominance tree vertex declared twice");
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> DirectedGraph<u64> {
        let mut graph = DirectedGraph::new();
        graph.insert(0u64, vec![1, 2]);
        graph.insert(1, vec![3]);
        graph.insert(2, vec![3]);
        graph.insert(3, vec![]);
        graph
    }

    #[test]
    fn test_tree_diamond() {
        let tree = dominance_tree(&diamond().dominators());

        assert_eq!(tree.vertex_count(), 4);
        assert_eq!(tree.successors_of(&0), &[1, 2, 3]);
        assert!(tree.successors_of(&1).is_empty());
        assert!(tree.successors_of(&2).is_empty());
        assert!(tree.successors_of(&3).is_empty());
    }

    #[test]
    fn test_tree_is_acyclic_with_single_parents() {
        let mut graph = DirectedGraph::new();
        graph.insert(0u64, vec![1]);
        graph.insert(1, vec![2, 3]);
        graph.insert(2, vec![4]);
        graph.insert(3, vec![4]);
        graph.insert(4, vec![1]); // back edge into the branch head

        let tree = dominance_tree(&graph.dominators());

        // A tree must topologically sort, and every non-root vertex has
        // exactly one parent.
        assert!(tree.topological_sort().is_ok());
        for vertex in tree.vertices() {
            assert!(tree.in_degree_of(vertex).unwrap() <= 1);
        }
    }

    #[test]
    fn test_tree_chain() {
        let mut graph = DirectedGraph::new();
        graph.insert(0u64, vec![1]);
        graph.insert(1, vec![2]);

        let tree = dominance_tree(&graph.dominators());
        assert_eq!(tree.successors_of(&0), &[1]);
        assert_eq!(tree.successors_of(&1), &[2]);
        assert_eq!(tree.in_degree_of(&0), Some(0));
    }

    #[test]
    fn test_tree_forest_with_multiple_roots() {
        // Two entries joining on 2: all three vertices are forest roots
        // because nothing strictly dominates anything.
        let mut graph = DirectedGraph::new();
        graph.insert(0u64, vec![2]);
        graph.insert(1, vec![2]);

        let tree = dominance_tree(&graph.dominators());
        assert_eq!(tree.vertex_count(), 3);
        assert_eq!(tree.edge_count(), 0);
        for vertex in tree.vertices() {
            assert_eq!(tree.in_degree_of(vertex), Some(0));
        }
    }

    #[test]
    fn test_post_dominator_tree() {
        let tree = dominance_tree(&diamond().post_dominators());

        // 3 post-dominates everything immediately except itself.
        assert_eq!(tree.successors_of(&3), &[0, 1, 2]);
        assert_eq!(tree.in_degree_of(&3), Some(0));
    }

    #[test]
    fn test_tree_empty_analysis() {
        let graph: DirectedGraph<u64> = DirectedGraph::new();
        let tree = dominance_tree(&graph.dominators());
        assert!(tree.is_empty());
    }

    #[test]
    fn test_tree_vertex_set_equals_reachable_set() {
        let mut graph = DirectedGraph::new();
        graph.insert(0u64, vec![1]);
        graph.insert(5, vec![6]);
        graph.insert(6, vec![5]); // unreachable cycle

        let tree = dominance_tree(&graph.dominators());
        assert!(tree.contains(&0));
        assert!(tree.contains(&1));
        assert!(!tree.contains(&5));
        assert!(!tree.contains(&6));
    }
}
