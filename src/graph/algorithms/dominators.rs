//! Dominator and post-dominator computation via iterative fixed-point
//! dataflow.
//!
//! # Theory
//!
//! A vertex `d` **dominates** a vertex `n` if every path from the entry to
//! `n` passes through `d`. Post-dominance is the dual notion over the
//! reversed graph: `d` post-dominates `n` if every path from `n` to an exit
//! passes through `d`. Every vertex dominates itself.
//!
//! Real graphs rarely have a unique entry or exit, so both analyses run over
//! a **virtually augmented** graph: a synthetic root feeds every in-degree
//! zero vertex (for dominators) or, after reversing all edges, every
//! original out-degree-zero vertex (for post-dominators). The virtual root
//! exists only inside this module: it is stripped from every returned set
//! and never appears as a result key.
//!
//! # Algorithm
//!
//! This is the classic iterative dataflow formulation rather than
//! Lengauer-Tarjan: initialize `dom(root) = {root}` and every other
//! reachable vertex to the full reachable set, then repeatedly replace
//! `dom(n)` with `{n} ∪ ⋂ dom(p)` over `n`'s predecessors until a full pass
//! changes nothing. Dominator sets only ever shrink, and the lattice height
//! is bounded by the vertex count, so the loop terminates. Vertices
//! unreachable from the (virtual) root are excluded from the result
//! entirely, since dominance is only defined over the reachable subgraph.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::DirectedGraph;

/// A vertex in the virtually-augmented graph.
///
/// The tagged variant keeps the synthetic root out of the public vertex type
/// entirely: it can be constructed and observed only inside this module.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Node<V> {
    /// The synthetic entry (or exit, for the reversed graph).
    Virtual,
    /// A vertex of the underlying graph.
    Real(V),
}

/// Dominator sets for every vertex reachable from the analysis root.
///
/// Maps each reachable vertex to the set of vertices that dominate it,
/// itself included. Produced by [`compute_dominators`] and
/// [`compute_post_dominators`]; consumed by
/// [`dominance_tree`](crate::graph::algorithms::dominance_tree).
///
/// # Examples
///
/// ```rust
/// use domgraph::DirectedGraph;
///
/// // 0 -> {1, 2}, 1 -> {3}, 2 -> {3}
/// let mut graph = DirectedGraph::new();
/// graph.insert(0u64, vec![1, 2]);
/// graph.insert(1, vec![3]);
/// graph.insert(2, vec![3]);
///
/// let doms = graph.dominators();
/// assert!(doms.dominates(&0, &3));
/// // 3 is reachable around 1, so 1 does not dominate it.
/// assert!(!doms.dominates(&1, &3));
/// assert_eq!(doms.immediate_dominator(&3), Some(&0));
/// ```
#[derive(Debug, Clone)]
pub struct DominatorSets<V> {
    sets: HashMap<V, HashSet<V>>,
}

impl<V: Eq + Hash> PartialEq for DominatorSets<V> {
    fn eq(&self, other: &Self) -> bool {
        self.sets == other.sets
    }
}

impl<V: Eq + Hash> Eq for DominatorSets<V> {}

impl<V> DominatorSets<V>
where
    V: Eq + Hash + Clone,
{
    /// Returns the dominator set of `vertex`, or `None` if the vertex was
    /// unreachable from the analysis root (or unknown).
    #[must_use]
    pub fn dominators_of(&self, vertex: &V) -> Option<&HashSet<V>> {
        self.sets.get(vertex)
    }

    /// Checks whether `a` dominates `b`. Every vertex dominates itself.
    ///
    /// Returns `false` if `b` was unreachable.
    #[must_use]
    pub fn dominates(&self, a: &V, b: &V) -> bool {
        self.sets.get(b).is_some_and(|doms| doms.contains(a))
    }

    /// Checks whether `a` strictly dominates `b` (dominates and `a != b`).
    #[must_use]
    pub fn strictly_dominates(&self, a: &V, b: &V) -> bool {
        a != b && self.dominates(a, b)
    }

    /// Returns the immediate dominator of `vertex`, or `None` for roots of
    /// the dominance forest and unreachable vertices.
    ///
    /// The immediate dominator is the closest strict dominator: the unique
    /// candidate in `dom(vertex) \ {vertex}` that is dominated by every
    /// other candidate. The dominators of a vertex are totally ordered by
    /// dominance, so on well-formed sets exactly one candidate qualifies.
    #[must_use]
    pub fn immediate_dominator(&self, vertex: &V) -> Option<&V> {
        let doms = self.sets.get(vertex)?;
        let candidates: Vec<&V> = doms.iter().filter(|d| *d != vertex).collect();

        candidates
            .iter()
            .copied()
            .find(|&d| match self.sets.get(d) {
                Some(dom_d) => candidates.iter().all(|c| dom_d.contains(*c)),
                None => false,
            })
    }

    /// Returns an iterator over `(vertex, dominator set)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &HashSet<V>)> {
        self.sets.iter()
    }

    /// Returns the number of reachable vertices covered by the analysis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Returns `true` if no vertex was reachable from the analysis root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Computes the dominator sets of every vertex reachable from the graph's
/// roots.
///
/// The adjacency is augmented with a virtual entry pointing at every vertex
/// of in-degree zero, the fixed point runs rooted at that entry, and the
/// virtual entry is stripped from the result. A graph with no in-degree-zero
/// vertex (every vertex on a cycle) has nothing reachable from the virtual
/// entry and yields an empty result; this mirrors the classic definition of
/// dominance over the reachable subgraph and is not an error.
///
/// # Complexity
///
/// O(V² · E) worst case for the fixed point with set intersections; real
/// control-flow-shaped graphs converge in a handful of passes.
pub fn compute_dominators<V>(graph: &DirectedGraph<V>) -> DominatorSets<V>
where
    V: Eq + Hash + Clone,
{
    let mut adjacency: HashMap<Node<V>, Vec<Node<V>>> =
        HashMap::with_capacity(graph.vertex_count() + 1);

    for vertex in graph.vertices() {
        let successors = graph
            .successors_of(vertex)
            .iter()
            .cloned()
            .map(Node::Real)
            .collect();
        adjacency.insert(Node::Real(vertex.clone()), successors);
    }

    adjacency.insert(
        Node::Virtual,
        graph.roots().cloned().map(Node::Real).collect(),
    );

    strip_virtual(fixed_point(&adjacency))
}

/// Computes the post-dominator sets of every vertex that can reach one of
/// the graph's leaves.
///
/// The full adjacency is materialized, every edge reversed, and a virtual
/// exit (the root of the reversed graph) points at every vertex whose
/// out-degree in the *original* graph is zero. The same fixed point then
/// runs rooted at the virtual exit.
pub fn compute_post_dominators<V>(graph: &DirectedGraph<V>) -> DominatorSets<V>
where
    V: Eq + Hash + Clone,
{
    let mut reversed: HashMap<Node<V>, Vec<Node<V>>> =
        HashMap::with_capacity(graph.vertex_count() + 1);

    for vertex in graph.vertices() {
        reversed.entry(Node::Real(vertex.clone())).or_default();
    }
    for (from, to) in graph.edges() {
        reversed
            .entry(Node::Real(to.clone()))
            .or_default()
            .push(Node::Real(from.clone()));
    }

    reversed.insert(
        Node::Virtual,
        graph.leaves().cloned().map(Node::Real).collect(),
    );

    strip_virtual(fixed_point(&reversed))
}

/// Runs the shared fixed-point dataflow over an augmented adjacency rooted
/// at [`Node::Virtual`].
fn fixed_point<V>(adjacency: &HashMap<Node<V>, Vec<Node<V>>>) -> HashMap<Node<V>, HashSet<Node<V>>>
where
    V: Eq + Hash + Clone,
{
    // Reachability from the virtual root, breadth-first with an explicit
    // queue. Traversal order does not affect the fixed point.
    let root = Node::Virtual;
    let mut reachable: HashSet<&Node<V>> = HashSet::new();
    let mut queue: VecDeque<&Node<V>> = VecDeque::new();
    reachable.insert(&root);
    queue.push_back(&root);

    while let Some(node) = queue.pop_front() {
        for succ in adjacency.get(node).map_or(&[][..], Vec::as_slice) {
            if reachable.insert(succ) {
                queue.push_back(succ);
            }
        }
    }

    // Predecessor map restricted to reachable vertices.
    let mut predecessors: HashMap<&Node<V>, Vec<&Node<V>>> = HashMap::new();
    for (node, successors) in adjacency {
        if !reachable.contains(node) {
            continue;
        }
        for succ in successors {
            if reachable.contains(succ) {
                predecessors.entry(succ).or_default().push(node);
            }
        }
    }

    // dom(root) = {root}; everything else starts at the lattice top.
    let top: HashSet<Node<V>> = reachable.iter().map(|n| (*n).clone()).collect();
    let mut dom: HashMap<Node<V>, HashSet<Node<V>>> = HashMap::with_capacity(reachable.len());
    for node in &reachable {
        if **node == Node::Virtual {
            dom.insert(Node::Virtual, std::iter::once(Node::Virtual).collect());
        } else {
            dom.insert((*node).clone(), top.clone());
        }
    }

    let mut passes = 0usize;
    let mut changed = true;
    while changed {
        changed = false;
        passes += 1;

        for node in &reachable {
            if **node == Node::Virtual {
                continue;
            }

            let mut intersection: Option<HashSet<Node<V>>> = None;
            for pred in predecessors.get(*node).map_or(&[][..], Vec::as_slice) {
                let pred_dom = &dom[*pred];
                intersection = Some(match intersection {
                    None => pred_dom.clone(),
                    Some(acc) => acc.intersection(pred_dom).cloned().collect(),
                });
            }

            let mut next = intersection.unwrap_or_default();
            next.insert((*node).clone());

            if let Some(current) = dom.get_mut(*node) {
                if next != *current {
                    *current = next;
                    changed = true;
                }
            }
        }
    }

    log::debug!(
        "dominator fixed point converged after {passes} passes over {} vertices",
        reachable.len().saturating_sub(1)
    );

    dom
}

/// Removes the virtual root from keys and from every dominator set.
fn strip_virtual<V>(dom: HashMap<Node<V>, HashSet<Node<V>>>) -> DominatorSets<V>
where
    V: Eq + Hash + Clone,
{
    let mut sets = HashMap::with_capacity(dom.len().saturating_sub(1));

    for (node, dominators) in dom {
        let Node::Real(vertex) = node else { continue };
        let stripped = dominators
            .into_iter()
            .filter_map(|d| match d {
                Node::Real(v) => Some(v),
                Node::Virtual => None,
            })
            .collect();
        sets.insert(vertex, stripped);
    }

    DominatorSets { sets }
}
