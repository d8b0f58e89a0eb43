//! DOT format serialization for directed graphs.
//!
//! The emitted text is a line-oriented `digraph` description that Graphviz
//! tools (or any DOT consumer) can render. Output is deterministic for a
//! given store: vertices are emitted in sorted order and successor lists in
//! declaration order.
//!
//! In sentinel mode the export synthesizes a `Start` node with an edge to
//! every in-degree-zero vertex and an `End` node with an edge from every
//! out-degree-zero vertex, which makes entry and exit structure visible in
//! rendered control-flow graphs. Tree exports (dominator and post-dominator
//! trees) are conventionally emitted without sentinels.

use std::fmt::{Display, Write};
use std::hash::Hash;

use crate::graph::DirectedGraph;

/// Escapes a string for safe use inside a DOT double-quoted label.
///
/// # Examples
///
/// ```rust
/// use domgraph::dot::escape_dot;
///
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// assert_eq!(escape_dot("a\\b"), "a\\\\b");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

/// Serializes `graph` to DOT format.
///
/// # Arguments
///
/// * `graph` - The graph to serialize.
/// * `name` - Rendered as the graph's `label`; pass `""` for no title.
/// * `sentinels` - When `true`, synthetic `Start`/`End` nodes and their
///   edges are emitted before the real edges.
///
/// # Returns
///
/// The complete DOT text, one edge per line:
///
/// ```text
/// digraph {
/// label="Graph"
/// Start[label="Start"];
/// End[label="End"];
/// "Start" -> 0;
/// 3 -> "End";
/// 0 -> 1;
/// ...
/// }
/// ```
///
/// Vertices are rendered through their [`Display`] form (decimal for the
/// integer instantiations used by the CLI).
#[must_use]
pub fn to_dot<V>(graph: &DirectedGraph<V>, name: &str, sentinels: bool) -> String
where
    V: Eq + Hash + Clone + Ord + Display,
{
    let mut out = String::new();

    out.push_str("digraph {\n");
    let _ = writeln!(out, "label=\"{}\"", escape_dot(name));

    if sentinels {
        out.push_str("Start[label=\"Start\"];\n");
        out.push_str("End[label=\"End\"];\n");

        let mut roots: Vec<&V> = graph.roots().collect();
        roots.sort_unstable();
        for root in roots {
            let _ = writeln!(out, "\"Start\" -> {root};");
        }

        let mut leaves: Vec<&V> = graph.leaves().collect();
        leaves.sort_unstable();
        for leaf in leaves {
            let _ = writeln!(out, "{leaf} -> \"End\";");
        }
    }

    let mut vertices: Vec<&V> = graph.vertices().collect();
    vertices.sort_unstable();
    for vertex in vertices {
        for succ in graph.successors_of(vertex) {
            let _ = writeln!(out, "{vertex} -> {succ};");
        }
    }

    out.push('}');
    out.push('\n');
    out
}
