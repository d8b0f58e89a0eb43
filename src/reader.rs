//! Line-oriented textual graph input.
//!
//! One line per declared vertex: the first whitespace-separated token is the
//! vertex, the remaining tokens are its successors in left-to-right order. A
//! blank line (or end of input) terminates the graph. Each line maps to
//! exactly one [`DirectedGraph::insert`] call.

use std::hash::Hash;
use std::io::BufRead;
use std::str::FromStr;

use crate::graph::DirectedGraph;
use crate::{Error, Result};

/// Reads a graph from line-oriented text.
///
/// # Errors
///
/// - [`Error::Io`] if reading from `input` fails.
/// - [`Error::Parse`] if a token does not parse as a `V`.
/// - [`Error::DuplicateVertex`] if a line re-declares a vertex that already
///   has a successor list.
///
/// # Examples
///
/// ```rust
/// use domgraph::reader::read_graph;
///
/// let text = "0 1 2\n1 3\n2 3\n\nignored after blank line";
/// let graph = read_graph::<u64, _>(text.as_bytes()).unwrap();
///
/// assert_eq!(graph.vertex_count(), 4);
/// assert_eq!(graph.successors_of(&0), &[1, 2]);
/// ```
pub fn read_graph<V, R>(input: R) -> Result<DirectedGraph<V>>
where
    V: Eq + Hash + Clone + FromStr,
    R: BufRead,
{
    let mut graph = DirectedGraph::new();

    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let number = index + 1;

        let mut tokens = line.split_whitespace();
        let Some(first) = tokens.next() else {
            break; // blank line terminates input
        };

        let vertex = parse_token(first, number)?;
        let successors = tokens
            .map(|token| parse_token(token, number))
            .collect::<Result<Vec<V>>>()?;

        if !graph.insert(vertex, successors) {
            return Err(Error::DuplicateVertex { line: number });
        }
    }

    Ok(graph)
}

fn parse_token<V: FromStr>(token: &str, line: usize) -> Result<V> {
    token.parse().map_err(|_| Error::Parse {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_simple_graph() {
        let graph = read_graph::<u64, _>("0 1 2\n1 3\n2 3\n".as_bytes()).unwrap();

        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.successors_of(&0), &[1, 2]);
        assert_eq!(graph.successors_of(&1), &[3]);
        assert_eq!(graph.in_degree_of(&3), Some(2));
    }

    #[test]
    fn test_read_vertex_without_successors() {
        let graph = read_graph::<u64, _>("7\n".as_bytes()).unwrap();

        assert_eq!(graph.vertex_count(), 1);
        assert!(graph.successors_of(&7).is_empty());
        assert_eq!(graph.in_degree_of(&7), Some(0));
    }

    #[test]
    fn test_read_blank_line_terminates() {
        let graph = read_graph::<u64, _>("0 1\n\n2 3\n".as_bytes()).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert!(!graph.contains(&2));
    }

    #[test]
    fn test_read_empty_input() {
        let graph = read_graph::<u64, _>("".as_bytes()).unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn test_read_duplicate_declaration() {
        let result = read_graph::<u64, _>("0 1\n0 2\n".as_bytes());

        match result {
            Err(Error::DuplicateVertex { line }) => assert_eq!(line, 2),
            other => panic!("expected duplicate vertex error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_placeholder_then_declaration() {
        // 1 is referenced on line 1 and declared on line 2; that is not a
        // duplicate.
        let graph = read_graph::<u64, _>("0 1\n1 2\n".as_bytes()).unwrap();
        assert_eq!(graph.successors_of(&1), &[2]);
    }

    #[test]
    fn test_read_bad_token() {
        let result = read_graph::<u64, _>("0 1\n2 oops\n".as_bytes());

        match result {
            Err(Error::Parse { line, token }) => {
                assert_eq!(line, 2);
                assert_eq!(token, "oops");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_read_extra_whitespace() {
        let graph = read_graph::<u64, _>("  0   1\t2 \n".as_bytes()).unwrap();
        assert_eq!(graph.successors_of(&0), &[1, 2]);
    }

    #[test]
    fn test_read_string_vertices() {
        let graph = read_graph::<String, _>("entry a b\na exit\nb exit\n".as_bytes()).unwrap();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.in_degree_of(&"exit".to_string()), Some(2));
    }
}
