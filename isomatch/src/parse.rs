//! Line-oriented graph text format.
//!
//! A `p` line declares the vertex count (third whitespace token, matching the
//! 1-based problem-line convention); an `e` line declares an edge between two
//! 1-based vertex indices. Every other line is treated as a comment. Example:
//!
//! ```text
//! c a triangle
//! p edge 3 3
//! e 1 2
//! e 2 3
//! e 3 1
//! ```

use thiserror::Error;

use crate::graph::{Graph, GraphError};

/// Malformed input text. Every variant carries the 1-based line number.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A `p` line without a parsable vertex count in its third token.
    #[error("line {line}: malformed problem line")]
    BadHeader {
        /// Offending line number.
        line: usize,
    },

    /// More than one `p` line.
    #[error("line {line}: duplicate problem line")]
    DuplicateHeader {
        /// Offending line number.
        line: usize,
    },

    /// An `e` line whose endpoint tokens are missing or unparsable.
    #[error("line {line}: malformed edge line")]
    BadEdge {
        /// Offending line number.
        line: usize,
    },

    /// An `e` line before any `p` line declared the vertex count.
    #[error("line {line}: edge before problem line")]
    EdgeBeforeHeader {
        /// Offending line number.
        line: usize,
    },

    /// An edge endpoint outside the declared `1..=order` range.
    #[error("line {line}: edge ({u}, {v}) outside 1..={order}")]
    EdgeOutOfRange {
        /// Offending line number.
        line: usize,
        /// First endpoint as written (1-based).
        u: usize,
        /// Second endpoint as written (1-based).
        v: usize,
        /// Declared vertex count.
        order: usize,
    },

    /// A structural violation surfaced while building the graph
    /// (self-loop or duplicate edge).
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Parses graph text into a [`Graph`].
///
/// Indices are converted from the format's 1-based convention to 0-based.
/// Text with no `p` line and no `e` lines parses as the empty graph on zero
/// vertices.
///
/// # Errors
///
/// See [`ParseError`]; no graph is constructed on failure.
pub fn parse_graph(text: &str) -> Result<Graph, ParseError> {
    let mut declared: Option<usize> = None;
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        match tokens.first() {
            Some(&"p") => {
                if declared.is_some() {
                    return Err(ParseError::DuplicateHeader { line });
                }
                let order = tokens
                    .get(2)
                    .and_then(|tok| tok.parse::<usize>().ok())
                    .ok_or(ParseError::BadHeader { line })?;
                declared = Some(order);
            }
            Some(&"e") => {
                let order = declared.ok_or(ParseError::EdgeBeforeHeader { line })?;
                let endpoint = |pos: usize| {
                    tokens
                        .get(pos)
                        .and_then(|tok| tok.parse::<usize>().ok())
                        .ok_or(ParseError::BadEdge { line })
                };
                let u = endpoint(1)?;
                let v = endpoint(2)?;
                if !(1..=order).contains(&u) || !(1..=order).contains(&v) {
                    return Err(ParseError::EdgeOutOfRange { line, u, v, order });
                }
                edges.push((u - 1, v - 1));
            }
            _ => {}
        }
    }

    Ok(Graph::build(declared.unwrap_or(0), &edges)?)
}

/// Writes a graph in the same text format [`parse_graph`] reads.
#[must_use]
pub fn write_graph(graph: &Graph) -> String {
    let mut out = format!("p edge {} {}\n", graph.order(), graph.edge_count());
    for (u, v) in graph.edges() {
        out.push_str(&format!("e {} {}\n", u.as_usize() + 1, v.as_usize() + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::VertexId;

    #[test]
    fn parses_header_edges_and_comments() {
        let text = "c a triangle\np edge 3 3\ne 1 2\ne 2 3\nsome trailing note\ne 3 1\n";
        let g = parse_graph(text).unwrap();
        assert_eq!(g.order(), 3);
        assert_eq!(g.edge_count(), 3);
        assert!(g.is_adjacent(VertexId::new(0), VertexId::new(2)));
    }

    #[test]
    fn empty_text_parses_as_empty_graph() {
        let g = parse_graph("").unwrap();
        assert_eq!(g.order(), 0);
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let text = "p edge 4 1\ne 1 7\n";
        assert_eq!(
            parse_graph(text),
            Err(ParseError::EdgeOutOfRange {
                line: 2,
                u: 1,
                v: 7,
                order: 4
            })
        );
    }

    #[test]
    fn rejects_zero_endpoint_under_one_based_convention() {
        let text = "p edge 4 1\ne 0 2\n";
        assert!(matches!(
            parse_graph(text),
            Err(ParseError::EdgeOutOfRange { line: 2, .. })
        ));
    }

    #[test]
    fn rejects_edge_before_header() {
        assert_eq!(
            parse_graph("e 1 2\np edge 3 1\n"),
            Err(ParseError::EdgeBeforeHeader { line: 1 })
        );
    }

    #[test]
    fn rejects_duplicate_header() {
        assert_eq!(
            parse_graph("p edge 3 0\np edge 4 0\n"),
            Err(ParseError::DuplicateHeader { line: 2 })
        );
    }

    #[test]
    fn rejects_malformed_header_and_edge_lines() {
        assert_eq!(
            parse_graph("p edge three 0\n"),
            Err(ParseError::BadHeader { line: 1 })
        );
        assert_eq!(
            parse_graph("p edge 3 1\ne 1\n"),
            Err(ParseError::BadEdge { line: 2 })
        );
    }

    #[test]
    fn surfaces_self_loop_and_duplicate_as_graph_errors() {
        assert!(matches!(
            parse_graph("p edge 3 1\ne 2 2\n"),
            Err(ParseError::Graph(GraphError::SelfLoop { vertex: 1 }))
        ));
        assert!(matches!(
            parse_graph("p edge 3 2\ne 1 2\ne 2 1\n"),
            Err(ParseError::Graph(GraphError::DuplicateEdge { .. }))
        ));
    }

    #[test]
    fn write_then_parse_round_trips() {
        let g = Graph::build(5, &[(0, 4), (1, 2), (2, 4)]).unwrap();
        let round_tripped = parse_graph(&write_graph(&g)).unwrap();
        assert_eq!(round_tripped, g);
    }
}
