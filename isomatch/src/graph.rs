//! Simple-graph value object and its construction-time validation.
//!
//! A [`Graph`] is immutable after [`Graph::build`]: callers that need a
//! different graph build a new one. The adjacency relation is kept both as a
//! flattened boolean matrix (O(1) adjacency queries during search) and as
//! per-vertex sorted neighbor lists (ordered iteration, degree queries).

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vertex identifier within a single [`Graph`].
///
/// Exclusively a local index; ids from one graph are only meaningful for
/// another graph of the same order through an explicit mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId {
    inner: u32,
}

impl VertexId {
    /// Creates a vertex id from a raw integer index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self { inner: id }
    }

    /// Returns the index as a usize for array access.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.inner as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.inner)
    }
}

impl From<usize> for VertexId {
    #[inline]
    fn from(id: usize) -> Self {
        Self { inner: id as u32 }
    }
}

impl From<VertexId> for usize {
    #[inline]
    fn from(id: VertexId) -> Self {
        id.inner as Self
    }
}

/// Structural violations rejected at graph construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph.
    #[error("edge ({u}, {v}) references a vertex outside 0..{order}")]
    VertexOutOfRange {
        /// First endpoint as given.
        u: usize,
        /// Second endpoint as given.
        v: usize,
        /// Number of vertices in the graph under construction.
        order: usize,
    },

    /// Both endpoints of an edge are the same vertex.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop {
        /// The offending vertex.
        vertex: usize,
    },

    /// The same unordered pair appears more than once in the edge list.
    #[error("duplicate edge ({u}, {v})")]
    DuplicateEdge {
        /// First endpoint as given.
        u: usize,
        /// Second endpoint as given.
        v: usize,
    },
}

/// An undirected, loop-free, unweighted simple graph.
///
/// The adjacency matrix is symmetric with a zero diagonal at all times;
/// neighbor lists are sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    order: usize,
    adj: Vec<bool>,
    neighbors: Vec<Vec<VertexId>>,
}

impl Graph {
    /// Builds a graph from a vertex count and an edge list of 0-based pairs.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range endpoint, a self-loop, or a duplicate
    /// unordered pair. Construction is O(V² + E).
    pub fn build(order: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut adj = vec![false; order * order];
        let mut neighbors: Vec<Vec<VertexId>> = vec![Vec::new(); order];

        for &(u, v) in edges {
            if u >= order || v >= order {
                return Err(GraphError::VertexOutOfRange { u, v, order });
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            if adj[u * order + v] {
                return Err(GraphError::DuplicateEdge { u, v });
            }
            adj[u * order + v] = true;
            adj[v * order + u] = true;
            neighbors[u].push(VertexId::from(v));
            neighbors[v].push(VertexId::from(u));
        }

        for list in &mut neighbors {
            list.sort_unstable();
        }

        Ok(Self {
            order,
            adj,
            neighbors,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Degree of `v`.
    #[must_use]
    pub fn degree(&self, v: VertexId) -> usize {
        self.neighbors[v.as_usize()].len()
    }

    /// Neighbors of `v` in ascending index order.
    #[must_use]
    pub fn neighbors(&self, v: VertexId) -> &[VertexId] {
        &self.neighbors[v.as_usize()]
    }

    /// Whether `u` and `v` are adjacent. Symmetric; false for `u == v`.
    #[must_use]
    pub fn is_adjacent(&self, u: VertexId, v: VertexId) -> bool {
        self.adj[u.as_usize() * self.order + v.as_usize()]
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.order).map(VertexId::from)
    }

    /// All edges as `(u, v)` with `u < v`, ordered by `u` then `v`.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.neighbors.iter().enumerate().flat_map(|(u, list)| {
            let u = VertexId::from(u);
            list.iter().copied().filter(move |&v| u < v).map(move |v| (u, v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_out_of_range_endpoint() {
        let err = Graph::build(4, &[(0, 7)]).unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                u: 0,
                v: 7,
                order: 4
            }
        );
    }

    #[test]
    fn build_rejects_self_loop() {
        let err = Graph::build(3, &[(1, 1)]).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop { vertex: 1 });
    }

    #[test]
    fn build_rejects_duplicate_edge_in_either_orientation() {
        let err = Graph::build(3, &[(0, 1), (1, 0)]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateEdge { u: 1, v: 0 });
    }

    #[test]
    fn adjacency_is_symmetric_and_irreflexive() {
        let g = Graph::build(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        for u in g.vertices() {
            assert!(!g.is_adjacent(u, u));
            for v in g.vertices() {
                assert_eq!(g.is_adjacent(u, v), g.is_adjacent(v, u));
            }
        }
    }

    #[test]
    fn neighbors_are_sorted_ascending() {
        let g = Graph::build(5, &[(2, 4), (2, 0), (2, 3), (2, 1)]).unwrap();
        let expected: Vec<VertexId> = [0usize, 1, 3, 4].into_iter().map(VertexId::from).collect();
        assert_eq!(g.neighbors(VertexId::new(2)), expected.as_slice());
        assert_eq!(g.degree(VertexId::new(2)), 4);
    }

    #[test]
    fn edges_iterate_in_ascending_pair_order() {
        let g = Graph::build(4, &[(2, 3), (0, 2), (0, 1)]).unwrap();
        let edges: Vec<(usize, usize)> = g
            .edges()
            .map(|(u, v)| (u.as_usize(), v.as_usize()))
            .collect();
        assert_eq!(edges, vec![(0, 1), (0, 2), (2, 3)]);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn zero_order_graph_is_valid() {
        let g = Graph::build(0, &[]).unwrap();
        assert_eq!(g.order(), 0);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.edges().count(), 0);
    }
}
