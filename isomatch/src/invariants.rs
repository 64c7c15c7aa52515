//! Cheap necessary-condition screening for isomorphism candidates.
//!
//! [`quickly_distinguishable`] runs a ladder of invariant tests in increasing
//! cost order and short-circuits on the first failure. A `true` result proves
//! the graphs are not isomorphic; `false` only means the pair must go to the
//! full search. The per-vertex data lives in [`GraphIndex`] so the search
//! engine can reuse the same signatures for candidate filtering.

use std::collections::HashMap;

use itertools::Itertools;

use crate::graph::{Graph, VertexId};

/// Memoized per-graph invariants: degrees, neighbor-degree signatures, and
/// vertices grouped by degree. Built once per graph per comparison.
#[derive(Clone, Debug)]
pub(crate) struct GraphIndex {
    degrees: Vec<usize>,
    signatures: Vec<Vec<usize>>,
    by_degree: HashMap<usize, Vec<VertexId>>,
}

impl GraphIndex {
    pub(crate) fn build(graph: &Graph) -> Self {
        let degrees: Vec<usize> = graph.vertices().map(|v| graph.degree(v)).collect();

        let signatures: Vec<Vec<usize>> = graph
            .vertices()
            .map(|v| {
                graph
                    .neighbors(v)
                    .iter()
                    .map(|n| degrees[n.as_usize()])
                    .sorted_unstable()
                    .collect()
            })
            .collect();

        // Grouped lists stay ascending because vertices() iterates ascending.
        let mut by_degree: HashMap<usize, Vec<VertexId>> = HashMap::new();
        for (v, &d) in degrees.iter().enumerate() {
            by_degree.entry(d).or_default().push(VertexId::from(v));
        }

        Self {
            degrees,
            signatures,
            by_degree,
        }
    }

    pub(crate) fn order(&self) -> usize {
        self.degrees.len()
    }

    pub(crate) fn degree(&self, v: VertexId) -> usize {
        self.degrees[v.as_usize()]
    }

    /// Sorted degrees of `v`'s neighbors.
    pub(crate) fn signature(&self, v: VertexId) -> &[usize] {
        &self.signatures[v.as_usize()]
    }

    /// All vertices of degree `d`, ascending.
    pub(crate) fn of_degree(&self, d: usize) -> &[VertexId] {
        self.by_degree.get(&d).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn edge_count(&self) -> usize {
        self.degrees.iter().sum::<usize>() / 2
    }

    fn degree_sequence(&self) -> Vec<usize> {
        self.degrees.iter().copied().sorted_unstable().collect()
    }
}

/// Returns `true` when the invariant ladder proves `a` and `b` cannot be
/// isomorphic: differing order, edge count, sorted degree sequence, or
/// per-degree multiset of neighbor-degree signatures.
///
/// These are necessary conditions only; a `false` result does not imply
/// isomorphism. Cost O(V log V + V·maxDeg log maxDeg).
#[must_use]
pub fn quickly_distinguishable(a: &Graph, b: &Graph) -> bool {
    distinguishable_by_index(&GraphIndex::build(a), &GraphIndex::build(b))
}

pub(crate) fn distinguishable_by_index(a: &GraphIndex, b: &GraphIndex) -> bool {
    if a.order() != b.order() {
        return true;
    }
    if a.edge_count() != b.edge_count() {
        return true;
    }
    if a.degree_sequence() != b.degree_sequence() {
        return true;
    }

    // Degree sequences match, so both sides have the same degree values with
    // the same multiplicities; compare signature multisets within each group.
    for (&d, a_vertices) in a.by_degree.iter().sorted_by_key(|&(&d, _)| d) {
        let a_sigs: Vec<&[usize]> = a_vertices
            .iter()
            .map(|&v| a.signature(v))
            .sorted_unstable()
            .collect();
        let b_sigs: Vec<&[usize]> = b
            .of_degree(d)
            .iter()
            .map(|&v| b.signature(v))
            .sorted_unstable()
            .collect();
        if a_sigs != b_sigs {
            return true;
        }
    }

    false
}
