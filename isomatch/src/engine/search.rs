//! Depth-first backtracking over partial vertex assignments.

use std::cmp::Reverse;

use tracing::trace;

use crate::engine::MatchError;
use crate::engine::assignment::Assignment;
use crate::engine::budget::SearchBudget;
use crate::graph::{Graph, VertexId};
use crate::invariants::GraphIndex;

pub(super) struct SearchCtx<'g> {
    pub left: &'g Graph,
    pub right: &'g Graph,
    pub left_index: &'g GraphIndex,
    pub right_index: &'g GraphIndex,
    /// Left-graph vertices in the order the search assigns them.
    pub selection: Vec<VertexId>,
}

/// Fixed assignment order for the left graph: degree descending, ties broken
/// by ascending index. Most-constrained-first shrinks the branching factor;
/// the stable tie-break keeps witnesses reproducible across runs.
pub(super) fn selection_order(index: &GraphIndex) -> Vec<VertexId> {
    let mut vertices: Vec<VertexId> = (0..index.order()).map(VertexId::from).collect();
    vertices.sort_by_key(|&v| (Reverse(index.degree(v)), v));
    vertices
}

/// Extends `st` with an image for `selection[pos]`, recursing until the
/// assignment is total or the candidate space is exhausted.
///
/// On success the witness is written to `out` and `Ok(true)` bubbles up with
/// the assignment already unwound; `Ok(false)` means this subtree has no
/// consistent extension.
///
/// # Errors
///
/// Fails with [`MatchError::Timeout`] when the budget runs out.
pub(super) fn backtrack(
    ctx: &SearchCtx<'_>,
    st: &mut Assignment,
    pos: usize,
    budget: &mut SearchBudget,
    out: &mut Option<Vec<(VertexId, VertexId)>>,
) -> Result<bool, MatchError> {
    budget.tick()?;

    if pos == ctx.selection.len() {
        *out = Some(st.to_pairs());
        return Ok(true);
    }

    let next = ctx.selection[pos];

    // Phase 1: compute candidates with only immutable access to `st`.
    let candidates: Vec<VertexId> = ctx
        .right_index
        .of_degree(ctx.left_index.degree(next))
        .iter()
        .copied()
        .filter(|&b| st.is_free_right(b))
        .filter(|&b| ctx.right_index.signature(b) == ctx.left_index.signature(next))
        .filter(|&b| consistent(ctx, st, pos, next, b))
        .collect();

    trace!(
        "depth {pos}: {} candidates for {next}",
        candidates.len()
    );

    // Phase 2: iterate candidates with scoped assign/recurse/unassign.
    for b in candidates {
        if with_assignment(st, next, b, |st_inner| {
            backtrack(ctx, st_inner, pos + 1, budget, out)
        })? {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Scoped helper that assigns `a -> b`, runs `f`, then unassigns again. The
/// assignment is unwound on every path, including timeout.
fn with_assignment(
    st: &mut Assignment,
    a: VertexId,
    b: VertexId,
    f: impl FnOnce(&mut Assignment) -> Result<bool, MatchError>,
) -> Result<bool, MatchError> {
    st.assign(a, b);
    let found = f(st);
    st.unassign(a, b);
    found
}

/// Whether mapping `a -> b` preserves adjacency against every vertex mapped
/// so far. Both edges and non-edges must agree, otherwise the extension would
/// only be a homomorphism.
fn consistent(
    ctx: &SearchCtx<'_>,
    st: &Assignment,
    pos: usize,
    a: VertexId,
    b: VertexId,
) -> bool {
    ctx.selection[..pos].iter().all(|&mapped_a| {
        let mapped_b = st
            .image(mapped_a)
            .expect("selection prefix is always assigned");
        ctx.left.is_adjacent(a, mapped_a) == ctx.right.is_adjacent(b, mapped_b)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;

    fn ctx<'g>(
        left: &'g Graph,
        right: &'g Graph,
        left_index: &'g GraphIndex,
        right_index: &'g GraphIndex,
    ) -> SearchCtx<'g> {
        SearchCtx {
            left,
            right,
            left_index,
            right_index,
            selection: selection_order(left_index),
        }
    }

    #[test]
    fn selection_order_is_degree_descending_then_index() {
        // Star: center 0 first, then the leaves in index order.
        let g = Graph::build(4, &[(0, 1), (0, 2), (0, 3)]).unwrap();
        let idx = GraphIndex::build(&g);
        let order: Vec<usize> = selection_order(&idx).iter().map(|v| v.as_usize()).collect();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn backtrack_finds_triangle_self_witness() {
        let g = Graph::build(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
        let idx = GraphIndex::build(&g);
        let ctx = ctx(&g, &g, &idx, &idx);

        let mut st = Assignment::new(3);
        let mut budget = SearchBudget::new(&MatchConfig::unbounded());
        let mut out = None;

        let found = backtrack(&ctx, &mut st, 0, &mut budget, &mut out).unwrap();
        assert!(found);
        assert_eq!(out.unwrap().len(), 3);
        // The working assignment is unwound once the witness is captured.
        assert!(st.is_empty());
    }

    #[test]
    fn backtrack_refutes_cycle_vs_two_triangles() {
        let c6 = Graph::build(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0)]).unwrap();
        let two_k3 = Graph::build(6, &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]).unwrap();
        let left_index = GraphIndex::build(&c6);
        let right_index = GraphIndex::build(&two_k3);
        let ctx = ctx(&c6, &two_k3, &left_index, &right_index);

        let mut st = Assignment::new(6);
        let mut budget = SearchBudget::new(&MatchConfig::unbounded());
        let mut out = None;

        let found = backtrack(&ctx, &mut st, 0, &mut budget, &mut out).unwrap();
        assert!(!found);
        assert!(out.is_none());
    }
}
