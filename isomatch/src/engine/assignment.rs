//! Partial injective assignment between two vertex sets of equal order.

use crate::graph::VertexId;

/// Partial injective map from left-graph vertices to right-graph vertices.
///
/// `forward` and `backward` stay mutually inverse at all times
/// (`forward[a] = Some(b)` iff `backward[b] = Some(a)`). Created fresh per
/// search, mutated by [`assign`](Self::assign)/[`unassign`](Self::unassign)
/// during backtracking, discarded when the search returns.
#[derive(Clone, Debug)]
pub(crate) struct Assignment {
    forward: Vec<Option<VertexId>>,
    backward: Vec<Option<VertexId>>,
    assigned: usize,
}

impl Assignment {
    #[contracts::debug_ensures(ret.is_empty())]
    pub(crate) fn new(order: usize) -> Self {
        Self {
            forward: vec![None; order],
            backward: vec![None; order],
            assigned: 0,
        }
    }

    /// Checks that the two directions describe the same injective map.
    pub(crate) fn is_consistent(&self) -> bool {
        let forward_count = self.forward.iter().filter(|slot| slot.is_some()).count();
        let backward_count = self.backward.iter().filter(|slot| slot.is_some()).count();
        if forward_count != self.assigned || backward_count != self.assigned {
            return false;
        }
        self.forward.iter().enumerate().all(|(a, slot)| match slot {
            Some(b) => self.backward[b.as_usize()] == Some(VertexId::from(a)),
            None => true,
        })
    }

    pub(crate) fn is_assigned(&self, a: VertexId) -> bool {
        self.forward[a.as_usize()].is_some()
    }

    /// The right-graph image of `a`, if assigned.
    pub(crate) fn image(&self, a: VertexId) -> Option<VertexId> {
        self.forward[a.as_usize()]
    }

    /// Whether right-graph vertex `b` has no preimage yet.
    pub(crate) fn is_free_right(&self, b: VertexId) -> bool {
        self.backward[b.as_usize()].is_none()
    }

    #[contracts::debug_requires(!self.is_assigned(a))]
    #[contracts::debug_requires(self.is_free_right(b))]
    #[contracts::debug_ensures(self.is_consistent())]
    pub(crate) fn assign(&mut self, a: VertexId, b: VertexId) {
        self.forward[a.as_usize()] = Some(b);
        self.backward[b.as_usize()] = Some(a);
        self.assigned += 1;
    }

    #[contracts::debug_requires(self.image(a) == Some(b))]
    #[contracts::debug_ensures(self.is_consistent())]
    pub(crate) fn unassign(&mut self, a: VertexId, b: VertexId) {
        self.forward[a.as_usize()] = None;
        self.backward[b.as_usize()] = None;
        self.assigned -= 1;
    }

    #[allow(dead_code)]
    pub(crate) fn len(&self) -> usize {
        self.assigned
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.assigned == 0
    }

    pub(crate) fn is_total(&self) -> bool {
        self.assigned == self.forward.len()
    }

    /// Snapshot of a total assignment as `(left, right)` pairs ordered by the
    /// left vertex.
    #[contracts::debug_requires(self.is_total())]
    pub(crate) fn to_pairs(&self) -> Vec<(VertexId, VertexId)> {
        self.forward
            .iter()
            .enumerate()
            .map(|(a, slot)| {
                let b = slot.expect("total assignment has every slot filled");
                (VertexId::from(a), b)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_and_unassign_round_trip() {
        let mut st = Assignment::new(3);
        let a = VertexId::new(0);
        let b = VertexId::new(2);

        st.assign(a, b);
        assert_eq!(st.len(), 1);
        assert_eq!(st.image(a), Some(b));
        assert!(!st.is_free_right(b));

        st.unassign(a, b);
        assert!(st.is_empty());
        assert_eq!(st.image(a), None);
        assert!(st.is_free_right(b));
    }

    #[test]
    fn total_assignment_produces_ordered_pairs() {
        let mut st = Assignment::new(3);
        st.assign(VertexId::new(2), VertexId::new(0));
        st.assign(VertexId::new(0), VertexId::new(1));
        st.assign(VertexId::new(1), VertexId::new(2));
        assert!(st.is_total());

        let pairs: Vec<(usize, usize)> = st
            .to_pairs()
            .into_iter()
            .map(|(a, b)| (a.as_usize(), b.as_usize()))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn distinct_left_vertices_cannot_share_an_image() {
        let st = {
            let mut st = Assignment::new(2);
            st.assign(VertexId::new(0), VertexId::new(1));
            st
        };
        assert!(!st.is_free_right(VertexId::new(1)));
        assert!(st.is_free_right(VertexId::new(0)));
    }
}
