//! Comparison outcome packaging.

use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, VertexId};

/// Outcome of one comparison call.
///
/// `mapping` is populated exactly when `is_isomorphic` is true: an ordered
/// list of `(left, right)` pairs covering every left vertex once. Immutable
/// after construction and owned by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct IsoReport {
    /// Whether a witness bijection exists.
    pub is_isomorphic: bool,
    /// The witness, ordered by the left vertex.
    pub mapping: Option<Vec<(VertexId, VertexId)>>,
}

impl IsoReport {
    pub(crate) fn isomorphic(mapping: Vec<(VertexId, VertexId)>) -> Self {
        Self {
            is_isomorphic: true,
            mapping: Some(mapping),
        }
    }

    pub(crate) const fn not_isomorphic() -> Self {
        Self {
            is_isomorphic: false,
            mapping: None,
        }
    }

    /// Checks this report against the graphs it was produced from.
    ///
    /// A negative report validates when it carries no mapping. A positive
    /// report validates when the mapping is a bijection over the full vertex
    /// range and preserves both edges and non-edges.
    #[must_use]
    pub fn validates(&self, left: &Graph, right: &Graph) -> bool {
        let Some(mapping) = &self.mapping else {
            return !self.is_isomorphic;
        };
        if !self.is_isomorphic {
            return false;
        }

        let order = left.order();
        if right.order() != order || mapping.len() != order {
            return false;
        }

        let mut image = vec![None; order];
        for (i, &(a, b)) in mapping.iter().enumerate() {
            if a.as_usize() != i || b.as_usize() >= order {
                return false;
            }
            image[i] = Some(b);
        }
        let image: Vec<VertexId> = image.into_iter().flatten().collect();
        let mut seen = vec![false; order];
        for &b in &image {
            if seen[b.as_usize()] {
                return false;
            }
            seen[b.as_usize()] = true;
        }

        (0..order).all(|u| {
            (0..order).all(|v| {
                left.is_adjacent(VertexId::from(u), VertexId::from(v))
                    == right.is_adjacent(image[u], image[v])
            })
        })
    }
}

impl fmt::Display for IsoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mapping {
            Some(mapping) => {
                writeln!(f, "isomorphic")?;
                for (a, b) in mapping {
                    writeln!(f, "  {a} -> {b}")?;
                }
                Ok(())
            }
            None => writeln!(f, "not isomorphic"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(order: usize, edges: &[(usize, usize)]) -> Graph {
        Graph::build(order, edges).unwrap()
    }

    fn pairs(raw: &[(usize, usize)]) -> Vec<(VertexId, VertexId)> {
        raw.iter()
            .map(|&(a, b)| (VertexId::from(a), VertexId::from(b)))
            .collect()
    }

    #[test]
    fn negative_report_validates_without_mapping() {
        let g = graph(2, &[(0, 1)]);
        assert!(IsoReport::not_isomorphic().validates(&g, &g));
    }

    #[test]
    fn rotation_of_a_triangle_validates() {
        let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let report = IsoReport::isomorphic(pairs(&[(0, 1), (1, 2), (2, 0)]));
        assert!(report.validates(&g, &g));
    }

    #[test]
    fn non_bijective_mapping_fails_validation() {
        let g = graph(2, &[(0, 1)]);
        let report = IsoReport::isomorphic(pairs(&[(0, 0), (1, 0)]));
        assert!(!report.validates(&g, &g));
    }

    #[test]
    fn adjacency_breaking_mapping_fails_validation() {
        let left = graph(3, &[(0, 1)]);
        let right = graph(3, &[(1, 2)]);
        // Identity maps the (0,1) edge onto a non-edge.
        let report = IsoReport::isomorphic(pairs(&[(0, 0), (1, 1), (2, 2)]));
        assert!(!report.validates(&left, &right));
    }

    #[test]
    fn report_serializes_with_flat_vertex_ids() {
        let report = IsoReport::isomorphic(pairs(&[(0, 1), (1, 0)]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["is_isomorphic"], true);
        assert_eq!(json["mapping"][0][1], 1);
        assert_eq!(json["mapping"][1][1], 0);
    }

    #[test]
    fn display_renders_mapping_lines() {
        let report = IsoReport::isomorphic(pairs(&[(0, 2), (1, 0), (2, 1)]));
        let rendered = report.to_string();
        assert!(rendered.starts_with("isomorphic"));
        assert!(rendered.contains("v0 -> v2"));
    }
}
