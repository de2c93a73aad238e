//! Lazy enumeration of the power set of a vertex list.
//!
//! The enumeration order is the one of the recursive inclusion/exclusion scheme that branches
//! into "included" before "excluded" at every vertex: for `[a, b, c]` this is
//! `{a b c} {a b} {a c} {a} {b c} {b} {c} {}`. It is produced without recursion by counting a
//! bitmask down from `2^n - 1` to `0`, where the first vertex owns the most significant bit.

use crate::cust_error::ProcessingError;
use crate::graph::Graph;

/// Largest vertex count whose subsets can be addressed by the `u64` mask.
pub const MAX_VERTICES: usize = 63;

/// An `Iterator` over all subsets of a vertex list.
#[derive(Debug, Clone)]
pub struct Subsets {
    vertices: Vec<i64>,
    /// The mask of the next subset to yield, `None` once the empty subset was yielded.
    next_mask: Option<u64>,
}

impl Subsets {
    /// Creates the enumeration over `vertices`. Fails if `vertices` is longer than
    /// `MAX_VERTICES`.
    pub fn new(vertices: Vec<i64>) -> Result<Self, ProcessingError> {
        if vertices.len() > MAX_VERTICES {
            return Err(ProcessingError::TooManyVertices(vertices.len()));
        }
        let full = (1u64 << vertices.len()) - 1;
        Ok(Subsets {
            vertices,
            next_mask: Some(full),
        })
    }

    fn subset_of(&self, mask: u64) -> Vec<i64> {
        let n = self.vertices.len();
        self.vertices
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1u64 << (n - 1 - i)) != 0)
            .map(|(_, vertex)| *vertex)
            .collect()
    }
}

impl Iterator for Subsets {
    type Item = Vec<i64>;

    fn next(&mut self) -> Option<Self::Item> {
        let mask = self.next_mask?;
        self.next_mask = mask.checked_sub(1);
        Some(self.subset_of(mask))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next_mask.map_or(0, |mask| {
            usize::try_from(mask).map_or(usize::MAX, |m| m.saturating_add(1))
        });
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Subsets {}

impl Graph {
    /// Returns all subsets of the vertices of `self`, drawn in ascending vertex order.
    pub fn subsets(&self) -> Result<Subsets, ProcessingError> {
        Subsets::new(self.vertices().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    /// The recursive include-first generator, materialized.
    fn recursive_power_set(vertices: &[i64]) -> Vec<Vec<i64>> {
        fn inner(vertices: &[i64], index: usize, current: &mut Vec<i64>, out: &mut Vec<Vec<i64>>) {
            if index == vertices.len() {
                out.push(current.clone());
                return;
            }
            current.push(vertices[index]);
            inner(vertices, index + 1, current, out);
            current.pop();
            inner(vertices, index + 1, current, out);
        }
        let mut out = Vec::new();
        inner(vertices, 0, &mut Vec::new(), &mut out);
        out
    }

    /// Builds the power set by repeatedly doubling, independent of any ordering.
    fn doubling_power_set(vertices: &[i64]) -> BTreeSet<Vec<i64>> {
        let mut sets: Vec<Vec<i64>> = vec![Vec::new()];
        for vertex in vertices {
            let with: Vec<Vec<i64>> = sets
                .iter()
                .map(|set| {
                    let mut set = set.clone();
                    set.push(*vertex);
                    set
                })
                .collect();
            sets.extend(with);
        }
        sets.into_iter().collect()
    }

    #[test]
    fn order_test() {
        let subsets: Vec<_> = Subsets::new(vec![1, 2, 3]).unwrap().collect();
        assert_eq!(
            subsets,
            vec![
                vec![1, 2, 3],
                vec![1, 2],
                vec![1, 3],
                vec![1],
                vec![2, 3],
                vec![2],
                vec![3],
                vec![],
            ]
        );
    }

    #[test]
    fn matches_recursion_test() {
        for n in 0..=5 {
            let vertices: Vec<i64> = (0..n).map(|v| v * 10 - 7).collect();
            let subsets: Vec<_> = Subsets::new(vertices.clone()).unwrap().collect();
            assert_eq!(subsets, recursive_power_set(&vertices));
        }
    }

    #[test]
    fn complete_power_set_test() {
        for n in 0..=5 {
            let vertices: Vec<i64> = (1..=n).collect();
            let subsets: Vec<_> = Subsets::new(vertices.clone()).unwrap().collect();
            assert_eq!(subsets.len(), 1usize << n);
            let distinct: BTreeSet<Vec<i64>> = subsets.into_iter().collect();
            assert_eq!(distinct.len(), 1usize << n);
            assert_eq!(distinct, doubling_power_set(&vertices));
        }
    }

    #[test]
    fn exact_size_test() {
        let mut subsets = Subsets::new(vec![4, 5, 6, 7]).unwrap();
        assert_eq!(subsets.len(), 16);
        subsets.next();
        subsets.next();
        assert_eq!(subsets.len(), 14);
        let rest: Vec<_> = subsets.by_ref().collect();
        assert_eq!(rest.len(), 14);
        assert_eq!(subsets.len(), 0);
        assert!(subsets.next().is_none());
    }

    #[test]
    fn empty_vertex_list_test() {
        let subsets: Vec<_> = Subsets::new(Vec::new()).unwrap().collect();
        assert_eq!(subsets, vec![Vec::<i64>::new()]);
    }

    #[test]
    fn too_many_vertices_test() {
        assert!(Subsets::new((0..63).collect()).is_ok());
        assert!(matches!(
            Subsets::new((0..64).collect()),
            Err(ProcessingError::TooManyVertices(64))
        ));
    }

    #[test]
    fn graph_subsets_test() {
        let graph: Graph = vec![(3, 1), (2, 3)].into_iter().collect();
        let subsets: Vec<_> = graph.subsets().unwrap().collect();
        assert_eq!(subsets.len(), 8);
        assert_eq!(subsets[0], vec![1, 2, 3]);
    }
}
