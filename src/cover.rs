//! Vertex covers and their validation.

use crate::graph::{Edge, Graph};
use fxhash::FxHashSet;

/// A candidate or final vertex cover, in the order its vertices were enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cover {
    vertices: Vec<i64>,
}

impl Cover {
    pub fn new(vertices: Vec<i64>) -> Self {
        Cover { vertices }
    }

    /// Returns a cover made of every vertex of `graph`.
    pub fn full(graph: &Graph) -> Self {
        Cover {
            vertices: graph.vertices().collect(),
        }
    }

    pub fn vertices(&self) -> &[i64] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

}

impl From<Vec<i64>> for Cover {
    fn from(vertices: Vec<i64>) -> Self {
        Cover::new(vertices)
    }
}

impl Graph {
    /// Returns the canonical edges that have at least one endpoint in `subset`.
    pub fn covered_edges(&self, subset: &[i64]) -> FxHashSet<Edge> {
        subset
            .iter()
            .flat_map(|u| self.neighbors(*u).iter().map(move |v| Edge::new(*u, *v)))
            .collect()
    }

    /// Checks if `subset` is a vertex cover, i.e. the edges it touches are all edges of `self`.
    /// Vertices that are not part of `self` touch nothing.
    pub fn is_vertex_cover(&self, subset: &[i64]) -> bool {
        self.covered_edges(subset) == *self.edges()
    }

    /// Checks if `cover` is a valid vertex cover of `self`.
    pub fn validate_cover(&self, cover: &Cover) -> bool {
        self.is_vertex_cover(cover.vertices())
    }
}
