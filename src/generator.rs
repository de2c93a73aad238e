//! Generation of random simple graphs in the edge-list input format.

use crate::cust_error::ProcessingError;
use fxhash::FxHashSet;
use rand::Rng;
use std::io::{self, Write};

/// Draws `m` distinct edges between the vertices `0..n`, without self-loops.
///
/// Returns the edges in the order they were drawn, each with the smaller endpoint first, or a
/// `ProcessingError` if `m` exceeds the `n * (n - 1) / 2` possible edges.
pub fn random_edges<R: Rng>(
    n: usize,
    m: usize,
    rng: &mut R,
) -> Result<Vec<(i64, i64)>, ProcessingError> {
    let possible = n * n.saturating_sub(1) / 2;
    if m > possible {
        return Err(ProcessingError::InvalidParameter(format!(
            "Too many edges for given number of vertices: {} > {}",
            m, possible
        )));
    }
    let mut seen = FxHashSet::default();
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let u = rng.gen_range(0..n) as i64;
        let v = rng.gen_range(0..n) as i64;
        if u == v {
            continue;
        }
        let edge = (u.min(v), u.max(v));
        if seen.insert(edge) {
            edges.push(edge);
        }
    }
    Ok(edges)
}

/// Writes `n`, the number of edges and the edges themselves as an input file.
pub fn write_input<W: Write>(n: usize, edges: &[(i64, i64)], mut out: W) -> Result<(), io::Error> {
    writeln!(out, "{} {}", n, edges.len())?;
    for (u, v) in edges {
        writeln!(out, "{} {}", u, v)?;
    }
    Ok(())
}
