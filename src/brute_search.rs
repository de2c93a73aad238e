//! Exhaustive search for a minimum vertex cover.

use crate::cover::Cover;
use crate::cust_error::ProcessingError;
use crate::graph::Graph;
use log::{debug, info};
use std::time::{Duration, Instant};

/// The outcome of `Graph::smallest_vertex_cover`.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// The first minimum-size cover in enumeration order, `None` if no subset was a cover.
    pub cover: Option<Cover>,
    /// Number of subsets that were checked.
    pub examined: u64,
    pub elapsed: Duration,
}

impl Graph {
    /// Checks every subset of the vertices of `self` and returns the smallest valid vertex
    /// cover. The best cover is only replaced by a strictly smaller one, so among covers of equal
    /// size the one enumerated first is kept.
    ///
    /// There is no pruning: all `2^n` subsets are checked, each at the cost of one
    /// `is_vertex_cover` call.
    pub fn smallest_vertex_cover(&self) -> Result<SearchReport, ProcessingError> {
        let start = Instant::now();
        let subsets = self.subsets()?;
        debug!("checking {} subsets", subsets.len());
        let mut min_size = self.num_vertices() + 1;
        let mut best: Option<Cover> = None;
        let mut examined = 0u64;
        for subset in subsets {
            examined += 1;
            if self.is_vertex_cover(&subset) && subset.len() < min_size {
                min_size = subset.len();
                best = Some(Cover::new(subset));
            }
        }
        let elapsed = start.elapsed();
        match &best {
            Some(cover) => info!(
                "smallest vertex cover has size {} ({} subsets in {:?})",
                cover.len(),
                examined,
                elapsed
            ),
            None => info!("no vertex cover among {} subsets", examined),
        }
        Ok(SearchReport {
            cover: best,
            examined,
            elapsed,
        })
    }
}
