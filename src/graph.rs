//! Implementation of a simple, undirected graph keyed by arbitrary integer vertex identifiers,
//! together with the reader for the plain edge-list input format.

use crate::cust_error::ImportError;
use fxhash::FxHashSet;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// An undirected edge, stored with the smaller endpoint first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(i64, i64);

impl Edge {
    /// Returns the canonical form of the edge between `u` and `v`.
    pub fn new(u: i64, v: i64) -> Self {
        if u <= v {
            Edge(u, v)
        } else {
            Edge(v, u)
        }
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

/// An undirected graph whose adjacency is keyed by vertex identifier.
///
/// Vertices iterate in ascending identifier order. Neighbor lists keep insertion order and are
/// not deduplicated, so a repeated input edge shows up twice in both endpoint lists.
#[derive(Debug, Default, Eq, PartialEq, Clone)]
pub struct Graph {
    adj_list: BTreeMap<i64, Vec<i64>>,
    edges: FxHashSet<Edge>,
    /// `(n, m)` as given by the header of the input, if the graph was read from one.
    declared: Option<(usize, usize)>,
}

// Static functions
impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an `Iterator` over all vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = i64> + '_ {
        self.adj_list.keys().copied()
    }

    /// Returns the number of distinct vertices of `self`.
    pub fn num_vertices(&self) -> usize {
        self.adj_list.len()
    }

    /// Returns the number of distinct (canonical) edges of `self`.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns the neighbor list of `vertex`, or an empty slice if `vertex` is unknown.
    pub fn neighbors(&self, vertex: i64) -> &[i64] {
        self.adj_list
            .get(&vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns an iterator over every vertex and its neighbor list, in ascending vertex order.
    pub fn adjacency(&self) -> impl Iterator<Item = (i64, &[i64])> + '_ {
        self.adj_list
            .iter()
            .map(|(vertex, neighbors)| (*vertex, neighbors.as_slice()))
    }

    /// Returns the canonical edge set.
    pub fn edges(&self) -> &FxHashSet<Edge> {
        &self.edges
    }

    /// Returns the vertex and edge count from the input header, if any.
    pub fn declared_counts(&self) -> Option<(usize, usize)> {
        self.declared
    }
}

// Dynamic functions
impl Graph {
    /// Inserts the edge `(u, v)` in both directions.
    pub fn add_edge(&mut self, u: i64, v: i64) {
        self.adj_list.entry(u).or_default().push(v);
        self.adj_list.entry(v).or_default().push(u);
        self.edges.insert(Edge::new(u, v));
    }
}

impl FromIterator<(i64, i64)> for Graph {
    fn from_iter<I: IntoIterator<Item = (i64, i64)>>(iter: I) -> Self {
        let mut graph = Graph::new();
        for (u, v) in iter {
            graph.add_edge(u, v);
        }
        graph
    }
}

fn next_token<T, I>(tokens: &mut I) -> Result<T, ImportError>
where
    T: FromStr<Err = std::num::ParseIntError>,
    I: Iterator<Item = String>,
{
    Ok(tokens
        .next()
        .ok_or(ImportError::InputMalformedError)?
        .parse::<T>()?)
}

impl Graph {
    /// Reads an edge list: `<n> <m>` followed by `m` pairs `<u> <v>`, all separated by arbitrary
    /// whitespace. Tokens after the `m`-th edge are ignored.
    pub fn read_edge_list<R: BufRead>(input: R) -> Result<Self, ImportError> {
        let mut tokens = Vec::new();
        for line in input.lines() {
            let line = line?;
            tokens.extend(line.split_whitespace().map(str::to_owned));
        }
        let mut tokens = tokens.into_iter();
        let n: usize = next_token(&mut tokens)?;
        let m: usize = next_token(&mut tokens)?;
        let mut graph = Graph::new();
        for _ in 0..m {
            let u: i64 = next_token(&mut tokens)?;
            let v: i64 = next_token(&mut tokens)?;
            graph.add_edge(u, v);
        }
        if tokens.next().is_some() {
            debug!("ignoring trailing input after {} edges", m);
        }
        if graph.num_vertices() != n {
            warn!(
                "header declares {} vertices but the edge list touches {}",
                n,
                graph.num_vertices()
            );
        }
        graph.declared = Some((n, m));
        debug!(
            "read graph with {} vertices and {} distinct edges",
            graph.num_vertices(),
            graph.num_edges()
        );
        Ok(graph)
    }

    /// Opens `path` and reads it with `Graph::read_edge_list`.
    pub fn read_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ImportError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ImportError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Self::read_edge_list(BufReader::new(file))
    }
}
