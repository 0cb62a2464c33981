//! Network Topology Graph
//!
//! Weighted undirected adjacency structure shared by the builder and the solvers.
//! A `Graph` is never mutated after it has been handed out: regeneration builds a
//! fresh value and replaces the old one.

use std::collections::VecDeque;
use std::fmt;

use crate::rt_interface::{NodeId, Result, RouteError, Weight, MAX_EDGE_WEIGHT};

/// Undirected weighted graph stored as one adjacency list per node.
///
/// Invariants maintained by every constructor:
/// - no self-loops
/// - at most one edge per unordered node pair
/// - `(v, w)` is in `adjacency[u]` iff `(u, w)` is in `adjacency[v]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<(NodeId, Weight)>>,
}

impl Graph {
    /// Empty graph with `node_count` isolated nodes. Only the builder fills it in.
    pub(crate) fn with_nodes(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Append `(u, v, w)` to both adjacency lists.
    ///
    /// Callers are responsible for the invariants (distinct, in range, new pair).
    pub(crate) fn push_edge(&mut self, u: NodeId, v: NodeId, weight: Weight) {
        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
    }

    /// Build a graph from explicit `(u, v, weight)` triples.
    ///
    /// Unlike the random builder this makes no connectivity promise, which makes
    /// it the way to construct hand-made or deliberately split topologies.
    ///
    /// # Errors
    /// `InvalidConfiguration` for an endpoint outside `[0, node_count)`, a
    /// self-loop, a repeated node pair, or a weight outside `[1, MAX_EDGE_WEIGHT]`.
    pub fn from_edges(node_count: usize, edges: &[(NodeId, NodeId, Weight)]) -> Result<Self> {
        let mut graph = Self::with_nodes(node_count);

        for &(u, v, weight) in edges {
            if u >= node_count || v >= node_count {
                return Err(RouteError::config(format!(
                    "edge ({}, {}) references a node outside 0..{}",
                    u, v, node_count
                )));
            }
            if u == v {
                return Err(RouteError::config(format!("self-loop on node {}", u)));
            }
            if weight == 0 || weight > MAX_EDGE_WEIGHT {
                return Err(RouteError::config(format!(
                    "edge ({}, {}) weight {} outside [1, {}]",
                    u, v, weight, MAX_EDGE_WEIGHT
                )));
            }
            if graph.has_edge(u, v) {
                return Err(RouteError::config(format!(
                    "duplicate edge between {} and {}",
                    u, v
                )));
            }
            graph.push_edge(u, v, weight);
        }

        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Neighbors of `node` in insertion order; empty for unknown nodes
    pub fn neighbors(&self, node: NodeId) -> &[(NodeId, Weight)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn edge_weight(&self, u: NodeId, v: NodeId) -> Option<Weight> {
        self.neighbors(u)
            .iter()
            .find(|(n, _)| *n == v)
            .map(|(_, w)| *w)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.edge_weight(u, v).is_some()
    }

    /// Every edge once, as `(low, high, weight)`, ordered by `low` then insertion
    pub fn edges(&self) -> Vec<(NodeId, NodeId, Weight)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, list)| {
                list.iter()
                    .filter(move |(v, _)| u < *v)
                    .map(move |&(v, w)| (u, v, w))
            })
            .collect()
    }

    /// Breadth-first reachability from node 0
    pub fn is_connected(&self) -> bool {
        let n = self.node_count();
        if n == 0 {
            return true;
        }

        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        let mut reached = 1;

        while let Some(u) = queue.pop_front() {
            for &(v, _) in self.neighbors(u) {
                if !seen[v] {
                    seen[v] = true;
                    reached += 1;
                    queue.push_back(v);
                }
            }
        }

        reached == n
    }

    /// Nodes whose degree exceeds their cap.
    ///
    /// The backbone chain is added regardless of caps, so an interior node with a
    /// cap of 1 shows up here. Nodes without a cap entry are ignored.
    pub fn cap_violations(&self, degree_caps: &[usize]) -> Vec<NodeId> {
        degree_caps
            .iter()
            .enumerate()
            .filter(|&(node, &cap)| self.degree(node) > cap)
            .map(|(node, _)| node)
            .collect()
    }
}

/// Adjacency list, one line per node: `Node 0: [(1, 3), (3, 1)]`
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, list) in self.adjacency.iter().enumerate() {
            write!(f, "Node {}: [", node)?;
            for (i, (neighbor, weight)) in list.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "({}, {})", neighbor, weight)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
