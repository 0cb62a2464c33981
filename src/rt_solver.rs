//! Path Solving
//!
//! Common contract for the routing algorithms: endpoint validation, the result
//! type, and rebuilding a path from a predecessor table. The protocol is picked
//! once by the caller; algorithm code never branches on it.

use std::fmt;
use std::str::FromStr;

use crate::rt_distance_vector::DistanceVector;
use crate::rt_graph::Graph;
use crate::rt_interface::{
    EventSink, NoOpSink, NodeId, Result, RouteError, Weight, INFINITE_WEIGHT,
};
use crate::rt_link_state::LinkState;

// ============================================================================
// Result
// ============================================================================

/// Shortest path between two nodes
///
/// `path` runs from start to end inclusive. An unreachable end gives an empty
/// path and `INFINITE_WEIGHT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub path: Vec<NodeId>,
    pub total_weight: Weight,
}

impl PathResult {
    pub fn unreachable() -> Self {
        Self {
            path: Vec::new(),
            total_weight: INFINITE_WEIGHT,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of links traversed; zero when start == end or unreachable
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            return write!(f, "no path");
        }
        let hops: Vec<String> = self.path.iter().map(ToString::to_string).collect();
        write!(f, "{} (weight {})", hops.join(" -> "), self.total_weight)
    }
}

// ============================================================================
// Solver Trait
// ============================================================================

/// A shortest-path algorithm over a `Graph`
pub trait PathSolver {
    fn name(&self) -> &'static str;

    /// Solve and report progress to `sink`
    ///
    /// # Errors
    /// `InvalidNode` if `start` or `end` is not in the graph, before any work.
    fn solve_with_sink(
        &self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
        sink: &mut dyn EventSink,
    ) -> Result<PathResult>;

    fn solve(&self, graph: &Graph, start: NodeId, end: NodeId) -> Result<PathResult> {
        self.solve_with_sink(graph, start, end, &mut NoOpSink)
    }
}

/// Reject endpoints outside the graph
pub(crate) fn check_endpoints(graph: &Graph, start: NodeId, end: NodeId) -> Result<()> {
    for node in [start, end] {
        if !graph.contains(node) {
            return Err(RouteError::InvalidNode {
                node,
                node_count: graph.node_count(),
            });
        }
    }
    Ok(())
}

/// Walk predecessor links back from `end` and reverse
///
/// `distances[end] == INFINITE_WEIGHT` means unreachable.
pub(crate) fn reconstruct_path(
    distances: &[Weight],
    predecessors: &[Option<NodeId>],
    end: NodeId,
) -> PathResult {
    let total_weight = distances[end];
    if total_weight == INFINITE_WEIGHT {
        return PathResult::unreachable();
    }

    let mut path = vec![end];
    let mut node = end;
    while let Some(previous) = predecessors[node] {
        path.push(previous);
        node = previous;
    }
    path.reverse();

    PathResult { path, total_weight }
}

// ============================================================================
// Protocol Selection
// ============================================================================

/// Routing protocol family to simulate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    /// Dijkstra over the full topology
    LinkState,
    /// Bellman-Ford relaxation rounds
    DistanceVector,
}

impl Protocol {
    pub const ALL: [Protocol; 2] = [Protocol::LinkState, Protocol::DistanceVector];

    pub fn solver(self) -> &'static dyn PathSolver {
        match self {
            Protocol::LinkState => &LinkState,
            Protocol::DistanceVector => &DistanceVector,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::LinkState => write!(f, "link-state"),
            Protocol::DistanceVector => write!(f, "distance-vector"),
        }
    }
}

/// Accepts the menu numbers `1`/`2` as well as the protocol names
impl FromStr for Protocol {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "link-state" | "ls" | "dijkstra" => Ok(Protocol::LinkState),
            "2" | "distance-vector" | "dv" | "bellman-ford" => Ok(Protocol::DistanceVector),
            other => Err(RouteError::config(format!("unknown protocol '{}'", other))),
        }
    }
}

/// Shortest path from `start` to `end` using `protocol`
pub fn solve(graph: &Graph, protocol: Protocol, start: NodeId, end: NodeId) -> Result<PathResult> {
    protocol.solver().solve(graph, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rt_builder::build_graph;
    use crate::rt_interface::MAX_EDGE_WEIGHT;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn path_weight(graph: &Graph, path: &[NodeId]) -> Weight {
        path.windows(2)
            .map(|hop| graph.edge_weight(hop[0], hop[1]).unwrap())
            .sum()
    }

    fn chain() -> Graph {
        Graph::from_edges(4, &[(0, 1, 3), (1, 2, 5), (2, 3, 2)]).unwrap()
    }

    #[test]
    fn test_chain_only_graph() {
        let graph = chain();
        for protocol in Protocol::ALL {
            let result = solve(&graph, protocol, 0, 3).unwrap();
            assert_eq!(result.path, vec![0, 1, 2, 3], "{}", protocol);
            assert_eq!(result.total_weight, 10, "{}", protocol);
        }
    }

    #[test]
    fn test_shortcut_edge_wins() {
        let graph = Graph::from_edges(4, &[(0, 1, 3), (1, 2, 5), (2, 3, 2), (0, 3, 1)]).unwrap();
        for protocol in Protocol::ALL {
            let result = solve(&graph, protocol, 0, 3).unwrap();
            assert_eq!(result.path, vec![0, 3], "{}", protocol);
            assert_eq!(result.total_weight, 1, "{}", protocol);
        }
    }

    #[test]
    fn test_two_hop_path() {
        let graph = Graph::from_edges(3, &[(0, 1, 4), (1, 2, 4)]).unwrap();
        for protocol in Protocol::ALL {
            let result = solve(&graph, protocol, 0, 2).unwrap();
            assert_eq!(result.path, vec![0, 1, 2], "{}", protocol);
            assert_eq!(result.total_weight, 8, "{}", protocol);
            assert_eq!(result.hop_count(), 2);
        }
    }

    #[test]
    fn test_disconnected_components() {
        let graph = Graph::from_edges(5, &[(0, 1, 2), (1, 2, 2), (3, 4, 1)]).unwrap();
        for protocol in Protocol::ALL {
            let result = solve(&graph, protocol, 0, 4).unwrap();
            assert_eq!(result, PathResult::unreachable(), "{}", protocol);
            assert!(result.path.is_empty());
            assert_eq!(result.total_weight, INFINITE_WEIGHT);

            // same component still works
            let result = solve(&graph, protocol, 4, 3).unwrap();
            assert_eq!(result.path, vec![4, 3]);
        }
    }

    #[test]
    fn test_heaviest_edges_stay_reachable() {
        let graph = Graph::from_edges(
            4,
            &[(0, 1, MAX_EDGE_WEIGHT), (1, 2, MAX_EDGE_WEIGHT), (2, 3, MAX_EDGE_WEIGHT)],
        )
        .unwrap();
        assert!(graph.is_connected());

        for protocol in Protocol::ALL {
            let result = solve(&graph, protocol, 0, 3).unwrap();
            assert_eq!(result.path, vec![0, 1, 2, 3], "{}", protocol);
            assert_eq!(result.total_weight, 3 * MAX_EDGE_WEIGHT, "{}", protocol);
            assert!(result.total_weight < INFINITE_WEIGHT);
        }
    }

    #[test]
    fn test_start_equals_end() {
        let graph = chain();
        for protocol in Protocol::ALL {
            let result = solve(&graph, protocol, 2, 2).unwrap();
            assert_eq!(result.path, vec![2]);
            assert_eq!(result.total_weight, 0);
            assert_eq!(result.hop_count(), 0);
        }

        // also for an isolated node
        let lonely = Graph::from_edges(3, &[(0, 1, 1)]).unwrap();
        for protocol in Protocol::ALL {
            assert_eq!(solve(&lonely, protocol, 2, 2).unwrap().path, vec![2]);
        }
    }

    #[test]
    fn test_invalid_nodes() {
        let graph = chain();
        for protocol in Protocol::ALL {
            assert!(matches!(
                solve(&graph, protocol, 4, 0),
                Err(RouteError::InvalidNode {
                    node: 4,
                    node_count: 4
                })
            ));
            assert!(matches!(
                solve(&graph, protocol, 0, 17),
                Err(RouteError::InvalidNode { node: 17, .. })
            ));
        }
    }

    #[test]
    fn test_protocol_parsing() {
        assert_eq!("1".parse::<Protocol>().unwrap(), Protocol::LinkState);
        assert_eq!(" 2 ".parse::<Protocol>().unwrap(), Protocol::DistanceVector);
        assert_eq!(
            "Distance-Vector".parse::<Protocol>().unwrap(),
            Protocol::DistanceVector
        );
        assert!("3".parse::<Protocol>().is_err());
        assert_eq!(Protocol::LinkState.to_string(), "link-state");
        assert_eq!(Protocol::DistanceVector.solver().name(), "distance-vector");
    }

    #[test]
    fn test_protocol_yaml_names() {
        let protocols: Vec<Protocol> =
            serde_yaml::from_str("[link-state, distance-vector]").unwrap();
        assert_eq!(protocols, Protocol::ALL.to_vec());
    }

    #[test]
    fn test_result_display() {
        let result = PathResult {
            path: vec![0, 1, 2],
            total_weight: 8,
        };
        assert_eq!(result.to_string(), "0 -> 1 -> 2 (weight 8)");
        assert_eq!(PathResult::unreachable().to_string(), "no path");
    }

    #[test]
    fn test_reconstruct_path_walks_predecessors() {
        let distances = [0, 3, 8, INFINITE_WEIGHT];
        let predecessors = [None, Some(0), Some(1), None];

        let result = reconstruct_path(&distances, &predecessors, 2);
        assert_eq!(result.path, vec![0, 1, 2]);
        assert_eq!(result.total_weight, 8);

        assert_eq!(
            reconstruct_path(&distances, &predecessors, 3),
            PathResult::unreachable()
        );
    }

    proptest! {
        #[test]
        fn prop_protocols_agree_on_weight(n in 2usize..14, cap in 1usize..6, seed in any::<u64>()) {
            let cap = cap.min(n - 1);
            let mut rng = StdRng::seed_from_u64(seed);
            let graph = build_graph(n, &vec![cap; n], &mut rng).unwrap();

            for start in 0..n {
                for end in 0..n {
                    let ls = solve(&graph, Protocol::LinkState, start, end).unwrap();
                    let dv = solve(&graph, Protocol::DistanceVector, start, end).unwrap();

                    // backbone keeps everything reachable
                    prop_assert!(ls.is_reachable());
                    prop_assert_eq!(ls.total_weight, dv.total_weight);
                    prop_assert_eq!(ls.path.first(), Some(&start));
                    prop_assert_eq!(ls.path.last(), Some(&end));
                    prop_assert_eq!(dv.path.first(), Some(&start));
                    prop_assert_eq!(dv.path.last(), Some(&end));
                    prop_assert_eq!(path_weight(&graph, &ls.path), ls.total_weight);
                    prop_assert_eq!(path_weight(&graph, &dv.path), dv.total_weight);
                }
            }
        }
    }
}
