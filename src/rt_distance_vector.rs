//! Distance-vector routing emulated with Bellman-Ford relaxation rounds.
//!
//! Each round plays the part of one exchange of distance vectors between
//! neighbors. Weights are positive by construction, so no negative-cycle pass
//! follows the rounds.

use crate::rt_graph::Graph;
use crate::rt_interface::{Event, EventSink, NodeId, Result, INFINITE_WEIGHT};
use crate::rt_solver::{check_endpoints, reconstruct_path, PathResult, PathSolver};

#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceVector;

impl PathSolver for DistanceVector {
    fn name(&self) -> &'static str {
        "distance-vector"
    }

    /// At most `n - 1` rounds over every adjacency entry, stopping at the first
    /// round that changes nothing
    fn solve_with_sink(
        &self,
        graph: &Graph,
        start: NodeId,
        end: NodeId,
        sink: &mut dyn EventSink,
    ) -> Result<PathResult> {
        check_endpoints(graph, start, end)?;

        let n = graph.node_count();
        let mut distances = vec![INFINITE_WEIGHT; n];
        let mut predecessors: Vec<Option<NodeId>> = vec![None; n];
        distances[start] = 0;

        for round in 1..n {
            let mut changed = false;

            for node in 0..n {
                let base = distances[node];
                if base == INFINITE_WEIGHT {
                    continue;
                }
                for &(neighbor, weight) in graph.neighbors(node) {
                    let candidate = base.saturating_add(weight);
                    if candidate < distances[neighbor] {
                        distances[neighbor] = candidate;
                        predecessors[neighbor] = Some(node);
                        changed = true;
                        sink.log(Event::Relaxed {
                            from: node,
                            to: neighbor,
                            distance: candidate,
                        });
                    }
                }
            }

            sink.log(Event::RoundCompleted { round, changed });
            if !changed {
                break;
            }
        }

        Ok(reconstruct_path(&distances, &predecessors, end))
    }
}
