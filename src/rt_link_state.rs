//! Link-state routing: every router knows the full topology and runs Dijkstra.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::rt_graph::Graph;
use crate::rt_interface::{Event, EventSink, NodeId, Result, Weight, INFINITE_WEIGHT};
use crate::rt_solver::{check_endpoints, reconstruct_path, PathResult, PathSolver};

/// Dijkstra with a lazy-deletion min-heap.
///
/// Frontier entries are `(distance, node)`; equal distances pop the smaller node
/// id first. Stale entries (distance above the recorded one) are skipped when
/// popped rather than removed on update.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkState;

impl PathSolver for LinkState {
    fn name(&self) -> &'static str {
        "link-state"
    }

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
        let mut frontier: BinaryHeap<Reverse<(Weight, NodeId)>> = BinaryHeap::new();

        distances[start] = 0;
        frontier.push(Reverse((0, start)));

        while let Some(Reverse((distance, node))) = frontier.pop() {
            if distance > distances[node] {
                continue;
            }
            sink.log(Event::NodeFinalized { node, distance });

            // end is final once popped
            if node == end {
                break;
            }

            for &(neighbor, weight) in graph.neighbors(node) {
                let candidate = distance.saturating_add(weight);
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    predecessors[neighbor] = Some(node);
                    frontier.push(Reverse((candidate, neighbor)));
                    sink.log(Event::Relaxed {
                        from: node,
                        to: neighbor,
                        distance: candidate,
                    });
                }
            }
        }

        Ok(reconstruct_path(&distances, &predecessors, end))
    }
}
