// node ids index straight into the adjacency vectors
pub type NodeId = usize;
pub type Weight = u64;

pub type RoundNumber = usize;

/// Smallest edge weight the random builder draws
pub const MIN_WEIGHT: Weight = 1;

/// Largest edge weight the random builder draws
pub const MAX_WEIGHT: Weight = 10;

/// Largest edge weight any constructor accepts
///
/// A simple path has fewer than `u32::MAX` hops in any graph that fits in memory,
/// so its total stays strictly below `INFINITE_WEIGHT`.
pub const MAX_EDGE_WEIGHT: Weight = u32::MAX as Weight;

/// Total weight reported when no path exists
pub const INFINITE_WEIGHT: Weight = Weight::MAX;

// ============================================================================
// Errors
// ============================================================================

/// Errors raised at the boundary of graph construction and path solving.
///
/// All variants are detected before any algorithmic work begins. An unreachable
/// destination is not an error, see `PathResult::unreachable`.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Node count, degree caps, weight range or explicit edges are unusable
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Start or end node outside `[0, node_count)`
    #[error("invalid node {node}: expected 0..{node_count}")]
    InvalidNode { node: NodeId, node_count: usize },

    /// Interactive input reached end of stream
    #[error("input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouteError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, RouteError>;

// ============================================================================
// Event Logging System
// ============================================================================

/// Events emitted by the path solvers for analysis and tracing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Link-state: node popped from the frontier with its final distance
    NodeFinalized { node: NodeId, distance: Weight },
    /// Tentative distance of `to` improved through `from`
    Relaxed {
        from: NodeId,
        to: NodeId,
        distance: Weight,
    },
    /// Distance-vector: one relaxation round over all edges finished
    RoundCompleted { round: RoundNumber, changed: bool },
}

/// Trait for consuming events from the solvers
pub trait EventSink {
    fn log(&mut self, event: Event);
}

/// No-op event sink for normal use (zero overhead)
pub struct NoOpSink;

impl EventSink for NoOpSink {
    #[inline(always)]
    fn log(&mut self, _event: Event) {}
}

/// Keeps every event in order, mostly useful in tests
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl EventSink for RecordingSink {
    fn log(&mut self, event: Event) {
        self.events.push(event);
    }
}

/// Counts events by kind without storing them
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CountingSink {
    pub finalized: usize,
    pub relaxations: usize,
    pub rounds: usize,
}

impl EventSink for CountingSink {
    fn log(&mut self, event: Event) {
        match event {
            Event::NodeFinalized { .. } => self.finalized += 1,
            Event::Relaxed { .. } => self.relaxations += 1,
            Event::RoundCompleted { .. } => self.rounds += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_sink_tallies_by_kind() {
        let mut sink = CountingSink::default();
        sink.log(Event::NodeFinalized { node: 0, distance: 0 });
        sink.log(Event::Relaxed {
            from: 0,
            to: 1,
            distance: 3,
        });
        sink.log(Event::Relaxed {
            from: 1,
            to: 2,
            distance: 5,
        });
        sink.log(Event::RoundCompleted {
            round: 1,
            changed: true,
        });

        assert_eq!(sink.finalized, 1);
        assert_eq!(sink.relaxations, 2);
        assert_eq!(sink.rounds, 1);
    }

    #[test]
    fn test_error_messages() {
        let err = RouteError::InvalidNode {
            node: 7,
            node_count: 4,
        };
        assert_eq!(err.to_string(), "invalid node 7: expected 0..4");

        let err = RouteError::config("need at least 2 nodes");
        assert_eq!(
            err.to_string(),
            "invalid configuration: need at least 2 nodes"
        );
    }
}
