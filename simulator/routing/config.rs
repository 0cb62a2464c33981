// Routing Scenario Configuration

use rt_rust::{NodeId, Protocol, Weight, MAX_WEIGHT, MIN_WEIGHT};

// ============================================================================
// Main Configuration
// ============================================================================

/// Main configuration for a routing scenario
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct RoutingScenarioConfig {
    /// Nodes per generated topology
    pub nodes: usize,

    /// Random seed for reproducibility (random when absent)
    #[serde(default)]
    pub seed: Option<u64>,

    /// How per-node degree caps are chosen
    #[serde(default)]
    pub degree_caps: DegreeCapsMode,

    /// Edge weight range
    #[serde(default)]
    pub weights: WeightRange,

    /// Protocols to run on every query
    #[serde(default = "default_protocols")]
    pub protocols: Vec<Protocol>,

    /// Which (start, end) pairs to solve
    #[serde(default)]
    pub queries: QueryMode,

    /// Number of independently generated topologies
    #[serde(default = "default_graphs")]
    pub graphs: usize,
}

impl Default for RoutingScenarioConfig {
    fn default() -> Self {
        Self {
            nodes: 8,
            seed: None,
            degree_caps: DegreeCapsMode::default(),
            weights: WeightRange::default(),
            protocols: default_protocols(),
            queries: QueryMode::default(),
            graphs: default_graphs(),
        }
    }
}

fn default_protocols() -> Vec<Protocol> {
    Protocol::ALL.to_vec()
}

fn default_graphs() -> usize {
    1
}

// ============================================================================
// Degree Caps
// ============================================================================

/// Degree cap strategies
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DegreeCapsMode {
    /// Same cap for every node
    Uniform { cap: usize },

    /// Exact caps, one per node
    PerNode { caps: Vec<usize> },

    /// Each node draws its cap from `[min, max]`, clamped to `[1, nodes - 1]`
    Random { min: usize, max: usize },
}

impl Default for DegreeCapsMode {
    fn default() -> Self {
        DegreeCapsMode::Uniform { cap: 3 }
    }
}

// ============================================================================
// Weights
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct WeightRange {
    pub min: Weight,
    pub max: Weight,
}

impl Default for WeightRange {
    fn default() -> Self {
        Self {
            min: MIN_WEIGHT,
            max: MAX_WEIGHT,
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Query selection strategies
#[derive(Debug, Clone, PartialEq, Default, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum QueryMode {
    /// Every ordered (start, end) pair, including start == end
    #[default]
    AllPairs,

    /// Explicit pairs
    Pairs { pairs: Vec<(NodeId, NodeId)> },

    /// `count` uniformly random pairs per topology
    Random { count: usize },
}
