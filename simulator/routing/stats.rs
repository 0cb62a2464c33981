// Routing Scenario Statistics

use rt_rust::{NodeId, Protocol, Weight};

// ============================================================================
// Scenario Result
// ============================================================================

/// Complete scenario result
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    /// Configuration summary
    pub config_summary: String,

    /// Random seed used
    pub seed_used: u64,

    /// One entry per generated topology
    pub graphs: Vec<GraphStats>,

    /// Aggregates per protocol, in configured order
    pub protocols: Vec<ProtocolStats>,

    /// Queries where protocols disagreed on total weight
    pub mismatches: Vec<Mismatch>,
}

/// Shape of one generated topology
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStats {
    pub index: usize,
    pub nodes: usize,
    pub edges: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub avg_degree: f64,
    pub connected: bool,

    /// Nodes pushed over their cap by the backbone chain
    pub cap_violations: Vec<NodeId>,
}

/// Work and outcome totals for one protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolStats {
    pub protocol: Protocol,
    pub queries: usize,
    pub reachable: usize,
    pub unreachable: usize,

    /// Sum of total weights over reachable queries
    pub weight_sum: Weight,
    pub hop_sum: usize,

    /// Solver events
    pub relaxations: usize,
    pub finalized: usize,
    pub rounds: usize,
}

impl ProtocolStats {
    pub fn new(protocol: Protocol) -> Self {
        Self {
            protocol,
            queries: 0,
            reachable: 0,
            unreachable: 0,
            weight_sum: 0,
            hop_sum: 0,
            relaxations: 0,
            finalized: 0,
            rounds: 0,
        }
    }

    pub fn avg_relaxations(&self) -> f64 {
        if self.queries == 0 {
            return 0.0;
        }
        self.relaxations as f64 / self.queries as f64
    }

    pub fn avg_hops(&self) -> f64 {
        if self.reachable == 0 {
            return 0.0;
        }
        self.hop_sum as f64 / self.reachable as f64
    }
}

/// Protocols reporting different total weights for the same query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub graph: usize,
    pub start: NodeId,
    pub end: NodeId,
    pub weights: Vec<(Protocol, Weight)>,
}

impl ScenarioResult {
    pub fn total_queries(&self) -> usize {
        self.protocols.first().map(|p| p.queries).unwrap_or(0)
    }

    pub fn is_consistent(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn print_summary(&self) {
        println!("\n╔════════════════════════════════════════════════════════╗");
        println!("║    ROUTING SCENARIO RESULTS                            ║");
        println!("╚════════════════════════════════════════════════════════╝\n");

        println!("Configuration: {}", self.config_summary);
        println!("Seed: {}", self.seed_used);
        println!("Queries: {} per protocol", self.total_queries());
        println!();

        println!("═══ Topologies ═══");
        for graph in &self.graphs {
            println!(
                "  #{}: {} nodes, {} edges, degree min={} max={} avg={:.2}, connected={}",
                graph.index,
                graph.nodes,
                graph.edges,
                graph.min_degree,
                graph.max_degree,
                graph.avg_degree,
                graph.connected
            );
            if !graph.cap_violations.is_empty() {
                println!(
                    "      backbone over cap on nodes {:?}",
                    graph.cap_violations
                );
            }
        }
        println!();

        println!("═══ Protocols ═══");
        for stats in &self.protocols {
            println!("  {}:", stats.protocol);
            println!(
                "    Queries: {} ({} reachable, {} unreachable)",
                stats.queries, stats.reachable, stats.unreachable
            );
            println!("    Avg Hops: {:.2}", stats.avg_hops());
            println!("    Weight Sum: {}", stats.weight_sum);
            println!(
                "    Work: {} relaxations ({:.1}/query), {} finalized, {} rounds",
                stats.relaxations,
                stats.avg_relaxations(),
                stats.finalized,
                stats.rounds
            );
        }
        println!();

        println!("═══ Agreement ═══");
        if self.is_consistent() {
            println!("  ✓ All protocols agree on every total weight");
        } else {
            println!("  ✗ {} mismatched queries", self.mismatches.len());
            for m in &self.mismatches {
                println!(
                    "    graph #{} {} -> {}: {:?}",
                    m.graph, m.start, m.end, m.weights
                );
            }
        }
    }
}
