// Routing Scenario Runner

use super::config::{DegreeCapsMode, QueryMode, RoutingScenarioConfig};
use super::stats::*;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rt_rust::{CountingSink, Graph, NodeId, RandomGraphBuilder, RouteError};

// ============================================================================
// Core Structures
// ============================================================================

/// Builds topologies and runs every configured query with every protocol
pub struct RoutingRunner {
    config: RoutingScenarioConfig,
    builder: RandomGraphBuilder,
    rng: StdRng,
    seed_used: u64,
}

impl RoutingRunner {
    /// Create new runner
    ///
    /// # Errors
    /// `InvalidConfiguration` for an unusable weight range or an empty protocol
    /// list; caps and node count are checked when the first graph is built.
    pub fn new(config: RoutingScenarioConfig) -> Result<Self, RouteError> {
        let builder = RandomGraphBuilder::with_weights(config.weights.min, config.weights.max)?;
        if config.protocols.is_empty() {
            return Err(RouteError::config("no protocols configured"));
        }

        let seed_used = config
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen());
        let rng = StdRng::seed_from_u64(seed_used);

        Ok(Self {
            config,
            builder,
            rng,
            seed_used,
        })
    }

    pub fn seed_used(&self) -> u64 {
        self.seed_used
    }

    /// Run the scenario
    pub fn run(mut self) -> Result<ScenarioResult, RouteError> {
        let mut graphs = Vec::with_capacity(self.config.graphs);
        let mut protocols: Vec<ProtocolStats> = self
            .config
            .protocols
            .iter()
            .map(|&p| ProtocolStats::new(p))
            .collect();
        let mut mismatches = Vec::new();

        for index in 0..self.config.graphs {
            // 1. Build topology
            let caps = self.degree_caps();
            let graph = self.builder.build(self.config.nodes, &caps, &mut self.rng)?;
            let graph_stats = summarize(index, &graph, &caps);
            if !graph_stats.cap_violations.is_empty() {
                warn!(
                    "graph #{}: backbone exceeds caps on nodes {:?}",
                    index, graph_stats.cap_violations
                );
            }
            graphs.push(graph_stats);

            // 2. Solve every query with every protocol
            for (start, end) in self.queries() {
                let mut weights = Vec::with_capacity(protocols.len());

                for stats in protocols.iter_mut() {
                    let mut sink = CountingSink::default();
                    let result = stats
                        .protocol
                        .solver()
                        .solve_with_sink(&graph, start, end, &mut sink)?;

                    stats.queries += 1;
                    stats.relaxations += sink.relaxations;
                    stats.finalized += sink.finalized;
                    stats.rounds += sink.rounds;
                    if result.is_reachable() {
                        stats.reachable += 1;
                        stats.weight_sum += result.total_weight;
                        stats.hop_sum += result.hop_count();
                    } else {
                        stats.unreachable += 1;
                    }

                    debug!("graph #{} {}: {} -> {} = {}", index, stats.protocol, start, end, result);
                    weights.push((stats.protocol, result.total_weight));
                }

                // 3. Compare total weights
                if weights.windows(2).any(|w| w[0].1 != w[1].1) {
                    warn!("graph #{}: protocols disagree on {} -> {}: {:?}", index, start, end, weights);
                    mismatches.push(Mismatch {
                        graph: index,
                        start,
                        end,
                        weights,
                    });
                }
            }

            info!("graph #{} done", index);
        }

        Ok(ScenarioResult {
            config_summary: self.config_summary(),
            seed_used: self.seed_used,
            graphs,
            protocols,
            mismatches,
        })
    }

    fn degree_caps(&mut self) -> Vec<usize> {
        let n = self.config.nodes;
        match &self.config.degree_caps {
            DegreeCapsMode::Uniform { cap } => vec![*cap; n],
            DegreeCapsMode::PerNode { caps } => caps.clone(),
            DegreeCapsMode::Random { min, max } => {
                let upper = n.saturating_sub(1).max(1);
                let lo = (*min).clamp(1, upper);
                let hi = (*max).clamp(lo, upper);
                (0..n).map(|_| self.rng.gen_range(lo..=hi)).collect()
            }
        }
    }

    fn queries(&mut self) -> Vec<(NodeId, NodeId)> {
        let n = self.config.nodes;
        match &self.config.queries {
            QueryMode::AllPairs => (0..n)
                .flat_map(|start| (0..n).map(move |end| (start, end)))
                .collect(),
            QueryMode::Pairs { pairs } => pairs.clone(),
            QueryMode::Random { count } => (0..*count)
                .map(|_| (self.rng.gen_range(0..n), self.rng.gen_range(0..n)))
                .collect(),
        }
    }

    fn config_summary(&self) -> String {
        let protocols: Vec<String> = self.config.protocols.iter().map(ToString::to_string).collect();
        format!(
            "{} graph(s) x {} nodes, caps {:?}, weights [{}, {}], queries {:?}, protocols [{}]",
            self.config.graphs,
            self.config.nodes,
            self.config.degree_caps,
            self.config.weights.min,
            self.config.weights.max,
            self.config.queries,
            protocols.join(", ")
        )
    }
}

fn summarize(index: usize, graph: &Graph, caps: &[usize]) -> GraphStats {
    let degrees: Vec<usize> = (0..graph.node_count()).map(|n| graph.degree(n)).collect();
    let avg_degree = if degrees.is_empty() {
        0.0
    } else {
        degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
    };

    GraphStats {
        index,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        min_degree: degrees.iter().copied().min().unwrap_or(0),
        max_degree: degrees.iter().copied().max().unwrap_or(0),
        avg_degree,
        connected: graph.is_connected(),
        cap_violations: graph.cap_violations(caps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::config::WeightRange;
    use rt_rust::Protocol;

    fn config(nodes: usize) -> RoutingScenarioConfig {
        RoutingScenarioConfig {
            nodes,
            seed: Some(7),
            ..Default::default()
        }
    }

    #[test]
    fn test_all_pairs_agree() {
        let result = RoutingRunner::new(config(8)).unwrap().run().unwrap();

        assert!(result.is_consistent());
        assert_eq!(result.graphs.len(), 1);
        assert!(result.graphs[0].connected);
        assert_eq!(result.total_queries(), 64);
        for stats in &result.protocols {
            assert_eq!(stats.reachable, 64);
            assert_eq!(stats.unreachable, 0);
        }
        assert_eq!(result.protocols[0].weight_sum, result.protocols[1].weight_sum);
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = RoutingRunner::new(config(9)).unwrap().run().unwrap();
        let b = RoutingRunner::new(config(9)).unwrap().run().unwrap();

        assert_eq!(a.seed_used, 7);
        assert_eq!(a.graphs, b.graphs);
        assert_eq!(a.protocols, b.protocols);
    }

    #[test]
    fn test_random_caps_and_queries() {
        let cfg = RoutingScenarioConfig {
            graphs: 3,
            degree_caps: DegreeCapsMode::Random { min: 0, max: 50 },
            queries: QueryMode::Random { count: 10 },
            ..config(6)
        };
        let result = RoutingRunner::new(cfg).unwrap().run().unwrap();

        assert_eq!(result.graphs.len(), 3);
        assert_eq!(result.total_queries(), 30);
        assert!(result.is_consistent());
        assert!(result.graphs.iter().all(|g| g.max_degree <= 5));
    }

    #[test]
    fn test_bad_pairs_are_reported() {
        let cfg = RoutingScenarioConfig {
            queries: QueryMode::Pairs {
                pairs: vec![(0, 1), (0, 12)],
            },
            ..config(4)
        };
        let result = RoutingRunner::new(cfg).unwrap().run();

        assert!(matches!(result, Err(RouteError::InvalidNode { node: 12, .. })));
    }

    #[test]
    fn test_bad_caps_are_reported() {
        let cfg = RoutingScenarioConfig {
            degree_caps: DegreeCapsMode::PerNode { caps: vec![1, 1] },
            ..config(4)
        };
        let result = RoutingRunner::new(cfg).unwrap().run();

        assert!(matches!(result, Err(RouteError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_rejects_bad_setup() {
        let cfg = RoutingScenarioConfig {
            weights: WeightRange { min: 5, max: 1 },
            ..config(4)
        };
        assert!(RoutingRunner::new(cfg).is_err());

        let cfg = RoutingScenarioConfig {
            weights: WeightRange {
                min: 1,
                max: u64::MAX,
            },
            ..config(4)
        };
        assert!(matches!(
            RoutingRunner::new(cfg),
            Err(RouteError::InvalidConfiguration(_))
        ));

        let cfg = RoutingScenarioConfig {
            protocols: Vec::new(),
            ..config(4)
        };
        assert!(RoutingRunner::new(cfg).is_err());
    }

    #[test]
    fn test_single_protocol_has_no_mismatches() {
        let cfg = RoutingScenarioConfig {
            protocols: vec![Protocol::DistanceVector],
            ..config(5)
        };
        let result = RoutingRunner::new(cfg).unwrap().run().unwrap();

        assert_eq!(result.protocols.len(), 1);
        assert!(result.protocols[0].rounds > 0);
        assert_eq!(result.protocols[0].finalized, 0);
        assert!(result.is_consistent());
    }
}
