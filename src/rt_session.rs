//! Routing Session
//!
//! Holds the current topology and protocol choice between queries. A new
//! topology always replaces the old one as a whole; a failed regeneration leaves
//! the current graph in place.

use log::{info, warn};
use rand::Rng;

use crate::rt_builder::RandomGraphBuilder;
use crate::rt_graph::Graph;
use crate::rt_interface::{NodeId, Result};
use crate::rt_solver::{PathResult, Protocol};

/// Parameters of one generated topology
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionConfig {
    pub protocol: Protocol,
    pub node_count: usize,
    /// Maximum links per node, one entry per node
    pub degree_caps: Vec<usize>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            protocol: Protocol::LinkState,
            node_count: 6,
            degree_caps: vec![3; 6],
        }
    }
}

pub struct Session<R: Rng> {
    config: SessionConfig,
    builder: RandomGraphBuilder,
    graph: Graph,
    rng: R,
    generation: usize,
}

impl<R: Rng> Session<R> {
    /// Build the first topology from `config`
    pub fn new(config: SessionConfig, rng: R) -> Result<Self> {
        Self::with_builder(config, RandomGraphBuilder::default(), rng)
    }

    pub fn with_builder(config: SessionConfig, builder: RandomGraphBuilder, mut rng: R) -> Result<Self> {
        let graph = builder.build(config.node_count, &config.degree_caps, &mut rng)?;
        report_cap_violations(&graph, &config.degree_caps);

        Ok(Self {
            config,
            builder,
            graph,
            rng,
            generation: 1,
        })
    }

    /// Replace the topology (and protocol) with one built from `config`
    ///
    /// # Errors
    /// `InvalidConfiguration`; the current graph and config are kept.
    pub fn regenerate(&mut self, config: SessionConfig) -> Result<&Graph> {
        let graph = self
            .builder
            .build(config.node_count, &config.degree_caps, &mut self.rng)?;
        report_cap_violations(&graph, &config.degree_caps);

        self.graph = graph;
        self.config = config;
        self.generation += 1;
        info!(
            "Topology generation {}: {} nodes, {} edges, {}",
            self.generation,
            self.graph.node_count(),
            self.graph.edge_count(),
            self.config.protocol
        );

        Ok(&self.graph)
    }

    /// Shortest path on the current topology with the current protocol
    pub fn route(&self, start: NodeId, end: NodeId) -> Result<PathResult> {
        let result = self.config.protocol.solver().solve(&self.graph, start, end)?;
        info!("{} route {} -> {}: {}", self.config.protocol, start, end, result);
        Ok(result)
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn protocol(&self) -> Protocol {
        self.config.protocol
    }

    /// How many topologies this session has built, starting at 1
    pub fn generation(&self) -> usize {
        self.generation
    }
}

fn report_cap_violations(graph: &Graph, degree_caps: &[usize]) {
    for node in graph.cap_violations(degree_caps) {
        warn!(
            "node {} has degree {} above its cap {} (backbone link)",
            node,
            graph.degree(node),
            degree_caps[node]
        );
    }
}
