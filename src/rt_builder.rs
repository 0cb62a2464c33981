//! Random Topology Generation
//!
//! Builds a connected, degree-bounded, weighted undirected graph. Connectivity
//! comes from a backbone chain `0 - 1 - ... - n-1`; extra links are then added at
//! random while respecting each node's degree cap.

use hashbrown::HashSet;
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::rt_graph::Graph;
use crate::rt_interface::{
    NodeId, Result, RouteError, Weight, MAX_EDGE_WEIGHT, MAX_WEIGHT, MIN_WEIGHT,
};

/// Random graph builder with a configurable edge weight range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGraphBuilder {
    min_weight: Weight,
    max_weight: Weight,
}

impl Default for RandomGraphBuilder {
    fn default() -> Self {
        Self {
            min_weight: MIN_WEIGHT,
            max_weight: MAX_WEIGHT,
        }
    }
}

/// Per-build bookkeeping: degree table and the set of node pairs already linked.
///
/// Both nodes of a tentative link are checked against this table before the link
/// is added, so the checks never depend on the graph's own lists.
struct LinkTable {
    degrees: Vec<usize>,
    linked: HashSet<(NodeId, NodeId)>,
}

impl LinkTable {
    fn new(node_count: usize) -> Self {
        Self {
            degrees: vec![0; node_count],
            linked: HashSet::new(),
        }
    }

    fn key(u: NodeId, v: NodeId) -> (NodeId, NodeId) {
        (u.min(v), u.max(v))
    }

    fn is_linked(&self, u: NodeId, v: NodeId) -> bool {
        self.linked.contains(&Self::key(u, v))
    }

    fn link(&mut self, u: NodeId, v: NodeId) {
        self.linked.insert(Self::key(u, v));
        self.degrees[u] += 1;
        self.degrees[v] += 1;
    }
}

impl RandomGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder drawing weights uniformly from `[min_weight, max_weight]`
    ///
    /// # Errors
    /// `InvalidConfiguration` unless `1 <= min_weight <= max_weight <= MAX_EDGE_WEIGHT`.
    pub fn with_weights(min_weight: Weight, max_weight: Weight) -> Result<Self> {
        if min_weight == 0 || min_weight > max_weight || max_weight > MAX_EDGE_WEIGHT {
            return Err(RouteError::config(format!(
                "weight range [{}, {}] must satisfy 1 <= min <= max <= {}",
                min_weight, max_weight, MAX_EDGE_WEIGHT
            )));
        }
        Ok(Self {
            min_weight,
            max_weight,
        })
    }

    pub fn weight_range(&self) -> (Weight, Weight) {
        (self.min_weight, self.max_weight)
    }

    /// Check node count and degree caps without building anything
    ///
    /// Caps are only bounded to `[1, n-1]`. Whether they leave room for the
    /// backbone chain is not checked; see `Graph::cap_violations`.
    pub fn validate(node_count: usize, degree_caps: &[usize]) -> Result<()> {
        if node_count < 2 {
            return Err(RouteError::config(format!(
                "need at least 2 nodes, got {}",
                node_count
            )));
        }
        if degree_caps.len() != node_count {
            return Err(RouteError::config(format!(
                "expected {} degree caps, got {}",
                node_count,
                degree_caps.len()
            )));
        }
        if let Some((node, cap)) = degree_caps
            .iter()
            .enumerate()
            .find(|(_, &cap)| cap < 1 || cap >= node_count)
        {
            return Err(RouteError::config(format!(
                "degree cap {} for node {} outside [1, {}]",
                cap,
                node,
                node_count - 1
            )));
        }
        Ok(())
    }

    /// Build a random connected graph
    ///
    /// # Process
    /// 1. Backbone: link `i` and `i+1` for every `i` in `0..n-1`
    /// 2. Augmentation, per node `i` ascending:
    ///    - `remaining = cap[i] - degree(i)`, skip the node when nothing remains
    ///    - draw a target `k` from `[0, remaining]`
    ///    - walk the other nodes in shuffled order, linking to each one that is
    ///      below its own cap and not yet linked, until `i` is full or the number
    ///      of new links reaches `k`
    ///
    /// The target check runs after a link is added, so a node with spare capacity
    /// always gains at least one link when an eligible partner exists.
    ///
    /// # Errors
    /// `InvalidConfiguration` from `validate`; no graph is produced in that case.
    ///
    /// # Example
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use rt_rust::RandomGraphBuilder;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let graph = RandomGraphBuilder::new().build(5, &[2, 3, 3, 3, 2], &mut rng)?;
    /// assert!(graph.is_connected());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn build<R: Rng + ?Sized>(
        &self,
        node_count: usize,
        degree_caps: &[usize],
        rng: &mut R,
    ) -> Result<Graph> {
        Self::validate(node_count, degree_caps)?;

        let mut graph = Graph::with_nodes(node_count);
        let mut table = LinkTable::new(node_count);

        for i in 0..node_count - 1 {
            let weight = self.draw_weight(rng);
            graph.push_edge(i, i + 1, weight);
            table.link(i, i + 1);
        }

        let mut candidates: Vec<NodeId> = Vec::with_capacity(node_count - 1);

        for i in 0..node_count {
            let cap = degree_caps[i];
            let remaining = cap.saturating_sub(table.degrees[i]);
            if remaining == 0 {
                continue;
            }

            let target = rng.gen_range(0..=remaining);

            candidates.clear();
            candidates.extend((0..node_count).filter(|&j| j != i));
            candidates.shuffle(rng);

            let mut added = 0;
            for &j in &candidates {
                if table.degrees[i] >= cap {
                    break;
                }
                if table.degrees[j] >= degree_caps[j] || table.is_linked(i, j) {
                    continue;
                }

                let weight = self.draw_weight(rng);
                graph.push_edge(i, j, weight);
                table.link(i, j);
                added += 1;

                if added >= target {
                    break;
                }
            }

            debug!(
                "node {}: cap {} target {} added {} degree {}",
                i, cap, target, added, table.degrees[i]
            );
        }

        info!(
            "Built graph: {} nodes, {} edges",
            node_count,
            graph.edge_count()
        );

        Ok(graph)
    }

    fn draw_weight<R: Rng + ?Sized>(&self, rng: &mut R) -> Weight {
        rng.gen_range(self.min_weight..=self.max_weight)
    }
}

/// Build a graph with the default `[1, 10]` weight range
pub fn build_graph<R: Rng + ?Sized>(
    node_count: usize,
    degree_caps: &[usize],
    rng: &mut R,
) -> Result<Graph> {
    RandomGraphBuilder::default().build(node_count, degree_caps, rng)
}

/// The same cap for every node
pub fn uniform_caps(node_count: usize, cap: usize) -> Vec<usize> {
    vec![cap; node_count]
}
