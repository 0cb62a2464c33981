//! # rtRust - Routing Path Simulator
//!
//! Computes the routes that link-state (Dijkstra) and distance-vector
//! (Bellman-Ford) routing would converge to on a small random network topology.
//! No protocol is run and no packets are exchanged: each solver is given the
//! complete topology and returns the converged shortest path.
//!
//! ## Core Components
//!
//! - **RandomGraphBuilder**: connected, degree-capped random topology from a seedable RNG
//! - **Graph**: immutable weighted undirected adjacency lists
//! - **LinkState / DistanceVector**: the two `PathSolver` implementations
//! - **Session / Prompter**: state and console loops behind the interactive driver
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use rt_rust::{build_graph, solve, Protocol};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let graph = build_graph(6, &[3; 6], &mut rng)?;
//!
//! let ls = solve(&graph, Protocol::LinkState, 0, 5)?;
//! let dv = solve(&graph, Protocol::DistanceVector, 0, 5)?;
//! assert_eq!(ls.total_weight, dv.total_weight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Simulation
//!
//! Batch runs over YAML scenario files live in `simulator/` (`scenario_runner`
//! binary); the interactive console driver is the crate's main binary.

// Core routing modules
pub mod rt_interface;
pub mod rt_graph;
pub mod rt_builder;
pub mod rt_solver;
pub mod rt_link_state;
pub mod rt_distance_vector;

// Driver support
pub mod rt_session;
pub mod rt_prompt;

// Re-export commonly used types
pub use rt_builder::{build_graph, uniform_caps, RandomGraphBuilder};
pub use rt_distance_vector::DistanceVector;
pub use rt_graph::Graph;
pub use rt_interface::{
    CountingSink, Event, EventSink, NoOpSink, NodeId, RecordingSink, RouteError, Weight,
    INFINITE_WEIGHT, MAX_EDGE_WEIGHT, MAX_WEIGHT, MIN_WEIGHT,
};
pub use rt_link_state::LinkState;
pub use rt_session::{Session, SessionConfig};
pub use rt_solver::{solve, PathResult, PathSolver, Protocol};
