// Routing Scenario Simulator Module

pub mod config;
pub mod stats;
pub mod runner;

// Re-export commonly used types
pub use config::RoutingScenarioConfig;
pub use runner::RoutingRunner;
