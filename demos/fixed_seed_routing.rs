//! Route on a topology built from a fixed seed, with both protocols
//!
//! Run with: cargo run --example fixed_seed_routing

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simple_logger::SimpleLogger;

use rt_rust::{build_graph, CountingSink, Protocol};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::new().init()?;

    // Use a fixed seed for reproducible results
    let fixed_seed = 42u64;
    let caps = [2, 3, 4, 3, 4, 3, 2];

    info!("Building topology with fixed seed: {}", fixed_seed);
    let mut rng = StdRng::seed_from_u64(fixed_seed);
    let graph = build_graph(caps.len(), &caps, &mut rng)?;

    // Same seed must give the same topology
    let again = build_graph(caps.len(), &caps, &mut StdRng::seed_from_u64(fixed_seed))?;
    assert_eq!(graph, again, "Seed did not reproduce the topology!");

    print!("{}", graph);

    let (start, end) = (0, caps.len() - 1);
    let mut weights = Vec::new();
    for protocol in Protocol::ALL {
        let mut sink = CountingSink::default();
        let result = protocol
            .solver()
            .solve_with_sink(&graph, start, end, &mut sink)?;

        info!(
            "{}: {} ({} relaxations, {} rounds)",
            protocol, result, sink.relaxations, sink.rounds
        );
        weights.push(result.total_weight);
    }

    assert!(weights.windows(2).all(|w| w[0] == w[1]), "Protocols disagree!");
    info!("✓ Both protocols agree on weight {}", weights[0]);

    Ok(())
}
