// Scenario Runner - Load and execute routing scenario YAML files
//
// Usage:
//   cargo run --bin scenario_runner scenarios/small_mesh.yaml
//   cargo run --bin scenario_runner scenarios/  (runs all .yaml files in directory)
//   cargo run --bin scenario_runner scenarios/small_mesh.yaml --seed 0x2a

mod routing;

use log::{info, LevelFilter};
use routing::{RoutingRunner, RoutingScenarioConfig};
use simple_logger::SimpleLogger;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

/// Scenario file format
#[derive(Debug, serde::Deserialize)]
struct ScenarioFile {
    /// Scenario metadata
    #[serde(default)]
    meta: ScenarioMeta,

    /// Topology, query and protocol settings
    config: RoutingScenarioConfig,
}

#[derive(Debug, Default, serde::Deserialize)]
struct ScenarioMeta {
    name: Option<String>,
    description: Option<String>,
}

fn main() {
    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Warn).env().init() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <scenario.yaml | directory/> [--seed SEED]", args[0]);
        eprintln!("\nExamples:");
        eprintln!("  {} scenarios/small_mesh.yaml", args[0]);
        eprintln!("  {} scenarios/", args[0]);
        eprintln!("  {} scenarios/small_mesh.yaml --seed 0x2a", args[0]);
        std::process::exit(1);
    }

    let path = Path::new(&args[1]);

    // Parse optional seed
    let seed: Option<u64> = if args.len() >= 4 && args[2] == "--seed" {
        match parse_seed(&args[3]) {
            Ok(seed) => Some(seed),
            Err(e) => {
                eprintln!("Invalid seed '{}': {}", args[3], e);
                std::process::exit(1);
            }
        }
    } else {
        None
    };

    let scenarios = if path.is_file() {
        vec![path.to_path_buf()]
    } else if path.is_dir() {
        find_scenarios(path)
    } else {
        eprintln!("Error: Path does not exist: {}", path.display());
        std::process::exit(1);
    };

    if scenarios.is_empty() {
        eprintln!("No .yaml files found in {}", path.display());
        std::process::exit(1);
    }

    let mut failures = 0;
    for (i, scenario_path) in scenarios.iter().enumerate() {
        println!("\n{}/{} Running: {}\n", i + 1, scenarios.len(), scenario_path.display());
        match run_scenario_file(scenario_path, seed) {
            Ok(true) => {}
            Ok(false) => failures += 1,
            Err(e) => {
                eprintln!("Scenario {} failed: {}", scenario_path.display(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("\n✗ {} of {} scenario(s) failed", failures, scenarios.len());
        std::process::exit(1);
    }
    println!("\n✓ All {} scenario(s) complete!\n", scenarios.len());
}

fn find_scenarios(dir: &Path) -> Vec<PathBuf> {
    let mut scenarios = Vec::new();

    if let Ok(entries) = fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            let ext = path.extension().and_then(|s| s.to_str());
            if ext == Some("yaml") || ext == Some("yml") {
                scenarios.push(path);
            }
        }
    }

    scenarios.sort();
    scenarios
}

/// Returns whether all protocols agreed
fn run_scenario_file(path: &Path, seed: Option<u64>) -> Result<bool, Box<dyn Error>> {
    println!("Loading scenario from: {}", path.display());

    let yaml_content = fs::read_to_string(path)?;
    let scenario: ScenarioFile = serde_yaml::from_str(&yaml_content)?;

    println!("\n╔════════════════════════════════════════════════════════╗");
    match scenario.meta.name {
        Some(ref name) => println!("║  {}", name),
        None => println!("║  Scenario: {}", path.display()),
    }
    println!("╚════════════════════════════════════════════════════════╝\n");

    if let Some(ref desc) = scenario.meta.description {
        println!("{}\n", desc);
    }

    let mut config = scenario.config;
    if seed.is_some() {
        config.seed = seed;
    }

    let runner = RoutingRunner::new(config)?;
    info!("Running with seed {}", runner.seed_used());
    let result = runner.run()?;

    result.print_summary();
    Ok(result.is_consistent())
}

fn parse_seed(text: &str) -> Result<u64, std::num::ParseIntError> {
    match text.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => text.parse(),
    }
}
