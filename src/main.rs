// Interactive routing console
//
// Usage:
//   cargo run
//   cargo run -- --seed 1234     (reproducible topologies)
//   RUST_LOG=debug cargo run     (builder and solver logging)

use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};

use log::{info, LevelFilter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simple_logger::SimpleLogger;

use rt_rust::rt_prompt::{NextAction, Prompter};
use rt_rust::{RouteError, Session};

fn main() -> Result<(), Box<dyn Error>> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let seed = match parse_seed_arg(env::args().skip(1))? {
        Some(seed) => seed,
        None => rand::thread_rng().gen(),
    };
    info!("let seed = {};", seed);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match run(&mut prompter, seed) {
        Ok(()) | Err(RouteError::InputClosed) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Console loop; the seed is echoed first so a session can be replayed
fn run<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, seed: u64) -> Result<(), RouteError> {
    prompter.say(&format!("Seed: {} (replay with --seed {})", seed, seed))?;

    let config = prompter.session_config()?;
    let mut session = Session::new(config, StdRng::seed_from_u64(seed))?;

    loop {
        prompter.show_graph(session.graph())?;

        let (start, end) = prompter.endpoints(session.graph().node_count())?;
        let result = session.route(start, end)?;
        prompter.show_result(start, end, &result)?;

        if prompter.next_action()? == NextAction::Quit {
            prompter.say("Exiting the program.")?;
            return Ok(());
        }

        if prompter.wants_new_graph()? {
            let config = prompter.session_config()?;
            session.regenerate(config)?;
        }
    }
}

/// `--seed <u64>` or `--seed 0x<hex>`
fn parse_seed_arg(mut args: impl Iterator<Item = String>) -> Result<Option<u64>, RouteError> {
    while let Some(arg) = args.next() {
        if arg != "--seed" {
            continue;
        }
        let value = args
            .next()
            .ok_or_else(|| RouteError::config("--seed needs a value"))?;
        let parsed = match value.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16),
            None => value.parse(),
        };
        return parsed
            .map(Some)
            .map_err(|e| RouteError::config(format!("invalid seed '{}': {}", value, e)));
    }
    Ok(None)
}
