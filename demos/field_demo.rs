// Demonstration: drop a drone team into a scattered asteroid field and print
// the flight report once the field is exhausted.
//
// Build/run from this repo root:
//   RUST_LOG=info cargo run --example field_demo -- --drones 5 --asteroids 20 --seed 42

use std::env;

use astrominer::{HarvestConfig, Sandbox};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    let defaults = HarvestConfig::default();
    let config = HarvestConfig {
        team_size: arg_value(&args, "--drones")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.team_size),
        asteroid_count: arg_value(&args, "--asteroids")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.asteroid_count),
        seed: arg_value(&args, "--seed")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed),
        ..defaults
    };

    let mut sandbox = Sandbox::new(config);
    let summary = match sandbox.run() {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Sandbox run failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", summary);
    match sandbox.reports().last() {
        Some(report) => print!("{}", report),
        None => println!("No flight report was published."),
    }
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}
