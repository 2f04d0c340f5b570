//! Command-line runner for steering scenarios.

use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;
use log::info;
use steering::{init_logging, ScenarioConfig};

/// Runs a steering scenario headlessly and reports where every agent ends up
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario file (JSON)
    #[arg(short, long)]
    scenario: PathBuf,

    /// Number of ticks to simulate
    #[arg(short = 'n', long, default_value_t = 600)]
    steps: u64,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    ensure!(
        args.dt.is_finite() && args.dt >= 0.0,
        "tick duration must be finite and non-negative, got {}",
        args.dt
    );

    let scenario = ScenarioConfig::load(&args.scenario)
        .with_context(|| format!("loading {}", args.scenario.display()))?;
    let mut simulation = scenario.build().context("building scenario")?;
    info!(
        "running {} agents for {} ticks of {}s",
        simulation.agents().len(),
        args.steps,
        args.dt
    );

    simulation.run(args.steps, args.dt);

    for agent in simulation.agents() {
        let state = agent.kinematic;
        info!(
            "{}: position={} velocity={} orientation={:.3}",
            agent.name, state.position, state.velocity, state.orientation
        );
    }
    Ok(())
}
