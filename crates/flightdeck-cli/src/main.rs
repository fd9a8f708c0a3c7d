mod logging;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use flightdeck_core::DatasetConfig;
use flightdeck_generate::{GenerateOptions, GenerationEngine, GenerationError};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "flightdeck", version, about = "Flightdeck demo dataset generator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the flight, gate, passenger, and route tables.
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Number of flights to generate.
    #[arg(long, default_value_t = 200)]
    flights: u32,
    /// Number of passenger bookings to generate.
    #[arg(long, default_value_t = 1000)]
    passengers: u32,
    /// Size of the gate pool.
    #[arg(long, default_value_t = 50)]
    gates: u32,
    /// Number of route draws to attempt; duplicate city pairs are dropped.
    #[arg(long, default_value_t = 200)]
    routes: u32,
    /// Maximum fraction of gates marked Occupied.
    #[arg(long, default_value_t = 0.7)]
    gate_occupancy: f64,
    /// Output directory for runs.
    #[arg(long, default_value = "out")]
    out_dir: PathBuf,
    /// Seed for reproducible runs; drawn at random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), CliError> {
    logging::init().map_err(CliError::Logging)?;
    let cli = Cli::parse();

    match cli.command {
        Command::Generate(args) => run_generate(args),
    }
}

fn run_generate(args: GenerateArgs) -> Result<(), CliError> {
    let config = DatasetConfig {
        flights: args.flights,
        passengers: args.passengers,
        gates: args.gates,
        routes: args.routes,
        gate_occupancy: args.gate_occupancy,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    if args.seed.is_none() {
        info!(seed, "no seed given, drew one for this run");
    }

    let engine = GenerationEngine::new(GenerateOptions {
        out_dir: args.out_dir,
        seed,
    });
    let result = engine.run(&config)?;
    info!(run_dir = %result.run_dir.display(), "dataset written");
    Ok(())
}
