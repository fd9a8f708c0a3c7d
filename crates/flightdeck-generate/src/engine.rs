use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use flightdeck_core::DatasetConfig;

use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::write_table;
use crate::stages::{flights, gates, passengers, routes};

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub run_dir: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating the demo dataset from a configuration.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Run all four stages in order and write the CSV tables plus the
    /// run report. Straight-line batch: the first error aborts the run.
    pub fn run(&self, config: &DatasetConfig) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        config.validate()?;

        let run_id = uuid::Uuid::new_v4().to_string();
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%SZ").to_string();
        let run_dir = self
            .options
            .out_dir
            .join(format!("{timestamp}__run_{run_id}"));
        std::fs::create_dir_all(&run_dir)?;

        let seed = self.options.seed;
        let mut report = GenerationReport::new(run_id.clone(), seed);
        let mut bytes_written = 0_u64;

        info!(
            run_id = %run_id,
            seed,
            flights = config.flights,
            gates = config.gates,
            passengers = config.passengers,
            routes = config.routes,
            "generation started"
        );

        let stage_start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "flights"));
        let flight_batch = flights::generate_flights(config, &mut rng);
        info!(
            rows = flight_batch.len(),
            duration_ms = stage_start.elapsed().as_millis() as u64,
            "flights generated"
        );

        // The flight batch stays immutable until the assignment list
        // exists; flights.csv is written exactly once, after the merge.
        let stage_start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "gates"));
        let codes = gates::build_gate_codes(config, &mut rng);
        let plan = gates::allocate_gates(&codes, &flight_batch, config, &mut rng);
        let flight_batch = gates::apply_assignments(flight_batch, &plan.assignments);
        report.gates_occupied = plan.assignments.len() as u64;
        info!(
            gates = plan.gates.len(),
            occupied = report.gates_occupied,
            duration_ms = stage_start.elapsed().as_millis() as u64,
            "gates allocated"
        );

        bytes_written += write_table(&run_dir.join("flights.csv"), &flight_batch)?;
        report.record_table("flights", config.flights.into(), flight_batch.len() as u64);
        bytes_written += write_table(&run_dir.join("gates.csv"), &plan.gates)?;
        report.record_table("gates", config.gates.into(), plan.gates.len() as u64);

        let stage_start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "passengers"));
        let passenger_batch = passengers::generate_passengers(config, &flight_batch, &mut rng)?;
        bytes_written += write_table(&run_dir.join("passengers.csv"), &passenger_batch)?;
        report.record_table(
            "passengers",
            config.passengers.into(),
            passenger_batch.len() as u64,
        );
        info!(
            rows = passenger_batch.len(),
            duration_ms = stage_start.elapsed().as_millis() as u64,
            "passengers generated"
        );

        let stage_start = Instant::now();
        let mut rng = ChaCha8Rng::seed_from_u64(hash_seed(seed, "routes"));
        let route_batch = routes::generate_routes(config, &flight_batch, &mut rng)?;
        report.duplicates_dropped = route_batch.duplicates_dropped;
        bytes_written += write_table(&run_dir.join("routes.csv"), &route_batch.routes)?;
        report.record_table("routes", config.routes.into(), route_batch.routes.len() as u64);
        info!(
            rows = route_batch.routes.len(),
            dropped = route_batch.duplicates_dropped,
            duration_ms = stage_start.elapsed().as_millis() as u64,
            "routes generated"
        );

        report.bytes_written = bytes_written;
        report.duration_ms = start.elapsed().as_millis() as u64;
        std::fs::write(
            run_dir.join("generation_report.json"),
            serde_json::to_vec_pretty(&report)?,
        )?;

        info!(
            run_id = %run_id,
            tables = report.tables.len(),
            duration_ms = report.duration_ms,
            bytes_written = report.bytes_written,
            "generation completed"
        );

        Ok(GenerationResult { run_dir, report })
    }
}

fn hash_seed(seed: u64, key: &str) -> u64 {
    let mut hash = seed ^ 0xcbf29ce484222325;
    for byte in key.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash
}
