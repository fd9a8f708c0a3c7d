use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Directory where run directories are created.
    pub out_dir: PathBuf,
    /// Seed for the run. Stage seeds are derived from it, so one seed
    /// fixes every table.
    pub seed: u64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("out"),
            seed: 0,
        }
    }
}

/// Summary of one generated table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub rows_requested: u64,
    pub rows_generated: u64,
}

/// Report for a generation run, written alongside the CSV tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    pub run_id: String,
    pub seed: u64,
    pub tables: Vec<TableReport>,
    /// Gates marked Occupied in this run.
    pub gates_occupied: u64,
    /// Route draws dropped because their city pair was already taken.
    pub duplicates_dropped: u64,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    pub fn new(run_id: String, seed: u64) -> Self {
        Self {
            run_id,
            seed,
            tables: Vec::new(),
            gates_occupied: 0,
            duplicates_dropped: 0,
            bytes_written: 0,
            duration_ms: 0,
        }
    }

    pub fn record_table(&mut self, table: &str, rows_requested: u64, rows_generated: u64) {
        self.tables.push(TableReport {
            table: table.to_string(),
            rows_requested,
            rows_generated,
        });
    }
}
