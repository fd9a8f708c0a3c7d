//! Generation engine for the Flightdeck demo dataset.
//!
//! This crate turns a [`flightdeck_core::DatasetConfig`] into four CSV
//! tables (flights, gates, passengers, routes) plus a JSON run report,
//! written into a per-run output directory.

pub mod engine;
pub mod errors;
pub mod model;
pub mod output;
pub mod stages;

pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport, TableReport};
