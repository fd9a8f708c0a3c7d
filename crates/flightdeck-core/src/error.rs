use thiserror::Error;

/// Core error type shared across Flightdeck crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The run configuration violates internal invariants.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias for results returned by Flightdeck crates.
pub type Result<T> = std::result::Result<T, Error>;
