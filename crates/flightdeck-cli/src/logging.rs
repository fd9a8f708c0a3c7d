use tracing_subscriber::EnvFilter;

/// Initialize the fmt subscriber on stderr. `RUST_LOG` overrides the
/// default `info` filter.
pub fn init() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| err.to_string())
}
