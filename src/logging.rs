use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `debug`.
pub const LOG_ENV: &str = "MCOLOR_LOG";

/// Install the stderr subscriber. `MCOLOR_LOG` takes precedence over the
/// `--verbose` flag.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    // A subscriber may already be installed (tests); keep that one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
