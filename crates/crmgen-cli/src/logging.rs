//! Log subscriber setup

use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Level for the given verbosity, falling back to the configured level
///
/// An unrecognized configured level falls back to `info`, so warnings are never filtered out.
fn level_for(verbose: u8, configured: &str) -> LevelFilter {
    match verbose {
        0 => configured.parse().unwrap_or(LevelFilter::INFO),
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initialize logging to stderr
///
/// `RUST_LOG` takes precedence over `-v` flags and the configured level.
pub fn init_logging(verbose: u8, configured: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::default().add_directive(level_for(verbose, configured).into())
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Ignore error if a subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}
