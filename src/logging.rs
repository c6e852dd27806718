//! Logging initialization.
//!
//! Library code logs through the `log` facade; the binary installs
//! `env_logger`. `RUST_LOG` overrides the default filter.

use env_logger::Env;

/// Default filter when `RUST_LOG` is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "mapinfo=debug"
    } else {
        "warn"
    }
}

/// Install the global logger. Later calls are ignored.
pub fn init_logging(verbose: bool) {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
