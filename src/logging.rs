//! Logger set-up for the command-line host and tests.

use env_logger::{Builder, Env};
use log::{debug, LevelFilter};

/// Initialises the global logger.
///
/// When `verbose` is `true`, debug messages are printed. Otherwise only info
/// and above are shown. `RUST_LOG` overrides either default, so per-tick
/// traces can be enabled with `RUST_LOG=steering=trace`.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.format_timestamp_millis();

    // Only fails if a logger is already installed, which tests do repeatedly.
    if builder.try_init().is_err() {
        debug!("logger already initialised");
    }
}
