//! Diagnostic logging to stderr.

use tracing::Level;

/// Install the global subscriber. `verbose` raises the level from WARN to DEBUG.
pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
