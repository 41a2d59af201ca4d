//! Debug logging setup.
//!
//! All diagnostics go to stderr so the Nagios status line on stdout stays
//! machine-readable.

use tracing::Level;

/// Initialize the tracing subscriber; `--debug` selects DEBUG level
pub fn init(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
