//! Tracing subscriber setup shared by the binaries.
//!
//! Logs go to stderr so stdout stays reserved for query results. `--debug`
//! switches to human-readable TRACE output; otherwise INFO and above are
//! written as JSON lines.

use tracing::Level;

pub fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_max_level(Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }
}
