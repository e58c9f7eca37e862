//! Diagnostic tracing, written to stderr.
//!
//! Filtered by `RUST_LOG`; defaults to `warn` so a successful run prints nothing.
//!
//! ```bash
//! RUST_LOG=eradicate_tabs=debug eradicate-tabs
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Call once, from `main`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
