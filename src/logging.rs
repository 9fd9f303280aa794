//! Tracing setup
//!
//! Events go to stderr so command output on stdout stays machine-readable.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber once
///
/// `RUST_LOG` wins when set; otherwise `default_directive` (for example
/// `"warn"` or `"budgetlens=debug"`) is used. An unparsable directive falls
/// back to `warn`.
pub fn init_tracing(default_directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_directive))
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed by an embedding application
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
