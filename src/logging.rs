//! Logging setup for the kiln binary
//!
//! Logs go to stderr so that classpath output on stdout stays pipeable.
//! The level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=kiln=debug kiln resolve` (every entry as it resolves)
//! - `RUST_LOG=kiln=info kiln provision --into build/lib` (summaries)
//!
//! Without `RUST_LOG` only warnings are shown, or debug output with `--verbose`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("kiln=debug")
    } else {
        EnvFilter::new("kiln=warn")
    }
}

/// Initialize logging; later calls are ignored
pub fn init(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
