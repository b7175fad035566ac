//! Diagnostic logging to stderr via `tracing`.
//!
//! Lint findings go to stdout through the report writers; this is only
//! for the tool's own progress and warnings.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. `RUST_LOG` directives are honoured on
/// top of `level`. Safe to call more than once; later calls are no-ops.
pub fn init_logging(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
