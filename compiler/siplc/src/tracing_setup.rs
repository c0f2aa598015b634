//! Tracing subscriber setup for the `sipl` binary.
//!
//! Logging is off unless `SIPL_LOG` is set. Its value takes the usual
//! `EnvFilter` directives, e.g. `SIPL_LOG=sipl_eval=trace` or
//! `SIPL_LOG=debug`. Output is an indented span tree on stderr so that
//! program output on stdout stays clean.

use std::sync::Once;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "SIPL_LOG";

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Unset or unparsable: stay silent.
        let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
            return;
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .try_init();
    });
}
