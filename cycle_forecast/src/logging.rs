//! Tracing initialization for the binary

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `CYCLE_OWL_LOG`
///
/// Falls back to `cycle_forecast=info` if `CYCLE_OWL_LOG` is unset or invalid.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CYCLE_OWL_LOG")
            .unwrap_or_else(|_| EnvFilter::new("cycle_forecast=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    });
}
