//! Tracing setup.
//!
//! Priority: `RUST_LOG` > `-t` (full tracing) > default (errors only).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn level(trace: bool) -> &'static str {
    if trace {
        "trace"
    } else {
        "error"
    }
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(trace: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level(trace))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
