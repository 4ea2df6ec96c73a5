//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` overrides the configured level
//! - The library only emits events; binaries install the subscriber

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a plain level such as `info`.
pub fn default_directive(level: &str) -> String {
    format!("mcsm_client={level},mcsm_cli={level}")
}

/// Install a global fmt subscriber. Safe to call more than once.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
