//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Transport::request
//!     → tracing spans/events (method, path, status; never the api key)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Binaries:
//!     → logging.rs installs the subscriber
//! ```

pub mod logging;
pub mod metrics;
