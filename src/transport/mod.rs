//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! facade operation
//!     → endpoint.rs (method, segments, query, body, expected type)
//!     → client.rs (apikey injection, HTTP exchange, status check)
//!     → negotiate.rs (content type check, body decode)
//!     → serde_json::Value back to the caller, unmodified
//! ```
//!
//! # Design Decisions
//! - One request primitive; every facade call goes through it
//! - Identifiers travel as query parameters, never as path components
//! - No retries, no caching, no timeouts; callers wrap requests if needed
//! - Cancelling a request leaves the session usable

pub mod client;
pub mod endpoint;
pub mod negotiate;

pub use client::Transport;
pub use endpoint::{Body, ContentType, Endpoint};
