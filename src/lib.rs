//! Async client for the MCSManager panel HTTP API.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller
//!     │
//!     ▼
//!   ┌──────────────────────────────────────────────┐
//!   │ api: Panel │ Users │ Remotes │ Instances     │  borrow &Transport
//!   └──────────────────────┬───────────────────────┘
//!                          │ Endpoint
//!                          ▼
//!   ┌──────────────────────────────────────────────┐
//!   │ transport: apikey injection, HTTP exchange,  │
//!   │ status classification, body negotiation      │
//!   └──────────────────────┬───────────────────────┘
//!                          ▼
//!                  <origin>/api/...
//! ```
//!
//! ```no_run
//! use mcsm_client::Transport;
//!
//! # async fn run() -> mcsm_client::Result<()> {
//! let overview = Transport::scoped("http://localhost:23333", "apikey", |api| async move {
//!     api.panel().overview().await
//! })
//! .await?;
//! println!("{overview}");
//! # Ok(())
//! # }
//! ```

// Core subsystems
pub mod api;
pub mod transport;

// Cross-cutting concerns
pub mod config;
pub mod error;
pub mod observability;

pub use api::{
    DeleteInstances, InstanceAction, Instances, NewRemote, Pagination, Panel, RemoteUpdate,
    Remotes, Users, Uuids,
};
pub use config::ClientConfig;
pub use error::{McsmError, Result};
pub use transport::{ContentType, Endpoint, Transport};
