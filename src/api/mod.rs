//! Resource facades over the transport.
//!
//! # Data Flow
//! ```text
//! Panel / Users / Remotes / Instances
//!     → build Endpoint (fixed segments, ids as query params, optional body)
//!     → Transport::request
//!     → decoded serde_json::Value returned unchanged
//! ```
//!
//! # Design Decisions
//! - Facades borrow the transport; many facades share one session
//! - Payloads are opaque JSON, the panel owns their schema
//! - Batch operations are a single request; partial results pass through

pub mod instance;
pub mod panel;
pub mod remote;
pub mod types;
pub mod user;

pub use instance::{InstanceAction, Instances};
pub use panel::Panel;
pub use remote::Remotes;
pub use types::{DeleteInstances, NewRemote, Pagination, RemoteUpdate, Uuids};
pub use user::Users;
