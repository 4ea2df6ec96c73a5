//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) and/or MCSM_* environment variables
//!     → loader.rs (parse & deserialize, env overlay)
//!     → validation.rs (semantic checks)
//!     → ClientConfig (validated)
//!     → Transport::from_config
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The library never reads configuration on its own; callers opt in

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{default_user_agent, ClientConfig, DEFAULT_ORIGIN};
pub use validation::{validate_config, ValidationError};
