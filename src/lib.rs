//! Member Registry - an in-memory registry of member accounts.
//!
//! The registry owns every member record and enforces a unique id per member.
//! It supports registration, lookup, whole-record replacement, credential
//! changes, removal, login checks, and recovering an id from a phone number
//! or email address.
//!
//! # Architecture
//!
//! - **models**: The `Member` record
//! - **registry**: `MemberRegistry` and the lock-guarded `SharedRegistry`
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Operation counters
//!
//! # Example
//!
//! ```
//! use member_registry::{MemberRegistry, RegistryError};
//!
//! let mut registry = MemberRegistry::new();
//! registry.seed_defaults().unwrap();
//!
//! assert!(registry.authenticate("user01", "password01").is_ok());
//! assert_eq!(
//!     registry.authenticate("user01", "wrong"),
//!     Err(RegistryError::InvalidCredentials("user01".to_string()))
//! );
//! assert_eq!(registry.recover_id_by_email("user02@work.com").unwrap(), "user02");
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod registry;

pub use config::Config;
pub use error::{ConfigError, RegistryError, RegistryResult};
pub use metrics::{MetricsSummary, RegistryMetrics};
pub use models::Member;
pub use registry::{default_members, MemberRegistry, SharedRegistry};
