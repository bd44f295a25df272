//! Error types for the member registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors returned by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A member with this id is already registered
    #[error("Member already exists: {0}")]
    DuplicateKey(String),

    /// No member with this id is registered.
    ///
    /// `change_credential` also reports a mismatched old credential this way.
    #[error("Member not found: {0}")]
    NotFound(String),

    /// The member exists but the supplied credential does not match
    #[error("Invalid credentials for member: {0}")]
    InvalidCredentials(String),

    /// No member carries the given secondary attribute
    #[error("No member registered with {field} {value}")]
    NotRecoverable { field: &'static str, value: String },
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
