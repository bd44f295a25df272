//! Configuration management for the member registry binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the member registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed the sample members at startup (default: true)
    pub seed_defaults: bool,

    /// Preallocated member capacity (default: 16)
    pub initial_capacity: usize,

    /// Log level used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `MEMBER_REGISTRY_SEED_DEFAULTS`: Seed sample members (default: true)
    /// - `MEMBER_REGISTRY_INITIAL_CAPACITY`: Preallocated capacity (default: 16)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let seed_defaults = Self::parse_env_bool("MEMBER_REGISTRY_SEED_DEFAULTS", true)?;
        let initial_capacity = Self::parse_env_usize("MEMBER_REGISTRY_INITIAL_CAPACITY", 16)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            seed_defaults,
            initial_capacity,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative integer, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean with a default value.
    ///
    /// Accepts `true`/`false`, `1`/`0`, `yes`/`no` and `on`/`off`, ignoring case.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_defaults: true,
            initial_capacity: 16,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 3] = [
        "MEMBER_REGISTRY_SEED_DEFAULTS",
        "MEMBER_REGISTRY_INITIAL_CAPACITY",
        "LOG_LEVEL",
    ];

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            for var in VARS {
                env::remove_var(var);
            }
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.seed_defaults);
        assert_eq!(config.initial_capacity, 16);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("MEMBER_REGISTRY_SEED_DEFAULTS", "no");
        guard.set("MEMBER_REGISTRY_INITIAL_CAPACITY", "128");
        guard.set("LOG_LEVEL", "debug");

        let config = Config::from_env().unwrap();
        assert!(!config.seed_defaults);
        assert_eq!(config.initial_capacity, 128);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_invalid_capacity() {
        let mut guard = EnvGuard::new();
        guard.set("MEMBER_REGISTRY_INITIAL_CAPACITY", "-4");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "MEMBER_REGISTRY_INITIAL_CAPACITY");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_invalid_seed_flag() {
        let mut guard = EnvGuard::new();
        guard.set("MEMBER_REGISTRY_SEED_DEFAULTS", "sometimes");

        let result = Config::from_env();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "MEMBER_REGISTRY_SEED_DEFAULTS"
        ));
    }

    #[test]
    #[serial]
    fn test_config_empty_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "  ");

        let result = Config::from_env();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_parse_env_bool() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_BOOL_UPPER", "TRUE");
        guard.set("TEST_BOOL_ZERO", "0");

        assert!(Config::parse_env_bool("TEST_BOOL_UPPER", false).unwrap());
        assert!(!Config::parse_env_bool("TEST_BOOL_ZERO", true).unwrap());
        assert!(Config::parse_env_bool("NONEXISTENT_BOOL", true).unwrap());
    }

    #[test]
    #[serial]
    fn test_parse_env_usize() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE", "42");

        assert_eq!(Config::parse_env_usize("TEST_USIZE", 10).unwrap(), 42);
        assert_eq!(Config::parse_env_usize("NONEXISTENT_USIZE", 10).unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_usize_accepts_zero_and_names_rule() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_USIZE_ZERO", "0");
        guard.set("TEST_USIZE_BAD", "-1");

        assert_eq!(Config::parse_env_usize("TEST_USIZE_ZERO", 10).unwrap(), 0);
        let err = Config::parse_env_usize("TEST_USIZE_BAD", 10).unwrap_err();
        assert!(err.to_string().contains("non-negative integer"));
    }
}
