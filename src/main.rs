//! Member Registry - Main entry point
//!
//! Builds a registry from the environment configuration, optionally seeds the
//! sample members, and reports what it holds.

use anyhow::Result;
use member_registry::{Config, MemberRegistry};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());

    // Initialize logging (stderr only)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let mut registry = MemberRegistry::with_capacity(config.initial_capacity);

    if config.seed_defaults {
        let size = registry.seed_defaults()?;
        info!("Seeded {} sample members", size);
    }

    for member in registry.iter() {
        info!(member_id = %member.id, display_name = %member.display_name, "Registered member");
    }

    let summary = registry.metrics().summary();
    info!(
        size = registry.size(),
        inserts = summary.inserts_total,
        rejected = summary.duplicates_rejected_total,
        "Member registry ready"
    );

    Ok(())
}
