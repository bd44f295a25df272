//! Operation counters for the member registry.
//!
//! Counters are shared between clones, so a handle taken from a registry keeps
//! observing it after the registry moves behind a lock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for registry operations.
#[derive(Debug, Clone)]
pub struct RegistryMetrics {
    /// Members successfully inserted
    inserts_total: Arc<AtomicU64>,

    /// Inserts rejected because the id already existed
    duplicates_rejected_total: Arc<AtomicU64>,

    /// Lookups by id (get, replace, remove, change_credential)
    lookups_total: Arc<AtomicU64>,

    /// Lookups by id that found nothing
    lookup_misses_total: Arc<AtomicU64>,

    /// Members removed
    removals_total: Arc<AtomicU64>,

    /// Successful authentications
    auth_success_total: Arc<AtomicU64>,

    /// Failed authentications (unknown id or wrong credential)
    auth_failures_total: Arc<AtomicU64>,

    /// Credentials changed
    credential_changes_total: Arc<AtomicU64>,

    /// Recovery lookups by phone or email
    recoveries_total: Arc<AtomicU64>,

    /// Recovery lookups that matched no member
    recovery_misses_total: Arc<AtomicU64>,
}

impl Default for RegistryMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            inserts_total: Arc::new(AtomicU64::new(0)),
            duplicates_rejected_total: Arc::new(AtomicU64::new(0)),
            lookups_total: Arc::new(AtomicU64::new(0)),
            lookup_misses_total: Arc::new(AtomicU64::new(0)),
            removals_total: Arc::new(AtomicU64::new(0)),
            auth_success_total: Arc::new(AtomicU64::new(0)),
            auth_failures_total: Arc::new(AtomicU64::new(0)),
            credential_changes_total: Arc::new(AtomicU64::new(0)),
            recoveries_total: Arc::new(AtomicU64::new(0)),
            recovery_misses_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an insert attempt.
    pub fn record_insert(&self, accepted: bool) {
        if accepted {
            self.inserts_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.duplicates_rejected_total
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a lookup by id.
    pub fn record_lookup(&self, found: bool) {
        self.lookups_total.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.lookup_misses_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a removal.
    pub fn record_removal(&self) {
        self.removals_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an authentication attempt.
    pub fn record_authentication(&self, success: bool) {
        if success {
            self.auth_success_total.fetch_add(1, Ordering::Relaxed);
        } else {
            self.auth_failures_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a credential change.
    pub fn record_credential_change(&self) {
        self.credential_changes_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a recovery lookup.
    pub fn record_recovery(&self, found: bool) {
        self.recoveries_total.fetch_add(1, Ordering::Relaxed);
        if !found {
            self.recovery_misses_total.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get total inserts.
    pub fn inserts_total(&self) -> u64 {
        self.inserts_total.load(Ordering::Relaxed)
    }

    /// Get total rejected duplicates.
    pub fn duplicates_rejected_total(&self) -> u64 {
        self.duplicates_rejected_total.load(Ordering::Relaxed)
    }

    /// Get total lookups.
    pub fn lookups_total(&self) -> u64 {
        self.lookups_total.load(Ordering::Relaxed)
    }

    /// Get total lookup misses.
    pub fn lookup_misses_total(&self) -> u64 {
        self.lookup_misses_total.load(Ordering::Relaxed)
    }

    /// Get total removals.
    pub fn removals_total(&self) -> u64 {
        self.removals_total.load(Ordering::Relaxed)
    }

    /// Get total successful authentications.
    pub fn auth_success_total(&self) -> u64 {
        self.auth_success_total.load(Ordering::Relaxed)
    }

    /// Get total failed authentications.
    pub fn auth_failures_total(&self) -> u64 {
        self.auth_failures_total.load(Ordering::Relaxed)
    }

    /// Get total credential changes.
    pub fn credential_changes_total(&self) -> u64 {
        self.credential_changes_total.load(Ordering::Relaxed)
    }

    /// Get total recovery lookups.
    pub fn recoveries_total(&self) -> u64 {
        self.recoveries_total.load(Ordering::Relaxed)
    }

    /// Get total recovery misses.
    pub fn recovery_misses_total(&self) -> u64 {
        self.recovery_misses_total.load(Ordering::Relaxed)
    }

    /// Get the lookup hit rate in [0, 1]. Zero lookups report 0.0.
    pub fn lookup_hit_rate(&self) -> f64 {
        let total = self.lookups_total();
        if total == 0 {
            0.0
        } else {
            (total - self.lookup_misses_total()) as f64 / total as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.inserts_total.store(0, Ordering::Relaxed);
        self.duplicates_rejected_total.store(0, Ordering::Relaxed);
        self.lookups_total.store(0, Ordering::Relaxed);
        self.lookup_misses_total.store(0, Ordering::Relaxed);
        self.removals_total.store(0, Ordering::Relaxed);
        self.auth_success_total.store(0, Ordering::Relaxed);
        self.auth_failures_total.store(0, Ordering::Relaxed);
        self.credential_changes_total.store(0, Ordering::Relaxed);
        self.recoveries_total.store(0, Ordering::Relaxed);
        self.recovery_misses_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            inserts_total: self.inserts_total(),
            duplicates_rejected_total: self.duplicates_rejected_total(),
            lookups_total: self.lookups_total(),
            lookup_misses_total: self.lookup_misses_total(),
            removals_total: self.removals_total(),
            auth_success_total: self.auth_success_total(),
            auth_failures_total: self.auth_failures_total(),
            credential_changes_total: self.credential_changes_total(),
            recoveries_total: self.recoveries_total(),
            recovery_misses_total: self.recovery_misses_total(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSummary {
    pub inserts_total: u64,
    pub duplicates_rejected_total: u64,
    pub lookups_total: u64,
    pub lookup_misses_total: u64,
    pub removals_total: u64,
    pub auth_success_total: u64,
    pub auth_failures_total: u64,
    pub credential_changes_total: u64,
    pub recoveries_total: u64,
    pub recovery_misses_total: u64,
}
