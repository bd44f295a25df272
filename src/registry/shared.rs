//! Thread-safe handle over a [`MemberRegistry`].
//!
//! One mutex guards the whole registry. Each method takes the lock once, so a
//! lookup and the mutation that depends on it are never interleaved with
//! another caller. Use [`SharedRegistry::with`] for compound operations that
//! must see a consistent registry across several calls.

use super::MemberRegistry;
use crate::error::RegistryResult;
use crate::metrics::RegistryMetrics;
use crate::models::Member;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable, lock-guarded registry handle.
#[derive(Debug, Clone)]
pub struct SharedRegistry {
    inner: Arc<Mutex<MemberRegistry>>,
}

impl SharedRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: MemberRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// Metrics of the currently wrapped registry.
    ///
    /// The returned handle shares counters with that registry, so it keeps
    /// observing it after the lock is released.
    pub fn metrics(&self) -> RegistryMetrics {
        self.lock().metrics().clone()
    }

    /// Run `f` with exclusive access to the registry.
    pub fn with<R>(&self, f: impl FnOnce(&mut MemberRegistry) -> R) -> R {
        f(&mut self.lock())
    }

    // Registry mutations never leave a half-applied state behind, so a
    // poisoned lock still guards a consistent registry.
    fn lock(&self) -> MutexGuard<'_, MemberRegistry> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert the sample members and return the resulting size.
    pub fn seed_defaults(&self) -> RegistryResult<usize> {
        self.lock().seed_defaults()
    }

    /// Number of registered members.
    pub fn size(&self) -> usize {
        self.lock().size()
    }

    /// Whether no member is registered.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether a member with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains(id)
    }

    /// Register a new member.
    pub fn insert(&self, member: Member) -> RegistryResult<()> {
        self.lock().insert(member)
    }

    /// Register a new member from its raw fields.
    pub fn insert_fields(
        &self,
        id: impl Into<String>,
        credential: impl Into<String>,
        display_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> RegistryResult<()> {
        self.lock()
            .insert_fields(id, credential, display_name, phone, email)
    }

    /// Get a copy of the member with this id.
    pub fn get(&self, id: &str) -> RegistryResult<Member> {
        self.lock().get(id)
    }

    /// Get a copy of the member whose id equals `candidate.id`.
    pub fn get_matching(&self, candidate: &Member) -> RegistryResult<Member> {
        self.lock().get_matching(candidate)
    }

    /// Overwrite the stored member that has the same id as `member`.
    pub fn replace(&self, member: Member) -> RegistryResult<()> {
        self.lock().replace(member)
    }

    /// Change a member's credential, given the current one.
    pub fn change_credential(
        &self,
        id: &str,
        old_credential: &str,
        new_credential: impl Into<String>,
    ) -> RegistryResult<()> {
        self.lock()
            .change_credential(id, old_credential, new_credential)
    }

    /// Remove the member whose id equals `member.id` and return it.
    pub fn remove(&self, member: &Member) -> RegistryResult<Member> {
        self.lock().remove(member)
    }

    /// Remove the member with this id and return it.
    pub fn remove_by_id(&self, id: &str) -> RegistryResult<Member> {
        self.lock().remove_by_id(id)
    }

    /// Verify a member's credential.
    pub fn authenticate(&self, id: &str, credential: &str) -> RegistryResult<()> {
        self.lock().authenticate(id, credential)
    }

    /// Id of the first member registered with this phone number.
    pub fn recover_id_by_phone(&self, phone: &str) -> RegistryResult<String> {
        self.lock().recover_id_by_phone(phone)
    }

    /// Id of the first member registered with this email address.
    pub fn recover_id_by_email(&self, email: &str) -> RegistryResult<String> {
        self.lock().recover_id_by_email(email)
    }

    /// Copy of every member in insertion order.
    pub fn snapshot(&self) -> Vec<Member> {
        self.lock().iter().cloned().collect()
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new(MemberRegistry::new())
    }
}

impl From<MemberRegistry> for SharedRegistry {
    fn from(registry: MemberRegistry) -> Self {
        Self::new(registry)
    }
}
