//! In-memory member registry.
//!
//! `MemberRegistry` owns an insertion-ordered sequence of members and is the
//! only place members are created, mutated, or destroyed. Lookups by id are a
//! linear scan; the id is unique, so the first match is the only match.
//! Lookups by phone or email are also linear scans and return the first
//! member in insertion order.
//!
//! Every fallible operation either succeeds completely or leaves the registry
//! untouched.

mod seed;
mod shared;

pub use seed::default_members;
pub use shared::SharedRegistry;

use crate::error::{RegistryError, RegistryResult};
use crate::metrics::RegistryMetrics;
use crate::models::Member;
use tracing::{debug, info, warn};

/// Owned, ordered collection of members.
#[derive(Debug, Default)]
pub struct MemberRegistry {
    members: Vec<Member>,
    metrics: RegistryMetrics,
}

impl MemberRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with room for `capacity` members.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            members: Vec::with_capacity(capacity),
            metrics: RegistryMetrics::new(),
        }
    }

    /// Metrics handle sharing counters with this registry.
    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    /// Position of the member with this id, if registered.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.members.iter().position(|member| member.id == id)
    }

    /// Whether a member with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Number of registered members.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether no member is registered.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over registered members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    /// Insert the fixed set of sample members and return the resulting size.
    ///
    /// Uses the regular insert path, so seeding a registry that already holds
    /// one of the sample ids stops with `DuplicateKey` at that member. Samples
    /// inserted before the conflict stay registered.
    pub fn seed_defaults(&mut self) -> RegistryResult<usize> {
        for member in default_members() {
            self.insert(member)?;
        }
        info!(size = self.size(), "Seeded default members");
        Ok(self.size())
    }

    /// Register a new member.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` if the id is already registered.
    pub fn insert(&mut self, member: Member) -> RegistryResult<()> {
        if self.contains(&member.id) {
            self.metrics.record_insert(false);
            warn!(member_id = %member.id, "Rejected duplicate member");
            return Err(RegistryError::DuplicateKey(member.id));
        }

        debug!(member_id = %member.id, "Registered member");
        self.metrics.record_insert(true);
        self.members.push(member);
        Ok(())
    }

    /// Register a new member from its raw fields.
    ///
    /// Behaves exactly like [`MemberRegistry::insert`].
    pub fn insert_fields(
        &mut self,
        id: impl Into<String>,
        credential: impl Into<String>,
        display_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> RegistryResult<()> {
        self.insert(Member::new(id, credential, display_name, phone, email))
    }

    /// Get a copy of the member with this id.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the id is not registered.
    pub fn get(&self, id: &str) -> RegistryResult<Member> {
        let index = self.locate(id)?;
        Ok(self.members[index].clone())
    }

    /// Get a copy of the member whose id equals `candidate.id`.
    ///
    /// Only the id is compared; the candidate's other fields are ignored.
    pub fn get_matching(&self, candidate: &Member) -> RegistryResult<Member> {
        self.get(&candidate.id)
    }

    /// Overwrite the stored member that has the same id as `member`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the id is not registered.
    pub fn replace(&mut self, member: Member) -> RegistryResult<()> {
        let index = self.locate(&member.id)?;
        debug!(member_id = %member.id, "Replaced member");
        self.members[index] = member;
        Ok(())
    }

    /// Change a member's credential, given the current one.
    ///
    /// An unknown id and a wrong `old_credential` are both reported as
    /// `RegistryError::NotFound`. Use [`MemberRegistry::authenticate`] to
    /// tell the two apart.
    pub fn change_credential(
        &mut self,
        id: &str,
        old_credential: &str,
        new_credential: impl Into<String>,
    ) -> RegistryResult<()> {
        let index = self.locate(id)?;
        let member = &mut self.members[index];
        if !member.credential_matches(old_credential) {
            warn!(member_id = %id, "Credential change refused");
            return Err(RegistryError::NotFound(id.to_string()));
        }

        member.credential = new_credential.into();
        self.metrics.record_credential_change();
        debug!(member_id = %id, "Changed credential");
        Ok(())
    }

    /// Remove the member whose id equals `member.id` and return it.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the id is not registered.
    pub fn remove(&mut self, member: &Member) -> RegistryResult<Member> {
        self.remove_by_id(&member.id)
    }

    /// Remove the member with this id and return it.
    pub fn remove_by_id(&mut self, id: &str) -> RegistryResult<Member> {
        let index = self.locate(id)?;
        let removed = self.members.remove(index);
        self.metrics.record_removal();
        debug!(member_id = %id, remaining = self.members.len(), "Removed member");
        Ok(removed)
    }

    /// Verify a member's credential.
    ///
    /// # Errors
    ///
    /// - `RegistryError::NotFound` if the id is not registered
    /// - `RegistryError::InvalidCredentials` if the credential does not match
    pub fn authenticate(&self, id: &str, credential: &str) -> RegistryResult<()> {
        let Some(member) = self.members.iter().find(|member| member.id == id) else {
            self.metrics.record_authentication(false);
            warn!(member_id = %id, "Authentication failed: unknown member");
            return Err(RegistryError::NotFound(id.to_string()));
        };

        if !member.credential_matches(credential) {
            self.metrics.record_authentication(false);
            warn!(member_id = %id, "Authentication failed: credential mismatch");
            return Err(RegistryError::InvalidCredentials(id.to_string()));
        }

        self.metrics.record_authentication(true);
        debug!(member_id = %id, "Authenticated member");
        Ok(())
    }

    /// Id of the first member registered with this phone number.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotRecoverable` if no member has this phone.
    pub fn recover_id_by_phone(&self, phone: &str) -> RegistryResult<String> {
        self.recover_id("phone", phone, |member| member.phone == phone)
    }

    /// Id of the first member registered with this email address.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotRecoverable` if no member has this email.
    pub fn recover_id_by_email(&self, email: &str) -> RegistryResult<String> {
        self.recover_id("email", email, |member| member.email == email)
    }

    fn recover_id<F>(&self, field: &'static str, value: &str, matches: F) -> RegistryResult<String>
    where
        F: Fn(&Member) -> bool,
    {
        match self.members.iter().find(|member| matches(*member)) {
            Some(member) => {
                self.metrics.record_recovery(true);
                debug!(field, member_id = %member.id, "Recovered member id");
                Ok(member.id.clone())
            }
            None => {
                self.metrics.record_recovery(false);
                debug!(field, "No member matched recovery lookup");
                Err(RegistryError::NotRecoverable {
                    field,
                    value: value.to_string(),
                })
            }
        }
    }

    /// Position of `id`, recording the lookup, or `NotFound`.
    fn locate(&self, id: &str) -> RegistryResult<usize> {
        let position = self.position(id);
        self.metrics.record_lookup(position.is_some());
        position.ok_or_else(|| RegistryError::NotFound(id.to_string()))
    }
}
