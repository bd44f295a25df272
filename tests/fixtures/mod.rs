//! Test fixtures and sample data for registry integration tests.

use member_registry::{Member, MemberRegistry};

/// Create a sample member whose credential, phone and email derive from `id`.
#[allow(dead_code)]
pub fn sample_member(id: &str) -> Member {
    Member::new(
        id,
        format!("{}-secret", id),
        format!("Member {}", id),
        format!("010-0000-{}", id),
        format!("{}@example.com", id),
    )
}

/// Create a registry holding the five default members.
#[allow(dead_code)]
pub fn seeded_registry() -> MemberRegistry {
    let mut registry = MemberRegistry::new();
    registry
        .seed_defaults()
        .expect("seeding an empty registry succeeds");
    registry
}

/// Ids of every member in insertion order.
#[allow(dead_code)]
pub fn ids(registry: &MemberRegistry) -> Vec<String> {
    registry.iter().map(|m| m.id.clone()).collect()
}
