//! Member model representing one registered account.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered member account.
///
/// The credential is an opaque string compared by exact equality. It is
/// redacted from `Debug` output so members can be logged safely.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier, the registry's primary key
    pub id: String,

    /// Secret used for login verification
    pub credential: String,

    /// Informational display name
    pub display_name: String,

    /// Phone number used for id recovery
    pub phone: String,

    /// Email address used for id recovery
    pub email: String,
}

impl Member {
    /// Create a new member from its five fields.
    pub fn new(
        id: impl Into<String>,
        credential: impl Into<String>,
        display_name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            credential: credential.into(),
            display_name: display_name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Whether `credential` matches the stored one exactly.
    pub fn credential_matches(&self, credential: &str) -> bool {
        self.credential == credential
    }
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("id", &self.id)
            .field("credential", &"[REDACTED]")
            .field("display_name", &self.display_name)
            .field("phone", &self.phone)
            .field("email", &self.email)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Member {
        Member::new(
            "user01",
            "password01",
            "Hong Gildong",
            "01012341000",
            "user01@work.com",
        )
    }

    #[test]
    fn test_member_new() {
        let member = sample();
        assert_eq!(member.id, "user01");
        assert_eq!(member.credential, "password01");
        assert_eq!(member.display_name, "Hong Gildong");
        assert_eq!(member.phone, "01012341000");
        assert_eq!(member.email, "user01@work.com");
    }

    #[test]
    fn test_credential_matches_is_exact() {
        let member = sample();
        assert!(member.credential_matches("password01"));
        assert!(!member.credential_matches("Password01"));
        assert!(!member.credential_matches("password01 "));
        assert!(!member.credential_matches(""));
    }

    #[test]
    fn test_debug_redacts_credential() {
        let debug = format!("{:?}", sample());
        assert!(!debug.contains("password01"));
        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("user01"));
    }

    #[test]
    fn test_member_serialization_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["id"], "user01");
        assert_eq!(json["displayName"], "Hong Gildong");
        assert_eq!(json["phone"], "01012341000");
    }

    #[test]
    fn test_member_deserialization_defaults_missing_fields() {
        let member: Member = serde_json::from_str(r#"{"id":"user09"}"#).unwrap();
        assert_eq!(member.id, "user09");
        assert!(member.credential.is_empty());
        assert!(member.email.is_empty());
    }
}
