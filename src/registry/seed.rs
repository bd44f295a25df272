//! Sample members used to populate a registry with deterministic data.

use crate::models::Member;

/// The five sample members, `user01` through `user05`.
///
/// Each has credential `passwordNN`, phone `0101234N000` and an
/// `@work.com` email matching its id.
pub fn default_members() -> Vec<Member> {
    [
        ("Hong Gildong", 1),
        ("Kang Gamchan", 2),
        ("Yi Sunsin", 3),
        ("Kim Yusin", 4),
        ("Yu Gwansun", 5),
    ]
    .into_iter()
    .map(|(name, n)| {
        Member::new(
            format!("user{:02}", n),
            format!("password{:02}", n),
            name,
            format!("0101234{}000", n),
            format!("user{:02}@work.com", n),
        )
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_members_are_distinct() {
        let members = default_members();
        assert_eq!(members.len(), 5);

        let mut ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_default_member_fields() {
        let members = default_members();
        let first = &members[0];
        assert_eq!(first.id, "user01");
        assert_eq!(first.credential, "password01");
        assert_eq!(first.display_name, "Hong Gildong");
        assert_eq!(first.phone, "01012341000");
        assert_eq!(first.email, "user01@work.com");

        let last = &members[4];
        assert_eq!(last.id, "user05");
        assert_eq!(last.phone, "01012345000");
        assert_eq!(last.email, "user05@work.com");
    }
}
