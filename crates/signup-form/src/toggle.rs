//! Multi-select membership toggling

/// Returns the collection with `member` included or excluded
///
/// Including a member that is already present changes nothing; including a
/// new one appends it. Excluding removes every occurrence and keeps the
/// remaining members in their original order. The caller must store the
/// returned collection in place of the old one.
#[must_use = "the toggled collection replaces the current one"]
pub fn toggle_member(collection: &[String], member: &str, included: bool) -> Vec<String> {
    if included {
        let mut updated = collection.to_vec();
        if !collection.iter().any(|m| m == member) {
            updated.push(member.to_string());
        }
        updated
    } else {
        collection
            .iter()
            .filter(|m| m.as_str() != member)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exclude_removes_only_that_member() {
        let interests = strings(&["coding", "sports", "reading"]);
        assert_eq!(
            toggle_member(&interests, "sports", false),
            strings(&["coding", "reading"])
        );
    }

    #[test]
    fn test_round_trip_restores_membership() {
        let interests = strings(&["coding", "sports", "reading"]);
        let without = toggle_member(&interests, "sports", false);
        let with = toggle_member(&without, "sports", true);

        assert!(with.contains(&"sports".to_string()));
        assert_eq!(with.len(), interests.len());
    }

    #[test]
    fn test_include_is_idempotent() {
        let interests = strings(&["coding"]);
        assert_eq!(toggle_member(&interests, "coding", true), interests);
    }

    #[test]
    fn test_include_appends_new_member() {
        assert_eq!(
            toggle_member(&strings(&["coding"]), "reading", true),
            strings(&["coding", "reading"])
        );
    }

    #[test]
    fn test_exclude_absent_member_is_a_no_op() {
        let interests = strings(&["coding", "reading"]);
        assert_eq!(toggle_member(&interests, "sports", false), interests);
    }

    #[test]
    fn test_exclude_removes_duplicates() {
        let interests = strings(&["sports", "coding", "sports"]);
        assert_eq!(toggle_member(&interests, "sports", false), strings(&["coding"]));
    }
}
