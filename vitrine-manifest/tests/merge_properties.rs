//! Property-based tests for manifest merge.
//!
//! Merge is a splice, not a patch; these pin the ordering guarantees the
//! rest of the system leans on:
//! - merging nothing changes nothing
//! - base users come first, overlay users after, each in original order
//! - collisions are kept, and the first occurrence of a base id never moves

use proptest::prelude::*;
use vitrine_manifest::{Manifest, User};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn id_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9]{0,7}").unwrap()
}

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{0,11}").unwrap()
}

fn user_strategy() -> impl Strategy<Value = User> {
    (id_strategy(), name_strategy()).prop_map(|(id, name)| User::new(id, name))
}

fn manifest_strategy() -> impl Strategy<Value = Manifest> {
    prop::collection::vec(user_strategy(), 0..8).prop_map(Manifest::new)
}

// =============================================================================
// MERGE PROPERTIES
// =============================================================================

proptest! {
    /// Identity: merged(None) returns the document unchanged
    #[test]
    fn merge_with_none_is_identity(base in manifest_strategy()) {
        let merged = base.clone().merged(None);
        prop_assert_eq!(merged, base);
    }

    /// Base users form the prefix of the merged document, in order
    #[test]
    fn base_users_form_the_prefix(
        base in manifest_strategy(),
        overlay in manifest_strategy(),
    ) {
        let merged = base.clone().merged(Some(overlay));
        prop_assert_eq!(&merged.users[..base.users.len()], &base.users[..]);
    }

    /// Overlay users form the suffix of the merged document, in order
    #[test]
    fn overlay_users_form_the_suffix(
        base in manifest_strategy(),
        overlay in manifest_strategy(),
    ) {
        let merged = base.clone().merged(Some(overlay.clone()));
        prop_assert_eq!(&merged.users[base.users.len()..], &overlay.users[..]);
    }

    /// Nothing is deduplicated: length is always the sum
    #[test]
    fn merged_length_is_the_sum(
        base in manifest_strategy(),
        overlay in manifest_strategy(),
    ) {
        let expected = base.users.len() + overlay.users.len();
        let merged = base.merged(Some(overlay));
        prop_assert_eq!(merged.users.len(), expected);
    }

    /// The first occurrence of any base id never moves, so first-match
    /// lookups keep resolving to the base record after a merge
    #[test]
    fn first_match_for_base_ids_is_stable(
        base in manifest_strategy(),
        overlay in manifest_strategy(),
    ) {
        let merged = base.clone().merged(Some(overlay));
        for user in &base.users {
            let before = base.users.iter().position(|u| u.id == user.id);
            let after = merged.users.iter().position(|u| u.id == user.id);
            prop_assert_eq!(before, after);
        }
    }
}
