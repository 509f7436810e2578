//! Property-based tests for window selection and overlay shadowing.
//!
//! These pin the two behaviors that are policy, not convenience:
//! - windows are pages: aligned to multiples of the limit, containing the
//!   highlighted item, clipped only at the end of the list
//! - merging an overlay can add lookups but never change what a
//!   first-party id resolves to

use proptest::prelude::*;
use vitrine_catalog::{Catalog, has_more, select_window};
use vitrine_manifest::{Item, Manifest, User};

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|index| {
            let id = format!("i{index}");
            Item::new(&id, &id, "an item", format!("/models/{id}.glb"))
        })
        .collect()
}

fn user_strategy() -> impl Strategy<Value = User> {
    ("[a-z][a-z0-9]{0,7}", "[A-Z][a-z]{0,11}").prop_map(|(id, name)| User::new(id, name))
}

fn manifest_strategy() -> impl Strategy<Value = Manifest> {
    prop::collection::vec(user_strategy(), 0..8).prop_map(Manifest::new)
}

fn list_with_highlight() -> impl Strategy<Value = (usize, usize)> {
    (1usize..40).prop_flat_map(|count| (Just(count), 0..count))
}

// =============================================================================
// WINDOW PROPERTIES
// =============================================================================

proptest! {
    /// The window is exactly the page containing the highlighted index
    #[test]
    fn window_is_page_aligned(
        (count, highlight) in list_with_highlight(),
        limit in 1usize..10,
    ) {
        let all = items(count);
        let highlighted = format!("i{highlight}");
        let window = select_window(&all, Some(&highlighted), Some(limit));

        let start = (highlight / limit) * limit;
        let end = (start + limit).min(count);
        prop_assert_eq!(window, &all[start..end]);
    }

    /// The selected window always contains the highlighted item
    #[test]
    fn window_contains_the_highlight(
        (count, highlight) in list_with_highlight(),
        limit in 1usize..10,
    ) {
        let all = items(count);
        let highlighted = format!("i{highlight}");
        let window = select_window(&all, Some(&highlighted), Some(limit));

        prop_assert!(window.iter().any(|item| item.id == highlighted));
    }

    /// Without a usable highlight the window is a prefix of the list
    #[test]
    fn window_without_highlight_is_a_prefix(
        count in 0usize..40,
        limit in prop::option::of(0usize..10),
    ) {
        let all = items(count);
        let window = select_window(&all, None, limit);

        let expected = limit.map_or(count, |limit| limit.min(count));
        prop_assert_eq!(window, &all[..expected]);
    }

    /// has_more is exactly "the list is longer than the limit"
    #[test]
    fn has_more_matches_overflow(
        count in 0usize..40,
        limit in prop::option::of(0usize..10),
    ) {
        let all = items(count);
        prop_assert_eq!(has_more(&all, limit), limit.is_some_and(|limit| count > limit));
    }
}

// =============================================================================
// SHADOWING PROPERTIES
// =============================================================================

proptest! {
    /// An overlay can add resolvable ids but never changes what a
    /// first-party id resolves to
    #[test]
    fn overlay_never_changes_first_party_lookups(
        base in manifest_strategy(),
        overlay in manifest_strategy(),
    ) {
        let first_party = Catalog::from_manifest(base.clone());
        let merged = Catalog::build(base, Some(overlay));

        for user in first_party.users() {
            prop_assert_eq!(
                merged.find_user(&user.id).ok(),
                first_party.find_user(&user.id).ok()
            );
        }
    }

    /// Every overlay id resolves in the merged catalog (to the overlay
    /// record when no first-party id shadows it)
    #[test]
    fn overlay_ids_always_resolve(
        base in manifest_strategy(),
        overlay in manifest_strategy(),
    ) {
        let merged = Catalog::build(base.clone(), Some(overlay.clone()));

        for user in &overlay.users {
            let found = merged.find_user(&user.id);
            prop_assert!(found.is_ok());
            if !base.users.iter().any(|b| b.id == user.id) {
                let first_overlay_match = overlay
                    .users
                    .iter()
                    .find(|candidate| candidate.id == user.id)
                    .unwrap();
                prop_assert_eq!(found.unwrap(), first_overlay_match);
            }
        }
    }
}
