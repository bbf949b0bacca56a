//! Property-based coverage of the record-store laws.

use proptest::prelude::*;
use roster_core::{NewPost, NewUser, Store, UserPatch};

fn balance_strategy() -> impl Strategy<Value = f64> {
    0.0f64..1_000_000.0
}

fn draft_strategy() -> impl Strategy<Value = NewUser> {
    ("[a-z][a-z0-9_]{0,11}", balance_strategy())
        .prop_map(|(name, balance)| NewUser { name, balance })
}

proptest! {
    #[test]
    fn created_records_are_immediately_findable(
        drafts in prop::collection::vec(draft_strategy(), 1..8)
    ) {
        let store = Store::new();
        let created: Vec<_> = drafts
            .into_iter()
            .map(|d| store.create_user(d).unwrap())
            .collect();

        for user in &created {
            let found = store.user(&user.id);
            prop_assert_eq!(found.as_ref(), Some(user));
        }
        prop_assert_eq!(store.users(), created);
    }

    #[test]
    fn patch_sets_the_field_and_preserves_the_rest(
        draft in draft_strategy(),
        new_balance in balance_strategy()
    ) {
        let store = Store::new();
        let user = store.create_user(draft).unwrap();

        let updated = store
            .update_user(&user.id, UserPatch { name: None, balance: Some(new_balance) })
            .unwrap();

        prop_assert_eq!(updated.balance, new_balance);
        prop_assert_eq!(updated.name, user.name);
        prop_assert_eq!(updated.follower_ids, user.follower_ids);
    }

    #[test]
    fn removed_records_are_gone(
        drafts in prop::collection::vec(draft_strategy(), 1..8)
    ) {
        let store = Store::new();
        let created: Vec<_> = drafts
            .into_iter()
            .map(|d| store.create_user(d).unwrap())
            .collect();

        for user in &created {
            let removed = store.delete_user(&user.id).unwrap();
            prop_assert_eq!(&removed.user.id, &user.id);
            prop_assert_eq!(store.user(&user.id), None);
        }
        prop_assert!(store.users().is_empty());
    }

    #[test]
    fn cascade_never_leaves_dangling_references(
        drafts in prop::collection::vec(draft_strategy(), 2..6),
        post_counts in prop::collection::vec(0usize..3, 2..6),
        edges in prop::collection::vec((0usize..6, 0usize..6), 0..12)
    ) {
        let store = Store::new();
        let users: Vec<_> = drafts
            .into_iter()
            .map(|d| store.create_user(d).unwrap())
            .collect();

        for (user, count) in users.iter().zip(post_counts) {
            for n in 0..count {
                store
                    .create_post(NewPost {
                        user_id: user.id,
                        title: format!("post {n}"),
                        content: String::new(),
                    })
                    .unwrap();
            }
        }

        // wire up an arbitrary follow graph; invalid edges are rejected
        // by the store and simply skipped here
        for (from, to) in edges {
            if from < users.len() && to < users.len() {
                let _ = store.follow(&users[from].id, &users[to].id);
            }
        }

        let victim = users[0].id;
        store.delete_user(&victim).unwrap();

        prop_assert!(store.posts_by_author(&victim).is_empty());
        prop_assert!(store.profile_by_user(&victim).is_none());
        for survivor in store.users() {
            prop_assert!(!survivor.follower_ids.contains(&victim));
        }
    }
}
