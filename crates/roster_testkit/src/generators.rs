//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random store inputs that maintain
//! required invariants.

use proptest::prelude::*;
use roster_core::{NewPost, NewUser, RecordId};
use uuid::Uuid;

/// Strategy for generating valid record IDs.
pub fn record_id_strategy() -> impl Strategy<Value = RecordId> {
    any::<u128>().prop_map(|n| RecordId::from_uuid(Uuid::from_u128(n)))
}

/// Strategy for generating valid user names.
pub fn user_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_]{0,15}").expect("invalid regex")
}

/// Strategy for generating user drafts.
pub fn new_user_strategy() -> impl Strategy<Value = NewUser> {
    (user_name_strategy(), 0.0f64..1_000_000.0)
        .prop_map(|(name, balance)| NewUser { name, balance })
}

/// Strategy for generating post drafts by a fixed author.
pub fn new_post_strategy(author: RecordId) -> impl Strategy<Value = NewPost> {
    ("[A-Za-z ]{1,40}", prop::string::string_regex("[a-z .]{0,200}").expect("invalid regex"))
        .prop_map(move |(title, content)| NewPost {
            user_id: author,
            title,
            content,
        })
}

/// Strategy for generating directed follow edges over `user_count` users.
///
/// Edges are index pairs; self-edges and duplicates may occur and are
/// expected to be rejected by the store under test.
pub fn follow_edges_strategy(user_count: usize) -> impl Strategy<Value = Vec<(usize, usize)>> {
    let max = user_count.max(1);
    prop::collection::vec((0..max, 0..max), 0..user_count * 2 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_names_are_valid(name in user_name_strategy()) {
            prop_assert!(!name.is_empty());
            prop_assert!(name.len() <= 16);
        }

        #[test]
        fn generated_ids_roundtrip_through_strings(id in record_id_strategy()) {
            prop_assert_eq!(RecordId::parse(&id.to_string()), Some(id));
        }
    }
}
