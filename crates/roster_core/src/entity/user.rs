//! User records and the follower lists they carry.

use crate::record::Record;
use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// A stored user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier, assigned at creation and immutable.
    pub id: RecordId,
    /// Display name.
    pub name: String,
    /// Account balance.
    pub balance: f64,
    /// Identifiers of the users that follow this user, in follow order.
    ///
    /// Holds no duplicates and never the user's own id; only the follower
    /// graph operations on the store mutate it.
    pub follower_ids: Vec<RecordId>,
}

impl User {
    /// Builds a stored user from a draft and a freshly assigned id.
    pub fn new(id: RecordId, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
            balance: draft.balance,
            follower_ids: Vec::new(),
        }
    }

    /// Returns true if `user_id` follows this user.
    pub fn has_follower(&self, user_id: &RecordId) -> bool {
        self.follower_ids.contains(user_id)
    }
}

impl Record for User {
    type Key = RecordId;
    type Patch = UserPatch;

    fn key(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(balance) = patch.balance {
            self.balance = balance;
        }
    }
}

/// Input for creating a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Starting balance.
    #[serde(default)]
    pub balance: f64,
}

impl NewUser {
    /// Draft for a user with the given name and a zero balance.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            balance: 0.0,
        }
    }
}

/// Partial update for a user.
///
/// `None` fields are left unchanged. Follower lists are not patchable;
/// they belong to the store's follower graph operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    /// New display name.
    pub name: Option<String>,
    /// New balance.
    pub balance: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_preserves_unpatched_fields() {
        let mut user = User::new(
            RecordId::new(),
            NewUser {
                name: "alice".into(),
                balance: 12.5,
            },
        );

        user.apply(UserPatch {
            name: Some("alicia".into()),
            balance: None,
        });

        assert_eq!(user.name, "alicia");
        assert_eq!(user.balance, 12.5);
    }

    #[test]
    fn new_user_starts_with_no_followers() {
        let user = User::new(RecordId::new(), NewUser::named("bob"));
        assert!(user.follower_ids.is_empty());
        assert!(!user.has_follower(&RecordId::new()));
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let user = User::new(RecordId::new(), NewUser::named("carol"));
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("followerIds").is_some());
        assert!(json.get("follower_ids").is_none());
    }
}
