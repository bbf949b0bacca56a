//! Cross-collection integrity: validated creates, the follower graph, and
//! the user-deletion cascade.
//!
//! Every operation here acquires the store's write lock once and runs all
//! of its steps under it, so no other writer can observe an intermediate
//! state.

use crate::entity::{NewProfile, Profile, User};
use crate::error::{StoreError, StoreResult};
use crate::store::Store;
use crate::types::RecordId;
use serde::Serialize;
use tracing::{debug, info};

/// What a user-deletion cascade removed or rewrote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cascade {
    /// The deleted user, as stored prior to deletion.
    pub user: User,
    /// Id of the profile removed with the user, if one existed.
    pub removed_profile: Option<RecordId>,
    /// Ids of the posts removed with the user, in creation order.
    pub removed_posts: Vec<RecordId>,
    /// Ids of the users whose follower lists dropped the deleted user.
    pub pruned_users: Vec<RecordId>,
}

impl Store {
    /// Deletes a user together with everything that references it.
    ///
    /// The user's own deletion is the primary step; `NotFound` there fails
    /// the whole operation and nothing is touched. Cleanup then runs
    /// sequentially: the user's profile (if any) and posts are removed, and
    /// the user's id is pruned from every other user's follower list.
    ///
    /// Each cleanup step is awaited and its result collected. If any step
    /// fails the operation returns [`StoreError::CascadeIncomplete`] naming
    /// the steps that did not complete; it never fails silently.
    pub fn delete_user(&self, id: &RecordId) -> StoreResult<Cascade> {
        let mut state = self.state.write();

        let user = state.users.remove(id)?;
        let mut failed_steps: Vec<String> = Vec::new();

        let mut removed_profile = None;
        let profile_id = state.profiles.find_one(|p| p.user_id == *id).map(|p| p.id);
        if let Some(profile_id) = profile_id {
            match state.profiles.remove(&profile_id) {
                Ok(_) => removed_profile = Some(profile_id),
                Err(err) => failed_steps.push(format!("profile {profile_id}: {err}")),
            }
        }

        let post_ids: Vec<RecordId> = state
            .posts
            .iter()
            .filter(|p| p.user_id == *id)
            .map(|p| p.id)
            .collect();
        let mut removed_posts = Vec::with_capacity(post_ids.len());
        for post_id in post_ids {
            match state.posts.remove(&post_id) {
                Ok(_) => removed_posts.push(post_id),
                Err(err) => failed_steps.push(format!("post {post_id}: {err}")),
            }
        }

        let follower_hosts: Vec<RecordId> = state
            .users
            .iter()
            .filter(|u| u.has_follower(id))
            .map(|u| u.id)
            .collect();
        let mut pruned_users = Vec::with_capacity(follower_hosts.len());
        for host_id in follower_hosts {
            match state
                .users
                .update_with(&host_id, |u| u.follower_ids.retain(|f| f != id))
            {
                Ok(_) => pruned_users.push(host_id),
                Err(err) => failed_steps.push(format!("user {host_id}: {err}")),
            }
        }

        info!(
            user = %id,
            posts = removed_posts.len(),
            pruned = pruned_users.len(),
            profile = removed_profile.is_some(),
            "user deleted"
        );

        if !failed_steps.is_empty() {
            return Err(StoreError::CascadeIncomplete {
                user: id.to_string(),
                failed_steps,
            });
        }

        Ok(Cascade {
            user,
            removed_profile,
            removed_posts,
            pruned_users,
        })
    }

    /// Records that `follower_id` follows `followee_id`.
    ///
    /// The edge is stored on the *followee's* record, in its
    /// `follower_ids` list. Both users must exist (`NotFound`); a user
    /// cannot follow itself (`SelfRelation`); following a user twice is
    /// rejected (`AlreadyInRelation`). Returns the updated followee.
    pub fn follow(&self, follower_id: &RecordId, followee_id: &RecordId) -> StoreResult<User> {
        if follower_id == followee_id {
            return Err(StoreError::self_relation(follower_id));
        }

        let mut state = self.state.write();
        if !state.users.contains(follower_id) {
            return Err(StoreError::not_found("users", follower_id));
        }
        let already = state
            .users
            .get(followee_id)
            .ok_or_else(|| StoreError::not_found("users", followee_id))?
            .has_follower(follower_id);
        if already {
            return Err(StoreError::already_in_relation(follower_id, followee_id));
        }

        let updated = state
            .users
            .update_with(followee_id, |u| u.follower_ids.push(*follower_id))?;
        debug!(follower = %follower_id, followee = %followee_id, "follow edge added");
        Ok(updated)
    }

    /// Removes the follow edge from `follower_id` to `followee_id`.
    ///
    /// Both users must exist (`NotFound`). If no edge exists the operation
    /// fails with `NotInRelation`, which is distinct from `NotFound`.
    /// Removes exactly one occurrence and returns the updated followee.
    pub fn unfollow(&self, follower_id: &RecordId, followee_id: &RecordId) -> StoreResult<User> {
        let mut state = self.state.write();
        if !state.users.contains(follower_id) {
            return Err(StoreError::not_found("users", follower_id));
        }
        let following = state
            .users
            .get(followee_id)
            .ok_or_else(|| StoreError::not_found("users", followee_id))?
            .has_follower(follower_id);
        if !following {
            return Err(StoreError::not_in_relation(follower_id, followee_id));
        }

        let updated = state.users.update_with(followee_id, |u| {
            if let Some(pos) = u.follower_ids.iter().position(|f| f == follower_id) {
                u.follower_ids.remove(pos);
            }
        })?;
        debug!(follower = %follower_id, followee = %followee_id, "follow edge removed");
        Ok(updated)
    }

    /// Creates a profile from a draft, assigning a fresh identifier.
    ///
    /// The owning user and the member type must both resolve
    /// (`InvalidReference`), and the user must not already have a profile
    /// (`AlreadyExists`). On any violation nothing is written.
    pub fn create_profile(&self, draft: NewProfile) -> StoreResult<Profile> {
        let mut state = self.state.write();

        if !state.users.contains(&draft.user_id) {
            return Err(StoreError::invalid_reference("users", draft.user_id));
        }
        if !state.member_types.contains(&draft.member_type_id) {
            return Err(StoreError::invalid_reference(
                "member-types",
                &draft.member_type_id,
            ));
        }
        if state
            .profiles
            .find_one(|p| p.user_id == draft.user_id)
            .is_some()
        {
            return Err(StoreError::already_exists("profiles", draft.user_id));
        }

        state.profiles.insert(Profile::new(RecordId::new(), draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{NewPost, NewUser};
    use crate::types::MemberTypeId;

    fn profile_draft(user_id: RecordId) -> NewProfile {
        NewProfile {
            user_id,
            member_type_id: MemberTypeId::basic(),
            avatar: "avatar.png".into(),
            sex: "m".into(),
            birthday: 0,
            country: "NL".into(),
            street: "Main 1".into(),
        }
    }

    #[test]
    fn follow_mutates_the_followee() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();
        let bob = store.create_user(NewUser::named("bob")).unwrap();

        let updated = store.follow(&alice.id, &bob.id).unwrap();

        assert_eq!(updated.id, bob.id);
        assert_eq!(updated.follower_ids, vec![alice.id]);
        // the follower's own record is untouched
        assert!(store.user(&alice.id).unwrap().follower_ids.is_empty());
    }

    #[test]
    fn follow_requires_both_users() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();

        assert!(store
            .follow(&alice.id, &RecordId::new())
            .unwrap_err()
            .is_not_found());
        assert!(store
            .follow(&RecordId::new(), &alice.id)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn self_follow_is_rejected() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();

        let err = store.follow(&alice.id, &alice.id).unwrap_err();
        assert!(matches!(err, StoreError::SelfRelation { .. }));
    }

    #[test]
    fn duplicate_follow_is_rejected() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();
        let bob = store.create_user(NewUser::named("bob")).unwrap();

        store.follow(&alice.id, &bob.id).unwrap();
        let err = store.follow(&alice.id, &bob.id).unwrap_err();

        assert!(matches!(err, StoreError::AlreadyInRelation { .. }));
        assert_eq!(store.user(&bob.id).unwrap().follower_ids.len(), 1);
    }

    #[test]
    fn follow_then_unfollow_roundtrips() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();
        let bob = store.create_user(NewUser::named("bob")).unwrap();
        let before = store.user(&bob.id).unwrap().follower_ids.clone();

        store.follow(&alice.id, &bob.id).unwrap();
        let after = store.unfollow(&alice.id, &bob.id).unwrap();

        assert_eq!(after.follower_ids, before);
    }

    #[test]
    fn unfollow_without_edge_is_not_in_relation() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();
        let bob = store.create_user(NewUser::named("bob")).unwrap();

        let err = store.unfollow(&alice.id, &bob.id).unwrap_err();
        assert!(matches!(err, StoreError::NotInRelation { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn create_profile_validates_references_and_uniqueness() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();

        // unknown user
        let err = store
            .create_profile(profile_draft(RecordId::new()))
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidReference { collection, .. } if collection == "users"));

        // unknown member type
        let mut draft = profile_draft(alice.id);
        draft.member_type_id = MemberTypeId::new("gold");
        let err = store.create_profile(draft).unwrap_err();
        assert!(matches!(err, StoreError::InvalidReference { collection, .. } if collection == "member-types"));

        // first profile succeeds, second conflicts
        store.create_profile(profile_draft(alice.id)).unwrap();
        let err = store.create_profile(profile_draft(alice.id)).unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists { .. }));
        assert_eq!(store.profiles().len(), 1);
    }

    #[test]
    fn cascade_removes_profile_posts_and_follower_entries() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();
        let bob = store.create_user(NewUser::named("bob")).unwrap();

        store.create_profile(profile_draft(alice.id)).unwrap();
        let post = store
            .create_post(NewPost {
                user_id: alice.id,
                title: "t".into(),
                content: "c".into(),
            })
            .unwrap();
        // alice follows bob, so bob's record holds alice's id
        store.follow(&alice.id, &bob.id).unwrap();

        let cascade = store.delete_user(&alice.id).unwrap();

        assert_eq!(cascade.user.id, alice.id);
        assert!(cascade.removed_profile.is_some());
        assert_eq!(cascade.removed_posts, vec![post.id]);
        assert_eq!(cascade.pruned_users, vec![bob.id]);

        assert_eq!(store.user(&alice.id), None);
        assert!(store.profile_by_user(&alice.id).is_none());
        assert!(store.posts_by_author(&alice.id).is_empty());
        assert!(store.user(&bob.id).unwrap().follower_ids.is_empty());
    }

    #[test]
    fn cascade_on_missing_user_touches_nothing() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();
        store.create_profile(profile_draft(alice.id)).unwrap();

        let err = store.delete_user(&RecordId::new()).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(store.users().len(), 1);
        assert_eq!(store.profiles().len(), 1);
    }

    #[test]
    fn cascade_leaves_unrelated_records() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();
        let bob = store.create_user(NewUser::named("bob")).unwrap();
        store.create_profile(profile_draft(bob.id)).unwrap();
        let bob_post = store
            .create_post(NewPost {
                user_id: bob.id,
                title: "keep".into(),
                content: String::new(),
            })
            .unwrap();

        store.delete_user(&alice.id).unwrap();

        assert!(store.user(&bob.id).is_some());
        assert!(store.profile_by_user(&bob.id).is_some());
        assert_eq!(store.post(&bob_post.id), Some(bob_post));
    }

    #[test]
    fn deleting_a_followee_keeps_other_followers() {
        let store = Store::new();
        let alice = store.create_user(NewUser::named("alice")).unwrap();
        let bob = store.create_user(NewUser::named("bob")).unwrap();
        let carol = store.create_user(NewUser::named("carol")).unwrap();

        // alice and bob both follow carol
        store.follow(&alice.id, &carol.id).unwrap();
        store.follow(&bob.id, &carol.id).unwrap();

        store.delete_user(&alice.id).unwrap();

        assert_eq!(store.user(&carol.id).unwrap().follower_ids, vec![bob.id]);
    }
}
