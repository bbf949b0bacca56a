//! Store facade.

use crate::config::StoreConfig;
use crate::entity::{
    MemberType, MemberTypePatch, NewPost, NewUser, Post, PostPatch, Profile, ProfilePatch, User,
    UserPatch,
};
use crate::error::{StoreError, StoreResult};
use crate::record::RecordSet;
use crate::types::{MemberTypeId, RecordId};
use parking_lot::RwLock;
use tracing::warn;

/// The four collections behind the facade.
///
/// Cross-collection operations in `relation.rs` work on this struct
/// directly so that one write-lock acquisition covers every step.
pub(crate) struct State {
    pub(crate) users: RecordSet<User>,
    pub(crate) profiles: RecordSet<Profile>,
    pub(crate) posts: RecordSet<Post>,
    pub(crate) member_types: RecordSet<MemberType>,
}

/// The main store handle.
///
/// `Store` is the single access point callers use to operate on the four
/// collections. It is constructed explicitly, owned by the service process,
/// and shared by reference; there is no hidden global state.
///
/// All operations take `&self`: interior state lives behind one
/// [`RwLock`], and multi-step operations (the deletion cascade, follow and
/// unfollow, validated creates) hold the write lock for their whole
/// duration, which serializes them against every other writer.
///
/// # Example
///
/// ```rust
/// use roster_core::{NewUser, Store};
///
/// let store = Store::new();
/// let user = store.create_user(NewUser::named("alice")).unwrap();
///
/// assert_eq!(store.users().len(), 1);
/// assert!(store.delete_user(&user.id).is_ok());
/// assert_eq!(store.user(&user.id), None);
/// ```
pub struct Store {
    pub(crate) state: RwLock<State>,
}

impl Store {
    /// Creates a store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates a store from a configuration.
    ///
    /// Member type seeds with duplicate keys are ignored after the first
    /// occurrence.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        let mut member_types = RecordSet::new("member-types");
        for member_type in config.member_types {
            if member_types.contains(&member_type.id) {
                warn!(key = %member_type.id, "duplicate member type seed ignored");
                continue;
            }
            // insert cannot fail after the contains check
            let _ = member_types.insert(member_type);
        }

        Self {
            state: RwLock::new(State {
                users: RecordSet::new("users"),
                profiles: RecordSet::new("profiles"),
                posts: RecordSet::new("posts"),
                member_types,
            }),
        }
    }

    // ---- users ----

    /// Creates a user from a draft, assigning a fresh identifier.
    pub fn create_user(&self, draft: NewUser) -> StoreResult<User> {
        let mut state = self.state.write();
        state.users.insert(User::new(RecordId::new(), draft))
    }

    /// Gets a user by id. Absence is `None`.
    pub fn user(&self, id: &RecordId) -> Option<User> {
        self.state.read().users.get(id).cloned()
    }

    /// Returns all users in creation order.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.state.read().users.all()
    }

    /// Patches a user. Fails with `NotFound` if the id is absent.
    pub fn update_user(&self, id: &RecordId, patch: UserPatch) -> StoreResult<User> {
        self.state.write().users.update(id, patch)
    }

    // delete_user lives in relation.rs: deleting a user is a cascade.

    // ---- posts ----

    /// Creates a post from a draft, assigning a fresh identifier.
    ///
    /// The authoring user must resolve, otherwise `InvalidReference`.
    pub fn create_post(&self, draft: NewPost) -> StoreResult<Post> {
        let mut state = self.state.write();
        if !state.users.contains(&draft.user_id) {
            return Err(StoreError::invalid_reference("users", draft.user_id));
        }
        state.posts.insert(Post::new(RecordId::new(), draft))
    }

    /// Gets a post by id. Absence is `None`.
    pub fn post(&self, id: &RecordId) -> Option<Post> {
        self.state.read().posts.get(id).cloned()
    }

    /// Returns all posts in creation order.
    #[must_use]
    pub fn posts(&self) -> Vec<Post> {
        self.state.read().posts.all()
    }

    /// Returns all posts authored by the given user.
    pub fn posts_by_author(&self, user_id: &RecordId) -> Vec<Post> {
        self.state
            .read()
            .posts
            .find_many(|p| p.user_id == *user_id)
    }

    /// Patches a post. Fails with `NotFound` if the id is absent.
    pub fn update_post(&self, id: &RecordId, patch: PostPatch) -> StoreResult<Post> {
        self.state.write().posts.update(id, patch)
    }

    /// Deletes a post, returning its prior value.
    pub fn delete_post(&self, id: &RecordId) -> StoreResult<Post> {
        self.state.write().posts.remove(id)
    }

    // ---- profiles ----

    // create_profile lives in relation.rs: it validates two references
    // and the one-profile-per-user constraint.

    /// Gets a profile by id. Absence is `None`.
    pub fn profile(&self, id: &RecordId) -> Option<Profile> {
        self.state.read().profiles.get(id).cloned()
    }

    /// Returns all profiles in creation order.
    #[must_use]
    pub fn profiles(&self) -> Vec<Profile> {
        self.state.read().profiles.all()
    }

    /// Gets the profile owned by the given user, if one exists.
    pub fn profile_by_user(&self, user_id: &RecordId) -> Option<Profile> {
        self.state
            .read()
            .profiles
            .find_one(|p| p.user_id == *user_id)
            .cloned()
    }

    /// Patches a profile. Fails with `NotFound` if the id is absent.
    ///
    /// A patched member type must resolve, otherwise `InvalidReference`
    /// and the profile is left unchanged.
    pub fn update_profile(&self, id: &RecordId, patch: ProfilePatch) -> StoreResult<Profile> {
        let mut state = self.state.write();
        if let Some(member_type_id) = &patch.member_type_id {
            if !state.member_types.contains(member_type_id) {
                return Err(StoreError::invalid_reference(
                    "member-types",
                    member_type_id,
                ));
            }
        }
        state.profiles.update(id, patch)
    }

    /// Deletes a profile, returning its prior value.
    pub fn delete_profile(&self, id: &RecordId) -> StoreResult<Profile> {
        self.state.write().profiles.remove(id)
    }

    // ---- member types ----

    /// Gets a member type by key. Absence is `None`.
    pub fn member_type(&self, id: &MemberTypeId) -> Option<MemberType> {
        self.state.read().member_types.get(id).cloned()
    }

    /// Returns all member types in seed order.
    #[must_use]
    pub fn member_types(&self) -> Vec<MemberType> {
        self.state.read().member_types.all()
    }

    /// Patches a member type. Fails with `NotFound` if the key is absent.
    pub fn update_member_type(
        &self,
        id: &MemberTypeId,
        patch: MemberTypePatch,
    ) -> StoreResult<MemberType> {
        self.state.write().member_types.update(id, patch)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Store")
            .field("users", &state.users.len())
            .field("profiles", &state.profiles.len())
            .field("posts", &state.posts.len())
            .field("member_types", &state.member_types.len())
            .finish()
    }
}
