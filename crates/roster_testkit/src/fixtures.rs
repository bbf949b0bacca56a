//! Test fixtures and store helpers.
//!
//! Provides convenience wrappers for setting up test stores and common
//! pre-populated scenarios.

use roster_core::{Store, StoreConfig};
use std::sync::Arc;

/// A store wrapped for test use.
///
/// The store is held behind an [`Arc`] so fixtures can be handed to
/// components that share ownership (e.g. an API server) while the test
/// keeps its own handle.
pub struct TestStore {
    /// The shared store instance.
    pub store: Arc<Store>,
}

impl TestStore {
    /// Creates a fresh store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store::new()),
        }
    }

    /// Creates a fresh store from a configuration.
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            store: Arc::new(Store::with_config(config)),
        }
    }

    /// Returns a shared handle to the store.
    #[must_use]
    pub fn shared(&self) -> Arc<Store> {
        Arc::clone(&self.store)
    }
}

impl Default for TestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestStore {
    type Target = Store;

    fn deref(&self) -> &Store {
        &self.store
    }
}

/// Runs a test against a fresh store.
///
/// # Example
///
/// ```rust
/// use roster_testkit::with_store;
///
/// with_store(|store| {
///     assert_eq!(store.member_types().len(), 2);
/// });
/// ```
pub fn with_store<F, R>(f: F) -> R
where
    F: FnOnce(&Store) -> R,
{
    let test_store = TestStore::new();
    f(&test_store.store)
}

/// Pre-populated store scenarios.
pub mod scenarios {
    use super::TestStore;
    use roster_core::{MemberTypeId, NewPost, NewProfile, NewUser, Profile, User};

    /// A store with `user_count` users, each with one post.
    #[must_use]
    pub fn populated_store(user_count: usize) -> (TestStore, Vec<User>) {
        let fixture = TestStore::new();
        let users: Vec<User> = (0..user_count)
            .map(|n| {
                let user = fixture
                    .create_user(NewUser::named(format!("user{n}")))
                    .expect("create_user");
                fixture
                    .create_post(NewPost {
                        user_id: user.id,
                        title: format!("post by user{n}"),
                        content: String::new(),
                    })
                    .expect("create_post");
                user
            })
            .collect();
        (fixture, users)
    }

    /// Two users where the first follows the second.
    #[must_use]
    pub fn follow_pair() -> (TestStore, User, User) {
        let fixture = TestStore::new();
        let follower = fixture
            .create_user(NewUser::named("follower"))
            .expect("create_user");
        let followee = fixture
            .create_user(NewUser::named("followee"))
            .expect("create_user");
        let followee = fixture
            .follow(&follower.id, &followee.id)
            .expect("follow");
        (fixture, follower, followee)
    }

    /// One user with a basic-tier profile.
    #[must_use]
    pub fn profiled_user() -> (TestStore, User, Profile) {
        let fixture = TestStore::new();
        let user = fixture
            .create_user(NewUser::named("member"))
            .expect("create_user");
        let profile = fixture
            .create_profile(NewProfile {
                user_id: user.id,
                member_type_id: MemberTypeId::basic(),
                avatar: "avatar.png".into(),
                sex: "f".into(),
                birthday: 631152000000,
                country: "NL".into(),
                street: "Main 1".into(),
            })
            .expect("create_profile");
        (fixture, user, profile)
    }
}
