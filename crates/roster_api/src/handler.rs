//! Request handling over a shared store.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use roster_core::{
    Cascade, MemberType, MemberTypeId, MemberTypePatch, NewPost, NewProfile, NewUser, Post,
    PostPatch, Profile, ProfilePatch, RecordId, Store, StoreError, StoreStats, User, UserPatch,
};
use std::sync::Arc;

/// Validates requests and delegates them to the store.
///
/// The handler owns no state of its own beyond a handle to the shared
/// [`Store`]; it can be cloned cheaply and used from any number of
/// transport workers.
#[derive(Clone)]
pub struct RequestHandler {
    store: Arc<Store>,
    config: ApiConfig,
}

impl RequestHandler {
    /// Creates a handler over a shared store.
    pub fn new(store: Arc<Store>, config: ApiConfig) -> Self {
        Self { store, config }
    }

    /// Returns the handler's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn check_len(&self, field: &str, value: &str, max: usize) -> ApiResult<()> {
        if value.is_empty() {
            return Err(ApiError::invalid_request(format!("{field} is empty")));
        }
        if value.len() > max {
            return Err(ApiError::invalid_request(format!(
                "{field} exceeds {max} bytes"
            )));
        }
        Ok(())
    }

    // ---- users ----

    /// Lists all users.
    pub fn list_users(&self) -> Vec<User> {
        self.store.users()
    }

    /// Gets one user by id.
    pub fn get_user(&self, id: &RecordId) -> ApiResult<User> {
        self.store
            .user(id)
            .ok_or_else(|| StoreError::not_found("users", id).into())
    }

    /// Creates a user.
    pub fn create_user(&self, draft: NewUser) -> ApiResult<User> {
        self.check_len("name", &draft.name, self.config.max_name_len)?;
        Ok(self.store.create_user(draft)?)
    }

    /// Patches a user.
    pub fn patch_user(&self, id: &RecordId, patch: UserPatch) -> ApiResult<User> {
        if let Some(name) = &patch.name {
            self.check_len("name", name, self.config.max_name_len)?;
        }
        Ok(self.store.update_user(id, patch)?)
    }

    /// Deletes a user with its cascade.
    pub fn delete_user(&self, id: &RecordId) -> ApiResult<Cascade> {
        Ok(self.store.delete_user(id)?)
    }

    /// Records a follow edge.
    pub fn follow(&self, follower_id: &RecordId, followee_id: &RecordId) -> ApiResult<User> {
        Ok(self.store.follow(follower_id, followee_id)?)
    }

    /// Removes a follow edge.
    pub fn unfollow(&self, follower_id: &RecordId, followee_id: &RecordId) -> ApiResult<User> {
        Ok(self.store.unfollow(follower_id, followee_id)?)
    }

    // ---- profiles ----

    /// Lists all profiles.
    pub fn list_profiles(&self) -> Vec<Profile> {
        self.store.profiles()
    }

    /// Gets one profile by id.
    pub fn get_profile(&self, id: &RecordId) -> ApiResult<Profile> {
        self.store
            .profile(id)
            .ok_or_else(|| StoreError::not_found("profiles", id).into())
    }

    /// Creates a profile.
    pub fn create_profile(&self, draft: NewProfile) -> ApiResult<Profile> {
        Ok(self.store.create_profile(draft)?)
    }

    /// Patches a profile.
    pub fn patch_profile(&self, id: &RecordId, patch: ProfilePatch) -> ApiResult<Profile> {
        Ok(self.store.update_profile(id, patch)?)
    }

    /// Deletes a profile.
    pub fn delete_profile(&self, id: &RecordId) -> ApiResult<Profile> {
        Ok(self.store.delete_profile(id)?)
    }

    // ---- posts ----

    /// Lists all posts.
    pub fn list_posts(&self) -> Vec<Post> {
        self.store.posts()
    }

    /// Gets one post by id.
    pub fn get_post(&self, id: &RecordId) -> ApiResult<Post> {
        self.store
            .post(id)
            .ok_or_else(|| StoreError::not_found("posts", id).into())
    }

    /// Creates a post.
    pub fn create_post(&self, draft: NewPost) -> ApiResult<Post> {
        self.check_len("title", &draft.title, self.config.max_title_len)?;
        if draft.content.len() > self.config.max_content_len {
            return Err(ApiError::invalid_request(format!(
                "content exceeds {} bytes",
                self.config.max_content_len
            )));
        }
        Ok(self.store.create_post(draft)?)
    }

    /// Patches a post.
    pub fn patch_post(&self, id: &RecordId, patch: PostPatch) -> ApiResult<Post> {
        if let Some(title) = &patch.title {
            self.check_len("title", title, self.config.max_title_len)?;
        }
        if let Some(content) = &patch.content {
            if content.len() > self.config.max_content_len {
                return Err(ApiError::invalid_request(format!(
                    "content exceeds {} bytes",
                    self.config.max_content_len
                )));
            }
        }
        Ok(self.store.update_post(id, patch)?)
    }

    /// Deletes a post.
    pub fn delete_post(&self, id: &RecordId) -> ApiResult<Post> {
        Ok(self.store.delete_post(id)?)
    }

    // ---- member types ----

    /// Lists all member types.
    pub fn list_member_types(&self) -> Vec<MemberType> {
        self.store.member_types()
    }

    /// Gets one member type by key.
    pub fn get_member_type(&self, id: &MemberTypeId) -> ApiResult<MemberType> {
        self.store
            .member_type(id)
            .ok_or_else(|| StoreError::not_found("member-types", id).into())
    }

    /// Patches a member type.
    pub fn patch_member_type(
        &self,
        id: &MemberTypeId,
        patch: MemberTypePatch,
    ) -> ApiResult<MemberType> {
        Ok(self.store.update_member_type(id, patch)?)
    }

    // ---- stats ----

    /// Returns collection counts.
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }
}
