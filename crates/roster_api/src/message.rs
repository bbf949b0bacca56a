//! Request and reply messages.

use crate::error::ApiError;
use roster_core::{
    MemberTypeId, MemberTypePatch, NewPost, NewProfile, NewUser, PostPatch, ProfilePatch,
    RecordId, UserPatch,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A request the API can serve.
///
/// The serialized form is a tagged JSON object:
///
/// ```json
/// { "op": "createUser", "params": { "draft": { "name": "alice" } } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    tag = "op",
    content = "params",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum RosterRequest {
    /// Lists all users.
    ListUsers,
    /// Gets one user by id.
    GetUser {
        /// User id.
        id: RecordId,
    },
    /// Creates a user.
    CreateUser {
        /// Create input.
        draft: NewUser,
    },
    /// Patches a user.
    PatchUser {
        /// User id.
        id: RecordId,
        /// Partial update.
        patch: UserPatch,
    },
    /// Deletes a user and everything that references it.
    DeleteUser {
        /// User id.
        id: RecordId,
    },
    /// Records that one user follows another.
    Follow {
        /// The user doing the following.
        follower_id: RecordId,
        /// The user being followed.
        followee_id: RecordId,
    },
    /// Removes a follow edge.
    Unfollow {
        /// The user that was following.
        follower_id: RecordId,
        /// The user that was followed.
        followee_id: RecordId,
    },
    /// Lists all profiles.
    ListProfiles,
    /// Gets one profile by id.
    GetProfile {
        /// Profile id.
        id: RecordId,
    },
    /// Creates a profile (validated against users and member types).
    CreateProfile {
        /// Create input.
        draft: NewProfile,
    },
    /// Patches a profile.
    PatchProfile {
        /// Profile id.
        id: RecordId,
        /// Partial update.
        patch: ProfilePatch,
    },
    /// Deletes a profile.
    DeleteProfile {
        /// Profile id.
        id: RecordId,
    },
    /// Lists all posts.
    ListPosts,
    /// Gets one post by id.
    GetPost {
        /// Post id.
        id: RecordId,
    },
    /// Creates a post.
    CreatePost {
        /// Create input.
        draft: NewPost,
    },
    /// Patches a post.
    PatchPost {
        /// Post id.
        id: RecordId,
        /// Partial update.
        patch: PostPatch,
    },
    /// Deletes a post.
    DeletePost {
        /// Post id.
        id: RecordId,
    },
    /// Lists all member types.
    ListMemberTypes,
    /// Gets one member type by key.
    GetMemberType {
        /// Member type key.
        id: MemberTypeId,
    },
    /// Patches a member type.
    PatchMemberType {
        /// Member type key.
        id: MemberTypeId,
        /// Partial update.
        patch: MemberTypePatch,
    },
    /// Returns collection counts.
    GetStats,
}

impl RosterRequest {
    /// Returns the operation name used on the wire.
    #[must_use]
    pub fn op_name(&self) -> &'static str {
        match self {
            Self::ListUsers => "listUsers",
            Self::GetUser { .. } => "getUser",
            Self::CreateUser { .. } => "createUser",
            Self::PatchUser { .. } => "patchUser",
            Self::DeleteUser { .. } => "deleteUser",
            Self::Follow { .. } => "follow",
            Self::Unfollow { .. } => "unfollow",
            Self::ListProfiles => "listProfiles",
            Self::GetProfile { .. } => "getProfile",
            Self::CreateProfile { .. } => "createProfile",
            Self::PatchProfile { .. } => "patchProfile",
            Self::DeleteProfile { .. } => "deleteProfile",
            Self::ListPosts => "listPosts",
            Self::GetPost { .. } => "getPost",
            Self::CreatePost { .. } => "createPost",
            Self::PatchPost { .. } => "patchPost",
            Self::DeletePost { .. } => "deletePost",
            Self::ListMemberTypes => "listMemberTypes",
            Self::GetMemberType { .. } => "getMemberType",
            Self::PatchMemberType { .. } => "patchMemberType",
            Self::GetStats => "getStats",
        }
    }
}

/// A transport-ready reply: an HTTP-style status code plus a JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterReply {
    /// HTTP-style status code.
    pub status: u16,
    /// JSON body: the requested resource on success, `{"error": ...}`
    /// otherwise.
    pub body: serde_json::Value,
}

impl RosterReply {
    /// Builds a 200 reply from a body.
    #[must_use]
    pub fn ok(body: serde_json::Value) -> Self {
        Self { status: 200, body }
    }

    /// Builds an error reply from an API error.
    #[must_use]
    pub fn error(err: &ApiError) -> Self {
        Self {
            status: err.status_code(),
            body: json!({ "error": err.to_string() }),
        }
    }

    /// Returns true for 2xx replies.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
