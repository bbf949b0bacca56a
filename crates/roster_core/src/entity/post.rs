//! Post records.

use crate::record::Record;
use crate::types::RecordId;
use serde::{Deserialize, Serialize};

/// A stored post. A user may have any number of posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Unique identifier, assigned at creation.
    pub id: RecordId,
    /// Authoring user.
    pub user_id: RecordId,
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
}

impl Post {
    /// Builds a stored post from a draft and a freshly assigned id.
    pub fn new(id: RecordId, draft: NewPost) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            title: draft.title,
            content: draft.content,
        }
    }
}

impl Record for Post {
    type Key = RecordId;
    type Patch = PostPatch;

    fn key(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
    }
}

/// Input for creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    /// Authoring user; must resolve to an existing user.
    pub user_id: RecordId,
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
}

/// Partial update for a post. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    /// New title.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
}
