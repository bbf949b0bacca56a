//! Error types for the roster store.

use std::fmt;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
///
/// Collection-local operations never partially apply: a failed update or
/// removal leaves the collection untouched. The one cross-collection
/// exception is [`StoreError::CascadeIncomplete`], which reports cleanup
/// steps that failed after a primary deletion already succeeded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given key exists where one is required.
    #[error("{collection}: record not found: {key}")]
    NotFound {
        /// Collection that was searched.
        collection: &'static str,
        /// Key that was not found.
        key: String,
    },

    /// A record with the same key already exists, or a one-to-one
    /// constraint is already satisfied.
    #[error("{collection}: record already exists: {key}")]
    AlreadyExists {
        /// Collection holding the conflicting record.
        collection: &'static str,
        /// Conflicting key.
        key: String,
    },

    /// A foreign identifier does not resolve to a stored record.
    #[error("{collection}: reference does not resolve: {key}")]
    InvalidReference {
        /// Collection the reference points into.
        collection: &'static str,
        /// The unresolved key.
        key: String,
    },

    /// No follow edge exists between the two users.
    #[error("user {follower} does not follow user {followee}")]
    NotInRelation {
        /// The user that was expected to be following.
        follower: String,
        /// The user that was expected to be followed.
        followee: String,
    },

    /// The follow edge already exists.
    #[error("user {follower} already follows user {followee}")]
    AlreadyInRelation {
        /// The user already following.
        follower: String,
        /// The user already followed.
        followee: String,
    },

    /// A user may not follow itself.
    #[error("user {user} cannot follow itself")]
    SelfRelation {
        /// The offending user.
        user: String,
    },

    /// A deletion cascade removed its primary record but one or more
    /// cleanup steps failed, leaving state that needs attention.
    #[error("cascade for user {user} incomplete: {}", .failed_steps.join("; "))]
    CascadeIncomplete {
        /// The deleted user.
        user: String,
        /// Descriptions of the cleanup steps that did not complete.
        failed_steps: Vec<String>,
    },
}

impl StoreError {
    /// Creates a not-found error.
    pub fn not_found(collection: &'static str, key: impl fmt::Display) -> Self {
        Self::NotFound {
            collection,
            key: key.to_string(),
        }
    }

    /// Creates an already-exists error.
    pub fn already_exists(collection: &'static str, key: impl fmt::Display) -> Self {
        Self::AlreadyExists {
            collection,
            key: key.to_string(),
        }
    }

    /// Creates an invalid-reference error.
    pub fn invalid_reference(collection: &'static str, key: impl fmt::Display) -> Self {
        Self::InvalidReference {
            collection,
            key: key.to_string(),
        }
    }

    /// Creates a not-in-relation error.
    pub fn not_in_relation(follower: impl fmt::Display, followee: impl fmt::Display) -> Self {
        Self::NotInRelation {
            follower: follower.to_string(),
            followee: followee.to_string(),
        }
    }

    /// Creates an already-in-relation error.
    pub fn already_in_relation(follower: impl fmt::Display, followee: impl fmt::Display) -> Self {
        Self::AlreadyInRelation {
            follower: follower.to_string(),
            followee: followee.to_string(),
        }
    }

    /// Creates a self-relation error.
    pub fn self_relation(user: impl fmt::Display) -> Self {
        Self::SelfRelation {
            user: user.to_string(),
        }
    }

    /// Returns true if the error signals an absent record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true if the error signals a uniqueness or relation conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyExists { .. } | Self::AlreadyInRelation { .. }
        )
    }
}
