//! Store statistics.

use crate::store::Store;
use serde::Serialize;

/// Point-in-time counts for a store.
///
/// Taken under a single read lock, so the counts are mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStats {
    /// Number of stored users.
    pub users: usize,
    /// Number of stored profiles.
    pub profiles: usize,
    /// Number of stored posts.
    pub posts: usize,
    /// Number of seeded member types.
    pub member_types: usize,
    /// Total follow edges across all users.
    pub follow_edges: usize,
}

impl Store {
    /// Returns a consistent snapshot of collection counts.
    #[must_use]
    pub fn stats(&self) -> StoreStats {
        let state = self.state.read();
        StoreStats {
            users: state.users.len(),
            profiles: state.profiles.len(),
            posts: state.posts.len(),
            member_types: state.member_types.len(),
            follow_edges: state.users.iter().map(|u| u.follower_ids.len()).sum(),
        }
    }
}
