//! Store configuration.

use crate::entity::MemberType;

/// Configuration for constructing a [`Store`](crate::Store).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Member types present when the store opens.
    ///
    /// Member types form a closed set: they can be patched at runtime but
    /// never created or deleted, so everything a deployment needs must be
    /// seeded here.
    pub member_types: Vec<MemberType>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            member_types: vec![MemberType::basic(), MemberType::business()],
        }
    }
}

impl StoreConfig {
    /// Creates a configuration with the default member type seeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all member type seeds.
    #[must_use]
    pub fn without_member_types(mut self) -> Self {
        self.member_types.clear();
        self
    }

    /// Adds a member type seed.
    #[must_use]
    pub fn with_member_type(mut self, member_type: MemberType) -> Self {
        self.member_types.push(member_type);
        self
    }
}
