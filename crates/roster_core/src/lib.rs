//! # Roster Core
//!
//! In-memory relational record store for the roster platform.
//!
//! This crate provides:
//! - A generic, ordered [`RecordSet`] storage primitive
//! - Typed collections for users, profiles, posts and member types
//! - Referential integrity: validated creates, the follower graph, and the
//!   user-deletion cascade
//! - A [`Store`] facade owning all collections behind a single writer lock
//!
//! ## Opening a Store
//!
//! A store is constructed explicitly and passed by reference (or `Arc`) to
//! everything that needs it. There are no process-wide singletons.
//!
//! ```rust
//! use roster_core::{NewUser, Store};
//!
//! let store = Store::new();
//!
//! let alice = store.create_user(NewUser::named("alice")).unwrap();
//! assert_eq!(store.user(&alice.id), Some(alice));
//! ```
//!
//! ## Consistency
//!
//! Every multi-step operation (the deletion cascade, follow/unfollow,
//! validated profile creation) runs to completion under the store's write
//! lock, so no interleaving can observe a dangling reference.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod entity;
mod error;
mod record;
mod relation;
mod stats;
mod store;
mod types;

pub use config::StoreConfig;
pub use entity::{
    MemberType, MemberTypePatch, NewPost, NewProfile, NewUser, Post, PostPatch, Profile,
    ProfilePatch, User, UserPatch,
};
pub use error::{StoreError, StoreResult};
pub use record::{Record, RecordSet};
pub use relation::Cascade;
pub use stats::StoreStats;
pub use store::Store;
pub use types::{MemberTypeId, RecordId};
