//! # Roster API
//!
//! Transport-agnostic request handling for the roster store.
//!
//! This crate is the boundary between a transport (HTTP, a message queue, a
//! test harness) and [`roster_core`]: it defines typed request messages, a
//! [`RequestHandler`] that validates and delegates to the store, and an
//! [`ApiServer`] front door that dispatches a [`RosterRequest`] and turns
//! every outcome into a [`RosterReply`] carrying an HTTP-style status code
//! and a JSON body.
//!
//! In a real deployment you would expose HTTP endpoints that deserialize
//! into [`RosterRequest`] values and call [`ApiServer::handle`].
//!
//! ```rust
//! use std::sync::Arc;
//! use roster_api::{ApiServer, RosterRequest};
//! use roster_core::{NewUser, Store};
//!
//! let server = ApiServer::new(Arc::new(Store::new()));
//!
//! let reply = server.handle(RosterRequest::CreateUser {
//!     draft: NewUser::named("alice"),
//! });
//! assert_eq!(reply.status, 200);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod handler;
mod message;
mod server;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use handler::RequestHandler;
pub use message::{RosterReply, RosterRequest};
pub use server::ApiServer;
