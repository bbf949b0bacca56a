//! Front door dispatching request messages to the handler.

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::handler::RequestHandler;
use crate::message::{RosterReply, RosterRequest};
use roster_core::Store;
use serde_json::to_value;
use std::sync::Arc;
use tracing::{debug, warn};

/// The roster API server.
///
/// Dispatches [`RosterRequest`] messages to the [`RequestHandler`] and
/// renders every outcome as a [`RosterReply`]. A transport binding only
/// needs to deserialize requests and write replies back.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use roster_api::{ApiServer, RosterRequest};
/// use roster_core::Store;
///
/// let server = ApiServer::new(Arc::new(Store::new()));
/// let reply = server.handle(RosterRequest::ListUsers);
/// assert_eq!(reply.status, 200);
/// ```
pub struct ApiServer {
    handler: RequestHandler,
}

impl ApiServer {
    /// Creates a server over a shared store with the default configuration.
    pub fn new(store: Arc<Store>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    /// Creates a server with a custom configuration.
    pub fn with_config(store: Arc<Store>, config: ApiConfig) -> Self {
        Self {
            handler: RequestHandler::new(store, config),
        }
    }

    /// Returns the underlying request handler.
    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    /// Serves one request.
    pub fn handle(&self, request: RosterRequest) -> RosterReply {
        let op = request.op_name();
        debug!(op, "handling request");

        match self.try_handle(request) {
            Ok(body) => RosterReply::ok(body),
            Err(err) => {
                if err.is_server_error() {
                    warn!(op, error = %err, "request failed");
                }
                RosterReply::error(&err)
            }
        }
    }

    /// Serves one request given as a JSON string.
    ///
    /// A payload that does not parse into a [`RosterRequest`] yields a 400
    /// reply.
    pub fn handle_json(&self, payload: &str) -> RosterReply {
        match serde_json::from_str::<RosterRequest>(payload) {
            Ok(request) => self.handle(request),
            Err(err) => RosterReply::error(&ApiError::invalid_request(format!(
                "malformed request: {err}"
            ))),
        }
    }

    fn try_handle(&self, request: RosterRequest) -> ApiResult<serde_json::Value> {
        let handler = &self.handler;
        let body = match request {
            RosterRequest::ListUsers => to_value(handler.list_users())?,
            RosterRequest::GetUser { id } => to_value(handler.get_user(&id)?)?,
            RosterRequest::CreateUser { draft } => to_value(handler.create_user(draft)?)?,
            RosterRequest::PatchUser { id, patch } => to_value(handler.patch_user(&id, patch)?)?,
            RosterRequest::DeleteUser { id } => to_value(handler.delete_user(&id)?)?,
            RosterRequest::Follow {
                follower_id,
                followee_id,
            } => to_value(handler.follow(&follower_id, &followee_id)?)?,
            RosterRequest::Unfollow {
                follower_id,
                followee_id,
            } => to_value(handler.unfollow(&follower_id, &followee_id)?)?,
            RosterRequest::ListProfiles => to_value(handler.list_profiles())?,
            RosterRequest::GetProfile { id } => to_value(handler.get_profile(&id)?)?,
            RosterRequest::CreateProfile { draft } => to_value(handler.create_profile(draft)?)?,
            RosterRequest::PatchProfile { id, patch } => {
                to_value(handler.patch_profile(&id, patch)?)?
            }
            RosterRequest::DeleteProfile { id } => to_value(handler.delete_profile(&id)?)?,
            RosterRequest::ListPosts => to_value(handler.list_posts())?,
            RosterRequest::GetPost { id } => to_value(handler.get_post(&id)?)?,
            RosterRequest::CreatePost { draft } => to_value(handler.create_post(draft)?)?,
            RosterRequest::PatchPost { id, patch } => to_value(handler.patch_post(&id, patch)?)?,
            RosterRequest::DeletePost { id } => to_value(handler.delete_post(&id)?)?,
            RosterRequest::ListMemberTypes => to_value(handler.list_member_types())?,
            RosterRequest::GetMemberType { id } => to_value(handler.get_member_type(&id)?)?,
            RosterRequest::PatchMemberType { id, patch } => {
                to_value(handler.patch_member_type(&id, patch)?)?
            }
            RosterRequest::GetStats => to_value(handler.stats())?,
        };
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::{NewUser, RecordId};

    fn server() -> ApiServer {
        ApiServer::new(Arc::new(Store::new()))
    }

    #[test]
    fn create_and_get_user() {
        let server = server();

        let created = server.handle(RosterRequest::CreateUser {
            draft: NewUser::named("alice"),
        });
        assert_eq!(created.status, 200);

        let id = RecordId::parse(created.body["id"].as_str().unwrap()).unwrap();
        let fetched = server.handle(RosterRequest::GetUser { id });
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body["name"], "alice");
    }

    #[test]
    fn missing_user_is_404() {
        let reply = server().handle(RosterRequest::GetUser {
            id: RecordId::new(),
        });
        assert_eq!(reply.status, 404);
        assert!(reply.body["error"].is_string());
    }

    #[test]
    fn malformed_json_is_400() {
        let reply = server().handle_json("{\"op\": \"noSuchOp\"}");
        assert_eq!(reply.status, 400);
    }

    #[test]
    fn json_dispatch_roundtrip() {
        let server = server();
        let reply = server.handle_json(
            r#"{"op":"createUser","params":{"draft":{"name":"bob","balance":3.5}}}"#,
        );
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body["balance"], 3.5);

        let listed = server.handle_json(r#"{"op":"listUsers"}"#);
        assert_eq!(listed.status, 200);
        assert_eq!(listed.body.as_array().unwrap().len(), 1);
    }

    #[test]
    fn member_types_are_served_from_the_seeds() {
        let reply = server().handle(RosterRequest::ListMemberTypes);
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body.as_array().unwrap().len(), 2);
    }
}
