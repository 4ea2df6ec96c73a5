//! User accounts.

use serde_json::{json, Value};
use tracing::instrument;

use crate::api::types::{Pagination, Uuids};
use crate::error::{McsmError, Result};
use crate::transport::{Endpoint, Transport};

/// Endpoints under `/auth`.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    transport: &'a Transport,
}

impl<'a> Users<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Create a user with the given permission level.
    #[instrument(skip(self, password))]
    pub async fn create_user(&self, username: &str, password: &str, permission: i32) -> Result<Value> {
        let endpoint = Endpoint::post(&["auth"]).json(json!({
            "username": username,
            "password": password,
            "permission": permission,
        }));
        self.transport.request(endpoint).await
    }

    /// Delete one or many users. A single id is sent as a one-element list.
    #[instrument(skip(self, uuids))]
    pub async fn delete_user(&self, uuids: impl Into<Uuids>) -> Result<Value> {
        let uuids = uuids.into();
        uuids.validate("user uuids")?;
        let endpoint = Endpoint::delete(&["auth"]).json(json!(uuids.as_slice()));
        self.transport.request(endpoint).await
    }

    #[instrument(skip(self))]
    pub async fn overview(&self) -> Result<Value> {
        self.transport
            .request(Endpoint::get(&["auth", "overview"]))
            .await
    }

    /// Info for `uuid`, or for the key's own account when `None`.
    #[instrument(skip(self))]
    pub async fn user_info(&self, uuid: Option<&str>, advanced: bool) -> Result<Value> {
        let mut endpoint = Endpoint::get(&["auth"]).query("advanced", advanced);
        if let Some(uuid) = uuid {
            endpoint = endpoint.id("uuid", uuid)?;
        }
        self.transport.request(endpoint).await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, username: &str, pagination: Option<Pagination>) -> Result<Value> {
        let page = pagination.unwrap_or_default();
        let endpoint = Endpoint::get(&["auth", "search"])
            .query("userName", username)
            .query("page", page.page)
            .query("page_size", page.page_size);
        self.transport.request(endpoint).await
    }

    /// Update the credentials of the account owning the API key.
    #[instrument(skip(self, password))]
    pub async fn update_self(&self, username: &str, password: &str, permission: i32) -> Result<Value> {
        let endpoint = Endpoint::put(&["auth", "update"]).json(json!({
            "userName": username,
            "passWord": password,
            "permission": permission,
        }));
        self.transport.request(endpoint).await
    }

    /// Set another user's permission and instance access list.
    #[instrument(skip(self, instances))]
    pub async fn update_user(&self, uuid: &str, permission: i32, instances: Vec<Value>) -> Result<Value> {
        if uuid.trim().is_empty() {
            return Err(McsmError::InvalidInput("uuid must not be empty".into()));
        }
        let endpoint = Endpoint::put(&["auth"]).json(json!({
            "uuid": uuid,
            "config": {
                "permission": permission,
                "instances": instances,
            },
        }));
        self.transport.request(endpoint).await
    }
}
