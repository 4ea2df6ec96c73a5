//! Remote daemon nodes.

use serde_json::{json, Value};
use tracing::instrument;

use crate::api::types::{NewRemote, RemoteUpdate};
use crate::error::Result;
use crate::transport::{Endpoint, Transport};

/// Endpoints under `/service` that manage daemon nodes.
#[derive(Debug, Clone, Copy)]
pub struct Remotes<'a> {
    transport: &'a Transport,
}

impl<'a> Remotes<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Register a daemon node with the panel.
    #[instrument(skip(self, remote), fields(ip = %remote.ip, port = remote.port))]
    pub async fn add(&self, remote: &NewRemote) -> Result<Value> {
        let endpoint = Endpoint::post(&["service", "remote_service"]).json(json!(remote));
        self.transport.request(endpoint).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, uuid: &str) -> Result<Value> {
        let endpoint = Endpoint::delete(&["service", "remote_service"]).id("uuid", uuid)?;
        self.transport.request(endpoint).await
    }

    /// Change only the fields set in `update`.
    #[instrument(skip(self, update))]
    pub async fn edit(&self, uuid: &str, update: &RemoteUpdate) -> Result<Value> {
        let endpoint = Endpoint::put(&["service", "remote_service"])
            .id("uuid", uuid)?
            .json(json!(update));
        self.transport.request(endpoint).await
    }

    /// Full node records including system and instance info.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Value> {
        self.transport
            .request(Endpoint::get(&["service", "remote_services"]))
            .await
    }

    /// Lightweight node summary.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Value> {
        self.transport
            .request(Endpoint::get(&["service", "remote_services_list"]))
            .await
    }

    /// Ask the panel to reconnect to a node.
    #[instrument(skip(self))]
    pub async fn reconnect(&self, uuid: &str) -> Result<Value> {
        let endpoint = Endpoint::get(&["service", "link_remote_service"]).id("uuid", uuid)?;
        self.transport.request(endpoint).await
    }
}
