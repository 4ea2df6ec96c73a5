//! Managed instances hosted on daemon nodes.
//!
//! Every call is scoped by `remote_uuid`, the node the instance lives on.
//! Instance configuration payloads are passed through as-is; their shape is
//! owned by the panel.

use serde_json::{json, Value};
use tracing::instrument;

use crate::api::types::{DeleteInstances, Pagination};
use crate::error::Result;
use crate::transport::{Endpoint, Transport};

/// Lifecycle actions under `/protected_instance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceAction {
    Open,
    Stop,
    Kill,
    Restart,
}

impl InstanceAction {
    pub fn segment(&self) -> &'static str {
        match self {
            InstanceAction::Open => "open",
            InstanceAction::Stop => "stop",
            InstanceAction::Kill => "kill",
            InstanceAction::Restart => "restart",
        }
    }
}

/// Endpoints under `/instance` and `/protected_instance`.
#[derive(Debug, Clone, Copy)]
pub struct Instances<'a> {
    transport: &'a Transport,
}

impl<'a> Instances<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Endpoint addressing one instance on one node.
    fn targeted(endpoint: Endpoint, uuid: &str, remote_uuid: &str) -> Result<Endpoint> {
        endpoint.id("uuid", uuid)?.id("remote_uuid", remote_uuid)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, uuid: &str, remote_uuid: &str) -> Result<Value> {
        let endpoint = Self::targeted(Endpoint::get(&["instance"]), uuid, remote_uuid)?;
        self.transport.request(endpoint).await
    }

    #[instrument(skip(self))]
    pub async fn search(
        &self,
        remote_uuid: &str,
        instance_name: &str,
        pagination: Option<Pagination>,
    ) -> Result<Value> {
        let page = pagination.unwrap_or_default();
        let endpoint = Endpoint::get(&["service", "remote_service_instances"])
            .id("remote_uuid", remote_uuid)?
            .query("instance_name", instance_name)
            .query("page", page.page)
            .query("page_size", page.page_size);
        self.transport.request(endpoint).await
    }

    /// Create an instance on `remote_uuid` from a panel instance config.
    #[instrument(skip(self, config))]
    pub async fn create(&self, remote_uuid: &str, config: &Value) -> Result<Value> {
        let endpoint = Endpoint::post(&["instance"])
            .id("remote_uuid", remote_uuid)?
            .json(config.clone());
        self.transport.request(endpoint).await
    }

    #[instrument(skip(self, config))]
    pub async fn edit(&self, uuid: &str, remote_uuid: &str, config: &Value) -> Result<Value> {
        let endpoint = Self::targeted(Endpoint::put(&["instance"]), uuid, remote_uuid)?
            .json(config.clone());
        self.transport.request(endpoint).await
    }

    /// Delete instances on one node, optionally with their files.
    #[instrument(skip(self, request), fields(count = request.uuids.len(), delete_file = request.delete_file))]
    pub async fn delete(&self, remote_uuid: &str, request: &DeleteInstances) -> Result<Value> {
        request.uuids.validate("instance uuids")?;
        let endpoint = Endpoint::delete(&["instance"])
            .id("remote_uuid", remote_uuid)?
            .json(json!(request));
        self.transport.request(endpoint).await
    }

    /// Run a lifecycle action against an instance.
    #[instrument(skip(self))]
    pub async fn action(&self, action: InstanceAction, uuid: &str, remote_uuid: &str) -> Result<Value> {
        let endpoint = Self::targeted(
            Endpoint::get(&["protected_instance", action.segment()]),
            uuid,
            remote_uuid,
        )?;
        self.transport.request(endpoint).await
    }

    pub async fn open(&self, uuid: &str, remote_uuid: &str) -> Result<Value> {
        self.action(InstanceAction::Open, uuid, remote_uuid).await
    }

    pub async fn stop(&self, uuid: &str, remote_uuid: &str) -> Result<Value> {
        self.action(InstanceAction::Stop, uuid, remote_uuid).await
    }

    pub async fn kill(&self, uuid: &str, remote_uuid: &str) -> Result<Value> {
        self.action(InstanceAction::Kill, uuid, remote_uuid).await
    }

    pub async fn restart(&self, uuid: &str, remote_uuid: &str) -> Result<Value> {
        self.action(InstanceAction::Restart, uuid, remote_uuid).await
    }

    /// Send a console command to a running instance.
    #[instrument(skip(self, command))]
    pub async fn command(&self, uuid: &str, remote_uuid: &str, command: &str) -> Result<Value> {
        let endpoint = Self::targeted(
            Endpoint::get(&["protected_instance", "command"]),
            uuid,
            remote_uuid,
        )?
        .query("command", command);
        self.transport.request(endpoint).await
    }

    /// Recent console output.
    #[instrument(skip(self))]
    pub async fn output_log(&self, uuid: &str, remote_uuid: &str) -> Result<Value> {
        let endpoint = Self::targeted(
            Endpoint::get(&["protected_instance", "outputlog"]),
            uuid,
            remote_uuid,
        )?;
        self.transport.request(endpoint).await
    }

    /// Check which of `files` exist in the instance's working directory.
    ///
    /// The panel reads the list from a JSON body on a GET request.
    #[instrument(skip(self, files), fields(count = files.len()))]
    pub async fn files_exist(&self, uuid: &str, remote_uuid: &str, files: &[String]) -> Result<Value> {
        let endpoint = Self::targeted(
            Endpoint::get(&["protected_instance", "process_config", "list"]),
            uuid,
            remote_uuid,
        )?
        .json(json!({ "files": files }));
        self.transport.request(endpoint).await
    }
}
