//! Panel-wide settings and status.

use serde_json::Value;
use tracing::instrument;

use crate::error::Result;
use crate::transport::{ContentType, Endpoint, Transport};

/// Overview and settings endpoints.
#[derive(Debug, Clone, Copy)]
pub struct Panel<'a> {
    transport: &'a Transport,
}

impl<'a> Panel<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// `GET /overview`
    #[instrument(skip(self))]
    pub async fn overview(&self) -> Result<Value> {
        self.transport.request(Endpoint::get(&["overview"])).await
    }

    /// `GET /service/remote_services_system`
    #[instrument(skip(self))]
    pub async fn remote_services_system(&self) -> Result<Value> {
        self.transport
            .request(Endpoint::get(&["service", "remote_services_system"]))
            .await
    }

    /// `GET /overview/setting`
    #[instrument(skip(self))]
    pub async fn overview_setting(&self) -> Result<Value> {
        self.transport
            .request(Endpoint::get(&["overview", "setting"]))
            .await
    }

    /// `PUT /overview/setting` with a form body.
    ///
    /// The panel answers this one in `text/plain`.
    #[instrument(skip(self, settings))]
    pub async fn update_overview_setting(&self, settings: &Value) -> Result<Value> {
        let endpoint = Endpoint::put(&["overview", "setting"])
            .form(settings)?
            .expect(ContentType::PlainText);
        self.transport.request(endpoint).await
    }
}
