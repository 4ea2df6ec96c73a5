//! Authenticated HTTP transport for the panel API.
//!
//! # Responsibilities
//! - Own the HTTP session and the API root (`<origin>/api`)
//! - Inject the `apikey` query parameter into every request
//! - Classify non-200 responses and negotiate success bodies
//! - Release the session exactly once

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use arc_swap::{ArcSwap, ArcSwapOption};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::api::{Instances, Panel, Remotes, Users};
use crate::config::ClientConfig;
use crate::error::{McsmError, Result};
use crate::observability::metrics;
use crate::transport::endpoint::{Body, Endpoint};
use crate::transport::negotiate::decode_body;

/// Shared, authenticated session against one panel.
///
/// Facades borrow a `Transport`; they never own or close it. The key lives
/// behind an [`ArcSwap`] so a rotation is seen by every facade at once.
pub struct Transport {
    api_root: Url,
    api_key: ArcSwap<String>,
    session: ArcSwapOption<reqwest::Client>,
}

impl Transport {
    /// Open a transport for `origin` authenticated with `api_key`.
    pub fn new(origin: &str, api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(origin, api_key))
    }

    /// Open a transport from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::build(
            &config.origin,
            config.api_key.clone(),
            &config.user_agent,
            config.system_proxy,
        )
    }

    fn build(origin: &str, api_key: String, user_agent: &str, system_proxy: bool) -> Result<Self> {
        let api_root = api_root(origin)?;
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if !system_proxy {
            builder = builder.no_proxy();
        }
        let session = builder.build()?;

        info!(api_root = %api_root, "Panel transport opened");

        Ok(Self {
            api_root,
            api_key: ArcSwap::from_pointee(api_key),
            session: ArcSwapOption::from_pointee(session),
        })
    }

    /// Run `body` with a fresh transport and close it afterwards.
    ///
    /// The session is released whether `body` succeeds or fails. A handle
    /// that escapes the body observes a closed session.
    pub async fn scoped<F, Fut, T>(origin: &str, api_key: impl Into<String>, body: F) -> Result<T>
    where
        F: FnOnce(Arc<Transport>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        Self::scoped_with(&ClientConfig::new(origin, api_key), body).await
    }

    /// [`Transport::scoped`] with a full configuration.
    pub async fn scoped_with<F, Fut, T>(config: &ClientConfig, body: F) -> Result<T>
    where
        F: FnOnce(Arc<Transport>) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let transport = Arc::new(Transport::from_config(config)?);
        let result = body(Arc::clone(&transport)).await;
        transport.close();
        result
    }

    /// The `<origin>/api` prefix shared by every endpoint.
    pub fn api_root(&self) -> &Url {
        &self.api_root
    }

    /// Current API key.
    pub fn api_key(&self) -> Arc<String> {
        self.api_key.load_full()
    }

    /// Replace the API key for all subsequent requests.
    pub fn rotate_key(&self, api_key: impl Into<String>) {
        self.api_key.store(Arc::new(api_key.into()));
        info!(api_root = %self.api_root, "API key rotated");
    }

    pub fn is_open(&self) -> bool {
        self.session.load().is_some()
    }

    /// Release the session. Returns `true` only for the call that released it.
    pub fn close(&self) -> bool {
        let released = self.session.swap(None).is_some();
        if released {
            info!(api_root = %self.api_root, "Panel transport closed");
        }
        released
    }

    /// Resolve the full request URL, `apikey` first.
    pub fn url_for(&self, endpoint: &Endpoint) -> Result<Url> {
        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|_| McsmError::InvalidInput(format!("cannot extend {}", self.api_root)))?
            .extend(endpoint.segments.iter().copied());

        let api_key = self.api_key.load();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", api_key.as_str());
            for (key, value) in &endpoint.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Perform one exchange with the panel.
    ///
    /// Returns the decoded body on HTTP 200 and [`McsmError::Status`] on any
    /// other status without reading the body.
    #[instrument(skip(self, endpoint), fields(method = %endpoint.method, path = %endpoint.path()))]
    pub async fn request(&self, endpoint: Endpoint) -> Result<Value> {
        let session = self.session.load_full().ok_or(McsmError::SessionClosed)?;
        let url = self.url_for(&endpoint)?;

        let builder = session.request(endpoint.method.clone(), url);
        let builder = match &endpoint.body {
            Body::None => builder,
            Body::Json(value) => builder.json(value),
            Body::Form(pairs) => builder.form(pairs),
        };

        let started = Instant::now();
        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                metrics::record_request(endpoint.method.as_str(), None, started.elapsed());
                warn!(error = %e, "Panel request failed");
                return Err(e.into());
            }
        };

        let status = response.status();
        metrics::record_request(
            endpoint.method.as_str(),
            Some(status.as_u16()),
            started.elapsed(),
        );

        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "Panel returned non-success status");
            return Err(McsmError::Status {
                status: status.as_u16(),
            });
        }

        let header = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let text = response.text().await?;
        debug!(bytes = text.len(), "Panel response received");

        decode_body(&text, header.as_deref(), endpoint.expect)
    }

    pub fn panel(&self) -> Panel<'_> {
        Panel::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn remotes(&self) -> Remotes<'_> {
        Remotes::new(self)
    }

    pub fn instances(&self) -> Instances<'_> {
        Instances::new(self)
    }
}

impl Drop for Transport {
    fn drop(&mut self) {
        self.close();
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("api_root", &self.api_root.as_str())
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}

/// Append `/api` to the origin.
fn api_root(origin: &str) -> Result<Url> {
    let mut url = Url::parse(origin)?;
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| McsmError::InvalidInput(format!("origin '{}' cannot be a base url", origin)))?
        .pop_if_empty()
        .push("api");
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_root_appends_api() {
        assert_eq!(
            api_root("http://localhost:23333").unwrap().as_str(),
            "http://localhost:23333/api"
        );
        assert_eq!(
            api_root("http://localhost:23333/").unwrap().as_str(),
            "http://localhost:23333/api"
        );
        assert_eq!(
            api_root("https://example.com/panel").unwrap().as_str(),
            "https://example.com/panel/api"
        );
    }

    #[test]
    fn test_api_root_rejects_bad_origin() {
        assert!(matches!(api_root("not a url"), Err(McsmError::InvalidUrl(_))));
        assert!(matches!(
            api_root("mailto:admin@example.com"),
            Err(McsmError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_overview_url() {
        let transport = Transport::new("http://localhost:23333", "k").unwrap();
        let url = transport.url_for(&Endpoint::get(&["overview"])).unwrap();
        assert_eq!(url.as_str(), "http://localhost:23333/api/overview?apikey=k");
    }

    #[test]
    fn test_query_follows_apikey_in_order() {
        let transport = Transport::new("http://localhost:23333", "k").unwrap();
        let endpoint = Endpoint::get(&["protected_instance", "command"])
            .query("uuid", "a1")
            .query("remote_uuid", "r1")
            .query("command", "say hi");
        let url = transport.url_for(&endpoint).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:23333/api/protected_instance/command?apikey=k&uuid=a1&remote_uuid=r1&command=say+hi"
        );
    }

    #[test]
    fn test_rotated_key_used_for_next_url() {
        let transport = Transport::new("http://localhost:23333", "old").unwrap();
        transport.rotate_key("new");
        let url = transport.url_for(&Endpoint::get(&["overview"])).unwrap();
        assert_eq!(url.query(), Some("apikey=new"));
        assert_eq!(transport.api_key().as_str(), "new");
    }

    #[test]
    fn test_close_is_idempotent() {
        let transport = Transport::new("http://localhost:23333", "k").unwrap();
        assert!(transport.is_open());
        assert!(transport.close());
        assert!(!transport.close());
        assert!(!transport.is_open());
    }

    #[tokio::test]
    async fn test_request_after_close_is_usage_error() {
        let transport = Transport::new("http://localhost:23333", "k").unwrap();
        transport.close();
        let err = transport.request(Endpoint::get(&["overview"])).await.unwrap_err();
        assert!(matches!(err, McsmError::SessionClosed));
    }

    #[test]
    fn test_debug_hides_key() {
        let transport = Transport::new("http://localhost:23333", "secret-key").unwrap();
        let rendered = format!("{:?}", transport);
        assert!(rendered.contains("localhost:23333"));
        assert!(!rendered.contains("secret-key"));
    }
}
