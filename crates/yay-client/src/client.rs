//! The endpoint invoker shared by every resource client.
//!
//! `YayClient` turns a [`RequestDescriptor`] into exactly one transport call
//! and parses the result into the shape the caller asks for.
//!
//! ## Security
//!
//! - API key and tokens are redacted in Debug output
//! - Request bodies are skipped in tracing spans

use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::request::{Query, RequestDescriptor};
use crate::response::RawResponse;
use crate::signing::{SignedInfo, Signer};
use crate::transport::{HttpTransport, Transport, TransportRequest};

/// High-level Yay! API client.
///
/// Cloning is cheap; clones share the same transport.
///
/// # Example
///
/// ```rust,ignore
/// use yaylib_client::{Credentials, Query, YayClient};
///
/// let client = YayClient::new(Credentials::from_env()?)?;
///
/// // GET with an undeclared response shape
/// let statuses: serde_json::Value = client
///     .get_json("/v1/groups/joined_statuses", Query::new().list("ids", [1, 2]))
///     .await?;
/// ```
#[derive(Clone)]
pub struct YayClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    device_uuid: String,
    signer: Signer,
}

impl std::fmt::Debug for YayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YayClient")
            .field("base_url", &self.base_url)
            .field("device_uuid", &self.device_uuid)
            .field("signer", &self.signer)
            .field("transport", &self.transport)
            .finish()
    }
}

impl YayClient {
    /// Create a client against the default host.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom configuration and the reqwest transport.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let mut transport = HttpTransport::new(&config)?;
        if let Some(token) = credentials.access_token() {
            transport = transport.with_bearer_token(token);
        }
        Self::with_transport(credentials, config.base_url, Arc::new(transport))
    }

    /// Create a client over an injected transport.
    pub fn with_transport(
        credentials: Credentials,
        base_url: impl Into<String>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        url::Url::parse(&base_url)?;

        let mut signer = Signer::new(credentials.api_key());
        if let Some(shared_key) = credentials.shared_key() {
            signer = signer.with_shared_key(shared_key);
        }

        Ok(Self {
            transport,
            base_url,
            device_uuid: credentials.device_uuid().to_string(),
            signer,
        })
    }

    /// Get the API host.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the device UUID used for signing.
    pub fn device_uuid(&self) -> &str {
        &self.device_uuid
    }

    /// Get the request signer.
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Build the full URL for a versioned path.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Sign the current wall-clock second for this device.
    ///
    /// The clock is read once, so the returned `timestamp` is always the
    /// value that was signed. Group endpoints pass `with_shared_key = true`.
    pub fn signed_info(&self, with_shared_key: bool) -> Result<SignedInfo> {
        let timestamp = chrono::Utc::now().timestamp();
        self.signer.signed_info(&self.device_uuid, timestamp, with_shared_key)
    }

    /// Issue one request and fail on non-2xx.
    #[instrument(skip(self, request), fields(method = %request.method(), path = %request.path()))]
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<RawResponse> {
        let transport_request = TransportRequest {
            method: request.method(),
            url: self.url(request.path()),
            query: request.query_params().pairs().to_vec(),
            body: request.body().cloned(),
        };

        let response = self.transport.send(&transport_request).await?;
        debug!(status = response.status(), "Transport returned");
        response.error_for_status()
    }

    /// Issue one request and parse the body into `T`.
    pub async fn invoke<T: DeserializeOwned>(&self, request: RequestDescriptor) -> Result<T> {
        let response = self.execute(&request).await?;
        response.json()
    }

    /// Issue one request whose response shape is not declared.
    pub async fn invoke_value(&self, request: RequestDescriptor) -> Result<Value> {
        self.invoke(request).await
    }

    /// GET request with JSON response deserialization.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str, query: Query) -> Result<T> {
        self.invoke(RequestDescriptor::get(path).query(query)).await
    }

    /// POST request with JSON body and response.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.invoke(RequestDescriptor::post(path).json(body)?).await
    }

    /// PUT request with JSON body and response.
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.invoke(RequestDescriptor::put(path).json(body)?).await
    }

    /// DELETE request with JSON body and response.
    pub async fn delete_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.invoke(RequestDescriptor::delete(path).json(body)?).await
    }
}
