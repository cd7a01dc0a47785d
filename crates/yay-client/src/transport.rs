//! Transport layer: performs the actual HTTP I/O for the invoker.
//!
//! [`HttpTransport`] talks to the network through reqwest.
//! [`RecordingTransport`] answers from a script and records every request,
//! for tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestMethod;
use crate::response::RawResponse;

/// A fully resolved request handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: RequestMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Sends one request and returns the raw response.
///
/// Implementations must not interpret the status code; mapping non-2xx
/// responses to errors is the invoker's job. Errors returned here are
/// reserved for transport failures (timeouts, refused connections).
#[async_trait::async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse>;
}

/// reqwest-backed transport with compression and connection pooling.
#[derive(Clone)]
pub struct HttpTransport {
    inner: reqwest::Client,
    enable_tracing: bool,
    accept_compressed: bool,
    headers: HashMap<String, String>,
    bearer_token: Option<String>,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport from client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_idle_timeout(config.pool_idle_timeout)
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .user_agent(&config.user_agent);

        if config.compression.accept_compressed {
            builder = builder.gzip(true).deflate(true);
        } else {
            builder = builder.gzip(false).deflate(false);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self {
            inner,
            enable_tracing: config.enable_tracing,
            accept_compressed: config.compression.accept_compressed,
            headers: HashMap::new(),
            bearer_token: None,
        })
    }

    /// Create a transport with default configuration.
    pub fn default_transport() -> Result<Self> {
        Self::new(&ClientConfig::default())
    }

    /// Send an `Authorization: Bearer` header with every request.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Send an extra header with every request.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse> {
        let url = if request.query.is_empty() {
            request.url.clone()
        } else {
            format!("{}?{}", request.url, serde_urlencoded::to_string(&request.query)?)
        };
        let mut req = self.inner.request(request.method.to_reqwest(), &url);

        if let Some(ref token) = self.bearer_token {
            req = req.bearer_auth(token);
        }

        for (name, value) in &self.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if self.accept_compressed {
            req = req.header("Accept-Encoding", "gzip, deflate");
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        if self.enable_tracing {
            debug!(method = %request.method, url = %url, "Sending request");
        }

        let response = req.send().await?;
        let status = response.status().as_u16();

        if self.enable_tracing {
            let content_length = response.content_length();
            if response.status().is_success() {
                debug!(status, content_length, "Response received");
            } else {
                info!(status, content_length, "Non-success response");
            }
        }

        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.bytes().await?;

        Ok(RawResponse::new(status, headers, body))
    }
}

/// In-memory transport that replays scripted responses.
///
/// Responses are returned in the order they were queued; once the queue is
/// empty every request gets `200 {"result":"success"}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<RawResponse>>,
    requests: Mutex<Vec<TransportRequest>>,
}

impl RecordingTransport {
    /// Create a transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response.
    pub fn push_response(&self, response: RawResponse) {
        self.lock_responses().push_back(response);
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: Value) {
        self.push_response(RawResponse::from_json(status, &body));
    }

    /// Every request sent so far.
    pub fn requests(&self) -> Vec<TransportRequest> {
        self.lock_requests().clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.lock_requests().last().cloned()
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<RawResponse>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<TransportRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: &TransportRequest) -> Result<RawResponse> {
        self.lock_requests().push(request.clone());
        let response = self
            .lock_responses()
            .pop_front()
            .unwrap_or_else(|| RawResponse::from_json(200, &serde_json::json!({"result": "success"})));
        Ok(response)
    }
}
