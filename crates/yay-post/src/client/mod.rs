//! Yay! post API client.
//!
//! This client wraps `YayClient` from `yay-client` and provides typed
//! methods for post creation, timelines, curation and engagement.

use serde_json::{Map, Value};
use yaylib_client::{ClientConfig, Credentials, Error, Result, YayClient};

mod create;
mod curation;
mod engagement;
mod lookup;
mod timeline;

/// Yay! post API client.
///
/// # Example
///
/// ```rust,ignore
/// use yaylib_post::{PostClient, PostContent, TimelineOptions};
///
/// let client = PostClient::from_credentials(credentials)?;
///
/// let post = client
///     .create_post(&PostContent::text("hello").shared_url("https://www.rust-lang.org"))
///     .await?;
///
/// let timeline = client.get_timeline(&TimelineOptions::default()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PostClient {
    client: YayClient,
}

impl PostClient {
    /// Wrap an existing invoker.
    pub fn new(client: YayClient) -> Self {
        Self { client }
    }

    /// Create a client against the default host.
    pub fn from_credentials(credentials: Credentials) -> Result<Self> {
        Ok(Self::new(YayClient::new(credentials)?))
    }

    /// Create a client with custom HTTP configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Ok(Self::new(YayClient::with_config(credentials, config)?))
    }

    /// Get the underlying invoker.
    pub fn inner(&self) -> &YayClient {
        &self.client
    }

    /// Attach freshly generated signing fields to a body.
    fn signed(&self, body: Map<String, Value>) -> Result<Value> {
        let info = self.client.signed_info(false)?;
        Ok(info.attach(Value::Object(body)))
    }
}

fn require_ids(ids: &[i64], what: &str) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::invalid_argument(format!("{what} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use yaylib_client::{ClientConfig, Credentials, RecordingTransport, YayClient};

    use super::PostClient;

    pub fn recording_client() -> (PostClient, Arc<RecordingTransport>) {
        let transport = Arc::new(RecordingTransport::new());
        let client = YayClient::with_transport(
            Credentials::new("test-api-key", "test-device").with_shared_key("test-shared-key"),
            "https://api.test",
            transport.clone(),
        )
        .unwrap();
        (PostClient::new(client), transport)
    }

    pub fn mock_client(uri: String) -> PostClient {
        PostClient::with_config(
            Credentials::new("test-api-key", "test-device"),
            ClientConfig::builder().with_base_url(uri).build(),
        )
        .unwrap()
    }
}
