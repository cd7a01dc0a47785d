//! Yay! group API client.
//!
//! This client wraps `YayClient` from `yay-client` and provides typed
//! methods for every group endpoint.

use serde::Serialize;
use serde_json::Value;
use yaylib_client::{ClientConfig, Credentials, Error, Result, YayClient};

mod discovery;
mod membership;
mod moderation;
mod related;
mod settings;

/// Yay! group API client.
///
/// # Example
///
/// ```rust,ignore
/// use yaylib_group::{GetGroupsOptions, GroupClient};
///
/// let client = GroupClient::from_credentials(credentials)?;
///
/// let groups = client
///     .get_groups(&GetGroupsOptions {
///         keyword: Some("rust".into()),
///         ..Default::default()
///     })
///     .await?;
///
/// client.join_group(groups.groups[0].id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct GroupClient {
    client: YayClient,
}

impl GroupClient {
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

    /// Serialize `body` and attach freshly generated signing fields.
    ///
    /// Group signatures include the shared key when one is configured.
    fn signed_body<B: Serialize + ?Sized>(&self, body: &B) -> Result<Value> {
        let info = self.client.signed_info(true)?;
        Ok(info.attach(serde_json::to_value(body)?))
    }
}

fn require_ids(ids: &[i64], what: &str) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::invalid_argument(format!("{what} must not be empty")));
    }
    Ok(())
}
