//! Device credentials consumed by the signer and the transport.
//!
//! Sensitive fields are redacted in Debug output.

use crate::error::{Error, ErrorKind, Result};

/// Read-only identity of one client installation.
///
/// `api_key` and `device_uuid` feed the request signer; `access_token`, when
/// present, is sent as a bearer token by [`crate::HttpTransport`].
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    device_uuid: String,
    shared_key: Option<String>,
    access_token: Option<String>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("device_uuid", &self.device_uuid)
            .field("shared_key", &self.shared_key.as_ref().map(|_| "[REDACTED]"))
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Credentials {
    /// Create credentials from an API key and device UUID.
    pub fn new(api_key: impl Into<String>, device_uuid: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            device_uuid: device_uuid.into(),
            shared_key: None,
            access_token: None,
        }
    }

    /// Shared key appended to group endpoint signatures.
    pub fn with_shared_key(mut self, shared_key: impl Into<String>) -> Self {
        self.shared_key = Some(shared_key.into());
        self
    }

    /// Attach an access token for the transport's Authorization header.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Load credentials from environment variables.
    ///
    /// Reads `YAY_API_KEY` and `YAY_DEVICE_UUID` (required) and
    /// `YAY_SHARED_KEY` and `YAY_ACCESS_TOKEN` (optional).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("YAY_API_KEY")
            .map_err(|_| Error::new(ErrorKind::Config("YAY_API_KEY is not set".to_string())))?;

        let device_uuid = std::env::var("YAY_DEVICE_UUID").map_err(|_| {
            Error::new(ErrorKind::Config("YAY_DEVICE_UUID is not set".to_string()))
        })?;

        let mut creds = Self::new(api_key, device_uuid);
        if let Ok(shared_key) = std::env::var("YAY_SHARED_KEY") {
            creds = creds.with_shared_key(shared_key);
        }
        if let Ok(token) = std::env::var("YAY_ACCESS_TOKEN") {
            creds = creds.with_access_token(token);
        }

        Ok(creds)
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the device UUID.
    pub fn device_uuid(&self) -> &str {
        &self.device_uuid
    }

    /// Get the shared key if configured.
    pub fn shared_key(&self) -> Option<&str> {
        self.shared_key.as_deref()
    }

    /// Get the access token if configured.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    /// Returns true if the credentials appear to be usable for signing.
    pub fn is_valid(&self) -> bool {
        !self.api_key.is_empty() && !self.device_uuid.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_accessors() {
        let creds = Credentials::new("key", "device-1")
            .with_shared_key("shared")
            .with_access_token("token");

        assert_eq!(creds.api_key(), "key");
        assert_eq!(creds.device_uuid(), "device-1");
        assert_eq!(creds.shared_key(), Some("shared"));
        assert_eq!(creds.access_token(), Some("token"));
        assert!(creds.is_valid());
        assert!(!Credentials::new("key", "").is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let creds = Credentials::new("super-secret-key", "device-1")
            .with_access_token("secret-token-value");
        let debug = format!("{:?}", creds);

        assert!(debug.contains("[REDACTED]"));
        assert!(debug.contains("device-1"));
        assert!(!debug.contains("super-secret-key"));
        assert!(!debug.contains("secret-token-value"));
    }
}
