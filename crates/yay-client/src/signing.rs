//! Request signing for endpoints that require proof of origin.
//!
//! The signature is the lowercase hex MD5 digest of
//! `api_key + device_id + timestamp`. Group endpoints additionally append the
//! shared key; post endpoints never do.

use md5::{Digest, Md5};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Produces `signed_info` values from fixed key material.
#[derive(Clone)]
pub struct Signer {
    api_key: String,
    shared_key: Option<String>,
}

impl std::fmt::Debug for Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signer")
            .field("api_key", &"[REDACTED]")
            .field("shared_key", &self.shared_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Signer {
    /// Create a signer for the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            shared_key: None,
        }
    }

    /// Shared key used by [`Signer::sign_with_shared_key`].
    pub fn with_shared_key(mut self, shared_key: impl Into<String>) -> Self {
        self.shared_key = Some(shared_key.into());
        self
    }

    /// The API key sent alongside the signature.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a device identifier and Unix timestamp (seconds).
    pub fn sign(&self, device_id: &str, timestamp: i64) -> Result<String> {
        self.digest(device_id, timestamp, false)
    }

    /// Like [`Signer::sign`], with the shared key appended when one is set.
    pub fn sign_with_shared_key(&self, device_id: &str, timestamp: i64) -> Result<String> {
        self.digest(device_id, timestamp, true)
    }

    fn digest(&self, device_id: &str, timestamp: i64, with_shared_key: bool) -> Result<String> {
        if device_id.is_empty() {
            return Err(Error::invalid_argument("device id must not be empty"));
        }

        let mut hasher = Md5::new();
        hasher.update(self.api_key.as_bytes());
        hasher.update(device_id.as_bytes());
        hasher.update(timestamp.to_string().as_bytes());
        if with_shared_key {
            if let Some(ref shared_key) = self.shared_key {
                hasher.update(shared_key.as_bytes());
            }
        }
        Ok(hex::encode(hasher.finalize()))
    }

    /// Build the four signing fields for one request attempt.
    pub fn signed_info(
        &self,
        device_id: &str,
        timestamp: i64,
        with_shared_key: bool,
    ) -> Result<SignedInfo> {
        let signed_info = self.digest(device_id, timestamp, with_shared_key)?;
        Ok(SignedInfo {
            api_key: self.api_key.clone(),
            timestamp,
            uuid: device_id.to_string(),
            signed_info,
        })
    }
}

/// Signing fields attached to a mutating request body.
///
/// `timestamp` is the exact value that was signed; regenerate the whole
/// struct when retrying rather than updating the timestamp alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignedInfo {
    pub api_key: String,
    pub timestamp: i64,
    pub uuid: String,
    pub signed_info: String,
}

impl SignedInfo {
    /// Merge the signing fields into a JSON object body.
    ///
    /// Non-object bodies are replaced by an object holding only the signing
    /// fields.
    pub fn attach(&self, body: Value) -> Value {
        let mut map = match body {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        map.insert("api_key".into(), Value::String(self.api_key.clone()));
        map.insert("timestamp".into(), Value::from(self.timestamp));
        map.insert("uuid".into(), Value::String(self.uuid.clone()));
        map.insert("signed_info".into(), Value::String(self.signed_info.clone()));
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sign_is_deterministic() {
        let signer = Signer::new("api-key");
        let a = signer.sign("device-1", 1_700_000_000).unwrap();
        let b = signer.sign("device-1", 1_700_000_000).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_sign_changes_with_inputs() {
        let signer = Signer::new("api-key");
        let base = signer.sign("device-1", 1_700_000_000).unwrap();
        assert_ne!(base, signer.sign("device-2", 1_700_000_000).unwrap());
        assert_ne!(base, signer.sign("device-1", 1_700_000_001).unwrap());
        assert_ne!(base, Signer::new("other-key").sign("device-1", 1_700_000_000).unwrap());
    }

    #[test]
    fn test_shared_key_only_on_request() {
        let plain = Signer::new("api-key");
        let shared = Signer::new("api-key").with_shared_key("shared");

        let base = plain.sign("device-1", 1_700_000_000).unwrap();
        assert_eq!(shared.sign("device-1", 1_700_000_000).unwrap(), base);
        assert_ne!(
            shared.sign_with_shared_key("device-1", 1_700_000_000).unwrap(),
            base
        );
        // Without a configured key both forms agree.
        assert_eq!(
            plain.sign_with_shared_key("device-1", 1_700_000_000).unwrap(),
            base
        );
    }

    #[test]
    fn test_sign_matches_known_digest() {
        // RFC 1321 test vector, split across key, device id and timestamp.
        let api_key = format!("{}1234567", "1234567890".repeat(7));
        let signer = Signer::new(api_key);
        assert_eq!(
            signer.sign("8", 90).unwrap(),
            "57edf4a22be3c955ac49da2e2107b67a"
        );
    }

    #[test]
    fn test_sign_rejects_empty_device_id() {
        let err = Signer::new("api-key").sign("", 1).unwrap_err();
        assert!(matches!(err.kind, crate::ErrorKind::InvalidArgument(_)));
    }

    #[test]
    fn test_signed_info_fields() {
        let signer = Signer::new("api-key");
        let info = signer.signed_info("device-1", 1_700_000_000, false).unwrap();
        assert_eq!(info.api_key, "api-key");
        assert_eq!(info.timestamp, 1_700_000_000);
        assert_eq!(info.uuid, "device-1");
        assert_eq!(info.signed_info, signer.sign("device-1", 1_700_000_000).unwrap());
    }

    #[test]
    fn test_attach_merges_into_body() {
        let info = Signer::new("k").signed_info("d", 5, false).unwrap();
        let body = info.attach(json!({"user_id": 9}));

        assert_eq!(body["user_id"], 9);
        assert_eq!(body["api_key"], "k");
        assert_eq!(body["timestamp"], 5);
        assert_eq!(body["uuid"], "d");
        assert_eq!(body["signed_info"], info.signed_info);
    }

    #[test]
    fn test_debug_redacts_keys() {
        let debug = format!("{:?}", Signer::new("secret-api-key"));
        assert!(!debug.contains("secret-api-key"));
    }
}
