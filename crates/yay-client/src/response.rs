//! Raw transport responses and mapping of failures to error kinds.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

use crate::error::{Error, ErrorKind, Result};

/// Status, headers and body as returned by a [`crate::Transport`].
#[derive(Debug, Clone)]
pub struct RawResponse {
    status: u16,
    headers: HashMap<String, String>,
    body: Bytes,
}

impl RawResponse {
    /// Create a response. Header names are normalized to lowercase.
    pub fn new(status: u16, headers: HashMap<String, String>, body: impl Into<Bytes>) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Response with a JSON body and no headers.
    pub fn from_json(status: u16, body: &serde_json::Value) -> Self {
        Self::new(status, HashMap::new(), body.to_string())
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Returns true if the response status is successful (2xx).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_lowercase()).map(|s| s.as_str())
    }

    /// Get the Retry-After header as a Duration.
    pub fn retry_after(&self) -> Option<Duration> {
        self.header("retry-after")?
            .parse::<u64>()
            .ok()
            .map(Duration::from_secs)
    }

    /// Raw body bytes.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body decoded as UTF-8 (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body. An empty body is treated as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_str("null")?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Pass 2xx responses through; convert everything else into an error.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }
        Err(parse_error_response(&self))
    }
}

/// Structured error payload returned by the API.
#[derive(Debug, serde::Deserialize)]
struct ApiErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_code: Option<i64>,
}

/// Map a non-2xx response to an error kind, keeping the remote message.
fn parse_error_response(response: &RawResponse) -> Error {
    let status = response.status();

    if status == 429 {
        return Error::new(ErrorKind::RateLimited {
            retry_after: response.retry_after(),
        });
    }

    let body = response.text();
    let (message, error_code) = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(err) => (
            err.message.unwrap_or_else(|| default_message(status)),
            err.error_code,
        ),
        Err(_) if body.trim().is_empty() => (default_message(status), None),
        Err(_) => (body, None),
    };
    let message = sanitize_error_message(&message);

    let kind = match status {
        401 => ErrorKind::Authentication(message),
        403 => ErrorKind::Forbidden(message),
        404 => ErrorKind::NotFound(message),
        _ => ErrorKind::Remote {
            status,
            error_code,
            message,
        },
    };

    Error::new(kind)
}

fn default_message(status: u16) -> String {
    format!("HTTP {}", status)
}

/// Sanitize an error message to prevent exposing sensitive data.
///
/// Bearer tokens and `api_key`/`signed_info` values are redacted and
/// messages longer than 500 characters are truncated.
fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = message.to_string();

    if let Ok(bearer) = regex_lite::Regex::new(r"Bearer\s+[A-Za-z0-9._\-]+") {
        sanitized = bearer
            .replace_all(&sanitized, "Bearer [REDACTED_TOKEN]")
            .to_string();
    }

    if let Ok(secret) = regex_lite::Regex::new(r"(api_key|signed_info|access_token)=[A-Za-z0-9._\-]+") {
        sanitized = secret.replace_all(&sanitized, "$1=[REDACTED]").to_string();
    }

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}
