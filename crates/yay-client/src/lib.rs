//! # yay-client
//!
//! Core HTTP client infrastructure for the Yay! API.
//!
//! This crate provides the foundation the resource crates build on:
//! - A pluggable [`Transport`] with a reqwest-backed implementation
//! - Request descriptors that omit unset optional parameters
//! - Request signing (`signed_info`) for endpoints that require proof of origin
//! - Mapping of HTTP failures to categorized errors
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (yay-group, yay-post)                                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        YayClient                            │
//! │  - Holds credentials + signer + transport                   │
//! │  - Provides typed JSON methods (get_json, post_json, etc.)  │
//! │  - Maps non-2xx responses to error kinds                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 Transport (HttpTransport)                   │
//! │  - Raw HTTP with compression and timeouts                   │
//! │  - Returns status, headers and body                         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use yaylib_client::{Credentials, Query, YayClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), yaylib_client::Error> {
//!     let creds = Credentials::from_env()?;
//!     let client = YayClient::new(creds)?;
//!
//!     let quota: serde_json::Value = client
//!         .get_json("/v1/groups/created_quota", Query::new())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod credentials;
mod error;
mod request;
mod response;
mod signing;
mod transport;
mod types;

pub use client::YayClient;
pub use config::{ClientConfig, ClientConfigBuilder, CompressionConfig};
pub use credentials::Credentials;
pub use error::{Error, ErrorKind, Result};
pub use request::{encode_path_segment, Query, RequestDescriptor, RequestMethod};
pub use response::RawResponse;
pub use signing::{SignedInfo, Signer};
pub use transport::{HttpTransport, RecordingTransport, Transport, TransportRequest};
pub use types::{ApiResult, User};

/// Default Yay! API host.
pub const API_HOST: &str = "https://api.yay.space";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("yaylib/", env!("CARGO_PKG_VERSION"));
