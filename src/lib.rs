//! # yaylib
//!
//! A client library for the Yay! social networking API.
//!
//! Each method maps to one REST endpoint. Requests are assembled from typed
//! option structs, signed where the endpoint requires it, and sent through a
//! shared [`client::YayClient`].
//!
//! ## Security
//!
//! - API keys, shared keys and access tokens are redacted in Debug output
//! - Tracing spans skip credentials and request bodies
//! - Error messages are sanitized before they are stored
//!
//! ## Crates
//!
//! - **yaylib-client** - Transport, request signing, error mapping, endpoint invoker
//! - **yaylib-group** - Group (circle) endpoints
//! - **yaylib-post** - Post endpoints
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use yaylib::{Credentials, GroupClient, PostClient, YayClient};
//! use yaylib::post::{PostContent, TimelineOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), yaylib::Error> {
//!     yaylib::init_tracing();
//!
//!     let client = YayClient::new(Credentials::from_env()?)?;
//!     let posts = PostClient::new(client.clone());
//!     let groups = GroupClient::new(client);
//!
//!     posts.create_post(&PostContent::text("hello from Rust")).await?;
//!
//!     for post in posts.get_timeline(&TimelineOptions::default()).await?.posts {
//!         println!("{}: {:?}", post.id, post.text);
//!     }
//!
//!     let quota = groups.get_create_group_quota().await?;
//!     println!("groups left: {:?}", quota.remaining_quota);
//!
//!     Ok(())
//! }
//! ```

pub use yaylib_client as client;
#[cfg(feature = "group")]
pub use yaylib_group as group;
#[cfg(feature = "post")]
pub use yaylib_post as post;

pub use yaylib_client::{
    ClientConfig, Credentials, Error, ErrorKind, Result, YayClient, API_HOST,
};
#[cfg(feature = "group")]
pub use yaylib_group::GroupClient;
#[cfg(feature = "post")]
pub use yaylib_post::PostClient;

/// Install a `tracing` subscriber that honors `RUST_LOG`.
///
/// Defaults to `info` for this library's crates. Does nothing if a global
/// subscriber is already set.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("yaylib=info,yaylib_client=info,yaylib_group=info,yaylib_post=info")
    });
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
