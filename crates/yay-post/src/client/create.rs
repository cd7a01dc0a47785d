//! Creating and editing posts.
//!
//! New posts, reposts and thread posts share [`PostContent`]. When the
//! content carries a shared URL it is first resolved to link metadata; if the
//! lookup is refused with 403 the post goes out without the link.

use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};
use yaylib_client::{Error, ErrorKind, Query, RequestDescriptor, Result};

use crate::content::PostContent;
use crate::options::{CallPostOptions, SharePostOptions, UpdatePostOptions};
use crate::types::{ConferenceCall, CreatePostResponse, Post, SharedUrl};

impl super::PostClient {
    /// Publish a new post.
    ///
    /// `font_size` and `color` default to `0` when unset.
    #[instrument(skip(self, content))]
    pub async fn create_post(&self, content: &PostContent) -> Result<Post> {
        let mut body = self.content_body(content).await?;
        body.entry("font_size").or_insert(Value::from(0));
        body.entry("color").or_insert(Value::from(0));

        self.client
            .invoke(RequestDescriptor::post("/v3/posts/new").json_value(Value::Object(body)))
            .await
    }

    /// Repost `post_id`, optionally with a comment.
    #[instrument(skip(self, content))]
    pub async fn create_repost(&self, post_id: i64, content: &PostContent) -> Result<Post> {
        let mut body = self.content_body(content).await?;
        body.insert("post_id".into(), Value::from(post_id));

        let response: CreatePostResponse = self
            .client
            .invoke(RequestDescriptor::post("/v3/posts/repost").json_value(Value::Object(body)))
            .await?;
        response
            .post
            .ok_or_else(|| missing_field("post"))
    }

    /// Post into the thread rooted at `post_id`.
    #[instrument(skip(self, content))]
    pub async fn create_thread_post(&self, post_id: i64, content: &PostContent) -> Result<Post> {
        let mut body = self.content_body(content).await?;
        body.insert("id".into(), Value::from(post_id));

        self.client
            .invoke(
                RequestDescriptor::post(format!("/v1/threads/{post_id}/posts"))
                    .json_value(Value::Object(body)),
            )
            .await
    }

    /// Start a conference call post. Signed.
    #[instrument(skip(self, options))]
    pub async fn create_call_post(&self, options: &CallPostOptions) -> Result<ConferenceCall> {
        let body = self.signed(options.to_body()?)?;
        let response: CreatePostResponse = self
            .client
            .invoke(RequestDescriptor::post("/v2/posts/new_conference_call").json_value(body))
            .await?;
        response
            .conference_call
            .ok_or_else(|| missing_field("conference_call"))
    }

    /// Share a group or other shareable object as a post. Signed.
    #[instrument(skip(self, options), fields(shareable_type = %options.shareable_type))]
    pub async fn create_share_post(&self, options: &SharePostOptions) -> Result<Post> {
        let body = match serde_json::to_value(options)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let body = self.signed(body)?;
        self.client
            .invoke(RequestDescriptor::post("/v2/posts/new_share_post").json_value(body))
            .await
    }

    /// Edit a post's text and style. Signed.
    #[instrument(skip(self, options))]
    pub async fn update_post(&self, post_id: i64, options: &UpdatePostOptions) -> Result<Post> {
        let body = match serde_json::to_value(options)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let body = self.signed(body)?;
        self.client
            .invoke(RequestDescriptor::put(format!("/v3/posts/{post_id}")).json_value(body))
            .await
    }

    /// Resolve link metadata for a URL.
    #[instrument(skip(self))]
    pub async fn get_url_metadata(&self, url: &str) -> Result<SharedUrl> {
        let metadata = self.url_metadata_value(url).await?;
        Ok(serde_json::from_value(metadata)?)
    }

    async fn url_metadata_value(&self, url: &str) -> Result<Value> {
        self.client
            .get_json("/v2/posts/url_metadata", Query::new().param("url", url))
            .await
    }

    /// Build the body for content-carrying posts, resolving any shared URL.
    async fn content_body(&self, content: &PostContent) -> Result<Map<String, Value>> {
        let shared_url = match content.shared_url.as_deref().filter(|u| !u.is_empty()) {
            Some(url) => match self.url_metadata_value(url).await {
                Ok(metadata) => {
                    debug!("Resolved shared URL metadata");
                    Some(metadata)
                }
                Err(e) if e.is_forbidden() => {
                    warn!(error = %e, "Unable to get the URL metadata, posting without link");
                    None
                }
                Err(e) => return Err(e),
            },
            None => None,
        };
        content.to_body(shared_url)
    }
}

fn missing_field(field: &str) -> Error {
    Error::new(ErrorKind::Json(format!("response is missing `{field}`")))
}
