//! Bookmarks, pins and group highlights.

use serde_json::{json, Value};
use tracing::instrument;
use yaylib_client::{Query, RequestDescriptor, Result};

use crate::types::{BookmarkPostResponse, PostsResponse};

impl super::PostClient {
    #[instrument(skip(self))]
    pub async fn add_bookmark(&self, user_id: i64, post_id: i64) -> Result<BookmarkPostResponse> {
        self.client
            .invoke(RequestDescriptor::put(format!(
                "/v1/users/{user_id}/bookmarks/{post_id}"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_bookmark(&self, user_id: i64, post_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::delete(format!(
                "/v1/users/{user_id}/bookmarks/{post_id}"
            )))
            .await
    }

    /// A user's bookmarked posts; `from` is the pagination cursor.
    #[instrument(skip(self))]
    pub async fn get_bookmark(&self, user_id: i64, from: Option<&str>) -> Result<PostsResponse> {
        self.client
            .get_json(
                &format!("/v1/users/{user_id}/bookmarks"),
                Query::new().opt("from", from),
            )
            .await
    }

    /// Pin a post to the caller's profile.
    #[instrument(skip(self))]
    pub async fn create_pin_post(&self, post_id: i64) -> Result<Value> {
        self.client
            .post_json("/v1/pinned/posts", &json!({ "id": post_id }))
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_pin_post(&self, post_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::delete(format!(
                "/v1/pinned/posts/{post_id}"
            )))
            .await
    }

    /// Pin a post to the top of a group.
    #[instrument(skip(self))]
    pub async fn create_group_pin_post(&self, post_id: i64, group_id: i64) -> Result<Value> {
        self.client
            .put_json(
                "/v2/posts/group_pinned_post",
                &json!({ "post_id": post_id, "group_id": group_id }),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn delete_group_pin_post(&self, group_id: i64) -> Result<Value> {
        self.client
            .delete_json("/v2/posts/group_pinned_post", &json!({ "group_id": group_id }))
            .await
    }

    /// Add a post to a group's highlights.
    #[instrument(skip(self))]
    pub async fn add_group_highlight_post(&self, group_id: i64, post_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::put(format!(
                "/v1/groups/{group_id}/highlights/{post_id}"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_group_highlight_post(&self, group_id: i64, post_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::delete(format!(
                "/v1/groups/{group_id}/highlights/{post_id}"
            )))
            .await
    }
}
