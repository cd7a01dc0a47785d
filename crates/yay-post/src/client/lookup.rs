use tracing::instrument;
use yaylib_client::{Query, Result};

use super::require_ids;
use crate::options::PostPage;
use crate::types::{Post, PostLikersResponse, PostResponse, PostTagsResponse, PostsResponse};

impl super::PostClient {
    /// Fetch a single post.
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: i64) -> Result<Post> {
        let response: PostResponse = self
            .client
            .get_json(&format!("/v2/posts/{post_id}"), Query::new())
            .await?;
        Ok(response.post)
    }

    /// Fetch several posts in one call.
    #[instrument(skip(self))]
    pub async fn get_posts(&self, post_ids: &[i64]) -> Result<PostsResponse> {
        require_ids(post_ids, "post_ids")?;
        self.client
            .get_json(
                "/v2/posts/multiple",
                Query::new().list("post_ids[]", post_ids),
            )
            .await
    }

    /// Users who liked a post.
    #[instrument(skip(self))]
    pub async fn get_post_likers(
        &self,
        post_id: i64,
        from_id: Option<i64>,
        number: Option<i64>,
    ) -> Result<PostLikersResponse> {
        self.client
            .get_json(
                &format!("/v1/posts/{post_id}/likers"),
                Query::new().opt("from_id", from_id).opt("number", number),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_post_reposts(&self, post_id: i64, page: PostPage) -> Result<PostsResponse> {
        self.client
            .get_json(&format!("/v2/posts/{post_id}/reposts"), page.apply(Query::new()))
            .await
    }

    /// Hashtag suggestions, optionally for a partial tag.
    ///
    /// `tag` and `save_recent_search` travel as query parameters, not a GET body.
    #[instrument(skip(self))]
    pub async fn get_recommended_post_tags(
        &self,
        tag: Option<&str>,
        save_recent_search: bool,
    ) -> Result<PostTagsResponse> {
        self.client
            .get_json(
                "/v1/posts/recommended_tag",
                Query::new()
                    .opt("tag", tag)
                    .param("save_recent_search", save_recent_search),
            )
            .await
    }
}
