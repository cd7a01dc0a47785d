//! Timelines, searches and conversations.

use tracing::instrument;
use yaylib_client::{encode_path_segment, Query, Result};

use super::require_ids;
use crate::kinds::PostType;
use crate::options::{
    CallTimelineOptions, ConversationOptions, FollowingTimelineOptions, GroupTimelineOptions,
    PostPage, TimelineOptions,
};
use crate::types::PostsResponse;

impl super::PostClient {
    /// The main timeline, or the no-reply timeline when `noreply_mode` is set.
    #[instrument(skip(self))]
    pub async fn get_timeline(&self, options: &TimelineOptions) -> Result<PostsResponse> {
        self.client.get_json(options.path(), options.to_query()).await
    }

    #[instrument(skip(self))]
    pub async fn get_following_timeline(
        &self,
        options: &FollowingTimelineOptions,
    ) -> Result<PostsResponse> {
        self.client
            .get_json("/v2/posts/following_timeline", options.to_query())
            .await
    }

    /// Open calls across the service.
    #[instrument(skip(self))]
    pub async fn get_timeline_calls(&self, options: &CallTimelineOptions) -> Result<PostsResponse> {
        self.client
            .get_json("/v2/posts/call_timeline", options.to_query())
            .await
    }

    /// Open calls hosted by people the caller follows.
    #[instrument(skip(self))]
    pub async fn get_following_call_timeline(
        &self,
        options: &CallTimelineOptions,
    ) -> Result<PostsResponse> {
        self.client
            .get_json("/v2/posts/call_followers_timeline", options.to_query())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_group_timeline(
        &self,
        group_id: i64,
        options: &GroupTimelineOptions,
    ) -> Result<PostsResponse> {
        self.client
            .get_json("/v2/posts/group_timeline", options.to_query(group_id))
            .await
    }

    /// Search a group's posts.
    #[instrument(skip(self))]
    pub async fn get_group_timeline_by_keyword(
        &self,
        group_id: i64,
        keyword: &str,
        page: PostPage,
        only_thread_posts: Option<bool>,
    ) -> Result<PostsResponse> {
        let query = page
            .apply(Query::new().param("keyword", keyword))
            .opt("only_thread_posts", only_thread_posts);
        self.client
            .get_json(&format!("/v2/groups/{group_id}/posts/search"), query)
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_group_highlight_posts(
        &self,
        group_id: i64,
        from_post: Option<i64>,
        number: Option<i64>,
    ) -> Result<PostsResponse> {
        self.client
            .get_json(
                &format!("/v1/groups/{group_id}/highlights"),
                Query::new().opt("from_post", from_post).opt("number", number),
            )
            .await
    }

    /// Posts carrying a hashtag (without the leading `#`).
    #[instrument(skip(self))]
    pub async fn get_timeline_by_hashtag(&self, hashtag: &str, page: PostPage) -> Result<PostsResponse> {
        self.client
            .get_json(
                &format!("/v2/posts/tags/{}", encode_path_segment(hashtag)),
                page.apply(Query::new()),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_timeline_by_keyword(
        &self,
        keyword: Option<&str>,
        page: PostPage,
    ) -> Result<PostsResponse> {
        self.client
            .get_json(
                "/v2/posts/search",
                page.apply(Query::new().opt("keyword", keyword)),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_user_timeline(
        &self,
        user_id: i64,
        page: PostPage,
        post_type: Option<PostType>,
    ) -> Result<PostsResponse> {
        let query = page
            .apply(Query::new().param("user_id", user_id))
            .opt("post_type", post_type);
        self.client.get_json("/v2/posts/user_timeline", query).await
    }

    #[instrument(skip(self))]
    pub async fn get_my_posts(
        &self,
        page: PostPage,
        include_group_post: Option<bool>,
    ) -> Result<PostsResponse> {
        self.client
            .get_json(
                "/v2/posts/mine",
                page.apply(Query::new())
                    .opt("include_group_post", include_group_post),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_recommended_posts(
        &self,
        experiment_num: i64,
        variant_num: i64,
        number: Option<i64>,
    ) -> Result<PostsResponse> {
        self.client
            .get_json(
                "/v2/posts/recommended_timeline",
                Query::new()
                    .param("experiment_num", experiment_num)
                    .param("variant_num", variant_num)
                    .opt("number", number),
            )
            .await
    }

    /// Replies under a conversation.
    #[instrument(skip(self))]
    pub async fn get_conversation(
        &self,
        conversation_id: i64,
        options: &ConversationOptions,
    ) -> Result<PostsResponse> {
        self.client
            .get_json(
                &format!("/v2/conversations/{conversation_id}"),
                options.to_query(),
            )
            .await
    }

    /// Root posts of the conversations containing `post_ids`.
    #[instrument(skip(self))]
    pub async fn get_conversation_root_posts(&self, post_ids: &[i64]) -> Result<PostsResponse> {
        require_ids(post_ids, "post_ids")?;
        self.client
            .get_json(
                "/v2/conversations/root_posts",
                Query::new().list("ids[]", post_ids),
            )
            .await
    }
}
