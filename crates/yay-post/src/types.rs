//! Response types for post endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use yaylib_client::User;

use crate::message_tags::MessageTag;

/// A post.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Post {
    pub id: i64,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub post_type: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub font_size: Option<i32>,
    #[serde(default)]
    pub color: Option<i32>,
    #[serde(default)]
    pub likes_count: Option<i64>,
    #[serde(default)]
    pub liked: Option<bool>,
    #[serde(default)]
    pub reposts_count: Option<i64>,
    #[serde(default)]
    pub reposted: Option<bool>,
    #[serde(default)]
    pub conversation_id: Option<i64>,
    #[serde(default)]
    pub in_reply_to: Option<i64>,
    #[serde(default)]
    pub thread_id: Option<i64>,
    #[serde(default)]
    pub message_tags: Vec<MessageTag>,
    #[serde(default)]
    pub attachment: Option<String>,
    #[serde(default)]
    pub attachment_thumbnail: Option<String>,
    #[serde(default)]
    pub shared_url: Option<SharedUrl>,
    #[serde(default)]
    pub survey: Option<Survey>,
    #[serde(default)]
    pub conference_call: Option<ConferenceCall>,
    #[serde(default)]
    pub created_at: Option<i64>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// Metadata of a link embedded in a post.
///
/// Fields this crate does not model are kept in `extra`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SharedUrl {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConferenceCall {
    pub id: i64,
    #[serde(default)]
    pub post_id: Option<i64>,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub call_type: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub server: Option<String>,
    #[serde(default)]
    pub agora_channel: Option<String>,
    #[serde(default)]
    pub agora_token: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Survey {
    pub id: i64,
    #[serde(default)]
    pub votes_count: Option<i64>,
    #[serde(default)]
    pub voted: Option<bool>,
    #[serde(default)]
    pub choices: Vec<SurveyChoice>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SurveyChoice {
    pub id: i64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub votes_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostTag {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub post_hashtags_count: Option<i64>,
}

/// Envelope for a single post.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PostResponse {
    pub post: Post,
}

/// Envelope for a post listing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub pinned_posts: Vec<Post>,
    #[serde(default)]
    pub next_page_value: Option<String>,
}

/// Envelope returned by post creation endpoints.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreatePostResponse {
    #[serde(default)]
    pub post: Option<Post>,
    #[serde(default)]
    pub conference_call: Option<ConferenceCall>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BookmarkPostResponse {
    #[serde(default)]
    pub is_bookmarked: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostLikersResponse {
    #[serde(default)]
    pub last_id: Option<i64>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PostTagsResponse {
    #[serde(default)]
    pub tags: Vec<PostTag>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LikePostsResponse {
    #[serde(default)]
    pub like_ids: Vec<i64>,
}

/// Envelope returned by `vote_survey`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidationPostResponse {
    #[serde(default)]
    pub is_allow_to_post: Option<bool>,
    #[serde(default)]
    pub survey: Option<Survey>,
}
