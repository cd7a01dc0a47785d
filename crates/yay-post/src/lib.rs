//! # yay-post
//!
//! Post endpoints of the Yay! API.
//!
//! ## Features
//!
//! - **Creation** - Posts, reposts, thread posts, call posts and share posts
//! - **Timelines** - Main, following, group, hashtag, keyword and call timelines
//! - **Curation** - Bookmarks, profile and group pins, group highlights
//! - **Engagement** - Likes, survey votes, reports and bulk deletion
//!
//! The content type of a new post (`post_type`) is derived from what it
//! carries, and shared links are resolved to metadata before posting.
//!
//! ## Example
//!
//! ```rust,ignore
//! use yaylib_client::{Credentials, YayClient};
//! use yaylib_post::{PostClient, PostContent, TaggedText};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), yaylib_post::Error> {
//!     let client = PostClient::new(YayClient::new(Credentials::from_env()?)?);
//!
//!     let content = PostContent::new()
//!         .tagged(TaggedText::new().text("hello ").mention(42, "@friend"))
//!         .attachment("photo.jpg");
//!     let post = client.create_post(&content).await?;
//!
//!     let fetched = client.get_post(post.id).await?;
//!     println!("{:?}", fetched.post_type);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod content;
mod kinds;
mod message_tags;
mod options;
mod types;

pub use client::PostClient;

pub use content::{PostContent, MAX_ATTACHMENTS};
pub use kinds::{CallType, PostType, TimelineOrder};
pub use message_tags::{MessageTag, TaggedText};

pub use options::{
    CallPostOptions, CallTimelineOptions, ConversationOptions, FollowingTimelineOptions,
    GroupTimelineOptions, PostPage, ReportPostOptions, SharePostOptions, TimelineOptions,
    UpdatePostOptions,
};

pub use types::{
    BookmarkPostResponse, ConferenceCall, CreatePostResponse, LikePostsResponse, Post,
    PostLikersResponse, PostResponse, PostTag, PostTagsResponse, PostsResponse, SharedUrl,
    Survey, SurveyChoice, ValidationPostResponse,
};

pub use yaylib_client::{Error, ErrorKind, Result};
