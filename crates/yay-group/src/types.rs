//! Response types for group endpoints.

use serde::{Deserialize, Serialize};
use yaylib_client::User;

/// A group (circle).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Group {
    pub id: i64,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub groups_users_count: Option<i64>,
    #[serde(default)]
    pub posts_count: Option<i64>,
    #[serde(default)]
    pub threads_count: Option<i64>,
    #[serde(default)]
    pub highlighted_count: Option<i64>,
    #[serde(default)]
    pub views_count: Option<i64>,
    #[serde(default)]
    pub related_count: Option<i64>,
    #[serde(default)]
    pub secret: Option<bool>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub is_joined: Option<bool>,
    #[serde(default)]
    pub is_pending: Option<bool>,
    #[serde(default)]
    pub is_moderator: Option<bool>,
    #[serde(default)]
    pub group_category_id: Option<i64>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub cover_image_thumbnail: Option<String>,
    #[serde(default)]
    pub guidelines: Option<String>,
    #[serde(default)]
    pub allow_members_to_post_image_and_video: Option<bool>,
    #[serde(default)]
    pub allow_members_to_post_url: Option<bool>,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

/// A member entry inside a group.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroupUser {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub is_moderator: Option<bool>,
    #[serde(default)]
    pub pending_transfer: Option<bool>,
    #[serde(default)]
    pub pending_deputize: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroupCategory {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub rank: Option<i64>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Envelope for a single group.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupResponse {
    pub group: Group,
}

/// Envelope for a group listing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroupsResponse {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub pinned_groups: Vec<Group>,
}

/// Result of `create_group`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateGroupResponse {
    pub group_id: i64,
}

/// How many groups the caller may still create.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CreateGroupQuota {
    #[serde(default)]
    pub used_quota: Option<i64>,
    #[serde(default)]
    pub remaining_quota: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UnreadStatusResponse {
    #[serde(default)]
    pub is_unread: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UsersByTimestampResponse {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub last_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroupCategoriesResponse {
    #[serde(default)]
    pub group_categories: Vec<GroupCategory>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupUserResponse {
    pub group_user: GroupUser,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroupUsersResponse {
    #[serde(default)]
    pub group_users: Vec<GroupUser>,
}

/// Related or relatable groups, with a pagination cursor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GroupsRelatedResponse {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub next_page_value: Option<String>,
}
