//! Request options for group endpoints.
//!
//! Every optional field left as `None` is omitted from the outgoing request.

use serde::Serialize;
use yaylib_client::Query;

/// Settings sent when creating or updating a group.
///
/// Only `topic` is required; unset fields keep the server's current value
/// (on update) or default (on create).
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct GroupSettings {
    pub topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_reported_posts: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_conference_call: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_verified_age: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_mobile_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_timeline_display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_ownership_transfer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_thread_creation_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_groups_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_from_game_eight: Option<bool>,
    #[serde(
        rename = "allow_members_to_post_image_and_video",
        skip_serializing_if = "Option::is_none"
    )]
    pub allow_members_to_post_media: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_members_to_post_url: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<String>,
}

impl GroupSettings {
    /// Settings with only a topic.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn secret(mut self, secret: bool) -> Self {
        self.secret = Some(secret);
        self
    }

    pub fn is_private(mut self, is_private: bool) -> Self {
        self.is_private = Some(is_private);
        self
    }

    pub fn group_category_id(mut self, id: i64) -> Self {
        self.group_category_id = Some(id);
        self
    }

    pub fn cover_image_filename(mut self, filename: impl Into<String>) -> Self {
        self.cover_image_filename = Some(filename.into());
        self
    }

    pub fn allow_members_to_post_media(mut self, allow: bool) -> Self {
        self.allow_members_to_post_media = Some(allow);
        self
    }

    pub fn allow_members_to_post_url(mut self, allow: bool) -> Self {
        self.allow_members_to_post_url = Some(allow);
        self
    }

    pub fn guidelines(mut self, guidelines: impl Into<String>) -> Self {
        self.guidelines = Some(guidelines.into());
        self
    }
}

/// Filters for `get_groups`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetGroupsOptions {
    pub group_category_id: Option<i64>,
    pub keyword: Option<String>,
    pub from_timestamp: Option<i64>,
    pub sub_category_id: Option<i64>,
}

impl GetGroupsOptions {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("group_category_id", self.group_category_id)
            .opt("keyword", self.keyword.as_deref())
            .opt("from_timestamp", self.from_timestamp)
            .opt("sub_category_id", self.sub_category_id)
    }
}

/// Filters for `get_group_members`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMembersOptions {
    pub id: Option<i64>,
    pub mode: Option<String>,
    pub keyword: Option<String>,
    pub from_id: Option<i64>,
    pub from_timestamp: Option<i64>,
    pub order_by: Option<String>,
    pub followed_by_me: Option<bool>,
}

impl GroupMembersOptions {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("id", self.id)
            .opt("mode", self.mode.as_deref())
            .opt("keyword", self.keyword.as_deref())
            .opt("from_id", self.from_id)
            .opt("from_timestamp", self.from_timestamp)
            .opt("order_by", self.order_by.as_deref())
            .opt("followed_by_me", self.followed_by_me)
    }
}

/// Filters for `get_invitable_users`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvitableUsersOptions {
    pub from_timestamp: Option<i64>,
    /// Sent as `user[nickname]`.
    pub nickname: Option<String>,
}

impl InvitableUsersOptions {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("from_timestamp", self.from_timestamp)
            .opt("user[nickname]", self.nickname.as_deref())
    }
}

/// Filters for `get_related_groups` and `get_relatable_groups`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelatedGroupsOptions {
    pub keyword: Option<String>,
    /// Pagination cursor, sent as `from`.
    pub from: Option<String>,
}

impl RelatedGroupsOptions {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("keyword", self.keyword.as_deref())
            .opt("from", self.from.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_settings_omit_unset_fields() {
        let value = serde_json::to_value(GroupSettings::new("rust")).unwrap();
        assert_eq!(value, json!({"topic": "rust"}));
    }

    #[test]
    fn test_group_settings_media_wire_name() {
        let value = serde_json::to_value(
            GroupSettings::new("rust")
                .allow_members_to_post_media(true)
                .secret(false),
        )
        .unwrap();

        assert_eq!(value["allow_members_to_post_image_and_video"], true);
        assert_eq!(value["secret"], false);
        assert!(value.get("allow_members_to_post_media").is_none());
    }

    #[test]
    fn test_members_query_skips_unset() {
        let query = GroupMembersOptions {
            mode: Some("moderators".into()),
            followed_by_me: Some(false),
            ..Default::default()
        }
        .to_query();

        assert_eq!(
            query.pairs(),
            &[
                ("mode".to_string(), "moderators".to_string()),
                ("followed_by_me".to_string(), "false".to_string()),
            ]
        );
    }

    #[test]
    fn test_invitable_users_nickname_key() {
        let query = InvitableUsersOptions {
            nickname: Some("yay".into()),
            ..Default::default()
        }
        .to_query();
        assert_eq!(query.get("user[nickname]"), Some("yay"));
        assert!(!query.contains_key("from_timestamp"));
    }
}
