use serde_json::Value;
use tracing::instrument;
use yaylib_client::{Query, RequestDescriptor, Result};

use crate::options::GetGroupsOptions;
use crate::types::{
    CreateGroupQuota, GroupCategoriesResponse, GroupResponse, GroupsResponse,
    UnreadStatusResponse,
};

impl super::GroupClient {
    /// Get a single group.
    #[instrument(skip(self))]
    pub async fn get_group(&self, group_id: i64) -> Result<GroupResponse> {
        self.client
            .get_json(&format!("/v1/groups/{group_id}"), Query::new())
            .await
    }

    /// Browse groups, optionally filtered by category or keyword.
    #[instrument(skip(self))]
    pub async fn get_groups(&self, options: &GetGroupsOptions) -> Result<GroupsResponse> {
        self.client.get_json("/v2/groups", options.to_query()).await
    }

    /// Groups the caller belongs to.
    #[instrument(skip(self))]
    pub async fn get_my_groups(&self, from_timestamp: Option<i64>) -> Result<GroupsResponse> {
        self.client
            .get_json(
                "/v2/groups/mine",
                Query::new().opt("from_timestamp", from_timestamp),
            )
            .await
    }

    /// Groups another user belongs to.
    #[instrument(skip(self))]
    pub async fn get_user_groups(&self, user_id: i64, page: Option<i64>) -> Result<GroupsResponse> {
        self.client
            .get_json(
                "/v1/groups/user_group_list",
                Query::new().param("user_id", user_id).opt("page", page),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_group_categories(
        &self,
        page: Option<i64>,
        number: Option<i64>,
    ) -> Result<GroupCategoriesResponse> {
        self.client
            .get_json(
                "/v1/groups/categories",
                Query::new().opt("page", page).opt("number", number),
            )
            .await
    }

    /// How many more groups the caller may create.
    #[instrument(skip(self))]
    pub async fn get_create_group_quota(&self) -> Result<CreateGroupQuota> {
        self.client
            .get_json("/v1/groups/created_quota", Query::new())
            .await
    }

    /// Whether any joined group has unread activity since `from_time`.
    #[instrument(skip(self))]
    pub async fn check_group_unread_status(
        &self,
        from_time: Option<i64>,
    ) -> Result<UnreadStatusResponse> {
        self.client
            .get_json(
                "/v1/groups/unread_status",
                Query::new().opt("from_time", from_time),
            )
            .await
    }

    /// Pin a group to the top of the caller's list.
    #[instrument(skip(self))]
    pub async fn pin_group(&self, group_id: i64) -> Result<Value> {
        self.client
            .post_json("/v1/pinned/groups", &serde_json::json!({ "id": group_id }))
            .await
    }

    #[instrument(skip(self))]
    pub async fn unpin_group(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::delete(format!(
                "/v1/pinned/groups/{group_id}"
            )))
            .await
    }
}
