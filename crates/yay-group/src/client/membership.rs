use serde_json::{json, Value};
use tracing::instrument;
use yaylib_client::{Query, RequestDescriptor, Result};

use super::require_ids;
use crate::options::{GroupMembersOptions, InvitableUsersOptions};
use crate::types::{GroupUserResponse, GroupUsersResponse, UsersByTimestampResponse, UsersResponse};

impl super::GroupClient {
    #[instrument(skip(self))]
    pub async fn join_group(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!("/v1/groups/{group_id}/join")))
            .await
    }

    #[instrument(skip(self))]
    pub async fn leave_group(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::delete(format!(
                "/v1/groups/{group_id}/leave"
            )))
            .await
    }

    /// Approve a pending join request.
    #[instrument(skip(self))]
    pub async fn accept_group_join_request(&self, group_id: i64, user_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!(
                "/v1/groups/{group_id}/accept/{user_id}"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn decline_group_join_request(&self, group_id: i64, user_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!(
                "/v1/groups/{group_id}/decline/{user_id}"
            )))
            .await
    }

    /// Invite users to the group.
    ///
    /// Fails with `InvalidArgument` if `user_ids` is empty.
    #[instrument(skip(self))]
    pub async fn invite_users_to_group(&self, group_id: i64, user_ids: &[i64]) -> Result<Value> {
        require_ids(user_ids, "user_ids")?;
        self.client
            .post_json(
                &format!("/v1/groups/{group_id}/invite"),
                &json!({ "user_ids": user_ids }),
            )
            .await
    }

    /// Users that can be invited to the group.
    #[instrument(skip(self))]
    pub async fn get_invitable_users(
        &self,
        group_id: i64,
        options: &InvitableUsersOptions,
    ) -> Result<UsersByTimestampResponse> {
        self.client
            .get_json(
                &format!("/v1/groups/{group_id}/users/invitable"),
                options.to_query(),
            )
            .await
    }

    /// Membership status of the caller for each group id.
    ///
    /// The response maps group ids to a status string and has no fixed shape.
    #[instrument(skip(self))]
    pub async fn get_joined_statuses(&self, ids: &[i64]) -> Result<Value> {
        require_ids(ids, "ids")?;
        self.client
            .get_json("/v1/groups/joined_statuses", Query::new().list("ids", ids))
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_group_member(&self, group_id: i64, user_id: i64) -> Result<GroupUserResponse> {
        self.client
            .get_json(
                &format!("/v1/groups/{group_id}/members/{user_id}"),
                Query::new(),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_group_members(
        &self,
        group_id: i64,
        options: &GroupMembersOptions,
    ) -> Result<GroupUsersResponse> {
        self.client
            .get_json(&format!("/v2/groups/{group_id}/members"), options.to_query())
            .await
    }

    #[instrument(skip(self))]
    pub async fn get_banned_group_members(
        &self,
        group_id: i64,
        page: Option<i64>,
    ) -> Result<UsersResponse> {
        self.client
            .get_json(
                &format!("/v1/groups/{group_id}/ban_list"),
                Query::new().opt("page", page),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn ban_group_user(&self, group_id: i64, user_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!(
                "/v1/groups/{group_id}/ban/{user_id}"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn unban_group_member(&self, group_id: i64, user_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!(
                "/v1/groups/{group_id}/unban/{user_id}"
            )))
            .await
    }
}
