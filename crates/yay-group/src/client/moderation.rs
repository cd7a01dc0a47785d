//! Moderator and ownership hand-offs.
//!
//! Offers are sent by the owner and answered by the invited member. Sending
//! an offer is a signed request.

use serde_json::{json, Value};
use tracing::instrument;
use yaylib_client::{RequestDescriptor, Result};

use super::require_ids;

impl super::GroupClient {
    /// Offer moderator rights to several members at once.
    #[instrument(skip(self))]
    pub async fn send_moderator_offers(&self, group_id: i64, user_ids: &[i64]) -> Result<Value> {
        require_ids(user_ids, "user_ids")?;
        let body = self.signed_body(&json!({ "user_ids": user_ids }))?;
        self.client
            .invoke_value(
                RequestDescriptor::post(format!("/v3/groups/{group_id}/deputize/mass"))
                    .json_value(body),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn accept_moderator_offer(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::put(format!(
                "/v1/groups/{group_id}/deputize"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn decline_moderator_offer(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::delete(format!(
                "/v1/groups/{group_id}/deputize"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn withdraw_moderator_offer(&self, group_id: i64, user_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::put(format!(
                "/v1/groups/{group_id}/deputize/{user_id}/withdraw"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_moderator(&self, group_id: i64, user_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!(
                "/v1/groups/{group_id}/fire/{user_id}"
            )))
            .await
    }

    /// Offer group ownership to a member.
    #[instrument(skip(self))]
    pub async fn send_ownership_offer(&self, group_id: i64, user_id: i64) -> Result<Value> {
        let body = self.signed_body(&json!({ "user_id": user_id }))?;
        self.client
            .invoke_value(
                RequestDescriptor::post(format!("/v3/groups/{group_id}/transfer"))
                    .json_value(body),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn accept_ownership_offer(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::put(format!(
                "/v1/groups/{group_id}/transfer"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn decline_ownership_offer(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::delete(format!(
                "/v1/groups/{group_id}/transfer"
            )))
            .await
    }

    #[instrument(skip(self))]
    pub async fn withdraw_ownership_offer(&self, group_id: i64, user_id: i64) -> Result<Value> {
        self.client
            .put_json(
                &format!("/v1/groups/{group_id}/transfer/withdraw"),
                &json!({ "user_id": user_id }),
            )
            .await
    }

    /// Claim ownership of a group whose owner has left.
    #[instrument(skip(self))]
    pub async fn take_over_group_ownership(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!(
                "/v1/groups/{group_id}/take_over"
            )))
            .await
    }
}
