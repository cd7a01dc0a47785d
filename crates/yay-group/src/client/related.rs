use serde_json::Value;
use tracing::instrument;
use yaylib_client::{Query, RequestDescriptor, Result};

use super::require_ids;
use crate::options::RelatedGroupsOptions;
use crate::types::GroupsRelatedResponse;

impl super::GroupClient {
    /// Groups currently linked as related.
    #[instrument(skip(self))]
    pub async fn get_related_groups(
        &self,
        group_id: i64,
        options: &RelatedGroupsOptions,
    ) -> Result<GroupsRelatedResponse> {
        self.client
            .get_json(&format!("/v1/groups/{group_id}/related"), options.to_query())
            .await
    }

    /// Groups that could be linked as related.
    #[instrument(skip(self))]
    pub async fn get_relatable_groups(
        &self,
        group_id: i64,
        options: &RelatedGroupsOptions,
    ) -> Result<GroupsRelatedResponse> {
        self.client
            .get_json(&format!("/v1/groups/{group_id}/relatable"), options.to_query())
            .await
    }

    #[instrument(skip(self))]
    pub async fn add_related_groups(&self, group_id: i64, related_group_ids: &[i64]) -> Result<Value> {
        require_ids(related_group_ids, "related_group_ids")?;
        self.client
            .invoke_value(
                RequestDescriptor::put(format!("/v1/groups/{group_id}/related"))
                    .query(Query::new().list("related_group_id", related_group_ids)),
            )
            .await
    }

    // Removal uses the bracketed key; adding does not.
    #[instrument(skip(self))]
    pub async fn remove_related_groups(
        &self,
        group_id: i64,
        related_group_ids: &[i64],
    ) -> Result<Value> {
        require_ids(related_group_ids, "related_group_ids")?;
        self.client
            .invoke_value(
                RequestDescriptor::delete(format!("/v1/groups/{group_id}/related"))
                    .query(Query::new().list("related_group_id[]", related_group_ids)),
            )
            .await
    }
}
