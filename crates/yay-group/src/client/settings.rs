use serde_json::{json, Value};
use tracing::{info, instrument};
use yaylib_client::{RequestDescriptor, Result};

use crate::options::GroupSettings;
use crate::types::{CreateGroupResponse, GroupResponse};

impl super::GroupClient {
    /// Create a new group. Signed.
    #[instrument(skip(self, settings), fields(topic = %settings.topic))]
    pub async fn create_group(&self, settings: &GroupSettings) -> Result<CreateGroupResponse> {
        let body = self.signed_body(settings)?;
        let created: CreateGroupResponse = self
            .client
            .invoke(RequestDescriptor::post("/v3/groups/new").json_value(body))
            .await?;
        info!(group_id = created.group_id, "Group created");
        Ok(created)
    }

    /// Replace a group's settings. Signed.
    #[instrument(skip(self, settings))]
    pub async fn update_group(&self, group_id: i64, settings: &GroupSettings) -> Result<GroupResponse> {
        let body = self.signed_body(settings)?;
        self.client
            .invoke(RequestDescriptor::post(format!("/v3/groups/{group_id}/update")).json_value(body))
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_group_title(&self, group_id: i64, title: &str) -> Result<Value> {
        self.client
            .post_json(
                &format!("/v1/groups/{group_id}/set_title"),
                &json!({ "title": title }),
            )
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_group_cover(&self, group_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!(
                "/v1/groups/{group_id}/remove_cover"
            )))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::test_support::{mock_client, recording_client};
    use crate::GroupSettings;

    #[tokio::test]
    async fn test_create_group_wiremock() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/groups/new"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"group_id": 77})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(mock_server.uri());
        let created = client
            .create_group(&GroupSettings::new("rust").description("crabs"))
            .await
            .expect("create_group should succeed");
        assert_eq!(created.group_id, 77);

        let received = mock_server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(body["topic"], "rust");
        assert_eq!(body["description"], "crabs");
        assert_eq!(body["uuid"], "test-device");
        assert_eq!(body["api_key"], "test-api-key");
        assert!(body["signed_info"].is_string());
        assert!(body.get("secret").is_none());
        assert!(body.get("guidelines").is_none());
    }

    #[tokio::test]
    async fn test_update_group_is_signed() {
        let (client, transport) = recording_client();
        transport.push_json(200, json!({"group": {"id": 3, "topic": "new"}}));

        let response = client
            .update_group(3, &GroupSettings::new("new").allow_members_to_post_url(true))
            .await
            .unwrap();
        assert_eq!(response.group.topic.as_deref(), Some("new"));

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://api.test/v3/groups/3/update");
        let body = request.body.unwrap();
        assert_eq!(body["allow_members_to_post_url"], true);
        let timestamp = body["timestamp"].as_i64().unwrap();
        assert_eq!(
            body["signed_info"],
            client
                .inner()
                .signer()
                .sign_with_shared_key("test-device", timestamp)
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_create_group_forbidden() {
        let (client, transport) = recording_client();
        transport.push_json(403, json!({"result": "error", "message": "signature mismatch"}));

        let err = client.create_group(&GroupSettings::new("x")).await.unwrap_err();

        assert!(err.is_forbidden());
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_set_title_and_remove_cover() {
        let (client, transport) = recording_client();

        client.set_group_title(6, "renamed").await.unwrap();
        client.remove_group_cover(6).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://api.test/v1/groups/6/set_title");
        assert_eq!(requests[0].body, Some(json!({"title": "renamed"})));
        assert_eq!(requests[1].url, "https://api.test/v1/groups/6/remove_cover");
        assert!(requests[1].body.is_none());
    }
}
