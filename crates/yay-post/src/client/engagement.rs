//! Likes, surveys, views, reports and deletions.

use serde_json::{json, Value};
use tracing::{info, instrument};
use yaylib_client::{Error, ErrorKind, RequestDescriptor, Result};

use super::require_ids;
use crate::options::ReportPostOptions;
use crate::types::{LikePostsResponse, Survey, ValidationPostResponse};

impl super::PostClient {
    #[instrument(skip(self))]
    pub async fn like_posts(&self, post_ids: &[i64]) -> Result<LikePostsResponse> {
        require_ids(post_ids, "post_ids")?;
        self.client
            .post_json("/v2/posts/like", &json!({ "post_ids": post_ids }))
            .await
    }

    #[instrument(skip(self))]
    pub async fn unlike_post(&self, post_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!("/v1/posts/{post_id}/unlike")))
            .await
    }

    /// Vote in a survey and get the updated tally.
    #[instrument(skip(self))]
    pub async fn vote_survey(&self, survey_id: i64, choice_id: i64) -> Result<Survey> {
        let response: ValidationPostResponse = self
            .client
            .post_json(
                &format!("/v2/surveys/{survey_id}/vote"),
                &json!({ "choice_id": choice_id }),
            )
            .await?;
        response
            .survey
            .ok_or_else(|| Error::new(ErrorKind::Json("response is missing `survey`".into())))
    }

    /// Count a view of a video attachment.
    #[instrument(skip(self))]
    pub async fn view_video(&self, video_id: i64) -> Result<Value> {
        self.client
            .invoke_value(RequestDescriptor::post(format!(
                "/v1/posts/videos/{video_id}/view"
            )))
            .await
    }

    /// Report a post. Signed.
    #[instrument(skip(self, options))]
    pub async fn report_post(&self, post_id: i64, options: &ReportPostOptions) -> Result<Value> {
        let body = self.signed(options.to_body()?)?;
        self.client
            .invoke_value(
                RequestDescriptor::post(format!("/v3/posts/{post_id}/report")).json_value(body),
            )
            .await
    }

    /// Delete several of the caller's posts.
    #[instrument(skip(self))]
    pub async fn remove_posts(&self, post_ids: &[i64]) -> Result<Value> {
        require_ids(post_ids, "post_ids")?;
        self.client
            .post_json("/v2/posts/mass_destroy", &json!({ "posts_ids": post_ids }))
            .await
    }

    /// Delete every post of the caller.
    ///
    /// A 404 means there was nothing to delete and counts as success.
    #[instrument(skip(self))]
    pub async fn delete_all_post(&self) -> Result<()> {
        match self
            .client
            .execute(&RequestDescriptor::post("/v1/posts/delete_all_post"))
            .await
        {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => {
                info!("No posts to delete, skipping");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::test_support::{mock_client, recording_client};
    use crate::{ErrorKind, ReportPostOptions};

    #[tokio::test]
    async fn test_like_posts_wiremock() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/posts/like"))
            .and(body_json(json!({"post_ids": [1, 2]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"like_ids": [1, 2]})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(mock_server.uri());
        let response = client.like_posts(&[1, 2]).await.unwrap();
        assert_eq!(response.like_ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_delete_all_post_treats_404_as_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/posts/delete_all_post"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = mock_client(mock_server.uri());
        client
            .delete_all_post()
            .await
            .expect("404 should be treated as nothing to delete");
    }

    #[tokio::test]
    async fn test_delete_all_post_other_errors_propagate() {
        let (client, transport) = recording_client();
        transport.push_json(401, json!({"message": "expired"}));

        let err = client.delete_all_post().await.unwrap_err();
        assert!(err.is_auth_error());
    }

    #[tokio::test]
    async fn test_delete_all_post_accepts_empty_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/posts/delete_all_post"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let client = mock_client(mock_server.uri());
        client.delete_all_post().await.unwrap();
    }

    #[tokio::test]
    async fn test_vote_survey_unwraps_survey() {
        let (client, transport) = recording_client();
        transport.push_json(200, json!({"survey": {"id": 3, "votes_count": 10, "voted": true}}));

        let survey = client.vote_survey(3, 1).await.unwrap();
        assert_eq!(survey.votes_count, Some(10));

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://api.test/v2/surveys/3/vote");
        assert_eq!(request.body, Some(json!({"choice_id": 1})));
    }

    #[tokio::test]
    async fn test_report_post_is_signed() {
        let (client, transport) = recording_client();

        let mut options = ReportPostOptions::new(5, 2);
        options.reason = Some("spam".into());
        client.report_post(77, &options).await.unwrap();

        let request = transport.last_request().unwrap();
        assert_eq!(request.url, "https://api.test/v3/posts/77/report");
        let body = request.body.unwrap();
        assert_eq!(body["opponent_id"], 5);
        assert_eq!(body["reason"], "spam");
        assert!(body.get("screenshot_filename").is_none());
        let timestamp = body["timestamp"].as_i64().unwrap();
        assert_eq!(
            body["signed_info"],
            client.inner().signer().sign("test-device", timestamp).unwrap()
        );
        assert_ne!(
            body["signed_info"],
            client
                .inner()
                .signer()
                .sign_with_shared_key("test-device", timestamp)
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_remove_posts_body_and_validation() {
        let (client, transport) = recording_client();

        client.remove_posts(&[3, 4]).await.unwrap();
        assert_eq!(
            transport.last_request().unwrap().body,
            Some(json!({"posts_ids": [3, 4]}))
        );

        let err = client.remove_posts(&[]).await.unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidArgument(_)));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_unlike_and_view_video() {
        let (client, transport) = recording_client();

        client.unlike_post(8).await.unwrap();
        client.view_video(15).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].url, "https://api.test/v1/posts/8/unlike");
        assert_eq!(requests[1].url, "https://api.test/v1/posts/videos/15/view");
    }
}
