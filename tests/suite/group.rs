use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yaylib::group::{GetGroupsOptions, GroupSettings};

use crate::common::{clients_for, API_KEY, DEVICE_UUID};

#[tokio::test]
async fn create_then_fetch_group() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/groups/new"))
        .and(header("Authorization", "Bearer integration-token"))
        .and(body_partial_json(json!({
            "topic": "crabs",
            "api_key": API_KEY,
            "uuid": DEVICE_UUID,
            "allow_members_to_post_image_and_video": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"group_id": 501})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/groups/501"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "group": {"id": 501, "topic": "crabs", "groups_users_count": 1}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (groups, _) = clients_for(&server);

    let created = groups
        .create_group(&GroupSettings::new("crabs").allow_members_to_post_media(true))
        .await
        .expect("create_group should succeed");
    let fetched = groups.get_group(created.group_id).await.unwrap();

    assert_eq!(fetched.group.id, 501);
    assert_eq!(fetched.group.groups_users_count, Some(1));
}

#[tokio::test]
async fn browse_and_join_group() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/groups"))
        .and(query_param("group_category_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "groups": [{"id": 10, "topic": "music"}, {"id": 11, "topic": "games"}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/groups/10/join"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let (groups, _) = clients_for(&server);

    let listing = groups
        .get_groups(&GetGroupsOptions {
            group_category_id: Some(3),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(listing.groups.len(), 2);

    let joined = groups.join_group(listing.groups[0].id).await.unwrap();
    assert_eq!(joined["result"], "success");
}

#[tokio::test]
async fn rate_limit_is_surfaced_without_retry() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/groups/created_quota"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "30")
                .set_body_json(json!({"result": "error", "message": "too many requests"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (groups, _) = clients_for(&server);
    let err = groups.get_create_group_quota().await.unwrap_err();

    assert!(err.is_rate_limited());
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(30)));
}
