use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yaylib::group::GroupSettings;
use yaylib::post::ReportPostOptions;

use crate::common::{shared_key_clients_for, DEVICE_UUID};

async fn recorded_body(server: &MockServer, request_path: &str) -> Value {
    let requests = server
        .received_requests()
        .await
        .expect("request recording is enabled");
    let request = requests
        .iter()
        .find(|r| r.url.path() == request_path)
        .expect("request was sent");
    serde_json::from_slice(&request.body).expect("body is JSON")
}

#[tokio::test]
async fn shared_key_signs_group_requests_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/groups/new"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"group_id": 1})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/posts/1/report"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "success"})))
        .expect(1)
        .mount(&server)
        .await;

    let (groups, posts) = shared_key_clients_for(&server);

    groups
        .create_group(&GroupSettings::new("crabs"))
        .await
        .unwrap();
    posts
        .report_post(1, &ReportPostOptions::new(2, 3))
        .await
        .unwrap();

    let signer = groups.inner().signer();

    let group_body = recorded_body(&server, "/v3/groups/new").await;
    let ts = group_body["timestamp"].as_i64().unwrap();
    assert_eq!(
        group_body["signed_info"],
        signer.sign_with_shared_key(DEVICE_UUID, ts).unwrap()
    );
    assert_ne!(group_body["signed_info"], signer.sign(DEVICE_UUID, ts).unwrap());

    let post_body = recorded_body(&server, "/v3/posts/1/report").await;
    let ts = post_body["timestamp"].as_i64().unwrap();
    assert_eq!(post_body["signed_info"], signer.sign(DEVICE_UUID, ts).unwrap());
    assert_ne!(
        post_body["signed_info"],
        signer.sign_with_shared_key(DEVICE_UUID, ts).unwrap()
    );
}
