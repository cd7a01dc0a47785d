use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yaylib::post::{PostContent, PostPage, TaggedText, TimelineOptions};

use crate::common::clients_for;

#[tokio::test]
async fn post_with_forbidden_link_still_posts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/posts/url_metadata"))
        .and(query_param("url", "http://example.com"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"result": "error", "message": "blocked"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v3/posts/new"))
        .and(body_partial_json(json!({"post_type": "text", "text": "read this"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 900, "text": "read this"})))
        .expect(1)
        .mount(&server)
        .await;

    let (_, posts) = clients_for(&server);
    let post = posts
        .create_post(&PostContent::text("read this").shared_url("http://example.com"))
        .await
        .expect("post should go out without the link");
    assert_eq!(post.id, 900);

    let received = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&received[1].body).unwrap();
    assert!(body.get("shared_url").is_none());
}

#[tokio::test]
async fn mention_post_then_read_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/posts/new"))
        .and(body_partial_json(json!({
            "text": "hey @rin",
            "message_tags": [{"type": "user", "user_id": 12, "offset": 4, "length": 4}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 901})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/posts/901"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "post": {"id": 901, "text": "hey @rin", "post_type": "text"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (_, posts) = clients_for(&server);
    let content = PostContent::new().tagged(TaggedText::new().text("hey ").mention(12, "@rin"));
    let created = posts.create_post(&content).await.unwrap();
    let fetched = posts.get_post(created.id).await.unwrap();

    assert_eq!(fetched.post_type.as_deref(), Some("text"));
}

#[tokio::test]
async fn timeline_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/posts/timeline"))
        .and(query_param("from_post_id", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "posts": [{"id": 49}, {"id": 48}]
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/posts/user_timeline"))
        .and(query_param("user_id", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"posts": []})))
        .mount(&server)
        .await;

    let (_, posts) = clients_for(&server);
    let page = posts
        .get_timeline(&TimelineOptions {
            from_post_id: Some(50),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![49, 48]);

    let user_posts = posts
        .get_user_timeline(7, PostPage::default(), None)
        .await
        .unwrap();
    assert!(user_posts.posts.is_empty());
}

#[tokio::test]
async fn delete_all_posts_when_none_exist() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/posts/delete_all_post"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"result": "error"})))
        .expect(1)
        .mount(&server)
        .await;

    let (_, posts) = clients_for(&server);
    posts.delete_all_post().await.unwrap();
}
