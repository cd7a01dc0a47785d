//! Read-only checks against the real API. Ignored by default.

use yaylib::post::{PostPage, TimelineOptions};
use yaylib::{GroupClient, PostClient, YayClient};

use crate::common::live_credentials;

fn live_clients() -> (GroupClient, PostClient) {
    let client = YayClient::new(live_credentials()).expect("client should build");
    (GroupClient::new(client.clone()), PostClient::new(client))
}

#[tokio::test]
#[ignore]
async fn live_timeline_loads() {
    yaylib::init_tracing();
    let (_, posts) = live_clients();

    let timeline = posts
        .get_timeline(&TimelineOptions {
            number: Some(5),
            ..Default::default()
        })
        .await
        .expect("timeline should load");
    assert!(timeline.posts.len() <= 5);
}

#[tokio::test]
#[ignore]
async fn live_my_posts_and_groups() {
    yaylib::init_tracing();
    let (groups, posts) = live_clients();

    posts
        .get_my_posts(PostPage::new().number(5), None)
        .await
        .expect("own posts should load");
    groups
        .get_create_group_quota()
        .await
        .expect("group quota should load");
}
