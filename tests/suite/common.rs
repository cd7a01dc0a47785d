#![allow(dead_code)]

use wiremock::MockServer;
use yaylib::{ClientConfig, Credentials, GroupClient, PostClient, YayClient};

pub const API_KEY: &str = "integration-api-key";
pub const DEVICE_UUID: &str = "integration-device";
pub const SHARED_KEY: &str = "integration-shared-key";

pub fn credentials() -> Credentials {
    Credentials::new(API_KEY, DEVICE_UUID).with_access_token("integration-token")
}

/// A client pointed at a wiremock server.
pub fn client_for(server: &MockServer) -> YayClient {
    let config = ClientConfig::builder()
        .with_base_url(server.uri())
        .with_compression(false)
        .build();
    YayClient::with_config(credentials(), config).expect("client should build")
}

pub fn clients_for(server: &MockServer) -> (GroupClient, PostClient) {
    let client = client_for(server);
    (GroupClient::new(client.clone()), PostClient::new(client))
}

/// Like [`clients_for`], with a shared signing key configured.
pub fn shared_key_clients_for(server: &MockServer) -> (GroupClient, PostClient) {
    let config = ClientConfig::builder()
        .with_base_url(server.uri())
        .with_compression(false)
        .build();
    let client = YayClient::with_config(credentials().with_shared_key(SHARED_KEY), config)
        .expect("client should build");
    (GroupClient::new(client.clone()), PostClient::new(client))
}

/// Credentials from the environment for the live suite.
///
/// Panics with a clear message rather than silently skipping.
pub fn live_credentials() -> Credentials {
    match Credentials::from_env() {
        Ok(creds) => creds,
        Err(e) => panic!(
            "live tests need YAY_API_KEY and YAY_DEVICE_UUID (and usually YAY_ACCESS_TOKEN): {e}"
        ),
    }
}
