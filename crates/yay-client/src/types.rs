//! Response types shared by several resource families.

use serde::{Deserialize, Serialize};

/// Generic `{"result": "success"}` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApiResult {
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
}

impl ApiResult {
    /// Returns true if the server reported success.
    pub fn is_success(&self) -> bool {
        self.result.as_deref() == Some("success")
    }
}

/// A user as embedded in group, member, and post responses.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub profile_icon: Option<String>,
    #[serde(default)]
    pub profile_icon_thumbnail: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gender: Option<i32>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub followers_count: Option<i64>,
    #[serde(default)]
    pub followings_count: Option<i64>,
    #[serde(default)]
    pub posts_count: Option<i64>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub is_following: Option<bool>,
    #[serde(default)]
    pub created_at: Option<i64>,
}
