//! Request options for post endpoints.
//!
//! Body options serialize with unset fields skipped; query options build a
//! [`Query`] that only carries the fields that were set.

use serde::Serialize;
use serde_json::{Map, Value};
use yaylib_client::{Query, Result};

use crate::content::insert_numbered;
use crate::kinds::{CallType, PostType, TimelineOrder};
use crate::message_tags::MessageTag;

const MAX_CALL_ATTACHMENTS: usize = 9;
const MAX_SCREENSHOTS: usize = 4;

/// Body of `create_call_post`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CallPostOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_type: Option<CallType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joinable_by: Option<String>,
    pub message_tags: Vec<MessageTag>,
    #[serde(skip)]
    pub attachments: Vec<String>,
}

impl CallPostOptions {
    pub(crate) fn to_body(&self) -> Result<Map<String, Value>> {
        let mut body = to_object(self)?;
        insert_numbered(&mut body, "attachment", &self.attachments, MAX_CALL_ATTACHMENTS)?;
        Ok(body)
    }
}

/// Body of `create_share_post`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct SharePostOptions {
    pub shareable_type: String,
    pub shareable_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
}

impl SharePostOptions {
    pub fn new(shareable_type: impl Into<String>, shareable_id: i64) -> Self {
        Self {
            shareable_type: shareable_type.into(),
            shareable_id,
            ..Default::default()
        }
    }
}

/// Body of `report_post`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ReportPostOptions {
    pub opponent_id: i64,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Up to four uploaded screenshot file names.
    #[serde(skip)]
    pub screenshots: Vec<String>,
}

impl ReportPostOptions {
    pub fn new(opponent_id: i64, category_id: i64) -> Self {
        Self {
            opponent_id,
            category_id,
            ..Default::default()
        }
    }

    pub(crate) fn to_body(&self) -> Result<Map<String, Value>> {
        let mut body = to_object(self)?;
        insert_numbered(&mut body, "screenshot", &self.screenshots, MAX_SCREENSHOTS)?;
        Ok(body)
    }
}

/// Body of `update_post`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UpdatePostOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i32>,
    pub message_tags: Vec<MessageTag>,
}

/// Filters for `get_timeline`.
///
/// `noreply_mode = Some(true)` switches to the no-reply timeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineOptions {
    pub noreply_mode: Option<bool>,
    pub from_post_id: Option<i64>,
    pub number: Option<i64>,
    pub order_by: Option<TimelineOrder>,
    pub experiment_older_age_rules: Option<bool>,
    pub shared_interest_categories: Option<bool>,
    pub mxn: Option<i64>,
    pub en: Option<i64>,
    pub vn: Option<i64>,
    pub reduce_selfie: Option<bool>,
    pub custom_generation_range: Option<bool>,
}

impl TimelineOptions {
    pub(crate) fn path(&self) -> &'static str {
        if self.noreply_mode == Some(true) {
            "/v2/posts/noreply_timeline"
        } else {
            "/v2/posts/timeline"
        }
    }

    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("noreply_mode", self.noreply_mode)
            .opt("from_post_id", self.from_post_id)
            .opt("number", self.number)
            .opt("order_by", self.order_by)
            .opt("experiment_older_age_rules", self.experiment_older_age_rules)
            .opt("shared_interest_categories", self.shared_interest_categories)
            .opt("mxn", self.mxn)
            .opt("en", self.en)
            .opt("vn", self.vn)
            .opt("reduce_selfie", self.reduce_selfie)
            .opt("custom_generation_range", self.custom_generation_range)
    }
}

/// Filters for `get_following_timeline`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FollowingTimelineOptions {
    /// Pagination cursor, sent as `from`.
    pub from: Option<String>,
    pub only_root: Option<bool>,
    pub order_by: Option<TimelineOrder>,
    pub number: Option<i64>,
    pub mxn: Option<i64>,
    pub reduce_selfie: Option<bool>,
    pub custom_generation_range: Option<bool>,
}

impl FollowingTimelineOptions {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("from", self.from.as_deref())
            .opt("only_root", self.only_root)
            .opt("order_by", self.order_by)
            .opt("number", self.number)
            .opt("mxn", self.mxn)
            .opt("reduce_selfie", self.reduce_selfie)
            .opt("custom_generation_range", self.custom_generation_range)
    }
}

/// Filters for the call timelines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallTimelineOptions {
    pub group_id: Option<i64>,
    pub from_timestamp: Option<i64>,
    pub number: Option<i64>,
    pub category_id: Option<i64>,
    pub call_type: Option<CallType>,
    pub include_circle_call: Option<bool>,
    pub cross_generation: Option<bool>,
    pub exclude_recent_gomimushi: Option<bool>,
    pub shared_interest_categories: Option<bool>,
}

impl CallTimelineOptions {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("group_id", self.group_id)
            .opt("from_timestamp", self.from_timestamp)
            .opt("number", self.number)
            .opt("category_id", self.category_id)
            .opt("call_type", self.call_type)
            .opt("include_circle_call", self.include_circle_call)
            .opt("cross_generation", self.cross_generation)
            .opt("exclude_recent_gomimushi", self.exclude_recent_gomimushi)
            .opt("shared_interest_categories", self.shared_interest_categories)
    }
}

/// Filters for `get_conversation`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversationOptions {
    pub group_id: Option<i64>,
    pub thread_id: Option<i64>,
    pub from_post_id: Option<i64>,
    pub number: Option<i64>,
    pub reverse: Option<bool>,
}

impl ConversationOptions {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("group_id", self.group_id)
            .opt("thread_id", self.thread_id)
            .opt("from_post_id", self.from_post_id)
            .opt("number", self.number)
            .opt("reverse", self.reverse)
    }
}

/// Filters for `get_group_timeline`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupTimelineOptions {
    pub from_post_id: Option<i64>,
    pub reverse: Option<bool>,
    pub post_type: Option<PostType>,
    pub number: Option<i64>,
    pub only_root: Option<bool>,
}

impl GroupTimelineOptions {
    pub(crate) fn to_query(&self, group_id: i64) -> Query {
        Query::new()
            .param("group_id", group_id)
            .opt("from_post_id", self.from_post_id)
            .opt("reverse", self.reverse)
            .opt("post_type", self.post_type)
            .opt("number", self.number)
            .opt("only_root", self.only_root)
    }
}

/// Cursor and page size shared by most post listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostPage {
    pub from_post_id: Option<i64>,
    pub number: Option<i64>,
}

impl PostPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_post_id(mut self, id: i64) -> Self {
        self.from_post_id = Some(id);
        self
    }

    pub fn number(mut self, number: i64) -> Self {
        self.number = Some(number);
        self
    }

    pub(crate) fn apply(&self, query: Query) -> Query {
        query
            .opt("from_post_id", self.from_post_id)
            .opt("number", self.number)
    }
}

fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_timeline_path_switches_on_noreply() {
        assert_eq!(TimelineOptions::default().path(), "/v2/posts/timeline");
        let noreply = TimelineOptions {
            noreply_mode: Some(true),
            ..Default::default()
        };
        assert_eq!(noreply.path(), "/v2/posts/noreply_timeline");
        let explicit_false = TimelineOptions {
            noreply_mode: Some(false),
            ..Default::default()
        };
        assert_eq!(explicit_false.path(), "/v2/posts/timeline");
    }

    #[test]
    fn test_timeline_query_uses_wire_values() {
        let query = TimelineOptions {
            number: Some(0),
            order_by: Some(TimelineOrder::Popular),
            ..Default::default()
        }
        .to_query();

        assert_eq!(
            query.pairs(),
            &[
                ("number".to_string(), "0".to_string()),
                ("order_by".to_string(), "popular".to_string()),
            ]
        );
    }

    #[test]
    fn test_call_timeline_call_type() {
        let query = CallTimelineOptions {
            call_type: Some(CallType::Voice),
            ..Default::default()
        }
        .to_query();
        assert_eq!(query.get("call_type"), Some("voice"));
        assert_eq!(query.pairs().len(), 1);
    }

    #[test]
    fn test_report_body_screenshots() {
        let mut options = ReportPostOptions::new(3, 1);
        options.screenshots = vec!["a.png".into(), "b.png".into()];
        let body = Value::Object(options.to_body().unwrap());

        assert_eq!(
            body,
            json!({
                "opponent_id": 3,
                "category_id": 1,
                "screenshot_filename": "a.png",
                "screenshot_2_filename": "b.png"
            })
        );
    }

    #[test]
    fn test_report_rejects_extra_screenshots() {
        let mut options = ReportPostOptions::new(3, 1);
        options.screenshots = (0..5).map(|i| format!("{i}.png")).collect();
        assert!(options.to_body().is_err());
    }

    #[test]
    fn test_call_post_body() {
        let options = CallPostOptions {
            call_type: Some(CallType::Video),
            attachments: vec!["bg.jpg".into()],
            ..Default::default()
        };
        let body = Value::Object(options.to_body().unwrap());
        assert_eq!(
            body,
            json!({"call_type": "video", "message_tags": [], "attachment_filename": "bg.jpg"})
        );
    }

    #[test]
    fn test_group_timeline_query() {
        let query = GroupTimelineOptions {
            post_type: Some(PostType::Image),
            ..Default::default()
        }
        .to_query(4);
        assert_eq!(query.get("group_id"), Some("4"));
        assert_eq!(query.get("post_type"), Some("image"));
        assert!(!query.contains_key("reverse"));
    }
}
