//! Post content shared by new posts, reposts and thread posts.

use serde::Serialize;
use serde_json::{Map, Value};
use yaylib_client::{Error, Result};

use crate::kinds::PostType;
use crate::message_tags::{MessageTag, TaggedText};

/// Most attachments a single post may carry.
pub const MAX_ATTACHMENTS: usize = 9;

/// What a post says and carries.
///
/// Unset fields are omitted from the request. `message_tags` is always sent,
/// as an empty list when there are no mentions.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PostContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_reply_to: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mention_ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    /// Resolved to URL metadata before sending.
    #[serde(skip)]
    pub shared_url: Option<String>,
    pub message_tags: Vec<MessageTag>,
    /// Uploaded image file names, in display order.
    #[serde(skip)]
    pub attachments: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_file_name: Option<String>,
}

impl PostContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain text post.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Text with mentions; replaces both `text` and `message_tags`.
    pub fn tagged(mut self, tagged: TaggedText) -> Self {
        let (text, tags) = tagged.build();
        self.text = Some(text);
        self.message_tags = tags;
        self
    }

    pub fn font_size(mut self, font_size: i32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn color(mut self, color: i32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn in_reply_to(mut self, post_id: i64) -> Self {
        self.in_reply_to = Some(post_id);
        self
    }

    pub fn group_id(mut self, group_id: i64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn mention_ids(mut self, ids: Vec<i64>) -> Self {
        self.mention_ids = Some(ids);
        self
    }

    /// Turn the post into a survey with these choices.
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    pub fn shared_url(mut self, url: impl Into<String>) -> Self {
        self.shared_url = Some(url.into());
        self
    }

    pub fn attachment(mut self, filename: impl Into<String>) -> Self {
        self.attachments.push(filename.into());
        self
    }

    pub fn video_file_name(mut self, filename: impl Into<String>) -> Self {
        self.video_file_name = Some(filename.into());
        self
    }

    /// Content type derived from the fields that are set.
    ///
    /// The first match wins: survey, shared URL, video, image, text.
    pub fn post_type(&self) -> PostType {
        infer_post_type(self, non_empty(&self.shared_url))
    }

    /// Serialize into a request body.
    ///
    /// `shared_url` is the resolved metadata, or `None` to leave it out.
    pub(crate) fn to_body(&self, shared_url: Option<Value>) -> Result<Map<String, Value>> {
        let post_type = infer_post_type(self, shared_url.is_some());
        let mut body = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        body.insert("post_type".into(), Value::String(post_type.as_str().into()));
        if let Some(shared_url) = shared_url {
            body.insert("shared_url".into(), shared_url);
        }
        insert_numbered(&mut body, "attachment", &self.attachments, MAX_ATTACHMENTS)?;
        Ok(body)
    }
}

fn infer_post_type(content: &PostContent, has_shared_url: bool) -> PostType {
    if content.choices.as_ref().is_some_and(|c| !c.is_empty()) {
        PostType::Survey
    } else if has_shared_url {
        PostType::ShareableUrl
    } else if non_empty(&content.video_file_name) {
        PostType::Video
    } else if content.attachments.first().is_some_and(|f| !f.is_empty()) {
        PostType::Image
    } else {
        PostType::Text
    }
}

fn non_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Write file names as `{prefix}_filename`, `{prefix}_2_filename`, ...
pub(crate) fn insert_numbered(
    body: &mut Map<String, Value>,
    prefix: &str,
    filenames: &[String],
    max: usize,
) -> Result<()> {
    if filenames.len() > max {
        return Err(Error::invalid_argument(format!(
            "at most {max} {prefix} files are allowed, got {}",
            filenames.len()
        )));
    }
    for (index, filename) in filenames.iter().enumerate() {
        let key = if index == 0 {
            format!("{prefix}_filename")
        } else {
            format!("{prefix}_{}_filename", index + 1)
        };
        body.insert(key, Value::String(filename.clone()));
    }
    Ok(())
}
