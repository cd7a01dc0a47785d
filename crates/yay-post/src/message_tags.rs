//! Post text with user mentions.
//!
//! A mention is a span of the text plus a `message_tags` entry pointing at
//! it. Offsets and lengths count characters, not bytes.

use serde::{Deserialize, Serialize};

/// One tagged span inside a post's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub user_id: i64,
    pub offset: usize,
    pub length: usize,
}

impl MessageTag {
    /// A user mention covering `length` characters starting at `offset`.
    pub fn user(user_id: i64, offset: usize, length: usize) -> Self {
        Self {
            tag_type: "user".to_string(),
            user_id,
            offset,
            length,
        }
    }
}

/// Builder for text that mixes plain segments and mentions.
///
/// ```rust,ignore
/// let (text, tags) = TaggedText::new()
///     .text("thanks ")
///     .mention(42, "@alice")
///     .text("!")
///     .build();
///
/// assert_eq!(text, "thanks @alice!");
/// assert_eq!(tags[0].offset, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaggedText {
    text: String,
    chars: usize,
    tags: Vec<MessageTag>,
}

impl TaggedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append plain text.
    pub fn text(mut self, segment: &str) -> Self {
        self.push(segment);
        self
    }

    /// Append a mention of `user_id` displayed as `display`.
    pub fn mention(mut self, user_id: i64, display: &str) -> Self {
        let offset = self.chars;
        let length = self.push(display);
        if length > 0 {
            self.tags.push(MessageTag::user(user_id, offset, length));
        }
        self
    }

    /// The accumulated text and its tags.
    pub fn build(self) -> (String, Vec<MessageTag>) {
        (self.text, self.tags)
    }

    fn push(&mut self, segment: &str) -> usize {
        let count = segment.chars().count();
        self.text.push_str(segment);
        self.chars += count;
        count
    }
}
