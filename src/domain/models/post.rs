#[cfg(test)]
#[path = "post_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::Emotion;

/// A community post as served by the backend. Only `post_id` and `content`
/// are guaranteed, everything else falls back to a display default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upvotes: Option<u64>,
}

impl Post {
    pub fn display_emotion(&self) -> Emotion {
        return Emotion::for_label(self.emotion.as_deref());
    }

    pub fn display_upvotes(&self) -> u64 {
        return self.upvotes.unwrap_or(0);
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub content: String,
    pub emotion: String,
    pub session_id: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub session_id: String,
    #[serde(default)]
    pub ai_response: Option<String>,
    pub similar_posts: Vec<Post>,
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpvoteResponse {
    pub upvotes: u64,
}
